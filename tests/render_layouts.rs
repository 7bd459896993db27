use chrono::NaiveDate;
use daily_digest::models::{Article, Dataset};
use daily_digest::page::{EMPTY_MESSAGE, PageModel, PageOptions, build_page};
use daily_digest::palette::tag_colors;
use daily_digest::prefs::Theme;
use daily_digest::render::{Layout, LayoutKind, ListLayout, SidebarLayout, TextLayout, render};
use daily_digest::source::{DataLoadError, LOAD_FAILED_MESSAGE};

fn page(topic: Option<&str>) -> PageModel {
    let data = Dataset {
        topics: vec!["Наука".into(), "R&D".into()],
        articles: vec![
            Article::new("<script>alert(1)</script>")
                .with_excerpt("Tom & Jerry")
                .with_url("https://example.org/a?x=1&y=\"2\"")
                .with_topics(["Наука", "R&D"]),
            Article::new("Без ссылки").with_topics(["Наука"]),
        ],
    };
    build_page(
        &data,
        &PageOptions {
            topic: topic.map(str::to_string),
            date: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
            ..PageOptions::default()
        },
    )
}

#[test]
fn list_page_escapes_feed_text() {
    let html = ListLayout.render(&page(None), Theme::Light);
    assert!(html.starts_with("<!doctype html>"));
    assert!(!html.contains("<script>alert(1)</script>"));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(html.contains("Tom &amp; Jerry"));
    assert!(html.contains("R&amp;D"));
    assert!(html.contains("&quot;2&quot;"));
}

#[test]
fn list_page_has_cards_tags_and_links() {
    let p = page(None);
    let html = ListLayout.render(&p, Theme::Dark);
    assert!(html.contains("data-theme=\"dark\""));
    assert_eq!(html.matches("<article class=\"card\">").count(), 2);
    // only the article with a URL gets a read link
    assert_eq!(html.matches("target=\"_blank\" rel=\"noopener\"").count(), 1);
    assert!(html.contains("Читать"));
    assert!(html.contains(&tag_colors("Наука", 0).css_style()));
    assert!(html.contains(&tag_colors("R&D", 1).css_style()));
    assert!(html.contains("Обновляется ежедневно · 15 июня"));
    assert!(html.contains("© 2024"));
}

#[test]
fn active_topic_is_highlighted() {
    let html = ListLayout.render(&page(Some("наука")), Theme::Light);
    assert_eq!(html.matches("topic-link active").count(), 1);
    assert!(html.contains("href=\"/?topic=%D0%9D%D0%B0%D1%83%D0%BA%D0%B0\">Наука</a>"));
    assert!(html.contains("<a class=\"topic-link\" href=\"/\">Все</a>"));
}

#[test]
fn sidebar_page_lists_headlines() {
    let html = SidebarLayout.render(&page(None), Theme::Light);
    assert!(html.contains("sidebar-left"));
    assert!(html.contains("sidebar-right"));
    assert!(html.contains("<li>Без ссылки</li>"));
    assert_eq!(html.matches("<article class=\"card\">").count(), 2);
}

#[test]
fn empty_and_error_states_render_notice() {
    let empty = ListLayout.render(&page(Some("Спорт")), Theme::Light);
    assert!(empty.contains(EMPTY_MESSAGE));
    assert!(!empty.contains("<article"));

    let err = DataLoadError::Decode {
        origin: "data.json".into(),
        source: serde_json::from_str::<serde_json::Value>("{").unwrap_err(),
    };
    let failed = PageModel::failed(&err, NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
    for kind in [LayoutKind::List, LayoutKind::Sidebar, LayoutKind::Text] {
        assert!(render(kind, &failed, Theme::Light).contains(LOAD_FAILED_MESSAGE));
    }
}

#[test]
fn text_layout_is_plain() {
    let out = TextLayout.render(&page(Some("Наука")), Theme::Light);
    assert!(out.starts_with("Обновляется ежедневно · 15 июня\n"));
    assert!(out.contains("[Наука]"));
    assert!(out.contains("#Наука (#"));
    assert!(!out.contains("<article"));
    assert!(!out.contains("&lt;"));
}

#[test]
fn layouts_are_interchangeable() {
    let p = page(None);
    let names: Vec<&str> = [LayoutKind::List, LayoutKind::Sidebar, LayoutKind::Text]
        .into_iter()
        .map(|k| k.layout().name())
        .collect();
    assert_eq!(names, ["list", "sidebar", "text"]);
    assert_eq!(
        render(LayoutKind::Sidebar, &p, Theme::Light),
        SidebarLayout.render(&p, Theme::Light)
    );
    assert_eq!("SIDEBAR".parse::<LayoutKind>().unwrap(), LayoutKind::Sidebar);
    assert!("grid".parse::<LayoutKind>().is_err());
}
