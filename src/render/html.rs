//! HTML building blocks shared by the page layouts.

use crate::page::{Card, PageModel, PageState, READ_LABEL, TopicLink};
use crate::prefs::Theme;
use html_escape::{encode_double_quoted_attribute, encode_text};
use std::fmt::Write;

const BASE_CSS: &str = r#"
:root { --bg: #fafaf7; --fg: #1d1d1f; --muted: #6b6b70; --card: #ffffff; --line: #e6e6e0; --accent: #2f6fde; }
html[data-theme="dark"] { --bg: #16171a; --fg: #ececef; --muted: #9a9aa2; --card: #1f2024; --line: #2e2f35; --accent: #7aa7ff; }
body { margin: 0; background: var(--bg); color: var(--fg); font: 16px/1.5 system-ui, sans-serif; }
header, footer { padding: 16px 24px; }
.daily-date { color: var(--muted); font-size: 14px; }
.topics { display: flex; flex-wrap: wrap; gap: 8px; padding: 0 24px; }
.topic-link { border: 1px solid var(--line); border-radius: 999px; padding: 2px 12px; color: var(--fg); text-decoration: none; }
.topic-link.active { border-color: var(--accent); color: var(--accent); }
.articles { display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 16px; padding: 24px; }
.card { background: var(--card); border: 1px solid var(--line); border-radius: 12px; padding: 16px; }
.tags { display: flex; gap: 6px; flex-wrap: wrap; }
.tag { border: 1px solid; border-radius: 6px; padding: 0 8px; font-size: 13px; }
.link { color: var(--accent); }
"#;

/// Document start up to and including `<body>`.
pub fn open_document(out: &mut String, title: &str, theme: Theme, extra_css: &str) {
    let _ = write!(
        out,
        "<!doctype html>\n<html lang=\"ru\" data-theme=\"{}\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n<style>{}{}</style>\n</head>\n<body>\n",
        theme.as_str(),
        encode_text(title),
        BASE_CSS,
        extra_css
    );
}

pub fn close_document(out: &mut String, page: &PageModel) {
    let _ = write!(
        out,
        "<footer><span id=\"copyright\">{}</span></footer>\n</body>\n</html>\n",
        encode_text(&page.copyright)
    );
}

pub fn date_header(out: &mut String, page: &PageModel) {
    let _ = writeln!(
        out,
        "<header><p id=\"daily-date\" class=\"daily-date\">{}</p></header>",
        encode_text(&page.date_label)
    );
}

/// The topic menu as a `<nav>`.
pub fn topic_nav(out: &mut String, topics: &[TopicLink]) {
    out.push_str("<nav id=\"topics\" class=\"topics\">\n");
    for t in topics {
        let class = if t.active {
            "topic-link active"
        } else {
            "topic-link"
        };
        let _ = writeln!(
            out,
            "<a class=\"{}\" href=\"{}\">{}</a>",
            class,
            encode_double_quoted_attribute(&t.href),
            encode_text(&t.label)
        );
    }
    out.push_str("</nav>\n");
}

/// Main article area for every page state.
pub fn articles_section(out: &mut String, page: &PageModel) {
    out.push_str("<section id=\"articles\" class=\"articles\">\n");
    match &page.state {
        PageState::Ready { cards } => {
            for card in cards {
                card_html(out, card);
            }
        }
        PageState::Empty { message } | PageState::Error { message } => {
            let _ = writeln!(
                out,
                "<div class=\"card notice\"><p>{}</p></div>",
                encode_text(message)
            );
        }
    }
    out.push_str("</section>\n");
}

pub fn card_html(out: &mut String, card: &Card) {
    out.push_str("<article class=\"card\">\n<div class=\"tags\">");
    for tag in &card.tags {
        let _ = write!(
            out,
            "<span class=\"tag\" style=\"{}\">{}</span>",
            encode_double_quoted_attribute(&tag.colors.css_style()),
            encode_text(&tag.label)
        );
    }
    out.push_str("</div>\n");
    let _ = writeln!(out, "<h3>{}</h3>", encode_text(&card.title));
    if let Some(excerpt) = &card.excerpt {
        let _ = writeln!(out, "<p>{}</p>", encode_text(excerpt));
    }
    out.push_str("<div class=\"actions\">");
    if let Some(url) = &card.url {
        let _ = write!(
            out,
            "<a class=\"link\" href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a>",
            encode_double_quoted_attribute(url),
            READ_LABEL
        );
    }
    out.push_str("</div>\n</article>\n");
}
