use super::Layout;
use super::html::{articles_section, close_document, date_header, open_document, topic_nav};
use crate::page::PageModel;
use crate::prefs::Theme;
use html_escape::encode_text;
use std::fmt::Write;

const SIDEBAR_CSS: &str = r#"
.layout { display: grid; grid-template-columns: 200px 1fr 240px; gap: 16px; }
.layout .topics { flex-direction: column; padding: 24px 0 24px 24px; }
.headlines { padding: 24px 24px 24px 0; font-size: 14px; }
.headlines ol { padding-left: 18px; margin: 0; }
@media (max-width: 900px) { .layout { grid-template-columns: 1fr; } }
"#;

/// Two-sidebar page: topics left, cards centre, every matching headline right.
#[derive(Debug, Clone, Copy, Default)]
pub struct SidebarLayout;

impl Layout for SidebarLayout {
    fn name(&self) -> &'static str {
        "sidebar"
    }

    fn render(&self, page: &PageModel, theme: Theme) -> String {
        let mut out = String::with_capacity(12 * 1024);
        open_document(&mut out, "Ежедневная подборка", theme, SIDEBAR_CSS);
        date_header(&mut out, page);
        out.push_str("<div class=\"layout\">\n<aside class=\"sidebar-left\">\n");
        topic_nav(&mut out, &page.topics);
        out.push_str("</aside>\n<main>\n");
        articles_section(&mut out, page);
        out.push_str("</main>\n<aside class=\"sidebar-right headlines\">\n");
        if !page.headlines.is_empty() {
            out.push_str("<ol>\n");
            for title in &page.headlines {
                let _ = writeln!(out, "<li>{}</li>", encode_text(title));
            }
            out.push_str("</ol>\n");
        }
        out.push_str("</aside>\n</div>\n");
        close_document(&mut out, page);
        out
    }
}
