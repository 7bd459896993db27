use super::Layout;
use super::html::{articles_section, close_document, date_header, open_document, topic_nav};
use crate::page::PageModel;
use crate::prefs::Theme;

/// Single-list page: topic bar, then the daily cards.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListLayout;

impl Layout for ListLayout {
    fn name(&self) -> &'static str {
        "list"
    }

    fn render(&self, page: &PageModel, theme: Theme) -> String {
        let mut out = String::with_capacity(8 * 1024);
        open_document(&mut out, "Ежедневная подборка", theme, "");
        date_header(&mut out, page);
        topic_nav(&mut out, &page.topics);
        out.push_str("<main>\n");
        articles_section(&mut out, page);
        out.push_str("</main>\n");
        close_document(&mut out, page);
        out
    }
}
