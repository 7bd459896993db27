//! Presentation layers for a [`PageModel`].
//!
//! - `List`: single-column page, topic bar above the daily cards
//! - `Sidebar`: topics on the left, cards in the centre, headlines on the right
//! - `Text`: plain terminal output
//!
//! Layouts are interchangeable: they all consume the same model and none of
//! them re-run selection or colouring.

pub mod html;
pub mod list;
pub mod sidebar;
pub mod text;

pub use list::ListLayout;
pub use sidebar::SidebarLayout;
pub use text::TextLayout;

use crate::page::PageModel;
use crate::prefs::Theme;
use std::str::FromStr;

/// A render destination for the digest.
pub trait Layout {
    /// Short identifier, e.g. `"list"`.
    fn name(&self) -> &'static str;

    /// Render the complete output document.
    fn render(&self, page: &PageModel, theme: Theme) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutKind {
    #[default]
    List,
    Sidebar,
    Text,
}

impl LayoutKind {
    pub fn layout(self) -> Box<dyn Layout> {
        match self {
            LayoutKind::List => Box::new(ListLayout),
            LayoutKind::Sidebar => Box::new(SidebarLayout),
            LayoutKind::Text => Box::new(TextLayout),
        }
    }
}

impl FromStr for LayoutKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "list" => Ok(LayoutKind::List),
            "sidebar" => Ok(LayoutKind::Sidebar),
            "text" | "txt" => Ok(LayoutKind::Text),
            other => anyhow::bail!("unknown layout: {}", other),
        }
    }
}

/// Render `page` with the layout selected by `kind`.
pub fn render(kind: LayoutKind, page: &PageModel, theme: Theme) -> String {
    kind.layout().render(page, theme)
}
