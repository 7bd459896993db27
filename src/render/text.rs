use super::Layout;
use crate::page::{PageModel, PageState};
use crate::prefs::Theme;
use std::fmt::Write;

/// Plain-text rendering for terminals. Tag colours are shown as the hex of
/// their foreground.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextLayout;

impl Layout for TextLayout {
    fn name(&self) -> &'static str {
        "text"
    }

    fn render(&self, page: &PageModel, _theme: Theme) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", page.date_label);

        let topics: Vec<String> = page
            .topics
            .iter()
            .map(|t| {
                if t.active {
                    format!("[{}]", t.label)
                } else {
                    t.label.clone()
                }
            })
            .collect();
        if !topics.is_empty() {
            let _ = writeln!(out, "{}", topics.join(" · "));
        }
        out.push('\n');

        match &page.state {
            PageState::Ready { cards } => {
                for (i, card) in cards.iter().enumerate() {
                    let _ = writeln!(out, "{}. {}", i + 1, card.title);
                    if !card.tags.is_empty() {
                        let tags: Vec<String> = card
                            .tags
                            .iter()
                            .map(|t| format!("#{} ({})", t.label, t.colors.foreground.to_rgb8().hex()))
                            .collect();
                        let _ = writeln!(out, "   {}", tags.join(" "));
                    }
                    if let Some(excerpt) = &card.excerpt {
                        let _ = writeln!(out, "   {}", excerpt);
                    }
                    if let Some(url) = &card.url {
                        let _ = writeln!(out, "   {}", url);
                    }
                }
            }
            PageState::Empty { message } | PageState::Error { message } => {
                let _ = writeln!(out, "{}", message);
            }
        }

        let _ = write!(out, "\n{}\n", page.copyright);
        out
    }
}
