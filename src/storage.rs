use crate::models::Article;
use anyhow::{Context, Result};
use csv::WriterBuilder;
use std::borrow::Cow;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Separator used when flattening an article's topics into one CSV cell.
pub const TOPIC_SEPARATOR: &str = "; ";

/// Save articles as CSV with header.
///
/// Text cells starting with `=`, `+`, `-` or `@` get a leading `'` so
/// spreadsheet tools do not evaluate them as formulas.
pub fn save_csv<P: AsRef<Path>>(articles: &[Article], path: P) -> Result<()> {
    let path = path.as_ref();
    let mut wtr = WriterBuilder::new()
        .from_path(path)
        .with_context(|| format!("create {}", path.display()))?;
    wtr.write_record(["title", "excerpt", "url", "topics"])?;
    for a in articles {
        let topics = a.topics.join(TOPIC_SEPARATOR);
        wtr.write_record([
            &*guard_formula(&a.title),
            &*guard_formula(a.excerpt.as_deref().unwrap_or("")),
            &*guard_formula(a.url.as_deref().unwrap_or("")),
            &*guard_formula(&topics),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save articles as pretty JSON array.
pub fn save_json<P: AsRef<Path>>(articles: &[Article], path: P) -> Result<()> {
    let path = path.as_ref();
    let mut f = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let s = serde_json::to_string_pretty(articles)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}

/// Write a rendered page to disk, creating parent directories.
pub fn write_page<P: AsRef<Path>>(contents: &str, path: P) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create {}", parent.display()))?;
    }
    std::fs::write(path, contents).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

fn guard_formula(cell: &str) -> Cow<'_, str> {
    match cell.chars().next() {
        Some('=' | '+' | '-' | '@') => Cow::Owned(format!("'{}", cell)),
        _ => Cow::Borrowed(cell),
    }
}
