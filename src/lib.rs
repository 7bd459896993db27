//! daily_digest
//!
//! A small Rust library for rendering a news digest landing page from a
//! static JSON feed. Pairs with the `digest` CLI.
//!
//! ### Features
//! - Deterministic daily selection: a Fisher–Yates shuffle seeded by the UTC
//!   date, identical for every reader on the same day
//! - Stable pastel tag colours derived from the tag text and its position
//! - Case- and whitespace-insensitive topic filtering, including `?topic=`
//!   query strings
//! - Interchangeable layouts (single list, two sidebars, plain text)
//! - CSV/JSON export of the daily selection
//!
//! ### Example
//! ```no_run
//! use daily_digest::{DataSource, Loader, PageOptions, build_page};
//! use daily_digest::render::{LayoutKind, render};
//! use daily_digest::prefs::Theme;
//!
//! let data = Loader::default().load(&DataSource::parse("data.json"))?;
//! let opts = PageOptions { topic: Some("Наука".into()), ..PageOptions::default() };
//! let page = build_page(&data, &opts);
//! let html = render(LayoutKind::List, &page, Theme::Light);
//! daily_digest::storage::write_page(&html, "index.html")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod filter;
pub mod hash;
pub mod models;
pub mod page;
pub mod palette;
pub mod prefs;
pub mod prng;
pub mod render;
pub mod sampler;
pub mod source;
pub mod storage;

pub use models::{Article, Dataset};
pub use page::{PageModel, PageOptions, build_page, load_page};
pub use sampler::{select_daily, select_daily_on};
pub use source::{DataLoadError, DataSource, Loader};
