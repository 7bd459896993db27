//! Page model: everything a layout needs to draw the digest.
//!
//! Pipeline: feed → topic filter → daily selection → cards with tag colours.
//! Layouts in [`crate::render`] only read a [`PageModel`]; none of them
//! touch the sampler or the palette directly.

use crate::filter::{TOPIC_PARAM, TopicFilter, filter_articles, with_param};
use crate::models::{Article, Dataset};
use crate::palette::{TagColors, tag_colors};
use crate::sampler::{select_daily_on, today_utc};
use crate::source::{DataLoadError, DataSource, Loader};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Articles highlighted per day unless configured otherwise.
pub const DAILY_COUNT_DEFAULT: usize = 6;

/// Label of the trailing "all topics" link.
pub const ALL_TOPICS_LABEL: &str = "Все";

/// Shown when a topic has no articles.
pub const EMPTY_MESSAGE: &str = "По этой теме пока пусто. Попробуйте выбрать другую тему.";

/// Caption of the article link on a card.
pub const READ_LABEL: &str = "Читать";

const MONTHS_GENITIVE: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

/// Inputs of one page build.
#[derive(Debug, Clone, PartialEq)]
pub struct PageOptions {
    /// Raw topic parameter, compared after normalization.
    pub topic: Option<String>,
    pub daily_count: usize,
    /// Calendar day (UTC) that seeds the selection.
    pub date: NaiveDate,
    /// Path used when building topic links.
    pub base_path: String,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            topic: None,
            daily_count: DAILY_COUNT_DEFAULT,
            date: today_utc(),
            base_path: "/".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicLink {
    pub label: String,
    pub href: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tag {
    pub label: String,
    pub colors: TagColors,
}

/// One rendered article.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    pub title: String,
    pub excerpt: Option<String>,
    pub url: Option<String>,
    pub tags: Vec<Tag>,
}

impl Card {
    pub fn from_article(article: &Article) -> Self {
        let tags = article
            .tags()
            .iter()
            .enumerate()
            .map(|(idx, label)| Tag {
                label: label.clone(),
                colors: tag_colors(label, idx),
            })
            .collect();
        Self {
            title: article.title.clone(),
            excerpt: article.excerpt_text().map(str::to_string),
            url: article.url.clone(),
            tags,
        }
    }
}

/// What the main area shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum PageState {
    Ready { cards: Vec<Card> },
    Empty { message: String },
    Error { message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageModel {
    pub date: NaiveDate,
    pub date_label: String,
    pub copyright: String,
    pub topics: Vec<TopicLink>,
    pub active_topic: Option<String>,
    pub state: PageState,
    /// Every article passing the topic filter, for sidebar listings.
    pub headlines: Vec<String>,
}

impl PageModel {
    /// Page for a feed that could not be loaded.
    pub fn failed(err: &DataLoadError, date: NaiveDate) -> Self {
        Self {
            date,
            date_label: daily_label(date),
            copyright: copyright(date),
            topics: Vec::new(),
            active_topic: None,
            state: PageState::Error {
                message: err.user_message().to_string(),
            },
            headlines: Vec::new(),
        }
    }

    /// Cards of a ready page; empty for the other states.
    pub fn cards(&self) -> &[Card] {
        match &self.state {
            PageState::Ready { cards } => cards,
            _ => &[],
        }
    }
}

/// Build the page for `data`.
pub fn build_page(data: &Dataset, opts: &PageOptions) -> PageModel {
    let filter = TopicFilter::new(opts.topic.as_deref());
    let filtered = filter_articles(&data.articles, &filter);

    let count = opts.daily_count.min(filtered.len());
    let daily = select_daily_on(&filtered, count, opts.date);
    log::debug!(
        "page {}: {} of {} articles match, {} selected",
        opts.date,
        filtered.len(),
        data.articles.len(),
        daily.len()
    );

    let state = if daily.is_empty() {
        PageState::Empty {
            message: EMPTY_MESSAGE.to_string(),
        }
    } else {
        PageState::Ready {
            cards: daily.iter().map(Card::from_article).collect(),
        }
    };

    PageModel {
        date: opts.date,
        date_label: daily_label(opts.date),
        copyright: copyright(opts.date),
        topics: topic_links(&data.topics, &filter, &opts.base_path),
        active_topic: opts.topic.clone().filter(|_| filter.is_active()),
        state,
        headlines: filtered.into_iter().map(|a| a.title).collect(),
    }
}

/// Load the feed and build the page. Never fails: a load error becomes
/// the error state and is logged here, once.
pub fn load_page(loader: &Loader, source: &DataSource, opts: &PageOptions) -> PageModel {
    match loader.load(source) {
        Ok(data) => build_page(&data, opts),
        Err(err) => {
            log::error!("{}", err);
            PageModel::failed(&err, opts.date)
        }
    }
}

/// Topic menu: feed topics in order, then the "all topics" link.
pub fn topic_links(topics: &[String], filter: &TopicFilter, base_path: &str) -> Vec<TopicLink> {
    topics
        .iter()
        .map(|t| TopicLink {
            label: t.clone(),
            href: with_param(base_path, TOPIC_PARAM, t),
            active: filter.is_topic(t),
        })
        .chain(std::iter::once(TopicLink {
            label: ALL_TOPICS_LABEL.to_string(),
            href: base_path.to_string(),
            active: false,
        }))
        .collect()
}

/// `"Обновляется ежедневно · 15 июня"`.
pub fn daily_label(date: NaiveDate) -> String {
    let month = MONTHS_GENITIVE[date.month0() as usize];
    format!("Обновляется ежедневно · {:02} {}", date.day(), month)
}

pub fn copyright(date: NaiveDate) -> String {
    format!("© {}", date.year())
}
