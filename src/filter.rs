//! Topic filtering and the `?topic=` URL parameter.

use crate::models::Article;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Query parameter carrying the topic filter.
pub const TOPIC_PARAM: &str = "topic";

// Characters left unescaped in query values, matching form encoding
const QUERY_SAFE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'*');

/// Case- and whitespace-insensitive comparison key for topics.
pub fn normalize(v: &str) -> String {
    v.trim().to_lowercase()
}

/// An optional topic restriction, stored normalized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicFilter {
    topic: Option<String>,
}

impl TopicFilter {
    /// `None` or an empty string means "all topics".
    pub fn new(raw: Option<&str>) -> Self {
        let topic = raw.filter(|s| !s.is_empty()).map(normalize);
        Self { topic }
    }

    pub fn all() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.topic.is_some()
    }

    /// Normalized topic, if any.
    pub fn topic(&self) -> Option<&str> {
        self.topic.as_deref()
    }

    /// Whether `label` names the same topic as this filter.
    pub fn is_topic(&self, label: &str) -> bool {
        self.topic.as_deref() == Some(normalize(label).as_str())
    }

    pub fn matches(&self, article: &Article) -> bool {
        match &self.topic {
            None => true,
            Some(t) => article.topics.iter().any(|x| normalize(x) == *t),
        }
    }
}

/// Articles passing `filter`, in feed order.
pub fn filter_articles(articles: &[Article], filter: &TopicFilter) -> Vec<Article> {
    articles
        .iter()
        .filter(|a| filter.matches(a))
        .cloned()
        .collect()
}

/// Extract the `topic` value from a URL query string.
///
/// Accepts an optional leading `?`, decodes `+` as a space and
/// percent-escapes as UTF-8. The first occurrence wins.
pub fn topic_from_query(query: &str) -> Option<String> {
    query_param(query, TOPIC_PARAM)
}

/// Value of `key` in a URL query string.
pub fn query_param(query: &str, key: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(k, _)| decode_component(k) == key)
        .map(|(_, v)| decode_component(v))
}

/// Link to `pathname` with `key=value` set. An empty value yields the
/// bare path.
pub fn with_param(pathname: &str, key: &str, value: &str) -> String {
    if value.is_empty() {
        return pathname.to_string();
    }
    format!(
        "{}?{}={}",
        pathname,
        encode_component(key),
        encode_component(value)
    )
}

fn encode_component(s: &str) -> String {
    utf8_percent_encode(s, QUERY_SAFE)
        .to_string()
        .replace("%20", "+")
}

fn decode_component(s: &str) -> String {
    let spaced = s.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}
