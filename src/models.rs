use serde::{Deserialize, Serialize};

/// Number of topics rendered as tags on an article card.
pub const TAG_LIMIT: usize = 3;

/// The static feed: a topic menu plus the article list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default, deserialize_with = "de_vec_or_null")]
    pub topics: Vec<String>,
    #[serde(default, deserialize_with = "de_vec_or_null")]
    pub articles: Vec<Article>,
}

/// One entry of the feed. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Ordered topic labels; uniqueness is up to the feed.
    #[serde(default, deserialize_with = "de_vec_or_null")]
    pub topics: Vec<String>,
}

impl Article {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            excerpt: None,
            url: None,
            topics: Vec::new(),
        }
    }

    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_topics<I, S>(mut self, topics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.topics = topics.into_iter().map(Into::into).collect();
        self
    }

    /// The topics shown as tags: the first [`TAG_LIMIT`] in feed order.
    pub fn tags(&self) -> &[String] {
        &self.topics[..self.topics.len().min(TAG_LIMIT)]
    }

    /// Excerpt text, treating a blank excerpt as absent.
    pub fn excerpt_text(&self) -> Option<&str> {
        self.excerpt.as_deref().filter(|s| !s.is_empty())
    }
}

/// Serde helper: accept a missing field, `null` or an array.
/// Feeds written by hand regularly carry `"topics": null`.
fn de_vec_or_null<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
