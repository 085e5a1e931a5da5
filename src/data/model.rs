use std::collections::BTreeSet;
use std::fmt;

use crate::classify::BiasLabel;

// ---------------------------------------------------------------------------
// Article – one row of the source table
// ---------------------------------------------------------------------------

/// A single sentiment-scored article ("signal").
///
/// Every column is optional: blank cells, unparseable scores and missing
/// URLs are kept as `None` so row counts stay stable through the pipeline.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Article {
    /// Country / region label the article is geotagged with.
    pub location_name: Option<String>,
    /// Sentiment score; `None` when blank, non-numeric or non-finite.
    pub sentiment_score: Option<f64>,
    /// Link to the article. May be malformed.
    pub source_url: Option<String>,
}

impl Article {
    pub fn new(
        location_name: Option<&str>,
        sentiment_score: Option<f64>,
        source_url: Option<&str>,
    ) -> Self {
        Article {
            location_name: location_name.map(str::to_string),
            sentiment_score,
            source_url: source_url.map(str::to_string),
        }
    }
}

// ---------------------------------------------------------------------------
// ArticleTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full loaded dataset. Read-only once built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleTable {
    pub articles: Vec<Article>,
}

impl ArticleTable {
    pub fn from_articles(articles: Vec<Article>) -> Self {
        ArticleTable { articles }
    }

    /// Number of articles.
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Sorted distinct non-null location names.
    pub fn locations(&self) -> BTreeSet<&str> {
        self.articles
            .iter()
            .filter_map(|a| a.location_name.as_deref())
            .collect()
    }
}

// ---------------------------------------------------------------------------
// AggregateRow – one summarised source
// ---------------------------------------------------------------------------

/// Per-source summary of the filtered articles.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateRow {
    /// Grouping key. `None` groups every article without a URL.
    pub source_url: Option<String>,
    /// Mean of the non-null scores, `None` if the group has none.
    pub avg_score: Option<f64>,
    /// Articles in the group, null scores included.
    pub article_count: usize,
    /// Display name derived from the URL host.
    pub channel: String,
    pub label: BiasLabel,
}

impl fmt::Display for AggregateRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.avg_score {
            Some(avg) => write!(
                f,
                "{} {avg:.2} ({} articles, {})",
                self.channel, self.article_count, self.label
            ),
            None => write!(
                f,
                "{} n/a ({} articles, {})",
                self.channel, self.article_count, self.label
            ),
        }
    }
}
