use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use super::filter::filter_rows;
use super::model::{AggregateRow, ArticleTable};
use super::source::extract_source_opt;
use crate::classify::classify;

/// Rows kept in the ranked table unless configured otherwise.
pub const DEFAULT_TOP_N: usize = 15;

// ---------------------------------------------------------------------------
// Sort order
// ---------------------------------------------------------------------------

/// Ranking direction for aggregate rows. Sources without any score always
/// rank last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    MostNegativeFirst,
    MostPositiveFirst,
}

impl SortOrder {
    pub const ALL: [SortOrder; 2] = [SortOrder::MostNegativeFirst, SortOrder::MostPositiveFirst];

    pub fn from_descending(descending: bool) -> Self {
        if descending {
            SortOrder::MostPositiveFirst
        } else {
            SortOrder::MostNegativeFirst
        }
    }

    pub fn is_descending(&self) -> bool {
        matches!(self, SortOrder::MostPositiveFirst)
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::MostNegativeFirst => "Most Negative First",
            SortOrder::MostPositiveFirst => "Most Positive First",
        }
    }

    fn compare(&self, a: Option<f64>, b: Option<f64>) -> Ordering {
        match (a, b) {
            (Some(a), Some(b)) => {
                if self.is_descending() {
                    b.total_cmp(&a)
                } else {
                    a.total_cmp(&b)
                }
            }
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Group / aggregate
// ---------------------------------------------------------------------------

#[derive(Default)]
struct Accumulator {
    sum: f64,
    scored: usize,
    rows: usize,
}

impl Accumulator {
    fn mean(&self) -> Option<f64> {
        (self.scored > 0).then(|| self.sum / self.scored as f64)
    }
}

/// Filter `table` by `target`, then summarise per source.
pub fn aggregate(
    table: &ArticleTable,
    target: &str,
    order: SortOrder,
    top_n: usize,
) -> Vec<AggregateRow> {
    let filtered = filter_rows(table, target);
    aggregate_rows(table, &filtered, order, top_n)
}

/// Summarise the already-filtered rows `indices` of `table` per source URL.
///
/// Ties on the average keep ascending URL order, so repeated calls with the
/// same input always agree.
pub fn aggregate_rows(
    table: &ArticleTable,
    indices: &[usize],
    order: SortOrder,
    top_n: usize,
) -> Vec<AggregateRow> {
    let mut groups: BTreeMap<Option<&str>, Accumulator> = BTreeMap::new();
    for article in indices.iter().filter_map(|&i| table.articles.get(i)) {
        let acc = groups.entry(article.source_url.as_deref()).or_default();
        acc.rows += 1;
        if let Some(score) = article.sentiment_score {
            acc.sum += score;
            acc.scored += 1;
        }
    }

    let mut ranked: Vec<(Option<&str>, Option<f64>, usize)> = groups
        .into_iter()
        .map(|(url, acc)| (url, acc.mean(), acc.rows))
        .collect();
    ranked.sort_by(|a, b| order.compare(a.1, b.1));
    ranked.truncate(top_n);

    ranked
        .into_iter()
        .map(|(url, avg_score, article_count)| AggregateRow {
            source_url: url.map(str::to_string),
            avg_score,
            article_count,
            channel: extract_source_opt(url),
            label: classify(avg_score),
        })
        .collect()
}
