use rand::Rng;
use rand::seq::IndexedRandom;

use super::model::ArticleTable;
use super::source::extract_source_opt;
use crate::classify::ScoreBand;

/// Cards shown under the charts unless configured otherwise.
pub const DEFAULT_CARD_COUNT: usize = 6;

/// One illustrative article drawn from the filtered set.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalCard {
    /// Row of the article in the source table.
    pub row: usize,
    pub channel: String,
    pub score: Option<f64>,
    pub band: ScoreBand,
    pub source_url: Option<String>,
}

impl SignalCard {
    pub fn score_text(&self) -> String {
        match self.score {
            Some(s) => format!("SCORE: {s:.2}"),
            None => "SCORE: N/A".to_string(),
        }
    }
}

/// Draw `min(k, filtered.len())` distinct rows from `filtered` uniformly at
/// random. Display only; never fed back into aggregation.
pub fn sample_cards<R: Rng + ?Sized>(
    table: &ArticleTable,
    filtered: &[usize],
    k: usize,
    rng: &mut R,
) -> Vec<SignalCard> {
    filtered
        .choose_multiple(rng, k)
        .filter_map(|&row| {
            let article = table.articles.get(row)?;
            Some(SignalCard {
                row,
                channel: extract_source_opt(article.source_url.as_deref()),
                score: article.sentiment_score,
                band: ScoreBand::of(article.sentiment_score),
                source_url: article.source_url.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::data::model::Article;

    fn table(n: usize) -> ArticleTable {
        ArticleTable::from_articles(
            (0..n)
                .map(|i| {
                    let url = format!("https://www.outlet{i}.com/story");
                    Article::new(Some("India"), Some(i as f64 - 5.0), Some(url.as_str()))
                })
                .collect(),
        )
    }

    #[test]
    fn samples_without_replacement_from_filtered_rows() {
        let table = table(20);
        let filtered: Vec<usize> = (0..20).step_by(2).collect();
        let mut rng = StdRng::seed_from_u64(7);

        let cards = sample_cards(&table, &filtered, DEFAULT_CARD_COUNT, &mut rng);
        assert_eq!(cards.len(), 6);

        let rows: BTreeSet<usize> = cards.iter().map(|c| c.row).collect();
        assert_eq!(rows.len(), 6);
        assert!(rows.iter().all(|r| r % 2 == 0));
    }

    #[test]
    fn small_sets_return_everything() {
        let table = table(3);
        let mut rng = StdRng::seed_from_u64(1);
        let cards = sample_cards(&table, &[0, 1, 2], DEFAULT_CARD_COUNT, &mut rng);
        let rows: BTreeSet<usize> = cards.iter().map(|c| c.row).collect();
        assert_eq!(rows, BTreeSet::from([0, 1, 2]));
        assert!(sample_cards(&table, &[], DEFAULT_CARD_COUNT, &mut rng).is_empty());
    }

    #[test]
    fn cards_carry_channel_and_band() {
        let table = table(1);
        let mut rng = StdRng::seed_from_u64(3);
        let card = &sample_cards(&table, &[0], 1, &mut rng)[0];
        assert_eq!(card.channel, "OUTLET0.COM");
        assert_eq!(card.score, Some(-5.0));
        assert_eq!(card.band, ScoreBand::Negative);
        assert_eq!(card.score_text(), "SCORE: -5.00");
    }
}
