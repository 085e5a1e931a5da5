use super::model::ArticleTable;

// ---------------------------------------------------------------------------
// Location filter
// ---------------------------------------------------------------------------

/// Return indices of articles whose `location_name` contains `target`,
/// ignoring case.
///
/// * Articles without a location never match.
/// * An empty target matches every article that has a location.
/// * The target is matched literally, not as a pattern.
pub fn filter_rows(table: &ArticleTable, target: &str) -> Vec<usize> {
    let needle = target.to_lowercase();
    table
        .articles
        .iter()
        .enumerate()
        .filter(|(_, article)| match &article.location_name {
            Some(loc) => loc.to_lowercase().contains(&needle),
            None => false,
        })
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Article;

    fn table() -> ArticleTable {
        ArticleTable::from_articles(vec![
            Article::new(Some("India"), Some(1.0), Some("https://a.com")),
            Article::new(Some("British Indian Ocean Territory"), None, None),
            Article::new(None, Some(3.0), Some("https://b.com")),
            Article::new(Some("United States"), Some(-2.0), Some("https://c.com")),
        ])
    }

    #[test]
    fn case_insensitive_substring() {
        assert_eq!(filter_rows(&table(), "india"), vec![0, 1]);
        assert_eq!(filter_rows(&table(), "STATES"), vec![3]);
    }

    #[test]
    fn empty_target_keeps_located_rows() {
        assert_eq!(filter_rows(&table(), ""), vec![0, 1, 3]);
    }

    #[test]
    fn pattern_characters_are_literal() {
        assert!(filter_rows(&table(), "Ind.a").is_empty());
        assert!(filter_rows(&table(), "(").is_empty());
    }

    #[test]
    fn no_match() {
        assert!(filter_rows(&table(), "Atlantis").is_empty());
        assert!(filter_rows(&ArticleTable::default(), "India").is_empty());
    }
}
