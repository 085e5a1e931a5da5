use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use super::loader::{LoadedDataset, load_dataset};

/// Identity of a source file: where it lives and when it was last written.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub path: PathBuf,
    pub modified: Option<SystemTime>,
}

impl CacheKey {
    pub fn for_path(path: &Path) -> Self {
        let path = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        let modified = std::fs::metadata(&path).and_then(|m| m.modified()).ok();
        CacheKey { path, modified }
    }
}

// ---------------------------------------------------------------------------
// Process-wide memoised loads
// ---------------------------------------------------------------------------

/// Memoises [`load_dataset`] per [`CacheKey`]. Entries live until the
/// process exits; a rewritten file gets a new key rather than replacing the
/// old entry.
#[derive(Debug, Default)]
pub struct DatasetCache {
    entries: HashMap<CacheKey, Arc<LoadedDataset>>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_load(&mut self, path: &Path) -> Arc<LoadedDataset> {
        self.get_or_load_with(path, load_dataset)
    }

    /// Like [`get_or_load`](Self::get_or_load) with an explicit loader.
    pub fn get_or_load_with<F>(&mut self, path: &Path, loader: F) -> Arc<LoadedDataset>
    where
        F: FnOnce(&Path) -> LoadedDataset,
    {
        let key = CacheKey::for_path(path);
        if let Some(hit) = self.entries.get(&key) {
            log::debug!("Dataset cache hit for {}", key.path.display());
            return Arc::clone(hit);
        }
        let loaded = Arc::new(loader(path));
        self.entries.insert(key, Arc::clone(&loaded));
        loaded
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    use crate::data::model::{Article, ArticleTable};

    fn fake(path: &Path) -> LoadedDataset {
        LoadedDataset {
            path: path.to_path_buf(),
            table: Arc::new(ArticleTable::from_articles(vec![Article::new(
                Some("India"),
                Some(1.0),
                None,
            )])),
            error: None,
        }
    }

    #[test]
    fn loads_once_per_key() {
        let calls = Cell::new(0);
        let mut cache = DatasetCache::new();
        let path = Path::new("no-such-dir/data.csv");

        let first = cache.get_or_load_with(path, |p| {
            calls.set(calls.get() + 1);
            fake(p)
        });
        let second = cache.get_or_load_with(path, |p| {
            calls.set(calls.get() + 1);
            fake(p)
        });

        assert_eq!(calls.get(), 1);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn distinct_paths_are_distinct_entries() {
        let mut cache = DatasetCache::new();
        cache.get_or_load_with(Path::new("a/data.csv"), fake);
        cache.get_or_load_with(Path::new("b/data.csv"), fake);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn failed_loads_are_cached_too() {
        let mut cache = DatasetCache::new();
        let loaded = cache.get_or_load(Path::new("missing/data.csv"));
        assert!(!loaded.is_ok());
        let again = cache.get_or_load(Path::new("missing/data.csv"));
        assert!(Arc::ptr_eq(&loaded, &again));
    }
}
