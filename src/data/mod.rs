/// Data layer: core types, loading, filtering and aggregation.
///
/// Architecture:
/// ```text
///  data.csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐     ┌───────┐
///   │  loader   │ ◄── │ cache │  (path, mtime) → Arc<LoadedDataset>
///   └──────────┘     └───────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ ArticleTable  │  Vec<Article>, immutable
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  location substring → row indices
///   └──────────┘
///        │
///        ├──────────────┬──────────────┐
///        ▼              ▼              ▼
///   ┌───────────┐  ┌───────────┐  ┌─────────┐
///   │ aggregate  │  │ histogram  │  │ sampler  │
///   └───────────┘  └───────────┘  └─────────┘
/// ```

pub mod aggregate;
pub mod cache;
pub mod filter;
pub mod histogram;
pub mod loader;
pub mod model;
pub mod sampler;
pub mod source;
