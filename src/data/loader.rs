use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{Array, ArrayRef, AsArray};
use arrow::compute::cast;
use arrow::datatypes::{DataType, Float64Type};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::model::{Article, ArticleTable};

pub const LOCATION_COLUMN: &str = "location_name";
pub const SCORE_COLUMN: &str = "sentiment_score";
pub const URL_COLUMN: &str = "source_url";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("unsupported file extension: .{0}")]
    UnsupportedFormat(String),
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("row {row}: {reason}")]
    BadRecord { row: usize, reason: String },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Outcome of loading the dashboard's source file. Always usable: on failure
/// `table` is empty and `error` carries the message to show.
#[derive(Debug, Clone, Default)]
pub struct LoadedDataset {
    pub path: PathBuf,
    pub table: Arc<ArticleTable>,
    pub error: Option<String>,
}

impl LoadedDataset {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Load `path`, degrading any failure to an empty table plus an error
/// message.
pub fn load_dataset(path: &Path) -> LoadedDataset {
    match load_file(path) {
        Ok(table) => {
            log::info!("Loaded {} articles from {}", table.len(), path.display());
            LoadedDataset {
                path: path.to_path_buf(),
                table: Arc::new(table),
                error: None,
            }
        }
        Err(e) => {
            log::error!("Failed to load {}: {e:#}", path.display());
            LoadedDataset {
                path: path.to_path_buf(),
                table: Arc::new(ArticleTable::default()),
                error: Some(format!("Error loading {}: {e:#}", path.display())),
            }
        }
    }
}

/// Load an article table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with `location_name`, `sentiment_score`, `source_url`
/// * `.json`    – `[{ "location_name": ..., "sentiment_score": ..., "source_url": ... }, ...]`
/// * `.parquet` – the same three columns
pub fn load_file(path: &Path) -> Result<ArticleTable> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => Err(LoadError::UnsupportedFormat(other.to_string()).into()),
    }
}

// ---------------------------------------------------------------------------
// Cell coercion
// ---------------------------------------------------------------------------

/// Parse a score cell. Blank, non-numeric and non-finite values are `None`.
pub fn parse_score(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_text(raw: &str) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Short rows are accepted; their missing trailing cells load as null.
pub fn csv_reader() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.flexible(true);
    builder
}

fn load_csv(path: &Path) -> Result<ArticleTable> {
    let mut reader = csv_reader()
        .from_path(path)
        .with_context(|| format!("opening CSV {}", path.display()))?;
    read_csv(&mut reader)
}

/// Read articles from any CSV source. Extra columns are ignored.
pub fn read_csv<R: std::io::Read>(reader: &mut csv::Reader<R>) -> Result<ArticleTable> {
    let headers = reader.headers().context("reading CSV headers")?.clone();
    let column = |name: &'static str| {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or(LoadError::MissingColumn(name))
    };
    let loc_idx = column(LOCATION_COLUMN)?;
    let score_idx = column(SCORE_COLUMN)?;
    let url_idx = column(URL_COLUMN)?;

    let mut articles = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        articles.push(Article {
            location_name: record.get(loc_idx).and_then(parse_text),
            sentiment_score: record.get(score_idx).and_then(parse_score),
            source_url: record.get(url_idx).and_then(parse_text),
        });
    }

    Ok(ArticleTable::from_articles(articles))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "location_name": "India", "sentiment_score": -3.5, "source_url": "https://..." },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<ArticleTable> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading JSON {}", path.display()))?;
    parse_json(&text)
}

pub fn parse_json(text: &str) -> Result<ArticleTable> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;
    let records = root.as_array().context("Expected top-level JSON array")?;

    let mut articles = Vec::with_capacity(records.len());
    for (i, rec) in records.iter().enumerate() {
        let obj = rec.as_object().ok_or_else(|| LoadError::BadRecord {
            row: i,
            reason: "not a JSON object".to_string(),
        })?;
        articles.push(Article {
            location_name: obj.get(LOCATION_COLUMN).and_then(json_text),
            sentiment_score: obj.get(SCORE_COLUMN).and_then(json_score),
            source_url: obj.get(URL_COLUMN).and_then(json_text),
        });
    }

    Ok(ArticleTable::from_articles(articles))
}

fn json_text(val: &JsonValue) -> Option<String> {
    match val {
        JsonValue::String(s) => parse_text(s),
        JsonValue::Null => None,
        other => Some(other.to_string()),
    }
}

fn json_score(val: &JsonValue) -> Option<f64> {
    match val {
        JsonValue::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        JsonValue::String(s) => parse_score(s),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with the three article columns.
///
/// Text columns may be any type castable to Utf8; the score column may be
/// any numeric or string type, with unparseable cells read as null. Works
/// with files written by both **Pandas** and **Polars**.
fn load_parquet(path: &Path) -> Result<ArticleTable> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening parquet file {}", path.display()))?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut articles = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let schema = batch.schema();
        let column = |name: &'static str| -> Result<ArrayRef> {
            let idx = schema
                .index_of(name)
                .map_err(|_| LoadError::MissingColumn(name))?;
            Ok(batch.column(idx).clone())
        };

        let locations = cast(&column(LOCATION_COLUMN)?, &DataType::Utf8)
            .context("casting location_name to text")?;
        let scores = cast(&column(SCORE_COLUMN)?, &DataType::Float64)
            .context("casting sentiment_score to float")?;
        let urls = cast(&column(URL_COLUMN)?, &DataType::Utf8)
            .context("casting source_url to text")?;

        let locations = locations
            .as_string_opt::<i32>()
            .context("location_name is not a string column")?;
        let urls = urls
            .as_string_opt::<i32>()
            .context("source_url is not a string column")?;
        let scores = scores
            .as_primitive_opt::<Float64Type>()
            .context("sentiment_score is not a float column")?;

        for row in 0..batch.num_rows() {
            let text = |arr: &arrow::array::StringArray| {
                if arr.is_null(row) {
                    None
                } else {
                    parse_text(arr.value(row))
                }
            };
            let score = if scores.is_null(row) {
                None
            } else {
                Some(scores.value(row)).filter(|v| v.is_finite())
            };
            articles.push(Article {
                location_name: text(locations),
                sentiment_score: score,
                source_url: text(urls),
            });
        }
    }

    Ok(ArticleTable::from_articles(articles))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn csv_table(text: &str) -> Result<ArticleTable> {
        let mut reader = csv_reader().from_reader(text.as_bytes());
        read_csv(&mut reader)
    }

    #[test]
    fn score_coercion() {
        assert_eq!(parse_score("-3.25"), Some(-3.25));
        assert_eq!(parse_score(" 7 "), Some(7.0));
        assert_eq!(parse_score(""), None);
        assert_eq!(parse_score("n/a"), None);
        assert_eq!(parse_score("NaN"), None);
        assert_eq!(parse_score("inf"), None);
    }

    #[test]
    fn csv_keeps_rows_with_bad_scores() {
        let table = csv_table(
            "location_name,sentiment_score,source_url,extra\n\
             India,-6,https://a.com/1,x\n\
             India,oops,https://a.com/2,y\n\
             ,3,,z\n",
        )
        .unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.articles[0].sentiment_score, Some(-6.0));
        assert_eq!(table.articles[1].sentiment_score, None);
        assert_eq!(table.articles[1].location_name.as_deref(), Some("India"));
        assert_eq!(table.articles[2].location_name, None);
        assert_eq!(table.articles[2].source_url, None);
    }

    #[test]
    fn csv_columns_in_any_order() {
        let table = csv_table("source_url,location_name,sentiment_score\nhttps://b.com,Peru,1.5\n")
            .unwrap();
        assert_eq!(
            table.articles[0],
            Article::new(Some("Peru"), Some(1.5), Some("https://b.com"))
        );
    }

    #[test]
    fn csv_missing_column_is_an_error() {
        let err = csv_table("location_name,source_url\nIndia,https://a.com\n").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LoadError>(),
            Some(LoadError::MissingColumn(SCORE_COLUMN))
        ));
    }

    #[test]
    fn csv_short_row_loads_missing_cells_as_null() {
        let table = csv_table("location_name,sentiment_score,source_url\nIndia,-6,a.com\nIndia,2\n")
            .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.articles[1].location_name.as_deref(), Some("India"));
        assert_eq!(table.articles[1].sentiment_score, Some(2.0));
        assert_eq!(table.articles[1].source_url, None);
    }

    #[test]
    fn json_records() {
        let table = parse_json(
            r#"[
                {"location_name": "India", "sentiment_score": -2.5, "source_url": "https://a.com"},
                {"location_name": "India", "sentiment_score": "4", "source_url": null},
                {"location_name": null, "sentiment_score": "bad"}
            ]"#,
        )
        .unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.articles[0].sentiment_score, Some(-2.5));
        assert_eq!(table.articles[1].sentiment_score, Some(4.0));
        assert_eq!(table.articles[1].source_url, None);
        assert_eq!(table.articles[2], Article::default());
    }

    #[test]
    fn json_rejects_non_objects() {
        assert!(parse_json("[1, 2]").is_err());
        assert!(parse_json("{}").is_err());
    }

    #[test]
    fn unsupported_extension() {
        let err = load_file(Path::new("articles.xlsx")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LoadError>(),
            Some(LoadError::UnsupportedFormat(ext)) if ext == "xlsx"
        ));
    }

    #[test]
    fn missing_file_degrades_to_empty_table() {
        let loaded = load_dataset(Path::new("definitely/not/here/data.csv"));
        assert!(!loaded.is_ok());
        assert!(loaded.table.is_empty());
        assert!(loaded.error.unwrap().contains("data.csv"));
    }
}
