use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use arrow::array::{ArrayRef, Float64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// Each outlet has a lean that shifts its scores, so the dashboard shows
/// systemic sources as well as neutral ones.
const OUTLETS: [(&str, f64); 10] = [
    ("https://www.reuters.com/world", 0.0),
    ("https://www.bbc.co.uk/news", -0.5),
    ("https://edition.cnn.com/world", -1.5),
    ("https://www.aljazeera.com/news", -4.5),
    ("https://www.rt.com/news", -6.0),
    ("https://www.foxnews.com/world", 2.0),
    ("https://www.thehindu.com/news", 5.0),
    ("https://timesofindia.indiatimes.com", 6.5),
    ("https://www.dw.com/en", 1.0),
    ("https://apnews.com/hub/world-news", 0.5),
];

const LOCATIONS: [&str; 8] = [
    "India", "USA", "Russia", "UK", "Brazil", "Nigeria", "Japan", "British Indian Ocean Territory",
];

#[derive(Debug, Serialize)]
struct Row {
    location_name: Option<String>,
    /// Kept as text so a few deliberately malformed scores can be written.
    sentiment_score: String,
    source_url: Option<String>,
}

fn generate_rows(count: usize, rng: &mut StdRng) -> Vec<Row> {
    (0..count)
        .map(|i| {
            let (url, lean) = OUTLETS.choose(rng).copied().unwrap_or(OUTLETS[0]);
            let location = LOCATIONS.choose(rng).copied().unwrap_or("India");
            let score: f64 = (lean + rng.random_range(-4.0..4.0)).clamp(-10.0, 10.0);

            // Sprinkle in the dirty cells a database export tends to carry.
            let sentiment_score = match i % 97 {
                13 => String::new(),
                41 => "n/a".to_string(),
                _ => format!("{score:.3}"),
            };
            let source_url = match i % 113 {
                7 => None,
                19 => Some("not a url".to_string()),
                _ => Some(format!("{url}/{}", rng.random_range(10_000..99_999))),
            };
            let location_name = (i % 151 != 3).then(|| location.to_string());

            Row {
                location_name,
                sentiment_score,
                source_url,
            }
        })
        .collect()
}

fn write_csv(path: &Path, rows: &[Row]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating CSV")?;
    for row in rows {
        writer.serialize(row).context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV")?;
    Ok(())
}

fn write_json(path: &Path, rows: &[Row]) -> Result<()> {
    let file = std::fs::File::create(path).context("creating JSON")?;
    serde_json::to_writer_pretty(file, rows).context("writing JSON")?;
    Ok(())
}

fn write_parquet(path: &Path, rows: &[Row]) -> Result<()> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("location_name", DataType::Utf8, true),
        Field::new("sentiment_score", DataType::Float64, true),
        Field::new("source_url", DataType::Utf8, true),
    ]));

    let locations: StringArray = rows.iter().map(|r| r.location_name.as_deref()).collect();
    let scores: Float64Array = rows
        .iter()
        .map(|r| r.sentiment_score.parse::<f64>().ok())
        .collect();
    let urls: StringArray = rows.iter().map(|r| r.source_url.as_deref()).collect();

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(locations) as ArrayRef,
            Arc::new(scores) as ArrayRef,
            Arc::new(urls) as ArrayRef,
        ],
    )
    .context("building record batch")?;

    let file = std::fs::File::create(path).context("creating parquet file")?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating parquet writer")?;
    writer.write(&batch).context("writing record batch")?;
    writer.close().context("closing parquet writer")?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let path = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("data.csv"));
    let count: usize = match args.next() {
        Some(n) => n.parse().with_context(|| format!("invalid row count '{n}'"))?,
        None => 2_000,
    };

    let mut rng = StdRng::seed_from_u64(42);
    let rows = generate_rows(count, &mut rng);

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    match ext.as_str() {
        "csv" => write_csv(&path, &rows)?,
        "json" => write_json(&path, &rows)?,
        "parquet" | "pq" => write_parquet(&path, &rows)?,
        other => bail!("Unsupported output extension: .{other}"),
    }

    log::info!("Wrote {} articles to {}", rows.len(), path.display());
    println!("Wrote {} articles to {}", rows.len(), path.display());
    Ok(())
}
