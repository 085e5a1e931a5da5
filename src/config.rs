use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::data::aggregate::DEFAULT_TOP_N;
use crate::data::sampler::DEFAULT_CARD_COUNT;
use crate::roulette::{DEFAULT_SPIN_FRAMES, DEFAULT_SPIN_STEP, FALLBACK_COUNTRIES};

/// Optional settings file looked up in the working directory.
pub const CONFIG_FILE: &str = "shadow-network.json";

// ---------------------------------------------------------------------------
// Dashboard settings
// ---------------------------------------------------------------------------

/// Tunables for the dashboard. Every field has a default, so a partial (or
/// absent) settings file is fine.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    /// Article table loaded at start-up.
    pub data_path: PathBuf,
    /// Location filter the session starts with.
    pub default_target: String,
    /// Sources kept in the ranked table.
    pub top_n: usize,
    /// Sources drawn in the comparison chart.
    pub chart_top_n: usize,
    pub card_count: usize,
    pub histogram_bins: usize,
    pub spin_frames: usize,
    pub spin_step_ms: u64,
    pub fallback_countries: Vec<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data.csv"),
            default_target: "India".to_string(),
            top_n: DEFAULT_TOP_N,
            chart_top_n: 10,
            card_count: DEFAULT_CARD_COUNT,
            histogram_bins: 20,
            spin_frames: DEFAULT_SPIN_FRAMES,
            spin_step_ms: DEFAULT_SPIN_STEP.as_millis() as u64,
            fallback_countries: FALLBACK_COUNTRIES.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl DashboardConfig {
    pub fn spin_step(&self) -> Duration {
        Duration::from_millis(self.spin_step_ms)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("parsing dashboard settings")
    }

    /// Read settings from `path`. A missing file yields the defaults; a
    /// malformed one is logged and also yields the defaults.
    pub fn load_or_default(path: &Path) -> Self {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                log::warn!("Cannot read {}: {e}; using defaults", path.display());
                return Self::default();
            }
        };
        match Self::from_json(&text) {
            Ok(config) => {
                log::info!("Loaded settings from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Ignoring {}: {e:#}", path.display());
                Self::default()
            }
        }
    }
}
