use std::path::Path;
use std::sync::Arc;

use rand::Rng;

use crate::config::DashboardConfig;
use crate::data::aggregate::{SortOrder, aggregate_rows};
use crate::data::cache::DatasetCache;
use crate::data::filter::filter_rows;
use crate::data::histogram::ScoreHistogram;
use crate::data::loader::LoadedDataset;
use crate::data::model::AggregateRow;
use crate::data::sampler::{SignalCard, sample_cards};
use crate::roulette::{Spin, SpinFrame, country_pool};

// ---------------------------------------------------------------------------
// Derived dashboard
// ---------------------------------------------------------------------------

/// Everything rendered for one set of inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalReport {
    /// Articles matching the target.
    pub filtered_count: usize,
    /// Ranked per-source table.
    pub rows: Vec<AggregateRow>,
    /// Leading ranked rows with an average, for the comparison chart.
    pub chart_rows: Vec<AggregateRow>,
    pub histogram: ScoreHistogram,
    pub cards: Vec<SignalCard>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Dashboard {
    /// The target matched nothing.
    NoSignals,
    Signals(SignalReport),
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full session state, independent of rendering. Inputs change only
/// through the setters, and every setter recomputes `dashboard`.
pub struct AppState {
    pub config: DashboardConfig,

    /// Loaded dataset (possibly empty with an error).
    pub dataset: Arc<LoadedDataset>,

    /// Current location filter.
    pub target: String,

    pub sort_order: SortOrder,

    /// Running roulette animation, if any.
    pub spin: Option<Spin>,

    /// Derived view for the current inputs (cached).
    pub dashboard: Dashboard,

    cache: DatasetCache,
}

impl AppState {
    /// Build a session on `config`, loading its data file through the cache.
    pub fn new(config: DashboardConfig) -> Self {
        let mut cache = DatasetCache::new();
        let dataset = cache.get_or_load(&config.data_path);
        Self::with_dataset(config, cache, dataset)
    }

    fn with_dataset(
        config: DashboardConfig,
        cache: DatasetCache,
        dataset: Arc<LoadedDataset>,
    ) -> Self {
        let mut state = AppState {
            target: config.default_target.clone(),
            config,
            dataset,
            sort_order: SortOrder::default(),
            spin: None,
            dashboard: Dashboard::NoSignals,
            cache,
        };
        state.recompute(&mut rand::rng());
        state
    }

    /// Build a session around an already-loaded dataset.
    pub fn from_dataset(config: DashboardConfig, dataset: LoadedDataset) -> Self {
        Self::with_dataset(config, DatasetCache::new(), Arc::new(dataset))
    }

    /// Error message from the last load, if it failed.
    pub fn status_message(&self) -> Option<&str> {
        self.dataset.error.as_deref()
    }

    /// Load another file (through the cache) and recompute.
    pub fn open(&mut self, path: &Path) {
        self.dataset = self.cache.get_or_load(path);
        self.recompute(&mut rand::rng());
    }

    pub fn set_target(&mut self, target: impl Into<String>) {
        let target = target.into();
        if target != self.target {
            self.target = target;
            self.recompute(&mut rand::rng());
        }
    }

    pub fn set_sort_order(&mut self, order: SortOrder) {
        if order != self.sort_order {
            self.sort_order = order;
            self.recompute(&mut rand::rng());
        }
    }

    /// Run one full pass: filter → aggregate → histogram → sample.
    pub fn recompute<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let table = &self.dataset.table;
        let filtered = filter_rows(table, &self.target);
        log::debug!(
            "Recomputing for target {:?}: {} of {} articles match",
            self.target,
            filtered.len(),
            table.len()
        );

        if filtered.is_empty() {
            self.dashboard = Dashboard::NoSignals;
            return;
        }

        let rows = aggregate_rows(table, &filtered, self.sort_order, self.config.top_n);
        if let Some(top) = rows.first() {
            log::debug!("Top ranked source: {top}");
        }
        let chart_rows = rows
            .iter()
            .filter(|r| r.avg_score.is_some())
            .take(self.config.chart_top_n)
            .cloned()
            .collect();
        let scores: Vec<f64> = filtered
            .iter()
            .filter_map(|&i| table.articles.get(i)?.sentiment_score)
            .collect();
        let histogram = ScoreHistogram::from_scores(&scores, self.config.histogram_bins);
        let cards = sample_cards(table, &filtered, self.config.card_count, rng);

        self.dashboard = Dashboard::Signals(SignalReport {
            filtered_count: filtered.len(),
            rows,
            chart_rows,
            histogram,
            cards,
        });
    }

    // -- Roulette --

    /// Countries the roulette draws from.
    pub fn country_pool(&self) -> Vec<String> {
        country_pool(&self.dataset.table, &self.config.fallback_countries)
    }

    /// Start a spin at time `now` (seconds). Ignored while one is running.
    pub fn start_spin<R: Rng + ?Sized>(&mut self, now: f64, rng: &mut R) {
        if self.spin.is_some() {
            return;
        }
        let pool = self.country_pool();
        self.spin = Spin::start(
            &pool,
            self.config.spin_frames,
            self.config.spin_step(),
            now,
            rng,
        );
        if let Some(spin) = &self.spin {
            log::debug!("Roulette spinning towards {}", spin.landing());
        }
    }

    /// Value to show in the roulette window at `now`. Commits the target
    /// once the spin has landed.
    pub fn advance_spin(&mut self, now: f64) -> String {
        let landed = match &self.spin {
            None => return self.target.clone(),
            Some(spin) => match spin.poll(now) {
                SpinFrame::Rolling(value) => return value.to_string(),
                SpinFrame::Landed(value) => value.to_string(),
            },
        };
        self.spin = None;
        log::info!("Roulette landed on {landed}");
        self.set_target(landed.clone());
        landed
    }

    pub fn is_spinning(&self) -> bool {
        self.spin.is_some()
    }
}
