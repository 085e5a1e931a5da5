use std::time::Duration;

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::data::model::ArticleTable;

/// Countries offered when the loaded table has no locations at all.
pub const FALLBACK_COUNTRIES: [&str; 4] = ["India", "USA", "Russia", "UK"];

pub const DEFAULT_SPIN_FRAMES: usize = 12;
pub const DEFAULT_SPIN_STEP: Duration = Duration::from_millis(80);

/// Sorted distinct locations of `table`, or `fallback` when it has none.
pub fn country_pool(table: &ArticleTable, fallback: &[String]) -> Vec<String> {
    let pool: Vec<String> = table.locations().into_iter().map(str::to_string).collect();
    if pool.is_empty() {
        fallback.to_vec()
    } else {
        pool
    }
}

// ---------------------------------------------------------------------------
// Spin animation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinFrame<'a> {
    /// Still animating; show this value.
    Rolling(&'a str),
    /// Finished; this value becomes the new target.
    Landed(&'a str),
}

/// A roulette spin. All display values are drawn up front; only the final
/// pick has any effect on the session.
#[derive(Debug, Clone, PartialEq)]
pub struct Spin {
    frames: Vec<String>,
    landing: String,
    started_at: f64,
    step: Duration,
}

impl Spin {
    /// Start a spin at time `now` (seconds). Returns `None` for an empty pool.
    pub fn start<R: Rng + ?Sized>(
        pool: &[String],
        frame_count: usize,
        step: Duration,
        now: f64,
        rng: &mut R,
    ) -> Option<Self> {
        let landing = pool.choose(rng)?.clone();
        let frames = (0..frame_count)
            .filter_map(|_| pool.choose(rng).cloned())
            .collect();
        Some(Spin {
            frames,
            landing,
            started_at: now,
            step,
        })
    }

    pub fn landing(&self) -> &str {
        &self.landing
    }

    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    /// Total animation length.
    pub fn duration(&self) -> Duration {
        let frames = u32::try_from(self.frames.len()).unwrap_or(u32::MAX);
        self.step.checked_mul(frames).unwrap_or(Duration::MAX)
    }

    /// What to display at time `now` (seconds, same clock as `start`).
    pub fn poll(&self, now: f64) -> SpinFrame<'_> {
        let elapsed = Duration::from_secs_f64((now - self.started_at).max(0.0));
        if elapsed >= self.duration() || self.step.is_zero() {
            return SpinFrame::Landed(&self.landing);
        }
        let idx = (elapsed.as_secs_f64() / self.step.as_secs_f64()) as usize;
        match self.frames.get(idx) {
            Some(value) => SpinFrame::Rolling(value),
            None => SpinFrame::Landed(&self.landing),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::data::model::Article;

    fn fallback() -> Vec<String> {
        FALLBACK_COUNTRIES.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn pool_from_table_is_sorted_and_distinct() {
        let table = ArticleTable::from_articles(vec![
            Article::new(Some("Peru"), None, None),
            Article::new(Some("Chile"), None, None),
            Article::new(Some("Peru"), None, None),
            Article::new(None, None, None),
        ]);
        assert_eq!(country_pool(&table, &fallback()), ["Chile", "Peru"]);
    }

    #[test]
    fn empty_table_uses_fallback() {
        assert_eq!(
            country_pool(&ArticleTable::default(), &fallback()),
            ["India", "USA", "Russia", "UK"]
        );
    }

    #[test]
    fn spin_rolls_then_lands() {
        let pool = vec!["Chile".to_string(), "Peru".to_string()];
        let mut rng = StdRng::seed_from_u64(11);
        let spin = Spin::start(&pool, DEFAULT_SPIN_FRAMES, DEFAULT_SPIN_STEP, 10.0, &mut rng).unwrap();

        assert_eq!(spin.frames().len(), DEFAULT_SPIN_FRAMES);
        assert!(pool.iter().any(|p| p == spin.landing()));

        match spin.poll(10.0) {
            SpinFrame::Rolling(v) => assert_eq!(v, spin.frames()[0]),
            SpinFrame::Landed(_) => panic!("landed too early"),
        }
        match spin.poll(10.0 + 0.081) {
            SpinFrame::Rolling(v) => assert_eq!(v, spin.frames()[1]),
            SpinFrame::Landed(_) => panic!("landed too early"),
        }
        assert_eq!(spin.poll(10.0 + 0.97), SpinFrame::Landed(spin.landing()));
        assert_eq!(spin.poll(100.0), SpinFrame::Landed(spin.landing()));
    }

    #[test]
    fn empty_pool_cannot_spin() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(Spin::start(&[], 12, DEFAULT_SPIN_STEP, 0.0, &mut rng).is_none());
    }

    #[test]
    fn zero_frames_land_immediately() {
        let pool = vec!["UK".to_string()];
        let mut rng = StdRng::seed_from_u64(0);
        let spin = Spin::start(&pool, 0, DEFAULT_SPIN_STEP, 0.0, &mut rng).unwrap();
        assert_eq!(spin.poll(0.0), SpinFrame::Landed("UK"));
    }

    #[test]
    fn oversized_timing_saturates_instead_of_overflowing() {
        let pool = vec!["Chile".to_string(), "Peru".to_string()];
        let mut rng = StdRng::seed_from_u64(3);
        let step = Duration::from_millis(u64::MAX);
        let spin = Spin::start(&pool, 2000, step, 0.0, &mut rng).unwrap();

        assert_eq!(spin.duration(), Duration::MAX);
        match spin.poll(0.5) {
            SpinFrame::Rolling(v) => assert_eq!(v, spin.frames()[0]),
            SpinFrame::Landed(_) => panic!("landed too early"),
        }
    }
}
