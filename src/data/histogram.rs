// ---------------------------------------------------------------------------
// Equal-width histogram of raw article scores
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl HistogramBin {
    pub fn center(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreHistogram {
    pub bins: Vec<HistogramBin>,
}

impl ScoreHistogram {
    /// Bin `scores` into `bin_count` equal-width bins over their range.
    /// The maximum lands in the last bin. A single distinct value gets one
    /// unit-wide bin centred on it.
    pub fn from_scores(scores: &[f64], bin_count: usize) -> Self {
        let finite: Vec<f64> = scores.iter().copied().filter(|s| s.is_finite()).collect();
        if finite.is_empty() || bin_count == 0 {
            return Self::default();
        }

        let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
        let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let range = max - min;

        if range.abs() < f64::EPSILON {
            return ScoreHistogram {
                bins: vec![HistogramBin {
                    start: min - 0.5,
                    end: min + 0.5,
                    count: finite.len(),
                }],
            };
        }

        let width = range / bin_count as f64;
        let mut bins: Vec<HistogramBin> = (0..bin_count)
            .map(|i| HistogramBin {
                start: min + width * i as f64,
                end: min + width * (i + 1) as f64,
                count: 0,
            })
            .collect();

        for s in finite {
            let idx = (((s - min) / width) as usize).min(bin_count - 1);
            bins[idx].count += 1;
        }

        ScoreHistogram { bins }
    }

    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_every_score() {
        let scores = [-10.0, -5.0, 0.0, 0.5, 5.0, 10.0];
        let hist = ScoreHistogram::from_scores(&scores, 4);
        assert_eq!(hist.bins.len(), 4);
        assert_eq!(hist.total(), scores.len());
        assert_eq!(hist.bins[0].start, -10.0);
        assert_eq!(hist.bins[3].end, 10.0);
        // 10.0 is the upper edge and must fall in the last bin
        assert_eq!(hist.bins[3].count, 2);
    }

    #[test]
    fn single_value() {
        let hist = ScoreHistogram::from_scores(&[2.0, 2.0, 2.0], 10);
        assert_eq!(hist.bins.len(), 1);
        assert_eq!(hist.bins[0].count, 3);
        assert_eq!(hist.bins[0].center(), 2.0);
        assert_eq!(hist.bins[0].width(), 1.0);
    }

    #[test]
    fn nothing_to_bin() {
        assert!(ScoreHistogram::from_scores(&[], 10).is_empty());
        assert!(ScoreHistogram::from_scores(&[1.0, 2.0], 0).is_empty());
        assert!(ScoreHistogram::from_scores(&[f64::NAN], 5).is_empty());
    }
}
