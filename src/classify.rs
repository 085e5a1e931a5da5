use std::fmt;

use eframe::egui::Color32;

// ---------------------------------------------------------------------------
// Bias classification of a source's average score
// ---------------------------------------------------------------------------

/// Average scores strictly below this are systemically negative.
pub const NEGATIVE_THRESHOLD: f64 = -4.0;
/// Average scores strictly above this are systemically positive.
pub const POSITIVE_THRESHOLD: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BiasLabel {
    SystemicNegative,
    SystemicPositive,
    NeutralAlignment,
}

/// Label a source by its average score. Boundaries and `None` are neutral.
pub fn classify(avg_score: Option<f64>) -> BiasLabel {
    match avg_score {
        Some(s) if s < NEGATIVE_THRESHOLD => BiasLabel::SystemicNegative,
        Some(s) if s > POSITIVE_THRESHOLD => BiasLabel::SystemicPositive,
        _ => BiasLabel::NeutralAlignment,
    }
}

impl BiasLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            BiasLabel::SystemicNegative => "SYSTEMIC NEGATIVE",
            BiasLabel::SystemicPositive => "SYSTEMIC POSITIVE",
            BiasLabel::NeutralAlignment => "NEUTRAL ALIGNMENT",
        }
    }

    pub fn color(&self) -> Color32 {
        match self {
            BiasLabel::SystemicNegative => Color32::from_rgb(0xf8, 0x51, 0x49),
            BiasLabel::SystemicPositive => Color32::from_rgb(0x3f, 0xb9, 0x50),
            BiasLabel::NeutralAlignment => Color32::from_rgb(0x8b, 0x94, 0x9e),
        }
    }
}

impl fmt::Display for BiasLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Card colour bands on raw article scores
// ---------------------------------------------------------------------------

/// Coarse four-way banding of a single article's raw score, used only to
/// colour sample cards. Independent of [`BiasLabel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreBand {
    /// `< -5`
    Hostile,
    /// `[-5, 0)`
    Negative,
    /// `[0, 5)`
    Mild,
    /// `>= 5`
    Favourable,
    /// No score.
    Unscored,
}

impl ScoreBand {
    pub fn of(score: Option<f64>) -> Self {
        match score {
            None => ScoreBand::Unscored,
            Some(s) if s < -5.0 => ScoreBand::Hostile,
            Some(s) if s < 0.0 => ScoreBand::Negative,
            Some(s) if s < 5.0 => ScoreBand::Mild,
            Some(_) => ScoreBand::Favourable,
        }
    }

    pub fn color(&self) -> Color32 {
        match self {
            ScoreBand::Hostile => Color32::from_rgb(0xf8, 0x51, 0x49),
            ScoreBand::Negative => Color32::from_rgb(0xd2, 0x99, 0x22),
            ScoreBand::Mild => Color32::from_rgb(0x58, 0xa6, 0xff),
            ScoreBand::Favourable => Color32::from_rgb(0x3f, 0xb9, 0x50),
            ScoreBand::Unscored => Color32::GRAY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_strict() {
        assert_eq!(classify(Some(-4.0)), BiasLabel::NeutralAlignment);
        assert_eq!(classify(Some(-4.01)), BiasLabel::SystemicNegative);
        assert_eq!(classify(Some(4.0)), BiasLabel::NeutralAlignment);
        assert_eq!(classify(Some(4.01)), BiasLabel::SystemicPositive);
        assert_eq!(classify(Some(0.0)), BiasLabel::NeutralAlignment);
    }

    #[test]
    fn missing_average_is_neutral() {
        assert_eq!(classify(None), BiasLabel::NeutralAlignment);
    }

    #[test]
    fn extreme_values() {
        assert_eq!(classify(Some(f64::MIN)), BiasLabel::SystemicNegative);
        assert_eq!(classify(Some(f64::MAX)), BiasLabel::SystemicPositive);
    }

    #[test]
    fn card_bands() {
        assert_eq!(ScoreBand::of(Some(-5.01)), ScoreBand::Hostile);
        assert_eq!(ScoreBand::of(Some(-5.0)), ScoreBand::Negative);
        assert_eq!(ScoreBand::of(Some(-0.1)), ScoreBand::Negative);
        assert_eq!(ScoreBand::of(Some(0.0)), ScoreBand::Mild);
        assert_eq!(ScoreBand::of(Some(4.99)), ScoreBand::Mild);
        assert_eq!(ScoreBand::of(Some(5.0)), ScoreBand::Favourable);
        assert_eq!(ScoreBand::of(None), ScoreBand::Unscored);
    }

    #[test]
    fn card_bands_use_their_own_thresholds() {
        assert_eq!(ScoreBand::of(Some(-4.5)), ScoreBand::Negative);
        assert_eq!(classify(Some(-4.5)), BiasLabel::SystemicNegative);
    }
}
