use serde::Serialize;

/// Five-way performance bucket driving the feedback text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PerformanceTier {
    Excellent,
    VeryGood,
    Good,
    Moderate,
    NeedsImprovement,
}

impl PerformanceTier {
    /// Total over all reals; boundaries are half-open on the lower bound,
    /// so exactly 8.0 is Excellent and exactly 7.0 is VeryGood.
    pub fn from_score(score: f64) -> Self {
        if score >= 8.0 {
            Self::Excellent
        } else if score >= 7.0 {
            Self::VeryGood
        } else if score >= 6.0 {
            Self::Good
        } else if score >= 5.0 {
            Self::Moderate
        } else {
            Self::NeedsImprovement
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::VeryGood => "Very Good",
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::NeedsImprovement => "Needs Improvement",
        }
    }
}

/// Four-way color-coding bucket. Deliberately separate from
/// [`PerformanceTier`]: the visual partition and the feedback partition are
/// tuned independently and must not be derived from one another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleTier {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl StyleTier {
    pub fn from_score(score: f64) -> Self {
        if score >= 8.0 {
            Self::Excellent
        } else if score >= 7.0 {
            Self::Good
        } else if score >= 6.0 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
        }
    }
}
