use serde::{Deserialize, Serialize};
use std::fmt;

/// Scores at or above this are moderate risk
pub const MODERATE_THRESHOLD: u32 = 30;
/// Scores at or above this are high risk
pub const HIGH_THRESHOLD: u32 = 60;

/// Risk tier derived from the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    /// Classify a score: `<30` low, `[30, 60)` moderate, `>=60` high
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= HIGH_THRESHOLD => RiskTier::High,
            s if s >= MODERATE_THRESHOLD => RiskTier::Moderate,
            _ => RiskTier::Low,
        }
    }

    /// Display label ("Low" / "Moderate" / "High")
    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Moderate => "Moderate",
            RiskTier::High => "High",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            RiskTier::Low => "✅",
            RiskTier::Moderate => "⚠️",
            RiskTier::High => "🚨",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
