use serde::{Deserialize, Serialize};
use crate::recommendation::{PreparationPlan, RiskTier};

/// Complete, display-ready explanation of a risk result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskExplanation {
    pub score: u32,
    pub level: RiskLevel,
    pub interpretation: Interpretation,
    /// Largest contributors first, at most five
    pub top_contributors: Vec<RankedContributor>,
    /// Number of factors that triggered (before truncation)
    pub total_contributors: usize,
    pub plan: PreparationPlan,
    /// Awake-technique warning, only for high-risk airways
    pub high_risk_warning: Option<String>,
    pub disclaimer: String,
}

/// Tier label and icon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskLevel {
    pub tier: RiskTier,
    pub label: String,  // "Low" / "Moderate" / "High"
    pub icon: String,
}

/// Tier interpretation text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interpretation {
    pub headline: String,
    pub detail: String,
}

/// Contributor with its share of the final score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedContributor {
    pub factor: String,
    pub contribution: u32,
    /// Percent of the score explained by this factor (0-100)
    pub share_of_score: f64,
}
