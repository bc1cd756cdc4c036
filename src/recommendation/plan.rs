use super::tier::RiskTier;
use crate::scorer::MAX_SCORE;
use serde::{Deserialize, Serialize};

/// Tiered airway preparation plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreparationPlan {
    pub tier: RiskTier,
    /// Recommended overall approach
    pub approach: String,
    pub equipment: Vec<String>,
    pub personnel: Vec<String>,
    /// Backup plan and rescue devices
    pub backup: Vec<String>,
    /// Set for high-risk scores (>= 60)
    pub high_risk_warning: bool,
}

struct TierContent {
    approach: &'static str,
    equipment: &'static [&'static str],
    personnel: &'static [&'static str],
    backup: &'static [&'static str],
}

const STANDARD: TierContent = TierContent {
    approach: "Standard Airway Management",
    equipment: &[
        "Standard laryngoscope with appropriate blades",
        "Endotracheal tubes (multiple sizes)",
        "Stylet",
        "Suction available",
    ],
    personnel: &["Single anaesthesiologist", "Standard OR team"],
    backup: &["LMA available", "Bougie readily accessible"],
};

const ENHANCED: TierContent = TierContent {
    approach: "Enhanced Preparation - Video Laryngoscopy First",
    equipment: &[
        "Video laryngoscope (primary device)",
        "Hyperangulated blade",
        "Bougie/stylet",
        "Multiple LMA sizes",
        "Standard direct laryngoscope backup",
    ],
    personnel: &[
        "Experienced anaesthesiologist",
        "Second anaesthesiologist on standby",
        "Skilled assistant",
    ],
    backup: &[
        "Flexible bronchoscope available",
        "Cricothyrotomy kit at bedside",
        "Multiple rescue devices prepared",
    ],
};

const HIGH_RISK: TierContent = TierContent {
    approach: "High-Risk Strategy - Consider Awake Technique",
    equipment: &[
        "Flexible fiberoptic bronchoscope (primary)",
        "Video laryngoscope prepared",
        "Complete difficult airway cart",
        "LMAs (all sizes)",
        "Cricothyrotomy kit open and ready",
    ],
    personnel: &[
        "Senior consultant anaesthesiologist",
        "Second experienced anaesthesiologist present",
        "ENT surgeon on standby",
        "Skilled airway assistant",
    ],
    backup: &[
        "Front-of-neck access prepared",
        "ECMO team notification (if available)",
        "Multiple rescue device strategies planned",
    ],
};

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Maps scores to preparation plans
pub struct RecommendationMapper;

impl RecommendationMapper {
    /// Build the preparation plan for a score
    ///
    /// Scores above 100 are clamped first; the engine never produces them.
    pub fn map_plan(score: u32) -> PreparationPlan {
        let tier = RiskTier::from_score(score.min(MAX_SCORE));
        let content = match tier {
            RiskTier::Low => &STANDARD,
            RiskTier::Moderate => &ENHANCED,
            RiskTier::High => &HIGH_RISK,
        };

        PreparationPlan {
            tier,
            approach: content.approach.to_string(),
            equipment: owned(content.equipment),
            personnel: owned(content.personnel),
            backup: owned(content.backup),
            high_risk_warning: tier == RiskTier::High,
        }
    }
}
