//! Risk Engine - Main coordinator for difficult intubation scoring
//!
//! Runs every rule in [`RISK_RULES`](crate::metrics::RISK_RULES) against an
//! assessment and sums the triggered points into a 0-100 score.
//! Pure and deterministic: no I/O, no shared state, never fails.

use crate::assessment::PatientAssessment;
use crate::metrics::{Contributor, RISK_RULES};
use crate::recommendation::{PreparationPlan, RecommendationMapper, RiskTier};
use serde::{Deserialize, Serialize};

/// Upper bound of the risk score
pub const MAX_SCORE: u32 = 100;

/// Engine output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskResult {
    /// Sum of triggered points, capped at 100
    pub score: u32,
    /// Triggered factors in rule order (unsorted)
    pub contributors: Vec<Contributor>,
}

impl RiskResult {
    pub fn tier(&self) -> RiskTier {
        RiskTier::from_score(self.score)
    }

    /// Preparation plan for this score
    pub fn plan(&self) -> PreparationPlan {
        RecommendationMapper::map_plan(self.score)
    }

    /// Uncapped sum of all contributions
    pub fn raw_total(&self) -> u32 {
        self.contributors.iter().map(|c| c.contribution).sum()
    }
}

/// Difficult intubation risk engine
pub struct RiskEngine;

impl RiskEngine {
    /// Score an assessment
    ///
    /// Every point value is a whole number, so rounding the sum is the
    /// identity; only the cap at [`MAX_SCORE`] changes the total.
    pub fn compute(assessment: &PatientAssessment) -> RiskResult {
        let contributors: Vec<Contributor> = RISK_RULES
            .iter()
            .filter_map(|(rule, evaluate)| {
                let contributor = evaluate(assessment)?;
                tracing::trace!(
                    rule = *rule,
                    points = contributor.contribution,
                    "risk factor triggered"
                );
                Some(contributor)
            })
            .collect();

        let total: u32 = contributors.iter().map(|c| c.contribution).sum();
        let score = total.min(MAX_SCORE);

        tracing::debug!(
            score,
            raw_total = total,
            n_contributors = contributors.len(),
            "computed airway risk score"
        );

        RiskResult { score, contributors }
    }

    /// Score an assessment and map it to a preparation plan
    pub fn compute_with_plan(assessment: &PatientAssessment) -> (RiskResult, PreparationPlan) {
        let result = Self::compute(assessment);
        let plan = result.plan();
        (result, plan)
    }
}
