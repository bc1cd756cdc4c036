use crate::explanation::types::*;
use crate::metrics::Contributor;
use crate::recommendation::RiskTier;
use crate::scorer::RiskResult;

/// Number of contributors shown in an explanation
pub const TOP_CONTRIBUTORS: usize = 5;

const HIGH_RISK_WARNING: &str = "High-risk airway: Consider awake fiberoptic intubation as primary strategy. \
Discuss with patient and document consent for awake technique.";

const DISCLAIMER: &str = "Clinical Decision Support Tool - Not a Replacement for Clinical Judgement. \
Final airway management decisions must be made by qualified anaesthesiologists considering all clinical context.";

/// Builds the presentation view of a risk result
///
/// Ranking and truncation happen here; the engine's contributor order is
/// left untouched.
pub struct ExplanationGenerator;

impl ExplanationGenerator {
    pub fn generate(result: &RiskResult) -> RiskExplanation {
        let tier = result.tier();
        let plan = result.plan();

        let high_risk_warning = plan
            .high_risk_warning
            .then(|| HIGH_RISK_WARNING.to_string());

        RiskExplanation {
            score: result.score,
            level: Self::level(tier),
            interpretation: Self::interpretation(tier),
            top_contributors: Self::rank_contributors(&result.contributors, result.score, TOP_CONTRIBUTORS),
            total_contributors: result.contributors.len(),
            plan,
            high_risk_warning,
            disclaimer: DISCLAIMER.to_string(),
        }
    }

    fn level(tier: RiskTier) -> RiskLevel {
        RiskLevel {
            tier,
            label: tier.label().to_string(),
            icon: tier.icon().to_string(),
        }
    }

    fn interpretation(tier: RiskTier) -> Interpretation {
        let (headline, detail) = match tier {
            RiskTier::Low => (
                "Standard airway management approach is likely sufficient.",
                "Routine preparation with standard equipment. Clinical vigilance maintained.",
            ),
            RiskTier::Moderate => (
                "Enhanced airway preparation recommended.",
                "Consider video laryngoscopy, have backup devices readily available, and ensure experienced personnel present.",
            ),
            RiskTier::High => (
                "High-risk airway requiring specialized planning.",
                "Consider awake fiberoptic intubation, ensure senior anaesthesiologist present, have complete difficult airway cart available.",
            ),
        };
        Interpretation {
            headline: headline.to_string(),
            detail: detail.to_string(),
        }
    }

    /// Sort by contribution (descending, ties keep rule order) and keep `limit`
    ///
    /// Shares are relative to the capped score, so they are clamped to 100.
    pub fn rank_contributors(
        contributors: &[Contributor],
        score: u32,
        limit: usize,
    ) -> Vec<RankedContributor> {
        let mut sorted: Vec<&Contributor> = contributors.iter().collect();
        sorted.sort_by(|a, b| b.contribution.cmp(&a.contribution));

        sorted
            .into_iter()
            .take(limit)
            .map(|c| RankedContributor {
                factor: c.factor.clone(),
                contribution: c.contribution,
                share_of_score: if score > 0 {
                    (c.contribution as f64 / score as f64 * 100.0).min(100.0)
                } else {
                    0.0
                },
            })
            .collect()
    }
}
