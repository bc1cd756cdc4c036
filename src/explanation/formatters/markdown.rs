use crate::explanation::types::RiskExplanation;

/// Markdown formatter for explanations
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format explanation as markdown
    pub fn format(explanation: &RiskExplanation) -> String {
        let mut md = String::with_capacity(2048);

        // Title with score and level
        md.push_str("# Difficult Intubation Risk Assessment\n\n");
        md.push_str(&format!(
            "**Risk Score:** {}/100 - {} {} Risk\n\n",
            explanation.score, explanation.level.icon, explanation.level.label
        ));

        // Contributors
        md.push_str("## Top Contributing Factors\n\n");
        if explanation.top_contributors.is_empty() {
            md.push_str("No risk factors identified.\n\n");
        } else {
            md.push_str("| Factor | Points | Share of Score |\n");
            md.push_str("|--------|--------|----------------|\n");
            for contributor in &explanation.top_contributors {
                md.push_str(&format!(
                    "| {} | +{} | {:.0}% |\n",
                    contributor.factor, contributor.contribution, contributor.share_of_score
                ));
            }
            md.push('\n');
            let hidden = explanation
                .total_contributors
                .saturating_sub(explanation.top_contributors.len());
            if hidden > 0 {
                md.push_str(&format!("*{} further factor(s) not shown.*\n\n", hidden));
            }
        }

        // Interpretation
        md.push_str("## Risk Interpretation\n\n");
        md.push_str(&format!("{}  \n", explanation.interpretation.headline));
        md.push_str(&format!("{}\n\n", explanation.interpretation.detail));

        // Plan
        let plan = &explanation.plan;
        md.push_str("## Airway Management Plan\n\n");
        md.push_str(&format!("**Recommended Approach:** {}\n\n", plan.approach));

        md.push_str("### Primary Equipment\n\n");
        for item in &plan.equipment {
            md.push_str(&format!("- {}\n", item));
        }

        md.push_str("\n### Personnel Requirements\n\n");
        for item in &plan.personnel {
            md.push_str(&format!("- {}\n", item));
        }

        md.push_str("\n### Backup Plan & Rescue Devices\n\n");
        for item in &plan.backup {
            md.push_str(&format!("- {}\n", item));
        }
        md.push('\n');

        if let Some(warning) = &explanation.high_risk_warning {
            md.push_str(&format!("> ⚠️ **{}**\n\n", warning));
        }

        md.push_str(&format!("---\n*{}*\n", explanation.disclaimer));
        md
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explanation::ExplanationGenerator;
    use crate::metrics::Contributor;
    use crate::scorer::RiskResult;

    fn contributor(factor: &str, contribution: u32) -> Contributor {
        Contributor {
            factor: factor.to_string(),
            weight: 0.1,
            contribution,
        }
    }

    #[test]
    fn test_format_blank() {
        let explanation = ExplanationGenerator::generate(&RiskResult {
            score: 0,
            contributors: vec![],
        });
        let md = MarkdownFormatter::format(&explanation);

        assert!(md.contains("**Risk Score:** 0/100"));
        assert!(md.contains("No risk factors identified."));
        assert!(md.contains("- Standard laryngoscope with appropriate blades"));
        assert!(!md.contains("High-risk airway"));
    }

    #[test]
    fn test_format_high_risk() {
        let explanation = ExplanationGenerator::generate(&RiskResult {
            score: 91,
            contributors: vec![
                contributor("Severe Obesity (BMI ≥35)", 18),
                contributor("Mallampati Class 4", 22),
                contributor("Reduced Thyromental Distance", 16),
                contributor("Previous Difficult Airway", 35),
            ],
        });
        let md = MarkdownFormatter::format(&explanation);

        assert!(md.contains("High Risk"));
        assert!(md.contains("| Previous Difficult Airway | +35 | 38% |"));
        assert!(md.contains("High-Risk Strategy - Consider Awake Technique"));
        assert!(md.contains("High-risk airway: Consider awake fiberoptic intubation"));
    }

    #[test]
    fn test_hidden_factor_note() {
        let contributors: Vec<Contributor> = (1..=7).map(|i| contributor(&format!("f{}", i), i)).collect();
        let explanation = ExplanationGenerator::generate(&RiskResult {
            score: 28,
            contributors,
        });
        let md = MarkdownFormatter::format(&explanation);
        assert!(md.contains("*2 further factor(s) not shown.*"));
    }
}
