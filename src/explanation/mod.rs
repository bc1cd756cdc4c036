pub mod types;
pub mod generator;
pub mod formatters;

pub use types::{Interpretation, RankedContributor, RiskExplanation, RiskLevel};
pub use generator::{ExplanationGenerator, TOP_CONTRIBUTORS};
pub use formatters::{JsonFormatter, MarkdownFormatter};
