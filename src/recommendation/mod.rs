//! Score-to-preparation mapping
//!
//! Maps a risk score to one of three tiers and the fixed equipment,
//! personnel and backup lists for that tier. Depends on the score only,
//! never on the individual contributors.

pub mod tier;
pub mod plan;

pub use tier::{RiskTier, HIGH_THRESHOLD, MODERATE_THRESHOLD};
pub use plan::{PreparationPlan, RecommendationMapper};
