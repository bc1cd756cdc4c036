//! Airway Scorer Rust Implementation
//!
//! Difficult tracheal intubation risk scoring from bedside assessment findings.
//!
//! Module layout:
//! - `assessment`: Typed patient assessment record and form option enums
//! - `metrics`: Individual risk factor rules (anthropometrics, airway exam, history)
//! - `scorer`: `RiskEngine`, sums triggered rules into a 0-100 score
//! - `recommendation`: Risk tiers and tiered preparation plans
//! - `explanation`: Ranked contributors, interpretation text, Markdown/JSON output
//! - `batch`: CSV batch scoring with Polars + Rayon
//! - `api_server`: Axum REST surface (feature `api`)
//!
//! ```
//! use airway_scorer_rust::{PatientAssessment, MallampatiClass, RiskEngine, RiskTier};
//!
//! let assessment = PatientAssessment {
//!     age: 60,
//!     mallampati: MallampatiClass::II,
//!     ..Default::default()
//! };
//! let result = RiskEngine::compute(&assessment);
//! assert_eq!(result.score, 11);
//! assert_eq!(result.tier(), RiskTier::Low);
//! ```

pub mod assessment;
pub mod metrics;
pub mod scorer;
pub mod recommendation;
pub mod explanation;
pub mod batch;
pub mod api_server;

// Re-export commonly used types
pub use assessment::{
    ArthritisSeverity, AssessmentError, Gender, JawProtrusion, MallampatiClass, NeckMobility,
    OsaStatus, PatientAssessment, PreviousDifficulty, RadiationHistory, UlbtClass,
};
pub use metrics::{Contributor, RISK_RULES};
pub use scorer::{RiskEngine, RiskResult, MAX_SCORE};
pub use recommendation::{PreparationPlan, RecommendationMapper, RiskTier};
pub use explanation::{ExplanationGenerator, JsonFormatter, MarkdownFormatter, RiskExplanation};

#[cfg(feature = "api")]
pub use api_server::{create_router, ServerConfig};
