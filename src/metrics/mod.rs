//! Risk factor rules for difficult intubation scoring
//!
//! Each rule inspects one finding of the assessment and yields at most one
//! [`Contributor`]. Rules are independent and additive; the engine evaluates
//! all of them in [`RISK_RULES`] order, which is also the order contributors
//! are reported in.

pub mod anthropometrics;
pub mod airway_exam;
pub mod medical_history;

pub use anthropometrics::{age_factor, bmi_factor};
pub use airway_exam::{
    jaw_protrusion_factor, mallampati_factor, mouth_opening_factor, neck_mobility_factor,
    thyromental_factor, ulbt_factor,
};
pub use medical_history::{
    arthritis_factor, osa_factor, previous_difficulty_factor, radiation_factor,
};

use crate::assessment::PatientAssessment;
use serde::{Deserialize, Serialize};

/// One triggered risk factor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contributor {
    /// Display label, e.g. "Mallampati Class 3"
    pub factor: String,
    /// Published reference weight (informational, not used in the sum)
    pub weight: f64,
    /// Points added to the score
    pub contribution: u32,
}

impl Contributor {
    /// Build a contributor only when the finding adds points.
    ///
    /// Zero-point outcomes (Mallampati I, OSA "none", ...) are silent.
    pub(crate) fn scored(
        points: u32,
        weight: f64,
        factor: impl FnOnce() -> String,
    ) -> Option<Self> {
        (points > 0).then(|| Self {
            factor: factor(),
            weight,
            contribution: points,
        })
    }
}

/// A single scoring rule
pub type RiskRule = fn(&PatientAssessment) -> Option<Contributor>;

/// All rules with their names, in evaluation (and reporting) order
pub const RISK_RULES: [(&str, RiskRule); 12] = [
    ("bmi", bmi_factor),
    ("mallampati", mallampati_factor),
    ("thyromental_distance", thyromental_factor),
    ("mouth_opening", mouth_opening_factor),
    ("neck_mobility", neck_mobility_factor),
    ("jaw_protrusion", jaw_protrusion_factor),
    ("ulbt", ulbt_factor),
    ("osa", osa_factor),
    ("arthritis", arthritis_factor),
    ("radiation_history", radiation_factor),
    ("previous_difficulty", previous_difficulty_factor),
    ("age", age_factor),
];
