//! Patient Assessment Record
//!
//! The structured input to the risk engine. Every field has a "not yet filled
//! in" sentinel: `0` for measurements and `Unset` for categorical findings.
//! Sentinels and the explicit lowest-risk options score identically.
//!
//! Categorical findings use the same string keys as the assessment form
//! (`"1"`..`"4"` for classes, kebab-case names otherwise, `""` for unset), so
//! a form payload deserializes without translation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while parsing assessment values from text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssessmentError {
    #[error("unknown value '{value}' for {field} (expected one of: {expected})")]
    UnknownValue {
        field: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Declares a categorical form option with an `Unset` default, serde keys,
/// `FromStr` and `Display`.
macro_rules! form_option {
    (
        $(#[$meta:meta])*
        $name:ident, field = $field:literal, expected = $expected:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $key:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        pub enum $name {
            /// Not filled in
            #[default]
            #[serde(rename = "")]
            Unset,
            $(
                $(#[$vmeta])*
                #[serde(rename = $key)]
                $variant,
            )+
        }

        impl $name {
            /// Form field name used in error messages
            pub const FIELD: &'static str = $field;

            /// Form key for this option (`""` when unset)
            pub fn as_str(&self) -> &'static str {
                match self {
                    Self::Unset => "",
                    $( Self::$variant => $key, )+
                }
            }

            pub fn is_set(&self) -> bool {
                !matches!(self, Self::Unset)
            }
        }

        impl FromStr for $name {
            type Err = AssessmentError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                let key = value.trim().to_ascii_lowercase();
                match key.as_str() {
                    "" => Ok(Self::Unset),
                    $( $key => Ok(Self::$variant), )+
                    _ => Err(AssessmentError::UnknownValue {
                        field: $field,
                        value: value.trim().to_string(),
                        expected: $expected,
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    Self::Unset => f.write_str("unset"),
                    other => f.write_str(other.as_str()),
                }
            }
        }
    };
}

form_option! {
    /// Recorded for the clinical record only; never scored.
    Gender, field = "gender", expected = "male, female, other" {
        Male => "male",
        Female => "female",
        Other => "other",
    }
}

form_option! {
    /// Modified Mallampati oropharyngeal class
    MallampatiClass, field = "mallampati", expected = "1, 2, 3, 4" {
        I => "1",
        II => "2",
        III => "3",
        IV => "4",
    }
}

form_option! {
    NeckMobility, field = "neck_mobility", expected = "normal, reduced, severely-reduced" {
        Normal => "normal",
        Reduced => "reduced",
        SeverelyReduced => "severely-reduced",
    }
}

form_option! {
    /// Mandibular protrusion grade (A: beyond upper incisors, C: cannot reach them)
    JawProtrusion, field = "jaw_protrusion", expected = "grade-a, grade-b, grade-c" {
        GradeA => "grade-a",
        GradeB => "grade-b",
        GradeC => "grade-c",
    }
}

form_option! {
    /// Upper lip bite test class
    UlbtClass, field = "ulbt", expected = "1, 2, 3" {
        I => "1",
        II => "2",
        III => "3",
    }
}

form_option! {
    /// Obstructive sleep apnea status
    OsaStatus, field = "osa", expected = "none, suspected, diagnosed" {
        None => "none",
        Suspected => "suspected",
        Diagnosed => "diagnosed",
    }
}

form_option! {
    ArthritisSeverity, field = "arthritis", expected = "none, mild, moderate, severe" {
        None => "none",
        Mild => "mild",
        Moderate => "moderate",
        Severe => "severe",
    }
}

form_option! {
    /// Prior head or neck radiotherapy
    RadiationHistory, field = "radiation_history", expected = "none, yes" {
        None => "none",
        Yes => "yes",
    }
}

form_option! {
    PreviousDifficulty, field = "previous_difficulty",
    expected = "none, difficult-laryngoscopy, difficult-ventilation, both" {
        None => "none",
        DifficultLaryngoscopy => "difficult-laryngoscopy",
        DifficultVentilation => "difficult-ventilation",
        Both => "both",
    }
}

/// Complete bedside airway assessment for one patient
///
/// Missing JSON keys fall back to the unset/zero sentinels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PatientAssessment {
    /// Years; 0 = unknown
    pub age: i32,
    pub gender: Gender,
    /// Kilograms; 0 = not measured
    pub weight: f64,
    /// Centimetres; 0 = not measured
    pub height: f64,
    pub mallampati: MallampatiClass,
    /// Thyromental distance in cm; 0 = not measured
    pub tmd: f64,
    /// Inter-incisor gap in cm; 0 = not measured
    #[serde(alias = "interIncisor")]
    pub inter_incisor_gap: f64,
    pub neck_mobility: NeckMobility,
    pub jaw_protrusion: JawProtrusion,
    pub ulbt: UlbtClass,
    pub osa: OsaStatus,
    pub arthritis: ArthritisSeverity,
    pub radiation_history: RadiationHistory,
    pub previous_difficulty: PreviousDifficulty,
}

/// A measurement counts only when it is a positive, finite number.
pub(crate) fn measured(value: f64) -> Option<f64> {
    (value.is_finite() && value > 0.0).then_some(value)
}

impl PatientAssessment {
    /// Body mass index, when both weight and height were measured
    pub fn bmi(&self) -> Option<f64> {
        let weight = measured(self.weight)?;
        let height_m = measured(self.height)? / 100.0;
        Some(weight / (height_m * height_m))
    }

    pub fn thyromental_distance(&self) -> Option<f64> {
        measured(self.tmd)
    }

    pub fn mouth_opening(&self) -> Option<f64> {
        measured(self.inter_incisor_gap)
    }

    /// True when nothing has been entered yet
    pub fn is_blank(&self) -> bool {
        self == &Self::default()
    }
}
