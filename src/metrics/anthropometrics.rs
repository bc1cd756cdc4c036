//! ANTHROPOMETRICS: BODY MASS INDEX AND AGE
//!
//! BMI is derived from weight (kg) and height (cm) and only scored when both
//! were measured. Age scores a flat increment above 55 years.

use super::Contributor;
use crate::assessment::PatientAssessment;

/// BMI at or above which obesity is scored as severe
pub const SEVERE_OBESITY_BMI: f64 = 35.0;
/// BMI at or above which obesity is scored
pub const OBESITY_BMI: f64 = 30.0;
/// Ages strictly above this add points
pub const AGE_THRESHOLD_YEARS: i32 = 55;

/// Points and label for a BMI value
///
/// Returns `None` below the obesity threshold.
pub fn bmi_points(bmi: f64) -> Option<(u32, f64, &'static str)> {
    if bmi >= SEVERE_OBESITY_BMI {
        Some((18, 0.18, "Severe Obesity (BMI ≥35)"))
    } else if bmi >= OBESITY_BMI {
        Some((10, 0.10, "Obesity (BMI 30-35)"))
    } else {
        None
    }
}

pub fn bmi_factor(assessment: &PatientAssessment) -> Option<Contributor> {
    let (points, weight, label) = bmi_points(assessment.bmi()?)?;
    Contributor::scored(points, weight, || label.to_string())
}

pub fn age_factor(assessment: &PatientAssessment) -> Option<Contributor> {
    let points = if assessment.age > AGE_THRESHOLD_YEARS { 6 } else { 0 };
    Contributor::scored(points, 0.06, || "Age >55 years".to_string())
}
