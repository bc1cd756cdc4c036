//! MEDICAL HISTORY
//!
//! Sleep apnea, arthritis, head/neck radiotherapy and prior airway
//! difficulty. A documented previous difficult airway is the single
//! strongest predictor in the model.

use super::Contributor;
use crate::assessment::{
    ArthritisSeverity, OsaStatus, PatientAssessment, PreviousDifficulty, RadiationHistory,
};

pub fn osa_points(status: OsaStatus) -> u32 {
    match status {
        OsaStatus::Unset | OsaStatus::None => 0,
        OsaStatus::Suspected => 8,
        OsaStatus::Diagnosed => 13,
    }
}

pub fn osa_factor(assessment: &PatientAssessment) -> Option<Contributor> {
    Contributor::scored(osa_points(assessment.osa), 0.13, || {
        "Obstructive Sleep Apnea".to_string()
    })
}

pub fn arthritis_points(severity: ArthritisSeverity) -> u32 {
    match severity {
        ArthritisSeverity::Unset | ArthritisSeverity::None => 0,
        ArthritisSeverity::Mild => 5,
        ArthritisSeverity::Moderate => 10,
        ArthritisSeverity::Severe => 16,
    }
}

pub fn arthritis_factor(assessment: &PatientAssessment) -> Option<Contributor> {
    Contributor::scored(arthritis_points(assessment.arthritis), 0.16, || {
        "Arthritis/Limited Mobility".to_string()
    })
}

pub fn radiation_factor(assessment: &PatientAssessment) -> Option<Contributor> {
    let points = match assessment.radiation_history {
        RadiationHistory::Yes => 14,
        RadiationHistory::Unset | RadiationHistory::None => 0,
    };
    Contributor::scored(points, 0.14, || "Head/Neck Radiation History".to_string())
}

pub fn previous_difficulty_points(history: PreviousDifficulty) -> u32 {
    match history {
        PreviousDifficulty::Unset | PreviousDifficulty::None => 0,
        PreviousDifficulty::DifficultLaryngoscopy => 25,
        PreviousDifficulty::DifficultVentilation => 22,
        PreviousDifficulty::Both => 35,
    }
}

pub fn previous_difficulty_factor(assessment: &PatientAssessment) -> Option<Contributor> {
    Contributor::scored(
        previous_difficulty_points(assessment.previous_difficulty),
        0.35,
        || "Previous Difficult Airway".to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_osa() {
        let assessment = PatientAssessment {
            osa: OsaStatus::Diagnosed,
            ..Default::default()
        };
        let c = osa_factor(&assessment).unwrap();
        assert_eq!(c.factor, "Obstructive Sleep Apnea");
        assert_eq!(c.contribution, 13);
        assert_eq!(osa_points(OsaStatus::Suspected), 8);
        assert_eq!(osa_points(OsaStatus::None), 0);
    }

    #[test]
    fn test_arthritis_table() {
        assert_eq!(arthritis_points(ArthritisSeverity::None), 0);
        assert_eq!(arthritis_points(ArthritisSeverity::Mild), 5);
        assert_eq!(arthritis_points(ArthritisSeverity::Moderate), 10);
        assert_eq!(arthritis_points(ArthritisSeverity::Severe), 16);
    }

    #[test]
    fn test_radiation_only_when_yes() {
        let yes = PatientAssessment {
            radiation_history: RadiationHistory::Yes,
            ..Default::default()
        };
        let none = PatientAssessment {
            radiation_history: RadiationHistory::None,
            ..Default::default()
        };
        assert_eq!(radiation_factor(&yes).unwrap().contribution, 14);
        assert!(radiation_factor(&none).is_none());
    }

    #[test]
    fn test_previous_difficulty_table() {
        assert_eq!(previous_difficulty_points(PreviousDifficulty::DifficultLaryngoscopy), 25);
        assert_eq!(previous_difficulty_points(PreviousDifficulty::DifficultVentilation), 22);
        assert_eq!(previous_difficulty_points(PreviousDifficulty::Both), 35);

        let none = PatientAssessment {
            previous_difficulty: PreviousDifficulty::None,
            ..Default::default()
        };
        assert!(previous_difficulty_factor(&none).is_none());
    }
}
