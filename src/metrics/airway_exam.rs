//! BEDSIDE AIRWAY EXAMINATION
//!
//! Mallampati class, thyromental distance, mouth opening, neck mobility,
//! jaw protrusion and the upper lip bite test.
//!
//! Point tables are literal clinical heuristics; each `match` is exhaustive
//! so a new form option cannot silently score zero.

use super::Contributor;
use crate::assessment::{JawProtrusion, MallampatiClass, NeckMobility, PatientAssessment, UlbtClass};

/// TMD below this (cm) is scored
pub const TMD_LIMIT_CM: f64 = 6.5;
/// TMD below this (cm) is scored as severely reduced
pub const TMD_SEVERE_CM: f64 = 6.0;
/// Inter-incisor gap below this (cm) is scored
pub const MOUTH_OPENING_LIMIT_CM: f64 = 3.5;

pub fn mallampati_points(class: MallampatiClass) -> u32 {
    match class {
        MallampatiClass::Unset | MallampatiClass::I => 0,
        MallampatiClass::II => 5,
        MallampatiClass::III => 15,
        MallampatiClass::IV => 22,
    }
}

pub fn mallampati_factor(assessment: &PatientAssessment) -> Option<Contributor> {
    let class = assessment.mallampati;
    Contributor::scored(mallampati_points(class), 0.22, || {
        format!("Mallampati Class {}", class.as_str())
    })
}

pub fn thyromental_factor(assessment: &PatientAssessment) -> Option<Contributor> {
    let tmd = assessment.thyromental_distance()?;
    let points = match tmd {
        d if d < TMD_SEVERE_CM => 16,
        d if d < TMD_LIMIT_CM => 8,
        _ => 0,
    };
    Contributor::scored(points, 0.16, || "Reduced Thyromental Distance".to_string())
}

pub fn mouth_opening_factor(assessment: &PatientAssessment) -> Option<Contributor> {
    let gap = assessment.mouth_opening()?;
    let points = if gap < MOUTH_OPENING_LIMIT_CM { 14 } else { 0 };
    Contributor::scored(points, 0.14, || "Limited Mouth Opening".to_string())
}

pub fn neck_mobility_points(mobility: NeckMobility) -> u32 {
    match mobility {
        NeckMobility::Unset | NeckMobility::Normal => 0,
        NeckMobility::Reduced => 12,
        NeckMobility::SeverelyReduced => 20,
    }
}

pub fn neck_mobility_factor(assessment: &PatientAssessment) -> Option<Contributor> {
    Contributor::scored(neck_mobility_points(assessment.neck_mobility), 0.20, || {
        "Reduced Neck Mobility".to_string()
    })
}

pub fn jaw_protrusion_points(grade: JawProtrusion) -> u32 {
    match grade {
        JawProtrusion::Unset | JawProtrusion::GradeA => 0,
        JawProtrusion::GradeB => 8,
        JawProtrusion::GradeC => 17,
    }
}

pub fn jaw_protrusion_factor(assessment: &PatientAssessment) -> Option<Contributor> {
    Contributor::scored(jaw_protrusion_points(assessment.jaw_protrusion), 0.17, || {
        "Limited Jaw Protrusion".to_string()
    })
}

pub fn ulbt_points(class: UlbtClass) -> u32 {
    match class {
        UlbtClass::Unset | UlbtClass::I => 0,
        UlbtClass::II => 9,
        UlbtClass::III => 15,
    }
}

pub fn ulbt_factor(assessment: &PatientAssessment) -> Option<Contributor> {
    let class = assessment.ulbt;
    Contributor::scored(ulbt_points(class), 0.15, || format!("ULBT Class {}", class.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mallampati_table() {
        let expected = [
            (MallampatiClass::Unset, 0),
            (MallampatiClass::I, 0),
            (MallampatiClass::II, 5),
            (MallampatiClass::III, 15),
            (MallampatiClass::IV, 22),
        ];
        for (class, points) in expected {
            assert_eq!(mallampati_points(class), points, "class {}", class);
        }
    }

    #[test]
    fn test_mallampati_label_uses_form_number() {
        let assessment = PatientAssessment {
            mallampati: MallampatiClass::III,
            ..Default::default()
        };
        let c = mallampati_factor(&assessment).unwrap();
        assert_eq!(c.factor, "Mallampati Class 3");
        assert_eq!(c.contribution, 15);
    }

    #[test]
    fn test_mallampati_class_one_silent() {
        let assessment = PatientAssessment {
            mallampati: MallampatiClass::I,
            ..Default::default()
        };
        assert!(mallampati_factor(&assessment).is_none());
    }

    #[test]
    fn test_thyromental_bands() {
        let tmd = |tmd: f64| PatientAssessment { tmd, ..Default::default() };
        assert_eq!(thyromental_factor(&tmd(5.0)).unwrap().contribution, 16);
        assert_eq!(thyromental_factor(&tmd(5.99)).unwrap().contribution, 16);
        assert_eq!(thyromental_factor(&tmd(6.0)).unwrap().contribution, 8);
        assert_eq!(thyromental_factor(&tmd(6.49)).unwrap().contribution, 8);
        assert!(thyromental_factor(&tmd(6.5)).is_none());
        assert!(thyromental_factor(&tmd(0.0)).is_none());
        assert!(thyromental_factor(&tmd(-2.0)).is_none());
    }

    #[test]
    fn test_mouth_opening() {
        let gap = |inter_incisor_gap: f64| PatientAssessment {
            inter_incisor_gap,
            ..Default::default()
        };
        let c = mouth_opening_factor(&gap(3.4)).unwrap();
        assert_eq!(c.factor, "Limited Mouth Opening");
        assert_eq!(c.contribution, 14);
        assert!(mouth_opening_factor(&gap(3.5)).is_none());
        assert!(mouth_opening_factor(&gap(0.0)).is_none());
    }

    #[test]
    fn test_neck_and_jaw() {
        assert_eq!(neck_mobility_points(NeckMobility::Normal), 0);
        assert_eq!(neck_mobility_points(NeckMobility::Reduced), 12);
        assert_eq!(neck_mobility_points(NeckMobility::SeverelyReduced), 20);
        assert_eq!(jaw_protrusion_points(JawProtrusion::GradeA), 0);
        assert_eq!(jaw_protrusion_points(JawProtrusion::GradeB), 8);
        assert_eq!(jaw_protrusion_points(JawProtrusion::GradeC), 17);
    }

    #[test]
    fn test_ulbt() {
        let assessment = PatientAssessment {
            ulbt: UlbtClass::II,
            ..Default::default()
        };
        let c = ulbt_factor(&assessment).unwrap();
        assert_eq!(c.factor, "ULBT Class 2");
        assert_eq!(c.contribution, 9);
        assert_eq!(ulbt_points(UlbtClass::III), 15);
        assert_eq!(ulbt_points(UlbtClass::I), 0);
    }
}
