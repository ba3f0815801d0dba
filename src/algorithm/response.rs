//! Response to therapy classification
//!
//! Classifies the follow-up state from suppressed thyroglobulin, antibody
//! trend and neck imaging. Thresholds are strict: a suppressed Tg of exactly
//! 1 ng/mL is indeterminate, and exactly 0.2 ng/mL is already indeterminate.

use crate::algorithm::rules::{Rule, RuleTable};
use crate::models::{ImagingResult, PatientData, ResponseType, TgAbStatus};

/// Suppressed Tg above this (ng/mL) is biochemically incomplete
pub const BIOCHEMICAL_TG_THRESHOLD: f64 = 1.0;
/// Suppressed Tg at or above this (ng/mL) is indeterminate
pub const INDETERMINATE_TG_THRESHOLD: f64 = 0.2;

fn has_structural_disease(p: &PatientData) -> bool {
    p.imaging == ImagingResult::Structural
}

fn is_biochemically_incomplete(p: &PatientData) -> bool {
    p.suppressed_tg > BIOCHEMICAL_TG_THRESHOLD || p.tg_ab == TgAbStatus::PositiveRising
}

fn is_indeterminate(p: &PatientData) -> bool {
    p.suppressed_tg >= INDETERMINATE_TG_THRESHOLD || p.tg_ab == TgAbStatus::PositiveStable
}

/// Response cascade, first match wins
pub static RESPONSE_RULES: RuleTable<PatientData, ResponseType> = RuleTable {
    name: "response",
    rules: &[
        Rule {
            name: "structural",
            applies: has_structural_disease,
            outcome: ResponseType::StructurallyIncomplete,
        },
        Rule {
            name: "biochemical",
            applies: is_biochemically_incomplete,
            outcome: ResponseType::BiochemicallyIncomplete,
        },
        Rule {
            name: "indeterminate",
            applies: is_indeterminate,
            outcome: ResponseType::Indeterminate,
        },
    ],
    fallback: ResponseType::Excellent,
};

/// Classify the response to therapy
#[must_use]
pub fn response(p: &PatientData) -> ResponseType {
    *RESPONSE_RULES.evaluate(p)
}
