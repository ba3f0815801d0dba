//! ATA initial risk stratification (recurrence prediction)
//!
//! The cascade runs from the most to the least severe category. The order is
//! the clinical contract: a record meeting several categories' criteria is
//! always assigned the most severe one, so a TERT-positive microcarcinoma is
//! High risk, never Very Low.

use crate::algorithm::rules::{Rule, RuleTable};
use crate::models::{
    Ete, Histology, MarginStatus, NStage, PatientData, RiskCategory, VascularInvasion,
};

/// More involved nodes than this is intermediate risk
pub const MAX_LOW_INTERMEDIATE_NODES: u32 = 5;
/// A metastatic node larger than this (cm) is intermediate risk
pub const LARGE_NODE_CM: f64 = 3.0;
/// Tumors up to this size (cm) can be very low risk
pub const MICROCARCINOMA_CM: f64 = 1.0;

fn has_high_risk_features(p: &PatientData) -> bool {
    p.is_metastatic()
        || p.ete == Ete::Gross
        || p.margins == MarginStatus::R2
        || p.molecular_markers.tert
}

fn has_intermediate_risk_features(p: &PatientData) -> bool {
    p.histology == Histology::Aggressive
        || p.vascular_invasion == VascularInvasion::Extensive
        || p.extranodal_extension
        || p.involved_nodes > MAX_LOW_INTERMEDIATE_NODES
        || p.largest_node_cm > LARGE_NODE_CM
}

fn has_limited_nodal_disease(p: &PatientData) -> bool {
    p.involved_nodes > 0 && p.involved_nodes <= MAX_LOW_INTERMEDIATE_NODES
}

fn is_unifocal_intrathyroidal_microcarcinoma(p: &PatientData) -> bool {
    p.tumor_size_cm <= MICROCARCINOMA_CM
        && p.ete == Ete::None
        && p.n_stage == NStage::N0
        && !p.multifocality
}

/// Risk cascade, most severe first
pub static RISK_RULES: RuleTable<PatientData, RiskCategory> = RuleTable {
    name: "ata-risk",
    rules: &[
        Rule {
            name: "high",
            applies: has_high_risk_features,
            outcome: RiskCategory::High,
        },
        Rule {
            name: "intermediate",
            applies: has_intermediate_risk_features,
            outcome: RiskCategory::Intermediate,
        },
        Rule {
            name: "low-intermediate",
            applies: has_limited_nodal_disease,
            outcome: RiskCategory::LowIntermediate,
        },
        Rule {
            name: "very-low",
            applies: is_unifocal_intrathyroidal_microcarcinoma,
            outcome: RiskCategory::VeryLow,
        },
    ],
    fallback: RiskCategory::Low,
};

/// Compute the ATA initial recurrence-risk category
#[must_use]
pub fn ata_risk(p: &PatientData) -> RiskCategory {
    *RISK_RULES.evaluate(p)
}

/// Summary label for the molecular profile
#[must_use]
pub const fn molecular_status(p: &PatientData) -> &'static str {
    if p.molecular_markers.tert {
        "TERT+ (High)"
    } else if p.molecular_markers.braf {
        "BRAF+"
    } else {
        "Negative"
    }
}
