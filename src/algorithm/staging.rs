//! AJCC 8th edition staging (mortality prediction)
//!
//! Age-stratified simplification of AJCC-8 for differentiated thyroid cancer.
//! Below the age cut-off only distant metastasis changes the stage; at or
//! above it gross extrathyroidal extension and lateral nodal disease also
//! upstage.

use crate::algorithm::rules::{Rule, RuleTable};
use crate::models::macros::closed_value_set;
use crate::models::{Ete, NStage, PatientData};

/// Age in years at which AJCC-8 staging becomes T/N dependent
pub const STAGING_AGE_CUTOFF: f64 = 55.0;

closed_value_set! {
    /// AJCC stage label
    pub enum StageLabel as "stage" {
        StageI => "Stage I",
        StageII => "Stage II",
        StageIVB => "Stage IVB",
    }
}

fn is_younger(p: &PatientData) -> bool {
    p.age < STAGING_AGE_CUTOFF
}

fn younger_with_distant_metastasis(p: &PatientData) -> bool {
    is_younger(p) && p.is_metastatic()
}

fn older_with_distant_metastasis(p: &PatientData) -> bool {
    !is_younger(p) && p.is_metastatic()
}

fn older_with_locoregional_extension(p: &PatientData) -> bool {
    !is_younger(p) && (p.ete == Ete::Gross || p.n_stage == NStage::N1b)
}

/// Staging cascade, first match wins
pub static STAGING_RULES: RuleTable<PatientData, StageLabel> = RuleTable {
    name: "ajcc-stage",
    rules: &[
        Rule {
            name: "younger-distant-metastasis",
            applies: younger_with_distant_metastasis,
            outcome: StageLabel::StageII,
        },
        Rule {
            name: "younger",
            applies: is_younger,
            outcome: StageLabel::StageI,
        },
        Rule {
            name: "distant-metastasis",
            applies: older_with_distant_metastasis,
            outcome: StageLabel::StageIVB,
        },
        Rule {
            name: "gross-ete-or-lateral-nodes",
            applies: older_with_locoregional_extension,
            outcome: StageLabel::StageII,
        },
    ],
    fallback: StageLabel::StageI,
};

/// Compute the AJCC stage for a patient
#[must_use]
pub fn stage(p: &PatientData) -> StageLabel {
    *STAGING_RULES.evaluate(p)
}
