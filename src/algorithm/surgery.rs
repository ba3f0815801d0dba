//! Surgical recommendation (initial guidance)
//!
//! Selects the extent of thyroid surgery and whether a neck dissection is
//! indicated. Rationale strings and citation tags are fixed per branch and
//! reproduced verbatim for audit traceability.

use serde::Serialize;

use crate::algorithm::rules::{Rule, RuleTable};
use crate::models::{Ete, NStage, PatientData};

/// Tumors larger than this (cm) require total thyroidectomy
pub const TOTAL_THYROIDECTOMY_SIZE_CM: f64 = 4.0;
/// Tumors larger than this (cm) are no longer microcarcinomas
pub const MICROCARCINOMA_SIZE_CM: f64 = 1.0;

/// Surgical approach selected by the cascade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SurgicalApproach {
    /// Total thyroidectomy is mandatory
    TotalThyroidectomy,
    /// Lobectomy or total thyroidectomy by shared decision
    LobectomyOrTotal,
    /// Lobectomy, or active surveillance for eligible patients
    LobectomyOrSurveillance,
}

impl SurgicalApproach {
    /// Procedure label
    #[must_use]
    pub const fn procedure(self) -> &'static str {
        match self {
            Self::TotalThyroidectomy => "Total Thyroidectomy",
            Self::LobectomyOrTotal => "Lobectomy OR Total Thyroidectomy",
            Self::LobectomyOrSurveillance => "Lobectomy or Active Surveillance",
        }
    }

    /// Guideline rationale, prefixed with its citation tag
    #[must_use]
    pub const fn rationale(self) -> &'static str {
        match self {
            Self::TotalThyroidectomy => {
                "R-2025-14: Mandatory for tumors >4cm, gross ETE, or distant metastasis."
            }
            Self::LobectomyOrTotal => {
                "R-2025-15: Choice depends on TSH suppression goals, RAI consideration, and monitoring ease."
            }
            Self::LobectomyOrSurveillance => {
                "R-2025-16: Standard for microcarcinoma (<1cm) in the absence of high-risk clinical features."
            }
        }
    }

    /// Guideline citation tag
    #[must_use]
    pub const fn citation(self) -> &'static str {
        match self {
            Self::TotalThyroidectomy => "R-2025-14",
            Self::LobectomyOrTotal => "R-2025-15",
            Self::LobectomyOrSurveillance => "R-2025-16",
        }
    }

    /// Neck dissection guidance for this approach
    #[must_use]
    pub fn dissection(self, p: &PatientData) -> &'static str {
        match self {
            Self::TotalThyroidectomy if p.n_stage != NStage::N0 => "Therapeutic Neck Dissection",
            Self::TotalThyroidectomy => "None (Consider Central for high T stage)",
            Self::LobectomyOrTotal => "None unless nodes clinically positive",
            Self::LobectomyOrSurveillance => "None",
        }
    }
}

/// Surgical recommendation for a patient
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SurgeryPlan {
    pub approach: SurgicalApproach,
    pub procedure: &'static str,
    pub dissection: &'static str,
    pub rationale: &'static str,
    pub citation: &'static str,
}

fn requires_total_thyroidectomy(p: &PatientData) -> bool {
    p.tumor_size_cm > TOTAL_THYROIDECTOMY_SIZE_CM || p.ete == Ete::Gross || p.is_metastatic()
}

fn allows_shared_extent_decision(p: &PatientData) -> bool {
    p.tumor_size_cm > MICROCARCINOMA_SIZE_CM || p.ete == Ete::Microscopic || p.multifocality
}

/// Surgical cascade, first match wins
pub static SURGERY_RULES: RuleTable<PatientData, SurgicalApproach> = RuleTable {
    name: "surgery",
    rules: &[
        Rule {
            name: "total-thyroidectomy",
            applies: requires_total_thyroidectomy,
            outcome: SurgicalApproach::TotalThyroidectomy,
        },
        Rule {
            name: "lobectomy-or-total",
            applies: allows_shared_extent_decision,
            outcome: SurgicalApproach::LobectomyOrTotal,
        },
    ],
    fallback: SurgicalApproach::LobectomyOrSurveillance,
};

/// Derive the surgical recommendation
#[must_use]
pub fn surgery_plan(p: &PatientData) -> SurgeryPlan {
    let approach = *SURGERY_RULES.evaluate(p);
    SurgeryPlan {
        approach,
        procedure: approach.procedure(),
        dissection: approach.dissection(p),
        rationale: approach.rationale(),
        citation: approach.citation(),
    }
}
