//! Active surveillance candidacy
//!
//! Disqualifiers are checked in a fixed order and only the first one that
//! applies is reported, even when several do.

use serde::Serialize;

use crate::algorithm::rules::{Rule, RuleTable};
use crate::models::{Ete, PatientData};

/// Patients younger than this are not candidates
pub const ADULT_AGE: f64 = 18.0;
/// Tumors larger than this (cm) are not candidates
pub const MAX_SURVEILLANCE_SIZE_CM: f64 = 1.5;
/// Ideal candidates have tumors no larger than this (cm)
pub const IDEAL_SIZE_CM: f64 = 1.0;
/// Ideal candidates are at least this old
pub const IDEAL_MIN_AGE: f64 = 60.0;

/// Eligibility for active surveillance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CandidacyStatus {
    Inappropriate,
    Ideal,
    #[serde(rename = "Appropriate with Shared Decision")]
    AppropriateWithSharedDecision,
}

impl CandidacyStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Inappropriate => "Inappropriate",
            Self::Ideal => "Ideal",
            Self::AppropriateWithSharedDecision => "Appropriate with Shared Decision",
        }
    }

    /// Whether surveillance may be offered
    #[must_use]
    pub const fn is_eligible(self) -> bool {
        !matches!(self, Self::Inappropriate)
    }
}

impl std::fmt::Display for CandidacyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The finding that rules a patient out of surveillance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Disqualifier {
    Pediatric,
    TumorSize,
    ExtrathyroidalExtension,
    NodalDisease,
    MolecularRisk,
}

/// Active surveillance candidacy for a patient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SurveillanceCandidacy {
    pub status: CandidacyStatus,
    pub reason: &'static str,
    pub citation: &'static str,
    /// The disqualifier that decided an `Inappropriate` status
    pub disqualifier: Option<Disqualifier>,
}

const fn inappropriate(
    disqualifier: Disqualifier,
    reason: &'static str,
    citation: &'static str,
) -> SurveillanceCandidacy {
    SurveillanceCandidacy {
        status: CandidacyStatus::Inappropriate,
        reason,
        citation,
        disqualifier: Some(disqualifier),
    }
}

fn is_pediatric(p: &PatientData) -> bool {
    p.age < ADULT_AGE
}

fn exceeds_size_limit(p: &PatientData) -> bool {
    p.tumor_size_cm > MAX_SURVEILLANCE_SIZE_CM
}

fn has_extrathyroidal_extension(p: &PatientData) -> bool {
    p.ete != Ete::None
}

fn has_nodal_disease(p: &PatientData) -> bool {
    p.n_stage.is_node_positive()
}

fn has_molecular_risk(p: &PatientData) -> bool {
    p.molecular_markers.tert
}

fn is_older_with_microcarcinoma(p: &PatientData) -> bool {
    p.tumor_size_cm <= IDEAL_SIZE_CM && p.age >= IDEAL_MIN_AGE
}

/// Candidacy cascade, first disqualifier wins
pub static SURVEILLANCE_RULES: RuleTable<PatientData, SurveillanceCandidacy> = RuleTable {
    name: "active-surveillance",
    rules: &[
        Rule {
            name: "pediatric",
            applies: is_pediatric,
            outcome: inappropriate(
                Disqualifier::Pediatric,
                "Pediatric status requires surgery.",
                "R-2025-18",
            ),
        },
        Rule {
            name: "tumor-size",
            applies: exceeds_size_limit,
            outcome: inappropriate(
                Disqualifier::TumorSize,
                "Tumor size exceeds safe observation limits.",
                "T-2025-2",
            ),
        },
        Rule {
            name: "extrathyroidal-extension",
            applies: has_extrathyroidal_extension,
            outcome: inappropriate(
                Disqualifier::ExtrathyroidalExtension,
                "ETE is a contraindication for surveillance.",
                "R-2025-16",
            ),
        },
        Rule {
            name: "nodal-disease",
            applies: has_nodal_disease,
            outcome: inappropriate(
                Disqualifier::NodalDisease,
                "Regional nodal disease requires surgical resection.",
                "R-2025-16",
            ),
        },
        Rule {
            name: "molecular-risk",
            applies: has_molecular_risk,
            outcome: inappropriate(
                Disqualifier::MolecularRisk,
                "TERT+ profile suggests high risk of rapid progression.",
                "R-2025-4",
            ),
        },
        Rule {
            name: "ideal",
            applies: is_older_with_microcarcinoma,
            outcome: SurveillanceCandidacy {
                status: CandidacyStatus::Ideal,
                reason: "Elderly patients with microcarcinoma show extremely low progression rates.",
                citation: "F-2025-4",
                disqualifier: None,
            },
        },
    ],
    fallback: SurveillanceCandidacy {
        status: CandidacyStatus::AppropriateWithSharedDecision,
        reason: "Meets primary criteria for observation; requires committed lifelong follow-up.",
        citation: "R-2025-16",
        disqualifier: None,
    },
};

/// Derive active surveillance candidacy
#[must_use]
pub fn as_candidacy(p: &PatientData) -> SurveillanceCandidacy {
    *SURVEILLANCE_RULES.evaluate(p)
}
