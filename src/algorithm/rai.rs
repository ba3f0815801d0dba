//! Radioactive iodine therapy recommendation (initial guidance)

use serde::Serialize;

use crate::algorithm::rules::{Rule, RuleTable};
use crate::models::{PatientData, RiskCategory};

/// Strength of the radioiodine recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RaiStatus {
    #[serde(rename = "Not Recommended")]
    NotRecommended,
    #[serde(rename = "Strongly Recommended")]
    StronglyRecommended,
    #[serde(rename = "Consider Selective Use")]
    ConsiderSelectiveUse,
}

impl RaiStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NotRecommended => "Not Recommended",
            Self::StronglyRecommended => "Strongly Recommended",
            Self::ConsiderSelectiveUse => "Consider Selective Use",
        }
    }
}

impl std::fmt::Display for RaiStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Radioiodine recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RaiPlan {
    pub status: RaiStatus,
    pub purpose: &'static str,
    pub citation: &'static str,
    pub text: &'static str,
}

const NOT_RECOMMENDED: RaiPlan = RaiPlan {
    status: RaiStatus::NotRecommended,
    purpose: "None",
    citation: "R-2025-42",
    text: "Remnant ablation does not improve disease-free survival in patients with low risk of recurrence.",
};

const STRONGLY_RECOMMENDED: RaiPlan = RaiPlan {
    status: RaiStatus::StronglyRecommended,
    purpose: "Adjuvant/Therapeutic",
    citation: "R-2025-45",
    text: "Indicated to reduce recurrence risk, facilitate Tg monitoring, and treat potential residual disease.",
};

const SELECTIVE_USE: RaiPlan = RaiPlan {
    status: RaiStatus::ConsiderSelectiveUse,
    purpose: "Shared Decision",
    citation: "T-2025-8",
    text: "Decision based on post-operative stimulated Tg levels (>5-10 ng/mL) and histological variants.",
};

fn is_low_risk(risk: &RiskCategory) -> bool {
    matches!(risk, RiskCategory::VeryLow | RiskCategory::Low)
}

fn is_high_risk(risk: &RiskCategory) -> bool {
    *risk == RiskCategory::High
}

/// Radioiodine cascade over the risk category
pub static RAI_RULES: RuleTable<RiskCategory, RaiPlan> = RuleTable {
    name: "rai",
    rules: &[
        Rule {
            name: "low-risk",
            applies: is_low_risk,
            outcome: NOT_RECOMMENDED,
        },
        Rule {
            name: "high-risk",
            applies: is_high_risk,
            outcome: STRONGLY_RECOMMENDED,
        },
    ],
    fallback: SELECTIVE_USE,
};

/// Derive the radioiodine recommendation from the risk category
///
/// The patient record is accepted so that patient-specific criteria can be
/// added without changing callers; no current rule reads it.
#[must_use]
pub fn rai_plan(risk: RiskCategory, _patient: &PatientData) -> RaiPlan {
    *RAI_RULES.evaluate(&risk)
}
