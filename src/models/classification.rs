//! Classification outputs shared between rule modules
//!
//! The risk category feeds the radioiodine and TSH goal rules, and the
//! response type feeds the monitoring schedule and follow-up TSH target, so
//! both live with the domain model rather than with the rule that
//! produces them.

use crate::models::macros::closed_value_set;

closed_value_set! {
    /// ATA initial risk of structural recurrence
    ///
    /// Variants are ordered from least to most severe.
    pub enum RiskCategory as "riskCategory" {
        VeryLow => "Very Low" | "VeryLow",
        Low => "Low",
        LowIntermediate => "Low-Intermediate" | "LowIntermediate",
        Intermediate => "Intermediate",
        High => "High",
    }
}

impl RiskCategory {
    /// Severity rank, 1 (very low) through 5 (high)
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::VeryLow => 1,
            Self::Low => 2,
            Self::LowIntermediate => 3,
            Self::Intermediate => 4,
            Self::High => 5,
        }
    }
}

impl PartialOrd for RiskCategory {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RiskCategory {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank().cmp(&other.rank())
    }
}

closed_value_set! {
    /// Response to therapy at follow-up
    pub enum ResponseType as "responseType" {
        /// No clinical, biochemical or structural evidence of disease
        Excellent => "Excellent",
        /// Nonspecific findings that cannot be classified as benign or malignant
        Indeterminate => "Indeterminate",
        /// Abnormal thyroglobulin or rising antibodies without localizable disease
        BiochemicallyIncomplete => "Biochemically Incomplete" | "BiochemicallyIncomplete",
        /// Persistent or newly identified loco-regional or distant metastases
        StructurallyIncomplete => "Structurally Incomplete" | "StructurallyIncomplete",
    }
}

impl ResponseType {
    /// Immediate management implication of this response
    #[must_use]
    pub const fn implication(self) -> &'static str {
        match self {
            Self::Excellent => "Eligible for TSH goal liberalization and imaging de-escalation.",
            _ => "Requires closer surveillance or active intervention.",
        }
    }
}
