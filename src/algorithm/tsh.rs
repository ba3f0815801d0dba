//! TSH suppression targets
//!
//! The initial goal follows the risk category; after response assessment the
//! response overrides the initial risk for the maintenance target.

use serde::Serialize;

use crate::models::{ResponseType, RiskCategory};

/// Citation for all TSH goals
pub const TSH_CITATION: &str = "R-2025-58";

/// A TSH range goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TshTarget {
    /// Suppress below 0.1 mIU/L
    #[serde(rename = "< 0.1 mIU/L")]
    Suppressed,
    /// Low-normal range, 0.5 to 2.0 mIU/L
    #[serde(rename = "0.5 – 2.0 mIU/L")]
    LowNormal,
}

impl TshTarget {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Suppressed => "< 0.1 mIU/L",
            Self::LowNormal => "0.5 – 2.0 mIU/L",
        }
    }

    #[must_use]
    pub const fn citation(self) -> &'static str {
        TSH_CITATION
    }

    /// Whether a measured TSH (mIU/L) meets this goal
    #[must_use]
    pub fn is_met_by(self, tsh: f64) -> bool {
        match self {
            Self::Suppressed => tsh < 0.1,
            Self::LowNormal => (0.5..=2.0).contains(&tsh),
        }
    }
}

impl std::fmt::Display for TshTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// TSH goal set at treatment planning from the initial risk
#[must_use]
pub const fn initial_tsh_goal(risk: RiskCategory) -> TshTarget {
    match risk {
        RiskCategory::High => TshTarget::Suppressed,
        _ => TshTarget::LowNormal,
    }
}

/// TSH maintenance target once the response to therapy is known
#[must_use]
pub const fn follow_up_tsh_target(response: ResponseType) -> TshTarget {
    match response {
        ResponseType::Excellent => TshTarget::LowNormal,
        _ => TshTarget::Suppressed,
    }
}
