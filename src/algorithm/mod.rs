//! Rule engine for the thyroid cancer pathway
//!
//! Each module is a pure function of one patient snapshot (or of another
//! module's output). Decision cascades are expressed as ordered
//! [`RuleTable`](rules::RuleTable)s so precedence can be inspected and tested
//! rule by rule.

pub mod monitoring;
pub mod rai;
pub mod response;
pub mod risk;
pub mod rules;
pub mod staging;
pub mod surgery;
pub mod surveillance;
pub mod tsh;

// Re-export the engine entry points
pub use monitoring::{FollowUpAction, MonitoringSchedule, follow_up_actions, schedule};
pub use rai::{RaiPlan, RaiStatus, rai_plan};
pub use response::response;
pub use risk::{ata_risk, molecular_status};
pub use staging::{StageLabel, stage};
pub use surgery::{SurgeryPlan, SurgicalApproach, surgery_plan};
pub use surveillance::{CandidacyStatus, Disqualifier, SurveillanceCandidacy, as_candidacy};
pub use tsh::{TshTarget, follow_up_tsh_target, initial_tsh_goal};
