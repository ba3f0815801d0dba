//! Long-term monitoring schedule
//!
//! Follow-up cadence is a direct lookup on the response to therapy; any
//! response without its own entry gets the intensive schedule.

use serde::Serialize;

use crate::models::ResponseType;

/// Follow-up cadence for labs and neck imaging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonitoringSchedule {
    /// Biochemical labs (Tg/TgAb)
    pub labs: &'static str,
    /// Imaging (neck ultrasound)
    pub imaging: &'static str,
    pub citation: &'static str,
}

const EXCELLENT: MonitoringSchedule = MonitoringSchedule {
    labs: "Every 12-24 months",
    imaging: "None or every 3-5 years",
    citation: "R-2025-61",
};

const INDETERMINATE: MonitoringSchedule = MonitoringSchedule {
    labs: "Every 6-12 months",
    imaging: "Every 12-24 months",
    citation: "R-2025-65",
};

const BIOCHEMICALLY_INCOMPLETE: MonitoringSchedule = MonitoringSchedule {
    labs: "Every 3-6 months",
    imaging: "Every 6-12 months",
    citation: "R-2025-70",
};

/// Default for responses without a dedicated entry
pub const INTENSIVE: MonitoringSchedule = MonitoringSchedule {
    labs: "Intensive Monitoring",
    imaging: "Frequent (3-6 months)",
    citation: "R-2025-74",
};

/// Look up the monitoring schedule for a response
#[must_use]
pub const fn schedule(response: ResponseType) -> MonitoringSchedule {
    match response {
        ResponseType::Excellent => EXCELLENT,
        ResponseType::Indeterminate => INDETERMINATE,
        ResponseType::BiochemicallyIncomplete => BIOCHEMICALLY_INCOMPLETE,
        _ => INTENSIVE,
    }
}

/// A conditional re-staging action shown with the follow-up plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FollowUpAction {
    pub condition: &'static str,
    pub action: &'static str,
    pub citation: &'static str,
}

static FOLLOW_UP_ACTIONS: [FollowUpAction; 2] = [
    FollowUpAction {
        condition: "Suppressed Tg remains < 0.2 ng/mL AND Ultrasound is Negative for 2 years",
        action: "De-escalate surveillance to annual biochemical monitoring only",
        citation: "R-2025-61",
    },
    FollowUpAction {
        condition: "Tg shows rising trend OR TgAb converts to Positive-Rising",
        action: "Perform structural restaging via diagnostic RAI scan or cross-sectional imaging",
        citation: "R-2025-70",
    },
];

/// Dynamic re-stratification actions that apply to every follow-up plan
#[must_use]
pub fn follow_up_actions() -> &'static [FollowUpAction] {
    &FOLLOW_UP_ACTIONS
}
