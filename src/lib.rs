//! A deterministic rule engine for differentiated thyroid cancer management,
//! with staging, risk stratification, treatment guidance and follow-up.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod models;
pub mod pathway;
pub mod report;
pub mod validation;

// Re-export the most common types for easier use
// Core types
pub use config::PathwayConfig;
pub use error::{PathwayError, Result};
pub use models::{PatientData, ResponseType, RiskCategory};

// Rule engine
pub use algorithm::{
    as_candidacy, ata_risk, follow_up_actions, follow_up_tsh_target, initial_tsh_goal,
    molecular_status, rai_plan, response, schedule, stage, surgery_plan,
};

// Pathway and reporting
pub use pathway::{Pathway, PathwayStep};
pub use report::{ClinicalReport, Evaluation, ReportSection};
pub use validation::{IssueSeverity, ValidationIssue, ValidationReport, validate};

// Utility functions
pub use error::util::load_patient;
