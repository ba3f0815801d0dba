//! Validation boundary for patient records
//!
//! The rule engine accepts any `PatientData` and always returns a
//! classification. This module is where records are checked before they reach
//! it: structural problems (non-finite or out-of-range numbers) are always
//! errors, while clinically contradictory combinations are warnings unless
//! strict validation is configured.

use itertools::Itertools;
use log::warn;
use serde::Serialize;
use std::fmt;

use crate::config::PathwayConfig;
use crate::error::{PathwayError, Result};
use crate::models::{MStage, NStage, PatientData, RaiIndication};

/// How serious a validation finding is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum IssueSeverity {
    /// Clinically inconsistent, but the engine can still classify
    Warning,
    /// The record cannot be evaluated
    Error,
}

/// A single validation finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// Wire name of the offending field
    pub field: &'static str,
    pub severity: IssueSeverity,
    pub message: String,
}

impl ValidationIssue {
    fn error(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            severity: IssueSeverity::Error,
            message: message.into(),
        }
    }

    fn warning(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            severity: IssueSeverity::Warning,
            message: message.into(),
        }
    }

    /// Raise a warning to an error
    #[must_use]
    pub fn escalated(mut self) -> Self {
        self.severity = IssueSeverity::Error;
        self
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// All findings for one record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Findings that block evaluation
    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(|issue| issue.severity == IssueSeverity::Error)
    }

    /// Findings that do not block evaluation
    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(|issue| issue.severity == IssueSeverity::Warning)
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Whether any finding concerns `field`
    #[must_use]
    pub fn mentions(&self, field: &str) -> bool {
        self.issues.iter().any(|issue| issue.field == field)
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_clean() {
            return write!(f, "no validation issues");
        }
        write!(f, "{}", self.issues.iter().join("; "))
    }
}

/// Check a numeric field that must be finite and not below zero
fn check_non_negative(issues: &mut Vec<ValidationIssue>, field: &'static str, value: f64) {
    if !value.is_finite() {
        issues.push(ValidationIssue::error(field, format!("must be a finite number, got {value}")));
    } else if value < 0.0 {
        issues.push(ValidationIssue::error(field, format!("must not be negative, got {value}")));
    }
}

fn structural_issues(p: &PatientData, issues: &mut Vec<ValidationIssue>) {
    check_non_negative(issues, "age", p.age);
    check_non_negative(issues, "largestNodeCm", p.largest_node_cm);
    check_non_negative(issues, "suppressedTg", p.suppressed_tg);
    check_non_negative(issues, "tsh", p.tsh);
    check_non_negative(issues, "raiDoseMci", p.rai_dose_mci);
    if let Some(stimulated_tg) = p.stimulated_tg {
        check_non_negative(issues, "stimulatedTg", stimulated_tg);
    }

    if !p.tumor_size_cm.is_finite() || p.tumor_size_cm <= 0.0 {
        issues.push(ValidationIssue::error(
            "tumorSizeCm",
            format!("must be a positive number, got {}", p.tumor_size_cm),
        ));
    }

    if p.metastasis_site.iter().any(|site| site.trim().is_empty()) {
        issues.push(ValidationIssue::error(
            "metastasisSite",
            "site names must not be blank",
        ));
    }
}

fn consistency_issues(p: &PatientData, issues: &mut Vec<ValidationIssue>) {
    if p.n_stage == NStage::Nx && p.extranodal_extension {
        issues.push(ValidationIssue::warning(
            "extranodalExtension",
            "extranodal extension reported with unassessed nodes (Nx)",
        ));
    }
    if p.n_stage == NStage::N0 && p.involved_nodes > 0 {
        issues.push(ValidationIssue::warning(
            "involvedNodes",
            format!("{} involved nodes reported with N0", p.involved_nodes),
        ));
    }
    if p.involved_nodes > 0 && p.largest_node_cm == 0.0 {
        issues.push(ValidationIssue::warning(
            "largestNodeCm",
            "involved nodes reported without a node size",
        ));
    }
    if p.involved_nodes == 0 && p.largest_node_cm > 0.0 {
        issues.push(ValidationIssue::warning(
            "largestNodeCm",
            "node size reported without involved nodes",
        ));
    }
    if p.m_stage == MStage::M0 && !p.metastasis_site.is_empty() {
        issues.push(ValidationIssue::warning(
            "metastasisSite",
            "metastasis sites reported with M0",
        ));
    }
    if p.m_stage == MStage::M1 && p.metastasis_site.is_empty() {
        issues.push(ValidationIssue::warning(
            "metastasisSite",
            "M1 reported without a metastasis site",
        ));
    }
    if !p.rai_done && (p.rai_dose_mci > 0.0 || p.rai_indication != RaiIndication::None) {
        issues.push(ValidationIssue::warning(
            "raiDone",
            "radioiodine dose or indication recorded but therapy not marked as done",
        ));
    }
    if p.rai_done && p.rai_dose_mci == 0.0 {
        issues.push(ValidationIssue::warning(
            "raiDoseMci",
            "radioiodine therapy marked as done without a dose",
        ));
    }
}

/// Collect every structural error and consistency warning for a record
#[must_use]
pub fn check(p: &PatientData) -> ValidationReport {
    let mut issues = Vec::new();
    structural_issues(p, &mut issues);
    consistency_issues(p, &mut issues);
    ValidationReport { issues }
}

/// Validate a record at the pathway boundary
///
/// Returns the report when the record may be evaluated. Under strict
/// validation every warning is escalated to an error.
pub fn validate(p: &PatientData, config: &PathwayConfig) -> Result<ValidationReport> {
    let mut report = check(p);
    if config.strict_validation {
        report.issues = report
            .issues
            .into_iter()
            .map(ValidationIssue::escalated)
            .collect();
    }

    if report.has_errors() {
        return Err(PathwayError::validation(report.errors().join("; ")));
    }

    for issue in report.warnings() {
        warn!("Patient record warning: {issue}");
    }

    Ok(report)
}
