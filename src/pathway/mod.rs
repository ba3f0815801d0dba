//! Five-step clinical pathway
//!
//! The pathway walks a single patient record through Diagnosis, Risk, Plan,
//! Response and Takeaway. Navigation moves one step at a time; records are
//! replaced wholesale and validated at the boundary before the engine sees
//! them.

use itertools::Itertools;
use log::debug;
use serde::Serialize;
use std::fmt;

use crate::config::PathwayConfig;
use crate::error::{PathwayError, Result};
use crate::models::PatientData;
use crate::report::{ClinicalReport, Evaluation, ReportSection};
use crate::validation::{ValidationReport, validate};

/// A screen of the pathway
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum PathwayStep {
    /// Data entry
    #[default]
    Diagnosis,
    Risk,
    /// Surgical, radioiodine and surveillance guidance
    Plan,
    Response,
    /// Full clinical report
    Takeaway,
}

impl PathwayStep {
    pub const ALL: [Self; 5] = [
        Self::Diagnosis,
        Self::Risk,
        Self::Plan,
        Self::Response,
        Self::Takeaway,
    ];

    /// Step number, 1 through 5
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Diagnosis => 1,
            Self::Risk => 2,
            Self::Plan => 3,
            Self::Response => 4,
            Self::Takeaway => 5,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Diagnosis => "Diagnosis",
            Self::Risk => "Risk",
            Self::Plan => "Plan",
            Self::Response => "Response",
            Self::Takeaway => "Takeaway",
        }
    }

    /// Report sections presented on this step
    #[must_use]
    pub const fn sections(self) -> &'static [ReportSection] {
        match self {
            Self::Diagnosis => &[],
            Self::Risk => &[ReportSection::RiskAndStaging],
            Self::Plan => &[ReportSection::InitialManagement],
            Self::Response => &[ReportSection::FollowUp],
            Self::Takeaway => &ReportSection::ALL,
        }
    }

    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Diagnosis => Some(Self::Risk),
            Self::Risk => Some(Self::Plan),
            Self::Plan => Some(Self::Response),
            Self::Response => Some(Self::Takeaway),
            Self::Takeaway => None,
        }
    }

    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::Diagnosis => None,
            Self::Risk => Some(Self::Diagnosis),
            Self::Plan => Some(Self::Risk),
            Self::Response => Some(Self::Plan),
            Self::Takeaway => Some(Self::Response),
        }
    }
}

impl fmt::Display for PathwayStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

/// A patient record moving through the pathway
#[derive(Debug, Clone)]
pub struct Pathway {
    config: PathwayConfig,
    patient: PatientData,
    step: PathwayStep,
}

impl Default for Pathway {
    fn default() -> Self {
        Self::new(PathwayConfig::default())
    }
}

impl Pathway {
    /// Start at Diagnosis with the default record
    #[must_use]
    pub fn new(config: PathwayConfig) -> Self {
        Self {
            config,
            patient: PatientData::default(),
            step: PathwayStep::Diagnosis,
        }
    }

    /// Start at Diagnosis with a given record
    pub fn with_patient(config: PathwayConfig, patient: PatientData) -> Result<Self> {
        let mut pathway = Self::new(config);
        pathway.update(patient)?;
        Ok(pathway)
    }

    #[must_use]
    pub const fn config(&self) -> &PathwayConfig {
        &self.config
    }

    #[must_use]
    pub const fn patient(&self) -> &PatientData {
        &self.patient
    }

    #[must_use]
    pub const fn step(&self) -> PathwayStep {
        self.step
    }

    /// Replace the record
    ///
    /// The current record is kept when the new one fails validation.
    pub fn update(&mut self, patient: PatientData) -> Result<ValidationReport> {
        let report = if self.config.validate_input {
            validate(&patient, &self.config)?
        } else {
            ValidationReport::default()
        };
        self.patient = patient;
        debug!("Patient record replaced at step {}", self.step);
        Ok(report)
    }

    /// Derive a new record from the current one and replace it
    pub fn edit<F>(&mut self, edit: F) -> Result<ValidationReport>
    where
        F: FnOnce(PatientData) -> PatientData,
    {
        let edited = edit(self.patient.clone());
        self.update(edited)
    }

    /// Advance one step
    pub fn next(&mut self) -> Result<PathwayStep> {
        let next = self.step.next().ok_or_else(|| {
            PathwayError::navigation(format!("cannot advance past step {}", self.step))
        })?;
        debug!("Pathway step {} -> {}", self.step, next);
        self.step = next;
        Ok(next)
    }

    /// Go back one step
    pub fn back(&mut self) -> Result<PathwayStep> {
        let previous = self.step.previous().ok_or_else(|| {
            PathwayError::navigation(format!("cannot go back from step {}", self.step))
        })?;
        debug!("Pathway step {} -> {}", self.step, previous);
        self.step = previous;
        Ok(previous)
    }

    /// Start a new assessment: first step, default record
    pub fn reset(&mut self) {
        debug!("Pathway reset from step {}", self.step);
        self.step = PathwayStep::Diagnosis;
        self.patient = PatientData::default();
    }

    /// Run the engine over the current record
    #[must_use]
    pub fn evaluate(&self) -> Evaluation {
        let evaluation = Evaluation::of(&self.patient);
        if self.config.log_evaluations {
            debug!(
                "Evaluated record: {}, {} risk, {} response",
                evaluation.stage, evaluation.risk, evaluation.response
            );
        }
        evaluation
    }

    /// Clinical report for the current record
    #[must_use]
    pub fn report(&self) -> ClinicalReport {
        let report = ClinicalReport::generate(&self.patient);
        if self.config.log_evaluations {
            debug!("Generated report at {}", report.generated_at);
        }
        report
    }

    /// Text of the sections the current step presents
    #[must_use]
    pub fn render_step(&self) -> String {
        let report = self.report();
        self.step
            .sections()
            .iter()
            .map(|section| report.render_section(*section))
            .join("\n")
    }
}
