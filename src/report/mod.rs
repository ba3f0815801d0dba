//! Evaluation and clinical report
//!
//! An [`Evaluation`] bundles every rule output for one patient snapshot. A
//! [`ClinicalReport`] pins an evaluation to the record it came from and the
//! moment it was generated, and renders it as text or JSON.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use crate::algorithm::{
    FollowUpAction, MonitoringSchedule, RaiPlan, StageLabel, SurgeryPlan, SurveillanceCandidacy,
    TshTarget, as_candidacy, ata_risk, follow_up_actions, follow_up_tsh_target, initial_tsh_goal,
    molecular_status, rai_plan, response, schedule, stage, surgery_plan,
};
use crate::error::Result;
use crate::models::{PatientData, ResponseType, RiskCategory};

/// Every rule output for one patient snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub stage: StageLabel,
    pub risk: RiskCategory,
    pub molecular_status: &'static str,
    pub surgery: SurgeryPlan,
    pub rai: RaiPlan,
    pub surveillance: SurveillanceCandidacy,
    pub initial_tsh_goal: TshTarget,
    pub response: ResponseType,
    pub response_implication: &'static str,
    pub schedule: MonitoringSchedule,
    pub follow_up_tsh_target: TshTarget,
    /// Whether the measured TSH already meets the follow-up target
    pub tsh_on_target: bool,
    pub follow_up_actions: &'static [FollowUpAction],
}

impl Evaluation {
    /// Run the whole engine over one record
    #[must_use]
    pub fn of(p: &PatientData) -> Self {
        let risk = ata_risk(p);
        let response = response(p);
        let follow_up_tsh_target = follow_up_tsh_target(response);

        Self {
            stage: stage(p),
            risk,
            molecular_status: molecular_status(p),
            surgery: surgery_plan(p),
            rai: rai_plan(risk, p),
            surveillance: as_candidacy(p),
            initial_tsh_goal: initial_tsh_goal(risk),
            response,
            response_implication: response.implication(),
            schedule: schedule(response),
            follow_up_tsh_target,
            tsh_on_target: follow_up_tsh_target.is_met_by(p.tsh),
            follow_up_actions: follow_up_actions(),
        }
    }
}

/// Sections of the rendered report, in print order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ReportSection {
    RiskAndStaging,
    InitialManagement,
    FollowUp,
    ClinicalAnalysis,
}

impl ReportSection {
    pub const ALL: [Self; 4] = [
        Self::RiskAndStaging,
        Self::InitialManagement,
        Self::FollowUp,
        Self::ClinicalAnalysis,
    ];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::RiskAndStaging => "1. Risk & Staging Summary",
            Self::InitialManagement => "2. Initial Management Strategy (Guidance)",
            Self::FollowUp => "3. Dynamic Re-stratification & Follow-up",
            Self::ClinicalAnalysis => "4. IF-THEN Clinical Analysis",
        }
    }
}

/// Point-in-time report for one patient record
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicalReport {
    pub generated_at: DateTime<Utc>,
    pub patient: PatientData,
    pub evaluation: Evaluation,
}

impl ClinicalReport {
    /// Evaluate a record and stamp the report with the current time
    #[must_use]
    pub fn generate(p: &PatientData) -> Self {
        Self::generate_at(p, Utc::now())
    }

    /// Evaluate a record with an explicit timestamp
    #[must_use]
    pub fn generate_at(p: &PatientData, generated_at: DateTime<Utc>) -> Self {
        Self {
            generated_at,
            patient: p.clone(),
            evaluation: Evaluation::of(p),
        }
    }

    /// One-line description of the record the report was built from
    #[must_use]
    pub fn patient_summary(&self) -> String {
        let p = &self.patient;
        format!(
            "{}-year-old {}, {} carcinoma, {} cm, ETE {}, {} {}",
            p.age, p.sex, p.histology, p.tumor_size_cm, p.ete, p.n_stage, p.m_stage
        )
    }

    /// Pretty-printed JSON document
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render a single section as text
    #[must_use]
    pub fn render_section(&self, section: ReportSection) -> String {
        SectionView {
            report: self,
            section,
        }
        .to_string()
    }

    fn write_section(&self, f: &mut fmt::Formatter<'_>, section: ReportSection) -> fmt::Result {
        let e = &self.evaluation;
        writeln!(f, "{}", section.title())?;
        match section {
            ReportSection::RiskAndStaging => {
                writeln!(f, "  AJCC 8th Stage:    {}", e.stage)?;
                writeln!(f, "  ATA Initial Risk:  {}", e.risk)?;
                writeln!(f, "  Current Response:  {}", e.response)?;
                writeln!(f, "  Molecular Status:  {}", e.molecular_status)?;
            }
            ReportSection::InitialManagement => {
                writeln!(f, "  Surgery Recommendation [{}]", e.surgery.citation)?;
                writeln!(f, "    {}", e.surgery.procedure)?;
                writeln!(f, "    {}", e.surgery.dissection)?;
                writeln!(f, "    {}", e.surgery.rationale)?;
                writeln!(f, "  RAI Recommendation [{}]", e.rai.citation)?;
                writeln!(f, "    {}", e.rai.status)?;
                writeln!(f, "    Purpose: {}", e.rai.purpose)?;
                writeln!(f, "    {}", e.rai.text)?;
                writeln!(f, "  Active Surveillance [{}]", e.surveillance.citation)?;
                writeln!(f, "    {}", e.surveillance.status)?;
                writeln!(f, "    {}", e.surveillance.reason)?;
                writeln!(
                    f,
                    "  Initial TSH Goal:  {} [{}]",
                    e.initial_tsh_goal,
                    e.initial_tsh_goal.citation()
                )?;
            }
            ReportSection::FollowUp => {
                writeln!(
                    f,
                    "  Biochemical Labs (Tg/TgAb):  {} [{}]",
                    e.schedule.labs, e.schedule.citation
                )?;
                writeln!(
                    f,
                    "  Imaging (Neck Ultrasound):   {} [{}]",
                    e.schedule.imaging, e.schedule.citation
                )?;
                writeln!(
                    f,
                    "  TSH Maintenance Target:      {} [{}]",
                    e.follow_up_tsh_target,
                    e.follow_up_tsh_target.citation()
                )?;
                let tsh_status = if e.tsh_on_target {
                    "meets target"
                } else {
                    "outside target"
                };
                writeln!(
                    f,
                    "  Current TSH:                 {} mIU/L ({tsh_status})",
                    self.patient.tsh
                )?;
                writeln!(f, "  {}", e.response_implication)?;
            }
            ReportSection::ClinicalAnalysis => {
                for action in e.follow_up_actions {
                    writeln!(
                        f,
                        "  IF {} -> ACTION: {} ({})",
                        action.condition, action.action, action.citation
                    )?;
                }
            }
        }
        Ok(())
    }
}

struct SectionView<'a> {
    report: &'a ClinicalReport,
    section: ReportSection,
}

impl fmt::Display for SectionView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.report.write_section(f, self.section)
    }
}

impl fmt::Display for ClinicalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CLINICAL MANAGEMENT REPORT")?;
        writeln!(f, "ATA-2025 DETERMINISTIC CLINICAL PATHWAY")?;
        writeln!(
            f,
            "Generated: {}",
            self.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(f, "Patient: {}", self.patient_summary())?;
        for section in ReportSection::ALL {
            writeln!(f)?;
            self.write_section(f, section)?;
        }
        Ok(())
    }
}
