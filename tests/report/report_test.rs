#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use thyroid_pathway::algorithm::{CandidacyStatus, RaiStatus, TshTarget};
    use thyroid_pathway::models::{Ete, MStage, TgAbStatus};
    use thyroid_pathway::{ClinicalReport, Evaluation, PatientData, ResponseType, RiskCategory};

    use crate::utils::microcarcinoma;

    fn high_risk_record() -> PatientData {
        PatientData::new()
            .with_age(70.0)
            .with_ete(Ete::Gross)
            .with_m_stage(MStage::M1)
            .with_metastasis_site("Lung")
            .with_suppressed_tg(4.0)
            .with_tg_ab(TgAbStatus::PositiveRising)
            .with_tert(true)
    }

    #[test]
    fn test_high_risk_evaluation() {
        let e = Evaluation::of(&high_risk_record());

        assert_eq!(e.risk, RiskCategory::High);
        assert_eq!(e.molecular_status, "TERT+ (High)");
        assert_eq!(e.rai.status, RaiStatus::StronglyRecommended);
        assert_eq!(e.surveillance.status, CandidacyStatus::Inappropriate);
        assert_eq!(e.initial_tsh_goal, TshTarget::Suppressed);
        assert_eq!(e.response, ResponseType::BiochemicallyIncomplete);
        assert_eq!(
            e.response_implication,
            "Requires closer surveillance or active intervention."
        );
        assert_eq!(e.schedule.labs, "Every 3-6 months");
        assert_eq!(e.follow_up_tsh_target, TshTarget::Suppressed);
    }

    #[test]
    fn test_microcarcinoma_evaluation() {
        let e = Evaluation::of(&microcarcinoma(72.0));

        assert_eq!(e.risk, RiskCategory::VeryLow);
        assert_eq!(e.rai.status, RaiStatus::NotRecommended);
        assert_eq!(e.surveillance.status, CandidacyStatus::Ideal);
        assert_eq!(e.initial_tsh_goal, TshTarget::LowNormal);
        assert_eq!(e.response, ResponseType::Excellent);
        assert_eq!(e.follow_up_tsh_target.label(), "0.5 – 2.0 mIU/L");
    }

    #[test]
    fn test_report_text() {
        let at = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let text = ClinicalReport::generate_at(&high_risk_record(), at).to_string();

        assert!(text.contains("Generated: 2025-06-01 12:00:00 UTC"));
        assert!(text.contains("Patient: 70-year-old Female"));
        assert!(text.contains("AJCC 8th Stage:    Stage IVB"));
        assert!(text.contains("ATA Initial Risk:  High"));
        assert!(text.contains("Surgery Recommendation [R-2025-14]"));
        assert!(text.contains("RAI Recommendation [R-2025-45]"));
        assert!(text.contains("TSH Maintenance Target:      < 0.1 mIU/L [R-2025-58]"));
        assert!(text.contains("ACTION: De-escalate surveillance to annual biochemical monitoring only (R-2025-61)"));
    }

    #[test]
    fn test_report_json() {
        let at = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let json = ClinicalReport::generate_at(&high_risk_record(), at)
            .to_json()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let evaluation = &value["evaluation"];
        assert_eq!(evaluation["stage"], "Stage IVB");
        assert_eq!(evaluation["response"], "Biochemically Incomplete");
        assert_eq!(evaluation["surveillance"]["status"], "Inappropriate");
        assert_eq!(evaluation["surveillance"]["disqualifier"], "ExtrathyroidalExtension");
        assert_eq!(evaluation["followUpActions"].as_array().unwrap().len(), 2);
        assert_eq!(value["patient"]["metastasisSite"][0], "Lung");
    }

    #[test]
    fn test_generated_reports_differ_only_in_time() {
        let p = high_risk_record();
        let first = ClinicalReport::generate(&p);
        let second = ClinicalReport::generate(&p);

        assert!(second.generated_at >= first.generated_at);
        assert_eq!(first.evaluation, second.evaluation);
        assert_eq!(first.patient, second.patient);
    }
}
