#[cfg(test)]
mod tests {
    use crate::utils::microcarcinoma;
    use thyroid_pathway::algorithm::{
        CandidacyStatus, RaiStatus, StageLabel, SurgicalApproach, TshTarget, as_candidacy,
        ata_risk, initial_tsh_goal, rai_plan, response, schedule, stage, surgery_plan,
    };
    use thyroid_pathway::models::{Ete, ImagingResult, MStage, NStage, TgAbStatus};
    use thyroid_pathway::{PatientData, ResponseType, RiskCategory};

    #[test]
    fn test_older_localized_disease_is_stage_one() {
        let p = PatientData::new()
            .with_age(60.0)
            .with_m_stage(MStage::M0)
            .with_ete(Ete::None)
            .with_n_stage(NStage::N0);
        assert_eq!(stage(&p), StageLabel::StageI);
        assert_eq!(stage(&p).to_string(), "Stage I");
    }

    #[test]
    fn test_older_distant_metastasis() {
        let p = PatientData::new()
            .with_age(70.0)
            .with_m_stage(MStage::M1)
            .with_metastasis_site("Lung");

        assert_eq!(stage(&p), StageLabel::StageIVB);

        let risk = ata_risk(&p);
        assert_eq!(risk, RiskCategory::High);

        let rai = rai_plan(risk, &p);
        assert_eq!(rai.status, RaiStatus::StronglyRecommended);
        assert_eq!(rai.citation, "R-2025-45");

        assert_eq!(surgery_plan(&p).approach, SurgicalApproach::TotalThyroidectomy);
        assert_eq!(initial_tsh_goal(risk), TshTarget::Suppressed);
    }

    #[test]
    fn test_younger_distant_metastasis_is_stage_two() {
        let p = PatientData::new().with_age(40.0).with_m_stage(MStage::M1);
        assert_eq!(stage(&p), StageLabel::StageII);
    }

    #[test]
    fn test_older_lateral_nodes_is_stage_two() {
        let p = PatientData::new().with_age(58.0).with_n_stage(NStage::N1b);
        assert_eq!(stage(&p), StageLabel::StageII);

        let younger = p.clone().with_age(54.0);
        assert_eq!(stage(&younger), StageLabel::StageI);
    }

    #[test]
    fn test_microcarcinoma_older_patient() {
        let p = microcarcinoma(65.0);

        let risk = ata_risk(&p);
        assert_eq!(risk, RiskCategory::VeryLow);
        assert_eq!(rai_plan(risk, &p).status, RaiStatus::NotRecommended);
        assert_eq!(as_candidacy(&p).status, CandidacyStatus::Ideal);
        assert_eq!(
            surgery_plan(&p).procedure,
            "Lobectomy or Active Surveillance"
        );
    }

    #[test]
    fn test_microcarcinoma_surveillance_age_boundary() {
        assert_eq!(as_candidacy(&microcarcinoma(60.0)).status, CandidacyStatus::Ideal);
        assert_eq!(
            as_candidacy(&microcarcinoma(59.0)).status,
            CandidacyStatus::AppropriateWithSharedDecision
        );
        assert_eq!(
            as_candidacy(&microcarcinoma(30.0)).reason,
            "Meets primary criteria for observation; requires committed lifelong follow-up."
        );
    }

    #[test]
    fn test_response_thresholds() {
        let follow_up = |tg: f64| {
            PatientData::new()
                .with_suppressed_tg(tg)
                .with_tg_ab(TgAbStatus::Negative)
                .with_imaging(ImagingResult::Negative)
        };

        assert_eq!(response(&follow_up(1.0)), ResponseType::Indeterminate);
        assert_eq!(response(&follow_up(1.01)), ResponseType::BiochemicallyIncomplete);
        assert_eq!(response(&follow_up(0.19)), ResponseType::Excellent);
        assert_eq!(response(&follow_up(0.2)), ResponseType::Indeterminate);
    }

    #[test]
    fn test_schedules() {
        let excellent = schedule(ResponseType::Excellent);
        assert_eq!(excellent.labs, "Every 12-24 months");
        assert_eq!(excellent.imaging, "None or every 3-5 years");

        let structural = schedule(ResponseType::StructurallyIncomplete);
        assert_eq!(structural.labs, "Intensive Monitoring");
        assert_eq!(structural.imaging, "Frequent (3-6 months)");
        assert_eq!(structural.citation, "R-2025-74");
    }
}
