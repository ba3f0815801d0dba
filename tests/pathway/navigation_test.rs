#[cfg(test)]
mod tests {
    use thyroid_pathway::models::{ImagingResult, MStage, NStage};
    use thyroid_pathway::report::ReportSection;
    use thyroid_pathway::{
        PathwayError, Pathway, PathwayConfig, PathwayStep, PatientData, ResponseType,
        RiskCategory,
    };

    #[test]
    fn test_walk_forward_and_back() {
        let mut pathway = Pathway::default();
        assert_eq!(pathway.step(), PathwayStep::Diagnosis);

        let forward: Vec<_> = (0..4).map(|_| pathway.next().unwrap()).collect();
        assert_eq!(forward, PathwayStep::ALL[1..]);

        let backward: Vec<_> = (0..4).map(|_| pathway.back().unwrap()).collect();
        assert_eq!(
            backward,
            [
                PathwayStep::Response,
                PathwayStep::Plan,
                PathwayStep::Risk,
                PathwayStep::Diagnosis
            ]
        );
    }

    #[test]
    fn test_no_movement_past_either_end() {
        let mut pathway = Pathway::default();
        let err = pathway.back().unwrap_err();
        assert!(matches!(err, PathwayError::NavigationError(_)));
        assert_eq!(pathway.step(), PathwayStep::Diagnosis);

        while pathway.next().is_ok() {}
        assert_eq!(pathway.step(), PathwayStep::Takeaway);
        assert!(pathway.next().unwrap_err().to_string().contains("5. Takeaway"));
    }

    #[test]
    fn test_step_sections() {
        assert!(PathwayStep::Diagnosis.sections().is_empty());
        assert_eq!(
            PathwayStep::Plan.sections(),
            [ReportSection::InitialManagement]
        );
        assert_eq!(PathwayStep::Takeaway.sections(), ReportSection::ALL);
    }

    #[test]
    fn test_edit_across_steps_reclassifies() {
        let mut pathway = Pathway::default();
        assert_eq!(pathway.evaluate().risk, RiskCategory::Low);

        pathway
            .edit(|p| {
                p.with_age(68.0)
                    .with_m_stage(MStage::M1)
                    .with_metastasis_site("Bone")
            })
            .unwrap();
        pathway.next().unwrap();
        assert_eq!(pathway.evaluate().risk, RiskCategory::High);

        pathway.next().unwrap();
        pathway.next().unwrap();
        pathway
            .edit(|p| p.with_imaging(ImagingResult::Structural))
            .unwrap();
        assert_eq!(
            pathway.evaluate().response,
            ResponseType::StructurallyIncomplete
        );
        assert_eq!(pathway.step(), PathwayStep::Response);
    }

    #[test]
    fn test_warnings_returned_not_fatal() {
        let mut pathway = Pathway::default();
        let report = pathway
            .update(PatientData::new().with_n_stage(NStage::N0).with_nodes(3, 1.0))
            .unwrap();
        assert!(report.mentions("involvedNodes"));
        assert_eq!(pathway.patient().involved_nodes, 3);
    }

    #[test]
    fn test_strict_pathway_rejects_contradictions() {
        let mut pathway = Pathway::new(PathwayConfig::default().strict());
        let result = pathway.update(PatientData::new().with_n_stage(NStage::N0).with_nodes(3, 1.0));
        assert!(matches!(result, Err(PathwayError::ValidationError(_))));
        assert_eq!(pathway.patient().involved_nodes, 0);
    }

    #[test]
    fn test_with_patient_validates() {
        let bad = PatientData::new().with_tsh(f64::INFINITY);
        assert!(Pathway::with_patient(PathwayConfig::default(), bad.clone()).is_err());
        assert!(Pathway::with_patient(PathwayConfig::default().without_validation(), bad).is_ok());
    }

    #[test]
    fn test_reset_starts_new_assessment() {
        let mut pathway = Pathway::default();
        pathway.edit(|p| p.with_tert(true)).unwrap();
        while pathway.next().is_ok() {}

        pathway.reset();
        assert_eq!(pathway.step(), PathwayStep::Diagnosis);
        assert_eq!(pathway.patient(), &PatientData::default());
        assert_eq!(pathway.evaluate().risk, RiskCategory::Low);
    }
}
