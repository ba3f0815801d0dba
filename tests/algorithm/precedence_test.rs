#[cfg(test)]
mod tests {
    use crate::utils::{SAMPLE_SIZE, random_patient, seeded_rng};
    use thyroid_pathway::algorithm::risk::RISK_RULES;
    use thyroid_pathway::algorithm::surveillance::SURVEILLANCE_RULES;
    use thyroid_pathway::algorithm::{Disqualifier, as_candidacy, ata_risk};
    use thyroid_pathway::models::{Ete, MStage, MarginStatus, NStage};
    use thyroid_pathway::{PatientData, RiskCategory};

    #[test]
    fn test_tert_microcarcinoma_is_high() {
        let p = PatientData::new()
            .with_tumor_size(0.8)
            .with_ete(Ete::None)
            .with_n_stage(NStage::N0)
            .with_multifocality(false)
            .with_tert(true);

        assert!(RISK_RULES.applicable_rule_names(&p).contains(&"very-low"));
        assert_eq!(RISK_RULES.matched_rule_name(&p), Some("high"));
        assert_eq!(ata_risk(&p), RiskCategory::High);
    }

    #[test]
    fn test_pediatric_precedes_tumor_size() {
        let p = PatientData::new().with_age(10.0).with_tumor_size(5.0);
        let candidacy = as_candidacy(&p);

        assert_eq!(
            SURVEILLANCE_RULES.applicable_rule_names(&p)[..2],
            ["pediatric", "tumor-size"]
        );
        assert_eq!(candidacy.disqualifier, Some(Disqualifier::Pediatric));
        assert_eq!(candidacy.reason, "Pediatric status requires surgery.");
    }

    #[test]
    fn test_high_risk_features_always_dominate() {
        let mut rng = seeded_rng();
        for _ in 0..SAMPLE_SIZE {
            let p = random_patient(&mut rng);
            let high = p.m_stage == MStage::M1
                || p.ete == Ete::Gross
                || p.margins == MarginStatus::R2
                || p.molecular_markers.tert;
            assert_eq!(ata_risk(&p) == RiskCategory::High, high, "record: {p:?}");
        }
    }

    #[test]
    fn test_first_applicable_rule_decides() {
        let mut rng = seeded_rng();
        for _ in 0..SAMPLE_SIZE {
            let p = random_patient(&mut rng);
            let applicable = RISK_RULES.applicable_rule_names(&p);
            assert_eq!(RISK_RULES.matched_rule_name(&p), applicable.first().copied());

            let expected = applicable
                .first()
                .and_then(|name| RISK_RULES.rule(name))
                .map_or(RISK_RULES.fallback, |rule| rule.outcome);
            assert_eq!(ata_risk(&p), expected);
        }
    }

    #[test]
    fn test_disqualified_candidates_name_their_disqualifier() {
        let mut rng = seeded_rng();
        for _ in 0..SAMPLE_SIZE {
            let p = random_patient(&mut rng);
            let candidacy = as_candidacy(&p);
            assert_eq!(
                candidacy.status.is_eligible(),
                candidacy.disqualifier.is_none()
            );
        }
    }
}
