#[cfg(test)]
mod tests {
    use std::str::FromStr;
    use thyroid_pathway::PathwayError;
    use thyroid_pathway::algorithm::StageLabel;
    use thyroid_pathway::models::{
        Ete, Histology, NStage, RaiIndication, TgAbStatus, VascularInvasion,
    };
    use thyroid_pathway::{ResponseType, RiskCategory};

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Ete::from_str("gross").unwrap(), Ete::Gross);
        assert_eq!(NStage::from_str(" n1B ").unwrap(), NStage::N1b);
        assert_eq!(Histology::from_str("hurthle").unwrap(), Histology::Oncocytic);
        assert_eq!(
            "positive-rising".parse::<TgAbStatus>().unwrap(),
            TgAbStatus::PositiveRising
        );
    }

    #[test]
    fn test_unknown_label_names_field() {
        let err = VascularInvasion::from_str("Diffuse").unwrap_err();
        assert!(matches!(
            err,
            PathwayError::InvalidValue {
                field: "vascularInvasion",
                ..
            }
        ));
        assert_eq!(
            err.to_string(),
            "Invalid value 'Diffuse' for vascularInvasion"
        );
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for risk in RiskCategory::ALL {
            assert_eq!(risk.to_string().parse::<RiskCategory>().unwrap(), *risk);
        }
        for response in ResponseType::ALL {
            assert_eq!(
                response.to_string().parse::<ResponseType>().unwrap(),
                *response
            );
        }
        for indication in RaiIndication::ALL {
            assert_eq!(
                indication.label().parse::<RaiIndication>().unwrap(),
                *indication
            );
        }
    }

    #[test]
    fn test_value_set_sizes() {
        assert_eq!(Histology::ALL.len(), 4);
        assert_eq!(NStage::ALL.len(), 4);
        assert_eq!(TgAbStatus::ALL.len(), 4);
        assert_eq!(RiskCategory::ALL.len(), 5);
        assert_eq!(StageLabel::ALL.len(), 3);
    }

    #[test]
    fn test_risk_is_ordered_by_severity() {
        let mut shuffled = vec![
            RiskCategory::High,
            RiskCategory::VeryLow,
            RiskCategory::Intermediate,
            RiskCategory::Low,
            RiskCategory::LowIntermediate,
        ];
        shuffled.sort();
        assert_eq!(shuffled, RiskCategory::ALL);
    }
}
