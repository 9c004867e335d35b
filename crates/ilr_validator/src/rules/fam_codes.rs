//! FAM code validity rules.
//!
//! Rules over the tags themselves: the type must be published, the
//! type/code combination must be a valid catalog lookup at the delivery
//! start, and non-repeatable types may occur at most once per delivery.

use std::collections::HashMap;
use std::sync::Arc;

use ilr_core::constants::fam_type;
use ilr_core::{ErrorHandler, Learner, Rule, parameter};

use crate::famcatalog::FamCodeCatalog;

/// LearnDelFAMType_02: every tag's type must be a published FAM type.
pub struct KnownFamType;

impl KnownFamType {
    pub fn new() -> Self {
        Self
    }
}

impl Default for KnownFamType {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for KnownFamType {
    fn rule_name(&self) -> &'static str {
        "LearnDelFAMType_02"
    }

    fn validate(&self, learner: &Learner, handler: &mut dyn ErrorHandler) {
        for delivery in &learner.learning_deliveries {
            for fam in &delivery.fams {
                if !fam_type::ALL.contains(&fam.fam_type.as_str()) {
                    handler.handle(
                        self.rule_name(),
                        &learner.learn_ref_number,
                        delivery.aim_seq_number,
                        vec![parameter("LearnDelFAMType", &fam.fam_type)],
                    );
                }
            }
        }
    }
}

/// LearnDelFAMType_03: every tag must be a valid type/code lookup at the
/// delivery start date.
///
/// Tags whose type is unknown are left to `LearnDelFAMType_02`.
pub struct ValidFamCode {
    catalog: Arc<FamCodeCatalog>,
}

impl ValidFamCode {
    pub fn new(catalog: Arc<FamCodeCatalog>) -> Self {
        Self { catalog }
    }
}

impl Rule for ValidFamCode {
    fn rule_name(&self) -> &'static str {
        "LearnDelFAMType_03"
    }

    fn validate(&self, learner: &Learner, handler: &mut dyn ErrorHandler) {
        for delivery in &learner.learning_deliveries {
            for fam in &delivery.fams {
                if !fam_type::ALL.contains(&fam.fam_type.as_str()) {
                    continue;
                }
                if !self
                    .catalog
                    .is_valid_on(&fam.fam_type, &fam.fam_code, delivery.learn_start_date)
                {
                    handler.handle(
                        self.rule_name(),
                        &learner.learn_ref_number,
                        delivery.aim_seq_number,
                        vec![
                            parameter("LearnDelFAMType", &fam.fam_type),
                            parameter("LearnDelFAMCode", &fam.fam_code),
                        ],
                    );
                }
            }
        }
    }
}

/// LearnDelFAMType_07: types other than `LDM` and `DAM` may occur at most
/// once on a delivery.
pub struct NonRepeatableFamTypes;

impl NonRepeatableFamTypes {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NonRepeatableFamTypes {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for NonRepeatableFamTypes {
    fn rule_name(&self) -> &'static str {
        "LearnDelFAMType_07"
    }

    fn validate(&self, learner: &Learner, handler: &mut dyn ErrorHandler) {
        for delivery in &learner.learning_deliveries {
            let mut counts: HashMap<&str, usize> = HashMap::new();
            for fam in &delivery.fams {
                *counts.entry(fam.fam_type.as_str()).or_default() += 1;
            }

            let mut repeated: Vec<&str> = counts
                .into_iter()
                .filter(|(fam_type, count)| {
                    *count > 1 && !fam_type::REPEATABLE.contains(fam_type)
                })
                .map(|(fam_type, _)| fam_type)
                .collect();
            repeated.sort_unstable();

            for fam_type in repeated {
                handler.handle(
                    self.rule_name(),
                    &learner.learn_ref_number,
                    delivery.aim_seq_number,
                    vec![parameter("LearnDelFAMType", fam_type)],
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::ymd;
    use ilr_core::{ErrorCollector, FamCodeEntry, LearnerBuilder, LearningDeliveryBuilder};
    use pretty_assertions::assert_eq;

    fn catalog() -> Arc<FamCodeCatalog> {
        let entries = vec![
            FamCodeEntry {
                fam_type: "SOF".to_string(),
                fam_code: "105".to_string(),
                valid_from: ymd(2015, 8, 1),
                valid_to: None,
            },
            FamCodeEntry {
                fam_type: "LDM".to_string(),
                fam_code: "376".to_string(),
                valid_from: ymd(2020, 4, 1),
                valid_to: Some(ymd(2021, 3, 31)),
            },
        ];
        Arc::new(FamCodeCatalog::new(entries).unwrap())
    }

    #[test]
    fn test_02_unknown_type_raises_per_tag() {
        let learner = LearnerBuilder::new("L1")
            .delivery(
                LearningDeliveryBuilder::new("A1")
                    .fund_model(35)
                    .learn_start_date(ymd(2016, 9, 1))
                    .fam("SOF", "105")
                    .fam("XYZ", "1")
                    .fam("ABC", "2")
                    .build(),
            )
            .build();

        let mut collector = ErrorCollector::new();
        KnownFamType::new().validate(&learner, &mut collector);

        assert_eq!(collector.len(), 2);
        assert_eq!(collector.violations()[0].parameters[0].value, "XYZ");
        assert_eq!(collector.violations()[1].parameters[0].value, "ABC");
    }

    #[test]
    fn test_02_published_types_pass() {
        let mut builder = LearningDeliveryBuilder::new("A1")
            .fund_model(35)
            .learn_start_date(ymd(2016, 9, 1));
        for fam_type in fam_type::ALL {
            builder = builder.fam(fam_type, "1");
        }
        let learner = LearnerBuilder::new("L1").delivery(builder.build()).build();

        let mut collector = ErrorCollector::new();
        KnownFamType::new().validate(&learner, &mut collector);
        assert!(collector.is_empty());
    }

    #[test]
    fn test_03_combination_valid_at_start_passes() {
        let learner = LearnerBuilder::new("L1")
            .delivery(
                LearningDeliveryBuilder::new("A1")
                    .fund_model(35)
                    .learn_start_date(ymd(2020, 9, 1))
                    .fam("SOF", "105")
                    .fam("LDM", "376")
                    .build(),
            )
            .build();

        let mut collector = ErrorCollector::new();
        ValidFamCode::new(catalog()).validate(&learner, &mut collector);
        assert!(collector.is_empty());
    }

    #[test]
    fn test_03_combination_outside_window_raises() {
        let learner = LearnerBuilder::new("L1")
            .delivery(
                LearningDeliveryBuilder::new("A1")
                    .fund_model(35)
                    .learn_start_date(ymd(2021, 9, 1))
                    .fam("LDM", "376")
                    .build(),
            )
            .build();

        let mut collector = ErrorCollector::new();
        ValidFamCode::new(catalog()).validate(&learner, &mut collector);

        assert_eq!(collector.len(), 1);
        let violation = &collector.violations()[0];
        assert_eq!(violation.parameters[0].value, "LDM");
        assert_eq!(violation.parameters[1].value, "376");
    }

    #[test]
    fn test_03_unknown_code_raises() {
        let learner = LearnerBuilder::new("L1")
            .delivery(
                LearningDeliveryBuilder::new("A1")
                    .fund_model(35)
                    .learn_start_date(ymd(2016, 9, 1))
                    .fam("SOF", "999")
                    .build(),
            )
            .build();

        let mut collector = ErrorCollector::new();
        ValidFamCode::new(catalog()).validate(&learner, &mut collector);
        assert_eq!(collector.len(), 1);
    }

    #[test]
    fn test_03_unknown_type_left_to_rule_02() {
        let learner = LearnerBuilder::new("L1")
            .delivery(
                LearningDeliveryBuilder::new("A1")
                    .fund_model(35)
                    .learn_start_date(ymd(2016, 9, 1))
                    .fam("XYZ", "1")
                    .build(),
            )
            .build();

        let mut collector = ErrorCollector::new();
        ValidFamCode::new(catalog()).validate(&learner, &mut collector);
        assert!(collector.is_empty());
    }

    #[test]
    fn test_07_repeated_sof_raises() {
        let learner = LearnerBuilder::new("L1")
            .delivery(
                LearningDeliveryBuilder::new("A1")
                    .fund_model(35)
                    .learn_start_date(ymd(2016, 9, 1))
                    .fam("SOF", "105")
                    .fam("SOF", "107")
                    .build(),
            )
            .build();

        let mut collector = ErrorCollector::new();
        NonRepeatableFamTypes::new().validate(&learner, &mut collector);

        assert_eq!(collector.len(), 1);
        assert_eq!(collector.violations()[0].parameters[0].value, "SOF");
    }

    #[test]
    fn test_07_repeated_ldm_and_dam_allowed() {
        let learner = LearnerBuilder::new("L1")
            .delivery(
                LearningDeliveryBuilder::new("A1")
                    .fund_model(35)
                    .learn_start_date(ymd(2019, 9, 1))
                    .fam("LDM", "034")
                    .fam("LDM", "376")
                    .fam("DAM", "001")
                    .fam("DAM", "002")
                    .build(),
            )
            .build();

        let mut collector = ErrorCollector::new();
        NonRepeatableFamTypes::new().validate(&learner, &mut collector);
        assert!(collector.is_empty());
    }

    #[test]
    fn test_07_no_fams_never_raises() {
        let learner = LearnerBuilder::new("L1")
            .delivery(
                LearningDeliveryBuilder::new("A1")
                    .fund_model(35)
                    .learn_start_date(ymd(2016, 9, 1))
                    .build(),
            )
            .build();

        let mut collector = ErrorCollector::new();
        NonRepeatableFamTypes::new().validate(&learner, &mut collector);
        assert!(collector.is_empty());
    }
}
