//! Full-funding eligibility rules.
//!
//! Adult-skills aims tagged as fully funded (`FFI` code 1) are only viable
//! for learners entitled to full funding. These rules flag deliveries whose
//! learner or aim falls outside the entitlement: level 3+ learners aged 24
//! and over (who moved onto loans), and 19-23 year olds on level 2 aims
//! below the full-level-2 threshold.
//!
//! All three share one exclusion list: a delivery already covered by an
//! apprenticeship, traineeship, restart, a monitored exception programme or
//! the unemployed-with-benefits entitlement is out of scope.

use std::sync::Arc;

use chrono::NaiveDate;

use ilr_core::constants::{fam_type, ffi, fund_model, lars, ldm, prior_attain, sof};
use ilr_core::{ErrorHandler, Learner, LearningDelivery, Rule, opt_parameter, parameter};

use crate::dates::{self, AcademicYearService, ymd};
use crate::derived;
use crate::famquery;
use crate::lars::LarsLookups;

fn viable_window_start() -> NaiveDate {
    ymd(2016, 8, 1)
}

fn viable_window_end() -> NaiveDate {
    ymd(2017, 7, 31)
}

fn fully_funded_adult_skills(delivery: &LearningDelivery) -> bool {
    delivery.fund_model == fund_model::ADULT_SKILLS
        && famquery::has_fam(&delivery.fams, fam_type::FFI, ffi::FULLY_FUNDED)
}

fn age_at_start(learner: &Learner, delivery: &LearningDelivery) -> Option<i32> {
    learner
        .date_of_birth
        .map(|dob| dates::whole_years_between(dob, delivery.learn_start_date))
}

fn excluded(learner: &Learner, delivery: &LearningDelivery) -> bool {
    derived::is_apprenticeship(delivery.prog_type)
        || derived::is_traineeship(delivery.prog_type)
        || derived::is_restart(&delivery.fams)
        || famquery::has_any_fam_code(&delivery.fams, fam_type::LDM, ldm::FULL_FUNDING_EXCLUSIONS)
        || derived::is_adult_funded_unemployed_with_benefits(delivery, learner)
}

fn full_funding_parameters(
    learner: &Learner,
    delivery: &LearningDelivery,
) -> Vec<ilr_core::ErrorMessageParameter> {
    vec![
        parameter("FundModel", delivery.fund_model),
        parameter("LearnDelFAMType", fam_type::FFI),
        parameter("LearnDelFAMCode", ffi::FULLY_FUNDED),
        parameter("LearnStartDate", delivery.learn_start_date),
        opt_parameter("DateOfBirth", learner.date_of_birth),
    ]
}

/// LearnDelFAMType_60: learners aged 24+ with full level 3 prior
/// attainment must not be fully funded on a level 3+ aim starting in the
/// 2016/17 viable window (1 August 2016 to 31 July 2017, inclusive).
pub struct FullFundingLevelThree2016 {
    lars: Arc<dyn LarsLookups>,
}

impl FullFundingLevelThree2016 {
    pub fn new(lars: Arc<dyn LarsLookups>) -> Self {
        Self { lars }
    }

    fn condition_met(&self, learner: &Learner, delivery: &LearningDelivery) -> bool {
        fully_funded_adult_skills(delivery)
            && dates::is_between_inclusive(
                delivery.learn_start_date,
                viable_window_start(),
                viable_window_end(),
            )
            && age_at_start(learner, delivery).is_some_and(|age| age >= 24)
            && learner
                .prior_attain
                .is_some_and(|code| prior_attain::FULL_LEVEL_3_AND_ABOVE.contains(&code))
            && self
                .lars
                .notional_level_in(&delivery.learn_aim_ref, lars::LEVEL_3_AND_ABOVE)
            && !excluded(learner, delivery)
    }
}

impl Rule for FullFundingLevelThree2016 {
    fn rule_name(&self) -> &'static str {
        "LearnDelFAMType_60"
    }

    fn validate(&self, learner: &Learner, handler: &mut dyn ErrorHandler) {
        for delivery in &learner.learning_deliveries {
            if self.condition_met(learner, delivery) {
                handler.handle(
                    self.rule_name(),
                    &learner.learn_ref_number,
                    delivery.aim_seq_number,
                    full_funding_parameters(learner, delivery),
                );
            }
        }
    }
}

/// LearnDelFAMType_61: the same entitlement check for starts strictly
/// outside the 2016/17 viable window.
///
/// Deliveries that ended before the academic year under validation are not
/// re-validated, and deliveries funded by a devolved authority follow that
/// authority's own rules.
pub struct FullFundingLevelThreeOngoing {
    lars: Arc<dyn LarsLookups>,
    academic_year: AcademicYearService,
}

impl FullFundingLevelThreeOngoing {
    pub fn new(lars: Arc<dyn LarsLookups>, academic_year: AcademicYearService) -> Self {
        Self {
            lars,
            academic_year,
        }
    }

    fn open_in_current_year(&self, delivery: &LearningDelivery) -> bool {
        delivery
            .learn_actual_end_date
            .is_none_or(|end| end >= self.academic_year.start())
    }

    fn condition_met(&self, learner: &Learner, delivery: &LearningDelivery) -> bool {
        fully_funded_adult_skills(delivery)
            && !dates::is_between_inclusive(
                delivery.learn_start_date,
                viable_window_start(),
                viable_window_end(),
            )
            && self.open_in_current_year(delivery)
            && !famquery::has_any_fam_code(&delivery.fams, fam_type::SOF, sof::DEVOLVED)
            && age_at_start(learner, delivery).is_some_and(|age| age >= 24)
            && learner
                .prior_attain
                .is_some_and(|code| prior_attain::FULL_LEVEL_3_AND_ABOVE.contains(&code))
            && self
                .lars
                .notional_level_in(&delivery.learn_aim_ref, lars::LEVEL_3_AND_ABOVE)
            && !excluded(learner, delivery)
    }
}

impl Rule for FullFundingLevelThreeOngoing {
    fn rule_name(&self) -> &'static str {
        "LearnDelFAMType_61"
    }

    fn validate(&self, learner: &Learner, handler: &mut dyn ErrorHandler) {
        for delivery in &learner.learning_deliveries {
            if self.condition_met(learner, delivery) {
                handler.handle(
                    self.rule_name(),
                    &learner.learn_ref_number,
                    delivery.aim_seq_number,
                    full_funding_parameters(learner, delivery),
                );
            }
        }
    }
}

/// LearnDelFAMType_79: 19-23 year olds must not be fully funded on a level
/// 2 aim that falls short of the full-level-2 threshold.
///
/// The age band is inclusive at both ends, computed as whole years between
/// date of birth and learning start. An aim with no recorded full-level-2
/// percentage counts as below the threshold.
pub struct YoungAdultFullFundingLevelTwo {
    lars: Arc<dyn LarsLookups>,
}

impl YoungAdultFullFundingLevelTwo {
    pub fn new(lars: Arc<dyn LarsLookups>) -> Self {
        Self { lars }
    }

    fn below_full_level_2_threshold(&self, delivery: &LearningDelivery) -> bool {
        self.lars
            .full_level_2_percent_on(&delivery.learn_aim_ref, delivery.learn_start_date)
            .is_none_or(|percent| percent < lars::FULL_LEVEL_2_PERCENT)
    }

    fn condition_met(&self, learner: &Learner, delivery: &LearningDelivery) -> bool {
        fully_funded_adult_skills(delivery)
            && delivery.learn_start_date >= viable_window_start()
            && age_at_start(learner, delivery).is_some_and(|age| (19..=23).contains(&age))
            && self
                .lars
                .notional_level_in(&delivery.learn_aim_ref, &[lars::LEVEL_2])
            && self.below_full_level_2_threshold(delivery)
            && !excluded(learner, delivery)
    }
}

impl Rule for YoungAdultFullFundingLevelTwo {
    fn rule_name(&self) -> &'static str {
        "LearnDelFAMType_79"
    }

    fn validate(&self, learner: &Learner, handler: &mut dyn ErrorHandler) {
        for delivery in &learner.learning_deliveries {
            if self.condition_met(learner, delivery) {
                handler.handle(
                    self.rule_name(),
                    &learner.learn_ref_number,
                    delivery.aim_seq_number,
                    full_funding_parameters(learner, delivery),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lars::LarsDataService;
    use ilr_core::{
        EmploymentStatusBuilder, ErrorCollector, LarsLearningDelivery, LearnerBuilder,
        LearningDeliveryBuilder,
    };
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn level_3_lars() -> Arc<dyn LarsLookups> {
        Arc::new(
            LarsDataService::new(vec![LarsLearningDelivery {
                learn_aim_ref: "L3AIM".to_string(),
                notional_nvq_level: Some("3".to_string()),
                categories: vec![],
                annual_values: vec![],
            }])
            .unwrap(),
        )
    }

    fn level_2_lars(percent: Option<f64>) -> Arc<dyn LarsLookups> {
        Arc::new(
            LarsDataService::new(vec![LarsLearningDelivery {
                learn_aim_ref: "L2AIM".to_string(),
                notional_nvq_level: Some("2".to_string()),
                categories: vec![],
                annual_values: vec![ilr_core::LarsAnnualValue {
                    basic_skills_type: None,
                    full_level_2_percent: percent,
                    full_level_3_percent: None,
                    effective_from: ymd(2015, 8, 1),
                    effective_to: None,
                }],
            }])
            .unwrap(),
        )
    }

    fn fully_funded(aim_ref: &str, start: NaiveDate) -> LearningDeliveryBuilder {
        LearningDeliveryBuilder::new(aim_ref)
            .fund_model(35)
            .learn_start_date(start)
            .fam("FFI", "1")
    }

    fn learner_24_plus(delivery: ilr_core::LearningDelivery) -> ilr_core::Learner {
        LearnerBuilder::new("L1")
            .date_of_birth(ymd(1980, 1, 1))
            .prior_attain(4)
            .delivery(delivery)
            .build()
    }

    #[test]
    fn test_60_viable_window_boundaries_inclusive() {
        let cases = [
            (ymd(2016, 7, 31), false),
            (ymd(2016, 8, 1), true),
            (ymd(2017, 1, 15), true),
            (ymd(2017, 7, 31), true),
            (ymd(2017, 8, 1), false),
        ];

        for (start, expected) in cases {
            let learner = learner_24_plus(fully_funded("L3AIM", start).build());
            let rule = FullFundingLevelThree2016::new(level_3_lars());
            let mut collector = ErrorCollector::new();
            rule.validate(&learner, &mut collector);
            assert_eq!(collector.len(), usize::from(expected), "start {start}");
        }
    }

    #[test]
    fn test_60_age_boundary_24_inclusive() {
        let start = ymd(2016, 9, 1);
        let cases = [
            (ymd(1992, 9, 2), false), // 23 on start date
            (ymd(1992, 9, 1), true),  // 24 on start date
            (ymd(1980, 1, 1), true),
        ];

        for (dob, expected) in cases {
            let learner = LearnerBuilder::new("L1")
                .date_of_birth(dob)
                .prior_attain(4)
                .delivery(fully_funded("L3AIM", start).build())
                .build();
            let rule = FullFundingLevelThree2016::new(level_3_lars());
            let mut collector = ErrorCollector::new();
            rule.validate(&learner, &mut collector);
            assert_eq!(collector.len(), usize::from(expected), "dob {dob}");
        }
    }

    #[test]
    fn test_60_missing_date_of_birth_not_in_scope() {
        let learner = LearnerBuilder::new("L1")
            .prior_attain(4)
            .delivery(fully_funded("L3AIM", ymd(2016, 9, 1)).build())
            .build();

        let rule = FullFundingLevelThree2016::new(level_3_lars());
        let mut collector = ErrorCollector::new();
        rule.validate(&learner, &mut collector);
        assert!(collector.is_empty());
    }

    #[test]
    fn test_60_prior_attainment_below_level_3_not_in_scope() {
        let learner = LearnerBuilder::new("L1")
            .date_of_birth(ymd(1980, 1, 1))
            .prior_attain(3)
            .delivery(fully_funded("L3AIM", ymd(2016, 9, 1)).build())
            .build();

        let rule = FullFundingLevelThree2016::new(level_3_lars());
        let mut collector = ErrorCollector::new();
        rule.validate(&learner, &mut collector);
        assert!(collector.is_empty());
    }

    #[test]
    fn test_60_exclusions() {
        let start = ymd(2016, 9, 1);

        // Apprenticeship programme
        let learner = LearnerBuilder::new("L1")
            .date_of_birth(ymd(1980, 1, 1))
            .prior_attain(4)
            .delivery(fully_funded("L3AIM", start).prog_type(2).build())
            .build();
        let rule = FullFundingLevelThree2016::new(level_3_lars());
        let mut collector = ErrorCollector::new();
        rule.validate(&learner, &mut collector);
        assert!(collector.is_empty(), "apprenticeship excluded");

        // Restart
        let learner = learner_24_plus(fully_funded("L3AIM", start).fam("RES", "1").build());
        let mut collector = ErrorCollector::new();
        rule.validate(&learner, &mut collector);
        assert!(collector.is_empty(), "restart excluded");

        // Monitored exception programme
        let learner = learner_24_plus(fully_funded("L3AIM", start).fam("LDM", "347").build());
        let mut collector = ErrorCollector::new();
        rule.validate(&learner, &mut collector);
        assert!(collector.is_empty(), "LDM 347 excluded");

        // Unemployed with benefits at start
        let learner = LearnerBuilder::new("L1")
            .date_of_birth(ymd(1980, 1, 1))
            .prior_attain(4)
            .employment_status(
                EmploymentStatusBuilder::new(11, ymd(2016, 1, 1))
                    .monitoring("BSI", 1)
                    .build(),
            )
            .delivery(fully_funded("L3AIM", start).build())
            .build();
        let mut collector = ErrorCollector::new();
        rule.validate(&learner, &mut collector);
        assert!(collector.is_empty(), "unemployed with benefits excluded");
    }

    /// Counting double: answers every lookup affirmatively and records that
    /// it was consulted at all.
    struct SpyLars {
        calls: AtomicUsize,
    }

    impl SpyLars {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl LarsLookups for SpyLars {
        fn notional_level_in(&self, _: &str, _: &[&str]) -> bool {
            self.calls.fetch_add(1, Ordering::Relaxed);
            true
        }
        fn has_category_on(&self, _: &str, _: i32, _: NaiveDate) -> bool {
            self.calls.fetch_add(1, Ordering::Relaxed);
            true
        }
        fn is_basic_skills_on(&self, _: &str, _: &[i32], _: NaiveDate) -> bool {
            self.calls.fetch_add(1, Ordering::Relaxed);
            true
        }
        fn full_level_2_percent_on(&self, _: &str, _: NaiveDate) -> Option<f64> {
            self.calls.fetch_add(1, Ordering::Relaxed);
            Some(0.0)
        }
    }

    #[test]
    fn test_60_failed_funding_gate_short_circuits_lars() {
        let spy = Arc::new(SpyLars::new());
        let rule = FullFundingLevelThree2016::new(spy.clone());

        // Wrong fund model: the reference lookup must not run
        let learner = LearnerBuilder::new("L1")
            .date_of_birth(ymd(1980, 1, 1))
            .prior_attain(4)
            .delivery(
                LearningDeliveryBuilder::new("L3AIM")
                    .fund_model(25)
                    .learn_start_date(ymd(2016, 9, 1))
                    .fam("FFI", "1")
                    .build(),
            )
            .build();

        let mut collector = ErrorCollector::new();
        rule.validate(&learner, &mut collector);
        assert_eq!(spy.calls.load(Ordering::Relaxed), 0);
        assert!(collector.is_empty());
    }

    #[test]
    fn test_61_viable_strictly_outside_window() {
        let academic_year = AcademicYearService::new(ymd(2017, 8, 1));
        let cases = [
            (ymd(2016, 7, 31), true),
            (ymd(2016, 8, 1), false),
            (ymd(2017, 7, 31), false),
            (ymd(2017, 8, 1), true),
            (ymd(2018, 2, 1), true),
        ];

        for (start, expected) in cases {
            let learner = learner_24_plus(fully_funded("L3AIM", start).build());
            let rule = FullFundingLevelThreeOngoing::new(level_3_lars(), academic_year);
            let mut collector = ErrorCollector::new();
            rule.validate(&learner, &mut collector);
            assert_eq!(collector.len(), usize::from(expected), "start {start}");
        }
    }

    #[test]
    fn test_61_closed_before_current_year_not_revalidated() {
        let academic_year = AcademicYearService::new(ymd(2018, 8, 1));
        let rule = FullFundingLevelThreeOngoing::new(level_3_lars(), academic_year);

        let learner = learner_24_plus(
            fully_funded("L3AIM", ymd(2017, 9, 1))
                .learn_actual_end_date(ymd(2018, 7, 31))
                .build(),
        );
        let mut collector = ErrorCollector::new();
        rule.validate(&learner, &mut collector);
        assert!(collector.is_empty());

        let learner = learner_24_plus(
            fully_funded("L3AIM", ymd(2017, 9, 1))
                .learn_actual_end_date(ymd(2018, 8, 1))
                .build(),
        );
        let mut collector = ErrorCollector::new();
        rule.validate(&learner, &mut collector);
        assert_eq!(collector.len(), 1);
    }

    #[test]
    fn test_61_devolved_funding_excluded() {
        let academic_year = AcademicYearService::new(ymd(2019, 8, 1));
        let rule = FullFundingLevelThreeOngoing::new(level_3_lars(), academic_year);

        let learner =
            learner_24_plus(fully_funded("L3AIM", ymd(2019, 9, 1)).fam("SOF", "110").build());
        let mut collector = ErrorCollector::new();
        rule.validate(&learner, &mut collector);
        assert!(collector.is_empty());
    }

    fn young_learner(dob: NaiveDate, delivery: ilr_core::LearningDelivery) -> ilr_core::Learner {
        LearnerBuilder::new("L1")
            .date_of_birth(dob)
            .delivery(delivery)
            .build()
    }

    #[test]
    fn test_79_age_band_19_to_23_inclusive() {
        let start = ymd(2016, 9, 1);
        let cases = [
            (ymd(1998, 9, 2), false), // 17
            (ymd(1997, 9, 1), true),  // 19
            (ymd(1995, 3, 10), true), // 21
            (ymd(1992, 9, 2), true),  // 23
            (ymd(1992, 9, 1), false), // 24
        ];

        for (dob, expected) in cases {
            let learner = young_learner(dob, fully_funded("L2AIM", start).build());
            let rule = YoungAdultFullFundingLevelTwo::new(level_2_lars(Some(50.0)));
            let mut collector = ErrorCollector::new();
            rule.validate(&learner, &mut collector);
            assert_eq!(collector.len(), usize::from(expected), "dob {dob}");
        }
    }

    #[test]
    fn test_79_full_level_2_threshold() {
        let start = ymd(2016, 9, 1);
        let dob = ymd(1995, 3, 10);

        let cases = [
            (Some(100.0), false),
            (Some(99.9), true),
            (None, true),
        ];

        for (percent, expected) in cases {
            let learner = young_learner(dob, fully_funded("L2AIM", start).build());
            let rule = YoungAdultFullFundingLevelTwo::new(level_2_lars(percent));
            let mut collector = ErrorCollector::new();
            rule.validate(&learner, &mut collector);
            assert_eq!(collector.len(), usize::from(expected), "percent {percent:?}");
        }
    }

    #[test]
    fn test_79_level_3_aim_not_in_scope() {
        let learner = young_learner(
            ymd(1995, 3, 10),
            fully_funded("L3AIM", ymd(2016, 9, 1)).build(),
        );
        let rule = YoungAdultFullFundingLevelTwo::new(level_3_lars());
        let mut collector = ErrorCollector::new();
        rule.validate(&learner, &mut collector);
        assert!(collector.is_empty());
    }

    #[test]
    fn test_79_reports_published_parameters() {
        let learner = young_learner(
            ymd(1995, 3, 10),
            fully_funded("L2AIM", ymd(2016, 9, 1)).build(),
        );
        let rule = YoungAdultFullFundingLevelTwo::new(level_2_lars(None));
        let mut collector = ErrorCollector::new();
        rule.validate(&learner, &mut collector);

        let violation = &collector.violations()[0];
        assert_eq!(violation.rule_name, "LearnDelFAMType_79");
        assert_eq!(violation.parameters[0].value, "35");
        assert_eq!(violation.parameters[1].value, "FFI");
        assert_eq!(violation.parameters[2].value, "1");
        assert_eq!(violation.parameters[3].value, "2016-09-01");
        assert_eq!(violation.parameters[4].value, "1995-03-10");
    }
}
