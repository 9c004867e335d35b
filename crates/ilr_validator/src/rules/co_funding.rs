//! Co-funding eligibility rules.

use std::sync::Arc;

use ilr_core::constants::{fam_type, ffi, fund_model, lars};
use ilr_core::{ErrorHandler, Learner, LearningDelivery, Rule, opt_parameter, parameter};

use crate::dates::{self, ymd};
use crate::derived;
use crate::famquery;
use crate::lars::LarsLookups;

/// LearnDelFAMType_66: learners aged 24+ entitled to full funding must not
/// be returned as co-funded (`FFI` code 2).
///
/// The entitlement arises two ways: the aim is an English or maths basic
/// skills aim, or the learner was unemployed and in receipt of benefits at
/// the delivery start. Apprenticeships, traineeships and restarts follow
/// their own funding rules and are out of scope.
pub struct CoFundedFullEntitlement {
    lars: Arc<dyn LarsLookups>,
}

impl CoFundedFullEntitlement {
    pub fn new(lars: Arc<dyn LarsLookups>) -> Self {
        Self { lars }
    }

    fn co_funded_adult_skills(&self, delivery: &LearningDelivery) -> bool {
        delivery.fund_model == fund_model::ADULT_SKILLS
            && famquery::has_fam(&delivery.fams, fam_type::FFI, ffi::CO_FUNDED)
    }

    fn entitled_to_full_funding(&self, learner: &Learner, delivery: &LearningDelivery) -> bool {
        derived::is_adult_funded_unemployed_with_benefits(delivery, learner)
            || self.lars.is_basic_skills_on(
                &delivery.learn_aim_ref,
                lars::ENGLISH_MATHS_BASIC_SKILLS,
                delivery.learn_start_date,
            )
    }

    fn condition_met(&self, learner: &Learner, delivery: &LearningDelivery) -> bool {
        self.co_funded_adult_skills(delivery)
            && delivery.learn_start_date >= ymd(2016, 8, 1)
            && learner
                .date_of_birth
                .is_some_and(|dob| {
                    dates::whole_years_between(dob, delivery.learn_start_date) >= 24
                })
            && self.entitled_to_full_funding(learner, delivery)
            && !derived::is_apprenticeship(delivery.prog_type)
            && !derived::is_traineeship(delivery.prog_type)
            && !derived::is_restart(&delivery.fams)
    }
}

impl Rule for CoFundedFullEntitlement {
    fn rule_name(&self) -> &'static str {
        "LearnDelFAMType_66"
    }

    fn validate(&self, learner: &Learner, handler: &mut dyn ErrorHandler) {
        for delivery in &learner.learning_deliveries {
            if self.condition_met(learner, delivery) {
                handler.handle(
                    self.rule_name(),
                    &learner.learn_ref_number,
                    delivery.aim_seq_number,
                    vec![
                        parameter("FundModel", delivery.fund_model),
                        parameter("LearnDelFAMType", fam_type::FFI),
                        parameter("LearnDelFAMCode", ffi::CO_FUNDED),
                        parameter("LearnStartDate", delivery.learn_start_date),
                        opt_parameter("DateOfBirth", learner.date_of_birth),
                    ],
                );
            }
        }
    }
}
