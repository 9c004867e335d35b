//! Level 3 adult skills offer rules.

use std::sync::Arc;

use ilr_core::constants::{fam_type, fund_model, lars, ldm};
use ilr_core::{ErrorHandler, Learner, LearningDelivery, Rule, parameter};

use crate::famquery;
use crate::lars::LarsLookups;

/// LearnDelFAMType_83: an aim monitored as part of the level 3 adult
/// skills offer (`LDM` code 376) must be on the offer's qualification list
/// (LARS category 37) at the delivery start.
pub struct SkillsOfferEligibility {
    lars: Arc<dyn LarsLookups>,
}

impl SkillsOfferEligibility {
    const QUALIFYING_FUND_MODELS: &'static [i32] =
        &[fund_model::ADULT_SKILLS, fund_model::OTHER_ADULT];

    pub fn new(lars: Arc<dyn LarsLookups>) -> Self {
        Self { lars }
    }

    fn condition_met(&self, delivery: &LearningDelivery) -> bool {
        Self::QUALIFYING_FUND_MODELS.contains(&delivery.fund_model)
            && famquery::has_fam(&delivery.fams, fam_type::LDM, ldm::SKILLS_OFFER)
            && !self.lars.has_category_on(
                &delivery.learn_aim_ref,
                lars::CATEGORY_SKILLS_OFFER,
                delivery.learn_start_date,
            )
    }
}

impl Rule for SkillsOfferEligibility {
    fn rule_name(&self) -> &'static str {
        "LearnDelFAMType_83"
    }

    fn validate(&self, learner: &Learner, handler: &mut dyn ErrorHandler) {
        for delivery in &learner.learning_deliveries {
            if self.condition_met(delivery) {
                handler.handle(
                    self.rule_name(),
                    &learner.learn_ref_number,
                    delivery.aim_seq_number,
                    vec![
                        parameter("FundModel", delivery.fund_model),
                        parameter("LearnDelFAMType", fam_type::LDM),
                        parameter("LearnDelFAMCode", ldm::SKILLS_OFFER),
                    ],
                );
            }
        }
    }
}
