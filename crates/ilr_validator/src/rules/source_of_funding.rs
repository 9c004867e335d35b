//! Source-of-funding rules.
//!
//! Rules over the `SOF` funding-source tag: its presence on community
//! learning aims, the code adult-skills aims must carry, the monitoring a
//! devolved funding source requires, and the sources offender learning in
//! the community may not be returned with.

use std::sync::Arc;

use ilr_core::constants::{fam_type, fund_model, ldm, sof};
use ilr_core::{ErrorHandler, Learner, LearningDelivery, Rule, parameter};

use crate::famquery;
use crate::organisation::OrganisationLookups;

/// LearnDelFAMType_01: community learning aims must carry a source of
/// funding, unless the provider is covered by a short-term funding
/// initiative at the delivery start.
pub struct CommunityLearningSourceOfFunding {
    ukprn: i64,
    organisations: Arc<dyn OrganisationLookups>,
}

impl CommunityLearningSourceOfFunding {
    pub fn new(ukprn: i64, organisations: Arc<dyn OrganisationLookups>) -> Self {
        Self {
            ukprn,
            organisations,
        }
    }

    fn condition_met(&self, delivery: &LearningDelivery) -> bool {
        delivery.fund_model == fund_model::COMMUNITY_LEARNING
            && !famquery::has_fam_type(&delivery.fams, fam_type::SOF)
            && !self
                .organisations
                .has_short_term_funding_initiative_on(self.ukprn, delivery.learn_start_date)
    }
}

impl Rule for CommunityLearningSourceOfFunding {
    fn rule_name(&self) -> &'static str {
        "LearnDelFAMType_01"
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
                        parameter("LearnDelFAMType", fam_type::SOF),
                    ],
                );
            }
        }
    }
}

/// LearnDelFAMType_09: adult-skills aims carrying a source of funding must
/// carry ESFA adult funding (code 105).
pub struct AdultSkillsSourceOfFunding;

impl AdultSkillsSourceOfFunding {
    pub fn new() -> Self {
        Self
    }

    fn qualifying_funding(&self, delivery: &LearningDelivery) -> bool {
        delivery.fund_model == fund_model::ADULT_SKILLS
            && famquery::has_fam_type(&delivery.fams, fam_type::SOF)
    }

    fn has_disqualifying_monitor(&self, delivery: &LearningDelivery) -> bool {
        !famquery::has_fam(&delivery.fams, fam_type::SOF, sof::ESFA_ADULT)
    }

    fn condition_met(&self, delivery: &LearningDelivery) -> bool {
        self.qualifying_funding(delivery) && self.has_disqualifying_monitor(delivery)
    }
}

impl Default for AdultSkillsSourceOfFunding {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for AdultSkillsSourceOfFunding {
    fn rule_name(&self) -> &'static str {
        "LearnDelFAMType_09"
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
                        parameter("LearnDelFAMType", fam_type::SOF),
                        parameter("LearnDelFAMCode", sof::ESFA_ADULT),
                    ],
                );
            }
        }
    }
}

/// LearnDelFAMType_73: a delivery funded by a devolved authority must carry
/// devolved area monitoring.
pub struct DevolvedAreaMonitoring;

impl DevolvedAreaMonitoring {
    pub fn new() -> Self {
        Self
    }

    fn devolved_sof_code<'a>(&self, delivery: &'a LearningDelivery) -> Option<&'a str> {
        famquery::fams_of_type(&delivery.fams, fam_type::SOF)
            .map(|fam| fam.fam_code.as_str())
            .find(|code| sof::DEVOLVED.contains(code))
    }

    fn condition_met(&self, delivery: &LearningDelivery) -> bool {
        self.devolved_sof_code(delivery).is_some()
            && !famquery::has_fam_type(&delivery.fams, fam_type::DAM)
    }
}

impl Default for DevolvedAreaMonitoring {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for DevolvedAreaMonitoring {
    fn rule_name(&self) -> &'static str {
        "LearnDelFAMType_73"
    }

    fn validate(&self, learner: &Learner, handler: &mut dyn ErrorHandler) {
        for delivery in &learner.learning_deliveries {
            if self.condition_met(delivery) {
                let sof_code = self.devolved_sof_code(delivery).unwrap_or_default();
                handler.handle(
                    self.rule_name(),
                    &learner.learn_ref_number,
                    delivery.aim_seq_number,
                    vec![
                        parameter("LearnDelFAMType", fam_type::DAM),
                        parameter("LearnDelFAMCode", sof_code),
                    ],
                );
            }
        }
    }
}

/// LearnDelFAMType_74: offender learning in the community must not be
/// returned with a non-ESFA-adult source of funding.
pub struct OffenderLearningSourceOfFunding;

impl OffenderLearningSourceOfFunding {
    /// Source codes that may not accompany offender learning in the
    /// community. ESFA adult funding (105) is the one qualifying source.
    const DISQUALIFYING_SOF: &'static [&'static str] = &[
        sof::HEFCE,
        sof::ESFA_16_19,
        sof::GMCA,
        sof::LCRCA,
        sof::WMCA,
        sof::WECA,
        sof::TVCA,
        sof::CPCA,
        sof::GLA,
    ];

    pub fn new() -> Self {
        Self
    }

    fn monitored_delivery(&self, delivery: &LearningDelivery) -> bool {
        famquery::has_fam(&delivery.fams, fam_type::LDM, ldm::OLASS_COMMUNITY)
    }
}

impl Default for OffenderLearningSourceOfFunding {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for OffenderLearningSourceOfFunding {
    fn rule_name(&self) -> &'static str {
        "LearnDelFAMType_74"
    }

    fn validate(&self, learner: &Learner, handler: &mut dyn ErrorHandler) {
        for delivery in &learner.learning_deliveries {
            if !self.monitored_delivery(delivery) {
                continue;
            }
            for fam in famquery::fams_of_type(&delivery.fams, fam_type::SOF) {
                if Self::DISQUALIFYING_SOF.contains(&fam.fam_code.as_str()) {
                    handler.handle(
                        self.rule_name(),
                        &learner.learn_ref_number,
                        delivery.aim_seq_number,
                        vec![
                            parameter("LearnDelFAMType", fam_type::SOF),
                            parameter("LearnDelFAMCode", &fam.fam_code),
                        ],
                    );
                }
            }
        }
    }
}
