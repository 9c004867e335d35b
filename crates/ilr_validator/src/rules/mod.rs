//! The rule catalog.
//!
//! One module per condition family. Every rule is a struct implementing
//! [`ilr_core::Rule`] with its collaborators injected at construction; the
//! full catalog is assembled by [`crate::RuleSet::standard`].

pub mod co_funding;
pub mod fam_codes;
pub mod full_funding;
pub mod skills_offer;
pub mod source_of_funding;

pub use co_funding::CoFundedFullEntitlement;
pub use fam_codes::{KnownFamType, NonRepeatableFamTypes, ValidFamCode};
pub use full_funding::{
    FullFundingLevelThree2016, FullFundingLevelThreeOngoing, YoungAdultFullFundingLevelTwo,
};
pub use skills_offer::SkillsOfferEligibility;
pub use source_of_funding::{
    AdultSkillsSourceOfFunding, CommunityLearningSourceOfFunding, DevolvedAreaMonitoring,
    OffenderLearningSourceOfFunding,
};
