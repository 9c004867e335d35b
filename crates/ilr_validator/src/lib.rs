//! # ILR Validator
//!
//! Validation engine for ILR submissions. This crate provides the rule
//! catalog and the services it consults:
//!
//! - FAM collection queries and the FAM type/code catalog
//! - LARS and organisation reference data lookups
//! - Derived composite flags (apprenticeship, restart, benefit entitlement)
//! - Date arithmetic and the academic-year boundary
//! - Structural submission checks
//! - The [`RuleSet`] executor producing a [`ilr_core::ValidationReport`]
//!
//! ## Example
//!
//! ```rust
//! use ilr_core::{LearnerBuilder, LearningDeliveryBuilder, ReferenceData, Submission};
//! use ilr_validator::RuleSet;
//!
//! let reference = ReferenceData {
//!     lars: vec![],
//!     organisations: vec![],
//!     fam_codes: vec![],
//!     academic_year_start: "2016-08-01".parse().unwrap(),
//! };
//! let submission = Submission {
//!     ukprn: 10001234,
//!     learners: vec![
//!         LearnerBuilder::new("LRN001")
//!             .delivery(
//!                 LearningDeliveryBuilder::new("50086832")
//!                     .fund_model(10)
//!                     .learn_start_date("2016-09-01".parse().unwrap())
//!                     .build(),
//!             )
//!             .build(),
//!     ],
//! };
//!
//! let rule_set = RuleSet::standard(submission.ukprn, reference).unwrap();
//! let report = rule_set.validate_submission(&submission);
//!
//! // Community learning with no source of funding tag
//! assert!(!report.passed);
//! ```

pub mod dates;
pub mod derived;
pub mod engine;
pub mod famcatalog;
pub mod famquery;
pub mod lars;
pub mod organisation;
pub mod rules;
pub mod structure;

pub use engine::RuleSet;
pub use famcatalog::FamCodeCatalog;
pub use lars::{LarsDataService, LarsLookups};
pub use organisation::{OrganisationDataService, OrganisationLookups};
pub use structure::StructureValidator;
