//! # ILR Core
//!
//! Core data structures and contracts for the ILR validation engine.
//!
//! This crate provides the building blocks for validating Individualised
//! Learner Record (ILR) submissions: the learner data model, the read-only
//! reference data entities, the published code catalogs, and the rule/error
//! handler traits that every validation rule implements.
//!
//! ## Key Concepts
//!
//! - **Submission**: one provider's return — a UKPRN plus its learners
//! - **Learner / LearningDelivery / FAM**: the records rules inspect
//! - **Rule**: a pure predicate over one learner, reporting violations by
//!   stable published rule name
//! - **Reference data**: LARS qualification metadata, organisation details
//!   and the FAM code catalog, loaded once and queried read-only
//!
//! ## Example
//!
//! ```rust
//! use ilr_core::{ErrorCollector, LearnerBuilder, LearningDeliveryBuilder};
//!
//! let learner = LearnerBuilder::new("LRN001")
//!     .delivery(
//!         LearningDeliveryBuilder::new("50086832")
//!             .fund_model(35)
//!             .learn_start_date("2016-09-01".parse().unwrap())
//!             .fam("SOF", "105")
//!             .build(),
//!     )
//!     .build();
//!
//! let collector = ErrorCollector::new();
//! assert!(collector.is_empty());
//! assert_eq!(learner.learning_deliveries[0].fund_model, 35);
//! ```

pub mod builder;
pub mod constants;
pub mod error;
pub mod learner;
pub mod reference;
pub mod rule;

pub use builder::*;
pub use error::*;
pub use learner::*;
pub use reference::*;
pub use rule::*;
