//! Rule and error-handler contracts.
//!
//! This module defines the core traits for implementing validation rules.
//! A rule is a pure predicate over one learner's record: it inspects the
//! learner's deliveries (and any injected read-only collaborators), and
//! reports each violating delivery to an [`ErrorHandler`] with the rule's
//! published name and a set of named parameters.
//!
//! # Example
//!
//! ```rust
//! use ilr_core::{ErrorHandler, Learner, Rule, parameter};
//!
//! struct NoDeliveries;
//!
//! impl Rule for NoDeliveries {
//!     fn rule_name(&self) -> &'static str {
//!         "NoDeliveries_01"
//!     }
//!
//!     fn validate(&self, learner: &Learner, handler: &mut dyn ErrorHandler) {
//!         if learner.learning_deliveries.is_empty() {
//!             handler.handle(
//!                 self.rule_name(),
//!                 &learner.learn_ref_number,
//!                 0,
//!                 vec![parameter("LearnRefNumber", &learner.learn_ref_number)],
//!             );
//!         }
//!     }
//! }
//! ```

use std::fmt::Display;

use serde::Serialize;

use crate::Learner;

/// A single validation rule.
///
/// Implementations hold their collaborators as immutable references set at
/// construction and carry no other state: evaluating the same learner twice
/// yields the same verdict and the same parameters.
pub trait Rule: Send + Sync {
    /// The stable, published identifier this rule's errors are tagged with.
    ///
    /// Downstream error messages are looked up by this name; it must never
    /// change once published, and never varies with input.
    fn rule_name(&self) -> &'static str;

    /// Evaluates the rule against one learner, reporting each violation to
    /// the handler.
    fn validate(&self, learner: &Learner, handler: &mut dyn ErrorHandler);
}

/// Sink for rule violations.
pub trait ErrorHandler {
    /// Records one violation.
    ///
    /// `aim_seq_number` is the offending delivery's sequence number, or 0
    /// for learner-level violations.
    fn handle(
        &mut self,
        rule_name: &str,
        learn_ref_number: &str,
        aim_seq_number: i32,
        parameters: Vec<ErrorMessageParameter>,
    );
}

/// A name/value pair describing an offending value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorMessageParameter {
    /// Parameter name, e.g. `"FundModel"`
    pub name: String,

    /// Rendered value
    pub value: String,
}

/// Builds an error message parameter from a name and any displayable value.
pub fn parameter(name: impl Into<String>, value: impl Display) -> ErrorMessageParameter {
    ErrorMessageParameter {
        name: name.into(),
        value: value.to_string(),
    }
}

/// Builds an error message parameter from an optional value.
///
/// Absent values render as an empty string, matching how optional fields
/// such as date of birth appear in published error listings.
pub fn opt_parameter<T: Display>(name: impl Into<String>, value: Option<T>) -> ErrorMessageParameter {
    ErrorMessageParameter {
        name: name.into(),
        value: value.map(|v| v.to_string()).unwrap_or_default(),
    }
}

/// One recorded rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Name of the rule that raised the violation
    pub rule_name: String,

    /// Reference number of the learner in violation
    pub learn_ref_number: String,

    /// Sequence number of the offending delivery, 0 when not applicable
    pub aim_seq_number: i32,

    /// Named parameters describing the offending values
    pub parameters: Vec<ErrorMessageParameter>,
}

/// The standard accumulating [`ErrorHandler`].
#[derive(Debug, Default)]
pub struct ErrorCollector {
    violations: Vec<Violation>,
}

impl ErrorCollector {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of violations collected so far.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// True when nothing has been collected.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Borrows the collected violations.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consumes the collector, returning the collected violations.
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}

impl ErrorHandler for ErrorCollector {
    fn handle(
        &mut self,
        rule_name: &str,
        learn_ref_number: &str,
        aim_seq_number: i32,
        parameters: Vec<ErrorMessageParameter>,
    ) {
        self.violations.push(Violation {
            rule_name: rule_name.to_string(),
            learn_ref_number: learn_ref_number.to_string(),
            aim_seq_number,
            parameters,
        });
    }
}

/// Report of a validation run.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    /// Whether the run produced no violations
    pub passed: bool,

    /// Every violation raised, in evaluation order
    pub violations: Vec<Violation>,

    /// Execution statistics
    pub stats: ValidationStats,
}

/// Statistics about a validation run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationStats {
    /// Number of learners validated
    pub learners_validated: usize,

    /// Number of rules in the executed catalog
    pub rules_evaluated: usize,

    /// Run duration in milliseconds
    pub duration_ms: u64,
}

impl ValidationReport {
    /// Builds a report from collected violations and run statistics.
    pub fn from_violations(violations: Vec<Violation>, stats: ValidationStats) -> Self {
        Self {
            passed: violations.is_empty(),
            violations,
            stats,
        }
    }

    /// Violations raised by the named rule.
    pub fn violations_for(&self, rule_name: &str) -> Vec<&Violation> {
        self.violations
            .iter()
            .filter(|v| v.rule_name == rule_name)
            .collect()
    }
}
