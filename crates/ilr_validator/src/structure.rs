//! Structural submission checks.
//!
//! File-level checks that run before the rule catalog: learner reference
//! format and uniqueness, and aim sequence numbering within a learner.
//! Findings are reported as violations under reserved `Structure_*` names
//! so they flow through the same report as rule violations.

use std::collections::HashSet;

use regex::Regex;

use ilr_core::{ErrorHandler, Submission, parameter};

/// Published names for the structural checks.
pub const LEARN_REF_FORMAT: &str = "Structure_01";
pub const LEARN_REF_UNIQUE: &str = "Structure_02";
pub const AIM_SEQ_UNIQUE: &str = "Structure_03";

/// Validates the shape of a submission before rules run.
#[derive(Debug)]
pub struct StructureValidator {
    learn_ref_pattern: Regex,
}

impl StructureValidator {
    /// Creates the validator.
    pub fn new() -> Self {
        Self {
            // Provider-assigned references: 1-12 alphanumeric characters
            learn_ref_pattern: Regex::new(r"^[A-Za-z0-9]{1,12}$").expect("valid pattern"),
        }
    }

    /// Checks the submission, reporting findings to the handler.
    pub fn validate(&self, submission: &Submission, handler: &mut dyn ErrorHandler) {
        let mut seen_refs = HashSet::new();

        for learner in &submission.learners {
            if !self.learn_ref_pattern.is_match(&learner.learn_ref_number) {
                handler.handle(
                    LEARN_REF_FORMAT,
                    &learner.learn_ref_number,
                    0,
                    vec![parameter("LearnRefNumber", &learner.learn_ref_number)],
                );
            }

            if !seen_refs.insert(learner.learn_ref_number.clone()) {
                handler.handle(
                    LEARN_REF_UNIQUE,
                    &learner.learn_ref_number,
                    0,
                    vec![parameter("LearnRefNumber", &learner.learn_ref_number)],
                );
            }

            let mut seen_seqs = HashSet::new();
            for delivery in &learner.learning_deliveries {
                if delivery.aim_seq_number < 1 || !seen_seqs.insert(delivery.aim_seq_number) {
                    handler.handle(
                        AIM_SEQ_UNIQUE,
                        &learner.learn_ref_number,
                        delivery.aim_seq_number,
                        vec![parameter("AimSeqNumber", delivery.aim_seq_number)],
                    );
                }
            }
        }
    }
}

impl Default for StructureValidator {
    fn default() -> Self {
        Self::new()
    }
}
