use anyhow::{Context, Result};
use ilr_core::{ErrorCollector, ValidationReport, ValidationStats};
use ilr_parser::parse_submission_file;
use ilr_validator::StructureValidator;
use std::path::Path;
use tracing::info;

use crate::output;

pub fn execute(submission_path: &str, format: &str) -> Result<()> {
    info!("Checking submission structure: {}", submission_path);

    let submission = parse_submission_file(Path::new(submission_path))
        .with_context(|| format!("Failed to parse submission file: {submission_path}"))?;

    output::print_info(&format!(
        "Submission loaded: UKPRN {} ({} learners)",
        submission.ukprn,
        submission.learners.len()
    ));

    let delivery_count: usize = submission
        .learners
        .iter()
        .map(|learner| learner.learning_deliveries.len())
        .sum();

    println!("\nSubmission Summary:");
    println!("  UKPRN:      {}", submission.ukprn);
    println!("  Learners:   {}", submission.learners.len());
    println!("  Deliveries: {}", delivery_count);

    let mut collector = ErrorCollector::new();
    StructureValidator::new().validate(&submission, &mut collector);

    if collector.is_empty() {
        output::print_success("Submission structure is valid");
        return Ok(());
    }

    let report = ValidationReport::from_violations(
        collector.into_violations(),
        ValidationStats {
            learners_validated: submission.learners.len(),
            rules_evaluated: 0,
            duration_ms: 0,
        },
    );
    output::print_validation_report(&report, format);

    std::process::exit(1);
}
