use anyhow::{Context, Result};
use ilr_parser::{parse_reference_file, parse_submission_file};
use ilr_validator::RuleSet;
use std::path::Path;
use tracing::info;

use crate::output;

pub fn execute(
    submission_path: &str,
    refdata_path: &str,
    rules: Option<&str>,
    format: &str,
) -> Result<()> {
    info!("Validating submission: {}", submission_path);
    info!("Reference data: {}", refdata_path);

    let submission = parse_submission_file(Path::new(submission_path))
        .with_context(|| format!("Failed to parse submission file: {submission_path}"))?;

    output::print_info(&format!(
        "Submission loaded: UKPRN {} ({} learners)",
        submission.ukprn,
        submission.learners.len()
    ));

    let reference = parse_reference_file(Path::new(refdata_path))
        .with_context(|| format!("Failed to parse reference data file: {refdata_path}"))?;

    let mut rule_set = RuleSet::standard(submission.ukprn, reference)
        .context("Failed to index reference data")?;

    if let Some(rules) = rules {
        let selected: Vec<String> = rules
            .split(',')
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();
        rule_set.retain(&selected);
        output::print_info(&format!(
            "Running {} of the catalog's rules",
            rule_set.len()
        ));
    }

    let report = rule_set.validate_submission(&submission);

    output::print_validation_report(&report, format);

    if !report.passed {
        std::process::exit(1);
    }

    Ok(())
}
