use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to test fixtures
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

/// Helper to create a Command for the ilrv binary
#[allow(deprecated)]
fn ilrv() -> Command {
    Command::cargo_bin("ilrv").expect("Failed to find ilrv binary")
}

// ============================================================================
// check command tests
// ============================================================================

#[test]
fn test_check_valid_submission() {
    ilrv()
        .arg("check")
        .arg(fixture_path("submission.yml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("10003074"))
        .stdout(predicate::str::contains("Learners:   1"))
        .stdout(predicate::str::contains("Submission structure is valid"));
}

#[test]
fn test_check_bad_structure_fails() {
    ilrv()
        .arg("check")
        .arg(fixture_path("submission_bad_structure.yml"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("Structure_01"))
        .stdout(predicate::str::contains("Structure_02"));
}

#[test]
fn test_check_missing_file_fails() {
    ilrv()
        .arg("check")
        .arg("does/not/exist.yml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse submission file"));
}

#[test]
fn test_check_unsupported_extension_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("submission.xml");
    fs::write(&path, "ukprn: 1\nlearners: []\n").unwrap();

    ilrv()
        .arg("check")
        .arg(path.to_str().unwrap())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported file format"));
}

// ============================================================================
// validate command tests
// ============================================================================

#[test]
fn test_validate_clean_submission_passes() {
    ilrv()
        .arg("validate")
        .arg(fixture_path("submission.yml"))
        .arg("--refdata")
        .arg(fixture_path("refdata.yml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Validation PASSED"));
}

#[test]
fn test_validate_failing_submission_reports_rules() {
    ilrv()
        .arg("validate")
        .arg(fixture_path("submission_failing.yml"))
        .arg("--refdata")
        .arg(fixture_path("refdata.yml"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("Validation FAILED"))
        .stdout(predicate::str::contains("LearnDelFAMType_01"))
        .stdout(predicate::str::contains("LearnDelFAMType_09"));
}

#[test]
fn test_validate_json_output() {
    ilrv()
        .arg("validate")
        .arg(fixture_path("submission_failing.yml"))
        .arg("--refdata")
        .arg(fixture_path("refdata.yml"))
        .arg("--format")
        .arg("json")
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"passed\": false"))
        .stdout(predicate::str::contains("\"rule_name\": \"LearnDelFAMType_09\""));
}

#[test]
fn test_validate_rule_filter() {
    // With the catalog narrowed to rule 09, the community-learning
    // violation is no longer reported
    ilrv()
        .arg("validate")
        .arg(fixture_path("submission_failing.yml"))
        .arg("--refdata")
        .arg(fixture_path("refdata.yml"))
        .arg("--rules")
        .arg("LearnDelFAMType_09")
        .assert()
        .failure()
        .stdout(predicate::str::contains("LearnDelFAMType_09"))
        .stdout(predicate::str::contains("LearnDelFAMType_01").not());
}

// ============================================================================
// init command tests
// ============================================================================

#[test]
fn test_init_writes_skeleton_to_stdout() {
    ilrv()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("ukprn: 10000000"))
        .stdout(predicate::str::contains("learn_ref_number: A10001"));
}

#[test]
fn test_init_skeleton_round_trips_through_check() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("skeleton.yml");

    ilrv()
        .arg("init")
        .arg("--output")
        .arg(path.to_str().unwrap())
        .arg("--ukprn")
        .arg("10003074")
        .assert()
        .success();

    ilrv()
        .arg("check")
        .arg(path.to_str().unwrap())
        .assert()
        .success()
        .stdout(predicate::str::contains("10003074"))
        .stdout(predicate::str::contains("Submission structure is valid"));
}
