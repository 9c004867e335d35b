use colored::*;
use ilr_core::ValidationReport;
use serde_json::json;

pub fn print_validation_report(report: &ValidationReport, format: &str) {
    match format {
        "json" => print_json_report(report),
        _ => print_text_report(report),
    }
}

fn print_text_report(report: &ValidationReport) {
    println!("\n{}", "═".repeat(60));
    println!("{}", "  VALIDATION REPORT".bold());
    println!("{}", "═".repeat(60));

    if report.passed {
        println!(
            "\n{} {}",
            "✓".green().bold(),
            "Validation PASSED".green().bold()
        );
    } else {
        println!(
            "\n{} {}",
            "✗".red().bold(),
            "Validation FAILED".red().bold()
        );
    }

    if !report.violations.is_empty() {
        println!("\n{}", "Violations:".red().bold());
        for (i, violation) in report.violations.iter().enumerate() {
            let parameters = violation
                .parameters
                .iter()
                .map(|p| format!("{}={}", p.name, p.value))
                .collect::<Vec<_>>()
                .join(", ");
            println!(
                "  {}. {} learner {} aim {} ({})",
                i + 1,
                violation.rule_name.red(),
                violation.learn_ref_number,
                violation.aim_seq_number,
                parameters
            );
        }
    }

    println!("\n{}", "Summary:".bold());
    println!("  Learners validated: {}", report.stats.learners_validated);
    println!("  Rules evaluated:    {}", report.stats.rules_evaluated);
    println!("  Total violations:   {}", report.violations.len());
    println!("  Duration:           {} ms", report.stats.duration_ms);
    println!("{}", "═".repeat(60));
}

fn print_json_report(report: &ValidationReport) {
    let output = json!({
        "passed": report.passed,
        "violations": report.violations,
        "summary": {
            "violation_count": report.violations.len(),
            "learners_validated": report.stats.learners_validated,
            "rules_evaluated": report.stats.rules_evaluated,
            "duration_ms": report.stats.duration_ms,
        }
    });

    match serde_json::to_string_pretty(&output) {
        Ok(rendered) => println!("{rendered}"),
        Err(e) => eprintln!("Failed to render JSON report: {e}"),
    }
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}
