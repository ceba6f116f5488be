//! Rich error formatting for assertion failures.

use crate::fixture::{Assertion, Target};
use crate::runner::{AssertionOutcome, CaseRun};
use layered_dep::DepTreeDisplay;
use std::fmt::Write;

/// Format a failed assertion with the parse it was checked against.
pub fn format_failure(
    fixture_name: &str,
    case: &CaseRun,
    assertion: &Assertion,
    outcome: &AssertionOutcome,
) -> String {
    let mut output = String::new();

    // Header
    writeln!(
        output,
        "\nFAIL: {}:{} (S{}.{})",
        fixture_name, assertion.source_line, case.index, assertion.target
    )
    .unwrap();
    writeln!(output).unwrap();

    // Parse tree context
    writeln!(output, "  {}", case.sentence.text()).unwrap();
    writeln!(output).unwrap();
    for line in DepTreeDisplay::new(&case.sentence).to_string().lines() {
        writeln!(output, "  {}", line).unwrap();
    }
    writeln!(output).unwrap();

    // Main failure message
    match outcome {
        AssertionOutcome::Mismatch { expected, actual } => {
            writeln!(
                output,
                "  \u{2717} {}: expected `{}`, found `{}`",
                assertion.target,
                show(expected),
                show(actual)
            )
            .unwrap();
        }
        AssertionOutcome::UnknownFeature { name } => {
            writeln!(output, "  unknown feature column `{}`", name).unwrap();
        }
        AssertionOutcome::Passed => {
            // Should not happen in format_failure
            writeln!(output, "  (passed)").unwrap();
        }
    }

    writeln!(output, "  labels: {}", case.classification.labels).unwrap();
    writeln!(output).unwrap();
    writeln!(output, "  Assertion was: {}", assertion).unwrap();

    if let Some(hint) = generate_hint(case, assertion, outcome) {
        writeln!(output).unwrap();
        writeln!(output, "  hint: {}", hint).unwrap();
    }

    output
}

/// Format a summary of one fixture.
pub fn format_summary(
    fixture_name: &str,
    passed: usize,
    failed: usize,
    expected_failures: usize,
    regressions: usize,
) -> String {
    let mut output = String::new();

    let status = if regressions > 0 { "FAIL" } else { "PASS" };

    writeln!(output, "\n{}: {}", status, fixture_name).unwrap();
    writeln!(
        output,
        "  {} passed, {} failed ({} expected, {} regressions)",
        passed, failed, expected_failures, regressions
    )
    .unwrap();

    output
}

fn show(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("-")
}

fn generate_hint(case: &CaseRun, assertion: &Assertion, outcome: &AssertionOutcome) -> Option<String> {
    match (outcome, &assertion.target) {
        (AssertionOutcome::UnknownFeature { .. }, _) => {
            Some("feature names are the columns of FeatureRecord, e.g. `@subj` or `@root`".to_string())
        }
        (AssertionOutcome::Mismatch { expected, actual }, Target::Label(family)) => {
            let raw = case.classification.raw.get(*family).map(|l| l.to_string());
            if actual.is_none() && raw.is_some() && raw == *expected {
                Some(format!(
                    "the rule fired (raw `{}`) but conflict resolution cleared it",
                    show(&raw)
                ))
            } else if actual.is_none() && raw.is_none() {
                Some(format!(
                    "no {} rule matched; check the root category and actor tags",
                    family
                ))
            } else {
                None
            }
        }
        (AssertionOutcome::Mismatch { actual: None, .. }, Target::Feature(_)) => Some(
            "actor and instrument tags come from the sixth column of the parse table".to_string(),
        ),
        _ => None,
    }
}
