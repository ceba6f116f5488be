//! Runs fixture cases through the classifier and checks their assertions.

use crate::errors::{SpecError, SpecResult};
use crate::failures::{ExpectedFailures, FailureEntry, FailureState, HarnessResult};
use crate::fixture::{Assertion, DepFixture, FixtureCase, Target};
use crate::formatter::{format_failure, format_summary};
use crate::loader::load_all_fixtures;
use layered_dep::{parse_table, Sentence};
use layered_eurlex::{Classification, Engine, FeatureRecord, LabelSet};
use std::path::Path;

/// Outcome of a single assertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssertionOutcome {
    Passed,
    /// `None` on either side means absent.
    Mismatch {
        expected: Option<String>,
        actual: Option<String>,
    },
    /// `@name` does not name a feature column.
    UnknownFeature { name: String },
}

impl AssertionOutcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, AssertionOutcome::Passed)
    }
}

/// A case after classification.
#[derive(Debug, Clone)]
pub struct CaseRun {
    pub index: usize,
    pub sentence: Sentence,
    pub classification: Classification,
    pub outcomes: Vec<(Assertion, AssertionOutcome)>,
}

impl CaseRun {
    pub fn failures(&self) -> impl Iterator<Item = &(Assertion, AssertionOutcome)> + '_ {
        self.outcomes.iter().filter(|(_, outcome)| !outcome.is_passed())
    }
}

/// Parses the table of `case`, classifies it and checks every assertion.
pub fn run_case(case: &FixtureCase, engine: &Engine) -> SpecResult<CaseRun> {
    let sentence = parse_table(&case.table).map_err(|source| SpecError::Tree {
        case: case.index,
        source,
    })?;
    let classification = engine.classify(&sentence);
    let outcomes = case
        .assertions
        .iter()
        .map(|assertion| {
            let outcome = check_assertion(&classification, assertion);
            (assertion.clone(), outcome)
        })
        .collect();

    Ok(CaseRun {
        index: case.index,
        sentence,
        classification,
        outcomes,
    })
}

/// Runs every case of `fixture`.
pub fn run_fixture(fixture: &DepFixture, engine: &Engine) -> SpecResult<Vec<CaseRun>> {
    fixture
        .cases
        .iter()
        .map(|case| run_case(case, engine))
        .collect()
}

pub fn check_assertion(classification: &Classification, assertion: &Assertion) -> AssertionOutcome {
    let actual = match &assertion.target {
        Target::Label(family) => classification.labels.get(*family).map(|l| l.to_string()),
        Target::RawLabel(family) => classification.raw.get(*family).map(|l| l.to_string()),
        Target::AllLabels => assigned_labels(&classification.labels),
        Target::Feature(name) => {
            if !is_feature(name) {
                return AssertionOutcome::UnknownFeature { name: name.clone() };
            }
            classification.features.value_of(name).map(|value| match value {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            })
        }
    };

    let expected = assertion.expected.as_option();
    if actual.as_deref() == expected {
        AssertionOutcome::Passed
    } else {
        AssertionOutcome::Mismatch {
            expected: expected.map(str::to_string),
            actual,
        }
    }
}

fn assigned_labels(labels: &LabelSet) -> Option<String> {
    if labels.is_empty() {
        None
    } else {
        Some(labels.to_string())
    }
}

fn is_feature(name: &str) -> bool {
    match serde_json::to_value(FeatureRecord::default()) {
        Ok(serde_json::Value::Object(columns)) => columns.contains_key(name),
        _ => false,
    }
}

/// Totals and the printable report of a harness run.
#[derive(Debug, Clone)]
pub struct HarnessReport {
    pub result: HarnessResult,
    pub report: String,
    /// Expected failures that did not fail.
    pub stale: Vec<FailureEntry>,
}

/// Runs every fixture under `dir`, classifying failures against `failures`.
///
/// Only regressions are written out in full; every fixture gets a summary.
pub fn run_harness(
    dir: &Path,
    failures: &ExpectedFailures,
    engine: &Engine,
) -> SpecResult<HarnessReport> {
    let mut result = HarnessResult::new();
    let mut report = String::new();
    let mut failed = Vec::new();

    for (name, fixture) in load_all_fixtures(dir)? {
        let mut fixture_result = HarnessResult::new();
        for case in run_fixture(&fixture, engine)? {
            for (assertion, outcome) in &case.outcomes {
                if outcome.is_passed() {
                    fixture_result.record_pass();
                    continue;
                }
                let reference = ExpectedFailures::format_ref(case.index, &assertion.target);
                let state = failures.is_expected(&name, &reference);
                fixture_result.record_failure(state);
                if state == FailureState::Regression {
                    report.push_str(&format_failure(&name, &case, assertion, outcome));
                }
                failed.push((name.clone(), reference));
            }
        }

        report.push_str(&format_summary(
            &name,
            fixture_result.passed,
            fixture_result.failed(),
            fixture_result.expected_failures,
            fixture_result.regressions,
        ));
        result.absorb(&fixture_result);
    }

    let stale: Vec<FailureEntry> = failures.stale(&failed).into_iter().cloned().collect();
    for entry in &stale {
        report.push_str(&format!(
            "\nSTALE: {} {} no longer fails\n",
            entry.fixture, entry.assertion
        ));
    }

    Ok(HarnessReport {
        result,
        report,
        stale,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_fixture;
    use layered_eurlex::Family;

    const STATES_SHALL: &str = "1 States PROPN nsubj 3 MS
2 shall AUX aux 3
3 decide VERB ROOT 0";

    fn run_single(assertions: &str) -> CaseRun {
        let fixture = parse_fixture(&format!("{}\n{}", STATES_SHALL, assertions)).unwrap();
        run_case(&fixture.cases[0], &Engine::default()).unwrap()
    }

    #[test]
    fn test_run_case_passes() {
        let case = run_single("> con_ms = G2\n> del_ms = -\n> @subj = MS\n> @smod = true");
        assert_eq!(case.outcomes.len(), 4);
        assert_eq!(case.failures().count(), 0);
        assert_eq!(case.classification.labels.get(Family::ConMs).unwrap(), "G2");
    }

    #[test]
    fn test_run_case_mismatch() {
        let case = run_single("> con_ms = G1\n> @pmod = true");
        let outcomes: Vec<&AssertionOutcome> = case.outcomes.iter().map(|(_, o)| o).collect();
        assert_eq!(
            outcomes[0],
            &AssertionOutcome::Mismatch {
                expected: Some("G1".to_string()),
                actual: Some("G2".to_string()),
            }
        );
        assert_eq!(
            outcomes[1],
            &AssertionOutcome::Mismatch {
                expected: Some("true".to_string()),
                actual: None,
            }
        );
    }

    #[test]
    fn test_unknown_feature() {
        let case = run_single("> @modality = shall");
        assert_eq!(
            case.outcomes[0].1,
            AssertionOutcome::UnknownFeature {
                name: "modality".to_string()
            }
        );
    }

    #[test]
    fn test_all_labels() {
        let case = run_single("> all = con_ms=G2");
        assert!(case.outcomes[0].1.is_passed());

        let fixture = parse_fixture("1 Article PROPN ROOT 0\n> all = -").unwrap();
        let case = run_case(&fixture.cases[0], &Engine::default()).unwrap();
        assert!(case.outcomes[0].1.is_passed());
    }

    #[test]
    fn test_invalid_table_is_a_tree_error() {
        let fixture = parse_fixture("# text: x\n---\n1 Article PROPN nsubj 2\n> all = -").unwrap();
        let err = run_fixture(&fixture, &Engine::default()).unwrap_err();
        assert!(matches!(err, SpecError::Tree { case: 1, .. }), "{:?}", err);
    }

    #[test]
    fn test_harness_classifies_failures() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("states.dep"),
            format!("# States\n{}\n> con_ms = G2\n> con_ms2 = G2\n> del_ms = G1", STATES_SHALL),
        )
        .unwrap();

        let failures = ExpectedFailures::from_toml(
            r#"
[[pending]]
fixture = "states.dep"
assertion = "S0.con_ms2"

[[known]]
fixture = "states.dep"
assertion = "S0.con_ms"
"#,
        )
        .unwrap();

        let run = run_harness(dir.path(), &failures, &Engine::default()).unwrap();
        assert_eq!(run.result.total, 3);
        assert_eq!(run.result.passed, 1);
        assert_eq!(run.result.expected_failures, 1);
        assert_eq!(run.result.regressions, 1);
        assert!(run.report.contains("FAIL: states.dep:7 (S0.del_ms)"), "{}", run.report);
        assert!(!run.report.contains("(S0.con_ms2)"));
        assert_eq!(run.stale.len(), 1);
        assert_eq!(run.stale[0].assertion, "S0.con_ms");
        assert!(run.report.contains("STALE: states.dep S0.con_ms no longer fails"));
    }
}
