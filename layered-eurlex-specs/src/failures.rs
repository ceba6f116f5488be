//! Assertions allowed to fail, read from `expected-failures.toml`.
//!
//! ```toml
//! [[pending]]
//! fixture = "agency.dep"
//! assertion = "S1.con_age"
//! reason = "active constraint survives the right override"
//! added = "2025-01-06"
//! ```

use crate::errors::{SpecError, SpecResult};
use crate::fixture::Target;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpectedFailures {
    /// Classifier limitations nobody plans to fix.
    #[serde(default)]
    pub known: Vec<FailureEntry>,
    /// Failures awaiting a rule change.
    #[serde(default)]
    pub pending: Vec<FailureEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureEntry {
    /// Fixture path relative to the fixtures directory.
    pub fixture: String,
    /// Case and target, see [`ExpectedFailures::format_ref`].
    pub assertion: String,
    #[serde(default)]
    pub reason: Option<String>,
    /// YYYY-MM-DD
    #[serde(default)]
    pub added: Option<String>,
}

impl FailureEntry {
    fn matches(&self, fixture: &str, reference: &str) -> bool {
        self.fixture == fixture && self.assertion == reference
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureState {
    Known,
    Pending,
    /// Not listed: the failure counts against the run.
    Regression,
}

impl ExpectedFailures {
    /// A missing file means no expected failures.
    pub fn load(path: &Path) -> SpecResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| SpecError::Load {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::parse(&content, &path.display().to_string())
    }

    pub fn from_toml(content: &str) -> SpecResult<Self> {
        Self::parse(content, "<string>")
    }

    fn parse(content: &str, path: &str) -> SpecResult<Self> {
        toml::from_str(content).map_err(|e| SpecError::Load {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    pub fn is_expected(&self, fixture: &str, reference: &str) -> FailureState {
        if self.known.iter().any(|e| e.matches(fixture, reference)) {
            FailureState::Known
        } else if self.pending.iter().any(|e| e.matches(fixture, reference)) {
            FailureState::Pending
        } else {
            FailureState::Regression
        }
    }

    /// `S{case}.{target}`, e.g. `S0.del_com`, `S1.raw:con_age`, `S2.@subj`.
    pub fn format_ref(case_idx: usize, target: &Target) -> String {
        format!("S{}.{}", case_idx, target)
    }

    pub fn count(&self) -> usize {
        self.known.len() + self.pending.len()
    }

    /// Entries with no matching failure in `failed` (fixture, reference)
    /// pairs: the assertion passes now, or no longer exists.
    pub fn stale(&self, failed: &[(String, String)]) -> Vec<&FailureEntry> {
        self.known
            .iter()
            .chain(self.pending.iter())
            .filter(|entry| {
                !failed
                    .iter()
                    .any(|(fixture, reference)| entry.matches(fixture, reference))
            })
            .collect()
    }
}

/// Assertion counts of a harness run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HarnessResult {
    pub total: usize,
    pub passed: usize,
    /// Known and pending failures.
    pub expected_failures: usize,
    pub regressions: usize,
}

impl HarnessResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failed(&self) -> usize {
        self.total - self.passed
    }

    /// 0 on success, 1 when anything regressed.
    pub fn exit_code(&self) -> i32 {
        if self.success() {
            0
        } else {
            1
        }
    }

    pub fn success(&self) -> bool {
        self.regressions == 0
    }

    pub fn record_pass(&mut self) {
        self.total += 1;
        self.passed += 1;
    }

    pub fn record_failure(&mut self, state: FailureState) {
        self.total += 1;
        match state {
            FailureState::Known | FailureState::Pending => self.expected_failures += 1,
            FailureState::Regression => self.regressions += 1,
        }
    }

    /// Adds the counts of one fixture to the run totals.
    pub fn absorb(&mut self, other: &HarnessResult) {
        self.total += other.total;
        self.passed += other.passed;
        self.expected_failures += other.expected_failures;
        self.regressions += other.regressions;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use layered_eurlex::Family;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const LISTED: &str = r#"
[[pending]]
fixture = "agency.dep"
assertion = "S1.con_age"
reason = "active constraint survives the right override"
added = "2025-01-06"

[[known]]
fixture = "commission.dep"
assertion = "S3.raw:del_com"
"#;

    #[test]
    fn test_lookup_states() {
        let failures = ExpectedFailures::from_toml(LISTED).unwrap();
        assert_eq!(failures.count(), 2);
        assert_eq!(
            failures.is_expected("agency.dep", "S1.con_age"),
            FailureState::Pending
        );
        assert_eq!(
            failures.is_expected("commission.dep", "S3.raw:del_com"),
            FailureState::Known
        );
        assert_eq!(
            failures.is_expected("commission.dep", "S1.con_age"),
            FailureState::Regression
        );
        assert_eq!(failures.known[0].reason, None);
    }

    #[test]
    fn test_format_ref() {
        assert_eq!(
            ExpectedFailures::format_ref(1, &Target::Label(Family::ConAge)),
            "S1.con_age"
        );
        assert_eq!(
            ExpectedFailures::format_ref(3, &Target::RawLabel(Family::DelCom)),
            "S3.raw:del_com"
        );
        assert_eq!(
            ExpectedFailures::format_ref(0, &Target::Feature("subj".to_string())),
            "S0.@subj"
        );
        assert_eq!(ExpectedFailures::format_ref(2, &Target::AllLabels), "S2.all");
    }

    #[test]
    fn test_stale_entries() {
        let failures = ExpectedFailures::from_toml(LISTED).unwrap();
        let failed = vec![("agency.dep".to_string(), "S1.con_age".to_string())];
        let stale = failures.stale(&failed);
        assert_eq!(stale.len(), 1);
        assert_eq!(stale[0].fixture, "commission.dep");
    }

    #[test]
    fn test_load_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", LISTED).unwrap();
        let failures = ExpectedFailures::load(file.path()).unwrap();
        assert_eq!(failures.pending.len(), 1);
        assert_eq!(failures.pending[0].added.as_deref(), Some("2025-01-06"));
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[[known]]\nfixture = 3").unwrap();
        assert!(matches!(
            ExpectedFailures::load(file.path()),
            Err(SpecError::Load { .. })
        ));
    }

    #[test]
    fn test_missing_file_is_empty() {
        let failures = ExpectedFailures::load(Path::new("/nonexistent/path.toml")).unwrap();
        assert_eq!(failures.count(), 0);
    }

    #[test]
    fn test_harness_result_counts() {
        let mut fixture = HarnessResult::new();
        fixture.record_pass();
        fixture.record_failure(FailureState::Pending);
        assert!(fixture.success());

        let mut run = HarnessResult::new();
        run.absorb(&fixture);
        run.record_failure(FailureState::Regression);
        assert_eq!(run.total, 3);
        assert_eq!(run.failed(), 2);
        assert_eq!(run.expected_failures, 1);
        assert_eq!(run.exit_code(), 1);
    }
}
