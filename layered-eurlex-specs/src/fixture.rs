//! Fixture types for `.dep` files.
//!
//! A fixture holds one or more cases. Each case is a dependency parse in
//! the tabular form read by [`layered_dep::parse_table`], followed by the
//! labels and features the classifier is expected to produce for it.

use layered_eurlex::Family;
use std::fmt;

/// A parsed `.dep` fixture file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepFixture {
    /// Title from the first `# ` heading.
    pub title: Option<String>,
    pub cases: Vec<FixtureCase>,
}

/// One sentence of a fixture, separated from its neighbours by `---`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureCase {
    /// 0-based position of the case within the fixture.
    pub index: usize,
    /// Parse table, including any `# text:` line.
    pub table: String,
    pub assertions: Vec<Assertion>,
}

/// A single `> target = value` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assertion {
    pub target: Target,
    pub expected: Expected,
    /// Line number in the fixture (1-based).
    pub source_line: usize,
}

/// What an assertion inspects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Final label of a column: `del_com`.
    Label(Family),
    /// Label before conflict resolution: `raw:del_com`.
    RawLabel(Family),
    /// A feature value by column name: `@subj`.
    Feature(String),
    /// Every assigned final label: `all`.
    AllLabels,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Label(family) => write!(f, "{}", family),
            Target::RawLabel(family) => write!(f, "raw:{}", family),
            Target::Feature(name) => write!(f, "@{}", name),
            Target::AllLabels => f.write_str("all"),
        }
    }
}

/// Expected value; `-` means absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expected {
    Absent,
    Value(String),
}

impl Expected {
    pub fn as_option(&self) -> Option<&str> {
        match self {
            Expected::Absent => None,
            Expected::Value(value) => Some(value),
        }
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_option().unwrap_or("-"))
    }
}

impl fmt::Display for Assertion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.target, self.expected)
    }
}

impl DepFixture {
    /// Total number of assertions across all cases.
    pub fn assertion_count(&self) -> usize {
        self.cases.iter().map(|case| case.assertions.len()).sum()
    }
}
