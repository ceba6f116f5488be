#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Fixture-driven testing for the EUR-Lex provision classifier.
//!
//! Test cases live in `.dep` files: a dependency parse in tabular form
//! followed by `>` assertions about the labels and features the classifier
//! must produce for it.
//!
//! ## Modules
//!
//! - [`parser`] - Parses `.dep` fixture files
//! - [`fixture`] - Fixture, case and assertion types
//! - [`loader`] - Fixture discovery on disk
//! - [`runner`] - Runs cases through [`layered_eurlex::Engine`]
//! - [`errors`] - Error types for the spec system
//! - [`formatter`] - Failure reports with the parse tree as context
//! - [`failures`] - Expected failures tracking via TOML

pub mod errors;
pub mod failures;
pub mod fixture;
pub mod formatter;
pub mod loader;
pub mod parser;
pub mod runner;

pub use errors::{SpecError, SpecResult};
pub use failures::{ExpectedFailures, FailureEntry, FailureState, HarnessResult};
pub use fixture::{Assertion, DepFixture, Expected, FixtureCase, Target};
pub use loader::{load_all_fixtures, load_fixture};
pub use parser::{parse_assertion, parse_fixture};
pub use runner::{
    check_assertion, run_case, run_fixture, run_harness, AssertionOutcome, CaseRun, HarnessReport,
};
