//! Errors raised while loading and running `.dep` fixtures.

use layered_dep::TreeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpecError {
    /// A fixture line could not be read.
    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// A fixture or expected-failures file could not be loaded.
    #[error("failed to load fixture: {path}: {message}")]
    Load { path: String, message: String },

    /// The parse table of a case is not a valid tree.
    #[error("case {case}: {source}")]
    Tree {
        case: usize,
        #[source]
        source: TreeError,
    },

    /// Assertion failure reported by the harness.
    #[error("assertion failed: {message}")]
    Assertion { message: String },
}

pub type SpecResult<T> = Result<T, SpecError>;
