//! Errors raised while building a [`Sentence`](crate::Sentence) from parser output.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// A token points at a head outside the sentence.
    #[error("token {token} has head {head}, but the sentence has {len} tokens")]
    HeadOutOfRange { token: usize, head: usize, len: usize },

    /// More than one token claims to be the root.
    #[error("sentence has several roots: {first} and {second}")]
    MultipleRoots { first: usize, second: usize },

    /// Tokens exist but none of them is a root.
    #[error("sentence has {len} tokens but no root")]
    MissingRoot { len: usize },

    /// Following head links from a token never reaches the root.
    #[error("token {token} is part of a head cycle")]
    Cycle { token: usize },

    /// A row of a tabular parse could not be read.
    #[error("table line {line}: {message}")]
    Table { line: usize, message: String },
}

pub type TreeResult<T> = Result<T, TreeError>;
