#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Dependency-parse adapter for rule-based sentence classification.
//!
//! The upstream tagger/parser runs elsewhere; this crate only holds its
//! output in a shape that rule code can walk without owning anything.
//!
//! ## Types
//!
//! - [`Sentence`] - Immutable token arena with a parent→children adjacency
//! - [`TokenRef`] - Borrowed handle used to walk the tree
//! - [`Pos`] / [`DepRel`] - Closed tag vocabularies, unknown labels never match
//! - [`ParsedSentence`] - serde form of parser output (spaCy conventions)
//! - [`DepTreeDisplay`] - Column-aligned rendering for tests and diagnostics
//!
//! ## Example
//!
//! ```
//! use layered_dep::{parse_table, DepRel};
//!
//! let sentence = parse_table(
//!     "1 Commission PROPN nsubj 2 COM\n\
//!      2 decides    VERB  ROOT  0",
//! )
//! .unwrap();
//! let root = sentence.root().unwrap();
//! let subject = root.children().next().unwrap();
//! assert_eq!(subject.dep(), DepRel::Nsubj);
//! assert_eq!(subject.ent_type(), Some("COM"));
//! ```

mod display;
mod errors;
mod input;
mod sentence;
mod token;

pub use display::DepTreeDisplay;
pub use errors::{TreeError, TreeResult};
pub use input::{parse_table, ParsedSentence, ParsedToken};
pub use sentence::{Sentence, TokenRef};
pub use token::{DepRel, Pos, Token};

#[cfg(test)]
mod tests {
    mod display;
    mod sentence;
}
