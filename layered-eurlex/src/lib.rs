#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Rule-based classification of EU legislative provisions.
//!
//! Sentences arrive as dependency parses ([`layered_dep::Sentence`]) whose
//! tokens carry entity tags for the institutional actors (Member States,
//! national competent authorities, the Commission, agencies), legal
//! instruments and verb categories. For each sentence the crate
//!
//! 1. extracts a flat [`FeatureRecord`] of syntactic and lexical features,
//! 2. runs the ordered rule lists of every [`Family`] against it,
//! 3. resolves conflicts between families ([`resolve`]).
//!
//! ## Example
//!
//! ```
//! use layered_dep::parse_table;
//! use layered_eurlex::{Engine, Family};
//!
//! let sentence = parse_table(
//!     "1 The DET det 2
//!      2 Commission PROPN nsubj 4 COM
//!      3 may AUX aux 4
//!      4 adopt VERB ROOT 0
//!      5 this DET det 6
//!      6 measure NOUN dobj 4 MEASURE",
//! )
//! .unwrap();
//!
//! let result = Engine::default().classify(&sentence);
//! assert_eq!(result.labels.get(Family::DelCom).unwrap(), "G1");
//! ```

mod chunk;
mod engine;
mod entity;
pub mod features;
mod postprocess;
mod rules;

pub use chunk::coordinated_chunks;
pub use engine::{Classification, Engine, EngineConfig};
pub use entity::{Actor, EntityType, TokenEntity, VerbCategory};
pub use features::FeatureRecord;
pub use postprocess::{resolve, resolve_with, Action, Override, OVERRIDES};
pub use rules::{classify, classify_all, Family, Guard, Label, LabelSet, Rule};

#[cfg(test)]
mod tests {
    mod features;
    mod labels;
    mod scenarios;
}
