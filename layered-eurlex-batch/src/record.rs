//! Input records: one sentence of the corpus with its parsed chunks.
//!
//! The upstream stage splits each sentence into coordinated chunks
//! (`layered_eurlex::coordinated_chunks`) and re-parses every chunk, so a
//! record arrives with one parse per chunk.

use layered_dep::ParsedSentence;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceMetadata {
    #[serde(rename = "CELEX_number", alias = "celex")]
    pub celex: String,
    pub sentence_id: String,
    pub sub_sentence_id: String,
    pub length_celex: usize,
    pub length_sentence: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedChunk {
    #[serde(flatten)]
    pub parse: ParsedSentence,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    /// Full sentence text before chunking.
    #[serde(default)]
    pub text: String,
    pub metadata: SentenceMetadata,
    #[serde(default)]
    pub chunks: Vec<ParsedChunk>,
}

impl InputRecord {
    pub fn from_json(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}
