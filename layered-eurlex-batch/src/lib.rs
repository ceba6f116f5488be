//! Batch labelling of a parsed EUR-Lex corpus.
//!
//! Reads JSONL [`InputRecord`]s (sentence metadata plus one dependency parse
//! per coordinated chunk), classifies every chunk with
//! [`layered_eurlex::Engine`] and writes one JSON [`LabeledRow`] per chunk.
//! Chunks are labelled in parallel; output order follows input order.

pub mod config;
mod errors;
pub mod logging;
mod record;
mod row;
mod runner;

pub use config::BatchConfig;
pub use errors::{BatchError, BatchResult};
pub use record::{InputRecord, ParsedChunk, SentenceMetadata};
pub use row::{ActorRoles, LabeledRow};
pub use runner::{label_record, label_records, read_records, run_batch, BatchSummary};
