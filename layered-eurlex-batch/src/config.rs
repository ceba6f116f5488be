//! Batch configuration, read from TOML.
//!
//! ```toml
//! input = "corpus/EurLex_sentences.jsonl"
//! output = "out/EURLEX_corpus_annotated.jsonl"
//! threads = 8
//! progress_every = 10000
//! log_filter = "info,eurlex::postprocess=debug"
//!
//! [engine]
//! legacy_recommendation_pobj = true
//! ```

use crate::errors::{BatchError, BatchResult};
use layered_eurlex::EngineConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const INPUT_ENV: &str = "EURLEX_INPUT";
pub const OUTPUT_ENV: &str = "EURLEX_OUTPUT";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// JSONL file of input records.
    pub input: PathBuf,
    /// JSONL file the labelled rows are written to.
    pub output: PathBuf,
    /// Worker threads; `0` lets rayon decide.
    pub threads: usize,
    /// Emit a progress event every this many records. `0` disables progress.
    pub progress_every: usize,
    /// `tracing_subscriber::EnvFilter` directive, used when `RUST_LOG` is unset.
    pub log_filter: String,
    pub engine: EngineConfig,
}

impl Default for BatchConfig {
    fn default() -> Self {
        BatchConfig {
            input: PathBuf::from("EurLex_sentences.jsonl"),
            output: PathBuf::from("EURLEX_corpus_annotated.jsonl"),
            threads: 0,
            progress_every: 10_000,
            log_filter: "info".to_string(),
            engine: EngineConfig::default(),
        }
    }
}

impl BatchConfig {
    /// Parses `toml_str`; missing keys keep their defaults.
    pub fn from_toml(toml_str: &str) -> BatchResult<Self> {
        toml::from_str(toml_str).map_err(|e| BatchError::Config {
            path: PathBuf::from("<string>"),
            message: e.to_string(),
        })
    }

    /// Reads the file at `path` and applies the environment overrides.
    pub fn load(path: &Path) -> BatchResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| BatchError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: BatchConfig = toml::from_str(&content).map_err(|e| BatchError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// `EURLEX_INPUT` and `EURLEX_OUTPUT` replace the configured paths.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(
            std::env::var_os(INPUT_ENV).map(PathBuf::from),
            std::env::var_os(OUTPUT_ENV).map(PathBuf::from),
        );
    }

    fn apply_overrides(&mut self, input: Option<PathBuf>, output: Option<PathBuf>) {
        if let Some(input) = input {
            self.input = input;
        }
        if let Some(output) = output {
            self.output = output;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_keys() {
        let config = BatchConfig::from_toml("threads = 4").unwrap();
        assert_eq!(config.threads, 4);
        assert_eq!(config.progress_every, 10_000);
        assert_eq!(config.log_filter, "info");
        assert!(config.engine.legacy_recommendation_pobj);
    }

    #[test]
    fn test_engine_section() {
        let config = BatchConfig::from_toml(
            r#"
            input = "in.jsonl"
            [engine]
            legacy_recommendation_pobj = false
            "#,
        )
        .unwrap();
        assert_eq!(config.input, PathBuf::from("in.jsonl"));
        assert!(!config.engine.legacy_recommendation_pobj);
    }

    #[test]
    fn test_invalid_toml() {
        let err = BatchConfig::from_toml("threads = \"many\"").unwrap_err();
        assert!(matches!(err, BatchError::Config { .. }));
    }

    #[test]
    fn test_overrides_replace_paths() {
        let mut config = BatchConfig::default();
        config.apply_overrides(Some(PathBuf::from("a.jsonl")), None);
        assert_eq!(config.input, PathBuf::from("a.jsonl"));
        assert_eq!(config.output, PathBuf::from("EURLEX_corpus_annotated.jsonl"));
    }
}
