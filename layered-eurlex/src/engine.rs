use crate::features::FeatureRecord;
use crate::postprocess::resolve;
use crate::rules::{classify_all, LabelSet};
use layered_dep::Sentence;
use serde::{Deserialize, Serialize};

/// Engine switches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Fill `recommendation_pobj` with the `recommendation_dobj` value, as
    /// the reference corpus labels were produced that way. When `false` the
    /// prepositional-object extractor is used.
    pub legacy_recommendation_pobj: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            legacy_recommendation_pobj: true,
        }
    }
}

/// Result of classifying one sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub features: FeatureRecord,
    /// Labels before conflict resolution.
    pub raw: LabelSet,
    pub labels: LabelSet,
}

/// Feature extraction, classification and conflict resolution for single
/// sentences. Stateless; share one engine across threads.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Engine { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn extract(&self, sentence: &Sentence) -> FeatureRecord {
        FeatureRecord::extract(sentence, &self.config)
    }

    pub fn classify(&self, sentence: &Sentence) -> Classification {
        let features = self.extract(sentence);
        let raw = classify_all(&features);
        let labels = resolve(&raw);
        tracing::trace!(
            target: "eurlex::engine",
            text = %features.text,
            labels = %labels,
            "sentence_classified"
        );
        Classification {
            features,
            raw,
            labels,
        }
    }
}
