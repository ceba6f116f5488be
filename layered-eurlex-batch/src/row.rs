use crate::record::SentenceMetadata;
use layered_eurlex::{Actor, Classification, FeatureRecord, LabelSet, VerbCategory};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Actor-role columns, `subj` through `compound_subj`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorRoles([Option<Actor>; 17]);

impl ActorRoles {
    pub fn get(&self, column: &str) -> Option<Actor> {
        let index = FeatureRecord::ACTOR_COLUMNS
            .iter()
            .position(|name| *name == column)?;
        self.0[index]
    }
}

impl Serialize for ActorRoles {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (column, role) in FeatureRecord::ACTOR_COLUMNS.iter().zip(self.0.iter()) {
            map.serialize_entry(column, role)?;
        }
        map.end()
    }
}

/// One output line per sentence of a chunk, columns in output order.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct LabeledRow {
    pub celex: String,
    pub sentence_id: String,
    pub sub_sentence_id: String,
    pub subsub_sentence_id: String,
    pub subsub_sentence_n: usize,
    /// Characters in `text`.
    pub length: usize,
    pub length_sentence: usize,
    pub length_celex: usize,
    pub text: String,
    pub root: Option<VerbCategory>,
    pub neg: Option<bool>,
    pub pmod: Option<bool>,
    pub smod: Option<bool>,
    #[serde(flatten)]
    pub labels: LabelSet,
    #[serde(flatten)]
    pub roles: ActorRoles,
}

impl LabeledRow {
    /// `n` is the chunk's position within its sentence.
    pub fn new(metadata: &SentenceMetadata, n: usize, result: Classification) -> Self {
        let Classification {
            features, labels, ..
        } = result;
        LabeledRow {
            celex: metadata.celex.clone(),
            sentence_id: metadata.sentence_id.clone(),
            sub_sentence_id: metadata.sub_sentence_id.clone(),
            subsub_sentence_id: format!("{}_{}", metadata.sub_sentence_id, n),
            subsub_sentence_n: n,
            length: features.text.chars().count(),
            length_sentence: metadata.length_sentence,
            length_celex: metadata.length_celex,
            root: features.root,
            neg: features.neg,
            pmod: features.pmod,
            smod: features.smod,
            roles: ActorRoles(features.actor_roles()),
            text: features.text,
            labels,
        }
    }
}
