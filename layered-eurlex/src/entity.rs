//! The closed tag vocabulary assigned to tokens by the upstream NER stage.

use layered_dep::TokenRef;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Every tag the rules know about. Anything else is treated as untagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityType {
    /// The European Commission
    #[serde(rename = "COM")]
    Com,
    /// A supranational agency
    #[serde(rename = "AGE")]
    Age,
    /// A Member State
    #[serde(rename = "MS")]
    Ms,
    /// A national competent authority
    #[serde(rename = "CA")]
    Ca,
    #[serde(rename = "REPRESENTATIVE")]
    Representative,
    #[serde(rename = "RIGHT")]
    Right,
    #[serde(rename = "PROPOSAL")]
    Proposal,
    #[serde(rename = "RECOMMENDATION")]
    Recommendation,
    #[serde(rename = "OPINION")]
    Opinion,
    #[serde(rename = "MEASURE")]
    Measure,
    #[serde(rename = "ISSUE")]
    Issue,
    #[serde(rename = "INFORMATION")]
    Information,
    #[serde(rename = "SOFT_IMPL")]
    SoftImpl,
    #[serde(rename = "DELEGATION")]
    Delegation,
    #[serde(rename = "PERMISSION")]
    Permission,
    #[serde(rename = "CONSTRAINT")]
    Constraint,
    #[serde(rename = "ACTIVE_CONSTRAINT")]
    ActiveConstraint,
}

impl EntityType {
    /// Map an upstream tag. Unknown tags yield `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let entity = match tag {
            "COM" => Self::Com,
            "AGE" => Self::Age,
            "MS" => Self::Ms,
            "CA" => Self::Ca,
            "REPRESENTATIVE" => Self::Representative,
            "RIGHT" => Self::Right,
            "PROPOSAL" => Self::Proposal,
            "RECOMMENDATION" => Self::Recommendation,
            "OPINION" => Self::Opinion,
            "MEASURE" => Self::Measure,
            "ISSUE" => Self::Issue,
            "INFORMATION" => Self::Information,
            "SOFT_IMPL" => Self::SoftImpl,
            "DELEGATION" => Self::Delegation,
            "PERMISSION" => Self::Permission,
            "CONSTRAINT" => Self::Constraint,
            "ACTIVE_CONSTRAINT" => Self::ActiveConstraint,
            _ => return None,
        };
        Some(entity)
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Com => "COM",
            Self::Age => "AGE",
            Self::Ms => "MS",
            Self::Ca => "CA",
            Self::Representative => "REPRESENTATIVE",
            Self::Right => "RIGHT",
            Self::Proposal => "PROPOSAL",
            Self::Recommendation => "RECOMMENDATION",
            Self::Opinion => "OPINION",
            Self::Measure => "MEASURE",
            Self::Issue => "ISSUE",
            Self::Information => "INFORMATION",
            Self::SoftImpl => "SOFT_IMPL",
            Self::Delegation => "DELEGATION",
            Self::Permission => "PERMISSION",
            Self::Constraint => "CONSTRAINT",
            Self::ActiveConstraint => "ACTIVE_CONSTRAINT",
        }
    }
}

/// The institutional actors whose provisions are classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Actor {
    #[serde(rename = "COM")]
    Com,
    #[serde(rename = "AGE")]
    Age,
    #[serde(rename = "MS")]
    Ms,
    #[serde(rename = "CA")]
    Ca,
}

impl Actor {
    pub fn tag(&self) -> &'static str {
        EntityType::from(*self).tag()
    }
}

impl From<Actor> for EntityType {
    fn from(actor: Actor) -> Self {
        match actor {
            Actor::Com => EntityType::Com,
            Actor::Age => EntityType::Age,
            Actor::Ms => EntityType::Ms,
            Actor::Ca => EntityType::Ca,
        }
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Verb categories the NER stage puts on root verbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VerbCategory {
    /// advise, cooperate, coordinate, work ...
    #[serde(rename = "SOFT_IMPL")]
    SoftImpl,
    #[serde(rename = "DELEGATION")]
    Delegation,
    #[serde(rename = "PERMISSION")]
    Permission,
    #[serde(rename = "CONSTRAINT")]
    Constraint,
    #[serde(rename = "ACTIVE_CONSTRAINT")]
    ActiveConstraint,
}

impl VerbCategory {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::SoftImpl => "SOFT_IMPL",
            Self::Delegation => "DELEGATION",
            Self::Permission => "PERMISSION",
            Self::Constraint => "CONSTRAINT",
            Self::ActiveConstraint => "ACTIVE_CONSTRAINT",
        }
    }
}

impl fmt::Display for VerbCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Entity lookups on parse tokens.
pub trait TokenEntity {
    fn entity(&self) -> Option<EntityType>;

    fn actor(&self) -> Option<Actor> {
        match self.entity()? {
            EntityType::Com => Some(Actor::Com),
            EntityType::Age => Some(Actor::Age),
            EntityType::Ms => Some(Actor::Ms),
            EntityType::Ca => Some(Actor::Ca),
            _ => None,
        }
    }

    fn verb_category(&self) -> Option<VerbCategory> {
        match self.entity()? {
            EntityType::SoftImpl => Some(VerbCategory::SoftImpl),
            EntityType::Delegation => Some(VerbCategory::Delegation),
            EntityType::Permission => Some(VerbCategory::Permission),
            EntityType::Constraint => Some(VerbCategory::Constraint),
            EntityType::ActiveConstraint => Some(VerbCategory::ActiveConstraint),
            _ => None,
        }
    }

    fn is(&self, entity: EntityType) -> bool {
        self.entity() == Some(entity)
    }
}

impl<'s> TokenEntity for TokenRef<'s> {
    fn entity(&self) -> Option<EntityType> {
        self.ent_type().and_then(EntityType::from_tag)
    }
}
