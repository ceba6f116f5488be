//! Classifier families and their ordered rule lists.
//!
//! A family holds an ordered list of [`Rule`]s; the first rule whose guard
//! holds names the family's label. Guards read only the [`FeatureRecord`]
//! and the family's actor, so Member State and national authority families
//! share most of their guards, as do the Commission and agency ones.

mod national;
mod supranational;

use crate::entity::{Actor, VerbCategory};
use crate::features::FeatureRecord;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

macro_rules! families {
    ( $( $(#[$meta:meta])* $variant:ident => $column:literal, $actor:ident, $rules:path; )* ) => {
        /// One output column of the classifier.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Family {
            $( $(#[$meta])* $variant, )*
        }

        impl Family {
            /// Every family in output column order.
            pub const ALL: &'static [Family] = &[ $( Family::$variant, )* ];

            pub fn column(self) -> &'static str {
                match self {
                    $( Family::$variant => $column, )*
                }
            }

            pub fn from_column(column: &str) -> Option<Family> {
                match column {
                    $( $column => Some(Family::$variant), )*
                    _ => None,
                }
            }

            /// The actor every guard of this family is evaluated for.
            pub fn actor(self) -> Actor {
                match self {
                    $( Family::$variant => Actor::$actor, )*
                }
            }

            /// The family's rules in evaluation order.
            pub fn rules(self) -> &'static [Rule] {
                match self {
                    $( Family::$variant => $rules.as_slice(), )*
                }
            }
        }
    };
}

families! {
    DelMs => "del_ms", Ms, national::DEL_MS;
    /// "without prejudice" and public policy reservations.
    DelMs2 => "del_ms2", Ms, national::DEL_MS2;
    ConMs => "con_ms", Ms, national::CON;
    ConMs2 => "con_ms2", Ms, national::CON2;
    SoMs => "so_ms", Ms, national::SO;
    SoMs2 => "so_ms2", Ms, national::SO2;
    DelNca => "del_nca", Ca, national::DEL_NCA;
    DelNca2 => "del_nca2", Ca, national::DEL_NCA2;
    ConNca => "con_nca", Ca, national::CON_NCA;
    ConNca2 => "con_nca2", Ca, national::CON2;
    SoNca => "so_nca", Ca, national::SO;
    SoNca2 => "so_nca2", Ca, national::SO2;
    /// Commission proposals and submissions.
    Agenda => "agenda", Com, supranational::AGENDA;
    DelCom => "del_com", Com, supranational::DEL_COM;
    SiCom => "si_com", Com, supranational::SOFT;
    SiCom2 => "si_com2", Com, supranational::SOFT2;
    ConCom => "con_com", Com, supranational::CON_COM;
    ConCom2 => "con_com2", Com, supranational::CON_COM2;
    DelAge => "del_age", Age, supranational::DEL_AGE;
    SiAge => "si_age", Age, supranational::SOFT;
    SiAge2 => "si_age2", Age, supranational::SOFT2;
    ConAge => "con_age", Age, supranational::CON_AGE;
    ConAge2 => "con_age2", Age, supranational::CON_AGE2;
}

pub(crate) const FAMILY_COUNT: usize = 23;

impl Family {
    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// A category code such as `G1_pass` or `COMIT10-22b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Label(pub(crate) &'static str);

impl Label {
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl PartialEq<&str> for Label {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Serialize for Label {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}

/// At most one label per family.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSet {
    labels: [Option<Label>; FAMILY_COUNT],
}

impl LabelSet {
    pub fn get(&self, family: Family) -> Option<Label> {
        self.labels[family.index()]
    }

    pub fn set(&mut self, family: Family, label: Option<Label>) {
        self.labels[family.index()] = label;
    }

    pub fn clear(&mut self, family: Family) {
        self.set(family, None);
    }

    /// Whether `family` carries one of `codes`.
    pub fn is_any(&self, family: Family, codes: &[&str]) -> bool {
        self.get(family)
            .map_or(false, |label| codes.contains(&label.as_str()))
    }

    /// Every family with its label, in column order.
    pub fn iter(&self) -> impl Iterator<Item = (Family, Option<Label>)> + '_ {
        Family::ALL.iter().map(move |&family| (family, self.get(family)))
    }

    /// Only the families that carry a label.
    pub fn assigned(&self) -> impl Iterator<Item = (Family, Label)> + '_ {
        self.iter()
            .filter_map(|(family, label)| label.map(|label| (family, label)))
    }

    pub fn len(&self) -> usize {
        self.labels.iter().filter(|label| label.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for LabelSet {
    /// `del_com=G1 con_com=COMIT10-22b`, or `-` when empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }
        for (i, (family, label)) in self.assigned().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}={}", family, label)?;
        }
        Ok(())
    }
}

impl Serialize for LabelSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(FAMILY_COUNT))?;
        for (family, label) in self.iter() {
            map.serialize_entry(family.column(), &label)?;
        }
        map.end()
    }
}

pub type Guard = fn(&FeatureRecord, Actor) -> bool;

/// A category code guarded by a condition on the feature record.
#[derive(Clone, Copy)]
pub struct Rule {
    pub code: &'static str,
    pub guard: Guard,
}

impl Rule {
    pub fn new(code: &'static str, guard: Guard) -> Self {
        Rule { code, guard }
    }

    pub fn matches(&self, record: &FeatureRecord, actor: Actor) -> bool {
        (self.guard)(record, actor)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Rule").field(&self.code).finish()
    }
}

/// First matching rule of `family`, if any.
pub fn classify(family: Family, record: &FeatureRecord) -> Option<Label> {
    let actor = family.actor();
    let rule = family
        .rules()
        .iter()
        .find(|rule| rule.matches(record, actor))?;
    tracing::trace!(
        target: "eurlex::rules",
        family = family.column(),
        code = rule.code,
        "rule_matched"
    );
    Some(Label(rule.code))
}

/// Raw labels for every family, before conflict resolution.
pub fn classify_all(record: &FeatureRecord) -> LabelSet {
    let mut labels = LabelSet::default();
    for &family in Family::ALL {
        labels.set(family, classify(family, record));
    }
    labels
}

// Guard building blocks

pub(crate) fn has(flag: Option<bool>) -> bool {
    flag == Some(true)
}

/// Subject, conjoined subject, or represented subject.
pub(crate) fn subject(r: &FeatureRecord, a: Actor) -> bool {
    r.subj == Some(a) || r.subj2 == Some(a) || r.rep_subj == Some(a)
}

pub(crate) fn agent(r: &FeatureRecord, a: Actor) -> bool {
    r.agent == Some(a) || r.agent2 == Some(a) || r.rep_agent == Some(a)
}

pub(crate) fn passive_subject(r: &FeatureRecord, a: Actor) -> bool {
    r.subjpass == Some(a) || r.subjpass2 == Some(a) || r.rep_subjpass == Some(a)
}

pub(crate) fn object(r: &FeatureRecord, a: Actor) -> bool {
    r.dobj == Some(a) || r.dobj2 == Some(a)
}

pub(crate) fn subject_or_agent(r: &FeatureRecord, a: Actor) -> bool {
    subject(r, a) || agent(r, a)
}

/// "may", or "need not" in either parse.
pub(crate) fn may_or_need_not(r: &FeatureRecord) -> bool {
    (has(r.pmod) && r.neg.is_none())
        || (has(r.needaux) && has(r.neg))
        || (has(r.needroot) && has(r.needneg))
}

pub(crate) fn modal(r: &FeatureRecord) -> bool {
    has(r.pmod) || has(r.smod)
}

pub(crate) fn root_is(r: &FeatureRecord, category: VerbCategory) -> bool {
    r.root == Some(category)
}

/// Untagged root, or any root category except soft implementation.
pub(crate) fn not_soft(r: &FeatureRecord) -> bool {
    !root_is(r, VerbCategory::SoftImpl)
}

pub(crate) fn delegation_or_permission(r: &FeatureRecord) -> bool {
    root_is(r, VerbCategory::Delegation) || root_is(r, VerbCategory::Permission)
}

/// Adopting, issuing or making a recommendation or opinion.
pub(crate) fn issues_recommendation(r: &FeatureRecord) -> bool {
    has(r.adopt) || has(r.issueroot) || has(r.make)
}
