//! Legal instruments: proposals, recommendations, opinions, measures and
//! delegated/implementing acts.
//!
//! Instruments occupy the same grammatical slots as actors, so the walks
//! mirror the actor extractors with an entity check instead of an actor one.

use super::flag;
use crate::entity::{EntityType, TokenEntity};
use layered_dep::{DepRel, TokenRef};

fn is_argument(token: &TokenRef<'_>) -> bool {
    matches!(token.dep(), DepRel::Nsubj | DepRel::Nsubjpass | DepRel::Dobj)
}

fn is_subject(token: &TokenRef<'_>) -> bool {
    matches!(token.dep(), DepRel::Nsubj | DepRel::Nsubjpass)
}

fn tagged_pobj(token: &TokenRef<'_>, entity: EntityType) -> bool {
    token.dep() == DepRel::Pobj && token.is(entity)
}

/// `(agent|prep) → pobj[entity]`
fn prep_object(root: TokenRef<'_>, entity: EntityType) -> bool {
    root.children()
        .filter(|c| matches!(c.dep(), DepRel::Agent | DepRel::Prep))
        .any(|prep| prep.children().any(|c| tagged_pobj(&c, entity)))
}

/// Tagged argument, or `(agent|prep) → pobj[entity]` for children that are
/// not arguments.
fn argument_or_prep_object(root: TokenRef<'_>, entity: EntityType) -> bool {
    root.children().any(|child| {
        if is_argument(&child) && child.is(entity) {
            true
        } else if matches!(child.dep(), DepRel::Agent | DepRel::Prep) {
            child.children().any(|c| tagged_pobj(&c, entity))
        } else {
            false
        }
    })
}

/// Proposal nested in up to three prepositional hops below an agent, prep
/// or adverbial clause. `found` is applied to every tagged proposal reached.
fn nested_proposal(hop1: TokenRef<'_>, found: &dyn Fn(TokenRef<'_>) -> bool) -> bool {
    let is_proposal = |t: &TokenRef<'_>| tagged_pobj(t, EntityType::Proposal);
    let behind_prep = |token: TokenRef<'_>| {
        token
            .children()
            .filter(|c| c.dep() == DepRel::Prep)
            .any(|prep| prep.children().filter(|c| is_proposal(c)).any(|p| found(p)))
    };

    hop1.children().any(|hop2| {
        if is_proposal(&hop2) {
            found(hop2)
        } else if hop2.dep() == DepRel::Prep {
            hop2.children().any(|hop3| {
                if is_proposal(&hop3) {
                    found(hop3)
                } else if hop3.dep() == DepRel::Pobj {
                    behind_prep(hop3)
                } else {
                    false
                }
            })
        } else if hop2.dep() == DepRel::Pobj {
            behind_prep(hop2)
        } else {
            false
        }
    })
}

fn is_nesting_head(token: &TokenRef<'_>) -> bool {
    matches!(token.dep(), DepRel::Agent | DepRel::Prep | DepRel::Advcl)
}

pub fn find_proposal(root: TokenRef<'_>) -> Option<bool> {
    flag(root.children().any(|child| {
        if is_argument(&child) && child.is(EntityType::Proposal) {
            true
        } else if is_nesting_head(&child) {
            nested_proposal(child, &|_: TokenRef<'_>| true)
        } else {
            false
        }
    }))
}

pub fn find_proposal_subj(root: TokenRef<'_>) -> Option<bool> {
    flag(root
        .children()
        .any(|c| is_subject(&c) && c.is(EntityType::Proposal)))
}

/// "The Commission shall submit to the Council proposals ..."
pub fn find_proposal_dobj(root: TokenRef<'_>) -> Option<bool> {
    flag(root.children().any(|child| {
        if child.dep() == DepRel::Dobj && child.is(EntityType::Proposal) {
            true
        } else if is_nesting_head(&child) {
            nested_proposal(child, &|_: TokenRef<'_>| true)
        } else {
            false
        }
    }))
}

fn is_legislative(proposal: TokenRef<'_>) -> bool {
    proposal.children().any(|c| c.text() == "legislative")
}

/// A proposal modified by "legislative", in the same positions as
/// [`find_proposal`].
pub fn find_legprop(root: TokenRef<'_>) -> Option<bool> {
    flag(root.children().any(|child| {
        if is_argument(&child) && child.is(EntityType::Proposal) {
            is_legislative(child)
        } else if is_nesting_head(&child) {
            nested_proposal(child, &is_legislative)
        } else {
            false
        }
    }))
}

pub fn find_recommendation(root: TokenRef<'_>) -> Option<bool> {
    flag(argument_or_prep_object(root, EntityType::Recommendation))
}

pub fn find_recommendation_subj(root: TokenRef<'_>) -> Option<bool> {
    flag(root
        .children()
        .any(|c| is_subject(&c) && c.is(EntityType::Recommendation)))
}

/// "The Commission shall submit to the Council recommendations ..."
pub fn find_recommendation_dobj(root: TokenRef<'_>) -> Option<bool> {
    flag(root.children().any(|child| {
        if child.dep() == DepRel::Dobj && child.is(EntityType::Recommendation) {
            true
        } else if matches!(child.dep(), DepRel::Agent | DepRel::Prep) {
            child
                .children()
                .any(|c| tagged_pobj(&c, EntityType::Recommendation))
        } else {
            false
        }
    }))
}

pub fn find_recommendation_pobj(root: TokenRef<'_>) -> Option<bool> {
    flag(prep_object(root, EntityType::Recommendation))
}

pub fn find_opinion(root: TokenRef<'_>) -> Option<bool> {
    flag(argument_or_prep_object(root, EntityType::Opinion))
}

pub fn find_opinion_subj(root: TokenRef<'_>) -> Option<bool> {
    flag(root
        .children()
        .any(|c| is_subject(&c) && c.is(EntityType::Opinion)))
}

pub fn find_opinion_dobj(root: TokenRef<'_>) -> Option<bool> {
    flag(root
        .children()
        .any(|c| c.dep() == DepRel::Dobj && c.is(EntityType::Opinion)))
}

pub fn find_opinion_pobj(root: TokenRef<'_>) -> Option<bool> {
    flag(prep_object(root, EntityType::Opinion))
}

pub fn find_measure(root: TokenRef<'_>) -> Option<bool> {
    flag(argument_or_prep_object(root, EntityType::Measure))
}

pub fn find_measure_subj(root: TokenRef<'_>) -> Option<bool> {
    flag(root
        .children()
        .any(|c| is_subject(&c) && c.is(EntityType::Measure)))
}

pub fn find_measure_dobj(root: TokenRef<'_>) -> Option<bool> {
    flag(root
        .children()
        .any(|c| c.dep() == DepRel::Dobj && c.is(EntityType::Measure)))
}

pub fn find_measure_pobj(root: TokenRef<'_>) -> Option<bool> {
    flag(prep_object(root, EntityType::Measure))
}

/// "It shall have no effect on decisions ..."
pub fn find_measure_pobj2(root: TokenRef<'_>) -> Option<bool> {
    flag(root
        .children()
        .filter(|c| c.dep() == DepRel::Dobj)
        .any(|obj| {
            obj.children()
                .filter(|c| c.dep() == DepRel::Prep)
                .any(|prep| prep.children().any(|c| tagged_pobj(&c, EntityType::Measure)))
        }))
}

/// Tertiary-act modifiers, with and without a capitalised first letter.
const ACT_MODIFIERS: &[&str] = &[
    "delegated",
    "implementing",
    "technical",
    "Delegated",
    "Implementing",
    "Technical",
];

/// Lower-case only; deeper placements never see sentence-initial words.
const ACT_MODIFIERS_LOWER: &[&str] = &["delegated", "implementing", "technical"];

fn has_act_modifier(measure: TokenRef<'_>, modifiers: &[&str]) -> bool {
    measure
        .children()
        .any(|c| c.dep() == DepRel::Amod && modifiers.contains(&c.text()))
}

fn is_implementing(token: &TokenRef<'_>, rel: DepRel) -> bool {
    token.dep() == rel && token.text() == "implementing"
}

/// "implementing acts" parsed as a verb taking the act as object.
fn implementing_object(implementing: TokenRef<'_>) -> bool {
    implementing
        .children()
        .any(|c| c.dep() == DepRel::Dobj && c.is(EntityType::Measure))
}

/// Delegated, implementing or technical acts (Article 290/291 TFEU).
///
/// Covers "Delegated acts shall be ...", "The Commission shall adopt
/// implementing acts", "The power to adopt delegated acts is conferred ...",
/// "Power is conferred on the Commission to adopt implementing acts",
/// "... by way of delegated acts".
pub fn find_teract(root: TokenRef<'_>) -> Option<bool> {
    flag(root.children().any(|child| {
        let is_slot = matches!(child.dep(), DepRel::Nsubjpass | DepRel::Dobj);
        if is_slot && child.is(EntityType::Measure) {
            has_act_modifier(child, ACT_MODIFIERS)
        } else if is_slot {
            // "Those implementing acts shall be ...", "The power(s) to adopt ..."
            child.children().any(|inner| {
                if is_implementing(&inner, DepRel::Acl) {
                    implementing_object(inner)
                } else if matches!(inner.dep(), DepRel::Acl | DepRel::Relcl) {
                    inner.children().any(|clause| {
                        if clause.dep() == DepRel::Dobj && clause.is(EntityType::Measure) {
                            has_act_modifier(clause, ACT_MODIFIERS)
                        } else if is_implementing(&clause, DepRel::Xcomp) {
                            implementing_object(clause)
                        } else {
                            false
                        }
                    })
                } else {
                    false
                }
            })
        } else if is_implementing(&child, DepRel::Xcomp) {
            implementing_object(child)
        } else if child.dep() == DepRel::Xcomp {
            child.children().any(|inner| {
                if matches!(inner.dep(), DepRel::Pobj | DepRel::Dobj)
                    && inner.is(EntityType::Measure)
                {
                    has_act_modifier(inner, ACT_MODIFIERS_LOWER)
                } else if is_implementing(&inner, DepRel::Xcomp) {
                    implementing_object(inner)
                } else {
                    false
                }
            })
        } else if child.dep() == DepRel::Prep {
            // "... by way of delegated acts"
            child
                .children()
                .filter(|c| c.dep() == DepRel::Pobj)
                .any(|pobj| {
                    pobj.children()
                        .filter(|c| c.dep() == DepRel::Prep)
                        .any(|prep| {
                            prep.children().any(|act| {
                                if matches!(act.dep(), DepRel::Pobj | DepRel::Dobj)
                                    && act.is(EntityType::Measure)
                                {
                                    has_act_modifier(act, ACT_MODIFIERS_LOWER)
                                } else if is_implementing(&act, DepRel::Pcomp) {
                                    implementing_object(act)
                                } else {
                                    false
                                }
                            })
                        })
                })
        } else {
            false
        }
    }))
}
