//! Non-actor participants: boards, committees, representatives and
//! "nothing"/"no provision" subjects.

use super::flag;
use crate::entity::{Actor, EntityType, TokenEntity};
use layered_dep::{DepRel, TokenRef};

fn is_committee(token: &TokenRef<'_>) -> bool {
    matches!(token.text(), "committee" | "Committee")
}

fn committee_pobj(token: TokenRef<'_>) -> bool {
    token
        .children()
        .any(|c| c.dep() == DepRel::Pobj && is_committee(&c))
}

pub fn find_board_dobj(root: TokenRef<'_>) -> Option<bool> {
    flag(root
        .children()
        .any(|c| c.dep() == DepRel::Dobj && matches!(c.text(), "board" | "Board")))
}

/// A committee as argument, agent, or in "assisted by a committee".
pub fn find_committee(root: TokenRef<'_>) -> Option<bool> {
    flag(root.children().any(|child| match child.dep() {
        DepRel::Nsubj | DepRel::Nsubjpass | DepRel::Dobj if is_committee(&child) => true,
        DepRel::Agent | DepRel::Prep | DepRel::Advcl => child.children().any(|inner| {
            match inner.dep() {
                DepRel::Pobj if is_committee(&inner) => true,
                // "The Commission, assisted by a committee, shall ..."
                DepRel::Agent => committee_pobj(inner),
                // "... by the Commission assisted by a committee"
                DepRel::Pobj => inner
                    .children()
                    .filter(|c| c.dep() == DepRel::Acl)
                    .any(|acl| {
                        acl.children()
                            .filter(|c| c.dep() == DepRel::Agent)
                            .any(committee_pobj)
                    }),
                _ => false,
            }
        }),
        _ => false,
    }))
}

pub fn find_committee_subj(root: TokenRef<'_>) -> Option<bool> {
    flag(root.children().any(|c| {
        matches!(c.dep(), DepRel::Nsubj | DepRel::Nsubjpass) && is_committee(&c)
    }))
}

pub fn find_committee_agent(root: TokenRef<'_>) -> Option<bool> {
    flag(root
        .children()
        .filter(|c| c.dep() == DepRel::Agent)
        .any(committee_pobj))
}

pub fn find_committee_pobj(root: TokenRef<'_>) -> Option<bool> {
    flag(root
        .children()
        .filter(|c| c.dep() == DepRel::Prep && c.text() == "to")
        .any(committee_pobj))
}

fn is_representative(token: &TokenRef<'_>) -> bool {
    token.is(EntityType::Representative)
}

pub fn find_rep(root: TokenRef<'_>) -> Option<bool> {
    flag(root.children().any(|child| match child.dep() {
        DepRel::Nsubj | DepRel::Nsubjpass | DepRel::Dobj if is_representative(&child) => true,
        DepRel::Agent | DepRel::Prep => child
            .children()
            .any(|c| c.dep() == DepRel::Pobj && is_representative(&c)),
        _ => false,
    }))
}

fn is_of_or_from(token: &TokenRef<'_>) -> bool {
    token.dep() == DepRel::Prep && matches!(token.text(), "of" | "from")
}

/// "Representative of the Commission", "from the Commission"
fn actor_after_of(token: TokenRef<'_>) -> Option<Actor> {
    token
        .children()
        .filter(is_of_or_from)
        .find_map(|prep| super::actors::actor_child(prep, &[DepRel::Pobj]))
}

/// The actor a representative speaks for: "Commission representative",
/// "representatives of the Member State", "Officials or authorised
/// representatives of the Member State".
fn represented_actor(representative: TokenRef<'_>) -> Option<Actor> {
    representative.children().find_map(|child| {
        if child.actor().is_some() && matches!(child.dep(), DepRel::Compound | DepRel::Poss) {
            child.actor()
        } else if is_of_or_from(&child) {
            super::actors::actor_child(child, &[DepRel::Pobj])
        } else if child.dep() == DepRel::Conj {
            child
                .children()
                .filter(is_representative)
                .find_map(actor_after_of)
        } else {
            None
        }
    })
}

fn rep_in_role(root: TokenRef<'_>, rel: DepRel) -> Option<Actor> {
    root.children()
        .filter(|c| c.dep() == rel && is_representative(c))
        .find_map(represented_actor)
}

pub fn find_rep_subj(root: TokenRef<'_>) -> Option<Actor> {
    rep_in_role(root, DepRel::Nsubj)
}

pub fn find_rep_subjpass(root: TokenRef<'_>) -> Option<Actor> {
    rep_in_role(root, DepRel::Nsubjpass)
}

/// "by Commission representatives", "by representatives of the Commission"
pub fn find_rep_agent(root: TokenRef<'_>) -> Option<Actor> {
    root.children()
        .filter(|c| c.dep() == DepRel::Agent)
        .find_map(|agent| {
            agent
                .children()
                .filter(|c| c.dep() == DepRel::Pobj && is_representative(c))
                .find_map(|representative| {
                    representative.children().find_map(|child| {
                        if child.actor().is_some()
                            && matches!(child.dep(), DepRel::Compound | DepRel::Poss)
                        {
                            child.actor()
                        } else if is_of_or_from(&child) {
                            super::actors::actor_child(child, &[DepRel::Pobj])
                        } else {
                            None
                        }
                    })
                })
        })
}

/// "Nothing in this Regulation shall ...", "No provision of ..."
pub fn find_nothing(root: TokenRef<'_>) -> Option<bool> {
    flag(root.children().any(|child| {
        if !matches!(child.dep(), DepRel::Nsubj | DepRel::Nsubjpass) {
            return false;
        }
        match child.text() {
            "nothing" | "Nothing" => true,
            "provision" | "provisions" => child
                .children()
                .any(|c| c.dep() == DepRel::Det && matches!(c.text(), "no" | "No")),
            _ => false,
        }
    }))
}
