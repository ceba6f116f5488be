//! Prerogative, right, secrecy and information terms.

use super::flag;
use crate::entity::{EntityType, TokenEntity};
use layered_dep::{DepRel, Pos, TokenRef};

fn acomp_in(root: TokenRef<'_>, words: &[&str]) -> Option<bool> {
    flag(root
        .children()
        .any(|c| c.dep() == DepRel::Acomp && words.contains(&c.text())))
}

pub fn find_competent(root: TokenRef<'_>) -> Option<bool> {
    acomp_in(root, &["competent"])
}

pub fn find_free(root: TokenRef<'_>) -> Option<bool> {
    acomp_in(root, &["free", "exempt"])
}

pub fn find_accountable(root: TokenRef<'_>) -> Option<bool> {
    acomp_in(root, &["accountable", "subject", "liable"])
}

pub fn find_responsible(root: TokenRef<'_>) -> Option<bool> {
    acomp_in(root, &["responsible"])
}

/// "in force"
pub fn find_force(root: TokenRef<'_>) -> Option<bool> {
    flag(root
        .children()
        .filter(|c| c.dep() == DepRel::Prep && c.text() == "in")
        .any(|prep| {
            prep.children()
                .any(|c| c.dep() == DepRel::Pobj && c.text() == "force")
        }))
}

/// "shall have no effect", "no impact"
pub fn find_noeffect(root: TokenRef<'_>) -> Option<bool> {
    flag(root
        .children()
        .filter(|c| c.dep() == DepRel::Dobj && matches!(c.text(), "effect" | "impact"))
        .any(|obj| obj.children().any(|c| c.dep() == DepRel::Det && c.text() == "no")))
}

/// "without prejudice"
pub fn find_prejudice(root: TokenRef<'_>) -> Option<bool> {
    flag(root
        .children()
        .filter(|c| c.dep() == DepRel::Prep && matches!(c.text(), "without" | "Without"))
        .any(|prep| {
            prep.children()
                .any(|c| c.dep() == DepRel::Pobj && c.text() == "prejudice")
        }))
}

fn is_right(token: &TokenRef<'_>) -> bool {
    token.is(EntityType::Right)
}

/// A right as object, passive subject, or inside a prepositional phrase:
/// "CA shall have, in accordance with national law, the following powers",
/// "without prejudice to the right of ...".
pub fn find_right(root: TokenRef<'_>) -> Option<bool> {
    flag(root.children().any(|child| match child.dep() {
        DepRel::Dobj | DepRel::Nsubjpass if is_right(&child) => true,
        DepRel::Dobj | DepRel::Prep => child.children().any(|inner| {
            if matches!(inner.dep(), DepRel::Pobj | DepRel::Conj) && is_right(&inner) {
                true
            } else if inner.dep() == DepRel::Pobj {
                inner
                    .children()
                    .filter(|c| c.dep() == DepRel::Prep)
                    .any(|prep| {
                        prep.children()
                            .any(|c| c.dep() == DepRel::Pobj && is_right(&c))
                    })
            } else {
                false
            }
        }),
        _ => false,
    }))
}

pub fn find_right_subj(root: TokenRef<'_>) -> Option<bool> {
    flag(root
        .children()
        .any(|c| matches!(c.dep(), DepRel::Nsubj | DepRel::Nsubjpass) && is_right(&c)))
}

pub fn find_right_dobj(root: TokenRef<'_>) -> Option<bool> {
    flag(root
        .children()
        .any(|c| c.dep() == DepRel::Dobj && is_right(&c)))
}

/// "the obligation of professional secrecy shall apply to ..."
pub fn find_secrecy(root: TokenRef<'_>) -> Option<bool> {
    flag(root
        .children()
        .filter(|c| matches!(c.dep(), DepRel::Nsubj | DepRel::Dobj))
        .any(|nominal| {
            nominal
                .children()
                .filter(|c| c.dep() == DepRel::Prep)
                .any(|prep| {
                    prep.children()
                        .any(|c| c.dep() == DepRel::Pobj && c.text() == "secrecy")
                })
        }))
}

fn is_argument(token: &TokenRef<'_>) -> bool {
    matches!(token.dep(), DepRel::Nsubj | DepRel::Nsubjpass | DepRel::Dobj)
}

/// "... refer the issue ..."
pub fn find_issue(root: TokenRef<'_>) -> Option<bool> {
    flag(root
        .children()
        .any(|c| is_argument(&c) && c.is(EntityType::Issue)))
}

fn is_information(token: &TokenRef<'_>) -> bool {
    token.is(EntityType::Information)
}

fn information_pobj(token: TokenRef<'_>) -> bool {
    token
        .children()
        .any(|c| c.dep() == DepRel::Pobj && is_information(&c))
}

pub fn find_information(root: TokenRef<'_>) -> Option<bool> {
    flag(root.children().any(|child| {
        if is_argument(&child) && is_information(&child) {
            true
        } else if child.dep() == DepRel::Prep {
            information_pobj(child)
        } else {
            false
        }
    }))
}

pub fn find_information_subj(root: TokenRef<'_>) -> Option<bool> {
    flag(root.children().any(|c| {
        matches!(c.dep(), DepRel::Nsubj | DepRel::Nsubjpass) && is_information(&c)
    }))
}

/// "... documents relating to information ..." reached through an
/// object's verbal modifier.
fn verbal_acl_information(token: TokenRef<'_>) -> bool {
    token.dep() == DepRel::Acl
        && token.pos() == Pos::Verb
        && token
            .children()
            .filter(|c| c.dep() == DepRel::Prep)
            .any(information_pobj)
}

pub fn find_information_dobjpobj(root: TokenRef<'_>) -> Option<bool> {
    flag(root.children().any(|child| match child.dep() {
        DepRel::Dobj if is_information(&child) => true,
        DepRel::Dobj => child.children().any(|inner| {
            if inner.dep() == DepRel::Compound && is_information(&inner) {
                true
            } else if inner.dep() == DepRel::Acl && inner.pos() == Pos::Verb {
                verbal_acl_information(inner)
            } else if inner.dep() == DepRel::Conj {
                inner.children().any(verbal_acl_information)
            } else {
                false
            }
        }),
        DepRel::Prep => information_pobj(child),
        _ => false,
    }))
}

fn is_public_adj(token: &TokenRef<'_>) -> bool {
    token.pos() == Pos::Adj && matches!(token.text(), "public" | "available" | "accessible")
}

/// "The Authority shall make its opinion public", "... made publicly available".
pub fn find_public(root: TokenRef<'_>) -> Option<bool> {
    flag(root.children().any(|child| {
        if child.pos() == Pos::Noun && child.text() == "public" {
            true
        } else if is_public_adj(&child) {
            true
        } else if child.dep() == DepRel::Ccomp && matches!(child.text(), "available" | "accessible")
        {
            child
                .children()
                .any(|c| c.dep() == DepRel::Advmod && c.text() == "publicly")
        } else if child.dep() == DepRel::Ccomp {
            child.children().any(|c| is_public_adj(&c))
        } else if child.dep() == DepRel::Dobj {
            child.children().any(|inner| {
                if is_public_adj(&inner) {
                    true
                } else if inner.dep() == DepRel::Acl && inner.pos() == Pos::Verb {
                    inner.children().any(|c| is_public_adj(&c))
                } else {
                    false
                }
            })
        } else {
            false
        }
    }))
}

pub fn find_good(root: TokenRef<'_>) -> Option<bool> {
    flag(root
        .children()
        .any(|c| c.pos() == Pos::Adj && c.text() == "good"))
}
