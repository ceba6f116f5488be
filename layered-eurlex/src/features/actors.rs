//! Actor-role extractors.
//!
//! Each function walks a fixed number of hops from the root and returns the
//! actor filling that role. Hop counts and relation sequences differ between
//! the numbered variants on purpose and must stay as they are.

use crate::entity::{Actor, TokenEntity};
use layered_dep::{DepRel, Pos, TokenRef};

/// First child of `token` with one of `rels` that carries an actor tag.
pub(crate) fn actor_child(token: TokenRef<'_>, rels: &[DepRel]) -> Option<Actor> {
    token
        .children()
        .find_map(|child| child.actor().filter(|_| rels.contains(&child.dep())))
}

/// Actor inside a prepositional phrase hanging off `token`.
fn actor_pobj_of(token: TokenRef<'_>) -> Option<Actor> {
    actor_child(token, &[DepRel::Pobj])
}

/// Antecedent search for a pronominal subject.
///
/// "When the Commission decides that it is no longer justified, it shall ..."
/// "Any of the Member States concerned may decide ..."
fn pronoun_antecedent(root: TokenRef<'_>, pronoun_rel: DepRel) -> Option<Actor> {
    root.children()
        .filter(|clause| {
            (clause.dep() == DepRel::Advcl && matches!(clause.pos(), Pos::Aux | Pos::Verb))
                || (clause.dep() == pronoun_rel && clause.pos() == Pos::Pron)
        })
        .find_map(|clause| {
            clause.children().find_map(|child| {
                if child.actor().is_some()
                    && matches!(child.dep(), DepRel::Nsubj | DepRel::Nsubjpass)
                {
                    child.actor()
                } else if child.dep() == DepRel::Prep && child.pos() == Pos::Adp {
                    actor_pobj_of(child)
                } else {
                    None
                }
            })
        })
}

/// "The Member State concerned may decide", "The Member State responsible ..."
fn modified_subject(subject: TokenRef<'_>) -> Option<Actor> {
    actor_child(subject, &[DepRel::Nsubj, DepRel::Npadvmod])
}

pub fn find_subj(root: TokenRef<'_>) -> Option<Actor> {
    root.children().find_map(|child| match child.dep() {
        DepRel::Nsubj if child.actor().is_some() => child.actor(),
        DepRel::Nsubj if child.pos() == Pos::Pron => pronoun_antecedent(root, DepRel::Nsubj),
        DepRel::Nsubj if matches!(child.pos(), Pos::Verb | Pos::Adj) => modified_subject(child),
        DepRel::Csubj if child.pos() == Pos::Verb => modified_subject(child),
        _ => None,
    })
}

pub fn find_subjpass(root: TokenRef<'_>) -> Option<Actor> {
    root.children().find_map(|child| match child.dep() {
        DepRel::Nsubjpass if child.actor().is_some() => child.actor(),
        DepRel::Nsubjpass if child.pos() == Pos::Pron => {
            pronoun_antecedent(root, DepRel::Nsubjpass)
        }
        DepRel::Nsubjpass if matches!(child.pos(), Pos::Verb | Pos::Adj) => {
            modified_subject(child)
        }
        DepRel::Csubjpass if child.pos() == Pos::Verb => modified_subject(child),
        _ => None,
    })
}

/// Second conjunct of a coordinated role: "The Commission and the Member States shall ..."
fn coordinated(root: TokenRef<'_>, rel: DepRel) -> Option<Actor> {
    root.children()
        .filter(|child| child.dep() == rel)
        .find_map(|head| actor_child(head, &[DepRel::Conj]))
}

pub fn find_subj2(root: TokenRef<'_>) -> Option<Actor> {
    coordinated(root, DepRel::Nsubj)
}

pub fn find_subjpass2(root: TokenRef<'_>) -> Option<Actor> {
    coordinated(root, DepRel::Nsubjpass)
}

pub fn find_dobj(root: TokenRef<'_>) -> Option<Actor> {
    actor_child(root, &[DepRel::Dobj])
}

pub fn find_dobj2(root: TokenRef<'_>) -> Option<Actor> {
    coordinated(root, DepRel::Dobj)
}

/// "It may be applied by the Member States"
pub fn find_agent(root: TokenRef<'_>) -> Option<Actor> {
    root.children()
        .filter(|child| child.dep() == DepRel::Agent)
        .find_map(|agent| agent.children().find_map(|child| child.actor()))
}

/// Coordinated agents: "by the Commission and the Member States",
/// "by the Commission or by a Member State".
pub fn find_agent2(root: TokenRef<'_>) -> Option<Actor> {
    root.children()
        .filter(|child| child.dep() == DepRel::Agent)
        .find_map(|agent| {
            agent.children().find_map(|child| {
                if child.dep() == DepRel::Pobj {
                    actor_child(child, &[DepRel::Conj])
                } else if child.dep() == DepRel::Conj && child.text() == "by" {
                    actor_pobj_of(child)
                } else {
                    None
                }
            })
        })
}

fn is_prep_or_agent(token: &TokenRef<'_>) -> bool {
    matches!(token.dep(), DepRel::Prep | DepRel::Agent)
}

/// "It may be applied by/to the Member States"
pub fn find_pobj(root: TokenRef<'_>) -> Option<Actor> {
    root.children()
        .filter(is_prep_or_agent)
        .find_map(actor_pobj_of)
}

/// Prepositional actor attached to a nominal argument of the root.
fn nominal_pobj(root: TokenRef<'_>, heads: &[DepRel]) -> Option<Actor> {
    root.children()
        .filter(|child| heads.contains(&child.dep()))
        .find_map(|nominal| nominal.children().filter(is_prep_or_agent).find_map(actor_pobj_of))
}

/// "The laws of the Member States may provide", "It shall be kept informed by ..."
pub fn find_pobj2(root: TokenRef<'_>) -> Option<Actor> {
    nominal_pobj(
        root,
        &[DepRel::Dobj, DepRel::Nsubj, DepRel::Nsubjpass, DepRel::Oprd],
    )
}

pub fn find_pobj2subj(root: TokenRef<'_>) -> Option<Actor> {
    nominal_pobj(root, &[DepRel::Nsubj, DepRel::Nsubjpass])
}

/// "It shall not affect the right of the Member States"
pub fn find_pobj2dobj(root: TokenRef<'_>) -> Option<Actor> {
    nominal_pobj(root, &[DepRel::Dobj])
}

/// "It shall not be set by the laws of the Member States"
pub fn find_pobj3(root: TokenRef<'_>) -> Option<Actor> {
    root.children().filter(is_prep_or_agent).find_map(|prep| {
        prep.children()
            .filter(|c| c.dep() == DepRel::Pobj)
            .find_map(|pobj| pobj.children().filter(is_prep_or_agent).find_map(actor_pobj_of))
    })
}

/// "The measure decided upon by the Commission shall set"
pub fn find_pobj4(root: TokenRef<'_>) -> Option<Actor> {
    root.children()
        .filter(|c| matches!(c.dep(), DepRel::Nsubj | DepRel::Nsubjpass | DepRel::Dobj))
        .find_map(|nominal| {
            nominal
                .children()
                .filter(|c| c.dep() == DepRel::Acl)
                .find_map(|acl| {
                    acl.children()
                        .filter(|c| c.dep() == DepRel::Agent)
                        .find_map(actor_pobj_of)
                })
        })
}

/// "It may be set by a decision taken by the Commission",
/// "... acting on a proposal from the Commission",
/// "It shall have no effect on decisions of Member States".
pub fn find_pobj5(root: TokenRef<'_>) -> Option<Actor> {
    root.children()
        .filter(|c| matches!(c.dep(), DepRel::Agent | DepRel::Advcl | DepRel::Dobj))
        .find_map(|hop1| {
            hop1.children()
                .filter(|c| matches!(c.dep(), DepRel::Pobj | DepRel::Prep))
                .find_map(|hop2| {
                    hop2.children()
                        .filter(|c| matches!(c.dep(), DepRel::Acl | DepRel::Pobj))
                        .find_map(|hop3| {
                            hop3.children()
                                .filter(|c| matches!(c.dep(), DepRel::Agent | DepRel::Prep))
                                .find_map(actor_pobj_of)
                        })
                })
        })
}

/// "The Council may decide on the basis of the proposal from the Commission."
///
/// The fifth hop only follows `prep`; a `pobj` at that depth is never taken.
pub fn find_pobj6(root: TokenRef<'_>) -> Option<Actor> {
    root.children()
        .filter(|c| matches!(c.dep(), DepRel::Agent | DepRel::Advcl | DepRel::Prep))
        .find_map(|hop1| {
            hop1.children()
                .filter(|c| matches!(c.dep(), DepRel::Pobj | DepRel::Prep))
                .find_map(|hop2| {
                    hop2.children()
                        .filter(|c| matches!(c.dep(), DepRel::Acl | DepRel::Pobj | DepRel::Prep))
                        .find_map(|hop3| {
                            hop3.children()
                                .filter(|c| {
                                    matches!(c.dep(), DepRel::Agent | DepRel::Prep | DepRel::Pobj)
                                })
                                .find_map(|hop4| {
                                    hop4.children()
                                        .filter(|c| c.dep() == DepRel::Prep)
                                        .find_map(actor_pobj_of)
                                })
                        })
                })
        })
}

/// "The Council may decide, acting on the basis of the proposal from the Commission."
pub fn find_pobj7(root: TokenRef<'_>) -> Option<Actor> {
    const CHAIN: [DepRel; 5] = [
        DepRel::Advcl,
        DepRel::Prep,
        DepRel::Pobj,
        DepRel::Prep,
        DepRel::Pobj,
    ];
    follow_chain(root, &CHAIN, &|last: TokenRef<'_>| {
        last.children()
            .filter(|c| c.dep() == DepRel::Prep)
            .find_map(actor_pobj_of)
    })
}

/// Depth-first walk along a fixed relation sequence, trying `at_end` on
/// every token reached by the full sequence.
fn follow_chain<'s>(
    token: TokenRef<'s>,
    chain: &[DepRel],
    at_end: &dyn Fn(TokenRef<'s>) -> Option<Actor>,
) -> Option<Actor> {
    match chain.split_first() {
        None => at_end(token),
        Some((rel, rest)) => token
            .children()
            .filter(|c| c.dep() == *rel)
            .find_map(|next| follow_chain(next, rest, at_end)),
    }
}

fn actor_compound(token: TokenRef<'_>) -> Option<Actor> {
    actor_child(token, &[DepRel::Compound])
}

/// Actor used as a noun modifier: "The Commission decision may establish",
/// "... acting on the basis of a Commission proposal".
pub fn find_compound(root: TokenRef<'_>) -> Option<Actor> {
    root.children().find_map(|child| match child.dep() {
        DepRel::Nsubj | DepRel::Nsubjpass | DepRel::Dobj => actor_compound(child),
        DepRel::Agent | DepRel::Prep | DepRel::Advcl => child
            .children()
            .filter(|c| matches!(c.dep(), DepRel::Pobj | DepRel::Prep))
            .find_map(compound_hop3),
        _ => None,
    })
}

fn compound_hop3(token: TokenRef<'_>) -> Option<Actor> {
    token.children().find_map(|child| {
        if child.actor().is_some() && child.dep() == DepRel::Compound {
            child.actor()
        } else if matches!(child.dep(), DepRel::Prep | DepRel::Pobj) {
            compound_hop4(child)
        } else {
            None
        }
    })
}

fn compound_hop4(token: TokenRef<'_>) -> Option<Actor> {
    token.children().find_map(|child| {
        if child.actor().is_some() && child.dep() == DepRel::Compound {
            child.actor()
        } else if matches!(child.dep(), DepRel::Pobj | DepRel::Prep) {
            child.children().find_map(|grandchild| {
                if grandchild.actor().is_some() && grandchild.dep() == DepRel::Compound {
                    grandchild.actor()
                } else if grandchild.dep() == DepRel::Pobj {
                    actor_compound(grandchild)
                } else {
                    None
                }
            })
        } else {
            None
        }
    })
}

/// Works around a frequent misparse: "The power ... is conferred on the
/// Commission subject to ...", where "Commission" ends up a compound of "subject".
pub fn find_compound_subj(root: TokenRef<'_>) -> Option<Actor> {
    root.children()
        .filter(|c| c.dep() == DepRel::Prep)
        .find_map(|prep| {
            prep.children()
                .filter(|c| c.dep() == DepRel::Pobj && c.text() == "subject")
                .find_map(actor_compound)
        })
}
