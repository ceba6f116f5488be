//! "in accordance with" phrases and comitology procedure names.

use super::flag;
use layered_dep::{DepRel, TokenRef};

fn is_accordance(token: &TokenRef<'_>) -> bool {
    token.dep() == DepRel::Pobj && matches!(token.text(), "accordance" | "conformity")
}

fn prep_accordance(prep: TokenRef<'_>) -> bool {
    prep.children().any(|c| is_accordance(&c))
}

/// "The act shall be adopted in accordance ...",
/// "The Commission shall be empowered to adopt implementing acts in accordance ...",
/// "... adopted by the Commission acting in accordance ...".
pub fn find_accordance(root: TokenRef<'_>) -> Option<bool> {
    flag(root
        .children()
        .filter(|c| {
            matches!(
                c.dep(),
                DepRel::Prep | DepRel::Dobj | DepRel::Advcl | DepRel::Agent | DepRel::Xcomp
            )
        })
        .any(|hop1| {
            hop1.children().any(|hop2| {
                if is_accordance(&hop2) {
                    true
                } else if matches!(hop2.dep(), DepRel::Pobj | DepRel::Dobj | DepRel::Xcomp) {
                    hop2.children().any(|hop3| match hop3.dep() {
                        DepRel::Prep => prep_accordance(hop3),
                        DepRel::Acl => hop3
                            .children()
                            .filter(|c| c.dep() == DepRel::Prep)
                            .any(prep_accordance),
                        _ => false,
                    })
                } else if hop2.dep() == DepRel::Prep {
                    prep_accordance(hop2)
                } else {
                    false
                }
            })
        }))
}

fn is_procedure_object(token: &TokenRef<'_>) -> bool {
    token.dep() == DepRel::Dobj && token.text() == "procedure"
}

/// Walks `prep/dobj/advcl/agent → pobj/prep → prep/pobj/acl` and then the
/// three "procedure" placements below it, calling `accept` on each
/// "procedure" token found. A direct "procedure" object is not descended into.
fn procedure_tail(root: TokenRef<'_>, accept: &dyn Fn(TokenRef<'_>) -> bool) -> bool {
    let is_procedure = |t: &TokenRef<'_>| t.dep() == DepRel::Pobj && t.text() == "procedure";
    root.children()
        .filter(|c| {
            matches!(
                c.dep(),
                DepRel::Prep | DepRel::Dobj | DepRel::Advcl | DepRel::Agent
            ) && !is_procedure_object(c)
        })
        .any(|hop1| {
            hop1.children()
                .filter(|c| matches!(c.dep(), DepRel::Pobj | DepRel::Prep))
                .any(|hop2| {
                    hop2.children()
                        .filter(|c| matches!(c.dep(), DepRel::Prep | DepRel::Pobj | DepRel::Acl))
                        .any(|hop3| {
                            hop3.children().any(|hop4| {
                                if is_procedure(&hop4) {
                                    // "... adopted in accordance with the procedure"
                                    accept(hop4)
                                } else if hop4.dep() == DepRel::Prep {
                                    hop4.children().any(|hop5| {
                                        if is_procedure(&hop5) {
                                            // "... adopt the act in accordance with the procedure"
                                            accept(hop5)
                                        } else if hop5.dep() == DepRel::Pobj {
                                            // "... decided by the Commission acting in accordance with the procedure"
                                            hop5.children()
                                                .filter(|c| c.dep() == DepRel::Prep)
                                                .any(|prep| {
                                                    prep.children()
                                                        .filter(|c| is_procedure(c))
                                                        .any(|p| accept(p))
                                                })
                                        } else {
                                            false
                                        }
                                    })
                                } else {
                                    false
                                }
                            })
                        })
                })
        })
}

pub fn find_procedure(root: TokenRef<'_>) -> Option<bool> {
    let direct = root.children().any(|c| is_procedure_object(&c));
    flag(direct || procedure_tail(root, &|_: TokenRef<'_>| true))
}

/// Comitology procedure names: advisory, regulatory, management,
/// safeguard, examination.
fn is_comitology(procedure: TokenRef<'_>) -> bool {
    procedure.children().any(|c| match c.dep() {
        DepRel::Amod => matches!(c.text(), "advisory" | "regulatory"),
        DepRel::Compound => matches!(c.text(), "management" | "safeguard" | "examination"),
        _ => false,
    })
}

pub fn find_comitproc(root: TokenRef<'_>) -> Option<bool> {
    let direct = root
        .children()
        .filter(is_procedure_object)
        .any(is_comitology);
    flag(direct || procedure_tail(root, &is_comitology))
}
