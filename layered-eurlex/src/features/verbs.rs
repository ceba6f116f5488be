//! Root verb, auxiliaries, modals, negation and the agent/"to" prepositions.

use super::flag;
use crate::entity::{EntityType, TokenEntity, VerbCategory};
use layered_dep::{DepRel, Pos, TokenRef};

pub fn find_root(root: TokenRef<'_>) -> Option<VerbCategory> {
    root.verb_category()
}

fn aux_in(root: TokenRef<'_>, words: &[&str]) -> Option<bool> {
    flag(root
        .children()
        .any(|c| c.dep() == DepRel::Aux && words.contains(&c.text())))
}

pub fn find_aux(root: TokenRef<'_>) -> Option<bool> {
    flag(root.children().any(|c| c.dep() == DepRel::Aux))
}

pub fn find_auxpass(root: TokenRef<'_>) -> Option<bool> {
    flag(root.children().any(|c| c.dep() == DepRel::Auxpass))
}

/// Permissive modal.
pub fn find_pmod(root: TokenRef<'_>) -> Option<bool> {
    aux_in(root, &["may", "can"])
}

/// Obligation modal.
pub fn find_smod(root: TokenRef<'_>) -> Option<bool> {
    aux_in(root, &["shall", "must", "will"])
}

/// "Member States need not apply"
pub fn find_needaux(root: TokenRef<'_>) -> Option<bool> {
    aux_in(root, &["need", "needs"])
}

/// "Member States need not to apply": the negation sits on the complement.
pub fn find_needneg(root: TokenRef<'_>) -> Option<bool> {
    flag(root
        .children()
        .filter(|c| c.dep() == DepRel::Xcomp)
        .any(|xcomp| xcomp.children().any(|c| c.dep() == DepRel::Neg)))
}

macro_rules! root_lemma_checks {
    ( $( $(#[$meta:meta])* $name:ident => [$($word:literal),+ $(,)?]; )* ) => {
        $(
            $(#[$meta])*
            pub fn $name(root: TokenRef<'_>) -> Option<bool> {
                flag(matches!(root.text(), $($word)|+))
            }
        )*
    };
}

// Surface forms only, no lemmatisation.
root_lemma_checks! {
    /// "Member States need not to apply"
    find_needroot => ["need", "needs"];
    find_be => ["be", "is", "are"];
    find_have => ["have", "has"];
    find_give => ["give", "given"];
    find_make => ["make", "made"];
    find_take => ["take", "taken"];
    find_assist => ["assist", "assisted"];
    find_draw => ["draw", "drawn"];
    find_enter => [
        "enter", "entered", "hold", "held", "conduct", "launch", "launched", "start", "started",
    ];
    find_prepare => ["prepare", "prepared", "produce", "produced"];
    find_provide => [
        "provide", "provided", "exchange", "exchanged", "supply", "supplied",
    ];
    find_propose => ["propose", "proposed"];
    find_put => ["put"];
    find_refer => ["refer", "referred", "bring", "brought"];
    find_submit => ["submit", "submitted", "present", "presented"];
    find_adopt => ["adopt", "adopted"];
    find_affect => ["affect", "preclude", "prejudice"];
    find_apply => ["apply", "applied"];
    find_issueroot => ["issue", "issued", "deliver", "delivered"];
    find_remain => ["remain", "remains"];
    find_retain => ["retain", "retains", "reserve", "reserves"];
}

fn is_propose_verb(token: &TokenRef<'_>) -> bool {
    token.pos() == Pos::Verb && token.text() == "propose"
}

/// "... whether to propose ..."
pub fn find_propose2(root: TokenRef<'_>) -> Option<bool> {
    flag(root.children().any(|child| {
        if is_propose_verb(&child) {
            true
        } else if matches!(child.dep(), DepRel::Prep | DepRel::Mark) {
            child.children().any(|c| is_propose_verb(&c))
        } else {
            false
        }
    }))
}

/// "put forward"
pub fn find_forward(root: TokenRef<'_>) -> Option<bool> {
    flag(root
        .children()
        .any(|c| c.dep() == DepRel::Advmod && c.text() == "forward"))
}

/// Four negation shapes, tried per child in this order:
/// "shall not", "No Member State may", "shall no longer be obliged",
/// "shall have no powers".
pub fn find_neg(root: TokenRef<'_>) -> Option<bool> {
    flag(root.children().any(|child| match child.dep() {
        DepRel::Neg => true,
        DepRel::Nsubj | DepRel::Nsubjpass => child
            .children()
            .any(|c| c.dep() == DepRel::Det && matches!(c.text(), "No" | "no")),
        DepRel::Advmod if matches!(child.text(), "longer" | "more") => child
            .children()
            .any(|c| c.dep() == DepRel::Neg && c.text() == "no"),
        DepRel::Dobj if child.is(EntityType::Right) => child
            .children()
            .any(|c| c.dep() == DepRel::Det && c.text() == "no"),
        _ => false,
    }))
}

/// A passive "by"-phrase on the root.
pub fn find_by(root: TokenRef<'_>) -> Option<bool> {
    flag(root.children().any(|c| c.dep() == DepRel::Agent))
}

fn has_agent(token: TokenRef<'_>) -> bool {
    token.children().any(|c| c.dep() == DepRel::Agent)
}

/// Agent one clause down: "The measure decided upon by the Commission shall
/// set", "The Commission, assisted by ..., shall", "It shall be kept informed by".
pub fn find_by2(root: TokenRef<'_>) -> Option<bool> {
    flag(root.children().any(|child| match child.dep() {
        DepRel::Nsubj | DepRel::Nsubjpass | DepRel::Dobj => child
            .children()
            .filter(|c| c.dep() == DepRel::Acl)
            .any(has_agent),
        DepRel::Advcl | DepRel::Oprd => has_agent(child),
        _ => false,
    }))
}

/// "It may be set by a decision taken by the Commission."
pub fn find_by3(root: TokenRef<'_>) -> Option<bool> {
    flag(root
        .children()
        .filter(|c| c.dep() == DepRel::Agent)
        .any(|agent| {
            agent
                .children()
                .filter(|c| c.dep() == DepRel::Pobj)
                .any(|pobj| {
                    pobj.children()
                        .filter(|c| c.dep() == DepRel::Acl)
                        .any(has_agent)
                })
        }))
}

fn is_to(token: &TokenRef<'_>) -> bool {
    token.dep() == DepRel::Prep && token.text() == "to"
}

pub fn find_to(root: TokenRef<'_>) -> Option<bool> {
    flag(root.children().any(|c| is_to(&c)))
}

pub fn find_to2(root: TokenRef<'_>) -> Option<bool> {
    flag(root
        .children()
        .filter(|c| matches!(c.dep(), DepRel::Nsubj | DepRel::Nsubjpass | DepRel::Dobj))
        .any(|nominal| nominal.children().any(|c| is_to(&c))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use layered_dep::parse_table;

    #[test]
    fn test_lemma_checks_use_surface_form() {
        let sentence = parse_table("1 It PRON nsubj 2\n2 remains VERB ROOT 0").unwrap();
        let root = sentence.root().unwrap();
        assert_eq!(find_remain(root), Some(true));
        assert_eq!(find_retain(root), None);

        let sentence = parse_table("1 It PRON nsubj 2\n2 Remains VERB ROOT 0").unwrap();
        assert_eq!(find_remain(sentence.root().unwrap()), None);
    }

    #[test]
    fn test_enter_list_has_no_conducted() {
        let sentence = parse_table("1 It PRON nsubj 2\n2 conducted VERB ROOT 0").unwrap();
        assert_eq!(find_enter(sentence.root().unwrap()), None);
        let sentence = parse_table("1 It PRON nsubj 2\n2 held VERB ROOT 0").unwrap();
        assert_eq!(find_enter(sentence.root().unwrap()), Some(true));
    }

    #[test]
    fn test_modals() {
        let sentence = parse_table(
            "1 States PROPN nsubj 3 MS
             2 may AUX aux 3
             3 decide VERB ROOT 0",
        )
        .unwrap();
        let root = sentence.root().unwrap();
        assert_eq!(find_pmod(root), Some(true));
        assert_eq!(find_smod(root), None);
        assert_eq!(find_aux(root), Some(true));
        assert_eq!(find_auxpass(root), None);
    }

    #[test]
    fn test_need_not_shapes() {
        // "Member States need not apply"
        let sentence = parse_table(
            "1 States PROPN nsubj 4 MS
             2 need AUX aux 4
             3 not PART neg 4
             4 apply VERB ROOT 0",
        )
        .unwrap();
        let root = sentence.root().unwrap();
        assert_eq!(find_needaux(root), Some(true));
        assert_eq!(find_neg(root), Some(true));
        assert_eq!(find_needroot(root), None);

        // "Member States need not to apply"
        let sentence = parse_table(
            "1 States PROPN nsubj 2 MS
             2 need VERB ROOT 0
             3 not PART neg 5
             4 to PART aux 5
             5 apply VERB xcomp 2",
        )
        .unwrap();
        let root = sentence.root().unwrap();
        assert_eq!(find_needroot(root), Some(true));
        assert_eq!(find_needneg(root), Some(true));
        assert_eq!(find_neg(root), None);
    }

    #[test]
    fn test_negation_fallbacks() {
        // "No Member State may ..."
        let sentence = parse_table(
            "1 No DET det 2
             2 State PROPN nsubj 4 MS
             3 may AUX aux 4
             4 refuse VERB ROOT 0",
        )
        .unwrap();
        assert_eq!(find_neg(sentence.root().unwrap()), Some(true));

        // "Commission officials shall have no powers"
        let sentence = parse_table(
            "1 officials NOUN nsubj 3
             2 shall AUX aux 3
             3 have VERB ROOT 0
             4 no DET det 5
             5 powers NOUN dobj 3 RIGHT",
        )
        .unwrap();
        assert_eq!(find_neg(sentence.root().unwrap()), Some(true));

        // Same shape, untagged object: no negation.
        let sentence = parse_table(
            "1 officials NOUN nsubj 3
             2 shall AUX aux 3
             3 have VERB ROOT 0
             4 no DET det 5
             5 powers NOUN dobj 3",
        )
        .unwrap();
        assert_eq!(find_neg(sentence.root().unwrap()), None);
    }

    #[test]
    fn test_agent_one_clause_down() {
        // "The measure decided upon by the Commission shall apply"
        let sentence = parse_table(
            "1 The DET det 2
             2 measure NOUN nsubj 8 MEASURE
             3 decided VERB acl 2
             4 upon ADP prep 3
             5 by ADP agent 3
             6 the DET det 7
             7 Commission PROPN pobj 5 COM
             8 applies VERB ROOT 0",
        )
        .unwrap();
        let root = sentence.root().unwrap();
        assert_eq!(find_by(root), None);
        assert_eq!(find_by2(root), Some(true));
        assert_eq!(find_by3(root), None);
    }
}
