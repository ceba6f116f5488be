//! Member States and national competent authorities.
//!
//! Both actors share their guards. The authority lists differ in four
//! places: permission by object needs a modal, staffing counts as a right,
//! the prejudice reservation has a single variant, and secrecy is a
//! constraint.

use super::{
    agent, delegation_or_permission, has, issues_recommendation, may_or_need_not, not_soft,
    object, passive_subject, root_is, subject, subject_or_agent, Rule,
};
use crate::entity::{Actor, VerbCategory::*};
use crate::features::FeatureRecord;
use once_cell::sync::Lazy;

// Delegating

fn general(r: &FeatureRecord, a: Actor) -> bool {
    subject(r, a) && may_or_need_not(r)
}

fn general_passive(r: &FeatureRecord, a: Actor) -> bool {
    agent(r, a) && has(r.auxpass) && may_or_need_not(r)
}

/// "Measures of the Member States may ..."
fn general_act(r: &FeatureRecord, a: Actor) -> bool {
    r.pobj2subj == Some(a) && has(r.pmod) && r.neg.is_none() && has(r.measure_subj)
}

fn general_act_passive(r: &FeatureRecord, a: Actor) -> bool {
    r.pobj3 == Some(a)
        && has(r.pmod)
        && has(r.auxpass)
        && r.neg.is_none()
        && has(r.measure_pobj)
        && has(r.by)
}

fn delegated_permitted(r: &FeatureRecord, a: Actor) -> bool {
    passive_subject(r, a) && has(r.auxpass) && r.neg.is_none() && delegation_or_permission(r)
}

fn delegated_to(r: &FeatureRecord, a: Actor) -> bool {
    r.pobj == Some(a)
        && has(r.auxpass)
        && r.neg.is_none()
        && has(r.to)
        && root_is(r, Delegation)
}

fn permitted_object(r: &FeatureRecord, a: Actor) -> bool {
    object(r, a) && r.neg.is_none() && root_is(r, Permission)
}

fn permitted_object_modal(r: &FeatureRecord, a: Actor) -> bool {
    has(r.pmod) && permitted_object(r, a)
}

fn constrained_negated(r: &FeatureRecord, a: Actor) -> bool {
    passive_subject(r, a) && has(r.auxpass) && has(r.neg) && root_is(r, Constraint)
}

fn constrained_object_negated(r: &FeatureRecord, a: Actor) -> bool {
    object(r, a) && has(r.neg) && root_is(r, Constraint)
}

fn constrained_act_or_right(r: &FeatureRecord, a: Actor) -> bool {
    r.pobj2dobj == Some(a)
        && has(r.neg)
        && (has(r.measure_dobj) || has(r.right_dobj))
        && root_is(r, Constraint)
}

/// "Nothing shall prevent Member States from ..."
fn constrained_nothing(r: &FeatureRecord, a: Actor) -> bool {
    object(r, a) && r.neg.is_none() && has(r.nothing) && root_is(r, Constraint)
}

/// "It shall have no effect on measures of the Member States"
fn no_effect_on_object(r: &FeatureRecord, a: Actor) -> bool {
    r.pobj5 == Some(a)
        && has(r.smod)
        && r.neg.is_none()
        && has(r.noeffect)
        && has(r.measure_pobj2)
        && has(r.have)
}

/// Free to, remaining competent, or retaining a right.
pub(super) fn retains_right(r: &FeatureRecord, a: Actor) -> bool {
    subject(r, a)
        && r.neg.is_none()
        && ((has(r.free) && has(r.be))
            || (has(r.competent) && has(r.remain))
            || (has(r.right_dobj) && (has(r.retain) || has(r.have))))
}

/// "Competent authorities shall have sufficient personnel"
fn retains_right_or_staff(r: &FeatureRecord, a: Actor) -> bool {
    retains_right(r, a)
        || (subject(r, a) && r.neg.is_none() && has(r.personnel) && has(r.have))
}

/// "without prejudice to the powers of the Member States"
fn prejudice(r: &FeatureRecord, a: Actor) -> bool {
    (r.pobj6 == Some(a) || r.pobj7 == Some(a)) && has(r.prejudice) && has(r.right)
}

/// "save on grounds of public policy, public security or public health"
fn public_grounds(r: &FeatureRecord, _: Actor) -> bool {
    has(r.public_grounds)
}

pub(super) static DEL_MS: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::new("G1", general),
        Rule::new("G1_pass", general_passive),
        Rule::new("G1_act", general_act),
        Rule::new("G1_actpass", general_act_passive),
        Rule::new("DP1", delegated_permitted),
        Rule::new("D1_pobj", delegated_to),
        Rule::new("P1_dobj", permitted_object),
        Rule::new("C1", constrained_negated),
        Rule::new("C1_dobj", constrained_object_negated),
        Rule::new("C1_actright", constrained_act_or_right),
        Rule::new("C1_nothing", constrained_nothing),
        Rule::new("NO_EFFECT", no_effect_on_object),
        Rule::new("RIGHT", retains_right),
    ]
});

pub(super) static DEL_NCA: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::new("G1", general),
        Rule::new("G1_pass", general_passive),
        Rule::new("G1_act", general_act),
        Rule::new("G1_actpass", general_act_passive),
        Rule::new("DP1", delegated_permitted),
        Rule::new("D1_pobj", delegated_to),
        Rule::new("P1_dobj", permitted_object_modal),
        Rule::new("C1", constrained_negated),
        Rule::new("C1_dobj", constrained_object_negated),
        Rule::new("C1_actright", constrained_act_or_right),
        Rule::new("C1_nothing", constrained_nothing),
        Rule::new("NO_EFFECT", no_effect_on_object),
        Rule::new("RIGHT", retains_right_or_staff),
    ]
});

pub(super) static DEL_MS2: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::new("PREJEXPR1", prejudice),
        Rule::new("PREJEXPR2", public_grounds),
    ]
});

pub(super) static DEL_NCA2: Lazy<Vec<Rule>> =
    Lazy::new(|| vec![Rule::new("PREJEXPR", prejudice)]);

// Soft obligation

fn soft_may_not(r: &FeatureRecord, a: Actor) -> bool {
    subject(r, a) && has(r.pmod) && has(r.neg) && root_is(r, SoftImpl)
}

fn soft_shall(r: &FeatureRecord, a: Actor) -> bool {
    subject(r, a) && has(r.smod) && root_is(r, SoftImpl)
}

fn soft_may_not_passive(r: &FeatureRecord, a: Actor) -> bool {
    agent(r, a) && has(r.pmod) && has(r.auxpass) && has(r.neg) && root_is(r, SoftImpl)
}

fn soft_shall_passive(r: &FeatureRecord, a: Actor) -> bool {
    agent(r, a) && has(r.smod) && has(r.auxpass) && root_is(r, SoftImpl)
}

fn recommend(r: &FeatureRecord, a: Actor) -> bool {
    (r.subj == Some(a) || r.subj2 == Some(a))
        && has(r.smod)
        && r.neg.is_none()
        && (has(r.recommendation_dobj) || has(r.opinion_dobj))
        && issues_recommendation(r)
}

fn recommend_passive(r: &FeatureRecord, a: Actor) -> bool {
    (r.agent == Some(a) || r.agent2 == Some(a))
        && has(r.smod)
        && has(r.auxpass)
        && r.neg.is_none()
        && (has(r.recommendation_subj) || has(r.opinion_subj))
        && issues_recommendation(r)
}

fn collaboration(r: &FeatureRecord, a: Actor) -> bool {
    subject_or_agent(r, a) && has(r.collaboration)
}

pub(super) static SO: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::new("G1", soft_may_not),
        Rule::new("G2", soft_shall),
        Rule::new("G1_pass", soft_may_not_passive),
        Rule::new("G2_pass", soft_shall_passive),
        Rule::new("RECOMMEND", recommend),
        Rule::new("RECOMMEND_pass", recommend_passive),
    ]
});

pub(super) static SO2: Lazy<Vec<Rule>> =
    Lazy::new(|| vec![Rule::new("COLLABORATION", collaboration)]);

// Constraining

fn may_not(r: &FeatureRecord, a: Actor) -> bool {
    subject(r, a) && has(r.pmod) && has(r.neg) && not_soft(r)
}

fn shall(r: &FeatureRecord, a: Actor) -> bool {
    subject(r, a) && has(r.smod) && not_soft(r)
}

fn may_not_passive(r: &FeatureRecord, a: Actor) -> bool {
    agent(r, a) && has(r.pmod) && has(r.auxpass) && has(r.neg) && not_soft(r)
}

fn shall_passive(r: &FeatureRecord, a: Actor) -> bool {
    agent(r, a) && has(r.smod) && has(r.auxpass) && not_soft(r)
}

fn act_may_not(r: &FeatureRecord, a: Actor) -> bool {
    r.pobj2subj == Some(a) && has(r.pmod) && has(r.neg) && has(r.measure_subj) && not_soft(r)
}

/// Excludes "... measures of the Member States shall remain in force".
fn act_shall(r: &FeatureRecord, a: Actor) -> bool {
    r.pobj2subj == Some(a)
        && has(r.smod)
        && has(r.measure_subj)
        && r.remain.is_none()
        && r.force.is_none()
        && not_soft(r)
}

fn act_may_not_passive(r: &FeatureRecord, a: Actor) -> bool {
    r.pobj3 == Some(a)
        && has(r.pmod)
        && has(r.auxpass)
        && has(r.neg)
        && has(r.measure_pobj)
        && has(r.by)
        && not_soft(r)
}

fn act_shall_passive(r: &FeatureRecord, a: Actor) -> bool {
    r.pobj3 == Some(a)
        && has(r.smod)
        && has(r.auxpass)
        && has(r.measure_pobj)
        && has(r.by)
        && not_soft(r)
}

fn not_delegated_permitted(r: &FeatureRecord, a: Actor) -> bool {
    passive_subject(r, a) && has(r.auxpass) && has(r.neg) && delegation_or_permission(r)
}

fn permitted_passive(r: &FeatureRecord, a: Actor) -> bool {
    passive_subject(r, a)
        && has(r.pmod)
        && has(r.auxpass)
        && r.neg.is_none()
        && root_is(r, Permission)
}

fn not_delegated_to(r: &FeatureRecord, a: Actor) -> bool {
    r.pobj == Some(a) && has(r.auxpass) && has(r.neg) && has(r.to) && root_is(r, Delegation)
}

fn constrained(r: &FeatureRecord, a: Actor) -> bool {
    passive_subject(r, a) && has(r.auxpass) && r.neg.is_none() && root_is(r, Constraint)
}

fn no_effect_on_subject(r: &FeatureRecord, a: Actor) -> bool {
    r.pobj4 == Some(a)
        && has(r.smod)
        && r.neg.is_none()
        && has(r.noeffect)
        && has(r.measure_subj)
        && has(r.have)
}

/// "The obligation of professional secrecy shall apply to competent authorities"
pub(super) fn secrecy_applies_to(r: &FeatureRecord, a: Actor) -> bool {
    (r.pobj == Some(a) || r.pobj2 == Some(a))
        && has(r.smod)
        && r.neg.is_none()
        && has(r.secrecy)
        && has(r.apply)
}

fn consultation(r: &FeatureRecord, a: Actor) -> bool {
    subject_or_agent(r, a) && has(r.consultation)
}

fn constraining() -> Vec<Rule> {
    vec![
        Rule::new("G1", may_not),
        Rule::new("G2", shall),
        Rule::new("G1_pass", may_not_passive),
        Rule::new("G2_pass", shall_passive),
        Rule::new("G1_act", act_may_not),
        Rule::new("G2_act", act_shall),
        Rule::new("G1_actpass", act_may_not_passive),
        Rule::new("G2_actpass", act_shall_passive),
        Rule::new("DP1", not_delegated_permitted),
        Rule::new("P2", permitted_passive),
        Rule::new("D1_pobj", not_delegated_to),
        Rule::new("P2_dobj", permitted_object_modal),
        Rule::new("C1", constrained),
        Rule::new("NO_EFFECT", no_effect_on_subject),
    ]
}

pub(super) static CON: Lazy<Vec<Rule>> = Lazy::new(constraining);

pub(super) static CON_NCA: Lazy<Vec<Rule>> = Lazy::new(|| {
    let mut rules = constraining();
    rules.push(Rule::new("SECRECY_pobj", secrecy_applies_to));
    rules
});

pub(super) static CON2: Lazy<Vec<Rule>> =
    Lazy::new(|| vec![Rule::new("CONSULTATION", consultation)]);
