//! The Commission and supranational agencies.
//!
//! Agenda setting and comitology are Commission-only. Agencies add a right
//! rule, secrecy and the "in accordance with" reservation.

use super::national::{retains_right, secrecy_applies_to};
use super::{
    agent, delegation_or_permission, has, issues_recommendation, modal, not_soft, object,
    passive_subject, root_is, subject, subject_or_agent, Rule,
};
use crate::entity::{Actor, VerbCategory::*};
use crate::features::FeatureRecord;
use once_cell::sync::Lazy;

// Agenda setting

fn propose(r: &FeatureRecord, a: Actor) -> bool {
    r.subj == Some(a) && modal(r) && r.neg.is_none() && (has(r.propose) || has(r.propose2))
}

fn propose_passive(r: &FeatureRecord, a: Actor) -> bool {
    r.agent == Some(a) && modal(r) && has(r.auxpass) && r.neg.is_none() && has(r.propose)
}

fn put_forward(r: &FeatureRecord) -> bool {
    has(r.put) && has(r.forward)
}

/// Submit, prepare or put forward.
fn presents(r: &FeatureRecord) -> bool {
    has(r.submit) || put_forward(r) || has(r.prepare)
}

/// "make/submit/prepare/put forward a proposal", or
/// "submit/prepare/put forward a recommendation or measure".
fn submits_instrument(proposal: bool, other: bool, r: &FeatureRecord) -> bool {
    (proposal && (has(r.make) || presents(r))) || (other && presents(r))
}

/// Submission to a committee is a constraint, not agenda setting.
fn submit(r: &FeatureRecord, a: Actor) -> bool {
    r.subj == Some(a)
        && modal(r)
        && r.neg.is_none()
        && r.committee_pobj.is_none()
        && submits_instrument(
            has(r.proposal_dobj),
            has(r.recommendation_dobj) || has(r.measure_dobj),
            r,
        )
}

fn submit_passive(r: &FeatureRecord, a: Actor) -> bool {
    r.agent == Some(a)
        && modal(r)
        && has(r.auxpass)
        && r.neg.is_none()
        && submits_instrument(
            has(r.proposal_subj),
            has(r.recommendation_subj) || has(r.measure_subj),
            r,
        )
}

/// "on a proposal from the Commission", "on the basis of a Commission proposal"
fn on_proposal(r: &FeatureRecord, a: Actor) -> bool {
    let placed = [r.pobj3, r.pobj5, r.pobj6, r.pobj7, r.compound];
    placed.contains(&Some(a)) && has(r.proposal) && has(r.proposal_intro)
}

/// "accompanied by a legislative proposal"
fn legislative_proposal(r: &FeatureRecord, _: Actor) -> bool {
    (has(r.by) || has(r.by2) || has(r.by3)) && has(r.legprop)
}

fn legislative_proposal_text(r: &FeatureRecord, _: Actor) -> bool {
    has(r.by_legislative_proposal)
}

pub(super) static AGENDA: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::new("PROPOSE", propose),
        Rule::new("PROPOSE_pass", propose_passive),
        Rule::new("SUBMIT", submit),
        Rule::new("SUBMIT_pass", submit_passive),
        Rule::new("PROPOSAL1", on_proposal),
        Rule::new("PROPOSAL2", legislative_proposal),
        Rule::new("PROPOSAL3", legislative_proposal_text),
    ]
});

// Delegating

/// Untagged root or delegation, permission, constraint, or an active
/// constraint softened by "may".
fn delegating_root(r: &FeatureRecord) -> bool {
    not_soft(r) && (!root_is(r, ActiveConstraint) || has(r.pmod))
}

fn without_activity(r: &FeatureRecord) -> bool {
    !root_is(r, SoftImpl) && !root_is(r, ActiveConstraint)
}

fn general(r: &FeatureRecord, a: Actor) -> bool {
    subject(r, a) && r.neg.is_none() && delegating_root(r)
}

/// Boards and "shall comprise" sentences describe an agency's organisation.
fn general_agency(r: &FeatureRecord, a: Actor) -> bool {
    general(r, a) && r.board_dobj.is_none() && r.shall_comprise.is_none()
}

fn general_passive(r: &FeatureRecord, a: Actor) -> bool {
    agent(r, a) && has(r.auxpass) && r.neg.is_none() && delegating_root(r)
}

/// "Commission measures", "measures of the Commission",
/// "measures decided upon by the Commission".
fn act_author(r: &FeatureRecord, a: Actor) -> bool {
    r.pobj2subj == Some(a) || r.compound == Some(a) || (r.pobj4 == Some(a) && has(r.by2))
}

fn act_author_passive(r: &FeatureRecord, a: Actor) -> bool {
    r.pobj3 == Some(a) || r.compound == Some(a) || (r.pobj5 == Some(a) && has(r.by3))
}

fn general_act_agency(r: &FeatureRecord, a: Actor) -> bool {
    act_author(r, a)
        && has(r.pmod)
        && r.auxpass.is_none()
        && r.neg.is_none()
        && has(r.measure_subj)
        && without_activity(r)
}

/// Acts addressed "to the Commission" are not its own.
fn general_act(r: &FeatureRecord, a: Actor) -> bool {
    general_act_agency(r, a) && r.to_the_commission.is_none()
}

fn general_act_passive_agency(r: &FeatureRecord, a: Actor) -> bool {
    act_author_passive(r, a)
        && has(r.auxpass)
        && r.neg.is_none()
        && has(r.measure_pobj)
        && has(r.by)
        && without_activity(r)
}

fn general_act_passive(r: &FeatureRecord, a: Actor) -> bool {
    general_act_passive_agency(r, a) && r.to_the_commission.is_none()
}

fn delegated_permitted(r: &FeatureRecord, a: Actor) -> bool {
    passive_subject(r, a) && has(r.auxpass) && r.neg.is_none() && delegation_or_permission(r)
}

/// "... conferred on the Commission subject to ..."
fn delegated_to(r: &FeatureRecord, a: Actor) -> bool {
    (r.pobj == Some(a) || r.compound_subj == Some(a))
        && has(r.auxpass)
        && r.neg.is_none()
        && root_is(r, Delegation)
}

fn permitted_object(r: &FeatureRecord, a: Actor) -> bool {
    object(r, a) && r.neg.is_none() && root_is(r, Permission)
}

fn constrained_negated(r: &FeatureRecord, a: Actor) -> bool {
    passive_subject(r, a) && has(r.auxpass) && has(r.neg) && root_is(r, Constraint)
}

fn constrained_object_negated(r: &FeatureRecord, a: Actor) -> bool {
    object(r, a) && has(r.neg) && root_is(r, Constraint)
}

fn constrained_act_or_right(r: &FeatureRecord, a: Actor) -> bool {
    (r.pobj2dobj == Some(a) || r.pobj4 == Some(a))
        && has(r.neg)
        && (has(r.right_dobj) || has(r.measure_dobj))
        && root_is(r, Constraint)
}

fn constrained_act(r: &FeatureRecord, a: Actor) -> bool {
    r.pobj2dobj == Some(a)
        && has(r.smod)
        && r.neg.is_none()
        && has(r.measure_dobj)
        && root_is(r, Constraint)
}

pub(super) static DEL_COM: Lazy<Vec<Rule>> = Lazy::new(|| {
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
        Rule::new("C1_act", constrained_act),
    ]
});

/// The right rule runs first: "The Agency shall remain competent" is also a
/// general delegation by shape.
pub(super) static DEL_AGE: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::new("RIGHT", retains_right),
        Rule::new("G1", general_agency),
        Rule::new("G1_pass", general_passive),
        Rule::new("G1_act", general_act_agency),
        Rule::new("G1_actpass", general_act_passive_agency),
        Rule::new("DP1", delegated_permitted),
        Rule::new("D1_pobj", delegated_to),
        Rule::new("P1_dobj", permitted_object),
        Rule::new("C1", constrained_negated),
        Rule::new("C1_dobj", constrained_object_negated),
        Rule::new("C1_actright", constrained_act_or_right),
        Rule::new("C1_act", constrained_act),
    ]
});

// Soft implementation

fn soft_root(r: &FeatureRecord) -> bool {
    root_is(r, SoftImpl) || has(r.provide)
}

fn soft(r: &FeatureRecord, a: Actor) -> bool {
    subject(r, a) && modal(r) && r.neg.is_none() && soft_root(r)
}

fn soft_passive(r: &FeatureRecord, a: Actor) -> bool {
    agent(r, a) && modal(r) && has(r.auxpass) && r.neg.is_none() && soft_root(r)
}

fn recommend(r: &FeatureRecord, a: Actor) -> bool {
    (r.subj == Some(a) || r.subj2 == Some(a))
        && modal(r)
        && r.neg.is_none()
        && (has(r.recommendation_dobj) || has(r.opinion_dobj))
        && issues_recommendation(r)
}

fn recommend_passive(r: &FeatureRecord, a: Actor) -> bool {
    (r.agent == Some(a) || r.agent2 == Some(a))
        && modal(r)
        && has(r.auxpass)
        && r.neg.is_none()
        && (has(r.recommendation_subj) || has(r.opinion_subj))
        && issues_recommendation(r)
}

fn collaboration(r: &FeatureRecord, a: Actor) -> bool {
    subject_or_agent(r, a) && has(r.collaboration)
}

pub(super) static SOFT: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::new("G1", soft),
        Rule::new("G1_pass", soft_passive),
        Rule::new("RECOMMEND", recommend),
        Rule::new("RECOMMEND_pass", recommend_passive),
    ]
});

pub(super) static SOFT2: Lazy<Vec<Rule>> =
    Lazy::new(|| vec![Rule::new("COLLABORATION", collaboration)]);

// Constraining

/// Excludes "The Commission shall not be responsible for ...".
fn may_not(r: &FeatureRecord, a: Actor) -> bool {
    subject(r, a) && modal(r) && has(r.neg) && r.responsible.is_none()
}

fn may_not_passive(r: &FeatureRecord, a: Actor) -> bool {
    agent(r, a) && modal(r) && has(r.auxpass) && has(r.neg)
}

fn instrument_subject(r: &FeatureRecord) -> bool {
    has(r.measure_subj) || has(r.recommendation_subj) || has(r.opinion_subj)
}

/// Excludes "Application to the Commission may not ...".
fn act_may_not_by(author: fn(&FeatureRecord, Actor) -> bool, r: &FeatureRecord, a: Actor) -> bool {
    author(r, a) && has(r.pmod) && has(r.neg) && instrument_subject(r) && r.to2.is_none()
}

fn act_shall_by(author: fn(&FeatureRecord, Actor) -> bool, r: &FeatureRecord, a: Actor) -> bool {
    author(r, a) && has(r.smod) && instrument_subject(r) && r.to2.is_none()
}

fn act_may_not(r: &FeatureRecord, a: Actor) -> bool {
    act_may_not_by(act_author, r, a)
}

fn act_shall(r: &FeatureRecord, a: Actor) -> bool {
    act_shall_by(act_author, r, a)
}

/// "Agency measures" parses too loosely to count as authorship.
fn act_author_agency(r: &FeatureRecord, a: Actor) -> bool {
    r.pobj2subj == Some(a) || (r.pobj4 == Some(a) && has(r.by2))
}

fn act_may_not_agency(r: &FeatureRecord, a: Actor) -> bool {
    act_may_not_by(act_author_agency, r, a)
}

fn act_shall_agency(r: &FeatureRecord, a: Actor) -> bool {
    act_shall_by(act_author_agency, r, a)
}

fn act_negated_passive(r: &FeatureRecord, a: Actor) -> bool {
    act_author_passive(r, a)
        && has(r.auxpass)
        && has(r.neg)
        && has(r.by)
        && (has(r.measure_pobj) || has(r.recommendation_pobj) || has(r.opinion_pobj))
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
    r.pobj == Some(a) && has(r.auxpass) && has(r.neg) && root_is(r, Delegation)
}

fn permitted_object_modal(r: &FeatureRecord, a: Actor) -> bool {
    has(r.pmod) && permitted_object(r, a)
}

fn constrained(r: &FeatureRecord, a: Actor) -> bool {
    passive_subject(r, a) && has(r.auxpass) && r.neg.is_none() && root_is(r, Constraint)
}

/// "The Commission shall deliver an opinion"
fn opinion(r: &FeatureRecord, a: Actor) -> bool {
    r.subj == Some(a)
        && has(r.smod)
        && r.neg.is_none()
        && has(r.opinion_dobj)
        && root_is(r, Constraint)
}

/// Draw up, enter into, give, take, submit, prepare or provide.
fn reporting_verb(r: &FeatureRecord) -> bool {
    has(r.draw)
        || has(r.enter)
        || has(r.give)
        || has(r.take)
        || has(r.submit)
        || has(r.prepare)
        || has(r.provide)
}

fn information(r: &FeatureRecord, a: Actor) -> bool {
    subject(r, a)
        && has(r.smod)
        && r.neg.is_none()
        && has(r.information_dobjpobj)
        && reporting_verb(r)
}

fn information_passive(r: &FeatureRecord, a: Actor) -> bool {
    agent(r, a)
        && has(r.smod)
        && has(r.auxpass)
        && r.neg.is_none()
        && has(r.information_subj)
        && reporting_verb(r)
}

fn public(r: &FeatureRecord, a: Actor) -> bool {
    subject(r, a) && has(r.smod) && r.neg.is_none() && has(r.public) && has(r.make)
}

/// "... shall make it public and in good time"
fn public_agency(r: &FeatureRecord, a: Actor) -> bool {
    subject(r, a)
        && has(r.smod)
        && r.neg.is_none()
        && (has(r.public) || has(r.good))
        && has(r.make)
}

/// "Information received by the Commission shall be made public"
fn public_passive(r: &FeatureRecord, a: Actor) -> bool {
    (r.pobj == Some(a) || r.pobj4 == Some(a))
        && has(r.smod)
        && has(r.auxpass)
        && r.neg.is_none()
        && (has(r.by) || has(r.by2))
        && has(r.public)
        && has(r.make)
}

fn refer(r: &FeatureRecord, a: Actor) -> bool {
    (r.pobj2 == Some(a) || r.compound == Some(a) || r.pobj4 == Some(a))
        && has(r.pmod)
        && r.neg.is_none()
        && (has(r.measure_subj) || has(r.measure_dobj))
        && has(r.refer)
}

fn active(r: &FeatureRecord, a: Actor) -> bool {
    subject(r, a) && has(r.smod) && r.neg.is_none() && root_is(r, ActiveConstraint)
}

/// Strict modal or indicative; "The Agency shall be accountable" counts.
fn active_agency(r: &FeatureRecord, a: Actor) -> bool {
    subject(r, a)
        && (has(r.smod) || r.pmod.is_none())
        && r.neg.is_none()
        && (root_is(r, ActiveConstraint) || (has(r.accountable) && has(r.be)))
}

fn active_passive(r: &FeatureRecord, a: Actor) -> bool {
    agent(r, a)
        && has(r.auxpass)
        && has(r.smod)
        && r.neg.is_none()
        && root_is(r, ActiveConstraint)
}

fn secrecy(r: &FeatureRecord, a: Actor) -> bool {
    (r.subj == Some(a) || r.subj2 == Some(a))
        && has(r.smod)
        && r.neg.is_none()
        && has(r.secrecy)
        && has(r.apply)
}

/// "The Commission shall be assisted by a committee",
/// "The committee shall assist the Commission".
fn comitology_assisted(r: &FeatureRecord, a: Actor) -> bool {
    (r.subjpass == Some(a) || r.dobj == Some(a))
        && (has(r.committee_agent) || has(r.committee_subj))
        && has(r.smod)
        && r.neg.is_none()
        && has(r.assist)
}

/// "The Commission, assisted by a committee, shall ..."
fn comitology_assisted_clause(r: &FeatureRecord, a: Actor) -> bool {
    (r.subj == Some(a) || r.subjpass == Some(a) || r.agent == Some(a))
        && has(r.smod)
        && r.neg.is_none()
        && has(r.assisted)
        && has(r.committee)
        && (has(r.by2) || has(r.by3))
}

fn named_procedure(r: &FeatureRecord) -> bool {
    has(r.accordance) && has(r.comitproc)
}

/// "The Commission shall adopt the decision in accordance with the
/// advisory procedure"
fn comitology_procedure(r: &FeatureRecord, a: Actor) -> bool {
    r.subj == Some(a) && r.neg.is_none() && named_procedure(r)
}

/// "... shall be decided in accordance with the management procedure"
fn comitology_procedure_passive(r: &FeatureRecord, _: Actor) -> bool {
    has(r.auxpass) && r.neg.is_none() && named_procedure(r)
}

/// "... subject to the regulatory procedure"
fn comitology_subject_to(r: &FeatureRecord, a: Actor) -> bool {
    (r.subj == Some(a) || r.subjpass == Some(a) || r.agent == Some(a))
        && has(r.comitology_procedure_subject)
}

/// "The power to adopt delegated acts is conferred on the Commission
/// subject to the conditions laid down in this Article"
fn conferred_tertiary_power(r: &FeatureRecord, a: Actor) -> bool {
    (r.pobj == Some(a) || r.compound_subj == Some(a))
        && has(r.auxpass)
        && r.neg.is_none()
        && has(r.right_subj)
        && has(r.teract)
        && (has(r.subject_to) || has(r.accordance))
        && root_is(r, Delegation)
}

/// "The Commission shall adopt implementing acts in accordance with ..."
fn tertiary_act(r: &FeatureRecord, a: Actor) -> bool {
    (r.subj == Some(a) || r.subjpass == Some(a))
        && has(r.smod)
        && r.neg.is_none()
        && has(r.teract)
        && has(r.accordance)
        && (has(r.adopt) || root_is(r, Delegation))
}

/// "Implementing acts shall be adopted in accordance with ..."
fn tertiary_act_passive(r: &FeatureRecord, _: Actor) -> bool {
    has(r.teract)
        && has(r.smod)
        && has(r.auxpass)
        && r.neg.is_none()
        && has(r.accordance)
        && has(r.adopt)
}

/// Active constraints come after information, which shares the submit verbs.
pub(super) static CON_COM: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::new("G1", may_not),
        Rule::new("G1_pass", may_not_passive),
        Rule::new("G1_act_p", act_may_not),
        Rule::new("G1_act_s", act_shall),
        Rule::new("G1_act_pass", act_negated_passive),
        Rule::new("DP1", not_delegated_permitted),
        Rule::new("P2", permitted_passive),
        Rule::new("D1_pobj", not_delegated_to),
        Rule::new("P2_dobj", permitted_object_modal),
        Rule::new("C1", constrained),
        Rule::new("C1_opinion", opinion),
        Rule::new("INFORMATION", information),
        Rule::new("INFORMATION_pobj", information_passive),
        Rule::new("PUBLIC", public),
        Rule::new("PUBLIC_pobj", public_passive),
        Rule::new("REFER", refer),
        Rule::new("AC1", active),
        Rule::new("AC1_pobj", active_passive),
        Rule::new("COMIT88-99a", comitology_assisted),
        Rule::new("COMIT88-99b", comitology_assisted_clause),
        Rule::new("COMIT00-22a", comitology_procedure),
        Rule::new("COMIT00-22b", comitology_procedure_passive),
        Rule::new("COMIT00-09", comitology_subject_to),
        Rule::new("COMIT10-22a", conferred_tertiary_power),
        Rule::new("COMIT10-22b", tertiary_act),
        Rule::new("COMIT10-22c", tertiary_act_passive),
    ]
});

pub(super) static CON_AGE: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::new("G1", may_not),
        Rule::new("G1_pass", may_not_passive),
        Rule::new("G1_act_p", act_may_not_agency),
        Rule::new("G1_act_s", act_shall_agency),
        Rule::new("G1_act_pass", act_negated_passive),
        Rule::new("DP1", not_delegated_permitted),
        Rule::new("P2", permitted_passive),
        Rule::new("D1_pobj", not_delegated_to),
        Rule::new("P2_dobj", permitted_object_modal),
        Rule::new("C1", constrained),
        Rule::new("C1_opinion", opinion),
        Rule::new("AC1", active_agency),
        Rule::new("AC1_pobj", active_passive),
        Rule::new("INFORMATION", information),
        Rule::new("INFORMATION_pobj", information_passive),
        Rule::new("PUBLIC", public_agency),
        Rule::new("PUBLIC_pobj", public_passive),
        Rule::new("REFER", refer),
        Rule::new("SECRECY", secrecy),
        Rule::new("SECRECY_pobj", secrecy_applies_to),
    ]
});

fn consulted_act(r: &FeatureRecord, a: Actor) -> bool {
    (r.pobj3 == Some(a) || r.pobj5 == Some(a) || r.compound == Some(a))
        && has(r.auxpass)
        && r.neg.is_none()
        && has(r.measure_pobj)
        && (has(r.by) || has(r.by3))
}

fn consultation_commission(r: &FeatureRecord, a: Actor) -> bool {
    subject_or_agent(r, a) && has(r.consultation_com)
}

fn consultation_commission_act(r: &FeatureRecord, a: Actor) -> bool {
    consulted_act(r, a) && r.to_the_commission.is_none() && has(r.consultation_com)
}

fn consultation(r: &FeatureRecord, a: Actor) -> bool {
    subject_or_agent(r, a) && has(r.consultation)
}

fn consultation_act(r: &FeatureRecord, a: Actor) -> bool {
    consulted_act(r, a) && has(r.consultation)
}

/// "The Agency shall act in accordance with ...", "subject to ..."
fn accordance(r: &FeatureRecord, a: Actor) -> bool {
    subject_or_agent(r, a) && r.neg.is_none() && (has(r.subject_to) || has(r.accordance))
}

pub(super) static CON_COM2: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::new("CONSULTATION", consultation_commission),
        Rule::new("CONSULTATION_act", consultation_commission_act),
    ]
});

pub(super) static CON_AGE2: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::new("CONSULTATION", consultation),
        Rule::new("CONSULTATION_act", consultation_act),
        Rule::new("ACCORDANCE", accordance),
    ]
});
