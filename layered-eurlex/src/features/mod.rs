//! Feature extraction over a dependency parse.
//!
//! Every extractor is a pure function of the root token (or of the sentence
//! text, for the lexical flags) that returns `None` when its configuration is
//! absent. Presence flags are never `Some(false)`.

mod actors;
mod generic;
mod instruments;
mod lexical;
mod procedure;
mod terms;
mod verbs;

pub use actors::*;
pub use generic::*;
pub use instruments::*;
pub use lexical::*;
pub use procedure::*;
pub use terms::*;
pub use verbs::*;

use crate::engine::EngineConfig;
use crate::entity::{Actor, VerbCategory};
use layered_dep::Sentence;
use serde::{Deserialize, Serialize};

pub(crate) fn flag(found: bool) -> Option<bool> {
    found.then_some(true)
}

/// One flat record per sentence, fields in column order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureRecord {
    pub text: String,

    // Actor roles
    pub subj: Option<Actor>,
    pub subjpass: Option<Actor>,
    pub subj2: Option<Actor>,
    pub subjpass2: Option<Actor>,
    pub dobj: Option<Actor>,
    pub dobj2: Option<Actor>,
    pub agent: Option<Actor>,
    pub agent2: Option<Actor>,
    pub pobj: Option<Actor>,
    pub pobj2: Option<Actor>,
    pub pobj2subj: Option<Actor>,
    pub pobj2dobj: Option<Actor>,
    pub pobj3: Option<Actor>,
    pub pobj4: Option<Actor>,
    pub pobj5: Option<Actor>,
    pub pobj6: Option<Actor>,
    pub pobj7: Option<Actor>,
    pub compound: Option<Actor>,
    pub compound_subj: Option<Actor>,

    // Boards, committees, representatives
    pub board_dobj: Option<bool>,
    pub committee: Option<bool>,
    pub committee_subj: Option<bool>,
    pub committee_agent: Option<bool>,
    pub committee_pobj: Option<bool>,
    pub rep: Option<bool>,
    pub rep_subj: Option<Actor>,
    pub rep_subjpass: Option<Actor>,
    pub rep_agent: Option<Actor>,
    pub nothing: Option<bool>,

    // Root verb, auxiliaries and modals
    pub root: Option<VerbCategory>,
    pub aux: Option<bool>,
    pub auxpass: Option<bool>,
    pub pmod: Option<bool>,
    pub smod: Option<bool>,
    pub needaux: Option<bool>,
    pub needroot: Option<bool>,
    pub needneg: Option<bool>,

    // Root verb lemmas
    pub be: Option<bool>,
    pub have: Option<bool>,
    pub give: Option<bool>,
    pub take: Option<bool>,
    pub make: Option<bool>,
    pub assist: Option<bool>,
    pub draw: Option<bool>,
    pub enter: Option<bool>,
    pub prepare: Option<bool>,
    pub provide: Option<bool>,
    pub propose: Option<bool>,
    pub propose2: Option<bool>,
    pub put: Option<bool>,
    pub forward: Option<bool>,
    pub refer: Option<bool>,
    pub submit: Option<bool>,
    pub adopt: Option<bool>,
    pub affect: Option<bool>,
    pub apply: Option<bool>,
    pub issueroot: Option<bool>,
    pub remain: Option<bool>,
    pub retain: Option<bool>,

    // Negation and prepositions
    pub neg: Option<bool>,
    pub by: Option<bool>,
    pub by2: Option<bool>,
    pub by3: Option<bool>,
    pub to: Option<bool>,
    pub to2: Option<bool>,

    // Prerogatives and competences
    pub competent: Option<bool>,
    pub force: Option<bool>,
    pub free: Option<bool>,
    pub prejudice: Option<bool>,
    pub noeffect: Option<bool>,
    pub accountable: Option<bool>,
    pub responsible: Option<bool>,
    pub right: Option<bool>,
    pub right_subj: Option<bool>,
    pub right_dobj: Option<bool>,

    // Instruments
    pub proposal: Option<bool>,
    pub proposal_subj: Option<bool>,
    pub proposal_dobj: Option<bool>,
    pub legprop: Option<bool>,
    pub recommendation: Option<bool>,
    pub recommendation_subj: Option<bool>,
    pub recommendation_dobj: Option<bool>,
    pub recommendation_pobj: Option<bool>,
    pub opinion: Option<bool>,
    pub opinion_subj: Option<bool>,
    pub opinion_dobj: Option<bool>,
    pub opinion_pobj: Option<bool>,
    pub measure: Option<bool>,
    pub measure_subj: Option<bool>,
    pub measure_dobj: Option<bool>,
    pub measure_pobj: Option<bool>,
    pub measure_pobj2: Option<bool>,
    pub teract: Option<bool>,

    // Constraints and procedures
    pub secrecy: Option<bool>,
    pub issue: Option<bool>,
    pub information: Option<bool>,
    pub information_subj: Option<bool>,
    pub information_dobjpobj: Option<bool>,
    pub public: Option<bool>,
    pub good: Option<bool>,
    pub accordance: Option<bool>,
    pub procedure: Option<bool>,
    pub comitproc: Option<bool>,

    // Sentence text
    pub public_grounds: Option<bool>,
    pub collaboration: Option<bool>,
    pub consultation: Option<bool>,
    pub consultation_com: Option<bool>,
    pub personnel: Option<bool>,
    pub proposal_intro: Option<bool>,
    pub by_legislative_proposal: Option<bool>,
    pub to_the_commission: Option<bool>,
    pub assisted: Option<bool>,
    pub comitology_procedure_subject: Option<bool>,
    pub subject_to: Option<bool>,
    pub shall_comprise: Option<bool>,
}

impl FeatureRecord {
    /// Runs every extractor against `sentence`.
    ///
    /// A sentence without a root yields a record with only the text and the
    /// lexical flags filled in.
    pub fn extract(sentence: &Sentence, config: &EngineConfig) -> Self {
        let text = sentence.text();
        let mut record = FeatureRecord {
            text: text.to_string(),
            public_grounds: find_public_grounds(text),
            collaboration: find_collaboration(text),
            consultation: find_consultation(text),
            consultation_com: find_consultation_com(text),
            personnel: find_personnel(text),
            proposal_intro: find_proposal_intro(text),
            by_legislative_proposal: find_by_legislative_proposal(text),
            to_the_commission: find_to_the_commission(text),
            assisted: find_assisted(text),
            comitology_procedure_subject: find_comitology_procedure_subject(text),
            subject_to: find_subject_to(text),
            shall_comprise: find_shall_comprise(text),
            ..FeatureRecord::default()
        };

        let root = match sentence.root() {
            Some(root) => root,
            None => return record,
        };

        record.subj = find_subj(root);
        record.subjpass = find_subjpass(root);
        record.subj2 = find_subj2(root);
        record.subjpass2 = find_subjpass2(root);
        record.dobj = find_dobj(root);
        record.dobj2 = find_dobj2(root);
        record.agent = find_agent(root);
        record.agent2 = find_agent2(root);
        record.pobj = find_pobj(root);
        record.pobj2 = find_pobj2(root);
        record.pobj2subj = find_pobj2subj(root);
        record.pobj2dobj = find_pobj2dobj(root);
        record.pobj3 = find_pobj3(root);
        record.pobj4 = find_pobj4(root);
        record.pobj5 = find_pobj5(root);
        record.pobj6 = find_pobj6(root);
        record.pobj7 = find_pobj7(root);
        record.compound = find_compound(root);
        record.compound_subj = find_compound_subj(root);

        record.board_dobj = find_board_dobj(root);
        record.committee = find_committee(root);
        record.committee_subj = find_committee_subj(root);
        record.committee_agent = find_committee_agent(root);
        record.committee_pobj = find_committee_pobj(root);
        record.rep = find_rep(root);
        record.rep_subj = find_rep_subj(root);
        record.rep_subjpass = find_rep_subjpass(root);
        record.rep_agent = find_rep_agent(root);
        record.nothing = find_nothing(root);

        record.root = find_root(root);
        record.aux = find_aux(root);
        record.auxpass = find_auxpass(root);
        record.pmod = find_pmod(root);
        record.smod = find_smod(root);
        record.needaux = find_needaux(root);
        record.needroot = find_needroot(root);
        record.needneg = find_needneg(root);

        record.be = find_be(root);
        record.have = find_have(root);
        record.give = find_give(root);
        record.take = find_take(root);
        record.make = find_make(root);
        record.assist = find_assist(root);
        record.draw = find_draw(root);
        record.enter = find_enter(root);
        record.prepare = find_prepare(root);
        record.provide = find_provide(root);
        record.propose = find_propose(root);
        record.propose2 = find_propose2(root);
        record.put = find_put(root);
        record.forward = find_forward(root);
        record.refer = find_refer(root);
        record.submit = find_submit(root);
        record.adopt = find_adopt(root);
        record.affect = find_affect(root);
        record.apply = find_apply(root);
        record.issueroot = find_issueroot(root);
        record.remain = find_remain(root);
        record.retain = find_retain(root);

        record.neg = find_neg(root);
        record.by = find_by(root);
        record.by2 = find_by2(root);
        record.by3 = find_by3(root);
        record.to = find_to(root);
        record.to2 = find_to2(root);

        record.competent = find_competent(root);
        record.force = find_force(root);
        record.free = find_free(root);
        record.prejudice = find_prejudice(root);
        record.noeffect = find_noeffect(root);
        record.accountable = find_accountable(root);
        record.responsible = find_responsible(root);
        record.right = find_right(root);
        record.right_subj = find_right_subj(root);
        record.right_dobj = find_right_dobj(root);

        record.proposal = find_proposal(root);
        record.proposal_subj = find_proposal_subj(root);
        record.proposal_dobj = find_proposal_dobj(root);
        record.legprop = find_legprop(root);
        record.recommendation = find_recommendation(root);
        record.recommendation_subj = find_recommendation_subj(root);
        record.recommendation_dobj = find_recommendation_dobj(root);
        record.recommendation_pobj = if config.legacy_recommendation_pobj {
            record.recommendation_dobj
        } else {
            find_recommendation_pobj(root)
        };
        record.opinion = find_opinion(root);
        record.opinion_subj = find_opinion_subj(root);
        record.opinion_dobj = find_opinion_dobj(root);
        record.opinion_pobj = find_opinion_pobj(root);
        record.measure = find_measure(root);
        record.measure_subj = find_measure_subj(root);
        record.measure_dobj = find_measure_dobj(root);
        record.measure_pobj = find_measure_pobj(root);
        record.measure_pobj2 = find_measure_pobj2(root);
        record.teract = find_teract(root);

        record.secrecy = find_secrecy(root);
        record.issue = find_issue(root);
        record.information = find_information(root);
        record.information_subj = find_information_subj(root);
        record.information_dobjpobj = find_information_dobjpobj(root);
        record.public = find_public(root);
        record.good = find_good(root);
        record.accordance = find_accordance(root);
        record.procedure = find_procedure(root);
        record.comitproc = find_comitproc(root);

        record
    }

    /// Serialize to a RON string.
    pub fn to_ron_string(&self) -> Result<String, ron::Error> {
        let config = ron::ser::PrettyConfig::new()
            .depth_limit(2)
            .separate_tuple_members(true)
            .enumerate_arrays(false);
        ron::ser::to_string_pretty(self, config)
    }

    /// Looks a feature up by column name. Absent features and unknown names
    /// both come back as `None`.
    pub fn value_of(&self, name: &str) -> Option<serde_json::Value> {
        let value = serde_json::to_value(self).ok()?;
        match value.get(name)? {
            serde_json::Value::Null => None,
            found => Some(found.clone()),
        }
    }

    /// Actor columns written to output rows. `pobj2subj` and `pobj2dobj`
    /// only feed the rules and are not among them.
    pub const ACTOR_COLUMNS: &'static [&'static str] = &[
        "subj",
        "subjpass",
        "subj2",
        "subjpass2",
        "dobj",
        "dobj2",
        "agent",
        "agent2",
        "pobj",
        "pobj2",
        "pobj3",
        "pobj4",
        "pobj5",
        "pobj6",
        "pobj7",
        "compound",
        "compound_subj",
    ];

    /// Actor roles in column order, for row output.
    pub fn actor_roles(&self) -> [Option<Actor>; 17] {
        [
            self.subj,
            self.subjpass,
            self.subj2,
            self.subjpass2,
            self.dobj,
            self.dobj2,
            self.agent,
            self.agent2,
            self.pobj,
            self.pobj2,
            self.pobj3,
            self.pobj4,
            self.pobj5,
            self.pobj6,
            self.pobj7,
            self.compound,
            self.compound_subj,
        ]
    }
}
