//! Conflict resolution between families.
//!
//! Families fire independently, so one clause can carry a generic label and
//! a more specific one at the same time. [`resolve`] applies a fixed ordered
//! list of [`Override`]s to the raw labels; later overrides see the effect of
//! earlier ones.

use crate::rules::{Family, LabelSet};
use once_cell::sync::Lazy;

/// What an override does when its condition holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Clear(Family),
    /// Copy the label of `from` into `to`.
    Promote { from: Family, to: Family },
}

#[derive(Debug, Clone, Copy)]
pub struct Override {
    pub name: &'static str,
    pub when: fn(&LabelSet) -> bool,
    pub action: Action,
}

const GENERAL_SOFT: &[&str] = &["G1", "G2", "G1_pass", "G2_pass", "RECOMMEND", "RECOMMEND_pass"];
const SOFT_IMPLEMENTATION: &[&str] = &["G1", "G1_pass", "RECOMMEND", "RECOMMEND_pass"];
const AGENDA_SETTING: &[&str] = &["PROPOSE", "PROPOSE_pass", "SUBMIT", "SUBMIT_pass"];
const SUBMISSION: &[&str] = &["SUBMIT", "SUBMIT_pass"];
const ACTIVE: &[&str] = &["AC1", "AC1_pobj"];
const SPECIFIC_CONSTRAINT: &[&str] = &[
    "C1_opinion",
    "AC1",
    "AC1_pobj",
    "INFORMATION",
    "INFORMATION_pobj",
    "PUBLIC",
    "PUBLIC_pobj",
    "REFER",
];
const SPECIFIC_AGENCY_CONSTRAINT: &[&str] = &[
    "C1_opinion",
    "AC1",
    "AC1_pobj",
    "INFORMATION",
    "INFORMATION_pobj",
    "PUBLIC",
    "PUBLIC_pobj",
    "REFER",
    "SECRECY",
    "SECRECY_pobj",
];
const DISCLOSURE: &[&str] = &["INFORMATION", "INFORMATION_pobj", "PUBLIC_pobj"];
const PROMOTED_COMITOLOGY: &[&str] = &["COMIT00-22b", "COMIT10-22c"];

/// The override sequence, in application order.
pub static OVERRIDES: Lazy<Vec<Override>> = Lazy::new(|| {
    vec![
        Override {
            name: "ms_right",
            when: |l| l.is_any(Family::DelMs, &["RIGHT"]),
            action: Action::Clear(Family::ConMs),
        },
        Override {
            name: "ms_soft",
            when: |l| l.is_any(Family::SoMs, GENERAL_SOFT),
            action: Action::Clear(Family::ConMs),
        },
        Override {
            name: "nca_right",
            when: |l| l.is_any(Family::DelNca, &["RIGHT"]),
            action: Action::Clear(Family::ConNca),
        },
        Override {
            name: "nca_soft",
            when: |l| l.is_any(Family::SoNca, GENERAL_SOFT),
            action: Action::Clear(Family::ConNca),
        },
        Override {
            name: "age_right",
            when: |l| l.is_any(Family::DelAge, &["RIGHT"]),
            action: Action::Clear(Family::ConAge),
        },
        Override {
            name: "com_agenda",
            when: |l| l.is_any(Family::Agenda, AGENDA_SETTING),
            action: Action::Clear(Family::DelCom),
        },
        Override {
            name: "com_submission_soft",
            when: |l| l.is_any(Family::Agenda, SUBMISSION),
            action: Action::Clear(Family::SiCom),
        },
        Override {
            name: "com_submission_active",
            when: |l| l.is_any(Family::Agenda, SUBMISSION) && l.is_any(Family::ConCom, ACTIVE),
            action: Action::Clear(Family::ConCom),
        },
        Override {
            name: "com_soft",
            when: |l| l.is_any(Family::SiCom, SOFT_IMPLEMENTATION),
            action: Action::Clear(Family::DelCom),
        },
        Override {
            name: "com_specific_constraint",
            when: |l| l.is_any(Family::ConCom, SPECIFIC_CONSTRAINT),
            action: Action::Clear(Family::DelCom),
        },
        Override {
            name: "com_disclosure",
            when: |l| l.is_any(Family::ConCom, DISCLOSURE),
            action: Action::Clear(Family::SiCom),
        },
        Override {
            name: "com_comitology",
            when: |l| {
                l.is_any(Family::ConCom, PROMOTED_COMITOLOGY)
                    && l.get(Family::DelCom).is_none()
                    && l.get(Family::SiCom).is_none()
            },
            action: Action::Promote {
                from: Family::ConCom,
                to: Family::DelCom,
            },
        },
        Override {
            name: "age_soft",
            when: |l| l.is_any(Family::SiAge, SOFT_IMPLEMENTATION),
            action: Action::Clear(Family::DelAge),
        },
        Override {
            name: "age_specific_constraint",
            when: |l| l.is_any(Family::ConAge, SPECIFIC_AGENCY_CONSTRAINT),
            action: Action::Clear(Family::DelAge),
        },
        Override {
            name: "age_disclosure",
            when: |l| l.is_any(Family::ConAge, DISCLOSURE),
            action: Action::Clear(Family::SiAge),
        },
    ]
});

impl Override {
    fn apply(&self, labels: &mut LabelSet) -> bool {
        if !(self.when)(labels) {
            return false;
        }
        match self.action {
            Action::Clear(family) => {
                if labels.get(family).is_none() {
                    return false;
                }
                labels.clear(family);
            }
            Action::Promote { from, to } => {
                let promoted = labels.get(from);
                labels.set(to, promoted);
            }
        }
        true
    }
}

/// Applies [`OVERRIDES`] in order to a copy of `raw`.
pub fn resolve(raw: &LabelSet) -> LabelSet {
    resolve_with(raw, &OVERRIDES)
}

pub fn resolve_with(raw: &LabelSet, overrides: &[Override]) -> LabelSet {
    let mut labels = raw.clone();
    for rule in overrides {
        if rule.apply(&mut labels) {
            tracing::debug!(target: "eurlex::postprocess", rule = rule.name, "override_applied");
        }
    }
    labels
}
