//! Literal substring checks on the raw sentence text.
//!
//! These stand in for fixed legal boilerplate the parse does not capture
//! reliably. Matching is plain `str::contains` on the listed variants; the
//! lists spell out every capitalisation that is accepted.

use super::flag;

fn contains_any(text: &str, phrases: &[&str]) -> Option<bool> {
    flag(phrases.iter().any(|phrase| text.contains(phrase)))
}

pub const COLLABORATION_PHRASES: &[&str] = &[
    "in collaboration with",
    "in coordination with",
    "in cooperation with",
    "in close collaboration with",
    "in close coordination with",
    "in close cooperation with",
];

/// Consultation formulas for Member States, authorities and agencies.
pub const CONSULTATION_PHRASES: &[&str] = &[
    "After consulting",
    "after consulting",
    "After consultation",
    "after consultation",
    "In consultation",
    "in consultation",
    "After having consulted",
    "after having consulted",
    "Following consultation",
    "following consultation",
    "After having heard",
    "after having heard",
    "with the agreement of",
    "in agreement with",
];

/// Consultation formulas for the Commission ("having consulted" is not one).
pub const COMMISSION_CONSULTATION_PHRASES: &[&str] = &[
    "After consulting",
    "After consultation",
    "In consultation",
    "After having heard",
    "after consulting",
    "after consultation",
    "following consultation",
    "Following consultation",
    "in consultation",
    "after having heard",
    "with the agreement of",
    "in agreement with",
];

/// Openers of "On a proposal from the Commission, the Council ..." sentences.
pub const PROPOSAL_INTRO_PHRASES: &[&str] = &[
    "On the",
    "On a",
    "Upon the",
    "on the",
    "on a",
    "upon the",
    "submission by the Commission",
];

pub const LEGISLATIVE_PROPOSAL_PHRASES: &[&str] =
    &["by a legislative proposal", "by legislative proposals"];

/// Procedure names of the 1999 comitology decision and the 2011 regulation.
pub const COMITOLOGY_2000_09_PHRASES: &[&str] = &[
    "subject to the advisory procedure",
    "subject to the management procedure",
    "subject to the regulatory procedure",
    "subject to the safeguard procedure",
    "subject to the examination procedure",
];

/// "save on grounds of public policy, public security or public health"
pub fn find_public_grounds(text: &str) -> Option<bool> {
    flag(text.contains("grounds")
        && text.contains("public security")
        && text.contains("public policy"))
}

pub fn find_collaboration(text: &str) -> Option<bool> {
    contains_any(text, COLLABORATION_PHRASES)
}

pub fn find_consultation(text: &str) -> Option<bool> {
    contains_any(text, CONSULTATION_PHRASES)
}

pub fn find_consultation_com(text: &str) -> Option<bool> {
    contains_any(text, COMMISSION_CONSULTATION_PHRASES)
}

/// Staff and personnel matters for national authorities.
pub fn find_personnel(text: &str) -> Option<bool> {
    contains_any(text, &["personnel"])
}

pub fn find_proposal_intro(text: &str) -> Option<bool> {
    contains_any(text, PROPOSAL_INTRO_PHRASES)
}

pub fn find_by_legislative_proposal(text: &str) -> Option<bool> {
    contains_any(text, LEGISLATIVE_PROPOSAL_PHRASES)
}

pub fn find_to_the_commission(text: &str) -> Option<bool> {
    contains_any(text, &["to the Commission"])
}

/// "assisted by a committee" style comitology of 1988-1999.
pub fn find_assisted(text: &str) -> Option<bool> {
    contains_any(text, &["assisted"])
}

pub fn find_comitology_procedure_subject(text: &str) -> Option<bool> {
    contains_any(text, COMITOLOGY_2000_09_PHRASES)
}

pub fn find_subject_to(text: &str) -> Option<bool> {
    contains_any(text, &["subject to"])
}

pub fn find_shall_comprise(text: &str) -> Option<bool> {
    contains_any(text, &["shall comprise"])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_grounds_needs_all_three() {
        assert_eq!(
            find_public_grounds("save on grounds of public policy, public security or public health"),
            Some(true)
        );
        assert_eq!(find_public_grounds("on grounds of public policy"), None);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert_eq!(find_collaboration("acting in close cooperation with the Agency"), Some(true));
        assert_eq!(find_collaboration("In cooperation with the Agency"), None);
        assert_eq!(find_to_the_commission("shall notify it to the commission"), None);
    }

    #[test]
    fn test_commission_consultation_list_is_narrower() {
        let text = "After having consulted the committee, the Commission shall decide.";
        assert_eq!(find_consultation(text), Some(true));
        assert_eq!(find_consultation_com(text), None);
    }
}
