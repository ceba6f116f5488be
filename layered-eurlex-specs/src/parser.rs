//! Parser for `.dep` fixture files.
//!
//! ```text
//! # Commission delegation
//!
//! # text: The Commission may adopt this measure
//! 1 The DET det 2
//! 2 Commission PROPN nsubj 4 COM
//! 3 may AUX aux 4
//! 4 adopt VERB ROOT 0
//! 5 this DET det 6
//! 6 measure NOUN dobj 4 MEASURE
//! > del_com = G1
//! > con_com = -
//! > @subj = COM
//! ---
//! ...
//! ```

use crate::errors::{SpecError, SpecResult};
use crate::fixture::{Assertion, DepFixture, Expected, FixtureCase, Target};
use layered_eurlex::Family;

/// Parse a full `.dep` fixture file.
pub fn parse_fixture(input: &str) -> SpecResult<DepFixture> {
    let mut title = None;
    let mut case_lines: Vec<(Vec<&str>, Vec<Assertion>)> = vec![(Vec::new(), Vec::new())];

    for (line_num, line) in input.lines().enumerate() {
        let trimmed = line.trim();

        if trimmed.starts_with("# text:") {
            if let Some((table, _)) = case_lines.last_mut() {
                table.push(trimmed);
            }
        }
        // Title from the first # header, other headers are comments
        else if let Some(heading) = trimmed.strip_prefix("# ") {
            if title.is_none() {
                title = Some(heading.trim().to_string());
            }
        } else if trimmed == "---" {
            case_lines.push((Vec::new(), Vec::new()));
        } else if let Some(assertion) = trimmed.strip_prefix("> ") {
            let assertion = parse_assertion(assertion, line_num + 1)?;
            if let Some((_, assertions)) = case_lines.last_mut() {
                assertions.push(assertion);
            }
        } else if !trimmed.is_empty() && !trimmed.starts_with("//") && !trimmed.starts_with('#') {
            if let Some((table, _)) = case_lines.last_mut() {
                table.push(trimmed);
            }
        }
    }

    let cases = case_lines
        .into_iter()
        .filter(|(table, assertions)| !table.is_empty() || !assertions.is_empty())
        .enumerate()
        .map(|(index, (table, assertions))| FixtureCase {
            index,
            table: table.join("\n"),
            assertions,
        })
        .collect();

    Ok(DepFixture { title, cases })
}

/// Parse a single assertion: `target = value`.
pub fn parse_assertion(input: &str, source_line: usize) -> SpecResult<Assertion> {
    let input = input.trim();
    let eq = input.find('=').ok_or_else(|| SpecError::Parse {
        line: source_line,
        message: format!("Expected 'target = value': {}", input),
    })?;

    let target = parse_target(input[..eq].trim(), source_line)?;
    let value = input[eq + 1..].trim();
    let expected = match value {
        "" => {
            return Err(SpecError::Parse {
                line: source_line,
                message: format!("Missing value (use '-' for absent): {}", input),
            })
        }
        "-" => Expected::Absent,
        value => Expected::Value(value.to_string()),
    };

    Ok(Assertion {
        target,
        expected,
        source_line,
    })
}

fn parse_target(input: &str, source_line: usize) -> SpecResult<Target> {
    if input == "all" {
        return Ok(Target::AllLabels);
    }
    if let Some(name) = input.strip_prefix('@') {
        if name.is_empty() {
            return Err(SpecError::Parse {
                line: source_line,
                message: "Expected a feature name after '@'".to_string(),
            });
        }
        return Ok(Target::Feature(name.to_string()));
    }
    if let Some(column) = input.strip_prefix("raw:") {
        return parse_family(column.trim(), source_line).map(Target::RawLabel);
    }
    parse_family(input, source_line).map(Target::Label)
}

fn parse_family(column: &str, source_line: usize) -> SpecResult<Family> {
    Family::from_column(column).ok_or_else(|| SpecError::Parse {
        line: source_line,
        message: format!("Unknown label column '{}'", column),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_assertion_label() {
        let assertion = parse_assertion("del_com = G1", 3).unwrap();
        assert_eq!(assertion.target, Target::Label(Family::DelCom));
        assert_eq!(assertion.expected, Expected::Value("G1".to_string()));
        assert_eq!(assertion.source_line, 3);
    }

    #[test]
    fn test_parse_assertion_absent() {
        let assertion = parse_assertion("con_age = -", 1).unwrap();
        assert_eq!(assertion.target, Target::Label(Family::ConAge));
        assert_eq!(assertion.expected, Expected::Absent);
    }

    #[test]
    fn test_parse_assertion_raw_and_feature() {
        let raw = parse_assertion("raw:con_age = AC1", 1).unwrap();
        assert_eq!(raw.target, Target::RawLabel(Family::ConAge));

        let feature = parse_assertion("@subj = COM", 1).unwrap();
        assert_eq!(feature.target, Target::Feature("subj".to_string()));
        assert_eq!(feature.to_string(), "@subj = COM");
    }

    #[test]
    fn test_parse_assertion_all_keeps_inner_equals() {
        let assertion = parse_assertion("all = del_com=G1 con_com=COMIT10-22b", 1).unwrap();
        assert_eq!(assertion.target, Target::AllLabels);
        assert_eq!(
            assertion.expected,
            Expected::Value("del_com=G1 con_com=COMIT10-22b".to_string())
        );
    }

    #[test]
    fn test_parse_assertion_errors() {
        assert!(matches!(
            parse_assertion("del_xyz = G1", 7),
            Err(SpecError::Parse { line: 7, .. })
        ));
        assert!(parse_assertion("del_com G1", 1).is_err());
        assert!(parse_assertion("del_com =", 1).is_err());
        assert!(parse_assertion("@ = true", 1).is_err());
    }

    #[test]
    fn test_parse_fixture_cases() {
        let input = "# Two cases
// comment
# text: States may decide
1 States PROPN nsubj 3 MS
2 may AUX aux 3
3 decide VERB ROOT 0
> del_ms = G1
---
1 States PROPN nsubj 3 MS
2 shall AUX aux 3
3 decide VERB ROOT 0
> con_ms = G2
> del_ms = -
";
        let fixture = parse_fixture(input).unwrap();
        assert_eq!(fixture.title.as_deref(), Some("Two cases"));
        assert_eq!(fixture.cases.len(), 2);
        assert_eq!(fixture.assertion_count(), 3);

        let first = &fixture.cases[0];
        assert_eq!(first.index, 0);
        assert!(first.table.starts_with("# text: States may decide\n1 States"));
        assert_eq!(first.assertions[0].source_line, 7);

        assert_eq!(fixture.cases[1].index, 1);
        assert_eq!(fixture.cases[1].table.lines().count(), 3);
    }

    #[test]
    fn test_parse_fixture_skips_empty_cases() {
        let fixture = parse_fixture("---\n\n---\n1 Article PROPN ROOT 0\n> all = -\n---\n").unwrap();
        assert_eq!(fixture.cases.len(), 1);
        assert_eq!(fixture.cases[0].index, 0);
        assert!(fixture.title.is_none());
    }
}
