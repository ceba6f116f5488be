use crate::{parse_table, DepTreeDisplay};

#[test]
fn display_two_token_tree() {
    let sentence = parse_table(
        "1 Commission PROPN nsubj 2 COM
         2 decides VERB ROOT 0",
    )
    .unwrap();

    insta::assert_snapshot!(DepTreeDisplay::new(&sentence).to_string(), @r"
Commission  decides
            ╰ROOT VERB
╰nsubj→decides PROPN COM
");
}

#[test]
fn display_without_pos() {
    let sentence = parse_table(
        "1 States NOUN nsubj 2 MS
         2 act VERB ROOT 0",
    )
    .unwrap();

    let rendered = DepTreeDisplay::new(&sentence).hide_pos().to_string();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines, vec!["States  act", "        ╰ROOT", "╰nsubj→act MS"]);
}

#[test]
fn display_empty_sentence() {
    let sentence = crate::Sentence::empty("");
    assert_eq!(DepTreeDisplay::new(&sentence).to_string(), "");
}
