use crate::{parse_table, DepRel, ParsedSentence, ParsedToken, Pos, Sentence, Token, TreeError};

fn commission_sentence() -> Sentence {
    parse_table(
        "# text: The Commission may adopt delegated acts.
         1 The        DET   det      2
         2 Commission PROPN nsubj    4 COM
         3 may        AUX   aux      4
         4 adopt      VERB  ROOT     0
         5 delegated  VERB  amod     6
         6 acts       NOUN  dobj     4 MEASURE
         7 .          PUNCT punct    4",
    )
    .unwrap()
}

#[test]
fn test_root_and_children_order() {
    let sentence = commission_sentence();
    assert_eq!(sentence.text(), "The Commission may adopt delegated acts.");

    let root = sentence.root().unwrap();
    assert_eq!(root.text(), "adopt");
    assert_eq!(root.head(), None);

    let children: Vec<&str> = root.children().map(|c| c.text()).collect();
    assert_eq!(children, vec!["Commission", "may", "acts", "."]);
}

#[test]
fn test_subtree_is_in_surface_order() {
    let sentence = commission_sentence();
    let acts = sentence.token(5).unwrap();
    let subtree: Vec<&str> = acts.subtree().iter().map(|t| t.text()).collect();
    assert_eq!(subtree, vec!["delegated", "acts"]);

    let root = sentence.root().unwrap();
    assert_eq!(root.subtree().len(), sentence.len());
}

#[test]
fn test_token_attributes() {
    let sentence = commission_sentence();
    let commission = sentence.token(1).unwrap();
    assert_eq!(commission.pos(), Pos::Propn);
    assert_eq!(commission.dep(), DepRel::Nsubj);
    assert_eq!(commission.ent_type(), Some("COM"));
    assert_eq!(commission.head().map(|h| h.text()), Some("adopt"));
    assert_eq!(sentence.token(0).unwrap().ent_type(), None);
    assert!(sentence.token(99).is_none());
}

#[test]
fn test_text_defaults_to_joined_tokens() {
    let sentence = parse_table(
        "1 It PRON nsubj 2
         2 applies VERB ROOT 0",
    )
    .unwrap();
    assert_eq!(sentence.text(), "It applies");
}

#[test]
fn test_empty_sentence_has_no_root() {
    let sentence = Sentence::new("", Vec::new()).unwrap();
    assert!(sentence.is_empty());
    assert!(sentence.root().is_none());
}

#[test]
fn test_multiple_roots_rejected() {
    let tokens = vec![
        Token::new("a", "NOUN", "ROOT"),
        Token::new("b", "NOUN", "ROOT"),
    ];
    assert_eq!(
        Sentence::new("a b", tokens),
        Err(TreeError::MultipleRoots { first: 0, second: 1 })
    );
}

#[test]
fn test_head_out_of_range_rejected() {
    let tokens = vec![
        Token::new("a", "NOUN", "ROOT"),
        Token::new("b", "NOUN", "nsubj").with_head(7),
    ];
    assert_eq!(
        Sentence::new("a b", tokens),
        Err(TreeError::HeadOutOfRange { token: 1, head: 7, len: 2 })
    );
}

#[test]
fn test_cycle_rejected() {
    let tokens = vec![
        Token::new("root", "VERB", "ROOT"),
        Token::new("a", "NOUN", "nsubj").with_head(2),
        Token::new("b", "NOUN", "conj").with_head(1),
    ];
    assert!(matches!(
        Sentence::new("root a b", tokens),
        Err(TreeError::Cycle { .. })
    ));
}

#[test]
fn test_table_errors_carry_line_numbers() {
    let err = parse_table("1 a NOUN ROOT 0\n3 b NOUN nsubj 1").unwrap_err();
    assert!(matches!(err, TreeError::Table { line: 2, .. }));

    let err = parse_table("1 a NOUN").unwrap_err();
    assert!(matches!(err, TreeError::Table { line: 1, .. }));
}

#[test]
fn test_json_self_head_root() {
    let json = r#"{
        "text": "The Agency shall act.",
        "tokens": [
            {"text": "The", "pos": "DET", "dep": "det", "head": 1},
            {"text": "Agency", "pos": "PROPN", "dep": "nsubj", "head": 3, "ent_type": "AGE"},
            {"text": "shall", "pos": "AUX", "dep": "aux", "head": 3},
            {"text": "act", "pos": "VERB", "dep": "ROOT", "head": 3},
            {"text": ".", "pos": "PUNCT", "dep": "punct", "head": 3}
        ]
    }"#;
    let parsed = ParsedSentence::from_json(json).unwrap();
    let sentence = parsed.clone().into_sentence().unwrap();
    let root = sentence.root().unwrap();
    assert_eq!(root.text(), "act");
    assert_eq!(root.children().count(), 3);

    // Converting back keeps the self-head convention.
    assert_eq!(ParsedSentence::from(&sentence), parsed);
}

#[test]
fn test_unknown_labels_survive_round_trip() {
    let sentence = parse_table("1 word X mystery 2\n2 head VERB ROOT 0").unwrap();
    let word = sentence.token(0).unwrap();
    assert_eq!(word.dep(), DepRel::Unknown);
    assert_eq!(word.pos(), Pos::X);
    assert_eq!(ParsedSentence::from(&sentence).tokens[0].dep, "mystery");
}

#[test]
fn test_split_sentences_per_root() {
    let json = r#"{
        "text": "States may decide. The Commission shall act",
        "tokens": [
            {"text": "States", "pos": "PROPN", "dep": "nsubj", "head": 2, "ent_type": "MS"},
            {"text": "may", "pos": "AUX", "dep": "aux", "head": 2},
            {"text": "decide", "pos": "VERB", "dep": "ROOT", "head": 2},
            {"text": ".", "pos": "PUNCT", "dep": "punct", "head": 2},
            {"text": "The", "pos": "DET", "dep": "det", "head": 5},
            {"text": "Commission", "pos": "PROPN", "dep": "nsubj", "head": 7, "ent_type": "COM"},
            {"text": "shall", "pos": "AUX", "dep": "aux", "head": 7},
            {"text": "act", "pos": "VERB", "dep": "ROOT", "head": 7}
        ]
    }"#;
    let parsed = ParsedSentence::from_json(json).unwrap();
    assert!(parsed.clone().into_sentence().is_err());

    let parts = parsed.split_sentences();
    assert_eq!(parts.len(), 2);
    assert_eq!(parts[0].text, "States may decide .");
    assert_eq!(parts[1].text, "The Commission shall act");

    let heads: Vec<usize> = parts[1].tokens.iter().map(|t| t.head).collect();
    assert_eq!(heads, vec![1, 3, 3, 3]);

    let second = parts[1].clone().into_sentence().unwrap();
    assert_eq!(second.root().unwrap().text(), "act");
    assert_eq!(second.token(1).unwrap().ent_type(), Some("COM"));
}

#[test]
fn test_split_sentences_keeps_single_and_broken_parses() {
    let single = ParsedSentence::from(&commission_sentence());
    assert_eq!(single.split_sentences(), vec![single.clone()]);

    let looping = ParsedSentence {
        text: "a b c d".to_string(),
        tokens: vec![
            ParsedToken { text: "a".into(), pos: "X".into(), dep: "ROOT".into(), head: 0, ent_type: None },
            ParsedToken { text: "b".into(), pos: "X".into(), dep: "dep".into(), head: 2, ent_type: None },
            ParsedToken { text: "c".into(), pos: "X".into(), dep: "dep".into(), head: 1, ent_type: None },
            ParsedToken { text: "d".into(), pos: "X".into(), dep: "ROOT".into(), head: 3, ent_type: None },
        ],
    };
    assert_eq!(looping.split_sentences(), vec![looping.clone()]);
}
