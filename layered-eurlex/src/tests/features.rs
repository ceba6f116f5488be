use layered_dep::{parse_table, Sentence};
use serde_json::json;

use crate::{Actor, Engine, EngineConfig, FeatureRecord};

const RECOMMENDATION: &str = "1 The DET det 2
    2 Commission PROPN nsubj 4 COM
    3 shall AUX aux 4
    4 adopt VERB ROOT 0
    5 a DET det 6
    6 recommendation NOUN dobj 4 RECOMMENDATION";

#[test]
fn root_without_children() {
    let sentence = parse_table("1 Article PROPN ROOT 0").unwrap();
    let result = Engine::default().classify(&sentence);
    assert_eq!(
        result.features,
        FeatureRecord {
            text: "Article".to_string(),
            ..FeatureRecord::default()
        }
    );
    assert!(result.labels.is_empty());
}

#[test]
fn sentence_without_root_keeps_text_flags() {
    let sentence = Sentence::empty("On a proposal from the Commission");
    let features = Engine::default().extract(&sentence);
    assert_eq!(features.proposal_intro, Some(true));
    assert_eq!(features.subj, None);
    assert_eq!(features.root, None);
}

#[test]
fn legacy_recommendation_pobj() {
    let sentence = parse_table(RECOMMENDATION).unwrap();

    let legacy = Engine::default().extract(&sentence);
    assert_eq!(legacy.recommendation_dobj, Some(true));
    assert_eq!(legacy.recommendation_pobj, Some(true));

    let strict = Engine::new(EngineConfig {
        legacy_recommendation_pobj: false,
    })
    .extract(&sentence);
    assert_eq!(strict.recommendation_dobj, Some(true));
    assert_eq!(strict.recommendation_pobj, None);
}

#[test]
fn value_lookup() {
    let sentence = parse_table(RECOMMENDATION).unwrap();
    let features = Engine::default().extract(&sentence);

    assert_eq!(features.subj, Some(Actor::Com));
    assert_eq!(features.value_of("subj"), Some(json!("COM")));
    assert_eq!(features.value_of("smod"), Some(json!(true)));
    assert_eq!(features.value_of("pmod"), None);
    assert_eq!(features.value_of("no_such_feature"), None);
    assert_eq!(
        features.value_of("text"),
        Some(json!("The Commission shall adopt a recommendation"))
    );
}

#[test]
fn actor_roles_follow_columns() {
    let sentence = parse_table(RECOMMENDATION).unwrap();
    let features = Engine::default().extract(&sentence);
    let roles = features.actor_roles();
    assert_eq!(roles.len(), FeatureRecord::ACTOR_COLUMNS.len());
    for (column, role) in FeatureRecord::ACTOR_COLUMNS.iter().zip(roles.iter()) {
        let expected = role.map(|actor| json!(actor.tag()));
        assert_eq!(features.value_of(column), expected, "{}", column);
    }
}

#[test]
fn ron_output() {
    let sentence = parse_table(RECOMMENDATION).unwrap();
    let ron = Engine::default().extract(&sentence).to_ron_string().unwrap();
    assert!(ron.contains("subj: Some(COM)"), "{}", ron);
    assert!(ron.contains("recommendation_dobj: Some(true)"), "{}", ron);
    assert!(ron.contains("agent: None"), "{}", ron);
}

#[test]
fn extraction_is_repeatable() {
    let sentence = parse_table(
        "1 Member PROPN compound 2
         2 States PROPN nsubj 4 MS
         3 may AUX aux 4
         4 request VERB ROOT 0
         5 the DET det 6
         6 Agency PROPN dobj 4 AGE
         7 and CCONJ cc 6
         8 the DET det 9
         9 Commission PROPN conj 6 COM",
    )
    .unwrap();
    let engine = Engine::default();
    let first = engine.extract(&sentence);
    let second = engine.extract(&sentence);
    assert_eq!(first, second);
    assert_eq!(first.to_ron_string().unwrap(), second.to_ron_string().unwrap());
    assert_eq!(engine.classify(&sentence), engine.classify(&sentence));
}
