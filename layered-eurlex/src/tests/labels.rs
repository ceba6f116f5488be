use layered_dep::parse_table;

use crate::{resolve, Engine, Family};

fn test_labels(table: &str) -> String {
    let sentence = parse_table(table).unwrap();
    Engine::default().classify(&sentence).labels.to_string()
}

#[test]
fn active_commission_subject() {
    insta::assert_snapshot!(test_labels(
        "1 The DET det 2
         2 Commission PROPN nsubj 4 COM
         3 may AUX aux 4
         4 adopt VERB ROOT 0
         5 this DET det 6
         6 measure NOUN dobj 4 MEASURE"
    ), @"del_com=G1");
}

#[test]
fn passive_commission_agent() {
    insta::assert_snapshot!(test_labels(
        "1 This DET det 2
         2 measure NOUN nsubjpass 5 MEASURE
         3 may AUX aux 5
         4 be AUX auxpass 5
         5 adopted VERB ROOT 0
         6 by ADP agent 5
         7 the DET det 8
         8 Commission PROPN pobj 6 COM"
    ), @"del_com=G1_pass");
}

#[test]
fn member_states_may_and_shall() {
    insta::assert_snapshot!(test_labels(
        "1 States PROPN nsubj 3 MS
         2 may AUX aux 3
         3 decide VERB ROOT 0"
    ), @"del_ms=G1");

    insta::assert_snapshot!(test_labels(
        "1 States PROPN nsubj 3 MS
         2 shall AUX aux 3
         3 decide VERB ROOT 0"
    ), @"con_ms=G2");
}

#[test]
fn untagged_sentence() {
    insta::assert_snapshot!(test_labels(
        "1 This DET det 2
         2 Regulation PROPN nsubj 4
         3 shall AUX aux 4
         4 apply VERB ROOT 0"
    ), @"-");
}

#[test]
fn resolution_is_idempotent_on_parses() {
    let tables = [
        "1 The DET det 2
         2 Commission PROPN nsubj 4 COM
         3 shall AUX aux 4
         4 adopt VERB ROOT 0
         5 a DET det 6
         6 recommendation NOUN dobj 4 RECOMMENDATION",
        "1 States PROPN nsubjpass 4 MS
         2 shall AUX aux 4
         3 be AUX auxpass 4
         4 required VERB ROOT 0 CONSTRAINT",
    ];
    for table in tables.iter() {
        let sentence = parse_table(table).unwrap();
        let result = Engine::default().classify(&sentence);
        assert_eq!(resolve(&result.labels), result.labels);
    }
}

#[test]
fn labels_serialize_every_column() {
    let sentence = parse_table(
        "1 States PROPN nsubj 3 MS
         2 may AUX aux 3
         3 decide VERB ROOT 0",
    )
    .unwrap();
    let result = Engine::default().classify(&sentence);
    let json = serde_json::to_value(&result.labels).unwrap();
    let columns = json.as_object().unwrap();
    assert_eq!(columns.len(), Family::ALL.len());
    assert_eq!(json["del_ms"], "G1");
    assert!(json["con_ms"].is_null());
}
