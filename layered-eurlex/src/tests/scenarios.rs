use layered_dep::parse_table;

use crate::Engine;

fn test_classify(table: &str) -> String {
    let sentence = parse_table(table).unwrap();
    let result = Engine::default().classify(&sentence);
    format!("raw:    {}\nlabels: {}", result.raw, result.labels)
}

#[test]
fn commission_may_adopt_delegated_acts() {
    insta::assert_snapshot!(test_classify(
        "# text: The Commission may adopt delegated acts in accordance with Article 290 of the Treaty.
         1 The DET det 2
         2 Commission PROPN nsubj 4 COM
         3 may AUX aux 4
         4 adopt VERB ROOT 0
         5 delegated VERB amod 6
         6 acts NOUN dobj 4 MEASURE
         7 in ADP prep 4
         8 accordance NOUN pobj 7
         9 with ADP prep 8
         10 Article PROPN pobj 9
         11 290 NUM nummod 10
         12 of ADP prep 10
         13 the DET det 14
         14 Treaty PROPN pobj 12
         15 . PUNCT punct 4"
    ), @r###"
    raw:    del_com=G1
    labels: del_com=G1
    "###);
}

#[test]
fn commission_shall_adopt_delegated_acts() {
    insta::assert_snapshot!(test_classify(
        "# text: The Commission shall adopt delegated acts in accordance with Article 290 of the Treaty.
         1 The DET det 2
         2 Commission PROPN nsubj 4 COM
         3 shall AUX aux 4
         4 adopt VERB ROOT 0
         5 delegated VERB amod 6
         6 acts NOUN dobj 4 MEASURE
         7 in ADP prep 4
         8 accordance NOUN pobj 7
         9 with ADP prep 8
         10 Article PROPN pobj 9
         11 290 NUM nummod 10
         12 of ADP prep 10
         13 the DET det 14
         14 Treaty PROPN pobj 12
         15 . PUNCT punct 4"
    ), @r###"
    raw:    del_com=G1 con_com=COMIT10-22b
    labels: del_com=G1 con_com=COMIT10-22b
    "###);
}

#[test]
fn member_states_not_required() {
    insta::assert_snapshot!(test_classify(
        "# text: Member States shall not be required to apply this Regulation.
         1 States PROPN nsubjpass 5 MS
         2 shall AUX aux 5
         3 not PART neg 5
         4 be AUX auxpass 5
         5 required VERB ROOT 0 CONSTRAINT
         6 to PART aux 7
         7 apply VERB xcomp 5
         8 this DET det 9
         9 Regulation PROPN dobj 7
         10 . PUNCT punct 5"
    ), @r###"
    raw:    del_ms=C1
    labels: del_ms=C1
    "###);
}

#[test]
fn agency_remains_competent() {
    insta::assert_snapshot!(test_classify(
        "# text: The Agency shall remain competent to carry out inspections.
         1 The DET det 2
         2 Agency PROPN nsubj 4 AGE
         3 shall AUX aux 4
         4 remain VERB ROOT 0
         5 competent ADJ acomp 4
         6 to PART aux 7
         7 carry VERB xcomp 5
         8 out ADP prt 7
         9 inspections NOUN dobj 7
         10 . PUNCT punct 4"
    ), @r###"
    raw:    del_age=RIGHT
    labels: del_age=RIGHT
    "###);
}

#[test]
fn agency_right_nulls_active_constraint() {
    // Same sentence with the root tagged as an active constraint.
    insta::assert_snapshot!(test_classify(
        "# text: The Agency shall remain competent to carry out inspections.
         1 The DET det 2
         2 Agency PROPN nsubj 4 AGE
         3 shall AUX aux 4
         4 remain VERB ROOT 0 ACTIVE_CONSTRAINT
         5 competent ADJ acomp 4
         6 to PART aux 7
         7 carry VERB xcomp 5
         8 out ADP prt 7
         9 inspections NOUN dobj 7
         10 . PUNCT punct 4"
    ), @r###"
    raw:    del_age=RIGHT con_age=AC1
    labels: del_age=RIGHT
    "###);
}

#[test]
fn recommendation_is_soft_not_delegation() {
    insta::assert_snapshot!(test_classify(
        "1 The DET det 2
         2 Commission PROPN nsubj 4 COM
         3 shall AUX aux 4
         4 adopt VERB ROOT 0
         5 a DET det 6
         6 recommendation NOUN dobj 4 RECOMMENDATION"
    ), @r###"
    raw:    del_com=G1 si_com=RECOMMEND
    labels: si_com=RECOMMEND
    "###);
}
