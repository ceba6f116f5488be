use std::io::Write;

use layered_dep::{parse_table, ParsedSentence, ParsedToken};
use layered_eurlex::{Actor, Engine, Family};

use crate::{
    label_record, label_records, read_records, run_batch, BatchConfig, BatchError, InputRecord, ParsedChunk,
    SentenceMetadata,
};

fn metadata(sub_sentence_id: &str) -> SentenceMetadata {
    SentenceMetadata {
        celex: "32019R0001".to_string(),
        sentence_id: "32019R0001_4".to_string(),
        sub_sentence_id: sub_sentence_id.to_string(),
        length_celex: 5120,
        length_sentence: 60,
    }
}

fn chunk(table: &str) -> ParsedChunk {
    ParsedChunk {
        parse: ParsedSentence::from(&parse_table(table).unwrap()),
    }
}

fn broken_chunk() -> ParsedChunk {
    ParsedChunk {
        parse: ParsedSentence {
            text: "dangling".to_string(),
            tokens: vec![ParsedToken {
                text: "dangling".to_string(),
                pos: "NOUN".to_string(),
                dep: "nsubj".to_string(),
                head: 5,
                ent_type: None,
            }],
        },
    }
}

fn token(text: &str, pos: &str, dep: &str, head: usize, ent_type: Option<&str>) -> ParsedToken {
    ParsedToken {
        text: text.to_string(),
        pos: pos.to_string(),
        dep: dep.to_string(),
        head,
        ent_type: ent_type.map(str::to_string),
    }
}

/// Two sentences in one chunk, as the parser returns them when a
/// sub-sentence holds a full stop.
fn two_sentence_chunk() -> ParsedChunk {
    ParsedChunk {
        parse: ParsedSentence {
            text: "States may decide. Commission shall act".to_string(),
            tokens: vec![
                token("States", "PROPN", "nsubj", 2, Some("MS")),
                token("may", "AUX", "aux", 2, None),
                token("decide", "VERB", "ROOT", 2, None),
                token(".", "PUNCT", "punct", 2, None),
                token("Commission", "PROPN", "nsubj", 6, Some("COM")),
                token("shall", "AUX", "aux", 6, None),
                token("act", "VERB", "ROOT", 6, None),
            ],
        },
    }
}

fn records() -> Vec<InputRecord> {
    vec![
        InputRecord {
            text: String::new(),
            metadata: metadata("32019R0001_4_1_0_1"),
            chunks: vec![
                chunk(
                    "1 States PROPN nsubj 3 MS
                     2 may AUX aux 3
                     3 decide VERB ROOT 0",
                ),
                broken_chunk(),
            ],
        },
        InputRecord {
            text: String::new(),
            metadata: metadata("32019R0001_4_2_0_1"),
            chunks: vec![chunk(
                "1 The DET det 2
                 2 Commission PROPN nsubj 4 COM
                 3 may AUX aux 4
                 4 adopt VERB ROOT 0",
            )],
        },
    ]
}

#[test]
fn rows_keep_input_order_and_skip_invalid_parses() {
    let rows = label_records(&Engine::default(), &records());
    assert_eq!(rows.len(), 2);

    assert_eq!(rows[0].subsub_sentence_id, "32019R0001_4_1_0_1_0");
    assert_eq!(rows[0].subsub_sentence_n, 0);
    assert_eq!(rows[0].text, "States may decide");
    assert_eq!(rows[0].length, 17);
    assert_eq!(rows[0].pmod, Some(true));
    assert_eq!(rows[0].labels.get(Family::DelMs).unwrap(), "G1");
    assert_eq!(rows[0].roles.get("subj"), Some(Actor::Ms));

    assert_eq!(rows[1].subsub_sentence_id, "32019R0001_4_2_0_1_0");
    assert_eq!(rows[1].labels.get(Family::DelCom).unwrap(), "G1");
    assert_eq!(rows[1].roles.get("subj"), Some(Actor::Com));
    assert_eq!(rows[1].roles.get("no_such_role"), None);
}

#[test]
fn multi_sentence_chunk_yields_a_row_per_sentence() {
    let record = InputRecord {
        text: String::new(),
        metadata: metadata("32019R0001_4_3_0_1"),
        chunks: vec![two_sentence_chunk()],
    };
    let rows = label_record(&Engine::default(), &record);
    assert_eq!(rows.len(), 2);

    for row in &rows {
        assert_eq!(row.subsub_sentence_n, 0);
        assert_eq!(row.subsub_sentence_id, "32019R0001_4_3_0_1_0");
    }

    assert_eq!(rows[0].text, "States may decide .");
    assert_eq!(rows[0].labels.get(Family::DelMs).unwrap(), "G1");
    assert_eq!(rows[0].roles.get("subj"), Some(Actor::Ms));

    assert_eq!(rows[1].text, "Commission shall act");
    assert_eq!(rows[1].smod, Some(true));
    assert_eq!(rows[1].roles.get("subj"), Some(Actor::Com));
    assert_eq!(rows[1].labels.get(Family::DelMs), None);
}

#[test]
fn row_columns_are_in_output_order() {
    let rows = label_records(&Engine::default(), &records());
    let json = serde_json::to_string(&rows[0]).unwrap();

    let columns = [
        "\"celex\"",
        "\"subsub_sentence_id\"",
        "\"length_celex\"",
        "\"text\"",
        "\"root\"",
        "\"smod\"",
        "\"del_ms\"",
        "\"con_age2\"",
        "\"subj\"",
        "\"compound_subj\"",
    ];
    let positions: Vec<usize> = columns
        .iter()
        .map(|column| json.find(column).unwrap())
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted, "{}", json);

    // Rule-only roles stay out of the row.
    assert!(json.find("\"pobj2\"").unwrap() < json.find("\"pobj3\"").unwrap());
    assert!(!json.contains("pobj2subj"), "{}", json);
    assert!(!json.contains("pobj2dobj"), "{}", json);
}

#[test]
fn row_assigned_columns() {
    let rows = label_records(&Engine::default(), &records());
    let json = serde_json::to_value(&rows[0]).unwrap();
    let mut assigned: Vec<String> = json
        .as_object()
        .unwrap()
        .iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(column, value)| format!("{}: {}", column, value))
        .collect();
    assigned.sort();

    insta::assert_snapshot!(assigned.join("\n"), @r#"
celex: "32019R0001"
del_ms: "G1"
length: 17
length_celex: 5120
length_sentence: 60
pmod: true
sentence_id: "32019R0001_4"
sub_sentence_id: "32019R0001_4_1_0_1"
subj: "MS"
subsub_sentence_id: "32019R0001_4_1_0_1_0"
subsub_sentence_n: 0
text: "States may decide"
"#);
}

#[test]
fn run_batch_writes_jsonl() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("sentences.jsonl");
    let output = dir.path().join("annotated.jsonl");

    let mut file = std::fs::File::create(&input).unwrap();
    for record in records() {
        writeln!(file, "{}", serde_json::to_string(&record).unwrap()).unwrap();
    }
    writeln!(file).unwrap();
    drop(file);

    let config = BatchConfig {
        input,
        output: output.clone(),
        threads: 2,
        progress_every: 1,
        ..BatchConfig::default()
    };
    let summary = run_batch(&config).unwrap();
    assert_eq!(summary.records, 2);
    assert_eq!(summary.chunks, 3);
    assert_eq!(summary.sentences, 3);
    assert_eq!(summary.rows, 2);
    assert_eq!(summary.skipped(), 1);

    let written = std::fs::read_to_string(&output).unwrap();
    let lines: Vec<serde_json::Value> = written
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["del_ms"], "G1");
    assert_eq!(lines[0]["subj"], "MS");
    assert!(lines[0]["con_ms"].is_null());
    assert_eq!(lines[1]["del_com"], "G1");
}

#[test]
fn bad_record_reports_its_line() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("sentences.jsonl");
    let record = serde_json::to_string(&records()[0]).unwrap();
    std::fs::write(&input, format!("{}\n{{\"metadata\": 3}}\n", record)).unwrap();

    match read_records(&input) {
        Err(BatchError::Record { line, .. }) => assert_eq!(line, 2),
        other => panic!("expected a record error, got {:?}", other),
    }
}

#[test]
fn missing_input_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = BatchConfig {
        input: dir.path().join("missing.jsonl"),
        output: dir.path().join("out.jsonl"),
        ..BatchConfig::default()
    };
    assert!(matches!(run_batch(&config), Err(BatchError::Read { .. })));
}
