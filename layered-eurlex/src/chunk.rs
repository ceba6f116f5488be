//! Splitting coordinated main clauses.
//!
//! "The Commission shall adopt the measures and Member States shall apply
//! them" carries two provisions. Each verbal conjunct of the root becomes a
//! chunk of its own so that it can be re-parsed and classified separately.

use layered_dep::{DepRel, Pos, Sentence, TokenRef};

fn is_clause_conjunct(token: &TokenRef<'_>) -> bool {
    token.dep() == DepRel::Conj && matches!(token.pos(), Pos::Aux | Pos::Verb)
}

fn join(tokens: impl Iterator<Item = String>) -> String {
    tokens.collect::<Vec<_>>().join(" ")
}

/// Main clause first, then the coordinated clauses from last to first.
///
/// Chunk text is the tokens joined by single spaces. A sentence without
/// verbal conjuncts comes back as a single chunk.
pub fn coordinated_chunks(sentence: &Sentence) -> Vec<String> {
    let mut seen = vec![false; sentence.len()];
    let mut chunks = Vec::new();

    if let Some(root) = sentence.root() {
        for conjunct in root.children().filter(is_clause_conjunct) {
            let subtree = conjunct.subtree();
            for token in &subtree {
                seen[token.index()] = true;
            }
            chunks.push(join(subtree.iter().map(|t| t.text().to_string())));
        }
    }

    chunks.push(join(
        sentence
            .iter()
            .filter(|t| !seen[t.index()])
            .map(|t| t.text().to_string()),
    ));
    chunks.reverse();
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;
    use layered_dep::parse_table;

    #[test]
    fn test_coordinated_clauses() {
        let sentence = parse_table(
            "1 The DET det 2
             2 Commission PROPN nsubj 4 COM
             3 shall AUX aux 4
             4 adopt VERB ROOT 0
             5 measures NOUN dobj 4 MEASURE
             6 and CCONJ cc 4
             7 States PROPN nsubj 9 MS
             8 shall AUX aux 9
             9 apply VERB conj 4
             10 them PRON dobj 9
             11 . PUNCT punct 4",
        )
        .unwrap();
        assert_eq!(
            coordinated_chunks(&sentence),
            vec![
                "The Commission shall adopt measures and .".to_string(),
                "States shall apply them".to_string(),
            ]
        );
    }

    #[test]
    fn test_nominal_conjuncts_stay() {
        let sentence = parse_table(
            "1 Commission PROPN nsubj 3 COM
             2 may AUX aux 3
             3 adopt VERB ROOT 0
             4 rules NOUN dobj 3
             5 and CCONJ cc 4
             6 guidelines NOUN conj 4",
        )
        .unwrap();
        assert_eq!(
            coordinated_chunks(&sentence),
            vec!["Commission may adopt rules and guidelines".to_string()]
        );
    }

    #[test]
    fn test_empty_sentence() {
        assert_eq!(coordinated_chunks(&Sentence::empty("")), vec![String::new()]);
    }
}
