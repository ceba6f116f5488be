//! Parser output formats accepted by [`Sentence`].
//!
//! Two shapes are supported:
//!
//! - [`ParsedSentence`], the serde form of a spaCy `Span` (the root points
//!   at itself, token heads are 0-based).
//! - A whitespace-separated table, one token per line:
//!   `id text pos dep head [ent]` with 1-based ids and head `0` for the root.
//!   A leading `# text: ...` line sets the surface text; otherwise the token
//!   texts are joined with single spaces.

use crate::errors::{TreeError, TreeResult};
use crate::sentence::Sentence;
use crate::token::Token;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedToken {
    pub text: String,
    pub pos: String,
    pub dep: String,
    pub head: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ent_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedSentence {
    pub text: String,
    #[serde(default)]
    pub tokens: Vec<ParsedToken>,
}

impl ParsedSentence {
    pub fn into_sentence(self) -> TreeResult<Sentence> {
        let tokens = self
            .tokens
            .into_iter()
            .map(|t| {
                let token = Token::new(t.text, &t.pos, &t.dep).with_head(t.head);
                match t.ent_type {
                    Some(tag) => token.with_ent_type(tag),
                    None => token,
                }
            })
            .collect();
        Sentence::new(self.text, tokens)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Splits a parse holding several sentences into one parse per root.
    ///
    /// Each token goes with the root its head chain reaches; heads are
    /// renumbered and the text is rebuilt from the token texts. A parse with
    /// at most one root, or whose head chains leave the parse or loop, is
    /// returned whole so that [`ParsedSentence::into_sentence`] reports it.
    pub fn split_sentences(&self) -> Vec<ParsedSentence> {
        let len = self.tokens.len();
        let is_root = |i: usize| self.tokens[i].dep == "ROOT" || self.tokens[i].head == i;
        let roots: Vec<usize> = (0..len).filter(|&i| is_root(i)).collect();
        if roots.len() < 2 {
            return vec![self.clone()];
        }

        let mut owner = Vec::with_capacity(len);
        for start in 0..len {
            let mut current = start;
            let mut hops = 0;
            while !is_root(current) {
                current = self.tokens[current].head;
                hops += 1;
                if current >= len || hops > len {
                    return vec![self.clone()];
                }
            }
            owner.push(current);
        }

        roots
            .iter()
            .map(|&root| {
                let members: Vec<usize> = (0..len).filter(|&i| owner[i] == root).collect();
                let mut position = vec![0; len];
                for (new, &old) in members.iter().enumerate() {
                    position[old] = new;
                }
                let tokens: Vec<ParsedToken> = members
                    .iter()
                    .map(|&old| {
                        let token = &self.tokens[old];
                        let head = if old == root { old } else { token.head };
                        ParsedToken {
                            head: position[head],
                            ..token.clone()
                        }
                    })
                    .collect();
                let text = tokens
                    .iter()
                    .map(|t| t.text.as_str())
                    .collect::<Vec<_>>()
                    .join(" ");
                ParsedSentence { text, tokens }
            })
            .collect()
    }
}

impl From<&Sentence> for ParsedSentence {
    fn from(sentence: &Sentence) -> Self {
        let tokens = sentence
            .iter()
            .map(|token| ParsedToken {
                text: token.text().to_string(),
                pos: sentence.tokens()[token.index()].pos_label().to_string(),
                dep: sentence.tokens()[token.index()].dep_label().to_string(),
                head: token.head().map_or(token.index(), |head| head.index()),
                ent_type: token.ent_type().map(str::to_string),
            })
            .collect();
        ParsedSentence {
            text: sentence.text().to_string(),
            tokens,
        }
    }
}

/// Parse the tabular form into a [`Sentence`].
pub fn parse_table(input: &str) -> TreeResult<Sentence> {
    let mut text = None;
    let mut tokens = Vec::new();

    for (line_idx, line) in input.lines().enumerate() {
        let line_num = line_idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with("//") {
            continue;
        }
        if let Some(rest) = trimmed.strip_prefix("# text:") {
            text = Some(rest.trim().to_string());
            continue;
        }
        if trimmed.starts_with('#') {
            continue;
        }

        let columns: Vec<&str> = trimmed.split_whitespace().collect();
        if columns.len() < 5 || columns.len() > 6 {
            return Err(TreeError::Table {
                line: line_num,
                message: format!("expected 5 or 6 columns, found {}", columns.len()),
            });
        }

        let id: usize = columns[0].parse().map_err(|_| TreeError::Table {
            line: line_num,
            message: format!("invalid token id '{}'", columns[0]),
        })?;
        if id != tokens.len() + 1 {
            return Err(TreeError::Table {
                line: line_num,
                message: format!("expected token id {}, found {}", tokens.len() + 1, id),
            });
        }
        let head: usize = columns[4].parse().map_err(|_| TreeError::Table {
            line: line_num,
            message: format!("invalid head '{}'", columns[4]),
        })?;

        let mut token = Token::new(columns[1], columns[2], columns[3]);
        // 1-based ids on the page, 0-based indices in the arena
        token.head = head.checked_sub(1);
        if let Some(tag) = columns.get(5) {
            token = token.with_ent_type(*tag);
        }
        tokens.push(token);
    }

    let text = text.unwrap_or_else(|| {
        tokens
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    });
    Sentence::new(text, tokens)
}
