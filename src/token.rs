use serde::{Deserialize, Serialize};

macro_rules! label_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal, )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )*
            /// A label outside the known vocabulary. Never equal to a known label.
            Unknown,
        }

        impl $name {
            /// Parse a label string. Matching is case-sensitive.
            pub fn from_label(label: &str) -> Self {
                match label {
                    $( $label => Self::$variant, )*
                    _ => Self::Unknown,
                }
            }

            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $label, )*
                    Self::Unknown => "?",
                }
            }
        }
    };
}

label_enum! {
    /// Coarse universal part-of-speech tag.
    pub enum Pos {
        Adj => "ADJ",
        Adp => "ADP",
        Adv => "ADV",
        Aux => "AUX",
        Cconj => "CCONJ",
        Det => "DET",
        Intj => "INTJ",
        Noun => "NOUN",
        Num => "NUM",
        Part => "PART",
        Pron => "PRON",
        Propn => "PROPN",
        Punct => "PUNCT",
        Sconj => "SCONJ",
        Sym => "SYM",
        Verb => "VERB",
        X => "X",
        Space => "SPACE",
    }
}

label_enum! {
    /// Dependency relation of a token to its syntactic head (ClearNLP English labels).
    pub enum DepRel {
        /// The sentence head.
        Root => "ROOT",
        Acl => "acl",
        Acomp => "acomp",
        Advcl => "advcl",
        Advmod => "advmod",
        /// The "by"-phrase of a passive clause.
        Agent => "agent",
        Amod => "amod",
        Appos => "appos",
        Attr => "attr",
        Aux => "aux",
        Auxpass => "auxpass",
        Case => "case",
        Cc => "cc",
        Ccomp => "ccomp",
        Compound => "compound",
        Conj => "conj",
        Csubj => "csubj",
        Csubjpass => "csubjpass",
        Dative => "dative",
        Dep => "dep",
        Det => "det",
        Dobj => "dobj",
        Expl => "expl",
        Mark => "mark",
        Neg => "neg",
        Nmod => "nmod",
        Npadvmod => "npadvmod",
        Nsubj => "nsubj",
        Nsubjpass => "nsubjpass",
        Nummod => "nummod",
        Oprd => "oprd",
        Parataxis => "parataxis",
        Pcomp => "pcomp",
        Pobj => "pobj",
        Poss => "poss",
        Preconj => "preconj",
        Prep => "prep",
        Prt => "prt",
        Punct => "punct",
        Quantmod => "quantmod",
        Relcl => "relcl",
        Xcomp => "xcomp",
    }
}

/// A single node of a dependency parse.
///
/// Tokens never own their children; the adjacency lives in
/// [`Sentence`](crate::Sentence).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub pos: Pos,
    pub dep: DepRel,
    /// Index of the syntactic head, `None` for the root.
    pub head: Option<usize>,
    /// Upstream NER tag, kept verbatim.
    pub ent_type: Option<String>,
    /// Raw labels as produced by the parser, kept for display.
    pub(crate) pos_label: String,
    pub(crate) dep_label: String,
}

impl Token {
    pub fn new(text: impl Into<String>, pos_label: &str, dep_label: &str) -> Self {
        Token {
            text: text.into(),
            pos: Pos::from_label(pos_label),
            dep: DepRel::from_label(dep_label),
            head: None,
            ent_type: None,
            pos_label: pos_label.to_string(),
            dep_label: dep_label.to_string(),
        }
    }

    pub fn with_head(mut self, head: usize) -> Self {
        self.head = Some(head);
        self
    }

    pub fn with_ent_type(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        self.ent_type = if tag.is_empty() { None } else { Some(tag) };
        self
    }

    pub fn pos_label(&self) -> &str {
        &self.pos_label
    }

    pub fn dep_label(&self) -> &str {
        &self.dep_label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_case_sensitive() {
        assert_eq!(DepRel::from_label("ROOT"), DepRel::Root);
        assert_eq!(DepRel::from_label("root"), DepRel::Unknown);
        assert_eq!(DepRel::from_label("nsubjpass"), DepRel::Nsubjpass);
        assert_eq!(Pos::from_label("verb"), Pos::Unknown);
        assert_eq!(Pos::from_label("VERB"), Pos::Verb);
    }

    #[test]
    fn test_unknown_label_keeps_raw_text() {
        let token = Token::new("foo", "XYZ", "weird");
        assert_eq!(token.pos, Pos::Unknown);
        assert_eq!(token.dep, DepRel::Unknown);
        assert_eq!(token.pos_label(), "XYZ");
        assert_eq!(token.dep_label(), "weird");
    }

    #[test]
    fn test_empty_ent_type_is_none() {
        let token = Token::new("the", "DET", "det").with_ent_type("");
        assert_eq!(token.ent_type, None);
    }
}
