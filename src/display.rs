use crate::sentence::Sentence;
use std::fmt::{self, Write};
use unicode_width::UnicodeWidthStr;

/// Column-aligned rendering of a dependency parse.
///
/// ```text
/// The  Commission  may  adopt  acts
///                              ╰dobj→adopt NOUN MEASURE
///                       ╰ROOT VERB
///                  ╰aux→adopt AUX
///      ╰nsubj→adopt PROPN COM
/// ╰det→Commission DET
/// ```
///
/// Annotation rows are written last token first, so rows for tokens on the
/// right never cross rows for tokens on the left.
pub struct DepTreeDisplay<'a> {
    sentence: &'a Sentence,
    show_pos: bool,
}

impl<'a> DepTreeDisplay<'a> {
    pub fn new(sentence: &'a Sentence) -> Self {
        DepTreeDisplay {
            sentence,
            show_pos: true,
        }
    }

    pub fn hide_pos(mut self) -> Self {
        self.show_pos = false;
        self
    }
}

impl<'a> fmt::Display for DepTreeDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const SPACE_PADDING: usize = 2;

        let mut token_start_columns = Vec::with_capacity(self.sentence.len());
        let mut opening_line = String::new();
        for token in self.sentence.iter() {
            if token.index() > 0 {
                opening_line.extend(std::iter::repeat(' ').take(SPACE_PADDING));
            }
            token_start_columns.push(UnicodeWidthStr::width(opening_line.as_str()));
            opening_line.push_str(token.text());
        }

        f.write_str(&opening_line)?;

        for token in self.sentence.iter().collect::<Vec<_>>().into_iter().rev() {
            f.write_char('\n')?;
            for _ in 0..token_start_columns[token.index()] {
                f.write_char(' ')?;
            }

            let raw = &self.sentence.tokens()[token.index()];
            write!(f, "╰{}", raw.dep_label())?;
            if let Some(head) = token.head() {
                write!(f, "→{}", head.text())?;
            }
            if self.show_pos {
                write!(f, " {}", raw.pos_label())?;
            }
            if let Some(tag) = token.ent_type() {
                write!(f, " {}", tag)?;
            }
        }

        Ok(())
    }
}
