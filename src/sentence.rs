use crate::errors::{TreeError, TreeResult};
use crate::token::{DepRel, Pos, Token};
use std::fmt;

/// An immutable dependency-parsed sentence.
///
/// Tokens are stored in surface order. The parent→children adjacency is
/// computed once at construction and children are always visited in
/// ascending token order.
#[derive(Clone, PartialEq, Eq)]
pub struct Sentence {
    text: String,
    tokens: Vec<Token>,
    children: Vec<Vec<usize>>,
    root: Option<usize>,
}

impl Sentence {
    /// Build a sentence and validate its tree shape.
    ///
    /// A token is the root when its head is missing, points at itself, or
    /// its relation is `ROOT`. An empty token list is accepted and yields a
    /// sentence without root.
    pub fn new(text: impl Into<String>, mut tokens: Vec<Token>) -> TreeResult<Self> {
        let len = tokens.len();
        let mut root = None;

        for (idx, token) in tokens.iter_mut().enumerate() {
            let is_root =
                token.dep == DepRel::Root || token.head.map_or(true, |head| head == idx);
            if is_root {
                if let Some(first) = root {
                    return Err(TreeError::MultipleRoots { first, second: idx });
                }
                root = Some(idx);
                token.head = None;
            } else if let Some(head) = token.head {
                if head >= len {
                    return Err(TreeError::HeadOutOfRange { token: idx, head, len });
                }
            }
        }

        if len > 0 && root.is_none() {
            return Err(TreeError::MissingRoot { len });
        }

        let mut children = vec![Vec::new(); len];
        for (idx, token) in tokens.iter().enumerate() {
            if let Some(head) = token.head {
                children[head].push(idx);
            }
        }

        let sentence = Sentence {
            text: text.into(),
            tokens,
            children,
            root,
        };
        sentence.check_acyclic()?;
        Ok(sentence)
    }

    /// A sentence with no tokens.
    pub fn empty(text: impl Into<String>) -> Self {
        Sentence {
            text: text.into(),
            tokens: Vec::new(),
            children: Vec::new(),
            root: None,
        }
    }

    fn check_acyclic(&self) -> TreeResult<()> {
        let len = self.tokens.len();
        for start in 0..len {
            let mut current = start;
            let mut steps = 0;
            while let Some(head) = self.tokens[current].head {
                current = head;
                steps += 1;
                if steps > len {
                    return Err(TreeError::Cycle { token: start });
                }
            }
        }
        Ok(())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The syntactic head of the main clause.
    pub fn root(&self) -> Option<TokenRef<'_>> {
        self.root.map(|index| TokenRef {
            sentence: self,
            index,
        })
    }

    pub fn token(&self, index: usize) -> Option<TokenRef<'_>> {
        if index < self.tokens.len() {
            Some(TokenRef {
                sentence: self,
                index,
            })
        } else {
            None
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = TokenRef<'_>> + '_ {
        (0..self.tokens.len()).map(move |index| TokenRef {
            sentence: self,
            index,
        })
    }
}

impl fmt::Debug for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sentence")
            .field("text", &self.text)
            .field("tokens", &self.tokens.len())
            .field("root", &self.root)
            .finish()
    }
}

/// A borrowed view of one token inside its sentence.
#[derive(Clone, Copy)]
pub struct TokenRef<'s> {
    sentence: &'s Sentence,
    index: usize,
}

impl<'s> TokenRef<'s> {
    fn token(&self) -> &'s Token {
        &self.sentence.tokens[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn text(&self) -> &'s str {
        &self.token().text
    }

    pub fn pos(&self) -> Pos {
        self.token().pos
    }

    pub fn dep(&self) -> DepRel {
        self.token().dep
    }

    pub fn ent_type(&self) -> Option<&'s str> {
        self.token().ent_type.as_deref()
    }

    pub fn head(&self) -> Option<TokenRef<'s>> {
        let sentence = self.sentence;
        self.token().head.map(|index| TokenRef { sentence, index })
    }

    /// Direct syntactic children in surface order.
    pub fn children(&self) -> impl Iterator<Item = TokenRef<'s>> + 's {
        let sentence = self.sentence;
        sentence.children[self.index]
            .iter()
            .map(move |&index| TokenRef { sentence, index })
    }

    /// This token and all of its descendants, in surface order.
    pub fn subtree(&self) -> Vec<TokenRef<'s>> {
        let mut indices = vec![self.index];
        let mut stack = vec![self.index];
        while let Some(current) = stack.pop() {
            for &child in &self.sentence.children[current] {
                indices.push(child);
                stack.push(child);
            }
        }
        indices.sort_unstable();
        let sentence = self.sentence;
        indices
            .into_iter()
            .map(|index| TokenRef { sentence, index })
            .collect()
    }
}

impl<'s> PartialEq for TokenRef<'s> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.sentence, other.sentence) && self.index == other.index
    }
}

impl<'s> Eq for TokenRef<'s> {}

impl<'s> fmt::Debug for TokenRef<'s> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}[{}]", self.text(), self.index, self.dep().as_str())
    }
}
