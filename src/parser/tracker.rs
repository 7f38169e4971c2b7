use crate::xml::Token;

use super::{transition, Moi, NestingState, ATTRIBUTES_TAG, CLASS_TAG};

/// Token-by-token classifier that assembles managed object instances
///
/// Feed every token of a file in order; [`NestingTracker::feed`] returns the
/// completed instance when an `attributes` block closes.
///
/// # Leaf values
/// A leaf takes the last non-whitespace text segment seen since the most
/// recent open tag. A leaf that closes without text records an empty value.
///
/// # Comment override
/// A comment replaces the value of a textless leaf only when it is the very
/// next token after that leaf's close tag. Its text is used verbatim. Any
/// other comment is ignored.
#[derive(Debug, Default)]
pub struct NestingTracker {
    state: NestingState,
    moi: Moi,
    /// Last non-whitespace text since the most recent open tag
    text: Option<String>,
    /// Leaf that just closed without text, eligible for a comment value
    textless_leaf: Option<String>,
}

impl NestingTracker {
    /// Create a tracker positioned outside any class block
    pub fn new() -> Self {
        Self::default()
    }

    /// Current nesting state
    pub fn state(&self) -> NestingState {
        self.state
    }

    /// Instance being collected
    pub fn current(&self) -> &Moi {
        &self.moi
    }

    /// Consume one token, returning the instance it completes, if any
    pub fn feed(&mut self, token: &Token) -> Option<Moi> {
        let next = transition(self.state, token);
        // A comment only overrides the leaf that closed right before it
        let textless_leaf = self.textless_leaf.take();
        let mut completed = None;

        match (self.state, token) {
            (NestingState::Outside, Token::Open { .. }) if next == NestingState::InClass => {
                self.moi = Moi::new();
            }
            (NestingState::InClass, Token::Open { name, .. }) if next == NestingState::InClass => {
                if name != CLASS_TAG && name != ATTRIBUTES_TAG && self.moi.mo_type().is_none() {
                    self.moi.set_type(name.as_str());
                }
            }
            (NestingState::InClass, Token::Open { .. }) => {
                self.moi.clear_attributes();
                self.text = None;
            }
            (NestingState::InAttributes { .. }, Token::Open { .. }) => {
                self.text = None;
            }
            (NestingState::InAttributes { .. }, Token::Text(text)) => {
                if !text.trim().is_empty() {
                    self.text = Some(text.clone());
                }
            }
            (NestingState::InAttributes { .. }, Token::Comment(comment)) => {
                if let Some(leaf) = textless_leaf {
                    self.moi.insert(leaf, comment.as_str());
                }
            }
            (NestingState::InAttributes { depth }, Token::Close { name }) if depth > 0 => {
                match self.text.take() {
                    Some(value) => self.moi.insert(name.as_str(), value),
                    None => {
                        self.moi.insert(name.as_str(), "");
                        self.textless_leaf = Some(name.clone());
                    }
                }
            }
            (NestingState::InAttributes { .. }, Token::Close { .. }) if next == NestingState::InClass => {
                completed = Some(self.moi.take());
            }
            _ => {}
        }

        self.state = next;
        completed
    }
}
