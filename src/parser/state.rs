use crate::xml::Token;

/// Element that opens a managed object block
pub const CLASS_TAG: &str = "class";

/// Element that wraps the attribute leaves of a managed object
pub const ATTRIBUTES_TAG: &str = "attributes";

/// Position of the token stream relative to managed object blocks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NestingState {
    /// Not inside any `class` block
    #[default]
    Outside,
    /// Inside a `class` block, before or after its `attributes` block
    InClass,
    /// Inside an `attributes` block
    InAttributes {
        /// Number of currently open elements below `attributes`
        depth: usize,
    },
}

/// Compute the state that follows `state` after consuming `token`
///
/// Text and comment tokens never change the state.
pub fn transition(state: NestingState, token: &Token) -> NestingState {
    match (state, token) {
        (NestingState::Outside, Token::Open { name, .. }) if name == CLASS_TAG => {
            NestingState::InClass
        }
        (NestingState::InClass, Token::Open { name, .. }) if name == ATTRIBUTES_TAG => {
            NestingState::InAttributes { depth: 0 }
        }
        (NestingState::InClass, Token::Close { name }) if name == CLASS_TAG => NestingState::Outside,
        (NestingState::InAttributes { depth }, Token::Open { .. }) => {
            NestingState::InAttributes { depth: depth + 1 }
        }
        (NestingState::InAttributes { depth: 0 }, Token::Close { name }) if name == ATTRIBUTES_TAG => {
            NestingState::InClass
        }
        (NestingState::InAttributes { depth }, Token::Close { .. }) if depth > 0 => {
            NestingState::InAttributes { depth: depth - 1 }
        }
        (state, _) => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_lifecycle() {
        let mut state = NestingState::Outside;
        for (token, expected) in [
            (Token::open("class"), NestingState::InClass),
            (Token::open("CELL"), NestingState::InClass),
            (Token::open("attributes"), NestingState::InAttributes { depth: 0 }),
            (Token::open("CELLNAME"), NestingState::InAttributes { depth: 1 }),
            (Token::text("cell-1"), NestingState::InAttributes { depth: 1 }),
            (Token::close("CELLNAME"), NestingState::InAttributes { depth: 0 }),
            (Token::close("attributes"), NestingState::InClass),
            (Token::close("CELL"), NestingState::InClass),
            (Token::close("class"), NestingState::Outside),
        ] {
            state = transition(state, &token);
            assert_eq!(state, expected, "after {:?}", token);
        }
    }

    #[test]
    fn test_outside_ignores_attributes_tag() {
        let state = transition(NestingState::Outside, &Token::open("attributes"));
        assert_eq!(state, NestingState::Outside);
    }

    #[test]
    fn test_nested_attributes_tag_is_a_leaf() {
        let state = NestingState::InAttributes { depth: 0 };
        let state = transition(state, &Token::open("attributes"));
        assert_eq!(state, NestingState::InAttributes { depth: 1 });
        let state = transition(state, &Token::close("attributes"));
        assert_eq!(state, NestingState::InAttributes { depth: 0 });
        let state = transition(state, &Token::close("attributes"));
        assert_eq!(state, NestingState::InClass);
    }

    #[test]
    fn test_class_close_inside_attributes_is_a_leaf() {
        let state = NestingState::InAttributes { depth: 1 };
        let state = transition(state, &Token::close("class"));
        assert_eq!(state, NestingState::InAttributes { depth: 0 });
    }

    #[test]
    fn test_text_and_comments_keep_state() {
        for state in [
            NestingState::Outside,
            NestingState::InClass,
            NestingState::InAttributes { depth: 2 },
        ] {
            assert_eq!(transition(state, &Token::text("x")), state);
            assert_eq!(transition(state, &Token::comment("x")), state);
        }
    }
}
