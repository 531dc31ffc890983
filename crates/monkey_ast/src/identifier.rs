//! Identifiers

use crate::Node;
use monkey_tokens::token::{Token, TokenKind};

/// A name, either declared by a `let` or referenced in an expression
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    token: Token,
    value: String,
}

impl Identifier {
    /// Tries to create an [Identifier] from a token.
    ///
    /// Returns `None` if the token is not an [TokenKind::Ident].
    pub fn new(token: Token) -> Option<Self> {
        if token.is(TokenKind::Ident) {
            let value = token.literal().to_string();
            Some(Self { token, value })
        } else {
            None
        }
    }

    /// The identifier token
    pub fn token(&self) -> &Token {
        &self.token
    }

    /// The name. Always equal to the token's literal.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Node for Identifier {
    fn token_literal(&self) -> &str {
        self.token.literal()
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_value_matches_literal() {
        let id = Identifier::new(Token::new(TokenKind::Ident, "foobar")).unwrap();
        assert_eq!(id.value(), "foobar");
        assert_eq!(id.value(), id.token().literal());
        assert_eq!(id.token_literal(), "foobar");
        assert_eq!(id.as_ref(), "foobar");
    }

    #[test]
    fn test_only_from_identifiers() {
        assert!(Identifier::new(Token::fixed(TokenKind::Let).unwrap()).is_none());
        assert!(Identifier::new(Token::new(TokenKind::Number, "5")).is_none());
    }
}
