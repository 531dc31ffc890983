use monkey_tokens::token::{Token, TokenKind};

/// A structural error that caused a statement to be dropped
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("expected next token to be {expected}, got {found} instead")]
    UnexpectedToken { expected: TokenKind, found: Token },
}

impl ParseError {
    /// Creates an error for finding `found` where a token of kind `expected` was needed
    pub fn unexpected_token(expected: TokenKind, found: Token) -> Self {
        Self::UnexpectedToken { expected, found }
    }

    /// The token kind the parser was looking for
    pub fn expected(&self) -> TokenKind {
        match self {
            ParseError::UnexpectedToken { expected, .. } => *expected,
        }
    }

    /// The token found instead
    pub fn found(&self) -> &Token {
        match self {
            ParseError::UnexpectedToken { found, .. } => found,
        }
    }
}
