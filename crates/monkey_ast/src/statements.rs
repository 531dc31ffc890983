//! statements

use crate::expr::Expr;
use crate::identifier::Identifier;
use crate::Node;
use monkey_tokens::token::{Token, TokenKind};

/// General statement types
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Let(LetStatement),
    Return(ReturnStatement),
}

impl Statement {
    /// If this is a binding statement or not.
    pub fn is_binding(&self) -> bool {
        matches!(self, Statement::Let(_))
    }

    /// The value of this statement, if one was parsed
    pub fn value(&self) -> Option<&Expr> {
        match self {
            Statement::Let(stmt) => stmt.value(),
            Statement::Return(stmt) => stmt.value(),
        }
    }
}

impl Node for Statement {
    fn token_literal(&self) -> &str {
        match self {
            Statement::Let(stmt) => stmt.token_literal(),
            Statement::Return(stmt) => stmt.token_literal(),
        }
    }
}

impl From<LetStatement> for Statement {
    fn from(value: LetStatement) -> Self {
        Statement::Let(value)
    }
}

impl From<ReturnStatement> for Statement {
    fn from(value: ReturnStatement) -> Self {
        Statement::Return(value)
    }
}

/// `let <name> = <value>;`
#[derive(Debug, Clone, PartialEq)]
pub struct LetStatement {
    token: Token,
    name: Identifier,
    value: Option<Expr>,
}

impl LetStatement {
    /// Creates a new let statement from its `let` token
    pub fn new(token: Token, name: Identifier, value: impl Into<Option<Expr>>) -> Self {
        debug_assert!(token.is(TokenKind::Let), "{token:?} is not a let token");
        Self {
            token,
            name,
            value: value.into(),
        }
    }

    /// The `let` token
    pub fn token(&self) -> &Token {
        &self.token
    }

    /// The declared name
    pub fn name(&self) -> &Identifier {
        &self.name
    }

    pub fn value(&self) -> Option<&Expr> {
        self.value.as_ref()
    }
}

impl Node for LetStatement {
    fn token_literal(&self) -> &str {
        self.token.literal()
    }
}

/// `return <value>;`
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    token: Token,
    value: Option<Expr>,
}

impl ReturnStatement {
    /// Creates a new return statement from its `return` token
    pub fn new(token: Token, value: impl Into<Option<Expr>>) -> Self {
        debug_assert!(token.is(TokenKind::Return), "{token:?} is not a return token");
        Self {
            token,
            value: value.into(),
        }
    }

    /// The `return` token
    pub fn token(&self) -> &Token {
        &self.token
    }

    pub fn value(&self) -> Option<&Expr> {
        self.value.as_ref()
    }
}

impl Node for ReturnStatement {
    fn token_literal(&self) -> &str {
        self.token.literal()
    }
}
