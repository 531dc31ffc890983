//! The expression slot of statements.
//!
//! Statement values are not parsed yet, so every statement produced by the parser holds
//! `None` here. New expression forms are added as variants of [Expr].

use crate::identifier::Identifier;
use crate::Node;

/// An expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Identifier(Identifier),
}

impl Node for Expr {
    fn token_literal(&self) -> &str {
        match self {
            Expr::Identifier(id) => id.token_literal(),
        }
    }
}

impl From<Identifier> for Expr {
    fn from(value: Identifier) -> Self {
        Expr::Identifier(value)
    }
}
