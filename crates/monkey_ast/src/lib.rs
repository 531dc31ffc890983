#![doc = include_str!("../README.md")]

pub mod expr;
pub mod identifier;
pub mod program;
pub mod statements;

/// Common behavior of every node in the program tree
pub trait Node {
    /// The literal of the token that introduced this node
    fn token_literal(&self) -> &str;
}
