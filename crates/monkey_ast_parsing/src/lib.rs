#![doc = include_str!("../README.md")]

use crate::parser::{ParseError, Parser};
use monkey_ast::program::Program;
use std::io::Read;

pub mod lexer;
pub mod parser;

/// Parses everything a reader produces.
///
/// Returns the program and the diagnostics of any statements that were dropped.
pub fn parse_reader<R: Read>(reader: R) -> (Program, Vec<ParseError>) {
    let mut parser = Parser::with_reader(reader);
    let program = parser.parse_program();
    (program, parser.into_errors())
}

/// Parses a string of source code
pub fn parse_str(src: &str) -> (Program, Vec<ParseError>) {
    parse_reader(src.as_bytes())
}
