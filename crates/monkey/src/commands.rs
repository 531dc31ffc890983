//! The commands monkey can run over a source

use crate::args::Source;
use eyre::WrapErr;
use log::{debug, warn};
use monkey_ast_parsing::lexer::Lexer;
use monkey_ast_parsing::parser::Parser;
use monkey_tokens::token::TokenKind;
use std::fs::File;
use std::io;
use std::io::{Read, Write};

impl Source {
    /// Opens this source for reading
    pub fn open(&self) -> eyre::Result<Box<dyn Read>> {
        match self {
            Source::Stdin => Ok(Box::new(io::stdin().lock())),
            Source::File(path) => {
                let file = File::open(path)
                    .wrap_err_with(|| format!("could not open {}", path.display()))?;
                Ok(Box::new(file))
            }
        }
    }
}

/// Writes every token of a source to `out`, one `<KIND> <literal>` per line.
///
/// Returns the number of illegal tokens that were found.
pub fn print_tokens<R: Read, W: Write>(name: &str, reader: R, out: &mut W) -> eyre::Result<usize> {
    let mut lexer = Lexer::new(reader);
    let mut illegal = 0;
    for token in lexer.by_ref() {
        if token.is(TokenKind::Illegal) {
            warn!("{name}: found an illegal token");
            illegal += 1;
        }
        writeln!(out, "{} {}", token.kind(), token.literal())?;
    }
    if let Some(error) = lexer.take_io_error() {
        return Err(error).wrap_err_with(|| format!("could not read {name}"));
    }
    debug!("{name}: {illegal} illegal tokens");
    Ok(illegal)
}

/// Writes the program tree of a source to `out` and every diagnostic to `diagnostics`.
///
/// Returns the number of statements that were dropped.
pub fn print_program<R: Read, W: Write, E: Write>(
    name: &str,
    reader: R,
    out: &mut W,
    diagnostics: &mut E,
) -> eyre::Result<usize> {
    let mut parser = Parser::with_reader(reader);
    let program = parser.parse_program();
    if let Some(error) = parser.take_io_error() {
        return Err(error).wrap_err_with(|| format!("could not read {name}"));
    }
    debug!("{name}: parsed {} statements", program.len());
    writeln!(out, "{program:#?}")?;
    let errors = parser.into_errors();
    for error in &errors {
        writeln!(diagnostics, "{name}: error: {error}")?;
    }
    Ok(errors.len())
}
