//! Creates the program tree from a token stream

use crate::lexer::Lexer;
use log::{debug, trace};
use monkey_ast::identifier::Identifier;
use monkey_ast::program::Program;
use monkey_ast::statements::{LetStatement, ReturnStatement, Statement};
use monkey_tokens::token::{Token, TokenKind};
use std::fs::File;
use std::io;
use std::io::Read;
use std::path::Path;

pub mod error;

pub use error::ParseError;

/// Recursive descent parser for monkey statements.
///
/// Keeps two tokens of lookahead, `current` and `peek`, both filled when the parser is
/// created. Parsing is best-effort: a malformed statement is dropped and recorded as a
/// [ParseError], and parsing resumes at the next token.
///
/// # Examples
/// Create from an existing lexer
/// ```
/// # use monkey_ast_parsing::lexer::Lexer;
/// # use monkey_ast_parsing::parser::Parser;
/// let lexer = Lexer::new("let x = 5;".as_bytes());
/// let mut parser = Parser::from(lexer);
/// let program = parser.parse_program();
/// assert_eq!(program.len(), 1);
/// assert!(parser.errors().is_empty());
/// ```
#[derive(Debug)]
pub struct Parser<R> {
    lexer: Lexer<R>,
    current: Token,
    peek: Token,
    errors: Vec<ParseError>,
}

impl Parser<File> {
    /// Creates a new parser reading from the file at the given path
    pub fn with_file(path: impl AsRef<Path>) -> io::Result<Self> {
        Lexer::read_path(path).map(Self::new)
    }
}

impl<R: Read> Parser<R> {
    /// Creates a new parser with a given lexer
    pub fn new(mut lexer: Lexer<R>) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();
        Self {
            lexer,
            current,
            peek,
            errors: vec![],
        }
    }

    /// Creates a new parser over a reader
    pub fn with_reader(reader: R) -> Self {
        Self::new(Lexer::new(reader))
    }

    /// Parses statements until the end of input.
    ///
    /// Never fails as a whole, check [errors](Parser::errors) to learn whether any
    /// statement was dropped.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::new();
        while !self.current.is(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                trace!("parsed {statement:?}");
                program.push(statement);
            }
            self.advance();
        }
        program
    }

    /// The diagnostics of dropped statements, in the order they were found
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Consumes the parser, returning its diagnostics
    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    /// The token being looked at
    pub fn current(&self) -> &Token {
        &self.current
    }

    /// The token after [current](Parser::current)
    pub fn peek(&self) -> &Token {
        &self.peek
    }

    /// Takes the io error that ended the token stream, if there was one.
    pub fn take_io_error(&mut self) -> Option<io::Error> {
        self.lexer.take_io_error()
    }

    /// Shifts the lookahead by one token
    pub fn advance(&mut self) {
        let next = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    fn parse_statement(&mut self) -> Option<Statement> {
        match self.current.kind() {
            TokenKind::Let => self.parse_let_statement().map(Statement::from),
            TokenKind::Return => self.parse_return_statement().map(Statement::from),
            _ => {
                trace!("skipping {}", self.current);
                None
            }
        }
    }

    fn parse_let_statement(&mut self) -> Option<LetStatement> {
        let token = self.current.clone();
        self.expect_peek(TokenKind::Ident)?;
        let name = Identifier::new(self.current.clone())?;
        self.expect_peek(TokenKind::Assign)?;
        self.skip_to_terminator();
        Some(LetStatement::new(token, name, None))
    }

    fn parse_return_statement(&mut self) -> Option<ReturnStatement> {
        let token = self.current.clone();
        self.advance();
        self.skip_to_terminator();
        Some(ReturnStatement::new(token, None))
    }

    // TODO: replace with expression parsing once the expression grammar exists
    fn skip_to_terminator(&mut self) {
        while !self.current.is(TokenKind::SemiColon) && !self.current.is(TokenKind::Eof) {
            self.advance();
        }
    }

    /// Advances if the peek token is of the given kind, otherwise records a diagnostic.
    fn expect_peek(&mut self, kind: TokenKind) -> Option<()> {
        if self.peek.is(kind) {
            self.advance();
            Some(())
        } else {
            let error = ParseError::unexpected_token(kind, self.peek.clone());
            debug!("dropping statement: {error}");
            self.errors.push(error);
            None
        }
    }
}

impl<R: Read> From<Lexer<R>> for Parser<R> {
    fn from(value: Lexer<R>) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use monkey_ast::Node;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use test_log::test;

    pub fn test_parser<F>(s: &str, callback: F)
    where
        F: FnOnce(&mut Parser<File>, &Path),
    {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "{}", s).expect("could not write");
        let path = temp_file.path();
        let mut parser = Parser::with_file(path).unwrap();
        callback(&mut parser, path)
    }

    fn let_name(statement: &Statement) -> &str {
        let Statement::Let(stmt) = statement else {
            panic!("statement not a let statement: {statement:?}")
        };
        assert_eq!(stmt.token_literal(), "let");
        assert_eq!(stmt.name().value(), stmt.name().token_literal());
        stmt.name().value()
    }

    #[test]
    fn test_create_parser_from_file() {
        test_parser("let x = 1.0;", |parser, _| {
            assert_eq!(parser.current().kind(), TokenKind::Let);
            assert_eq!(parser.peek(), &Token::new(TokenKind::Ident, "x"));
        });
    }

    #[test]
    fn test_advance() {
        let mut parser = Parser::with_reader("let x".as_bytes());
        parser.advance();
        assert_eq!(parser.current(), &Token::new(TokenKind::Ident, "x"));
        assert_eq!(parser.peek().kind(), TokenKind::Eof);
        parser.advance();
        parser.advance();
        assert_eq!(parser.current().kind(), TokenKind::Eof);
        assert_eq!(parser.peek().kind(), TokenKind::Eof);
    }

    #[test]
    fn test_let_statements() {
        test_parser(
            r#"
            let x = 5;
            let y = 10;
            let foobar = 838383;
            "#,
            |parser, _| {
                let program = parser.parse_program();
                assert!(parser.errors().is_empty(), "{:?}", parser.errors());
                let names = program.iter().map(let_name).collect::<Vec<_>>();
                assert_eq!(names, ["x", "y", "foobar"]);
            },
        );
    }

    #[test]
    fn test_return_statements() {
        test_parser(
            r#"
            return 5;
            return 10.3;
            return add(1, 4);
            "#,
            |parser, _| {
                let program = parser.parse_program();
                assert_eq!(program.len(), 3, "{program:#?}");
                for statement in &program {
                    let Statement::Return(stmt) = statement else {
                        panic!("statement not a return statement: {statement:?}")
                    };
                    assert_eq!(stmt.token_literal(), "return");
                    assert!(stmt.value().is_none());
                }
                assert!(parser.errors().is_empty());
            },
        );
    }

    #[test]
    fn test_missing_identifier() {
        let mut parser = Parser::with_reader("let = 5; let y = 10;".as_bytes());
        let program = parser.parse_program();
        assert_eq!(program.iter().map(let_name).collect::<Vec<_>>(), ["y"]);
        assert_eq!(
            parser.errors(),
            [ParseError::unexpected_token(
                TokenKind::Ident,
                Token::new(TokenKind::Assign, "=")
            )]
        );
    }

    #[test]
    fn test_missing_assign() {
        let mut parser = Parser::with_reader("let x 5; return x;".as_bytes());
        let program = parser.parse_program();
        assert_eq!(program.len(), 1);
        assert!(matches!(program.statements()[0], Statement::Return(_)));
        assert_eq!(parser.errors().len(), 1);
        assert_eq!(parser.errors()[0].expected(), TokenKind::Assign);
        assert_eq!(parser.errors()[0].found(), &Token::new(TokenKind::Number, "5"));
    }

    #[test]
    fn test_one_error_per_statement() {
        let mut parser = Parser::with_reader("let 1; let; let x; let y = 2;".as_bytes());
        let program = parser.parse_program();
        assert_eq!(program.iter().map(let_name).collect::<Vec<_>>(), ["y"]);
        let expected = parser
            .errors()
            .iter()
            .map(ParseError::expected)
            .collect::<Vec<_>>();
        assert_eq!(
            expected,
            [TokenKind::Ident, TokenKind::Ident, TokenKind::Assign]
        );
    }

    #[test]
    fn test_unterminated_statement() {
        let mut parser = Parser::with_reader("let x = 5".as_bytes());
        let program = parser.parse_program();
        assert_eq!(program.iter().map(let_name).collect::<Vec<_>>(), ["x"]);
        assert!(parser.errors().is_empty());

        let mut parser = Parser::with_reader("return".as_bytes());
        assert_eq!(parser.parse_program().len(), 1);
    }

    #[test]
    fn test_unrecognized_tokens_are_skipped() {
        let mut parser = Parser::with_reader("x + 1; fn @ ; return 2;".as_bytes());
        let program = parser.parse_program();
        assert_eq!(program.len(), 1);
        assert_eq!(program.token_literal(), "return");
        assert!(parser.errors().is_empty());
    }

    struct Truncated<'a> {
        data: &'a [u8],
    }

    impl Read for Truncated<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.data.is_empty() {
                return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "truncated"));
            }
            self.data.read(buf)
        }
    }

    #[test]
    fn test_io_error_ends_program() {
        let mut parser = Parser::with_reader(Truncated { data: b"let x = 5; return" });
        let program = parser.parse_program();
        assert_eq!(program.len(), 2);
        assert!(parser.errors().is_empty());
        let error = parser.take_io_error().expect("error should be kept");
        assert_eq!(error.kind(), io::ErrorKind::UnexpectedEof);
        assert!(parser.take_io_error().is_none());
    }

    #[test]
    fn test_empty_program() {
        let mut parser = Parser::with_reader("".as_bytes());
        let program = parser.parse_program();
        assert!(program.is_empty());
        assert!(parser.into_errors().is_empty());
    }
}
