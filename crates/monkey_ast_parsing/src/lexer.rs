//! Responsible with converting a [io::Read] obj into a token stream

use crate::lexer::char_reader::CharReader;
use log::{debug, trace};
use monkey_tokens::token::{lookup_ident, Token, TokenKind};
use std::fs::File;
use std::io;
use std::io::Read;
use std::iter::FusedIterator;
use std::path::Path;

pub mod char_reader;

/// Responsible with converting a [Read] obj into a token stream.
///
/// Tokens are scanned on demand by [Lexer::next_token]. The lexer never fails: input it
/// can't classify becomes a [TokenKind::Illegal] token, and once the input is exhausted
/// every call returns the [TokenKind::Eof] token.
///
/// # Examples
/// ```
/// # use monkey_ast_parsing::lexer::Lexer;
/// # use monkey_tokens::token::TokenKind;
/// let mut lexer = Lexer::new("x != 1.5".as_bytes());
/// assert_eq!(lexer.next_token().kind(), TokenKind::Ident);
/// assert_eq!(lexer.next_token().kind(), TokenKind::NotEq);
/// assert_eq!(lexer.next_token().literal(), "1.5");
/// assert_eq!(lexer.next_token().kind(), TokenKind::Eof);
/// ```
#[derive(Debug)]
pub struct Lexer<R> {
    reader: CharReader<R>,
}

impl Lexer<File> {
    /// Creates a new lexer from a path
    pub fn read_path(path: impl AsRef<Path>) -> io::Result<Self> {
        let reader = File::open(path)?;
        Ok(Self::new(reader))
    }
}

impl<R: Read> Lexer<R> {
    /// Creates a new lexer
    pub fn new(reader: R) -> Self {
        Self {
            reader: CharReader::new(reader),
        }
    }

    /// Scans the next token
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let token = match self.reader.read() {
            None => Token::eof(),
            Some('=') => self.one_or_two('=', TokenKind::Assign, TokenKind::Eq),
            Some('!') => self.one_or_two('=', TokenKind::Bang, TokenKind::NotEq),
            Some(c) if c.is_alphabetic() => self.read_word(c),
            Some(c) if c.is_ascii_digit() => self.read_number(c),
            Some(c) => match TokenKind::single_char(c) {
                Some(kind) => Token::new(kind, c),
                None => {
                    debug!("illegal character {c:?}");
                    Token::illegal()
                }
            },
        };
        trace!("scanned {token:?}");
        token
    }

    /// Takes the io error that ended the token stream, if there was one.
    ///
    /// A failing reader is treated as the end of input.
    pub fn take_io_error(&mut self) -> Option<io::Error> {
        self.reader.take_error()
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.reader.read() {
            if !c.is_whitespace() {
                self.reader.unread(c);
                break;
            }
        }
    }

    /// Emits `two` if the next char is `second`, consuming it. Otherwise emits `one`.
    fn one_or_two(&mut self, second: char, one: TokenKind, two: TokenKind) -> Token {
        let kind = if self.reader.peek() == Some(second) {
            self.reader.read();
            two
        } else {
            one
        };
        Token::fixed(kind).unwrap_or_else(Token::illegal)
    }

    fn read_word(&mut self, first: char) -> Token {
        let mut word = String::from(first);
        while let Some(c) = self.reader.read() {
            if !c.is_alphabetic() {
                self.reader.unread(c);
                break;
            }
            word.push(c);
        }
        Token::new(lookup_ident(&word), word)
    }

    // a second point ends the number and is left for the next token
    fn read_number(&mut self, first: char) -> Token {
        let mut number = String::from(first);
        let mut has_point = false;
        while let Some(c) = self.reader.read() {
            match c {
                '.' if !has_point => has_point = true,
                c if c.is_ascii_digit() => {}
                c => {
                    self.reader.unread(c);
                    break;
                }
            }
            number.push(c);
        }
        Token::new(TokenKind::Number, number)
    }
}

impl<R: Read> Iterator for Lexer<R> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        (!token.is(TokenKind::Eof)).then_some(token)
    }
}

impl<R: Read> FusedIterator for Lexer<R> {}
