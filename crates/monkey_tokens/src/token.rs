//! A lexical token from a source file, along with the keyword table used to classify words

use std::collections::HashMap;
use std::fmt::{Debug, Display, Formatter};
use std::sync::LazyLock;
use strum::IntoEnumIterator;

/// Literal used by every [TokenKind::Illegal] token, regardless of the offending input.
pub const ILLEGAL_LITERAL: &str = "ILLEGAL";

/// A lexical token from a source file
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    literal: String,
}

impl Token {
    /// Creates a new token.
    ///
    /// The literal must be one a token of this kind could be scanned from, see
    /// [TokenKind::matches_literal].
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        let literal = literal.into();
        debug_assert!(
            kind.matches_literal(&literal),
            "{literal:?} can not be the literal of a {kind} token"
        );
        Self { kind, literal }
    }

    /// Creates a token for a kind whose literal is fixed, such as `==` or `return`.
    ///
    /// Returns `None` for kinds that carry arbitrary text ([TokenKind::Ident] and
    /// [TokenKind::Number]).
    pub fn fixed(kind: TokenKind) -> Option<Self> {
        kind.fixed_literal().map(|literal| Self::new(kind, literal))
    }

    /// The end of input token
    pub fn eof() -> Self {
        Self::new(TokenKind::Eof, "")
    }

    /// The illegal token. Its literal is always [ILLEGAL_LITERAL].
    pub fn illegal() -> Self {
        Self::new(TokenKind::Illegal, ILLEGAL_LITERAL)
    }

    /// Gets the kind for this token
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Gets the exact source text this token was scanned from
    pub fn literal(&self) -> &str {
        &self.literal
    }

    /// Checks if this token is of the given kind
    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}({:?})", self.kind, self.literal)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({:?})", self.kind, self.literal)
    }
}

/// The kind for this token
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, strum::EnumIter, strum::AsRefStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    Illegal,
    /// EOF, repeats forever once the input is exhausted
    Eof,

    /// 1, 12443, 12.325
    Number,
    /// add, foobar
    Ident,

    /// +
    Plus,
    /// !
    Bang,
    /// -
    Minus,
    /// =
    Assign,
    /// /
    Slash,
    /// *
    Asterisk,

    /// >
    Gt,
    /// <
    Lt,
    /// ==
    Eq,
    /// !=
    NotEq,

    Comma,
    #[strum(serialize = "SEMICOLON")]
    SemiColon,

    #[strum(serialize = "LPAREN")]
    LParen,
    #[strum(serialize = "RPAREN")]
    RParen,
    #[strum(serialize = "LCURLY")]
    LCurly,
    #[strum(serialize = "RCURLY")]
    RCurly,

    Let,
    Fn,
    True,
    False,
    If,
    Else,
    Return,
}

impl TokenKind {
    /// The literal every token of this kind has, if it is fixed.
    pub fn fixed_literal(&self) -> Option<&'static str> {
        use TokenKind::*;
        let literal = match self {
            Illegal => ILLEGAL_LITERAL,
            Eof => "",
            Number | Ident => return None,
            Plus => "+",
            Bang => "!",
            Minus => "-",
            Assign => "=",
            Slash => "/",
            Asterisk => "*",
            Gt => ">",
            Lt => "<",
            Eq => "==",
            NotEq => "!=",
            Comma => ",",
            SemiColon => ";",
            LParen => "(",
            RParen => ")",
            LCurly => "{",
            RCurly => "}",
            Let => "let",
            Fn => "fn",
            True => "true",
            False => "false",
            If => "if",
            Else => "else",
            Return => "return",
        };
        Some(literal)
    }

    /// Checks if a token of this kind could have been scanned from `literal`.
    pub fn matches_literal(&self, literal: &str) -> bool {
        match self {
            TokenKind::Ident => !literal.is_empty() && lookup_ident(literal) == TokenKind::Ident,
            TokenKind::Number => literal.starts_with(|c: char| c.is_ascii_digit()),
            kind => kind.fixed_literal() == Some(literal),
        }
    }

    /// Checks if this kind is a reserved word
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Let
                | TokenKind::Fn
                | TokenKind::True
                | TokenKind::False
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::Return
        )
    }

    /// Gets the kind of a single character operator or delimiter.
    ///
    /// Characters that may start a two character operator (`=` and `!`) are not included.
    pub fn single_char(c: char) -> Option<Self> {
        let kind = match c {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Asterisk,
            '/' => TokenKind::Slash,
            ',' => TokenKind::Comma,
            ';' => TokenKind::SemiColon,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '{' => TokenKind::LCurly,
            '}' => TokenKind::RCurly,
            '>' => TokenKind::Gt,
            '<' => TokenKind::Lt,
            _ => return None,
        };
        Some(kind)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_ref())
    }
}

static KEYWORDS: LazyLock<HashMap<&'static str, TokenKind>> = LazyLock::new(|| {
    TokenKind::iter()
        .filter(TokenKind::is_keyword)
        .filter_map(|kind| kind.fixed_literal().map(|literal| (literal, kind)))
        .collect()
});

/// Classifies a word, returning its keyword kind or [TokenKind::Ident].
pub fn lookup_ident(ident: &str) -> TokenKind {
    KEYWORDS.get(ident).copied().unwrap_or(TokenKind::Ident)
}
