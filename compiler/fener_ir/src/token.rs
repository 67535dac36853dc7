//! Token types for the fener lexer.

use std::fmt;

/// 1-based source line number.
pub type Line = u32;

/// A token with the lexeme it was scanned from and the line it starts on.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: Line,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, text: impl Into<String>, line: Line) -> Self {
        Token {
            kind,
            text: text.into(),
            line,
        }
    }

    /// End-of-stream marker on the given line.
    pub fn eof(line: Line) -> Self {
        Token::new(TokenKind::Eof, "", line)
    }

    /// Create a token for tests and synthesized nodes.
    ///
    /// The text is the kind's canonical spelling and the line is 1.
    pub fn dummy(kind: TokenKind) -> Self {
        Token::new(kind, kind.as_str(), 1)
    }

    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?}) @ line {}", self.kind, self.text, self.line)
    }
}

/// Token kinds for fener.
///
/// Kinds carry no payload; the lexeme lives in [`Token::text`]. This keeps
/// `TokenKind` `Copy` so it can key the parser's builder tables directly.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// End of input. Repeats forever once reached.
    Eof,
    /// Anything the lexer could not classify.
    Illegal,

    Ident,
    Int,
    Str,
    True,
    False,

    // Keywords
    If,
    Else,
    Elif,
    Then,
    End,
    While,
    Fn,
    Return,
    Test,
    Class,

    // Operators
    Assign,   // =
    Plus,     // +
    Minus,    // -
    Star,     // *
    Slash,    // /
    Percent,  // %
    Bang,     // ! and `not`
    EqEq,     // ==
    NotEq,    // !=
    Lt,       // <
    Gt,       // >
    LtEq,     // <=
    GtEq,     // >=
    AndAnd,   // && and `and`
    OrOr,     // || and `or`
    Amp,      // &
    Pipe,     // |
    Dot,      // .
    Comma,    // ,
    LParen,   // (
    RParen,   // )
    LBracket, // [
    RBracket, // ]
}

impl TokenKind {
    /// Canonical spelling, used in diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            TokenKind::Eof => "EOF",
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Str => "STRING",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::Elif => "elif",
            TokenKind::Then => "then",
            TokenKind::End => "end",
            TokenKind::While => "while",
            TokenKind::Fn => "fn",
            TokenKind::Return => "return",
            TokenKind::Test => "test",
            TokenKind::Class => "class",
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::Bang => "!",
            TokenKind::EqEq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::LtEq => "<=",
            TokenKind::GtEq => ">=",
            TokenKind::AndAnd => "&&",
            TokenKind::OrOr => "||",
            TokenKind::Amp => "&",
            TokenKind::Pipe => "|",
            TokenKind::Dot => ".",
            TokenKind::Comma => ",",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
        }
    }

    /// Map an identifier-shaped lexeme to its keyword kind.
    ///
    /// `and`, `or` and `not` are spellings of `&&`, `||` and `!`.
    pub fn keyword(text: &str) -> Option<TokenKind> {
        let kind = match text {
            "if" => TokenKind::If,
            "else" => TokenKind::Else,
            "elif" => TokenKind::Elif,
            "then" => TokenKind::Then,
            "end" => TokenKind::End,
            "while" => TokenKind::While,
            "fn" => TokenKind::Fn,
            "return" => TokenKind::Return,
            "test" => TokenKind::Test,
            "class" => TokenKind::Class,
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            "and" => TokenKind::AndAnd,
            "or" => TokenKind::OrOr,
            "not" => TokenKind::Bang,
            _ => return None,
        };
        Some(kind)
    }

    /// True for the words that close a block.
    pub const fn is_block_terminator(self) -> bool {
        matches!(self, TokenKind::End | TokenKind::Else | TokenKind::Elif)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
