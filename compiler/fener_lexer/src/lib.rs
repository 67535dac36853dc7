//! Lexer for fener using logos.
//!
//! [`Lexer`] is a pull-based [`TokenStream`]: the parser asks for one token
//! at a time and the lexer scans just far enough to produce it. After the
//! input runs out every call yields `Eof`.
//!
//! Whitespace and `;;` line comments are skipped. A lone `;`, an
//! unterminated string, and any unknown character come through as
//! `Illegal` tokens so the parser can report them in context.

mod raw_token;

use fener_ir::{Line, Token, TokenKind, TokenStream};
use logos::Logos;

use raw_token::RawToken;

/// Streaming lexer over a source string.
pub struct Lexer<'src> {
    raw: logos::Lexer<'src, RawToken>,
    line: Line,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Lexer {
            raw: RawToken::lexer(source),
            line: 1,
        }
    }

    /// Line the lexer is currently on.
    pub fn line(&self) -> Line {
        self.line
    }
}

impl TokenStream for Lexer<'_> {
    fn next_token(&mut self) -> Token {
        loop {
            let Some(result) = self.raw.next() else {
                return Token::eof(self.line);
            };
            let slice = self.raw.slice();
            let line = self.line;

            let kind = match result {
                Ok(RawToken::Newline) => {
                    self.line += 1;
                    continue;
                }
                Ok(RawToken::Comment) => continue,
                Ok(raw) => convert(raw, slice),
                Err(()) => TokenKind::Illegal,
            };

            let text = match kind {
                TokenKind::Str => slice[1..slice.len() - 1].to_string(),
                _ => slice.to_string(),
            };

            // Strings may span lines; the token keeps its starting line.
            self.line += newline_count(slice);
            return Token::new(kind, text, line);
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Like [`TokenStream::next_token`], but ends at `Eof`.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (token.kind != TokenKind::Eof).then_some(token)
    }
}

/// Lex the whole source up front, including the trailing `Eof`.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens: Vec<Token> = lexer.by_ref().collect();
    tokens.push(Token::eof(lexer.line()));
    tokens
}

fn newline_count(slice: &str) -> Line {
    let count = slice.bytes().filter(|&b| b == b'\n').count();
    Line::try_from(count).unwrap_or(Line::MAX)
}

fn convert(raw: RawToken, slice: &str) -> TokenKind {
    match raw {
        RawToken::Ident => TokenKind::keyword(slice).unwrap_or(TokenKind::Ident),
        RawToken::Int => TokenKind::Int,
        RawToken::Str => TokenKind::Str,
        RawToken::UnterminatedStr | RawToken::Semicolon => TokenKind::Illegal,
        RawToken::Assign => TokenKind::Assign,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Percent => TokenKind::Percent,
        RawToken::Bang => TokenKind::Bang,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Gt => TokenKind::Gt,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::AndAnd => TokenKind::AndAnd,
        RawToken::OrOr => TokenKind::OrOr,
        RawToken::Amp => TokenKind::Amp,
        RawToken::Pipe => TokenKind::Pipe,
        RawToken::Dot => TokenKind::Dot,
        RawToken::Comma => TokenKind::Comma,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        // Trivia is consumed in `next_token` before conversion.
        RawToken::Newline | RawToken::Comment => TokenKind::Illegal,
    }
}
