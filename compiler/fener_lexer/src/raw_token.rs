//! Raw logos token definitions.
//!
//! Keywords are not listed here: they scan as `Ident` and are classified by
//! `TokenKind::keyword` afterwards.

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r]+")]
pub(crate) enum RawToken {
    #[token("\n")]
    Newline,
    #[regex(r";;[^\n]*")]
    Comment,

    #[regex(r"[a-zA-Z_]+")]
    Ident,
    #[regex(r"[0-9]+")]
    Int,
    #[regex(r#""[^"]*""#)]
    Str,
    #[regex(r#""[^"]*"#)]
    UnterminatedStr,

    #[token(";")]
    Semicolon,
    #[token("=")]
    Assign,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("!")]
    Bang,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("<=")]
    LtEq,
    #[token(">=")]
    GtEq,
    #[token("&&")]
    AndAnd,
    #[token("||")]
    OrOr,
    #[token("&")]
    Amp,
    #[token("|")]
    Pipe,
    #[token(".")]
    Dot,
    #[token(",")]
    Comma,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
}
