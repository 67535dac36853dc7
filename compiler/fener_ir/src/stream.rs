//! Pull-based token streams.

use std::collections::VecDeque;

use crate::{Line, Token, TokenKind};

/// A lazy source of tokens.
///
/// After the input is exhausted, implementations keep returning an
/// end-of-stream token from every call.
pub trait TokenStream {
    fn next_token(&mut self) -> Token;
}

impl<S: TokenStream + ?Sized> TokenStream for &mut S {
    fn next_token(&mut self) -> Token {
        (**self).next_token()
    }
}

impl<S: TokenStream + ?Sized> TokenStream for Box<S> {
    fn next_token(&mut self) -> Token {
        (**self).next_token()
    }
}

/// A `TokenStream` over tokens that were produced up front.
///
/// Any `Eof` tokens in the input are dropped; the list yields its own
/// end-of-stream marker on the last seen line once drained.
#[derive(Clone, Debug, Default)]
pub struct TokenList {
    tokens: VecDeque<Token>,
    last_line: Line,
}

impl TokenList {
    pub fn new(tokens: impl IntoIterator<Item = Token>) -> Self {
        let tokens: VecDeque<Token> = tokens
            .into_iter()
            .filter(|t| t.kind != TokenKind::Eof)
            .collect();
        let last_line = tokens.back().map_or(1, |t| t.line);
        TokenList { tokens, last_line }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl TokenStream for TokenList {
    fn next_token(&mut self) -> Token {
        self.tokens
            .pop_front()
            .unwrap_or_else(|| Token::eof(self.last_line))
    }
}

impl FromIterator<Token> for TokenList {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        TokenList::new(iter)
    }
}
