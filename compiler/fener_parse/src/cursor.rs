//! Token cursor over a pull-based stream.
//!
//! Holds the current token and one token of lookahead. Counts consumed
//! tokens so callers can tell whether a failed parse made progress.

use std::mem;

use fener_ir::{Line, Token, TokenKind, TokenStream};

pub struct Cursor<S> {
    stream: S,
    current: Token,
    peek: Token,
    consumed: usize,
    /// Line of the last consumed token.
    previous_line: Line,
}

impl<S: TokenStream> Cursor<S> {
    pub fn new(mut stream: S) -> Self {
        let current = stream.next_token();
        let peek = stream.next_token();
        let previous_line = current.line;
        Cursor {
            stream,
            current,
            peek,
            consumed: 0,
            previous_line,
        }
    }

    #[inline]
    pub fn current(&self) -> &Token {
        &self.current
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current.kind
    }

    #[inline]
    pub fn peek_kind(&self) -> TokenKind {
        self.peek.kind
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current.kind == TokenKind::Eof
    }

    /// Whether the current token sits on a later line than the one before it.
    #[inline]
    pub fn on_new_line(&self) -> bool {
        self.current.line > self.previous_line
    }

    /// Number of tokens consumed so far.
    ///
    /// Compare before and after a parse attempt to detect a stall.
    #[inline]
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Consume the current token and return it.
    ///
    /// At end of input this returns another `Eof` and does not count as
    /// progress.
    pub fn advance(&mut self) -> Token {
        if self.is_at_end() {
            return self.current.clone();
        }
        let next = self.stream.next_token();
        let previous = mem::replace(&mut self.current, mem::replace(&mut self.peek, next));
        self.previous_line = previous.line;
        self.consumed += 1;
        tracing::trace!(
            kind = ?self.current.kind,
            line = self.current.line,
            "advance"
        );
        previous
    }
}
