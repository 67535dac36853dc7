//! Token sets for block termination and error recovery.

use fener_ir::{TokenKind, TokenStream};

use crate::cursor::Cursor;

/// A set of token kinds, one bit per kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TokenSet(u64);

impl TokenSet {
    pub const fn new() -> Self {
        Self(0)
    }

    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | Self::bit(kind))
    }

    #[inline]
    pub const fn contains(self, kind: TokenKind) -> bool {
        self.0 & Self::bit(kind) != 0
    }

    const fn bit(kind: TokenKind) -> u64 {
        1u64 << (kind as u32)
    }
}

/// Bodies of `while`, `fn`, `class`, `test` and `else` end at `end`.
pub const BLOCK_END: TokenSet = TokenSet::new().with(TokenKind::End);

/// `if` and `elif` arms may also be closed by the next arm.
pub const IF_BRANCH: TokenSet = TokenSet::new()
    .with(TokenKind::End)
    .with(TokenKind::Elif)
    .with(TokenKind::Else);

/// Where to resume inside a class body after a stray token.
pub const CLASS_MEMBER: TokenSet = TokenSet::new()
    .with(TokenKind::Fn)
    .with(TokenKind::End);

/// Skip tokens until one in `recovery` is current.
///
/// Returns `false` if the end of input was reached first.
pub fn synchronize<S: TokenStream>(cursor: &mut Cursor<S>, recovery: TokenSet) -> bool {
    while !cursor.is_at_end() {
        if recovery.contains(cursor.current_kind()) {
            return true;
        }
        cursor.advance();
    }
    false
}
