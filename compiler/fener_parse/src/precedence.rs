//! Binding strength of infix and postfix tokens.

use fener_ir::TokenKind;

/// Operator precedence, lowest first.
///
/// The derived `Ord` follows declaration order, which is what
/// `parse_expression` compares against its minimum.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    Lowest,
    /// `=`
    Assign,
    /// `&& || & |`
    Boolean,
    /// `== !=`
    Equality,
    /// `< > <= >=`
    Comparison,
    /// `+ -`
    Sum,
    /// `* /`
    Product,
    /// `%`
    Modulus,
    /// unary `-` and `!`
    Prefix,
    /// `.`
    Field,
    /// `(`
    Call,
    /// `[`
    Index,
}

impl Precedence {
    /// Precedence of `kind` when it appears after an operand.
    ///
    /// Tokens that cannot continue an expression are `Lowest`, which stops
    /// the climbing loop.
    pub const fn of(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Assign => Precedence::Assign,
            TokenKind::AndAnd | TokenKind::OrOr | TokenKind::Amp | TokenKind::Pipe => {
                Precedence::Boolean
            }
            TokenKind::EqEq | TokenKind::NotEq => Precedence::Equality,
            TokenKind::Lt | TokenKind::Gt | TokenKind::LtEq | TokenKind::GtEq => {
                Precedence::Comparison
            }
            TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
            TokenKind::Star | TokenKind::Slash => Precedence::Product,
            TokenKind::Percent => Precedence::Modulus,
            TokenKind::Dot => Precedence::Field,
            TokenKind::LParen => Precedence::Call,
            TokenKind::LBracket => Precedence::Index,
            _ => Precedence::Lowest,
        }
    }
}
