//! Parser tests.
//!
//! - `expressions`: precedence, associativity and postfix chains
//! - `statements`: keyword statements and block shapes
//! - `recovery`: error accumulation and resynchronization
//! - `properties`: proptest round-trips over generated expressions

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]

mod properties;
mod statements;

use fener_lexer::Lexer;

use crate::{parse, ParseOutput};

fn parse_source(source: &str) -> ParseOutput {
    parse(Lexer::new(source))
}

/// Parse `source`, fail on any error, and return the canonical rendering.
fn render(source: &str) -> String {
    let output = parse_source(source);
    assert!(
        !output.has_errors(),
        "unexpected errors for {source:?}: {:?}",
        output.error_messages()
    );
    output.program.to_string()
}
