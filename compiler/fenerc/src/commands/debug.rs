//! Debug commands: `parse` and `lex` for inspecting the front end.

use fener_ir::Stmt;
use fener_lexer::tokenize;

use crate::{parse_source, CliError};

/// Parse a file and display the syntax tree.
pub fn parse_file(path: &str) -> Result<(), CliError> {
    let source = CliError::read(path)?;
    let output = parse_source(&source);
    let program = &output.program;

    let count = |pred: fn(&Stmt) -> bool| program.statements.iter().filter(|s| pred(s)).count();

    println!("Parse result for '{path}':");
    println!("  Statements: {}", program.len());
    println!("  Functions: {}", count(|s| matches!(s, Stmt::Function(_))));
    println!("  Classes: {}", count(|s| matches!(s, Stmt::Class(_))));
    println!("  Tests: {}", count(|s| matches!(s, Stmt::Test(_))));
    println!("  Errors: {}", output.errors.len());

    if !program.is_empty() {
        println!();
        println!("{program:#?}");
    }

    if !output.errors.is_empty() {
        println!();
        println!("Errors:");
        for error in &output.errors {
            println!("  [{}] {error}", error.code());
        }
    }
    Ok(())
}

/// Lex a file and display the token stream.
pub fn lex_file(path: &str) -> Result<(), CliError> {
    let source = CliError::read(path)?;
    let tokens = tokenize(&source);

    println!("Tokens for '{}' ({} tokens):", path, tokens.len());
    for token in &tokens {
        println!("  {:?} {:?} @ line {}", token.kind, token.text, token.line);
    }
    Ok(())
}
