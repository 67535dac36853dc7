use std::rc::Rc;

use fener_ir::{AssignTarget, Expr, Stmt};
use pretty_assertions::assert_eq;

use super::{parse_source, render};

fn single_statement(source: &str) -> Stmt {
    let output = parse_source(source);
    assert!(!output.has_errors(), "{:?}", output.error_messages());
    assert_eq!(output.program.len(), 1, "expected one statement in {source:?}");
    output.program.statements.into_iter().next().unwrap()
}

#[test]
fn test_if_with_elif_chain_keeps_order() {
    let stmt = single_statement("if 2 != 2 then elif 2 == 3 then 7 elif x then 8 else 9 end");
    let Some(Expr::If(if_expr)) = stmt.as_expression() else {
        panic!("expected if expression, got {stmt:?}");
    };
    assert!(if_expr.consequence.statements.is_empty());
    let conditions: Vec<String> = if_expr
        .elifs
        .iter()
        .map(|c| c.condition.to_string())
        .collect();
    assert_eq!(conditions, ["(2 == 3)", "x"]);
    assert_eq!(
        if_expr.alternative.as_ref().map(|b| b.statements.len()),
        Some(1)
    );
}

#[test]
fn test_if_without_else() {
    let stmt = single_statement("if 2 == 3 then 5 end");
    let Some(Expr::If(if_expr)) = stmt.as_expression() else {
        panic!("expected if expression");
    };
    assert!(if_expr.elifs.is_empty());
    assert!(if_expr.alternative.is_none());
}

#[test]
fn test_while_statement() {
    let stmt = single_statement("while i < 10 then i = i + 1 end");
    let Stmt::While(while_stmt) = stmt else {
        panic!("expected while statement");
    };
    assert_eq!(while_stmt.condition.to_string(), "(i < 10)");
    assert_eq!(while_stmt.body.statements.len(), 1);
}

#[test]
fn test_function_statement() {
    let stmt = single_statement("fn add(a, b) return a + b end");
    let Stmt::Function(func) = stmt else {
        panic!("expected function statement");
    };
    assert_eq!(func.name.as_str(), "add");
    let params: Vec<&str> = func.literal.parameters.iter().map(|p| p.as_str()).collect();
    assert_eq!(params, ["a", "b"]);
    assert_eq!(func.literal.arity(), 2);
    assert!(matches!(func.literal.body.statements[0], Stmt::Return(_)));
}

#[test]
fn test_function_without_parameters() {
    assert_eq!(render("fn zero() 0 end"), "fn zero()\n0\nend");
}

#[test]
fn test_nested_closure_program() {
    let output =
        parse_source("fn counter() count = 0 return fn() count = count + 1 end end c = counter() c()");
    assert!(!output.has_errors(), "{:?}", output.error_messages());
    assert_eq!(output.program.len(), 3);
    assert_eq!(
        output.program.statements[0].to_string(),
        "fn counter()\ncount = 0\nreturn fn()\ncount = (count + 1)\nend\nend"
    );
}

#[test]
fn test_lambda_shares_literal() {
    let stmt = single_statement("f = fn(x) x end");
    let Some(Expr::Assignment(assign)) = stmt.as_expression() else {
        panic!("expected assignment");
    };
    let Expr::Lambda(lambda) = &assign.value else {
        panic!("expected lambda value");
    };
    let shared = Rc::clone(&lambda.literal);
    assert_eq!(Rc::strong_count(&shared), 2);
    assert!(matches!(assign.target, AssignTarget::Identifier(_)));
}

#[test]
fn test_class_statement() {
    let stmt = single_statement("class Point fn x() 1 end fn y() 2 end end");
    let Stmt::Class(class) = stmt else {
        panic!("expected class statement");
    };
    assert_eq!(class.name.as_str(), "Point");
    let names: Vec<&str> = class.methods.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["x", "y"]);
}

#[test]
fn test_empty_class() {
    assert_eq!(render("class Empty end"), "class Empty\nend");
}

#[test]
fn test_test_statement() {
    let stmt = single_statement("test \"adds numbers\" assert(1 + 1 == 2) end");
    let Stmt::Test(test) = stmt else {
        panic!("expected test statement");
    };
    assert_eq!(test.label, "adds numbers");
    assert_eq!(test.body.statements.len(), 1);
}

#[test]
fn test_return_statement() {
    assert_eq!(render("return 5 * 2"), "return (5 * 2)");
}

#[test]
fn test_tokens_carry_lines() {
    let output = parse_source("a = 1\n\nb = 2");
    assert_eq!(output.program.statements[1].token().line, 3);
}

#[test]
fn test_paren_on_a_new_line_starts_a_statement() {
    let output = parse_source("f\n(!0)");
    assert!(!output.has_errors());
    assert_eq!(output.program.len(), 2);
    assert_eq!(render("f\n(!0)"), "f\n(!0)");
}

#[test]
fn test_bracket_on_a_new_line_starts_a_statement() {
    assert_eq!(render("xs\n[1, 2]"), "xs\n[1, 2]");
    assert_eq!(render("xs[1]\nys\n[0]"), "(xs[1])\nys\n[0]");
}

#[test]
fn test_call_and_index_on_the_same_line_still_chain() {
    assert_eq!(render("f (1)"), "f(1)");
    assert_eq!(render("f(1,\n2)"), "f(1, 2)");
    assert_eq!(render("fn(x)\nx\nend(5)"), "fn(x)\nx\nend(5)");
}

#[test]
fn test_program_rendering_reparses_statement_by_statement() {
    let source = "f = fn(x) 10 end\nf\n!0\n(-1)\na.b\nxs[0]\n(1 + 2) * 3\nif 1 then 2 end\n[3]";
    let first = render(source);
    assert_eq!(parse_source(&first).program.len(), 9);
    assert_eq!(render(&first), first);
}
