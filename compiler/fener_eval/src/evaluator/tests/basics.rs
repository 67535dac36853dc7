use pretty_assertions::assert_eq;

use super::{eval, run};
use crate::Value;

#[test]
fn test_integer_arithmetic_with_precedence() {
    assert_eq!(eval("(5 + 10 * 2 + 15 / 3) * 2 + -10"), Value::Integer(50));
    assert_eq!(eval("7 % 4 * 2"), Value::Integer(6));
    assert_eq!(eval("-7 / 2"), Value::Integer(-3));
}

#[test]
fn test_assignments_in_one_scope() {
    assert_eq!(eval("a = 5 b = 3 c = 6 a+b+6"), Value::Integer(14));
    assert_eq!(eval("a = 1 a = a + 1 a"), Value::Integer(2));
}

#[test]
fn test_assignment_yields_value_and_chains() {
    assert_eq!(eval("a = b = 4 a + b"), Value::Integer(8));
    assert_eq!(eval("x = 3"), Value::Integer(3));
}

#[test]
fn test_if_elif_else() {
    assert_eq!(
        eval("if 2 != 2 then elif 2 == 3 then 7 else 9 end"),
        Value::Integer(9)
    );
    assert_eq!(eval("if 2 == 3 then 5 end"), Value::Null);
    assert_eq!(eval("if 1 < 2 then 5 else 6 end"), Value::Integer(5));
    assert_eq!(
        eval("x = 2 if x == 1 then 10 elif x == 2 then 20 elif x == 2 then 30 end"),
        Value::Integer(20)
    );
}

#[test]
fn test_if_is_an_expression() {
    assert_eq!(eval("y = if 1 then 4 else 5 end y * 2"), Value::Integer(8));
}

#[test]
fn test_empty_branch_yields_null() {
    assert_eq!(eval("if 1 then end"), Value::Null);
}

#[test]
fn test_truthiness_in_conditions() {
    assert_eq!(eval("!5"), Value::Boolean(false));
    assert_eq!(eval("!(5-5)"), Value::Boolean(true));
    assert_eq!(eval("not 0"), Value::Boolean(true));
    assert_eq!(eval(r#"if "text" then 1 else 2 end"#), Value::Integer(2));
    assert_eq!(eval("if [1] then 1 else 2 end"), Value::Integer(2));
}

#[test]
fn test_while_loop() {
    let source = "
        i = 0
        total = 0
        while i < 5 then
            total = total + i
            i = i + 1
        end
        total
    ";
    assert_eq!(eval(source), Value::Integer(10));
}

#[test]
fn test_while_yields_null() {
    assert_eq!(eval("while 0 then 1 end"), Value::Null);
}

#[test]
fn test_logical_operators_evaluate_both_sides() {
    let run = run(r#"0 and print("right side")"#);
    assert_eq!(run.value, Value::Boolean(false));
    assert_eq!(run.output, "right side\n");

    assert_eq!(eval("1 or 0"), Value::Boolean(true));
    assert_eq!(eval("true && 2"), Value::Boolean(true));
}

#[test]
fn test_comparisons() {
    assert_eq!(eval("1 <= 1"), Value::Boolean(true));
    assert_eq!(eval("3 > 4"), Value::Boolean(false));
    assert_eq!(eval(r#""a" == "a""#), Value::Boolean(true));
    assert_eq!(eval(r#"1 == "1""#), Value::Boolean(false));
    assert_eq!(eval("true != false"), Value::Boolean(true));
}

#[test]
fn test_bitwise_operators() {
    assert_eq!(eval("6 & 3"), Value::Integer(2));
    assert_eq!(eval("6 | 3"), Value::Integer(7));
    assert_eq!(eval("true & false"), Value::Boolean(false));
}

#[test]
fn test_strings_and_arrays() {
    assert_eq!(eval(r#""fen" + "er""#), Value::string("fener"));
    assert_eq!(eval("[1, 2, 3][1]"), Value::Integer(2));
    assert_eq!(eval(r#""abc"[2]"#), Value::string("c"));
    assert_eq!(eval("a = [1] + [2] len(a)"), Value::Integer(2));
    assert_eq!(eval("a = push([1], 5) a[1]"), Value::Integer(5));
}

#[test]
fn test_print_uses_display_form() {
    let run = run(r#"print("hi", 1, true) print([1, "a"])"#);
    assert!(run.errors.is_empty());
    assert_eq!(run.output, "hi\n1\ntrue\n[1, \"a\"]\n");
    assert_eq!(run.value, Value::Null);
}

#[test]
fn test_type_and_str_builtins() {
    assert_eq!(eval("type(1)"), Value::string("Integer"));
    assert_eq!(eval(r#"str(12) + "!""#), Value::string("12!"));
}

#[test]
fn test_top_level_return_ends_program() {
    let run = run(r#"print("before") return 2 print("after")"#);
    assert_eq!(run.value, Value::Integer(2));
    assert_eq!(run.output, "before\n");
}

#[test]
fn test_empty_program_is_null() {
    assert_eq!(eval(""), Value::Null);
}
