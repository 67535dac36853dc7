use proptest::prelude::*;

use super::render;
use crate::Precedence;
use fener_ir::TokenKind;

const OPERATORS: &[(&str, TokenKind)] = &[
    ("+", TokenKind::Plus),
    ("-", TokenKind::Minus),
    ("*", TokenKind::Star),
    ("/", TokenKind::Slash),
    ("%", TokenKind::Percent),
    ("==", TokenKind::EqEq),
    ("!=", TokenKind::NotEq),
    ("<", TokenKind::Lt),
    (">", TokenKind::Gt),
    ("<=", TokenKind::LtEq),
    (">=", TokenKind::GtEq),
    ("&&", TokenKind::AndAnd),
    ("||", TokenKind::OrOr),
    ("&", TokenKind::Amp),
    ("|", TokenKind::Pipe),
];

fn operator() -> impl Strategy<Value = (&'static str, TokenKind)> {
    prop::sample::select(OPERATORS)
}

fn operand() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-e]".prop_map(String::from),
        (0i64..1000).prop_map(|n| n.to_string()),
    ]
}

/// Source text already in canonical, fully parenthesized form.
fn canonical_expression() -> impl Strategy<Value = String> {
    operand().prop_recursive(4, 32, 3, |inner| {
        prop_oneof![
            (inner.clone(), operator(), inner.clone())
                .prop_map(|(l, (op, _), r)| format!("({l} {op} {r})")),
            inner.clone().prop_map(|e| format!("(-{e})")),
            inner.clone().prop_map(|e| format!("(!{e})")),
            (inner.clone(), inner.clone()).prop_map(|(l, i)| format!("({l}[{i}])")),
            prop::collection::vec(inner, 0..3).prop_map(|args| format!("f({})", args.join(", "))),
        ]
    })
}

proptest! {
    #[test]
    fn canonical_rendering_is_a_fixed_point(source in canonical_expression()) {
        prop_assert_eq!(render(&source), source);
    }

    #[test]
    fn statements_on_separate_lines_stay_separate(
        sources in prop::collection::vec(canonical_expression(), 1..5),
    ) {
        let program = sources.join("\n");
        prop_assert_eq!(render(&program), program);
    }

    #[test]
    fn two_operators_group_by_precedence(
        a in operand(),
        b in operand(),
        c in operand(),
        (op1, k1) in operator(),
        (op2, k2) in operator(),
    ) {
        let source = format!("{a} {op1} {b} {op2} {c}");
        let expected = if Precedence::of(k2) > Precedence::of(k1) {
            format!("({a} {op1} ({b} {op2} {c}))")
        } else {
            format!("(({a} {op1} {b}) {op2} {c})")
        };
        prop_assert_eq!(render(&source), expected);
    }
}
