//! Infix and prefix operators on already-evaluated operands.
//!
//! Both operands of every infix operator are evaluated before dispatch, so
//! `&&` and `||` do not short-circuit.

use fener_ir::{InfixOp, PrefixOp};

use crate::errors::{cannot_compare, cannot_negate, division_by_zero, invalid_operands, modulo_by_zero};
use crate::{EvalResult, Value};

pub fn evaluate_infix(op: InfixOp, left: &Value, right: &Value) -> EvalResult {
    match op {
        InfixOp::Add | InfixOp::Sub | InfixOp::Mul | InfixOp::Div | InfixOp::Mod => {
            arithmetic(op, left, right)
        }
        InfixOp::Eq => Ok(Value::Boolean(left.equals(right))),
        InfixOp::NotEq => Ok(Value::Boolean(!left.equals(right))),
        InfixOp::Lt | InfixOp::LtEq | InfixOp::Gt | InfixOp::GtEq => compare(op, left, right),
        InfixOp::And => Ok(Value::Boolean(left.is_truthy() && right.is_truthy())),
        InfixOp::Or => Ok(Value::Boolean(left.is_truthy() || right.is_truthy())),
        InfixOp::BitAnd | InfixOp::BitOr => Ok(bitwise(op, left, right)),
    }
}

pub fn evaluate_prefix(op: PrefixOp, operand: &Value) -> EvalResult {
    match op {
        PrefixOp::Neg => match operand {
            Value::Integer(n) => Ok(Value::Integer(n.wrapping_neg())),
            other => Err(cannot_negate(other)),
        },
        PrefixOp::Not => Ok(Value::Boolean(!operand.is_truthy())),
    }
}

fn arithmetic(op: InfixOp, left: &Value, right: &Value) -> EvalResult {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => integer_arithmetic(op, *a, *b),
        (Value::String(a), Value::String(b)) if op == InfixOp::Add => {
            Ok(Value::string(format!("{a}{b}")))
        }
        (Value::Array(a), Value::Array(b)) if op == InfixOp::Add => {
            Ok(Value::array(a.iter().chain(b.iter()).cloned().collect()))
        }
        _ => Err(invalid_operands(op, left, right)),
    }
}

/// Wrapping on overflow; truncating division.
fn integer_arithmetic(op: InfixOp, a: i64, b: i64) -> EvalResult {
    let value = match op {
        InfixOp::Add => a.wrapping_add(b),
        InfixOp::Sub => a.wrapping_sub(b),
        InfixOp::Mul => a.wrapping_mul(b),
        InfixOp::Div if b == 0 => return Err(division_by_zero()),
        InfixOp::Div => a.wrapping_div(b),
        InfixOp::Mod if b == 0 => return Err(modulo_by_zero()),
        InfixOp::Mod => a.wrapping_rem(b),
        _ => return Err(invalid_operands(op, &Value::Integer(a), &Value::Integer(b))),
    };
    Ok(Value::Integer(value))
}

fn compare(op: InfixOp, left: &Value, right: &Value) -> EvalResult {
    let (Value::Integer(a), Value::Integer(b)) = (left, right) else {
        return Err(cannot_compare(left, right));
    };
    let result = match op {
        InfixOp::Lt => a < b,
        InfixOp::LtEq => a <= b,
        InfixOp::Gt => a > b,
        InfixOp::GtEq => a >= b,
        _ => return Err(cannot_compare(left, right)),
    };
    Ok(Value::Boolean(result))
}

/// Bitwise on two integers, truthiness otherwise.
fn bitwise(op: InfixOp, left: &Value, right: &Value) -> Value {
    match (op, left, right) {
        (InfixOp::BitAnd, Value::Integer(a), Value::Integer(b)) => Value::Integer(a & b),
        (InfixOp::BitOr, Value::Integer(a), Value::Integer(b)) => Value::Integer(a | b),
        (InfixOp::BitAnd, _, _) => Value::Boolean(left.is_truthy() && right.is_truthy()),
        _ => Value::Boolean(left.is_truthy() || right.is_truthy()),
    }
}
