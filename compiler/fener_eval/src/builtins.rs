//! Native functions bound in the root environment.

use crate::errors::{assertion_failed, wrong_arg_count, wrong_arg_count_range, wrong_arg_type};
use crate::{EvalResult, SharedPrintHandler, Value};

/// What a builtin may reach besides its arguments.
pub struct BuiltinContext<'a> {
    print: &'a SharedPrintHandler,
}

impl<'a> BuiltinContext<'a> {
    pub fn new(print: &'a SharedPrintHandler) -> Self {
        BuiltinContext { print }
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        self.print
    }
}

/// Signature every native function has.
pub type BuiltinFn = fn(&BuiltinContext<'_>, &[Value]) -> EvalResult;

/// Every builtin, by the name it is bound to.
pub const BUILTINS: &[(&str, BuiltinFn)] = &[
    ("print", print),
    ("len", len),
    ("type", type_of),
    ("str", display),
    ("assert", assert_truthy),
    ("push", push),
];

fn expect_args(args: &[Value], count: usize) -> Result<(), crate::EvalError> {
    if args.len() == count {
        Ok(())
    } else {
        Err(wrong_arg_count(count, args.len()))
    }
}

fn usize_to_int(n: usize) -> Value {
    Value::Integer(i64::try_from(n).unwrap_or(i64::MAX))
}

/// One line per argument, in display form.
fn print(ctx: &BuiltinContext<'_>, args: &[Value]) -> EvalResult {
    for arg in args {
        ctx.print_handler().println(&arg.to_string());
    }
    Ok(Value::Null)
}

/// Characters of a string, elements of an array.
fn len(_: &BuiltinContext<'_>, args: &[Value]) -> EvalResult {
    expect_args(args, 1)?;
    match &args[0] {
        Value::String(text) => Ok(usize_to_int(text.chars().count())),
        Value::Array(items) => Ok(usize_to_int(items.len())),
        other => Err(wrong_arg_type("len", "a String or Array", other)),
    }
}

fn type_of(_: &BuiltinContext<'_>, args: &[Value]) -> EvalResult {
    expect_args(args, 1)?;
    Ok(Value::string(args[0].type_name()))
}

fn display(_: &BuiltinContext<'_>, args: &[Value]) -> EvalResult {
    expect_args(args, 1)?;
    Ok(Value::string(args[0].to_string()))
}

/// `assert(cond)` or `assert(cond, message)`.
fn assert_truthy(_: &BuiltinContext<'_>, args: &[Value]) -> EvalResult {
    let (condition, message) = match args {
        [condition] => (condition, None),
        [condition, message] => (condition, Some(message.to_string())),
        _ => return Err(wrong_arg_count_range(1, 2, args.len())),
    };
    if condition.is_truthy() {
        Ok(Value::Null)
    } else {
        Err(assertion_failed(message.as_deref()))
    }
}

/// A new array with `value` appended; the original is left untouched.
fn push(_: &BuiltinContext<'_>, args: &[Value]) -> EvalResult {
    expect_args(args, 2)?;
    let Value::Array(items) = &args[0] else {
        return Err(wrong_arg_type("push", "an Array", &args[0]));
    };
    let mut extended = items.to_vec();
    extended.push(args[1].clone());
    Ok(Value::array(extended))
}
