//! Calls of functions, builtins and classes.

use std::rc::Rc;

use fener_ir::CallExpression;
use fener_stack::ensure_sufficient_stack;

use super::{Evaluator, Flow, Unwind};
use crate::errors::{call_depth_exceeded, not_callable, wrong_arg_count};
use crate::{BuiltinContext, Environment, FunctionValue, InstanceValue, Value};

impl Evaluator {
    /// Callee first, then arguments left to right, all in the caller's scope.
    pub(super) fn eval_call(&mut self, call: &CallExpression, env: &Environment) -> Flow {
        let callee = self.eval_expr(&call.callee, env)?;
        let mut args = Vec::with_capacity(call.arguments.len());
        for arg in &call.arguments {
            args.push(self.eval_expr(arg, env)?);
        }
        self.apply(&callee, &args)
    }

    pub(super) fn apply(&mut self, callee: &Value, args: &[Value]) -> Flow {
        match callee {
            Value::Function(function) => self.call_function(function, args),
            Value::Builtin(builtin) => {
                let ctx = BuiltinContext::new(&self.print);
                Ok((builtin.func)(&ctx, args)?)
            }
            // No constructor: a class call only allocates the instance.
            Value::Class(class) => {
                if !args.is_empty() {
                    return Err(wrong_arg_count(0, args.len()).into());
                }
                Ok(Value::Instance(InstanceValue::new(Rc::clone(class))))
            }
            other => Err(not_callable(other).into()),
        }
    }

    #[tracing::instrument(level = "debug", skip_all, fields(arity = function.arity()))]
    fn call_function(&mut self, function: &FunctionValue, args: &[Value]) -> Flow {
        if function.arity() != args.len() {
            return Err(wrong_arg_count(function.arity(), args.len()).into());
        }
        if let Some(limit) = self.max_call_depth {
            if self.call_depth >= limit {
                return Err(call_depth_exceeded(limit).into());
            }
        }

        let call_env = Environment::enclosed(&function.env);
        for (param, arg) in function.parameters().zip(args) {
            call_env.define(param, arg.clone());
        }

        self.call_depth += 1;
        let result = ensure_sufficient_stack(|| self.eval_block(&function.literal.body, &call_env));
        self.call_depth -= 1;

        match result {
            Ok(value) | Err(Unwind::Return(value)) => Ok(value),
            Err(err) => Err(err),
        }
    }
}
