//! Expression evaluation.

use std::rc::Rc;

use fener_ir::{AssignTarget, AssignmentExpression, Expr, IfExpression};
use fener_stack::ensure_sufficient_stack;

use super::{Evaluator, Flow, Unwind};
use crate::errors::{
    cannot_access_field, cannot_index, identifier_not_found, index_out_of_bounds,
    no_field_or_method,
};
use crate::{evaluate_infix, evaluate_prefix, Environment, EvalResult, FunctionValue, Value};

impl Evaluator {
    pub(crate) fn eval_expr(&mut self, expr: &Expr, env: &Environment) -> Flow {
        ensure_sufficient_stack(|| self.eval_expr_inner(expr, env))
    }

    fn eval_expr_inner(&mut self, expr: &Expr, env: &Environment) -> Flow {
        match expr {
            Expr::Integer(lit) => Ok(Value::Integer(lit.value)),
            Expr::String(lit) => Ok(Value::string(&lit.value)),
            Expr::Boolean(lit) => Ok(Value::Boolean(lit.value)),
            Expr::Identifier(ident) => env
                .get(ident.as_str())
                .ok_or_else(|| Unwind::from(identifier_not_found(ident.as_str()))),
            Expr::Assignment(assign) => self.eval_assignment(assign, env),
            Expr::Infix(infix) => {
                let left = self.eval_expr(&infix.left, env)?;
                let right = self.eval_expr(&infix.right, env)?;
                Ok(evaluate_infix(infix.op, &left, &right)?)
            }
            Expr::Prefix(prefix) => {
                let operand = self.eval_expr(&prefix.right, env)?;
                Ok(evaluate_prefix(prefix.op, &operand)?)
            }
            Expr::Call(call) => self.eval_call(call, env),
            Expr::Index(index) => {
                let target = self.eval_expr(&index.left, env)?;
                let position = self.eval_expr(&index.index, env)?;
                Ok(index_value(&target, &position)?)
            }
            Expr::Field(field) => {
                let target = self.eval_expr(&field.target, env)?;
                Ok(read_field(&target, field.field.as_str())?)
            }
            Expr::Array(array) => {
                let mut items = Vec::with_capacity(array.elements.len());
                for element in &array.elements {
                    items.push(self.eval_expr(element, env)?);
                }
                Ok(Value::array(items))
            }
            Expr::If(if_expr) => self.eval_if(if_expr, env),
            Expr::Lambda(lambda) => {
                let function = FunctionValue::anonymous(Rc::clone(&lambda.literal), env.clone());
                Ok(Value::Function(Rc::new(function)))
            }
        }
    }

    /// The value is evaluated before the target.
    fn eval_assignment(&mut self, assign: &AssignmentExpression, env: &Environment) -> Flow {
        let value = self.eval_expr(&assign.value, env)?;
        match &assign.target {
            AssignTarget::Identifier(ident) => env.assign(ident.as_str(), value.clone()),
            AssignTarget::Field(field) => {
                let target = self.eval_expr(&field.target, env)?;
                let Value::Instance(instance) = &target else {
                    return Err(cannot_access_field(&target).into());
                };
                instance.set(field.field.as_str(), value.clone());
            }
        }
        Ok(value)
    }

    fn eval_if(&mut self, expr: &IfExpression, env: &Environment) -> Flow {
        if self.eval_expr(&expr.condition, env)?.is_truthy() {
            return self.eval_block(&expr.consequence, env);
        }
        for clause in &expr.elifs {
            if self.eval_expr(&clause.condition, env)?.is_truthy() {
                return self.eval_block(&clause.block, env);
            }
        }
        match &expr.alternative {
            Some(block) => self.eval_block(block, env),
            None => Ok(Value::Null),
        }
    }
}

/// `array[i]` or `string[i]`; `i` must be a non-negative in-range integer.
fn index_value(target: &Value, index: &Value) -> EvalResult {
    let Value::Integer(i) = index else {
        return Err(cannot_index(target, index));
    };
    let position = usize::try_from(*i).ok();
    match target {
        Value::Array(items) => position
            .and_then(|p| items.get(p))
            .cloned()
            .ok_or_else(|| index_out_of_bounds(*i, items.len())),
        Value::String(text) => position
            .and_then(|p| text.chars().nth(p))
            .map(|c| Value::string(c.to_string()))
            .ok_or_else(|| index_out_of_bounds(*i, text.chars().count())),
        other => Err(cannot_index(other, index)),
    }
}

fn read_field(target: &Value, name: &str) -> EvalResult {
    let Value::Instance(instance) = target else {
        return Err(cannot_access_field(target));
    };
    instance
        .get(name)
        .ok_or_else(|| no_field_or_method(name, &instance.class.name))
}
