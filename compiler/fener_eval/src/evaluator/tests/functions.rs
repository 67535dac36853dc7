use pretty_assertions::assert_eq;

use super::{eval, parse_program, run, run_with};
use crate::{evaluate, Environment, Evaluator, Value};

const COUNTER: &str = "
    fn counter()
        count = 0
        return fn()
            count = count + 1
        end
    end
    c = counter()
";

#[test]
fn test_closure_counter_keeps_state() {
    assert_eq!(eval(&format!("{COUNTER} c()")), Value::Integer(1));
    assert_eq!(eval(&format!("{COUNTER} c() c()")), Value::Integer(2));
}

#[test]
fn test_each_closure_has_its_own_state() {
    let source = format!("{COUNTER} d = counter() c() c() d()");
    assert_eq!(eval(&source), Value::Integer(1));
}

#[test]
fn test_function_statement_yields_null() {
    assert_eq!(eval("fn f() 1 end"), Value::Null);
}

#[test]
fn test_implicit_and_explicit_return() {
    assert_eq!(eval("fn f(a, b) a * b end f(3, 4)"), Value::Integer(12));
    assert_eq!(
        eval("fn f(a) if a then return 1 end 2 end f(1) + f(0)"),
        Value::Integer(3)
    );
}

#[test]
fn test_return_unwinds_out_of_while() {
    let source = "
        fn first_over(limit)
            i = 0
            while 1 then
                if i > limit then
                    return i
                end
                i = i + 1
            end
        end
        first_over(3)
    ";
    assert_eq!(eval(source), Value::Integer(4));
}

#[test]
fn test_recursion() {
    let source = "
        fn fib(n)
            if n < 2 then
                return n
            end
            return fib(n - 1) + fib(n - 2)
        end
        fib(15)
    ";
    assert_eq!(eval(source), Value::Integer(610));
}

#[test]
fn test_deep_recursion_grows_the_stack() {
    let source = "
        fn down(n)
            if n == 0 then
                return 0
            end
            return down(n - 1)
        end
        down(5000)
    ";
    assert_eq!(eval(source), Value::Integer(0));
}

#[test]
fn test_parameters_shadow_outer_names() {
    assert_eq!(eval("x = 1 fn f(x) x end f(5) + x"), Value::Integer(6));
}

#[test]
fn test_assignment_inside_function_rebinds_outer() {
    assert_eq!(eval("total = 1 fn bump() total = total + 1 end bump() total"), Value::Integer(2));
}

#[test]
fn test_fresh_names_stay_local_to_the_call() {
    let run = run("fn f() inner = 1 end f() inner");
    assert_eq!(run.value, Value::Null);
    assert_eq!(run.errors, ["Identifier not found: inner"]);
}

#[test]
fn test_lambdas_are_values() {
    assert_eq!(eval("apply = fn(f, x) f(x) end apply(fn(n) n + 1 end, 41)"), Value::Integer(42));
    assert_eq!(eval("fn(a) a end").to_string(), "fn(a)");
}

#[test]
fn test_arguments_evaluate_left_to_right() {
    let run = run(r#"fn pair(a, b) a end pair(print("a"), print("b"))"#);
    assert_eq!(run.output, "a\nb\n");
}

#[test]
fn test_call_depth_limit() {
    let run = run_with(
        "fn forever(n) forever(n + 1) end forever(0) 7",
        Evaluator::builder().max_call_depth(50),
    );
    assert_eq!(run.value, Value::Integer(7));
    assert_eq!(run.errors, ["Maximum call depth of 50 exceeded"]);
}

#[test]
fn test_call_value_from_host() {
    let program = parse_program("fn add(a, b) a + b end");
    let env = Environment::with_builtins();
    let mut evaluator = Evaluator::new();
    evaluator.eval_program(&program, &env).unwrap();

    let add = env.get("add").unwrap();
    let sum = evaluator
        .call_value(&add, &[Value::Integer(2), Value::Integer(3)])
        .unwrap();
    assert_eq!(sum, Value::Integer(5));
}

#[test]
fn test_evaluate_reports_through_callback() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let program = parse_program("missing 3");

    let value = evaluate(&program, &Environment::with_builtins(), move |err| {
        sink.borrow_mut().push(err.message.clone());
    });

    assert_eq!(value, Value::Integer(3));
    assert_eq!(*seen.borrow(), ["Identifier not found: missing"]);
}
