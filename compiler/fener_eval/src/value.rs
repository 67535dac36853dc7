//! Runtime values.
//!
//! Every value has two textual forms. The display form (`Display`) is what
//! `print` and `str` produce: strings appear raw. The inspect form
//! ([`Value::inspect`]) is what the REPL echoes and what `==` compares:
//! strings appear quoted.

use std::fmt;
use std::mem;
use std::rc::Rc;

use fener_ir::FunctionLiteral;
use rustc_hash::FxHashMap;

use crate::builtins::BuiltinFn;
use crate::{Environment, LocalScope};

/// A runtime value.
#[derive(Clone, Debug)]
pub enum Value {
    Integer(i64),
    String(Rc<str>),
    Boolean(bool),
    Null,
    Array(Rc<[Value]>),
    Function(Rc<FunctionValue>),
    Builtin(BuiltinValue),
    Class(Rc<ClassValue>),
    Instance(InstanceValue),
}

impl Value {
    pub fn string(text: impl AsRef<str>) -> Self {
        Value::String(Rc::from(text.as_ref()))
    }

    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(Rc::from(items))
    }

    /// Kind name, as returned by the `type` builtin.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "Integer",
            Value::String(_) => "String",
            Value::Boolean(_) => "Boolean",
            Value::Null => "Null",
            Value::Array(_) => "Array",
            Value::Function(_) => "Function",
            Value::Builtin(_) => "Builtin",
            Value::Class(_) => "Class",
            Value::Instance(_) => "Instance",
        }
    }

    /// Only nonzero integers and `true` are truthy. Strings, arrays and
    /// every other kind are falsy regardless of content.
    pub const fn is_truthy(&self) -> bool {
        match self {
            Value::Integer(n) => *n != 0,
            Value::Boolean(b) => *b,
            _ => false,
        }
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Language-level `==`: same kind and same inspect form.
    pub fn equals(&self, other: &Value) -> bool {
        mem::discriminant(self) == mem::discriminant(other) && self.inspect() == other.inspect()
    }

    /// Inspect form: like the display form, but strings are quoted.
    pub fn inspect(&self) -> String {
        match self {
            Value::String(text) => format!("\"{text}\""),
            other => other.to_string(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::string(text)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{n}"),
            Value::String(text) => f.write_str(text),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Null => f.write_str("null"),
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str(&item.inspect())?;
                }
                f.write_str("]")
            }
            Value::Function(function) => write!(f, "{function}"),
            Value::Builtin(builtin) => write!(f, "builtin {}", builtin.name),
            Value::Class(class) => write!(f, "Class: {}", class.name),
            Value::Instance(instance) => write!(f, "Instance of {}", instance.class.name),
        }
    }
}

/// A closure: parameters and body plus the environment it was created in.
pub struct FunctionValue {
    /// `None` for lambdas.
    pub name: Option<String>,
    pub literal: Rc<FunctionLiteral>,
    pub env: Environment,
}

impl FunctionValue {
    pub fn named(name: impl Into<String>, literal: Rc<FunctionLiteral>, env: Environment) -> Self {
        FunctionValue {
            name: Some(name.into()),
            literal,
            env,
        }
    }

    pub fn anonymous(literal: Rc<FunctionLiteral>, env: Environment) -> Self {
        FunctionValue {
            name: None,
            literal,
            env,
        }
    }

    pub fn arity(&self) -> usize {
        self.literal.arity()
    }

    pub fn parameters(&self) -> impl Iterator<Item = &str> {
        self.literal.parameters.iter().map(|p| p.as_str())
    }
}

impl fmt::Display for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("fn")?;
        if let Some(name) = &self.name {
            write!(f, " {name}")?;
        }
        f.write_str("(")?;
        for (i, param) in self.parameters().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(param)?;
        }
        f.write_str(")")
    }
}

// The captured environment usually contains the function itself.
impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
            .field("name", &self.name)
            .field("arity", &self.arity())
            .finish_non_exhaustive()
    }
}

/// A native function.
#[derive(Copy, Clone)]
pub struct BuiltinValue {
    pub name: &'static str,
    pub func: BuiltinFn,
}

impl fmt::Debug for BuiltinValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BuiltinValue").field(&self.name).finish()
    }
}

/// A class: a name and its methods in declaration order.
#[derive(Debug)]
pub struct ClassValue {
    pub name: String,
    pub methods: Vec<Rc<FunctionValue>>,
}

impl ClassValue {
    /// Look up a method. A later definition shadows an earlier one.
    pub fn method(&self, name: &str) -> Option<&Rc<FunctionValue>> {
        self.methods
            .iter()
            .rev()
            .find(|m| m.name.as_deref() == Some(name))
    }
}

/// An instance of a class with its own mutable fields.
///
/// Cloning an instance value shares the field map.
#[derive(Clone)]
pub struct InstanceValue {
    pub class: Rc<ClassValue>,
    fields: LocalScope<FxHashMap<String, Value>>,
}

impl InstanceValue {
    pub fn new(class: Rc<ClassValue>) -> Self {
        InstanceValue {
            class,
            fields: LocalScope::new(FxHashMap::default()),
        }
    }

    /// Methods first, then fields.
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(method) = self.class.method(name) {
            return Some(Value::Function(Rc::clone(method)));
        }
        self.fields.borrow().get(name).cloned()
    }

    pub fn set(&self, name: impl Into<String>, value: Value) {
        self.fields.borrow_mut().insert(name.into(), value);
    }
}

impl fmt::Debug for InstanceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.fields.borrow().keys().cloned().collect();
        names.sort_unstable();
        f.debug_struct("InstanceValue")
            .field("class", &self.class.name)
            .field("fields", &names)
            .finish()
    }
}
