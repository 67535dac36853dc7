//! Lexical environments.
//!
//! An [`Environment`] is a handle to one scope in a parent chain. Handles
//! are cheap to clone and clones share the scope: a function value keeps
//! the handle it was created under, and every call of it opens a fresh
//! child scope of that handle.

use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::builtins::BUILTINS;
use crate::{BuiltinValue, Value};

/// Single-threaded shared mutable cell.
///
/// All scope and instance-field allocations go through
/// [`LocalScope::new`]. Values built on it are `!Send`; each evaluator
/// stays on the thread that created it.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    /// Whether both handles point at the same cell.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Bindings of one scope plus the scope it is nested in.
#[derive(Default)]
pub struct Scope {
    bindings: FxHashMap<String, Value>,
    parent: Option<Environment>,
}

/// Handle to a scope and, through it, every enclosing scope.
#[derive(Clone)]
pub struct Environment {
    scope: LocalScope<Scope>,
}

impl Environment {
    /// An empty root environment.
    pub fn new() -> Self {
        Environment {
            scope: LocalScope::new(Scope::default()),
        }
    }

    /// A root environment seeded with the native functions.
    pub fn with_builtins() -> Self {
        let env = Environment::new();
        for &(name, func) in BUILTINS {
            env.define(name, Value::Builtin(BuiltinValue { name, func }));
        }
        env
    }

    /// A new empty scope whose parent is `outer`.
    pub fn enclosed(outer: &Environment) -> Self {
        Environment {
            scope: LocalScope::new(Scope {
                bindings: FxHashMap::default(),
                parent: Some(outer.clone()),
            }),
        }
    }

    /// Resolve `name`, innermost scope first.
    pub fn get(&self, name: &str) -> Option<Value> {
        let mut current = self.clone();
        loop {
            let parent = {
                let scope = current.scope.borrow();
                if let Some(value) = scope.bindings.get(name) {
                    return Some(value.clone());
                }
                scope.parent.clone()
            }?;
            current = parent;
        }
    }

    /// Bind `name` in this scope, shadowing any outer binding.
    pub fn define(&self, name: impl Into<String>, value: Value) {
        self.scope.borrow_mut().bindings.insert(name.into(), value);
    }

    /// Rebind `name` in the nearest scope that already holds it, or define
    /// it in this scope when none does.
    pub fn assign(&self, name: &str, value: Value) {
        let mut current = self.clone();
        loop {
            let parent = {
                let mut scope = current.scope.borrow_mut();
                if let Some(slot) = scope.bindings.get_mut(name) {
                    *slot = value;
                    return;
                }
                scope.parent.clone()
            };
            match parent {
                Some(parent) => current = parent,
                None => break,
            }
        }
        self.define(name, value);
    }

    /// Names bound in this scope, sorted.
    pub fn local_names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.scope.borrow().bindings.keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Number of scopes from here to the root, counting both.
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut current = self.clone();
        while let Some(parent) = current.parent() {
            depth += 1;
            current = parent;
        }
        depth
    }

    fn parent(&self) -> Option<Environment> {
        self.scope.borrow().parent.clone()
    }

    pub fn ptr_eq(&self, other: &Environment) -> bool {
        self.scope.ptr_eq(&other.scope)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

// Bindings are left out: a scope commonly holds a closure that captures it.
impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("depth", &self.depth())
            .field("locals", &self.local_names())
            .finish()
    }
}
