use std::collections::HashMap;

use tracing::trace;

use crate::interpreter::value::core::Value;

/// Names bound in every shell session: `null` is zero, `fact` and `cap` are
/// the two Booleans.
fn builtins() -> [(&'static str, Value); 3] {
    [("null", Value::from(0)), ("fact", Value::from(true)), ("cap", Value::from(false))]
}

/// Chained name-to-value bindings.
///
/// The environment is a stack of binding levels; the first level is the
/// global one and is never removed. Lookups walk from the innermost level
/// outward. Loops push a level for each pass so bindings made inside the body
/// disappear when the pass ends.
#[derive(Debug, Clone)]
pub struct Environment {
    scopes: Vec<HashMap<String, Value>>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Creates an environment with a single, empty global level.
    #[must_use]
    pub fn new() -> Self {
        Self { scopes: vec![HashMap::new()] }
    }

    /// Creates an environment whose global level holds the built-in names
    /// `null`, `fact` and `cap`.
    ///
    /// # Example
    /// ```
    /// use stanza::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let env = Environment::with_builtins();
    /// assert_eq!(env.get("null"), Some(&Value::from(0)));
    /// assert_eq!(env.get("fact"), Some(&Value::from(true)));
    /// ```
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut env = Self::new();
        for (name, value) in builtins() {
            env.declare(name, value);
        }
        env
    }

    /// Number of binding levels, the global one included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Looks a name up, innermost level first.
    ///
    /// A bound zero is found like any other value; only a missing binding
    /// yields `None`.
    ///
    /// # Example
    /// ```
    /// use stanza::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let mut env = Environment::new();
    /// env.declare("z", Value::from(0));
    ///
    /// assert_eq!(env.get("z"), Some(&Value::from(0)));
    /// assert_eq!(env.get("y"), None);
    /// ```
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name))
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Binds `name` in the innermost level, replacing a binding of the same
    /// name at that level.
    ///
    /// Callers that must not shadow check [`Environment::contains`] first.
    pub fn declare(&mut self, name: &str, value: Value) {
        trace!(name, %value, depth = self.scopes.len(), "declare");
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name.to_string(), value);
        }
    }

    /// Rebinds `name` at the nearest level that holds it.
    ///
    /// Returns `false`, leaving the environment untouched, when the name is not
    /// bound anywhere.
    ///
    /// # Example
    /// ```
    /// use stanza::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let mut env = Environment::new();
    /// assert!(!env.assign("x", Value::from(1)));
    ///
    /// env.declare("x", Value::from(1));
    /// env.push_scope();
    /// assert!(env.assign("x", Value::from(2)));
    /// env.pop_scope();
    ///
    /// assert_eq!(env.get("x"), Some(&Value::from(2)));
    /// ```
    pub fn assign(&mut self, name: &str, value: Value) -> bool {
        let Some(scope) = self.scopes
                              .iter_mut()
                              .rev()
                              .find(|scope| scope.contains_key(name))
        else {
            return false;
        };
        trace!(name, %value, "assign");
        scope.insert(name.to_string(), value);
        true
    }

    /// Opens a new innermost level.
    pub fn push_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    /// Closes the innermost level. The global level is never removed.
    pub fn pop_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// Runs `f` inside a fresh level that is closed again afterwards, whether
    /// `f` succeeds or fails.
    ///
    /// # Example
    /// ```
    /// use stanza::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let mut env = Environment::new();
    /// let seen = env.in_scope(|env| {
    ///                   env.declare("i", Value::from(1));
    ///                   env.depth()
    ///               });
    ///
    /// assert_eq!(seen, 2);
    /// assert_eq!(env.depth(), 1);
    /// assert_eq!(env.get("i"), None);
    /// ```
    pub fn in_scope<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        self.push_scope();
        let result = f(self);
        self.pop_scope();
        result
    }
}
