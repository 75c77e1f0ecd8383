use std::{collections::HashSet, sync::Arc};

use crate::{error::ErrorValue, interpreter::{evaluator::core::EvalResult, value::core::Value}};

/// A single link in the binding chain.
#[derive(Debug)]
struct Binding {
    name:   String,
    value:  Value,
    parent: Option<Arc<Binding>>,
}

/// Variable bindings visible to a statement sequence.
///
/// The environment is persistent: `bind` never changes the receiver, it
/// returns a new environment whose newest binding points back at the old
/// chain. Clones share that chain, so threading an environment through a
/// program costs one allocation per assignment and nothing per clone.
///
/// Lookups walk from the newest binding to the oldest, so a later
/// assignment to the same name shadows the earlier one.
///
/// # Example
/// ```
/// use squiggle_scalar::interpreter::{evaluator::environment::Environment, value::core::Value};
///
/// let outer = Environment::new().bind("x", Value::Number(1.0));
/// let inner = outer.bind("x", Value::Number(2.0));
///
/// assert_eq!(inner.lookup("x"), Ok(&Value::Number(2.0)));
/// assert_eq!(outer.lookup("x"), Ok(&Value::Number(1.0)));
/// assert!(Environment::new().lookup("x").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Environment {
    head: Option<Arc<Binding>>,
    len:  usize,
}

impl Environment {
    /// Creates an environment with no bindings.
    #[must_use]
    pub const fn new() -> Self {
        Self { head: None,
               len:  0, }
    }

    /// Returns this environment extended with `name` bound to `value`.
    #[must_use]
    pub fn bind(&self, name: impl Into<String>, value: Value) -> Self {
        let binding = Binding { name: name.into(),
                                value,
                                parent: self.head.clone() };
        Self { head: Some(Arc::new(binding)),
               len:  self.len + 1, }
    }

    /// Resolves `name` to its most recent binding.
    ///
    /// # Errors
    /// Returns an `UnboundError` when `name` has never been bound.
    pub fn lookup(&self, name: &str) -> EvalResult<&Value> {
        self.bindings()
            .find(|binding| binding.name == name)
            .map(|binding| &binding.value)
            .ok_or_else(|| ErrorValue::unbound(name))
    }

    /// Whether `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.bindings().any(|binding| binding.name == name)
    }

    /// Number of bindings, counting shadowed ones.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the environment has no bindings.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The visible names, most recently bound first.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.bindings()
            .map(|binding| binding.name.as_str())
            .filter(|name| seen.insert(*name))
            .collect()
    }

    fn bindings(&self) -> impl Iterator<Item = &Binding> {
        std::iter::successors(self.head.as_deref(), |binding| binding.parent.as_deref())
    }
}

impl Drop for Environment {
    // Unlinks uniquely owned bindings one at a time so long chains do not
    // recurse through `Arc::drop`.
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(node) = next {
            match Arc::try_unwrap(node) {
                Ok(mut binding) => next = binding.parent.take(),
                Err(_) => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn lookup_of_unbound_name_is_an_unbound_error() {
        let env = Environment::new().bind("y", Value::Number(1.0));
        let err = env.lookup("x").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnboundError);
        assert_eq!(err.message(), "x is not defined");
    }

    #[test]
    fn names_hide_shadowed_bindings() {
        let env = Environment::new().bind("x", Value::Number(1.0))
                                    .bind("y", Value::Number(2.0))
                                    .bind("x", Value::Number(3.0));
        assert_eq!(env.names(), vec!["x", "y"]);
        assert_eq!(env.len(), 3);
        assert!(env.contains("y"));
        assert!(!env.contains("z"));
    }

    #[test]
    fn long_chains_drop_without_overflowing() {
        let mut env = Environment::new();
        for i in 0..200_000 {
            env = env.bind(format!("v{}", i % 7), Value::Number(f64::from(i)));
        }
        assert_eq!(env.len(), 200_000);
        drop(env);
    }

    #[test]
    fn environment_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Environment>();
    }
}
