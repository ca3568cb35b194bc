use std::collections::HashMap;

use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// A mutable store mapping variable names to values.
///
/// The evaluator only ever looks names up and binds them; what happens when
/// a name was never bound is decided by the implementation.
pub trait Environment {
    /// Looks up `name`.
    ///
    /// # Errors
    /// Implementations may reject unbound names; the error is propagated out
    /// of execution unchanged.
    fn get(&self, name: &str) -> EvalResult<f32>;

    /// Binds `name` to `value`, replacing any previous binding.
    fn put(&mut self, name: &str, value: f32);
}

/// How [`Variables`] answers a lookup of a name that was never assigned.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub enum UnboundPolicy {
    /// Fail with [`RuntimeError::UnknownVariable`].
    #[default]
    Reject,
    /// Read the given value.
    Default(f32),
}

/// The standard [`Environment`]: a flat hash map with an unbound policy.
///
/// ## Example
/// ```
/// use turtlec::interpreter::environment::{Environment, UnboundPolicy, Variables};
///
/// let mut strict = Variables::new();
/// strict.put("size", 10.0);
/// assert_eq!(strict.get("size").unwrap(), 10.0);
/// assert!(strict.get("angle").is_err());
///
/// let lenient = Variables::with_policy(UnboundPolicy::Default(0.0));
/// assert_eq!(lenient.get("angle").unwrap(), 0.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Variables {
    values: HashMap<String, f32>,
    policy: UnboundPolicy,
}

impl Variables {
    /// Creates an empty environment that rejects unbound names.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty environment with the given unbound policy.
    #[must_use]
    pub fn with_policy(policy: UnboundPolicy) -> Self {
        Self { values: HashMap::new(),
               policy }
    }

    /// Creates a strict environment seeded with `bindings`.
    pub fn with_bindings<K, I>(bindings: I) -> Self
        where K: Into<String>,
              I: IntoIterator<Item = (K, f32)>
    {
        Self { values: bindings.into_iter()
                               .map(|(name, value)| (name.into(), value))
                               .collect(),
               policy: UnboundPolicy::Reject, }
    }

    /// Changes the unbound policy, keeping all bindings.
    pub const fn set_policy(&mut self, policy: UnboundPolicy) {
        self.policy = policy;
    }

    /// Returns the bound value of `name`, ignoring the policy.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<f32> {
        self.values.get(name).copied()
    }

    /// Iterates over all bindings in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f32)> {
        self.values.iter().map(|(name, value)| (name.as_str(), *value))
    }

    /// Number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no variable is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Environment for Variables {
    fn get(&self, name: &str) -> EvalResult<f32> {
        match (self.values.get(name), self.policy) {
            (Some(value), _) => Ok(*value),
            (None, UnboundPolicy::Default(value)) => Ok(value),
            (None, UnboundPolicy::Reject) => {
                Err(RuntimeError::UnknownVariable { name: name.to_string() })
            },
        }
    }

    fn put(&mut self, name: &str, value: f32) {
        self.values.insert(name.to_string(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_overwrites() {
        let mut env = Variables::new();
        env.put("x", 1.0);
        env.put("x", 2.0);

        assert_eq!(env.get("x"), Ok(2.0));
        assert_eq!(env.len(), 1);
    }

    #[test]
    fn strict_lookup_names_the_variable() {
        let env = Variables::with_bindings([("a", 1.0)]);

        assert_eq!(env.get("b"), Err(RuntimeError::UnknownVariable { name: "b".to_string() }));
    }

    #[test]
    fn policy_can_change_after_seeding() {
        let mut env = Variables::with_bindings([("a".to_string(), 3.0)]);
        env.set_policy(UnboundPolicy::Default(-1.0));

        assert_eq!(env.get("a"), Ok(3.0));
        assert_eq!(env.get("b"), Ok(-1.0));
        assert_eq!(env.lookup("b"), None);
    }
}
