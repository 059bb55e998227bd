//! RAII guard for the sampling variable binding.
//!
//! Range sampling temporarily binds its variable in the environment. The
//! binding must disappear on every exit path — normal completion, an `?`
//! propagated from evaluating the sampled expression, or a panic — so the
//! removal lives in `Drop` rather than at the end of the loop.

use std::ops::{Deref, DerefMut};

use calc_ast::Expr;

use crate::Environment;

/// Guard that owns a variable name's presence in an environment.
///
/// While the guard lives, [`ScopedBinding::bind`] can rebind the name as
/// often as needed; dropping the guard removes whatever binding is current.
/// The guard derefs to [`Environment`], so evaluation can borrow through it.
pub struct ScopedBinding<'env> {
    env: &'env mut Environment,
    name: String,
}

impl<'env> ScopedBinding<'env> {
    /// Take responsibility for `name` in `env`.
    ///
    /// Nothing is bound yet; callers bind (and rebind) via
    /// [`ScopedBinding::bind`].
    pub fn new(env: &'env mut Environment, name: impl Into<String>) -> Self {
        ScopedBinding {
            env,
            name: name.into(),
        }
    }

    /// Bind the guarded name to `value`, replacing any prior binding.
    pub fn bind(&mut self, value: Expr) {
        let name = self.name.clone();
        self.env.define(name, value);
    }
}

impl Drop for ScopedBinding<'_> {
    fn drop(&mut self) {
        self.env.remove(&self.name);
    }
}

impl Deref for ScopedBinding<'_> {
    type Target = Environment;

    fn deref(&self) -> &Environment {
        self.env
    }
}

impl DerefMut for ScopedBinding<'_> {
    fn deref_mut(&mut self) -> &mut Environment {
        self.env
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binding_is_removed_on_drop() {
        let mut env = Environment::default();
        {
            let mut bound = ScopedBinding::new(&mut env, "x");
            bound.bind(Expr::number(1.0));
            assert!(bound.contains("x"));
        }
        assert!(!env.contains("x"));
    }

    #[test]
    fn rebinding_keeps_a_single_entry() {
        let mut env = Environment::default();
        {
            let mut bound = ScopedBinding::new(&mut env, "x");
            bound.bind(Expr::number(1.0));
            bound.bind(Expr::number(2.0));
            assert_eq!(bound.len(), 1);
        }
        assert!(env.is_empty());
    }

    #[test]
    fn drop_without_bind_is_a_no_op() {
        let mut env = Environment::default();
        env.define("y", Expr::number(5.0));
        {
            let _bound = ScopedBinding::new(&mut env, "x");
        }
        assert_eq!(env.len(), 1);
        assert!(env.contains("y"));
    }
}
