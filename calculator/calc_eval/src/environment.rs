//! The variable environment.
//!
//! A flat mapping from variable name to its bound expression, plus the
//! rendering handle. The environment is handed explicitly to every evaluator
//! call; nothing here is global.
//!
//! A bound value may itself be a variable node (an alias), so resolving a
//! name can follow a chain (`a -> b -> 3`). The mapping must stay acyclic;
//! a cycle such as `a -> b -> a` makes resolution non-terminating. Keeping
//! bindings acyclic is the caller's responsibility — lookup does not detect
//! cycles.

use calc_ast::Expr;
use rustc_hash::FxHashMap;

use crate::render::{null_renderer, SharedRenderer};
use crate::{EvalError, EvalResult};

/// Variable bindings plus the rendering collaborator.
pub struct Environment {
    bindings: FxHashMap<String, Expr>,
    renderer: SharedRenderer,
}

impl Environment {
    /// Create an empty environment using the given renderer.
    pub fn new(renderer: SharedRenderer) -> Self {
        Environment {
            bindings: FxHashMap::default(),
            renderer,
        }
    }

    /// Bind `name` to `value`, silently overwriting any previous binding.
    pub fn define(&mut self, name: impl Into<String>, value: Expr) {
        self.bindings.insert(name.into(), value);
    }

    /// Look up a binding by name.
    pub fn lookup(&self, name: &str) -> Option<&Expr> {
        self.bindings.get(name)
    }

    /// Look up a binding, failing with [`EvalError::UndefinedVariable`] if
    /// absent.
    pub fn get(&self, name: &str) -> EvalResult<&Expr> {
        self.bindings
            .get(name)
            .ok_or_else(|| EvalError::UndefinedVariable {
                name: name.to_owned(),
            })
    }

    /// Returns `true` if `name` is bound.
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Remove a binding, returning the bound expression if there was one.
    pub fn remove(&mut self, name: &str) -> Option<Expr> {
        self.bindings.remove(name)
    }

    /// A clone of the rendering handle.
    pub fn renderer(&self) -> SharedRenderer {
        self.renderer.clone()
    }

    /// Number of live bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` if no variables are bound.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(null_renderer())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn define_then_lookup() {
        let mut env = Environment::default();
        env.define("x", Expr::number(42.0));
        assert_eq!(env.lookup("x"), Some(&Expr::Number(42.0)));
        assert!(env.contains("x"));
        assert_eq!(env.len(), 1);
    }

    #[test]
    fn define_overwrites_silently() {
        let mut env = Environment::default();
        env.define("x", Expr::number(1.0));
        env.define("x", Expr::number(2.0));
        assert_eq!(env.lookup("x"), Some(&Expr::Number(2.0)));
        assert_eq!(env.len(), 1);
    }

    #[test]
    fn get_fails_for_unbound_name() {
        let env = Environment::default();
        assert_eq!(
            env.get("missing"),
            Err(EvalError::UndefinedVariable {
                name: "missing".to_owned()
            })
        );
    }

    #[test]
    fn remove_returns_the_old_binding() {
        let mut env = Environment::default();
        env.define("x", Expr::number(7.0));
        assert_eq!(env.remove("x"), Some(Expr::Number(7.0)));
        assert_eq!(env.remove("x"), None);
        assert!(env.is_empty());
    }
}
