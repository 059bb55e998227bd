//! The expression tree value type.

use std::fmt;

use calc_list::LinkedList;

use crate::{BinaryOp, UnaryOp};

/// A node in an expression tree.
///
/// Variables resolve against an environment at evaluation time, so a tree is
/// meaningful on its own: `3 * x` is representable whether or not `x` is
/// bound anywhere.
///
/// Operation names are open strings. Recognized operators are the fixed sets
/// in [`UnaryOp`] and [`BinaryOp`]; request names (`toDouble`, `simplify`,
/// `plot`) also travel as operations so a parser can hand whole requests to
/// the evaluator as ordinary trees.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number(f64),
    /// A reference to a variable; the name is non-empty.
    Variable(String),
    /// A named operation applied to ordered children.
    Operation {
        name: String,
        children: LinkedList<Expr>,
    },
}

impl Expr {
    /// A literal node.
    pub const fn number(value: f64) -> Self {
        Expr::Number(value)
    }

    /// A variable reference node.
    pub fn variable(name: impl Into<String>) -> Self {
        Expr::Variable(name.into())
    }

    /// A unary operation node.
    pub fn unary(op: UnaryOp, operand: Expr) -> Self {
        Expr::Operation {
            name: op.symbol().to_owned(),
            children: [operand].into_iter().collect(),
        }
    }

    /// A binary operation node.
    pub fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Self {
        Expr::Operation {
            name: op.symbol().to_owned(),
            children: [lhs, rhs].into_iter().collect(),
        }
    }

    /// An operation node with an arbitrary name, e.g. a request like
    /// `plot(expr, var, min, max, step)`.
    pub fn call(name: impl Into<String>, children: impl IntoIterator<Item = Expr>) -> Self {
        Expr::Operation {
            name: name.into(),
            children: children.into_iter().collect(),
        }
    }

    /// The literal value, if this is a number node.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Expr::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// The variable name, if this is a variable node.
    pub fn as_variable(&self) -> Option<&str> {
        match self {
            Expr::Variable(name) => Some(name),
            _ => None,
        }
    }

    /// Returns `true` for number nodes.
    pub fn is_number(&self) -> bool {
        matches!(self, Expr::Number(_))
    }

    /// The operation name, if this is an operation node.
    pub fn name(&self) -> Option<&str> {
        match self {
            Expr::Operation { name, .. } => Some(name),
            _ => None,
        }
    }

    /// The ordered children, if this is an operation node.
    pub fn children(&self) -> Option<&LinkedList<Expr>> {
        match self {
            Expr::Operation { children, .. } => Some(children),
            _ => None,
        }
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Expr::Number(value)
    }
}

impl fmt::Display for Expr {
    /// Infix rendering with parenthesized binary operations.
    ///
    /// `Expr::binary(BinaryOp::Mul, 3.into(), Expr::variable("x"))` renders
    /// as `(3 * x)`; unrecognized names fall back to call syntax.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(value) => write!(f, "{value}"),
            Expr::Variable(name) => f.write_str(name),
            Expr::Operation { name, children } => {
                if BinaryOp::parse(name).is_some() && children.len() == BinaryOp::ARITY {
                    let mut iter = children.iter();
                    if let (Some(lhs), Some(rhs)) = (iter.next(), iter.next()) {
                        return write!(f, "({lhs} {name} {rhs})");
                    }
                }
                write!(f, "{name}(")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{child}")?;
                }
                write!(f, ")")
            }
        }
    }
}
