//! Unary and binary operators.
//!
//! Operation nodes carry their operator as a plain name; these enums are the
//! recognized set. The evaluator parses names at dispatch time so an
//! unrecognized operation becomes a runtime error rather than an
//! unrepresentable tree.

use std::fmt;

/// Unary operators. All take exactly one child.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    /// Arithmetic negation.
    Negate,
    /// Sine, operand in radians.
    Sin,
    /// Cosine, operand in radians.
    Cos,
}

impl UnaryOp {
    /// Child count every unary operation node must have.
    pub const ARITY: usize = 1;

    /// Returns the operation-node name for this operator.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Negate => "negate",
            Self::Sin => "sin",
            Self::Cos => "cos",
        }
    }

    /// Parse an operation-node name, `None` if it is not a unary operator.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "negate" => Some(Self::Negate),
            "sin" => Some(Self::Sin),
            "cos" => Some(Self::Cos),
            _ => None,
        }
    }

    /// Apply the operator to a computed operand.
    pub fn apply(self, operand: f64) -> f64 {
        match self {
            Self::Negate => -operand,
            Self::Sin => operand.sin(),
            Self::Cos => operand.cos(),
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Binary operators. All take exactly two children.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOp {
    /// Child count every binary operation node must have.
    pub const ARITY: usize = 2;

    /// Returns the operation-node name for this operator.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        }
    }

    /// Parse an operation-node name, `None` if it is not a binary operator.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            "^" => Some(Self::Pow),
            _ => None,
        }
    }

    /// Apply the operator under IEEE-754 semantics.
    ///
    /// Division by zero yields an infinity or NaN, never an error.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::Div => lhs / rhs,
            Self::Pow => lhs.powf(rhs),
        }
    }

    /// Whether simplification folds this operator when both children are
    /// literals.
    ///
    /// Only `+`, `-`, and `*` fold. `/` and `^` are left in tree form even
    /// with two literal operands; the asymmetry is a deliberate policy of
    /// the simplifier, not a gap.
    pub const fn folds_constants(self) -> bool {
        matches!(self, Self::Add | Self::Sub | Self::Mul)
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
