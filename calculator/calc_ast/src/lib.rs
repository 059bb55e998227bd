//! Expression tree types for the calculator.
//!
//! An [`Expr`] is a closed tagged variant over number literals, variable
//! references, and named operations whose ordered children are held in a
//! [`calc_list::LinkedList`]. Trees are immutable once built; the evaluator
//! constructs new nodes instead of mutating in place.

mod expr;
mod operators;

pub use expr::Expr;
pub use operators::{BinaryOp, UnaryOp};

#[cfg(test)]
mod tests;
