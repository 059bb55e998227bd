//! Evaluation errors.
//!
//! All errors are raised synchronously at the point of detection and
//! propagate to the caller unrecovered. Numeric domain issues are not
//! errors: division by zero and friends follow IEEE-754 semantics and
//! produce infinities or NaN.

use thiserror::Error;

/// Result of an evaluator operation.
pub type EvalResult<T> = Result<T, EvalError>;

/// An error raised while evaluating, simplifying, or sampling a tree.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum EvalError {
    /// A request node's name or child count is not what the operation
    /// expects.
    #[error("expected a `{expected}` node with {arity} argument(s)")]
    MalformedRequest {
        expected: &'static str,
        arity: usize,
    },

    /// A variable resolved to a name absent from the environment.
    #[error("variable `{name}` is not defined")]
    UndefinedVariable { name: String },

    /// An operation node's name is not a recognized operator.
    #[error("operator `{name}` is not defined")]
    UnknownOperator { name: String },

    /// The sampling variable of a plot request is already bound.
    #[error("variable `{name}` is already defined")]
    VariableAlreadyDefined { name: String },

    /// A plot request's range is inverted (min greater than max).
    #[error("invalid range: min {min} is greater than max {max}")]
    EmptyRange { min: f64, max: f64 },

    /// A plot request's step is zero or negative.
    #[error("step {step} is not positive")]
    InvalidStep { step: f64 },
}
