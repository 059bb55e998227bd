//! Request handling, numeric evaluation, constant folding, and range
//! sampling.
//!
//! All four entry points take the environment as an explicit parameter and
//! recurse over the expression variant with exhaustive matches. Requests
//! arrive as ordinary operation nodes (`toDouble(e)`, `simplify(e)`,
//! `plot(e, var, min, max, step)`); each handler validates its request's
//! name and arity defensively before touching the children.

use calc_ast::{BinaryOp, Expr, UnaryOp};
use calc_list::LinkedList;
use tracing::{debug, trace};

use crate::scope_guard::ScopedBinding;
use crate::{Environment, EvalError, EvalResult};

/// Route a request node to the operation it names.
///
/// Unrecognized request names fail with [`EvalError::UnknownOperator`]; a
/// non-operation node is not a request at all and fails as malformed.
pub fn dispatch(env: &mut Environment, request: &Expr) -> EvalResult<Expr> {
    let Expr::Operation { name, .. } = request else {
        return Err(EvalError::MalformedRequest {
            expected: "request",
            arity: 1,
        });
    };
    trace!(request = %name, "dispatching calculator request");
    match name.as_str() {
        "toDouble" => evaluate(env, request),
        "simplify" => simplify(env, request),
        "plot" => plot(env, request),
        _ => Err(EvalError::UnknownOperator { name: name.clone() }),
    }
}

/// Reduce a `toDouble(inner)` request to a number node.
///
/// Purely functional: the environment is consulted for variable resolution
/// and never mutated.
pub fn evaluate(env: &Environment, request: &Expr) -> EvalResult<Expr> {
    let children = expect_request(request, "toDouble", 1)?;
    let inner = first(children, "toDouble")?;
    Ok(Expr::number(evaluate_expr(env, inner)?))
}

/// Recursively reduce an expression to a double.
///
/// Variables resolve through the environment, following alias chains;
/// operator arithmetic follows IEEE-754 (division by zero yields an
/// infinity or NaN, never an error).
pub fn evaluate_expr(env: &Environment, expr: &Expr) -> EvalResult<f64> {
    match expr {
        Expr::Number(value) => Ok(*value),
        Expr::Variable(name) => evaluate_expr(env, env.get(name)?),
        Expr::Operation { name, children } => {
            if let Some(op) = UnaryOp::parse(name) {
                let operand = only_child(children, op.symbol(), UnaryOp::ARITY)?;
                Ok(op.apply(evaluate_expr(env, operand)?))
            } else if let Some(op) = BinaryOp::parse(name) {
                let (lhs, rhs) = two_children(children, op.symbol())?;
                Ok(op.apply(evaluate_expr(env, lhs)?, evaluate_expr(env, rhs)?))
            } else {
                Err(EvalError::UnknownOperator { name: name.clone() })
            }
        }
    }
}

/// Rewrite a `simplify(inner)` request into a constant-folded tree.
pub fn simplify(env: &Environment, request: &Expr) -> EvalResult<Expr> {
    let children = expect_request(request, "simplify", 1)?;
    let inner = first(children, "simplify")?;
    Ok(simplify_expr(env, inner))
}

/// Recursively constant-fold an expression.
///
/// Children are simplified first (post-order); a binary node then folds to
/// a single literal only when its operator participates in folding
/// ([`BinaryOp::folds_constants`]) and both simplified children are
/// literals. `/` and `^` never fold, and neither does any unary operator —
/// that asymmetry is the simplifier's contract, not an oversight. Unbound
/// variables and unrecognized operation names are rebuilt unchanged, so
/// simplification itself cannot fail.
pub fn simplify_expr(env: &Environment, expr: &Expr) -> Expr {
    match expr {
        Expr::Number(_) => expr.clone(),
        Expr::Variable(name) => match env.lookup(name) {
            Some(bound) => simplify_expr(env, bound),
            None => expr.clone(),
        },
        Expr::Operation { name, children } => {
            let simplified: LinkedList<Expr> =
                children.iter().map(|child| simplify_expr(env, child)).collect();
            if let Some(op) = BinaryOp::parse(name) {
                if op.folds_constants() && simplified.len() == BinaryOp::ARITY {
                    let mut iter = simplified.iter();
                    if let (Some(Expr::Number(lhs)), Some(Expr::Number(rhs))) =
                        (iter.next(), iter.next())
                    {
                        return Expr::number(op.apply(*lhs, *rhs));
                    }
                }
            }
            Expr::Operation {
                name: name.clone(),
                children: simplified,
            }
        }
    }
}

/// Sample a `plot(expr, var, min, max, step)` request and hand the
/// coordinates to the environment's renderer.
///
/// Preconditions are checked before any mutation: the sampling variable
/// must be unbound, `min <= max`, and `step > 0`. The variable is then
/// bound for the duration of the sampling loop and removed on every exit
/// path, so the environment's bindings afterwards are identical to its
/// bindings before the call whether sampling succeeded or failed.
///
/// `x` advances by raw `+= step` accumulation; floating-point drift over
/// long ranges is a known precision limitation and is not compensated.
///
/// Returns a placeholder number node: a plot has no meaningful value, but
/// its tree position must still hold something other operations can
/// process.
pub fn plot(env: &mut Environment, request: &Expr) -> EvalResult<Expr> {
    let children = expect_request(request, "plot", 5)?;
    let mut iter = children.iter();
    let (Some(to_plot), Some(var), Some(min), Some(max), Some(step)) =
        (iter.next(), iter.next(), iter.next(), iter.next(), iter.next())
    else {
        return Err(EvalError::MalformedRequest {
            expected: "plot",
            arity: 5,
        });
    };
    let Some(var_name) = var.as_variable() else {
        return Err(EvalError::MalformedRequest {
            expected: "plot",
            arity: 5,
        });
    };

    let min = evaluate_expr(env, min)?;
    let max = evaluate_expr(env, max)?;
    let step = evaluate_expr(env, step)?;

    if env.contains(var_name) {
        return Err(EvalError::VariableAlreadyDefined {
            name: var_name.to_owned(),
        });
    }
    if min > max {
        return Err(EvalError::EmptyRange { min, max });
    }
    if step <= 0.0 {
        return Err(EvalError::InvalidStep { step });
    }

    let renderer = env.renderer();
    let mut xs = LinkedList::new();
    let mut ys = LinkedList::new();
    {
        let mut bound = ScopedBinding::new(env, var_name);
        let mut x = min;
        while x <= max {
            bound.bind(Expr::number(x));
            let y = evaluate_expr(&bound, to_plot)?;
            xs.push_back(x);
            ys.push_back(y);
            x += step;
        }
    }

    debug!(samples = xs.len(), variable = %var_name, "sampled series for plotting");
    renderer.scatter_plot("plot", var_name, "y", &xs, &ys);

    Ok(Expr::number(0.0))
}

/// Check that `request` is an operation with the expected name and child
/// count, returning its children.
fn expect_request<'a>(
    request: &'a Expr,
    expected: &'static str,
    arity: usize,
) -> EvalResult<&'a LinkedList<Expr>> {
    match request {
        Expr::Operation { name, children } if name == expected && children.len() == arity => {
            Ok(children)
        }
        _ => Err(EvalError::MalformedRequest { expected, arity }),
    }
}

fn first<'a>(children: &'a LinkedList<Expr>, expected: &'static str) -> EvalResult<&'a Expr> {
    children
        .front()
        .ok_or(EvalError::MalformedRequest { expected, arity: 1 })
}

fn only_child<'a>(
    children: &'a LinkedList<Expr>,
    expected: &'static str,
    arity: usize,
) -> EvalResult<&'a Expr> {
    if children.len() != arity {
        return Err(EvalError::MalformedRequest { expected, arity });
    }
    children
        .front()
        .ok_or(EvalError::MalformedRequest { expected, arity })
}

fn two_children<'a>(
    children: &'a LinkedList<Expr>,
    expected: &'static str,
) -> EvalResult<(&'a Expr, &'a Expr)> {
    if children.len() != BinaryOp::ARITY {
        return Err(EvalError::MalformedRequest {
            expected,
            arity: BinaryOp::ARITY,
        });
    }
    let mut iter = children.iter();
    match (iter.next(), iter.next()) {
        (Some(lhs), Some(rhs)) => Ok((lhs, rhs)),
        _ => Err(EvalError::MalformedRequest {
            expected,
            arity: BinaryOp::ARITY,
        }),
    }
}
