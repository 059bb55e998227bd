//! Tree-walking evaluator for calculator expression trees.
//!
//! # Architecture
//!
//! - [`Environment`]: the mutable variable table plus the rendering handle,
//!   passed explicitly into every evaluator call — there is no ambient or
//!   process-wide lookup state.
//! - [`evaluate`] / [`simplify`] / [`plot`]: the three request operations,
//!   each validating its request node's name and arity before recursing.
//! - [`evaluate_expr`] / [`simplify_expr`]: the recursive transforms over
//!   the expression variant.
//! - [`Renderer`]: the seam to whatever draws sampled coordinates; the core
//!   produces the two parallel coordinate lists and nothing more.
//!
//! Evaluation is single-threaded and synchronous. Every operation runs to
//! completion or fails before returning; the one observable mutation, the
//! sampling variable bound during [`plot`], is removed on every exit path.

mod environment;
mod error;
mod interpreter;
mod render;
mod scope_guard;

pub use environment::Environment;
pub use error::{EvalError, EvalResult};
pub use interpreter::{dispatch, evaluate, evaluate_expr, plot, simplify, simplify_expr};
pub use render::{
    buffer_renderer, null_renderer, text_renderer, BufferRenderer, NullRenderer, PlotCall,
    Renderer, SharedRenderer, TextRenderer,
};
pub use scope_guard::ScopedBinding;
