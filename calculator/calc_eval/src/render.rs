//! Rendering seam for sampled coordinates.
//!
//! The evaluator hands finished coordinate lists to a [`Renderer`]; what
//! happens to them — a chart window, a terminal table, a test buffer — is
//! the host's business. Handles are `Arc<dyn Renderer>` so one renderer can
//! back several environments.

use calc_list::LinkedList;
use parking_lot::Mutex;

/// Receiver for one plotted series.
///
/// `xs` and `ys` are parallel: `xs.len() == ys.len()`, pair `i` is the
/// coordinate of sample `i`.
pub trait Renderer: Send + Sync {
    /// Render a scatter plot of the given series.
    fn scatter_plot(
        &self,
        title: &str,
        x_label: &str,
        y_label: &str,
        xs: &LinkedList<f64>,
        ys: &LinkedList<f64>,
    );
}

/// Shared renderer handle stored in an environment.
pub type SharedRenderer = std::sync::Arc<dyn Renderer>;

/// Renderer that discards everything (default).
#[derive(Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn scatter_plot(&self, _: &str, _: &str, _: &str, _: &LinkedList<f64>, _: &LinkedList<f64>) {}
}

/// Renderer that prints one `x<TAB>y` line per sample to stdout.
#[derive(Default)]
pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn scatter_plot(
        &self,
        title: &str,
        x_label: &str,
        y_label: &str,
        xs: &LinkedList<f64>,
        ys: &LinkedList<f64>,
    ) {
        println!("{title}: {x_label} vs {y_label}");
        for (x, y) in xs.iter().zip(ys.iter()) {
            println!("{x}\t{y}");
        }
    }
}

/// One captured call to [`Renderer::scatter_plot`].
#[derive(Clone, Debug, PartialEq)]
pub struct PlotCall {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<(f64, f64)>,
}

/// Renderer that captures calls for test assertions.
#[derive(Default)]
pub struct BufferRenderer {
    calls: Mutex<Vec<PlotCall>>,
}

impl BufferRenderer {
    /// Create an empty capturing renderer.
    pub fn new() -> Self {
        BufferRenderer {
            calls: Mutex::new(Vec::new()),
        }
    }

    /// All calls captured so far.
    pub fn calls(&self) -> Vec<PlotCall> {
        self.calls.lock().clone()
    }

    /// Clear captured calls.
    pub fn clear(&self) {
        self.calls.lock().clear();
    }
}

impl Renderer for BufferRenderer {
    fn scatter_plot(
        &self,
        title: &str,
        x_label: &str,
        y_label: &str,
        xs: &LinkedList<f64>,
        ys: &LinkedList<f64>,
    ) {
        self.calls.lock().push(PlotCall {
            title: title.to_owned(),
            x_label: x_label.to_owned(),
            y_label: y_label.to_owned(),
            points: xs.iter().copied().zip(ys.iter().copied()).collect(),
        });
    }
}

/// Create a renderer that discards all output.
pub fn null_renderer() -> SharedRenderer {
    std::sync::Arc::new(NullRenderer)
}

/// Create a renderer that prints samples to stdout.
pub fn text_renderer() -> SharedRenderer {
    std::sync::Arc::new(TextRenderer)
}

/// Create a capturing renderer for tests.
///
/// Returned concretely so callers can keep a handle for assertions while the
/// environment holds the same renderer as an `Arc<dyn Renderer>`.
pub fn buffer_renderer() -> std::sync::Arc<BufferRenderer> {
    std::sync::Arc::new(BufferRenderer::new())
}
