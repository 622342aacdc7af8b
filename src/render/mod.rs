mod frame;
mod null_renderer;
mod primitives;

pub use frame::{CanvasLayerKind, LayerPrimitives, RenderFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, LinePrimitive, PathPaint, PathPrimitive, RectPrimitive, TextHAlign,
    TextPrimitive, TextSpan,
};

use crate::error::ChartResult;

/// Drawing-surface capability supplied by the host.
///
/// Backends receive a fully materialized `RenderFrame`, so drawing code stays
/// isolated from layout and pointer logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
