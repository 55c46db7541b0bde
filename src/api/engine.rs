use crate::error::ChartResult;
use crate::extensions::{ChartEvent, ChartPlugin};
use crate::interaction::{IndicatorDragBehavior, InteractionState, SwipeBehavior, SwipeDirection};
use crate::render::Renderer;

use super::validation::validate_render_style;
use super::{ChartModel, RenderStyle};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Callback invoked once per recognized swipe.
pub type SwipeHandler = Box<dyn FnMut(SwipeDirection)>;

/// Gesture thresholds currently applied by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(super) struct ChartBehaviorState {
    pub(super) swipe: SwipeBehavior,
    pub(super) indicator_drag: IndicatorDragBehavior,
}

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` owns the series, the per-gesture interaction state and the
/// renderer. Hosts forward pointer events and call `render` when the frame
/// needs repainting; everything runs synchronously on the caller's thread.
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) model: ChartModel,
    pub(super) interaction: InteractionState,
    pub(super) behavior: ChartBehaviorState,
    pub(super) render_style: RenderStyle,
    pub(super) plugins: Vec<Box<dyn ChartPlugin>>,
    pub(super) swipe_handler: Option<SwipeHandler>,
}

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn render_style(&self) -> RenderStyle {
        self.render_style
    }

    pub fn set_render_style(&mut self, style: RenderStyle) -> ChartResult<()> {
        validate_render_style(style)?;
        self.render_style = style;
        Ok(())
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)?;
        self.emit_plugin_event(ChartEvent::Rendered);
        Ok(())
    }

    /// Renders the frame into an external cairo context.
    ///
    /// Used from toolkit draw callbacks while keeping the renderer free of
    /// toolkit-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_render_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)?;
        self.emit_plugin_event(ChartEvent::Rendered);
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
