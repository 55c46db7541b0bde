use tracing::debug;

use crate::error::ChartResult;
use crate::interaction::InteractionState;
use crate::render::Renderer;

use super::engine::ChartBehaviorState;
use super::validation::{
    validate_indicator_drag_behavior, validate_render_style, validate_swipe_behavior,
    validate_viewport,
};
use super::{ChartEngine, ChartEngineConfig, ChartModel};

impl<R: Renderer> ChartEngine<R> {
    /// Creates an engine with an empty series.
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        validate_viewport(config.viewport)?;
        validate_render_style(config.render_style)?;
        validate_swipe_behavior(config.swipe_behavior)?;
        validate_indicator_drag_behavior(config.indicator_drag_behavior)?;

        debug!(
            width = config.viewport.width,
            height = config.viewport.height,
            line_style = ?config.line_style,
            "init chart engine"
        );

        Ok(Self {
            renderer,
            model: ChartModel::new(
                config.viewport,
                config.line_style,
                config.show_background,
            ),
            interaction: InteractionState::default(),
            behavior: ChartBehaviorState {
                swipe: config.swipe_behavior,
                indicator_drag: config.indicator_drag_behavior,
            },
            render_style: config.render_style,
            plugins: Vec::new(),
            swipe_handler: None,
        })
    }
}
