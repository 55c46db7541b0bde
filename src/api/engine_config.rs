use serde::{Deserialize, Serialize};

use crate::core::{LineStyle, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{IndicatorDragBehavior, SwipeBehavior};

use super::RenderStyle;

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    pub viewport: Viewport,
    #[serde(default = "default_line_style")]
    pub line_style: LineStyle,
    #[serde(default = "default_show_background")]
    pub show_background: bool,
    #[serde(default = "default_swipe_behavior")]
    pub swipe_behavior: SwipeBehavior,
    #[serde(default = "default_indicator_drag_behavior")]
    pub indicator_drag_behavior: IndicatorDragBehavior,
    #[serde(default = "default_render_style")]
    pub render_style: RenderStyle,
}

impl ChartEngineConfig {
    /// Creates a config with default behavior for `viewport`.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            line_style: default_line_style(),
            show_background: default_show_background(),
            swipe_behavior: default_swipe_behavior(),
            indicator_drag_behavior: default_indicator_drag_behavior(),
            render_style: default_render_style(),
        }
    }

    #[must_use]
    pub fn with_line_style(mut self, line_style: LineStyle) -> Self {
        self.line_style = line_style;
        self
    }

    #[must_use]
    pub fn with_background(mut self, show_background: bool) -> Self {
        self.show_background = show_background;
        self
    }

    /// Sets swipe thresholds.
    #[must_use]
    pub fn with_swipe_behavior(mut self, behavior: SwipeBehavior) -> Self {
        self.swipe_behavior = behavior;
        self
    }

    #[must_use]
    pub fn with_indicator_drag_behavior(mut self, behavior: IndicatorDragBehavior) -> Self {
        self.indicator_drag_behavior = behavior;
        self
    }

    #[must_use]
    pub fn with_render_style(mut self, style: RenderStyle) -> Self {
        self.render_style = style;
        self
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse config: {e}")))
    }
}

fn default_line_style() -> LineStyle {
    LineStyle::Curved
}

fn default_show_background() -> bool {
    true
}

fn default_swipe_behavior() -> SwipeBehavior {
    SwipeBehavior::default()
}

fn default_indicator_drag_behavior() -> IndicatorDragBehavior {
    IndicatorDragBehavior::default()
}

fn default_render_style() -> RenderStyle {
    RenderStyle::default()
}
