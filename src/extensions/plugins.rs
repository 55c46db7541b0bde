use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::interaction::SwipeDirection;

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    pub viewport: Viewport,
    pub points_len: usize,
    pub series_version: u64,
    pub interaction_in_progress: bool,
    pub highlighted_index: Option<usize>,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ChartEvent {
    DataUpdated { points_len: usize },
    ViewportChanged { width: f64, height: f64 },
    GestureStarted { x: f64, y: f64 },
    IndicatorMoved { index: usize, x: f64 },
    IndicatorHidden,
    Swiped { direction: SwipeDirection },
    GestureEnded,
    Rendered,
}

/// Observer hook for chart activity.
///
/// Plugins see events and a read-only context; they cannot mutate the engine.
pub trait ChartPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: ChartEvent, context: PluginContext);
}
