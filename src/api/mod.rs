mod chart_model;
mod data_controller;
mod engine;
mod engine_config;
mod engine_init;
mod engine_snapshot;
mod interaction_controller;
mod json_contract;
mod plugin_dispatch;
mod plugin_registry;
mod render_frame_builder;
mod render_style;
mod validation;

use chart_model::ChartModel;
pub use engine::{ChartEngine, SwipeHandler};
pub use engine_config::ChartEngineConfig;
pub use engine_snapshot::EngineSnapshot;
pub use json_contract::{SNAPSHOT_SCHEMA_VERSION, SnapshotDocument};
pub use render_style::RenderStyle;

pub use crate::extensions::{ChartEvent, ChartPlugin, PluginContext};
pub use crate::interaction::{
    GestureOutcome, IndicatorDragBehavior, IndicatorState, SwipeBehavior, SwipeDirection,
};
