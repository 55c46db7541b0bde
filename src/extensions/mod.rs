//! Observer hooks for hosts that want to follow chart activity.

mod plugins;

pub use plugins::{ChartEvent, ChartPlugin, PluginContext};
