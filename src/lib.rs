//! linechart-rs: headless line chart engine with touch indicators.
//!
//! The crate turns an ordered series of values into a smooth curve, maps
//! pointer positions back to data points for an indicator overlay, and tells
//! fast horizontal swipes apart from inspection drags. Drawing is delegated
//! to a [`render::Renderer`] so any UI toolkit can host the chart.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig};
pub use error::{ChartError, ChartResult};
