use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{LineStyle, ValueRange, Viewport};
use crate::interaction::IndicatorState;
use crate::render::Renderer;

use super::ChartEngine;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub viewport: Viewport,
    pub points_len: usize,
    pub series_version: u64,
    pub value_range: Option<ValueRange>,
    pub line_style: LineStyle,
    pub show_background: bool,
    pub reveal_progress: f64,
    pub interaction_in_progress: bool,
    pub indicator: IndicatorState,
    pub series_metadata: IndexMap<String, String>,
}

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            viewport: self.model.viewport,
            points_len: self.model.series.len(),
            series_version: self.model.series.version(),
            value_range: self.model.series.range(),
            line_style: self.model.line_style,
            show_background: self.model.show_background,
            reveal_progress: self.model.reveal_progress,
            interaction_in_progress: self.interaction.is_active(),
            indicator: self.interaction.indicator().clone(),
            series_metadata: self.model.series.metadata().clone(),
        }
    }
}
