use crate::extensions::{ChartEvent, PluginContext};
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    pub(super) fn plugin_context(&self) -> PluginContext {
        PluginContext {
            viewport: self.model.viewport,
            points_len: self.model.series.len(),
            series_version: self.model.series.version(),
            interaction_in_progress: self.interaction.is_active(),
            highlighted_index: self.interaction.indicator().index,
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: ChartEvent) {
        if self.plugins.is_empty() {
            return;
        }
        let context = self.plugin_context();
        for plugin in &mut self.plugins {
            plugin.on_event(event, context);
        }
    }
}
