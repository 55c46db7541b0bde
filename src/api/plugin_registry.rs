use tracing::debug;

use crate::error::{ChartError, ChartResult};
use crate::extensions::ChartPlugin;
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Adds an observer. Ids must be non-empty and unique per engine.
    ///
    /// Plugins are notified in registration order.
    pub fn register_plugin(&mut self, plugin: Box<dyn ChartPlugin>) -> ChartResult<()> {
        let id = plugin.id();
        if id.is_empty() {
            return Err(ChartError::InvalidData(
                "plugin id must not be empty".to_owned(),
            ));
        }
        if self.has_plugin(id) {
            return Err(ChartError::InvalidData(format!(
                "plugin with id `{id}` is already registered"
            )));
        }
        debug!(plugin_id = id, "plugin registered");
        self.plugins.push(plugin);
        Ok(())
    }

    /// Returns `true` when a plugin with `plugin_id` was removed.
    pub fn unregister_plugin(&mut self, plugin_id: &str) -> bool {
        let before = self.plugins.len();
        self.plugins.retain(|plugin| plugin.id() != plugin_id);
        let removed = self.plugins.len() != before;
        if removed {
            debug!(plugin_id, "plugin unregistered");
        }
        removed
    }

    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.plugins.len()
    }

    #[must_use]
    pub fn has_plugin(&self, plugin_id: &str) -> bool {
        self.plugins.iter().any(|plugin| plugin.id() == plugin_id)
    }

    /// Registered plugin ids in notification order.
    #[must_use]
    pub fn plugin_ids(&self) -> Vec<&str> {
        self.plugins.iter().map(|plugin| plugin.id()).collect()
    }
}
