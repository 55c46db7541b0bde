use tracing::{debug, trace};

use crate::core::{ChartSeries, CurvePath, DataPoint, NormalizedPoint, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::extensions::ChartEvent;
use crate::render::Renderer;

use super::ChartEngine;
use super::validation::validate_viewport;

impl<R: Renderer> ChartEngine<R> {
    /// Replaces the series. Any visible indicator is hidden because its index
    /// may no longer refer to the same sample.
    pub fn set_data(&mut self, points: Vec<DataPoint>) -> ChartResult<()> {
        self.model.series.set_points(points)?;
        debug!(
            count = self.model.series.len(),
            version = self.model.series.version(),
            "set data points"
        );
        self.after_series_changed();
        Ok(())
    }

    /// Replaces the series with bare values labelled by their own value.
    pub fn set_values(&mut self, values: &[f64]) -> ChartResult<()> {
        let series = ChartSeries::from_values(values)?;
        self.set_data(series.points().to_vec())
    }

    pub fn push_point(&mut self, point: DataPoint) -> ChartResult<()> {
        self.model.series.push(point)?;
        trace!(count = self.model.series.len(), "append data point");
        self.after_series_changed();
        Ok(())
    }

    pub fn clear_data(&mut self) {
        self.model.series.clear();
        debug!("clear data points");
        self.after_series_changed();
    }

    #[must_use]
    pub fn series(&self) -> &ChartSeries {
        &self.model.series
    }

    pub fn set_series_metadata(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.model.series.set_metadata(key, value);
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.model.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        validate_viewport(viewport)?;
        if viewport == self.model.viewport {
            return Ok(());
        }
        debug!(
            width = viewport.width,
            height = viewport.height,
            "set viewport"
        );
        self.model.viewport = viewport;
        self.hide_indicator_if_visible();
        self.emit_plugin_event(ChartEvent::ViewportChanged {
            width: viewport.width,
            height: viewport.height,
        });
        Ok(())
    }

    #[must_use]
    pub fn show_background(&self) -> bool {
        self.model.show_background
    }

    pub fn set_show_background(&mut self, show_background: bool) {
        self.model.show_background = show_background;
    }

    #[must_use]
    pub fn reveal_progress(&self) -> f64 {
        self.model.reveal_progress
    }

    /// Sets how much of the curve is drawn, from `0` (nothing) to `1` (all).
    ///
    /// Hosts drive this to animate the line in when the chart appears.
    pub fn set_reveal_progress(&mut self, progress: f64) -> ChartResult<()> {
        if !progress.is_finite() {
            return Err(ChartError::InvalidData(
                "reveal progress must be finite".to_owned(),
            ));
        }
        self.model.reveal_progress = progress.clamp(0.0, 1.0);
        Ok(())
    }

    #[must_use]
    pub fn normalized_points(&self) -> Vec<NormalizedPoint> {
        self.model.normalized_points()
    }

    #[must_use]
    pub fn curve_path(&self) -> CurvePath {
        self.model.curve_path()
    }

    fn after_series_changed(&mut self) {
        self.hide_indicator_if_visible();
        self.emit_plugin_event(ChartEvent::DataUpdated {
            points_len: self.model.series.len(),
        });
    }
}
