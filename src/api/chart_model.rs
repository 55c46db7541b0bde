use crate::core::{ChartSeries, CurvePath, LineStyle, NormalizedPoint, Viewport};

/// Chart domain state: the series and how it is laid out.
///
/// Geometry is always derived from here in full; nothing is patched
/// incrementally when the series or viewport changes.
pub struct ChartModel {
    pub(super) viewport: Viewport,
    pub(super) series: ChartSeries,
    pub(super) line_style: LineStyle,
    pub(super) show_background: bool,
    pub(super) reveal_progress: f64,
}

impl ChartModel {
    #[must_use]
    pub fn new(viewport: Viewport, line_style: LineStyle, show_background: bool) -> Self {
        Self {
            viewport,
            series: ChartSeries::default(),
            line_style,
            show_background,
            reveal_progress: 1.0,
        }
    }

    #[must_use]
    pub fn normalized_points(&self) -> Vec<NormalizedPoint> {
        self.series.normalized_points()
    }

    #[must_use]
    pub fn curve_path(&self) -> CurvePath {
        CurvePath::build_with_style(&self.normalized_points(), self.viewport, self.line_style)
    }
}
