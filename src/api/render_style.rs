use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Style contract for the current render frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderStyle {
    pub line_color: Color,
    pub line_width: f64,
    /// Fill under the curve when the background is enabled.
    pub background_color: Color,
    pub indicator_color: Color,
    pub indicator_line_width: f64,
    pub indicator_line_height_px: f64,
    pub indicator_font_size_px: f64,
    /// Vertical gap between the time label and the indicator line.
    pub indicator_label_gap_px: f64,
    /// Side of the square marker drawn on the curve; `0` disables it.
    pub indicator_marker_size_px: f64,
    /// Polyline samples per quadratic segment when flattening the curve.
    pub curve_steps_per_segment: usize,
}

impl Default for RenderStyle {
    fn default() -> Self {
        let line_color = Color::rgb8(33, 150, 243);
        Self {
            line_color,
            line_width: 3.0,
            background_color: line_color.with_alpha(0.2),
            indicator_color: Color::rgb8(204, 204, 204),
            indicator_line_width: 1.0,
            indicator_line_height_px: 160.0,
            indicator_font_size_px: 14.0,
            indicator_label_gap_px: 4.0,
            indicator_marker_size_px: 8.0,
            curve_steps_per_segment: 8,
        }
    }
}
