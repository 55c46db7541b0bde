use crate::core::CurvePath;
use crate::error::ChartResult;
use crate::render::{
    Color, LinePrimitive, PolygonPrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive,
};

use super::ChartEngine;

const MARKER_OUTLINE_WIDTH: f64 = 2.0;

impl<R: Renderer> ChartEngine<R> {
    /// Materializes the current chart state into a backend-agnostic frame.
    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        let mut frame = RenderFrame::new(self.model.viewport);
        let path = self.model.curve_path();

        self.append_background(&mut frame, &path);
        self.append_curve(&mut frame, &path);
        self.append_indicator(&mut frame);

        frame.validate()?;
        Ok(frame)
    }

    fn append_background(&self, frame: &mut RenderFrame, path: &CurvePath) {
        // The fill only appears once the line is fully revealed.
        if !self.model.show_background || self.model.reveal_progress < 1.0 {
            return;
        }
        let outline = path.area_polygon(self.render_style.curve_steps_per_segment);
        if outline.len() < 3 {
            return;
        }
        frame.polygons.push(PolygonPrimitive::new(
            outline.into_iter().map(|point| (point.x, point.y)).collect(),
            self.render_style.background_color,
        ));
    }

    fn append_curve(&self, frame: &mut RenderFrame, path: &CurvePath) {
        let style = self.render_style;
        let segments =
            path.trimmed_flatten(self.model.reveal_progress, style.curve_steps_per_segment);
        frame
            .lines
            .extend(segments.into_iter().map(|segment| {
                LinePrimitive::new(
                    segment.x1,
                    segment.y1,
                    segment.x2,
                    segment.y2,
                    style.line_width,
                    style.line_color,
                )
            }));
    }

    fn append_indicator(&self, frame: &mut RenderFrame) {
        let indicator = self.interaction.indicator();
        if !indicator.visible {
            return;
        }
        let style = self.render_style;
        let viewport = self.model.viewport;

        if let Some(time_label) = indicator.time_label.as_deref().filter(|t| !t.is_empty()) {
            frame.texts.push(TextPrimitive::new(
                time_label,
                indicator.x,
                0.0,
                style.indicator_font_size_px,
                style.indicator_color,
                TextHAlign::Center,
            ));
        }

        // The line hangs from the label at the top edge, not from the curve point.
        let line_top = style.indicator_font_size_px + style.indicator_label_gap_px;
        let line_bottom = (line_top + style.indicator_line_height_px).min(viewport.height);
        if line_bottom > line_top {
            frame.lines.push(LinePrimitive::new(
                indicator.x,
                line_top,
                indicator.x,
                line_bottom,
                style.indicator_line_width,
                style.indicator_color,
            ));
        }

        let size = style.indicator_marker_size_px;
        if size > 0.0 {
            frame.rects.push(
                RectPrimitive::new(
                    indicator.x - size / 2.0,
                    indicator.y - size / 2.0,
                    size,
                    size,
                    style.line_color,
                )
                .with_border(MARKER_OUTLINE_WIDTH, Color::rgb(1.0, 1.0, 1.0))
                .with_corner_radius(size / 2.0),
            );
        }
    }
}
