use std::f64::consts::{FRAC_PI_2, PI};
use std::io::Write;

use cairo::{Context, Format, ImageSurface, LineCap, LineJoin};
use pango::FontDescription;
use tracing::trace;

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, LinePrimitive, PolygonPrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive,
};

/// Primitive counts of the last painted frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub polygons_drawn: usize,
    pub lines_drawn: usize,
    /// Cairo strokes issued for `lines_drawn`; connected runs share one stroke.
    pub strokes_issued: usize,
    pub rects_drawn: usize,
    pub texts_drawn: usize,
}

/// Renderers that can paint a frame into a Cairo context they do not own.
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Cairo/Pango backend.
///
/// `Renderer::render` paints into an owned image surface. Hosts with their
/// own drawing callback go through `CairoContextRenderer` instead.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(format!(
                "cairo surface size must be > 0, got {width}x{height}"
            )));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            last_stats: CairoRenderStats::default(),
        })
    }

    /// Creates a surface covering `viewport`, rounded up to whole pixels.
    pub fn for_viewport(viewport: Viewport) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        Self::new(viewport.width.ceil() as i32, viewport.height.ceil() as i32)
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Encodes the owned surface as PNG.
    pub fn write_png(&self, out: &mut impl Write) -> ChartResult<()> {
        self.surface
            .write_to_png(out)
            .map_err(|err| ChartError::InvalidData(format!("failed to encode png: {err}")))
    }

    fn paint(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| backend_error("failed to clear surface", err))?;
        context.set_line_join(LineJoin::Round);
        context.set_line_cap(LineCap::Round);

        let mut stats = CairoRenderStats::default();
        for polygon in &frame.polygons {
            fill_polygon(context, polygon)?;
            stats.polygons_drawn += 1;
        }
        stats.strokes_issued = stroke_lines(context, &frame.lines)?;
        stats.lines_drawn = frame.lines.len();
        for rect in &frame.rects {
            draw_rect(context, rect)?;
            stats.rects_drawn += 1;
        }
        for text in &frame.texts {
            draw_text(context, text);
            stats.texts_drawn += 1;
        }

        trace!(
            lines = stats.lines_drawn,
            strokes = stats.strokes_issued,
            "cairo frame painted"
        );
        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| backend_error("failed to create cairo context", err))?;
        self.paint(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.paint(context, frame)
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn fill_polygon(context: &Context, polygon: &PolygonPrimitive) -> ChartResult<()> {
    let Some(((x, y), rest)) = polygon.vertices.split_first() else {
        return Ok(());
    };
    context.new_path();
    context.move_to(*x, *y);
    for (x, y) in rest {
        context.line_to(*x, *y);
    }
    context.close_path();
    apply_color(context, polygon.fill_color);
    context
        .fill()
        .map_err(|err| backend_error("failed to fill area", err))
}

/// Strokes lines, joining runs where each line starts at the previous end.
///
/// Returns the number of strokes issued.
fn stroke_lines(context: &Context, lines: &[LinePrimitive]) -> ChartResult<usize> {
    let mut strokes = 0;
    let mut start = 0;
    while let Some(first) = lines.get(start) {
        context.new_path();
        context.move_to(first.x1, first.y1);
        context.line_to(first.x2, first.y2);

        let mut end = start + 1;
        while let Some(next) = lines.get(end) {
            if !continues(&lines[end - 1], next) {
                break;
            }
            context.line_to(next.x2, next.y2);
            end += 1;
        }

        apply_color(context, first.color);
        context.set_line_width(first.stroke_width);
        context
            .stroke()
            .map_err(|err| backend_error("failed to stroke line", err))?;
        strokes += 1;
        start = end;
    }
    Ok(strokes)
}

fn continues(previous: &LinePrimitive, next: &LinePrimitive) -> bool {
    previous.x2 == next.x1
        && previous.y2 == next.y1
        && previous.color == next.color
        && previous.stroke_width == next.stroke_width
}

fn draw_rect(context: &Context, rect: &RectPrimitive) -> ChartResult<()> {
    append_rect_path(context, rect);
    apply_color(context, rect.fill_color);
    if rect.border_width <= 0.0 {
        return context
            .fill()
            .map_err(|err| backend_error("failed to fill marker", err));
    }
    context
        .fill_preserve()
        .map_err(|err| backend_error("failed to fill marker", err))?;
    apply_color(context, rect.border_color);
    context.set_line_width(rect.border_width);
    context
        .stroke()
        .map_err(|err| backend_error("failed to stroke marker border", err))
}

fn append_rect_path(context: &Context, rect: &RectPrimitive) {
    context.new_path();
    let radius = rect
        .corner_radius
        .min(rect.width / 2.0)
        .min(rect.height / 2.0);
    if radius <= 0.0 {
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
        return;
    }

    let right = rect.x + rect.width;
    let bottom = rect.y + rect.height;
    context.new_sub_path();
    context.arc(right - radius, rect.y + radius, radius, -FRAC_PI_2, 0.0);
    context.arc(right - radius, bottom - radius, radius, 0.0, FRAC_PI_2);
    context.arc(rect.x + radius, bottom - radius, radius, FRAC_PI_2, PI);
    context.arc(rect.x + radius, rect.y + radius, radius, PI, PI + FRAC_PI_2);
    context.close_path();
}

fn draw_text(context: &Context, text: &TextPrimitive) {
    let layout = pangocairo::functions::create_layout(context);
    let font = FontDescription::from_string(&format!("Sans {}px", text.font_size_px));
    layout.set_font_description(Some(&font));
    layout.set_text(&text.text);

    let (width, _) = layout.pixel_size();
    let width = f64::from(width);
    let x = match text.h_align {
        TextHAlign::Left => text.x,
        TextHAlign::Center => text.x - width / 2.0,
        TextHAlign::Right => text.x - width,
    };

    apply_color(context, text.color);
    context.move_to(x, text.y);
    pangocairo::functions::show_layout(context, &layout);
}

fn backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
