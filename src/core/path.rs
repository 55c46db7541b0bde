use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{NormalizedPoint, PixelPoint, Viewport};

/// How consecutive samples are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineStyle {
    /// Quadratic curves with horizontal tangents at each sample.
    #[default]
    Curved,
    /// Straight segments between samples.
    Straight,
}

/// Projected line segment in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl LineSegment {
    #[must_use]
    pub fn between(start: PixelPoint, end: PixelPoint) -> Self {
        Self {
            x1: start.x,
            y1: start.y,
            x2: end.x,
            y2: end.y,
        }
    }
}

/// Quadratic Bezier piece of a [`CurvePath`].
///
/// The control point always sits halfway between the endpoints on the x
/// axis, which keeps x linear in the curve parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadSegment {
    pub start: PixelPoint,
    pub control: PixelPoint,
    pub end: PixelPoint,
}

impl QuadSegment {
    #[must_use]
    pub fn point_at(self, t: f64) -> PixelPoint {
        let u = 1.0 - t;
        PixelPoint::new(
            u * u * self.start.x + 2.0 * u * t * self.control.x + t * t * self.end.x,
            u * u * self.start.y + 2.0 * u * t * self.control.y + t * t * self.end.y,
        )
    }

    #[must_use]
    pub fn y_at_x(self, x: f64) -> f64 {
        let span = self.end.x - self.start.x;
        if span == 0.0 {
            return self.start.y;
        }
        let t = ((x - self.start.x) / span).clamp(0.0, 1.0);
        self.point_at(t).y
    }
}

/// Renderable curve through a normalized series, expressed in pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurvePath {
    viewport: Viewport,
    anchors: Vec<PixelPoint>,
    segments: Vec<QuadSegment>,
}

/// Builds the default curved path for `points` inside `viewport`.
#[must_use]
pub fn build_path(points: &[NormalizedPoint], viewport: Viewport) -> CurvePath {
    CurvePath::build_with_style(points, viewport, LineStyle::Curved)
}

impl CurvePath {
    #[must_use]
    pub fn build_with_style(
        points: &[NormalizedPoint],
        viewport: Viewport,
        style: LineStyle,
    ) -> Self {
        let anchors: Vec<PixelPoint> = points
            .iter()
            .map(|point| to_pixel(*point, viewport))
            .collect();

        let mut segments = Vec::with_capacity(anchors.len().saturating_sub(1) * 2);
        for pair in anchors.windows(2) {
            segments.extend(join(pair[0], pair[1], style));
        }

        Self {
            viewport,
            anchors,
            segments,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Sample positions in pixel space, one per data point.
    #[must_use]
    pub fn anchors(&self) -> &[PixelPoint] {
        &self.anchors
    }

    #[must_use]
    pub fn segments(&self) -> &[QuadSegment] {
        &self.segments
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// Curve point at `fraction` of the viewport width.
    #[must_use]
    pub fn point_at_fraction(&self, fraction: f64) -> Option<PixelPoint> {
        if !fraction.is_finite() {
            return None;
        }
        self.point_at_x(fraction.clamp(0.0, 1.0) * self.viewport.width)
    }

    /// Curve point at pixel column `x`, clamped to the curve's x extent.
    #[must_use]
    pub fn point_at_x(&self, x: f64) -> Option<PixelPoint> {
        if !x.is_finite() {
            return None;
        }
        let first = *self.anchors.first()?;
        let last = *self.anchors.last()?;
        if self.segments.is_empty() {
            return Some(PixelPoint::new(x, first.y));
        }

        let x = x.clamp(first.x, last.x);
        let index = self
            .segments
            .partition_point(|segment| segment.end.x < x)
            .min(self.segments.len() - 1);
        Some(PixelPoint::new(x, self.segments[index].y_at_x(x)))
    }

    /// Samples the curve into a polyline with `steps` points per segment.
    #[must_use]
    pub fn polyline(&self, steps: usize) -> Vec<PixelPoint> {
        let steps = steps.max(1);
        let Some(first) = self.anchors.first() else {
            return Vec::new();
        };

        let mut vertices = Vec::with_capacity(self.segments.len() * steps + 1);
        vertices.push(*first);
        for segment in &self.segments {
            for step in 1..=steps {
                vertices.push(segment.point_at(step as f64 / steps as f64));
            }
        }
        vertices
    }

    #[must_use]
    pub fn flatten(&self, steps: usize) -> Vec<LineSegment> {
        to_line_segments(&self.polyline(steps))
    }

    /// Flattens only the leading `fraction` of the curve's x extent.
    #[must_use]
    pub fn trimmed_flatten(&self, fraction: f64, steps: usize) -> Vec<LineSegment> {
        let (Some(first), Some(last)) = (self.anchors.first(), self.anchors.last()) else {
            return Vec::new();
        };
        if !fraction.is_finite() || fraction <= 0.0 {
            return Vec::new();
        }
        if fraction >= 1.0 {
            return self.flatten(steps);
        }

        let cutoff = first.x + (last.x - first.x) * fraction;
        let mut vertices: Vec<PixelPoint> = self
            .polyline(steps)
            .into_iter()
            .take_while(|vertex| vertex.x < cutoff)
            .collect();
        if let Some(end) = self.point_at_x(cutoff) {
            vertices.push(end);
        }
        to_line_segments(&vertices)
    }

    /// Closed outline between the curve and the bottom edge of the viewport.
    #[must_use]
    pub fn area_polygon(&self, steps: usize) -> Vec<PixelPoint> {
        if self.segments.is_empty() {
            return Vec::new();
        }
        let mut outline = self.polyline(steps);
        let bottom = self.viewport.height;
        if let (Some(first), Some(last)) = (self.anchors.first(), self.anchors.last()) {
            outline.push(PixelPoint::new(last.x, bottom));
            outline.push(PixelPoint::new(first.x, bottom));
        }
        outline
    }
}

fn to_pixel(point: NormalizedPoint, viewport: Viewport) -> PixelPoint {
    PixelPoint::new(
        point.x * viewport.width,
        (1.0 - point.y) * viewport.height,
    )
}

fn join(start: PixelPoint, end: PixelPoint, style: LineStyle) -> SmallVec<[QuadSegment; 2]> {
    let mut pieces = SmallVec::new();
    match style {
        LineStyle::Straight => pieces.push(QuadSegment {
            start,
            control: start.midpoint(end),
            end,
        }),
        LineStyle::Curved => {
            let middle = start.midpoint(end);
            pieces.push(QuadSegment {
                start,
                control: PixelPoint::new((start.x + middle.x) / 2.0, start.y),
                end: middle,
            });
            pieces.push(QuadSegment {
                start: middle,
                control: PixelPoint::new((middle.x + end.x) / 2.0, end.y),
                end,
            });
        }
    }
    pieces
}

fn to_line_segments(vertices: &[PixelPoint]) -> Vec<LineSegment> {
    vertices
        .windows(2)
        .map(|pair| LineSegment::between(pair[0], pair[1]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curved_join_has_horizontal_tangents_at_samples() {
        let pieces = join(
            PixelPoint::new(0.0, 100.0),
            PixelPoint::new(100.0, 0.0),
            LineStyle::Curved,
        );
        assert_eq!(pieces.len(), 2);
        assert_eq!(pieces[0].control.y, pieces[0].start.y);
        assert_eq!(pieces[1].control.y, pieces[1].end.y);
        assert_eq!(pieces[0].end, PixelPoint::new(50.0, 50.0));
    }

    #[test]
    fn straight_join_is_linear() {
        let pieces = join(
            PixelPoint::new(0.0, 0.0),
            PixelPoint::new(10.0, 20.0),
            LineStyle::Straight,
        );
        assert_eq!(pieces.len(), 1);
        assert!((pieces[0].y_at_x(5.0) - 10.0).abs() <= 1e-12);
    }
}
