use approx::assert_abs_diff_eq;
use linechart_rs::core::{
    CurvePath, LineStyle, NormalizedPoint, PixelPoint, Viewport, build_path, normalize,
};

fn viewport() -> Viewport {
    Viewport::new(400.0, 200.0)
}

#[test]
fn empty_path_has_no_points() {
    let path = build_path(&[], viewport());
    assert!(path.is_empty());
    assert!(path.point_at_fraction(0.5).is_none());
    assert!(path.flatten(8).is_empty());
    assert!(path.area_polygon(8).is_empty());
}

#[test]
fn single_point_path_answers_with_its_anchor() {
    let path = build_path(&normalize(&[7.0]), viewport());
    assert!(path.segments().is_empty());
    assert_eq!(path.anchors(), &[PixelPoint::new(200.0, 100.0)]);

    let point = path.point_at_fraction(0.9).expect("anchor point");
    assert_abs_diff_eq!(point.y, 100.0);
    assert!(path.flatten(8).is_empty());
}

#[test]
fn curve_passes_through_every_sample() {
    let values = [8.0, 23.0, 32.0, 7.0, 23.0, 43.0];
    let path = build_path(&normalize(&values), viewport());
    assert_eq!(path.segments().len(), (values.len() - 1) * 2);

    for anchor in path.anchors() {
        let on_curve = path.point_at_x(anchor.x).expect("point on curve");
        assert_abs_diff_eq!(on_curve.y, anchor.y, epsilon = 1e-9);
    }
}

#[test]
fn larger_values_are_drawn_higher() {
    let path = build_path(&normalize(&[0.0, 10.0]), viewport());
    let anchors = path.anchors();
    assert_abs_diff_eq!(anchors[0].y, 200.0);
    assert_abs_diff_eq!(anchors[1].y, 0.0);
}

#[test]
fn curve_midpoint_between_two_samples_is_halfway() {
    let path = build_path(&normalize(&[0.0, 10.0]), viewport());
    let middle = path.point_at_fraction(0.5).expect("middle");
    assert_abs_diff_eq!(middle.x, 200.0);
    assert_abs_diff_eq!(middle.y, 100.0, epsilon = 1e-9);

    // Horizontal tangents at the samples keep the first quarter close to the start.
    let quarter = path.point_at_fraction(0.25).expect("quarter");
    assert!(quarter.y > 150.0);
}

#[test]
fn point_queries_are_clamped_to_the_curve() {
    let path = build_path(&normalize(&[1.0, 2.0, 3.0]), viewport());
    let before = path.point_at_x(-50.0).expect("clamped");
    assert_abs_diff_eq!(before.x, 0.0);
    assert_abs_diff_eq!(before.y, 200.0);

    let after = path.point_at_fraction(4.0).expect("clamped");
    assert_abs_diff_eq!(after.x, 400.0);
    assert_abs_diff_eq!(after.y, 0.0);

    assert!(path.point_at_fraction(f64::NAN).is_none());
}

#[test]
fn straight_style_interpolates_linearly() {
    let points = [NormalizedPoint::new(0.0, 0.0), NormalizedPoint::new(1.0, 1.0)];
    let path = CurvePath::build_with_style(&points, viewport(), LineStyle::Straight);
    assert_eq!(path.segments().len(), 1);

    let point = path.point_at_fraction(0.25).expect("point");
    assert_abs_diff_eq!(point.y, 150.0, epsilon = 1e-9);
}

#[test]
fn flatten_joins_consecutive_vertices() {
    let path = build_path(&normalize(&[3.0, 1.0, 4.0, 1.0]), viewport());
    let segments = path.flatten(4);
    assert_eq!(segments.len(), path.segments().len() * 4);

    for pair in segments.windows(2) {
        assert_abs_diff_eq!(pair[0].x2, pair[1].x1);
        assert_abs_diff_eq!(pair[0].y2, pair[1].y1);
    }
    assert_abs_diff_eq!(segments[0].x1, 0.0);
    assert_abs_diff_eq!(segments.last().expect("last").x2, 400.0);
}

#[test]
fn trimmed_flatten_stops_at_requested_fraction() {
    let path = build_path(&normalize(&[3.0, 1.0, 4.0, 1.0, 5.0]), viewport());

    assert!(path.trimmed_flatten(0.0, 8).is_empty());
    assert_eq!(path.trimmed_flatten(1.0, 8), path.flatten(8));

    let half = path.trimmed_flatten(0.5, 8);
    let end = half.last().expect("trimmed end");
    assert_abs_diff_eq!(end.x2, 200.0, epsilon = 1e-9);
    assert!(half.iter().all(|segment| segment.x2 <= 200.0 + 1e-9));
}

#[test]
fn area_polygon_closes_along_the_bottom_edge() {
    let path = build_path(&normalize(&[1.0, 3.0, 2.0]), viewport());
    let outline = path.area_polygon(4);
    let count = outline.len();
    assert_eq!(count, path.polyline(4).len() + 2);
    assert_eq!(outline[count - 2], PixelPoint::new(400.0, 200.0));
    assert_eq!(outline[count - 1], PixelPoint::new(0.0, 200.0));
}
