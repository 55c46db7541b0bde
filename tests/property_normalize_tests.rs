use linechart_rs::core::normalize;
use proptest::num::f64::{NEGATIVE, NORMAL, POSITIVE, SUBNORMAL, ZERO};
use proptest::prelude::*;

fn any_finite() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(f64::MAX),
        Just(f64::MIN),
        POSITIVE | NEGATIVE | NORMAL | SUBNORMAL | ZERO,
    ]
}

proptest! {
    #[test]
    fn normalized_points_stay_in_unit_square(
        values in proptest::collection::vec(-1_000_000.0f64..1_000_000.0, 1..128)
    ) {
        let points = normalize(&values);
        prop_assert_eq!(points.len(), values.len());

        for point in &points {
            prop_assert!((0.0..=1.0).contains(&point.x));
            prop_assert!((0.0..=1.0).contains(&point.y));
        }
        for pair in points.windows(2) {
            prop_assert!(pair[0].x <= pair[1].x);
        }
    }

    #[test]
    fn normalized_points_stay_in_unit_square_across_full_f64_range(
        values in proptest::collection::vec(any_finite(), 1..64)
    ) {
        for point in normalize(&values) {
            prop_assert!((0.0..=1.0).contains(&point.x));
            prop_assert!((0.0..=1.0).contains(&point.y));
        }
    }

    #[test]
    fn normalize_is_pure(values in proptest::collection::vec(-500.0f64..500.0, 0..64)) {
        prop_assert_eq!(normalize(&values), normalize(&values));
    }

    #[test]
    fn constant_series_never_produces_nan(value in -1e9f64..1e9, len in 1usize..32) {
        let values = vec![value; len];
        let points = normalize(&values);
        let first_y = points[0].y;
        for point in &points {
            prop_assert!(!point.y.is_nan());
            prop_assert_eq!(point.y, first_y);
        }
    }
}
