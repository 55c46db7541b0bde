use std::time::Duration;

use linechart_rs::interaction::{SwipeBehavior, SwipeDirection, classify_swipe};

#[test]
fn fast_long_drag_is_a_swipe() {
    let behavior = SwipeBehavior::default();
    assert_eq!(
        classify_swipe(Duration::from_millis(100), 150.0, behavior),
        Some(SwipeDirection::Right)
    );
    assert_eq!(
        classify_swipe(Duration::from_millis(100), -150.0, behavior),
        Some(SwipeDirection::Left)
    );
}

#[test]
fn slow_drag_is_not_a_swipe() {
    assert_eq!(
        classify_swipe(Duration::from_millis(500), 150.0, SwipeBehavior::default()),
        None
    );
}

#[test]
fn short_drag_is_not_a_swipe() {
    assert_eq!(
        classify_swipe(Duration::from_millis(50), 80.0, SwipeBehavior::default()),
        None
    );
    assert_eq!(
        classify_swipe(Duration::from_millis(50), -99.0, SwipeBehavior::default()),
        None
    );
}

#[test]
fn custom_thresholds_are_honoured() {
    let behavior = SwipeBehavior {
        min_distance_px: 40.0,
        max_elapsed_ms: 1_000,
    };
    assert_eq!(
        classify_swipe(Duration::from_millis(900), -41.0, behavior),
        Some(SwipeDirection::Left)
    );
    assert_eq!(behavior.max_elapsed(), Duration::from_secs(1));
}

#[test]
fn non_finite_travel_is_not_a_swipe() {
    assert_eq!(
        classify_swipe(Duration::ZERO, f64::NAN, SwipeBehavior::default()),
        None
    );
}
