use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use approx::assert_abs_diff_eq;
use linechart_rs::api::{ChartEngine, ChartEngineConfig, GestureOutcome, SwipeDirection};
use linechart_rs::core::{DataPoint, Viewport};
use linechart_rs::render::NullRenderer;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn engine_with_five_points() -> ChartEngine<NullRenderer> {
    let config = ChartEngineConfig::new(Viewport::new(100.0, 200.0));
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine
        .set_data(vec![
            DataPoint::new(10.0, "$10", "9:00 AM"),
            DataPoint::new(20.0, "$20", "9:15 AM"),
            DataPoint::new(15.0, "$15", "9:30 AM"),
            DataPoint::new(30.0, "$30", "9:45 AM"),
            DataPoint::new(25.0, "$25", "10:00 AM"),
        ])
        .expect("set data");
    engine
}

#[test]
fn pointer_down_selects_nearest_sample_immediately() {
    let mut engine = engine_with_five_points();

    let outcome = engine.pointer_down(50.0, 80.0, ms(0));
    let GestureOutcome::Selected(selection) = outcome else {
        panic!("expected selection, got {outcome:?}");
    };
    assert_eq!(selection.index, 2);
    assert!(engine.interaction_in_progress());

    let indicator = engine.indicator_state();
    assert!(indicator.visible);
    assert_abs_diff_eq!(indicator.x, 50.0);
    assert_eq!(indicator.time_label.as_deref(), Some("9:30 AM"));
    assert_eq!(indicator.label.as_deref(), Some("$15"));

    let current = engine.current_value().expect("current value");
    assert_abs_diff_eq!(current.value, 15.0);
}

#[test]
fn indicator_sits_on_the_curve() {
    let mut engine = engine_with_five_points();
    engine.pointer_down(75.0, 10.0, ms(0));

    let expected = engine
        .curve_path()
        .point_at_x(75.0)
        .expect("curve point");
    assert_abs_diff_eq!(engine.indicator_state().y, expected.y);
    // 30 is the series maximum, so the sample sits on the top edge.
    assert_abs_diff_eq!(engine.indicator_state().y, 0.0, epsilon = 1e-9);
}

#[test]
fn small_moves_do_not_update_indicator_until_drag_activates() {
    let mut engine = engine_with_five_points();
    engine.pointer_down(50.0, 80.0, ms(0));

    assert_eq!(
        engine.pointer_move(55.0, 80.0, ms(300)),
        GestureOutcome::Ignored
    );
    assert_eq!(engine.indicator_state().index, Some(2));

    let outcome = engine.pointer_move(80.0, 80.0, ms(400));
    assert!(matches!(outcome, GestureOutcome::Selected(s) if s.index == 3));
    assert_eq!(engine.indicator_state().index, Some(3));

    // Once dragging, every move re-resolves without further thresholds.
    let outcome = engine.pointer_move(77.0, 80.0, ms(450));
    assert!(matches!(outcome, GestureOutcome::Selected(s) if s.index == 3));
    assert_abs_diff_eq!(engine.indicator_state().x, 77.0);
}

#[test]
fn moving_outside_the_chart_clears_selection() {
    let mut engine = engine_with_five_points();
    engine.pointer_down(50.0, 80.0, ms(0));
    engine.pointer_move(70.0, 80.0, ms(500));

    assert_eq!(
        engine.pointer_move(-10.0, 80.0, ms(600)),
        GestureOutcome::NoSelection
    );
    assert!(!engine.indicator_state().visible);
    assert!(engine.current_value().is_none());
    assert!(engine.interaction_in_progress());
}

#[test]
fn fast_horizontal_drag_fires_swipe_once_and_suppresses_indicator() {
    let mut engine = engine_with_five_points();
    let swipes = Rc::new(RefCell::new(Vec::new()));
    let sink = swipes.clone();
    engine.set_swipe_handler(move |direction| sink.borrow_mut().push(direction));

    engine.pointer_down(0.0, 50.0, ms(1_000));
    assert_eq!(
        engine.pointer_move(150.0, 50.0, ms(1_100)),
        GestureOutcome::Swiped(SwipeDirection::Right)
    );
    assert!(!engine.indicator_state().visible);
    assert!(engine.current_value().is_none());

    assert_eq!(
        engine.pointer_move(60.0, 50.0, ms(1_150)),
        GestureOutcome::Suppressed
    );
    assert_eq!(
        engine.pointer_move(200.0, 50.0, ms(1_160)),
        GestureOutcome::Suppressed
    );
    assert!(!engine.indicator_state().visible);
    assert_eq!(*swipes.borrow(), vec![SwipeDirection::Right]);

    engine.pointer_up();
    assert!(!engine.interaction_in_progress());
}

#[test]
fn slow_long_drag_routes_to_touch_resolver() {
    let mut engine = engine_with_five_points();
    let swipes = Rc::new(RefCell::new(Vec::new()));
    let sink = swipes.clone();
    engine.set_swipe_handler(move |direction| sink.borrow_mut().push(direction));

    engine.pointer_down(100.0, 50.0, ms(0));
    let outcome = engine.pointer_move(-50.0, 50.0, ms(500));
    assert_eq!(outcome, GestureOutcome::NoSelection);

    let outcome = engine.pointer_move(0.0, 50.0, ms(600));
    assert!(matches!(outcome, GestureOutcome::Selected(s) if s.index == 0));
    assert!(swipes.borrow().is_empty());
}

#[test]
fn leftward_swipe_reports_left() {
    let mut engine = engine_with_five_points();
    let swipes = Rc::new(RefCell::new(Vec::new()));
    let sink = swipes.clone();
    engine.set_swipe_handler(move |direction| sink.borrow_mut().push(direction));

    engine.pointer_down(100.0, 50.0, ms(0));
    engine.pointer_move(-20.0, 50.0, ms(120));
    assert_eq!(*swipes.borrow(), vec![SwipeDirection::Left]);
}

#[test]
fn new_gesture_starts_fresh_after_swipe() {
    let mut engine = engine_with_five_points();
    engine.pointer_down(0.0, 50.0, ms(0));
    engine.pointer_move(150.0, 50.0, ms(50));
    engine.pointer_up();

    let outcome = engine.pointer_down(100.0, 50.0, ms(2_000));
    assert!(matches!(outcome, GestureOutcome::Selected(s) if s.index == 4));
    assert!(engine.indicator_state().visible);
}

#[test]
fn pointer_up_hides_indicator_and_ends_session() {
    let mut engine = engine_with_five_points();
    engine.pointer_down(25.0, 50.0, ms(0));
    assert!(engine.gesture_session().is_some());

    engine.pointer_up();
    assert!(engine.gesture_session().is_none());
    assert!(!engine.indicator_state().visible);
    assert!(engine.current_value().is_none());

    assert_eq!(
        engine.pointer_move(30.0, 50.0, ms(10)),
        GestureOutcome::Ignored
    );
}

#[test]
fn empty_series_never_selects() {
    let config = ChartEngineConfig::new(Viewport::new(100.0, 200.0));
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");

    assert_eq!(
        engine.pointer_down(50.0, 50.0, ms(0)),
        GestureOutcome::NoSelection
    );
    assert!(!engine.indicator_state().visible);
}

#[test]
fn replacing_data_mid_gesture_hides_stale_indicator() {
    let mut engine = engine_with_five_points();
    engine.pointer_down(50.0, 50.0, ms(0));
    assert!(engine.indicator_state().visible);

    engine.set_values(&[1.0, 2.0]).expect("set values");
    assert!(!engine.indicator_state().visible);
    assert!(engine.interaction_in_progress());
}

#[test]
fn extreme_finite_values_keep_indicator_and_frame_finite() {
    let config = ChartEngineConfig::new(Viewport::new(100.0, 200.0));
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine
        .set_values(&[-f64::MAX, f64::MAX])
        .expect("finite values");

    let outcome = engine.pointer_down(100.0, 0.0, ms(0));
    assert!(matches!(outcome, GestureOutcome::Selected(_)));
    let indicator = engine.indicator_state();
    assert!(indicator.y.is_finite());
    assert_abs_diff_eq!(indicator.y, 0.0);

    engine.render().expect("render");
}
