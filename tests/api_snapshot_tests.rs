use std::time::Duration;

use linechart_rs::api::{ChartEngine, ChartEngineConfig, EngineSnapshot};
use linechart_rs::core::{DataPoint, Viewport};
use linechart_rs::render::NullRenderer;

fn engine() -> ChartEngine<NullRenderer> {
    let config = ChartEngineConfig::new(Viewport::new(200.0, 100.0));
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine
        .set_data(vec![
            DataPoint::new(1.0, "1", "8:00 AM"),
            DataPoint::new(4.0, "4", "8:05 AM"),
            DataPoint::new(2.0, "2", "8:10 AM"),
        ])
        .expect("set data");
    engine.set_series_metadata("symbol", "ACME");
    engine.set_series_metadata("unit", "USD");
    engine
}

#[test]
fn snapshot_reflects_series_and_indicator() {
    let mut engine = engine();
    engine.pointer_down(100.0, 20.0, Duration::ZERO);

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.points_len, 3);
    let range = snapshot.value_range.expect("range");
    assert_eq!((range.min, range.max), (1.0, 4.0));
    assert!(snapshot.interaction_in_progress);
    assert_eq!(snapshot.indicator.index, Some(1));
    assert_eq!(
        snapshot.series_metadata.keys().collect::<Vec<_>>(),
        vec!["symbol", "unit"]
    );
}

#[test]
fn snapshot_json_round_trips_with_and_without_envelope() {
    let engine = engine();
    let json = engine.snapshot_json_pretty().expect("json");
    assert!(json.contains("\"schema_version\": 1"));

    let parsed = EngineSnapshot::from_json_str(&json).expect("parse");
    assert_eq!(parsed, engine.snapshot());

    let bare = serde_json::to_string(&engine.snapshot()).expect("bare json");
    let parsed_bare = EngineSnapshot::from_json_str(&bare).expect("parse bare");
    assert_eq!(parsed_bare, engine.snapshot());
}

#[test]
fn snapshot_rejects_unknown_schema_version() {
    let engine = engine();
    let json = engine
        .snapshot_json_pretty()
        .expect("json")
        .replace("\"schema_version\": 1", "\"schema_version\": 9");
    assert!(EngineSnapshot::from_json_str(&json).is_err());
}
