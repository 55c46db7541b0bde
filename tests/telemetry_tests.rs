use linechart_rs::telemetry::init_default_tracing;

#[test]
fn default_tracing_installs_at_most_once() {
    assert_eq!(init_default_tracing(), cfg!(feature = "telemetry"));
    assert!(!init_default_tracing());
}
