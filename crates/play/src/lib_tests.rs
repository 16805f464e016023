use super::*;
use tracing::level_filters::LevelFilter;

#[test]
fn test_log_filter_defaults_to_info() {
    assert_eq!(log_filter_from(None).max_level_hint(), Some(LevelFilter::INFO));
    assert_eq!(log_filter_from(Some("")).max_level_hint(), Some(LevelFilter::INFO));
}

#[test]
fn test_log_filter_honours_rust_log_level() {
    assert_eq!(
        log_filter_from(Some("debug")).max_level_hint(),
        Some(LevelFilter::DEBUG)
    );
    assert_eq!(
        log_filter_from(Some("warn")).max_level_hint(),
        Some(LevelFilter::WARN)
    );
}

#[test]
fn test_log_filter_reaches_evaluator_traces() {
    let filter = log_filter_from(Some("persona_engine=trace"));
    assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
}
