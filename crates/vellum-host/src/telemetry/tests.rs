//! Tests for telemetry initialisation.

use vellum_config::LogFormat;

use super::{initialise, TelemetrySettings};

#[test]
fn settings_default_to_the_configured_filter_and_format() {
    let settings = TelemetrySettings::new();
    assert_eq!(settings.filter(), "info");
    assert_eq!(settings.format(), LogFormat::Json);
}

#[test]
fn builders_override_filter_and_format() {
    let settings = TelemetrySettings::new()
        .with_filter("debug,vellum_host=trace")
        .with_format(LogFormat::Compact);
    assert_eq!(settings.filter(), "debug,vellum_host=trace");
    assert_eq!(settings.format(), LogFormat::Compact);
}

#[test]
fn repeat_initialisation_is_idempotent() {
    let settings = TelemetrySettings::new().with_format(LogFormat::Compact);
    let first = initialise(&settings);
    let second = initialise(&settings);
    assert!(first.is_ok());
    assert!(second.is_ok());
}
