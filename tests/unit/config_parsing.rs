//! Unit tests for TOML configuration parsing.

use stage_motion::config::{parse_config, SystemConfig};

/// Test parsing a full stage configuration from TOML.
#[test]
fn test_parse_stage_config() {
    let toml_str = r#"
[stage]
name = "z_axis"
steps_per_revolution = 200
screw_lead_mm = 8.0
gear_ratio = 4.0
vertical_step_mm = 0.1
encoder_substeps = 4
invert_direction = false

[timing]
step_pulse_us = 1000
jog_debounce_ms = 300
settle_ms = 5
display_min_interval_ms = 250
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.stage.name.as_str(), "z_axis");
    assert_eq!(config.stage.steps_per_revolution, 200);
    assert_eq!(config.stage.screw_lead, 8.0);
    assert_eq!(config.stage.gear_ratio, 4.0);
    assert_eq!(config.stage.vertical_step, 0.1);
    assert_eq!(config.stage.encoder_substeps, 4);
    assert!(!config.stage.invert_direction);
    assert_eq!(config.timing.step_pulse_us, 1000);
    assert_eq!(config.timing.settle_ms, 5);
}

/// Timing defaults to the reference hardware when the table is omitted.
#[test]
fn test_timing_defaults() {
    let toml_str = r#"
[stage]
name = "z_axis"
steps_per_revolution = 200
screw_lead_mm = 8.0
gear_ratio = 4.0
vertical_step_mm = 0.1
encoder_substeps = 4
"#;

    let config = parse_config(toml_str).expect("Should parse without timing table");

    assert_eq!(config.timing.step_pulse_us, 1000);
    assert_eq!(config.timing.jog_debounce_ms, 300);
    assert_eq!(config.timing.settle_ms, 5);
    assert_eq!(config.timing.display_min_interval_ms, 250);
}

/// `parse_config` validates as well as parses.
#[test]
fn test_parse_rejects_invalid_mechanics() {
    let toml_str = r#"
[stage]
name = "z_axis"
steps_per_revolution = 200
screw_lead_mm = -8.0
vertical_step_mm = 0.1
encoder_substeps = 4
"#;

    assert!(parse_config(toml_str).is_err());
}

/// Missing required mechanics are a parse error, not a default.
#[test]
fn test_missing_field_rejected() {
    let toml_str = r#"
[stage]
name = "z_axis"
steps_per_revolution = 200
"#;

    assert!(parse_config(toml_str).is_err());
}
