//! Unit tests for the coordinate conversions, through the public API.

use stage_motion::config::units::{EncoderClicks, Millimeters, Steps};
use stage_motion::config::{MechanicalConstraints, StageConfig};

fn constraints() -> MechanicalConstraints {
    let config = StageConfig {
        name: heapless::String::try_from("z_axis").unwrap(),
        steps_per_revolution: 200,
        screw_lead: 8.0,
        gear_ratio: 4.0,
        vertical_step: 0.1,
        encoder_substeps: 4,
        invert_direction: false,
    };
    MechanicalConstraints::from_config(&config)
}

/// The derived scales for the reference hardware.
#[test]
fn test_reference_scales() {
    let c = constraints();
    assert_eq!(c.steps_per_mm, 100.0);
    assert_eq!(c.mm_per_click, 0.025);
}

/// `position_from_steps` is exactly steps divided by the scale.
#[test]
fn test_position_from_steps_exact() {
    let c = constraints();
    for s in [-100_000i64, -250, -1, 0, 1, 37, 250, 100_000] {
        let mm = c.position_from_steps(Steps(s));
        assert_eq!(mm.value(), s as f32 / c.steps_per_mm);
    }
}

/// Increasing clicks move the stage down.
#[test]
fn test_encoder_sign_convention() {
    let c = constraints();
    assert!(c.position_from_encoder(EncoderClicks(4)).value() < 0.0);
    assert!(c.position_from_encoder(EncoderClicks(-4)).value() > 0.0);
    assert_eq!(c.position_from_encoder(EncoderClicks(0)), Millimeters(0.0));
}

/// One full detent (4 clicks) is one vertical step of 0.1 mm, which is 10
/// motor steps on the reference mechanics.
#[test]
fn test_detent_to_steps() {
    let c = constraints();
    assert_eq!(c.steps_from_encoder(EncoderClicks(4)), Steps(-10));
    assert_eq!(c.steps_from_encoder(EncoderClicks(8)), Steps(-20));
    assert_eq!(c.steps_from_encoder(EncoderClicks(-4)), Steps(10));
}

/// `steps_from_encoder` rounds at the integer step boundary rather than
/// truncating toward zero.
#[test]
fn test_steps_from_encoder_rounds() {
    // 1 click on coarse mechanics: 0.025 mm * 3 steps/mm = 0.075 steps,
    // which truncation would lose entirely.
    let config = StageConfig {
        name: heapless::String::try_from("coarse").unwrap(),
        steps_per_revolution: 24,
        screw_lead: 8.0,
        gear_ratio: 1.0,
        vertical_step: 0.1,
        encoder_substeps: 4,
        invert_direction: false,
    };
    let c = MechanicalConstraints::from_config(&config);
    assert_eq!(c.steps_from_encoder(EncoderClicks(7)), Steps(-1));
    assert_eq!(c.steps_from_encoder(EncoderClicks(6)), Steps(0));
}
