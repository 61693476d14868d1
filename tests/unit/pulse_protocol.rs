//! Unit tests for the step pulse protocol, against embedded-hal-mock pins.

use embedded_hal_mock::eh1::delay::NoopDelay;
use embedded_hal_mock::eh1::digital::{
    Mock as PinMock, State as PinState, Transaction as PinTransaction,
};

use stage_motion::config::{MechanicalConstraints, StageConfig};
use stage_motion::{LimitSenses, MotionState, StepActuator};

struct ClearSenses;

impl LimitSenses for ClearSenses {
    fn at_top_limit(&mut self) -> bool {
        false
    }

    fn at_bottom_limit(&mut self) -> bool {
        false
    }

    fn zero_button_held(&mut self) -> bool {
        false
    }
}

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

/// Upward steps drive DIR low once, then pulse STEP high-low per step.
#[test]
fn test_step_up_pulse_sequence() {
    let step_expectations = [
        PinTransaction::set(PinState::High),
        PinTransaction::set(PinState::Low),
        PinTransaction::set(PinState::High),
        PinTransaction::set(PinState::Low),
    ];
    let dir_expectations = [PinTransaction::set(PinState::Low)];

    let mut step_pin = PinMock::new(&step_expectations);
    let mut dir_pin = PinMock::new(&dir_expectations);

    let mut actuator = StepActuator::new(
        step_pin.clone(),
        dir_pin.clone(),
        NoopDelay::new(),
        ClearSenses,
        constraints(),
        1000,
        false,
    );
    let mut state = MotionState::new();

    assert_eq!(actuator.step_up(&mut state), Ok(true));
    assert_eq!(actuator.step_up(&mut state), Ok(true));

    step_pin.done();
    dir_pin.done();
}

/// A direction change rewrites DIR exactly once.
#[test]
fn test_direction_change_rewrites_dir() {
    let step_expectations = [
        PinTransaction::set(PinState::High),
        PinTransaction::set(PinState::Low),
        PinTransaction::set(PinState::High),
        PinTransaction::set(PinState::Low),
    ];
    let dir_expectations = [
        PinTransaction::set(PinState::Low),
        PinTransaction::set(PinState::High),
    ];

    let mut step_pin = PinMock::new(&step_expectations);
    let mut dir_pin = PinMock::new(&dir_expectations);

    let mut actuator = StepActuator::new(
        step_pin.clone(),
        dir_pin.clone(),
        NoopDelay::new(),
        ClearSenses,
        constraints(),
        1000,
        false,
    );
    let mut state = MotionState::new();

    assert_eq!(actuator.step_up(&mut state), Ok(true));
    assert_eq!(actuator.step_down(&mut state), Ok(true));

    step_pin.done();
    dir_pin.done();
}

/// A blocked attempt must not touch either pin.
#[test]
fn test_blocked_step_touches_no_pins() {
    struct Blocked;

    impl LimitSenses for Blocked {
        fn at_top_limit(&mut self) -> bool {
            true
        }

        fn at_bottom_limit(&mut self) -> bool {
            false
        }

        fn zero_button_held(&mut self) -> bool {
            false
        }
    }

    let mut step_pin = PinMock::new(&[]);
    let mut dir_pin = PinMock::new(&[]);

    let mut actuator = StepActuator::new(
        step_pin.clone(),
        dir_pin.clone(),
        NoopDelay::new(),
        Blocked,
        constraints(),
        1000,
        false,
    );
    let mut state = MotionState::new();

    assert_eq!(actuator.step_up(&mut state), Ok(false));

    step_pin.done();
    dir_pin.done();
}
