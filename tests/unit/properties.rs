//! Property tests for the motion laws.

use core::convert::Infallible;
use core::time::Duration;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};
use proptest::prelude::*;

use stage_motion::config::units::{EncoderClicks, Steps};
use stage_motion::config::{MechanicalConstraints, StageConfig, TimingConfig};
use stage_motion::{
    DisplayGate, LimitSenses, MotionController, MotionState, PositionDisplay, StepActuator,
};

struct FakePin;

impl ErrorType for FakePin {
    type Error = Infallible;
}

impl OutputPin for FakePin {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

struct NoDelay;

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

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

struct NullDisplay;

impl PositionDisplay for NullDisplay {
    type Error = Infallible;

    fn init(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn render(&mut self, _text: &str) -> Result<(), Self::Error> {
        Ok(())
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

fn controller() -> MotionController<FakePin, FakePin, NoDelay, ClearSenses> {
    let actuator = StepActuator::new(
        FakePin,
        FakePin,
        NoDelay,
        ClearSenses,
        constraints(),
        1000,
        false,
    );
    MotionController::new(actuator, &TimingConfig::default())
}

fn display() -> DisplayGate<NullDisplay, fn() -> Duration> {
    DisplayGate::new(NullDisplay, || Duration::ZERO, 250)
}

proptest! {
    /// `turn(n)` then `turn(-n)` restores the step count when no limit
    /// interferes.
    #[test]
    fn prop_turn_round_trip(n in -400i64..=400) {
        let mut ctrl = controller();
        let mut state = MotionState::new();
        let mut gate = display();

        ctrl.turn(&mut state, &mut gate, Steps(n)).unwrap();
        prop_assert_eq!(state.steps(), Steps(n));

        ctrl.turn(&mut state, &mut gate, Steps(-n)).unwrap();
        prop_assert_eq!(state.steps(), Steps(0));
    }

    /// Driving the knob to `c` and back to `-c` is symmetric about zero.
    #[test]
    fn prop_knob_round_trip(c in -2000i64..=2000) {
        let constraints = constraints();
        let fwd = constraints.steps_from_encoder(EncoderClicks(c));
        let back = constraints.steps_from_encoder(EncoderClicks(-c));
        prop_assert_eq!(fwd.value(), -back.value());
    }

    /// The millimeter position is always the pure projection of the step
    /// count.
    #[test]
    fn prop_position_projects_steps(n in -5000i64..=5000) {
        let mut ctrl = controller();
        let mut state = MotionState::new();
        let mut gate = display();

        ctrl.turn_to(&mut state, &mut gate, Steps(n)).unwrap();
        prop_assert_eq!(state.steps(), Steps(n));

        let expected = constraints().position_from_steps(Steps(n));
        prop_assert_eq!(state.position(), expected);
    }
}
