//! Top-level polling reconciler.
//!
//! Reads the operator inputs each cycle and decides which motion behavior
//! to invoke.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::clock::Clock;
use crate::config::{MechanicalConstraints, SystemConfig};
use crate::error::{ConfigError, Error, Result};
use crate::io::buttons::JogButtons;
use crate::io::display::{DisplayGate, PositionDisplay};
use crate::io::encoder::PositionKnob;
use crate::io::switches::LimitSenses;
use crate::motion::MotionController;
use crate::motor::{Direction, MotionState, StepActuator};

/// The control loop: owns the [`MotionState`] aggregate and every hardware
/// capability, and arbitrates operator input once per cycle.
///
/// Priority per cycle is strict: knob motion first (the most precise input
/// must never be starved by button state), then the zero action, then the
/// up and down travel buttons. Whatever behavior wins runs to completion
/// before the next cycle begins; lower-priority inputs are simply not
/// serviced while it blocks.
pub struct Reconciler<STEP, DIR, DELAY, SENSE, BTNS, KNOB, DISP, CLK>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
    SENSE: LimitSenses,
    BTNS: JogButtons,
    KNOB: PositionKnob,
    DISP: PositionDisplay,
    CLK: Clock,
{
    controller: MotionController<STEP, DIR, DELAY, SENSE>,
    buttons: BTNS,
    knob: KNOB,
    display: DisplayGate<DISP, CLK>,
    state: MotionState,
}

impl<STEP, DIR, DELAY, SENSE, BTNS, KNOB, DISP, CLK>
    Reconciler<STEP, DIR, DELAY, SENSE, BTNS, KNOB, DISP, CLK>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
    SENSE: LimitSenses,
    BTNS: JogButtons,
    KNOB: PositionKnob,
    DISP: PositionDisplay,
    CLK: Clock,
{
    /// Current coordinate state.
    #[inline]
    pub fn state(&self) -> &MotionState {
        &self.state
    }

    /// Get the motion controller.
    #[inline]
    pub fn controller_mut(&mut self) -> &mut MotionController<STEP, DIR, DELAY, SENSE> {
        &mut self.controller
    }

    /// Run one poll cycle.
    ///
    /// # Errors
    ///
    /// Propagates hardware faults from step emission; interlock-blocked
    /// motion is not an error and simply ends the winning behavior early.
    pub fn poll(&mut self) -> Result<()> {
        let clicks = self.knob.read();

        if clicks != self.state.encoder() {
            self.state.set_encoder(clicks);
            let target = self
                .controller
                .actuator()
                .constraints()
                .steps_from_encoder(clicks);
            self.controller
                .turn_to(&mut self.state, &mut self.display, target)?;
        } else if self.controller.zero_button_held() {
            self.controller
                .zero(&mut self.state, &mut self.knob, &mut self.display)?;
        } else if self.buttons.up_held() {
            self.controller.jog(
                &mut self.state,
                &mut self.display,
                &mut self.buttons,
                Direction::Up,
            )?;
        } else if self.buttons.down_held() {
            self.controller.jog(
                &mut self.state,
                &mut self.display,
                &mut self.buttons,
                Direction::Down,
            )?;
        }

        Ok(())
    }

    /// Run the poll loop indefinitely.
    ///
    /// Returns only if a cycle fails with a hardware fault.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.poll()?;
        }
    }
}

/// Builder for assembling a [`Reconciler`] from configuration and hardware.
///
/// Initializes the display and zeroes the knob counter as part of
/// [`build`](Self::build), mirroring device startup.
pub struct ReconcilerBuilder<STEP, DIR, DELAY, SENSE, BTNS, KNOB, DISP, CLK>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
    SENSE: LimitSenses,
    BTNS: JogButtons,
    KNOB: PositionKnob,
    DISP: PositionDisplay,
    CLK: Clock,
{
    config: Option<SystemConfig>,
    step_pin: Option<STEP>,
    dir_pin: Option<DIR>,
    delay: Option<DELAY>,
    senses: Option<SENSE>,
    buttons: Option<BTNS>,
    knob: Option<KNOB>,
    display: Option<DISP>,
    clock: Option<CLK>,
}

impl<STEP, DIR, DELAY, SENSE, BTNS, KNOB, DISP, CLK> Default
    for ReconcilerBuilder<STEP, DIR, DELAY, SENSE, BTNS, KNOB, DISP, CLK>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
    SENSE: LimitSenses,
    BTNS: JogButtons,
    KNOB: PositionKnob,
    DISP: PositionDisplay,
    CLK: Clock,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<STEP, DIR, DELAY, SENSE, BTNS, KNOB, DISP, CLK>
    ReconcilerBuilder<STEP, DIR, DELAY, SENSE, BTNS, KNOB, DISP, CLK>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
    SENSE: LimitSenses,
    BTNS: JogButtons,
    KNOB: PositionKnob,
    DISP: PositionDisplay,
    CLK: Clock,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            config: None,
            step_pin: None,
            dir_pin: None,
            delay: None,
            senses: None,
            buttons: None,
            knob: None,
            display: None,
            clock: None,
        }
    }

    /// Set the validated system configuration.
    pub fn config(mut self, config: SystemConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the STEP pin.
    pub fn step_pin(mut self, pin: STEP) -> Self {
        self.step_pin = Some(pin);
        self
    }

    /// Set the DIR pin.
    pub fn dir_pin(mut self, pin: DIR) -> Self {
        self.dir_pin = Some(pin);
        self
    }

    /// Set the delay provider.
    pub fn delay(mut self, delay: DELAY) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Set the limit switches and zero button.
    pub fn senses(mut self, senses: SENSE) -> Self {
        self.senses = Some(senses);
        self
    }

    /// Set the travel buttons.
    pub fn buttons(mut self, buttons: BTNS) -> Self {
        self.buttons = Some(buttons);
        self
    }

    /// Set the rotary knob.
    pub fn knob(mut self, knob: KNOB) -> Self {
        self.knob = Some(knob);
        self
    }

    /// Set the position display.
    pub fn display(mut self, display: DISP) -> Self {
        self.display = Some(display);
        self
    }

    /// Set the time source for display rate limiting.
    pub fn clock(mut self, clock: CLK) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Build the reconciler.
    ///
    /// Validates the configuration, brings up the display, zeroes the knob
    /// counter, and renders the initial position.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` for a missing or invalid field, or
    /// [`DisplayError::InitFailed`](crate::error::DisplayError::InitFailed)
    /// if the display does not come up — the one unrecoverable startup
    /// condition; callers are expected to halt on it.
    pub fn build(
        self,
    ) -> Result<Reconciler<STEP, DIR, DELAY, SENSE, BTNS, KNOB, DISP, CLK>> {
        let config = self.config.ok_or_else(|| missing("config"))?;
        let step_pin = self.step_pin.ok_or_else(|| missing("step_pin"))?;
        let dir_pin = self.dir_pin.ok_or_else(|| missing("dir_pin"))?;
        let delay = self.delay.ok_or_else(|| missing("delay"))?;
        let senses = self.senses.ok_or_else(|| missing("senses"))?;
        let buttons = self.buttons.ok_or_else(|| missing("buttons"))?;
        let mut knob = self.knob.ok_or_else(|| missing("knob"))?;
        let display = self.display.ok_or_else(|| missing("display"))?;
        let clock = self.clock.ok_or_else(|| missing("clock"))?;

        crate::config::validate_config(&config)?;

        let constraints = MechanicalConstraints::from_config(&config.stage);
        let actuator = StepActuator::new(
            step_pin,
            dir_pin,
            delay,
            senses,
            constraints,
            config.timing.step_pulse_us,
            config.stage.invert_direction,
        );
        let controller = MotionController::new(actuator, &config.timing);

        let mut display = DisplayGate::new(display, clock, config.timing.display_min_interval_ms);
        display.init()?;

        knob.reset();

        let state = MotionState::new();
        display.refresh(state.position());

        Ok(Reconciler {
            controller,
            buttons,
            knob,
            display,
            state,
        })
    }
}

fn missing(field: &str) -> Error {
    let mut msg: heapless::String<128> = heapless::String::new();
    let _ = msg.push_str(field);
    let _ = msg.push_str(" is required");
    Error::Config(ConfigError::ParseError(msg))
}
