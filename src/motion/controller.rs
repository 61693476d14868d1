//! Step sequencing.
//!
//! Every behavior here is built from single step attempts; the first
//! blocked attempt is the sole stopping condition, and the next poll
//! cycle's fresh delta is the only retry mechanism.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::clock::Clock;
use crate::config::units::Steps;
use crate::config::TimingConfig;
use crate::error::Result;
use crate::io::buttons::JogButtons;
use crate::io::display::{DisplayGate, PositionDisplay};
use crate::io::encoder::PositionKnob;
use crate::io::switches::LimitSenses;
use crate::motor::{Direction, MotionState, StepActuator};

/// Sequences multiple steps to reach a target, run until blocked, home to
/// an extreme, or re-zero the origin.
///
/// Motion is constant-rate and single-step-at-a-time; all sequencing is
/// synchronous and blocking for its full duration.
pub struct MotionController<STEP, DIR, DELAY, SENSE>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
    SENSE: LimitSenses,
{
    actuator: StepActuator<STEP, DIR, DELAY, SENSE>,

    /// Tap-versus-hold window for the travel buttons, milliseconds.
    jog_debounce_ms: u32,

    /// Settle time after a zero-button release during homing, milliseconds.
    settle_ms: u32,
}

impl<STEP, DIR, DELAY, SENSE> MotionController<STEP, DIR, DELAY, SENSE>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
    SENSE: LimitSenses,
{
    /// Create a controller around an actuator.
    pub fn new(actuator: StepActuator<STEP, DIR, DELAY, SENSE>, timing: &TimingConfig) -> Self {
        Self {
            actuator,
            jog_debounce_ms: timing.jog_debounce_ms,
            settle_ms: timing.settle_ms,
        }
    }

    /// Get the actuator.
    #[inline]
    pub fn actuator(&self) -> &StepActuator<STEP, DIR, DELAY, SENSE> {
        &self.actuator
    }

    /// Get the actuator mutably.
    #[inline]
    pub fn actuator_mut(&mut self) -> &mut StepActuator<STEP, DIR, DELAY, SENSE> {
        &mut self.actuator
    }

    /// True while the zero button is pressed.
    #[inline]
    pub fn zero_button_held(&mut self) -> bool {
        self.actuator.senses_mut().zero_button_held()
    }

    /// Step exactly `|delta|` times in the signed direction, stopping at
    /// the first blocked attempt. One display refresh after the sequence,
    /// complete or not.
    pub fn turn<D, C>(
        &mut self,
        state: &mut MotionState,
        display: &mut DisplayGate<D, C>,
        delta: Steps,
    ) -> Result<()>
    where
        D: PositionDisplay,
        C: Clock,
    {
        let direction = Direction::from_steps(delta.value());
        for _ in 0..delta.abs() {
            if !self.actuator.step(direction, state)? {
                break;
            }
        }
        display.refresh(state.position());
        Ok(())
    }

    /// Step to an absolute target count.
    ///
    /// Recomputes the full delta from the live step count on every call, so
    /// knob motion during an in-progress turn is absorbed into the next
    /// cycle's delta; the system samples a live target rather than queuing
    /// discrete moves.
    pub fn turn_to<D, C>(
        &mut self,
        state: &mut MotionState,
        display: &mut DisplayGate<D, C>,
        target: Steps,
    ) -> Result<()>
    where
        D: PositionDisplay,
        C: Clock,
    {
        let delta = target - state.steps();
        self.turn(state, display, delta)
    }

    /// Step in one direction with no count limit until the first blocked
    /// attempt, then refresh the display once.
    pub fn run_until_blocked<D, C>(
        &mut self,
        state: &mut MotionState,
        display: &mut DisplayGate<D, C>,
        direction: Direction,
    ) -> Result<()>
    where
        D: PositionDisplay,
        C: Clock,
    {
        while self.actuator.step(direction, state)? {}
        display.refresh(state.position());
        Ok(())
    }

    /// Drive the stage to the top extreme, or back to the zero reference if
    /// it sits below zero.
    pub fn home_to_top<D, C>(
        &mut self,
        state: &mut MotionState,
        display: &mut DisplayGate<D, C>,
    ) -> Result<()>
    where
        D: PositionDisplay,
        C: Clock,
    {
        self.home(state, display, Direction::Up)
    }

    /// Drive the stage to the bottom extreme, or back to the zero reference
    /// if it sits above zero.
    pub fn home_to_bottom<D, C>(
        &mut self,
        state: &mut MotionState,
        display: &mut DisplayGate<D, C>,
    ) -> Result<()>
    where
        D: PositionDisplay,
        C: Clock,
    {
        self.home(state, display, Direction::Down)
    }

    fn home<D, C>(
        &mut self,
        state: &mut MotionState,
        display: &mut DisplayGate<D, C>,
        direction: Direction,
    ) -> Result<()>
    where
        D: PositionDisplay,
        C: Clock,
    {
        let on_correct_side = match direction {
            Direction::Up => state.position().value() >= 0.0,
            Direction::Down => state.position().value() <= 0.0,
        };

        if on_correct_side {
            #[cfg(feature = "defmt")]
            defmt::debug!("homing from {} steps", state.steps().value());

            self.run_until_blocked(state, display, direction)?;
            // Wait out the button so its release is not misread as a fresh
            // zero request.
            while self.actuator.senses_mut().zero_button_held() {}
            self.actuator.pause_ms(self.settle_ms);
        } else {
            // Wrong side of the origin to fast-travel; return to the zero
            // reference point instead.
            self.turn_to(state, display, Steps(0))?;
        }
        Ok(())
    }

    /// Travel-button behavior: after the tap-versus-hold window, either
    /// fast continuous travel while the button stays down, or homing toward
    /// the matching extreme if it was a tap.
    ///
    /// Fast travel exits at button release or at the first blocked step,
    /// whichever comes first, then refreshes the display once.
    pub fn jog<D, C, B>(
        &mut self,
        state: &mut MotionState,
        display: &mut DisplayGate<D, C>,
        buttons: &mut B,
        direction: Direction,
    ) -> Result<()>
    where
        D: PositionDisplay,
        C: Clock,
        B: JogButtons,
    {
        self.actuator.pause_ms(self.jog_debounce_ms);

        let held = match direction {
            Direction::Up => buttons.up_held(),
            Direction::Down => buttons.down_held(),
        };

        if held {
            loop {
                let still_held = match direction {
                    Direction::Up => buttons.up_held(),
                    Direction::Down => buttons.down_held(),
                };
                if !still_held || !self.actuator.step(direction, state)? {
                    break;
                }
            }
            display.refresh(state.position());
        } else {
            self.home(state, display, direction)?;
        }
        Ok(())
    }

    /// Reset the coordinate origin: step count, encoder observation, and
    /// the physical knob counter all return to zero together.
    pub fn zero<D, C, K>(
        &mut self,
        state: &mut MotionState,
        knob: &mut K,
        display: &mut DisplayGate<D, C>,
    ) -> Result<()>
    where
        D: PositionDisplay,
        C: Clock,
        K: PositionKnob,
    {
        #[cfg(feature = "defmt")]
        defmt::debug!("zeroing at {} steps", state.steps().value());

        state.zero();
        knob.reset();
        display.refresh(state.position());
        Ok(())
    }
}
