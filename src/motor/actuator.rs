//! Single-step actuator.
//!
//! Generic over embedded-hal 1.0 pin types. Emits one motor step at a time,
//! gated by the real-time safety interlocks.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::MechanicalConstraints;
use crate::error::{Result, StepError};
use crate::io::switches::LimitSenses;

use super::state::MotionState;

/// Direction of stage travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Toward the top limit (positive step count).
    Up,
    /// Toward the bottom limit (negative step count).
    Down,
}

impl Direction {
    /// Get direction from a signed step delta.
    #[inline]
    pub fn from_steps(steps: i64) -> Self {
        if steps >= 0 {
            Direction::Up
        } else {
            Direction::Down
        }
    }

    /// Get the sign multiplier.
    #[inline]
    pub fn sign(self) -> i64 {
        match self {
            Direction::Up => 1,
            Direction::Down => -1,
        }
    }
}

/// Owns the STEP/DIR pins, the delay provider, the safety senses, and the
/// single-step protocol.
///
/// Position state is mutated only through the `&mut MotionState` lent by
/// the caller; the actuator itself holds no position.
///
/// Generic over:
/// - `STEP`: STEP pin type (must implement `OutputPin`)
/// - `DIR`: DIR pin type (must implement `OutputPin`)
/// - `DELAY`: Delay provider (must implement `DelayNs`)
/// - `SENSE`: Safety gate inputs (must implement `LimitSenses`)
pub struct StepActuator<STEP, DIR, DELAY, SENSE>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
    SENSE: LimitSenses,
{
    /// STEP pin (pulse to move one step).
    step_pin: STEP,

    /// DIR pin (low = up, high = down, or inverted).
    dir_pin: DIR,

    /// Delay provider for step timing.
    delay: DELAY,

    /// Limit switches and zero button, read fresh at every step attempt.
    senses: SENSE,

    /// Coordinate conversion constants.
    constraints: MechanicalConstraints,

    /// STEP pulse high/low hold time in microseconds. A requirement of the
    /// motor driver, honored exactly.
    step_pulse_us: u32,

    /// Whether direction pin logic is inverted.
    invert_direction: bool,

    /// Current direction (cached to avoid unnecessary pin writes).
    current_direction: Option<Direction>,
}

impl<STEP, DIR, DELAY, SENSE> StepActuator<STEP, DIR, DELAY, SENSE>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
    SENSE: LimitSenses,
{
    /// Create an actuator.
    pub fn new(
        step_pin: STEP,
        dir_pin: DIR,
        delay: DELAY,
        senses: SENSE,
        constraints: MechanicalConstraints,
        step_pulse_us: u32,
        invert_direction: bool,
    ) -> Self {
        Self {
            step_pin,
            dir_pin,
            delay,
            senses,
            constraints,
            step_pulse_us,
            invert_direction,
            current_direction: None,
        }
    }

    /// Get the mechanical constraints.
    #[inline]
    pub fn constraints(&self) -> &MechanicalConstraints {
        &self.constraints
    }

    /// Access the safety senses.
    #[inline]
    pub fn senses_mut(&mut self) -> &mut SENSE {
        &mut self.senses
    }

    /// Attempt one step toward the top.
    ///
    /// Returns `Ok(true)` after a pulse was emitted and the state updated,
    /// `Ok(false)` with no motor action when the top limit or the zero
    /// button blocks travel. The `false` return is the sole mechanism by
    /// which callers detect that motion is not possible right now.
    pub fn step_up(&mut self, state: &mut MotionState) -> Result<bool> {
        self.step(Direction::Up, state)
    }

    /// Attempt one step toward the bottom. Symmetric to [`Self::step_up`],
    /// gated by the bottom limit and the same button interlock.
    pub fn step_down(&mut self, state: &mut MotionState) -> Result<bool> {
        self.step(Direction::Down, state)
    }

    /// Attempt one step in `direction`.
    ///
    /// The interlocks are read fresh on every attempt: the end-of-travel
    /// switch for `direction`, and the zero button, which doubles as the
    /// manual emergency stop during any travel.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::PinError`] if a STEP or DIR pin write fails.
    pub fn step(&mut self, direction: Direction, state: &mut MotionState) -> Result<bool> {
        let at_limit = match direction {
            Direction::Up => self.senses.at_top_limit(),
            Direction::Down => self.senses.at_bottom_limit(),
        };
        if at_limit || self.senses.zero_button_held() {
            return Ok(false);
        }

        self.set_direction(direction)?;

        // Fixed pulse timing: high and low each held for the full pulse
        // width, blocking the thread of control for the duration.
        self.step_pin.set_high().map_err(|_| StepError::PinError)?;
        self.delay.delay_us(self.step_pulse_us);
        self.step_pin.set_low().map_err(|_| StepError::PinError)?;
        self.delay.delay_us(self.step_pulse_us);

        state.apply_step(direction.sign(), &self.constraints);
        Ok(true)
    }

    /// Block for `ms` milliseconds on the actuator's delay provider.
    pub(crate) fn pause_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }

    fn set_direction(&mut self, direction: Direction) -> Result<()> {
        if self.current_direction == Some(direction) {
            return Ok(());
        }

        // Reference hardware polarity: DIR low drives the stage up.
        let pin_high = match direction {
            Direction::Down => !self.invert_direction,
            Direction::Up => self.invert_direction,
        };

        if pin_high {
            self.dir_pin.set_high().map_err(|_| StepError::PinError)?;
        } else {
            self.dir_pin.set_low().map_err(|_| StepError::PinError)?;
        }

        self.current_direction = Some(direction);
        Ok(())
    }
}
