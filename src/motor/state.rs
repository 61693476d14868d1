//! Shared position state of the stage.

use crate::config::units::{EncoderClicks, Millimeters, Steps};
use crate::config::MechanicalConstraints;

/// The stage's coordinate state: step count, last-observed encoder reading,
/// and derived vertical position.
///
/// There is exactly one instance, owned by the top-level reconciler and
/// lent mutably down the call chain for the duration of each operation. The
/// millimeter position is a pure projection of the step count, recomputed
/// on every mutation; it is never written independently, so the three
/// coordinate spaces stay mutually consistent at every observation point.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotionState {
    /// Signed steps taken since the last zeroing. Positive is upward.
    steps: Steps,

    /// Last-observed raw knob reading.
    encoder: EncoderClicks,

    /// Vertical position derived from `steps`.
    position: Millimeters,
}

impl MotionState {
    /// Create state at the zero origin.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current step count.
    #[inline]
    pub fn steps(&self) -> Steps {
        self.steps
    }

    /// Last-observed encoder reading.
    #[inline]
    pub fn encoder(&self) -> EncoderClicks {
        self.encoder
    }

    /// Current vertical position.
    #[inline]
    pub fn position(&self) -> Millimeters {
        self.position
    }

    /// Record one successful motor step. `sign` is +1 for up, -1 for down.
    #[inline]
    pub(crate) fn apply_step(&mut self, sign: i64, constraints: &MechanicalConstraints) {
        self.steps = Steps(self.steps.0 + sign);
        self.position = constraints.position_from_steps(self.steps);
    }

    /// Record a fresh knob observation.
    #[inline]
    pub(crate) fn set_encoder(&mut self, clicks: EncoderClicks) {
        self.encoder = clicks;
    }

    /// Reset the coordinate origin. The only operation that zeroes all
    /// three fields, and it zeroes them together.
    #[inline]
    pub(crate) fn zero(&mut self) {
        *self = Self::default();
    }
}
