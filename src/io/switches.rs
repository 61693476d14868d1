//! End-of-travel switches and the zero push-button.

use embedded_hal::digital::InputPin;

/// Real-time safety gate inputs.
///
/// These are read fresh on every call; hardware state can change between
/// calls, so implementations must not cache.
pub trait LimitSenses {
    /// True when upward travel is no longer safe.
    fn at_top_limit(&mut self) -> bool;

    /// True when downward travel is no longer safe.
    fn at_bottom_limit(&mut self) -> bool;

    /// True while the operator is pressing the encoder's push-button.
    fn zero_button_held(&mut self) -> bool;
}

/// Limit switches and zero button wired to input pins.
///
/// Polarity follows the reference hardware: a limit switch reads high while
/// travel is safe in that direction, and the push-button is active-low. A
/// failed pin read is reported as blocked, so motion stops rather than
/// running through a faulted sensor.
pub struct LimitSwitches<TOP, BOTTOM, ZERO>
where
    TOP: InputPin,
    BOTTOM: InputPin,
    ZERO: InputPin,
{
    top: TOP,
    bottom: BOTTOM,
    zero_button: ZERO,
}

impl<TOP, BOTTOM, ZERO> LimitSwitches<TOP, BOTTOM, ZERO>
where
    TOP: InputPin,
    BOTTOM: InputPin,
    ZERO: InputPin,
{
    /// Create a switch bank from three input pins.
    pub fn new(top: TOP, bottom: BOTTOM, zero_button: ZERO) -> Self {
        Self {
            top,
            bottom,
            zero_button,
        }
    }

    /// Release the pins.
    pub fn into_inner(self) -> (TOP, BOTTOM, ZERO) {
        (self.top, self.bottom, self.zero_button)
    }
}

impl<TOP, BOTTOM, ZERO> LimitSenses for LimitSwitches<TOP, BOTTOM, ZERO>
where
    TOP: InputPin,
    BOTTOM: InputPin,
    ZERO: InputPin,
{
    fn at_top_limit(&mut self) -> bool {
        !self.top.is_high().unwrap_or(false)
    }

    fn at_bottom_limit(&mut self) -> bool {
        !self.bottom.is_high().unwrap_or(false)
    }

    fn zero_button_held(&mut self) -> bool {
        self.zero_button.is_low().unwrap_or(true)
    }
}
