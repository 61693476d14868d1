//! Travel button inputs.

use embedded_hal::digital::InputPin;

/// The two operator travel buttons.
pub trait JogButtons {
    /// True while the "up" travel button is pressed.
    fn up_held(&mut self) -> bool;

    /// True while the "down" travel button is pressed.
    fn down_held(&mut self) -> bool;
}

/// Travel buttons wired to two active-low input pins.
///
/// A failed pin read is reported as released: a faulted button must never
/// command motion.
pub struct JogButtonPins<UP, DOWN>
where
    UP: InputPin,
    DOWN: InputPin,
{
    up: UP,
    down: DOWN,
}

impl<UP, DOWN> JogButtonPins<UP, DOWN>
where
    UP: InputPin,
    DOWN: InputPin,
{
    /// Create a button pair from two input pins.
    pub fn new(up: UP, down: DOWN) -> Self {
        Self { up, down }
    }

    /// Release the pins.
    pub fn into_inner(self) -> (UP, DOWN) {
        (self.up, self.down)
    }
}

impl<UP, DOWN> JogButtons for JogButtonPins<UP, DOWN>
where
    UP: InputPin,
    DOWN: InputPin,
{
    fn up_held(&mut self) -> bool {
        self.up.is_low().unwrap_or(false)
    }

    fn down_held(&mut self) -> bool {
        self.down.is_low().unwrap_or(false)
    }
}
