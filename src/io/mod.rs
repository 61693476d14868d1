//! Hardware capability interfaces.
//!
//! The core logic never touches pins directly; it consumes the narrow
//! traits defined here, so the controller and reconciler can be exercised
//! against simulated hardware doubles.

pub mod buttons;
pub mod display;
pub mod encoder;
pub mod switches;

pub use buttons::{JogButtonPins, JogButtons};
pub use display::{DisplayGate, PositionDisplay};
pub use encoder::PositionKnob;
pub use switches::{LimitSenses, LimitSwitches};

#[cfg(target_has_atomic = "32")]
pub use encoder::CounterKnob;
