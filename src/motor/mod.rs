//! Motor module for stage-motion.
//!
//! Provides the single-step actuator with its safety interlocks and the
//! owned position state aggregate.

mod actuator;
mod state;

pub use actuator::{Direction, StepActuator};
pub use state::MotionState;
