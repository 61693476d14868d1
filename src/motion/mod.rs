//! Motion module for stage-motion.
//!
//! Provides the step-sequencing behaviors built on the single-step
//! actuator.

mod controller;

pub use controller::MotionController;
