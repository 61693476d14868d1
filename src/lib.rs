//! # stage-motion
//!
//! Motion-control core for a single-axis motorized linear stage with
//! embedded-hal 1.0 support.
//!
//! ## Features
//!
//! - **Configuration-driven**: Define the stage mechanics and timing in TOML
//! - **embedded-hal 1.0**: Uses `OutputPin` for STEP/DIR, `InputPin` for
//!   switches and buttons, `DelayNs` for timing
//! - **no_std compatible**: Core library works without standard library
//! - **Three coordinate spaces**: Encoder clicks, motor steps, and physical
//!   millimeters, kept mutually consistent at every observation point
//! - **Safety interlocks**: End-of-travel switches and a hold-to-stop
//!   button gate every single step
//! - **Testable to the edge**: Every hardware touchpoint sits behind a
//!   capability trait, so the full control loop runs against simulated
//!   doubles
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stage_motion::{ReconcilerBuilder, SystemConfig};
//!
//! // Load configuration from TOML
//! let config: SystemConfig = stage_motion::load_config("stage.toml")?;
//!
//! // Assemble the control loop from embedded-hal pins and peripherals
//! let mut stage = ReconcilerBuilder::new()
//!     .config(config)
//!     .step_pin(step_pin)
//!     .dir_pin(dir_pin)
//!     .delay(delay)
//!     .senses(limit_switches)
//!     .buttons(jog_buttons)
//!     .knob(knob)
//!     .display(display)
//!     .clock(clock)
//!     .build()?;
//!
//! // Poll forever
//! stage.run()?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Core modules
pub mod clock;
pub mod config;
pub mod error;
pub mod io;
pub mod motion;
pub mod motor;
pub mod reconciler;

// Re-exports for ergonomic API
pub use clock::Clock;
pub use config::{validate_config, MechanicalConstraints, StageConfig, SystemConfig, TimingConfig};
pub use error::{Error, Result};
pub use io::{DisplayGate, JogButtons, LimitSenses, PositionDisplay, PositionKnob};
pub use motion::MotionController;
pub use motor::{Direction, MotionState, StepActuator};
pub use reconciler::{Reconciler, ReconcilerBuilder};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::load_config;

// Unit types
pub use config::units::{EncoderClicks, Millimeters, Steps};
