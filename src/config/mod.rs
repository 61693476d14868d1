//! Configuration module for stage-motion.
//!
//! Provides types for loading and validating stage configurations from TOML
//! files (with `std` feature) or pre-parsed data.

mod mechanical;
mod stage;
mod system;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use mechanical::MechanicalConstraints;
pub use stage::{StageConfig, TimingConfig};
pub use system::SystemConfig;
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{EncoderClicks, Millimeters, Steps};
