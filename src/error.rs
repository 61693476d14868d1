//! Error types for stage-motion.
//!
//! Provides unified error handling across configuration, step emission, and
//! the display boundary.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all stage-motion operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Step emission error
    Step(StepError),
    /// Display boundary error
    Display(DisplayError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Invalid steps per revolution (must be > 0)
    InvalidStepsPerRevolution(u16),
    /// Invalid screw lead (must be > 0 mm)
    InvalidScrewLead(f32),
    /// Invalid gear ratio (must be > 0)
    InvalidGearRatio(f32),
    /// Invalid vertical step (must be > 0 mm)
    InvalidVerticalStep(f32),
    /// Invalid encoder substeps (must be > 0)
    InvalidEncoderSubsteps(u8),
    /// Invalid step pulse width (must be > 0 microseconds)
    InvalidStepPulse(u32),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Step emission errors.
///
/// A step attempt that is blocked by an interlock is NOT an error; the
/// actuator reports that as `Ok(false)`. `StepError` covers hardware faults
/// only.
#[derive(Debug, Clone, PartialEq)]
pub enum StepError {
    /// STEP or DIR pin operation failed
    PinError,
}

/// Display boundary errors.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayError {
    /// Display hardware failed to initialize.
    ///
    /// The one unrecoverable startup condition: there is no safe default
    /// mode without a working position readout, so the caller is expected
    /// to halt.
    InitFailed,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Step(e) => write!(f, "Step error: {}", e),
            Error::Display(e) => write!(f, "Display error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidStepsPerRevolution(v) => {
                write!(f, "Invalid steps per revolution: {}. Must be > 0", v)
            }
            ConfigError::InvalidScrewLead(v) => {
                write!(f, "Invalid screw lead: {} mm. Must be > 0", v)
            }
            ConfigError::InvalidGearRatio(v) => write!(f, "Invalid gear ratio: {}. Must be > 0", v),
            ConfigError::InvalidVerticalStep(v) => {
                write!(f, "Invalid vertical step: {} mm. Must be > 0", v)
            }
            ConfigError::InvalidEncoderSubsteps(v) => {
                write!(f, "Invalid encoder substeps: {}. Must be > 0", v)
            }
            ConfigError::InvalidStepPulse(v) => {
                write!(f, "Invalid step pulse width: {} us. Must be > 0", v)
            }
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepError::PinError => write!(f, "GPIO pin operation failed"),
        }
    }
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayError::InitFailed => write!(f, "Display hardware failed to initialize"),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<StepError> for Error {
    fn from(e: StepError) -> Self {
        Error::Step(e)
    }
}

impl From<DisplayError> for Error {
    fn from(e: DisplayError) -> Self {
        Error::Display(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for StepError {}

#[cfg(feature = "std")]
impl std::error::Error for DisplayError {}
