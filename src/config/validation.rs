//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::SystemConfig;

/// Validate a system configuration.
///
/// Checks:
/// - Stage mechanics are physically meaningful (all scales positive)
/// - Encoder substeps are non-zero
/// - The step pulse width is non-zero
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    let stage = &config.stage;

    if stage.steps_per_revolution == 0 {
        return Err(Error::Config(ConfigError::InvalidStepsPerRevolution(
            stage.steps_per_revolution,
        )));
    }

    if stage.screw_lead <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidScrewLead(stage.screw_lead)));
    }

    if stage.gear_ratio <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidGearRatio(stage.gear_ratio)));
    }

    if stage.vertical_step <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidVerticalStep(
            stage.vertical_step,
        )));
    }

    if stage.encoder_substeps == 0 {
        return Err(Error::Config(ConfigError::InvalidEncoderSubsteps(
            stage.encoder_substeps,
        )));
    }

    if config.timing.step_pulse_us == 0 {
        return Err(Error::Config(ConfigError::InvalidStepPulse(
            config.timing.step_pulse_us,
        )));
    }

    Ok(())
}
