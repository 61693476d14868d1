//! Mechanical constraints derived from stage configuration.

use super::stage::StageConfig;
use super::units::{EncoderClicks, Millimeters, Steps};

/// Derived mechanical parameters computed from stage configuration.
///
/// These are computed once at initialization and used for every coordinate
/// conversion between the three spaces: encoder clicks, motor steps, and
/// physical millimeters.
#[derive(Debug, Clone, Copy)]
pub struct MechanicalConstraints {
    /// Motor steps per millimeter of vertical travel
    /// (steps_per_revolution / screw_lead * gear_ratio).
    pub steps_per_mm: f32,

    /// Millimeters of travel per raw encoder click
    /// (vertical_step / encoder_substeps).
    pub mm_per_click: f32,
}

impl MechanicalConstraints {
    /// Compute mechanical constraints from stage configuration.
    pub fn from_config(config: &StageConfig) -> Self {
        Self {
            steps_per_mm: config.steps_per_mm(),
            mm_per_click: config.mm_per_click(),
        }
    }

    /// Convert a step count to a vertical position in millimeters.
    #[inline]
    pub fn position_from_steps(&self, steps: Steps) -> Millimeters {
        steps.to_millimeters(self.steps_per_mm)
    }

    /// Convert an encoder reading to a vertical position in millimeters.
    ///
    /// Increasing clicks move the stage down; the negated scale mirrors the
    /// physical knob orientation and must be preserved exactly.
    #[inline]
    pub fn position_from_encoder(&self, clicks: EncoderClicks) -> Millimeters {
        Millimeters(-self.mm_per_click * clicks.value() as f32)
    }

    /// Convert an encoder reading to a target step count, rounded to the
    /// nearest whole step.
    #[inline]
    pub fn steps_from_encoder(&self, clicks: EncoderClicks) -> Steps {
        Steps::from_millimeters(self.position_from_encoder(clicks), self.steps_per_mm)
    }
}
