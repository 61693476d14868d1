//! System configuration - root configuration structure.

use serde::Deserialize;

use super::stage::{StageConfig, TimingConfig};

/// Root configuration structure from TOML.
///
/// A system is a single stage axis plus its timing constants:
///
/// ```toml
/// [stage]
/// name = "z_axis"
/// steps_per_revolution = 200
/// screw_lead_mm = 8.0
/// gear_ratio = 4.0
/// vertical_step_mm = 0.1
/// encoder_substeps = 4
///
/// [timing]
/// step_pulse_us = 1000
/// jog_debounce_ms = 300
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct SystemConfig {
    /// The stage axis configuration.
    pub stage: StageConfig,

    /// Timing constants (all defaulted to the reference hardware).
    #[serde(default)]
    pub timing: TimingConfig,
}
