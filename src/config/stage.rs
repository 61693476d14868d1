//! Stage configuration from TOML.

use heapless::String;
use serde::Deserialize;

/// Mechanical configuration of the linear stage axis.
#[derive(Debug, Clone, Deserialize)]
pub struct StageConfig {
    /// Human-readable name (max 32 chars).
    pub name: String<32>,

    /// Base motor steps per revolution (typically 200 for 1.8 deg motors).
    pub steps_per_revolution: u16,

    /// Lead screw travel per revolution in millimeters.
    #[serde(rename = "screw_lead_mm")]
    pub screw_lead: f32,

    /// Gear ratio (output:input, e.g. 4.0 means 4:1 reduction).
    #[serde(default = "default_gear_ratio")]
    pub gear_ratio: f32,

    /// Vertical travel per physical knob detent in millimeters.
    #[serde(rename = "vertical_step_mm")]
    pub vertical_step: f32,

    /// Raw encoder clicks per physical knob detent.
    pub encoder_substeps: u8,

    /// Invert DIR pin logic.
    #[serde(default)]
    pub invert_direction: bool,
}

fn default_gear_ratio() -> f32 {
    1.0
}

impl StageConfig {
    /// Calculate motor steps per millimeter of vertical travel.
    pub fn steps_per_mm(&self) -> f32 {
        (self.steps_per_revolution as f32 / self.screw_lead) * self.gear_ratio
    }

    /// Calculate millimeters of travel per raw encoder click.
    pub fn mm_per_click(&self) -> f32 {
        self.vertical_step / self.encoder_substeps as f32
    }
}

/// Device timing constants.
///
/// The defaults match the reference hardware; the pulse width in particular
/// is a requirement of the motor driver, not a tunable.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TimingConfig {
    /// STEP pulse high/low hold time in microseconds.
    #[serde(default = "default_step_pulse_us")]
    pub step_pulse_us: u32,

    /// Hold time distinguishing a travel-button tap (home) from a hold
    /// (fast travel), in milliseconds.
    #[serde(default = "default_jog_debounce_ms")]
    pub jog_debounce_ms: u32,

    /// Settle time after a zero-button release during homing, in
    /// milliseconds. Prevents the release from being misread as a fresh
    /// zero request.
    #[serde(default = "default_settle_ms")]
    pub settle_ms: u32,

    /// Minimum interval between display refreshes in milliseconds.
    #[serde(default = "default_display_min_interval_ms")]
    pub display_min_interval_ms: u32,
}

fn default_step_pulse_us() -> u32 {
    1000
}

fn default_jog_debounce_ms() -> u32 {
    300
}

fn default_settle_ms() -> u32 {
    5
}

fn default_display_min_interval_ms() -> u32 {
    250
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            step_pulse_us: default_step_pulse_us(),
            jog_debounce_ms: default_jog_debounce_ms(),
            settle_ms: default_settle_ms(),
            display_min_interval_ms: default_display_min_interval_ms(),
        }
    }
}
