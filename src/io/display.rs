//! Position display boundary.

use core::fmt::Write;
use core::time::Duration;

use crate::clock::Clock;
use crate::config::units::Millimeters;
use crate::error::{DisplayError, Error, Result};

/// A device that can render the position readout.
pub trait PositionDisplay {
    /// Device-specific error type.
    type Error;

    /// Bring up the display hardware.
    fn init(&mut self) -> core::result::Result<(), Self::Error>;

    /// Render a formatted position string.
    fn render(&mut self, text: &str) -> core::result::Result<(), Self::Error>;
}

/// Rate-limited gate in front of a [`PositionDisplay`].
///
/// Refresh requests inside the minimum interval are dropped, and `render`
/// is only called when the formatted text actually changed. The position is
/// formatted to one decimal place in millimeters, right-aligned to the
/// device's six-character field.
///
/// Render failures are observed but never gate motion; only `init` failure
/// is fatal.
pub struct DisplayGate<D, C>
where
    D: PositionDisplay,
    C: Clock,
{
    display: D,
    clock: C,
    min_interval: Duration,
    last_refresh: Option<Duration>,
    last_text: heapless::String<40>,
}

impl<D, C> DisplayGate<D, C>
where
    D: PositionDisplay,
    C: Clock,
{
    /// Create a gate with the given minimum refresh interval.
    pub fn new(display: D, clock: C, min_interval_ms: u32) -> Self {
        Self {
            display,
            clock,
            min_interval: Duration::from_millis(min_interval_ms as u64),
            last_refresh: None,
            last_text: heapless::String::new(),
        }
    }

    /// Bring up the display hardware.
    ///
    /// # Errors
    ///
    /// Returns [`DisplayError::InitFailed`] if the device does not come up.
    /// There is no safe fallback without a working readout; callers are
    /// expected to halt on this.
    pub fn init(&mut self) -> Result<()> {
        self.display
            .init()
            .map_err(|_| Error::Display(DisplayError::InitFailed))?;
        Ok(())
    }

    /// Request a refresh showing `position`.
    ///
    /// Dropped silently when inside the minimum interval or when the
    /// formatted value has not changed.
    pub fn refresh(&mut self, position: Millimeters) {
        let now = self.clock.elapsed();

        #[cfg(feature = "defmt")]
        defmt::trace!("display refresh requested at {} ms", now.as_millis() as u64);

        if let Some(last) = self.last_refresh {
            if now < last + self.min_interval {
                return;
            }
        }
        self.last_refresh = Some(now);

        let mut text: heapless::String<40> = heapless::String::new();
        let _ = write!(text, "{:6.1}", position.value());

        if text != self.last_text {
            self.last_text = text.clone();
            match self.display.render(&text) {
                Ok(()) => {}
                Err(_) => {
                    // position-dependent behavior never waits on the display
                    #[cfg(feature = "defmt")]
                    defmt::warn!("position display render failed");
                }
            }
        }
    }

    /// Release the display device.
    pub fn into_inner(self) -> D {
        self.display
    }
}
