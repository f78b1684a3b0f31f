//! Driver timing and panel configuration

use crate::ssd1680::flag::Flag;
use crate::ssd1680::lut::PARTIAL_REFRESH_LUT;

/// Default number of BUSY polls before [`Error::BusyTimeout`](crate::Error::BusyTimeout)
pub const BUSY_POLL_LIMIT: u32 = 4000;

/// Default pause between BUSY polls
pub const BUSY_POLL_INTERVAL_MS: u32 = 1;

/// Default settle time after each reset edge
pub const RESET_SETTLE_MS: u32 = 50;

/// Timing and waveform settings used by [`Ssd1680`](crate::Ssd1680)
///
/// ```
/// use ssd1680_paint::Config;
///
/// let config = Config::default()
///     .with_busy_poll_limit(8000)
///     .with_reset_settle_ms(20);
/// assert_eq!(config.busy_poll_limit, 8000);
/// ```
#[derive(Clone, Debug)]
pub struct Config {
    /// How many times the BUSY line is sampled before giving up
    pub busy_poll_limit: u32,
    /// Delay between two BUSY samples
    pub busy_poll_interval_ms: u32,
    /// Delay after pulling reset low and again after releasing it
    pub reset_settle_ms: u32,
    /// Border waveform byte for command 0x3C
    pub border_waveform: u8,
    /// Waveform table loaded by [`Ssd1680::init_partial`](crate::Ssd1680::init_partial)
    pub partial_lut: &'static [u8],
}

impl Default for Config {
    fn default() -> Self {
        Config {
            busy_poll_limit: BUSY_POLL_LIMIT,
            busy_poll_interval_ms: BUSY_POLL_INTERVAL_MS,
            reset_settle_ms: RESET_SETTLE_MS,
            border_waveform: Flag::BORDER_WAVEFORM_FLOATING,
            partial_lut: &PARTIAL_REFRESH_LUT,
        }
    }
}

impl Config {
    /// Set the BUSY poll ceiling
    pub fn with_busy_poll_limit(mut self, polls: u32) -> Self {
        self.busy_poll_limit = polls;
        self
    }

    /// Set the pause between BUSY polls
    pub fn with_busy_poll_interval_ms(mut self, ms: u32) -> Self {
        self.busy_poll_interval_ms = ms;
        self
    }

    /// Set the reset settle time
    pub fn with_reset_settle_ms(mut self, ms: u32) -> Self {
        self.reset_settle_ms = ms;
        self
    }

    /// Set the border waveform byte
    pub fn with_border_waveform(mut self, value: u8) -> Self {
        self.border_waveform = value;
        self
    }

    /// Replace the partial refresh waveform table
    pub fn with_partial_lut(mut self, lut: &'static [u8]) -> Self {
        self.partial_lut = lut;
        self
    }
}
