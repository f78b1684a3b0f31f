//! Error types for the driver
//!
//! Bus and pin failures are reported with the [`DisplayError`] taxonomy of
//! `display-interface`; everything the driver itself detects gets its own
//! variant.

pub use display_interface::DisplayError;

/// Errors that can occur when talking to the panel or painting into a buffer
#[derive(Debug)]
pub enum Error {
    /// SPI or GPIO failure
    ///
    /// A failed bus write leaves the controller's RAM counters undefined; the
    /// driver re-initialises before the next frame.
    Interface(DisplayError),
    /// The BUSY line did not deassert within the configured number of polls
    BusyTimeout {
        /// Number of polls performed before giving up
        polls: u32,
    },
    /// RAM address counter requested outside the panel
    AddressOutOfRange {
        /// Requested column, in pixels
        x: u16,
        /// Requested row, in pixels
        y: u16,
    },
    /// Buffer is smaller than the geometry it is supposed to back
    BufferTooSmall {
        /// Required buffer size in bytes
        required: usize,
        /// Provided buffer size in bytes
        provided: usize,
    },
}

impl From<DisplayError> for Error {
    fn from(e: DisplayError) -> Self {
        Error::Interface(e)
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Interface(e) => write!(f, "Interface error: {e:?}"),
            Error::BusyTimeout { polls } => {
                write!(f, "Panel still busy after {polls} polls")
            }
            Error::AddressOutOfRange { x, y } => {
                write!(f, "RAM address ({x}, {y}) outside the panel")
            }
            Error::BufferTooSmall { required, provided } => write!(
                f,
                "Buffer too small: required {required} bytes, provided {provided}"
            ),
        }
    }
}

impl core::error::Error for Error {}
