//! Unified error type for the frequencies screen.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` (behind the `defmt` feature) for efficient
//! on-target logging.

use core::fmt;

/// Top-level error type used across the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Screen wiring
    /// A band-button identity decoded to an index outside `[0, N)`.
    BandOutOfRange(usize),

    /// The identity does not belong to any widget on this screen.
    UnknownWidget(u16),

    /// The frequency manager declares more bands than the screen can hold.
    TooManyBands(usize),

    // Layout
    /// A grid was requested with zero buttons per column.
    InvalidLayout,

    // Storage
    /// The band storage backend failed to read or write.
    Storage,

    // Generic
    /// Buffer too small for the requested operation.
    BufferOverflow,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BandOutOfRange(index) => write!(f, "band index {index} out of range"),
            Error::UnknownWidget(id) => write!(f, "unknown widget identity {id}"),
            Error::TooManyBands(count) => write!(f, "{count} bands exceed screen capacity"),
            Error::InvalidLayout => f.write_str("grid needs at least one button per column"),
            Error::Storage => f.write_str("band storage failed"),
            Error::BufferOverflow => f.write_str("buffer overflow"),
        }
    }
}
