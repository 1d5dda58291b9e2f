//! Frequency manager interface and band plan.
//!
//! The frequencies screen never touches band state directly. It talks to a
//! [`FrequencyManager`] through four calls:
//!
//! 1. **band_name** - label for each band button, read once at construction.
//! 2. **set_selected_band** - the user tapped a band.
//! 3. **write_bands_to_storage** - persist every band's frequency.
//! 4. **reset_bands_to_default** - restore the factory band plan in memory.
//!
//! [`BandTable`] is the in-memory implementation used on the radio.

pub mod table;

pub use table::{BandStorage, BandTable, TuningStep, Volatile};

/// Narrow interface the frequencies screen consumes.
pub trait FrequencyManager {
    /// Total number of selectable bands, fixed at build time.
    const BAND_COUNT: usize;

    /// Human-readable band label. Stable and non-empty for every band in
    /// `[0, BAND_COUNT)`.
    fn band_name(&self, band: usize) -> &str;

    /// Make `band` the active band.
    fn set_selected_band(&mut self, band: usize);

    /// Persist all band frequencies. Blocks until the write completes.
    fn write_bands_to_storage(&mut self);

    /// Reset every band to its factory default (in memory only).
    fn reset_bands_to_default(&mut self);
}

impl<T: FrequencyManager> FrequencyManager for &mut T {
    const BAND_COUNT: usize = T::BAND_COUNT;

    fn band_name(&self, band: usize) -> &str {
        (**self).band_name(band)
    }

    fn set_selected_band(&mut self, band: usize) {
        (**self).set_selected_band(band)
    }

    fn write_bands_to_storage(&mut self) {
        (**self).write_bands_to_storage()
    }

    fn reset_bands_to_default(&mut self) {
        (**self).reset_bands_to_default()
    }
}

/// One entry of the band plan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BandDef {
    /// Button label.
    pub name: &'static str,
    /// Factory default dial frequency (Hz).
    pub default_hz: u32,
}

/// Number of bands in [`BANDS`].
pub const FREQBAND_NUMBER_OF_BANDS: usize = 10;

/// HF amateur band plan, defaults on the usual PSK31 watering holes.
pub const BANDS: [BandDef; FREQBAND_NUMBER_OF_BANDS] = [
    BandDef { name: "160m", default_hz: 1_838_000 },
    BandDef { name: "80m", default_hz: 3_580_000 },
    BandDef { name: "60m", default_hz: 5_366_500 },
    BandDef { name: "40m", default_hz: 7_070_000 },
    BandDef { name: "30m", default_hz: 10_142_000 },
    BandDef { name: "20m", default_hz: 14_070_000 },
    BandDef { name: "17m", default_hz: 18_100_000 },
    BandDef { name: "15m", default_hz: 21_070_000 },
    BandDef { name: "12m", default_hz: 24_920_000 },
    BandDef { name: "10m", default_hz: 28_120_000 },
];

const _: () = assert!(FREQBAND_NUMBER_OF_BANDS <= crate::config::MAX_BANDS);
