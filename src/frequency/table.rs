//! In-memory band table.
//!
//! Holds the dial frequency of every band in [`BANDS`], the selected band
//! and the knob tuning step. Persistence goes through a [`BandStorage`]
//! backend (EEPROM on the radio); the table only tracks whether its
//! contents differ from what was last saved or loaded.

use super::{FrequencyManager, BANDS, FREQBAND_NUMBER_OF_BANDS};
use crate::config::{FREQ_MAX_HZ, FREQ_MIN_HZ};
use crate::error::Error;

/// Backend that persists band frequencies.
pub trait BandStorage {
    /// Write one frequency per band, in band order.
    fn save(&mut self, frequencies: &[u32]) -> Result<(), Error>;

    /// Fill `frequencies` from the backend.
    ///
    /// Returns `Ok(false)` when nothing has been stored yet.
    fn load(&mut self, frequencies: &mut [u32]) -> Result<bool, Error>;
}

/// Storage that keeps nothing. Saves succeed, loads find nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct Volatile;

impl BandStorage for Volatile {
    fn save(&mut self, _frequencies: &[u32]) -> Result<(), Error> {
        Ok(())
    }

    fn load(&mut self, _frequencies: &mut [u32]) -> Result<bool, Error> {
        Ok(false)
    }
}

/// Frequency change applied per knob detent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TuningStep {
    Hz1,
    Hz10,
    #[default]
    Hz100,
    KHz1,
    KHz10,
    KHz100,
    MHz1,
}

impl TuningStep {
    pub const fn hz(self) -> u32 {
        match self {
            TuningStep::Hz1 => 1,
            TuningStep::Hz10 => 10,
            TuningStep::Hz100 => 100,
            TuningStep::KHz1 => 1_000,
            TuningStep::KHz10 => 10_000,
            TuningStep::KHz100 => 100_000,
            TuningStep::MHz1 => 1_000_000,
        }
    }

    /// Next coarser step, wrapping from 1 MHz back to 1 Hz.
    pub const fn next(self) -> Self {
        match self {
            TuningStep::Hz1 => TuningStep::Hz10,
            TuningStep::Hz10 => TuningStep::Hz100,
            TuningStep::Hz100 => TuningStep::KHz1,
            TuningStep::KHz1 => TuningStep::KHz10,
            TuningStep::KHz10 => TuningStep::KHz100,
            TuningStep::KHz100 => TuningStep::MHz1,
            TuningStep::MHz1 => TuningStep::Hz1,
        }
    }
}

fn clamp_hz(hz: u32) -> u32 {
    hz.clamp(FREQ_MIN_HZ, FREQ_MAX_HZ)
}

fn default_frequencies() -> [u32; FREQBAND_NUMBER_OF_BANDS] {
    BANDS.map(|band| band.default_hz)
}

/// Band frequencies, selection and tuning step.
pub struct BandTable<S> {
    frequencies: [u32; FREQBAND_NUMBER_OF_BANDS],
    selected: usize,
    step: TuningStep,
    /// Dirty flag - true if the table may differ from storage.
    dirty: bool,
    storage: S,
}

impl<S: BandStorage> BandTable<S> {
    /// Create a table on factory defaults with band 0 selected.
    ///
    /// Nothing is known about the backend yet, so the table starts dirty.
    pub fn new(storage: S) -> Self {
        Self {
            frequencies: default_frequencies(),
            selected: 0,
            step: TuningStep::default(),
            dirty: true,
            storage,
        }
    }

    /// Replace the in-memory frequencies with whatever the backend holds.
    ///
    /// An empty backend leaves the defaults in place. On a read error the
    /// defaults are kept too, and the error is returned.
    pub fn load_from_storage(&mut self) -> Result<(), Error> {
        let mut buf = [0u32; FREQBAND_NUMBER_OF_BANDS];
        match self.storage.load(&mut buf) {
            Ok(true) => {
                let mut clamped = 0;
                for (slot, stored) in self.frequencies.iter_mut().zip(buf) {
                    *slot = clamp_hz(stored);
                    if *slot != stored {
                        clamped += 1;
                    }
                }
                if clamped > 0 {
                    warn!("BandTable: clamped {} stored frequencies", clamped);
                }
                info!("Loaded {} band frequencies", FREQBAND_NUMBER_OF_BANDS);
                // Clamped cells no longer match the backend.
                self.dirty = clamped > 0;
                Ok(())
            }
            Ok(false) => {
                info!("No band frequencies in storage, using defaults");
                self.frequencies = default_frequencies();
                self.dirty = false;
                Ok(())
            }
            Err(e) => {
                error!("Band storage read error: {}", e);
                self.frequencies = default_frequencies();
                self.dirty = true;
                Err(e)
            }
        }
    }

    pub fn selected_band(&self) -> usize {
        self.selected
    }

    /// Frequency of `band`, or `None` if no such band exists.
    pub fn frequency(&self, band: usize) -> Option<u32> {
        self.frequencies.get(band).copied()
    }

    /// Frequency of the selected band.
    pub fn current_frequency(&self) -> u32 {
        self.frequencies[self.selected]
    }

    /// Set the dial frequency of `band`, clamped to the tuning limits.
    ///
    /// Returns the frequency actually stored.
    pub fn set_frequency(&mut self, band: usize, hz: u32) -> Result<u32, Error> {
        let slot = self
            .frequencies
            .get_mut(band)
            .ok_or(Error::BandOutOfRange(band))?;
        let hz = clamp_hz(hz);
        if *slot != hz {
            *slot = hz;
            self.dirty = true;
        }
        Ok(hz)
    }

    /// Move the selected band by `clicks` knob detents of the current step.
    pub fn tune(&mut self, clicks: i32) -> u32 {
        let delta = i64::from(clicks) * i64::from(self.step.hz());
        let target = (i64::from(self.current_frequency()) + delta)
            .clamp(i64::from(FREQ_MIN_HZ), i64::from(FREQ_MAX_HZ)) as u32;
        let slot = &mut self.frequencies[self.selected];
        if *slot != target {
            *slot = target;
            self.dirty = true;
        }
        target
    }

    pub fn step(&self) -> TuningStep {
        self.step
    }

    /// Advance to the next tuning step and return it.
    pub fn cycle_step(&mut self) -> TuningStep {
        self.step = self.step.next();
        debug!("Tuning step now {} Hz", self.step.hz());
        self.step
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

impl<S: BandStorage> FrequencyManager for BandTable<S> {
    const BAND_COUNT: usize = FREQBAND_NUMBER_OF_BANDS;

    fn band_name(&self, band: usize) -> &str {
        BANDS.get(band).map_or("?", |b| b.name)
    }

    fn set_selected_band(&mut self, band: usize) {
        if band >= FREQBAND_NUMBER_OF_BANDS {
            warn!("BandTable: ignoring selection of band {}", band);
            return;
        }
        self.selected = band;
        info!("Selected band {} ({=str})", band, BANDS[band].name);
    }

    fn write_bands_to_storage(&mut self) {
        if !self.dirty {
            debug!("BandTable: no changes to save");
            return;
        }
        match self.storage.save(&self.frequencies) {
            Ok(()) => {
                info!("Saved {} band frequencies", FREQBAND_NUMBER_OF_BANDS);
                self.dirty = false;
            }
            Err(e) => {
                error!("Band storage write error: {}", e);
            }
        }
    }

    fn reset_bands_to_default(&mut self) {
        let defaults = default_frequencies();
        if self.frequencies != defaults {
            self.frequencies = defaults;
            self.dirty = true;
        }
        info!("Band frequencies reset to defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Storage double that records every save.
    #[derive(Default)]
    struct MockStorage {
        saved: Option<[u32; FREQBAND_NUMBER_OF_BANDS]>,
        saves: usize,
        fail: bool,
    }

    impl BandStorage for MockStorage {
        fn save(&mut self, frequencies: &[u32]) -> Result<(), Error> {
            if self.fail {
                return Err(Error::Storage);
            }
            let mut copy = [0; FREQBAND_NUMBER_OF_BANDS];
            copy.copy_from_slice(frequencies);
            self.saved = Some(copy);
            self.saves += 1;
            Ok(())
        }

        fn load(&mut self, frequencies: &mut [u32]) -> Result<bool, Error> {
            if self.fail {
                return Err(Error::Storage);
            }
            match self.saved {
                Some(saved) => {
                    frequencies.copy_from_slice(&saved);
                    Ok(true)
                }
                None => Ok(false),
            }
        }
    }

    #[test]
    fn new_table_uses_defaults() {
        let table = BandTable::new(Volatile);
        assert_eq!(table.selected_band(), 0);
        for (i, band) in BANDS.iter().enumerate() {
            assert_eq!(table.frequency(i), Some(band.default_hz));
        }
        assert_eq!(table.frequency(FREQBAND_NUMBER_OF_BANDS), None);
        assert!(table.is_dirty());
    }

    #[test]
    fn band_names_come_from_plan() {
        let table = BandTable::new(Volatile);
        assert_eq!(table.band_name(0), "160m");
        assert_eq!(table.band_name(5), "20m");
        assert_eq!(table.band_name(99), "?");
    }

    #[test]
    fn select_band_updates_current_frequency() {
        let mut table = BandTable::new(Volatile);
        table.set_selected_band(3);
        assert_eq!(table.selected_band(), 3);
        assert_eq!(table.current_frequency(), 7_070_000);
    }

    #[test]
    fn select_out_of_range_is_ignored() {
        let mut table = BandTable::new(Volatile);
        table.set_selected_band(2);
        table.set_selected_band(FREQBAND_NUMBER_OF_BANDS);
        assert_eq!(table.selected_band(), 2);
    }

    #[test]
    fn set_frequency_clamps_and_rejects_bad_band() {
        let mut table = BandTable::new(Volatile);
        assert_eq!(table.set_frequency(1, 3_600_000), Ok(3_600_000));
        assert_eq!(table.set_frequency(1, 1), Ok(FREQ_MIN_HZ));
        assert_eq!(table.set_frequency(1, u32::MAX), Ok(FREQ_MAX_HZ));
        assert_eq!(
            table.set_frequency(FREQBAND_NUMBER_OF_BANDS, 7_000_000),
            Err(Error::BandOutOfRange(FREQBAND_NUMBER_OF_BANDS))
        );
    }

    #[test]
    fn tune_moves_selected_band_by_step() {
        let mut table = BandTable::new(Volatile);
        table.set_selected_band(5);
        assert_eq!(table.step(), TuningStep::Hz100);
        assert_eq!(table.tune(3), 14_070_300);
        assert_eq!(table.tune(-5), 14_069_800);
        // Other bands untouched.
        assert_eq!(table.frequency(4), Some(10_142_000));
    }

    #[test]
    fn tune_saturates_at_limits() {
        let mut table = BandTable::new(Volatile);
        table.set_selected_band(0);
        while table.step() != TuningStep::MHz1 {
            table.cycle_step();
        }
        assert_eq!(table.tune(-100), FREQ_MIN_HZ);
        assert_eq!(table.tune(i32::MAX), FREQ_MAX_HZ);
    }

    #[test]
    fn cycle_step_wraps() {
        let mut table = BandTable::new(Volatile);
        let mut seen = 0;
        let start = table.step();
        loop {
            seen += 1;
            if table.cycle_step() == start {
                break;
            }
        }
        assert_eq!(seen, 7);
        assert_eq!(TuningStep::MHz1.next(), TuningStep::Hz1);
    }

    #[test]
    fn write_saves_once_until_changed() {
        let mut table = BandTable::new(MockStorage::default());
        table.write_bands_to_storage();
        table.write_bands_to_storage();
        assert_eq!(table.storage().saves, 1);
        assert!(!table.is_dirty());

        table.set_selected_band(1);
        table.tune(1);
        table.write_bands_to_storage();
        assert_eq!(table.storage().saves, 2);
        assert_eq!(table.storage().saved.unwrap()[1], 3_580_100);
    }

    #[test]
    fn write_failure_keeps_table_dirty() {
        let mut table = BandTable::new(MockStorage {
            fail: true,
            ..Default::default()
        });
        table.write_bands_to_storage();
        assert!(table.is_dirty());
        assert_eq!(table.storage().saves, 0);
    }

    #[test]
    fn reset_restores_defaults_in_memory_only() {
        let mut table = BandTable::new(MockStorage::default());
        table.set_frequency(0, 1_900_000).unwrap();
        table.write_bands_to_storage();
        assert!(!table.is_dirty());

        table.reset_bands_to_default();
        assert_eq!(table.frequency(0), Some(1_838_000));
        assert!(table.is_dirty());
        assert_eq!(table.storage().saved.unwrap()[0], 1_900_000);
    }

    #[test]
    fn reset_on_defaults_stays_clean() {
        let mut table = BandTable::new(MockStorage::default());
        table.write_bands_to_storage();
        table.reset_bands_to_default();
        assert!(!table.is_dirty());
    }

    #[test]
    fn load_restores_saved_frequencies() {
        let mut storage = MockStorage::default();
        let mut saved = default_frequencies();
        saved[2] = 5_403_500;
        saved[9] = 99; // below limits
        storage.saved = Some(saved);

        let mut table = BandTable::new(storage);
        assert_eq!(table.load_from_storage(), Ok(()));
        assert_eq!(table.frequency(2), Some(5_403_500));
        assert_eq!(table.frequency(9), Some(FREQ_MIN_HZ));
        assert!(table.is_dirty());

        table.write_bands_to_storage();
        assert_eq!(table.storage().saves, 1);
        assert_eq!(table.storage().saved.unwrap()[9], FREQ_MIN_HZ);
        assert!(!table.is_dirty());
    }

    #[test]
    fn load_within_limits_is_clean() {
        let mut storage = MockStorage::default();
        let mut saved = default_frequencies();
        saved[4] = 10_130_000;
        storage.saved = Some(saved);

        let mut table = BandTable::new(storage);
        assert_eq!(table.load_from_storage(), Ok(()));
        assert!(!table.is_dirty());
        table.write_bands_to_storage();
        assert_eq!(table.storage().saves, 0);
    }

    #[test]
    fn load_from_empty_storage_keeps_defaults() {
        let mut table = BandTable::new(MockStorage::default());
        table.set_frequency(0, 2_000_000).unwrap();
        assert_eq!(table.load_from_storage(), Ok(()));
        assert_eq!(table.frequency(0), Some(1_838_000));
        assert!(!table.is_dirty());
    }

    #[test]
    fn load_failure_reports_error() {
        let mut table = BandTable::new(MockStorage {
            fail: true,
            ..Default::default()
        });
        assert_eq!(table.load_from_storage(), Err(Error::Storage));
        assert_eq!(table.frequency(0), Some(1_838_000));
        assert!(table.is_dirty());
    }

    fn select_via<M: FrequencyManager>(mut manager: M, band: usize) -> usize {
        manager.set_selected_band(band);
        M::BAND_COUNT
    }

    #[test]
    fn manager_works_through_mutable_reference() {
        let mut table = BandTable::new(Volatile);
        assert_eq!(select_via(&mut table, 7), FREQBAND_NUMBER_OF_BANDS);
        assert_eq!(table.selected_band(), 7);
    }
}
