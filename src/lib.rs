//! Band/frequency selection screen for the SDR touch UI.
//!
//! The crate is the interaction logic of the "Frequencies" page: where the
//! band buttons go, what the two status lines say, and which frequency
//! manager call each button makes. Drawing, touch decoding and EEPROM
//! access belong to the page toolkit and the frequency manager.
//!
//! Usage: `cargo test` runs everything on the host.
//!
//! Note: the crate is `no_std` outside of tests. Enable `defmt` for
//! on-target logging and `embedded` for the Embassy UI loop.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod config;
pub mod error;
pub mod frequency;
pub mod layout;
pub mod ui;

pub use error::Error;
pub use frequency::{BandStorage, BandTable, FrequencyManager};
pub use layout::{position, ButtonPosition, GridLayout};
pub use ui::frequencies::{BandButtonSpec, FrequenciesScreen};
pub use ui::{Navigation, ScreenAction, WidgetId};
