//! User interface subsystem - the frequencies screen.
//!
//! The page toolkit delivers a touch as the numeric identity of the widget
//! that was hit. That identity is decoded once, here, into a
//! [`ScreenAction`]; everything downstream matches on the action.
//!
//! ## Components
//!
//! - **Feedback**: status-line state machine
//! - **Widgets**: the page description handed to the toolkit
//! - **Frequencies**: the screen controller

pub mod feedback;
pub mod frequencies;
#[cfg(feature = "embedded")]
pub mod task;
pub mod widgets;

use crate::config::{ID_DEFAULTS, ID_DONE, ID_FREQBTN_START, ID_STORE};
use crate::error::Error;

/// Numeric identity a touch event carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WidgetId(pub u16);

/// What the user asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScreenAction {
    /// A band button was tapped.
    SelectBand(usize),
    /// Persist every band's frequency.
    Store,
    /// Reset every band to factory defaults.
    Defaults,
    /// Leave the screen.
    Done,
}

impl ScreenAction {
    /// Decode a widget identity on a screen showing `band_count` bands.
    ///
    /// Band identities form the half-open range
    /// `ID_FREQBTN_START..ID_FREQBTN_START + band_count`.
    pub fn decode(id: WidgetId, band_count: usize) -> Result<Self, Error> {
        match id.0 {
            ID_DONE => Ok(ScreenAction::Done),
            ID_STORE => Ok(ScreenAction::Store),
            ID_DEFAULTS => Ok(ScreenAction::Defaults),
            raw if raw >= ID_FREQBTN_START => {
                let band = usize::from(raw - ID_FREQBTN_START);
                if band < band_count {
                    Ok(ScreenAction::SelectBand(band))
                } else {
                    Err(Error::BandOutOfRange(band))
                }
            }
            raw => Err(Error::UnknownWidget(raw)),
        }
    }

    /// Identity of the widget that produces this action.
    ///
    /// `None` for a band index that cannot be expressed as an identity.
    pub fn widget_id(self) -> Option<WidgetId> {
        match self {
            ScreenAction::Done => Some(WidgetId(ID_DONE)),
            ScreenAction::Store => Some(WidgetId(ID_STORE)),
            ScreenAction::Defaults => Some(WidgetId(ID_DEFAULTS)),
            ScreenAction::SelectBand(band) => u16::try_from(band)
                .ok()
                .and_then(|band| ID_FREQBTN_START.checked_add(band))
                .map(WidgetId),
        }
    }
}

/// Where the host should go after handling an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Navigation {
    /// Keep showing this screen.
    Stay,
    /// Return to the main screen.
    MainScreen,
}

/// Label colours, as RGB565 panel values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    White,
    Yellow,
    Black,
}

impl Color {
    pub const fn rgb565(self) -> u16 {
        match self {
            Color::White => 0xFFFF,
            Color::Yellow => 0xFFE0,
            Color::Black => 0x0000,
        }
    }
}

/// Toolkit fonts used on this screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Font {
    /// 12x12, titles.
    Large,
    /// 8x12 bold, body text.
    Bold,
}
