//! Status-line feedback.
//!
//! The two status lines at the bottom of the screen tell the user what the
//! last action did. Three states, all reachable from each other:
//!
//! ```text
//!            store             defaults
//!   Normal ---------> Stored   Normal ---------> Defaults
//!     ^                 |                           |
//!     +--- band / done -+------------ band / done --+
//! ```
//!
//! Store and defaults can also be pressed from either highlighted state.

use super::{Color, ScreenAction};

/// Colour treatment of the status lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Emphasis {
    Normal,
    Highlighted,
}

impl Emphasis {
    pub const fn color(self) -> Color {
        match self {
            Emphasis::Normal => Color::White,
            Emphasis::Highlighted => Color::Yellow,
        }
    }
}

/// Content of both status lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusMessage {
    pub line1: &'static str,
    pub line2: &'static str,
    pub emphasis: Emphasis,
}

// Every line is padded to `STATUS_TEXT_LEN` characters.
const NORMAL: StatusMessage = StatusMessage {
    line1: "Press & turn frequency knob ",
    line2: "to set frequency step size. ",
    emphasis: Emphasis::Normal,
};

const STORED: StatusMessage = StatusMessage {
    line1: "Frequencies for each band   ",
    line2: "now saved in EEPROM.        ",
    emphasis: Emphasis::Highlighted,
};

const DEFAULTS: StatusMessage = StatusMessage {
    line1: "Frequencies for each band   ",
    line2: "now reset to default.       ",
    emphasis: Emphasis::Highlighted,
};

/// Feedback state of the screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Feedback {
    /// Usage hint, default colour.
    #[default]
    Normal,
    /// Band frequencies were just written to storage.
    Stored,
    /// Band frequencies were just reset to factory defaults.
    Defaults,
}

impl Feedback {
    pub const fn message(self) -> StatusMessage {
        match self {
            Feedback::Normal => NORMAL,
            Feedback::Stored => STORED,
            Feedback::Defaults => DEFAULTS,
        }
    }

    /// State after `action`. Independent of the current state.
    pub const fn after(self, action: ScreenAction) -> Feedback {
        match action {
            ScreenAction::SelectBand(_) | ScreenAction::Done => Feedback::Normal,
            ScreenAction::Store => Feedback::Stored,
            ScreenAction::Defaults => Feedback::Defaults,
        }
    }
}

/// A status label owned by the screen and rewritten in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusLabel {
    text: &'static str,
    color: Color,
    redraw: bool,
}

impl StatusLabel {
    pub const fn new(text: &'static str, color: Color) -> Self {
        Self {
            text,
            color,
            redraw: true,
        }
    }

    pub fn text(&self) -> &'static str {
        self.text
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Rewrite the label. Only a real change schedules a redraw.
    pub fn set(&mut self, text: &'static str, color: Color) {
        if self.text != text || self.color != color {
            self.text = text;
            self.color = color;
            self.redraw = true;
        }
    }

    pub fn needs_redraw(&self) -> bool {
        self.redraw
    }

    /// Clear and return the redraw flag.
    pub fn take_redraw(&mut self) -> bool {
        core::mem::replace(&mut self.redraw, false)
    }
}
