//! Frequencies screen controller.
//!
//! Builds the band-selection page and reacts to its buttons:
//!
//! | Button  | Frequency manager          | Status lines |
//! |---------|----------------------------|--------------|
//! | band i  | `set_selected_band(i)`     | Normal       |
//! | Store   | `write_bands_to_storage()` | Stored       |
//! | Defaults| `reset_bands_to_default()` | Defaults     |
//! | Done    | -                          | Normal, then leave |
//!
//! The controller owns both status labels; nothing else mutates them.

use heapless::Vec;

use super::feedback::{Feedback, StatusLabel, StatusMessage};
use super::widgets::{button_text, ButtonText, PageLayout, Placement, StatusLine, Widget};
use super::{Color, Font, Navigation, ScreenAction, WidgetId};
use crate::config::{
    BUTTON_ROW_Y, DEFAULTS_X, DIRECTIONS_X, DONE_X, FREQ_DISPLAY_HEIGHT, FREQ_DISPLAY_WIDTH,
    ID_DEFAULTS, ID_DONE, ID_STORE, LCD_HEIGHT, LCD_WIDTH, MAX_BANDS, MAX_BAND_COLUMNS,
    STATUS_LINE1_Y, STATUS_LINE2_Y, STORE_X,
};
use crate::error::Error;
use crate::frequency::FrequencyManager;
use crate::layout::GridLayout;

/// One band button, fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BandButtonSpec {
    pub band: usize,
    pub label: ButtonText,
    pub id: WidgetId,
}

/// The band/frequency selection screen.
pub struct FrequenciesScreen<M> {
    manager: M,
    buttons: Vec<BandButtonSpec, MAX_BANDS>,
    feedback: Feedback,
    status1: StatusLabel,
    status2: StatusLabel,
}

impl<M: FrequencyManager> FrequenciesScreen<M> {
    /// Build the screen for every band `manager` knows about.
    pub fn new(manager: M) -> Result<Self, Error> {
        let columns = GridLayout::BANDS.columns_for(M::BAND_COUNT);
        if columns > MAX_BAND_COLUMNS {
            error!(
                "Frequencies: {} bands need {} columns, page has {}",
                M::BAND_COUNT,
                columns,
                MAX_BAND_COLUMNS
            );
            return Err(Error::TooManyBands(M::BAND_COUNT));
        }

        let mut buttons = Vec::new();
        for band in 0..M::BAND_COUNT {
            let id = ScreenAction::SelectBand(band)
                .widget_id()
                .ok_or(Error::BandOutOfRange(band))?;
            let spec = BandButtonSpec {
                band,
                label: button_text(manager.band_name(band)),
                id,
            };
            buttons.push(spec).map_err(|_| Error::BufferOverflow)?;
        }

        let msg = Feedback::Normal.message();
        let color = msg.emphasis.color();
        info!("Frequencies screen built with {} bands", M::BAND_COUNT);

        Ok(Self {
            manager,
            buttons,
            feedback: Feedback::Normal,
            status1: StatusLabel::new(msg.line1, color),
            status2: StatusLabel::new(msg.line2, color),
        })
    }

    /// Full page description, in toolkit placement order.
    pub fn layout(&self) -> Result<PageLayout, Error> {
        let mut page = PageLayout::new();
        let mut place = |x: i32, y: i32, widget: Widget| {
            page.push(Placement { x, y, widget })
                .map_err(|_| Error::BufferOverflow)
        };

        // Title
        place(0, 0, label("Frequencies", Color::White, Font::Large))?;
        place(DIRECTIONS_X, 0, label("Tap a band", Color::Yellow, Font::Bold))?;
        place(DIRECTIONS_X, 10, label("to select.", Color::Yellow, Font::Bold))?;

        // Band buttons
        for spec in &self.buttons {
            let pos = GridLayout::BANDS.position(spec.band);
            place(
                pos.x,
                pos.y,
                Widget::Button {
                    id: spec.id,
                    text: spec.label.clone(),
                },
            )?;
        }

        // Status lines and button row
        place(0, STATUS_LINE1_Y, Widget::Status(StatusLine::First))?;
        place(0, STATUS_LINE2_Y, Widget::Status(StatusLine::Second))?;
        place(STORE_X, BUTTON_ROW_Y, action_button(ID_STORE, " Store  "))?;
        place(DEFAULTS_X, BUTTON_ROW_Y, action_button(ID_DEFAULTS, "Defaults"))?;
        place(DONE_X, BUTTON_ROW_Y, action_button(ID_DONE, "  Done  "))?;
        place(
            LCD_WIDTH - FREQ_DISPLAY_WIDTH,
            LCD_HEIGHT - FREQ_DISPLAY_HEIGHT,
            Widget::FrequencyDisplay,
        )?;

        Ok(page)
    }

    /// Handle a touch on the widget with identity `id`.
    ///
    /// An identity that is not on this screen is a wiring defect. It is
    /// logged and dropped; no state changes.
    pub fn on_click(&mut self, id: WidgetId) -> Result<Navigation, Error> {
        match ScreenAction::decode(id, M::BAND_COUNT) {
            Ok(action) => Ok(self.apply(action)),
            Err(e) => {
                error!("Frequencies: bad widget identity {}: {}", id, e);
                Err(e)
            }
        }
    }

    /// Handle an already-decoded action.
    pub fn dispatch(&mut self, action: ScreenAction) -> Result<Navigation, Error> {
        if let ScreenAction::SelectBand(band) = action {
            if band >= M::BAND_COUNT {
                error!("Frequencies: band {} out of range", band);
                return Err(Error::BandOutOfRange(band));
            }
        }
        Ok(self.apply(action))
    }

    fn apply(&mut self, action: ScreenAction) -> Navigation {
        debug!("Frequencies: {}", action);
        let next = self.feedback.after(action);
        match action {
            ScreenAction::SelectBand(band) => {
                self.manager.set_selected_band(band);
                self.show(next);
                Navigation::Stay
            }
            ScreenAction::Store => {
                self.show(next);
                self.manager.write_bands_to_storage();
                Navigation::Stay
            }
            ScreenAction::Defaults => {
                self.show(next);
                self.manager.reset_bands_to_default();
                Navigation::Stay
            }
            ScreenAction::Done => {
                self.leave();
                Navigation::MainScreen
            }
        }
    }

    /// Reset the status lines so the next visit starts clean.
    pub fn leave(&mut self) {
        if self.feedback != Feedback::Normal {
            info!("Frequencies: clearing {} before leaving", self.feedback);
        }
        self.show(Feedback::Normal);
    }

    fn show(&mut self, feedback: Feedback) {
        let msg = feedback.message();
        let color = msg.emphasis.color();
        self.status1.set(msg.line1, color);
        self.status2.set(msg.line2, color);
        self.feedback = feedback;
    }

    pub fn feedback(&self) -> Feedback {
        self.feedback
    }

    /// What the status lines currently say.
    pub fn status_message(&self) -> StatusMessage {
        self.feedback.message()
    }

    pub fn status_label(&self, line: StatusLine) -> &StatusLabel {
        match line {
            StatusLine::First => &self.status1,
            StatusLine::Second => &self.status2,
        }
    }

    /// Clear and return the redraw flag of a status line.
    pub fn take_redraw(&mut self, line: StatusLine) -> bool {
        match line {
            StatusLine::First => self.status1.take_redraw(),
            StatusLine::Second => self.status2.take_redraw(),
        }
    }

    pub fn band_buttons(&self) -> &[BandButtonSpec] {
        &self.buttons
    }

    pub fn manager(&self) -> &M {
        &self.manager
    }

    pub fn manager_mut(&mut self) -> &mut M {
        &mut self.manager
    }

    pub fn into_manager(self) -> M {
        self.manager
    }
}

fn label(text: &'static str, color: Color, font: Font) -> Widget {
    Widget::Label {
        text,
        color,
        background: Color::Black,
        font,
    }
}

fn action_button(id: u16, text: &str) -> Widget {
    Widget::Button {
        id: WidgetId(id),
        text: button_text(text),
    }
}
