//! Page description handed to the widget toolkit.
//!
//! The screen does not draw anything itself. It produces a flat list of
//! widgets with absolute page positions; the toolkit creates, draws and
//! hit-tests them, then reports touches back as [`WidgetId`]s.

use heapless::{String, Vec};

use super::{Color, Font, WidgetId};
use crate::config::MAX_BANDS;

/// Longest button caption kept; longer names are truncated.
pub const BUTTON_TEXT_LEN: usize = 16;

/// Title, two direction lines, two status lines, three action buttons and
/// the frequency display, plus one button per band.
pub const MAX_WIDGETS: usize = MAX_BANDS + 9;

pub type ButtonText = String<BUTTON_TEXT_LEN>;

/// Which of the two status lines a placeholder refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StatusLine {
    First,
    Second,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Widget {
    /// Fixed text.
    Label {
        text: &'static str,
        color: Color,
        background: Color,
        font: Font,
    },
    /// Status line whose text and colour the screen owns and rewrites.
    Status(StatusLine),
    /// Touchable button.
    Button { id: WidgetId, text: ButtonText },
    /// The toolkit's large "current frequency" button.
    FrequencyDisplay,
}

impl Widget {
    pub fn id(&self) -> Option<WidgetId> {
        match self {
            Widget::Button { id, .. } => Some(*id),
            _ => None,
        }
    }
}

/// A widget at an absolute page position.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Placement {
    pub x: i32,
    pub y: i32,
    pub widget: Widget,
}

pub type PageLayout = Vec<Placement, MAX_WIDGETS>;

/// Copy `text` into a button caption, truncating if too long.
pub fn button_text(text: &str) -> ButtonText {
    let mut caption = ButtonText::new();
    for c in text.chars() {
        if caption.push(c).is_err() {
            break;
        }
    }
    caption
}

/// Placement of the button with identity `id`, if any.
pub fn find(layout: &[Placement], id: WidgetId) -> Option<&Placement> {
    layout.iter().find(|p| p.widget.id() == Some(id))
}
