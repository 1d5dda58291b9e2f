//! Application-wide constants and compile-time configuration.
//!
//! Screen geometry, widget identities and tuning limits live here so
//! they can be adjusted in one place.

// LCD

/// Panel width in pixels (landscape).
pub const LCD_WIDTH: i32 = 320;

/// Panel height in pixels (landscape).
pub const LCD_HEIGHT: i32 = 240;

// Band button grid

/// Screen identity of the first band button. Band `i` is `ID_FREQBTN_START + i`.
pub const ID_FREQBTN_START: u16 = 200;

/// Y coordinate of the first row of band buttons (below the title).
pub const FIRST_BUTTON_Y: i32 = 30;

/// Vertical pitch between band buttons.
pub const SPACE_PER_BUTTON_Y: i32 = 30;

/// X coordinate of the leftmost band column.
pub const LEFT_COL_X: i32 = 0;

/// Horizontal pitch between band columns.
pub const COLUMN_WIDTH: i32 = 110;

/// Band buttons stacked in one column before wrapping to the next.
pub const BUTTONS_PER_COLUMN: usize = 5;

/// Band columns that fit across the page left of the direction labels.
pub const MAX_BAND_COLUMNS: usize = 3;

/// Upper bound on the number of bands the screen can hold.
pub const MAX_BANDS: usize = MAX_BAND_COLUMNS * BUTTONS_PER_COLUMN;

// Action buttons
//
// Kept well below `ID_FREQBTN_START` so no action can ever decode as a band.

pub const ID_DONE: u16 = 10;
pub const ID_STORE: u16 = 11;
pub const ID_DEFAULTS: u16 = 12;

/// X positions of the bottom button row.
pub const DONE_X: i32 = 0;
pub const STORE_X: i32 = 80;
pub const DEFAULTS_X: i32 = 160;

/// Y position of the bottom button row.
pub const BUTTON_ROW_Y: i32 = LCD_HEIGHT - 30;

// Status area

/// Y positions of the two status lines.
pub const STATUS_LINE1_Y: i32 = LCD_HEIGHT - 54;
pub const STATUS_LINE2_Y: i32 = LCD_HEIGHT - 42;

/// Fixed width of every status string, in characters.
///
/// Labels are rewritten in place, so shorter text must be padded to
/// overwrite whatever was drawn before.
pub const STATUS_TEXT_LEN: usize = 28;

// Directions

/// X position of the two "Tap a band / to select." lines.
pub const DIRECTIONS_X: i32 = 200;

// Big frequency display button (bottom-right corner)

pub const FREQ_DISPLAY_WIDTH: i32 = 80;
pub const FREQ_DISPLAY_HEIGHT: i32 = 30;

// Tuning limits

/// Lowest frequency the band table will accept (Hz).
pub const FREQ_MIN_HZ: u32 = 100_000;

/// Highest frequency the band table will accept (Hz).
pub const FREQ_MAX_HZ: u32 = 60_000_000;

// Async UI loop

/// Depth of the touch-event queue feeding the UI task.
pub const TOUCH_QUEUE_DEPTH: usize = 4;
