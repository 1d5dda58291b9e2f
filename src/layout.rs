//! Column-major button grid.
//!
//! Band buttons fill a column top to bottom, then wrap to the next column
//! to the right:
//!
//! ```text
//!   col 0     col 1     col 2
//!   [ 0 ]     [ 5 ]     [10 ]
//!   [ 1 ]     [ 6 ]     [11 ]
//!   [ 2 ]     [ 7 ]      ...
//!   [ 3 ]     [ 8 ]
//!   [ 4 ]     [ 9 ]
//! ```
//!
//! Nothing here bounds the index: an index past the last band simply lands
//! on another grid cell.

use crate::config::{BUTTONS_PER_COLUMN, COLUMN_WIDTH, FIRST_BUTTON_Y, LEFT_COL_X, SPACE_PER_BUTTON_Y};
use crate::error::Error;

/// Grid cell and pixel origin of one button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonPosition {
    pub column: usize,
    pub row: usize,
    pub x: i32,
    pub y: i32,
}

/// Place button `band_index` in a column-major grid.
///
/// `buttons_per_column` must be non-zero; use [`GridLayout`] for a checked
/// variant.
pub fn position(
    band_index: usize,
    buttons_per_column: usize,
    column_width: i32,
    row_height: i32,
    first_row_offset: i32,
) -> ButtonPosition {
    let column = band_index / buttons_per_column;
    let row = band_index % buttons_per_column;
    ButtonPosition {
        column,
        row,
        x: column as i32 * column_width,
        y: row as i32 * row_height + first_row_offset,
    }
}

/// Validated grid parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GridLayout {
    buttons_per_column: usize,
    column_width: i32,
    row_height: i32,
    origin_x: i32,
    origin_y: i32,
}

impl GridLayout {
    /// The band-button grid of the frequencies screen.
    pub const BANDS: GridLayout = GridLayout {
        buttons_per_column: BUTTONS_PER_COLUMN,
        column_width: COLUMN_WIDTH,
        row_height: SPACE_PER_BUTTON_Y,
        origin_x: LEFT_COL_X,
        origin_y: FIRST_BUTTON_Y,
    };

    /// Build a grid anchored at `(0, first_row_offset)`.
    pub fn new(
        buttons_per_column: usize,
        column_width: i32,
        row_height: i32,
        first_row_offset: i32,
    ) -> Result<Self, Error> {
        if buttons_per_column == 0 {
            return Err(Error::InvalidLayout);
        }
        Ok(Self {
            buttons_per_column,
            column_width,
            row_height,
            origin_x: 0,
            origin_y: first_row_offset,
        })
    }

    pub const fn buttons_per_column(&self) -> usize {
        self.buttons_per_column
    }

    pub fn position(&self, index: usize) -> ButtonPosition {
        let mut pos = position(
            index,
            self.buttons_per_column,
            self.column_width,
            self.row_height,
            self.origin_y,
        );
        pos.x += self.origin_x;
        pos
    }

    /// Number of columns needed to hold `count` buttons.
    pub fn columns_for(&self, count: usize) -> usize {
        count.div_ceil(self.buttons_per_column)
    }
}
