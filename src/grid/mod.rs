pub mod font;
pub mod images;
pub mod png;
pub mod source;
pub mod sprite;
pub mod traverse;

pub use font::{PixelFont, Rasterizer};
pub use images::kitty;
pub use png::{grid_from_luma, load_png};
pub use source::{resolve_grid, GridSource};
pub use sprite::{parse_sprite, SymbolPalette};
pub use traverse::{values_in_date_order, DateOrderValues};

use crate::error::{PaintError, Result};

/// One row per weekday, Sunday first.
pub const HEIGHT: usize = 7;

/// Darkest level of the calendar palette.
pub const MAX_LEVEL: u8 = 4;

/// A 7-row, row-major grid of intensity levels; columns are weeks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntensityGrid {
    rows: Vec<Vec<u8>>,
}

impl IntensityGrid {
    pub fn new(rows: Vec<Vec<u8>>) -> Result<Self> {
        if rows.len() != HEIGHT {
            return Err(PaintError::InvalidGrid(format!(
                "expected {HEIGHT} rows, found {}",
                rows.len()
            )));
        }

        let width = rows[0].len();
        if width == 0 {
            return Err(PaintError::InvalidGrid("grid has no columns".to_string()));
        }
        if let Some((index, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(PaintError::InvalidGrid(format!(
                "row {index} has {} columns, expected {width}",
                row.len()
            )));
        }
        if let Some(level) = rows.iter().flatten().copied().find(|&v| v > MAX_LEVEL) {
            return Err(PaintError::InvalidGrid(format!(
                "level {level} exceeds maximum of {MAX_LEVEL}"
            )));
        }

        Ok(Self { rows })
    }

    /// An all-background grid `width` weeks wide.
    pub fn blank(width: usize) -> Result<Self> {
        Self::new(vec![vec![0; width]; HEIGHT])
    }

    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    pub fn height(&self) -> usize {
        HEIGHT
    }

    pub fn get(&self, row: usize, column: usize) -> Option<u8> {
        self.rows.get(row).and_then(|r| r.get(column)).copied()
    }

    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    /// Sum of every level in the grid.
    pub fn total(&self) -> u64 {
        self.rows.iter().flatten().map(|&v| u64::from(v)).sum()
    }
}
