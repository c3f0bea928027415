use super::{IntensityGrid, MAX_LEVEL};
use crate::error::{PaintError, Result};

/// Mapping from sprite characters to intensity levels.
///
/// Characters missing from the palette are background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolPalette {
    symbols: Vec<(char, u8)>,
}

impl SymbolPalette {
    /// Fails on a repeated symbol or a level above [`MAX_LEVEL`].
    pub fn new<I>(symbols: I) -> Result<Self>
    where
        I: IntoIterator<Item = (char, u8)>,
    {
        let mut palette = Self { symbols: Vec::new() };
        for (symbol, level) in symbols {
            if palette.symbols.iter().any(|&(s, _)| s == symbol) {
                return Err(PaintError::InvalidInput(format!(
                    "symbol '{symbol}' appears twice in palette"
                )));
            }
            if level > MAX_LEVEL {
                return Err(PaintError::InvalidInput(format!(
                    "symbol '{symbol}' maps to level {level}, maximum is {MAX_LEVEL}"
                )));
            }
            palette.symbols.push((symbol, level));
        }
        Ok(palette)
    }

    pub fn level(&self, symbol: char) -> u8 {
        self.symbols
            .iter()
            .find(|&&(s, _)| s == symbol)
            .map(|&(_, level)| level)
            .unwrap_or(0)
    }
}

impl Default for SymbolPalette {
    fn default() -> Self {
        Self {
            symbols: vec![('_', 0), ('-', 1), ('~', 2), ('=', 3), ('*', 4)],
        }
    }
}

/// Parse ASCII art into a grid. Empty lines are dropped and short rows are
/// padded with background.
pub fn parse_sprite(content: &str, palette: &SymbolPalette) -> Result<IntensityGrid> {
    let mut rows: Vec<Vec<u8>> = content
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
        .map(|line| line.chars().map(|c| palette.level(c)).collect())
        .collect();

    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    for row in &mut rows {
        row.resize(width, 0);
    }

    IntensityGrid::new(rows)
}
