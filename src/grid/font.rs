//! Built-in 7-pixel-tall bitmap font.
//!
//! Glyphs are drawn with `#` for lit pixels and `.` for background. Most are
//! five columns wide; space and narrow punctuation are thinner. Letters are
//! matched case-insensitively.

use super::{IntensityGrid, HEIGHT, MAX_LEVEL};
use crate::error::{PaintError, Result};

/// Turns text into an intensity grid.
pub trait Rasterizer {
    fn rasterize(&self, text: &str) -> Result<IntensityGrid>;
}

/// Renders text with the built-in font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelFont {
    /// Level painted for lit pixels.
    pub level: u8,
    /// Blank columns between glyphs.
    pub spacing: usize,
}

impl Default for PixelFont {
    fn default() -> Self {
        Self {
            level: MAX_LEVEL,
            spacing: 1,
        }
    }
}

impl Rasterizer for PixelFont {
    fn rasterize(&self, text: &str) -> Result<IntensityGrid> {
        let text = text.trim();
        if text.is_empty() {
            return Err(PaintError::Rasterize("nothing to draw".to_string()));
        }

        let mut rows: Vec<Vec<u8>> = vec![Vec::new(); HEIGHT];
        for (index, ch) in text.chars().enumerate() {
            let glyph = glyph(ch.to_ascii_uppercase())
                .ok_or_else(|| PaintError::Rasterize(format!("no glyph for '{ch}'")))?;

            for (row, pattern) in rows.iter_mut().zip(glyph) {
                if index > 0 {
                    row.extend(std::iter::repeat(0).take(self.spacing));
                }
                row.extend(
                    pattern
                        .bytes()
                        .map(|px| if px == b'#' { self.level } else { 0 }),
                );
            }
        }

        IntensityGrid::new(rows)
    }
}

fn glyph(ch: char) -> Option<[&'static str; HEIGHT]> {
    let rows = match ch {
        'A' => [".###.", "#...#", "#...#", "#####", "#...#", "#...#", "#...#"],
        'B' => ["####.", "#...#", "#...#", "####.", "#...#", "#...#", "####."],
        'C' => [".###.", "#...#", "#....", "#....", "#....", "#...#", ".###."],
        'D' => ["####.", "#...#", "#...#", "#...#", "#...#", "#...#", "####."],
        'E' => ["#####", "#....", "#....", "####.", "#....", "#....", "#####"],
        'F' => ["#####", "#....", "#....", "####.", "#....", "#....", "#...."],
        'G' => [".###.", "#...#", "#....", "#.###", "#...#", "#...#", ".####"],
        'H' => ["#...#", "#...#", "#...#", "#####", "#...#", "#...#", "#...#"],
        'I' => ["###", ".#.", ".#.", ".#.", ".#.", ".#.", "###"],
        'J' => ["..###", "...#.", "...#.", "...#.", "...#.", "#..#.", ".##.."],
        'K' => ["#...#", "#..#.", "#.#..", "##...", "#.#..", "#..#.", "#...#"],
        'L' => ["#....", "#....", "#....", "#....", "#....", "#....", "#####"],
        'M' => ["#...#", "##.##", "#.#.#", "#.#.#", "#...#", "#...#", "#...#"],
        'N' => ["#...#", "#...#", "##..#", "#.#.#", "#..##", "#...#", "#...#"],
        'O' => [".###.", "#...#", "#...#", "#...#", "#...#", "#...#", ".###."],
        'P' => ["####.", "#...#", "#...#", "####.", "#....", "#....", "#...."],
        'Q' => [".###.", "#...#", "#...#", "#...#", "#.#.#", "#..#.", ".##.#"],
        'R' => ["####.", "#...#", "#...#", "####.", "#.#..", "#..#.", "#...#"],
        'S' => [".####", "#....", "#....", ".###.", "....#", "....#", "####."],
        'T' => ["#####", "..#..", "..#..", "..#..", "..#..", "..#..", "..#.."],
        'U' => ["#...#", "#...#", "#...#", "#...#", "#...#", "#...#", ".###."],
        'V' => ["#...#", "#...#", "#...#", "#...#", "#...#", ".#.#.", "..#.."],
        'W' => ["#...#", "#...#", "#...#", "#.#.#", "#.#.#", "#.#.#", ".#.#."],
        'X' => ["#...#", "#...#", ".#.#.", "..#..", ".#.#.", "#...#", "#...#"],
        'Y' => ["#...#", "#...#", ".#.#.", "..#..", "..#..", "..#..", "..#.."],
        'Z' => ["#####", "....#", "...#.", "..#..", ".#...", "#....", "#####"],
        '0' => [".###.", "#...#", "#..##", "#.#.#", "##..#", "#...#", ".###."],
        '1' => ["..#..", ".##..", "..#..", "..#..", "..#..", "..#..", ".###."],
        '2' => [".###.", "#...#", "....#", "...#.", "..#..", ".#...", "#####"],
        '3' => ["#####", "...#.", "..#..", "...#.", "....#", "#...#", ".###."],
        '4' => ["...#.", "..##.", ".#.#.", "#..#.", "#####", "...#.", "...#."],
        '5' => ["#####", "#....", "####.", "....#", "....#", "#...#", ".###."],
        '6' => ["..##.", ".#...", "#....", "####.", "#...#", "#...#", ".###."],
        '7' => ["#####", "....#", "...#.", "..#..", ".#...", ".#...", ".#..."],
        '8' => [".###.", "#...#", "#...#", ".###.", "#...#", "#...#", ".###."],
        '9' => [".###.", "#...#", "#...#", ".####", "....#", "...#.", ".##.."],
        ' ' => ["...", "...", "...", "...", "...", "...", "..."],
        '!' => ["#", "#", "#", "#", "#", ".", "#"],
        '.' => [".", ".", ".", ".", ".", ".", "#"],
        ',' => ["..", "..", "..", "..", "..", ".#", "#."],
        ':' => [".", ".", "#", ".", "#", ".", "."],
        '\'' => ["#", "#", ".", ".", ".", ".", "."],
        '-' => ["...", "...", "...", "###", "...", "...", "..."],
        '+' => [".....", "..#..", "..#..", "#####", "..#..", "..#..", "....."],
        '?' => [".###.", "#...#", "....#", "...#.", "..#..", ".....", "..#.."],
        '<' => ["...#", "..#.", ".#..", "#...", ".#..", "..#.", "...#"],
        '>' => ["#...", ".#..", "..#.", "...#", "..#.", ".#..", "#..."],
        '#' => [".#.#.", ".#.#.", "#####", ".#.#.", "#####", ".#.#.", ".#.#."],
        _ => return None,
    };
    Some(rows)
}
