use super::{IntensityGrid, HEIGHT, MAX_LEVEL};
use crate::error::{PaintError, Result};
use image::GrayAlphaImage;
use std::path::Path;

/// Pixels more transparent than this are background.
const ALPHA_CUTOFF: u8 = 128;

/// Load a PNG exactly seven pixels tall as a grid.
pub fn load_png(path: &Path) -> Result<IntensityGrid> {
    log::debug!("loading image {}", path.display());
    let image = image::open(path)?.to_luma_alpha8();
    grid_from_luma(&image)
}

/// Quantise luminance into levels; black is darkest, white is background.
pub fn grid_from_luma(image: &GrayAlphaImage) -> Result<IntensityGrid> {
    let (width, height) = image.dimensions();
    if height as usize != HEIGHT {
        return Err(PaintError::InvalidGrid(format!(
            "image must be {HEIGHT} pixels tall, found {height}"
        )));
    }

    let buckets = u32::from(MAX_LEVEL) + 1;
    let rows = (0..height)
        .map(|y| {
            (0..width)
                .map(|x| {
                    let [luma, alpha] = image.get_pixel(x, y).0;
                    if alpha < ALPHA_CUTOFF {
                        return 0;
                    }
                    let darkness = u32::from(u8::MAX - luma);
                    (darkness * buckets / 256) as u8
                })
                .collect()
        })
        .collect();

    IntensityGrid::new(rows)
}
