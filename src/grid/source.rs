use super::{load_png, parse_sprite, IntensityGrid, Rasterizer, SymbolPalette};
use crate::error::Result;
use std::path::PathBuf;

/// Where the grid to paint comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridSource {
    Text(String),
    Sprite(PathBuf),
    Image(PathBuf),
    Fallback,
}

/// Build the grid for `source`.
///
/// Blank text and rasterization failures fall back to `fallback`. Sprite and
/// image files were asked for explicitly, so their errors are returned.
pub fn resolve_grid(
    source: &GridSource,
    rasterizer: &dyn Rasterizer,
    palette: &SymbolPalette,
    fallback: &IntensityGrid,
) -> Result<IntensityGrid> {
    match source {
        GridSource::Text(text) if text.trim().is_empty() => Ok(fallback.clone()),
        GridSource::Text(text) => match rasterizer.rasterize(text) {
            Ok(grid) => Ok(grid),
            Err(e) => {
                log::info!("{e}; using the fallback image");
                Ok(fallback.clone())
            }
        },
        GridSource::Sprite(path) => {
            log::debug!("reading sprite {}", path.display());
            let content = std::fs::read_to_string(path)?;
            parse_sprite(&content, palette)
        }
        GridSource::Image(path) => load_png(path),
        GridSource::Fallback => Ok(fallback.clone()),
    }
}
