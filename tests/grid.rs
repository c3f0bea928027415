use commitpaint::error::PaintError;
use commitpaint::grid::{
    grid_from_luma, kitty, parse_sprite, resolve_grid, values_in_date_order, GridSource,
    IntensityGrid, PixelFont, Rasterizer, SymbolPalette,
};
use commitpaint::model::Multiplier;
use image::{GrayAlphaImage, LumaA};
use std::fs;
use tempfile::tempdir;

fn sample() -> IntensityGrid {
    IntensityGrid::new(vec![
        vec![1, 2, 3],
        vec![0, 1, 0],
        vec![4, 0, 2],
        vec![0, 0, 0],
        vec![3, 3, 3],
        vec![0, 4, 1],
        vec![2, 0, 0],
    ])
    .unwrap()
}

#[test]
fn grid_must_have_seven_rows() {
    let err = IntensityGrid::new(vec![vec![1]; 6]).unwrap_err();
    assert!(matches!(err, PaintError::InvalidGrid(_)));
}

#[test]
fn grid_rows_must_be_equal() {
    let mut rows = vec![vec![0, 0]; 7];
    rows[3].push(1);
    assert!(matches!(IntensityGrid::new(rows), Err(PaintError::InvalidGrid(_))));
}

#[test]
fn grid_rejects_empty_and_out_of_range() {
    assert!(IntensityGrid::new(vec![Vec::new(); 7]).is_err());
    let mut rows = vec![vec![0]; 7];
    rows[0][0] = 5;
    assert!(IntensityGrid::new(rows).is_err());
}

#[test]
fn traversal_is_column_major() {
    let grid = sample();
    let values: Vec<u32> = values_in_date_order(&grid, Multiplier::ONE).collect();
    assert_eq!(
        values,
        vec![1, 0, 4, 0, 3, 0, 2, 2, 1, 0, 0, 3, 4, 0, 3, 0, 2, 0, 3, 1, 0]
    );
}

#[test]
fn traversal_scales_every_cell() {
    let grid = sample();
    let multiplier = Multiplier::new(3).unwrap();
    let values: Vec<u32> = values_in_date_order(&grid, multiplier).collect();

    assert_eq!(values.len(), 7 * grid.width());
    for w in 0..grid.width() {
        for h in 0..7 {
            let cell = u32::from(grid.get(h, w).unwrap());
            assert_eq!(values[w * 7 + h], cell * 3);
        }
    }
}

#[test]
fn traversal_reports_exact_length() {
    let grid = kitty();
    let mut values = values_in_date_order(&grid, Multiplier::ONE);
    assert_eq!(values.len(), 84);
    values.next();
    assert_eq!(values.len(), 83);
}

#[test]
fn kitty_is_seven_by_twelve() {
    let grid = kitty();
    assert_eq!(grid.height(), 7);
    assert_eq!(grid.width(), 12);
    assert_eq!(grid.get(0, 3), Some(4));
}

#[test]
fn sprite_uses_palette_and_pads_rows() {
    let sprite = "*~\n\n-=_x\n_\n*\n*\n*\n*\n";
    let grid = parse_sprite(sprite, &SymbolPalette::default()).unwrap();
    assert_eq!(grid.width(), 4);
    assert_eq!(grid.rows()[0], vec![4, 2, 0, 0]);
    assert_eq!(grid.rows()[1], vec![1, 3, 0, 0]);
    assert_eq!(grid.rows()[2], vec![0, 0, 0, 0]);
}

#[test]
fn palette_rejects_duplicate_symbols() {
    let err = SymbolPalette::new([('_', 0), ('_', 1)]).unwrap_err();
    assert!(matches!(err, PaintError::InvalidInput(_)));
}

#[test]
fn custom_palette_levels() {
    let palette = SymbolPalette::new([('#', 4), ('+', 2)]).unwrap();
    assert_eq!(palette.level('#'), 4);
    assert_eq!(palette.level('+'), 2);
    assert_eq!(palette.level('*'), 0);
}

#[test]
fn font_draws_seven_rows_with_spacing() {
    let grid = PixelFont::default().rasterize("HI").unwrap();
    // H is five wide, I three wide, one blank column between them
    assert_eq!(grid.width(), 9);
    assert_eq!(grid.get(3, 0), Some(4));
    assert_eq!(grid.get(3, 5), Some(0));
    assert_eq!(grid.get(0, 6), Some(4));
}

#[test]
fn font_rejects_unknown_glyphs() {
    let err = PixelFont::default().rasterize("héllo").unwrap_err();
    assert!(matches!(err, PaintError::Rasterize(_)));
}

#[test]
fn blank_or_unrenderable_text_falls_back() {
    let font = PixelFont::default();
    let palette = SymbolPalette::default();
    let fallback = kitty();

    for text in ["", "   ", "日本"] {
        let source = GridSource::Text(text.to_string());
        let grid = resolve_grid(&source, &font, &palette, &fallback).unwrap();
        assert_eq!(grid, fallback, "for {text:?}");
    }
}

#[test]
fn text_source_uses_the_rasterizer() {
    let font = PixelFont::default();
    let grid = resolve_grid(
        &GridSource::Text("ok".to_string()),
        &font,
        &SymbolPalette::default(),
        &kitty(),
    )
    .unwrap();
    assert_eq!(grid, font.rasterize("OK").unwrap());
}

#[test]
fn missing_sprite_file_is_an_error() {
    let dir = tempdir().unwrap();
    let source = GridSource::Sprite(dir.path().join("missing.txt"));
    let result = resolve_grid(&source, &PixelFont::default(), &SymbolPalette::default(), &kitty());
    assert!(matches!(result, Err(PaintError::Io(_))));
}

#[test]
fn sprite_file_source() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("heart.txt");
    fs::write(&path, "_*_*_\n*****\n*****\n_***_\n__*__\n_____\n_____\n").unwrap();

    let grid = resolve_grid(
        &GridSource::Sprite(path),
        &PixelFont::default(),
        &SymbolPalette::default(),
        &kitty(),
    )
    .unwrap();
    assert_eq!(grid.width(), 5);
    assert_eq!(grid.total(), 16 * 4);
}

#[test]
fn luminance_is_quantised_dark_to_high() {
    let mut image = GrayAlphaImage::new(3, 7);
    for y in 0..7 {
        image.put_pixel(0, y, LumaA([0, 255]));
        image.put_pixel(1, y, LumaA([255, 255]));
        image.put_pixel(2, y, LumaA([0, 0]));
    }
    image.put_pixel(1, 3, LumaA([128, 255]));

    let grid = grid_from_luma(&image).unwrap();
    assert_eq!(grid.get(0, 0), Some(4));
    assert_eq!(grid.get(0, 1), Some(0));
    assert_eq!(grid.get(0, 2), Some(0));
    assert_eq!(grid.get(3, 1), Some(2));
}

#[test]
fn image_must_be_seven_pixels_tall() {
    let image = GrayAlphaImage::new(4, 8);
    assert!(matches!(grid_from_luma(&image), Err(PaintError::InvalidGrid(_))));
}

#[test]
fn png_file_source() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dot.png");
    let mut image = GrayAlphaImage::from_pixel(2, 7, LumaA([255, 255]));
    image.put_pixel(1, 6, LumaA([0, 255]));
    image.save(&path).unwrap();

    let grid = resolve_grid(
        &GridSource::Image(path),
        &PixelFont::default(),
        &SymbolPalette::default(),
        &kitty(),
    )
    .unwrap();
    assert_eq!(grid.total(), 4);
    assert_eq!(grid.get(6, 1), Some(4));
}
