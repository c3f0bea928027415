use super::IntensityGrid;

const KITTY: [[u8; 12]; 7] = [
    [0, 0, 0, 4, 0, 0, 0, 0, 4, 0, 0, 0],
    [0, 0, 4, 2, 4, 4, 4, 4, 2, 4, 0, 0],
    [0, 0, 4, 2, 2, 2, 2, 2, 2, 4, 0, 0],
    [2, 2, 4, 2, 4, 2, 2, 4, 2, 4, 2, 2],
    [0, 0, 4, 2, 2, 3, 3, 2, 2, 4, 0, 0],
    [2, 2, 4, 2, 2, 2, 2, 2, 2, 4, 2, 2],
    [0, 0, 0, 3, 4, 4, 4, 4, 3, 0, 0, 0],
];

/// Built-in image used when no other grid can be produced.
pub fn kitty() -> IntensityGrid {
    IntensityGrid {
        rows: KITTY.iter().map(|row| row.to_vec()).collect(),
    }
}
