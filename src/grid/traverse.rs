use super::{IntensityGrid, HEIGHT};
use crate::model::Multiplier;

/// Scaled levels in calendar order: week by week, Sunday to Saturday.
///
/// Item `w * 7 + h` is `grid[h][w] * multiplier`, which lines up with the
/// `w * 7 + h`-th day of a [`DateStream`](crate::schedule::DateStream)
/// started at the same origin.
#[derive(Debug, Clone)]
pub struct DateOrderValues<'a> {
    grid: &'a IntensityGrid,
    multiplier: u32,
    index: usize,
}

pub fn values_in_date_order(grid: &IntensityGrid, multiplier: Multiplier) -> DateOrderValues<'_> {
    DateOrderValues {
        grid,
        multiplier: multiplier.get(),
        index: 0,
    }
}

impl DateOrderValues<'_> {
    fn len_total(&self) -> usize {
        self.grid.width() * HEIGHT
    }
}

impl Iterator for DateOrderValues<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.index >= self.len_total() {
            return None;
        }
        let (week, day) = (self.index / HEIGHT, self.index % HEIGHT);
        self.index += 1;
        let level = self.grid.rows[day][week];
        Some(u32::from(level).saturating_mul(self.multiplier))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len_total() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DateOrderValues<'_> {}
