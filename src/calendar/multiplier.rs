use crate::error::{PaintError, Result};
use crate::model::Multiplier;

/// Number of non-background colour levels on the calendar.
pub const LEVELS: u32 = 4;

/// Highest daily count. An empty sequence is an error, never zero.
pub fn find_max_daily_commits<I>(counts: I) -> Result<u32>
where
    I: IntoIterator<Item = u32>,
{
    counts.into_iter().max().ok_or(PaintError::NoData)
}

/// `ceil(max / 4)`, or one when the busiest day had no commits.
pub fn calculate_multiplier(max_commits: u32) -> Multiplier {
    Multiplier::new(max_commits.div_ceil(LEVELS)).unwrap_or(Multiplier::ONE)
}
