use crate::error::{PaintError, Result};
use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime, Weekday};

/// Commits are stamped at noon so no timezone shifts them to another day.
pub const COMMIT_HOUR: u32 = 12;

pub const DAYS_PER_WEEK: i64 = 7;

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// First Sunday on or after the same day one year before `today`, at noon.
///
/// This is row 0, column 0 of every painted grid. When `today` is 29 February
/// the year-earlier date is taken as 28 February.
pub fn start_date(today: NaiveDate) -> Result<NaiveDateTime> {
    let year = today.year() - 1;
    let year_ago = today
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, today.month(), 28))
        .ok_or_else(|| PaintError::InvalidDate(format!("no date one year before {today}")))?;

    let until_sunday = (7 - year_ago.weekday().num_days_from_sunday()) % 7;
    let sunday = year_ago
        .checked_add_signed(Duration::days(i64::from(until_sunday)))
        .ok_or_else(|| PaintError::InvalidDate(format!("no Sunday after {year_ago}")))?;
    debug_assert_eq!(sunday.weekday(), Weekday::Sun);

    sunday
        .and_hms_opt(COMMIT_HOUR, 0, 0)
        .ok_or_else(|| PaintError::InvalidDate(format!("cannot set noon on {sunday}")))
}

/// Consecutive days starting `offset_weeks` weeks after `start`.
///
/// The stream never ends on its own; it only stops if the calendar runs out
/// of representable dates.
#[derive(Debug, Clone)]
pub struct DateStream {
    next: Option<NaiveDateTime>,
}

impl DateStream {
    pub fn new(start: NaiveDateTime, offset_weeks: u32) -> Self {
        let shift = Duration::days(i64::from(offset_weeks) * DAYS_PER_WEEK);
        Self {
            next: start.checked_add_signed(shift),
        }
    }
}

impl Iterator for DateStream {
    type Item = NaiveDateTime;

    fn next(&mut self) -> Option<NaiveDateTime> {
        let current = self.next?;
        self.next = current.checked_add_signed(Duration::days(1));
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            Some(_) => (1, None),
            None => (0, Some(0)),
        }
    }
}

/// Date of the cell at `row` (weekday) and `column` (week) of a grid.
pub fn cell_date(
    start: NaiveDateTime,
    offset_weeks: u32,
    column: usize,
    row: usize,
) -> Option<NaiveDateTime> {
    let weeks = i64::from(offset_weeks).checked_add(i64::try_from(column).ok()?)?;
    let days = weeks
        .checked_mul(DAYS_PER_WEEK)?
        .checked_add(i64::try_from(row).ok()?)?;
    start.checked_add_signed(Duration::try_days(days)?)
}

/// Date of the last cell of a grid `width` weeks wide.
pub fn last_date(start: NaiveDateTime, offset_weeks: u32, width: usize) -> Option<NaiveDateTime> {
    let cells = i64::try_from(width).ok()?.checked_mul(DAYS_PER_WEEK)?;
    let days = i64::from(offset_weeks) * DAYS_PER_WEEK + cells - 1;
    start.checked_add_signed(Duration::try_days(days)?)
}
