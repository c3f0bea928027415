use crate::cli::{GridArgs, ScheduleArgs};
use crate::grid::{
    kitty, resolve_grid, GridSource, IntensityGrid, PixelFont, SymbolPalette, HEIGHT,
};
use crate::model::{PreviewOutput, SCHEMA_VERSION};
use crate::schedule::{self, cell_date, last_date, start_date};
use anyhow::Context;
use chrono::{NaiveDate, NaiveDateTime, Utc};
use console::style;

/// Weeks shown on a contribution calendar.
pub const CALENDAR_WEEKS: usize = 53;

const WEEKDAYS: [&str; HEIGHT] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Where a grid lands on the calendar.
#[derive(Debug, Clone, Copy)]
struct Placement {
    start: NaiveDateTime,
    end: NaiveDateTime,
    offset: u32,
    today: NaiveDate,
}

impl Placement {
    /// Calendar week `week` (counted from `start`) lies after today on `day`.
    fn is_future(&self, week: usize, day: usize) -> bool {
        cell_date(self.start, 0, week, day).map_or(true, |date| date.date() > self.today)
    }

    /// Lit cells of `grid` dated after today.
    fn future_cells(&self, grid: &IntensityGrid) -> usize {
        let offset = self.offset as usize;
        (0..grid.width())
            .flat_map(|column| (0..HEIGHT).map(move |day| (column, day)))
            .filter(|&(column, day)| grid.get(day, column).unwrap_or(0) > 0)
            .filter(|&(column, day)| self.is_future(offset + column, day))
            .count()
    }
}

pub fn exec(grid_args: GridArgs, schedule_args: ScheduleArgs, json: bool) -> anyhow::Result<()> {
    let source = grid_args.source().unwrap_or(GridSource::Fallback);
    let grid = resolve_grid(&source, &PixelFont::default(), &SymbolPalette::default(), &kitty())
        .context("Failed to build image grid")?;

    let today = schedule_args.today.unwrap_or_else(schedule::today);
    let start = start_date(today).context("Failed to compute start date")?;
    let offset = schedule_args.offset.unwrap_or(0);
    let end = last_date(start, offset, grid.width())
        .context("Image ends past the last representable date")?;

    let placement = Placement {
        start,
        end,
        offset,
        today,
    };
    if json {
        output_json(&grid, &placement)
    } else {
        output_calendar(&grid, &placement)
    }
}

fn output_json(grid: &IntensityGrid, placement: &Placement) -> anyhow::Result<()> {
    let output = PreviewOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        start_date: placement.start,
        end_date: placement.end,
        offset_weeks: placement.offset,
        width: grid.width(),
        future_cells: placement.future_cells(grid),
        rows: grid.rows().to_vec(),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_calendar(grid: &IntensityGrid, placement: &Placement) -> anyhow::Result<()> {
    let offset = placement.offset as usize;
    let weeks = CALENDAR_WEEKS.max(offset + grid.width());

    println!("{}", style("Contribution Calendar Preview").bold());
    println!("{}", "─".repeat(weeks + 4));

    for (day, label) in WEEKDAYS.iter().enumerate() {
        let mut line = format!("{label} ");
        for week in 0..weeks {
            let level = week
                .checked_sub(offset)
                .and_then(|column| grid.get(day, column))
                .unwrap_or(0);
            line.push_str(&cell(level, placement.is_future(week, day)));
        }
        println!("{line}");
    }

    println!("\n{} {}", style("Start").bold(), placement.start.date());
    println!("{} {}", style("End").bold(), placement.end.date());
    let future = placement.future_cells(grid);
    if future > 0 {
        println!(
            "{}",
            style(format!(
                "{future} cells are dated after {} and will not show until then",
                placement.today
            ))
            .yellow()
        );
    }

    println!("\n{}", style("Legend").bold());
    let legend: String = (0..=4).map(|level| cell(level, false)).collect();
    println!("  {legend} less to more");
    Ok(())
}

fn cell(level: u8, future: bool) -> String {
    let glyph = match level {
        0 => style("·").dim(),
        1 => style("■").color256(22),
        2 => style("■").color256(28),
        3 => style("■").color256(34),
        _ => style("■").color256(40),
    };
    if future && level > 0 {
        style("■").yellow().to_string()
    } else {
        glyph.to_string()
    }
}
