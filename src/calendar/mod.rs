pub mod exec;
pub mod fetch;
pub mod multiplier;
pub mod parse;

pub use exec::{calibrate, exec, read_calendar, Calibration};
pub use fetch::{contributions_url, fetch_calendar, fetch_calendar_with_progress, load_calendar};
pub use multiplier::{calculate_multiplier, find_max_daily_commits};
pub use parse::parse_calendar;
