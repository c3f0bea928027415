use super::{
    calculate_multiplier, contributions_url, fetch_calendar_with_progress, find_max_daily_commits,
    load_calendar, parse_calendar,
};
use crate::cli::CalendarArgs;
use crate::error::Result;
use crate::model::{CalibrationOutput, Multiplier, DEFAULT_BASE_URL, SCHEMA_VERSION};
use crate::prompt::{Prompter, TermInput};
use anyhow::Context;
use chrono::Utc;
use console::{style, Term};

/// What a contributions calendar says about the user's busiest day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calibration {
    pub source: String,
    pub days: usize,
    pub max_daily_commits: u32,
    pub multiplier: Multiplier,
}

pub fn calibrate(document: &str, source: String) -> Result<Calibration> {
    let counts: Vec<u32> = parse_calendar(document).collect();
    log::debug!("found {} daily counts in {source}", counts.len());

    let max_daily_commits = find_max_daily_commits(counts.iter().copied())?;
    Ok(Calibration {
        source,
        days: counts.len(),
        max_daily_commits,
        multiplier: calculate_multiplier(max_daily_commits),
    })
}

/// Read the calendar named by `args`, from disk or over HTTP.
pub fn read_calendar(
    args: &CalendarArgs,
    base_url: &str,
    username: &str,
    show_progress: bool,
) -> Result<Calibration> {
    match &args.calendar_file {
        Some(path) => {
            let document = load_calendar(path)?;
            calibrate(&document, path.display().to_string())
        }
        None => {
            let timeout = args.timeout.into();
            let document =
                fetch_calendar_with_progress(username, base_url, timeout, show_progress)?;
            calibrate(&document, contributions_url(username, base_url))
        }
    }
}

pub fn exec(args: CalendarArgs, json: bool) -> anyhow::Result<()> {
    let mut prompter = Prompter::new(TermInput::new());
    let base_url = args.base_url.clone().unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let username = match (&args.username, &args.calendar_file) {
        (Some(name), _) => name.clone(),
        (None, Some(_)) => String::new(),
        (None, None) => prompter.required("Enter your GitHub username: ", "username")?,
    };

    let show_progress = !json && Term::stderr().is_term();
    let calibration = read_calendar(&args, &base_url, &username, show_progress)
        .context("Failed to read contributions calendar")?;

    if json {
        output_json(&calibration)
    } else {
        output_table(&calibration)
    }
}

fn output_json(calibration: &Calibration) -> anyhow::Result<()> {
    let output = CalibrationOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        source: calibration.source.clone(),
        days: calibration.days,
        max_daily_commits: calibration.max_daily_commits,
        multiplier: calibration.multiplier,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_table(calibration: &Calibration) -> anyhow::Result<()> {
    println!("{}", style("Contribution Calendar").bold());
    println!("{}", "─".repeat(50));
    println!("{:<20} {}", "Source", calibration.source);
    println!("{:<20} {:>8}", "Days", calibration.days);
    println!("{:<20} {:>8}", "Busiest day", calibration.max_daily_commits);
    println!(
        "{:<20} {:>8}",
        "Multiplier",
        style(calibration.multiplier).green().bold()
    );
    Ok(())
}
