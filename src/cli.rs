use crate::grid::GridSource;
use crate::model::{DEFAULT_BRANCH, DEFAULT_OUTPUT};
use anyhow::Result;
use chrono::NaiveDate;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "commitpaint")]
#[command(about = "Paint images onto your contribution calendar with backdated commits")]
#[command(version)]
pub struct Cli {
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase log verbosity (-v, -vv)"
    )]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone, Debug)]
pub struct CalendarArgs {
    #[arg(long, help = "Base URL of the hosting site (default https://github.com/)")]
    pub base_url: Option<String>,

    #[arg(long, help = "Account whose contribution calendar is read")]
    pub username: Option<String>,

    #[arg(long, help = "Read the calendar document from a file instead of fetching it")]
    pub calendar_file: Option<PathBuf>,

    #[arg(long, help = "HTTP timeout, e.g. 10s or 1m", default_value = "10s")]
    pub timeout: humantime::Duration,
}

#[derive(Args, Clone, Debug, Default)]
#[group(multiple = false)]
pub struct GridArgs {
    #[arg(long, help = "Text to draw with the built-in font")]
    pub text: Option<String>,

    #[arg(long, help = "ASCII sprite file (_ - ~ = * for levels 0-4)")]
    pub sprite: Option<PathBuf>,

    #[arg(long, help = "PNG image exactly 7 pixels tall; darker pixels mean more commits")]
    pub image: Option<PathBuf>,
}

impl GridArgs {
    pub fn source(&self) -> Option<GridSource> {
        if let Some(text) = &self.text {
            Some(GridSource::Text(text.clone()))
        } else if let Some(path) = &self.sprite {
            Some(GridSource::Sprite(path.clone()))
        } else {
            self.image.as_ref().map(|path| GridSource::Image(path.clone()))
        }
    }
}

#[derive(Args, Clone, Debug, Default)]
pub struct ScheduleArgs {
    #[arg(long, help = "Weeks to shift the image right from the start of the calendar")]
    pub offset: Option<u32>,

    #[arg(long, help = "Pretend today is this date (YYYY-MM-DD)")]
    pub today: Option<NaiveDate>,
}

#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    #[clap(flatten)]
    pub calendar: CalendarArgs,

    #[clap(flatten)]
    pub grid: GridArgs,

    #[clap(flatten)]
    pub schedule: ScheduleArgs,

    #[arg(long, help = "Name of the repository the script creates")]
    pub repo: Option<String>,

    #[arg(long, help = "Git remote host, e.g. git@github.com")]
    pub git_url: Option<String>,

    #[arg(
        long,
        num_args = 0..=1,
        default_missing_value = "true",
        help = "Scale past your busiest day instead of matching it"
    )]
    pub exceed: Option<bool>,

    #[arg(
        long,
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Use a fixed multiplier and skip reading the calendar"
    )]
    pub multiplier: Option<u32>,

    #[arg(long, help = "Branch to push", default_value = DEFAULT_BRANCH)]
    pub branch: String,

    #[arg(long, short, help = "Where to write the script", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the commit script (prompts for anything not given as a flag)
    Generate(GenerateArgs),
    /// Read a contribution calendar and report the multiplier it implies
    Calibrate {
        #[clap(flatten)]
        calendar: CalendarArgs,

        #[arg(long, help = "Output as JSON")]
        json: bool,
    },
    /// Show where the image lands on the calendar
    Preview {
        #[clap(flatten)]
        grid: GridArgs,

        #[clap(flatten)]
        schedule: ScheduleArgs,

        #[arg(long, help = "Output as JSON")]
        json: bool,
    },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }

    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Generate(args) => crate::script::exec(args),
            Commands::Calibrate { calendar, json } => crate::calendar::exec(calendar, json),
            Commands::Preview { grid, schedule, json } => {
                crate::preview::exec(grid, schedule, json)
            }
        }
    }
}
