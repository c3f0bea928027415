use super::{save, synthesize, ScriptOptions};
use crate::calendar::read_calendar;
use crate::cli::GenerateArgs;
use crate::grid::{kitty, resolve_grid, GridSource, PixelFont, SymbolPalette};
use crate::model::{Multiplier, ScriptSummary, DEFAULT_BASE_URL, DEFAULT_GIT_URL, EXCEED_TOKEN};
use crate::prompt::{LineSource, Prompter, TermInput};
use crate::schedule::{self, start_date};
use anyhow::Context;
use chrono::NaiveDate;
use console::{style, Term};

pub fn exec(args: GenerateArgs) -> anyhow::Result<()> {
    let mut prompter = Prompter::new(TermInput::new());
    run(args, &mut prompter)
}

/// The interactive generate flow, over any line source.
pub fn run<S: LineSource>(args: GenerateArgs, prompter: &mut Prompter<S>) -> anyhow::Result<()> {
    prompter.say(&style("commitpaint: text to commit history").bold().to_string())?;

    let custom_host = match &args.calendar.base_url {
        Some(url) => Some(url.clone()),
        None => {
            let answer = prompter.text(&format!(
                "Enter GitHub URL (leave blank to use {DEFAULT_BASE_URL}): "
            ))?;
            (!answer.is_empty()).then_some(answer)
        }
    }
    .filter(|url| url.trim_end_matches('/') != DEFAULT_BASE_URL.trim_end_matches('/'));
    let base_url = custom_host.as_deref().unwrap_or(DEFAULT_BASE_URL);

    let username = match &args.calendar.username {
        Some(name) => name.clone(),
        None => prompter.required("Enter your GitHub username: ", "username")?,
    };

    let calibration = match args.multiplier {
        Some(_) => None,
        None => {
            let show_progress = Term::stderr().is_term();
            Some(
                read_calendar(&args.calendar, base_url, &username, show_progress)
                    .context("Failed to read contributions calendar")?,
            )
        }
    };

    let repo = match &args.repo {
        Some(repo) => repo.clone(),
        None => prompter.required(
            "Enter the name of the repository to use by text_to_commit_history: ",
            "repository name",
        )?,
    };

    let offset = match args.schedule.offset {
        Some(offset) => offset,
        None => prompter.weeks("Enter the number of weeks to offset the image (from the left): ")?,
    };

    let multiplier = match (&calibration, args.multiplier) {
        (_, Some(fixed)) => Multiplier::new(fixed).unwrap_or(Multiplier::ONE),
        (Some(calibration), None) => {
            let exceed = match args.exceed {
                Some(exceed) => exceed,
                None => {
                    prompter.say(&format!(
                        "By default the darkest pixel is matched to the highest\n\
                         number of commits found in your commit calendar.\n\n\
                         Currently this is: {} commits\n\n\
                         Enter the word \"{EXCEED_TOKEN}\" to exceed your max\n\
                         (this option generates WAY more commits)\n\
                         Any other input will cause the default matching behavior",
                        calibration.max_daily_commits
                    ))?;
                    prompter.exceed("> ")?
                }
            };
            let factor = if exceed { calibration.multiplier } else { Multiplier::ONE };
            calibration.multiplier.saturating_mul(factor)
        }
        (None, None) => Multiplier::ONE,
    };
    log::info!("painting with multiplier {multiplier}");

    let source = match args.grid.source() {
        Some(source) => source,
        None => GridSource::Text(
            prompter.text("Enter the text you want to be shown on your profile: ")?,
        ),
    };
    let grid = resolve_grid(&source, &PixelFont::default(), &SymbolPalette::default(), &kitty())
        .context("Failed to build image grid")?;

    let today = args.schedule.today.unwrap_or_else(schedule::today);
    let start = start_date(today).context("Failed to compute start date")?;

    let git_url = match (&args.git_url, &custom_host) {
        (Some(url), _) => url.clone(),
        (None, None) => DEFAULT_GIT_URL.to_string(),
        (None, Some(_)) => {
            prompter.required("Enter Git URL like git@site.github.com: ", "git url")?
        }
    };

    let options = ScriptOptions::new(repo, username, git_url, args.branch)
        .context("Invalid script settings")?;
    let script = synthesize(&grid, start, offset, multiplier, &options)
        .context("Failed to compose script")?;
    warn_if_future(&script.summary, today);

    save(&script.text, &args.output)
        .with_context(|| format!("Failed to save {}", args.output.display()))?;

    output_summary(&script.summary, &args.output.display().to_string(), &options.repo, base_url);
    Ok(())
}

fn warn_if_future(summary: &ScriptSummary, today: NaiveDate) {
    if let Some(last) = summary.last_commit {
        if last.date() > today {
            log::warn!(
                "the last commit is dated {}, after today ({today}); \
                 the calendar will not show it until then",
                last.date()
            );
        }
    }
}

fn output_summary(summary: &ScriptSummary, output: &str, repo: &str, base_url: &str) {
    println!("{} saved.", style(output).bold());
    match (summary.first_commit, summary.last_commit) {
        (Some(first), Some(last)) => println!(
            "{} commits from {} to {}",
            style(summary.total_commits).green(),
            first.date(),
            last.date()
        ),
        _ => println!("No commits to make; the image is blank"),
    }
    println!("Create a new(!) repo named {repo} at {base_url} and run the script");
}
