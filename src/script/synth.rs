use crate::error::{PaintError, Result};
use crate::grid::{values_in_date_order, IntensityGrid};
use crate::model::{CommitDirective, Multiplier, ScriptSummary};
use crate::schedule::{last_date, DateStream};
use chrono::NaiveDateTime;
use std::iter;

/// Where the generated script pushes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptOptions {
    pub repo: String,
    pub username: String,
    pub git_url: String,
    pub branch: String,
}

impl ScriptOptions {
    /// Names are interpolated into a shell script unquoted, so only a safe
    /// subset of characters is accepted.
    pub fn new(
        repo: impl Into<String>,
        username: impl Into<String>,
        git_url: impl Into<String>,
        branch: impl Into<String>,
    ) -> Result<Self> {
        let options = Self {
            repo: repo.into(),
            username: username.into(),
            git_url: git_url.into(),
            branch: branch.into(),
        };
        check_word("repository name", &options.repo, "-_.")?;
        check_word("username", &options.username, "-_.")?;
        check_word("branch", &options.branch, "-_./")?;
        check_word("git url", &options.git_url, "-_.@:/~")?;
        Ok(options)
    }

    pub fn remote(&self) -> String {
        format!("{}:{}/$REPO.git", self.git_url, self.username)
    }
}

fn check_word(what: &str, value: &str, extra: &str) -> Result<()> {
    if value.is_empty() {
        return Err(PaintError::InvalidInput(format!("{what} must not be empty")));
    }
    if let Some(bad) = value
        .chars()
        .find(|&c| !c.is_ascii_alphanumeric() && !extra.contains(c))
    {
        return Err(PaintError::InvalidInput(format!(
            "{what} '{value}' contains unsupported character '{bad}'"
        )));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    pub text: String,
    pub summary: ScriptSummary,
}

/// One directive per required commit, in calendar order.
///
/// The week offset is applied here, through the date stream, and nowhere else.
pub fn commit_directives(
    grid: &IntensityGrid,
    start: NaiveDateTime,
    offset_weeks: u32,
    multiplier: Multiplier,
) -> impl Iterator<Item = CommitDirective> + '_ {
    values_in_date_order(grid, multiplier)
        .zip(DateStream::new(start, offset_weeks))
        .flat_map(|(count, timestamp)| {
            iter::repeat(CommitDirective { timestamp }).take(count as usize)
        })
}

/// Wrap commit directives in the repository setup and push steps.
pub fn render_script<I>(directives: I, options: &ScriptOptions) -> Script
where
    I: IntoIterator<Item = CommitDirective>,
{
    let mut commits = String::new();
    let mut summary = ScriptSummary {
        total_commits: 0,
        first_commit: None,
        last_commit: None,
    };

    for directive in directives {
        commits.push_str(&directive.to_string());
        commits.push('\n');
        summary.total_commits += 1;
        summary.first_commit.get_or_insert(directive.timestamp);
        summary.last_commit = Some(directive.timestamp);
    }

    let text = format!(
        "#!/usr/bin/env bash\n\
         REPO={repo}\n\
         git init $REPO\n\
         cd $REPO\n\
         touch README.md\n\
         git add README.md\n\
         touch text_to_commit_history\n\
         git add text_to_commit_history\n\
         {commits}\n\
         git remote add origin {remote}\n\
         git pull origin {branch}\n\
         git push -u origin {branch}\n",
        repo = options.repo,
        remote = options.remote(),
        branch = options.branch,
    );

    Script { text, summary }
}

/// Compose the whole script for `grid` painted from `start`.
///
/// Fails when the last column would land past the last representable date,
/// since the date stream would end early and drop commits.
pub fn synthesize(
    grid: &IntensityGrid,
    start: NaiveDateTime,
    offset_weeks: u32,
    multiplier: Multiplier,
    options: &ScriptOptions,
) -> Result<Script> {
    if last_date(start, offset_weeks, grid.width()).is_none() {
        return Err(PaintError::InvalidDate(format!(
            "a {}-week image offset by {offset_weeks} weeks from {} ends past the last \
             representable date",
            grid.width(),
            start.date()
        )));
    }
    Ok(render_script(
        commit_directives(grid, start, offset_weeks, multiplier),
        options,
    ))
}
