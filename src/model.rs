use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const SCHEMA_VERSION: u32 = 1;

pub const DEFAULT_BASE_URL: &str = "https://github.com/";
pub const DEFAULT_GIT_URL: &str = "git@github.com";
pub const DEFAULT_BRANCH: &str = "master";
pub const DEFAULT_OUTPUT: &str = "text_to_commit_history.sh";

/// Token that switches from "match my max" to "exceed my max".
pub const EXCEED_TOKEN: &str = "text_to_commit_history";

/// ISO-8601 without offset, as written into `GIT_*_DATE`.
pub const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Scale factor applied to every intensity level. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Multiplier(u32);

impl Multiplier {
    pub const ONE: Multiplier = Multiplier(1);

    /// Returns `None` for zero.
    pub fn new(value: u32) -> Option<Self> {
        (value >= 1).then_some(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn saturating_mul(self, other: Multiplier) -> Multiplier {
        Multiplier(self.0.saturating_mul(other.0))
    }
}

impl Default for Multiplier {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One empty commit at a fixed author/committer date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CommitDirective {
    pub timestamp: NaiveDateTime,
}

impl fmt::Display for CommitDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let date = self.timestamp.format(ISO_FORMAT);
        write!(
            f,
            "GIT_AUTHOR_DATE={date} GIT_COMMITTER_DATE={date} \
             git commit --allow-empty -m \"text_to_commit_history\" > /dev/null"
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalibrationOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub source: String,
    pub days: usize,
    pub max_daily_commits: u32,
    pub multiplier: Multiplier,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub offset_weeks: u32,
    pub width: usize,
    /// Lit cells dated after today.
    pub future_cells: usize,
    pub rows: Vec<Vec<u8>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptSummary {
    pub total_commits: u64,
    pub first_commit: Option<NaiveDateTime>,
    pub last_commit: Option<NaiveDateTime>,
}
