use crate::error::{PaintError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::blocking::Client;
use std::path::Path;
use std::time::Duration;

const USER_AGENT: &str = concat!("commitpaint/", env!("CARGO_PKG_VERSION"));

/// `{base_url}users/{username}/contributions`, tolerating a missing trailing slash.
pub fn contributions_url(username: &str, base_url: &str) -> String {
    let base = base_url.trim_end_matches('/');
    format!("{base}/users/{username}/contributions")
}

/// Retrieve the contributions calendar document for `username`.
pub fn fetch_calendar(username: &str, base_url: &str, timeout: Duration) -> Result<String> {
    let url = contributions_url(username, base_url);
    log::debug!("fetching contributions calendar from {url}");

    let fetch_error = |reason: String| PaintError::Fetch {
        url: url.clone(),
        reason,
    };

    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
        .map_err(|e| fetch_error(e.to_string()))?;

    let response = client
        .get(&url)
        .send()
        .map_err(|e| fetch_error(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(fetch_error(format!("HTTP {status}")));
    }

    let body = response.text().map_err(|e| fetch_error(e.to_string()))?;
    log::debug!("received {} bytes of calendar markup", body.len());
    Ok(body)
}

pub fn fetch_calendar_with_progress(
    username: &str,
    base_url: &str,
    timeout: Duration,
    show_progress: bool,
) -> Result<String> {
    if !show_progress {
        return fetch_calendar(username, base_url, timeout);
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(format!("Fetching contributions of {username}..."));
    pb.enable_steady_tick(Duration::from_millis(100));

    let result = fetch_calendar(username, base_url, timeout);
    match &result {
        Ok(_) => pb.finish_with_message("Calendar fetched"),
        Err(_) => pb.finish_and_clear(),
    }
    result
}

/// Read a previously saved calendar document instead of fetching it.
pub fn load_calendar(path: &Path) -> Result<String> {
    log::debug!("reading contributions calendar from {}", path.display());
    Ok(std::fs::read_to_string(path)?)
}
