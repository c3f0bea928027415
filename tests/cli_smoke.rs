use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const CALENDAR: &str = r#"<svg>
<rect class="day" data-count="0" data-date="2025-10-19"/>
<rect class="day" data-count="12" data-date="2025-10-20"/>
<rect class="day" data-count="5" data-date="2025-10-21"/>
</svg>"#;

fn write_calendar(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("contributions.svg");
    fs::write(&path, CALENDAR).unwrap();
    path
}

fn commit_count(script: &str) -> usize {
    script.lines().filter(|l| l.contains("git commit --allow-empty")).count()
}

#[test]
fn calibrate_json_reports_multiplier() {
    let dir = tempdir().unwrap();
    let calendar = write_calendar(dir.path());

    let mut cmd = Command::cargo_bin("commitpaint").unwrap();
    cmd.args(["calibrate", "--json", "--calendar-file"]).arg(&calendar);
    let out = cmd.assert().success().get_output().stdout.clone();

    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(v["version"], 1);
    assert_eq!(v["days"], 3);
    assert_eq!(v["max_daily_commits"], 12);
    assert_eq!(v["multiplier"], 3);
}

#[test]
fn calibrate_fails_on_empty_calendar() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.svg");
    fs::write(&path, "<svg></svg>").unwrap();

    let mut cmd = Command::cargo_bin("commitpaint").unwrap();
    cmd.args(["calibrate", "--calendar-file"]).arg(&path);
    cmd.assert().failure();
}

#[test]
fn calibrate_reports_unreachable_host() {
    let mut cmd = Command::cargo_bin("commitpaint").unwrap();
    cmd.args(["calibrate", "--base-url", "http://127.0.0.1:1/", "--username", "x"])
        .args(["--timeout", "1s"]);
    let out = cmd.assert().failure().get_output().stderr.clone();

    let stderr = String::from_utf8_lossy(&out);
    assert!(stderr.contains("problem fetching data"), "stderr: {stderr}");
}

#[test]
fn generate_with_flags_writes_executable_script() {
    let dir = tempdir().unwrap();
    let calendar = write_calendar(dir.path());
    let output = dir.path().join("paint.sh");

    let mut cmd = Command::cargo_bin("commitpaint").unwrap();
    cmd.current_dir(dir.path())
        .args([
            "generate",
            "--base-url",
            "https://github.com/",
            "--username",
            "octocat",
            "--repo",
            "painting",
            "--offset",
            "1",
            "--exceed",
            "false",
            "--today",
            "2026-10-18",
            "--sprite",
        ])
        .arg(write_sprite(dir.path()))
        .arg("--calendar-file")
        .arg(&calendar)
        .arg("--output")
        .arg(&output)
        .write_stdin("");
    cmd.assert().success();

    let script = fs::read_to_string(&output).unwrap();
    assert!(script.starts_with("#!/usr/bin/env bash\nREPO=painting\n"));
    assert!(script.contains("git remote add origin git@github.com:octocat/$REPO.git"));

    // one level-4 pixel, multiplier 3, one week after the 2025-10-19 start
    assert_eq!(commit_count(&script), 12);
    assert!(script.contains("GIT_AUTHOR_DATE=2025-10-26T12:00:00"));

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = fs::metadata(&output).unwrap().permissions().mode();
        assert_eq!(mode & 0o111, 0o111);
    }
}

fn write_sprite(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("dot.txt");
    fs::write(&path, "*\n_\n_\n_\n_\n_\n_\n").unwrap();
    path
}

#[test]
fn generate_exceed_squares_the_multiplier() {
    let dir = tempdir().unwrap();
    let calendar = write_calendar(dir.path());
    let output = dir.path().join("paint.sh");

    let mut cmd = Command::cargo_bin("commitpaint").unwrap();
    cmd.args(["generate", "--username", "octocat", "--repo", "art", "--offset", "0"])
        .args(["--exceed", "--today", "2026-10-18", "--sprite"])
        .arg(write_sprite(dir.path()))
        .arg("--calendar-file")
        .arg(&calendar)
        .arg("--output")
        .arg(&output)
        .write_stdin("\n");
    cmd.assert().success();

    let script = fs::read_to_string(&output).unwrap();
    assert_eq!(commit_count(&script), 4 * 3 * 3);
}

#[test]
fn generate_reads_answers_from_stdin() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("paint.sh");

    // host, username, repo, offset (garbage then blank), text
    let answers = "\noctocat\npainting\nsoon\n\nHI\n";

    let mut cmd = Command::cargo_bin("commitpaint").unwrap();
    cmd.args(["generate", "--multiplier", "1", "--today", "2026-10-18", "--output"])
        .arg(&output)
        .write_stdin(answers);
    cmd.assert().success();

    let script = fs::read_to_string(&output).unwrap();
    assert!(script.contains("git remote add origin git@github.com:octocat/$REPO.git"));
    assert!(script.contains("GIT_AUTHOR_DATE=2025-10-19T12:00:00"));
    assert!(commit_count(&script) > 0);
}

#[test]
fn generate_prompts_for_git_url_on_custom_host() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("paint.sh");

    // host, username, repo, offset, text, git url
    let answers = "https://ghe.example.com/\noctocat\npainting\n0\nHI\ngit@ghe.example.com\n";

    let mut cmd = Command::cargo_bin("commitpaint").unwrap();
    cmd.args(["generate", "--multiplier", "1", "--today", "2026-10-18", "--output"])
        .arg(&output)
        .write_stdin(answers);
    let out = cmd.assert().success().get_output().stdout.clone();

    let script = fs::read_to_string(&output).unwrap();
    assert!(script.contains("git remote add origin git@ghe.example.com:octocat/$REPO.git"));
    assert!(!script.contains("git@github.com"));
    assert!(String::from_utf8_lossy(&out).contains("https://ghe.example.com/"));
}

#[test]
fn fixed_multiplier_ignores_exceed() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("paint.sh");

    let mut cmd = Command::cargo_bin("commitpaint").unwrap();
    cmd.args(["generate", "--base-url", "https://github.com/", "--username", "octocat"])
        .args(["--repo", "art", "--offset", "0", "--today", "2026-10-18"])
        .args(["--multiplier", "2", "--exceed", "--sprite"])
        .arg(write_sprite(dir.path()))
        .arg("--output")
        .arg(&output)
        .write_stdin("");
    cmd.assert().success();

    // no calendar is read, so exceed has nothing to square
    let script = fs::read_to_string(&output).unwrap();
    assert_eq!(commit_count(&script), 4 * 2);
}

#[test]
fn generate_rejects_unsafe_repo_name() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("paint.sh");

    let mut cmd = Command::cargo_bin("commitpaint").unwrap();
    cmd.args(["generate", "--base-url", "https://github.com/", "--username", "octocat"])
        .args(["--repo", "bad name", "--offset", "0", "--multiplier", "2", "--text", "A"])
        .arg("--output")
        .arg(&output)
        .write_stdin("");
    cmd.assert().failure();
    assert!(!output.exists());
}

#[test]
fn preview_json_places_image_on_calendar() {
    let mut cmd = Command::cargo_bin("commitpaint").unwrap();
    cmd.args(["preview", "--json", "--text", "I", "--offset", "2", "--today", "2026-10-18"]);
    let out = cmd.assert().success().get_output().stdout.clone();

    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(v["width"], 3);
    assert_eq!(v["offset_weeks"], 2);
    assert_eq!(v["start_date"], "2025-10-19T12:00:00");
    assert_eq!(v["end_date"], "2025-11-22T12:00:00");
    assert_eq!(v["rows"].as_array().map(|r| r.len()), Some(7));
    assert_eq!(v["future_cells"], 0);
}

#[test]
fn preview_counts_cells_after_today() {
    let mut cmd = Command::cargo_bin("commitpaint").unwrap();
    cmd.args(["preview", "--json", "--text", "I", "--offset", "60", "--today", "2026-10-18"]);
    let out = cmd.assert().success().get_output().stdout.clone();

    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let lit = v["rows"]
        .as_array()
        .unwrap()
        .iter()
        .flat_map(|row| row.as_array().unwrap())
        .filter(|level| level.as_u64() != Some(0))
        .count();
    assert!(lit > 0);
    assert_eq!(v["future_cells"], lit);
}

#[test]
fn preview_calendar_warns_about_future_cells() {
    let mut cmd = Command::cargo_bin("commitpaint").unwrap();
    cmd.args(["preview", "--text", "I", "--offset", "60", "--today", "2026-10-18"]);
    let out = cmd.assert().success().get_output().stdout.clone();

    assert!(String::from_utf8_lossy(&out).contains("dated after 2026-10-18"));
}

#[test]
fn preview_defaults_to_fallback_image() {
    let mut cmd = Command::cargo_bin("commitpaint").unwrap();
    cmd.args(["preview", "--json", "--today", "2026-10-18"]);
    let out = cmd.assert().success().get_output().stdout.clone();

    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(v["width"], 12);
}

#[test]
fn grid_sources_are_exclusive() {
    let mut cmd = Command::cargo_bin("commitpaint").unwrap();
    cmd.args(["preview", "--text", "A", "--sprite", "x.txt"]);
    cmd.assert().failure();
}
