use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn inkroute_cmd() -> Command {
    Command::cargo_bin("inkroute").expect("binary exists")
}

fn write_trace(dir: &TempDir, name: &str, lines: &[&str]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, lines.join("\n")).unwrap();
    path
}

#[test]
fn inkroute_help_prints_usage() {
    inkroute_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Pointer gesture router for freehand ink and erase annotation",
        ));
}

#[test]
fn no_flags_prints_usage_screen() {
    inkroute_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--replay"));
}

#[test]
fn replay_tap_trace_prints_commands_and_summary() {
    let temp = TempDir::new().unwrap();
    let trace = write_trace(
        &temp,
        "tap.jsonl",
        &[
            r#"{"kind":"pointer","phase":"down","x":10.0,"y":10.0}"#,
            r#"{"kind":"pointer","phase":"up","x":10.0,"y":10.0}"#,
        ],
    );

    inkroute_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["--replay", trace.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("begin_stroke (10.0, 10.0)"))
        .stdout(predicate::str::contains("end_stroke (10.0, 10.0)"))
        .stdout(predicate::str::contains(
            "Replayed 2 records, emitted 3 commands",
        ))
        .stdout(predicate::str::contains("Committed paths: 1 (1 ink, 0 erase)"));
}

#[test]
fn quiet_replay_suppresses_per_command_output() {
    let temp = TempDir::new().unwrap();
    let trace = write_trace(
        &temp,
        "tap.jsonl",
        &[
            r#"{"kind":"pointer","phase":"down","x":10.0,"y":10.0}"#,
            r#"{"kind":"pointer","phase":"up","x":10.0,"y":10.0}"#,
        ],
    );

    inkroute_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["--replay", trace.to_str().unwrap(), "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("begin_stroke").not())
        .stdout(predicate::str::contains("Committed paths: 1"));
}

#[test]
fn erase_mode_flag_switches_command_family() {
    let temp = TempDir::new().unwrap();
    let trace = write_trace(
        &temp,
        "drag.jsonl",
        &[
            r#"{"kind":"pointer","phase":"down","x":0.0,"y":0.0}"#,
            r#"{"kind":"pointer","phase":"move","x":20.0,"y":0.0}"#,
            r#"{"kind":"pointer","phase":"up","x":20.0,"y":0.0}"#,
        ],
    );

    inkroute_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["--replay", trace.to_str().unwrap(), "--mode", "erase"])
        .assert()
        .success()
        .stdout(predicate::str::contains("begin_erase (0.0, 0.0)"))
        .stdout(predicate::str::contains("Committed paths: 1 (0 ink, 1 erase)"));
}

#[test]
fn slop_override_suppresses_short_drag() {
    let temp = TempDir::new().unwrap();
    let trace = write_trace(
        &temp,
        "short.jsonl",
        &[
            r#"{"kind":"pointer","phase":"down","x":0.0,"y":0.0}"#,
            r#"{"kind":"pointer","phase":"move","x":2.0,"y":0.0}"#,
            r#"{"kind":"pointer","phase":"up","x":2.0,"y":0.0}"#,
        ],
    );

    // Far above the 2-unit displacement: the gesture resolves as a tap
    inkroute_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["--replay", trace.to_str().unwrap(), "--slop", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Replayed 3 records, emitted 3 commands",
        ));
}

#[test]
fn malformed_trace_reports_line_number() {
    let temp = TempDir::new().unwrap();
    let trace = write_trace(
        &temp,
        "bad.jsonl",
        &[
            r#"{"kind":"pointer","phase":"down","x":0.0,"y":0.0}"#,
            "not json",
        ],
    );

    inkroute_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["--replay", trace.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid trace record"))
        .stderr(predicate::str::contains(":2"));
}

#[test]
fn init_config_creates_file_once() {
    let temp = TempDir::new().unwrap();

    inkroute_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--init-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created default config"));

    assert!(temp.path().join("inkroute/config.toml").exists());

    inkroute_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--init-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}
