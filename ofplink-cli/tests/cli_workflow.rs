//! End-to-end tests for the `ofplink` binary.
//!
//! Each test writes a config into a temp directory (so the log file lands
//! there too), fills a directory registry the way a producer would, and runs
//! the binary against it.
//!
//! Run with: `cargo test -p ofplink-cli --test cli_workflow`

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

use ofplink::config::ConfigFile;

// ============================================================================
// Test Helpers
// ============================================================================

struct Workspace {
    _temp: TempDir,
    config: PathBuf,
    registry: PathBuf,
}

impl Workspace {
    fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let registry = temp.path().join("registry");
        fs::create_dir_all(&registry).unwrap();

        let mut config = ConfigFile::default();
        config.registry.root = Some(registry.clone());
        config.logging.file = temp.path().join("ofplink.log");
        let config_path = temp.path().join("config.ini");
        config.save_to(&config_path).unwrap();

        Self {
            _temp: temp,
            config: config_path,
            registry,
        }
    }

    fn publish(&self, entries: &[(&str, &str)]) {
        for (name, value) in entries {
            write_entry(&self.registry, name, value);
        }
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_ofplink"))
            .arg("--config")
            .arg(&self.config)
            .args(args)
            .output()
            .expect("failed to run ofplink")
    }
}

fn write_entry(root: &Path, name: &str, value: &str) {
    let path = root.join(name);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, format!("{value}\n")).unwrap();
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Assert a command succeeded, showing its output otherwise.
fn assert_success(output: &Output, context: &str) {
    if !output.status.success() {
        panic!(
            "{} failed:\nstdout: {}\nstderr: {}",
            context,
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
    }
}

const FLIGHT_PLAN: &[(&str, &str)] = &[
    ("sbh/stale", "0"),
    ("sbh/seqno", "1"),
    ("sbh/cdm/seqno", "0"),
    ("sbh/icao_airline", "DLH"),
    ("sbh/flight_number", "401"),
    ("sbh/aircraft_icao", "A359"),
    ("sbh/destination", "KJFK"),
    ("sbh/pax_count", "293"),
    ("sbh/est_out", "3600"),
    ("sbh/est_off", "4500"),
    ("sbh/est_on", "30000"),
    ("sbh/est_in", "30600"),
];

// ============================================================================
// Commands
// ============================================================================

#[test]
fn test_show_prints_departure_line() {
    let ws = Workspace::new();
    ws.publish(FLIGHT_PLAN);

    let output = ws.run(&["show"]);
    assert_success(&output, "show");
    assert_eq!(stdout(&output).trim(), "DLH401 A359 TO KJFK OUT 0100 OFF 0115");
}

#[test]
fn test_show_fields() {
    let ws = Workspace::new();
    ws.publish(FLIGHT_PLAN);

    let output = ws.run(&["show", "--fields"]);
    assert_success(&output, "show --fields");
    let text = stdout(&output);
    assert!(text.contains("pax_count"));
    assert!(text.contains("293"));
}

#[test]
fn test_show_without_producer_fails() {
    let ws = Workspace::new();

    let output = ws.run(&["show"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No flight plan producer found"), "{stderr}");
}

#[test]
fn test_show_before_first_publish() {
    let ws = Workspace::new();
    ws.publish(&[("sbh/stale", "0"), ("sbh/seqno", "0")]);

    let output = ws.run(&["show"]);
    assert_success(&output, "show");
    assert_eq!(stdout(&output).trim(), "No flight plan published yet");
}

#[test]
fn test_watch_stops_after_count() {
    let ws = Workspace::new();
    ws.publish(FLIGHT_PLAN);
    ws.publish(&[
        ("sbh/cdm/tobt", "1230"),
        ("sbh/cdm/tsat", "1245"),
        ("sbh/cdm/runway", "25C"),
        ("sbh/cdm/sid", "MARUN7F"),
    ]);

    let output = ws.run(&["watch", "--count", "1", "--interval-ms", "50"]);
    assert_success(&output, "watch");
    assert_eq!(
        stdout(&output).trim(),
        "DLH401 A359 TO KJFK TOBT 1230 TSAT 1245 RWY 25C SID MARUN7F"
    );
}

#[test]
fn test_watch_zero_count_is_rejected() {
    let ws = Workspace::new();
    ws.publish(FLIGHT_PLAN);

    let output = ws.run(&["watch", "--count", "0"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_registry_argument_overrides_config() {
    let ws = Workspace::new();
    let other = ws.registry.join("elsewhere");
    for (name, value) in FLIGHT_PLAN {
        write_entry(&other, name, value);
    }

    let output = ws.run(&["show", "--registry", other.to_str().unwrap()]);
    assert_success(&output, "show --registry");
    assert!(stdout(&output).starts_with("DLH401"));
}

#[test]
fn test_init_refuses_to_overwrite() {
    let ws = Workspace::new();

    let output = ws.run(&["init"]);
    assert_eq!(output.status.code(), Some(1));

    let output = ws.run(&["init", "--force", "--registry", "/srv/sbh"]);
    assert_success(&output, "init --force");
    let config = ConfigFile::load_from(&ws.config).unwrap();
    assert_eq!(config.registry.root, Some(PathBuf::from("/srv/sbh")));
}
