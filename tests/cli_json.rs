//! `rea --json` emits NDJSON events on stdout and nothing else.

#![cfg(any(target_os = "linux", target_os = "macos"))]

mod common;

use common::*;
use serde_json::Value;

fn events(stdout: &str) -> Vec<Value> {
    stdout
        .lines()
        .map(|line| {
            serde_json::from_str(line)
                .unwrap_or_else(|e| panic!("not JSON ({}): {:?}\n{}", e, line, stdout))
        })
        .collect()
}

#[test]
fn json_run_is_an_event_stream() {
    let env = TestEnv::new();

    let result = env.run(&["--json"]);

    assert!(result.success, "{}", result.combined_output());
    let events = events(&result.stdout);
    assert_eq!(events.first().unwrap()["event"], "start");

    let last = events.last().unwrap();
    assert_eq!(last["event"], "complete");
    assert_eq!(last["status"], "success");
    assert_eq!(last["binaries"], 2);
    assert_eq!(last["native_libraries"], 1);
    assert_eq!(last["manifest"], true);

    // build tool chatter stays off stdout
    assert!(!result.stdout.contains("fake build ok"));
    assert!(result.stderr.contains("fake build ok"));
}

#[test]
fn json_steps_arrive_in_order() {
    let env = TestEnv::new();

    let result = env.run(&["--json"]);

    let steps: Vec<String> = events(&result.stdout)
        .iter()
        .filter(|e| e["event"] == "step_start")
        .map(|e| e["step"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        steps,
        vec![
            "clean",
            "build",
            "layout",
            "copy_game_files",
            "copy_native_runtimes"
        ]
    );
}

#[test]
fn json_build_failure_ends_with_error_event() {
    let env = TestEnv::new();

    let result = env.run_with_env(&["--json"], &[("FAKE_FAIL_BUILD", "1")]);

    assert_eq!(result.exit_code, 1);
    let events = events(&result.stdout);
    let last = events.last().unwrap();
    assert_eq!(last["event"], "error");
    assert_eq!(last["kind"], "build_failed");
    assert!(events
        .iter()
        .any(|e| e["event"] == "build_complete" && e["success"] == false));
    assert!(!events.iter().any(|e| e["event"] == "complete"));
}
