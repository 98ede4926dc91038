//! Integration tests for top-level CLI behavior.

use std::process::Command;

fn pipecap() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_pipecap"));
    command.env_remove("PIPECAP_RECORD").env_remove("PIPECAP_REPLAY").env_remove("PIPECAP_SHELL");
    command
}

fn run_pipecap(args: &[&str]) -> std::process::Output {
    pipecap().args(args).output().expect("failed to run pipecap binary")
}

#[cfg(unix)]
#[test]
fn exec_prints_stdout_verbatim() {
    let output = run_pipecap(&["exec", "printf 'a\\n\\nb'"]);
    assert!(output.status.success());
    assert_eq!(output.stdout, b"a\n\nb");
}

#[cfg(unix)]
#[test]
fn exec_ignores_command_exit_status() {
    let output = run_pipecap(&["exec", "echo partial; exit 7"]);
    assert!(output.status.success());
    assert_eq!(output.stdout, b"partial\n");
}

#[cfg(unix)]
#[test]
fn run_prints_only_the_last_output() {
    let output = run_pipecap(&["run", "echo first", "echo second"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "second\n");
}

#[test]
fn missing_shell_exits_with_spawn_failure() {
    let output = run_pipecap(&["--shell", "/nonexistent/pipecap-sh", "exec", "echo hello"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(stderr.contains("spawn failed"));
}

#[test]
fn shell_can_come_from_environment() {
    let output = pipecap()
        .env("PIPECAP_SHELL", "/nonexistent/pipecap-sh")
        .args(["exec", "echo hello"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("spawn failed"));
}

#[test]
fn noop_prints_nothing() {
    let output = run_pipecap(&["noop"]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn help_lists_subcommands() {
    let output = run_pipecap(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("exec"));
    assert!(stdout.contains("run"));
    assert!(stdout.contains("noop"));
}

#[test]
fn invalid_subcommand_exits_with_error() {
    let output = run_pipecap(&["nonsense"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("unrecognized subcommand"));
}

fn one_interaction_cassette(name: &str) -> std::path::PathBuf {
    use pipecap::cassette::recorder::CassetteRecorder;
    use serde_json::json;

    let dir = std::env::temp_dir().join(name);
    let mut recorder = CassetteRecorder::new(dir.join("shell.cassette.yaml"), name, "abc");
    recorder.record("shell", "execute", json!({"command": "echo a"}), json!({"ok": "a\n"}));
    recorder.finish().unwrap()
}

#[test]
fn exhausted_replay_cassette_fails_without_panicking() {
    let cassette = one_interaction_cassette("pipecap_cli_exhausted_test");
    let output =
        pipecap().env("PIPECAP_REPLAY", &cassette).args(["run", "echo a", "echo b"]).output().unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr.contains("command 2: replay failed"));
    assert!(stderr.contains("have been consumed"));
    assert!(!stderr.contains("panicked"));

    let _ = std::fs::remove_dir_all(cassette.parent().unwrap());
}

#[test]
fn replay_rejects_a_different_command() {
    let cassette = one_interaction_cassette("pipecap_cli_mismatch_test");
    let output =
        pipecap().env("PIPECAP_REPLAY", &cassette).args(["exec", "echo zzz"]).output().unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr.contains("replay failed"));
    assert!(stderr.contains("\"echo zzz\" was requested"));

    let _ = std::fs::remove_dir_all(cassette.parent().unwrap());
}
