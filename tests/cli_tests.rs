mod common;

use common::{run_recap, TestEnv};

#[test]
fn recap_help_shows_usage() {
    let output = run_recap(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "--help should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("Commands:"));
    assert!(stdout.contains("summarize"));
    assert!(stdout.contains("remote"));
}

#[test]
fn recap_version_shows_version() {
    let output = run_recap(&["--version"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "--version should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(stdout.contains("recap "));
}

#[test]
fn completions_bash_outputs_script() {
    let output = run_recap(&["completions", "bash"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "completions bash should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(
        stdout.contains("recap"),
        "expected completion output to reference command name\nstdout:\n{}",
        stdout
    );
}

#[test]
fn config_show_prints_defaults() {
    let output = run_recap(&["config", "show"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "config show should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(stdout.contains("[summary]"));
    assert!(stdout.contains("engine = \"centrality\""));
    assert!(stdout.contains("[llm]"));
    assert!(stdout.contains("provider = \"lmstudio\""));
}

#[test]
fn config_show_reflects_written_config() {
    let env = TestEnv::new();
    env.write_config("[summary]\nengine = \"frequency\"\nratio = 0.4\n");

    let output = env.run(&["config", "show"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("engine = \"frequency\""));
    assert!(stdout.contains("ratio = 0.4"));
}

#[test]
fn config_path_returns_valid_path() {
    let output = run_recap(&["config", "path"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "config path should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(stdout.contains("config.toml"));
}

#[test]
fn config_init_creates_file_once() {
    let env = TestEnv::new();

    let output = env.run(&["config", "init"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        output.status.success(),
        "config init should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(stdout.contains("Configuration initialized at:"));
    assert!(env.config_path().exists());

    let again = env.run(&["config", "init"]);
    let stderr = String::from_utf8_lossy(&again.stderr);
    assert!(
        !again.status.success(),
        "second init without --force should fail"
    );
    assert!(stderr.contains("already exists"));

    let forced = env.run(&["config", "init", "--force"]);
    assert!(forced.status.success(), "init --force should succeed");
}
