use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn gullwings_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("gullwings").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd
}

#[test]
fn gullwings_help_prints_usage() {
    let temp = TempDir::new().unwrap();
    gullwings_cmd(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Draw curly-brace decorations onto Cairo surfaces",
        ));
}

#[test]
fn print_path_lists_commands() {
    let temp = TempDir::new().unwrap();
    gullwings_cmd(&temp)
        .args(["--print-path", "--width", "200", "--height", "100"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("move_to 100 1\n"))
        .stdout(predicate::str::contains("arc_to"))
        .stdout(predicate::str::ends_with("line_to 100 49\n"));
}

#[test]
fn writes_png_to_requested_path() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("out").join("brace.png");

    gullwings_cmd(&temp)
        .args(["--direction", "up", "--scale", "2", "--output"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("brace.png"));

    let bytes = std::fs::read(&output).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn strict_rejects_zero_thickness() {
    let temp = TempDir::new().unwrap();
    gullwings_cmd(&temp)
        .args(["--strict", "--thickness", "0", "--print-path"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("thickness must be a positive number"));
}

#[test]
fn invalid_direction_is_rejected_by_parser() {
    let temp = TempDir::new().unwrap();
    gullwings_cmd(&temp)
        .args(["--direction", "sideways"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'sideways'"));
}

#[test]
fn config_file_supplies_defaults() {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join("gullwings");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "[brace]\ndirection = \"right\"\n\n[surface]\nwidth = 80\nheight = 400\n",
    )
    .unwrap();

    // right-facing tips sit at x = 0; vertical length is half of 400
    gullwings_cmd(&temp)
        .arg("--print-path")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("move_to 0 1\n"))
        .stdout(predicate::str::ends_with("line_to 0 199\n"));
}

#[test]
fn flags_override_config_file() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("custom.toml");
    std::fs::write(&config_path, "[brace]\ndirection = \"right\"\n").unwrap();

    gullwings_cmd(&temp)
        .arg("--config")
        .arg(&config_path)
        .args(["--direction", "left", "--print-path"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("move_to 100 1\n"));
}
