use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn waysketch_cmd() -> Command {
    Command::cargo_bin("waysketch").expect("binary exists")
}

#[test]
fn help_prints_usage() {
    waysketch_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Console-driven geometric sketch pad for Wayland compositors",
        ));
}

#[test]
fn version_includes_package_version() {
    waysketch_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn running_requires_wayland_env() {
    waysketch_cmd()
        .env_remove("WAYLAND_DISPLAY")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Wayland environment required"));
}

#[test]
fn init_config_writes_default_file() {
    let temp = TempDir::new().unwrap();

    waysketch_cmd()
        .env_remove("WAYLAND_DISPLAY")
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--init-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created default config at"));

    let config_path = temp.path().join("waysketch").join("config.toml");
    let contents = std::fs::read_to_string(&config_path).expect("config file written");
    assert!(contents.contains("[drawing]"));
}

#[test]
fn init_config_refuses_to_overwrite() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("waysketch");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "# existing\n").unwrap();

    waysketch_cmd()
        .env_remove("WAYLAND_DISPLAY")
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--init-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}
