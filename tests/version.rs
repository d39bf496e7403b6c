//! Integration test: run the binary for paths that end before the terminal
//! is taken over.

use std::path::PathBuf;
use std::process::Command;

/// Config pointing logs and saved state into a scratch directory.
fn scratch_config(name: &str) -> (PathBuf, PathBuf) {
    let dir = std::env::temp_dir().join(name);
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    let config = dir.join("config.toml");
    std::fs::write(
        &config,
        format!(
            "log_file_path = {:?}\nstate_file_path = {:?}\n",
            dir.join("artv.log"),
            dir.join("ui_state.json"),
        ),
    )
    .expect("write config");
    (dir, config)
}

#[test]
fn binary_prints_version() {
    let output = Command::new(env!("CARGO_BIN_EXE_artv"))
        .arg("--version")
        .output()
        .expect("Failed to execute binary");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(
        stdout.contains("0.1.0"),
        "Expected output to contain version '0.1.0', but got: {}",
        stdout
    );
}

#[test]
fn binary_reports_missing_article() {
    let (dir, config) = scratch_config("artv_bin_missing_article");

    let output = Command::new(env!("CARGO_BIN_EXE_artv"))
        .arg(dir.join("no_such_article.md"))
        .arg("--config")
        .arg(&config)
        .output()
        .expect("Failed to execute binary");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(
        stderr.contains("FileNotFound"),
        "Expected a missing-file error, got: {}",
        stderr
    );

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn binary_rejects_unknown_config_keys() {
    let dir = std::env::temp_dir().join("artv_bin_bad_config");
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    let config = dir.join("config.toml");
    std::fs::write(&config, "theme = \"monokai\"\n").expect("write config");

    let output = Command::new(env!("CARGO_BIN_EXE_artv"))
        .arg("article.md")
        .arg("--config")
        .arg(&config)
        .output()
        .expect("Failed to execute binary");

    assert!(!output.status.success());

    std::fs::remove_dir_all(&dir).ok();
}
