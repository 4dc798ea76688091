//! End-to-end CLI tests: run the built binary against the fixture content.

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

fn fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/content")
}

fn showreel(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_showreel"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run showreel")
}

#[test]
fn build_writes_page() {
    let out = TempDir::new().unwrap();
    let result = showreel(&[
        "build",
        "--source",
        fixtures().to_str().unwrap(),
        "--output",
        out.path().to_str().unwrap(),
    ]);
    assert!(result.status.success(), "{}", String::from_utf8_lossy(&result.stderr));

    let html = std::fs::read_to_string(out.path().join("index.html")).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("The designs that turn vision into a bold reality"));
    // 11 + 20 + 3 desktop tiles; "Coming Soon" renders the placeholder
    assert_eq!(html.matches(r#"class="video-container""#).count(), 34);
    assert_eq!(html.matches(r#"class="marquee-item""#).count(), 34 * 4);
    assert!(html.contains("No videos available"));

    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("001 Teasers (11 videos)"));
    assert!(stdout.contains("003 Drafts (3 videos, 2 skipped)"));
    assert!(stdout.contains("004 Coming Soon (empty)"));
}

#[test]
fn skipped_items_are_logged_as_warnings() {
    let result = showreel(&["check", "--source", fixtures().to_str().unwrap()]);
    assert!(result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert_eq!(stderr.matches("missing an id").count(), 2, "stderr: {stderr}");
    assert!(String::from_utf8_lossy(&result.stdout).contains("Content is valid"));
}

#[test]
fn check_fails_without_projects_file() {
    let empty = TempDir::new().unwrap();
    let result = showreel(&["check", "--source", empty.path().to_str().unwrap()]);
    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("No projects.toml found"));
}

#[test]
fn gen_config_prints_parseable_toml() {
    let result = showreel(&["gen-config"]);
    assert!(result.status.success());
    let text = String::from_utf8(result.stdout).unwrap();
    let value: toml::Value = toml::from_str(&text).unwrap();
    assert_eq!(value["layout"]["breakpoint_px"].as_integer(), Some(768));
}

#[test]
fn layout_table_with_hover() {
    let result = showreel(&[
        "layout",
        "drafts",
        "--hover",
        "2",
        "--source",
        fixtures().to_str().unwrap(),
    ]);
    assert!(result.status.success());
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("Drafts (desktop, hover: 002)"));
    assert!(stdout.contains("*002"));
}

#[test]
fn layout_json_resting_offsets() {
    let result = showreel(&[
        "layout",
        "Teasers",
        "--json",
        "--source",
        fixtures().to_str().unwrap(),
    ]);
    assert!(result.status.success());
    let json: serde_json::Value = serde_json::from_slice(&result.stdout).unwrap();
    let tiles = json["Desktop"].as_array().unwrap();
    assert_eq!(tiles.len(), 11);
    // 11 tiles, middle is index 5
    assert_eq!(tiles[5]["current"]["translate_y_px"], -120);
    assert_eq!(tiles[0]["current"]["translate_y_px"], -20);
    assert_eq!(tiles[10]["current"]["translate_y_px"], -20);
    assert_eq!(tiles[0]["current"]["z_index"], 11);
}

#[test]
fn layout_unknown_section_fails() {
    let result = showreel(&["layout", "Nope", "--source", fixtures().to_str().unwrap()]);
    assert!(!result.status.success());
}

#[test]
fn layout_rejects_hover_zero() {
    let result = showreel(&[
        "layout",
        "drafts",
        "--hover",
        "0",
        "--source",
        fixtures().to_str().unwrap(),
    ]);
    assert!(!result.status.success());
    assert!(result.stdout.is_empty());
}

#[test]
fn check_and_build_reject_overflowing_step() {
    let source = TempDir::new().unwrap();
    std::fs::copy(
        fixtures().join("projects.toml"),
        source.path().join("projects.toml"),
    )
    .unwrap();
    std::fs::write(
        source.path().join("config.toml"),
        "[layout]\nstep = 2147483647\n",
    )
    .unwrap();
    let out = TempDir::new().unwrap();

    for command in ["check", "build"] {
        let result = showreel(&[
            command,
            "--source",
            source.path().to_str().unwrap(),
            "--output",
            out.path().to_str().unwrap(),
        ]);
        assert_eq!(result.status.code(), Some(1), "{command}");
        let stderr = String::from_utf8_lossy(&result.stderr);
        assert!(stderr.contains("layout.step"), "{command}: {stderr}");
    }
    assert!(!out.path().join("index.html").exists());
}
