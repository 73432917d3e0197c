#!/usr/bin/env rust
//! Integration tests for the Skald CLI
//!
//! These tests validate the command-line interface and end-to-end curation
//! behavior against real temporary documentation trees.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

/// Test helper to get the CLI binary
fn skald_cmd() -> Command {
    Command::cargo_bin("skald").unwrap()
}

const STALE_HEADER: &str = "\
/**
 * @function cf_audio_play
 * @brief    Plays a sound.
 * @related  CF_AUDIO_PARAMS cf_audio_stop cf_audio_pause cf_audio_resume
 */
void cf_audio_play();
";

const CURATED_LINE: &str = " * @related  cf_audio_pause cf_audio_stop cf_audio_resume";

#[test]
fn update_rewrites_stale_annotations() {
    let dir = tempdir().unwrap();
    let header = dir.path().join("cute_audio.h");
    fs::write(&header, STALE_HEADER).unwrap();

    skald_cmd()
        .arg("update")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("1 file(s) updated"));

    let rewritten = fs::read_to_string(&header).unwrap();
    assert!(rewritten.contains(CURATED_LINE));
}

#[test]
fn update_dry_run_reports_without_writing() {
    let dir = tempdir().unwrap();
    let header = dir.path().join("cute_audio.h");
    fs::write(&header, STALE_HEADER).unwrap();

    skald_cmd()
        .arg("update")
        .arg("--dry-run")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("(dry run)"));

    assert_eq!(fs::read_to_string(&header).unwrap(), STALE_HEADER);
}

#[test]
fn update_json_output_is_parseable() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("cute_audio.h"), STALE_HEADER).unwrap();

    let output = skald_cmd()
        .arg("update")
        .arg("--format")
        .arg("json")
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["files_scanned"], 1);
    assert_eq!(parsed["files_changed"], 1);
}

#[test]
fn check_fails_on_stale_annotations_and_passes_after_update() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("cute_audio.h"), STALE_HEADER).unwrap();

    skald_cmd()
        .arg("check")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("stale @related annotations"));

    skald_cmd().arg("update").arg(dir.path()).assert().success();

    skald_cmd().arg("check").arg(dir.path()).assert().success();
}

#[test]
fn curate_prints_the_curated_list() {
    skald_cmd()
        .arg("curate")
        .arg("sfoo_bar")
        .arg("sfoo_baz")
        .arg("CF_SFOO")
        .arg("other")
        .assert()
        .success()
        .stdout(predicate::str::contains("sfoo_baz other CF_SFOO"));
}

#[test]
fn curate_respects_the_override_table() {
    skald_cmd()
        .arg("curate")
        .arg("slen")
        .arg("anything")
        .assert()
        .success()
        .stdout(predicate::str::contains("scount sempty sset"));
}

#[test]
fn print_default_config_emits_yaml() {
    skald_cmd()
        .arg("print-default-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("extensions"))
        .stdout(predicate::str::contains("ignore_dirs"));
}

#[test]
fn init_config_refuses_to_overwrite_without_force() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join(".skald.yml");

    skald_cmd()
        .arg("init-config")
        .arg(&config_path)
        .assert()
        .success();
    assert!(config_path.exists());

    skald_cmd()
        .arg("init-config")
        .arg(&config_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    skald_cmd()
        .arg("init-config")
        .arg("--force")
        .arg(&config_path)
        .assert()
        .success();
}

#[test]
fn config_file_supplies_extra_overrides() {
    let dir = tempdir().unwrap();
    let header = dir.path().join("api.h");
    fs::write(
        &header,
        "/**\n * @function cf_audio_play\n * @related  cf_audio_stop\n */\n",
    )
    .unwrap();

    let config_path = dir.path().join("skald.yml");
    fs::write(
        &config_path,
        "overrides:\n  cf_audio_play:\n    - cf_audio_halt\n",
    )
    .unwrap();

    skald_cmd()
        .arg("update")
        .arg("--config")
        .arg(&config_path)
        .arg(dir.path())
        .assert()
        .success();

    let rewritten = fs::read_to_string(&header).unwrap();
    assert!(rewritten.contains(" * @related  cf_audio_halt"));
}

#[test]
fn non_header_sources_are_left_alone() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("impl.c");
    fs::write(&source, STALE_HEADER).unwrap();

    skald_cmd()
        .arg("update")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("All @related annotations are curated"));

    assert_eq!(fs::read_to_string(&source).unwrap(), STALE_HEADER);
}
