//! CLI integration tests for the `nexr` binary.
//!
//! Each test runs the real executable against an isolated state directory
//! passed through `NEXR_STATE_DIR`, so no test touches the user's profile.

use std::process::Command;

use anyhow::{Context, Result};
use nexr_test_utils::ProfileFixture;

fn nexr_command(fixture: &ProfileFixture) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_nexr"));
    cmd.env("NEXR_STATE_DIR", fixture.state_path());
    cmd
}

#[test]
fn given_an_empty_profile_when_skills_are_added_then_they_persist() -> Result<()> {
    let fixture = ProfileFixture::new()?;

    // WHEN the user adds two skills
    let output = nexr_command(&fixture)
        .args(["skills", "--add", "React", "--add", "Testing"])
        .output()
        .context("failed to run skills --add")?;
    assert!(
        output.status.success(),
        "skills --add should succeed\nSTDERR:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );

    // THEN a later listing shows both
    let listed = nexr_command(&fixture)
        .args(["skills"])
        .output()
        .context("failed to run skills listing")?;
    let stdout = String::from_utf8_lossy(&listed.stdout);
    assert!(stdout.contains("React"), "missing React in: {stdout}");
    assert!(stdout.contains("Testing"), "missing Testing in: {stdout}");
    Ok(())
}

#[test]
fn given_a_corpus_file_when_suggest_runs_then_json_output_is_ranked() -> Result<()> {
    // GIVEN a corpus where React appears in two project records
    let fixture = ProfileFixture::new()?;
    let corpus = fixture.write_corpus(&[
        (
            "project",
            "Storefront Revamp",
            "React and TypeScript storefront rebuild",
        ),
        (
            "project",
            "Partner Dashboard",
            "React dashboard with REST API clients",
        ),
    ])?;

    // WHEN suggest runs with JSON output
    let output = nexr_command(&fixture)
        .arg("suggest")
        .arg("--corpus")
        .arg(&corpus)
        .args(["--format", "json"])
        .output()
        .context("failed to run suggest")?;
    assert!(
        output.status.success(),
        "suggest should succeed\nSTDERR:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );

    // THEN the recurring skill ranks first and confidences never increase
    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).context("suggest emitted invalid JSON")?;
    let suggestions = report["suggestions"]
        .as_array()
        .context("missing suggestions array")?;
    assert!(!suggestions.is_empty());
    assert_eq!(suggestions[0]["skill"], "React");
    assert_eq!(suggestions[0]["source"], "project");
    let confidences: Vec<u64> = suggestions
        .iter()
        .map(|s| s["confidence"].as_u64().unwrap_or(0))
        .collect();
    let mut sorted = confidences.clone();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(confidences, sorted, "suggestions not ranked: {confidences:?}");
    Ok(())
}

#[test]
fn given_suggestions_when_accept_runs_with_names_then_profile_and_history_update() -> Result<()> {
    let fixture = ProfileFixture::new()?;
    let corpus = fixture.write_corpus(&[
        (
            "project",
            "Storefront Revamp",
            "React and TypeScript storefront rebuild",
        ),
        (
            "contribution",
            "OAuth integration guide",
            "Wrote the token refresh documentation",
        ),
    ])?;

    // WHEN the user accepts two suggested skills by name
    let output = nexr_command(&fixture)
        .arg("accept")
        .args(["React", "Authentication"])
        .arg("--corpus")
        .arg(&corpus)
        .output()
        .context("failed to run accept")?;
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        output.status.success(),
        "accept should succeed\nSTDOUT:\n{stdout}\nSTDERR:\n{stderr}"
    );
    assert!(
        stdout.contains("Accepted 2: React, Authentication"),
        "unexpected accept output: {stdout}"
    );

    // THEN the profile lists them
    let listed = nexr_command(&fixture).args(["skills"]).output()?;
    let listed_stdout = String::from_utf8_lossy(&listed.stdout);
    assert!(listed_stdout.contains("React"));
    assert!(listed_stdout.contains("Authentication"));

    // AND the history shows one commit with both names
    let history = nexr_command(&fixture).args(["history"]).output()?;
    let history_stdout = String::from_utf8_lossy(&history.stdout);
    assert!(
        history_stdout.contains("React, Authentication"),
        "unexpected history output: {history_stdout}"
    );
    Ok(())
}

#[test]
fn given_already_listed_skills_when_suggest_runs_then_they_are_filtered_out() -> Result<()> {
    let fixture = ProfileFixture::new()?;
    fixture.write_skills(&["React"])?;
    let corpus = fixture.write_corpus(&[("project", "Storefront", "React storefront rebuild")])?;

    let output = nexr_command(&fixture)
        .arg("suggest")
        .arg("--corpus")
        .arg(&corpus)
        .args(["--format", "json"])
        .output()?;
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let suggestions = report["suggestions"].as_array().unwrap();
    assert!(
        suggestions.iter().all(|s| s["skill"] != "React"),
        "React already on the profile should not be re-suggested"
    );
    Ok(())
}

#[test]
fn given_a_tiny_timeout_when_suggest_uses_the_simulated_source_then_it_fails() -> Result<()> {
    let fixture = ProfileFixture::new()?;

    // The simulated source takes over a second; a 10ms budget cannot win.
    let output = nexr_command(&fixture)
        .args(["suggest", "--timeout-ms", "10"])
        .output()?;
    assert!(!output.status.success(), "suggest should report the timeout");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("timed out"), "unexpected stderr: {stderr}");
    Ok(())
}

#[test]
fn given_no_tty_when_accept_runs_without_names_then_it_asks_for_arguments() -> Result<()> {
    let fixture = ProfileFixture::new()?;
    let corpus = fixture.write_corpus(&[("project", "Storefront", "React storefront rebuild")])?;

    let output = nexr_command(&fixture)
        .arg("accept")
        .arg("--corpus")
        .arg(&corpus)
        .output()?;
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("TTY"), "unexpected stderr: {stderr}");
    Ok(())
}

#[test]
fn given_a_custom_lexicon_when_suggest_runs_then_only_its_terms_match() -> Result<()> {
    let fixture = ProfileFixture::new()?;
    let corpus = fixture.write_corpus(&[(
        "project",
        "Firmware Bringup",
        "Rust driver work for the sensor board",
    )])?;
    let lexicon_path = fixture.tempdir.path().join("lexicon.toml");
    std::fs::write(
        &lexicon_path,
        r#"
[[term]]
name = "Rust"
aliases = ["rustlang"]

[[term]]
name = "Embedded Systems"
aliases = ["firmware", "driver"]
"#,
    )?;

    let output = nexr_command(&fixture)
        .arg("suggest")
        .arg("--corpus")
        .arg(&corpus)
        .arg("--lexicon")
        .arg(&lexicon_path)
        .args(["--format", "json"])
        .output()?;
    assert!(
        output.status.success(),
        "suggest should succeed\nSTDERR:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );

    let report: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let names: Vec<&str> = report["suggestions"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|s| s["skill"].as_str())
        .collect();
    assert!(names.contains(&"Rust"), "missing Rust in {names:?}");
    assert!(
        names.contains(&"Embedded Systems"),
        "missing Embedded Systems in {names:?}"
    );
    Ok(())
}
