use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, run};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["includes"], serde_json::json!(["translations"]));
    assert_eq!(parsed["includeUnfinished"], Value::Bool(true));
    assert_eq!(parsed["disabledRules"], serde_json::json!([]));

    // 2-space indentation
    assert!(content.contains("\n  \"includes\""));

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("init");
    let output = run(cmd)?;
    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Created .tscatrc.json"));

    assert!(test.root().join(".tscatrc.json").exists());
    let content = test.read_file(".tscatrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".tscatrc.json", "{}")?;

    let mut cmd = test.command();
    cmd.arg("init");
    let output = run(cmd)?;
    assert_eq!(output.code, Some(1));
    assert!(output.stderr.contains(".tscatrc.json already exists"));
    assert_eq!(test.read_file(".tscatrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_picked_up() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("init");
    run(cmd)?;

    let mut cmd = test.check_command();
    cmd.arg("-v");
    let output = run(cmd)?;
    assert_eq!(output.code, Some(0));
    assert!(!output.stderr.contains("using default configuration"));

    Ok(())
}
