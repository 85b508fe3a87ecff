use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, SAMPLE_TABLE, stderr, stdout};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert!(
        parsed.get("platforms").is_some(),
        "Config should have 'platforms' field"
    );
    assert_eq!(parsed["source"]["path"], "translations.json");
    assert_eq!(parsed["outputPath"], "./out/");
    assert_eq!(parsed["formatting"], "smart");

    assert!(
        content.contains("  "),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert!(output.status.success());
    assert_eq!(stdout(&output), "\u{2713} Created .localiorc.json\n");

    assert!(test.root().join(".localiorc.json").exists());
    assert_config_content(&test.read_file(".localiorc.json")?)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".localiorc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "Error: .localiorc.json already exists\n");
    assert_eq!(test.read_file(".localiorc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file("translations.json", SAMPLE_TABLE)?;

    let output = test.generate_command().output()?;
    assert!(
        output.status.success(),
        "Generate should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert!(test.root().join("out/values/strings.xml").exists());
    assert!(test.root().join("out/en.lproj/Localizable.strings").exists());
    assert!(test.root().join("out/LocalizableConstants.h").exists());

    Ok(())
}
