use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, SAMPLE_TABLE, stderr};

#[test]
fn test_unknown_platform() -> Result<()> {
    let test = CliTest::with_sample_table()?;

    let output = test
        .generate_command()
        .args(["--platform", "php", "--source", "translations.json"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    assert!(err.contains("platform 'php' is not supported"), "stderr: {}", err);
    assert!(err.contains("android, ios, swift, json, rails, resx, java_properties, twine, oeg"));
    assert!(!test.root().join("out").exists());

    Ok(())
}

#[test]
fn test_missing_end_marker() -> Result<()> {
    let test = CliTest::with_file(
        "translations.json",
        r#"[["[key]", "*en"], ["app_name", "My App"]]"#,
    )?;

    let output = test
        .generate_command()
        .args(["--platform", "android", "--source", "translations.json"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("[end]"));
    assert!(!test.root().join("out").exists());

    Ok(())
}

#[test]
fn test_end_before_key() -> Result<()> {
    let test = CliTest::with_file(
        "translations.json",
        r#"[["[end]"], ["[key]", "en"], ["app_name", "My App"]]"#,
    )?;

    let output = test
        .generate_command()
        .args(["--platform", "android", "--source", "translations.json"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("invalid format"));

    Ok(())
}

#[test]
fn test_missing_source_path() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.generate_command().args(["--platform", "json"]).output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("source path is missing"));

    Ok(())
}

#[test]
fn test_no_platform_selected() -> Result<()> {
    let test = CliTest::with_sample_table()?;

    let output = test
        .generate_command()
        .args(["--source", "translations.json"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("no platform selected"));

    Ok(())
}

#[test]
fn test_unknown_formatting() -> Result<()> {
    let test = CliTest::with_file("translations.json", SAMPLE_TABLE)?;

    let output = test
        .generate_command()
        .args([
            "--platform",
            "android",
            "--source",
            "translations.json",
            "--formatting",
            "kebab_case",
        ])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("unknown formatting 'kebab_case'"));

    Ok(())
}

#[test]
fn test_invalid_config_file() -> Result<()> {
    let test = CliTest::with_sample_table()?;
    test.write_file(".localiorc.json", r#"{ "platforms": "android" }"#)?;

    let output = test.generate_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to parse config file"));

    Ok(())
}

#[test]
fn test_unsupported_source_extension() -> Result<()> {
    let test = CliTest::with_file("translations.xlsx", SAMPLE_TABLE)?;

    let output = test
        .generate_command()
        .args(["--platform", "android", "--source", "translations.xlsx"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    assert!(err.contains("unsupported source file"), "stderr: {}", err);
    assert!(!test.root().join("out").exists());

    Ok(())
}
