use anyhow::Result;

use crate::{CliTest, stdout};

#[test]
fn test_platforms_lists_every_id() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("platforms").output()?;
    assert!(output.status.success());

    let out = stdout(&output);
    for id in [
        "android",
        "ios",
        "swift",
        "json",
        "rails",
        "resx",
        "java_properties",
        "twine",
        "oeg",
    ] {
        assert!(out.lines().any(|line| line.starts_with(id)), "missing {}", id);
    }
    assert!(!out.contains("{file}"));

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;
    assert!(output.status.success());
    assert!(stdout(&output).contains("Usage:"));

    Ok(())
}
