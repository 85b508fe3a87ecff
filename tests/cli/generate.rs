use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CliTest, stderr, stdout};

#[test]
fn test_generate_android() -> Result<()> {
    let test = CliTest::with_sample_table()?;

    let output = test
        .generate_command()
        .args(["--platform", "android", "--source", "translations.json"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "Languages detected: en, es, fr -- using en as default.\n\
         Loaded 4 terms.\n\
         Writing android translations...\n \
         > values/strings.xml\n \
         > values-es/strings.xml\n \
         > values-fr/strings.xml\n\
         \u{2713} Generated 3 files for 1 platform\n"
    );

    assert_eq!(
        test.read_file("out/values/strings.xml")?,
        r#"<?xml version="1.0" encoding="utf-8"?>
<resources>
    <!-- General -->
    <string name="app_name">My App</string>
    <string name="greeting">Hello, %1$s</string>
    <string name="settings_title">Settings</string>
</resources>
"#
    );
    assert!(
        test.read_file("out/values-fr/strings.xml")?
            .contains("<string name=\"settings_title\">Paramètres</string>")
    );

    Ok(())
}

#[test]
fn test_generate_from_config_file() -> Result<()> {
    let test = CliTest::with_sample_table()?;
    test.write_file(
        ".localiorc.json",
        r#"{
            "platforms": ["json"],
            "source": { "path": "translations.json" },
            "outputPath": "i18n",
            "platformOptions": { "nested": true }
        }"#,
    )?;

    let output = test.generate_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let document: Value = serde_json::from_str(&test.read_file("i18n/strings-es.json")?)?;
    assert_eq!(
        document,
        json!({
            "meta": {"language": "es"},
            "translations": {
                "app": {"name": "Mi App"},
                "greeting": "Hola, %1$s",
                "settings": {"title": "Ajustes"}
            }
        })
    );

    Ok(())
}

#[test]
fn test_generate_ios_with_constants() -> Result<()> {
    let test = CliTest::with_sample_table()?;

    let output = test
        .generate_command()
        .args(["-p", "ios", "--source", "translations.json", "-o", "ios"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_eq!(
        test.read_file("ios/es.lproj/Localizable.strings")?,
        "// General\n\"_App_name\" = \"Mi App\";\n\"_Greeting\" = \"Hola, %1$@\";\n\"_Settings_title\" = \"Ajustes\";\n"
    );
    assert_eq!(
        test.read_file("ios/LocalizableConstants.h")?,
        "#define kLocaleAppName NSLocalizedString(@\"_App_name\",nil)\n\
         #define kLocaleGreeting NSLocalizedString(@\"_Greeting\",nil)\n\
         #define kLocaleSettingsTitle NSLocalizedString(@\"_Settings_title\",nil)\n"
    );

    Ok(())
}

#[test]
fn test_generate_with_filters() -> Result<()> {
    let test = CliTest::with_sample_table()?;

    let output = test
        .generate_command()
        .args([
            "--platform",
            "java_properties",
            "--source",
            "translations.json",
            "--only",
            "_",
            "--except",
            "settings",
        ])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_eq!(test.read_file("out/language_en.properties")?, "app_name=My App\n");

    Ok(())
}

#[test]
fn test_generate_twine_single_file() -> Result<()> {
    let test = CliTest::with_sample_table()?;

    let output = test
        .generate_command()
        .args(["--platform", "twine", "--source", "translations.json"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains(" > strings.txt\n"));

    let content = test.read_file("out/strings.txt")?;
    assert!(content.starts_with(
        "\t[app_name]\n\t\ten = My App\n\t\tes = Mi App\n\t\tfr = Mon App\n\t\tcomment = General\n\n"
    ));

    Ok(())
}

#[test]
fn test_generate_override_default() -> Result<()> {
    let test = CliTest::with_sample_table()?;

    let output = test
        .generate_command()
        .args([
            "--platform",
            "resx",
            "--source",
            "translations.json",
            "--override-default",
            "es",
        ])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("using es as default."));

    assert!(test.root().join("out/Resources.resx").exists());
    assert!(test.root().join("out/Resources.en.resx").exists());
    assert!(
        test.read_file("out/Resources.resx")?
            .contains("<data name=\"Appname\" xml:space=\"preserve\">\n    <value>Mi App</value>")
    );

    Ok(())
}

#[test]
fn test_generate_is_repeatable() -> Result<()> {
    let test = CliTest::with_sample_table()?;
    let args = ["--platform", "rails", "--source", "translations.json"];

    assert!(test.generate_command().args(args).output()?.status.success());
    let first = test.read_file("out/fr.yml")?;
    assert!(test.generate_command().args(args).output()?.status.success());

    assert_eq!(test.read_file("out/fr.yml")?, first);
    assert_eq!(
        first,
        "\"fr\":\n  # General\n  \"app_name\": \"Mon App\"\n  \"greeting\": \"Bonjour, %{arg1}\"\n  \"settings_title\": \"Paramètres\"\n"
    );

    Ok(())
}

#[test]
fn test_generate_verbose_reports_config() -> Result<()> {
    let test = CliTest::with_sample_table()?;

    let output = test
        .generate_command()
        .args([
            "--platform",
            "oeg",
            "--source",
            "translations.json",
            "--only",
            "app_",
            "-v",
        ])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.starts_with("No .localiorc.json found, using defaults and command line options\n"));
    assert!(out.contains("Only keys matching app_\n1 terms kept after filtering.\n"));
    assert_eq!(
        test.read_file("out/en.js")?,
        "module.exports = {\n  \"app\": {\n    \"name\": \"My App\"\n  }\n};\n"
    );

    Ok(())
}

#[test]
fn test_generate_from_csv_source() -> Result<()> {
    let test = CliTest::with_file(
        "translations.csv",
        "Localizables;;\n\
         [key];*en;es\n\
         [comment];\"General\nsecret_key=injected\";\n\
         app_name;My App;Mi App\n\
         greeting;\"Hello; <s$1>\";\"Hola; <s$1>\"\n\
         [end];;\n",
    )?;

    let output = test
        .generate_command()
        .args([
            "--platform",
            "java_properties",
            "--source",
            "translations.csv",
            "--column-separator",
            ";",
        ])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).starts_with("Languages detected: en, es -- using en as default.\n"));

    assert_eq!(
        test.read_file("out/language_en.properties")?,
        "# General\n# secret_key=injected\napp_name=My App\ngreeting=Hello; %1$s\n"
    );
    assert_eq!(
        test.read_file("out/language_es.properties")?,
        "# General\n# secret_key=injected\napp_name=Mi App\ngreeting=Hola; %1$s\n"
    );

    Ok(())
}
