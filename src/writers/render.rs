//! Output file rendering.
//!
//! Every renderer receives an [`Artifact`] whose keyed segments are already
//! translated and escaped for the platform. Keys and comment text are made
//! safe for the target syntax here, since only the renderer knows it.

use std::fmt::Write;

use anyhow::{Result, bail};
use enum_dispatch::enum_dispatch;
use serde_json::{Map, Value, json};

use super::{Artifact, ArtifactContent, TwineEntry};
use crate::core::Segment;

#[enum_dispatch]
pub trait Render {
    /// Full file contents, including the trailing newline.
    fn render(&self, artifact: &Artifact) -> Result<String>;
}

/// Closed set of file layouts a platform can emit.
#[enum_dispatch(Render)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    AndroidXml(AndroidXml),
    AppleStrings(AppleStrings),
    JsonDocument(JsonDocument),
    YamlDocument(YamlDocument),
    ResxDocument(ResxDocument),
    JavaProperties(JavaProperties),
    TwineText(TwineText),
    JsModule(JsModule),
    ObjcConstants(ObjcConstants),
    SwiftConstants(SwiftConstants),
}

fn flat_segments<'a>(artifact: &'a Artifact, format: &str) -> Result<&'a [Segment]> {
    match &artifact.content {
        ArtifactContent::Segments(segments) => Ok(segments),
        _ => bail!("{} output expects a flat segment list", format),
    }
}

fn language<'a>(artifact: &'a Artifact, format: &str) -> Result<&'a str> {
    match artifact.language.as_deref() {
        Some(language) => Ok(language),
        None => bail!("{} output is written per language", format),
    }
}

/// Non-blank lines of a comment. Every line break ends a line, `\r` included,
/// so no comment text can spill into a live entry.
fn comment_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(['\r', '\n'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
}

/// Body of an XML comment: markup escaped and no `--` left.
fn xml_comment(line: &str) -> String {
    let mut body = xml_text(line);
    while body.contains("--") {
        body = body.replace("--", "- -");
    }
    body
}

fn xml_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn xml_attribute(text: &str) -> String {
    xml_text(text).replace('"', "&quot;")
}

/// Double-quoted literal valid in JS, YAML, `.strings`, Objective-C and Swift.
fn quoted(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Properties key with separators, comment starters and whitespace escaped.
fn properties_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for c in key.chars() {
        match c {
            '\\' | '=' | ':' | ' ' | '#' | '!' => {
                out.push('\\');
                out.push(c);
            }
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

/// `res/values*/strings.xml`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AndroidXml;

impl Render for AndroidXml {
    fn render(&self, artifact: &Artifact) -> Result<String> {
        let mut out = String::from("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<resources>\n");
        for segment in flat_segments(artifact, "android")? {
            match &segment.key {
                Some(key) => writeln!(
                    out,
                    "    <string name=\"{}\">{}</string>",
                    xml_attribute(key),
                    segment.translation
                )?,
                None => {
                    for line in comment_lines(&segment.translation) {
                        writeln!(out, "    <!-- {} -->", xml_comment(line))?;
                    }
                }
            }
        }
        out.push_str("</resources>\n");
        Ok(out)
    }
}

/// `Localizable.strings`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppleStrings;

impl Render for AppleStrings {
    fn render(&self, artifact: &Artifact) -> Result<String> {
        let mut out = String::new();
        for segment in flat_segments(artifact, "strings")? {
            match &segment.key {
                Some(key) => writeln!(out, "{} = \"{}\";", quoted(key), segment.translation)?,
                None => {
                    if !out.is_empty() {
                        out.push('\n');
                    }
                    for line in comment_lines(&segment.translation) {
                        writeln!(out, "// {}", line)?;
                    }
                }
            }
        }
        Ok(out)
    }
}

/// Keyed segments as a JSON object; branches become nested objects.
fn json_object(segments: &[Segment]) -> Map<String, Value> {
    let mut map = Map::new();
    for segment in segments {
        let Some(key) = &segment.key else {
            continue;
        };
        let value = if segment.is_branch() {
            Value::Object(json_object(&segment.nested))
        } else {
            Value::String(segment.translation.clone())
        };
        map.entry(key.clone()).or_insert(value);
    }
    map
}

/// `{ "meta": { "language": .. }, "translations": { .. } }`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonDocument;

impl Render for JsonDocument {
    fn render(&self, artifact: &Artifact) -> Result<String> {
        let translations = match &artifact.content {
            ArtifactContent::Segments(segments) | ArtifactContent::Nested(segments) => {
                json_object(segments)
            }
            ArtifactContent::Twine(_) => bail!("json output expects segments or nested segments"),
        };
        let document = json!({
            "meta": { "language": language(artifact, "json")? },
            "translations": Value::Object(translations),
        });
        Ok(format!("{}\n", serde_json::to_string_pretty(&document)?))
    }
}

/// Rails I18n YAML rooted at the language code. Keys are double-quoted so
/// words like `no` or `on` stay strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YamlDocument;

impl YamlDocument {
    fn write_segments(out: &mut String, segments: &[Segment], depth: usize) -> Result<()> {
        let indent = "  ".repeat(depth);
        for segment in segments {
            let Some(key) = &segment.key else {
                for line in comment_lines(&segment.translation) {
                    writeln!(out, "{}# {}", indent, line)?;
                }
                continue;
            };
            if segment.is_branch() {
                writeln!(out, "{}{}:", indent, quoted(key))?;
                Self::write_segments(out, &segment.nested, depth + 1)?;
            } else {
                writeln!(out, "{}{}: \"{}\"", indent, quoted(key), segment.translation)?;
            }
        }
        Ok(())
    }
}

impl Render for YamlDocument {
    fn render(&self, artifact: &Artifact) -> Result<String> {
        let mut out = format!("{}:\n", quoted(language(artifact, "rails")?));
        match &artifact.content {
            ArtifactContent::Segments(segments) | ArtifactContent::Nested(segments) => {
                Self::write_segments(&mut out, segments, 1)?
            }
            ArtifactContent::Twine(_) => bail!("rails output expects segments or nested segments"),
        }
        Ok(out)
    }
}

const RESX_HEADER: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<root>
  <resheader name="resmimetype">
    <value>text/microsoft-resx</value>
  </resheader>
  <resheader name="version">
    <value>2.0</value>
  </resheader>
  <resheader name="reader">
    <value>System.Resources.ResXResourceReader, System.Windows.Forms, Version=4.0.0.0, Culture=neutral, PublicKeyToken=b77a5c561934e089</value>
  </resheader>
  <resheader name="writer">
    <value>System.Resources.ResXResourceWriter, System.Windows.Forms, Version=4.0.0.0, Culture=neutral, PublicKeyToken=b77a5c561934e089</value>
  </resheader>
"#;

/// .NET `Resources*.resx`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResxDocument;

impl Render for ResxDocument {
    fn render(&self, artifact: &Artifact) -> Result<String> {
        let mut out = String::from(RESX_HEADER);
        for segment in flat_segments(artifact, "resx")? {
            match &segment.key {
                Some(key) => {
                    writeln!(
                        out,
                        "  <data name=\"{}\" xml:space=\"preserve\">",
                        xml_attribute(key)
                    )?;
                    writeln!(out, "    <value>{}</value>", segment.translation)?;
                    out.push_str("  </data>\n");
                }
                None => {
                    for line in comment_lines(&segment.translation) {
                        writeln!(out, "  <!-- {} -->", xml_comment(line))?;
                    }
                }
            }
        }
        out.push_str("</root>\n");
        Ok(out)
    }
}

/// `key=value` lines with `#` comments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JavaProperties;

impl Render for JavaProperties {
    fn render(&self, artifact: &Artifact) -> Result<String> {
        let mut out = String::new();
        for segment in flat_segments(artifact, "java_properties")? {
            match &segment.key {
                Some(key) => writeln!(out, "{}={}", properties_key(key), segment.translation)?,
                None => {
                    for line in comment_lines(&segment.translation) {
                        writeln!(out, "# {}", line)?;
                    }
                }
            }
        }
        Ok(out)
    }
}

/// Single Twine `strings.txt` holding every language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TwineText;

impl Render for TwineText {
    fn render(&self, artifact: &Artifact) -> Result<String> {
        let ArtifactContent::Twine(entries) = &artifact.content else {
            bail!("twine output expects twine entries");
        };

        let mut out = String::new();
        for entry in entries {
            match entry {
                TwineEntry::Section(name) => writeln!(out, "[[{}]]", name)?,
                TwineEntry::SectionEnd => out.push('\n'),
                TwineEntry::Key {
                    key,
                    values,
                    comment,
                } => {
                    writeln!(out, "\t[{}]", key)?;
                    for (language, value) in values {
                        writeln!(out, "\t\t{} = {}", language, value)?;
                    }
                    // Twine comments are a single line.
                    let comment = comment
                        .as_deref()
                        .map(|text| comment_lines(text).collect::<Vec<_>>().join(" "))
                        .filter(|text| !text.is_empty());
                    if let Some(comment) = comment {
                        writeln!(out, "\t\tcomment = {}", comment)?;
                    }
                    out.push('\n');
                }
            }
        }
        Ok(out)
    }
}

/// CommonJS module exporting the nested translation object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsModule;

impl JsModule {
    fn write_object(out: &mut String, segments: &[Segment], depth: usize) -> Result<()> {
        let indent = "  ".repeat(depth);
        let keyed: Vec<(&str, &Segment)> = segments
            .iter()
            .filter_map(|segment| segment.key.as_deref().map(|key| (key, segment)))
            .collect();
        let last = keyed.len().saturating_sub(1);
        for (index, (key, segment)) in keyed.into_iter().enumerate() {
            let comma = if index == last { "" } else { "," };
            if segment.is_branch() {
                writeln!(out, "{}{}: {{", indent, quoted(key))?;
                Self::write_object(out, &segment.nested, depth + 1)?;
                writeln!(out, "{}}}{}", indent, comma)?;
            } else {
                writeln!(
                    out,
                    "{}{}: \"{}\"{}",
                    indent,
                    quoted(key),
                    segment.translation,
                    comma
                )?;
            }
        }
        Ok(())
    }
}

impl Render for JsModule {
    fn render(&self, artifact: &Artifact) -> Result<String> {
        let ArtifactContent::Nested(segments) = &artifact.content else {
            bail!("oeg output expects nested segments");
        };
        let mut out = String::from("module.exports = {\n");
        Self::write_object(&mut out, segments, 1)?;
        out.push_str("};\n");
        Ok(out)
    }
}

/// `LocalizableConstants.h`: segment key is the macro, translation the lookup key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjcConstants;

impl Render for ObjcConstants {
    fn render(&self, artifact: &Artifact) -> Result<String> {
        let mut out = String::new();
        for segment in flat_segments(artifact, "constants")? {
            if let Some(name) = &segment.key {
                writeln!(
                    out,
                    "#define {} NSLocalizedString(@{},nil)",
                    name,
                    quoted(&segment.translation)
                )?;
            }
        }
        Ok(out)
    }
}

/// `LocalizableConstants.swift`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwiftConstants;

impl Render for SwiftConstants {
    fn render(&self, artifact: &Artifact) -> Result<String> {
        let mut out = String::from("import Foundation\n\nstruct LocalizableConstants {\n");
        for segment in flat_segments(artifact, "constants")? {
            if let Some(name) = &segment.key {
                writeln!(
                    out,
                    "    static let {} = NSLocalizedString({}, comment: \"\")",
                    name,
                    quoted(&segment.translation)
                )?;
            }
        }
        out.push_str("}\n");
        Ok(out)
    }
}
