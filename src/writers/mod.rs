//! Platform writers.
//!
//! [`dispatch`] plans the artifacts for one platform without touching the
//! filesystem; [`write`] renders every planned artifact first and only then
//! emits them, so a rendering failure leaves nothing behind for that platform.

pub mod emit;
pub mod platform;
pub mod render;

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::nested::{self, DEFAULT_SEPARATOR};
use crate::core::placeholder::{self, PlaceholderValues};
use crate::core::{Error, KeyFormatting, LanguageMap, Result, Segment, Term, format_key};

pub use platform::{Cardinality, Nesting, Platform, WriterDescriptor};
pub use render::{OutputFormat, Render};

/// Per-platform switches from the `platformOptions` config block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlatformOptions {
    /// iOS and Swift constants files; on unless set to `false`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_constants: Option<bool>,
    /// Android / iOS / Swift file name override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// ResX base name (`Resources`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_file: Option<String>,
    /// Twine output file (`strings.txt`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_file: Option<String>,
    /// Key separator for nested output (`_`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,
    /// Fold keys into a tree where the platform allows it.
    pub nested: bool,
}

impl PlatformOptions {
    fn file_for(&self, platform: Platform) -> Option<&str> {
        match platform {
            Platform::Resx => self.resource_file.as_deref(),
            Platform::Twine => self.output_file.as_deref(),
            _ => self.filename.as_deref(),
        }
    }

    fn separator(&self) -> &str {
        self.separator.as_deref().unwrap_or(DEFAULT_SEPARATOR)
    }
}

/// One entry of a Twine file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TwineEntry {
    /// `[[name]]`
    Section(String),
    SectionEnd,
    Key {
        key: String,
        /// `(language, translation)` in language order.
        values: Vec<(String, String)>,
        comment: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ArtifactContent {
    Segments(Vec<Segment>),
    /// Top-level segments; branches carry their children in `nested`.
    Nested(Vec<Segment>),
    Twine(Vec<TwineEntry>),
}

/// A planned output file.
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    /// Relative to the output directory.
    pub path: PathBuf,
    /// `None` for files that cover every language.
    pub language: Option<String>,
    pub format: OutputFormat,
    pub content: ArtifactContent,
}

/// Everything a platform writer reads. Terms are expected to be filtered already.
#[derive(Debug, Clone, Copy)]
pub struct WriteRequest<'a> {
    pub languages: &'a LanguageMap,
    pub default_language: &'a str,
    pub terms: &'a [Term],
    pub formatting: KeyFormatting,
    pub options: &'a PlatformOptions,
    pub placeholder_values: Option<&'a PlaceholderValues>,
}

/// Plan the artifacts `platform_id` would write for `request`.
///
/// Artifacts come out in language order, with any constants file last.
///
/// # Errors
///
/// [`Error::Config`] for an unknown platform or an empty language map.
pub fn dispatch(platform_id: &str, request: &WriteRequest<'_>) -> Result<Vec<Artifact>> {
    let platform: Platform = platform_id.parse()?;
    if request.languages.is_empty() {
        return Err(Error::config("no languages to write"));
    }

    let descriptor = platform.descriptor();
    let file = request.options.file_for(platform);

    let mut artifacts = match descriptor.cardinality {
        Cardinality::Single => vec![Artifact {
            path: PathBuf::from(descriptor.path.resolve(request.default_language, true, file)),
            language: None,
            format: descriptor.format,
            content: ArtifactContent::Twine(twine_entries(descriptor, request)),
        }],
        Cardinality::PerLanguage => {
            let codes: Vec<&str> = request.languages.codes().collect();
            codes
                .par_iter()
                .map(|language| language_artifact(descriptor, request, language, file))
                .collect()
        }
    };

    let constants = descriptor
        .constants
        .filter(|_| request.options.create_constants.unwrap_or(true));
    if let Some(constants) = constants {
        let segments = request
            .terms
            .iter()
            .filter(|term| !term.is_comment() && !term.is_section_marker())
            .map(|term| {
                Segment::new(
                    (constants.name)(&term.keyword),
                    format_key(&term.keyword, request.formatting, descriptor.smart_key),
                    request.default_language,
                )
            })
            .collect();
        artifacts.push(Artifact {
            path: PathBuf::from(constants.path),
            language: None,
            format: constants.format,
            content: ArtifactContent::Segments(segments),
        });
    }

    Ok(artifacts)
}

fn language_artifact(
    descriptor: &WriterDescriptor,
    request: &WriteRequest<'_>,
    language: &str,
    file: Option<&str>,
) -> Artifact {
    let is_default = language == request.default_language;
    let segments = build_segments(descriptor, request, language);

    let nested = match descriptor.nesting {
        Nesting::Never => false,
        Nesting::Optional => request.options.nested,
        Nesting::Always => true,
    };
    let content = if nested {
        ArtifactContent::Nested(nested::nest_segments(
            &segments,
            request.options.separator(),
            language,
        ))
    } else {
        ArtifactContent::Segments(segments)
    };

    Artifact {
        path: PathBuf::from(descriptor.path.resolve(language, is_default, file)),
        language: Some(language.to_string()),
        format: descriptor.format,
        content,
    }
}

/// Keyed, translated and escaped segments for one language.
///
/// Comment rows take their text from the default language; section markers
/// are structural and produce nothing here.
pub fn build_segments(
    descriptor: &WriterDescriptor,
    request: &WriteRequest<'_>,
    language: &str,
) -> Vec<Segment> {
    request
        .terms
        .iter()
        .filter(|term| !term.is_section_marker())
        .filter_map(|term| {
            if term.is_comment() {
                let text = term.value(request.default_language);
                return (!text.is_empty()).then(|| Segment::comment(text, language));
            }

            let raw = term.value(language);
            if descriptor.skip_empty_values && raw.trim().is_empty() {
                return None;
            }

            Some(Segment::new(
                format_key(&term.keyword, request.formatting, descriptor.smart_key),
                translate(descriptor, request, raw),
                language,
            ))
        })
        .collect()
}

fn translate(descriptor: &WriterDescriptor, request: &WriteRequest<'_>, raw: &str) -> String {
    placeholder::prepare(
        raw,
        descriptor.placeholders,
        descriptor.escapes,
        request.placeholder_values,
    )
}

/// Twine keeps every language in one file, with sections and attached comments.
fn twine_entries(descriptor: &WriterDescriptor, request: &WriteRequest<'_>) -> Vec<TwineEntry> {
    let mut entries = Vec::new();
    let mut pending_comment: Option<String> = None;

    for term in request.terms {
        if term.is_comment() {
            let text = term.value(request.default_language).trim();
            pending_comment = (!text.is_empty()).then(|| text.to_string());
        } else if term.is_section_start() {
            entries.push(TwineEntry::Section(
                term.value(request.default_language).to_string(),
            ));
            pending_comment = None;
        } else if term.is_section_end() {
            entries.push(TwineEntry::SectionEnd);
            pending_comment = None;
        } else {
            let values = request
                .languages
                .codes()
                .map(|language| {
                    (
                        language.to_string(),
                        translate(descriptor, request, term.value(language)),
                    )
                })
                .collect();
            entries.push(TwineEntry::Key {
                key: format_key(&term.keyword, request.formatting, descriptor.smart_key),
                values,
                comment: pending_comment.take(),
            });
        }
    }

    entries
}

/// Render and write every artifact of `platform_id` under `output_path`.
///
/// Returns the written paths in artifact order.
pub fn write(
    platform_id: &str,
    request: &WriteRequest<'_>,
    output_path: &Path,
) -> anyhow::Result<Vec<PathBuf>> {
    let artifacts = dispatch(platform_id, request)?;

    let rendered = artifacts
        .iter()
        .map(|artifact| Ok((artifact.path.as_path(), artifact.format.render(artifact)?)))
        .collect::<anyhow::Result<Vec<_>>>()?;

    rendered
        .into_iter()
        .map(|(relative, content)| emit::save(output_path, relative, &content))
        .collect()
}
