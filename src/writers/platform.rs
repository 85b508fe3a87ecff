//! Closed registry of supported target platforms.

use std::{fmt, str::FromStr};

use super::render::{
    AndroidXml, AppleStrings, JavaProperties, JsModule, JsonDocument, ObjcConstants, OutputFormat,
    ResxDocument, SwiftConstants, TwineText, YamlDocument,
};
use crate::core::Error;
use crate::core::format::snake_case;
use crate::core::placeholder::{
    ANDROID_ESCAPES, APPLE, APPLE_ESCAPES, DOTNET, EscapeTable, JS, JS_ESCAPES, NO_ESCAPES,
    PRINTF, PROPERTIES_ESCAPES, PlaceholderTable, RAILS, XML_ESCAPES, YAML_ESCAPES,
};
use crate::utils::{camel_case, capitalize, space_to_underscore, strip_tag};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Platform {
    Android,
    Ios,
    Swift,
    Json,
    Rails,
    Resx,
    JavaProperties,
    Twine,
    Oeg,
}

impl Platform {
    pub const ALL: [Platform; 9] = [
        Platform::Android,
        Platform::Ios,
        Platform::Swift,
        Platform::Json,
        Platform::Rails,
        Platform::Resx,
        Platform::JavaProperties,
        Platform::Twine,
        Platform::Oeg,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Platform::Android => "android",
            Platform::Ios => "ios",
            Platform::Swift => "swift",
            Platform::Json => "json",
            Platform::Rails => "rails",
            Platform::Resx => "resx",
            Platform::JavaProperties => "java_properties",
            Platform::Twine => "twine",
            Platform::Oeg => "oeg",
        }
    }

    pub fn descriptor(&self) -> &'static WriterDescriptor {
        match self {
            Platform::Android => &ANDROID,
            Platform::Ios => &IOS,
            Platform::Swift => &SWIFT,
            Platform::Json => &JSON,
            Platform::Rails => &RAILS_YAML,
            Platform::Resx => &RESX,
            Platform::JavaProperties => &JAVA_PROPERTIES,
            Platform::Twine => &TWINE,
            Platform::Oeg => &OEG,
        }
    }

    pub fn supported_ids() -> String {
        Self::ALL
            .iter()
            .map(Platform::id)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|platform| platform.id() == value)
            .ok_or_else(|| {
                Error::config(format!(
                    "platform '{}' is not supported. Current possibilities are {}",
                    value,
                    Self::supported_ids()
                ))
            })
    }
}

/// One output file per language, or a single file for all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    PerLanguage,
    Single,
}

/// Whether keys are folded into a tree before rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nesting {
    Never,
    /// Enabled by the `nested` platform option.
    Optional,
    Always,
}

/// Relative output path patterns.
///
/// `{lang}` is the language code and `{file}` the configured file name (or
/// [`PathTemplate::file`] when none is configured).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathTemplate {
    pub default_language: &'static str,
    pub other_language: &'static str,
    pub file: &'static str,
}

impl PathTemplate {
    const fn same(pattern: &'static str, file: &'static str) -> Self {
        Self {
            default_language: pattern,
            other_language: pattern,
            file,
        }
    }

    pub fn resolve(&self, language: &str, is_default: bool, file: Option<&str>) -> String {
        let pattern = if is_default {
            self.default_language
        } else {
            self.other_language
        };
        pattern
            .replace("{file}", file.unwrap_or(self.file))
            .replace("{lang}", language)
    }
}

/// Extra single-file output derived from the default language's keys.
#[derive(Debug, Clone, Copy)]
pub struct ConstantsFile {
    pub path: &'static str,
    pub format: OutputFormat,
    pub name: fn(&str) -> String,
}

/// Everything the dispatcher needs to know about one platform.
#[derive(Debug)]
pub struct WriterDescriptor {
    pub platform: Platform,
    /// Key shape used by the `smart` formatting.
    pub smart_key: fn(&str) -> String,
    pub placeholders: &'static PlaceholderTable,
    pub escapes: EscapeTable,
    pub cardinality: Cardinality,
    pub path: PathTemplate,
    pub nesting: Nesting,
    pub format: OutputFormat,
    /// Drop terms whose value is blank for the language being written.
    pub skip_empty_values: bool,
    pub constants: Option<ConstantsFile>,
}

fn ios_key(keyword: &str) -> String {
    format!("_{}", swift_key(keyword))
}

fn swift_key(keyword: &str) -> String {
    capitalize(&strip_tag(&space_to_underscore(keyword)))
}

fn resx_key(keyword: &str) -> String {
    capitalize(&camel_case(&strip_tag(&space_to_underscore(keyword))).replace('_', ""))
}

fn ios_constant(keyword: &str) -> String {
    format!("kLocale{}", swift_constant(keyword))
}

fn swift_constant(keyword: &str) -> String {
    camel_case(&strip_tag(&space_to_underscore(keyword)))
}

static ANDROID: WriterDescriptor = WriterDescriptor {
    platform: Platform::Android,
    smart_key: snake_case,
    placeholders: &PRINTF,
    escapes: ANDROID_ESCAPES,
    cardinality: Cardinality::PerLanguage,
    path: PathTemplate {
        default_language: "values/{file}",
        other_language: "values-{lang}/{file}",
        file: "strings.xml",
    },
    nesting: Nesting::Never,
    format: OutputFormat::AndroidXml(AndroidXml),
    skip_empty_values: false,
    constants: None,
};

static IOS: WriterDescriptor = WriterDescriptor {
    platform: Platform::Ios,
    smart_key: ios_key,
    placeholders: &APPLE,
    escapes: APPLE_ESCAPES,
    cardinality: Cardinality::PerLanguage,
    path: PathTemplate::same("{lang}.lproj/{file}", "Localizable.strings"),
    nesting: Nesting::Never,
    format: OutputFormat::AppleStrings(AppleStrings),
    skip_empty_values: false,
    constants: Some(ConstantsFile {
        path: "LocalizableConstants.h",
        format: OutputFormat::ObjcConstants(ObjcConstants),
        name: ios_constant,
    }),
};

static SWIFT: WriterDescriptor = WriterDescriptor {
    platform: Platform::Swift,
    smart_key: swift_key,
    placeholders: &APPLE,
    escapes: APPLE_ESCAPES,
    cardinality: Cardinality::PerLanguage,
    path: PathTemplate::same("{lang}.lproj/{file}", "Localizable.strings"),
    nesting: Nesting::Never,
    format: OutputFormat::AppleStrings(AppleStrings),
    skip_empty_values: false,
    constants: Some(ConstantsFile {
        path: "LocalizableConstants.swift",
        format: OutputFormat::SwiftConstants(SwiftConstants),
        name: swift_constant,
    }),
};

static JSON: WriterDescriptor = WriterDescriptor {
    platform: Platform::Json,
    smart_key: snake_case,
    placeholders: &PRINTF,
    escapes: NO_ESCAPES,
    cardinality: Cardinality::PerLanguage,
    path: PathTemplate::same("strings-{lang}.json", ""),
    nesting: Nesting::Optional,
    format: OutputFormat::JsonDocument(JsonDocument),
    skip_empty_values: false,
    constants: None,
};

static RAILS_YAML: WriterDescriptor = WriterDescriptor {
    platform: Platform::Rails,
    smart_key: snake_case,
    placeholders: &RAILS,
    escapes: YAML_ESCAPES,
    cardinality: Cardinality::PerLanguage,
    path: PathTemplate::same("{lang}.yml", ""),
    nesting: Nesting::Optional,
    format: OutputFormat::YamlDocument(YamlDocument),
    skip_empty_values: false,
    constants: None,
};

static RESX: WriterDescriptor = WriterDescriptor {
    platform: Platform::Resx,
    smart_key: resx_key,
    placeholders: &DOTNET,
    escapes: XML_ESCAPES,
    cardinality: Cardinality::PerLanguage,
    path: PathTemplate {
        default_language: "{file}.resx",
        other_language: "{file}.{lang}.resx",
        file: "Resources",
    },
    nesting: Nesting::Never,
    format: OutputFormat::ResxDocument(ResxDocument),
    skip_empty_values: false,
    constants: None,
};

static JAVA_PROPERTIES: WriterDescriptor = WriterDescriptor {
    platform: Platform::JavaProperties,
    smart_key: snake_case,
    placeholders: &PRINTF,
    escapes: PROPERTIES_ESCAPES,
    cardinality: Cardinality::PerLanguage,
    path: PathTemplate::same("language_{lang}.properties", ""),
    nesting: Nesting::Never,
    format: OutputFormat::JavaProperties(JavaProperties),
    skip_empty_values: false,
    constants: None,
};

static TWINE: WriterDescriptor = WriterDescriptor {
    platform: Platform::Twine,
    smart_key: snake_case,
    placeholders: &APPLE,
    escapes: NO_ESCAPES,
    cardinality: Cardinality::Single,
    path: PathTemplate::same("{file}", "strings.txt"),
    nesting: Nesting::Never,
    format: OutputFormat::TwineText(TwineText),
    skip_empty_values: false,
    constants: None,
};

static OEG: WriterDescriptor = WriterDescriptor {
    platform: Platform::Oeg,
    smart_key: snake_case,
    placeholders: &JS,
    escapes: JS_ESCAPES,
    cardinality: Cardinality::PerLanguage,
    path: PathTemplate::same("{lang}.js", ""),
    nesting: Nesting::Always,
    format: OutputFormat::JsModule(JsModule),
    skip_empty_values: true,
    constants: None,
};
