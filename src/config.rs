use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::placeholder::PlaceholderValues;
use crate::core::{ExtractOptions, KeyFilter, KeyFormatting, KeyPattern};
use crate::source::SourceFormat;
use crate::writers::{Platform, PlatformOptions};

pub const CONFIG_FILE_NAME: &str = ".localiorc.json";

/// Where the translation table is read from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceConfig {
    /// `.json`, `.csv` or `.tsv` table.
    pub path: Option<String>,
    /// Delimiter for `.csv` / `.tsv` tables.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_separator: Option<char>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub platforms: Vec<String>,
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default = "default_output_path")]
    pub output_path: String,
    #[serde(default = "default_formatting")]
    pub formatting: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub override_default: Option<String>,
    #[serde(default)]
    pub avoid_lang_downcase: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_languages: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub only: Option<KeyPattern>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub except: Option<KeyPattern>,
    #[serde(default)]
    pub platform_options: PlatformOptions,
    #[serde(default, skip_serializing_if = "PlaceholderValues::is_empty")]
    pub placeholder_values: PlaceholderValues,
}

fn default_output_path() -> String {
    "./out/".to_string()
}

fn default_formatting() -> String {
    KeyFormatting::default().to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            platforms: Vec::new(),
            source: SourceConfig::default(),
            output_path: default_output_path(),
            formatting: default_formatting(),
            override_default: None,
            avoid_lang_downcase: false,
            allowed_languages: None,
            only: None,
            except: None,
            platform_options: PlatformOptions::default(),
            placeholder_values: PlaceholderValues::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Platform ids, the formatting name, the key patterns and the source
    /// format are all checked here so that a bad config fails before any
    /// output is written.
    pub fn validate(&self) -> Result<()> {
        self.target_platforms()?;
        self.key_formatting()?;
        self.key_filter()?;
        if let Some(path) = &self.source.path {
            SourceFormat::detect(Path::new(path), self.source.column_separator)
                .context("Invalid 'source'")?;
        }
        Ok(())
    }

    pub fn target_platforms(&self) -> Result<Vec<Platform>> {
        self.platforms
            .iter()
            .map(|id| {
                id.parse::<Platform>()
                    .with_context(|| format!("Invalid entry in 'platforms': \"{}\"", id))
            })
            .collect()
    }

    pub fn key_formatting(&self) -> Result<KeyFormatting> {
        self.formatting
            .parse()
            .with_context(|| format!("Invalid 'formatting': \"{}\"", self.formatting))
    }

    pub fn key_filter(&self) -> Result<KeyFilter> {
        Ok(KeyFilter::from_patterns(
            self.only.as_ref(),
            self.except.as_ref(),
        )?)
    }

    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            override_default: self.override_default.clone(),
            avoid_lang_downcase: self.avoid_lang_downcase,
            allowed_languages: self.allowed_languages.clone(),
        }
    }
}

/// Starter config written by `localio init`.
pub fn default_config_json() -> Result<String> {
    let config = Config {
        platforms: vec![Platform::Android.to_string(), Platform::Ios.to_string()],
        source: SourceConfig {
            path: Some("translations.json".to_string()),
            ..Default::default()
        },
        ..Default::default()
    };
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the config file, `None` when defaults are in effect.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
