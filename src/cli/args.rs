//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `generate`: Read the translation table and write every configured platform
//! - `init`: Initialize a localio configuration file
//! - `platforms`: List the supported platforms and where they write

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::config::Config;
use crate::core::KeyPattern;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Default, Parser)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Target platform (overrides config file)
    /// Can be specified multiple times: --platform android --platform ios
    #[arg(short, long = "platform", value_name = "PLATFORM")]
    pub platforms: Vec<String>,

    /// Source table path (overrides config file)
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Output directory (overrides config file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Column delimiter for .csv / .tsv sources
    #[arg(long, value_name = "CHAR")]
    pub column_separator: Option<char>,

    /// Key formatting: smart, none, camel_case, snake_case, full_snake_case
    #[arg(long)]
    pub formatting: Option<String>,

    /// Only keep keys matching this regular expression
    #[arg(long, value_name = "PATTERN")]
    pub only: Option<String>,

    /// Drop keys matching this regular expression
    #[arg(long, value_name = "PATTERN")]
    pub except: Option<String>,

    /// Use this language as default regardless of the `*` marker
    #[arg(long, value_name = "LANG")]
    pub override_default: Option<String>,

    /// Keep language codes exactly as written in the header row
    #[arg(long)]
    pub avoid_lang_downcase: bool,
}

impl GenerateArgs {
    /// Command line values win over the config file.
    pub fn apply_to(&self, config: &mut Config) {
        if !self.platforms.is_empty() {
            config.platforms = self.platforms.clone();
        }
        if let Some(source) = &self.source {
            config.source.path = Some(source.display().to_string());
        }
        if let Some(separator) = self.column_separator {
            config.source.column_separator = Some(separator);
        }
        if let Some(output) = &self.output {
            config.output_path = output.display().to_string();
        }
        if let Some(formatting) = &self.formatting {
            config.formatting = formatting.clone();
        }
        if let Some(only) = &self.only {
            config.only = Some(KeyPattern::new(only.as_str()));
        }
        if let Some(except) = &self.except {
            config.except = Some(KeyPattern::new(except.as_str()));
        }
        if let Some(language) = &self.override_default {
            config.override_default = Some(language.clone());
        }
        if self.avoid_lang_downcase {
            config.avoid_lang_downcase = true;
        }
    }
}

#[derive(Debug, Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub args: GenerateArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write localization files for every configured platform
    Generate(GenerateCommand),
    /// Initialize a new .localiorc.json configuration file
    Init,
    /// List supported platforms and their output files
    Platforms,
}
