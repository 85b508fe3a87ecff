use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::Result;
use colored::Colorize;

use super::{
    args::{Arguments, Command, GenerateCommand},
    exit_status::ExitStatus,
    report::{self, SUCCESS_MARK},
};
use crate::config::{CONFIG_FILE_NAME, ConfigLoadResult, default_config_json, load_config};
use crate::core::{self, Error, Extraction};
use crate::source;
use crate::writers::{self, WriteRequest};

pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Generate(cmd)) => generate(cmd),
        Some(Command::Init) => init(),
        Some(Command::Platforms) => {
            report::print_platforms();
            Ok(ExitStatus::Success)
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}

/// Load, extract, filter, then write each platform in turn.
///
/// A failure aborts the run; files already written for earlier platforms stay.
fn generate(GenerateCommand { args }: GenerateCommand) -> Result<ExitStatus> {
    let verbose = args.common.verbose;
    let ConfigLoadResult { mut config, path } = load_config(&env::current_dir()?)?;
    args.apply_to(&mut config);
    config.validate()?;
    report::print_config_source(path.as_deref(), verbose);

    let platforms = config.target_platforms()?;
    if platforms.is_empty() {
        return Err(Error::config(format!(
            "no platform selected. Add \"platforms\" to {} or pass --platform",
            CONFIG_FILE_NAME
        ))
        .into());
    }
    let formatting = config.key_formatting()?;
    let filter = config.key_filter()?;

    let grid = source::load(&config.source)?;
    let extraction = core::extract(&grid, &config.extract_options())?;
    report::print_extraction(&extraction);

    let Extraction {
        terms,
        languages,
        default_language,
    } = extraction;
    let terms = filter.apply(terms);
    report::print_filter(
        config.only.as_ref().and_then(|p| p.keys.as_deref()),
        config.except.as_ref().and_then(|p| p.keys.as_deref()),
        terms.len(),
        verbose,
    );

    let request = WriteRequest {
        languages: &languages,
        default_language: &default_language,
        terms: &terms,
        formatting,
        options: &config.platform_options,
        placeholder_values: Some(&config.placeholder_values),
    };
    let output_path = PathBuf::from(&config.output_path);

    let mut written = 0;
    for platform in &platforms {
        report::print_writing(*platform);
        let paths = writers::write(platform.id(), &request, &output_path)?;
        report::print_artifacts(&paths, &output_path);
        written += paths.len();
    }

    report::print_generated(written, platforms.len());
    Ok(ExitStatus::Success)
}

fn init() -> Result<ExitStatus> {
    let config_path = Path::new(CONFIG_FILE_NAME);

    if config_path.exists() {
        eprintln!("Error: {} already exists", CONFIG_FILE_NAME);
        return Ok(ExitStatus::Failure);
    }

    fs::write(config_path, format!("{}\n", default_config_json()?))?;
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", CONFIG_FILE_NAME).green()
    );

    Ok(ExitStatus::Success)
}
