//! Console output for the CLI.
//!
//! Separate from the core so localio can be used as a library without
//! printing anything.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use colored::Colorize;

use crate::config::CONFIG_FILE_NAME;
use crate::core::Extraction;
use crate::writers::Platform;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print which config file is in effect (verbose only).
pub fn print_config_source(path: Option<&Path>, verbose: bool) {
    print_config_source_to(path, verbose, &mut io::stdout().lock());
}

pub fn print_config_source_to<W: Write>(path: Option<&Path>, verbose: bool, writer: &mut W) {
    if !verbose {
        return;
    }
    let _ = match path {
        Some(path) => writeln!(writer, "Using config {}", path.display().to_string().cyan()),
        None => writeln!(
            writer,
            "No {} found, using defaults and command line options",
            CONFIG_FILE_NAME
        ),
    };
}

pub fn print_extraction(extraction: &Extraction) {
    print_extraction_to(extraction, &mut io::stdout().lock());
}

/// `Languages detected: en, es -- using en as default.` plus the term count.
pub fn print_extraction_to<W: Write>(extraction: &Extraction, writer: &mut W) {
    let _ = writeln!(
        writer,
        "Languages detected: {} -- using {} as default.",
        extraction.languages,
        extraction.default_language.bold()
    );
    let _ = writeln!(
        writer,
        "Loaded {} {}.",
        extraction.terms.len(),
        if extraction.terms.len() == 1 {
            "term"
        } else {
            "terms"
        }
    );
}

pub fn print_filter(only: Option<&str>, except: Option<&str>, kept: usize, verbose: bool) {
    print_filter_to(only, except, kept, verbose, &mut io::stdout().lock());
}

pub fn print_filter_to<W: Write>(
    only: Option<&str>,
    except: Option<&str>,
    kept: usize,
    verbose: bool,
    writer: &mut W,
) {
    if !verbose || (only.is_none() && except.is_none()) {
        return;
    }
    if let Some(only) = only {
        let _ = writeln!(writer, "Only keys matching {}", only.cyan());
    }
    if let Some(except) = except {
        let _ = writeln!(writer, "Except keys matching {}", except.cyan());
    }
    let _ = writeln!(writer, "{} terms kept after filtering.", kept);
}

pub fn print_writing(platform: Platform) {
    print_writing_to(platform, &mut io::stdout().lock());
}

pub fn print_writing_to<W: Write>(platform: Platform, writer: &mut W) {
    let _ = writeln!(writer, "Writing {} translations...", platform);
}

pub fn print_artifacts(paths: &[PathBuf], output_path: &Path) {
    print_artifacts_to(paths, output_path, &mut io::stdout().lock());
}

/// One ` > path` line per written file, relative to the output directory.
pub fn print_artifacts_to<W: Write>(paths: &[PathBuf], output_path: &Path, writer: &mut W) {
    for path in paths {
        let shown = path.strip_prefix(output_path).unwrap_or(path);
        let _ = writeln!(writer, " > {}", shown.display().to_string().yellow());
    }
}

pub fn print_generated(files: usize, platforms: usize) {
    print_generated_to(files, platforms, &mut io::stdout().lock());
}

pub fn print_generated_to<W: Write>(files: usize, platforms: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Generated {} {} for {} {}",
            files,
            if files == 1 { "file" } else { "files" },
            platforms,
            if platforms == 1 { "platform" } else { "platforms" }
        )
        .green()
    );
}

pub fn print_platforms() {
    print_platforms_to(&mut io::stdout().lock());
}

/// Supported ids with the default-language and other-language paths.
pub fn print_platforms_to<W: Write>(writer: &mut W) {
    for platform in Platform::ALL {
        let path = &platform.descriptor().path;
        let default = path.resolve("{lang}", true, None);
        let other = path.resolve("{lang}", false, None);
        let layout = if default == other {
            default
        } else {
            format!("{}, {}", default, other)
        };
        let _ = writeln!(writer, "{:<16} {}", platform.id().bold(), layout);
    }
}
