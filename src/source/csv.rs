use std::{fs, path::Path};

use ::csv::ReaderBuilder;
use anyhow::{Context, Result};

use super::Grid;

pub(super) fn load_file(path: &Path, separator: u8) -> Result<Grid> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read source file: {}", path.display()))?;
    parse_delimited(&content, separator)
        .with_context(|| format!("Failed to parse source file: {}", path.display()))
}

/// Parse delimited text into a [`Grid`].
///
/// There is no header row; `[key]` is found by scanning. Rows may have
/// different lengths, and quoted cells may span lines.
pub fn parse_delimited(content: &str, separator: u8) -> Result<Grid> {
    let mut reader = ReaderBuilder::new()
        .delimiter(separator)
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let rows = reader
        .records()
        .enumerate()
        .map(|(index, record)| {
            let record = record.with_context(|| format!("Row {} of the source table", index + 1))?;
            Ok(record.iter().map(str::to_string).collect())
        })
        .collect::<Result<Vec<Vec<String>>>>()?;

    Ok(Grid::new(rows))
}
