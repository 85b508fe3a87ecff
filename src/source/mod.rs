//! Table access for the extractor.
//!
//! Concrete spreadsheet back ends only need to expose decoded cell text
//! through [`Table`]; the extractor never sees files or network handles.
//! [`load`] picks the reader from the file extension: `.json` grids, or
//! `.csv` / `.tsv` delimited text.

mod csv;
mod json;

use std::path::Path;

use anyhow::Result;

pub use self::csv::parse_delimited;
pub use self::json::parse_grid;

use crate::config::SourceConfig;
use crate::core::Error;

/// File layouts the source can be read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Delimited { separator: u8 },
}

impl SourceFormat {
    /// Pick the format from the extension, with `column_separator` replacing
    /// the default `,` (or tab for `.tsv`).
    pub fn detect(path: &Path, column_separator: Option<char>) -> Result<Self, Error> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let default_separator = match extension.as_deref() {
            Some("json") => return Ok(Self::Json),
            Some("csv") => b',',
            Some("tsv") => b'\t',
            _ => {
                return Err(Error::config(format!(
                    "unsupported source file '{}'. Use a .json, .csv or .tsv table",
                    path.display()
                )));
            }
        };

        let separator = match column_separator {
            None => default_separator,
            Some(separator) if separator.is_ascii() => separator as u8,
            Some(separator) => {
                return Err(Error::config(format!(
                    "column separator '{}' must be a single ASCII character",
                    separator
                )));
            }
        };
        Ok(Self::Delimited { separator })
    }
}

/// Load the grid named by the source configuration.
///
/// A missing `path` or an unknown extension is a configuration error; read
/// and parse failures carry the file path as context.
pub fn load(source: &SourceConfig) -> Result<Grid> {
    let path = source.path.as_deref().ok_or_else(|| {
        Error::config("source path is missing, and it is required to read the translation table")
    })?;
    let path = Path::new(path);

    match SourceFormat::detect(path, source.column_separator)? {
        SourceFormat::Json => json::load_file(path),
        SourceFormat::Delimited { separator } => self::csv::load_file(path, separator),
    }
}

/// Read-only, already decoded view over a grid of cells.
pub trait Table {
    fn row_count(&self) -> usize;

    /// Number of cells in `row`. Rows may be ragged.
    fn column_count(&self, row: usize) -> usize;

    /// Cell text, `""` for blank or out-of-range cells.
    fn cell(&self, row: usize, column: usize) -> &str;
}

/// In-memory table of owned rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<String>>,
}

impl Grid {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Convenience constructor for literal tables.
    pub fn from_rows<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }
}

impl Table for Grid {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn column_count(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, Vec::len)
    }

    fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .map_or("", String::as_str)
    }
}
