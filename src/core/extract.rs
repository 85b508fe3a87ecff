//! Turns a `[key]` ... `[end]` delimited table into terms and languages.
//!
//! ## Table layout
//!
//! ```text
//!  A          B      C     D
//!  Title      ...
//!  [key]      *en    es    fr      <- header row, `*` marks the default language
//!  [comment]  Section General
//!  app_name   My App Mi App Mon App
//!  ...
//!  [end]
//! ```
//!
//! Only column A is scanned for markers. Rows strictly between the first
//! `[key]` and the last `[end]` with a non-blank keyword become [`Term`]s.

use super::error::{Error, Result};
use super::term::{Extraction, LanguageMap, Term};
use crate::source::Table;

const DESIGNATOR_COLUMN: usize = 0;
const START_MARKER: &str = "[key]";
const END_MARKER: &str = "[end]";
const DEFAULT_MARK: char = '*';

/// Options that tune language detection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Forces the default language, regardless of header markers.
    pub override_default: Option<String>,
    /// Keep language codes exactly as written in the header.
    pub avoid_lang_downcase: bool,
    /// When set, header codes outside this list are ignored.
    pub allowed_languages: Option<Vec<String>>,
}

/// Parse `table` into an [`Extraction`].
///
/// # Errors
///
/// - [`Error::Format`] when `[key]` or `[end]` is missing, or `[end]` comes first
/// - [`Error::Config`] when the header row yields no language
pub fn extract<T: Table + ?Sized>(table: &T, options: &ExtractOptions) -> Result<Extraction> {
    let (start, end) = find_bounds(table)?;
    let (languages, marked_default) = detect_languages(table, start, options);

    let Some(first_language) = languages.first() else {
        return Err(Error::config(
            "there are no language columns in the [key] row",
        ));
    };

    let default_language = options
        .override_default
        .clone()
        .or(marked_default)
        .unwrap_or_else(|| first_language.to_string());

    let terms = ((start + 1)..end)
        .filter_map(|row| read_term(table, row, &languages))
        .collect();

    Ok(Extraction {
        terms,
        languages,
        default_language,
    })
}

/// Row indices of the first `[key]` and the last `[end]` marker.
fn find_bounds<T: Table + ?Sized>(table: &T) -> Result<(usize, usize)> {
    let mut start = None;
    let mut end = None;

    for row in 0..table.row_count() {
        let designator = table.cell(row, DESIGNATOR_COLUMN).trim();
        if start.is_none() && designator.eq_ignore_ascii_case(START_MARKER) {
            start = Some(row);
        }
        if designator.eq_ignore_ascii_case(END_MARKER) {
            end = Some(row);
        }
    }

    let start = start.ok_or_else(|| {
        Error::format("could not find any [key] keyword in the first column")
    })?;
    let end =
        end.ok_or_else(|| Error::format("could not find any [end] keyword in the first column"))?;

    if end < start {
        return Err(Error::format("[end] must not be before [key] in the first column"));
    }

    Ok((start, end))
}

/// Reads language codes from the header row.
///
/// Header cells may hold several space-separated codes. Returns the map and
/// the code carrying the `*` marker, if any.
fn detect_languages<T: Table + ?Sized>(
    table: &T,
    header_row: usize,
    options: &ExtractOptions,
) -> (LanguageMap, Option<String>) {
    let mut languages = LanguageMap::new();
    let mut marked_default = None;

    for column in (DESIGNATOR_COLUMN + 1)..table.column_count(header_row) {
        for token in table.cell(header_row, column).split_whitespace() {
            let is_default = token.contains(DEFAULT_MARK);
            let code: String = token.chars().filter(|c| *c != DEFAULT_MARK).collect();
            if code.is_empty() {
                continue;
            }
            let code = if options.avoid_lang_downcase {
                code
            } else {
                code.to_lowercase()
            };

            let allowed = options
                .allowed_languages
                .as_ref()
                .is_none_or(|allowed| allowed.iter().any(|lang| *lang == code));
            if !allowed {
                continue;
            }

            if is_default {
                marked_default = Some(code.clone());
            }
            languages.insert(code, column);
        }
    }

    (languages, marked_default)
}

fn read_term<T: Table + ?Sized>(table: &T, row: usize, languages: &LanguageMap) -> Option<Term> {
    let keyword = table.cell(row, DESIGNATOR_COLUMN);
    if keyword.trim().is_empty() {
        return None;
    }

    let mut term = Term::new(keyword);
    for (code, column) in languages.iter() {
        term.values
            .insert(code.to_string(), table.cell(row, column).to_string());
    }
    Some(term)
}
