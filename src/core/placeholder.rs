//! Neutral placeholder grammar and per-platform escaping.
//!
//! Translators write positional arguments as `<s$1>` (string), `<d$2>`
//! (integer) or `<c$3>` (character). The legacy `<$1>` form is a string.
//! Each platform supplies a [`PlaceholderTable`] that renders those tokens in
//! its own format-string syntax, and an escape list applied afterwards.

use std::{collections::BTreeMap, sync::LazyLock};

use regex::{Captures, Regex};

use crate::utils::replace_escaped;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<([sdc]?)\$(\d+)>").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderKind {
    String,
    Integer,
    Character,
}

impl PlaceholderKind {
    fn from_tag(tag: &str) -> Self {
        match tag {
            "d" => PlaceholderKind::Integer,
            "c" => PlaceholderKind::Character,
            _ => PlaceholderKind::String,
        }
    }
}

/// How one platform spells a positional argument.
#[derive(Debug)]
pub struct PlaceholderTable {
    /// Receives the kind and the 1-based index from the source text.
    pub render: fn(PlaceholderKind, u64) -> String,
}

/// `%1$s`, `%2$d`, `%3$c` (Java / Android `String.format`).
pub static PRINTF: PlaceholderTable = PlaceholderTable {
    render: |kind, index| match kind {
        PlaceholderKind::String => format!("%{index}$s"),
        PlaceholderKind::Integer => format!("%{index}$d"),
        PlaceholderKind::Character => format!("%{index}$c"),
    },
};

/// `%1$@`, `%2$d`, `%3$s` (Foundation format strings).
pub static APPLE: PlaceholderTable = PlaceholderTable {
    render: |kind, index| match kind {
        PlaceholderKind::String => format!("%{index}$@"),
        PlaceholderKind::Integer => format!("%{index}$d"),
        PlaceholderKind::Character => format!("%{index}$s"),
    },
};

/// `%{arg1}` (Rails I18n interpolation).
pub static RAILS: PlaceholderTable = PlaceholderTable {
    render: |_, index| format!("%{{arg{index}}}"),
};

/// `{0}` (.NET composite formatting is zero-based).
pub static DOTNET: PlaceholderTable = PlaceholderTable {
    render: |_, index| format!("{{{}}}", index.saturating_sub(1)),
};

/// `%@1` (JS string helpers).
pub static JS: PlaceholderTable = PlaceholderTable {
    render: |_, index| format!("%@{index}"),
};

/// Ordered literal replacements applied after placeholder translation.
pub type EscapeTable = &'static [(&'static str, &'static str)];

pub const NO_ESCAPES: EscapeTable = &[];

/// `&` goes first so the entities produced later are not escaped twice.
pub const ANDROID_ESCAPES: EscapeTable = &[
    ("&", "&amp;"),
    ("<", "&lt;"),
    (">", "&gt;"),
    ("'", "\\'"),
    ("\"", "\\\""),
    ("...", "…"),
    ("%@", "%s"),
];

pub const XML_ESCAPES: EscapeTable = &[("&", "&amp;"), ("<", "&lt;"), (">", "&gt;")];

pub const APPLE_ESCAPES: EscapeTable = &[("\"", "\\\""), ("\n", "\\n")];

pub const YAML_ESCAPES: EscapeTable = &[("\\", "\\\\"), ("\"", "\\\""), ("\n", "\\n")];

pub const PROPERTIES_ESCAPES: EscapeTable = &[("\\", "\\\\"), ("\n", "\\n")];

/// Spreadsheet-style doubled quotes collapse first, then every quote is escaped.
pub const JS_ESCAPES: EscapeTable = &[("\"\"", "\""), ("\"", "\\\""), ("\n", "\\n")];

/// Replace every neutral placeholder in `text` using `table`.
///
/// Indices too large to represent are left untouched.
pub fn translate(text: &str, table: &PlaceholderTable) -> String {
    PLACEHOLDER
        .replace_all(text, |caps: &Captures| match caps[2].parse::<u64>() {
            Ok(index) => (table.render)(PlaceholderKind::from_tag(&caps[1]), index),
            Err(_) => caps[0].to_string(),
        })
        .into_owned()
}

pub fn escape(text: &str, escapes: EscapeTable) -> String {
    escapes
        .iter()
        .fold(text.to_string(), |acc, (from, to)| acc.replace(from, to))
}

/// Literal token substitutions supplied at run time, e.g. `{app}` -> `Acme`.
pub type PlaceholderValues = BTreeMap<String, String>;

/// Full translation pipeline for one cell.
///
/// Formula guards are removed, runtime values substituted, neutral
/// placeholders translated, and only then is the platform escaping applied.
pub fn prepare(
    raw: &str,
    table: &PlaceholderTable,
    escapes: EscapeTable,
    values: Option<&PlaceholderValues>,
) -> String {
    let mut text = replace_escaped(raw);
    if let Some(values) = values {
        for (token, value) in values {
            text = text.replace(token.as_str(), value);
        }
    }
    escape(&translate(&text, table), escapes)
}
