//! Text helpers shared by the key formatters and the writers.
//!
//! These are plain functions over `&str`; key formatting strategies compose
//! them explicitly instead of hanging them off `String`.

use std::sync::LazyLock;

use regex::Regex;

static LEADING_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\[[a-z]\])+").unwrap());

static ESCAPED_FORMULA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[`\\]([+=])").unwrap());

static ACRONYM_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z]+)([A-Z][a-z])").unwrap());

static WORD_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z\d])([A-Z])").unwrap());

/// Replaces every space with an underscore.
pub fn space_to_underscore(text: &str) -> String {
    text.replace(' ', "_")
}

/// Removes leading single-lowercase-letter bracket tags such as `[a]`.
///
/// Multi-letter tags (`[comment]`) and tags that are not at the start are
/// left alone.
///
/// ```
/// use localio::utils::strip_tag;
///
/// assert_eq!(strip_tag("[a]hello"), "hello");
/// assert_eq!(strip_tag("[comment]hello"), "[comment]hello");
/// assert_eq!(strip_tag("hello[a]"), "hello[a]");
/// ```
pub fn strip_tag(text: &str) -> String {
    LEADING_TAG.replace(text, "").into_owned()
}

/// Upper-cases the first character and lower-cases the rest.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Joins underscore-separated pieces as `CapitalizedPieces`.
///
/// Text without underscores that already carries an uppercase letter is
/// assumed to be camel cased and returned as is.
pub fn camel_case(text: &str) -> String {
    if !text.contains('_') && text.chars().any(|c| c.is_ascii_uppercase()) {
        return text.to_string();
    }
    text.split('_').map(capitalize).collect()
}

/// Converts `CamelCase` words into `snake_case`.
///
/// ```
/// use localio::utils::underscore;
///
/// assert_eq!(underscore("HelloWorld"), "hello_world");
/// assert_eq!(underscore("HTTPServer"), "http_server");
/// ```
pub fn underscore(text: &str) -> String {
    let text = text.replace("::", "/");
    let text = ACRONYM_BOUNDARY.replace_all(&text, "${1}_${2}");
    let text = WORD_BOUNDARY.replace_all(&text, "${1}_${2}");
    text.replace('-', "_").to_lowercase()
}

/// Drops the back-tick or backslash spreadsheets need in front of a leading
/// `+` or `=` so the cell is not read as a formula.
pub fn replace_escaped(text: &str) -> String {
    ESCAPED_FORMULA.replace_all(text, "${1}").into_owned()
}

#[cfg(test)]
mod tests {
    use crate::utils::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_space_to_underscore() {
        assert_eq!(space_to_underscore("hello world"), "hello_world");
        assert_eq!(space_to_underscore("hello"), "hello");
        assert_eq!(space_to_underscore(" settings  title"), "_settings__title");
    }

    #[test]
    fn test_strip_tag() {
        assert_eq!(strip_tag("[a]hello"), "hello");
        assert_eq!(strip_tag("[a][b]hello"), "hello");
        assert_eq!(strip_tag("[comment]hello"), "[comment]hello");
        assert_eq!(strip_tag("[A]hello"), "[A]hello");
        assert_eq!(strip_tag("hello[a]"), "hello[a]");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("app_NAME"), "App_name");
        assert_eq!(capitalize("élan"), "Élan");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("hello_world"), "HelloWorld");
        assert_eq!(camel_case("HelloWorld"), "HelloWorld");
        assert_eq!(camel_case("hello"), "Hello");
        assert_eq!(camel_case("SETTINGS_title"), "SettingsTitle");
    }

    #[test]
    fn test_underscore() {
        assert_eq!(underscore("HelloWorld"), "hello_world");
        assert_eq!(underscore("appName"), "app_name");
        assert_eq!(underscore("HTMLParser"), "html_parser");
        assert_eq!(underscore("dash-case"), "dash_case");
    }

    #[test]
    fn test_replace_escaped() {
        assert_eq!(replace_escaped("a`+b"), "a+b");
        assert_eq!(replace_escaped("a`=b"), "a=b");
        assert_eq!(replace_escaped("a\\+b"), "a+b");
        assert_eq!(replace_escaped("1 + 1 = 2"), "1 + 1 = 2");
    }
}
