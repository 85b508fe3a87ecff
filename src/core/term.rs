//! Canonical in-memory model shared by extraction and the writers.

use std::{collections::HashMap, fmt, sync::LazyLock};

use regex::Regex;

static COMMENT_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\[comment\]\d*$").unwrap());

const SECTION_START_KEYWORD: &str = "[init-node]";
const SECTION_END_KEYWORD: &str = "[end-node]";

/// One translatable row of the source table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    /// Raw designator-column text, or a reserved marker such as `[comment]`.
    pub keyword: String,
    /// Raw cell text keyed by language code. Blank cells are stored as `""`.
    pub values: HashMap<String, String>,
}

impl Term {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            values: HashMap::new(),
        }
    }

    /// Builder-style helper to attach a value for `language`.
    pub fn with_value(mut self, language: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(language.into(), value.into());
        self
    }

    /// Raw value for `language`, `""` when the cell was blank or missing.
    pub fn value(&self, language: &str) -> &str {
        self.values.get(language).map(String::as_str).unwrap_or("")
    }

    /// `[comment]`, optionally followed by digits, in any case.
    pub fn is_comment(&self) -> bool {
        COMMENT_KEYWORD.is_match(&self.keyword)
    }

    /// `[init-node]`: opens a named section (used by Twine).
    pub fn is_section_start(&self) -> bool {
        self.keyword.eq_ignore_ascii_case(SECTION_START_KEYWORD)
    }

    /// `[end-node]`: closes the current section (used by Twine).
    pub fn is_section_end(&self) -> bool {
        self.keyword.eq_ignore_ascii_case(SECTION_END_KEYWORD)
    }

    /// Structural rows that never become a lookup key.
    pub fn is_section_marker(&self) -> bool {
        self.is_section_start() || self.is_section_end()
    }
}

/// A fully formatted and escaped rendering unit for one platform and language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Formatted key; `None` marks an annotation that is rendered as a comment.
    pub key: Option<String>,
    pub translation: String,
    pub language: String,
    /// Children of a nested branch; empty for leaves and flat output.
    pub nested: Vec<Segment>,
}

impl Segment {
    pub fn new(key: impl Into<String>, translation: impl Into<String>, language: &str) -> Self {
        Self {
            key: Some(key.into()),
            translation: translation.into(),
            language: language.to_string(),
            nested: Vec::new(),
        }
    }

    /// A keyed node whose value is its children.
    pub fn branch(key: impl Into<String>, nested: Vec<Segment>, language: &str) -> Self {
        Self {
            key: Some(key.into()),
            translation: String::new(),
            language: language.to_string(),
            nested,
        }
    }

    /// Annotation text as written in the table. Each renderer folds it into
    /// its own comment syntax.
    pub fn comment(text: impl Into<String>, language: &str) -> Self {
        Self {
            key: None,
            translation: text.into(),
            language: language.to_string(),
            nested: Vec::new(),
        }
    }

    pub fn is_comment(&self) -> bool {
        self.key.is_none()
    }

    pub fn is_branch(&self) -> bool {
        !self.nested.is_empty()
    }
}

/// Language code to source column, in detection order.
///
/// Re-inserting a code keeps its original position and updates the column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageMap {
    entries: Vec<(String, usize)>,
}

impl LanguageMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, code: impl Into<String>, column: usize) {
        let code = code.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == code) {
            Some(entry) => entry.1 = column,
            None => self.entries.push((code, column)),
        }
    }

    pub fn column(&self, code: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == code)
            .map(|(_, column)| *column)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.column(code).is_some()
    }

    pub fn first(&self) -> Option<&str> {
        self.entries.first().map(|(code, _)| code.as_str())
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(code, _)| code.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries
            .iter()
            .map(|(code, column)| (code.as_str(), *column))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, usize)> for LanguageMap {
    fn from_iter<I: IntoIterator<Item = (S, usize)>>(iter: I) -> Self {
        let mut map = LanguageMap::new();
        for (code, column) in iter {
            map.insert(code, column);
        }
        map
    }
}

impl fmt::Display for LanguageMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let codes: Vec<&str> = self.codes().collect();
        write!(f, "{}", codes.join(", "))
    }
}

/// Output of [`extract`](crate::core::extract::extract).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub terms: Vec<Term>,
    pub languages: LanguageMap,
    pub default_language: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_term_stores_values_by_language() {
        let term = Term::new("app_name").with_value("en", "My App");
        assert_eq!(term.keyword, "app_name");
        assert_eq!(term.value("en"), "My App");
        assert_eq!(term.value("fr"), "");
    }

    #[test]
    fn test_comment_predicate() {
        assert!(Term::new("[comment]").is_comment());
        assert!(Term::new("[COMMENT]").is_comment());
        assert!(Term::new("[Comment]42").is_comment());
        assert!(!Term::new("[comment]x").is_comment());
        assert!(!Term::new("app_name").is_comment());
        assert!(!Term::new("[comments]").is_comment());
    }

    #[test]
    fn test_comment_predicate_ignores_values() {
        let term = Term::new("[comment]");
        assert!(term.values.is_empty());
        assert!(term.is_comment());
    }

    #[test]
    fn test_section_markers() {
        assert!(Term::new("[init-node]").is_section_start());
        assert!(Term::new("[END-NODE]").is_section_end());
        assert!(!Term::new("[comment]").is_section_marker());
    }

    #[test]
    fn test_segment_comment() {
        let segment = Segment::comment("Section General", "en");
        assert!(segment.is_comment());
        assert!(!Segment::new("app_name", "My App", "en").is_comment());
    }

    #[test]
    fn test_segment_branch() {
        let branch = Segment::branch("home", vec![Segment::new("title", "Home", "en")], "en");
        assert!(branch.is_branch());
        assert!(!branch.is_comment());
        assert_eq!(branch.translation, "");
        assert!(!Segment::new("title", "Home", "en").is_branch());
    }

    #[test]
    fn test_language_map_keeps_first_position_on_reinsert() {
        let mut languages = LanguageMap::new();
        languages.insert("en", 1);
        languages.insert("es", 2);
        languages.insert("en", 3);

        assert_eq!(languages.codes().collect::<Vec<_>>(), vec!["en", "es"]);
        assert_eq!(languages.column("en"), Some(3));
        assert_eq!(languages.first(), Some("en"));
        assert_eq!(languages.to_string(), "en, es");
    }
}
