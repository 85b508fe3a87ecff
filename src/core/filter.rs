//! `only` / `except` keyword selection.

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::error::{Error, Result};
use super::term::Term;

/// A keyword pattern as written in the config file: `{ "keys": "app_" }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct KeyPattern {
    pub keys: Option<String>,
}

impl KeyPattern {
    pub fn new(keys: impl Into<String>) -> Self {
        Self {
            keys: Some(keys.into()),
        }
    }
}

/// Compiled inclusion and exclusion patterns.
///
/// Inclusion runs first; exclusion then only sees what inclusion kept.
#[derive(Debug, Clone, Default)]
pub struct KeyFilter {
    only: Option<Regex>,
    except: Option<Regex>,
}

impl KeyFilter {
    pub fn new(only: Option<&str>, except: Option<&str>) -> Result<Self> {
        Ok(Self {
            only: only.map(|pattern| compile("only", pattern)).transpose()?,
            except: except.map(|pattern| compile("except", pattern)).transpose()?,
        })
    }

    pub fn from_patterns(only: Option<&KeyPattern>, except: Option<&KeyPattern>) -> Result<Self> {
        Self::new(
            only.and_then(|pattern| pattern.keys.as_deref()),
            except.and_then(|pattern| pattern.keys.as_deref()),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.only.is_none() && self.except.is_none()
    }

    pub fn apply(&self, terms: Vec<Term>) -> Vec<Term> {
        let included: Vec<Term> = match &self.only {
            Some(only) => terms
                .into_iter()
                .filter(|term| only.is_match(&term.keyword))
                .collect(),
            None => terms,
        };

        match &self.except {
            Some(except) => included
                .into_iter()
                .filter(|term| !except.is_match(&term.keyword))
                .collect(),
            None => included,
        }
    }
}

fn compile(name: &str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern)
        .map_err(|err| Error::config(format!("invalid '{}' pattern \"{}\": {}", name, pattern, err)))
}

/// One-shot helper: compile `only` / `except` and filter `terms`.
pub fn apply_filter(terms: Vec<Term>, only: Option<&str>, except: Option<&str>) -> Result<Vec<Term>> {
    Ok(KeyFilter::new(only, except)?.apply(terms))
}
