//! Key formatting strategies.
//!
//! A strategy maps a raw keyword from the table to the identifier written in
//! the output file. `smart` defers to the platform, since each target has its
//! own conventions (`app_name` on Android, `_App_name` in `.strings` files).

use std::{fmt, str::FromStr};

use super::error::Error;
use crate::utils::{camel_case, space_to_underscore, strip_tag, underscore};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum KeyFormatting {
    /// Keys are used exactly as written.
    None,
    /// `hello world` -> `HelloWorld`
    CamelCase,
    /// `Hello World` -> `hello_world`
    SnakeCase,
    /// `Hello NameTitle` -> `hello_name_title`
    FullSnakeCase,
    /// Platform best practice.
    #[default]
    Smart,
}

impl KeyFormatting {
    pub const ALL: [KeyFormatting; 5] = [
        KeyFormatting::Smart,
        KeyFormatting::None,
        KeyFormatting::CamelCase,
        KeyFormatting::SnakeCase,
        KeyFormatting::FullSnakeCase,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            KeyFormatting::None => "none",
            KeyFormatting::CamelCase => "camel_case",
            KeyFormatting::SnakeCase => "snake_case",
            KeyFormatting::FullSnakeCase => "full_snake_case",
            KeyFormatting::Smart => "smart",
        }
    }
}

impl fmt::Display for KeyFormatting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeyFormatting {
    type Err = Error;

    /// Accepts snake_case and camelCase spellings.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "none" => Ok(KeyFormatting::None),
            "camel_case" | "camelCase" => Ok(KeyFormatting::CamelCase),
            "snake_case" | "snakeCase" => Ok(KeyFormatting::SnakeCase),
            "full_snake_case" | "fullSnakeCase" => Ok(KeyFormatting::FullSnakeCase),
            "smart" => Ok(KeyFormatting::Smart),
            other => {
                let supported: Vec<&str> = Self::ALL.iter().map(KeyFormatting::as_str).collect();
                Err(Error::config(format!(
                    "unknown formatting '{}'. Must use {}",
                    other,
                    supported.join(", ")
                )))
            }
        }
    }
}

/// Format `keyword` with `formatting`, delegating `smart` to `platform_default`.
pub fn format_key(
    keyword: &str,
    formatting: KeyFormatting,
    platform_default: impl Fn(&str) -> String,
) -> String {
    match formatting {
        KeyFormatting::None => keyword.to_string(),
        KeyFormatting::CamelCase => camel_case(&strip_tag(&space_to_underscore(keyword))),
        KeyFormatting::SnakeCase => snake_case(keyword),
        KeyFormatting::FullSnakeCase => full_snake_case(keyword),
        KeyFormatting::Smart => platform_default(keyword),
    }
}

/// Lower-cased before tag stripping, so the result never starts with a tag
/// and formatting it again is a no-op.
pub fn snake_case(keyword: &str) -> String {
    strip_tag(&space_to_underscore(keyword).to_lowercase())
}

pub fn full_snake_case(keyword: &str) -> String {
    space_to_underscore(keyword)
        .split('_')
        .map(underscore)
        .collect::<Vec<_>>()
        .join("_")
}
