use thiserror::Error;

/// Fatal conditions raised by the extraction and formatting pipeline.
///
/// Both variants abort the run before any artifact for the affected
/// platform is emitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Missing or unsupported option: unknown platform, unknown key
    /// formatting, no language columns, missing source path.
    #[error("configuration error: {0}")]
    Config(String),

    /// The table does not follow the `[key]` ... `[end]` layout.
    #[error("invalid format: {0}")]
    Format(String),
}

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config(message.into())
    }

    pub fn format(message: impl Into<String>) -> Self {
        Error::Format(message.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
