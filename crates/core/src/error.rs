use std::fmt;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Split(#[from] SplitError),
    #[error(transparent)]
    Template(#[from] TemplateError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Structural malformation found while splitting a dotted name.
///
/// Both variants carry the segments recovered before the failure. They exist
/// for diagnostics only: a split that produced an error has no valid result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplitError {
    #[error("malformed name `{input}`: unterminated quoted segment")]
    UnterminatedQuote { input: String, partial: Vec<String> },
    #[error("malformed name `{input}`: {reason}")]
    MalformedSeparator {
        input: String,
        reason: SeparatorIssue,
        partial: Vec<String>,
    },
}

impl SplitError {
    #[must_use]
    pub fn input(&self) -> &str {
        match self {
            Self::UnterminatedQuote { input, .. } | Self::MalformedSeparator { input, .. } => input,
        }
    }

    #[must_use]
    pub fn partial_segments(&self) -> &[String] {
        match self {
            Self::UnterminatedQuote { partial, .. } | Self::MalformedSeparator { partial, .. } => {
                partial
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeparatorIssue {
    /// The name ends with a separator.
    TrailingSeparator,
    /// Text follows a closing quote and no separator comes after it.
    MissingSeparatorAfterQuote,
    /// Text sits between a closing quote and the next separator.
    TextBeforeSeparator,
}

impl fmt::Display for SeparatorIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::TrailingSeparator => "trailing separator without following content",
            Self::MissingSeparatorAfterQuote => {
                "content after closing quote must be followed by a separator"
            }
            Self::TextBeforeSeparator => "unexpected characters between closing quote and separator",
        };
        f.write_str(message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("template has {placeholders} placeholder(s) but {values} value(s) were supplied")]
    ArityMismatch { placeholders: usize, values: usize },
    #[error("unbalanced brace at byte offset {offset} in template")]
    UnbalancedBrace { offset: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("quote character `{quote}` cannot be the separator `.`")]
    QuoteIsSeparator { quote: char },
}
