use crate::error::ConfigError;

pub const DEFAULT_QUOTE: char = '"';
pub const SEPARATOR: char = '.';

/// Quoting convention shared by the splitter, parser and formatter.
///
/// Operations on the default syntax are also exposed as free functions
/// (`split_qualified_string`, `parse`, `format`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NameSyntax {
    quote: char,
}

impl NameSyntax {
    pub fn new(quote: char) -> Result<Self, ConfigError> {
        if quote == SEPARATOR {
            return Err(ConfigError::QuoteIsSeparator { quote });
        }
        Ok(Self { quote })
    }

    #[must_use]
    pub const fn quote(&self) -> char {
        self.quote
    }
}

impl Default for NameSyntax {
    fn default() -> Self {
        Self {
            quote: DEFAULT_QUOTE,
        }
    }
}
