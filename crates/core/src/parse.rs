use std::str::FromStr;

use tracing::debug;

use crate::{
    config::NameSyntax,
    error::SplitError,
    name::{MAX_LEVELS, QualifiedName},
};

/// Lenient parse with the default quote. Malformed input yields an empty name.
#[must_use]
pub fn parse(input: &str) -> QualifiedName {
    NameSyntax::default().parse(input)
}

/// Strict parse with the default quote.
pub fn try_parse(input: &str) -> Result<QualifiedName, SplitError> {
    NameSyntax::default().try_parse(input)
}

/// Strips the surrounding quotes of a raw segment and collapses doubled quotes.
#[must_use]
pub fn decode_segment(raw: &str) -> String {
    NameSyntax::default().decode_segment(raw)
}

/// Collapses each doubled quote in `value` into one.
#[must_use]
pub fn undouble_quotes(value: &str) -> String {
    NameSyntax::default().undouble_quotes(value)
}

impl NameSyntax {
    /// Parses `input` into a [`QualifiedName`], returning an empty name when
    /// the input is structurally malformed.
    #[must_use]
    pub fn parse(&self, input: &str) -> QualifiedName {
        self.try_parse(input).unwrap_or_else(|error| {
            debug!(%error, partial = ?error.partial_segments(), "discarding malformed name");
            QualifiedName::default()
        })
    }

    pub fn try_parse(&self, input: &str) -> Result<QualifiedName, SplitError> {
        let segments = self.split(input)?;
        if segments.len() > MAX_LEVELS {
            debug!(
                input,
                segments = segments.len(),
                "ignoring segments beyond the column level"
            );
        }

        Ok(QualifiedName::from_segments(
            segments.iter().map(|raw| self.decode_segment(raw)),
        ))
    }

    #[must_use]
    pub fn decode_segment(&self, raw: &str) -> String {
        self.undouble_quotes(self.strip_quotes(raw))
    }

    #[must_use]
    pub fn undouble_quotes(&self, value: &str) -> String {
        let quote = self.quote();
        let mut decoded = String::with_capacity(value.len());
        let mut chars = value.chars().peekable();
        while let Some(ch) = chars.next() {
            decoded.push(ch);
            if ch == quote {
                chars.next_if_eq(&quote);
            }
        }
        decoded
    }

    fn strip_quotes<'a>(&self, raw: &'a str) -> &'a str {
        let quote = self.quote();
        raw.strip_prefix(quote)
            .and_then(|inner| inner.strip_suffix(quote))
            .unwrap_or(raw)
    }
}

impl FromStr for QualifiedName {
    type Err = SplitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        try_parse(s)
    }
}
