use tracing::trace;

use crate::{
    config::{NameSyntax, SEPARATOR},
    error::{SeparatorIssue, SplitError},
};

/// Splits a dotted name into raw segments using the default quote.
///
/// See [`NameSyntax::split`].
pub fn split_qualified_string(input: &str) -> Result<Vec<String>, SplitError> {
    NameSyntax::default().split(input)
}

impl NameSyntax {
    /// Splits `input` into its raw segments, outermost first.
    ///
    /// Quoted segments keep their surrounding quotes and doubled inner
    /// quotes; bare segments are returned as written. The empty string has
    /// no segments.
    ///
    /// # Errors
    ///
    /// Returns [`SplitError::UnterminatedQuote`] when a quoted segment never
    /// closes and [`SplitError::MalformedSeparator`] when a separator is
    /// missing or dangling. The error carries the segments recovered so far.
    pub fn split(&self, input: &str) -> Result<Vec<String>, SplitError> {
        let quote = self.quote();
        let mut segments = Vec::new();
        let mut rest = input;

        while !rest.is_empty() {
            if !rest.starts_with(quote) {
                let Some(dot) = rest.find(SEPARATOR) else {
                    segments.push(rest.to_string());
                    break;
                };
                if dot + SEPARATOR.len_utf8() == rest.len() {
                    return Err(separator_error(
                        input,
                        SeparatorIssue::TrailingSeparator,
                        segments,
                    ));
                }
                trace!(segment = &rest[..dot], "bare segment");
                segments.push(rest[..dot].to_string());
                rest = &rest[dot + SEPARATOR.len_utf8()..];
                continue;
            }

            let body_start = quote.len_utf8();
            let Some(close) = find_closing_quote(&rest[body_start..], quote) else {
                segments.push(rest.to_string());
                return Err(SplitError::UnterminatedQuote {
                    input: input.to_string(),
                    partial: segments,
                });
            };
            let quoted_end = body_start + close + quote.len_utf8();
            let (quoted, tail) = rest.split_at(quoted_end);

            if tail.is_empty() {
                segments.push(quoted.to_string());
                break;
            }

            match tail.find(SEPARATOR) {
                None => {
                    return Err(separator_error(
                        input,
                        SeparatorIssue::MissingSeparatorAfterQuote,
                        segments,
                    ));
                }
                Some(0) => {
                    trace!(segment = quoted, "quoted segment");
                    segments.push(quoted.to_string());
                    rest = &tail[SEPARATOR.len_utf8()..];
                }
                Some(dot) => {
                    segments.push(rest[..quoted_end + dot].to_string());
                    return Err(separator_error(
                        input,
                        SeparatorIssue::TextBeforeSeparator,
                        segments,
                    ));
                }
            }
        }

        Ok(segments)
    }
}

/// Byte offset of the first quote in `body` that is not part of a doubled
/// pair. Each pair is consumed as a unit.
fn find_closing_quote(body: &str, quote: char) -> Option<usize> {
    let mut chars = body.char_indices().peekable();
    while let Some((index, ch)) = chars.next() {
        if ch != quote {
            continue;
        }
        if chars.next_if(|&(_, next)| next == quote).is_none() {
            return Some(index);
        }
    }
    None
}

fn separator_error(input: &str, reason: SeparatorIssue, partial: Vec<String>) -> SplitError {
    SplitError::MalformedSeparator {
        input: input.to_string(),
        reason,
        partial,
    }
}

#[cfg(test)]
mod tests {
    use super::find_closing_quote;

    #[test]
    fn closing_quote_skips_doubled_pairs() {
        assert_eq!(find_closing_quote(r#"a""b"."c""#, '"'), Some(4));
        assert_eq!(find_closing_quote("\"\"\"\"", '"'), None);
        assert_eq!(find_closing_quote("\"\"\"x", '"'), Some(2));
        assert_eq!(find_closing_quote("", '"'), None);
    }

    #[test]
    fn closing_quote_handles_multibyte_quote() {
        assert_eq!(find_closing_quote("a§§b§", '§'), Some(6));
    }
}
