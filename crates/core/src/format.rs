use crate::{
    config::{NameSyntax, SEPARATOR},
    error::TemplateError,
    name::QualifiedName,
    simple::is_simple_name,
};

const PLACEHOLDER_OPEN: char = '{';
const PLACEHOLDER_CLOSE: char = '}';

/// Formats `name` as a dotted string using the default quote.
#[must_use]
pub fn format(name: &QualifiedName, with_quotes: bool) -> String {
    NameSyntax::default().format(name, with_quotes)
}

/// Formats `name` quoting only the levels that are not simple identifiers.
#[must_use]
pub fn format_minimal(name: &QualifiedName) -> String {
    NameSyntax::default().format_minimal(name)
}

/// Wraps `value` in quotes and doubles its inner quotes.
#[must_use]
pub fn quote_segment(value: &str) -> String {
    NameSyntax::default().quote_segment(value)
}

/// Doubles every quote in `value` without wrapping it.
#[must_use]
pub fn double_quotes(value: &str) -> String {
    NameSyntax::default().double_quotes(value)
}

/// Substitutes each value, quoted, into the `{}` placeholders of `template`.
pub fn quote_for_statement<S: AsRef<str>>(
    template: &str,
    values: &[S],
) -> Result<String, TemplateError> {
    NameSyntax::default().quote_for_statement(template, values)
}

impl NameSyntax {
    /// Joins the leading populated levels of `name` with `.`.
    ///
    /// With `with_quotes`, every level is wrapped in quotes and its inner
    /// quotes are doubled. Without it the values are emitted untouched.
    #[must_use]
    pub fn format(&self, name: &QualifiedName, with_quotes: bool) -> String {
        self.join(name, |value| {
            if with_quotes {
                self.quote_segment(value)
            } else {
                value.to_string()
            }
        })
    }

    /// Like [`format`](Self::format) with quotes, but leaves simple
    /// identifiers bare.
    #[must_use]
    pub fn format_minimal(&self, name: &QualifiedName) -> String {
        self.join(name, |value| {
            if is_simple_name(value) {
                value.to_string()
            } else {
                self.quote_segment(value)
            }
        })
    }

    #[must_use]
    pub fn quote_segment(&self, value: &str) -> String {
        let quote = self.quote();
        let mut quoted = String::with_capacity(value.len() + 2 * quote.len_utf8());
        quoted.push(quote);
        quoted.push_str(&self.double_quotes(value));
        quoted.push(quote);
        quoted
    }

    #[must_use]
    pub fn double_quotes(&self, value: &str) -> String {
        let quote = self.quote();
        let mut doubled = String::with_capacity(value.len());
        for ch in value.chars() {
            if ch == quote {
                doubled.push(quote);
            }
            doubled.push(ch);
        }
        doubled
    }

    /// Fills the positional `{}` placeholders of `template` with `values` in
    /// order, each quoted independently. `{{` and `}}` render literal braces.
    ///
    /// # Errors
    ///
    /// Fails when the placeholder count differs from `values.len()` or when
    /// the template contains a brace that is neither a placeholder nor an
    /// escaped brace.
    pub fn quote_for_statement<S: AsRef<str>>(
        &self,
        template: &str,
        values: &[S],
    ) -> Result<String, TemplateError> {
        let mut rendered = String::with_capacity(template.len());
        let mut remaining = values.iter();
        let mut placeholders = 0;
        let mut chars = template.char_indices().peekable();

        while let Some((offset, ch)) = chars.next() {
            match ch {
                PLACEHOLDER_OPEN => {
                    if chars.next_if(|&(_, next)| next == PLACEHOLDER_OPEN).is_some() {
                        rendered.push(PLACEHOLDER_OPEN);
                    } else if chars.next_if(|&(_, next)| next == PLACEHOLDER_CLOSE).is_some() {
                        placeholders += 1;
                        if let Some(value) = remaining.next() {
                            rendered.push_str(&self.quote_segment(value.as_ref()));
                        }
                    } else {
                        return Err(TemplateError::UnbalancedBrace { offset });
                    }
                }
                PLACEHOLDER_CLOSE => {
                    if chars.next_if(|&(_, next)| next == PLACEHOLDER_CLOSE).is_none() {
                        return Err(TemplateError::UnbalancedBrace { offset });
                    }
                    rendered.push(PLACEHOLDER_CLOSE);
                }
                _ => rendered.push(ch),
            }
        }

        if placeholders != values.len() {
            return Err(TemplateError::ArityMismatch {
                placeholders,
                values: values.len(),
            });
        }

        Ok(rendered)
    }

    fn join(&self, name: &QualifiedName, mut render: impl FnMut(&str) -> String) -> String {
        let mut joined = String::new();
        for (index, value) in name.segments().enumerate() {
            if index > 0 {
                joined.push(SEPARATOR);
            }
            joined.push_str(&render(value));
        }
        joined
    }
}
