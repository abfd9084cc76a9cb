mod config;
mod error;
mod format;
mod name;
mod parse;
mod segment;
mod simple;

pub use config::{DEFAULT_QUOTE, NameSyntax, SEPARATOR};
pub use error::{ConfigError, Error, Result, SeparatorIssue, SplitError, TemplateError};
pub use format::{double_quotes, format, format_minimal, quote_for_statement, quote_segment};
pub use name::{Level, MAX_LEVELS, QualifiedName};
pub use parse::{decode_segment, parse, try_parse, undouble_quotes};
pub use segment::split_qualified_string;
pub use simple::is_simple_name;
