use std::{collections::BTreeMap, fs, path::Path};

use dotname_core::{NameSyntax, QualifiedName, is_simple_name};
use serde::Deserialize;
use thiserror::Error;

const EXCERPT_MAX_CHARS: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TestCase {
    pub input: String,
    /// Quote character for the case; the default syntax when omitted.
    pub quote: Option<char>,
    pub segments: Option<Vec<String>>,
    pub name: Option<ExpectedName>,
    pub quoted: Option<String>,
    pub unquoted: Option<String>,
    pub minimal: Option<String>,
    pub error: Option<String>,
    pub simple: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExpectedName {
    pub database: Option<String>,
    pub schema: Option<String>,
    pub table: Option<String>,
    pub column: Option<String>,
}

impl From<ExpectedName> for QualifiedName {
    fn from(value: ExpectedName) -> Self {
        Self {
            database: value.database,
            schema: value.schema,
            table: value.table,
            column: value.column,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestResult {
    Passed,
    Failed(String),
}

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read manifest `{path}`")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid manifest{} near `{excerpt}`", render_line(.line))]
    Yaml {
        excerpt: String,
        line: Option<usize>,
        #[source]
        source: serde_yaml::Error,
    },
}

fn render_line(line: &Option<usize>) -> String {
    line.map(|line| format!(" at line {line}")).unwrap_or_default()
}

pub fn load_test_cases_from_str(yaml: &str) -> Result<BTreeMap<String, TestCase>, ManifestError> {
    serde_yaml::from_str(yaml).map_err(|source| ManifestError::Yaml {
        excerpt: source_excerpt(yaml),
        line: source.location().map(|location| location.line()),
        source,
    })
}

pub fn load_test_cases_from_path(
    path: impl AsRef<Path>,
) -> Result<BTreeMap<String, TestCase>, ManifestError> {
    let path = path.as_ref();
    let yaml = fs::read_to_string(path).map_err(|source| ManifestError::Read {
        path: path.display().to_string(),
        source,
    })?;
    load_test_cases_from_str(&yaml)
}

pub fn run_test(test: &TestCase) -> TestResult {
    match run_test_flow(test) {
        Ok(()) => TestResult::Passed,
        Err(message) => TestResult::Failed(message),
    }
}

/// Runs every case and returns the failures keyed by case name.
pub fn run_all(cases: &BTreeMap<String, TestCase>) -> BTreeMap<String, String> {
    cases
        .iter()
        .filter_map(|(name, test)| match run_test(test) {
            TestResult::Passed => None,
            TestResult::Failed(message) => Some((name.clone(), message)),
        })
        .collect()
}

fn run_test_flow(test: &TestCase) -> Result<(), String> {
    let syntax = match test.quote {
        Some(quote) => NameSyntax::new(quote).map_err(|error| error.to_string())?,
        None => NameSyntax::default(),
    };

    if let Some(expected) = test.simple {
        let actual = is_simple_name(&test.input);
        if actual != expected {
            return Err(format!(
                "simple name mismatch for `{}`; expected: {expected}, actual: {actual}",
                test.input
            ));
        }
    }

    let segments = match (syntax.split(&test.input), test.error.as_deref()) {
        (Ok(segments), None) => segments,
        (Ok(segments), Some(expected_error)) => {
            return Err(format!(
                "expected error: {expected_error}, but got segments: {segments:?}"
            ));
        }
        (Err(actual_error), Some(expected_error)) => {
            let actual_error = actual_error.to_string();
            if actual_error != expected_error {
                return Err(format!(
                    "expected error: {expected_error}, but got: {actual_error}"
                ));
            }
            return assert_lenient_parse_is_empty(&syntax, &test.input);
        }
        (Err(actual_error), None) => return Err(format!("unexpected error: {actual_error}")),
    };

    if let Some(expected) = &test.segments
        && expected != &segments
    {
        return Err(format!(
            "segment mismatch; expected: {expected:?}, actual: {segments:?}"
        ));
    }

    let parsed = syntax.parse(&test.input);
    if let Some(expected) = test.name.clone().map(QualifiedName::from)
        && expected != parsed
    {
        return Err(format!(
            "parsed name mismatch; expected: {expected:?}, actual: {parsed:?}"
        ));
    }

    assert_rendered("quoted", test.quoted.as_deref(), &syntax.format(&parsed, true))?;
    assert_rendered("unquoted", test.unquoted.as_deref(), &syntax.format(&parsed, false))?;
    assert_rendered("minimal", test.minimal.as_deref(), &syntax.format_minimal(&parsed))?;

    let reparsed = syntax.parse(&syntax.format(&parsed, true));
    if reparsed != parsed {
        return Err(format!(
            "quoted format does not round trip; parsed: {parsed:?}, reparsed: {reparsed:?}"
        ));
    }

    Ok(())
}

fn assert_lenient_parse_is_empty(syntax: &NameSyntax, input: &str) -> Result<(), String> {
    let parsed = syntax.parse(input);
    if parsed.is_empty() {
        return Ok(());
    }
    Err(format!(
        "malformed input `{input}` must parse to an empty name, got: {parsed:?}"
    ))
}

fn assert_rendered(label: &str, expected: Option<&str>, actual: &str) -> Result<(), String> {
    let Some(expected) = expected else {
        return Ok(());
    };
    if expected == actual {
        return Ok(());
    }
    Err(format!(
        "{label} format mismatch; expected: {expected}, actual: {actual}"
    ))
}

fn source_excerpt(yaml: &str) -> String {
    let trimmed = yaml.trim();
    if trimmed.chars().count() <= EXCERPT_MAX_CHARS {
        return trimmed.to_string();
    }

    let mut excerpt: String = trimmed.chars().take(EXCERPT_MAX_CHARS).collect();
    excerpt.push_str("...");
    excerpt
}
