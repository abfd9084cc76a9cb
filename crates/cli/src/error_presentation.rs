use std::{io, path::PathBuf};

use miette::Report;

const SPLIT_CONTEXT: &str = "while splitting qualified name";
const TEMPLATE_CONTEXT: &str = "while rendering statement template";
const CONFIG_CONTEXT: &str = "while reading name syntax options";
const FILE_READ_CONTEXT: &str = "while reading names file";
const STDIN_READ_CONTEXT: &str = "while reading names from stdin";

pub(crate) type CliResult<T> = std::result::Result<T, CliError>;

#[derive(Debug)]
pub(crate) enum CliError {
    MissingNameInput,
    ReadFile { path: PathBuf, source: io::Error },
    ReadStdin(io::Error),
    Core(dotname_core::Error),
}

impl From<dotname_core::Error> for CliError {
    fn from(value: dotname_core::Error) -> Self {
        Self::Core(value)
    }
}

pub(crate) fn render_runtime_error(error: CliError) -> String {
    match error {
        CliError::MissingNameInput => format!("[usage] {}", missing_name_message()),
        CliError::ReadFile { path, source } => {
            let context = format!("{FILE_READ_CONTEXT} `{}`", path.display());
            let report = report_with_context(source, context);
            format!("[io] {report}")
        }
        CliError::ReadStdin(source) => {
            let report = report_with_context(source, STDIN_READ_CONTEXT);
            format!("[io] {report}")
        }
        CliError::Core(source) => {
            let category = core_category(&source);
            let context = core_context(&source);
            let partial = match &source {
                dotname_core::Error::Split(split) => split.partial_segments().to_vec(),
                _ => Vec::new(),
            };
            let report = report_with_context(source, context);
            if partial.is_empty() {
                format!("[{category}] {report}")
            } else {
                format!("[{category}] {report}\nrecovered before failure: {partial:?}")
            }
        }
    }
}

fn report_with_context<E, C>(source: E, context: C) -> Report
where
    E: std::error::Error + Send + Sync + 'static,
    C: Into<String>,
{
    let anyhow_error = anyhow::Error::new(source).context(context.into());
    miette::miette!("{anyhow_error:#}")
}

fn core_category(error: &dotname_core::Error) -> &'static str {
    match error {
        dotname_core::Error::Split(_) => "split",
        dotname_core::Error::Template(_) => "template",
        dotname_core::Error::Config(_) => "config",
    }
}

fn core_context(error: &dotname_core::Error) -> &'static str {
    match error {
        dotname_core::Error::Split(_) => SPLIT_CONTEXT,
        dotname_core::Error::Template(_) => TEMPLATE_CONTEXT,
        dotname_core::Error::Config(_) => CONFIG_CONTEXT,
    }
}

fn missing_name_message() -> &'static str {
    "missing qualified name: pass NAME, --file <PATH>, or pipe names via stdin"
}
