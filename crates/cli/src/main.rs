mod error_presentation;

use std::{
    fs,
    io::{self, IsTerminal, Read},
    path::PathBuf,
    process::ExitCode,
};

use clap::{ArgAction, Parser, Subcommand};
use dotname_core::{
    DEFAULT_QUOTE, Error as CoreError, Level, MAX_LEVELS, NameSyntax, QualifiedName, is_simple_name,
};
use error_presentation::{CliError, CliResult, render_runtime_error};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const ABSENT_LEVEL: &str = "<absent>";

#[derive(Debug, Parser)]
#[command(
    name = "dotname",
    version,
    about = "Split, parse, format, and quote dotted warehouse identifiers"
)]
struct Cli {
    /// Character that delimits quoted segments.
    #[arg(long, global = true, env = "DOTNAME_QUOTE", default_value_t = DEFAULT_QUOTE)]
    quote: char,

    /// Increase log verbosity (-v debug, -vv trace). Overrides RUST_LOG.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the raw segments of NAME, one per line.
    Split { name: String },
    /// Print the levels of each name.
    Parse {
        name: Option<String>,
        /// Read names from PATH, one per line.
        #[arg(long, value_name = "PATH", conflicts_with = "name")]
        file: Option<PathBuf>,
        /// Fail on malformed names instead of printing an empty name.
        #[arg(long)]
        strict: bool,
    },
    /// Join segment values into a qualified name.
    Format {
        #[arg(required = true, num_args = 1..=MAX_LEVELS)]
        segments: Vec<String>,
        /// Emit values verbatim without quoting.
        #[arg(long, conflicts_with = "minimal")]
        unquoted: bool,
        /// Quote only segments that are not simple identifiers.
        #[arg(long)]
        minimal: bool,
    },
    /// Exit 0 when SEGMENT can be written unquoted, 1 otherwise.
    Check { segment: String },
    /// Substitute quoted VALUES into the `{}` placeholders of TEMPLATE.
    Quote {
        template: String,
        values: Vec<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("{}", render_runtime_error(error));
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    // A subscriber installed earlier in the process keeps precedence.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run(cli: Cli) -> CliResult<ExitCode> {
    let syntax = NameSyntax::new(cli.quote).map_err(CoreError::from)?;
    debug!(quote = %syntax.quote(), "using name syntax");

    match cli.command {
        Command::Split { name } => {
            for segment in syntax.split(&name).map_err(CoreError::from)? {
                println!("{segment}");
            }
        }
        Command::Parse { name, file, strict } => {
            let names = collect_names(name, file)?;
            for (index, raw) in names.iter().enumerate() {
                let parsed = if strict {
                    syntax.try_parse(raw).map_err(CoreError::from)?
                } else {
                    syntax.parse(raw)
                };
                if index > 0 {
                    println!();
                }
                print_levels(&parsed);
            }
        }
        Command::Format {
            segments,
            unquoted,
            minimal,
        } => {
            let name = QualifiedName::from_segments(segments);
            let rendered = if minimal {
                syntax.format_minimal(&name)
            } else {
                syntax.format(&name, !unquoted)
            };
            println!("{rendered}");
        }
        Command::Check { segment } => {
            if is_simple_name(&segment) {
                println!("simple");
            } else {
                println!("needs quoting");
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Quote { template, values } => {
            let statement = syntax
                .quote_for_statement(&template, &values)
                .map_err(CoreError::from)?;
            println!("{statement}");
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn collect_names(name: Option<String>, file: Option<PathBuf>) -> CliResult<Vec<String>> {
    if let Some(name) = name {
        return Ok(vec![name]);
    }

    let contents = match file {
        Some(path) => match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(source) => return Err(CliError::ReadFile { path, source }),
        },
        None => {
            let mut stdin = io::stdin();
            if stdin.is_terminal() {
                return Err(CliError::MissingNameInput);
            }
            let mut contents = String::new();
            stdin
                .read_to_string(&mut contents)
                .map_err(CliError::ReadStdin)?;
            contents
        }
    };

    Ok(contents
        .lines()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

fn print_levels(name: &QualifiedName) {
    for level in Level::ALL {
        println!("{level}={}", name.get(level).unwrap_or(ABSENT_LEVEL));
    }
}
