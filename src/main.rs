//! tty-select CLI
//!
//! Ask a single-choice question on the terminal and print the answer.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tty_select::config::Config;
use tty_select::report::{Picked, format_selection};
use tty_select::tui::theme::parse_color;
use tty_select::tui::update::parse_default;
use tty_select::types::OutputFormat;
use tty_select::{Select, SelectError};

#[derive(Parser)]
#[command(name = "tty-select")]
#[command(about = "Ask a single-choice question and print the chosen value")]
#[command(version)]
struct Cli {
    /// Question shown above the menu
    question: String,

    /// Choices as `name` or `name=value` (value defaults to name)
    #[arg(required = true)]
    choices: Vec<String>,

    /// 1-based default position (repeatable; the first one is used)
    #[arg(long = "default", value_name = "N")]
    defaults: Vec<String>,

    /// Number the rows with this delimiter and accept digit jumps
    #[arg(long = "enum", value_name = "DELIM")]
    enumerate: Option<String>,

    /// Glyph in front of the active row
    #[arg(long)]
    marker: Option<String>,

    /// Replace the generated help text
    #[arg(long)]
    help_text: Option<String>,

    /// Text printed before the question
    #[arg(long)]
    prefix: Option<String>,

    /// Color of the active row and the answer (e.g. green, dark_cyan)
    #[arg(long)]
    active_color: Option<String>,

    /// Color of the help text
    #[arg(long)]
    help_color: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "human")]
    format: OutputFormatArg,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cmd_select(cli) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(SelectError::Interrupted) => ExitCode::from(130),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// COMMAND HANDLER
// ============================================================================

fn cmd_select(cli: Cli) -> Result<String, SelectError> {
    let format = OutputFormat::from(cli.format);
    let mut select = Select::with_options(cli.question, Config::load().into_options()?);

    for (i, raw) in cli.choices.iter().enumerate() {
        let (name, value) = split_choice(raw);
        let picked = Picked {
            index: i + 1,
            name: name.to_string(),
            value: value.to_string(),
        };
        select = select.choice(name, picked);
    }

    if !cli.defaults.is_empty() {
        let defaults = cli
            .defaults
            .iter()
            .map(|raw| parse_default(raw))
            .collect::<Result<Vec<_>, _>>()?;
        select = select.defaults(defaults);
    }
    if let Some(delim) = cli.enumerate {
        select = select.enumerate(delim);
    }
    if let Some(marker) = cli.marker {
        select = select.marker(marker);
    }
    if let Some(help) = cli.help_text {
        select = select.help(help);
    }
    if let Some(prefix) = cli.prefix {
        select = select.prefix(prefix);
    }
    if let Some(name) = cli.active_color {
        select = select.active_color(parse_color(&name)?);
    }
    if let Some(name) = cli.help_color {
        select = select.help_color(parse_color(&name)?);
    }

    let picked = select.interact()?;
    Ok(format_selection(&picked, format))
}

/// `name=value` → (name, value); a bare `name` is its own value.
fn split_choice(raw: &str) -> (&str, &str) {
    match raw.split_once('=') {
        Some((name, value)) => (name, value),
        None => (raw, raw),
    }
}
