//! Command-line converter between note markdown and editor JSON.
//!
//! # Responsibility
//! - Expose `notelink_core` conversions for scripts and quick checks.
//! - Enable file logging only when `NOTELINK_LOG_DIR` is set.
//!
//! Usage: `notelink <to-json|to-markdown|links|version> [FILE]`; reads stdin
//! when FILE is omitted.

use log::{error, info};
use notelink_core::{
    core_version, document_from_json, document_to_json, extract_note_links, init_logging,
    parse_markdown, to_markdown, DocumentError, LogConfig, LoggingError,
};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::Read;
use std::process::ExitCode;

const USAGE: &str = "usage: notelink <to-json|to-markdown|links|version> [FILE]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    ToJson,
    ToMarkdown,
    Links,
    Version,
}

impl Command {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "to-json" => Some(Self::ToJson),
            "to-markdown" => Some(Self::ToMarkdown),
            "links" => Some(Self::Links),
            "version" | "--version" | "-V" => Some(Self::Version),
            _ => None,
        }
    }
}

#[derive(Debug)]
enum CliError {
    Usage,
    Io(std::io::Error),
    Document(DocumentError),
    Logging(LoggingError),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Usage => write!(f, "{USAGE}"),
            Self::Io(err) => write!(f, "failed to read input: {err}"),
            Self::Document(err) => write!(f, "{err}"),
            Self::Logging(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Document(err) => Some(err),
            Self::Logging(err) => Some(err),
            Self::Usage => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<DocumentError> for CliError {
    fn from(value: DocumentError) -> Self {
        Self::Document(value)
    }
}

impl From<LoggingError> for CliError {
    fn from(value: LoggingError) -> Self {
        Self::Logging(value)
    }
}

fn main() -> ExitCode {
    match run(std::env::args().skip(1).collect()) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("event=cli_run module=cli status=error error={err}");
            eprintln!("notelink: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Vec<String>) -> Result<String, CliError> {
    if let Some(config) = LogConfig::from_env() {
        init_logging(&config?)?;
    }

    let command = args
        .first()
        .and_then(|name| Command::parse(name))
        .ok_or(CliError::Usage)?;
    if command == Command::Version {
        return Ok(format!("notelink {}", core_version()));
    }

    let input = match args.get(1) {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    info!(
        "event=cli_run module=cli status=start command={:?} bytes={}",
        command,
        input.len()
    );
    convert(command, &input)
}

fn convert(command: Command, input: &str) -> Result<String, CliError> {
    let output = match command {
        Command::ToJson => document_to_json(&parse_markdown(input))?,
        Command::ToMarkdown => to_markdown(&document_from_json(input)?),
        Command::Links => extract_note_links(&parse_markdown(input)).join("\n"),
        Command::Version => core_version().to_string(),
    };
    Ok(output)
}
