//! CLI data types and input source expansion.

use crate::error::CliError;
use geodist::file_input::{self, FileReader};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
pub enum InputPath {
    Stdin,
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    /// Two coordinate strings given directly on the command line.
    Single(String, String),
    /// One pair per line from a file or stdin.
    File(InputPath),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Csv,
    Json,
}

impl OutputFormat {
    pub fn all() -> Vec<&'static str> {
        vec!["text", "csv", "json"]
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Invalid format: {} (expected one of: {})",
                s,
                OutputFormat::all().join(", ")
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OutputFormat::Text => "text",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub format: OutputFormat,
    pub headers: bool,
    /// None until resolved: explicit flags win, otherwise auto-enabled for
    /// file input only.
    pub show_inputs: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct Parameters {
    pub output: OutputOptions,
    pub perf: bool,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            output: OutputOptions {
                format: OutputFormat::Text,
                headers: true,
                show_inputs: None,
            },
            perf: false,
        }
    }
}

pub type PairResult = Result<(String, String), String>;
pub type PairStream = Box<dyn Iterator<Item = PairResult>>;

pub fn expand_source(source: DataSource) -> Result<PairStream, CliError> {
    match source {
        DataSource::Single(coord1, coord2) => Ok(Box::new(std::iter::once(Ok((coord1, coord2))))),
        DataSource::File(path) => {
            let reader = open_reader(&path)?;
            Ok(Box::new(file_input::read_pairs(reader)))
        }
    }
}

fn open_reader(path: &InputPath) -> Result<FileReader, CliError> {
    match path {
        InputPath::Stdin => Ok(FileReader::stdin()),
        InputPath::File(path) => FileReader::open(path)
            .map_err(|err| CliError::from(format!("cannot open {}: {}", path.display(), err))),
    }
}
