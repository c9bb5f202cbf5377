//! Command-line parsing and validation.

use crate::data::{DataSource, InputPath, OutputFormat, Parameters};
use crate::error::CliError;
use std::path::PathBuf;

type CliResult<T> = Result<T, CliError>;

type ApplyFn = fn(Option<&str>, &mut Parameters) -> CliResult<()>;

enum OptKind {
    Value(ApplyFn),
    Flag(ApplyFn),
}

struct OptionSpec {
    name: &'static str,
    kind: OptKind,
}

const OPTION_SPECS: &[OptionSpec] = &[
    OptionSpec {
        name: "format",
        kind: OptKind::Value(|value, params| {
            let v = required_value("format", value)?;
            params.output.format = v.parse::<OutputFormat>().map_err(CliError::from)?;
            Ok(())
        }),
    },
    OptionSpec {
        name: "headers",
        kind: OptKind::Flag(|_, params| {
            params.output.headers = true;
            Ok(())
        }),
    },
    OptionSpec {
        name: "no-headers",
        kind: OptKind::Flag(|_, params| {
            params.output.headers = false;
            Ok(())
        }),
    },
    OptionSpec {
        name: "show-inputs",
        kind: OptKind::Flag(|_, params| {
            params.output.show_inputs = Some(true);
            Ok(())
        }),
    },
    OptionSpec {
        name: "no-show-inputs",
        kind: OptKind::Flag(|_, params| {
            params.output.show_inputs = Some(false);
            Ok(())
        }),
    },
    OptionSpec {
        name: "perf",
        kind: OptKind::Flag(|_, params| {
            params.perf = true;
            Ok(())
        }),
    },
    OptionSpec {
        name: "help",
        kind: OptKind::Flag(|_, _| Err(CliError::Exit(get_help_text()))),
    },
    OptionSpec {
        name: "version",
        kind: OptKind::Flag(|_, _| Err(CliError::Exit(get_version_text()))),
    },
];

pub fn parse_cli(args: Vec<String>) -> CliResult<(DataSource, Parameters)> {
    if args.len() < 2 {
        return Err(CliError::Exit(
            "Usage: geodist [OPTIONS] <coordinate1> <coordinate2>".to_string(),
        ));
    }

    let mut params = Parameters::default();
    let mut positional = Vec::new();

    for arg in args.into_iter().skip(1) {
        if let Some(stripped) = arg.strip_prefix("--") {
            let (name, value) = stripped
                .split_once('=')
                .map(|(n, v)| (n, Some(v)))
                .unwrap_or((stripped, None));
            apply_option(name, value, &mut params)?;
        } else {
            positional.push(arg);
        }
    }

    if positional.first().is_some_and(|first| first == "help") {
        return Err(CliError::Exit(get_help_text()));
    }

    let source = parse_positional_args(&positional)?;

    if params.output.show_inputs.is_none() {
        params.output.show_inputs = Some(matches!(source, DataSource::File(_)));
    }

    Ok((source, params))
}

fn apply_option(name: &str, value: Option<&str>, params: &mut Parameters) -> CliResult<()> {
    let Some(spec) = OPTION_SPECS.iter().find(|s| s.name == name) else {
        return Err(format!("Unknown option: --{}", name).into());
    };

    match spec.kind {
        OptKind::Value(handler) => {
            let val = required_value(spec.name, value)?;
            handler(Some(val), params)
        }
        OptKind::Flag(handler) => {
            if value.is_some() {
                return Err(format!("Option --{} does not take a value", spec.name).into());
            }
            handler(None, params)
        }
    }
}

fn required_value<'a>(name: &str, value: Option<&'a str>) -> CliResult<&'a str> {
    value.ok_or_else(|| CliError::from(format!("Option --{} requires a value", name)))
}

fn parse_positional_args(positional: &[String]) -> CliResult<DataSource> {
    match positional {
        [input] if input.starts_with('@') => Ok(DataSource::File(parse_input_path(input))),
        [coord1, coord2] => Ok(DataSource::Single(coord1.clone(), coord2.clone())),
        [] => Err("Missing coordinates: expected two coordinate strings or one @file input".into()),
        [single] => {
            Err(format!("Missing second coordinate (or use @file input): {}", single).into())
        }
        _ => Err(format!(
            "Too many arguments: expected two coordinates or one @file input, found {}",
            positional.len()
        )
        .into()),
    }
}

fn parse_input_path(token: &str) -> InputPath {
    if token == "@-" {
        InputPath::Stdin
    } else {
        InputPath::File(PathBuf::from(&token[1..]))
    }
}

fn get_help_text() -> String {
    let defaults = Parameters::default();
    let formats = OutputFormat::all().join(", ");
    format!(
        r#"geodist {}
Calculates the great-circle distance between two coordinates.

Usage:
  geodist [OPTIONS] <coordinate1> <coordinate2>
  geodist [OPTIONS] @pairs.txt
  geodist [OPTIONS] @-

Examples:
  geodist "26.86296° N, 81.04288° E" "26.86343° N, 81.04136° E"
  geodist "12.5° S, 45.0° W" "89.9° N, 179.9° E" --format=json
  geodist @pairs.txt --format=csv
  echo "0.0° N, 0.0° E ; 0.0° N, 1.0° E" | geodist @-

Arguments:
  <coordinate>       Decimal degrees with a degree symbol and hemisphere
                     letter for both latitude and longitude, in either order:
                       26.86296° N, 81.04288° E
                       81.04288° E, 26.86296° N
                     Latitude range -90 to +90, longitude -180 to +180.

  File inputs:
    - @pairs.txt reads one coordinate pair per line (@- reads stdin).
    - The two coordinates on a line are separated by ';' or a tab.
    - Blank lines and lines starting with # are ignored.

Options:
  --format=<format>     Output format: {}. Default: {}
  --[no-]headers        Include headers in CSV output. Default: {}
  --[no-]show-inputs    Include the parsed coordinates in the output.
                        Auto-enabled for file input unless --no-show-inputs
                        is used.
  --perf                Print performance statistics to stderr.
  --help                Show this help message and exit.
  --version             Print version information and exit.

Distances are reported in meters (rounded to 2 decimals) and kilometers.
"#,
        env!("CARGO_PKG_VERSION"),
        formats,
        defaults.output.format,
        defaults.output.headers
    )
}

fn get_version_text() -> String {
    format!("geodist {}", env!("CARGO_PKG_VERSION"))
}
