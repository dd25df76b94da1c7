// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Swimlane and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Swimlane CLI entrypoint.
//!
//! Reads diagram source from files or stdin and writes a scene as JSON, SVG, a Unicode text
//! preview or the parsed model. Several inputs are rendered in parallel, each next to its source.

use std::fs;
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use swimlane::layout::{CanvasConfig, ConfigError};
use swimlane::render::{render_scene_unicode, scene_json_schema, GridError, GridScale, SvgDocument};

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<input>...|-] [--format json|svg|text|model] [--config <file.json>] [--output <file>] [-v|--verbose]\n  {program} --schema\n\nWithout inputs (or with `-`) the diagram is read from stdin.\nA single input is written to --output or stdout; several inputs are written next to each\ninput with the format's extension (.json, .svg, .preview.txt, .model.json). An input is never
overwritten by its own output.\n--config loads layout constants from a JSON object; missing fields keep their defaults.\n--schema prints the JSON Schema of the rendered scene.\n-v logs progress to stderr, -vv adds debug detail."
    );
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    #[default]
    Json,
    Svg,
    Text,
    Model,
}

impl OutputFormat {
    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "json" => Some(Self::Json),
            "svg" => Some(Self::Svg),
            "text" => Some(Self::Text),
            "model" => Some(Self::Model),
            _ => None,
        }
    }

    fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Svg => "svg",
            Self::Text => "preview.txt",
            Self::Model => "model.json",
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    inputs: Vec<String>,
    format: Option<OutputFormat>,
    config_path: Option<String>,
    output: Option<String>,
    schema: bool,
    verbosity: u8,
    help: bool,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--format" | "-f" => {
                if options.format.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.format = Some(OutputFormat::parse(&raw).ok_or(())?);
            }
            "--config" | "-c" => {
                if options.config_path.is_some() {
                    return Err(());
                }
                options.config_path = Some(args.next().ok_or(())?);
            }
            "--output" | "-o" => {
                if options.output.is_some() {
                    return Err(());
                }
                options.output = Some(args.next().ok_or(())?);
            }
            "--schema" => {
                if options.schema {
                    return Err(());
                }
                options.schema = true;
            }
            "-v" | "--verbose" => options.verbosity = options.verbosity.saturating_add(1),
            "-vv" => options.verbosity = options.verbosity.saturating_add(2),
            "-h" | "--help" => options.help = true,
            "-" => {
                if options.inputs.iter().any(|input| input == "-") {
                    return Err(());
                }
                options.inputs.push(arg);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => options.inputs.push(arg),
        }
    }

    if options.inputs.len() > 1
        && (options.output.is_some() || options.inputs.iter().any(|input| input == "-"))
    {
        return Err(());
    }

    if options.schema && (!options.inputs.is_empty() || options.format.is_some()) {
        return Err(());
    }

    Ok(options)
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{path}: {source}")]
    Io { path: String, source: io::Error },
    #[error("config {path}: {source}")]
    Config { path: String, source: ConfigError },
    #[error(transparent)]
    Render(#[from] swimlane::Error),
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("refusing to overwrite input {path}")]
    WouldOverwrite { path: String },
    #[error("{failed} of {total} inputs failed")]
    Failed { failed: usize, total: usize },
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt().with_writer(io::stderr).with_max_level(level).init();
}

fn load_config(path: Option<&str>) -> Result<CanvasConfig, CliError> {
    let Some(path) = path else {
        return Ok(CanvasConfig::default());
    };
    let raw = fs::read_to_string(path)
        .map_err(|source| CliError::Io { path: path.to_owned(), source })?;
    let config = CanvasConfig::from_json_str(&raw)
        .map_err(|source| CliError::Config { path: path.to_owned(), source })?;
    tracing::info!(path, "loaded canvas config");
    Ok(config)
}

fn render(source: &str, format: OutputFormat, config: &CanvasConfig) -> Result<String, CliError> {
    let scene = || swimlane::render_source(source, config.clone());
    let out = match format {
        OutputFormat::Model => {
            let board = swimlane::format::parse_board(source).map_err(swimlane::Error::from)?;
            serde_json::to_string_pretty(&board)?
        }
        OutputFormat::Json => serde_json::to_string_pretty(&scene()?)?,
        OutputFormat::Svg => SvgDocument::new(&scene()?).to_string(),
        OutputFormat::Text => render_scene_unicode(&scene()?, GridScale::default())?,
    };
    Ok(out)
}

fn read_source(input: &str) -> Result<String, CliError> {
    if input == "-" {
        return io::read_to_string(io::stdin())
            .map_err(|source| CliError::Io { path: "<stdin>".to_owned(), source });
    }
    fs::read_to_string(input).map_err(|source| CliError::Io { path: input.to_owned(), source })
}

fn write_output(path: &Path, rendered: &str) -> Result<(), CliError> {
    let mut contents = rendered.to_owned();
    if !contents.ends_with('\n') {
        contents.push('\n');
    }
    fs::write(path, contents)
        .map_err(|source| CliError::Io { path: path.display().to_string(), source })
}

fn sibling_output(input: &str, format: OutputFormat) -> Result<PathBuf, CliError> {
    let target = Path::new(input).with_extension(format.extension());
    if target == Path::new(input) {
        return Err(CliError::WouldOverwrite { path: input.to_owned() });
    }
    Ok(target)
}

fn run_single(
    input: &str,
    output: Option<&str>,
    format: OutputFormat,
    config: &CanvasConfig,
) -> Result<(), CliError> {
    let rendered = render(&read_source(input)?, format, config)?;
    match output {
        Some(path) => write_output(Path::new(path), &rendered),
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{rendered}")
                .map_err(|source| CliError::Io { path: "<stdout>".to_owned(), source })
        }
    }
}

fn run_many(inputs: &[String], format: OutputFormat, config: &CanvasConfig) -> Result<(), CliError> {
    let failed = inputs
        .par_iter()
        .map(|input| {
            let result = sibling_output(input, format).and_then(|target| {
                let rendered = render(&read_source(input)?, format, config)?;
                write_output(&target, &rendered)?;
                Ok(target)
            });
            match result {
                Ok(target) => {
                    tracing::info!(input = %input, output = %target.display(), "rendered");
                    0usize
                }
                Err(err) => {
                    eprintln!("swimlane: {input}: {err}");
                    1
                }
            }
        })
        .sum::<usize>();

    if failed > 0 {
        return Err(CliError::Failed { failed, total: inputs.len() });
    }
    Ok(())
}

fn run(options: CliOptions) -> Result<(), CliError> {
    if options.schema {
        println!("{}", serde_json::to_string_pretty(&scene_json_schema())?);
        return Ok(());
    }

    let config = load_config(options.config_path.as_deref())?;
    let format = options.format.unwrap_or_default();

    match options.inputs.as_slice() {
        [] => run_single("-", options.output.as_deref(), format, &config),
        [input] => run_single(input, options.output.as_deref(), format, &config),
        inputs => run_many(inputs, format, &config),
    }
}

fn main() {
    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "swimlane".to_owned());

    let options = match parse_options(args) {
        Ok(options) if options.help => {
            print_usage(&program);
            return;
        }
        Ok(options) => options,
        Err(()) => {
            print_usage(&program);
            std::process::exit(2);
        }
    };

    init_logging(options.verbosity);

    if let Err(err) = run(options) {
        eprintln!("swimlane: {err}");
        std::process::exit(1);
    }
}
