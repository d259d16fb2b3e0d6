//! # beam - Simply Supported Beam Calculator
//!
//! Command-line front end for `beam_core`: reads a load set from a JSON file,
//! a form-encoded body, or interactive prompts, and prints reactions, the
//! shear/moment table, CSV or a JSON report. Optionally writes the two-panel
//! SVG diagram.
//!
//! # Usage
//!
//! ```bash
//! # Table for a JSON load set, plus the diagram
//! beam analyze --input beam.json --svg beam.svg
//!
//! # Same fields as the web form
//! beam analyze --form "beam_length=10&n_forces=1&position_0=5&magnitude_0=10&udl_magnitude=0&udl_start=0&udl_end=0" --format json
//!
//! # Reactions only
//! beam reactions --input beam.json
//!
//! # Prompt for everything
//! beam interactive
//! ```
//!
//! See [`config`] for environment variables. Exit status is 0 on success, 2
//! when the input is rejected, 1 for anything else.

mod config;
mod form;
mod interactive;
mod output;

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use beam_core::file_io::{load_load_set, write_atomic};
use beam_core::render::{CsvRenderer, DiagramRenderer, SvgRenderer};
use beam_core::{analyze_with, BeamError, LoadSet};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use crate::config::Config;
use crate::interactive::Prompter;
use crate::output::Report;

/// Shear force and bending moment diagrams for simply supported beams.
#[derive(Parser)]
#[command(name = "beam")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON settings file (sampling and UDL moment convention)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute reactions and the sampled V/M diagrams
    Analyze {
        #[command(flatten)]
        source: InputSource,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Also write the shear/moment diagram as SVG
        #[arg(long)]
        svg: Option<PathBuf>,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the support reactions only
    Reactions {
        #[command(flatten)]
        source: InputSource,
    },

    /// Prompt for the beam and loads, then print the table
    Interactive,
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Analyze { .. } => "analyze",
            Commands::Reactions { .. } => "reactions",
            Commands::Interactive => "interactive",
        }
    }
}

/// Where the load set comes from; exactly one is required.
#[derive(Args)]
#[group(required = true, multiple = false)]
struct InputSource {
    /// Load set as a JSON file
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Form-encoded fields (`-` reads the body from stdin)
    #[arg(long)]
    form: Option<String>,
}

impl InputSource {
    fn load(&self) -> Result<LoadSet> {
        if let Some(path) = &self.input {
            tracing::info!(path = %path.display(), "reading load set");
            return load_load_set(path)
                .with_context(|| format!("Failed to load {}", path.display()));
        }

        let body = match self.form.as_deref() {
            Some("-") => {
                let mut body = String::new();
                io::stdin()
                    .read_to_string(&mut body)
                    .context("Failed to read form body from stdin")?;
                body
            }
            Some(body) => body.to_string(),
            None => anyhow::bail!("Either --input or --form is required"),
        };
        tracing::info!(bytes = body.len(), "reading form fields");
        let fields = form::parse_urlencoded(&body);
        form::load_set_from_fields(&fields).context("Invalid form input")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Csv,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => return report_failure(&e),
    };
    init_tracing(&config);
    config.print_summary();

    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("request", %request_id, command = cli.command.name());
    let _guard = span.enter();

    match run(cli.command, &config, request_id) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::warn!(error = %format!("{e:#}"), "command failed");
            report_failure(&e)
        }
    }
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    if config.json_logs() {
        builder.json().init();
    } else {
        builder.with_target(false).init();
    }
}

fn run(command: Commands, config: &Config, request_id: Uuid) -> Result<()> {
    match command {
        Commands::Analyze { source, format, svg, output } => {
            let load_set = source.load()?;
            analyze(&load_set, config, request_id, format, svg.as_deref(), output.as_deref())
        }
        Commands::Reactions { source } => {
            let load_set = source.load()?;
            let reactions = beam_core::calculations::solve_reactions(&load_set);
            tracing::debug!(left_kn = reactions.left_kn, right_kn = reactions.right_kn, "reactions solved");
            print!("{}", output::reactions_text(&load_set, &reactions));
            Ok(())
        }
        Commands::Interactive => {
            println!("Beam Calculator - Simply Supported Beam");
            println!("=======================================");
            println!();
            let stdin = io::stdin();
            let load_set = Prompter::new(stdin.lock(), io::stdout()).read_load_set()?;
            println!();
            analyze(&load_set, config, request_id, OutputFormat::Table, None, None)
        }
    }
}

fn analyze(
    load_set: &LoadSet,
    config: &Config,
    request_id: Uuid,
    format: OutputFormat,
    svg: Option<&Path>,
    report_path: Option<&Path>,
) -> Result<()> {
    let results = analyze_with(load_set, &config.analysis)?;
    tracing::debug!(
        left_kn = results.reactions.left_kn,
        right_kn = results.reactions.right_kn,
        "reactions solved"
    );
    tracing::info!(samples = results.samples.len(), "analysis complete");

    let rendered = match format {
        OutputFormat::Table => output::table(load_set, &results),
        OutputFormat::Csv => CsvRenderer.render(&results.samples)?,
        OutputFormat::Json => Report::new(request_id, config.analysis, &results)
            .to_json()
            .context("Failed to serialize report")?,
    };

    if let Some(path) = svg {
        let diagram = SvgRenderer::default().render(&results.samples)?;
        write_atomic(path, diagram.as_bytes())?;
        tracing::info!(path = %path.display(), "diagram written");
    }

    match report_path {
        Some(path) => {
            write_atomic(path, rendered.as_bytes())?;
            tracing::info!(path = %path.display(), ?format, "report written");
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

/// Print the error (and its JSON form when it is a `BeamError`) and pick the exit code
fn report_failure(err: &anyhow::Error) -> ExitCode {
    eprintln!("Error: {err:#}");

    if let Some(beam_error) = err.chain().find_map(|e| e.downcast_ref::<BeamError>()) {
        if let Ok(json) = serde_json::to_string_pretty(beam_error) {
            eprintln!();
            eprintln!("Error JSON:");
            eprintln!("{json}");
        }
    }

    ExitCode::from(exit_status(err))
}

fn exit_status(err: &anyhow::Error) -> u8 {
    match err.chain().find_map(|e| e.downcast_ref::<BeamError>()) {
        Some(e) if e.is_input_error() => 2,
        _ => 1,
    }
}
