//! glyco - interactive diabetes-risk assessment.

mod form;
mod render;

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use glyco_core::{MeasurementVector, PredictError, PredictionResult};
use glyco_engine::InferenceHandler;
use glyco_model::ModelHandle;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::form::{FormSession, FormStep};

#[derive(Debug, Parser)]
#[command(name = "glyco")]
#[command(version)]
#[command(about = "Diabetes-risk assessment from eight clinical measurements", long_about = None)]
struct Cli {
    /// Path to the classification artifact
    #[arg(long, global = true, env = "GLYCO_MODEL_PATH", default_value = glyco_config::DEFAULT_MODEL_PATH)]
    model: PathBuf,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Collect measurements and report the risk tier
    Assess(AssessArgs),

    /// Describe the loaded artifact
    Inspect,
}

#[derive(Debug, Args)]
struct AssessArgs {
    /// Read measurements from a JSON file instead of prompting
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Include health suggestions for the probability band
    #[arg(short, long)]
    detailed: bool,
}

fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .compact()
        .init();

    let handler = InferenceHandler::new(ModelHandle::load(&cli.model));

    match cli.command {
        Commands::Assess(args) => run_assess(&handler, &args),
        Commands::Inspect => {
            let path = cli.model.display().to_string();
            for line in render::model_lines(&handler.model().status(), &path) {
                println!("{line}");
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_assess(handler: &InferenceHandler, args: &AssessArgs) -> Result<ExitCode> {
    let result = match &args.input {
        Some(path) => {
            debug!(path = %path.display(), "Reading measurements from file");
            let content = fs::read_to_string(path)
                .with_context(|| format!("failed to read '{}'", path.display()))?;
            let body: serde_json::Value = serde_json::from_str(&content)
                .with_context(|| format!("'{}' is not valid JSON", path.display()))?;
            handler.predict_json(&body)
        }
        None => {
            // Nothing to collect when the model cannot answer anyway.
            if let Err(e) = handler.model().classifier() {
                return Ok(report(Err(e), args.detailed));
            }
            match collect_interactively()? {
                Some(vector) => handler.predict(&vector),
                None => {
                    eprintln!("assessment cancelled");
                    return Ok(ExitCode::from(130));
                }
            }
        }
    };

    Ok(report(result, args.detailed))
}

fn report(result: Result<PredictionResult, PredictError>, detailed: bool) -> ExitCode {
    match result {
        Ok(prediction) => {
            for line in render::verdict_lines(&prediction, detailed) {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", render::error_line(&e));
            ExitCode::from(render::exit_code(&e))
        }
    }
}

/// Prompts until every field is answered. `None` on Ctrl-C or end of input.
fn collect_interactively() -> Result<Option<MeasurementVector>> {
    let mut rl = DefaultEditor::new().context("failed to initialize prompt")?;
    let mut session = FormSession::new();

    println!("Enter the measurements below; press Enter to accept the default.");
    loop {
        match rl.readline(&session.prompt()) {
            Ok(line) => match session.handle_line(&line) {
                FormStep::Next => {}
                FormStep::Retry(message) => eprintln!("  {message}"),
                FormStep::Complete(vector) => return Ok(Some(vector)),
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => return Ok(None),
            Err(e) => return Err(e).context("failed to read input"),
        }
    }
}
