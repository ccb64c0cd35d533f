//! Molpretrain CLI - command-line launcher for self-supervised pretraining jobs
//!
//! This CLI provides a `molpretrain` command for planning, running, and
//! reviewing launches of the external molecular-graph pretraining program.

mod commands;

use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{plan, presets, run, runs};
use commands::PresetsCommand;

/// Molpretrain CLI - launcher for self-supervised pretraining jobs
///
/// Molpretrain assembles the command line of the external pretraining entry
/// point from a preset or a job file, restricts the visible compute devices,
/// and runs the training process to completion.
#[derive(Parser, Debug)]
#[command(
    name = "molpretrain",
    author,
    version,
    about = "Molpretrain - launcher for self-supervised molecular-graph pretraining"
)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the invocation a job would produce, without spawning it
    ///
    /// Resolves the job spec the same way `run` does and shows the exact
    /// program, argument vector, and environment entry.
    Plan {
        /// Built-in preset name (e.g. "chembl-uniform")
        preset: Option<String>,

        /// Load the job from a TOML job file instead of a preset
        #[arg(long)]
        job_file: Option<PathBuf>,

        /// Override the device list (e.g. "0" or "0,1")
        #[arg(long)]
        device: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Launch a pretraining job and wait for it to finish
    ///
    /// The child inherits stdio; its exit status is propagated as this
    /// command's exit code.
    Run {
        /// Built-in preset name (e.g. "chembl-uniform")
        preset: Option<String>,

        /// Load the job from a TOML job file instead of a preset
        #[arg(long)]
        job_file: Option<PathBuf>,

        /// Print the invocation without spawning
        #[arg(long)]
        dry_run: bool,

        /// Override the device list (e.g. "0" or "0,1")
        #[arg(long)]
        device: Option<String>,

        /// Interpreter override (e.g. "python3")
        #[arg(long)]
        interpreter: Option<String>,

        /// Training script override
        #[arg(long)]
        script: Option<PathBuf>,

        /// Skip writing a launch record
        #[arg(long)]
        no_record: bool,
    },

    /// Inspect built-in job presets
    #[command(subcommand)]
    Presets(PresetsCommand),

    /// List recorded launches in this directory
    Runs {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber =
        FmtSubscriber::builder().with_max_level(level).without_time().with_target(false).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // If no command provided, show help
    let command = if let Some(cmd) = args.command {
        cmd
    } else {
        Args::command().print_help()?;
        return Ok(());
    };

    // Execute command
    match command {
        Command::Plan { preset, job_file, device, json } => {
            plan::execute(preset, job_file, device, json).await?;
        }
        Command::Run { preset, job_file, dry_run, device, interpreter, script, no_record } => {
            let exit_code =
                run::execute(preset, job_file, dry_run, device, interpreter, script, no_record)
                    .await?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Command::Presets(cmd) => {
            presets::execute(cmd).await?;
        }
        Command::Runs { json } => {
            runs::execute(json).await?;
        }
    }

    Ok(())
}
