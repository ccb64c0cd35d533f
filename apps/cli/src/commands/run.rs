//! Run command implementation.

use crate::commands::plan::print_invocation;
use crate::commands::source::{resolve_job, ResolvedJob};
use anyhow::{Context, Result};
use chrono::Utc;
use colored::Colorize;
use pretrain_launch::{
    write_launch_record, Invocation, LaunchId, LaunchRecord, Launcher, ProcessLauncher,
    RecordLayout,
};
use std::path::PathBuf;
use tracing::info;

/// Launch a pretraining job and return the exit code to propagate.
pub async fn execute(
    preset: Option<String>,
    job_file: Option<PathBuf>,
    dry_run: bool,
    device: Option<String>,
    interpreter: Option<String>,
    script: Option<PathBuf>,
    no_record: bool,
) -> Result<i32> {
    let ResolvedJob { source, mut program, job } = resolve_job(preset, job_file, device)?;
    if let Some(interpreter) = interpreter {
        program.interpreter = interpreter;
    }
    if let Some(script) = script {
        program.script = script;
    }

    let invocation = Invocation::from_job(&program, &job);

    if dry_run {
        print_invocation(&source, &invocation, false)?;
        return Ok(0);
    }

    info!("launching {}", invocation.to_command_line());

    let launch_id = LaunchId::new();
    let started_at = Utc::now();

    let launcher = ProcessLauncher;
    let outcome =
        launcher.run(&invocation).await.context("failed to launch the training process")?;
    let exit_code = outcome.exit_code();

    if !no_record {
        let layout = RecordLayout::for_working_dir(&std::env::current_dir()?);
        let record = LaunchRecord {
            launch_id: launch_id.clone(),
            started_at,
            source,
            invocation,
            exit_code,
        };
        let path =
            write_launch_record(&layout, &record).context("failed to write launch record")?;
        info!("launch record written to {}", path.display());
    }

    if exit_code == 0 {
        println!();
        println!("{}", "Launch finished".bold().green());
        println!("  Launch: {}", launch_id.0.cyan());
        println!();
    } else {
        eprintln!("{}", format!("Training process exited with code {exit_code}").red());
    }

    Ok(exit_code)
}
