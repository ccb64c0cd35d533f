//! Plan command implementation.

use crate::commands::source::{resolve_job, ResolvedJob};
use anyhow::Result;
use colored::Colorize;
use pretrain_launch::Invocation;
use serde_json::json;
use std::path::PathBuf;

pub async fn execute(
    preset: Option<String>,
    job_file: Option<PathBuf>,
    device: Option<String>,
    json_output: bool,
) -> Result<()> {
    let ResolvedJob { source, program, job } = resolve_job(preset, job_file, device)?;
    let invocation = Invocation::from_job(&program, &job);
    print_invocation(&source, &invocation, json_output)
}

pub(crate) fn print_invocation(
    source: &str,
    invocation: &Invocation,
    json_output: bool,
) -> Result<()> {
    if json_output {
        let out = json!({
            "source": source,
            "program": invocation.program,
            "args": invocation.args,
            "env": invocation.env.iter().map(|(key, value)| json!({
                "key": key,
                "value": value,
            })).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!();
    println!("{}", "Planned launch".bold().cyan());
    println!("  Source: {}", source.cyan());
    for (key, value) in &invocation.env {
        println!("  Env: {}", format!("{key}={value}").dimmed());
    }
    println!("  Command: {}", invocation.to_command_line());
    println!();
    Ok(())
}
