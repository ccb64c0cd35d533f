//! Runs command implementation.

use anyhow::{Context, Result};
use colored::Colorize;
use pretrain_launch::{discover_launch_records, RecordLayout};
use serde_json::json;

pub async fn execute(json_output: bool) -> Result<()> {
    let layout = RecordLayout::for_working_dir(&std::env::current_dir()?);
    let records = discover_launch_records(&layout).context("failed to read launch records")?;

    if json_output {
        let out: Vec<_> = records
            .iter()
            .map(|r| {
                json!({
                    "id": r.launch_id.0,
                    "started_at": r.started_at,
                    "source": r.source,
                    "exit_code": r.exit_code,
                    "command": r.invocation.to_command_line(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!();
    println!("{}", format!("Recorded launches ({})", records.len()).bold().cyan());
    println!();

    if records.is_empty() {
        println!("  {}", "No launches recorded in this directory.".dimmed());
        println!();
        println!(
            "  {}",
            "Tip: run `molpretrain run chembl-uniform` to launch the reference pretraining job."
                .dimmed()
        );
        return Ok(());
    }

    println!("{:<38} {:<21} {:<6} {}", "ID", "Started", "Exit", "Source");
    println!("{}", "─".repeat(90));
    for r in records {
        println!(
            "{:<38} {:<21} {:<6} {}",
            r.launch_id.0.cyan(),
            r.started_at.format("%Y-%m-%d %H:%M:%S"),
            r.exit_code,
            r.source.dimmed()
        );
    }
    println!();
    Ok(())
}
