//! Presets command implementation.

use crate::commands::types::PresetsCommand;
use anyhow::Result;
use colored::Colorize;
use pretrain_launch::{builtin_presets, resolve_preset};
use serde_json::json;

pub async fn execute(command: PresetsCommand) -> Result<()> {
    match command {
        PresetsCommand::List { json } => list(json),
        PresetsCommand::Show { name, json } => show(&name, json),
    }
}

fn list(json_output: bool) -> Result<()> {
    let presets = builtin_presets();

    if json_output {
        let out: Vec<_> = presets
            .iter()
            .map(|p| json!({ "name": p.name, "summary": p.summary }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!();
    println!("{}", format!("Built-in presets ({})", presets.len()).bold().cyan());
    println!();
    for preset in presets {
        println!("  {:<18} {}", preset.name.cyan(), preset.summary.dimmed());
    }
    println!();
    Ok(())
}

fn show(name: &str, json_output: bool) -> Result<()> {
    let job = resolve_preset(name)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&job)?);
        return Ok(());
    }

    println!();
    println!("{}", name.bold().cyan());
    println!("  Title: {}", job.title);
    println!("  Dataset: {}", job.dataset);
    println!("  Data root: {}", job.data_root.display());
    println!("  Split indices: {}", job.split_index_folder.display());
    println!("  Batch size: {}", job.batch_size);
    println!("  Workers: {}", job.num_workers);
    println!("  Checkpoints: {}", job.ckpt.display());
    println!(
        "  Tensorboard: {} ({})",
        job.tb_root.display(),
        if job.tb_log { "enabled" } else { "disabled" }
    );
    println!("  Devices: {}", job.visible_devices());
    println!();
    Ok(())
}
