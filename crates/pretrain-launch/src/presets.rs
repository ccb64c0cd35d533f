use crate::error::{LaunchError, LaunchResult};
use crate::job::{JobSpec, ProgramSpec};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the reference ChEMBL uniform-masking pretraining launch.
pub const CHEMBL_UNIFORM: &str = "chembl-uniform";

/// A built-in job preset.
#[derive(Debug, Clone)]
pub struct PresetEntry {
    pub name: &'static str,
    pub summary: &'static str,
}

#[must_use]
pub fn builtin_presets() -> Vec<PresetEntry> {
    vec![PresetEntry {
        name: CHEMBL_UNIFORM,
        summary: "Self-supervised pretraining on ChEMBL molecular graphs (uniform atom masking)",
    }]
}

/// Resolve a built-in preset name into a job spec.
pub fn resolve_preset(name: &str) -> LaunchResult<JobSpec> {
    match name {
        CHEMBL_UNIFORM => Ok(chembl_uniform()),
        other => Err(LaunchError::UnknownPreset(other.to_string())),
    }
}

fn chembl_uniform() -> JobSpec {
    JobSpec {
        title: "ChEMBL_uniform".to_string(),
        data_root: PathBuf::from("/public/gwellawa/mol_graphs_no_metals"),
        split_index_folder: PathBuf::from("/scratch/zli82/cg_exp/ChEMBL_split"),
        batch_size: 18,
        num_workers: 18,
        ckpt: PathBuf::from("/scratch/zli82/cg_exp/ckpt/ChEMBL"),
        dataset: "ChEMBL".to_string(),
        tb_root: PathBuf::from("/scratch/zli82/cg_exp/tensorboard"),
        tb_log: true,
        weighted_sample_mask: false,
        devices: vec![0],
    }
}

/// On-disk job file: a job spec plus an optional program override.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobFile {
    #[serde(default)]
    pub program: Option<ProgramSpec>,
    pub job: JobSpec,
}

/// Load and validate a TOML job file.
pub fn load_job_file(path: &Path) -> LaunchResult<JobFile> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        LaunchError::JobFile(format!("failed to read {}: {e}", path.display()))
    })?;
    let file: JobFile = toml::from_str(&text)?;
    file.job.validate()?;
    Ok(file)
}
