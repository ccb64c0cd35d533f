use crate::error::{LaunchError, LaunchResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

/// Identifier for a single launch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LaunchId(pub String);

impl LaunchId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl std::fmt::Display for LaunchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// How the external training entry point is started.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramSpec {
    /// Interpreter executable (e.g. `python`).
    pub interpreter: String,
    /// Path of the training script handed to the interpreter.
    pub script: PathBuf,
}

impl Default for ProgramSpec {
    fn default() -> Self {
        Self {
            interpreter: "python".to_string(),
            script: PathBuf::from("self-sup_pre-train.py"),
        }
    }
}

/// Description of one self-supervised pretraining launch.
///
/// The fields mirror the flags the training program accepts; the launcher
/// never interprets them beyond validation and argument assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSpec {
    /// Experiment title (e.g. `ChEMBL_uniform`).
    pub title: String,
    /// Root directory of the molecular-graph dataset.
    pub data_root: PathBuf,
    /// Directory with precomputed train/val split indices.
    pub split_index_folder: PathBuf,
    pub batch_size: u32,
    /// Data-loading worker count inside the training program.
    pub num_workers: u32,
    /// Directory the training program writes checkpoints into.
    pub ckpt: PathBuf,
    /// Dataset identifier (e.g. `ChEMBL`).
    pub dataset: String,
    /// Tensorboard logging root.
    pub tb_root: PathBuf,
    /// Enable tensorboard logging in the training program.
    #[serde(default = "default_true")]
    pub tb_log: bool,
    /// Weighted atom-type sampling for the mask transform. The reference
    /// launch leaves this toggle off.
    #[serde(default)]
    pub weighted_sample_mask: bool,
    /// Compute-device indices exposed to the child via `CUDA_VISIBLE_DEVICES`.
    #[serde(default = "default_devices")]
    pub devices: Vec<u32>,
}

fn default_true() -> bool {
    true
}

fn default_devices() -> Vec<u32> {
    vec![0]
}

impl JobSpec {
    pub fn validate(&self) -> LaunchResult<()> {
        if self.title.trim().is_empty() {
            return Err(LaunchError::InvalidSpec("title is required".to_string()));
        }
        if self.dataset.trim().is_empty() {
            return Err(LaunchError::InvalidSpec("dataset is required".to_string()));
        }
        if self.batch_size == 0 {
            return Err(LaunchError::InvalidSpec("batch_size must be >= 1".to_string()));
        }
        if self.num_workers == 0 {
            return Err(LaunchError::InvalidSpec("num_workers must be >= 1".to_string()));
        }
        if self.devices.is_empty() {
            return Err(LaunchError::InvalidSpec("at least one device index is required".to_string()));
        }
        Ok(())
    }

    /// Value of `CUDA_VISIBLE_DEVICES` for this job.
    #[must_use]
    pub fn visible_devices(&self) -> String {
        self.devices.iter().map(ToString::to_string).collect::<Vec<_>>().join(",")
    }
}
