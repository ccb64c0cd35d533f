//! Pretrain Launch
//!
//! Launcher primitives for self-supervised molecular-graph pretraining jobs:
//! - Describing a launch (`JobSpec`, `ProgramSpec`)
//! - Deterministic construction of the child invocation (`Invocation`)
//! - Built-in and file-based job presets
//! - Running the training process and recording launch history

pub mod error;
pub mod invocation;
pub mod job;
pub mod launcher;
pub mod presets;
pub mod records;

pub use error::{LaunchError, LaunchResult};
pub use invocation::{Invocation, CUDA_VISIBLE_DEVICES};
pub use job::{JobSpec, LaunchId, ProgramSpec};
pub use launcher::{LaunchOutcome, Launcher, ProcessLauncher};
pub use presets::{builtin_presets, load_job_file, resolve_preset, JobFile, PresetEntry};
pub use records::{discover_launch_records, write_launch_record, LaunchRecord, RecordLayout};
