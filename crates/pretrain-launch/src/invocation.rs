use crate::job::{JobSpec, ProgramSpec};
use serde::{Deserialize, Serialize};

/// Environment variable restricting the compute devices the child sees.
pub const CUDA_VISIBLE_DEVICES: &str = "CUDA_VISIBLE_DEVICES";

/// A fully resolved child-process invocation.
///
/// Construction is a pure function of the program and job specs: the same
/// inputs always yield the same program, argument vector, and environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invocation {
    /// Executable to spawn (the interpreter).
    pub program: String,
    /// Argument vector; the script path comes first, then the flags.
    pub args: Vec<String>,
    /// Environment entries applied on top of the inherited environment.
    pub env: Vec<(String, String)>,
}

impl Invocation {
    #[must_use]
    pub fn from_job(program: &ProgramSpec, job: &JobSpec) -> Self {
        let mut args = vec![program.script.display().to_string()];

        args.push("--title".to_string());
        args.push(job.title.clone());
        args.push("--data_root".to_string());
        args.push(job.data_root.display().to_string());
        args.push("--split_index_folder".to_string());
        args.push(job.split_index_folder.display().to_string());
        args.push("--batch_size".to_string());
        args.push(job.batch_size.to_string());
        args.push("--num_workers".to_string());
        args.push(job.num_workers.to_string());
        args.push("--ckpt".to_string());
        args.push(job.ckpt.display().to_string());
        args.push("--dataset".to_string());
        args.push(job.dataset.clone());
        args.push("--tb_root".to_string());
        args.push(job.tb_root.display().to_string());
        if job.tb_log {
            args.push("--tb_log".to_string());
        }
        if job.weighted_sample_mask {
            args.push("--weighted_sample_mask".to_string());
        }

        let env = vec![(CUDA_VISIBLE_DEVICES.to_string(), job.visible_devices())];

        Self { program: program.interpreter.clone(), args, env }
    }

    /// Shell-style rendering for display. Spawning uses the structured
    /// fields directly, never this string.
    #[must_use]
    pub fn to_command_line(&self) -> String {
        let mut parts: Vec<String> =
            self.env.iter().map(|(key, value)| format!("{key}={value}")).collect();
        parts.push(self.program.clone());
        parts.extend(self.args.iter().cloned());
        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::resolve_preset;

    #[test]
    fn test_reference_launch_argument_vector() {
        let job = resolve_preset("chembl-uniform").unwrap();
        let invocation = Invocation::from_job(&ProgramSpec::default(), &job);

        assert_eq!(invocation.program, "python");
        assert_eq!(
            invocation.args,
            vec![
                "self-sup_pre-train.py",
                "--title",
                "ChEMBL_uniform",
                "--data_root",
                "/public/gwellawa/mol_graphs_no_metals",
                "--split_index_folder",
                "/scratch/zli82/cg_exp/ChEMBL_split",
                "--batch_size",
                "18",
                "--num_workers",
                "18",
                "--ckpt",
                "/scratch/zli82/cg_exp/ckpt/ChEMBL",
                "--dataset",
                "ChEMBL",
                "--tb_root",
                "/scratch/zli82/cg_exp/tensorboard",
                "--tb_log",
            ]
        );
        assert_eq!(invocation.env, vec![(CUDA_VISIBLE_DEVICES.to_string(), "0".to_string())]);
    }

    #[test]
    fn test_weighted_sample_mask_absent_by_default() {
        let job = resolve_preset("chembl-uniform").unwrap();
        let invocation = Invocation::from_job(&ProgramSpec::default(), &job);
        assert!(!invocation.args.iter().any(|a| a == "--weighted_sample_mask"));
    }

    #[test]
    fn test_weighted_sample_mask_present_when_enabled() {
        let mut job = resolve_preset("chembl-uniform").unwrap();
        job.weighted_sample_mask = true;
        let invocation = Invocation::from_job(&ProgramSpec::default(), &job);
        assert_eq!(invocation.args.last().map(String::as_str), Some("--weighted_sample_mask"));
    }

    #[test]
    fn test_construction_is_idempotent() {
        let job = resolve_preset("chembl-uniform").unwrap();
        let program = ProgramSpec::default();
        let first = Invocation::from_job(&program, &job);
        let second = Invocation::from_job(&program, &job);
        assert_eq!(first, second);
    }

    #[test]
    fn test_command_line_rendering() {
        let job = resolve_preset("chembl-uniform").unwrap();
        let invocation = Invocation::from_job(&ProgramSpec::default(), &job);
        let line = invocation.to_command_line();
        assert!(line.starts_with("CUDA_VISIBLE_DEVICES=0 python self-sup_pre-train.py"));
        assert!(line.ends_with("--tb_log"));
    }
}
