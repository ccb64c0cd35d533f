//! Resolving a job spec from CLI arguments (preset name or job file).

use anyhow::{bail, Context, Result};
use pretrain_launch::{load_job_file, resolve_preset, JobSpec, ProgramSpec};
use std::path::PathBuf;

/// A job spec plus where it came from, for display and launch records.
#[derive(Debug)]
pub struct ResolvedJob {
    pub source: String,
    pub program: ProgramSpec,
    pub job: JobSpec,
}

pub fn resolve_job(
    preset: Option<String>,
    job_file: Option<PathBuf>,
    device: Option<String>,
) -> Result<ResolvedJob> {
    let mut resolved = match (preset, job_file) {
        (Some(_), Some(_)) => bail!("pass either a preset name or --job-file, not both"),
        (Some(name), None) => {
            let job = resolve_preset(&name)?;
            ResolvedJob { source: format!("preset:{name}"), program: ProgramSpec::default(), job }
        }
        (None, Some(path)) => {
            let file = load_job_file(&path)
                .with_context(|| format!("failed to load job file: {}", path.display()))?;
            ResolvedJob {
                source: format!("file:{}", path.display()),
                program: file.program.unwrap_or_default(),
                job: file.job,
            }
        }
        (None, None) => bail!("a preset name or --job-file is required"),
    };

    if let Some(raw) = device {
        resolved.job.devices = parse_devices(&raw)?;
    }
    resolved.job.validate()?;
    Ok(resolved)
}

fn parse_devices(raw: &str) -> Result<Vec<u32>> {
    raw.split(',')
        .map(|part| {
            part.trim()
                .parse::<u32>()
                .with_context(|| format!("invalid device index: {part}"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_devices() {
        assert_eq!(parse_devices("0").unwrap(), vec![0]);
        assert_eq!(parse_devices("0, 1,3").unwrap(), vec![0, 1, 3]);
        assert!(parse_devices("zero").is_err());
    }

    #[test]
    fn test_resolve_job_requires_a_source() {
        assert!(resolve_job(None, None, None).is_err());
    }

    #[test]
    fn test_resolve_job_rejects_both_sources() {
        let err = resolve_job(
            Some("chembl-uniform".to_string()),
            Some(PathBuf::from("job.toml")),
            None,
        )
        .unwrap_err();
        assert!(err.to_string().contains("not both"));
    }

    #[test]
    fn test_resolve_job_applies_device_override() {
        let resolved =
            resolve_job(Some("chembl-uniform".to_string()), None, Some("1,2".to_string())).unwrap();
        assert_eq!(resolved.job.devices, vec![1, 2]);
        assert_eq!(resolved.source, "preset:chembl-uniform");
    }
}
