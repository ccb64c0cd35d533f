use crate::error::LaunchResult;
use crate::invocation::Invocation;
use crate::job::LaunchId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Filesystem layout for launch records.
///
/// Default layout is `.molpretrain/records/<launch_id>/launch.json` under the
/// working directory the launch was started from.
#[derive(Debug, Clone)]
pub struct RecordLayout {
    root: PathBuf,
}

impl RecordLayout {
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    #[must_use]
    pub fn for_working_dir(dir: &Path) -> Self {
        Self::new(dir.join(".molpretrain").join("records"))
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn launch_dir(&self, launch_id: &LaunchId) -> PathBuf {
        self.root.join(launch_id.0.as_str())
    }

    #[must_use]
    pub fn record_path(&self, launch_id: &LaunchId) -> PathBuf {
        self.launch_dir(launch_id).join("launch.json")
    }

    pub fn ensure_dirs(&self, launch_id: &LaunchId) -> LaunchResult<()> {
        std::fs::create_dir_all(self.launch_dir(launch_id))?;
        Ok(())
    }
}

/// Persisted description of one completed launch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchRecord {
    pub launch_id: LaunchId,
    pub started_at: DateTime<Utc>,
    /// Where the job spec came from (`preset:<name>` or `file:<path>`).
    pub source: String,
    pub invocation: Invocation,
    pub exit_code: i32,
}

/// Write a launch record, returning the path it was written to.
pub fn write_launch_record(layout: &RecordLayout, record: &LaunchRecord) -> LaunchResult<PathBuf> {
    layout.ensure_dirs(&record.launch_id)?;
    let path = layout.record_path(&record.launch_id);
    std::fs::write(&path, serde_json::to_vec_pretty(record)?)?;
    Ok(path)
}

/// Discover launch records by scanning `<root>/*/launch.json`, oldest first.
///
/// Directories without a readable record are skipped rather than failing the
/// whole listing.
pub fn discover_launch_records(layout: &RecordLayout) -> LaunchResult<Vec<LaunchRecord>> {
    let mut out = Vec::new();

    let dir = match std::fs::read_dir(layout.root()) {
        Ok(d) => d,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(out),
        Err(e) => return Err(e.into()),
    };

    for entry in dir {
        let entry = entry?;
        let launch_dir = entry.path();
        if !launch_dir.is_dir() {
            continue;
        }
        let record_path = launch_dir.join("launch.json");
        let Ok(bytes) = std::fs::read(&record_path) else {
            continue;
        };
        let Ok(record) = serde_json::from_slice::<LaunchRecord>(&bytes) else {
            continue;
        };
        out.push(record);
    }

    out.sort_by(|a, b| a.started_at.cmp(&b.started_at));
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job::{JobSpec, ProgramSpec};
    use crate::presets::resolve_preset;
    use tempfile::TempDir;

    fn sample_record(job: &JobSpec, exit_code: i32) -> LaunchRecord {
        LaunchRecord {
            launch_id: LaunchId::new(),
            started_at: Utc::now(),
            source: "preset:chembl-uniform".to_string(),
            invocation: Invocation::from_job(&ProgramSpec::default(), job),
            exit_code,
        }
    }

    #[test]
    fn test_record_roundtrip() {
        let temp = TempDir::new().unwrap();
        let layout = RecordLayout::for_working_dir(temp.path());
        let job = resolve_preset("chembl-uniform").unwrap();

        let record = sample_record(&job, 0);
        let path = write_launch_record(&layout, &record).unwrap();
        assert!(path.ends_with("launch.json"));

        let found = discover_launch_records(&layout).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].launch_id, record.launch_id);
        assert_eq!(found[0].invocation, record.invocation);
    }

    #[test]
    fn test_discover_empty_when_root_missing() {
        let temp = TempDir::new().unwrap();
        let layout = RecordLayout::for_working_dir(temp.path());
        assert!(discover_launch_records(&layout).unwrap().is_empty());
    }

    #[test]
    fn test_discover_skips_corrupt_records() {
        let temp = TempDir::new().unwrap();
        let layout = RecordLayout::for_working_dir(temp.path());
        let job = resolve_preset("chembl-uniform").unwrap();

        write_launch_record(&layout, &sample_record(&job, 0)).unwrap();

        let bogus = layout.root().join("bogus");
        std::fs::create_dir_all(&bogus).unwrap();
        std::fs::write(bogus.join("launch.json"), b"not json").unwrap();

        let found = discover_launch_records(&layout).unwrap();
        assert_eq!(found.len(), 1);
    }
}
