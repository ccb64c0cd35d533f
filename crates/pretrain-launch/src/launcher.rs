use crate::error::{LaunchError, LaunchResult};
use crate::invocation::Invocation;
use async_trait::async_trait;
use std::process::ExitStatus;

/// Result of driving one child process to completion.
#[derive(Debug, Clone, Copy)]
pub struct LaunchOutcome {
    pub status: ExitStatus,
}

impl LaunchOutcome {
    /// Exit code to propagate to the caller. Signal terminations, which carry
    /// no code, map to 1.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        self.status.code().unwrap_or(1)
    }
}

#[async_trait]
pub trait Launcher: Send + Sync {
    fn id(&self) -> &'static str;

    /// Spawn the invocation and wait for it to finish. The child inherits
    /// stdio; its output is never interpreted, only its exit status.
    async fn run(&self, invocation: &Invocation) -> LaunchResult<LaunchOutcome>;
}

/// Launcher backed by `tokio::process`, inheriting the parent's stdio.
#[derive(Debug, Default)]
pub struct ProcessLauncher;

#[async_trait]
impl Launcher for ProcessLauncher {
    fn id(&self) -> &'static str {
        "process"
    }

    async fn run(&self, invocation: &Invocation) -> LaunchResult<LaunchOutcome> {
        let mut command = tokio::process::Command::new(&invocation.program);
        command.args(&invocation.args);
        for (key, value) in &invocation.env {
            command.env(key, value);
        }

        let mut child = command.spawn().map_err(|source| LaunchError::Spawn {
            program: invocation.program.clone(),
            source,
        })?;
        let status = child.wait().await?;
        Ok(LaunchOutcome { status })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trivial_invocation(program: &str) -> Invocation {
        Invocation {
            program: program.to_string(),
            args: vec![],
            env: vec![("CUDA_VISIBLE_DEVICES".to_string(), "0".to_string())],
        }
    }

    #[tokio::test]
    async fn test_run_reports_child_exit_code() {
        let launcher = ProcessLauncher;
        let ok = launcher.run(&trivial_invocation("true")).await.unwrap();
        assert_eq!(ok.exit_code(), 0);

        let failed = launcher.run(&trivial_invocation("false")).await.unwrap();
        assert_eq!(failed.exit_code(), 1);
    }

    #[tokio::test]
    async fn test_run_missing_program_is_a_spawn_error() {
        let launcher = ProcessLauncher;
        let err = launcher
            .run(&trivial_invocation("definitely-not-a-real-interpreter"))
            .await
            .unwrap_err();
        assert!(matches!(err, LaunchError::Spawn { .. }));
    }
}
