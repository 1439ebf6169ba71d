// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::path::{Path, PathBuf};

use crate::{core::manifest::TomlExternal, error::CommandFailure, utils::sys};

/// Errors which can occur while running the external build step.
#[derive(Debug, thiserror::Error)]
pub enum BuildStepError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("external build command failed: {0}")]
    Command(#[from] CommandFailure),

    #[error("external build command is empty")]
    EmptyCommand,
    #[error("external build did not produce {}", .0.display())]
    MissingArtifact(PathBuf),
}

/// A command run once before compilation, expected to write artifacts at fixed paths.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExternalBuildStep {
    pub command: String,
    pub targets: Vec<PathBuf>,
}

impl ExternalBuildStep {
    pub fn from_toml(external: &TomlExternal) -> Self {
        Self {
            command: external.command.clone(),
            targets: external
                .targets
                .iter()
                .map(|target| target.path().to_path_buf())
                .collect(),
        }
    }

    /// Runs the command from `root` through the platform shell and checks that every target was
    /// produced. Returns the target paths resolved against `root`.
    pub fn run(&self, root: impl AsRef<Path>) -> Result<Vec<PathBuf>, BuildStepError> {
        let root = root.as_ref();
        let command = self.command.trim();
        if command.is_empty() {
            return Err(BuildStepError::EmptyCommand);
        }

        info!(@grey, "running external build: {}", command);
        let output = sys::shell_command(command).current_dir(root).output()?;
        let stdout = CommandFailure::check(command, output)?;
        for line in stdout.lines() {
            debug!(@grey, "{}", line);
        }

        self.targets
            .iter()
            .map(|target| {
                let path = root.join(target);
                if path.is_file() {
                    debug!(@grey, "found artifact {}", path.display());
                    Ok(path)
                } else {
                    Err(BuildStepError::MissingArtifact(target.clone()))
                }
            })
            .collect()
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn step(command: &str, targets: &[&str]) -> ExternalBuildStep {
        ExternalBuildStep {
            command: command.to_string(),
            targets: targets.iter().map(PathBuf::from).collect(),
        }
    }

    #[test]
    fn produces_declared_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let artifacts = step(
            "mkdir -p build && echo '{}' > build/Hasher.json",
            &["./build/Hasher.json"],
        )
        .run(dir.path())
        .unwrap();
        assert_eq!(artifacts, vec![dir.path().join("./build/Hasher.json")]);
        assert!(artifacts[0].is_file());
    }

    #[test]
    fn missing_artifact_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = step("true", &["build/Hasher.json"])
            .run(dir.path())
            .unwrap_err();
        assert!(matches!(err, BuildStepError::MissingArtifact(path) if path == Path::new("build/Hasher.json")));
    }

    #[test]
    fn failing_command_reports_exit_code() {
        let dir = tempfile::tempdir().unwrap();
        let err = step("echo boom >&2; exit 3", &[]).run(dir.path()).unwrap_err();
        let BuildStepError::Command(failure) = err else {
            panic!("unexpected error: {err}");
        };
        assert_eq!(failure.output().exit_code, Some(3));
        assert!(failure.to_string().contains("boom"));
    }

    #[test]
    fn empty_command_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            step("  ", &[]).run(dir.path()),
            Err(BuildStepError::EmptyCommand)
        ));
    }
}
