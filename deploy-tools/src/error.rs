// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::core::message::ProcessOutput;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("dotenv error: {0}")]
    DotEnv(#[from] dotenv::Error),

    #[error("{0}")]
    Config(#[from] crate::core::network::ConfigError),
    #[error("{0}")]
    Manifest(#[from] crate::core::manifest::ManifestError),
    #[error("{0}")]
    Connection(#[from] crate::core::provider::ConnectionError),
    #[error("{0}")]
    BuildStep(#[from] crate::core::build::BuildStepError),
}

#[derive(Debug, thiserror::Error)]
#[error("command failed (exit code: {code:?}){stderr}", code = .0.exit_code, stderr = .0.stderr_suffix())]
pub struct CommandFailure(ProcessOutput);

impl CommandFailure {
    pub fn check(
        process_name: impl Into<String>,
        output: std::process::Output,
    ) -> Result<String, Self> {
        let process_output = ProcessOutput {
            process_name: process_name.into(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            exit_code: output.status.code(),
        };
        if output.status.success() {
            Ok(process_output.stdout)
        } else {
            Err(CommandFailure(process_output))
        }
    }

    pub fn output(&self) -> &ProcessOutput {
        &self.0
    }
}
