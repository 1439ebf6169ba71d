// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

/// Captured output of an external process.
#[derive(Debug)]
pub struct ProcessOutput {
    pub process_name: String,
    pub stdout: String,
    pub stderr: String,
    pub exit_code: Option<i32>,
}

impl ProcessOutput {
    pub(crate) fn stderr_suffix(&self) -> String {
        let stderr = self.stderr.trim();
        if stderr.is_empty() {
            String::new()
        } else {
            format!(": {stderr}")
        }
    }
}
