// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

/// The manifest read when `--config` is not given.
pub const DEFAULT_CONFIG: &str = deploy_tools::core::manifest::FILENAME;

/// Secrets file looked up next to the manifest.
pub const ENV_FILE: &str = ".env";
