// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

pub mod build;
pub mod compiler;
pub mod config;
pub mod manifest;
pub mod message;
pub mod network;
pub mod provider;
pub mod secrets;
pub mod verification;
