// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{fs, path::Path};

use assert_cmd::Command;
use tempfile::TempDir;

const MANIFEST: &str = r#"
[networks.development]
host = "127.0.0.1"
port = 7545
network_id = "*"

[networks.testnet]
rpc_url = "http://127.0.0.1:1"
network_id = 97
gas = 6000000
gas_price = "10 gwei"
confirmations = 2

[networks.mainnet]
enabled = false
rpc_url = "http://127.0.0.1:1"
secret = "PRIVATE_KEY_MAINNET"
network_id = 56

[compilers.solc]
version = "0.5.17"
optimizer = { enabled = true, runs = 200 }

[verify]
plugins = ["truffle-plugin-verify"]
api_keys = { bscscan = { env = "CARGO_DEPLOY_TEST_BSCSCAN_KEY" } }
"#;

fn project(manifest: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("Deploy.toml"), manifest).unwrap();
    dir
}

fn cargo_deploy(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("cargo-deploy").unwrap();
    cmd.arg("deploy")
        .current_dir(dir)
        .env_remove("PRIVATE_KEY")
        .env_remove("PRIVATE_KEY_MAINNET")
        .env_remove("CARGO_DEPLOY_TEST_BSCSCAN_KEY");
    cmd
}

fn stdout(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}

fn stderr_of_failure(cmd: &mut Command) -> String {
    let output = cmd.assert().failure().get_output().stderr.clone();
    String::from_utf8(output).unwrap()
}

#[test]
fn lists_enabled_networks() {
    let dir = project(MANIFEST);
    let out = stdout(cargo_deploy(dir.path()).arg("networks"));
    assert_eq!(out.lines().collect::<Vec<_>>(), vec!["development", "testnet"]);
}

#[test]
fn lists_disabled_networks_with_all() {
    let dir = project(MANIFEST);
    let out = stdout(cargo_deploy(dir.path()).args(["networks", "--all"]));
    assert!(out.contains("mainnet (disabled)"));
    assert_eq!(out.lines().count(), 3);
}

#[test]
fn unknown_network_fails() {
    let dir = project(MANIFEST);
    let err = stderr_of_failure(cargo_deploy(dir.path()).args(["show", "nonexistent"]));
    assert!(err.contains("unknown network: nonexistent"));
}

#[test]
fn disabled_network_fails() {
    let dir = project(MANIFEST);
    let err = stderr_of_failure(cargo_deploy(dir.path()).args(["show", "mainnet"]));
    assert!(err.contains("disabled"));
}

#[test]
fn show_does_not_need_credentials() {
    let dir = project(MANIFEST);
    let out = stdout(cargo_deploy(dir.path()).args(["show", "testnet"]));
    assert!(out.contains("97"));
    assert!(out.contains("PRIVATE_KEY"));
    assert!(out.contains("10 gwei") || out.contains("10.000000000 gwei"));
}

#[test]
fn check_without_private_key_reports_missing_credential() {
    let dir = project(MANIFEST);
    let err = stderr_of_failure(cargo_deploy(dir.path()).args(["check", "testnet"]));
    assert!(err.contains("missing credential PRIVATE_KEY"));
}

#[test]
fn compiler_settings_are_printed() {
    let dir = project(MANIFEST);
    let out = stdout(cargo_deploy(dir.path()).arg("compiler"));
    assert!(out.contains("0.5.17"));
    assert!(out.contains("200"));
}

#[test]
fn missing_compiler_version_fails() {
    let dir = project("[networks.development]\nhost = \"127.0.0.1\"\nport = 7545\n");
    let err = stderr_of_failure(cargo_deploy(dir.path()).arg("networks"));
    assert!(err.contains("missing compiler version"));
}

#[test]
fn missing_manifest_fails() {
    let dir = tempfile::tempdir().unwrap();
    let err = stderr_of_failure(cargo_deploy(dir.path()).arg("networks"));
    assert!(err.contains("Deploy.toml"));
}

#[test]
fn api_key_values_are_not_printed() {
    let dir = project(MANIFEST);
    let out = stdout(
        cargo_deploy(dir.path())
            .arg("api-keys")
            .env("CARGO_DEPLOY_TEST_BSCSCAN_KEY", "super-secret-value"),
    );
    assert!(out.contains("bscscan"));
    assert!(out.contains("set"));
    assert!(!out.contains("super-secret-value"));
}

#[test]
fn env_file_supplies_secrets() {
    let dir = project(MANIFEST);
    let env_file = dir.path().join("keys.env");
    fs::write(&env_file, "CARGO_DEPLOY_TEST_BSCSCAN_KEY=from-file\n").unwrap();
    let out = stdout(
        cargo_deploy(dir.path())
            .arg("api-keys")
            .arg("--env-file")
            .arg(&env_file),
    );
    assert!(out.contains("set"));
    assert!(!out.contains("not set"));
}

#[test]
fn env_file_next_to_manifest_is_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let project = dir.path().join("contracts");
    fs::create_dir(&project).unwrap();
    fs::write(project.join("Deploy.toml"), MANIFEST).unwrap();
    fs::write(
        project.join(".env"),
        "CARGO_DEPLOY_TEST_BSCSCAN_KEY=next-to-manifest\n",
    )
    .unwrap();

    let out = stdout(
        cargo_deploy(dir.path())
            .arg("api-keys")
            .arg("--config")
            .arg("contracts/Deploy.toml"),
    );
    assert!(out.contains("set"));
    assert!(!out.contains("not set"));
}

#[cfg(unix)]
#[test]
fn build_runs_external_command() {
    let manifest = format!(
        "{MANIFEST}\n[compilers.external]\ncommand = \"mkdir -p build && touch build/Hasher.json\"\ntargets = [{{ path = \"build/Hasher.json\" }}]\n"
    );
    let dir = project(&manifest);
    let out = stdout(cargo_deploy(dir.path()).arg("build"));
    assert!(out.contains("Hasher.json"));
    assert!(dir.path().join("build/Hasher.json").exists());
}

#[cfg(unix)]
#[test]
fn build_reports_missing_artifact() {
    let manifest = format!(
        "{MANIFEST}\n[compilers.external]\ncommand = \"true\"\ntargets = [\"build/Missing.json\"]\n"
    );
    let dir = project(&manifest);
    let err = stderr_of_failure(cargo_deploy(dir.path()).arg("build"));
    assert!(err.contains("Missing.json"));
}
