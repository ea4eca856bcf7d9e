//! CLI argument validation tests.
//!
//! These tests verify that the CLI validates configuration and fails fast
//! with helpful messages, without requiring network access.

use assert_cmd::Command;
use predicates::prelude::*;

/// A valid-looking vault address for argument tests.
const VAULT: &str = "0xBEEF01735c132Ada46AA9aA4c54623cAA92A64CB";
/// Anvil's default account 0 private key.
const PRIVATE_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// Command with the config env vars scrubbed so only explicit args apply.
fn vault_check_cmd() -> Command {
    let mut cmd = Command::cargo_bin("vault-check").expect("binary should build");
    cmd.env_remove("RPC_URL")
        .env_remove("PRIVATE_KEY")
        .env_remove("VAULT_ADDRESS");
    cmd
}

#[test]
fn test_help_output() {
    vault_check_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("vault-check"))
        .stdout(predicate::str::contains("--rpc-url"))
        .stdout(predicate::str::contains("--private-key"))
        .stdout(predicate::str::contains("--vault"));
}

#[test]
fn test_missing_configuration_is_fatal() {
    vault_check_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_missing_vault_address_is_fatal() {
    vault_check_cmd()
        .args(["--rpc-url", "http://localhost:8545"])
        .args(["--private-key", PRIVATE_KEY])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_invalid_vault_address() {
    vault_check_cmd()
        .args(["--rpc-url", "http://localhost:8545"])
        .args(["--private-key", PRIVATE_KEY])
        .args(["--vault", "not-an-address"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid vault address"));
}

#[test]
fn test_invalid_private_key() {
    vault_check_cmd()
        .args(["--rpc-url", "http://localhost:8545"])
        .args(["--private-key", "not_a_key"])
        .args(["--vault", VAULT])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid private key"));
}

#[test]
fn test_invalid_rpc_url() {
    vault_check_cmd()
        .args(["--rpc-url", "not a url"])
        .args(["--private-key", PRIVATE_KEY])
        .args(["--vault", VAULT])
        .assert()
        .failure()
        .stderr(predicate::str::contains("RPC connection failed"));
}
