//! End-to-end tests for the kartklient binary surface.
//!
//! These only exercise flows that need no network: help, version, and
//! argument validation. The service-backed flows are covered by the
//! wiremock-based integration tests against the library clients.

use assert_cmd::Command;
use predicates::prelude::*;

fn kartklient() -> Command {
    Command::cargo_bin("kartklient").expect("binary builds")
}

#[test]
fn test_help_lists_subcommands() {
    kartklient()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("layers"))
        .stdout(predicate::str::contains("order"));
}

#[test]
fn test_version_prints_crate_version() {
    kartklient()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_subcommand_fails_with_usage() {
    kartklient()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_order_without_required_flags_fails() {
    kartklient()
        .args(["order", "some-uuid"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--email"));
}

#[test]
fn test_search_rejects_out_of_range_limit() {
    kartklient()
        .args(["search", "storgata", "--limit", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_layers_rejects_unparsable_endpoint() {
    kartklient()
        .args(["-q", "layers", "not a url"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid WMS endpoint URL"));
}
