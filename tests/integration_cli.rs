// dockenv: Container Image Environment Exporter
//
// SPDX-FileCopyrightText: 2026 dockenv contributors
// SPDX-License-Identifier: MIT

//! Integration tests for CLI parsing.
//!
//! Tests the CLI module with realistic command-line argument patterns.

use clap::Parser;
use dockenv::cli::Cli;

// =============================================================================
// Positional Argument
// =============================================================================

#[test]
fn cli_image_reference() {
    let cli = Cli::try_parse_from(["dockenv", "alpine:3.19"]).unwrap();
    assert_eq!(cli.image, "alpine:3.19");
}

#[test]
fn cli_container_id() {
    let cli = Cli::try_parse_from(["dockenv", "3f2c1a9b8d7e"]).unwrap();
    assert_eq!(cli.image, "3f2c1a9b8d7e");
}

#[test]
fn cli_registry_qualified_image() {
    let cli = Cli::try_parse_from(["dockenv", "ghcr.io/acme/tool:v1.2.3"]).unwrap();
    assert_eq!(cli.image, "ghcr.io/acme/tool:v1.2.3");
}

#[test]
fn cli_missing_image_rejected() {
    assert!(Cli::try_parse_from(["dockenv"]).is_err());
}

#[test]
fn cli_extra_positional_rejected() {
    assert!(Cli::try_parse_from(["dockenv", "alpine", "fedora"]).is_err());
}

// =============================================================================
// Global Options
// =============================================================================

#[test]
fn cli_default_runtime_is_docker() {
    let cli = Cli::try_parse_from(["dockenv", "alpine"]).unwrap();
    assert_eq!(cli.global.runtime, "docker");
}

#[test]
fn cli_runtime_long_flag() {
    let cli = Cli::try_parse_from(["dockenv", "--runtime", "podman", "alpine"]).unwrap();
    assert_eq!(cli.global.runtime, "podman");
}

#[test]
fn cli_log_flags_combined() {
    let cli = Cli::try_parse_from([
        "dockenv",
        "-l",
        "4",
        "--log-file",
        "out.log",
        "--runtime",
        "nerdctl",
        "alpine",
    ])
    .unwrap();
    assert_eq!(cli.global.log_level, Some(4));
    assert_eq!(cli.global.runtime, "nerdctl");
    assert_eq!(
        cli.global.log_file.as_deref(),
        Some(std::path::Path::new("out.log"))
    );
}

#[test]
fn cli_log_level_out_of_range_rejected() {
    assert!(Cli::try_parse_from(["dockenv", "--log-level", "9", "alpine"]).is_err());
}
