// dockenv: Container Image Environment Exporter
//
// SPDX-FileCopyrightText: 2026 dockenv contributors
// SPDX-License-Identifier: MIT

use super::{LogConfig, LogLevel};

#[test]
fn test_log_level_from_u8_bounds() {
    assert_eq!(LogLevel::from_u8(0), Some(LogLevel::SILENT));
    assert_eq!(LogLevel::from_u8(3), Some(LogLevel::INFO));
    assert_eq!(LogLevel::from_u8(6), Some(LogLevel::DUMP));
    assert_eq!(LogLevel::from_u8(7), None);
}

#[test]
fn test_log_level_filter_strings() {
    let filters: Vec<_> = (0..=6)
        .map(|n| LogLevel::from_u8(n).unwrap().to_filter_string())
        .collect();
    insta::assert_debug_snapshot!(
        filters,
        @r#"
    [
        "off",
        "error",
        "warn",
        "info",
        "debug",
        "trace",
        "trace",
    ]
    "#
    );
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::INFO);
    assert_eq!(config.file_level(), LogLevel::TRACE);
    assert!(config.log_file().is_none());
    assert!(!config.show_target());
}

#[test]
fn test_log_config_builder() {
    let config = LogConfig::builder()
        .with_console_level(LogLevel::WARN)
        .with_file_level(LogLevel::DUMP)
        .with_log_file("dockenv.log".to_string())
        .build();
    assert_eq!(config.console_level().as_u8(), 2);
    assert_eq!(config.file_level().as_u8(), 6);
    assert_eq!(config.log_file(), Some("dockenv.log"));
}
