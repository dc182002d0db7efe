// dockenv: Container Image Environment Exporter
//
// SPDX-FileCopyrightText: 2026 dockenv contributors
// SPDX-License-Identifier: MIT

use super::{EnvVar, parse_env_json};
use crate::error::EnvError;

#[test]
fn test_parse_entry_splits_on_first_equals() {
    let var = EnvVar::parse("LS_COLORS=rs=0:di=01;34").unwrap();
    assert_eq!(var.key, "LS_COLORS");
    assert_eq!(var.value, "rs=0:di=01;34");
}

#[test]
fn test_parse_entry_empty_value() {
    let var = EnvVar::parse("EMPTY=").unwrap();
    assert_eq!(var.key, "EMPTY");
    assert_eq!(var.value, "");
}

#[test]
fn test_parse_entry_missing_separator() {
    let err = EnvVar::parse("NOEQUALS").unwrap_err();
    assert!(matches!(err, EnvError::MissingSeparator { .. }));
}

#[test]
fn test_parse_env_json_preserves_order() {
    let vars = parse_env_json(r#"["PATH=/usr/bin","TERM=xterm","A=1"]"#).unwrap();
    assert_eq!(
        vars,
        vec![
            EnvVar {
                key: "PATH".to_string(),
                value: "/usr/bin".to_string()
            },
            EnvVar {
                key: "TERM".to_string(),
                value: "xterm".to_string()
            },
            EnvVar {
                key: "A".to_string(),
                value: "1".to_string()
            },
        ]
    );
}

#[test]
fn test_parse_env_json_empty_array() {
    let vars = parse_env_json("[]").unwrap();
    assert!(vars.is_empty());
}

#[test]
fn test_parse_env_json_trailing_newline() {
    // docker's --format output ends with a newline
    let vars = parse_env_json("[\"A=1\"]\n").unwrap();
    assert_eq!(vars.len(), 1);
}

#[test]
fn test_parse_env_json_null_is_an_error() {
    // images without a configured env inspect to `null`
    let err = parse_env_json("null").unwrap_err();
    assert!(matches!(err, EnvError::MalformedJson { .. }));
}

#[test]
fn test_parse_env_json_malformed() {
    let err = parse_env_json("not json at all").unwrap_err();
    assert!(matches!(err, EnvError::MalformedJson { .. }));
}

#[test]
fn test_parse_env_json_entry_without_separator() {
    let err = parse_env_json(r#"["GOOD=1","BAD"]"#).unwrap_err();
    assert!(matches!(err, EnvError::MissingSeparator { .. }));
}
