// dockenv: Container Image Environment Exporter
//
// SPDX-FileCopyrightText: 2026 dockenv contributors
// SPDX-License-Identifier: MIT

//! Shell quoting for arbitrary environment values.
//!
//! ```text
//! quote(value)
//!      |
//!      v
//! needs_escape? --no--> '...'       embedded '  spliced as  '"'"'
//!      | yes
//!      v
//!   $'...'      \\ \t \n \r \xHH \uHHHH
//!               embedded '  spliced as  '"'"$'
//! ```

use std::fmt::Write as _;

/// Returns a shell-quoted form of `value`.
///
/// The result, when parsed by a POSIX-compatible shell that supports `$'...'`
/// ANSI-C quoting, reproduces `value` exactly. Values without characters that
/// need an escape sequence are wrapped in plain single quotes; everything
/// else goes through `$'...'` with backslash escapes. In both forms literal
/// single quotes are spliced in through separate quoting segments, since
/// neither `'...'` nor `$'...'` can represent `'` in place without breaking
/// the surrounding escape semantics.
///
/// Verified for ASCII 0x01-0x7f and Unicode. NUL bytes are outside the
/// supported range: the shell truncates `$'\x00'` at the NUL.
#[must_use]
pub fn quote(value: &str) -> String {
    if value.chars().any(needs_escape) {
        ansi_quote(value)
    } else {
        simple_quote(value)
    }
}

/// Whether `c` requires a backslash escape sequence to survive shell parsing.
///
/// Control characters (including DEL and the C1 range) have no literal form,
/// and a backslash would be ambiguous between the two quoting strategies.
/// Everything printable, `"` and `'` included, can be emitted literally.
fn needs_escape(c: char) -> bool {
    c.is_control() || c == '\\'
}

/// Plain single-quote wrapping: `'...'`, with embedded single quotes
/// spliced as `'"'"'` (close quote, `'` inside a double-quoted segment,
/// reopen quote).
fn simple_quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        if c == '\'' {
            out.push_str("'\"'\"'");
        } else {
            out.push(c);
        }
    }
    out.push('\'');
    out
}

/// ANSI-C quoting: `$'...'` with backslash escapes.
///
/// `\t`, `\n` and `\r` keep their named forms; other ASCII control bytes
/// become `\xHH` and non-ASCII control characters `\uHHHH`. An embedded `'`
/// closes the current `$'...'` segment, emits the quote through a
/// double-quoted segment and reopens a fresh `$'` segment: `'"'"$'`.
fn ansi_quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 3);
    out.push_str("$'");
    for c in value.chars() {
        match c {
            '\'' => out.push_str("'\"'\"$'"),
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c if c.is_ascii_control() => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}
