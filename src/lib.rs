// dockenv: Container Image Environment Exporter
//
// SPDX-FileCopyrightText: 2026 dockenv contributors
// SPDX-License-Identifier: MIT

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                 main.rs
//!                    |
//!         +----------+----------+
//!         v                     v
//!      cli (clap)          cmd (handlers)
//!         |                   export
//!         +----------+----------+
//!                    v
//!       ,-----------------------,
//!       |        inspect        |
//!       |  runtime JSON env     |
//!       '----+-------------+----'
//!            |             |
//!            v             v
//!         process        quote
//!       tokio child    '...'/$'...'
//!
//!   +----------------------------------+
//!   |  foundation   error, logging     |
//!   +----------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod error;
pub mod inspect;
pub mod logging;
pub mod process;
pub mod quote;
