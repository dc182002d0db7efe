// dockenv: Container Image Environment Exporter
//
// SPDX-FileCopyrightText: 2026 dockenv contributors
// SPDX-License-Identifier: MIT

//! Command handlers.

pub mod export;
