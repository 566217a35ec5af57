// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Printergeist — Core types, configuration, and error definitions shared by
// the spooler client and the terminal front end.

pub mod config;
pub mod error;
pub mod format;
pub mod human_errors;
pub mod types;

pub use config::AppConfig;
pub use error::PrintergeistError;
pub use format::format_bytes;
pub use types::*;
