// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Printergeist Print — CUPS spooler client, printer selection, and the
// diagnostic dump shown after a job is accepted.

pub mod capabilities;
pub mod cups_client;
pub mod diagnostics;
pub mod selection;
pub mod spooler;

pub use capabilities::guess_color;
pub use cups_client::CupsClient;
pub use diagnostics::{printer_dump, render_debug_log};
pub use selection::select_printer;
pub use spooler::Spooler;
