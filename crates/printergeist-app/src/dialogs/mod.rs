// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Dialog abstraction for the print flow.
//
// Three blocking dialogs plus a way to write a line to stdout. The flow
// only ever talks to the `Dialogs` trait.

pub mod terminal;

use printergeist_core::error::Result;

pub use terminal::TerminalDialogs;

/// User-facing dialogs.
pub trait Dialogs {
    /// Ask for a line of text. Returns `Ok(None)` if the user cancelled.
    fn input(&mut self, title: &str, text: &str) -> Result<Option<String>>;

    /// Offer a row of buttons and return the index picked, or `Ok(None)` if
    /// the dialog was dismissed without a choice.
    fn choose(&mut self, title: &str, text: &str, buttons: &[&str]) -> Result<Option<usize>>;

    /// Show a message and block until it is acknowledged.
    fn message(&mut self, title: &str, text: &str) -> Result<()>;

    /// Write a line to stdout outside any dialog.
    fn echo(&mut self, line: &str);
}
