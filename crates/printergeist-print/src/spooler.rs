// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The seam between the dialog flow and the print spooler.

use std::path::Path;

use printergeist_core::error::Result;
use printergeist_core::types::{JobId, JobOptions, PrinterInfo};

/// A print spooler that can list its queues and accept a file.
///
/// [`crate::CupsClient`] is the production implementation; tests substitute
/// an in-memory one.
#[allow(async_fn_in_trait)]
pub trait Spooler {
    /// All configured printers, in the order the spooler reports them.
    async fn list_printers(&self) -> Result<Vec<PrinterInfo>>;

    /// Submit `path` to `printer_name` as a single job.
    ///
    /// Fails with `PrintergeistError::IppRequest` on any transport or
    /// protocol error. There is no retry.
    async fn print_file(
        &self,
        printer_name: &str,
        path: &Path,
        title: &str,
        options: &JobOptions,
    ) -> Result<JobId>;
}
