// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Printer selection.

use printergeist_core::error::{PrintergeistError, Result};
use printergeist_core::types::PrinterInfo;

/// Device URI scheme of directly attached printers.
pub const USB_DEVICE_PREFIX: &str = "usb://";

/// Pick the printer to send to.
///
/// The first USB-attached printer wins; without one, the first printer in
/// spooler order is used.
pub fn select_printer(printers: &[PrinterInfo]) -> Result<&PrinterInfo> {
    printers
        .iter()
        .find(|p| p.device_uri().starts_with(USB_DEVICE_PREFIX))
        .or_else(|| printers.first())
        .ok_or(PrintergeistError::NoPrinterFound)
}
