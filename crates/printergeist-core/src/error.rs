// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Printergeist.

use thiserror::Error;

/// Top-level error type for all Printergeist operations.
#[derive(Debug, Error)]
pub enum PrintergeistError {
    // -- Input errors --
    #[error("invalid file path: {0}")]
    InvalidPath(String),

    // -- Spooler errors --
    #[error("printer listing failed: {0}")]
    Discovery(String),

    #[error("no printer found")]
    NoPrinterFound,

    #[error("IPP request failed: {0}")]
    IppRequest(String),

    // -- Configuration --
    #[error("configuration error: {0}")]
    Config(String),

    // -- Plumbing --
    #[error("terminal error: {0}")]
    Terminal(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, PrintergeistError>;
