// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Error dialog texts.
//
// Every error that ends a run is shown to the user in a message dialog
// before the process exits; this module owns the wording.

use crate::error::PrintergeistError;

/// Title and body of the dialog shown for an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDialog {
    pub title: String,
    pub text: String,
}

impl ErrorDialog {
    fn new(title: &str, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }
}

/// Map an error to the dialog the user sees.
pub fn dialog_for_error(err: &PrintergeistError) -> ErrorDialog {
    match err {
        PrintergeistError::InvalidPath(_) => {
            ErrorDialog::new("Error", "Invalid file path provided.")
        }

        PrintergeistError::NoPrinterFound => ErrorDialog::new("Error", "No printer found."),

        PrintergeistError::Discovery(detail) => ErrorDialog::new(
            "Error",
            format!("Could not reach the print spooler: {detail}"),
        ),

        // The spooler's own message is shown as-is.
        PrintergeistError::IppRequest(detail) => {
            ErrorDialog::new("ERROR", format!("Request error for: {detail}"))
        }

        // Config errors are logged at load time and never reach a dialog.
        PrintergeistError::Config(_)
        | PrintergeistError::Terminal(_)
        | PrintergeistError::Io(_)
        | PrintergeistError::Serialization(_) => ErrorDialog::new("Error", err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_path_text() {
        let dialog = dialog_for_error(&PrintergeistError::InvalidPath("/nope".into()));
        assert_eq!(dialog.title, "Error");
        assert_eq!(dialog.text, "Invalid file path provided.");
    }

    #[test]
    fn no_printer_text() {
        let dialog = dialog_for_error(&PrintergeistError::NoPrinterFound);
        assert_eq!(dialog.text, "No printer found.");
    }

    #[test]
    fn request_error_interpolates_detail() {
        let err = PrintergeistError::IppRequest("client-error-not-found".into());
        let dialog = dialog_for_error(&err);
        assert_eq!(dialog.title, "ERROR");
        assert_eq!(dialog.text, "Request error for: client-error-not-found");
    }

    #[test]
    fn discovery_error_mentions_spooler() {
        let err = PrintergeistError::Discovery("connection refused".into());
        let dialog = dialog_for_error(&err);
        assert!(dialog.text.contains("print spooler"));
        assert!(dialog.text.ends_with("connection refused"));
    }

    #[test]
    fn plumbing_errors_show_their_message() {
        let err = PrintergeistError::Terminal("raw mode unavailable".into());
        let dialog = dialog_for_error(&err);
        assert_eq!(dialog.title, "Error");
        assert_eq!(dialog.text, err.to_string());

        let err = PrintergeistError::Config("bad.json: expected value".into());
        assert_eq!(dialog_for_error(&err).text, err.to_string());
    }
}
