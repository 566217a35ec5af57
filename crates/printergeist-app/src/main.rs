// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Printergeist — pick a file in a terminal dialog and send it to CUPS.
//
// Entry point. Initialises logging and configuration, connects the CUPS
// client, and runs the dialog flow once.

mod dialogs;
mod flow;
mod theme;

use std::process::ExitCode;

use printergeist_core::AppConfig;
use printergeist_core::human_errors::dialog_for_error;
use printergeist_print::CupsClient;
use tracing_subscriber::EnvFilter;

use dialogs::{Dialogs, TerminalDialogs};
use flow::PrintFlow;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // stderr, warnings only unless RUST_LOG says otherwise.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Printergeist starting");

    let config = AppConfig::load();
    let mut dialogs = TerminalDialogs::new();

    let spooler = match CupsClient::from_config(&config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, server = %config.server_uri, "cannot build spooler client");
            let dialog = dialog_for_error(&e);
            if let Err(e) = dialogs.message(&dialog.title, &dialog.text) {
                tracing::error!(error = %e, "error dialog failed");
            }
            return ExitCode::FAILURE;
        }
    };

    match PrintFlow::new(&spooler, &mut dialogs, &config).run().await {
        Ok(outcome) => {
            tracing::info!(?outcome, "Printergeist finished");
            ExitCode::from(outcome.exit_code())
        }
        Err(e) => {
            tracing::error!(error = %e, "dialog flow aborted");
            eprintln!("printergeist: {e}");
            ExitCode::FAILURE
        }
    }
}
