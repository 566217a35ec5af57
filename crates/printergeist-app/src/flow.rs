// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The print flow: menu, file prompt, confirmation, submission.
//
// Modelled as an explicit state machine. Every state except `Finished` is
// stepped exactly once; failures show an error dialog and finish the run.

use std::path::PathBuf;

use tracing::{info, warn};

use printergeist_core::AppConfig;
use printergeist_core::error::{PrintergeistError, Result};
use printergeist_core::format::format_bytes;
use printergeist_core::human_errors::dialog_for_error;
use printergeist_core::types::{JobId, PrintRequest, PrinterInfo, validate_file};
use printergeist_print::diagnostics::RULE;
use printergeist_print::{Spooler, guess_color, printer_dump, render_debug_log, select_printer};

use crate::dialogs::Dialogs;

pub const APP_TITLE: &str = "ᕕ( ᐛ )ᕗ  ~  P R I N T E R G E I S T  ~  ᕕ( ᐛ )ᕗ";

const MENU_BUTTONS: [&str; 2] = ["INIT", "EXIT"];
const MENU_INIT: usize = 0;

const FILE_PROMPT: &str = "* FILE PATH FOR PRINTING";

const REQUEST_TITLE: &str = "PRINT REQUEST";

/// Where the flow currently is.
#[derive(Debug)]
pub enum State {
    Menu,
    FileInput,
    /// A path was entered and still has to be checked.
    Validate(PathBuf),
    Confirm(PrintRequest),
    Submit(PrintRequest),
    Finished(Outcome),
}

/// How a run ended.
#[derive(Debug)]
pub enum Outcome {
    /// EXIT picked from the menu.
    Exited,
    /// File prompt cancelled or left empty.
    Cancelled,
    Printed(JobId),
    Failed(PrintergeistError),
}

impl Outcome {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Exited | Self::Cancelled | Self::Printed(_) => 0,
            Self::Failed(_) => 1,
        }
    }
}

/// One run of the dialog flow against a spooler.
pub struct PrintFlow<'a, S, D> {
    spooler: &'a S,
    dialogs: &'a mut D,
    config: &'a AppConfig,
    /// Snapshot taken while validating, reused for the debug log.
    printers: Vec<PrinterInfo>,
}

impl<'a, S: Spooler, D: Dialogs> PrintFlow<'a, S, D> {
    pub fn new(spooler: &'a S, dialogs: &'a mut D, config: &'a AppConfig) -> Self {
        Self {
            spooler,
            dialogs,
            config,
            printers: Vec::new(),
        }
    }

    /// Drive the flow from the menu to a terminal state.
    ///
    /// Errors are reserved for the dialogs themselves failing; everything the
    /// user should see ends up in `Outcome::Failed`.
    pub async fn run(mut self) -> Result<Outcome> {
        let mut state = State::Menu;
        loop {
            state = match state {
                State::Finished(outcome) => return Ok(outcome),
                other => self.step(other).await?,
            };
        }
    }

    /// Perform one transition.
    pub async fn step(&mut self, state: State) -> Result<State> {
        match state {
            State::Menu => self.menu(),
            State::FileInput => self.file_input(),
            State::Validate(path) => self.validate(path).await,
            State::Confirm(request) => self.confirm(request),
            State::Submit(request) => self.submit(request).await,
            finished @ State::Finished(_) => Ok(finished),
        }
    }

    fn menu(&mut self) -> Result<State> {
        let text = format!(
            "{RULE}\nSend a local file to a CUPS printer.\n\n\
             INIT  choose a file\nEXIT  quit\n{RULE}"
        );
        match self.dialogs.choose(APP_TITLE, &text, &MENU_BUTTONS)? {
            Some(MENU_INIT) => Ok(State::FileInput),
            _ => Ok(State::Finished(Outcome::Exited)),
        }
    }

    fn file_input(&mut self) -> Result<State> {
        match self.dialogs.input(APP_TITLE, FILE_PROMPT)? {
            Some(path) if !path.is_empty() => Ok(State::Validate(PathBuf::from(path))),
            _ => {
                info!("file prompt cancelled");
                Ok(State::Finished(Outcome::Cancelled))
            }
        }
    }

    async fn validate(&mut self, path: PathBuf) -> Result<State> {
        match self.prepare(path).await {
            Ok((request, printers)) => {
                self.printers = printers;
                Ok(State::Confirm(request))
            }
            Err(e) => self.fail(e),
        }
    }

    /// Check the file, pick a printer, and build the request.
    async fn prepare(&self, path: PathBuf) -> Result<(PrintRequest, Vec<PrinterInfo>)> {
        // The file is checked before the spooler is contacted at all.
        validate_file(&path)?;

        let printers = self.spooler.list_printers().await?;
        let printer_name = select_printer(&printers)?.name.clone();
        info!(printer = %printer_name, available = printers.len(), "printer selected");

        let is_color = guess_color(&printer_name);
        let request = PrintRequest::from_file(&path, printer_name, is_color)?;
        Ok((request, printers))
    }

    fn confirm(&mut self, request: PrintRequest) -> Result<State> {
        let text = format!(
            "Archive: {}\nMIME type: {}\nSize: {}\nColorful: {}\n{RULE}",
            request.display_name,
            request.mime_type.unwrap_or("unknown"),
            format_bytes(request.size_bytes),
            if request.is_color { "Yes" } else { "No" },
        );
        self.dialogs.message(REQUEST_TITLE, &text)?;
        Ok(State::Submit(request))
    }

    async fn submit(&mut self, request: PrintRequest) -> Result<State> {
        self.dialogs
            .echo(&format!("[ * ] Sending request: {}...", request.printer_name));

        let submitted = self
            .spooler
            .print_file(
                &request.printer_name,
                &request.path,
                &request.job_title(),
                &request.job_options(),
            )
            .await;

        let job_id = match submitted {
            Ok(job_id) => job_id,
            Err(e) => return self.fail(e),
        };
        info!(%job_id, printer = %request.printer_name, "print request accepted");

        tokio::time::sleep(self.config.submit_delay()).await;

        let text = format!(
            "[ ✓ ] Printing made successfully! Job ID: {job_id}\n{}",
            render_debug_log(&self.printers)?
        );
        self.dialogs.message(REQUEST_TITLE, &text)?;

        if self.config.echo_printer_dump {
            self.dialogs.echo(&printer_dump(&self.printers)?);
        }
        Ok(State::Finished(Outcome::Printed(job_id)))
    }

    /// Show the error to the user and finish the run.
    fn fail(&mut self, err: PrintergeistError) -> Result<State> {
        warn!(error = %err, "print request stopped");
        let dialog = dialog_for_error(&err);
        self.dialogs.message(&dialog.title, &dialog.text)?;
        Ok(State::Finished(Outcome::Failed(err)))
    }
}
