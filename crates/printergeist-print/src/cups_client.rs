// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Async IPP client for a CUPS server.
//
// Uses the `ipp` crate's async API to send two operations:
//   - CUPS-Get-Printers  (CUPS extension, lists every local queue)
//   - Print-Job          (RFC 8011 §4.2.1, sent to /printers/<name>)

use std::io::Cursor;
use std::path::Path;

use ipp::prelude::*;
use tracing::{debug, error, info, instrument};

use printergeist_core::AppConfig;
use printergeist_core::error::{PrintergeistError, Result};
use printergeist_core::types::{
    FALLBACK_DOCUMENT_FORMAT, JobId, JobOptions, PrinterAttributes, PrinterInfo,
};

use crate::spooler::Spooler;

/// Spooler client bound to one CUPS server.
pub struct CupsClient {
    /// Server URI (ipp://host:port).
    server: Uri,
    /// Sent as `requesting-user-name` with every job.
    user_name: String,
}

impl CupsClient {
    /// Create a client for the CUPS server at `server_uri`.
    pub fn new(server_uri: &str, user_name: impl Into<String>) -> Result<Self> {
        let server: Uri = server_uri.parse().map_err(|e| {
            PrintergeistError::IppRequest(format!("invalid URI '{server_uri}': {e}"))
        })?;
        Ok(Self {
            server,
            user_name: user_name.into(),
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Self::new(&config.server_uri, config.user_name())
    }

    /// Return the server URI this client is targeting.
    pub fn server(&self) -> &Uri {
        &self.server
    }

    /// URI of a print queue on this server.
    pub fn printer_uri(&self, printer_name: &str) -> Result<Uri> {
        let base = self.server.to_string();
        let uri = format!("{}/printers/{printer_name}", base.trim_end_matches('/'));
        uri.parse()
            .map_err(|e| PrintergeistError::IppRequest(format!("invalid URI '{uri}': {e}")))
    }
}

impl Spooler for CupsClient {
    #[instrument(skip(self), fields(server = %self.server))]
    async fn list_printers(&self) -> Result<Vec<PrinterInfo>> {
        let operation = IppOperationBuilder::cups().get_printers();
        let client = AsyncIppClient::new(self.server.clone());

        debug!("sending CUPS-Get-Printers");
        let response = client
            .send(operation)
            .await
            .map_err(|e| PrintergeistError::Discovery(format!("CUPS-Get-Printers: {e}")))?;

        printers_from_reply(response.header().status_code(), response.attributes())
    }

    #[instrument(skip(self, path, options), fields(server = %self.server, path = %path.display()))]
    async fn print_file(
        &self,
        printer_name: &str,
        path: &Path,
        title: &str,
        options: &JobOptions,
    ) -> Result<JobId> {
        let uri = self.printer_uri(printer_name)?;
        let document = tokio::fs::read(path).await.map_err(|e| {
            PrintergeistError::IppRequest(format!("cannot read {}: {e}", path.display()))
        })?;
        let payload = IppPayload::new(Cursor::new(document));

        let format = options
            .get("document-format")
            .map(String::as_str)
            .unwrap_or(FALLBACK_DOCUMENT_FORMAT);

        let mut builder = IppOperationBuilder::print_job(uri.clone(), payload)
            .job_title(title)
            .user_name(&self.user_name)
            .document_format(format);
        for (name, value) in options.iter().filter(|(name, _)| *name != "document-format") {
            builder =
                builder.attribute(IppAttribute::new(name, IppValue::Keyword(value.clone().into())));
        }
        let operation = builder.build();

        let client = AsyncIppClient::new(uri);

        info!(mime = format, "sending Print-Job");
        let response = client
            .send(operation)
            .await
            .map_err(|e| PrintergeistError::IppRequest(format!("Print-Job: {e}")))?;

        if !response.header().status_code().is_success() {
            let code = response.header().status_code();
            error!(status = ?code, "Print-Job failed");
            return Err(PrintergeistError::IppRequest(format!(
                "Print-Job returned status {code:?}"
            )));
        }

        // The job-id is in the Job Attributes group.
        let job_id = extract_job_id(response.attributes()).ok_or_else(|| {
            PrintergeistError::IppRequest("Print-Job response missing job-id attribute".into())
        })?;

        info!(job_id, "print job accepted by spooler");
        Ok(JobId(job_id))
    }
}

// ---------------------------------------------------------------------------
// Helper functions for parsing IPP responses
// ---------------------------------------------------------------------------

/// Interpret a CUPS-Get-Printers reply.
///
/// CUPS answers not-found when no queue is configured, which is an empty
/// list rather than a failure.
fn printers_from_reply(code: StatusCode, attrs: &IppAttributes) -> Result<Vec<PrinterInfo>> {
    if matches!(code, StatusCode::ClientErrorNotFound) {
        debug!("spooler has no printers");
        return Ok(Vec::new());
    }
    if !code.is_success() {
        error!(status = ?code, "CUPS-Get-Printers failed");
        return Err(PrintergeistError::Discovery(format!(
            "CUPS-Get-Printers returned status {code:?}"
        )));
    }

    let printers = parse_printers(attrs);
    debug!(count = printers.len(), "received printer list");
    Ok(printers)
}

/// Turn each Printer Attributes group into a `PrinterInfo`, keeping the
/// order the server sent them in.
///
/// Groups without a `printer-name` are skipped.
fn parse_printers(attrs: &IppAttributes) -> Vec<PrinterInfo> {
    attrs
        .groups_of(DelimiterTag::PrinterAttributes)
        .filter_map(|group| {
            let attributes: PrinterAttributes = group
                .attributes()
                .iter()
                .map(|(name, attr)| (name.clone(), value_text(attr.value())))
                .collect();
            let name = attributes.get("printer-name")?.clone();
            Some(PrinterInfo::new(name, attributes))
        })
        .collect()
}

/// Text form of an attribute value; multi-valued attributes are joined
/// with `, `.
fn value_text(value: &IppValue) -> String {
    match value {
        IppValue::Array(values) => values.iter().map(value_text).collect::<Vec<_>>().join(", "),
        other => other.to_string(),
    }
}

/// Extract the `job-id` integer from a response's Job Attributes group.
fn extract_job_id(attrs: &IppAttributes) -> Option<i32> {
    for group in attrs.groups_of(DelimiterTag::JobAttributes) {
        if let Some(attr) = group.attributes().get("job-id")
            && let IppValue::Integer(id) = attr.value()
        {
            return Some(*id);
        }
    }
    None
}
