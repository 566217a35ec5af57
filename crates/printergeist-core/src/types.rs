// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for Printergeist.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{PrintergeistError, Result};

/// Prefix of every job title sent to the spooler.
pub const JOB_TITLE_PREFIX: &str = "PRINTERGEIST REQUEST";

/// `document-format` used when the MIME type cannot be guessed.
pub const FALLBACK_DOCUMENT_FORMAT: &str = "application/octet-stream";

/// Attribute map reported by the spooler for one printer.
///
/// Kept as an open string bag; only `device-uri` is ever inspected, the rest
/// is passed through for diagnostics.
pub type PrinterAttributes = BTreeMap<String, String>;

/// Job options sent alongside a document (IPP attribute name to value).
pub type JobOptions = BTreeMap<String, String>;

/// A printer queue configured in the spooler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrinterInfo {
    /// Queue name, unique within the spooler.
    pub name: String,
    pub attributes: PrinterAttributes,
}

impl PrinterInfo {
    pub fn new(name: impl Into<String>, attributes: PrinterAttributes) -> Self {
        Self {
            name: name.into(),
            attributes,
        }
    }

    /// The `device-uri` attribute, or an empty string when absent.
    pub fn device_uri(&self) -> &str {
        self.attributes
            .get("device-uri")
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Identifier the spooler assigned to a submitted job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JobId(pub i32);

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything needed to submit one file and describe it to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintRequest {
    pub path: PathBuf,
    /// Best-effort MIME type guessed from the file extension.
    pub mime_type: Option<&'static str>,
    pub size_bytes: u64,
    /// File name component shown in dialogs and the job title.
    pub display_name: String,
    pub is_color: bool,
    pub printer_name: String,
}

impl PrintRequest {
    /// Build a request for `path`, which must name an existing regular file.
    pub fn from_file(path: &Path, printer_name: String, is_color: bool) -> Result<Self> {
        let metadata = validate_file(path)?;

        let display_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self {
            path: path.to_path_buf(),
            mime_type: guess_mime_type(path),
            size_bytes: metadata.len(),
            display_name,
            is_color,
            printer_name,
        })
    }

    /// Title shown in the spooler queue.
    pub fn job_title(&self) -> String {
        format!("{JOB_TITLE_PREFIX} - {}", self.display_name)
    }

    /// The `document-format` sent with the job.
    pub fn document_format(&self) -> &'static str {
        self.mime_type.unwrap_or(FALLBACK_DOCUMENT_FORMAT)
    }

    /// Options passed to the spooler with the job.
    pub fn job_options(&self) -> JobOptions {
        let mut options = JobOptions::new();
        options.insert("document-format".into(), self.document_format().into());
        options
    }
}

/// Check that `path` exists and is a regular file, returning its metadata.
pub fn validate_file(path: &Path) -> Result<std::fs::Metadata> {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => Ok(meta),
        _ => Err(PrintergeistError::InvalidPath(path.display().to_string())),
    }
}

/// Well-known extension to MIME type mapping, no content sniffing.
static MIME_TYPES: &[(&str, &str)] = &[
    ("bmp", "image/bmp"),
    ("c", "text/plain"),
    ("csv", "text/csv"),
    ("doc", "application/msword"),
    ("docx", "application/vnd.openxmlformats-officedocument.wordprocessingml.document"),
    ("eps", "application/postscript"),
    ("gif", "image/gif"),
    ("h", "text/plain"),
    ("htm", "text/html"),
    ("html", "text/html"),
    ("jpe", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("jpg", "image/jpeg"),
    ("json", "application/json"),
    ("md", "text/markdown"),
    ("odg", "application/vnd.oasis.opendocument.graphics"),
    ("odp", "application/vnd.oasis.opendocument.presentation"),
    ("ods", "application/vnd.oasis.opendocument.spreadsheet"),
    ("odt", "application/vnd.oasis.opendocument.text"),
    ("pcl", "application/vnd.hp-pcl"),
    ("pdf", "application/pdf"),
    ("png", "image/png"),
    ("ppt", "application/vnd.ms-powerpoint"),
    ("pptx", "application/vnd.openxmlformats-officedocument.presentationml.presentation"),
    ("ps", "application/postscript"),
    ("pwg", "image/pwg-raster"),
    ("rtf", "application/rtf"),
    ("svg", "image/svg+xml"),
    ("text", "text/plain"),
    ("tif", "image/tiff"),
    ("tiff", "image/tiff"),
    ("txt", "text/plain"),
    ("urf", "image/urf"),
    ("webp", "image/webp"),
    ("xls", "application/vnd.ms-excel"),
    ("xlsx", "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"),
    ("xml", "text/xml"),
    ("zip", "application/zip"),
];

/// Guess a MIME type from the file extension (case-insensitive).
pub fn guess_mime_type(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    MIME_TYPES
        .binary_search_by(|(known, _)| (*known).cmp(ext.as_str()))
        .ok()
        .map(|idx| MIME_TYPES[idx].1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn mime_table_is_sorted() {
        assert!(MIME_TYPES.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn guesses_common_types() {
        assert_eq!(guess_mime_type(Path::new("report.pdf")), Some("application/pdf"));
        assert_eq!(guess_mime_type(Path::new("/tmp/photo.JPG")), Some("image/jpeg"));
        assert_eq!(guess_mime_type(Path::new("notes.txt")), Some("text/plain"));
    }

    #[test]
    fn unknown_or_missing_extension_is_none() {
        assert_eq!(guess_mime_type(Path::new("archive.xyz")), None);
        assert_eq!(guess_mime_type(Path::new("Makefile")), None);
    }

    #[test]
    fn device_uri_defaults_to_empty() {
        let printer = PrinterInfo::new("Office", PrinterAttributes::new());
        assert_eq!(printer.device_uri(), "");
    }

    #[test]
    fn request_from_existing_file() {
        let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        file.write_all(&[0u8; 1536]).unwrap();

        let req = PrintRequest::from_file(file.path(), "HP-Color".into(), true).unwrap();
        assert_eq!(req.size_bytes, 1536);
        assert_eq!(req.mime_type, Some("application/pdf"));
        assert!(req.display_name.ends_with(".pdf"));
        assert_eq!(req.job_title(), format!("PRINTERGEIST REQUEST - {}", req.display_name));
        assert_eq!(req.job_options()["document-format"], "application/pdf");
    }

    #[test]
    fn unknown_type_falls_back_to_octet_stream() {
        let file = tempfile::Builder::new().suffix(".bin42").tempfile().unwrap();
        let req = PrintRequest::from_file(file.path(), "Lab".into(), false).unwrap();
        assert_eq!(req.mime_type, None);
        assert_eq!(req.job_options()["document-format"], FALLBACK_DOCUMENT_FORMAT);
    }

    #[test]
    fn missing_file_is_invalid_path() {
        let err = PrintRequest::from_file(Path::new("/definitely/not/here.pdf"), "X".into(), true)
            .unwrap_err();
        assert!(matches!(err, PrintergeistError::InvalidPath(_)));
    }

    #[test]
    fn directory_is_invalid_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = validate_file(dir.path()).unwrap_err();
        assert!(matches!(err, PrintergeistError::InvalidPath(_)));
    }
}
