// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Diagnostic dump of the spooler's printer list.
//
// Shown in the completion dialog and echoed to stdout so the user can see
// what the spooler reported. The layout is indented JSON with ` = ` between
// keys and values.

use std::io;

use serde::ser::{Serialize, Serializer};
use serde_json::ser::{Formatter, PrettyFormatter};

use printergeist_core::error::Result;
use printergeist_core::types::PrinterInfo;

/// Horizontal rule used between dialog sections.
pub const RULE: &str =
    "----------------------------------------------------------------------";

/// Printer list serialised as a name -> attributes object, in spooler order.
struct PrinterDump<'a>(&'a [PrinterInfo]);

impl Serialize for PrinterDump<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|p| (&p.name, &p.attributes)))
    }
}

/// Pretty printer that separates keys from values with ` = `.
struct DumpFormatter<'a> {
    inner: PrettyFormatter<'a>,
}

impl DumpFormatter<'_> {
    fn new() -> Self {
        Self {
            inner: PrettyFormatter::with_indent(b"    "),
        }
    }
}

impl Formatter for DumpFormatter<'_> {
    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_array(writer)
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object(writer)
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b" = ")
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object_value(writer)
    }
}

/// Render the printer list as indented `"key" = value` JSON.
pub fn printer_dump(printers: &[PrinterInfo]) -> Result<String> {
    let mut out = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut out, DumpFormatter::new());
    PrinterDump(printers).serialize(&mut ser)?;
    // serde_json only ever writes valid UTF-8.
    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// The debug-log section of the completion dialog.
pub fn render_debug_log(printers: &[PrinterInfo]) -> Result<String> {
    let now = chrono::Local::now().format("%d %b %Y, %H:%M:%S");
    let dump = printer_dump(printers)?;
    Ok(format!(
        "{RULE}\nCUPS DEBUG-LOG\n(JSON FORMAT)\nCaptured: {now}\n{RULE}\n{dump}"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use printergeist_core::types::PrinterAttributes;

    fn sample() -> Vec<PrinterInfo> {
        let mut zeta = PrinterAttributes::new();
        zeta.insert("device-uri".into(), "usb://HP/DeskJet".into());
        zeta.insert("printer-state".into(), "idle".into());
        let mut alpha = PrinterAttributes::new();
        alpha.insert("device-uri".into(), "ipp://10.0.0.2/ipp/print".into());
        vec![PrinterInfo::new("zeta", zeta), PrinterInfo::new("alpha", alpha)]
    }

    #[test]
    fn dump_uses_equals_separator_and_four_space_indent() {
        let dump = printer_dump(&sample()).unwrap();
        let expected = r#"{
    "zeta" = {
        "device-uri" = "usb://HP/DeskJet",
        "printer-state" = "idle"
    },
    "alpha" = {
        "device-uri" = "ipp://10.0.0.2/ipp/print"
    }
}"#;
        assert_eq!(dump, expected);
    }

    #[test]
    fn dump_keeps_spooler_order() {
        let dump = printer_dump(&sample()).unwrap();
        let zeta = dump.find("\"zeta\"").unwrap();
        let alpha = dump.find("\"alpha\"").unwrap();
        assert!(zeta < alpha);
    }

    #[test]
    fn empty_list_dumps_empty_object() {
        assert_eq!(printer_dump(&[]).unwrap(), "{}");
    }

    #[test]
    fn debug_log_has_headers_and_dump() {
        let log = render_debug_log(&sample()).unwrap();
        assert!(log.contains("CUPS DEBUG-LOG"));
        assert!(log.contains("(JSON FORMAT)"));
        assert!(log.ends_with(&printer_dump(&sample()).unwrap()));
    }
}
