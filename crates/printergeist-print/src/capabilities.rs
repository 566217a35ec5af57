// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Printer capability guesses.

/// Guess whether a printer prints in colour from its queue name alone.
///
/// Names mentioning `gray` or `bw` (any case) are treated as monochrome.
/// This is only used for display; nothing is queried from the printer.
pub fn guess_color(printer_name: &str) -> bool {
    let lower = printer_name.to_lowercase();
    !(lower.contains("gray") || lower.contains("bw"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monochrome_names() {
        assert!(!guess_color("HP-LaserJet-BW"));
        assert!(!guess_color("Canon-Gray-2"));
        assert!(!guess_color("office_GRAYSCALE"));
    }

    #[test]
    fn colour_names() {
        assert!(guess_color("HP-Color-LaserJet"));
        assert!(guess_color("Brother_HL_L3270CDW_series"));
        assert!(guess_color(""));
    }

    #[test]
    fn substring_match_is_literal() {
        // "grey" is not "gray".
        assert!(guess_color("Epson-Grey"));
        assert!(!guess_color("NewBwPrinter"));
    }
}
