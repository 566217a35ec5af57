// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable size formatting.

const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Format a byte count as `<value> <unit>` with one decimal place.
///
/// The value is divided by 1024 until it drops below 1024, climbing through
/// B, KB, MB and GB. Anything still at or above 1024 GB is shown in TB, which
/// is never divided further.
pub fn format_bytes(bytes: u64) -> String {
    let mut size = bytes as f64;
    for unit in UNITS {
        if size < 1024.0 {
            return format!("{size:.1} {unit}");
        }
        size /= 1024.0;
    }
    format!("{size:.1} TB")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_bytes() {
        assert_eq!(format_bytes(0), "0.0 B");
    }

    #[test]
    fn unit_boundaries() {
        assert_eq!(format_bytes(1023), "1023.0 B");
        assert_eq!(format_bytes(1024), "1.0 KB");
        assert_eq!(format_bytes(1_048_576), "1.0 MB");
        assert_eq!(format_bytes(1_073_741_824), "1.0 GB");
        assert_eq!(format_bytes(1_099_511_627_776), "1.0 TB");
    }

    #[test]
    fn fractional_values_round_to_one_decimal() {
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(5 * 1024 * 1024 + 512 * 1024), "5.5 MB");
        assert_eq!(format_bytes(1_000_000), "976.6 KB");
    }

    #[test]
    fn terabytes_are_never_divided_further() {
        // 2048 TiB stays in TB rather than rolling over to PB.
        assert_eq!(format_bytes(2048 * 1_099_511_627_776), "2048.0 TB");
    }
}
