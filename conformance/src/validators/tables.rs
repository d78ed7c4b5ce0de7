//! Lookup table validator.
//!
//! Checks that:
//! - the static tables equal a fresh regeneration, entry by entry
//! - the deinterleave table inverts the interleave table on both parities

use bit_interleave::lut::{
    deinterleave_table, gather_nibble, interleave_table, spread_byte, DEINTERLEAVE_TABLE,
    EVEN_BITS_MASK, INTERLEAVE_TABLE, ODD_BITS_MASK,
};

use crate::report::{ConformanceReport, TestResult};
use crate::violation::{Table, Violation};

const VALIDATOR: &str = "lut/tables";

/// Validates both lookup tables.
pub fn validate() -> ConformanceReport {
    let mut report = ConformanceReport::new();

    report.push(TestResult::from_violations(
        VALIDATOR,
        "Static tables match regenerated tables (256 + 256 entries)".to_string(),
        "Static tables drift from their generators",
        &regeneration_violations(),
    ));

    report.push(TestResult::from_violations(
        VALIDATOR,
        "Deinterleave table inverts interleave table for all 256 bytes".to_string(),
        "Deinterleave table does not invert interleave table",
        &composition_violations(),
    ));

    report
}

/// Compares every static entry against a freshly generated table.
fn regeneration_violations() -> Vec<Violation> {
    let fresh_interleave = interleave_table();
    let fresh_deinterleave = deinterleave_table();
    let mut violations = Vec::new();

    for index in 0..=255u8 {
        let i = usize::from(index);
        if INTERLEAVE_TABLE[i] != fresh_interleave[i] {
            violations.push(Violation::TableEntry {
                table: Table::Interleave,
                index,
                actual: INTERLEAVE_TABLE[i],
                expected: fresh_interleave[i],
            });
        }
        if DEINTERLEAVE_TABLE[i] != fresh_deinterleave[i] {
            violations.push(Violation::TableEntry {
                table: Table::Deinterleave,
                index,
                actual: u16::from(DEINTERLEAVE_TABLE[i]),
                expected: u16::from(fresh_deinterleave[i]),
            });
        }
    }

    violations
}

/// Spreads each byte, then gathers both halves back at both parities.
fn composition_violations() -> Vec<Violation> {
    let mut violations = Vec::new();

    for byte in 0..=255u8 {
        let [low, high] = spread_byte(byte).to_le_bytes();
        let halves = [(0u8, low, byte & 0xF), (1u8, high, byte >> 4)];

        for (nibble, half, expected) in halves {
            let even = gather_nibble(half & EVEN_BITS_MASK);
            if even != expected {
                violations.push(Violation::TableComposition {
                    byte,
                    parity: "even",
                    nibble,
                    actual: even,
                    expected,
                });
            }
            let odd = gather_nibble((half << 1) & ODD_BITS_MASK);
            if odd != expected {
                violations.push(Violation::TableComposition {
                    byte,
                    parity: "odd",
                    nibble,
                    actual: odd,
                    expected,
                });
            }
        }
    }

    violations
}
