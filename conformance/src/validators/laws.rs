//! Bit layout validator.
//!
//! Checks the fixed laws of the Morton layout:
//! - every single-bit input lands on bit `2i` (first operand) or `2i + 1`
//! - the zero, all-ones, and unit vectors
//! - the golden vector `(0x12345678, 0x9ABCDEF0)`

use bit_interleave::{deinterleave, interleave};

use crate::report::{ConformanceReport, TestResult};
use crate::violation::{Operand, Violation};

const VALIDATOR: &str = "layout/laws";

/// Golden interleave vector, derived by hand from the bit-placement law.
pub const GOLDEN_A: u32 = 0x1234_5678;
/// Second operand of the golden vector.
pub const GOLDEN_B: u32 = 0x9ABC_DEF0;
/// Expected code for `(GOLDEN_A, GOLDEN_B)`.
pub const GOLDEN_CODE: u64 = 0x838C_8FB0_B3BC_BF40;

/// `(name, a, b, code)` vectors checked in both directions.
const FIXED_VECTORS: [(&str, u32, u32, u64); 6] = [
    ("zero", 0, 0, 0),
    ("all-ones", u32::MAX, u32::MAX, u64::MAX),
    ("unit a", 1, 0, 0x1),
    ("unit b", 0, 1, 0x2),
    ("even only", u32::MAX, 0, 0x5555_5555_5555_5555),
    ("golden", GOLDEN_A, GOLDEN_B, GOLDEN_CODE),
];

/// Validates the bit layout laws.
pub fn validate() -> ConformanceReport {
    let mut report = ConformanceReport::new();

    report.push(TestResult::from_violations(
        VALIDATOR,
        "All 64 single-bit inputs land on their interleaved position".to_string(),
        "Single-bit inputs land on the wrong position",
        &bit_placement_violations(),
    ));

    report.push(TestResult::from_violations(
        VALIDATOR,
        format!("All {} fixed vectors match in both directions", FIXED_VECTORS.len()),
        "Fixed vectors do not match",
        &fixed_vector_violations(),
    ));

    report
}

fn bit_placement_violations() -> Vec<Violation> {
    let mut violations = Vec::new();

    for bit in 0..32u32 {
        let even = interleave(1 << bit, 0);
        let expected_even = 1u64 << (2 * bit);
        if even != expected_even {
            violations.push(Violation::BitPlacement {
                operand: Operand::A,
                bit,
                actual: even,
                expected: expected_even,
            });
        }

        let odd = interleave(0, 1 << bit);
        let expected_odd = 1u64 << (2 * bit + 1);
        if odd != expected_odd {
            violations.push(Violation::BitPlacement {
                operand: Operand::B,
                bit,
                actual: odd,
                expected: expected_odd,
            });
        }
    }

    violations
}

fn fixed_vector_violations() -> Vec<Violation> {
    let mut violations = Vec::new();

    for (case, a, b, code) in FIXED_VECTORS {
        let actual = interleave(a, b);
        if actual != code {
            violations.push(Violation::Interleave {
                case,
                a,
                b,
                actual,
                expected: code,
            });
        }

        let pair = deinterleave(code);
        if pair != (a, b) {
            violations.push(Violation::Deinterleave {
                case,
                code,
                actual: pair,
                expected: (a, b),
            });
        }
    }

    violations
}
