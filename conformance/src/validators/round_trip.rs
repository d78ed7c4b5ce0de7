//! Round-trip validator.
//!
//! Checks `deinterleave(interleave(a, b)) == (a, b)`:
//! - exhaustively over `0..span × 0..span`
//! - on `samples` random pairs drawn from the full u32 domain
//!
//! Random pairs also check operand independence: re-drawing only `a` may
//! change only the even bits of the code, and vice versa for `b`.

use bit_interleave::{deinterleave, interleave};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::report::{ConformanceReport, TestResult};
use crate::violation::{Operand, Violation};
use crate::SuiteConfig;

const VALIDATOR: &str = "layout/round_trip";

const EVEN_BITS: u64 = 0x5555_5555_5555_5555;
const ODD_BITS: u64 = 0xAAAA_AAAA_AAAA_AAAA;

/// Validates the round-trip contract.
pub fn validate(config: &SuiteConfig) -> ConformanceReport {
    let mut report = ConformanceReport::new();

    let span = config.span;
    report.push(TestResult::from_violations(
        VALIDATOR,
        format!("Exhaustive round trip over {span} x {span} pairs"),
        "Exhaustive round trip failed",
        &exhaustive_violations(span),
    ));

    if config.samples == 0 {
        report.push(TestResult::warn(
            VALIDATOR,
            "Random sampling skipped (0 samples requested)",
        ));
        return report;
    }

    let (round_trip, independence) = sampled_violations(config.samples, config.seed);
    report.push(TestResult::from_violations(
        VALIDATOR,
        format!(
            "Random round trip over {} pairs (seed {:#x})",
            config.samples, config.seed
        ),
        "Random round trip failed",
        &round_trip,
    ));
    report.push(TestResult::from_violations(
        "layout/independence",
        format!(
            "Operands only touch their own parity over {} pairs (seed {:#x})",
            config.samples, config.seed
        ),
        "Operand changes leak into the other parity",
        &independence,
    ));

    report
}

fn check(a: u32, b: u32, violations: &mut Vec<Violation>) -> u64 {
    let code = interleave(a, b);
    let (got_a, got_b) = deinterleave(code);
    if (got_a, got_b) != (a, b) {
        violations.push(Violation::RoundTrip {
            a,
            b,
            code,
            got_a,
            got_b,
        });
    }
    code
}

fn exhaustive_violations(span: u32) -> Vec<Violation> {
    let mut violations = Vec::new();
    for a in 0..span {
        for b in 0..span {
            check(a, b, &mut violations);
        }
    }
    violations
}

fn sampled_violations(samples: u64, seed: u64) -> (Vec<Violation>, Vec<Violation>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut round_trip = Vec::new();
    let mut independence = Vec::new();

    for _ in 0..samples {
        let a: u32 = rng.random();
        let b: u32 = rng.random();
        let code = check(a, b, &mut round_trip);

        // Re-draw one operand; the diff must stay on that operand's parity.
        let other_a: u32 = rng.random();
        let other_b: u32 = rng.random();

        independence.extend(parity_leak(Operand::A, code, interleave(other_a, b)));
        independence.extend(parity_leak(Operand::B, code, interleave(a, other_b)));
    }

    (round_trip, independence)
}

/// Compares two codes that differ only in `changed`'s value; any differing
/// bit on the other operand's parity is a leak.
fn parity_leak(changed: Operand, before: u64, after: u64) -> Option<Violation> {
    let foreign = match changed {
        Operand::A => ODD_BITS,
        Operand::B => EVEN_BITS,
    };
    let leaked = (before ^ after) & foreign;
    (leaked != 0).then_some(Violation::Independence {
        changed,
        before,
        after,
        leaked,
    })
}
