//! Bit Interleave conformance suite.
//!
//! Re-derives every law the interleave kernel promises and checks the
//! compiled kernel against it at runtime. The same suite backs the
//! `bit-interleave-conformance` runner.
//!
//! # Conformance Scope
//!
//! | Validator | Law |
//! |-----------|-----|
//! | `lut/tables` | Static tables equal regenerated tables; gather ∘ spread is the identity |
//! | `layout/laws` | Bit placement, zero / all-ones / unit vectors, golden vector |
//! | `layout/round_trip` | `deinterleave(interleave(a, b)) == (a, b)`, exhaustive and sampled |
//! | `layout/independence` | Changing one operand only changes its own parity |
//!
//! # Entry Point
//!
//! ```
//! use bit_interleave_conformance::{run_all, SuiteConfig};
//!
//! let config = SuiteConfig { samples: 1_000, ..SuiteConfig::default() };
//! let report = run_all(&config);
//! assert!(report.all_passed());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod report;
pub mod validators;
pub mod violation;

pub use report::{ConformanceReport, Severity, Tally, TestResult};
pub use violation::{Operand, Table, Violation};

/// Parameters of the sampled and exhaustive checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteConfig {
    /// Random `(a, b)` pairs to check.
    pub samples: u64,
    /// Seed of the pair sampler.
    pub seed: u64,
    /// Side of the exhaustive square `0..span × 0..span`.
    pub span: u32,
}

impl SuiteConfig {
    /// Default number of random pairs.
    pub const DEFAULT_SAMPLES: u64 = 100_000;
    /// Default sampler seed.
    pub const DEFAULT_SEED: u64 = 0x5EED;
    /// Default exhaustive span (every pair of bytes).
    pub const DEFAULT_SPAN: u32 = 256;
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            samples: Self::DEFAULT_SAMPLES,
            seed: Self::DEFAULT_SEED,
            span: Self::DEFAULT_SPAN,
        }
    }
}

/// Runs all conformance validators and returns the aggregated report.
///
/// Validators are run in this order:
/// 1. Lookup tables (regeneration, composition)
/// 2. Bit layout laws (placement, fixed vectors)
/// 3. Round trip and independence (exhaustive span, random samples)
pub fn run_all(config: &SuiteConfig) -> ConformanceReport {
    let mut report = ConformanceReport::new();

    report.extend(validators::tables::validate());
    report.extend(validators::laws::validate());
    report.extend(validators::round_trip::validate(config));

    report
}
