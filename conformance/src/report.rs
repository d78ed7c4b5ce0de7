//! Conformance report types: per-check results, their tally, and aggregation.
//!
//! Validators hand their [`Violation`]s to [`TestResult::from_violations`],
//! which turns an empty list into a pass and anything else into a failure
//! whose detail lines are the rendered violations.

use serde::Serialize;

use crate::violation::Violation;

/// Most detail lines attached to one failing result.
pub const MAX_DETAILS: usize = 16;

/// Severity level of a conformance check result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Every law the check covers held.
    Pass,
    /// The check could not run in full (non-blocking).
    Warning,
    /// At least one law was broken.
    Failure,
}

/// Outcome of one check.
#[derive(Debug, Clone, Serialize)]
pub struct TestResult {
    /// Validator that ran the check, e.g. `layout/round_trip`.
    pub validator: String,
    /// One-line outcome.
    pub message: String,
    /// Severity of the result.
    pub severity: Severity,
    /// Rendered violations, capped at [`MAX_DETAILS`] plus an overflow line.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

impl TestResult {
    /// Creates a passing result.
    pub fn pass(validator: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            validator: validator.into(),
            message: message.into(),
            severity: Severity::Pass,
            details: Vec::new(),
        }
    }

    /// Creates a warning result.
    pub fn warn(validator: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            validator: validator.into(),
            message: message.into(),
            severity: Severity::Warning,
            details: Vec::new(),
        }
    }

    /// Folds a check's findings into one result.
    ///
    /// No violations gives a pass carrying `passed`; otherwise a failure
    /// carrying `failed`, the violation count, and the first
    /// [`MAX_DETAILS`] violations.
    pub fn from_violations(
        validator: impl Into<String>,
        passed: impl Into<String>,
        failed: &str,
        violations: &[Violation],
    ) -> Self {
        if violations.is_empty() {
            return Self::pass(validator, passed);
        }

        let mut details: Vec<String> = violations
            .iter()
            .take(MAX_DETAILS)
            .map(ToString::to_string)
            .collect();
        if violations.len() > MAX_DETAILS {
            details.push(format!("... and {} more", violations.len() - MAX_DETAILS));
        }

        Self {
            validator: validator.into(),
            message: format!("{} ({} violation(s))", failed, violations.len()),
            severity: Severity::Failure,
            details,
        }
    }

    /// Returns true if this result represents a failure.
    pub fn is_failure(&self) -> bool {
        self.severity == Severity::Failure
    }
}

/// Result counts per severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    /// Passing checks.
    pub passed: usize,
    /// Warnings.
    pub warnings: usize,
    /// Failing checks.
    pub failed: usize,
}

/// Aggregated conformance report from all validators.
#[derive(Debug, Default, Serialize)]
pub struct ConformanceReport {
    /// All individual test results across all validators.
    pub results: Vec<TestResult>,
}

impl ConformanceReport {
    /// Creates a new empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a result to this report.
    pub fn push(&mut self, result: TestResult) {
        self.results.push(result);
    }

    /// Extends this report with results from another report.
    pub fn extend(&mut self, other: ConformanceReport) {
        self.results.extend(other.results);
    }

    /// Counts the results by severity.
    pub fn tally(&self) -> Tally {
        self.results
            .iter()
            .fold(Tally::default(), |mut tally, result| {
                match result.severity {
                    Severity::Pass => tally.passed += 1,
                    Severity::Warning => tally.warnings += 1,
                    Severity::Failure => tally.failed += 1,
                }
                tally
            })
    }

    /// Returns true if no check failed.
    pub fn all_passed(&self) -> bool {
        !self.results.iter().any(TestResult::is_failure)
    }
}
