//! Test-reporting collaborator
//!
//! Assertions record their verdict through a [`Reporter`] and return it,
//! without unwinding. [`TestReport`] collects verdicts and turns them into a
//! test failure when [`TestReport::finish`] is called.

use std::fmt;

use crate::ContractError;

/// Receives the verdict of an assertion
pub trait Reporter {
    /// Record one assertion. `failure` is the evaluation's failure reason, if any.
    fn report(&mut self, passed: bool, failure: Option<&ContractError>);
}

impl<F> Reporter for F
where
    F: FnMut(bool, Option<&ContractError>),
{
    fn report(&mut self, passed: bool, failure: Option<&ContractError>) {
        self(passed, failure)
    }
}

/// A single recorded assertion
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assertion {
    pub passed: bool,
    pub failure: Option<ContractError>,
}

impl fmt::Display for Assertion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.passed { "passed" } else { "failed" };
        match &self.failure {
            Some(failure) => write!(f, "{verdict} ({failure})"),
            None => write!(f, "{verdict}"),
        }
    }
}

/// Records assertions the way a test harness would, without aborting
#[derive(Clone, Debug, Default)]
pub struct TestReport {
    assertions: Vec<Assertion>,
}

impl TestReport {
    pub fn new() -> Self {
        TestReport::default()
    }

    /// True when no recorded assertion failed
    pub fn passed(&self) -> bool {
        self.assertions.iter().all(|a| a.passed)
    }

    /// Every recorded assertion, in order
    pub fn assertions(&self) -> &[Assertion] {
        &self.assertions
    }

    /// Failed assertions only
    pub fn failures(&self) -> impl Iterator<Item = &Assertion> {
        self.assertions.iter().filter(|a| !a.passed)
    }

    /// Panic if any assertion failed, listing each of them.
    ///
    /// # Panics
    ///
    /// Panics when at least one recorded assertion failed.
    #[track_caller]
    pub fn finish(self) {
        if self.passed() {
            return;
        }
        let failures: Vec<String> = self.failures().map(ToString::to_string).collect();
        panic!(
            "{} of {} contract assertions failed: {}",
            failures.len(),
            self.assertions.len(),
            failures.join("; ")
        );
    }
}

impl Reporter for TestReport {
    fn report(&mut self, passed: bool, failure: Option<&ContractError>) {
        self.assertions.push(Assertion {
            passed,
            failure: failure.cloned(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_records_without_aborting() {
        let mut report = TestReport::new();
        report.report(true, None);
        report.report(false, Some(&ContractError::ViolatedInvariant));

        assert!(!report.passed());
        assert_eq!(report.assertions().len(), 2);
        assert_eq!(report.failures().count(), 1);
    }

    #[test]
    fn test_finish_passes_when_clean() {
        let mut report = TestReport::new();
        report.report(true, None);
        report.finish();
    }

    #[test]
    #[should_panic(expected = "1 of 2 contract assertions failed: failed (violated invariant)")]
    fn test_finish_panics_on_failure() {
        let mut report = TestReport::new();
        report.report(true, None);
        report.report(false, Some(&ContractError::ViolatedInvariant));
        report.finish();
    }

    #[test]
    fn test_closure_reporter() {
        let mut verdicts = Vec::new();
        {
            let mut reporter = |passed: bool, _: Option<&ContractError>| verdicts.push(passed);
            reporter.report(false, None);
            reporter.report(true, None);
        }
        assert_eq!(verdicts, vec![false, true]);
    }
}
