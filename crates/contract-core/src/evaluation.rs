//! Result of evaluating a contract, and the reactions to a failure
//!
//! A [`ConditionEvaluation`] is either fulfilled or carries the
//! [`ContractError`] explaining why not. It never changes after construction;
//! the caller picks how to react:
//!
//! | reaction                | on failure                         |
//! |-------------------------|------------------------------------|
//! | `panic_on_failure`      | panics with the reason             |
//! | `error_on_failure`      | returns the reason as `Err`        |
//! | `log_on_failure`        | writes the reason to a log sink    |
//! | `assert_(un)fulfilled`  | records a verdict on a reporter    |
//!
//! Reactions take `&self`, so an evaluation can be reacted to any number of
//! times with the same result.

use crate::{ContractError, FailureLog, Outcome, Reaction, Reporter, TracingLog};

/// The result of checking a condition
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[must_use = "a failed evaluation does nothing unless reacted to"]
pub struct ConditionEvaluation {
    failure: Option<ContractError>,
}

impl ConditionEvaluation {
    /// The evaluation of any condition that held
    pub const FULFILLED: ConditionEvaluation = ConditionEvaluation { failure: None };

    /// Wrap the outcome of a condition
    pub fn new(outcome: Outcome) -> Self {
        ConditionEvaluation {
            failure: outcome.err(),
        }
    }

    /// An evaluation that failed for `failure`
    pub fn unfulfilled(failure: ContractError) -> Self {
        ConditionEvaluation {
            failure: Some(failure),
        }
    }

    #[inline]
    pub fn is_fulfilled(&self) -> bool {
        self.failure.is_none()
    }

    #[inline]
    pub fn is_unfulfilled(&self) -> bool {
        self.failure.is_some()
    }

    /// Why the evaluation failed, if it did
    pub fn failure(&self) -> Option<&ContractError> {
        self.failure.as_ref()
    }

    /// Panic if the condition was not fulfilled.
    ///
    /// # Panics
    ///
    /// Panics with the failure reason as message.
    #[track_caller]
    pub fn panic_on_failure(&self) {
        if let Some(failure) = &self.failure {
            panic!("{}", failure);
        }
    }

    /// Hand the failure back to the caller as a recoverable error
    pub fn error_on_failure(&self) -> Outcome {
        match &self.failure {
            Some(failure) => Err(failure.clone()),
            None => Ok(()),
        }
    }

    /// Log the failure through `tracing`; never interrupts control flow
    pub fn log_on_failure(&self) {
        self.log_on_failure_to(&TracingLog);
    }

    /// Log the failure to a specific sink
    pub fn log_on_failure_to(&self, log: &dyn FailureLog) {
        if let Some(failure) = &self.failure {
            log.write(failure);
        }
    }

    /// Record whether the condition was fulfilled, returning the verdict
    pub fn assert_fulfilled(&self, reporter: &mut dyn Reporter) -> bool {
        let passed = self.is_fulfilled();
        reporter.report(passed, self.failure());
        passed
    }

    /// Record whether the condition was unfulfilled, returning the verdict
    pub fn assert_unfulfilled(&self, reporter: &mut dyn Reporter) -> bool {
        let passed = self.is_unfulfilled();
        reporter.report(passed, self.failure());
        passed
    }

    /// React according to a configured policy.
    ///
    /// Only [`Reaction::Error`] can yield `Err`; the other policies return
    /// `Ok(())` once they have panicked or logged.
    #[track_caller]
    pub fn react(&self, reaction: Reaction) -> Outcome {
        match reaction {
            Reaction::Panic => {
                self.panic_on_failure();
                Ok(())
            }
            Reaction::Error => self.error_on_failure(),
            Reaction::Log => {
                self.log_on_failure();
                Ok(())
            }
        }
    }
}

impl From<Outcome> for ConditionEvaluation {
    fn from(outcome: Outcome) -> Self {
        ConditionEvaluation::new(outcome)
    }
}

impl From<ContractError> for ConditionEvaluation {
    fn from(failure: ContractError) -> Self {
        ConditionEvaluation::unfulfilled(failure)
    }
}
