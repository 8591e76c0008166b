//! Snapshot invariants
//!
//! An [`Invariant`] captures a projection of a value when it is created and,
//! every time it is checked, re-projects the live value and compares the two.
//! Equal means fulfilled; anything else fails with
//! [`ContractError::ViolatedInvariant`]. The check says *that* the projection
//! changed, never *what* changed.
//!
//! # Observing live state
//!
//! The invariant does not own the value. It reads it through an [`Observe`]
//! source while the caller keeps mutating it, so the value has to live behind
//! interior mutability: `Cell`, `RefCell`, `Rc<RefCell<_>>`, or a
//! `parking_lot` lock.
//!
//! # Equality
//!
//! Comparison is structural, through the projected type's `PartialEq`. A
//! `#[derive(PartialEq)]` type compares every field, private ones included,
//! so any change to any field is detected. A hand-written `PartialEq` that
//! skips a field makes changes to that field invisible. `Rc` and `Arc`
//! compare their pointees, not their addresses.
//!
//! # Threads
//!
//! Checks take no lock beyond the read done by the source itself. The result
//! is only meaningful if nobody mutates the value concurrently between the
//! snapshot and the check; an invariant is an assertion aid, not a
//! synchronisation primitive.
//!
//! ```rust
//! use std::cell::Cell;
//! use contract_core::invariant;
//!
//! let balance = Cell::new(10);
//! let stays_positive = invariant(&balance, |b: &i32| *b > 0);
//!
//! balance.set(3);
//! assert!(stays_positive.check().is_fulfilled());
//!
//! balance.set(-1);
//! assert!(stays_positive.check().is_unfulfilled());
//! ```

use std::cell::{Cell, RefCell};
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use crate::{ConditionEvaluation, ContractError, FailureLog, Outcome, Reporter, TracingLog};

/// Read access to caller-owned state that may change between reads
pub trait Observe<T: ?Sized> {
    /// Run `read` against the current value
    fn observe<R>(&self, read: impl FnOnce(&T) -> R) -> R;
}

impl<T: Copy> Observe<T> for &Cell<T> {
    fn observe<R>(&self, read: impl FnOnce(&T) -> R) -> R {
        read(&self.get())
    }
}

/// # Panics
///
/// Observing panics if the value is mutably borrowed at that moment.
impl<T: ?Sized> Observe<T> for &RefCell<T> {
    fn observe<R>(&self, read: impl FnOnce(&T) -> R) -> R {
        read(&self.borrow())
    }
}

impl<T: ?Sized> Observe<T> for Rc<RefCell<T>> {
    fn observe<R>(&self, read: impl FnOnce(&T) -> R) -> R {
        read(&self.borrow())
    }
}

impl<T: ?Sized> Observe<T> for &Mutex<T> {
    fn observe<R>(&self, read: impl FnOnce(&T) -> R) -> R {
        read(&self.lock())
    }
}

impl<T: ?Sized> Observe<T> for Arc<Mutex<T>> {
    fn observe<R>(&self, read: impl FnOnce(&T) -> R) -> R {
        read(&self.lock())
    }
}

impl<T: ?Sized> Observe<T> for &RwLock<T> {
    fn observe<R>(&self, read: impl FnOnce(&T) -> R) -> R {
        read(&self.read())
    }
}

impl<T: ?Sized> Observe<T> for Arc<RwLock<T>> {
    fn observe<R>(&self, read: impl FnOnce(&T) -> R) -> R {
        read(&self.read())
    }
}

/// Anything that can be re-checked on demand
pub trait Verify {
    fn check(&self) -> ConditionEvaluation;
}

/// A projection of a live value, pinned at creation time
pub struct Invariant<S, T: ?Sized, O, P> {
    source: S,
    projection: P,
    baseline: O,
    _value: PhantomData<fn(&T)>,
}

impl<S, T, O, P> Invariant<S, T, O, P>
where
    S: Observe<T>,
    T: ?Sized,
    O: PartialEq,
    P: Fn(&T) -> O,
{
    /// Bind `source` and capture `projection` of its current value
    pub fn new(source: S, projection: P) -> Self {
        let baseline = source.observe(&projection);
        Invariant {
            source,
            projection,
            baseline,
            _value: PhantomData,
        }
    }

    /// The projection captured at creation
    pub fn baseline(&self) -> &O {
        &self.baseline
    }

    /// Re-project the live value and compare it with the baseline
    pub fn check(&self) -> ConditionEvaluation {
        let current = self.source.observe(&self.projection);
        if current == self.baseline {
            ConditionEvaluation::FULFILLED
        } else {
            ConditionEvaluation::unfulfilled(ContractError::ViolatedInvariant)
        }
    }

    /// Panic if the invariant is violated.
    ///
    /// # Panics
    ///
    /// Panics with "violated invariant" when the projection changed.
    #[track_caller]
    pub fn panic_on_violation(&self) {
        self.check().panic_on_failure();
    }

    /// Return the violation as an error
    pub fn error_on_violation(&self) -> Outcome {
        self.check().error_on_failure()
    }

    /// Log the violation through `tracing`
    pub fn log_on_violation(&self) {
        self.check().log_on_failure();
    }

    /// Log the violation to a specific sink
    pub fn log_on_violation_to(&self, log: &dyn FailureLog) {
        self.check().log_on_failure_to(log);
    }

    /// Record whether the invariant was violated
    pub fn assert_violated(&self, reporter: &mut dyn Reporter) -> bool {
        self.check().assert_unfulfilled(reporter)
    }

    /// Record whether the invariant still holds
    pub fn assert_verified(&self, reporter: &mut dyn Reporter) -> bool {
        self.check().assert_fulfilled(reporter)
    }

    /// Check again when the returned guard goes out of scope, panicking on violation
    pub fn panic_on_exit(self) -> InvariantGuard<Self> {
        InvariantGuard::new(self, ExitReaction::Panic)
    }

    /// Check again when the returned guard goes out of scope, logging a violation
    pub fn log_on_exit(self) -> InvariantGuard<Self> {
        InvariantGuard::new(self, ExitReaction::Log)
    }
}

impl<S, T, O, P> Verify for Invariant<S, T, O, P>
where
    S: Observe<T>,
    T: ?Sized,
    O: PartialEq,
    P: Fn(&T) -> O,
{
    fn check(&self) -> ConditionEvaluation {
        Invariant::check(self)
    }
}

impl<S, T: ?Sized, O: fmt::Debug, P> fmt::Debug for Invariant<S, T, O, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Invariant")
            .field("baseline", &self.baseline)
            .finish_non_exhaustive()
    }
}

/// Bind an invariant on `projection` of the value behind `source`
pub fn invariant<S, T, O, P>(source: S, projection: P) -> Invariant<S, T, O, P>
where
    S: Observe<T>,
    T: ?Sized,
    O: PartialEq,
    P: Fn(&T) -> O,
{
    Invariant::new(source, projection)
}

/// Projection used by [`immutable`]
pub type Identity<T> = fn(&T) -> T;

/// Bind an invariant that holds while the value itself is unchanged
pub fn immutable<S, T>(source: S) -> Invariant<S, T, T, Identity<T>>
where
    S: Observe<T>,
    T: Clone + PartialEq,
{
    Invariant::new(source, T::clone as Identity<T>)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ExitReaction {
    Panic,
    Log,
}

/// Checks a [`Verify`] when dropped.
///
/// Nothing happens on drop while the thread is already panicking, so a
/// violation never turns an unwind into an abort. Call
/// [`InvariantGuard::finish`] to check explicitly instead.
#[must_use = "the invariant is checked when the guard is dropped"]
pub struct InvariantGuard<V: Verify> {
    invariant: Option<V>,
    reaction: ExitReaction,
    log: Box<dyn FailureLog>,
}

impl<V: Verify> InvariantGuard<V> {
    fn new(invariant: V, reaction: ExitReaction) -> Self {
        InvariantGuard {
            invariant: Some(invariant),
            reaction,
            log: Box::new(TracingLog),
        }
    }

    /// Send logged violations to `log` instead of `tracing`
    pub fn with_log(mut self, log: impl FailureLog + 'static) -> Self {
        self.log = Box::new(log);
        self
    }

    /// Check now and disarm the guard
    pub fn finish(mut self) -> ConditionEvaluation {
        match self.invariant.take() {
            Some(invariant) => invariant.check(),
            None => ConditionEvaluation::FULFILLED,
        }
    }
}

impl<V: Verify> Drop for InvariantGuard<V> {
    fn drop(&mut self) {
        let Some(invariant) = self.invariant.take() else {
            return;
        };
        if std::thread::panicking() {
            return;
        }
        let evaluation = invariant.check();
        match self.reaction {
            ExitReaction::Panic => evaluation.panic_on_failure(),
            ExitReaction::Log => evaluation.log_on_failure_to(self.log.as_ref()),
        }
    }
}

impl<V: Verify> fmt::Debug for InvariantGuard<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InvariantGuard")
            .field("armed", &self.invariant.is_some())
            .field("reaction", &self.reaction)
            .finish()
    }
}
