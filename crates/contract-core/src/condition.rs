//! Condition algebra
//!
//! A [`Condition`] is a predicate that explains itself: instead of a bare
//! `bool` it returns an [`Outcome`], so a failure carries its reason.
//!
//! Conditions compose with [`Condition::and`] and [`Condition::or`]. Both
//! evaluate strictly left to right and short-circuit:
//!
//! - `a.and(b)` stops at the first failure and returns it; `b` never runs if
//!   `a` failed.
//! - `a.or(b)` stops at the first success; if `a` failed, `b`'s result is
//!   returned as is, so when both fail the reason is `b`'s.
//!
//! The left operand may therefore guard the right one, e.g.
//! `is_some.and(field_is_positive)` never looks inside a `None`.
//!
//! ```rust
//! use contract_core::{evaluate, Condition, Outcome};
//!
//! fn positive(v: &i32) -> Outcome {
//!     evaluate(*v > 0, "number must be positive")
//! }
//! fn even(v: &i32) -> Outcome {
//!     evaluate(v % 2 == 0, "number must be even")
//! }
//!
//! let both = positive.and(even);
//! assert!(both.check(&4).is_ok());
//! assert!(both.check(&3).is_err());
//! ```

use std::fmt;

use crate::{ContractError, Outcome};

/// A predicate over `T` returning a failure reason instead of `false`.
///
/// Implemented for every `Fn(&T) -> Outcome`, so plain functions and closures
/// are conditions.
pub trait Condition<T: ?Sized> {
    /// Check the condition against a value
    fn check(&self, value: &T) -> Outcome;

    /// Fulfilled when both conditions are; `other` only runs if `self` holds
    fn and<C>(self, other: C) -> And<Self, C>
    where
        Self: Sized,
        C: Condition<T>,
    {
        And {
            first: self,
            second: other,
        }
    }

    /// Fulfilled when either condition is; `other` only runs if `self` fails
    fn or<C>(self, other: C) -> Or<Self, C>
    where
        Self: Sized,
        C: Condition<T>,
    {
        Or {
            first: self,
            alternative: other,
        }
    }

    /// Erase the concrete type, e.g. to store heterogeneous conditions
    fn boxed<'a>(self) -> BoxedCondition<'a, T>
    where
        Self: Sized + 'a,
    {
        BoxedCondition(Box::new(self))
    }
}

impl<T: ?Sized, F> Condition<T> for F
where
    F: Fn(&T) -> Outcome,
{
    #[inline]
    fn check(&self, value: &T) -> Outcome {
        self(value)
    }
}

/// Conjunction of two conditions, see [`Condition::and`]
#[derive(Clone, Copy)]
pub struct And<A, B> {
    first: A,
    second: B,
}

impl<T: ?Sized, A, B> Condition<T> for And<A, B>
where
    A: Condition<T>,
    B: Condition<T>,
{
    fn check(&self, value: &T) -> Outcome {
        self.first.check(value)?;
        self.second.check(value)
    }
}

impl<A, B> fmt::Debug for And<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("And(..)")
    }
}

/// Disjunction of two conditions, see [`Condition::or`]
#[derive(Clone, Copy)]
pub struct Or<A, B> {
    first: A,
    alternative: B,
}

impl<T: ?Sized, A, B> Condition<T> for Or<A, B>
where
    A: Condition<T>,
    B: Condition<T>,
{
    fn check(&self, value: &T) -> Outcome {
        if self.first.check(value).is_ok() {
            return Ok(());
        }
        self.alternative.check(value)
    }
}

impl<A, B> fmt::Debug for Or<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Or(..)")
    }
}

/// Type-erased condition
pub struct BoxedCondition<'a, T: ?Sized>(Box<dyn Condition<T> + 'a>);

impl<T: ?Sized> Condition<T> for BoxedCondition<'_, T> {
    fn check(&self, value: &T) -> Outcome {
        self.0.check(value)
    }
}

impl<T: ?Sized> fmt::Debug for BoxedCondition<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BoxedCondition(..)")
    }
}

/// Reason reported by [`any_of`] when it has nothing to try
pub const NO_ALTERNATIVE: &str = "no alternative condition was fulfilled";

/// N-ary [`Condition::and`]: the first failure wins, an empty list holds
pub fn all_of<'a, T: ?Sized + 'a>(
    conditions: impl IntoIterator<Item = BoxedCondition<'a, T>>,
) -> impl Fn(&T) -> Outcome + 'a {
    let conditions: Vec<_> = conditions.into_iter().collect();
    move |value: &T| {
        for condition in &conditions {
            condition.check(value)?;
        }
        Ok(())
    }
}

/// N-ary [`Condition::or`]: the first success wins, otherwise the last
/// failure is returned. An empty list never holds.
pub fn any_of<'a, T: ?Sized + 'a>(
    conditions: impl IntoIterator<Item = BoxedCondition<'a, T>>,
) -> impl Fn(&T) -> Outcome + 'a {
    let conditions: Vec<_> = conditions.into_iter().collect();
    move |value: &T| {
        let mut last = ContractError::unsatisfied(NO_ALTERNATIVE);
        for condition in &conditions {
            match condition.check(value) {
                Ok(()) => return Ok(()),
                Err(e) => last = e,
            }
        }
        Err(last)
    }
}
