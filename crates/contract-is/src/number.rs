//! Sign and range predicates
//!
//! Zero is `T::default()`, which is `0` for every numeric primitive. Floats
//! compare with IEEE semantics, so NaN fails every sign predicate.

use std::fmt::Display;

use contract_core::{evaluate, Outcome};

#[inline]
fn zero_of<T: Default>() -> T {
    T::default()
}

/// The number equals zero
pub fn zero<T: PartialOrd + Default>(value: &T) -> Outcome {
    evaluate(*value == zero_of::<T>(), "number must be zero")
}

/// The number differs from zero
pub fn not_zero<T: PartialOrd + Default>(value: &T) -> Outcome {
    evaluate(*value != zero_of::<T>(), "number must be different from zero")
}

/// The number is strictly above zero
pub fn positive<T: PartialOrd + Default>(value: &T) -> Outcome {
    evaluate(*value > zero_of::<T>(), "number must be positive")
}

/// The number is zero or below
pub fn nonpositive<T: PartialOrd + Default>(value: &T) -> Outcome {
    evaluate(*value <= zero_of::<T>(), "number must be nonpositive")
}

/// The number is strictly below zero
pub fn negative<T: PartialOrd + Default>(value: &T) -> Outcome {
    evaluate(*value < zero_of::<T>(), "number must be negative")
}

/// The number is zero or above
pub fn nonnegative<T: PartialOrd + Default>(value: &T) -> Outcome {
    evaluate(*value >= zero_of::<T>(), "number must be nonnegative")
}

/// The number lies in `[from, to]`, bounds included
pub fn between<T>(from: T, to: T) -> impl Fn(&T) -> Outcome
where
    T: PartialOrd + Display,
{
    move |value: &T| {
        contract_core::evaluate!(
            from <= *value && *value <= to,
            "number must be between {} and {}",
            from,
            to
        )
    }
}
