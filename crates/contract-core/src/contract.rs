//! Preconditions, postconditions, and inline expression checks

use crate::{Condition, ConditionEvaluation, ContractError, Outcome};

/// Reason given by [`requires`] for a false expression
pub const PRECONDITION_FAILED: &str = "precondition failed";

/// Reason given by [`ensures`] for a false expression
pub const POSTCONDITION_FAILED: &str = "postcondition failed";

/// Turn a boolean expression into an [`Outcome`].
///
/// Use the [`evaluate!`](crate::evaluate!) macro when the reason needs
/// formatting; it only formats on failure.
#[inline]
pub fn evaluate(expression: bool, reason: &str) -> Outcome {
    if expression {
        Ok(())
    } else {
        Err(ContractError::unsatisfied(reason))
    }
}

/// Evaluate an inline condition with a formatted reason.
///
/// ```rust
/// use contract_core::evaluate;
///
/// let n = 5;
/// assert!(evaluate!(n > 0, "we expect {} > 0", n).is_ok());
/// assert_eq!(
///     evaluate!(n < 0, "we expect {} < 0", n).unwrap_err().to_string(),
///     "we expect 5 < 0"
/// );
/// ```
#[macro_export]
macro_rules! evaluate {
    ($expression:expr, $($reason:tt)+) => {
        if $expression {
            ::core::result::Result::Ok::<(), $crate::ContractError>(())
        } else {
            ::core::result::Result::Err($crate::ContractError::Unsatisfied(
                ::std::format!($($reason)+),
            ))
        }
    };
}

/// Impose a precondition on a value
pub fn requires_that<T, C>(value: &T, condition: &C) -> ConditionEvaluation
where
    T: ?Sized,
    C: Condition<T> + ?Sized,
{
    match condition.check(value) {
        Ok(()) => ConditionEvaluation::FULFILLED,
        Err(e) => ConditionEvaluation::unfulfilled(ContractError::Precondition(Box::new(e))),
    }
}

/// Impose a precondition through an expression
pub fn requires(constraint: bool) -> ConditionEvaluation {
    evaluate(constraint, PRECONDITION_FAILED).into()
}

/// Impose a postcondition on a value
pub fn ensures_that<T, C>(value: &T, condition: &C) -> ConditionEvaluation
where
    T: ?Sized,
    C: Condition<T> + ?Sized,
{
    match condition.check(value) {
        Ok(()) => ConditionEvaluation::FULFILLED,
        Err(e) => ConditionEvaluation::unfulfilled(ContractError::Postcondition(Box::new(e))),
    }
}

/// Impose a postcondition through an expression
pub fn ensures(constraint: bool) -> ConditionEvaluation {
    evaluate(constraint, POSTCONDITION_FAILED).into()
}
