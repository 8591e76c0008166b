//! Presence predicates over `Option`

use contract_core::{evaluate, Outcome};

/// The value is absent
pub fn none<T>(value: &Option<T>) -> Outcome {
    evaluate(value.is_none(), "value must be nil")
}

/// The value is present
pub fn some<T>(value: &Option<T>) -> Outcome {
    evaluate(value.is_some(), "value cannot be nil")
}

#[cfg(test)]
mod tests {
    use super::*;
    use contract_core::{evaluate, Condition, ContractError};

    #[test]
    fn test_none() {
        assert!(none::<&str>(&None).is_ok());
        assert_eq!(
            none(&Some("foo")),
            Err(ContractError::unsatisfied("value must be nil"))
        );
    }

    #[test]
    fn test_some() {
        assert!(some(&Some("foo")).is_ok());
        assert_eq!(
            some::<&str>(&None),
            Err(ContractError::unsatisfied("value cannot be nil"))
        );
    }

    #[test]
    fn test_some_guards_dereference() {
        let inner_positive = |v: &Option<i32>| match v {
            Some(n) => evaluate(*n > 0, "number must be positive"),
            None => unreachable!("guarded by some"),
        };
        let condition = some::<i32>.and(inner_positive);

        assert!(condition.check(&Some(1)).is_ok());
        assert_eq!(
            condition.check(&None),
            Err(ContractError::unsatisfied("value cannot be nil"))
        );
    }
}
