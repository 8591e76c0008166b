//! String predicates

use contract_core::{evaluate, Outcome};

/// The string is empty
pub fn empty<S: AsRef<str> + ?Sized>(value: &S) -> Outcome {
    evaluate(value.as_ref().is_empty(), "string must be empty")
}

/// The string has at least one character
pub fn not_empty<S: AsRef<str> + ?Sized>(value: &S) -> Outcome {
    evaluate(!value.as_ref().is_empty(), "string cannot be empty")
}

#[cfg(test)]
mod tests {
    use super::*;
    use contract_core::{requires_that, ContractError};

    #[test]
    fn test_empty() {
        assert!(empty("").is_ok());
        assert_eq!(
            empty("foo"),
            Err(ContractError::unsatisfied("string must be empty"))
        );
        assert!(empty(&String::new()).is_ok());
    }

    #[test]
    fn test_not_empty() {
        assert!(not_empty("foo").is_ok());
        assert_eq!(
            not_empty(""),
            Err(ContractError::unsatisfied("string cannot be empty"))
        );
    }

    #[test]
    fn test_as_precondition() {
        let name = String::from("alice");
        assert!(requires_that(&name, &not_empty::<String>).is_fulfilled());
        assert!(requires_that("", &not_empty::<str>).is_unfulfilled());
    }
}
