//! Error types for contract checks

use thiserror::Error;

/// A violated contract.
///
/// There is a single failure kind, "the contract does not hold"; variants only
/// carry where the reason came from so that pre- and postconditions can be
/// told apart.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContractError {
    /// Reason produced by a condition or an inline expression
    #[error("{0}")]
    Unsatisfied(String),

    #[error("precondition failed: {0}")]
    Precondition(#[source] Box<ContractError>),

    #[error("postcondition failed: {0}")]
    Postcondition(#[source] Box<ContractError>),

    #[error("violated invariant")]
    ViolatedInvariant,
}

impl ContractError {
    /// Build an `Unsatisfied` error from any displayable reason
    pub fn unsatisfied(reason: impl Into<String>) -> Self {
        ContractError::Unsatisfied(reason.into())
    }

    /// The innermost reason, without the pre/postcondition prefixes
    pub fn reason(&self) -> String {
        match self {
            ContractError::Unsatisfied(reason) => reason.clone(),
            ContractError::Precondition(inner) | ContractError::Postcondition(inner) => {
                inner.reason()
            }
            ContractError::ViolatedInvariant => self.to_string(),
        }
    }

    pub fn is_precondition(&self) -> bool {
        matches!(self, ContractError::Precondition(_))
    }

    pub fn is_postcondition(&self) -> bool {
        matches!(self, ContractError::Postcondition(_))
    }

    pub fn is_invariant(&self) -> bool {
        matches!(self, ContractError::ViolatedInvariant)
    }
}

/// Result type for contract operations
pub type ContractResult<T> = Result<T, ContractError>;

/// What a condition returns: `Ok(())` when satisfied
pub type Outcome = ContractResult<()>;
