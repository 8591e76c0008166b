//! Reaction policies and contract configuration

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::{ConditionEvaluation, ContractError, Outcome};

/// Environment variable read by [`ContractConfig::from_env`]
pub const REACTION_ENV: &str = "CONTRACT_REACTION";

/// How to react to a failed evaluation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Reaction {
    /// Fail fast
    #[default]
    Panic,
    /// Return the failure as an error
    Error,
    /// Log the failure and carry on
    Log,
}

impl Reaction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Reaction::Panic => "panic",
            Reaction::Error => "error",
            Reaction::Log => "log",
        }
    }
}

impl fmt::Display for Reaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown reaction name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown reaction: {0} (expected panic, error or log)")]
pub struct ParseReactionError(String);

impl FromStr for Reaction {
    type Err = ParseReactionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "panic" => Ok(Reaction::Panic),
            "error" => Ok(Reaction::Error),
            "log" => Ok(Reaction::Log),
            _ => Err(ParseReactionError(s.to_string())),
        }
    }
}

/// Which kind of contract an evaluation came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContractKind {
    Precondition,
    Postcondition,
    Invariant,
}

/// Per-kind reaction policy
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContractConfig {
    pub precondition: Reaction,
    pub postcondition: Reaction,
    pub invariant: Reaction,
}

impl Default for ContractConfig {
    fn default() -> Self {
        ContractConfig::uniform(Reaction::Panic)
    }
}

impl ContractConfig {
    /// Same reaction for every kind of contract
    pub fn uniform(reaction: Reaction) -> Self {
        ContractConfig {
            precondition: reaction,
            postcondition: reaction,
            invariant: reaction,
        }
    }

    /// Every violation panics
    pub fn strict() -> Self {
        ContractConfig::uniform(Reaction::Panic)
    }

    /// Every violation is returned to the caller
    pub fn recoverable() -> Self {
        ContractConfig::uniform(Reaction::Error)
    }

    /// Every violation is logged, nothing interrupts control flow
    pub fn lenient() -> Self {
        ContractConfig::uniform(Reaction::Log)
    }

    /// Uniform policy named by `CONTRACT_REACTION`, default when unset.
    ///
    /// An unparseable value falls back to the default with a warning.
    pub fn from_env() -> Self {
        match std::env::var(REACTION_ENV) {
            Ok(value) => ContractConfig::from_value(&value),
            Err(_) => ContractConfig::default(),
        }
    }

    fn from_value(value: &str) -> Self {
        match value.parse::<Reaction>() {
            Ok(reaction) => ContractConfig::uniform(reaction),
            Err(e) => {
                tracing::warn!("ignoring {}: {}", REACTION_ENV, e);
                ContractConfig::default()
            }
        }
    }

    /// Reaction configured for a kind of contract
    pub fn reaction(&self, kind: ContractKind) -> Reaction {
        match kind {
            ContractKind::Precondition => self.precondition,
            ContractKind::Postcondition => self.postcondition,
            ContractKind::Invariant => self.invariant,
        }
    }

    /// Apply the configured reaction to an evaluation
    #[track_caller]
    pub fn enforce(&self, kind: ContractKind, evaluation: &ConditionEvaluation) -> Outcome {
        evaluation.react(self.reaction(kind))
    }
}

impl ContractKind {
    /// Kind implied by a failure's origin, if it has one
    pub fn of(failure: &ContractError) -> Option<ContractKind> {
        match failure {
            ContractError::Precondition(_) => Some(ContractKind::Precondition),
            ContractError::Postcondition(_) => Some(ContractKind::Postcondition),
            ContractError::ViolatedInvariant => Some(ContractKind::Invariant),
            ContractError::Unsatisfied(_) => None,
        }
    }
}
