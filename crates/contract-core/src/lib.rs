//! Contract Core - Design-by-contract primitives
//!
//! This crate provides:
//! - Conditions: self-explaining predicates with short-circuit `and`/`or`
//! - Condition evaluations and the reactions to a failure (panic, error, log, assert)
//! - Preconditions and postconditions over values or inline expressions
//! - Snapshot invariants that detect mutation between two points in time
//! - Reaction configuration per kind of contract
//!
//! Everything here is synchronous; no check blocks except the write done by
//! a log sink.

pub mod condition;
pub mod config;
pub mod contract;
pub mod error;
pub mod evaluation;
pub mod invariant;
pub mod log;
pub mod report;

pub use condition::*;
pub use config::*;
pub use contract::*;
pub use error::*;
pub use evaluation::*;
pub use invariant::*;
pub use log::*;
pub use report::*;
