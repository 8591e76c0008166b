//! Contract Is - Ready-made conditions
//!
//! Every predicate here has the [`Condition`](contract_core::Condition)
//! shape, so it can be passed to `requires_that`/`ensures_that` or combined
//! with `and`/`or`:
//!
//! ```rust
//! use contract_core::{requires_that, Condition};
//! use contract_is as is;
//!
//! let small_positive = is::positive::<i32>.and(is::between(1, 9));
//! assert!(requires_that(&3, &small_positive).is_fulfilled());
//! assert!(requires_that(&12, &small_positive).is_unfulfilled());
//! ```
//!
//! - String emptiness
//! - Nil-ness of optional values
//! - Sign and range of ordered values

pub mod nil;
pub mod number;
pub mod string;

pub use nil::*;
pub use number::*;
pub use string::*;
