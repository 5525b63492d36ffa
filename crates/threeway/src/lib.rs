//! threeway classifies two values with a single comparison
//!
//! A two-way ordering built from `==` and `<` may need two evaluations of user logic to tell
//! `>` apart from `==`. [ThreeWayComparable::compare] returns an [Order] from which all six
//! relations can be read at once.
//!
//! # Feature Flags
//! - `std` (_enabled by default_)
//!     - Enables `std` types and the [probe] module
//! - `serde`
//!     - Enables serde support for [Order] and [Pair]
//!
//! # Example
//!
//! ```
//! use threeway::{Depth14, Nested, Order, ThreeWayComparable};
//!
//! let lhs = Depth14::<i64>::default();
//! let mut rhs = lhs;
//! *rhs.last_leaf_mut() -= 1;
//!
//! assert_eq!(lhs.compare(&rhs), Order::Decreasing);
//! assert!(lhs > rhs);
//! ```
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[macro_use]
mod macros;

pub mod bridge;
mod compare;
mod nested;
mod order;
mod pair;

cfg_std! {
    pub mod probe;
}

pub use compare::ThreeWayComparable;
pub use nested::*;
pub use order::Order;
pub use pair::Pair;
