//! Date constraints.
//!
//! A constraint restricts either one meeting's date against a fixed
//! reference date ([`UnaryConstraint`]) or the dates of two meetings
//! against each other ([`BinaryConstraint`]). [`DateConstraint`] is the
//! sum of both and is what the filters and the search consume.
//!
//! Constraints are immutable values with structural equality and hashing,
//! so they can be deduplicated in sets and used as propagation keys.

mod parse;
mod relation;
mod types;

pub use relation::Relation;
pub use types::{BinaryConstraint, DateConstraint, UnaryConstraint};
