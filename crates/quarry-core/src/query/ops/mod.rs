//! Capability-gated operators on `Query<T>`.
//!
//! Each submodule adds one operator family as inherent methods; which
//! ones are callable depends on the traits the phantom type implements.
mod collection;
mod compare;
mod logical;
mod range;
mod string;

pub use range::QueryRange;
