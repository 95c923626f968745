//! Collection field types.
//!
//! Declaring a field as one of these marks its key path as a collection,
//! which unlocks aggregation, membership and subquery operators.
mod list;
mod map;
mod set;


pub use list::List;
pub use map::Map;
pub use set::Set;
