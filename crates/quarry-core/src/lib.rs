//! Core of quarry: typed predicate expressions over object schemas, the
//! compiler that lowers them to `%@`-style predicate strings, and the
//! engine boundary that executes them.

extern crate self as quarry;

// public exports are one module level down
pub mod config;
pub mod error;
pub mod query;
pub mod session;
pub mod traits;
pub mod types;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// Prelude
///
/// Vocabulary needed to declare objects and write predicates.
/// Errors, config and engine plumbing are imported from their modules.
///

pub mod prelude {
    pub use crate::{
        query::{Field, Query, StringOption, StringOptions},
        traits::{Object, PersistableEnum},
        types::{List, Map, Set},
        value::Value,
    };
}
