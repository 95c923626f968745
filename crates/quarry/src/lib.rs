//! quarry: typed predicates over object schemas, compiled to `%@`
//! format strings with positional arguments.
//!
//! ## Crate layout
//! - `core`: value model, capability traits, query builder and compiler.
//! - `macros`: `Object` and `PersistableEnum` derives.
//!
//! Derive output refers to `::quarry::{query, traits, value}`, so those
//! modules are re-exported at the crate root.
//!
//! ```ignore
//! use quarry::prelude::*;
//!
//! #[derive(Object)]
//! #[quarry(rename_all = "camelCase")]
//! struct Person {
//!     age: i32,
//!     nick_name: Option<String>,
//! }
//!
//! let predicate = Query::<Person>::new()
//!     .field(Person::AGE)
//!     .gte(18)
//!     .and(Query::<Person>::new().field(Person::NICK_NAME).eq_none())
//!     .compile()?;
//!
//! assert_eq!(predicate.format, "age >= %@ && nickName == %@");
//! ```

pub use quarry_core as core;
pub use quarry_derive as macros;

pub use quarry_core::{config, error, query, session, traits, types, value};

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use quarry_core::error::Error;

///
/// Prelude
/// Object declarations and predicate building; traits share names with
/// their derives.
///

pub mod prelude {
    pub use crate::{
        core::prelude::*,
        macros::{Object, PersistableEnum},
        query::Predicate,
        session::{Objects, PredicateEngine},
    };
}
