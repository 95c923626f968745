//! Typed predicate expressions and their compiler.
//!
//! A `Query<T>` accumulates a flat token sequence through capability-gated
//! operators; `compile` turns a boolean query into a format string with
//! `%@` placeholders plus the bound arguments in placeholder order.
mod compile;
mod expr;
mod field;
mod ops;
mod token;

#[cfg(test)]
mod tests;

pub use compile::{CompileError, PLACEHOLDER, Predicate, compile};
pub use expr::Query;
pub use field::Field;
pub use ops::QueryRange;
pub use token::{
    Aggregation, Comparison, ComparisonOp, CompoundOp, Group, StringOption, StringOptions,
    StringSearchKind, Token,
};
