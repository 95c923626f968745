mod compile;

use crate::{
    query::{Predicate, Query},
    test_fixtures::AllTypes,
    value::Value,
};

/// Root expression over the all-types fixture.
fn q() -> Query<AllTypes> {
    Query::new()
}

/// Compile with defaults, panicking on structural errors.
fn compiled(query: &Query<bool>) -> Predicate {
    query.compile().expect("query should compile")
}

fn text(s: &str) -> Value {
    Value::Text(s.to_string())
}
