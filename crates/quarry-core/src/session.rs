use crate::{
    config::CompileConfig,
    error::Error,
    query::{Predicate, Query},
    traits::Object,
    value::Value,
};
use log::debug;
use std::marker::PhantomData;

///
/// PredicateEngine
///
/// Evaluates compiled predicates against stored objects.
/// Implementations bind `arguments` to the `%@` placeholders of
/// `predicate` positionally, left to right.
///

pub trait PredicateEngine {
    type Output;

    fn execute(&self, predicate: &str, arguments: &[Value]) -> Result<Self::Output, Error>;
}

///
/// Objects
///
/// Typed entry point binding an object type to an engine.
/// Builds the root `Query<O>`, compiles it, and hands the result to the
/// engine; compilation failures never reach the engine.
///

pub struct Objects<'e, O, E> {
    engine: &'e E,
    config: CompileConfig,
    _marker: PhantomData<fn() -> O>,
}

impl<'e, O: Object, E: PredicateEngine> Objects<'e, O, E> {
    #[must_use]
    pub fn new(engine: &'e E) -> Self {
        Self {
            engine,
            config: CompileConfig::default(),
            _marker: PhantomData,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: CompileConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub const fn config(&self) -> &CompileConfig {
        &self.config
    }

    /// Build and compile a predicate without executing it.
    pub fn predicate<F>(&self, build: F) -> Result<Predicate, Error>
    where
        F: FnOnce(Query<O>) -> Query<bool>,
    {
        let predicate = build(Query::new()).compile_with(&self.config)?;

        Ok(predicate)
    }

    /// Build, compile and execute a predicate.
    pub fn filter<F>(&self, build: F) -> Result<E::Output, Error>
    where
        F: FnOnce(Query<O>) -> Query<bool>,
    {
        let predicate = self.predicate(build)?;

        debug!(
            "filtering {} with '{}' ({} arguments)",
            O::TYPE_NAME,
            predicate.format,
            predicate.arguments.len()
        );

        self.engine.execute(&predicate.format, &predicate.arguments)
    }
}

///
/// TESTS
///
