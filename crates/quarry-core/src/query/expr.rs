use crate::{
    config::CompileConfig,
    query::{
        compile::{CompileError, Predicate, compile},
        field::Field,
        token::{CompoundOp, Group, Token},
    },
    traits::{FieldType, Object, Traversable},
};
use std::{fmt, marker::PhantomData};

///
/// Query
///
/// Typed predicate expression under construction.
///
/// `T` is the logical result type of the expression so far: the field's
/// value type after a traversal, `bool` after a comparison. Which
/// operators exist on a `Query<T>` is decided entirely by the capability
/// traits `T` implements.
///
/// Every operator consumes the expression and returns a new one; the
/// token sequence is append-only.
///

pub struct Query<T> {
    tokens: Vec<Token>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Query<T> {
    pub(crate) const fn from_tokens(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            _marker: PhantomData,
        }
    }

    /// Tokens accumulated so far, in emission order.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    #[must_use]
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// Append tokens and re-type the expression.
    pub(crate) fn extend<U>(mut self, tokens: impl IntoIterator<Item = Token>) -> Query<U> {
        self.tokens.extend(tokens);

        Query::from_tokens(self.tokens)
    }

    /// Compound operators joining this expression at its top level.
    pub(crate) fn top_level_joins(&self) -> Joins {
        let mut joins = Joins::default();
        let mut depth = 0usize;

        for token in &self.tokens {
            match token {
                Token::Group(Group::Open) => depth += 1,
                Token::Group(Group::Close) => depth = depth.saturating_sub(1),
                token if depth == 0 => {
                    if let Some(op) = token.join() {
                        joins.insert(op);
                    }
                }
                _ => {}
            }
        }

        joins
    }

    /// Wrap the whole expression in a `Group` pair.
    pub(crate) fn grouped(self) -> Self {
        let mut tokens = Vec::with_capacity(self.tokens.len() + 2);
        tokens.push(Token::Group(Group::Open));
        tokens.extend(self.tokens);
        tokens.push(Token::Group(Group::Close));

        Self::from_tokens(tokens)
    }
}

impl<O: Object> Query<O> {
    /// Root expression over objects of type `O`.
    #[must_use]
    pub const fn new() -> Self {
        Self::from_tokens(Vec::new())
    }
}

impl<O: Object> Default for Query<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Traversable> Query<T> {
    /// Extend the key path with a field of the traversed object.
    #[must_use]
    pub fn field<V: FieldType>(self, field: Field<T::Target, V>) -> Query<V> {
        self.extend([Token::key_path(field.name(), V::COLLECTION)])
    }
}

impl Query<bool> {
    /// Compile with the default configuration.
    pub fn compile(&self) -> Result<Predicate, CompileError> {
        compile(&self.tokens, &CompileConfig::default())
    }

    pub fn compile_with(&self, config: &CompileConfig) -> Result<Predicate, CompileError> {
        compile(&self.tokens, config)
    }
}

impl<T> Clone for Query<T> {
    fn clone(&self) -> Self {
        Self::from_tokens(self.tokens.clone())
    }
}

impl<T> fmt::Debug for Query<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query")
            .field("tokens", &self.tokens)
            .finish()
    }
}

///
/// Joins
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Joins {
    and: bool,
    or: bool,
}

impl Joins {
    const fn insert(&mut self, op: CompoundOp) {
        match op {
            CompoundOp::And => self.and = true,
            CompoundOp::Or => self.or = true,
        }
    }

    pub(crate) const fn any(self) -> bool {
        self.and || self.or
    }

    /// True if any join other than `op` is present.
    pub(crate) const fn other_than(self, op: CompoundOp) -> bool {
        match op {
            CompoundOp::And => self.or,
            CompoundOp::Or => self.and,
        }
    }
}
