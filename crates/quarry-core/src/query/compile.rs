use crate::{
    config::CompileConfig,
    query::token::{Comparison, ComparisonOp, Group, Token},
    value::Value,
};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error as ThisError;

/// Positional argument marker in the predicate grammar.
pub const PLACEHOLDER: &str = "%@";

///
/// CompileError
///
/// Structural defects in a token sequence. All are deterministic in the
/// expression shape; none is retryable.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum CompileError {
    #[error("subquery references more than one collection: {}", collections.join(", "))]
    MultipleCollectionsInSubquery { collections: Vec<String> },

    #[error("subquery body does not reference a collection")]
    MissingCollectionInSubquery,

    #[error("open range comparison is not preceded by a key path")]
    MissingKeyPathForRangeComparison,

    #[error("membership test is not preceded by a collection key path")]
    MissingKeyPathForMembership,
}

///
/// Predicate
///
/// Compiled predicate: a format string with one `%@` per argument, and
/// the arguments in placeholder order.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Predicate {
    pub format: String,
    pub arguments: Vec<Value>,
}

impl Predicate {
    /// Number of `%@` placeholders in the format string.
    #[must_use]
    pub fn placeholder_count(&self) -> usize {
        self.format.matches(PLACEHOLDER).count()
    }

    /// Format string with every argument inlined as a literal.
    /// For diagnostics only; engines must bind `arguments` positionally.
    #[must_use]
    pub fn explain(&self) -> String {
        let mut out = String::with_capacity(self.format.len());
        let mut arguments = self.arguments.iter();
        let mut rest = self.format.as_str();

        while let Some(at) = rest.find(PLACEHOLDER) {
            out.push_str(&rest[..at]);
            match arguments.next() {
                Some(value) => out.push_str(&value.to_string()),
                None => out.push_str(PLACEHOLDER),
            }
            rest = &rest[at + PLACEHOLDER.len()..];
        }
        out.push_str(rest);

        out
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format)
    }
}

///
/// compile
///
/// Translate a token sequence into a predicate in one left-to-right pass.
///

pub fn compile(tokens: &[Token], config: &CompileConfig) -> Result<Predicate, CompileError> {
    match Compiler::new(config, None).run(tokens) {
        Ok(predicate) => {
            debug!(
                "compiled predicate: {} placeholders, {} bytes",
                predicate.arguments.len(),
                predicate.format.len()
            );
            Ok(predicate)
        }
        Err(err) => {
            debug!("predicate compilation failed: {err}");
            Err(err)
        }
    }
}

// ============================================================================
// COMPILER
// ============================================================================

///
/// Operand
///
/// Key path (plus aggregation suffixes) read but not yet written out.
/// Membership and open ranges need the whole path, so it is held back
/// until the next token decides how it renders.
///

#[derive(Debug, Default)]
struct Operand {
    text: String,
    arguments: Vec<Value>,
}

struct Compiler<'a> {
    config: &'a CompileConfig,
    // collection chain rendered as the iteration variable
    subquery_collection: Option<String>,
    out: String,
    arguments: Vec<Value>,
    operand: Option<Operand>,
    chain: Vec<&'static str>,
}

impl<'a> Compiler<'a> {
    const fn new(config: &'a CompileConfig, subquery_collection: Option<String>) -> Self {
        Self {
            config,
            subquery_collection,
            out: String::new(),
            arguments: Vec::new(),
            operand: None,
            chain: Vec::new(),
        }
    }

    fn run(mut self, tokens: &[Token]) -> Result<Predicate, CompileError> {
        for token in tokens {
            self.token(token)?;

            if !matches!(token, Token::KeyPath { .. }) {
                self.chain.clear();
            }
        }
        self.flush();

        Ok(Predicate {
            format: self.out,
            arguments: self.arguments,
        })
    }

    fn token(&mut self, token: &Token) -> Result<(), CompileError> {
        match token {
            Token::KeyPath {
                name,
                is_collection,
            } => self.key_path(*name, *is_collection),

            Token::BasicComparison(ComparisonOp::Not) => {
                self.flush();
                self.push_spaced("NOT ");
            }

            Token::BasicComparison(op) => {
                self.flush();
                self.push_spaced(op.symbol());
            }

            Token::Comparison(Comparison::Between {
                low,
                high,
                closed: true,
            }) => {
                self.flush();
                self.push_spaced("BETWEEN {%@, %@}");
                self.arguments.push(low.clone());
                self.arguments.push(high.clone());
            }

            Token::Comparison(Comparison::Between {
                low,
                high,
                closed: false,
            }) => {
                let operand = self
                    .operand
                    .take()
                    .ok_or(CompileError::MissingKeyPathForRangeComparison)?;

                self.write_operand(&operand);
                self.out.push_str(" >= %@ && ");
                self.arguments.push(low.clone());
                self.write_operand(&operand);
                self.out.push_str(" < %@");
                self.arguments.push(high.clone());
            }

            Token::Comparison(Comparison::Contains(value)) => {
                let operand = self
                    .operand
                    .take()
                    .ok_or(CompileError::MissingKeyPathForMembership)?;

                self.push_spaced("%@ IN ");
                self.arguments.push(value.clone());
                self.out.push_str(&operand.text);
                self.arguments.extend(operand.arguments);
            }

            Token::Compound(op) => {
                self.flush();
                self.out.push(' ');
                self.out.push_str(op.symbol());
                self.out.push(' ');
            }

            Token::Rhs(value) => {
                self.flush();
                self.push_spaced(PLACEHOLDER);
                self.arguments.push(value.clone());
            }

            Token::StringSearch {
                kind,
                pattern,
                options,
            } => {
                self.flush();
                self.push_spaced(&format!("{}{} {PLACEHOLDER}", kind.verb(), options.flags()));
                self.arguments.push(Value::Text(pattern.clone()));
            }

            Token::CollectionAggregation(aggregation) => {
                self.operand
                    .get_or_insert_with(Operand::default)
                    .text
                    .push_str(aggregation.suffix());
            }

            Token::Subquery(body) => {
                self.flush();
                self.operand = Some(self.subquery(body)?);
            }

            Token::Group(Group::Open) => {
                self.flush();
                self.push_spaced("(");
            }

            Token::Group(Group::Close) => {
                self.flush();
                self.out.push(')');
            }
        }

        Ok(())
    }

    fn key_path(&mut self, name: &'static str, is_collection: bool) {
        self.chain.push(name);

        let as_variable = is_collection
            && self
                .subquery_collection
                .as_deref()
                .is_some_and(|collection| collection == self.chain.join("."));

        let operand = self.operand.get_or_insert_with(Operand::default);
        if as_variable {
            operand.text.clear();
            operand.text.push_str(self.config.subquery_variable());
        } else {
            if !operand.text.is_empty() {
                operand.text.push('.');
            }
            operand.text.push_str(name);
        }
    }

    fn subquery(&self, body: &[Token]) -> Result<Operand, CompileError> {
        let collection = single_collection(body)?;
        let inner = Compiler::new(self.config, Some(collection.clone())).run(body)?;

        Ok(Operand {
            text: format!(
                "SUBQUERY({collection}, {}, {}).@count",
                self.config.subquery_variable(),
                inner.format
            ),
            arguments: inner.arguments,
        })
    }

    // Write any pending operand to the output.
    fn flush(&mut self) {
        if let Some(operand) = self.operand.take() {
            self.write_operand(&operand);
        }
    }

    fn write_operand(&mut self, operand: &Operand) {
        self.push_spaced(&operand.text);
        self.arguments.extend(operand.arguments.iter().cloned());
    }

    // Separate from the previous fragment by one space, except at the
    // start of the output or right after an opening group.
    fn push_spaced(&mut self, fragment: &str) {
        if !(self.out.is_empty() || self.out.ends_with(' ') || self.out.ends_with('(')) {
            self.out.push(' ');
        }
        self.out.push_str(fragment);
    }
}

// Distinct collection key paths referenced by a subquery body. Nested
// subqueries scope their own collections and are not visited.
fn single_collection(body: &[Token]) -> Result<String, CompileError> {
    let mut collections: Vec<String> = Vec::new();
    let mut chain: Vec<&str> = Vec::new();

    for token in body {
        match token {
            Token::KeyPath {
                name,
                is_collection,
            } => {
                chain.push(*name);
                if *is_collection {
                    let path = chain.join(".");
                    if !collections.contains(&path) {
                        collections.push(path);
                    }
                }
            }
            _ => chain.clear(),
        }
    }

    match collections.len() {
        0 => Err(CompileError::MissingCollectionInSubquery),
        1 => Ok(collections.remove(0)),
        _ => Err(CompileError::MultipleCollectionsInSubquery { collections }),
    }
}
