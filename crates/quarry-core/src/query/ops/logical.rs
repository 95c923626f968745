use crate::query::{
    expr::Query,
    token::{ComparisonOp, CompoundOp, Token},
};
use std::ops::{BitAnd, BitOr, Not};

impl Query<bool> {
    fn join(self, op: CompoundOp, other: Self) -> Self {
        let left = if self.top_level_joins().other_than(op) {
            self.grouped()
        } else {
            self
        };
        let right = if other.top_level_joins().other_than(op) {
            other.grouped()
        } else {
            other
        };

        left.extend(std::iter::once(Token::Compound(op)).chain(right.into_tokens()))
    }

    /// `<self> && <other>`. An operand joined by `||` is parenthesized.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        self.join(CompoundOp::And, other)
    }

    /// `<self> || <other>`. An operand joined by `&&` is parenthesized.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        self.join(CompoundOp::Or, other)
    }

    /// `NOT <self>`, parenthesizing a compound operand.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        let operand = if self.top_level_joins().any() {
            self.grouped()
        } else {
            self
        };

        let mut tokens = operand.into_tokens();
        tokens.insert(0, Token::BasicComparison(ComparisonOp::Not));

        Self::from_tokens(tokens)
    }

    ///
    /// Count the elements of this expression's collection that satisfy it.
    ///
    /// The body must reference exactly one collection key path; inside it,
    /// that collection renders as the subquery variable. Violations are
    /// reported when the enclosing expression is compiled.
    ///
    #[must_use]
    pub fn count(self) -> Query<i64> {
        Query::from_tokens(vec![Token::Subquery(self.into_tokens())])
    }
}

impl BitAnd for Query<bool> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.and(rhs)
    }
}

impl BitOr for Query<bool> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.or(rhs)
    }
}

impl Not for Query<bool> {
    type Output = Self;

    fn not(self) -> Self {
        Self::not(self)
    }
}
