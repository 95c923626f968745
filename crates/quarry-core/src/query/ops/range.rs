use crate::{
    query::{
        expr::Query,
        token::{Aggregation, Comparison, CompoundOp, ComparisonOp, Token},
    },
    traits::{FieldValue, RangeContainable},
};
use std::ops::{Range, RangeInclusive};

///
/// QueryRange
///
/// Bounded range usable in `contains_range`. `a..b` excludes the upper
/// bound, `a..=b` includes it.
///

pub trait QueryRange<B> {
    /// `(low, high, closed)`
    fn into_bounds(self) -> (B, B, bool);
}

impl<B> QueryRange<B> for Range<B> {
    fn into_bounds(self) -> (B, B, bool) {
        (self.start, self.end, false)
    }
}

impl<B> QueryRange<B> for RangeInclusive<B> {
    fn into_bounds(self) -> (B, B, bool) {
        let (start, end) = self.into_inner();

        (start, end, true)
    }
}

impl<T: RangeContainable> Query<T> {
    /// Range containment.
    ///
    /// A scalar field compiles to `BETWEEN` (closed) or a `>= && <` pair
    /// (open). A collection compares its aggregates instead:
    /// `<path>.@min >= low && <path>.@max <(=) high`.
    #[must_use]
    pub fn contains_range(self, range: impl QueryRange<T::Bound>) -> Query<bool> {
        let (low, high, closed) = range.into_bounds();
        let (low, high) = (low.to_value(), high.to_value());

        if !T::AGGREGATE {
            return self.extend([Token::Comparison(Comparison::Between { low, high, closed })]);
        }

        let path = self.tokens().to_vec();
        let upper = if closed {
            ComparisonOp::Lte
        } else {
            ComparisonOp::Lt
        };

        self.extend(
            [
                Token::CollectionAggregation(Aggregation::Min),
                Token::BasicComparison(ComparisonOp::Gte),
                Token::Rhs(low),
                Token::Compound(CompoundOp::And),
            ]
            .into_iter()
            .chain(path)
            .chain([
                Token::CollectionAggregation(Aggregation::Max),
                Token::BasicComparison(upper),
                Token::Rhs(high),
            ]),
        )
    }
}
