use crate::{
    query::{
        expr::Query,
        token::{ComparisonOp, Token},
    },
    traits::{Comparable, FieldValue, Numeric},
    value::Value,
};

impl<T> Query<T> {
    fn compare(self, op: ComparisonOp, value: Value) -> Query<bool> {
        self.extend([Token::BasicComparison(op), Token::Rhs(value)])
    }

    fn compare_expr<U>(self, op: ComparisonOp, other: Query<U>) -> Query<bool> {
        self.extend(std::iter::once(Token::BasicComparison(op)).chain(other.into_tokens()))
    }
}

// ----------------------------------------------------------------------
// Equality
// ----------------------------------------------------------------------

impl<T: Comparable> Query<T> {
    /// `<path> == %@`
    #[must_use]
    pub fn eq(self, value: impl Into<T>) -> Query<bool> {
        self.compare(ComparisonOp::Eq, value.into().to_value())
    }

    /// `<path> != %@`
    #[must_use]
    pub fn ne(self, value: impl Into<T>) -> Query<bool> {
        self.compare(ComparisonOp::Ne, value.into().to_value())
    }

    /// Equality against another expression of the same type.
    #[must_use]
    pub fn eq_expr(self, other: Query<T>) -> Query<bool> {
        self.compare_expr(ComparisonOp::Eq, other)
    }

    #[must_use]
    pub fn ne_expr(self, other: Query<T>) -> Query<bool> {
        self.compare_expr(ComparisonOp::Ne, other)
    }
}

impl<T: Comparable> Query<Option<T>> {
    /// `<path> == %@` bound to nil.
    #[must_use]
    pub fn eq_none(self) -> Query<bool> {
        self.compare(ComparisonOp::Eq, Value::Null)
    }

    /// `<path> != %@` bound to nil.
    #[must_use]
    pub fn ne_none(self) -> Query<bool> {
        self.compare(ComparisonOp::Ne, Value::Null)
    }
}

// ----------------------------------------------------------------------
// Ordering
// ----------------------------------------------------------------------

impl<T: Numeric> Query<T> {
    #[must_use]
    pub fn gt(self, value: impl Into<T>) -> Query<bool> {
        self.compare(ComparisonOp::Gt, value.into().to_value())
    }

    #[must_use]
    pub fn gte(self, value: impl Into<T>) -> Query<bool> {
        self.compare(ComparisonOp::Gte, value.into().to_value())
    }

    #[must_use]
    pub fn lt(self, value: impl Into<T>) -> Query<bool> {
        self.compare(ComparisonOp::Lt, value.into().to_value())
    }

    #[must_use]
    pub fn lte(self, value: impl Into<T>) -> Query<bool> {
        self.compare(ComparisonOp::Lte, value.into().to_value())
    }

    #[must_use]
    pub fn gt_expr(self, other: Query<T>) -> Query<bool> {
        self.compare_expr(ComparisonOp::Gt, other)
    }

    #[must_use]
    pub fn gte_expr(self, other: Query<T>) -> Query<bool> {
        self.compare_expr(ComparisonOp::Gte, other)
    }

    #[must_use]
    pub fn lt_expr(self, other: Query<T>) -> Query<bool> {
        self.compare_expr(ComparisonOp::Lt, other)
    }

    #[must_use]
    pub fn lte_expr(self, other: Query<T>) -> Query<bool> {
        self.compare_expr(ComparisonOp::Lte, other)
    }
}
