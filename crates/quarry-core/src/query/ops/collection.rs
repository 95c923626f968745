use crate::{
    query::{
        expr::Query,
        token::{Aggregation, Comparison, Token},
    },
    traits::{Collection, Comparable, FieldValue, MapCollection, Numeric},
};

impl<C: Collection> Query<C> {
    fn aggregate<U>(self, aggregation: Aggregation) -> Query<U> {
        self.extend([Token::CollectionAggregation(aggregation)])
    }

    /// Element count, `<path>.@count`.
    #[must_use]
    pub fn count(self) -> Query<i64> {
        self.aggregate(Aggregation::Count)
    }

    /// Membership, `%@ IN <path>`.
    #[must_use]
    pub fn contains(self, value: impl Into<C::Element>) -> Query<bool>
    where
        C::Element: Comparable,
    {
        let value = value.into().to_value();

        self.extend([Token::Comparison(Comparison::Contains(value))])
    }

    #[must_use]
    pub fn min(self) -> Query<C::Element>
    where
        C::Element: Numeric,
    {
        self.aggregate(Aggregation::Min)
    }

    #[must_use]
    pub fn max(self) -> Query<C::Element>
    where
        C::Element: Numeric,
    {
        self.aggregate(Aggregation::Max)
    }

    #[must_use]
    pub fn sum(self) -> Query<C::Element>
    where
        C::Element: Numeric,
    {
        self.aggregate(Aggregation::Sum)
    }

    /// Mean of the elements, always compared as a double.
    #[must_use]
    pub fn avg(self) -> Query<f64>
    where
        C::Element: Numeric,
    {
        self.aggregate(Aggregation::Avg)
    }
}

impl<M: MapCollection> Query<M> {
    /// `<path>.@allKeys`
    #[must_use]
    pub fn keys(self) -> Query<M::Key> {
        self.extend([Token::CollectionAggregation(Aggregation::AllKeys)])
    }

    /// `<path>.@allValues`
    #[must_use]
    pub fn values(self) -> Query<M::Element> {
        self.extend([Token::CollectionAggregation(Aggregation::AllValues)])
    }
}
