use crate::value::Value;
use std::ops::BitOr;

///
/// Token
///
/// One node of an expression's flat token sequence.
///
/// The typed front-end only ever appends well-formed runs of tokens; the
/// compiler walks the sequence once, left to right, and never rewrites it.
///

#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    /// Field reference. Consecutive key paths chain with `.`.
    KeyPath {
        name: &'static str,
        is_collection: bool,
    },

    /// Operator marker; the operand follows as an `Rhs` or another path.
    BasicComparison(ComparisonOp),

    /// Self-contained range or membership test.
    Comparison(Comparison),

    Compound(CompoundOp),

    /// Bound literal, `Value::Null` included.
    Rhs(Value),

    StringSearch {
        kind: StringSearchKind,
        pattern: String,
        options: StringOptions,
    },

    CollectionAggregation(Aggregation),

    /// Boolean body evaluated per element of its single collection.
    /// The body is compiled together with the enclosing expression.
    Subquery(Vec<Self>),

    Group(Group),
}

impl Token {
    #[must_use]
    pub const fn key_path(name: &'static str, is_collection: bool) -> Self {
        Self::KeyPath {
            name,
            is_collection,
        }
    }

    /// Compound operator this token joins at the top level, if any.
    /// An open range renders as two clauses joined by `&&`.
    #[must_use]
    pub(crate) const fn join(&self) -> Option<CompoundOp> {
        match self {
            Self::Compound(op) => Some(*op),
            Self::Comparison(Comparison::Between { closed: false, .. }) => Some(CompoundOp::And),
            _ => None,
        }
    }
}

///
/// ComparisonOp
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ComparisonOp {
    Eq,
    Ne,
    Lt,
    Gt,
    Gte,
    Lte,
    Not,
}

impl ComparisonOp {
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::Lte => "<=",
            Self::Not => "NOT",
        }
    }
}

///
/// Comparison
///

#[derive(Clone, Debug, PartialEq)]
pub enum Comparison {
    /// Range containment. `closed` includes the upper bound.
    Between {
        low: Value,
        high: Value,
        closed: bool,
    },

    /// `value IN <collection>`, bound to the key path it follows.
    Contains(Value),
}

///
/// CompoundOp
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CompoundOp {
    And,
    Or,
}

impl CompoundOp {
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::And => "&&",
            Self::Or => "||",
        }
    }
}

///
/// StringSearchKind
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum StringSearchKind {
    Contains,
    Like,
    BeginsWith,
    EndsWith,
}

impl StringSearchKind {
    #[must_use]
    pub const fn verb(self) -> &'static str {
        match self {
            Self::Contains => "CONTAINS",
            Self::Like => "LIKE",
            Self::BeginsWith => "BEGINSWITH",
            Self::EndsWith => "ENDSWITH",
        }
    }
}

///
/// StringOption
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum StringOption {
    CaseInsensitive,
    DiacriticInsensitive,
}

impl StringOption {
    const fn bit(self) -> u8 {
        match self {
            Self::CaseInsensitive => 0b01,
            Self::DiacriticInsensitive => 0b10,
        }
    }
}

///
/// StringOptions
///
/// Set of string comparison options. Rendering order is fixed
/// (`c` before `d`) no matter how the set was built.
///

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct StringOptions(u8);

impl StringOptions {
    pub const NONE: Self = Self(0);
    pub const CASE_INSENSITIVE: Self = Self(StringOption::CaseInsensitive.bit());
    pub const DIACRITIC_INSENSITIVE: Self = Self(StringOption::DiacriticInsensitive.bit());

    #[must_use]
    pub const fn empty() -> Self {
        Self::NONE
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[must_use]
    pub const fn contains(self, option: StringOption) -> bool {
        self.0 & option.bit() != 0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Bracketed flag suffix for the predicate grammar.
    #[must_use]
    pub const fn flags(self) -> &'static str {
        match (
            self.contains(StringOption::CaseInsensitive),
            self.contains(StringOption::DiacriticInsensitive),
        ) {
            (true, true) => "[cd]",
            (true, false) => "[c]",
            (false, true) => "[d]",
            (false, false) => "",
        }
    }
}

impl From<StringOption> for StringOptions {
    fn from(option: StringOption) -> Self {
        Self(option.bit())
    }
}

impl FromIterator<StringOption> for StringOptions {
    fn from_iter<I: IntoIterator<Item = StringOption>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::NONE, |acc, option| acc.union(option.into()))
    }
}

impl<const N: usize> From<[StringOption; N]> for StringOptions {
    fn from(options: [StringOption; N]) -> Self {
        options.into_iter().collect()
    }
}

impl BitOr for StringOptions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOr for StringOption {
    type Output = StringOptions;

    fn bitor(self, rhs: Self) -> StringOptions {
        StringOptions::from(self).union(rhs.into())
    }
}

impl BitOr<StringOption> for StringOptions {
    type Output = Self;

    fn bitor(self, rhs: StringOption) -> Self {
        self.union(rhs.into())
    }
}

///
/// Aggregation
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Aggregation {
    Min,
    Max,
    Avg,
    Sum,
    Count,
    AllKeys,
    AllValues,
}

impl Aggregation {
    /// Key-path suffix appended to the aggregated collection.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Min => ".@min",
            Self::Max => ".@max",
            Self::Avg => ".@avg.doubleValue",
            Self::Sum => ".@sum",
            Self::Count => ".@count",
            Self::AllKeys => ".@allKeys",
            Self::AllValues => ".@allValues",
        }
    }
}

///
/// Group
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Group {
    Open,
    Close,
}
