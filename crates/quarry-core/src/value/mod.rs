mod record;
mod tag;


use chrono::{DateTime, SecondsFormat, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use ulid::Ulid;

// re-exports
pub use record::Record;
pub use tag::ValueTag;

///
/// Value
///
/// Bound argument payload of a compiled predicate.
/// The compiler never inspects a value; it forwards each one unmodified,
/// in encounter order, to the argument list.
///
/// Null  → the field's value is `Option::None`, or an explicit nil comparison.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum Value {
    Blob(Vec<u8>),
    Bool(bool),
    Decimal(Decimal),
    Float32(f32),
    Float64(f64),
    Int(i64),
    /// Ordered list of values.
    /// Used for collection-typed object snapshots.
    List(Vec<Self>),
    /// Key/value pairs in map iteration order.
    Map(Vec<(Self, Self)>),
    Null,
    /// Snapshot of an embedded or linked object, compared by the engine.
    Object(Record),
    Text(String),
    Timestamp(DateTime<Utc>),
    Uint(u64),
    Ulid(Ulid),
}

impl Value {
    /// Stable variant tag for diagnostics.
    #[must_use]
    pub const fn tag(&self) -> ValueTag {
        match self {
            Self::Blob(_) => ValueTag::Blob,
            Self::Bool(_) => ValueTag::Bool,
            Self::Decimal(_) => ValueTag::Decimal,
            Self::Float32(_) => ValueTag::Float32,
            Self::Float64(_) => ValueTag::Float64,
            Self::Int(_) => ValueTag::Int,
            Self::List(_) => ValueTag::List,
            Self::Map(_) => ValueTag::Map,
            Self::Null => ValueTag::Null,
            Self::Object(_) => ValueTag::Object,
            Self::Text(_) => ValueTag::Text,
            Self::Timestamp(_) => ValueTag::Timestamp,
            Self::Uint(_) => ValueTag::Uint,
            Self::Ulid(_) => ValueTag::Ulid,
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns true for the variants an engine may order numerically.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::Decimal(_)
                | Self::Float32(_)
                | Self::Float64(_)
                | Self::Int(_)
                | Self::Uint(_)
                | Self::Timestamp(_)
        )
    }

    #[must_use]
    pub const fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Object(record) => Some(record),
            _ => None,
        }
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

macro_rules! impl_from_for_value {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$type> for Value {
                fn from(v: $type) -> Self {
                    Self::$variant(v.into())
                }
            }
        )*
    };
}

impl_from_for_value!(
    bool => Bool,
    i8 => Int,
    i16 => Int,
    i32 => Int,
    i64 => Int,
    u8 => Uint,
    u16 => Uint,
    u32 => Uint,
    u64 => Uint,
    f32 => Float32,
    f64 => Float64,
    String => Text,
    Decimal => Decimal,
    DateTime<Utc> => Timestamp,
    Ulid => Ulid,
    Record => Object,
);

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

// Text literals are quoted with `"` and `\` escaped, matching the
// literal syntax the predicate grammar accepts.
fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_str("\"")?;
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\t' => f.write_str("\\t")?,
            c => write!(f, "{c}")?,
        }
    }
    f.write_str("\"")
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blob(bytes) => {
                f.write_str("0x")?;
                for b in bytes {
                    write!(f, "{b:02x}")?;
                }
                Ok(())
            }
            Self::Bool(b) => write!(f, "{b}"),
            Self::Decimal(d) => write!(f, "{d}"),
            Self::Float32(v) => write!(f, "{v}"),
            Self::Float64(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::List(items) => {
                f.write_str("{")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("}")
            }
            Self::Map(entries) => {
                f.write_str("{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                f.write_str("}")
            }
            Self::Null => f.write_str("nil"),
            Self::Object(record) => write!(f, "{record}"),
            Self::Text(s) => write_quoted(f, s),
            Self::Timestamp(ts) => {
                write_quoted(f, &ts.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
            Self::Uint(v) => write!(f, "{v}"),
            Self::Ulid(id) => write_quoted(f, &id.to_string()),
        }
    }
}
