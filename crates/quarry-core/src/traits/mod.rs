#[macro_use]
mod macros;


use crate::{
    types::{List, Map, Set},
    value::{Record, Value},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use ulid::Ulid;

// ============================================================================
// VALUE CONVERSION
// ============================================================================

///
/// FieldValue
///
/// Conversion boundary for values used in predicates.
///
/// Represents values that can appear on the *right-hand side* of a
/// comparison. The produced `Value` is forwarded to the engine verbatim.
///

pub trait FieldValue {
    fn to_value(&self) -> Value;
}

///
/// FieldType
///
/// Any type that may be declared as an object field.
///

pub trait FieldType: FieldValue {
    /// Whether a key path ending at this field addresses a collection.
    const COLLECTION: bool = false;
}

// ============================================================================
// CAPABILITY TAGS
// ============================================================================
//
// These markers decide which operator families a field supports.
// There is no runtime type check behind them; an operator missing from a
// field's `Query<T>` simply cannot be written.
//

/// Supports `==` / `!=`.
pub trait Comparable: FieldType {}

/// Supports `<`, `<=`, `>`, `>=` and scalar range containment.
pub trait Numeric: FieldType {}

/// Supports `CONTAINS`, `LIKE`, `BEGINSWITH`, `ENDSWITH`.
pub trait StringSearchable: FieldType {}

///
/// RangeContainable
///
/// Field types that can be tested against a numeric range.
/// Scalars compare the value itself; collections compare their
/// `@min` / `@max` aggregates instead.
///

pub trait RangeContainable: FieldType {
    type Bound: FieldValue;

    /// Whether the range applies to the elements rather than the value.
    const AGGREGATE: bool = false;
}

// ============================================================================
// COLLECTIONS
// ============================================================================

///
/// Collection
///
/// Field types whose key path addresses many values.
/// Maps are collections of their values.
///

pub trait Collection: FieldType {
    type Element: FieldType;
}

///
/// MapCollection
///
/// Keyed collections, addressable through `@allKeys` / `@allValues`.
///

pub trait MapCollection: Collection {
    type Key: FieldType;
}

// ============================================================================
// OBJECTS
// ============================================================================

///
/// FieldValues
///
/// Read access to an object's stored fields by schema name.
///

pub trait FieldValues {
    fn get_value(&self, field: &str) -> Option<Value>;
}

///
/// Object
///
/// A schema object type. Implemented by `#[derive(Object)]`, which also
/// generates one `Field` descriptor constant per stored field.
///

pub trait Object: FieldValues + 'static {
    const TYPE_NAME: &'static str;

    /// Stored field names, in declaration order.
    const FIELDS: &'static [&'static str];

    /// Snapshot every stored field into a `Record`.
    fn to_record(&self) -> Record {
        let mut record = Record::new(Self::TYPE_NAME);
        for name in Self::FIELDS {
            if let Some(value) = self.get_value(name) {
                record.insert(*name, value);
            }
        }

        record
    }
}

///
/// Traversable
///
/// Field types whose key path may be extended with a field of `Target`.
///

pub trait Traversable {
    type Target: Object;
}

///
/// PersistableEnum
///
/// Enum stored through a raw value. Predicates bind the raw value, never
/// the symbolic case. Implemented by `#[derive(PersistableEnum)]`.
///

pub trait PersistableEnum: Sized + 'static {
    type RawValue: FieldValue;

    fn raw_value(&self) -> Self::RawValue;

    fn from_raw_value(raw: &Self::RawValue) -> Option<Self>;
}

// ============================================================================
// SCALAR IMPLS
// ============================================================================

impl_field_value!(
    i8 => Int,
    i16 => Int,
    i32 => Int,
    i64 => Int,
    u8 => Uint,
    u16 => Uint,
    u32 => Uint,
    u64 => Uint,
    bool => Bool,
    f32 => Float32,
    f64 => Float64,
    Decimal => Decimal,
    DateTime<Utc> => Timestamp,
    Ulid => Ulid,
);

impl FieldValue for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl FieldType for String {}

impl FieldValue for Vec<u8> {
    fn to_value(&self) -> Value {
        Value::Blob(self.clone())
    }
}

impl FieldType for Vec<u8> {}

// mixed-type field
impl FieldValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl FieldType for Value {}

impl_capability!(Comparable:
    bool, i8, i16, i32, i64, u8, u16, u32, u64, f32, f64,
    Decimal, DateTime<Utc>, Ulid, String, Vec<u8>, Value,
);

impl_capability!(Numeric:
    i8, i16, i32, i64, u8, u16, u32, u64, f32, f64,
    Decimal, DateTime<Utc>, Value,
);

impl_capability!(StringSearchable: String);

impl_range_containable!(
    i8, i16, i32, i64, u8, u16, u32, u64, f32, f64,
    Decimal, DateTime<Utc>, Value,
);

// ============================================================================
// OPTIONAL PROPAGATION
// ============================================================================

impl<T: FieldValue> FieldValue for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }
}

impl<T: FieldType> FieldType for Option<T> {
    const COLLECTION: bool = T::COLLECTION;
}

impl<T: Comparable> Comparable for Option<T> {}
impl<T: Numeric> Numeric for Option<T> {}
impl<T: StringSearchable> StringSearchable for Option<T> {}

impl<T: RangeContainable> RangeContainable for Option<T> {
    type Bound = T::Bound;
    const AGGREGATE: bool = T::AGGREGATE;
}

impl<O: Object> Traversable for Option<O> {
    type Target = O;
}

// ============================================================================
// COLLECTION IMPLS
// ============================================================================

impl<T: FieldValue> FieldValue for List<T> {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(FieldValue::to_value).collect())
    }
}

impl<T: FieldType> FieldType for List<T> {
    const COLLECTION: bool = true;
}

impl<T: FieldType> Collection for List<T> {
    type Element = T;
}

impl<T: Numeric + RangeContainable> RangeContainable for List<T> {
    type Bound = T::Bound;
    const AGGREGATE: bool = true;
}

impl<O: Object> Traversable for List<O> {
    type Target = O;
}

impl<T: FieldValue> FieldValue for Set<T> {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(FieldValue::to_value).collect())
    }
}

impl<T: FieldType> FieldType for Set<T> {
    const COLLECTION: bool = true;
}

impl<T: FieldType> Collection for Set<T> {
    type Element = T;
}

impl<T: Numeric + RangeContainable> RangeContainable for Set<T> {
    type Bound = T::Bound;
    const AGGREGATE: bool = true;
}

impl<O: Object> Traversable for Set<O> {
    type Target = O;
}

impl<K: FieldValue, V: FieldValue> FieldValue for Map<K, V> {
    fn to_value(&self) -> Value {
        Value::Map(
            self.iter()
                .map(|(k, v)| (k.to_value(), v.to_value()))
                .collect(),
        )
    }
}

impl<K: FieldType, V: FieldType> FieldType for Map<K, V> {
    const COLLECTION: bool = true;
}

impl<K: FieldType, V: FieldType> Collection for Map<K, V> {
    type Element = V;
}

impl<K: FieldType, V: FieldType> MapCollection for Map<K, V> {
    type Key = K;
}

impl<K: FieldType, V: Numeric + RangeContainable> RangeContainable for Map<K, V> {
    type Bound = V::Bound;
    const AGGREGATE: bool = true;
}

impl<K: FieldType, O: Object> Traversable for Map<K, O> {
    type Target = O;
}
