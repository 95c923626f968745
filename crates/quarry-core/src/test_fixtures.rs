use crate::{
    traits::{Object, PersistableEnum},
    types::{List, Map, Set},
    value::Value,
};
use chrono::{DateTime, Utc};
use quarry_derive::{Object, PersistableEnum};
use rust_decimal::Decimal;
use ulid::Ulid;

///
/// Grade
/// Integer-backed enum.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, PersistableEnum)]
#[repr(i32)]
pub enum Grade {
    A = 1,
    B = 2,
    C = 3,
}

///
/// Mood
/// Text-backed enum, one case with an explicit raw value.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, PersistableEnum)]
pub enum Mood {
    Happy,
    #[quarry(raw = "sad")]
    Sad,
}

///
/// Child
///

#[derive(Clone, Debug, Object)]
pub struct Child {
    pub name: String,
    pub age: i32,
}

///
/// Embedded
///

#[derive(Clone, Debug, Object)]
#[quarry(rename_all = "camelCase")]
pub struct Embedded {
    pub label: String,
    pub tag_list: List<String>,
    pub best_child: Option<Child>,
}

///
/// AllTypes
///
/// One field of every supported shape, with camelCase stored names.
///

#[derive(Clone, Debug, Object)]
#[quarry(rename_all = "camelCase")]
pub struct AllTypes {
    pub bool_col: bool,
    pub int_col: i32,
    pub int8_col: i8,
    pub int64_col: i64,
    pub float_col: f32,
    pub double_col: f64,
    pub string_col: String,
    pub binary_col: Vec<u8>,
    pub date_col: DateTime<Utc>,
    pub decimal_col: Decimal,
    pub id_col: Ulid,
    pub any_col: Value,
    pub grade_col: Grade,
    pub mood_col: Mood,

    pub opt_int_col: Option<i32>,
    pub opt_string_col: Option<String>,
    pub opt_grade_col: Option<Grade>,
    pub embedded: Option<Embedded>,

    pub int_list: List<i32>,
    pub string_list: List<String>,
    pub opt_int_list: List<Option<i32>>,
    pub double_set: Set<f64>,
    pub int_map: Map<String, i32>,
    pub children: List<Child>,

    #[quarry(name = "legacy_name")]
    pub renamed: String,

    #[quarry(skip)]
    pub scratch: u32,
}

impl AllTypes {
    pub fn sample() -> Self {
        Self {
            bool_col: true,
            int_col: 5,
            int8_col: 8,
            int64_col: 64,
            float_col: 1.5,
            double_col: 2.5,
            string_col: "hello".to_string(),
            binary_col: vec![1, 2],
            date_col: DateTime::<Utc>::UNIX_EPOCH,
            decimal_col: Decimal::new(125, 2),
            id_col: Ulid::nil(),
            any_col: Value::Int(1),
            grade_col: Grade::B,
            mood_col: Mood::Sad,
            opt_int_col: None,
            opt_string_col: Some("opt".to_string()),
            opt_grade_col: None,
            embedded: None,
            int_list: vec![1, 2, 3].into(),
            string_list: List::new(),
            opt_int_list: vec![Some(1), None].into(),
            double_set: Set::new(),
            int_map: Map::new(),
            children: vec![Child {
                name: "kid".to_string(),
                age: 4,
            }]
            .into(),
            renamed: "legacy".to_string(),
            scratch: 0,
        }
    }
}

// ----------------------------------------------------------------------
// Derive checks
// ----------------------------------------------------------------------

#[test]
fn object_derive_names_fields_in_schema_order() {
    assert_eq!(AllTypes::TYPE_NAME, "AllTypes");
    assert_eq!(AllTypes::INT_COL.name(), "intCol");
    assert_eq!(AllTypes::OPT_STRING_COL.name(), "optStringCol");
    assert_eq!(AllTypes::RENAMED.name(), "legacy_name");
    assert_eq!(Embedded::TAG_LIST.name(), "tagList");
    assert_eq!(Child::FIELDS, &["name", "age"]);
    assert!(!AllTypes::FIELDS.contains(&"scratch"));
    assert_eq!(AllTypes::FIELDS.len(), 25);
}

#[test]
fn object_derive_snapshots_stored_fields() {
    let record = AllTypes::sample().to_record();

    assert_eq!(record.type_name(), "AllTypes");
    assert_eq!(record.get("intCol"), Some(&Value::Int(5)));
    assert_eq!(record.get("optIntCol"), Some(&Value::Null));
    assert_eq!(record.get("gradeCol"), Some(&Value::Int(2)));
    assert_eq!(record.get("moodCol"), Some(&Value::Text("sad".to_string())));
    assert_eq!(
        record.get("children"),
        Some(&Value::List(vec![Value::Object(
            Child {
                name: "kid".to_string(),
                age: 4,
            }
            .to_record()
        )]))
    );
    assert_eq!(record.get("scratch"), None);
}

#[test]
fn persistable_enum_derive_round_trips_raw_values() {
    assert_eq!(Grade::C.raw_value(), 3);
    assert_eq!(Grade::from_raw_value(&1), Some(Grade::A));
    assert_eq!(Grade::from_raw_value(&9), None);

    assert_eq!(Mood::Happy.raw_value(), "Happy");
    assert_eq!(Mood::from_raw_value(&"sad".to_string()), Some(Mood::Sad));
    assert_eq!(Mood::from_raw_value(&"Sad".to_string()), None);
}
