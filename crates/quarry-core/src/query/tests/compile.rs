use super::text;
use crate::{
    config::CompileConfig,
    query::{
        Aggregation, CompileError, Comparison, ComparisonOp, CompoundOp, Group, Predicate,
        StringOption, StringOptions, StringSearchKind, Token, compile,
    },
    value::Value,
};

fn run(tokens: &[Token]) -> Result<Predicate, CompileError> {
    compile(tokens, &CompileConfig::default())
}

fn path(name: &'static str) -> Token {
    Token::key_path(name, false)
}

fn collection(name: &'static str) -> Token {
    Token::key_path(name, true)
}

fn cmp(op: ComparisonOp) -> Token {
    Token::BasicComparison(op)
}

fn rhs(v: impl Into<Value>) -> Token {
    Token::Rhs(v.into())
}

// ----------------------------------------------------------------------
// Basic rendering
// ----------------------------------------------------------------------

#[test]
fn comparison_renders_operator_and_placeholder() {
    let cases = [
        (ComparisonOp::Eq, "intCol == %@"),
        (ComparisonOp::Ne, "intCol != %@"),
        (ComparisonOp::Lt, "intCol < %@"),
        (ComparisonOp::Lte, "intCol <= %@"),
        (ComparisonOp::Gt, "intCol > %@"),
        (ComparisonOp::Gte, "intCol >= %@"),
    ];

    for (op, expected) in cases {
        let predicate = run(&[path("intCol"), cmp(op), rhs(5)]).unwrap();

        assert_eq!(predicate.format, expected);
        assert_eq!(predicate.arguments, vec![Value::Int(5)]);
    }
}

#[test]
fn consecutive_key_paths_are_dot_joined() {
    let predicate = run(&[
        path("owner"),
        path("address"),
        path("city"),
        cmp(ComparisonOp::Eq),
        rhs("Oslo"),
    ])
    .unwrap();

    assert_eq!(predicate.format, "owner.address.city == %@");
}

#[test]
fn null_is_bound_like_any_other_value() {
    let predicate = run(&[path("optStringCol"), cmp(ComparisonOp::Eq), rhs(Value::Null)]).unwrap();

    assert_eq!(predicate.format, "optStringCol == %@");
    assert_eq!(predicate.arguments, vec![Value::Null]);
}

#[test]
fn key_path_on_the_right_renders_without_placeholder() {
    let predicate = run(&[path("a"), cmp(ComparisonOp::Lt), path("b"), path("c")]).unwrap();

    assert_eq!(predicate.format, "a < b.c");
    assert!(predicate.arguments.is_empty());
}

#[test]
fn not_prefix_has_no_leading_space() {
    let predicate = run(&[cmp(ComparisonOp::Not), path("boolCol")]).unwrap();

    assert_eq!(predicate.format, "NOT boolCol");
}

#[test]
fn groups_and_compounds_are_space_padded() {
    let predicate = run(&[
        Token::Group(Group::Open),
        path("a"),
        cmp(ComparisonOp::Eq),
        rhs(1),
        Token::Compound(CompoundOp::Or),
        path("b"),
        cmp(ComparisonOp::Eq),
        rhs(2),
        Token::Group(Group::Close),
        Token::Compound(CompoundOp::And),
        cmp(ComparisonOp::Not),
        path("c"),
    ])
    .unwrap();

    assert_eq!(predicate.format, "(a == %@ || b == %@) && NOT c");
    assert_eq!(predicate.arguments, vec![Value::Int(1), Value::Int(2)]);
}

// ----------------------------------------------------------------------
// Ranges and membership
// ----------------------------------------------------------------------

#[test]
fn closed_range_renders_between() {
    let predicate = run(&[
        path("intCol"),
        Token::Comparison(Comparison::Between {
            low: Value::Int(1),
            high: Value::Int(9),
            closed: true,
        }),
    ])
    .unwrap();

    assert_eq!(predicate.format, "intCol BETWEEN {%@, %@}");
    assert_eq!(predicate.arguments, vec![Value::Int(1), Value::Int(9)]);
}

#[test]
fn open_range_repeats_the_full_key_path() {
    let predicate = run(&[
        path("owner"),
        path("age"),
        Token::Comparison(Comparison::Between {
            low: Value::Int(1),
            high: Value::Int(9),
            closed: false,
        }),
    ])
    .unwrap();

    assert_eq!(predicate.format, "owner.age >= %@ && owner.age < %@");
    assert_eq!(predicate.arguments, vec![Value::Int(1), Value::Int(9)]);
}

#[test]
fn open_range_without_key_path_fails() {
    let err = run(&[Token::Comparison(Comparison::Between {
        low: Value::Int(1),
        high: Value::Int(2),
        closed: false,
    })])
    .unwrap_err();

    assert_eq!(err, CompileError::MissingKeyPathForRangeComparison);
}

#[test]
fn open_range_after_comparison_fails() {
    let err = run(&[
        path("a"),
        cmp(ComparisonOp::Eq),
        rhs(1),
        Token::Comparison(Comparison::Between {
            low: Value::Int(1),
            high: Value::Int(2),
            closed: false,
        }),
    ])
    .unwrap_err();

    assert_eq!(err, CompileError::MissingKeyPathForRangeComparison);
}

#[test]
fn membership_renders_prefix_of_its_key_path() {
    let predicate = run(&[
        path("owner"),
        collection("tags"),
        Token::Comparison(Comparison::Contains(text("red"))),
    ])
    .unwrap();

    assert_eq!(predicate.format, "%@ IN owner.tags");
    assert_eq!(predicate.arguments, vec![text("red")]);
}

#[test]
fn membership_inside_a_compound_binds_to_its_own_path() {
    let predicate = run(&[
        path("a"),
        cmp(ComparisonOp::Eq),
        rhs(1),
        Token::Compound(CompoundOp::And),
        collection("tags"),
        Token::Comparison(Comparison::Contains(text("x"))),
    ])
    .unwrap();

    assert_eq!(predicate.format, "a == %@ && %@ IN tags");
    assert_eq!(predicate.arguments, vec![Value::Int(1), text("x")]);
}

#[test]
fn membership_without_key_path_fails() {
    let err = run(&[Token::Comparison(Comparison::Contains(Value::Int(1)))]).unwrap_err();

    assert_eq!(err, CompileError::MissingKeyPathForMembership);
}

// ----------------------------------------------------------------------
// String search and aggregation
// ----------------------------------------------------------------------

#[test]
fn string_search_renders_verb_and_fixed_order_flags() {
    let cases = [
        (StringSearchKind::Contains, StringOptions::NONE, "s CONTAINS %@"),
        (
            StringSearchKind::Like,
            StringOptions::CASE_INSENSITIVE,
            "s LIKE[c] %@",
        ),
        (
            StringSearchKind::BeginsWith,
            StringOptions::DIACRITIC_INSENSITIVE,
            "s BEGINSWITH[d] %@",
        ),
        (
            StringSearchKind::EndsWith,
            StringOption::DiacriticInsensitive | StringOption::CaseInsensitive,
            "s ENDSWITH[cd] %@",
        ),
    ];

    for (kind, options, expected) in cases {
        let predicate = run(&[
            path("s"),
            Token::StringSearch {
                kind,
                pattern: "abc".to_string(),
                options,
            },
        ])
        .unwrap();

        assert_eq!(predicate.format, expected);
        assert_eq!(predicate.arguments, vec![text("abc")]);
    }
}

#[test]
fn aggregations_append_fixed_suffixes() {
    let cases = [
        (Aggregation::Min, "list.@min > %@"),
        (Aggregation::Max, "list.@max > %@"),
        (Aggregation::Avg, "list.@avg.doubleValue > %@"),
        (Aggregation::Sum, "list.@sum > %@"),
        (Aggregation::Count, "list.@count > %@"),
        (Aggregation::AllKeys, "list.@allKeys > %@"),
        (Aggregation::AllValues, "list.@allValues > %@"),
    ];

    for (aggregation, expected) in cases {
        let predicate = run(&[
            collection("list"),
            Token::CollectionAggregation(aggregation),
            cmp(ComparisonOp::Gt),
            rhs(0),
        ])
        .unwrap();

        assert_eq!(predicate.format, expected);
    }
}

// ----------------------------------------------------------------------
// Subqueries
// ----------------------------------------------------------------------

fn dogs_older_than(age: i64) -> Vec<Token> {
    vec![
        collection("dogs"),
        path("age"),
        cmp(ComparisonOp::Gt),
        rhs(age),
    ]
}

#[test]
fn subquery_binds_collection_to_variable_and_splices_arguments() {
    let predicate = run(&[
        path("name"),
        cmp(ComparisonOp::Eq),
        rhs("Ann"),
        Token::Compound(CompoundOp::And),
        Token::Subquery(dogs_older_than(3)),
        cmp(ComparisonOp::Gt),
        rhs(0),
    ])
    .unwrap();

    assert_eq!(
        predicate.format,
        "name == %@ && SUBQUERY(dogs, $obj, $obj.age > %@).@count > %@"
    );
    assert_eq!(
        predicate.arguments,
        vec![text("Ann"), Value::Int(3), Value::Int(0)]
    );
}

#[test]
fn subquery_collection_name_is_the_full_chain() {
    let predicate = run(&[
        Token::Subquery(vec![
            path("owner"),
            collection("dogs"),
            path("name"),
            cmp(ComparisonOp::Eq),
            rhs("Rex"),
        ]),
        cmp(ComparisonOp::Eq),
        rhs(1),
    ])
    .unwrap();

    assert_eq!(
        predicate.format,
        "SUBQUERY(owner.dogs, $obj, $obj.name == %@).@count == %@"
    );
}

#[test]
fn subquery_uses_configured_variable() {
    let config = CompileConfig::default()
        .with_subquery_variable("$dog")
        .unwrap();
    let predicate = compile(
        &[
            Token::Subquery(dogs_older_than(2)),
            cmp(ComparisonOp::Gte),
            rhs(1),
        ],
        &config,
    )
    .unwrap();

    assert_eq!(
        predicate.format,
        "SUBQUERY(dogs, $dog, $dog.age > %@).@count >= %@"
    );
}

#[test]
fn subquery_over_two_collections_fails() {
    let mut body = dogs_older_than(3);
    body.push(Token::Compound(CompoundOp::And));
    body.extend([collection("cats"), path("age"), cmp(ComparisonOp::Lt), rhs(9)]);

    let err = run(&[Token::Subquery(body), cmp(ComparisonOp::Gt), rhs(0)]).unwrap_err();

    assert_eq!(
        err,
        CompileError::MultipleCollectionsInSubquery {
            collections: vec!["dogs".to_string(), "cats".to_string()],
        }
    );
}

#[test]
fn subquery_repeating_one_collection_is_accepted() {
    let mut body = dogs_older_than(3);
    body.push(Token::Compound(CompoundOp::Or));
    body.extend([collection("dogs"), path("name"), cmp(ComparisonOp::Eq), rhs("Rex")]);

    let predicate = run(&[Token::Subquery(body), cmp(ComparisonOp::Gt), rhs(0)]).unwrap();

    assert_eq!(
        predicate.format,
        "SUBQUERY(dogs, $obj, $obj.age > %@ || $obj.name == %@).@count > %@"
    );
}

#[test]
fn subquery_without_collection_fails() {
    let err = run(&[
        Token::Subquery(vec![path("age"), cmp(ComparisonOp::Gt), rhs(1)]),
        cmp(ComparisonOp::Gt),
        rhs(0),
    ])
    .unwrap_err();

    assert_eq!(err, CompileError::MissingCollectionInSubquery);
}

#[test]
fn nested_subquery_errors_propagate() {
    let err = run(&[
        path("a"),
        cmp(ComparisonOp::Eq),
        rhs(1),
        Token::Compound(CompoundOp::And),
        Token::Subquery(vec![Token::Comparison(Comparison::Contains(Value::Int(1)))]),
        cmp(ComparisonOp::Gt),
        rhs(0),
    ])
    .unwrap_err();

    assert_eq!(err, CompileError::MissingCollectionInSubquery);
}

// ----------------------------------------------------------------------
// Predicate
// ----------------------------------------------------------------------

#[test]
fn explain_inlines_arguments_in_order() {
    let predicate = run(&[
        path("name"),
        cmp(ComparisonOp::Eq),
        rhs("O\"Neil"),
        Token::Compound(CompoundOp::Or),
        path("age"),
        Token::Comparison(Comparison::Between {
            low: Value::Int(1),
            high: Value::Int(3),
            closed: true,
        }),
        Token::Compound(CompoundOp::Or),
        path("nick"),
        cmp(ComparisonOp::Eq),
        rhs(Value::Null),
    ])
    .unwrap();

    assert_eq!(predicate.placeholder_count(), 4);
    assert_eq!(
        predicate.explain(),
        r#"name == "O\"Neil" || age BETWEEN {1, 3} || nick == nil"#
    );
    assert_eq!(predicate.to_string(), predicate.format);
}

#[test]
fn predicate_serializes_format_and_arguments() {
    let predicate = run(&[path("intCol"), cmp(ComparisonOp::Gte), rhs(5)]).unwrap();

    let json = serde_json::to_value(&predicate).unwrap();
    assert_eq!(json["format"], "intCol >= %@");

    let decoded: Predicate = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, predicate);
}

#[test]
fn error_messages_name_the_defect() {
    let err = CompileError::MultipleCollectionsInSubquery {
        collections: vec!["dogs".to_string(), "cats".to_string()],
    };

    assert_eq!(
        err.to_string(),
        "subquery references more than one collection: dogs, cats"
    );
}
