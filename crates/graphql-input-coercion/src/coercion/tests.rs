use async_graphql_value::{Name, Value};
use serde_json::json;

use crate::{
    CoercionConfig, ErrorKind, EnumDefinition, InputObjectDefinition, InputValue, InputValueDefinition,
    ScalarDefinition, TypeDefinition, TypeRef, TypeRegistry, Variables, build_arguments, coerce_variables,
    decode_value, literal, scalars::JSONScalar,
};

use super::Coercer;

fn ty(s: &str) -> TypeRef {
    s.parse().unwrap()
}

fn field(name: &str, ty_str: &str) -> InputValueDefinition {
    InputValueDefinition::new(name, ty(ty_str))
}

fn registry() -> TypeRegistry {
    TypeRegistry::new()
        .with(ScalarDefinition::new("JSON", JSONScalar))
        .with(EnumDefinition::new("Role", ["ADMIN", "USER"]))
        .with(
            InputObjectDefinition::new("Pair")
                .with_field(field("a", "Int"))
                .with_field(field("b", "Int").with_default(5)),
        )
        .with(InputObjectDefinition::new("Required").with_field(field("a", "Int!")))
        .with(
            InputObjectDefinition::new("Filter")
                .with_field(field("name", "String"))
                .with_field(field("roles", "[Role!]"))
                .with_field(field("nested", "Filter"))
                .with_field(field("limit", "Int").with_default(10)),
        )
        .with(TypeDefinition::Object("User".into()))
}

fn decode(value: serde_json::Value, ty_str: &str) -> Result<InputValue, super::CoercionError> {
    decode_value(&registry(), Some(&literal(value)), &ty(ty_str), &Variables::default())
}

#[test]
fn scalar_literals_go_through_the_scalar() {
    for value in [json!("x"), json!(1), json!(1.5), json!(true)] {
        assert_eq!(decode(value.clone(), "JSON"), Ok(InputValue::from(value)));
    }
    assert_eq!(decode(json!(3), "Float"), Ok(InputValue::Float(3.0)));
}

#[test]
fn absent_value_is_null() {
    let registry = registry();
    for ty_str in ["Int", "Int!", "[Int]", "Pair", "Required", "Role", "User", "Missing"] {
        assert_eq!(
            decode_value(&registry, None, &ty(ty_str), &Variables::default()),
            Ok(InputValue::Null),
            "{ty_str}"
        );
    }
}

#[test]
fn variables_take_precedence_over_the_type() {
    let variables = Variables::from_json(json!({"x": [1, 2]}));
    let value = Value::Variable(Name::new("x"));
    for ty_str in ["Int", "Pair", "User"] {
        assert_eq!(
            decode_value(&registry(), Some(&value), &ty(ty_str), &variables),
            Ok(InputValue::from(vec![1, 2]))
        );
    }
}

#[test]
fn variables_are_not_promoted_to_lists() {
    let variables = Variables::from_json(json!({"x": 3}));
    let value = Value::Variable(Name::new("x"));
    assert_eq!(
        decode_value(&registry(), Some(&value), &ty("[Int]"), &variables),
        Ok(InputValue::Int(3))
    );

    let value = Value::List(vec![Value::Variable(Name::new("x"))]);
    assert_eq!(
        decode_value(&registry(), Some(&value), &ty("[[Int]]"), &variables),
        Ok(InputValue::from(vec![3]))
    );
}

#[test]
fn missing_variable() {
    let err = decode_value(
        &registry(),
        Some(&Value::Variable(Name::new("y"))),
        &ty("Int"),
        &Variables::default(),
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingVariable);
    insta::assert_snapshot!(err, @"missing variable: $y");
}

#[test]
fn nested_missing_variable() {
    let inner = Value::Object([(Name::new("name"), Value::Variable(Name::new("n")))].into_iter().collect());
    let value = Value::Object([(Name::new("nested"), inner)].into_iter().collect());
    let err = decode_value(&registry(), Some(&value), &ty("Filter"), &Variables::default()).unwrap_err();
    insta::assert_snapshot!(err, @"missing variable: $n at path '.nested.name'");
}

#[test]
fn singleton_promotion() {
    assert_eq!(decode(json!(3), "[Int]"), Ok(InputValue::from(vec![3])));
    assert_eq!(decode(json!(3), "[Int!]!"), Ok(InputValue::from(vec![3])));
    assert_eq!(
        decode(json!(3), "[[Int]]"),
        Ok(InputValue::List(vec![InputValue::from(vec![3])]))
    );
    assert_eq!(decode(json!([1, 2]), "[Int]"), Ok(InputValue::from(vec![1, 2])));
}

#[test]
fn list_coercion_can_be_disabled() {
    let registry = registry();
    let config = CoercionConfig {
        list_coercion: false,
        ..Default::default()
    };
    let err = Coercer::new(&registry)
        .with_config(config)
        .decode_value(Some(&literal(json!(3))), &ty("[Int]"), &Variables::default())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    insta::assert_snapshot!(err, @"Found a Integer value where we expected a [Int]");
}

#[test]
fn list_stops_at_first_error() {
    let err = decode(json!([1, "two", "three"]), "[Int]").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ScalarParse);
    insta::assert_snapshot!(err, @"Found a String value where we expected a Int scalar");
}

#[test]
fn null_literal() {
    assert_eq!(decode(json!(null), "[Int]"), Ok(InputValue::Null));
    assert_eq!(decode(json!(null), "Int!"), Ok(InputValue::Null));
    assert_eq!(
        decode(json!([1, null]), "[Int!]"),
        Ok(InputValue::List(vec![InputValue::Int(1), InputValue::Null]))
    );
}

#[test]
fn input_object_defaults() {
    assert_eq!(decode(json!({"a": 1}), "Pair").map(InputValue::into_json), Ok(json!({"a": 1, "b": 5})));
    assert_eq!(decode(json!({}), "Pair").map(InputValue::into_json), Ok(json!({"b": 5})));
    // An explicit null isn't replaced by the default.
    assert_eq!(decode(json!({"b": null}), "Pair").map(InputValue::into_json), Ok(json!({})));
}

#[test]
fn input_object_follows_declaration_order() {
    let value = decode(json!({"b": 2, "a": 1}), "Pair").unwrap();
    let keys = value.as_object().unwrap().keys().map(String::as_str).collect::<Vec<_>>();
    assert_eq!(keys, vec!["a", "b"]);
}

#[test]
fn input_object_ignores_unknown_fields() {
    assert_eq!(
        decode(json!({"a": 1, "c": 3}), "Pair").map(InputValue::into_json),
        Ok(json!({"a": 1, "b": 5}))
    );

    let registry = registry();
    let config = CoercionConfig {
        reject_unknown_input_fields: true,
        ..Default::default()
    };
    let err = Coercer::new(&registry)
        .with_config(config)
        .decode_value(Some(&literal(json!({"a": 1, "c": 3}))), &ty("Pair"), &Variables::default())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    insta::assert_snapshot!(err, @"Input object Pair does not have a field named 'c' at path '.c'");
}

#[test]
fn input_object_type_mismatch() {
    let err = decode(json!(1), "Pair").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    insta::assert_snapshot!(err, @"Found a Integer value where we expected a 'Pair' input object");

    let err = decode(json!({"nested": {"nested": [1]}}), "Filter").unwrap_err();
    insta::assert_snapshot!(err, @"Found a List value where we expected a 'Filter' input object at path '.nested.nested'");
}

#[test]
fn nested_input_objects() {
    let value = Value::Object(
        [
            (Name::new("name"), Value::String("x".into())),
            (
                Name::new("nested"),
                Value::Object(
                    [(Name::new("roles"), Value::Enum(Name::new("ADMIN")))]
                        .into_iter()
                        .collect(),
                ),
            ),
        ]
        .into_iter()
        .collect(),
    );
    let value = decode_value(&registry(), Some(&value), &ty("Filter"), &Variables::default()).unwrap();
    assert_eq!(
        value.into_json(),
        json!({"name": "x", "nested": {"roles": ["ADMIN"], "limit": 10}, "limit": 10})
    );
}

#[test]
fn non_null_input_field() {
    let err = decode(json!({}), "Required").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NonNullViolation);
    insta::assert_snapshot!(err, @"Input field 'a' of Required cannot be null");

    let err = decode(json!({"a": null}), "Required").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NonNullViolation);
}

#[test]
fn unknown_type_shape() {
    let err = decode(json!(1), "User").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownTypeShape);
    insta::assert_snapshot!(err, @"unknown type 'User'");

    let err = decode(json!([1]), "[Missing]").unwrap_err();
    insta::assert_snapshot!(err, @"unknown type 'Missing' at path '.0'");
}

#[test]
fn enum_literal() {
    let value = Value::Enum(Name::new("ADMIN"));
    assert_eq!(
        decode_value(&registry(), Some(&value), &ty("Role!"), &Variables::default()),
        Ok(InputValue::from("ADMIN"))
    );
    let err = decode(json!("ADMIN"), "Role").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ScalarParse);
}

fn arguments<'a>(arguments: &'a [(&'a str, Value)]) -> impl Iterator<Item = (&'a str, &'a Value)> + 'a {
    arguments.iter().map(|(name, value)| (*name, value))
}

#[test]
fn non_null_argument_without_value() {
    let err = build_arguments(&registry(), &[field("x", "Int!")], [], &Variables::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NonNullViolation);
    insta::assert_snapshot!(err, @"argument 'x' cannot be null");
}

#[test]
fn argument_default_value() {
    let values = build_arguments(
        &registry(),
        &[field("name", "String").with_default("anon")],
        [],
        &Variables::default(),
    )
    .unwrap();
    assert_eq!(values.len(), 1);
    assert_eq!(values["name"], InputValue::from("anon"));

    let values = build_arguments(
        &registry(),
        &[field("name", "String!").with_default("anon")],
        arguments(&[("name", Value::Null)]),
        &Variables::default(),
    )
    .unwrap();
    assert_eq!(values["name"], InputValue::from("anon"));
}

#[test]
fn nullish_arguments_are_left_out() {
    let variables = Variables::from_iter([("nan".to_string(), InputValue::Float(f64::NAN))]);
    let values = build_arguments(
        &registry(),
        &[field("a", "Int"), field("b", "Float"), field("c", "Float").with_default(1.5)],
        arguments(&[
            ("b", Value::Variable(Name::new("nan"))),
            ("c", Value::Variable(Name::new("nan"))),
        ]),
        &variables,
    )
    .unwrap();
    assert_eq!(values.keys().collect::<Vec<_>>(), vec!["c"]);
    assert_eq!(values["c"], InputValue::Float(1.5));
}

#[test]
fn arguments_follow_definition_order() {
    let values = build_arguments(
        &registry(),
        &[field("first", "Int"), field("second", "String"), field("third", "Boolean")],
        arguments(&[
            ("third", literal(json!(true))),
            ("first", literal(json!(1))),
            ("second", literal(json!("2"))),
            ("undeclared", literal(json!(4))),
        ]),
        &Variables::default(),
    )
    .unwrap();
    assert_eq!(values.keys().collect::<Vec<_>>(), vec!["first", "second", "third"]);
}

#[test]
fn duplicate_arguments_last_one_wins() {
    let values = build_arguments(
        &registry(),
        &[field("x", "Int")],
        arguments(&[("x", literal(json!(1))), ("x", literal(json!(2)))]),
        &Variables::default(),
    )
    .unwrap();
    assert_eq!(values["x"], InputValue::Int(2));
}

#[test]
fn decoding_error_falls_back_on_default() {
    let values = build_arguments(
        &registry(),
        &[
            field("x", "Int!").with_default(7),
            field("y", "Int"),
            field("z", "Pair").with_default(json!({"a": 1})),
        ],
        arguments(&[
            ("x", literal(json!("seven"))),
            ("y", literal(json!("seven"))),
            ("z", literal(json!([1]))),
        ]),
        &Variables::default(),
    )
    .unwrap();
    assert_eq!(InputValue::Object(values).into_json(), json!({"x": 7, "z": {"a": 1}}));

    let err = build_arguments(
        &registry(),
        &[field("x", "Int!")],
        arguments(&[("x", literal(json!("seven")))]),
        &Variables::default(),
    )
    .unwrap_err();
    insta::assert_snapshot!(err, @"argument 'x' cannot be null");
}

#[test]
fn missing_variable_is_never_defaulted() {
    let err = build_arguments(
        &registry(),
        &[field("x", "Int").with_default(3)],
        arguments(&[("x", Value::Variable(Name::new("nope")))]),
        &Variables::default(),
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingVariable);
    insta::assert_snapshot!(err, @"missing variable: $nope");
}

#[test]
fn unknown_type_is_never_defaulted() {
    let err = build_arguments(
        &registry(),
        &[field("x", "User").with_default(json!({}))],
        arguments(&[("x", literal(json!({})))]),
        &Variables::default(),
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownTypeShape);
}

#[test]
fn non_null_input_field_in_argument() {
    let err = build_arguments(
        &registry(),
        &[field("input", "Required")],
        arguments(&[("input", literal(json!({})))]),
        &Variables::default(),
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NonNullViolation);
}

#[test]
fn first_violation_wins() {
    let err = build_arguments(
        &registry(),
        &[field("a", "Int!"), field("b", "Int!")],
        [],
        &Variables::default(),
    )
    .unwrap_err();
    assert_eq!(err, super::CoercionError::NullArgument { name: "a".into() });
}

#[test]
fn variables_are_coerced_with_parse_value() {
    let definitions = [
        field("ids", "[ID!]!"),
        field("role", "Role"),
        field("pair", "Pair"),
        field("limit", "Int").with_default(20),
        field("name", "String"),
    ];
    let variables = coerce_variables(
        &registry(),
        &definitions,
        Variables::from_json(json!({"ids": 1, "role": "USER", "pair": {"a": 1, "z": 0}, "other": true})),
    )
    .unwrap();
    assert_eq!(
        variables.into_value().into_json(),
        json!({
            "ids": ["1"],
            "role": "USER",
            "pair": {"a": 1, "b": 5},
            "limit": 20,
            "name": null
        })
    );
}

#[test]
fn variable_errors() {
    let err = coerce_variables(&registry(), &[field("id", "ID!")], Variables::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NonNullViolation);
    insta::assert_snapshot!(err, @"Variable $id of type ID! cannot be null");

    let err = coerce_variables(
        &registry(),
        &[field("ids", "[Int!]")],
        Variables::from_json(json!({"ids": [1, null]})),
    )
    .unwrap_err();
    insta::assert_snapshot!(err, @"Found a null where we expected a Int! at path '.1'");

    let err = coerce_variables(
        &registry(),
        &[field("pair", "Pair")],
        Variables::from_json(json!({"pair": [1]})),
    )
    .unwrap_err();
    insta::assert_snapshot!(err, @"Found a List value where we expected a 'Pair' input object");

    let err = coerce_variables(
        &registry(),
        &[field("role", "Role")],
        Variables::from_json(json!({"role": "GUEST"})),
    )
    .unwrap_err();
    insta::assert_snapshot!(err, @"Found an unknown enum value 'GUEST' for the enum Role");
}

#[test]
fn coerced_variables_feed_arguments() {
    let registry = registry();
    let coercer = Coercer::new(&registry);
    let variables = coercer
        .coerce_variables(&[field("limit", "Int")], Variables::default())
        .unwrap();

    let values = coercer
        .build_arguments(
            &[field("limit", "Int").with_default(10)],
            arguments(&[("limit", Value::Variable(Name::new("limit")))]),
            &variables,
        )
        .unwrap();
    assert_eq!(values["limit"], InputValue::Int(10));
}
