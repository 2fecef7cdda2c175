//! Tests for the rectangle type and JSON helpers.

use serde_json::{Value, json};

use selkit_common::warning::{clear_warnings, warning_count};
use selkit_objects::{ObjectError, Positional, Rectangle, from_json, positional_arg, to_json};

/// A second positional type, with a single parameter.
#[derive(Debug, PartialEq)]
struct Circle {
    radius: f64,
}

impl Positional for Circle {
    const NAME: &'static str = "Circle";
    const ARITY: usize = 1;

    fn from_positional(args: &[Value]) -> Result<Self, ObjectError> {
        Ok(Self {
            radius: positional_arg(args, 0)?,
        })
    }
}

// ========== Rectangle ==========

#[test]
fn test_rectangle_fields_and_area() {
    let r = Rectangle::new(10.0, 20.0);
    assert!((r.width - 10.0).abs() < f64::EPSILON);
    assert!((r.height - 20.0).abs() < f64::EPSILON);
    assert!((r.area() - 200.0).abs() < f64::EPSILON);
}

#[test]
fn test_degenerate_rectangle_has_zero_area() {
    assert!(Rectangle::new(0.0, 5.0).area().abs() < f64::EPSILON);
    assert!(Rectangle::default().area().abs() < f64::EPSILON);
}

// ========== to_json ==========

#[test]
fn test_to_json_array() {
    assert_eq!(to_json(&[1, 2, 3]).unwrap(), "[1,2,3]");
}

#[test]
fn test_to_json_keeps_key_order() {
    let value = json!({ "height": 10, "width": 20 });
    assert_eq!(to_json(&value).unwrap(), r#"{"height":10,"width":20}"#);
}

#[test]
fn test_to_json_struct_uses_field_order() {
    let text = to_json(&Rectangle::new(3.0, 4.0)).unwrap();
    assert_eq!(text, r#"{"width":3.0,"height":4.0}"#);
}

// ========== from_json ==========

#[test]
fn test_round_trip_through_positional_constructor() {
    let original = Rectangle::new(10.0, 20.0);
    let revived: Rectangle = from_json(&to_json(&original).unwrap()).unwrap();
    assert_eq!(revived, original);
}

#[test]
fn test_revival_follows_key_order_not_key_names() {
    // Keys are consumed positionally; the names are never consulted.
    let text = to_json(&json!({ "height": 10, "width": 20 })).unwrap();
    let revived: Rectangle = from_json(&text).unwrap();
    assert_eq!(revived, Rectangle::new(10.0, 20.0));
}

#[test]
fn test_revive_single_parameter_type() {
    let circle: Circle = from_json(r#"{"radius":10}"#).unwrap();
    assert_eq!(circle, Circle { radius: 10.0 });
}

#[test]
fn test_revive_from_array_and_scalar() {
    let r: Rectangle = from_json("[2, 8]").unwrap();
    assert!((r.area() - 16.0).abs() < f64::EPSILON);

    let c: Circle = from_json("4.5").unwrap();
    assert_eq!(c, Circle { radius: 4.5 });
}

#[test]
fn test_surplus_values_are_dropped_with_warning() {
    clear_warnings();
    let c: Circle = from_json(r#"{"radius":1,"color":"red","id":7}"#).unwrap();
    assert_eq!(c, Circle { radius: 1.0 });
    assert!(warning_count() >= 1);
}

#[test]
fn test_missing_value_is_an_error() {
    let err = from_json::<Rectangle>(r#"{"width":1}"#).unwrap_err();
    assert!(matches!(
        err,
        ObjectError::MissingArgument {
            index: 1,
            supplied: 1
        }
    ));
}

#[test]
fn test_mistyped_value_is_an_error() {
    let err = from_json::<Circle>(r#"{"radius":"big"}"#).unwrap_err();
    assert!(matches!(err, ObjectError::Argument { index: 0, .. }));
}

#[test]
fn test_malformed_text_is_a_parse_error() {
    let err = from_json::<Rectangle>(r#"{"width":1,"#).unwrap_err();
    assert!(matches!(err, ObjectError::Json(_)));
    assert!(err.to_string().starts_with("JSON error:"));
}
