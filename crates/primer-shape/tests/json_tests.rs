//! Integration tests for encoding and prototype-restoring decoding.

use primer_common::warning::has_warned;
use primer_shape::{
    Instance, Prototype, Rectangle, ShapeError, decode, decode_as, encode, make_rectangle,
    number_field, rectangle,
};
use quickcheck_macros::quickcheck;
use serde_json::{Value, json};

#[test]
fn test_encode_keeps_insertion_order() {
    let value = json!({"height": 10, "width": 20});
    assert_eq!(encode(&value).unwrap(), r#"{"height":10,"width":20}"#);

    let value = json!({"width": 20, "height": 10});
    assert_eq!(encode(&value).unwrap(), r#"{"width":20,"height":10}"#);
}

#[test]
fn test_encode_struct_writes_fields_only() {
    let text = encode(&make_rectangle(2.0, 3.5)).unwrap();
    assert_eq!(text, r#"{"width":2.0,"height":3.5}"#);
}

#[test]
fn test_encode_arrays() {
    assert_eq!(encode(&json!([1, "two", null])).unwrap(), r#"[1,"two",null]"#);
}

#[test]
fn test_decode_restores_area() {
    let text = encode(&json!({"height": 10, "width": 20})).unwrap();
    let rect = decode(rectangle::prototype(), &text).unwrap();

    assert_eq!(rect.call("area").unwrap(), json!(200.0));
    assert_eq!(rect.call("getArea").unwrap(), json!(200.0));
    assert_eq!(rect.get("height"), Some(&json!(10)));
    assert_eq!(rect.prototype().name(), "Rectangle");
}

#[test]
fn test_decoded_area_follows_mutation() {
    let mut rect = decode(rectangle::prototype(), r#"{"width": 10, "height": 20}"#).unwrap();
    rect.set("width", 5).unwrap();
    assert_eq!(rect.call("area").unwrap(), json!(100.0));
}

#[test]
fn test_decode_uses_only_parsed_fields() {
    let rect = decode(rectangle::prototype(), r#"{"width": 4}"#).unwrap();
    assert!(matches!(
        rect.call("area"),
        Err(ShapeError::MissingField { field }) if field == "height"
    ));

    let rect = decode(rectangle::prototype(), r#"{"width": 4, "height": "tall"}"#).unwrap();
    assert!(matches!(
        rect.call("area"),
        Err(ShapeError::NotANumber { field }) if field == "height"
    ));
}

#[test]
fn test_decode_keeps_extra_fields() {
    let rect = decode(
        rectangle::prototype(),
        r#"{"width": 1, "height": 2, "label": "door"}"#,
    )
    .unwrap();
    assert_eq!(rect.get("label"), Some(&json!("door")));
    assert_eq!(rect.as_object().map(serde_json::Map::len), Some(3));
}

#[test]
fn test_area_overflow_is_an_error() {
    let rect = decode(
        rectangle::prototype(),
        r#"{"width": 1e200, "height": 1e200}"#,
    )
    .unwrap();
    let err = rect.call("area").unwrap_err();
    assert!(matches!(
        &err,
        ShapeError::NotFinite { method, value } if method == "area" && value.is_infinite()
    ));
    assert_eq!(err.to_string(), "`area` produced inf, which is not a finite number");

    let typed: Rectangle = decode_as(r#"{"width": 1e200, "height": 1e200}"#).unwrap();
    assert!(typed.area().is_infinite());
}

#[test]
fn test_unknown_method() {
    let rect = decode(rectangle::prototype(), "{}").unwrap();
    let err = rect.call("perimeter").unwrap_err();
    assert_eq!(err.to_string(), "Rectangle has no method `perimeter`");
}

#[test]
fn test_malformed_json_propagates_parse_error() {
    let err = decode(rectangle::prototype(), "{\"width\": ").unwrap_err();
    let ShapeError::Json(inner) = &err else {
        panic!("expected a JSON error, got {err:?}");
    };
    assert!(inner.is_eof());
    assert_eq!(err.to_string(), inner.to_string());
}

#[test]
fn test_decode_non_object_warns_and_cannot_set() {
    let mut list = decode(rectangle::prototype(), "[1, 2, 3]").unwrap();
    assert!(has_warned(
        "Shape",
        "decoded an array bound to Rectangle; its methods expect an object"
    ));
    assert!(matches!(
        list.set("width", 1),
        Err(ShapeError::NotAnObject { .. })
    ));
    assert_eq!(list.into_fields(), json!([1, 2, 3]));
}

#[test]
fn test_instance_encodes_like_its_fields() {
    let text = r#"{"height":10,"width":20}"#;
    let rect = decode(rectangle::prototype(), text).unwrap();
    assert_eq!(encode(&rect).unwrap(), text);
}

#[test]
fn test_custom_prototype() {
    fn perimeter(fields: &Value) -> Result<Value, ShapeError> {
        let width = number_field(fields, "width")?;
        let height = number_field(fields, "height")?;
        Ok(Value::from(2.0 * (width + height)))
    }

    let proto = Prototype::new("Frame").with_method("perimeter", perimeter);
    let frame: Instance<'_> = decode(&proto, r#"{"width": 3, "height": 4}"#).unwrap();
    assert_eq!(frame.call("perimeter").unwrap(), json!(14.0));
    assert!(matches!(
        frame.call("area"),
        Err(ShapeError::UnknownMethod { prototype, .. }) if prototype == "Frame"
    ));
}

#[test]
fn test_decode_as_typed() {
    let rect: Rectangle = decode_as(r#"{"height": 10, "width": 20}"#).unwrap();
    assert_eq!(rect, make_rectangle(20.0, 10.0));

    assert!(matches!(
        decode_as::<Rectangle>(r#"{"height": 10}"#),
        Err(ShapeError::Json(_))
    ));
}

#[quickcheck]
fn encoded_rectangles_decode_to_the_same_area(width: u16, height: u16) -> bool {
    let rect = make_rectangle(f64::from(width), f64::from(height));
    let Ok(text) = encode(&rect) else {
        return false;
    };
    let Ok(instance) = decode(rectangle::prototype(), &text) else {
        return false;
    };
    instance.call("area").ok() == Some(Value::from(rect.area()))
}
