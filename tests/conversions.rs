use vec2_lite_rs::math::{Coordinates, Vector, VectorError};

#[test]
fn display_parses_back() {
    for v in [
        Vector::new(0.0, 0.0),
        Vector::new(1.0 / 3.0, -2.0 / 7.0),
        Vector::new(1e-300, 6.02e23),
        Vector::new(-0.5, 12345.678),
    ] {
        let text = v.to_string();
        let back: Vector = text.parse().unwrap();
        assert!(back.is_equal_to(v), "{text} parsed as {back}");
    }
}

#[test]
fn record_conversions() {
    let v = Vector::new(2.0, -3.0);
    let c: Coordinates = v.into();
    assert_eq!(c, v.to_object());
    assert_eq!(Vector::from(c), v);

    let fixed = v.to_fixed(3);
    assert_eq!((fixed.x.as_str(), fixed.y.as_str()), ("2.000", "-3.000"));
}

#[test]
fn slice_conversion_errors() {
    let empty: [f64; 0] = [];
    let err = Vector::try_from(&empty[..]).unwrap_err();
    assert_eq!(err, VectorError::InvalidLength { len: 0 });
}

#[cfg(feature = "serde")]
#[test]
fn serde_uses_plain_records() {
    let v = Vector::new(1.5, -2.0);
    let json = serde_json::to_string(&v).unwrap();
    assert_eq!(json, r#"{"x":1.5,"y":-2.0}"#);

    let back: Vector = serde_json::from_str(&json).unwrap();
    assert_eq!(back, v);

    let fixed = serde_json::to_string(&v.to_fixed(1)).unwrap();
    assert_eq!(fixed, r#"{"x":"1.5","y":"-2.0"}"#);
}
