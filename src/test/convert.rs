use crate::{
    convert::{convert_value, default_value, format_value, parse_value},
    error::ErrorKind,
    Kind, Value, ValueRef,
};

fn conversion_fails(kind: Kind, text: &str) {
    let err = parse_value(kind, text).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conversion, "{:?} as {}", text, kind);
}

#[test]
fn integers() {
    assert_eq!(parse_value(Kind::Byte, "-128").unwrap(), Value::Byte(-128));
    assert_eq!(parse_value(Kind::Short, " 300 ").unwrap(), Value::Short(300));
    assert_eq!(parse_value(Kind::Int, "+42").unwrap(), Value::Int(42));
    assert_eq!(
        parse_value(Kind::Long, "9223372036854775807").unwrap(),
        Value::Long(i64::MAX)
    );
}

#[test]
fn integers_truncate_floats() {
    assert_eq!(parse_value(Kind::Int, "2.7").unwrap(), Value::Int(2));
    assert_eq!(parse_value(Kind::Int, "-2.7").unwrap(), Value::Int(-2));
    assert_eq!(parse_value(Kind::Short, "1e3").unwrap(), Value::Short(1000));
    assert_eq!(parse_value(Kind::Byte, "0.5").unwrap(), Value::Byte(0));
}

#[test]
fn integers_out_of_range() {
    conversion_fails(Kind::Byte, "128");
    conversion_fails(Kind::Short, "-32769");
    conversion_fails(Kind::Int, "3e10");
    conversion_fails(Kind::Long, "99999999999999999999");
    conversion_fails(Kind::Long, "inf");
    conversion_fails(Kind::Int, "nan");
}

#[test]
fn integers_reject_junk() {
    conversion_fails(Kind::Int, "");
    conversion_fails(Kind::Int, "abc");
    conversion_fails(Kind::Int, "12abc");
    conversion_fails(Kind::Int, "1 2");
}

#[test]
fn floats() {
    assert_eq!(parse_value(Kind::Float, "1.5").unwrap(), Value::Float(1.5));
    assert_eq!(parse_value(Kind::Double, "-3").unwrap(), Value::Double(-3.0));
    assert_eq!(parse_value(Kind::Double, "2.5e2").unwrap(), Value::Double(250.0));
    assert_eq!(
        parse_value(Kind::Double, "inf").unwrap(),
        Value::Double(f64::INFINITY)
    );
    conversion_fails(Kind::Float, "one");
}

#[test]
fn floats_out_of_range() {
    conversion_fails(Kind::Float, "1e300");
    conversion_fails(Kind::Float, "-1e39");
    assert_eq!(
        parse_value(Kind::Float, "inf").unwrap(),
        Value::Float(f32::INFINITY)
    );
    assert_eq!(
        parse_value(Kind::Double, "1e300").unwrap(),
        Value::Double(1e300)
    );
}

#[test]
fn strings_are_verbatim() {
    assert_eq!(
        parse_value(Kind::String, "  spaced  ").unwrap(),
        Value::String("  spaced  ".to_owned())
    );
    assert_eq!(parse_value(Kind::String, "").unwrap(), Value::String(String::new()));
}

#[test]
fn arrays() {
    assert_eq!(
        parse_value(Kind::ByteArray, "[B; 1, -2, 3]").unwrap(),
        Value::ByteArray(vec![1, -2, 3])
    );
    assert_eq!(
        parse_value(Kind::IntArray, "[1,2]").unwrap(),
        Value::IntArray(vec![1, 2])
    );
    assert_eq!(
        parse_value(Kind::LongArray, "1, 2, 3").unwrap(),
        Value::LongArray(vec![1, 2, 3])
    );
    assert_eq!(
        parse_value(Kind::LongArray, "[l; 5L, 6l]").unwrap(),
        Value::LongArray(vec![5, 6])
    );
    assert_eq!(parse_value(Kind::IntArray, "").unwrap(), Value::IntArray(vec![]));
    assert_eq!(parse_value(Kind::IntArray, "[I;]").unwrap(), Value::IntArray(vec![]));
    assert_eq!(
        parse_value(Kind::IntArray, "[I; 1, 2,]").unwrap(),
        Value::IntArray(vec![1, 2])
    );
}

#[test]
fn arrays_reject_bad_input() {
    conversion_fails(Kind::ByteArray, "[I; 1]");
    conversion_fails(Kind::ByteArray, "[B; 300]");
    conversion_fails(Kind::IntArray, "[1, two]");
    conversion_fails(Kind::IntArray, "[1, 2");
    conversion_fails(Kind::IntArray, "1.5");
}

#[test]
fn containers_have_no_value() {
    let err = parse_value(Kind::Compound, "").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeKindMismatch);
    let err = parse_value(Kind::List, "[]").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeKindMismatch);
}

#[test]
fn format() {
    assert_eq!(format_value(ValueRef::Byte(-1)), "-1");
    assert_eq!(format_value(ValueRef::Float(1.0)), "1.0");
    assert_eq!(format_value(ValueRef::Double(0.25)), "0.25");
    assert_eq!(format_value(ValueRef::String("a b")), "a b");
    assert_eq!(format_value(ValueRef::IntArray(&[])), "[I;]");
    assert_eq!(format_value(ValueRef::LongArray(&[1, 2])), "[L; 1, 2]");
}

#[test]
fn format_reads_back() {
    let values = [
        Value::Byte(-7),
        Value::Short(i16::MIN),
        Value::Int(123456),
        Value::Long(i64::MIN),
        Value::Float(0.1),
        Value::Double(1e300),
        Value::String("text".into()),
        Value::ByteArray(vec![-128, 127]),
        Value::IntArray(vec![]),
        Value::LongArray(vec![i64::MAX]),
    ];
    for value in values {
        let text = format_value((&value).into());
        assert_eq!(parse_value(value.kind(), &text).unwrap(), value, "{}", text);
    }
}

#[test]
fn convert_between_kinds() {
    assert_eq!(convert_value(&Value::Int(5), Kind::Double).unwrap(), Value::Double(5.0));
    assert_eq!(convert_value(&Value::Double(5.9), Kind::Long).unwrap(), Value::Long(5));
    assert_eq!(
        convert_value(&Value::Int(5), Kind::String).unwrap(),
        Value::String("5".into())
    );
    assert_eq!(
        convert_value(&Value::String("12".into()), Kind::Short).unwrap(),
        Value::Short(12)
    );
    assert_eq!(
        convert_value(&Value::ByteArray(vec![1, 2]), Kind::LongArray).unwrap(),
        Value::LongArray(vec![1, 2])
    );
    assert_eq!(
        convert_value(&Value::Int(7), Kind::IntArray).unwrap(),
        Value::IntArray(vec![7])
    );
}

#[test]
fn convert_failures() {
    let err = convert_value(&Value::Int(300), Kind::Byte).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conversion);

    let err = convert_value(&Value::IntArray(vec![1000]), Kind::ByteArray).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conversion);

    let err = convert_value(&Value::String("x".into()), Kind::Int).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conversion);
}

#[test]
fn defaults() {
    assert_eq!(default_value(Kind::Byte), Some(Value::Byte(0)));
    assert_eq!(default_value(Kind::String), Some(Value::String(String::new())));
    assert_eq!(default_value(Kind::List), None);
    for kind in Kind::ALL.into_iter().filter(|k| !k.is_container()) {
        assert_eq!(default_value(kind).map(|v| v.kind()), Some(kind));
    }
}
