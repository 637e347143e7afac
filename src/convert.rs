//! Conversion between user typed text and tag values.
//!
//! The store never coerces values itself. An editor turns the text in its
//! value field into a [`Value`] of the chosen kind with [`parse_value`], and
//! shows existing values with [`format_value`].
//!
//! Integer kinds accept anything that reads as a number and truncate toward
//! zero, so `"2.7"` is a valid `TAG_Int` of 2. Arrays are written in SNBT
//! style with an optional type prefix:
//!
//! ```
//! use nbtedit::{convert::{format_value, parse_value}, Kind, Value};
//!
//! assert_eq!(parse_value(Kind::Int, "2.7").unwrap(), Value::Int(2));
//! assert_eq!(
//!     parse_value(Kind::IntArray, "[I; 1, 2, 3]").unwrap(),
//!     Value::IntArray(vec![1, 2, 3])
//! );
//! assert_eq!(format_value((&Value::ByteArray(vec![1, -1])).into()), "[B; 1, -1]");
//! ```
use std::convert::TryFrom;
use std::fmt::{Display, Write};

use nom::{
    branch::alt,
    character::complete::{char, digit1, multispace0, one_of},
    combinator::{all_consuming, map_res, opt, recognize},
    multi::separated_list0,
    number::complete::double,
    sequence::{delimited, pair, preceded, terminated, tuple},
    IResult,
};

use crate::{
    error::{Error, Result},
    Kind, Value, ValueRef,
};

/// Parse user text as a value of `kind`.
///
/// Fails with `Conversion` if the text does not read as that kind or is out
/// of its range, and with `TypeKindMismatch` for compound and list kinds,
/// which have no value.
pub fn parse_value(kind: Kind, text: &str) -> Result<Value> {
    let fail = || Error::conversion(kind, text);
    let trimmed = text.trim();

    Ok(match kind {
        Kind::Byte => Value::Byte(integer(trimmed).ok_or_else(fail)?),
        Kind::Short => Value::Short(integer(trimmed).ok_or_else(fail)?),
        Kind::Int => Value::Int(integer(trimmed).ok_or_else(fail)?),
        Kind::Long => Value::Long(integer(trimmed).ok_or_else(fail)?),
        Kind::Float => {
            let wide = fractional(trimmed).ok_or_else(fail)?;
            let narrow = wide as f32;
            // Too big for f32 is out of range, not infinity.
            if wide.is_finite() && !narrow.is_finite() {
                return Err(fail());
            }
            Value::Float(narrow)
        }
        Kind::Double => Value::Double(fractional(trimmed).ok_or_else(fail)?),
        Kind::String => Value::String(text.to_owned()),
        Kind::ByteArray => {
            let items = array(trimmed, 'B').ok_or_else(fail)?;
            Value::ByteArray(narrow(items).ok_or_else(fail)?)
        }
        Kind::IntArray => {
            let items = array(trimmed, 'I').ok_or_else(fail)?;
            Value::IntArray(narrow(items).ok_or_else(fail)?)
        }
        Kind::LongArray => Value::LongArray(array(trimmed, 'L').ok_or_else(fail)?),
        Kind::Compound | Kind::List => {
            return Err(Error::type_mismatch("a scalar or array kind", kind))
        }
    })
}

/// The text for a value, as shown in a value field or a tree label. Reading
/// it back with [`parse_value`] gives the same value.
pub fn format_value(value: ValueRef<'_>) -> String {
    match value {
        ValueRef::Byte(v) => v.to_string(),
        ValueRef::Short(v) => v.to_string(),
        ValueRef::Int(v) => v.to_string(),
        ValueRef::Long(v) => v.to_string(),
        ValueRef::Float(v) => format!("{:?}", v),
        ValueRef::Double(v) => format!("{:?}", v),
        ValueRef::String(v) => v.to_owned(),
        ValueRef::ByteArray(v) => format_array('B', v),
        ValueRef::IntArray(v) => format_array('I', v),
        ValueRef::LongArray(v) => format_array('L', v),
    }
}

/// Re-express `value` as `kind`, the way an edit dialog does when the user
/// picks another type. Arrays convert element-wise between widths, anything
/// else goes through its text form.
pub fn convert_value(value: &Value, kind: Kind) -> Result<Value> {
    if value.kind() == kind {
        return Ok(value.clone());
    }
    let text = format_value(value.into());

    let items = match value {
        Value::ByteArray(v) => Some(v.iter().map(|&i| i as i64).collect::<Vec<_>>()),
        Value::IntArray(v) => Some(v.iter().map(|&i| i as i64).collect()),
        Value::LongArray(v) => Some(v.clone()),
        _ => None,
    };

    match (items, kind) {
        (Some(items), Kind::ByteArray) => Ok(Value::ByteArray(
            narrow(items).ok_or_else(|| Error::conversion(kind, &text))?,
        )),
        (Some(items), Kind::IntArray) => Ok(Value::IntArray(
            narrow(items).ok_or_else(|| Error::conversion(kind, &text))?,
        )),
        (Some(items), Kind::LongArray) => Ok(Value::LongArray(items)),
        _ => parse_value(kind, &text),
    }
}

/// The value a freshly added tag of `kind` starts with. `None` for
/// containers.
pub fn default_value(kind: Kind) -> Option<Value> {
    Some(match kind {
        Kind::Byte => Value::Byte(0),
        Kind::Short => Value::Short(0),
        Kind::Int => Value::Int(0),
        Kind::Long => Value::Long(0),
        Kind::Float => Value::Float(0.0),
        Kind::Double => Value::Double(0.0),
        Kind::String => Value::String(String::new()),
        Kind::ByteArray => Value::ByteArray(Vec::new()),
        Kind::IntArray => Value::IntArray(Vec::new()),
        Kind::LongArray => Value::LongArray(Vec::new()),
        Kind::Compound | Kind::List => return None,
    })
}

fn format_array<T: Display>(prefix: char, items: &[T]) -> String {
    let mut out = format!("[{};", prefix);
    for (i, item) in items.iter().enumerate() {
        let sep = if i == 0 { " " } else { ", " };
        // Writing to a String cannot fail.
        let _ = write!(out, "{}{}", sep, item);
    }
    out.push(']');
    out
}

fn narrow<T: TryFrom<i64>>(items: Vec<i64>) -> Option<Vec<T>> {
    items.into_iter().map(|i| T::try_from(i).ok()).collect()
}

/// An integer, either written as one or as a float to truncate.
fn integer<T: TryFrom<i64>>(text: &str) -> Option<T> {
    let whole = all_consuming(decimal)(text)
        .ok()
        .and_then(|(_, v)| v.parse::<i64>().ok());

    let v = match whole {
        Some(v) => v,
        None => {
            let f = fractional(text)?.trunc();
            // i64::MAX as f64 rounds up to 2^63, which is out of range.
            if !f.is_finite() || f < i64::MIN as f64 || f >= i64::MAX as f64 {
                return None;
            }
            f as i64
        }
    };
    T::try_from(v).ok()
}

fn fractional(text: &str) -> Option<f64> {
    let res: IResult<&str, f64> = all_consuming(double)(text);
    res.ok().map(|(_, v)| v)
}

fn decimal(input: &str) -> IResult<&str, &str> {
    recognize(pair(opt(one_of("+-")), digit1))(input)
}

fn array_item(input: &str) -> IResult<&str, i64> {
    map_res(
        terminated(decimal, opt(one_of("bBsSlL"))),
        |s: &str| s.parse::<i64>(),
    )(input)
}

fn array_items(input: &str) -> IResult<&str, Vec<i64>> {
    terminated(
        separated_list0(delimited(multispace0, char(','), multispace0), array_item),
        opt(pair(multispace0, char(','))),
    )(input)
}

/// `[B; 1, 2]`, `[1, 2]` or a bare `1, 2`. A type prefix must be `prefix`.
fn array(text: &str, prefix: char) -> Option<Vec<i64>> {
    let cases = format!("{}{}", prefix.to_ascii_uppercase(), prefix.to_ascii_lowercase());
    let type_prefix = tuple((one_of(cases.as_str()), multispace0, char(';'), multispace0));
    let bracketed = delimited(
        pair(char('['), multispace0),
        preceded(opt(type_prefix), array_items),
        pair(multispace0, char(']')),
    );

    let res: IResult<&str, Vec<i64>> = all_consuming(alt((bracketed, array_items)))(text);
    res.ok().map(|(_, items)| items)
}
