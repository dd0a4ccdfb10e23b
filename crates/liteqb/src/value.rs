//! Bind values and generic records.
//!
//! The builder stores parameters as owned [`Value`]s (SQLite's dynamic type:
//! NULL, INTEGER, REAL, TEXT, BLOB) so a [`Statement`](crate::Statement) stays
//! cloneable and its parameter list can be inspected in tests.

use std::collections::BTreeMap;

pub use rusqlite::types::Value;

/// A generic row/record: column name mapped to a dynamically typed value.
///
/// `BTreeMap` keeps column iteration order lexical, so SQL generated from a
/// record (INSERT column lists, UPDATE assignments) is deterministic across
/// runs.
pub type Record = BTreeMap<String, Value>;

/// Conversion into a bind [`Value`].
///
/// Implemented for the scalar types SQLite can store, so builder methods can
/// accept plain Rust values without the caller wrapping them by hand.
pub trait IntoValue {
    fn into_value(self) -> Value;
}

impl IntoValue for Value {
    fn into_value(self) -> Value {
        self
    }
}

impl IntoValue for bool {
    fn into_value(self) -> Value {
        Value::Integer(self as i64)
    }
}

macro_rules! impl_into_value_int {
    ($($t:ty),+) => {
        $(impl IntoValue for $t {
            fn into_value(self) -> Value {
                Value::Integer(self as i64)
            }
        })+
    };
}

impl_into_value_int!(i8, i16, i32, i64, u8, u16, u32);

impl IntoValue for f32 {
    fn into_value(self) -> Value {
        Value::Real(self as f64)
    }
}

impl IntoValue for f64 {
    fn into_value(self) -> Value {
        Value::Real(self)
    }
}

impl IntoValue for &str {
    fn into_value(self) -> Value {
        Value::Text(self.to_owned())
    }
}

impl IntoValue for String {
    fn into_value(self) -> Value {
        Value::Text(self)
    }
}

impl IntoValue for Vec<u8> {
    fn into_value(self) -> Value {
        Value::Blob(self)
    }
}

impl IntoValue for &[u8] {
    fn into_value(self) -> Value {
        Value::Blob(self.to_vec())
    }
}

impl<T: IntoValue> IntoValue for Option<T> {
    fn into_value(self) -> Value {
        match self {
            Some(v) => v.into_value(),
            None => Value::Null,
        }
    }
}

/// Build a `Vec<Value>` from a heterogeneous list of bindable values.
///
/// # Example
/// ```ignore
/// let stmt = liteqb::table("users")
///     .filter("age > ? AND name = ?", bind![18, "alice"]);
/// ```
#[macro_export]
macro_rules! bind {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($v:expr),+ $(,)?) => {
        ::std::vec![$($crate::IntoValue::into_value($v)),+]
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_conversions() {
        assert_eq!(42i32.into_value(), Value::Integer(42));
        assert_eq!(true.into_value(), Value::Integer(1));
        assert_eq!(1.5f64.into_value(), Value::Real(1.5));
        assert_eq!("abc".into_value(), Value::Text("abc".to_string()));
        assert_eq!(Option::<i64>::None.into_value(), Value::Null);
    }

    #[test]
    fn bind_macro_mixed_types() {
        let params = bind![18, "alice", 2.5, Option::<&str>::None];
        assert_eq!(
            params,
            vec![
                Value::Integer(18),
                Value::Text("alice".to_string()),
                Value::Real(2.5),
                Value::Null,
            ]
        );
    }

    #[test]
    fn bind_macro_empty() {
        let params = bind![];
        assert!(params.is_empty());
    }
}
