//! Checks that turn raw attribute values into the Rust types dimensions work with.
//!
use num_traits::cast;

use crate::{
    errors::{Error, Result},
    store::{Store, Value},
};

fn mismatch(name: &str, expected: &'static str) -> Error {
    Error::TypeMismatch {
        name: name.to_string(),
        expected,
    }
}

/// An integer that can be used as a position among sibling dimensions
pub fn expect_index(name: &str, value: Value) -> Result<usize> {
    match value {
        Value::Int(value) => cast(value).ok_or_else(|| mismatch(name, "a non-negative integer")),
        _ => Err(mismatch(name, "an integer")),
    }
}

/// Any number. Integers are widened to `f64`.
pub fn expect_number(name: &str, value: Value) -> Result<f64> {
    match value {
        Value::Int(value) => Ok(value as f64),
        Value::Float(value) => Ok(value),
        _ => Err(mismatch(name, "a number")),
    }
}

pub fn expect_text(name: &str, value: Value) -> Result<String> {
    match value {
        Value::Text(value) => Ok(value),
        _ => Err(mismatch(name, "text")),
    }
}

/// Read an attribute that may not have been written yet.
///
pub fn get_optional<S, T>(
    store: &S,
    name: &str,
    expect: fn(&str, Value) -> Result<T>,
) -> Result<Option<T>>
where
    S: Store,
{
    store
        .get_attr(name)?
        .map(|value| expect(name, value))
        .transpose()
}

/// Read an attribute that must have been written.
///
pub fn get_required<S, T>(store: &S, name: &str, expect: fn(&str, Value) -> Result<T>) -> Result<T>
where
    S: Store,
{
    get_optional(store, name, expect)?.ok_or_else(|| Error::MissingAttribute(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;

    #[test]
    fn test_expect_index() {
        assert_eq!(expect_index("index", Value::Int(3)).unwrap(), 3);
        assert!(matches!(
            expect_index("index", Value::Int(-1)),
            Err(Error::TypeMismatch { .. })
        ));
        assert!(matches!(
            expect_index("index", Value::Float(1.0)),
            Err(Error::TypeMismatch { .. })
        ));
        assert!(matches!(
            expect_index("index", Value::from("1")),
            Err(Error::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_expect_number() {
        assert_eq!(expect_number("offset", Value::Int(2)).unwrap(), 2.0);
        assert_eq!(expect_number("offset", Value::Float(-0.5)).unwrap(), -0.5);
        assert!(matches!(
            expect_number("offset", Value::from("0.5")),
            Err(Error::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_expect_text() {
        assert_eq!(expect_text("unit", Value::from("ms")).unwrap(), "ms");
        assert!(matches!(
            expect_text("unit", Value::Float(1.0)),
            Err(Error::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_get_optional_and_required() -> Result<()> {
        let store = MemoryStore::new();
        assert_eq!(get_optional(&store, "unit", expect_text)?, None);
        assert!(matches!(
            get_required(&store, "unit", expect_text),
            Err(Error::MissingAttribute(_))
        ));

        store.set_attr("unit", Value::from("s"))?;
        assert_eq!(get_optional(&store, "unit", expect_text)?, Some("s".to_string()));
        assert_eq!(get_required(&store, "unit", expect_text)?, "s");

        Ok(())
    }
}
