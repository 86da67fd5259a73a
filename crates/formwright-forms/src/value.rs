//! Field values
//!
//! A field holds nothing, a single string, or a sequence of strings.
//! Which shape a field expects depends on its type; a mismatched shape is
//! never an error, the renderer falls back to the empty case.

use serde::{Deserialize, Serialize};

/// Current value of a field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
	#[default]
	None,
	Scalar(String),
	List(Vec<String>),
}

impl FieldValue {
	/// The scalar value, if this is one
	pub fn as_scalar(&self) -> Option<&str> {
		match self {
			FieldValue::Scalar(value) => Some(value),
			_ => None,
		}
	}

	/// The sequence value, if this is one
	pub fn as_list(&self) -> Option<&[String]> {
		match self {
			FieldValue::List(values) => Some(values),
			_ => None,
		}
	}

	pub fn is_none(&self) -> bool {
		matches!(self, FieldValue::None)
	}

	/// Whether an option key counts as selected/checked for this value
	///
	/// A sequence matches on exact membership, a scalar on exact equality;
	/// no value matches nothing.
	///
	/// # Examples
	///
	/// ```
	/// use formwright_forms::FieldValue;
	///
	/// assert!(FieldValue::from("1").matches("1"));
	/// assert!(!FieldValue::from("1").matches("01"));
	/// assert!(FieldValue::from(vec!["a", "b"]).matches("b"));
	/// assert!(!FieldValue::None.matches(""));
	/// ```
	pub fn matches(&self, key: &str) -> bool {
		match self {
			FieldValue::None => false,
			FieldValue::Scalar(value) => value == key,
			FieldValue::List(values) => values.iter().any(|value| value == key),
		}
	}
}

impl From<&str> for FieldValue {
	fn from(value: &str) -> Self {
		FieldValue::Scalar(value.to_string())
	}
}

impl From<String> for FieldValue {
	fn from(value: String) -> Self {
		FieldValue::Scalar(value)
	}
}

impl From<i64> for FieldValue {
	fn from(value: i64) -> Self {
		FieldValue::Scalar(value.to_string())
	}
}

impl From<i32> for FieldValue {
	fn from(value: i32) -> Self {
		FieldValue::Scalar(value.to_string())
	}
}

impl<T: Into<String>> From<Vec<T>> for FieldValue {
	fn from(values: Vec<T>) -> Self {
		FieldValue::List(values.into_iter().map(Into::into).collect())
	}
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
	fn from(value: Option<T>) -> Self {
		value.map(Into::into).unwrap_or_default()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(FieldValue::from("x"), "x", true)]
	#[case(FieldValue::from("x"), "y", false)]
	#[case(FieldValue::from(""), "", true)]
	#[case(FieldValue::from(vec!["1", "2"]), "2", true)]
	#[case(FieldValue::from(vec!["1", "2"]), "3", false)]
	#[case(FieldValue::from(Vec::<String>::new()), "", false)]
	#[case(FieldValue::None, "x", false)]
	fn test_matches(#[case] value: FieldValue, #[case] key: &str, #[case] expected: bool) {
		assert_eq!(value.matches(key), expected);
	}

	#[rstest]
	fn test_integer_conversion() {
		assert_eq!(FieldValue::from(5i64), FieldValue::Scalar("5".to_string()));
		assert_eq!(FieldValue::from(Option::<&str>::None), FieldValue::None);
	}

	#[rstest]
	fn test_deserializes_untagged() {
		let scalar: FieldValue = serde_json::from_str(r#""a""#).unwrap();
		let list: FieldValue = serde_json::from_str(r#"["a","b"]"#).unwrap();
		let none: FieldValue = serde_json::from_str("null").unwrap();

		assert_eq!(scalar.as_scalar(), Some("a"));
		assert_eq!(list.as_list().map(<[String]>::len), Some(2));
		assert!(none.is_none());
	}
}
