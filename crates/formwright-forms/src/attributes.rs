//! Ordered HTML attribute map
//!
//! Attribute order in the rendered markup is the order in which each key
//! was first inserted. Overwriting a key keeps its position, so golden
//! output does not shift when a caller adjusts a value late in the chain.

use formwright_core::security::escape_html_attr;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered mapping of attribute name to attribute value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeMap {
	attrs: IndexMap<String, String>,
}

impl AttributeMap {
	/// Create an empty attribute map
	pub fn new() -> Self {
		Self {
			attrs: IndexMap::new(),
		}
	}

	/// Set one attribute, replacing any previous value in place
	///
	/// # Examples
	///
	/// ```
	/// use formwright_forms::AttributeMap;
	///
	/// let mut attrs = AttributeMap::new();
	/// attrs.set("class", "a").set("id", "x").set("class", "b");
	/// assert_eq!(attrs.to_html(), r#"class="b" id="x""#);
	/// ```
	pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
		self.attrs.insert(key.into(), value.into());
		self
	}

	/// Merge another map into this one
	///
	/// Colliding keys take the incoming value at their existing position;
	/// new keys are appended in the incoming map's order.
	///
	/// # Examples
	///
	/// ```
	/// use formwright_forms::AttributeMap;
	///
	/// let mut attrs = AttributeMap::from([("class", "a"), ("id", "x")]);
	/// attrs.merge(AttributeMap::from([("disabled", "1"), ("class", "b")]));
	/// assert_eq!(attrs.to_html(), r#"class="b" id="x" disabled="1""#);
	/// ```
	pub fn merge(&mut self, other: impl IntoIterator<Item = (String, String)>) -> &mut Self {
		for (key, value) in other {
			self.attrs.insert(key, value);
		}
		self
	}

	/// Get an attribute value, or `""` when the key is absent
	///
	/// # Examples
	///
	/// ```
	/// use formwright_forms::AttributeMap;
	///
	/// let attrs = AttributeMap::from([("id", "email")]);
	/// assert_eq!(attrs.get("id"), "email");
	/// assert_eq!(attrs.get("class"), "");
	/// ```
	pub fn get(&self, key: &str) -> &str {
		self.attrs.get(key).map(String::as_str).unwrap_or_default()
	}

	pub fn contains(&self, key: &str) -> bool {
		self.attrs.contains_key(key)
	}

	/// Remove an attribute, closing the gap it leaves
	pub fn remove(&mut self, key: &str) -> Option<String> {
		self.attrs.shift_remove(key)
	}

	pub fn len(&self) -> usize {
		self.attrs.len()
	}

	pub fn is_empty(&self) -> bool {
		self.attrs.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// Serialize as space-separated `key="value"` pairs with escaped values
	///
	/// Keys are emitted verbatim; an empty value still renders as `key=""`.
	pub fn to_html(&self) -> String {
		self.attrs
			.iter()
			.map(|(key, value)| format!(r#"{}="{}""#, key, escape_html_attr(value)))
			.collect::<Vec<_>>()
			.join(" ")
	}

	/// Like [`to_html`](Self::to_html) but with a leading space when non-empty,
	/// ready to follow a tag name or another attribute.
	pub fn to_html_prefixed(&self) -> String {
		if self.attrs.is_empty() {
			String::new()
		} else {
			format!(" {}", self.to_html())
		}
	}
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AttributeMap {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut attrs = AttributeMap::new();
		for (key, value) in iter {
			attrs.set(key, value);
		}
		attrs
	}
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for AttributeMap {
	fn from(pairs: [(K, V); N]) -> Self {
		pairs.into_iter().collect()
	}
}

impl IntoIterator for AttributeMap {
	type Item = (String, String);
	type IntoIter = indexmap::map::IntoIter<String, String>;

	fn into_iter(self) -> Self::IntoIter {
		self.attrs.into_iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use rstest::rstest;

	#[rstest]
	fn test_empty_value_still_rendered() {
		// Arrange
		let attrs = AttributeMap::from([("data-empty", ""), ("required", "required")]);

		// Act
		let html = attrs.to_html();

		// Assert
		assert_eq!(html, r#"data-empty="" required="required""#);
	}

	#[rstest]
	fn test_values_are_escaped_keys_are_not() {
		let attrs = AttributeMap::from([("title", r#"say "hi" <b>"#)]);

		assert_eq!(attrs.to_html(), r#"title="say &quot;hi&quot; &lt;b&gt;""#);
	}

	#[rstest]
	fn test_remove_closes_gap() {
		let mut attrs = AttributeMap::from([("a", "1"), ("b", "2"), ("c", "3")]);

		assert_eq!(attrs.remove("b"), Some("2".to_string()));
		assert_eq!(attrs.to_html(), r#"a="1" c="3""#);
		assert_eq!(attrs.remove("missing"), None);
	}

	#[rstest]
	fn test_prefixed_serialization() {
		assert_eq!(AttributeMap::new().to_html_prefixed(), "");
		assert_eq!(
			AttributeMap::from([("id", "x")]).to_html_prefixed(),
			r#" id="x""#
		);
	}

	proptest! {
		#[test]
		fn first_insertion_fixes_position(
			class_values in prop::collection::vec("[a-z]{1,6}", 1..8),
			id_values in prop::collection::vec("[a-z]{1,6}", 1..8),
		) {
			let mut attrs = AttributeMap::new();
			attrs.set("class", class_values[0].clone());
			attrs.set("id", id_values[0].clone());
			for (class, id) in class_values.iter().zip(id_values.iter()).rev() {
				attrs.set("id", id.clone());
				attrs.set("class", class.clone());
			}

			let keys: Vec<&str> = attrs.iter().map(|(k, _)| k).collect();
			prop_assert_eq!(keys, vec!["class", "id"]);
			prop_assert!(attrs.to_html().starts_with("class=\""));
		}
	}
}
