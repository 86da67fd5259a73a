//! Option lists shared by select, checkbox and radio fields

use crate::value::FieldValue;
use formwright_core::security::escape_html_attr;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One selectable choice
///
/// `Plain` is a bare display string submitted as its option key. `Rich`
/// carries its display text, an optional submitted value overriding the
/// key, and extra entries rendered as `data-*` attributes. Extras may be any
/// JSON value; strings render as-is, everything else as its JSON text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldOption {
	Plain(String),
	Rich {
		text: String,
		#[serde(default, skip_serializing_if = "Option::is_none")]
		value: Option<String>,
		#[serde(flatten)]
		extras: IndexMap<String, Value>,
	},
}

impl FieldOption {
	/// A rich option with no value override and no extras
	pub fn rich(text: impl Into<String>) -> Self {
		FieldOption::Rich {
			text: text.into(),
			value: None,
			extras: IndexMap::new(),
		}
	}

	/// Override the submitted value (rich options only; plain ones are promoted)
	pub fn with_value(self, value: impl Into<String>) -> Self {
		match self {
			FieldOption::Plain(text) => FieldOption::Rich {
				text,
				value: Some(value.into()),
				extras: IndexMap::new(),
			},
			FieldOption::Rich { text, extras, .. } => FieldOption::Rich {
				text,
				value: Some(value.into()),
				extras,
			},
		}
	}

	/// Attach an extra entry, rendered as `data-<key>`
	pub fn with_extra(self, key: impl Into<String>, extra: impl Into<Value>) -> Self {
		match self {
			FieldOption::Plain(text) => {
				let mut extras = IndexMap::new();
				extras.insert(key.into(), extra.into());
				FieldOption::Rich {
					text,
					value: None,
					extras,
				}
			}
			FieldOption::Rich {
				text,
				value,
				mut extras,
			} => {
				extras.insert(key.into(), extra.into());
				FieldOption::Rich {
					text,
					value,
					extras,
				}
			}
		}
	}
}

impl From<&str> for FieldOption {
	fn from(text: &str) -> Self {
		FieldOption::Plain(text.to_string())
	}
}

impl From<String> for FieldOption {
	fn from(text: String) -> Self {
		FieldOption::Plain(text)
	}
}

/// Ordered mapping of option key to option
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionList {
	options: IndexMap<String, FieldOption>,
}

impl OptionList {
	pub fn new() -> Self {
		Self {
			options: IndexMap::new(),
		}
	}

	/// Append an option (or replace the one under the same key in place)
	///
	/// # Examples
	///
	/// ```
	/// use formwright_forms::{FieldOption, OptionList};
	///
	/// let options = OptionList::new()
	///     .push("1", "Option 1")
	///     .push("2", FieldOption::rich("Option 2").with_extra("extra", "3"));
	/// assert_eq!(options.len(), 2);
	/// ```
	pub fn push(mut self, key: impl Into<String>, option: impl Into<FieldOption>) -> Self {
		self.options.insert(key.into(), option.into());
		self
	}

	pub fn insert(&mut self, key: impl Into<String>, option: impl Into<FieldOption>) {
		self.options.insert(key.into(), option.into());
	}

	pub fn get(&self, key: &str) -> Option<&FieldOption> {
		self.options.get(key)
	}

	pub fn len(&self) -> usize {
		self.options.len()
	}

	pub fn is_empty(&self) -> bool {
		self.options.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldOption)> {
		self.options.iter().map(|(k, v)| (k.as_str(), v))
	}
}

impl<K: Into<String>, O: Into<FieldOption>> FromIterator<(K, O)> for OptionList {
	fn from_iter<I: IntoIterator<Item = (K, O)>>(iter: I) -> Self {
		let mut options = OptionList::new();
		for (key, option) in iter {
			options.insert(key, option);
		}
		options
	}
}

impl<K: Into<String>, O: Into<FieldOption>, const N: usize> From<[(K, O); N]> for OptionList {
	fn from(pairs: [(K, O); N]) -> Self {
		pairs.into_iter().collect()
	}
}

/// Everything a renderer needs to emit one option element
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResolvedOption<'a> {
	pub key: &'a str,
	/// Submitted value, unescaped
	pub value: &'a str,
	/// Display text, unescaped
	pub text: &'a str,
	/// `data-*` attributes, already serialized and escaped
	pub data_attributes: Vec<String>,
	pub selected: bool,
}

/// Work out value, text, extras and selection state for one option.
///
/// A rich option with empty text is treated like a plain one: its key is
/// submitted and it shows no text.
pub(crate) fn resolve<'a>(
	key: &'a str,
	option: &'a FieldOption,
	current: &FieldValue,
) -> ResolvedOption<'a> {
	let selected = current.matches(key);
	match option {
		FieldOption::Rich {
			text,
			value,
			extras,
		} if !text.is_empty() => ResolvedOption {
			key,
			value: value.as_deref().filter(|v| !v.is_empty()).unwrap_or(key),
			text,
			data_attributes: extras
				.iter()
				.map(|(name, extra)| {
					format!(r#"data-{}="{}""#, name, escape_html_attr(&extra_text(extra)))
				})
				.collect(),
			selected,
		},
		FieldOption::Rich { .. } => ResolvedOption {
			key,
			value: key,
			text: "",
			data_attributes: Vec::new(),
			selected,
		},
		FieldOption::Plain(text) => ResolvedOption {
			key,
			value: key,
			text,
			data_attributes: Vec::new(),
			selected,
		},
	}
}

/// Text of an extra as it appears in a `data-*` attribute
fn extra_text(extra: &Value) -> String {
	match extra {
		Value::String(text) => text.clone(),
		Value::Null => String::new(),
		other => other.to_string(),
	}
}
