//! Host form infrastructure
//!
//! Some fields are rendered by the host application rather than by this
//! crate: the CSRF token field, the rich-text editor widget and the
//! hierarchical page and taxonomy pickers. Those fields only assemble a
//! settings map and hand it to a [`FormHost`], trusting the markup that
//! comes back.

use crate::attributes::AttributeMap;
use indexmap::IndexMap;
use serde_json::Value;

/// Ordered settings passed to host widgets
pub type HostSettings = IndexMap<String, Value>;

/// Widgets supplied by the surrounding application
pub trait FormHost: Send + Sync {
	/// Markup for a CSRF token field tied to `action`
	fn csrf_field(&self, action: &str, field_name: &str) -> String;

	/// Markup for a rich-text editor holding `content`
	fn editor(&self, content: &str, editor_id: &str, settings: &HostSettings) -> String;

	/// Markup for a hierarchical page dropdown
	fn dropdown_pages(&self, settings: &HostSettings) -> String;

	/// Markup for a hierarchical taxonomy term dropdown
	fn dropdown_categories(&self, settings: &HostSettings) -> String;
}

/// A host that renders nothing
///
/// Useful where no CMS is present; host-rendered fields come out empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHost;

impl FormHost for NoopHost {
	fn csrf_field(&self, _action: &str, _field_name: &str) -> String {
		String::new()
	}

	fn editor(&self, _content: &str, _editor_id: &str, _settings: &HostSettings) -> String {
		String::new()
	}

	fn dropdown_pages(&self, _settings: &HostSettings) -> String {
		String::new()
	}

	fn dropdown_categories(&self, _settings: &HostSettings) -> String {
		String::new()
	}
}

/// Overlay a field's attributes on a widget's default settings
///
/// Defaults keep their order; attributes override colliding defaults in
/// place and append the rest.
///
/// # Examples
///
/// ```
/// use formwright_forms::{AttributeMap, host::merge_settings};
/// use serde_json::json;
///
/// let defaults = [("name", json!("page")), ("selected", json!(0))];
/// let attrs = AttributeMap::from([("selected", "4"), ("class", "wide")]);
/// let merged = merge_settings(defaults, &attrs);
///
/// let keys: Vec<&str> = merged.keys().map(String::as_str).collect();
/// assert_eq!(keys, ["name", "selected", "class"]);
/// assert_eq!(merged["selected"], json!("4"));
/// ```
pub fn merge_settings<K: Into<String>>(
	defaults: impl IntoIterator<Item = (K, Value)>,
	attributes: &AttributeMap,
) -> HostSettings {
	let mut settings: HostSettings = defaults
		.into_iter()
		.map(|(key, value)| (key.into(), value))
		.collect();
	for (key, value) in attributes.iter() {
		settings.insert(key.to_string(), Value::String(value.to_string()));
	}
	settings
}
