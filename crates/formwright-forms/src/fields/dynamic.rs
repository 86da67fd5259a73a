//! Repeatable dynamic field group
//!
//! A dynamic field renders one text input per non-empty entry of its list
//! value, followed by a hidden clone block holding one blank item. Client
//! script copies the clone to add entries; the clone's `data-count` is the
//! index the next item should take.
//!
//! Items are indexed from 1 in render order. Empty entries are skipped and
//! do not consume an index, so indexes never have gaps.

use crate::field::{FieldBase, FormField, RenderContext, field_base};
use crate::value::FieldValue;
use formwright_core::security::{escape_html, escape_html_attr};

/// A variable-length list of text inputs sharing one name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dynamic {
	base: FieldBase,
	button_text: String,
	css_class: Option<String>,
}

impl Dynamic {
	/// # Examples
	///
	/// ```
	/// use formwright_forms::{Dynamic, FormField, RenderContext};
	///
	/// let field = Dynamic::new("links", vec!["https://a.example"]).with_button_text("Add link");
	/// let html = field.render(&RenderContext::default());
	///
	/// assert!(html.contains(r#"<p class="dynamic-item" data-index="1">"#));
	/// assert!(html.contains(r#"data-count="2""#));
	/// assert!(html.ends_with("</span> Add link</a></p></div>"));
	/// ```
	pub fn new(name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
		Self {
			base: FieldBase::new("dynamic", name, value),
			button_text: String::new(),
			css_class: None,
		}
	}

	pub fn button_text(&self) -> &str {
		&self.button_text
	}

	/// Caption of the "add" control
	pub fn with_button_text(mut self, text: impl Into<String>) -> Self {
		self.button_text = text.into();
		self
	}

	pub fn css_class(&self) -> Option<&str> {
		self.css_class.as_deref()
	}

	/// Extra class on the outer block
	pub fn with_css_class(mut self, class: impl Into<String>) -> Self {
		self.css_class = Some(class.into());
		self
	}

	/// Entries that will render as items, in order
	fn entries(&self) -> Vec<&str> {
		match &self.base.value {
			FieldValue::List(values) => values
				.iter()
				.map(String::as_str)
				.filter(|value| !value.is_empty())
				.collect(),
			FieldValue::None => Vec::new(),
			FieldValue::Scalar(_) => {
				tracing::warn!(
					field = %self.base.name,
					"dynamic field given a scalar value; rendering no items"
				);
				Vec::new()
			}
		}
	}

	fn render_item(&self, index: usize, value: &str) -> String {
		let mut attributes = self.base.attributes.clone();
		let id = attributes.get("id");
		if !id.is_empty() {
			let id = format!("{}-{}", id, index);
			attributes.set("id", id);
		}

		format!(
			concat!(
				r#"<p class="dynamic-item" data-index="{index}">"#,
				r#"<input type="text" name="{name}[]" value="{value}"{attributes}/>"#,
				r#"<a type="button" class="button dynamic-remove">"#,
				r#"<span class="dashicons-before dashicons-trash"></span></a></p>"#,
			),
			index = index,
			name = escape_html_attr(&self.base.name),
			value = escape_html_attr(value),
			attributes = attributes.to_html_prefixed(),
		)
	}
}

impl FormField for Dynamic {
	field_base!();

	fn render(&self, _ctx: &RenderContext<'_>) -> String {
		let entries = self.entries();
		tracing::debug!(field = %self.base.name, items = entries.len(), "rendering dynamic field");

		let mut html = String::from(r#"<div class="dynamic-block"#);
		if let Some(class) = self.css_class.as_deref().filter(|c| !c.is_empty()) {
			html.push(' ');
			html.push_str(&escape_html_attr(class));
		}
		html.push_str(r#""><div class="dynamic-items">"#);

		for (position, value) in entries.iter().enumerate() {
			tracing::trace!(field = %self.base.name, index = position + 1, "dynamic item");
			html.push_str(&self.render_item(position + 1, value));
		}

		let next = entries.len() + 1;
		html.push_str(&format!(
			r#"</div><div class="dynamic-clone" style="display:none;" aria-hidden="true" data-count="{}">"#,
			next
		));
		html.push_str(&self.render_item(next, ""));
		html.push_str("</div>");

		html.push_str(r#"<p><a type="button" class="button dynamic-add"><span class="dashicons-before dashicons-plus"></span>"#);
		if !self.button_text.is_empty() {
			html.push(' ');
			html.push_str(&escape_html(&self.button_text));
		}
		html.push_str("</a></p></div>");
		html
	}
}
