//! Taxonomy term picker delegated to the host

use crate::field::{FieldBase, FormField, RenderContext, field_base};
use crate::fields::input::scalar_or_empty;
use crate::host::merge_settings;
use crate::value::FieldValue;
use formwright_core::security::{escape_html, escape_html_attr};
use serde_json::json;

/// Hierarchical dropdown of the terms of one taxonomy, submitted by slug
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Taxonomy {
	base: FieldBase,
	taxonomy: String,
	empty_text: String,
}

impl Taxonomy {
	pub fn new(
		taxonomy: impl Into<String>,
		name: impl Into<String>,
		value: impl Into<FieldValue>,
	) -> Self {
		Self {
			base: FieldBase::new("taxonomy", name, value),
			taxonomy: taxonomy.into(),
			empty_text: String::new(),
		}
	}

	pub fn taxonomy(&self) -> &str {
		&self.taxonomy
	}

	pub fn with_taxonomy(mut self, taxonomy: impl Into<String>) -> Self {
		self.taxonomy = taxonomy.into();
		self
	}

	pub fn empty_text(&self) -> &str {
		&self.empty_text
	}

	pub fn with_empty_text(mut self, text: impl Into<String>) -> Self {
		self.empty_text = text.into();
		self
	}
}

impl FormField for Taxonomy {
	field_base!();

	fn render(&self, ctx: &RenderContext<'_>) -> String {
		let settings = merge_settings(
			[
				("taxonomy", json!(escape_html_attr(&self.taxonomy))),
				("name", json!(escape_html_attr(&self.base.name))),
				("show_option_none", json!(escape_html(&self.empty_text))),
				("option_none_value", json!("")),
				("selected", json!(scalar_or_empty(&self.base))),
				("orderby", json!("name")),
				("hierarchical", json!(1)),
				("hide_empty", json!(0)),
				("value_field", json!("slug")),
			],
			&self.base.attributes,
		);
		tracing::debug!(field = %self.base.name, taxonomy = %self.taxonomy, "delegating taxonomy dropdown to host");
		ctx.host.dropdown_categories(&settings)
	}
}
