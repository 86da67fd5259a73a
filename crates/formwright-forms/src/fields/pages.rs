//! Page picker delegated to the host

use crate::field::{FieldBase, FormField, RenderContext, field_base};
use crate::host::merge_settings;
use crate::value::FieldValue;
use formwright_core::security::{escape_html, escape_html_attr};
use serde_json::json;

/// Hierarchical dropdown of site pages; the value is a page id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pages {
	base: FieldBase,
	empty_text: String,
}

impl Pages {
	pub fn new(name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
		Self {
			base: FieldBase::new("pages", name, value),
			empty_text: String::new(),
		}
	}

	pub fn empty_text(&self) -> &str {
		&self.empty_text
	}

	/// Label of the "no page" choice
	pub fn with_empty_text(mut self, text: impl Into<String>) -> Self {
		self.empty_text = text.into();
		self
	}

	/// The selected page id; anything unparseable selects nothing (0)
	pub fn selected(&self) -> i64 {
		self.base
			.value
			.as_scalar()
			.and_then(|value| value.trim().parse().ok())
			.unwrap_or(0)
	}
}

impl FormField for Pages {
	field_base!();

	fn render(&self, ctx: &RenderContext<'_>) -> String {
		let settings = merge_settings(
			[
				("selected", json!(self.selected())),
				("name", json!(escape_html_attr(&self.base.name))),
				("show_option_none", json!(escape_html(&self.empty_text))),
			],
			&self.base.attributes,
		);
		tracing::debug!(field = %self.base.name, "delegating page dropdown to host");
		ctx.host.dropdown_pages(&settings)
	}
}
