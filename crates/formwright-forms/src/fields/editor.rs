//! Rich-text editor delegated to the host

use crate::field::{FieldBase, FormField, RenderContext, field_base};
use crate::fields::input::scalar_or_empty;
use crate::host::merge_settings;
use crate::value::FieldValue;
use formwright_core::security::{escape_html_attr, sanitize_rich_text};
use formwright_core::text::slugify;
use serde_json::{Value, json};

/// Keys whose attribute values are passed to the host as booleans
const FLAG_SETTINGS: [&str; 2] = ["media_buttons", "quicktags"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Editor {
	base: FieldBase,
}

impl Editor {
	pub fn new(name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
		Self {
			base: FieldBase::new("editor", name, value),
		}
	}
}

impl FormField for Editor {
	field_base!();

	/// Attributes become editor settings; `media_buttons` and `quicktags`
	/// are on when their attribute is non-empty.
	fn render(&self, ctx: &RenderContext<'_>) -> String {
		let mut settings = merge_settings(
			[
				("textarea_name", json!(escape_html_attr(&self.base.name))),
				("textarea_rows", json!(ctx.settings.editor_rows)),
				("media_buttons", json!(false)),
				("quicktags", json!(false)),
			],
			&self.base.attributes,
		);
		for flag in FLAG_SETTINGS {
			let enabled = !self.base.attributes.get(flag).is_empty();
			settings.insert(flag.to_string(), Value::Bool(enabled));
		}

		let editor_id = slugify(&self.base.name);
		tracing::debug!(field = %self.base.name, editor_id = %editor_id, "delegating editor to host");
		ctx.host.editor(
			&sanitize_rich_text(scalar_or_empty(&self.base)),
			&editor_id,
			&settings,
		)
	}
}
