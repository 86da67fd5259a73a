//! Multi-line `<textarea>` field

use crate::field::{FieldBase, FormField, RenderContext, field_base};
use crate::fields::input::scalar_or_empty;
use crate::value::FieldValue;
use formwright_core::security::{escape_html, escape_html_attr};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Textarea {
	base: FieldBase,
}

impl Textarea {
	pub fn new(name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
		Self {
			base: FieldBase::new("textarea", name, value),
		}
	}
}

impl FormField for Textarea {
	field_base!();

	/// `rows` falls back to the configured default when the caller set none.
	fn render(&self, ctx: &RenderContext<'_>) -> String {
		let mut attributes = self.base.attributes.clone();
		if !attributes.contains("rows") {
			attributes.set("rows", ctx.settings.textarea_rows.to_string());
		}

		format!(
			r#"<textarea name="{}"{}>{}</textarea>"#,
			escape_html_attr(&self.base.name),
			attributes.to_html_prefixed(),
			escape_html(scalar_or_empty(&self.base))
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::settings::FormSettings;
	use crate::host::NoopHost;
	use rstest::rstest;

	#[rstest]
	fn test_default_rows_appended() {
		let field = Textarea::new("testname", "testvalue").with_attributes([("class", "test-class")]);

		let html = field.render(&RenderContext::default());

		assert_eq!(
			html,
			r#"<textarea name="testname" class="test-class" rows="4">testvalue</textarea>"#
		);
	}

	#[rstest]
	fn test_explicit_rows_kept_in_place() {
		// Arrange
		let settings = FormSettings {
			textarea_rows: 9,
			..FormSettings::default()
		};
		let ctx = RenderContext::new(&settings, &NoopHost);
		let field = Textarea::new("bio", "")
			.with_attribute("rows", "2")
			.with_attribute("id", "bio");

		// Act
		let html = field.render(&ctx);

		// Assert
		assert_eq!(html, r#"<textarea name="bio" rows="2" id="bio"></textarea>"#);
	}

	#[rstest]
	fn test_body_is_escaped() {
		let field = Textarea::new("bio", "</textarea><script>x</script>");

		let html = field.render(&RenderContext::default());

		assert!(html.contains("&lt;/textarea&gt;&lt;script&gt;"));
	}
}
