//! `<button>` field

use crate::field::{FieldBase, FormField, RenderContext, field_base};
use crate::fields::input::scalar_or_empty;
use crate::value::FieldValue;
use formwright_core::security::{escape_html_attr, sanitize_rich_text};

/// A button whose caption is the field label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
	base: FieldBase,
}

impl Button {
	/// # Examples
	///
	/// ```
	/// use formwright_forms::{Button, FormField, RenderContext};
	///
	/// let button = Button::new("submit", "Test Label", "dosubmit", "button")
	///     .with_attributes([("class", "test-class")]);
	/// assert_eq!(
	///     button.render(&RenderContext::default()),
	///     r#"<button type="button" name="submit" value="dosubmit" class="test-class">Test Label</button>"#
	/// );
	/// ```
	pub fn new(
		name: impl Into<String>,
		label: impl Into<String>,
		value: impl Into<FieldValue>,
		button_type: impl Into<String>,
	) -> Self {
		let mut base = FieldBase::new(button_type, name, value);
		base.label = Some(label.into());
		Self { base }
	}
}

impl FormField for Button {
	field_base!();

	fn render(&self, _ctx: &RenderContext<'_>) -> String {
		format!(
			r#"<button type="{}" name="{}" value="{}"{}>{}</button>"#,
			escape_html_attr(&self.base.field_type),
			escape_html_attr(&self.base.name),
			escape_html_attr(scalar_or_empty(&self.base)),
			self.base.attributes.to_html_prefixed(),
			sanitize_rich_text(self.base.label.as_deref().unwrap_or_default())
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_caption_keeps_light_markup() {
		let button = Button::new("go", "<strong>Save</strong><script>x()</script>", "", "submit");

		let html = button.render(&RenderContext::default());

		assert_eq!(
			html,
			r#"<button type="submit" name="go" value=""><strong>Save</strong>&lt;script&gt;x()&lt;/script&gt;</button>"#
		);
	}
}
