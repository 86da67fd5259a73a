//! `<label>` pseudo-field

use crate::field::{FieldBase, FormField, RenderContext, field_base};
use formwright_core::IdGenerator;
use formwright_core::security::sanitize_rich_text;

/// A caption for another field
///
/// Labels are fields so they share the attribute API, but nothing names
/// them; the name comes from an injected [`IdGenerator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
	base: FieldBase,
}

impl Label {
	/// # Examples
	///
	/// ```
	/// use formwright_core::SequentialIdGenerator;
	/// use formwright_forms::{FormField, Label, RenderContext};
	///
	/// let ids = SequentialIdGenerator::new("label");
	/// let label = Label::new("Test Label", &ids).with_attributes([("class", "test-class")]);
	/// assert_eq!(label.name(), "label-1");
	/// assert_eq!(
	///     label.render(&RenderContext::default()),
	///     r#"<label class="test-class">Test Label</label>"#
	/// );
	/// ```
	pub fn new(text: impl Into<String>, ids: &dyn IdGenerator) -> Self {
		let mut base = FieldBase::new("label", ids.next_id(), "");
		base.label = Some(text.into());
		Self { base }
	}

	/// The caption text
	pub fn text(&self) -> &str {
		self.base.label.as_deref().unwrap_or_default()
	}
}

impl FormField for Label {
	field_base!();

	fn render(&self, _ctx: &RenderContext<'_>) -> String {
		let attributes = self.base.attributes.to_html();
		if attributes.is_empty() {
			format!("<label>{}</label>", sanitize_rich_text(self.text()))
		} else {
			format!(
				"<label {}>{}</label>",
				attributes,
				sanitize_rich_text(self.text())
			)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use formwright_core::SequentialIdGenerator;
	use rstest::rstest;

	#[rstest]
	fn test_bare_label() {
		let ids = SequentialIdGenerator::new("l");
		let label = Label::new("Name", &ids);

		assert_eq!(label.render(&RenderContext::default()), "<label>Name</label>");
	}

	#[rstest]
	fn test_each_label_gets_its_own_name() {
		let ids = SequentialIdGenerator::new("l");

		let first = Label::new("A", &ids);
		let second = Label::new("B", &ids);

		assert_ne!(first.name(), second.name());
	}
}
