//! `<select>` dropdown

use crate::choice::{FieldOption, OptionList, resolve};
use crate::field::{FieldBase, FormField, RenderContext, field_base};
use crate::value::FieldValue;
use formwright_core::security::{escape_html, escape_html_attr};

/// A dropdown over an ordered option list
///
/// Multiplicity follows the value: a list value may mark several options
/// selected. Add `multiple` yourself when the browser should allow that;
/// the name is never suffixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Select {
	base: FieldBase,
	options: OptionList,
	empty_text: Option<String>,
}

impl Select {
	/// # Examples
	///
	/// ```
	/// use formwright_forms::{FormField, RenderContext, Select};
	///
	/// let select = Select::new("test", "1")
	///     .with_options([("1", "Option 1")])
	///     .with_empty_text("Select")
	///     .with_attributes([("class", "test-class")]);
	/// assert_eq!(
	///     select.render(&RenderContext::default()),
	///     concat!(
	///         r#"<select name="test" class="test-class"><option value="">Select</option>"#,
	///         r#"<option selected value="1">Option 1</option></select>"#,
	///     )
	/// );
	/// ```
	pub fn new(name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
		Self {
			base: FieldBase::new("select", name, value),
			options: OptionList::new(),
			empty_text: None,
		}
	}

	pub fn options(&self) -> &OptionList {
		&self.options
	}

	pub fn with_options(mut self, options: impl Into<OptionList>) -> Self {
		self.options = options.into();
		self
	}

	pub fn add_option(mut self, key: impl Into<String>, option: impl Into<FieldOption>) -> Self {
		self.options.insert(key, option);
		self
	}

	pub fn empty_text(&self) -> Option<&str> {
		self.empty_text.as_deref()
	}

	/// Placeholder shown as a leading option with an empty value
	pub fn with_empty_text(mut self, text: impl Into<String>) -> Self {
		self.empty_text = Some(text.into());
		self
	}
}

impl FormField for Select {
	field_base!();

	fn render(&self, _ctx: &RenderContext<'_>) -> String {
		tracing::debug!(field = %self.base.name, options = self.options.len(), "rendering select");

		let mut html = format!(
			r#"<select name="{}"{}>"#,
			escape_html_attr(&self.base.name),
			self.base.attributes.to_html_prefixed()
		);

		if let Some(text) = self.empty_text.as_deref().filter(|t| !t.is_empty()) {
			html.push_str(&format!(r#"<option value="">{}</option>"#, escape_html(text)));
		}

		for (key, option) in self.options.iter() {
			let resolved = resolve(key, option, &self.base.value);
			tracing::trace!(field = %self.base.name, key, selected = resolved.selected, "select option");

			html.push_str("<option");
			if resolved.selected {
				html.push_str(" selected");
			}
			for data in &resolved.data_attributes {
				html.push(' ');
				html.push_str(data);
			}
			html.push_str(&format!(
				r#" value="{}">{}</option>"#,
				escape_html_attr(resolved.value),
				escape_html(resolved.text)
			));
		}

		html.push_str("</select>");
		html
	}
}
