//! Single-line `<input>` fields (text, hidden, password, number, ...)

use crate::field::{FieldBase, FormField, RenderContext, field_base};
use crate::value::FieldValue;
use formwright_core::security::escape_html_attr;

/// An `<input>` element of any type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
	base: FieldBase,
}

impl Input {
	/// Create an input of the given type
	///
	/// # Examples
	///
	/// ```
	/// use formwright_forms::{FormField, Input, RenderContext};
	///
	/// let field = Input::new("testname", "testvalue", "text")
	///     .with_attributes([("class", "test-class")]);
	/// assert_eq!(
	///     field.render(&RenderContext::default()),
	///     r#"<input type="text" name="testname" value="testvalue" class="test-class"/>"#
	/// );
	/// ```
	pub fn new(
		name: impl Into<String>,
		value: impl Into<FieldValue>,
		input_type: impl Into<String>,
	) -> Self {
		Self {
			base: FieldBase::new(input_type, name, value),
		}
	}
}

/// Scalar text of a field's value, `""` for anything else.
pub(crate) fn scalar_or_empty<'a>(base: &'a FieldBase) -> &'a str {
	match &base.value {
		FieldValue::Scalar(value) => value,
		FieldValue::None => "",
		FieldValue::List(_) => {
			tracing::warn!(
				field = %base.name,
				field_type = %base.field_type,
				"sequence value given to a single-valued field; rendering empty"
			);
			""
		}
	}
}

impl FormField for Input {
	field_base!();

	fn render(&self, _ctx: &RenderContext<'_>) -> String {
		tracing::debug!(field = %self.base.name, input_type = %self.base.field_type, "rendering input");
		format!(
			r#"<input type="{}" name="{}" value="{}"{}/>"#,
			escape_html_attr(&self.base.field_type),
			escape_html_attr(&self.base.name),
			escape_html_attr(scalar_or_empty(&self.base)),
			self.base.attributes.to_html_prefixed()
		)
	}
}
