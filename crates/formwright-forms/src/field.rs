//! The field contract shared by every renderable control

use crate::attributes::AttributeMap;
use crate::host::{FormHost, NoopHost};
use crate::settings::FormSettings;
use crate::value::FieldValue;

/// State common to all fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldBase {
	pub field_type: String,
	pub name: String,
	pub value: FieldValue,
	pub label: Option<String>,
	pub description: Option<String>,
	pub attributes: AttributeMap,
}

impl FieldBase {
	pub fn new(
		field_type: impl Into<String>,
		name: impl Into<String>,
		value: impl Into<FieldValue>,
	) -> Self {
		Self {
			field_type: field_type.into(),
			name: name.into(),
			value: value.into(),
			label: None,
			description: None,
			attributes: AttributeMap::new(),
		}
	}
}

/// Everything a field may consult while rendering
///
/// Rendering reads the context and the field and returns markup; it never
/// mutates either, so rendering the same field twice yields the same string.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
	pub settings: &'a FormSettings,
	pub host: &'a dyn FormHost,
}

impl<'a> RenderContext<'a> {
	pub fn new(settings: &'a FormSettings, host: &'a dyn FormHost) -> Self {
		Self { settings, host }
	}
}

static DEFAULT_SETTINGS: std::sync::OnceLock<FormSettings> = std::sync::OnceLock::new();

impl Default for RenderContext<'static> {
	/// Default settings and a host that renders nothing
	fn default() -> Self {
		Self {
			settings: DEFAULT_SETTINGS.get_or_init(FormSettings::default),
			host: &NoopHost,
		}
	}
}

/// A renderable form control
///
/// Implementors expose their [`FieldBase`]; accessors and the chainable
/// `with_*` builders come for free.
///
/// # Examples
///
/// ```
/// use formwright_forms::{FormField, Input, RenderContext};
///
/// let field = Input::new("email", "", "email")
///     .with_attribute("class", "wide")
///     .with_attribute("id", "contact-email");
///
/// assert_eq!(field.attribute("id"), "contact-email");
/// assert_eq!(
///     field.render(&RenderContext::default()),
///     r#"<input type="email" name="email" value="" class="wide" id="contact-email"/>"#
/// );
/// ```
pub trait FormField {
	fn base(&self) -> &FieldBase;

	fn base_mut(&mut self) -> &mut FieldBase;

	/// Serialize the field's current state to markup
	fn render(&self, ctx: &RenderContext<'_>) -> String;

	fn field_type(&self) -> &str {
		&self.base().field_type
	}

	fn name(&self) -> &str {
		&self.base().name
	}

	fn value(&self) -> &FieldValue {
		&self.base().value
	}

	fn label(&self) -> Option<&str> {
		self.base().label.as_deref()
	}

	fn description(&self) -> Option<&str> {
		self.base().description.as_deref()
	}

	fn attributes(&self) -> &AttributeMap {
		&self.base().attributes
	}

	fn attributes_mut(&mut self) -> &mut AttributeMap {
		&mut self.base_mut().attributes
	}

	/// A single attribute, `""` when absent
	fn attribute(&self, key: &str) -> &str {
		self.base().attributes.get(key)
	}

	fn set_attribute(&mut self, key: &str, value: &str) {
		self.base_mut().attributes.set(key, value);
	}

	/// The element id a `<label for>` should point at, given the field's `id`
	///
	/// Fields that render several inputs name the first one.
	fn label_target(&self, id: &str) -> String {
		id.to_string()
	}

	fn with_name(mut self, name: impl Into<String>) -> Self
	where
		Self: Sized,
	{
		self.base_mut().name = name.into();
		self
	}

	fn with_value(mut self, value: impl Into<FieldValue>) -> Self
	where
		Self: Sized,
	{
		self.base_mut().value = value.into();
		self
	}

	fn with_label(mut self, label: impl Into<String>) -> Self
	where
		Self: Sized,
	{
		self.base_mut().label = Some(label.into());
		self
	}

	fn with_description(mut self, description: impl Into<String>) -> Self
	where
		Self: Sized,
	{
		self.base_mut().description = Some(description.into());
		self
	}

	/// Replace the whole attribute map
	fn with_attributes(mut self, attributes: impl Into<AttributeMap>) -> Self
	where
		Self: Sized,
	{
		self.base_mut().attributes = attributes.into();
		self
	}

	/// Merge into the attribute map (incoming values win)
	fn merge_attributes(mut self, attributes: impl Into<AttributeMap>) -> Self
	where
		Self: Sized,
	{
		self.base_mut().attributes.merge(attributes.into());
		self
	}

	fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self
	where
		Self: Sized,
	{
		self.base_mut().attributes.set(key, value);
		self
	}
}

/// Implements the accessor half of [`FormField`] for a struct with a `base` field.
macro_rules! field_base {
	() => {
		fn base(&self) -> &$crate::field::FieldBase {
			&self.base
		}

		fn base_mut(&mut self) -> &mut $crate::field::FieldBase {
			&mut self.base
		}
	};
}

pub(crate) use field_base;
