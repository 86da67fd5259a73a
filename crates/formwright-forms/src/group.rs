//! Label + field + description composites
//!
//! The group renderer is the one place where rendering writes back to a
//! field: a field without an `id` gets one derived from its name so the
//! label's `for` can point at it, and the field's `class` gains the base
//! field class. Both writes are stable, so rendering a group twice yields
//! the same markup.

use crate::field::{FormField, RenderContext};
use crate::fields::Label;
use formwright_core::security::{escape_html, escape_html_attr};
use formwright_core::text::derive_id;

/// One field wrapped with its label and description
pub struct Group<'a> {
	field: &'a mut dyn FormField,
	label: Option<&'a mut Label>,
	description: Option<String>,
	group_class: Option<String>,
	field_class: Option<String>,
}

impl<'a> Group<'a> {
	/// # Examples
	///
	/// ```
	/// use formwright_core::SequentialIdGenerator;
	/// use formwright_forms::{Group, Input, Label, RenderContext};
	///
	/// let ids = SequentialIdGenerator::new("label");
	/// let mut field = Input::new("testname", "testvalue", "text");
	/// let mut label = Label::new("Test Label", &ids);
	///
	/// let html = Group::new(&mut field)
	///     .label(&mut label)
	///     .description("This field is mandatory")
	///     .render(&RenderContext::default());
	///
	/// assert_eq!(
	///     html,
	///     concat!(
	///         r#"<div class="form-group"><label for="field-testname">Test Label</label>"#,
	///         r#"<input type="text" name="testname" value="testvalue" id="field-testname" class="form-control"/>"#,
	///         r#"<small class="form-text text-muted">This field is mandatory</small></div>"#,
	///     )
	/// );
	/// ```
	pub fn new(field: &'a mut dyn FormField) -> Self {
		Self {
			field,
			label: None,
			description: None,
			group_class: None,
			field_class: None,
		}
	}

	pub fn label(mut self, label: &'a mut Label) -> Self {
		self.label = Some(label);
		self
	}

	pub fn description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	/// Extra class on the container, after the configured group class
	pub fn group_class(mut self, class: impl Into<String>) -> Self {
		self.group_class = Some(class.into());
		self
	}

	/// Base class for the field, replacing the configured one
	pub fn field_class(mut self, class: impl Into<String>) -> Self {
		self.field_class = Some(class.into());
		self
	}

	pub fn render(self, ctx: &RenderContext<'_>) -> String {
		let settings = ctx.settings;

		let mut container_class = settings.group_class.clone();
		if let Some(extra) = self.group_class.as_deref().filter(|c| !c.is_empty()) {
			container_class.push(' ');
			container_class.push_str(extra);
		}
		let mut html = format!(r#"<div class="{}">"#, escape_html_attr(&container_class));

		let id = ensure_id(self.field, &settings.id_prefix);

		if let Some(label) = self.label {
			if label.attribute("for").is_empty() {
				label.set_attribute("for", &self.field.label_target(&id));
			}
			html.push_str(&label.render(ctx));
		}

		let base_class = self.field_class.as_deref().unwrap_or(&settings.field_class);
		let class = prefix_class(base_class, self.field.attribute("class"));
		self.field.set_attribute("class", &class);
		html.push_str(&self.field.render(ctx));

		if let Some(description) = self.description.as_deref().filter(|d| !d.is_empty()) {
			html.push_str(&format!(
				r#"<small class="{}">{}</small>"#,
				escape_html_attr(&settings.description_class),
				escape_html(description)
			));
		}

		html.push_str("</div>");
		html
	}
}

/// Return the field's `id`, deriving and storing one when it has none.
fn ensure_id(field: &mut dyn FormField, prefix: &str) -> String {
	let existing = field.attribute("id");
	if !existing.is_empty() {
		return existing.to_string();
	}
	let id = derive_id(prefix, field.name());
	tracing::debug!(field = %field.name(), id = %id, "derived field id");
	field.set_attribute("id", &id);
	id
}

/// The tokens of `base` missing from `existing`, followed by the existing classes.
fn prefix_class(base: &str, existing: &str) -> String {
	let present: Vec<&str> = existing.split_whitespace().collect();
	let mut missing: Vec<&str> = Vec::new();
	for token in base.split_whitespace() {
		if !present.contains(&token) && !missing.contains(&token) {
			missing.push(token);
		}
	}
	if missing.is_empty() {
		return existing.to_string();
	}
	if present.is_empty() {
		missing.join(" ")
	} else {
		format!("{} {}", missing.join(" "), existing)
	}
}
