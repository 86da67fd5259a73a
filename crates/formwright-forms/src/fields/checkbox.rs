//! Checkbox and radio groups
//!
//! Both render one `<label>`-wrapped input per option. With more than one
//! option the name gets a `[]` suffix so the submission is a list; with a
//! single option the bare name is used. The field's `id` is not emitted
//! as-is but suffixed with each option key so every input stays unique.

use crate::choice::{FieldOption, OptionList, resolve};
use crate::field::{FieldBase, FormField, RenderContext, field_base};
use crate::value::FieldValue;
use formwright_core::security::{escape_html_attr, sanitize_rich_text};

/// A group of checkboxes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkbox {
	base: FieldBase,
	options: OptionList,
}

/// A group of radio buttons
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Radio {
	base: FieldBase,
	options: OptionList,
}

macro_rules! choice_group {
	($ty:ident, $field_type:literal) => {
		impl $ty {
			pub fn new(name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
				Self {
					base: FieldBase::new($field_type, name, value),
					options: OptionList::new(),
				}
			}

			pub fn options(&self) -> &OptionList {
				&self.options
			}

			pub fn with_options(mut self, options: impl Into<OptionList>) -> Self {
				self.options = options.into();
				self
			}

			pub fn add_option(
				mut self,
				key: impl Into<String>,
				option: impl Into<FieldOption>,
			) -> Self {
				self.options.insert(key, option);
				self
			}
		}

		impl FormField for $ty {
			field_base!();

			fn render(&self, _ctx: &RenderContext<'_>) -> String {
				render_choices(&self.base, &self.options)
			}

			/// Inputs carry `ID-KEY` ids, so a label points at the first option.
			fn label_target(&self, id: &str) -> String {
				match self.options.iter().next() {
					Some((key, _)) => format!("{}-{}", id, key),
					None => id.to_string(),
				}
			}
		}
	};
}

choice_group!(Checkbox, "checkbox");
choice_group!(Radio, "radio");

fn render_choices(base: &FieldBase, options: &OptionList) -> String {
	tracing::debug!(
		field = %base.name,
		field_type = %base.field_type,
		options = options.len(),
		"rendering choice group"
	);

	let name = if options.len() > 1 {
		format!("{}[]", base.name)
	} else {
		base.name.clone()
	};
	let id = base.attributes.get("id");
	let mut shared = base.attributes.clone();
	shared.remove("id");
	let shared = shared.to_html();

	let mut html = String::new();
	for (key, option) in options.iter() {
		let resolved = resolve(key, option, &base.value);
		tracing::trace!(field = %base.name, key, checked = resolved.selected, "choice option");

		let mut attributes = Vec::new();
		if resolved.selected {
			attributes.push("checked".to_string());
		}
		if !shared.is_empty() {
			attributes.push(shared.clone());
		}
		if !id.is_empty() {
			attributes.push(format!(
				r#"id="{}-{}""#,
				escape_html_attr(id),
				escape_html_attr(key)
			));
		}
		attributes.extend(resolved.data_attributes);
		attributes.push(format!(r#"value="{}""#, escape_html_attr(resolved.value)));

		html.push_str(&format!(
			concat!(
				r#"<label class="form-check-label form-{kind}">"#,
				r#"<input type="{kind}" name="{name}" {attributes}/>{text}"#,
				r#"<span class="form-check-icon{icon}"></span></label>"#,
			),
			kind = escape_html_attr(&base.field_type),
			name = escape_html_attr(&name),
			attributes = attributes.join(" "),
			text = sanitize_rich_text(resolved.text),
			icon = if resolved.selected { " checked" } else { "" },
		));
	}
	html
}
