//! The `Form` facade
//!
//! `Form` owns what the fields themselves should not: the rendering
//! settings, the host collaborator and the identifier generator used to
//! name labels. Its constructors return fields pre-configured with those
//! defaults; rendering goes through [`Form::render`], [`Form::group`] or
//! [`Form::render_fieldset`] so every field sees the same context.

use crate::attributes::AttributeMap;
use crate::choice::OptionList;
use crate::field::{FormField, RenderContext};
use crate::fields::{
	Button, Captcha, Checkbox, Dynamic, Editor, Input, Label, Pages, Radio, Select, Taxonomy,
	Textarea,
};
use crate::fieldset::Fieldset;
use crate::group::Group;
use crate::host::{FormHost, NoopHost};
use crate::settings::{FormSettings, SettingsResult};
use crate::value::FieldValue;
use formwright_core::security::{escape_html, escape_html_attr};
use formwright_core::text::slugify;
use formwright_core::{IdGenerator, RandomIdGenerator};
use std::sync::Arc;

/// Field factory and renderer
#[derive(Clone)]
pub struct Form {
	settings: FormSettings,
	host: Arc<dyn FormHost>,
	ids: Arc<dyn IdGenerator>,
}

impl Form {
	/// A form with default settings, no host and random label names
	///
	/// # Examples
	///
	/// ```
	/// use formwright_forms::Form;
	///
	/// let form = Form::new();
	/// let field = form.text("testname", "testvalue");
	/// assert_eq!(
	///     form.render(&field),
	///     r#"<input type="text" name="testname" value="testvalue"/>"#
	/// );
	/// ```
	pub fn new() -> Self {
		Self {
			settings: FormSettings::default(),
			host: Arc::new(NoopHost),
			ids: Arc::new(RandomIdGenerator),
		}
	}

	pub fn builder() -> FormBuilder {
		FormBuilder::default()
	}

	pub fn settings(&self) -> &FormSettings {
		&self.settings
	}

	pub fn host(&self) -> &dyn FormHost {
		self.host.as_ref()
	}

	/// The context every field of this form renders with
	pub fn context(&self) -> RenderContext<'_> {
		RenderContext::new(&self.settings, self.host.as_ref())
	}

	/// Opening `<form>` tag; an empty `method` falls back to the configured one
	///
	/// # Examples
	///
	/// ```
	/// use formwright_forms::{AttributeMap, Form};
	///
	/// let form = Form::new();
	/// assert_eq!(
	///     form.start("test", "get", [("class", "test-class")]),
	///     r#"<form action="test" method="get" class="test-class">"#
	/// );
	/// assert_eq!(form.start("", "", AttributeMap::new()), r#"<form action="" method="post">"#);
	/// ```
	pub fn start(&self, action: &str, method: &str, attributes: impl Into<AttributeMap>) -> String {
		let method = if method.is_empty() {
			self.settings.form_method.as_str()
		} else {
			method
		};
		format!(
			r#"<form action="{}" method="{}"{}>"#,
			escape_html_attr(action),
			escape_html_attr(method),
			attributes.into().to_html_prefixed()
		)
	}

	/// Closing `</form>` tag
	///
	/// With a non-empty `action` the host's CSRF field and a hidden
	/// `action` input come first.
	pub fn end(&self, action: &str) -> String {
		let mut html = String::new();
		if !action.is_empty() {
			html.push_str(&self.host.csrf_field(action, &self.settings.nonce_field));
			html.push_str(&self.render(&self.hidden("action", action)));
		}
		html.push_str("</form>");
		html
	}

	/// A label named by this form's identifier generator
	pub fn label(&self, text: impl Into<String>) -> Label {
		Label::new(text, self.ids.as_ref())
	}

	pub fn button(
		&self,
		name: impl Into<String>,
		label: impl Into<String>,
		value: impl Into<FieldValue>,
		button_type: impl Into<String>,
	) -> Button {
		Button::new(name, label, value, button_type)
	}

	pub fn input(
		&self,
		name: impl Into<String>,
		value: impl Into<FieldValue>,
		input_type: impl Into<String>,
	) -> Input {
		Input::new(name, value, input_type)
	}

	pub fn text(&self, name: impl Into<String>, value: impl Into<FieldValue>) -> Input {
		Input::new(name, value, "text")
	}

	pub fn hidden(&self, name: impl Into<String>, value: impl Into<FieldValue>) -> Input {
		Input::new(name, value, "hidden")
	}

	/// A password input; passwords are never pre-filled
	pub fn password(&self, name: impl Into<String>) -> Input {
		Input::new(name, "", "password")
	}

	/// A number input bounded by the configured `min`, `max` and `step`
	pub fn number(&self, name: impl Into<String>, value: i64) -> Input {
		self.number_with_range(
			name,
			value,
			self.settings.number_min,
			self.settings.number_max,
			self.settings.number_step,
		)
	}

	pub fn number_with_range(
		&self,
		name: impl Into<String>,
		value: i64,
		min: i64,
		max: i64,
		step: i64,
	) -> Input {
		Input::new(name, value, "number").merge_attributes([
			("min", min.to_string()),
			("max", max.to_string()),
			("step", step.to_string()),
		])
	}

	pub fn textarea(&self, name: impl Into<String>, value: impl Into<FieldValue>) -> Textarea {
		Textarea::new(name, value)
	}

	pub fn editor(&self, name: impl Into<String>, value: impl Into<FieldValue>) -> Editor {
		Editor::new(name, value)
	}

	pub fn pages(&self, name: impl Into<String>, value: i64, empty_text: impl Into<String>) -> Pages {
		Pages::new(name, value).with_empty_text(empty_text)
	}

	pub fn taxonomy(
		&self,
		taxonomy: impl Into<String>,
		name: impl Into<String>,
		value: impl Into<FieldValue>,
		empty_text: impl Into<String>,
	) -> Taxonomy {
		Taxonomy::new(taxonomy, name, value).with_empty_text(empty_text)
	}

	pub fn select(
		&self,
		name: impl Into<String>,
		value: impl Into<FieldValue>,
		options: impl Into<OptionList>,
		empty_text: impl Into<String>,
	) -> Select {
		Select::new(name, value)
			.with_options(options)
			.with_empty_text(empty_text)
	}

	pub fn checkbox(
		&self,
		name: impl Into<String>,
		value: impl Into<FieldValue>,
		options: impl Into<OptionList>,
	) -> Checkbox {
		Checkbox::new(name, value).with_options(options)
	}

	pub fn radio(
		&self,
		name: impl Into<String>,
		value: impl Into<FieldValue>,
		options: impl Into<OptionList>,
	) -> Radio {
		Radio::new(name, value).with_options(options)
	}

	pub fn dynamic(
		&self,
		name: impl Into<String>,
		value: impl Into<FieldValue>,
		button_text: impl Into<String>,
	) -> Dynamic {
		Dynamic::new(name, value).with_button_text(button_text)
	}

	pub fn captcha(&self, public_key: impl Into<String>) -> Captcha {
		Captcha::new(public_key)
	}

	pub fn fieldset(&self, slug: impl Into<String>) -> Fieldset {
		Fieldset::new(slug)
	}

	pub fn render(&self, field: &dyn FormField) -> String {
		field.render(&self.context())
	}

	/// Render a field inside a group with an optional label and description
	///
	/// # Examples
	///
	/// ```
	/// use formwright_forms::{Form, FormField};
	///
	/// let form = Form::new();
	/// let mut email = form.input("email", "", "email");
	/// let mut label = form.label("Email");
	///
	/// let html = form.group(&mut email, Some(&mut label), "");
	/// assert!(html.contains(r#"<label for="field-email">Email</label>"#));
	/// assert_eq!(email.attribute("id"), "field-email");
	/// ```
	pub fn group(
		&self,
		field: &mut dyn FormField,
		label: Option<&mut Label>,
		description: &str,
	) -> String {
		let mut group = Group::new(field).description(description);
		if let Some(label) = label {
			group = group.label(label);
		}
		self.group_with(group)
	}

	/// Render a preconfigured group, e.g. one with custom classes
	pub fn group_with(&self, group: Group<'_>) -> String {
		group.render(&self.context())
	}

	/// Render a fieldset with its legend, description and grouped fields
	pub fn render_fieldset(&self, fieldset: &mut Fieldset) -> String {
		tracing::debug!(slug = %fieldset.slug(), fields = fieldset.fields().len(), "rendering fieldset");

		let mut html = format!(
			r#"<fieldset id="fieldset-{}">"#,
			escape_html_attr(&slugify(fieldset.slug()))
		);
		if !fieldset.title().is_empty() {
			html.push_str(&format!("<legend>{}</legend>", escape_html(fieldset.title())));
		}
		if !fieldset.description().is_empty() {
			html.push_str(&format!(
				r#"<p class="description">{}</p>"#,
				escape_html(fieldset.description())
			));
		}
		for field in fieldset.fields_mut() {
			let description = field.description().unwrap_or_default().to_string();
			html.push_str(&self.group_with(Group::new(field.as_mut()).description(description)));
		}
		html.push_str("</fieldset>");
		html
	}
}

impl Default for Form {
	fn default() -> Self {
		Self::new()
	}
}

impl std::fmt::Debug for Form {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Form").field("settings", &self.settings).finish_non_exhaustive()
	}
}

/// Builder for [`Form`]
#[derive(Default)]
pub struct FormBuilder {
	settings: Option<FormSettings>,
	host: Option<Arc<dyn FormHost>>,
	ids: Option<Arc<dyn IdGenerator>>,
}

impl FormBuilder {
	pub fn settings(mut self, settings: FormSettings) -> Self {
		self.settings = Some(settings);
		self
	}

	pub fn host(mut self, host: impl FormHost + 'static) -> Self {
		self.host = Some(Arc::new(host));
		self
	}

	/// Share a host between several forms
	pub fn shared_host(mut self, host: Arc<dyn FormHost>) -> Self {
		self.host = Some(host);
		self
	}

	pub fn id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
		self.ids = Some(Arc::new(ids));
		self
	}

	/// Build the form, validating its settings
	///
	/// # Examples
	///
	/// ```
	/// use formwright_core::SequentialIdGenerator;
	/// use formwright_forms::{Form, FormField, FormSettings};
	///
	/// let form = Form::builder()
	///     .settings(FormSettings::from_toml_str(r#"id_prefix = "id_""#)?)
	///     .id_generator(SequentialIdGenerator::new("label"))
	///     .build()?;
	///
	/// assert_eq!(form.label("Name").name(), "label-1");
	/// # Ok::<(), formwright_forms::SettingsError>(())
	/// ```
	pub fn build(self) -> SettingsResult<Form> {
		let settings = self.settings.unwrap_or_default();
		settings.validate()?;
		Ok(Form {
			settings,
			host: self.host.unwrap_or_else(|| Arc::new(NoopHost)),
			ids: self.ids.unwrap_or_else(|| Arc::new(RandomIdGenerator)),
		})
	}
}
