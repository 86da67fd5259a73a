//! Titled collections of fields

use crate::field::FormField;

/// A named, titled and described group of fields rendered as one `<fieldset>`
///
/// # Examples
///
/// ```
/// use formwright_forms::{Fieldset, Input};
///
/// let fieldset = Fieldset::new("contact")
///     .with_title("Contact")
///     .add_field(Input::new("email", "", "email"))
///     .add_field(Input::new("phone", "", "tel"));
///
/// assert_eq!(fieldset.slug(), "contact");
/// assert_eq!(fieldset.fields().len(), 2);
/// ```
#[derive(Default)]
pub struct Fieldset {
	slug: String,
	title: String,
	description: String,
	fields: Vec<Box<dyn FormField>>,
}

impl Fieldset {
	pub fn new(slug: impl Into<String>) -> Self {
		Self {
			slug: slug.into(),
			..Self::default()
		}
	}

	pub fn slug(&self) -> &str {
		&self.slug
	}

	pub fn title(&self) -> &str {
		&self.title
	}

	pub fn description(&self) -> &str {
		&self.description
	}

	pub fn fields(&self) -> &[Box<dyn FormField>] {
		&self.fields
	}

	pub fn fields_mut(&mut self) -> &mut [Box<dyn FormField>] {
		&mut self.fields
	}

	pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
		self.slug = slug.into();
		self
	}

	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}

	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = description.into();
		self
	}

	/// Replace all fields
	pub fn with_fields(mut self, fields: Vec<Box<dyn FormField>>) -> Self {
		self.fields = fields;
		self
	}

	/// Append one field
	pub fn add_field(mut self, field: impl FormField + 'static) -> Self {
		self.fields.push(Box::new(field));
		self
	}

	/// Append an already boxed field
	pub fn push(&mut self, field: Box<dyn FormField>) {
		self.fields.push(field);
	}
}

impl std::fmt::Debug for Fieldset {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Fieldset")
			.field("slug", &self.slug)
			.field("title", &self.title)
			.field("description", &self.description)
			.field(
				"fields",
				&self.fields.iter().map(|field| field.name()).collect::<Vec<_>>(),
			)
			.finish()
	}
}
