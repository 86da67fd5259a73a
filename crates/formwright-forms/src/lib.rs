//! Server-side HTML form building
//!
//! This crate provides:
//! - Field types for text inputs, textareas, buttons, labels, selects,
//!   checkbox and radio groups, repeatable dynamic lists and captchas
//! - Host-delegated widgets (rich-text editor, page and taxonomy pickers)
//! - A group renderer composing label, field and description
//! - Fieldsets and the [`Form`] facade tying settings, host and ids together
//!
//! Rendering never fails: a value of the wrong shape renders as empty.
//!
//! # Examples
//!
//! ```
//! use formwright_forms::{Form, FormField};
//!
//! let form = Form::new();
//! let mut html = form.start("/subscribe", "post", [("class", "newsletter")]);
//! let mut email = form.input("email", "", "email").with_attribute("required", "required");
//! html.push_str(&form.group(&mut email, None, "We never share it"));
//! html.push_str(&form.end(""));
//!
//! assert!(html.starts_with(r#"<form action="/subscribe" method="post" class="newsletter">"#));
//! assert!(html.contains(r#"id="field-email""#));
//! assert!(html.ends_with("</form>"));
//! ```

pub mod attributes;
pub mod choice;
pub mod field;
pub mod fields;
pub mod fieldset;
pub mod form;
pub mod group;
pub mod host;
pub mod settings;
pub mod value;

pub use attributes::AttributeMap;
pub use choice::{FieldOption, OptionList};
pub use field::{FieldBase, FormField, RenderContext};
pub use fields::{
	Button, Captcha, Checkbox, Dynamic, Editor, Input, Label, Pages, Radio, Select, Taxonomy,
	Textarea,
};
pub use fieldset::Fieldset;
pub use form::{Form, FormBuilder};
pub use group::Group;
pub use host::{FormHost, HostSettings, NoopHost};
pub use settings::{FormSettings, SettingsError, SettingsResult};
pub use value::FieldValue;
