//! # Formwright
//!
//! Server-side HTML form building for content-management sites.
//!
//! Formwright renders form controls as markup strings: text inputs,
//! selects, checkbox and radio groups, repeatable dynamic lists, labelled
//! groups and fieldsets. Widgets that only the host application can draw
//! (CSRF fields, the rich-text editor, page and taxonomy pickers) are
//! delegated through the [`FormHost`](forms::FormHost) trait.
//!
//! ## Crates
//!
//! - [`core`]: HTML escaping and sanitizing, id and slug helpers, and
//!   identifier generators
//! - [`forms`]: attribute maps, field types, the group renderer, settings
//!   and the [`Form`](forms::Form) facade
//!
//! ## Quick Example
//!
//! ```
//! use formwright::prelude::*;
//!
//! let form = Form::builder()
//!     .id_generator(SequentialIdGenerator::new("label"))
//!     .build()
//!     .unwrap();
//!
//! let mut colour = form.radio("colour", "red", [("red", "Red"), ("blue", "Blue")]);
//! let mut label = form.label("Favourite colour");
//!
//! let html = form.group(&mut colour, Some(&mut label), "Pick one");
//! assert!(html.contains(r#"<label for="field-colour-red">Favourite colour</label>"#));
//! assert!(html.contains(r#"name="colour[]" checked"#));
//! ```

pub use formwright_core as core;
pub use formwright_forms as forms;

/// Re-exports of the common building blocks
pub mod prelude {
	pub use formwright_core::{IdGenerator, RandomIdGenerator, SequentialIdGenerator};
	pub use formwright_forms::{
		AttributeMap, Button, Captcha, Checkbox, Dynamic, Editor, FieldOption, FieldValue,
		Fieldset, Form, FormBuilder, FormField, FormHost, FormSettings, Group, HostSettings, Input,
		Label, NoopHost, OptionList, Pages, Radio, RenderContext, Select, SettingsError, Taxonomy,
		Textarea,
	};
}
