//! Rendering settings
//!
//! Markup constants (wrapper classes, id prefix, default row counts, number
//! bounds) live here rather than in the renderers so a site can restyle its
//! forms from a TOML or JSON file.
//!
//! ```toml
//! group_class = "mb-3"
//! field_class = "form-control"
//! textarea_rows = 6
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Error type for settings loading and validation
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	#[error("Unsupported settings format: {0}")]
	UnsupportedFormat(String),

	#[error("Invalid setting: {0}")]
	Invalid(String),
}

pub type SettingsResult<T> = Result<T, SettingsError>;

/// Settings consulted while rendering fields and groups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSettings {
	/// Class of the container emitted by the group renderer
	pub group_class: String,
	/// Base class prepended to a grouped field's own classes
	pub field_class: String,
	/// Class of the `<small>` description under a grouped field
	pub description_class: String,
	/// Prefix of ids derived from field names
	pub id_prefix: String,
	/// `rows` given to textareas that do not set one
	pub textarea_rows: u32,
	/// Row count handed to the host editor widget
	pub editor_rows: u32,
	pub number_min: i64,
	pub number_max: i64,
	pub number_step: i64,
	/// Name of the CSRF token field emitted by `Form::end`
	pub nonce_field: String,
	/// Method used by `Form::start` when the caller passes an empty one
	pub form_method: String,
}

impl Default for FormSettings {
	fn default() -> Self {
		Self {
			group_class: "form-group".to_string(),
			field_class: "form-control".to_string(),
			description_class: "form-text text-muted".to_string(),
			id_prefix: "field-".to_string(),
			textarea_rows: 4,
			editor_rows: 10,
			number_min: 0,
			number_max: 10000,
			number_step: 1,
			nonce_field: "_wpnonce".to_string(),
			form_method: "post".to_string(),
		}
	}
}

impl FormSettings {
	/// Parse settings from TOML; missing keys keep their defaults
	///
	/// # Examples
	///
	/// ```
	/// use formwright_forms::FormSettings;
	///
	/// let settings = FormSettings::from_toml_str("textarea_rows = 8").unwrap();
	/// assert_eq!(settings.textarea_rows, 8);
	/// assert_eq!(settings.group_class, "form-group");
	/// ```
	pub fn from_toml_str(input: &str) -> SettingsResult<Self> {
		let settings: FormSettings = toml::from_str(input)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Parse settings from JSON; missing keys keep their defaults
	pub fn from_json_str(input: &str) -> SettingsResult<Self> {
		let settings: FormSettings = serde_json::from_str(input)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Load settings from a `.toml` or `.json` file
	pub fn from_file(path: impl AsRef<Path>) -> SettingsResult<Self> {
		let path = path.as_ref();
		let extension = path
			.extension()
			.and_then(|ext| ext.to_str())
			.map(str::to_lowercase)
			.unwrap_or_default();

		match extension.as_str() {
			"toml" => Self::from_toml_str(&fs::read_to_string(path)?),
			"json" => Self::from_json_str(&fs::read_to_string(path)?),
			_ => Err(SettingsError::UnsupportedFormat(path.display().to_string())),
		}
	}

	/// Reject settings that would produce broken markup
	pub fn validate(&self) -> SettingsResult<()> {
		if self.group_class.trim().is_empty() {
			return Err(SettingsError::Invalid("group_class must not be empty".to_string()));
		}
		if self.field_class.trim().is_empty() {
			return Err(SettingsError::Invalid("field_class must not be empty".to_string()));
		}
		if self.textarea_rows == 0 || self.editor_rows == 0 {
			return Err(SettingsError::Invalid(
				"textarea_rows and editor_rows must be positive".to_string(),
			));
		}
		if self.number_step == 0 {
			return Err(SettingsError::Invalid("number_step must not be zero".to_string()));
		}
		if self.number_min > self.number_max {
			return Err(SettingsError::Invalid(format!(
				"number_min ({}) exceeds number_max ({})",
				self.number_min, self.number_max
			)));
		}
		Ok(())
	}
}
