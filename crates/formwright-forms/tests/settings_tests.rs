//! Settings loading tests

use formwright_forms::{Form, FormField, FormSettings, SettingsError};
use rstest::rstest;
use std::fs;

#[rstest]
fn test_toml_file_restyles_groups() -> anyhow::Result<()> {
	// Arrange
	let dir = tempfile::tempdir()?;
	let path = dir.path().join("forms.toml");
	fs::write(
		&path,
		"group_class = \"field\"\nfield_class = \"input is-small\"\nid_prefix = \"f_\"\n",
	)?;
	let form = Form::builder().settings(FormSettings::from_file(&path)?).build()?;
	let mut field = form.text("City", "Oslo");

	// Act
	let html = form.group(&mut field, None, "");

	// Assert
	assert_eq!(
		html,
		r#"<div class="field"><input type="text" name="City" value="Oslo" id="f_city" class="input is-small"/></div>"#
	);
	Ok(())
}

#[rstest]
fn test_json_file_round_trips_through_serde() -> anyhow::Result<()> {
	// Arrange
	let dir = tempfile::tempdir()?;
	let path = dir.path().join("forms.JSON");
	let settings = FormSettings {
		editor_rows: 25,
		..FormSettings::default()
	};
	fs::write(&path, serde_json::to_string_pretty(&settings)?)?;

	// Act
	let loaded = FormSettings::from_file(&path)?;

	// Assert
	assert_eq!(loaded, settings);
	Ok(())
}

#[rstest]
fn test_unknown_type_in_json_is_a_parse_error() {
	let result = FormSettings::from_json_str(r#"{"textarea_rows": "many"}"#);

	assert!(matches!(result, Err(SettingsError::Json(_))));
}

#[rstest]
fn test_error_messages_name_the_problem() {
	let error = FormSettings::from_toml_str("number_min = 5\nnumber_max = 1").unwrap_err();

	assert_eq!(error.to_string(), "Invalid setting: number_min (5) exceeds number_max (1)");
}

#[rstest]
fn test_number_bounds_come_from_settings() -> anyhow::Result<()> {
	let settings = FormSettings::from_toml_str("number_min = -5\nnumber_max = 5\nnumber_step = 2")?;
	let form = Form::builder().settings(settings).build()?;

	let field = form.number("offset", -1);

	assert_eq!(field.attribute("min"), "-5");
	assert_eq!(field.attribute("step"), "2");
	assert_eq!(
		form.render(&field),
		r#"<input type="number" name="offset" value="-1" min="-5" max="5" step="2"/>"#
	);
	Ok(())
}

#[rstest]
fn test_multi_word_field_class_renders_identically_twice() -> anyhow::Result<()> {
	// Arrange
	let settings = FormSettings::from_toml_str(r#"field_class = "input is-small""#)?;
	let form = Form::builder().settings(settings).build()?;
	let mut field = form.text("City", "Oslo").with_attribute("class", "wide");

	// Act
	let first = form.group(&mut field, None, "");
	let second = form.group(&mut field, None, "");

	// Assert
	assert_eq!(first, second);
	assert_eq!(field.attribute("class"), "input is-small wide");
	Ok(())
}
