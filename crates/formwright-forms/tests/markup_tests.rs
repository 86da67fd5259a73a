//! Golden markup tests
//!
//! Every field type rendered through the `Form` facade and compared
//! against its full expected markup.

use formwright_core::SequentialIdGenerator;
use formwright_forms::{FieldOption, Form, FormField, OptionList};
use rstest::{fixture, rstest};

#[fixture]
fn form() -> Form {
	Form::builder()
		.id_generator(SequentialIdGenerator::new("label"))
		.build()
		.unwrap()
}

fn two_options() -> OptionList {
	OptionList::new()
		.push("1", "Option 1")
		.push("2", FieldOption::rich("Option 2").with_extra("extra", "3"))
}

#[rstest]
fn test_form_start(form: Form) {
	assert_eq!(
		form.start("test", "get", [("class", "test-class")]),
		r#"<form action="test" method="get" class="test-class">"#
	);
}

#[rstest]
fn test_label(form: Form) {
	let label = form.label("Test Label").with_attributes([("class", "test-class")]);

	assert_eq!(form.render(&label), r#"<label class="test-class">Test Label</label>"#);
}

#[rstest]
fn test_button(form: Form) {
	let button = form
		.button("submit", "Test Label", "dosubmit", "button")
		.with_attributes([("class", "test-class")]);

	assert_eq!(
		form.render(&button),
		r#"<button type="button" name="submit" value="dosubmit" class="test-class">Test Label</button>"#
	);
}

#[rstest]
#[case("text", r#"<input type="text" name="testname" value="testvalue" class="test-class"/>"#)]
#[case("email", r#"<input type="email" name="testname" value="testvalue" class="test-class"/>"#)]
#[case("hidden", r#"<input type="hidden" name="testname" value="testvalue" class="test-class"/>"#)]
fn test_input_types(form: Form, #[case] input_type: &str, #[case] expected: &str) {
	// Arrange
	let field = form
		.input("testname", "testvalue", input_type)
		.with_attributes([("class", "test-class")]);

	// Act
	let html = form.render(&field);

	// Assert
	assert_eq!(html, expected);
}

#[rstest]
fn test_attribute_overwrite_keeps_first_position(form: Form) {
	// Arrange
	let field = form
		.text("testname", "testvalue")
		.with_attribute("class", "test-class")
		.with_attribute("id", "test-id")
		.with_attribute("disabled", "1")
		.with_attribute("class", "other-class");

	// Act
	let html = form.render(&field);

	// Assert
	assert_eq!(
		html,
		r#"<input type="text" name="testname" value="testvalue" class="other-class" id="test-id" disabled="1"/>"#
	);
}

#[rstest]
fn test_textarea(form: Form) {
	let field = form
		.textarea("testname", "testvalue")
		.with_attributes([("class", "test-class")]);

	insta::assert_snapshot!(
		form.render(&field),
		@r#"<textarea name="testname" class="test-class" rows="4">testvalue</textarea>"#
	);
}

#[rstest]
fn test_select(form: Form) {
	let field = form
		.select("test", "1", [("1", "Option 1")], "Select")
		.with_attributes([("class", "test-class")]);

	insta::assert_snapshot!(
		form.render(&field),
		@r#"<select name="test" class="test-class"><option value="">Select</option><option selected value="1">Option 1</option></select>"#
	);
}

#[rstest]
fn test_select_multiple(form: Form) {
	let field = form
		.select("test", vec!["1", "2"], two_options(), "Select")
		.with_attributes([("multiple", "multiple")]);

	assert_eq!(
		form.render(&field),
		concat!(
			r#"<select name="test" multiple="multiple"><option value="">Select</option>"#,
			r#"<option selected value="1">Option 1</option>"#,
			r#"<option selected data-extra="3" value="2">Option 2</option></select>"#,
		)
	);
}

#[rstest]
fn test_checkbox_multiple(form: Form) {
	let field = form.checkbox("test", vec!["1", "2"], two_options());

	assert_eq!(
		form.render(&field),
		concat!(
			r#"<label class="form-check-label form-checkbox"><input type="checkbox" name="test[]" checked value="1"/>"#,
			r#"Option 1<span class="form-check-icon checked"></span></label>"#,
			r#"<label class="form-check-label form-checkbox"><input type="checkbox" name="test[]" checked data-extra="3" value="2"/>"#,
			r#"Option 2<span class="form-check-icon checked"></span></label>"#,
		)
	);
}

#[rstest]
fn test_radio_single_option(form: Form) {
	let field = form
		.radio("test", "1", [("1", "Option 1")])
		.with_attributes([("class", "test-class"), ("id", "test-id")]);

	insta::assert_snapshot!(
		form.render(&field),
		@r#"<label class="form-check-label form-radio"><input type="radio" name="test" checked class="test-class" id="test-id-1" value="1"/>Option 1<span class="form-check-icon checked"></span></label>"#
	);
}

#[rstest]
fn test_radio_multiple_options_use_list_name(form: Form) {
	let field = form.radio("test", "2", two_options());

	let html = form.render(&field);

	assert_eq!(html.matches(r#"name="test[]""#).count(), 2);
	assert_eq!(html.matches(" checked ").count(), 1);
	assert!(html.contains(r#"checked data-extra="3" value="2""#));
}

#[rstest]
fn test_captcha(form: Form) {
	assert_eq!(
		form.render(&form.captcha("6Lc-public")),
		r#"<div class="g-recaptcha" data-sitekey="6Lc-public"></div>"#
	);
}

#[rstest]
fn test_group(form: Form) {
	// Arrange
	let mut field = form.input("testname", "testvalue", "text");
	let mut label = form.label("Test Label");

	// Act
	let html = form.group(&mut field, Some(&mut label), "This field is mandatory");

	// Assert
	assert_eq!(
		html,
		concat!(
			r#"<div class="form-group"><label for="field-testname">Test Label</label>"#,
			r#"<input type="text" name="testname" value="testvalue" id="field-testname" class="form-control"/>"#,
			r#"<small class="form-text text-muted">This field is mandatory</small></div>"#,
		)
	);
}

#[rstest]
fn test_group_prefixes_existing_class(form: Form) {
	let mut field = form.text("email", "").with_attribute("class", "test-class");

	let html = form.group(&mut field, None, "");

	assert_eq!(
		html,
		r#"<div class="form-group"><input type="text" name="email" value="" class="form-control test-class" id="field-email"/></div>"#
	);
}

#[rstest]
fn test_rendering_is_idempotent(form: Form) {
	// Arrange
	let fields: Vec<Box<dyn FormField>> = vec![
		Box::new(form.select("s", vec!["1"], two_options(), "Pick")),
		Box::new(form.checkbox("c", "2", two_options()).with_attribute("id", "c")),
		Box::new(form.dynamic("d", vec!["a", "b"], "Add").with_attribute("id", "d")),
		Box::new(form.textarea("t", "body")),
	];

	for field in &fields {
		// Act
		let first = form.render(field.as_ref());
		let second = form.render(field.as_ref());

		// Assert
		assert_eq!(first, second, "{} rendered differently", field.name());
	}
}

#[rstest]
fn test_custom_settings_flow_into_markup() {
	// Arrange
	let settings = formwright_forms::FormSettings::from_toml_str(
		r#"
group_class = "mb-3"
field_class = "input"
description_class = "help"
id_prefix = "id_"
textarea_rows = 7
"#,
	)
	.unwrap();
	let form = Form::builder().settings(settings).build().unwrap();
	let mut field = form.textarea("Bio", "");

	// Act
	let html = form.group(&mut field, None, "Tell us about yourself");

	// Assert
	assert_eq!(
		html,
		concat!(
			r#"<div class="mb-3"><textarea name="Bio" id="id_bio" class="input" rows="7"></textarea>"#,
			r#"<small class="help">Tell us about yourself</small></div>"#,
		)
	);
}
