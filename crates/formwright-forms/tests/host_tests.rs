//! Host-delegated field tests
//!
//! A recording host captures the settings each field hands over.

use formwright_forms::{Form, FormField, FormHost, HostSettings};
use rstest::{fixture, rstest};
use serde_json::json;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct RecordingHost {
	calls: Mutex<Vec<(String, HostSettings)>>,
}

impl RecordingHost {
	fn record(&self, widget: String, settings: &HostSettings) -> String {
		self.calls.lock().unwrap().push((widget.clone(), settings.clone()));
		format!("<{}/>", widget)
	}

	fn last(&self) -> (String, HostSettings) {
		self.calls.lock().unwrap().last().cloned().unwrap()
	}
}

impl FormHost for RecordingHost {
	fn csrf_field(&self, action: &str, field_name: &str) -> String {
		format!(r#"<input type="hidden" name="{}" value="nonce-{}"/>"#, field_name, action)
	}

	fn editor(&self, content: &str, editor_id: &str, settings: &HostSettings) -> String {
		self.record(format!("editor:{}:{}", editor_id, content), settings)
	}

	fn dropdown_pages(&self, settings: &HostSettings) -> String {
		self.record("pages".to_string(), settings)
	}

	fn dropdown_categories(&self, settings: &HostSettings) -> String {
		self.record("categories".to_string(), settings)
	}
}

#[fixture]
fn host() -> Arc<RecordingHost> {
	Arc::new(RecordingHost::default())
}

fn form_with(host: &Arc<RecordingHost>) -> Form {
	Form::builder().shared_host(host.clone()).build().unwrap()
}

fn keys(settings: &HostSettings) -> Vec<&str> {
	settings.keys().map(String::as_str).collect()
}

#[rstest]
fn test_editor_settings(host: Arc<RecordingHost>) {
	// Arrange
	let form = form_with(&host);
	let field = form
		.editor("Post Content", "<p>Hello</p><script>x()</script>")
		.with_attribute("media_buttons", "yes")
		.with_attribute("editor_class", "wide");

	// Act
	let html = form.render(&field);

	// Assert
	let (widget, settings) = host.last();
	assert_eq!(widget, "editor:post-content:<p>Hello</p>&lt;script&gt;x()&lt;/script&gt;");
	assert_eq!(html, format!("<{}/>", widget));
	assert_eq!(
		keys(&settings),
		["textarea_name", "textarea_rows", "media_buttons", "quicktags", "editor_class"]
	);
	assert_eq!(settings["textarea_name"], json!("Post Content"));
	assert_eq!(settings["textarea_rows"], json!(10));
	assert_eq!(settings["media_buttons"], json!(true));
	assert_eq!(settings["quicktags"], json!(false));
}

#[rstest]
#[case("7", 7)]
#[case("not a number", 0)]
fn test_pages_settings(host: Arc<RecordingHost>, #[case] value: &str, #[case] selected: i64) {
	// Arrange
	let form = form_with(&host);
	let field = form
		.pages("parent", 0, "<None>")
		.with_value(value)
		.with_attribute("depth", "2");

	// Act
	form.render(&field);

	// Assert
	let (_, settings) = host.last();
	assert_eq!(keys(&settings), ["selected", "name", "show_option_none", "depth"]);
	assert_eq!(settings["selected"], json!(selected));
	assert_eq!(settings["show_option_none"], json!("&lt;None&gt;"));
	assert_eq!(settings["depth"], json!("2"));
}

#[rstest]
fn test_taxonomy_settings_attributes_override(host: Arc<RecordingHost>) {
	// Arrange
	let form = form_with(&host);
	let field = form
		.taxonomy("genre", "book_genre", "fiction", "Any")
		.with_attribute("hide_empty", "1");

	// Act
	form.render(&field);

	// Assert
	let (widget, settings) = host.last();
	assert_eq!(widget, "categories");
	assert_eq!(
		keys(&settings),
		[
			"taxonomy",
			"name",
			"show_option_none",
			"option_none_value",
			"selected",
			"orderby",
			"hierarchical",
			"hide_empty",
			"value_field",
		]
	);
	assert_eq!(settings["taxonomy"], json!("genre"));
	assert_eq!(settings["selected"], json!("fiction"));
	assert_eq!(settings["hierarchical"], json!(1));
	assert_eq!(settings["hide_empty"], json!("1"));
}

#[rstest]
fn test_form_end_uses_configured_nonce_field(host: Arc<RecordingHost>) {
	// Arrange
	let settings = formwright_forms::FormSettings::from_json_str(r#"{"nonce_field": "_token"}"#).unwrap();
	let form = Form::builder()
		.settings(settings)
		.shared_host(host.clone())
		.build()
		.unwrap();

	// Act
	let html = form.end("save_profile");

	// Assert
	assert_eq!(
		html,
		concat!(
			r#"<input type="hidden" name="_token" value="nonce-save_profile"/>"#,
			r#"<input type="hidden" name="action" value="save_profile"/></form>"#,
		)
	);
}
