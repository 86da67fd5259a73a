//! Text helpers for class names, element ids and slugs

use crate::security::strip_tags_safe;
use regex::Regex;
use std::sync::OnceLock;

static PERCENT_ENCODED: OnceLock<Regex> = OnceLock::new();
static CLASS_UNSAFE: OnceLock<Regex> = OnceLock::new();

/// Sanitize an HTML class name (or id fragment)
///
/// Percent-encoded octets are removed first, then every character outside
/// `A-Z`, `a-z`, `0-9`, `_` and `-`.
///
/// # Examples
///
/// ```
/// use formwright_core::text::sanitize_class;
///
/// assert_eq!(sanitize_class("form control"), "formcontrol");
/// assert_eq!(sanitize_class("user[email]"), "useremail");
/// assert_eq!(sanitize_class("a%20b"), "ab");
/// ```
pub fn sanitize_class(input: &str) -> String {
	let percent = PERCENT_ENCODED.get_or_init(|| Regex::new(r"%[a-fA-F0-9]{2}").unwrap());
	let unsafe_chars = CLASS_UNSAFE.get_or_init(|| Regex::new(r"[^A-Za-z0-9_-]").unwrap());

	let stripped = percent.replace_all(input, "");
	unsafe_chars.replace_all(&stripped, "").into_owned()
}

/// Derive a deterministic element id from a field name
///
/// # Examples
///
/// ```
/// use formwright_core::text::derive_id;
///
/// assert_eq!(derive_id("field-", "email"), "field-email");
/// assert_eq!(derive_id("field-", "Billing Address[]"), "field-billingaddress");
/// ```
pub fn derive_id(prefix: &str, name: &str) -> String {
	format!("{}{}", prefix, sanitize_class(&name.to_lowercase()))
}

/// Convert a title or field name into a lowercase, hyphenated slug
///
/// # Examples
///
/// ```
/// use formwright_core::text::slugify;
///
/// assert_eq!(slugify("Post Content"), "post-content");
/// assert_eq!(slugify("meta[body_text]"), "metabody-text");
/// assert_eq!(slugify("  <b>Hello</b>, World!  "), "hello-world");
/// ```
pub fn slugify(input: &str) -> String {
	let plain = strip_tags_safe(input).to_lowercase();
	let mut slug = String::with_capacity(plain.len());
	let mut pending_separator = false;

	for ch in plain.chars() {
		if ch.is_alphanumeric() {
			if pending_separator && !slug.is_empty() {
				slug.push('-');
			}
			pending_separator = false;
			slug.push(ch);
		} else if ch.is_whitespace() || ch == '-' || ch == '_' {
			pending_separator = true;
		}
	}
	slug
}
