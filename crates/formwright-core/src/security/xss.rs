//! XSS prevention utilities
//!
//! Two output contexts matter to form rendering: values placed inside a
//! quoted attribute ([`escape_html_attr`]) and text placed in an element
//! body. Body text is either fully escaped ([`escape_html`]) or, where a
//! caller is allowed to supply light markup (option labels, button and
//! label captions), filtered through [`sanitize_rich_text`].

use regex::Regex;
use std::sync::OnceLock;

/// Escape HTML special characters
///
/// # Examples
///
/// ```
/// use formwright_core::security::escape_html;
///
/// let input = "<script>alert('XSS')</script>";
/// let escaped = escape_html(input);
/// assert_eq!(escaped, "&lt;script&gt;alert(&#x27;XSS&#x27;)&lt;/script&gt;");
///
/// assert_eq!(escape_html("5 < 10 & 10 > 5"), "5 &lt; 10 &amp; 10 &gt; 5");
/// ```
pub fn escape_html(input: &str) -> String {
	let mut result = String::with_capacity(input.len() + 10);
	for ch in input.chars() {
		match ch {
			'&' => result.push_str("&amp;"),
			'<' => result.push_str("&lt;"),
			'>' => result.push_str("&gt;"),
			'"' => result.push_str("&quot;"),
			'\'' => result.push_str("&#x27;"),
			_ => result.push(ch),
		}
	}
	result
}

/// Escape HTML attributes
///
/// # Examples
///
/// ```
/// use formwright_core::security::xss::escape_html_attr;
///
/// let attr = r#"value" onload="alert('xss')"#;
/// let escaped = escape_html_attr(attr);
/// // The onload itself remains, but the quotes are escaped to neutralize it
/// assert!(escaped.contains("&quot;"));
/// assert!(escaped.contains("&#x27;"));
/// assert_eq!(escape_html_attr("line\nbreak"), "line&#10;break");
/// ```
pub fn escape_html_attr(input: &str) -> String {
	let mut result = String::with_capacity(input.len() + 10);
	for ch in input.chars() {
		match ch {
			'&' => result.push_str("&amp;"),
			'<' => result.push_str("&lt;"),
			'>' => result.push_str("&gt;"),
			'"' => result.push_str("&quot;"),
			'\'' => result.push_str("&#x27;"),
			'\n' => result.push_str("&#10;"),
			'\r' => result.push_str("&#13;"),
			'\t' => result.push_str("&#9;"),
			_ => result.push(ch),
		}
	}
	result
}

/// Validate URLs and allow only safe protocols
///
/// Allows relative paths (`/path`, `./path`), anchor links (`#section`),
/// and safe protocols (`http://`, `https://`, `mailto:`, `ftp://`, `ftps://`).
///
/// Rejects dangerous protocols (`javascript:`, `data:`, `vbscript:`) and
/// path traversal prefixes (`../`).
///
/// # Examples
///
/// ```
/// use formwright_core::security::xss::is_safe_url;
///
/// assert!(is_safe_url("https://example.com"));
/// assert!(is_safe_url("/path/to/page"));
/// assert!(is_safe_url("mailto:user@example.com"));
/// assert!(!is_safe_url("javascript:alert(1)"));
/// assert!(!is_safe_url("data:text/html,<script>alert(1)</script>"));
/// assert!(!is_safe_url("../parent/path"));
/// ```
pub fn is_safe_url(url: &str) -> bool {
	let url = url.trim();
	let url_lower = url.to_lowercase();

	// Allow relative URLs and anchor links (but NOT parent traversal)
	if url.starts_with('/') || url.starts_with("./") || url.starts_with('#') {
		return true;
	}

	let safe_protocols = ["http://", "https://", "mailto:", "ftp://", "ftps://"];

	safe_protocols
		.iter()
		.any(|protocol| url_lower.starts_with(protocol))
}

/// Strip HTML tags with proper handling of malformed HTML
///
/// Handles `>` inside quoted attributes, unclosed tags at end of input,
/// HTML comments and self-closing tags.
///
/// # Examples
///
/// ```
/// use formwright_core::security::xss::strip_tags_safe;
///
/// assert_eq!(strip_tags_safe("<p>Hello <b>World</b></p>"), "Hello World");
/// assert_eq!(strip_tags_safe(r#"<a title="x>y">Link</a>"#), "Link");
/// assert_eq!(strip_tags_safe("Hello<!-- comment -->World"), "HelloWorld");
/// assert_eq!(strip_tags_safe("Hello<br"), "Hello");
/// ```
pub fn strip_tags_safe(html: &str) -> String {
	let mut result = String::with_capacity(html.len());
	let chars: Vec<char> = html.chars().collect();
	let mut i = 0;

	while i < chars.len() {
		if chars[i] != '<' {
			result.push(chars[i]);
			i += 1;
			continue;
		}
		match scan_markup(&chars, i) {
			Markup::Comment(end) | Markup::Tag(end) => i = end,
			Markup::Unterminated => break,
		}
	}
	result
}

/// Tags kept by [`sanitize_rich_text`]
const ALLOWED_TAGS: &[&str] = &[
	"a", "b", "br", "code", "div", "em", "i", "li", "ol", "p", "small", "span", "strong", "u", "ul",
];

/// Filter caller-supplied markup down to a small, script-free subset
///
/// Allowed tags keep only `class` (everywhere) and `href`, `title`,
/// `target` on anchors; an `href` that fails [`is_safe_url`] is dropped.
/// Any other tag, comments and stray angle brackets are escaped so they
/// render as text. Existing character references in text are preserved.
///
/// # Examples
///
/// ```
/// use formwright_core::security::sanitize_rich_text;
///
/// assert_eq!(sanitize_rich_text("Option <strong>1</strong>"), "Option <strong>1</strong>");
/// assert_eq!(
///     sanitize_rich_text("<script>alert(1)</script>"),
///     "&lt;script&gt;alert(1)&lt;/script&gt;"
/// );
/// assert_eq!(
///     sanitize_rich_text(r#"<a href="javascript:alert(1)" onclick="x()">go</a>"#),
///     "<a>go</a>"
/// );
/// assert_eq!(sanitize_rich_text("Fish &amp; Chips"), "Fish &amp; Chips");
/// ```
pub fn sanitize_rich_text(input: &str) -> String {
	let chars: Vec<char> = input.chars().collect();
	let mut result = String::with_capacity(input.len());
	let mut text = String::new();
	let mut i = 0;

	while i < chars.len() {
		if chars[i] != '<' {
			text.push(chars[i]);
			i += 1;
			continue;
		}
		match scan_markup(&chars, i) {
			Markup::Tag(end) => {
				let raw: String = chars[i..end].iter().collect();
				match rebuild_allowed_tag(&raw) {
					Some(tag) => {
						result.push_str(&escape_text(&text));
						text.clear();
						result.push_str(&tag);
					}
					None => text.push_str(&raw),
				}
				i = end;
			}
			Markup::Comment(end) => {
				text.extend(&chars[i..end]);
				i = end;
			}
			Markup::Unterminated => {
				text.extend(&chars[i..]);
				break;
			}
		}
	}
	result.push_str(&escape_text(&text));
	result
}

enum Markup {
	/// A tag ending just before the given index
	Tag(usize),
	/// A comment ending just before the given index
	Comment(usize),
	Unterminated,
}

/// Locate the end of the tag or comment opening at `start`.
fn scan_markup(chars: &[char], start: usize) -> Markup {
	let len = chars.len();
	if start + 3 < len && chars[start + 1] == '!' && chars[start + 2] == '-' && chars[start + 3] == '-'
	{
		let mut i = start + 4;
		while i + 2 < len {
			if chars[i] == '-' && chars[i + 1] == '-' && chars[i + 2] == '>' {
				return Markup::Comment(i + 3);
			}
			i += 1;
		}
		return Markup::Unterminated;
	}

	let mut i = start + 1;
	let mut in_single_quote = false;
	let mut in_double_quote = false;
	while i < len {
		match chars[i] {
			'"' if !in_single_quote => in_double_quote = !in_double_quote,
			'\'' if !in_double_quote => in_single_quote = !in_single_quote,
			'>' if !in_single_quote && !in_double_quote => return Markup::Tag(i + 1),
			_ => {}
		}
		i += 1;
	}
	Markup::Unterminated
}

static TAG_PATTERN: OnceLock<Regex> = OnceLock::new();
static ATTR_PATTERN: OnceLock<Regex> = OnceLock::new();
static ENTITY_PATTERN: OnceLock<Regex> = OnceLock::new();

fn tag_pattern() -> &'static Regex {
	TAG_PATTERN.get_or_init(|| {
		Regex::new(r"^<\s*(/)?\s*([A-Za-z][A-Za-z0-9]*)((?s).*?)(/)?\s*>$").unwrap()
	})
}

fn attr_pattern() -> &'static Regex {
	ATTR_PATTERN.get_or_init(|| {
		Regex::new(r#"([A-Za-z_:][-A-Za-z0-9_:.]*)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#)
			.unwrap()
	})
}

fn entity_pattern() -> &'static Regex {
	ENTITY_PATTERN
		.get_or_init(|| Regex::new(r"^&(?:#[0-9]{1,7}|#[xX][0-9A-Fa-f]{1,6}|[A-Za-z][A-Za-z0-9]{1,31});").unwrap())
}

fn allowed_attribute(tag: &str, attr: &str) -> bool {
	match attr {
		"class" => true,
		"href" | "title" | "target" => tag == "a",
		_ => false,
	}
}

/// Re-emit a tag from the allow-list with only its permitted attributes.
fn rebuild_allowed_tag(raw: &str) -> Option<String> {
	let captures = tag_pattern().captures(raw)?;
	let name = captures.get(2)?.as_str().to_lowercase();
	if !ALLOWED_TAGS.contains(&name.as_str()) {
		return None;
	}
	if captures.get(1).is_some() {
		return Some(format!("</{}>", name));
	}

	let mut tag = format!("<{}", name);
	let attrs = captures.get(3).map(|m| m.as_str()).unwrap_or_default();
	for attr in attr_pattern().captures_iter(attrs) {
		let key = attr[1].to_lowercase();
		if !allowed_attribute(&name, &key) {
			continue;
		}
		let value = attr
			.get(2)
			.or_else(|| attr.get(3))
			.or_else(|| attr.get(4))
			.map(|m| m.as_str())
			.unwrap_or_default();
		if key == "href" && !is_safe_url(value) {
			continue;
		}
		tag.push_str(&format!(r#" {}="{}""#, key, escape_text(value).replace('"', "&quot;")));
	}
	if captures.get(4).is_some() {
		tag.push_str(" /");
	}
	tag.push('>');
	Some(tag)
}

/// Escape text for an element body, keeping well-formed character references.
fn escape_text(text: &str) -> String {
	let mut result = String::with_capacity(text.len());
	for (index, ch) in text.char_indices() {
		match ch {
			'&' if entity_pattern().is_match(&text[index..]) => result.push('&'),
			'&' => result.push_str("&amp;"),
			'<' => result.push_str("&lt;"),
			'>' => result.push_str("&gt;"),
			_ => result.push(ch),
		}
	}
	result
}
