//! Output escaping used by every field renderer

pub mod xss;

pub use xss::{escape_html, escape_html_attr, is_safe_url, sanitize_rich_text, strip_tags_safe};
