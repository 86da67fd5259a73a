//! reCAPTCHA placeholder field

use crate::field::{FieldBase, FormField, RenderContext, field_base};
use formwright_core::security::escape_html_attr;

/// Mount point for a reCAPTCHA widget; the site key is public
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captcha {
	base: FieldBase,
	public_key: String,
}

impl Captcha {
	pub fn new(public_key: impl Into<String>) -> Self {
		Self {
			base: FieldBase::new("captcha", "captcha", ""),
			public_key: public_key.into(),
		}
	}

	pub fn public_key(&self) -> &str {
		&self.public_key
	}

	pub fn with_public_key(mut self, public_key: impl Into<String>) -> Self {
		self.public_key = public_key.into();
		self
	}
}

impl FormField for Captcha {
	field_base!();

	fn render(&self, _ctx: &RenderContext<'_>) -> String {
		format!(
			r#"<div class="g-recaptcha" data-sitekey="{}"></div>"#,
			escape_html_attr(&self.public_key)
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_captcha_markup() {
		// Arrange
		let captcha = Captcha::new("site-key-123");

		// Act
		let html = captcha.render(&RenderContext::default());

		// Assert
		assert_eq!(html, r#"<div class="g-recaptcha" data-sitekey="site-key-123"></div>"#);
		assert_eq!(captcha.name(), "captcha");
		assert_eq!(captcha.field_type(), "captcha");
	}
}
