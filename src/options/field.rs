//! Custom fields appended to the sign-up form.

// self
use crate::_prelude::*;

/// Errors raised while validating a custom sign-up field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum SignUpFieldError {
	/// Field keys cannot be empty.
	#[error("Sign-up field key cannot be empty.")]
	EmptyKey,
	/// Field keys cannot contain whitespace.
	#[error("Sign-up field key contains whitespace: {key}.")]
	KeyContainsWhitespace {
		/// The offending key.
		key: String,
	},
}

/// Input widget rendered for a custom sign-up field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
	/// Free-form text input.
	#[default]
	Text,
	/// Email address input.
	Email,
	/// Phone number input.
	PhoneNumber,
	/// Numeric input.
	Number,
}

/// Extra attribute collected during sign-up and submitted alongside the account request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpField {
	/// Attribute key submitted to the backend.
	pub key: String,
	/// Input widget kind.
	pub kind: FieldKind,
	/// Placeholder hint shown in the empty input.
	pub hint: Option<String>,
	/// Opaque identifier of the icon asset shown next to the input.
	pub icon: Option<String>,
}
impl SignUpField {
	/// Creates a field after validating the attribute key.
	pub fn new(key: impl Into<String>, kind: FieldKind) -> Result<Self, SignUpFieldError> {
		let key = key.into();

		if key.is_empty() {
			return Err(SignUpFieldError::EmptyKey);
		}
		if key.chars().any(char::is_whitespace) {
			return Err(SignUpFieldError::KeyContainsWhitespace { key });
		}

		Ok(Self { key, kind, hint: None, icon: None })
	}

	/// Sets the placeholder hint.
	pub fn hint(mut self, hint: impl Into<String>) -> Self {
		self.hint = Some(hint.into());

		self
	}

	/// Sets the icon asset identifier.
	pub fn icon(mut self, icon: impl Into<String>) -> Self {
		self.icon = Some(icon.into());

		self
	}
}
