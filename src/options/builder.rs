// std
use std::iter::IntoIterator;
// self
use crate::{
	_prelude::*,
	error::OptionsError,
	options::{InitialScreen, OptionsSnapshot, SignUpField, SocialButtonStyle, UsernameStyle},
	strategy::AuthStyle,
};

/// Builder for [`OptionsSnapshot`] values.
///
/// Setters mirror the snapshot fields; URL overrides are taken as strings and validated when
/// [`build`](Self::build) runs.
#[derive(Clone, Debug, Default)]
pub struct OptionsBuilder {
	snapshot: OptionsSnapshot,
	privacy_url: Option<String>,
	terms_url: Option<String>,
}
impl OptionsBuilder {
	/// Creates a builder seeded with the default widget behavior.
	pub fn new() -> Self {
		Self::default()
	}

	/// Restricts the widget to the named connections.
	///
	/// Passing an empty iterator is meaningful: it filters out every connection, unlike not
	/// calling the setter at all.
	pub fn connections<I, S>(mut self, names: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.snapshot.connection_allow_list =
			Some(names.into_iter().map(Into::into).collect());

		self
	}

	/// Requests or suppresses the log-in screen.
	pub fn allow_log_in(mut self, allow: bool) -> Self {
		self.snapshot.allow_log_in = allow;

		self
	}

	/// Requests or suppresses the sign-up screen.
	pub fn allow_sign_up(mut self, allow: bool) -> Self {
		self.snapshot.allow_sign_up = allow;

		self
	}

	/// Requests or suppresses the forgot-password screen.
	pub fn allow_forgot_password(mut self, allow: bool) -> Self {
		self.snapshot.allow_forgot_password = allow;

		self
	}

	/// Controls whether sign-up transitions directly into the authenticated state.
	pub fn login_after_sign_up(mut self, enabled: bool) -> Self {
		self.snapshot.login_after_sign_up = enabled;

		self
	}

	/// Sets the identifier style for the database flow.
	pub fn username_style(mut self, style: UsernameStyle) -> Self {
		self.snapshot.username_style = style;

		self
	}

	/// Sets the requested landing screen.
	pub fn initial_screen(mut self, screen: InitialScreen) -> Self {
		self.snapshot.initial_screen = screen;

		self
	}

	/// Sets the social button layout hint.
	pub fn social_button_style(mut self, style: SocialButtonStyle) -> Self {
		self.snapshot.social_button_style = style;

		self
	}

	/// Appends one custom sign-up field.
	pub fn custom_field(mut self, field: SignUpField) -> Self {
		self.snapshot.custom_sign_up_fields.push(field);

		self
	}

	/// Appends multiple custom sign-up fields.
	pub fn custom_fields<I>(mut self, fields: I) -> Self
	where
		I: IntoIterator<Item = SignUpField>,
	{
		self.snapshot.custom_sign_up_fields.extend(fields);

		self
	}

	/// Gates completion on accepting the legal terms.
	pub fn must_accept_terms(mut self, must: bool) -> Self {
		self.snapshot.must_accept_terms = must;

		self
	}

	/// Overrides the privacy policy link.
	pub fn privacy_url(mut self, url: impl Into<String>) -> Self {
		self.privacy_url = Some(url.into());

		self
	}

	/// Overrides the terms-of-service link.
	pub fn terms_url(mut self, url: impl Into<String>) -> Self {
		self.terms_url = Some(url.into());

		self
	}

	/// Names the preferred database connection.
	pub fn default_database_connection(mut self, name: impl Into<String>) -> Self {
		self.snapshot.default_database_connection = Some(name.into());

		self
	}

	/// Chooses between passwordless codes (`true`) and magic links (`false`).
	pub fn use_code_passwordless(mut self, use_code: bool) -> Self {
		self.snapshot.use_code_passwordless = use_code;

		self
	}

	/// Overrides the auth style for an exact connection name or a whole strategy.
	pub fn auth_style_override(mut self, key: impl Into<String>, style: AuthStyle) -> Self {
		self.snapshot.auth_style_overrides.insert(key.into(), style);

		self
	}

	/// Consumes the builder and validates the URL overrides.
	pub fn build(self) -> Result<OptionsSnapshot, OptionsError> {
		let mut snapshot = self.snapshot;

		snapshot.privacy_url = parse_link("privacy", self.privacy_url)?;
		snapshot.terms_url = parse_link("terms", self.terms_url)?;

		Ok(snapshot)
	}
}

fn parse_link(kind: &'static str, link: Option<String>) -> Result<Option<Url>, OptionsError> {
	link.map(|raw| Url::parse(&raw).map_err(|source| OptionsError::InvalidUrl { kind, source }))
		.transpose()
}
