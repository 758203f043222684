//! Developer-supplied presentation and behavior options.
//!
//! An [`OptionsSnapshot`] captures what the integrating application asked for; the resolver
//! reconciles it against the tenant catalog, so a snapshot never guarantees that a requested
//! flow actually surfaces.

/// Builder API for assembling options snapshots.
pub mod builder;
/// Custom sign-up field definitions.
pub mod field;

pub use builder::*;
pub use field::*;

// self
use crate::{_prelude::*, strategy::AuthStyle};

/// Tenant-wide default privacy policy link.
pub const DEFAULT_PRIVACY_URL: &str = "https://auth0.com/privacy";
/// Tenant-wide default terms-of-service link.
pub const DEFAULT_TERMS_URL: &str = "https://auth0.com/terms";

/// Identifier style requested for the database flow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsernameStyle {
	/// Defer to the widget's default, which accepts either identifier.
	#[default]
	Default,
	/// A dedicated username field is mandated.
	Username,
	/// The email address is the identifier.
	Email,
}

/// Landing screen requested for the widget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InitialScreen {
	/// Start on the log-in form.
	#[default]
	LogIn,
	/// Start on the sign-up form.
	SignUp,
	/// Start on the forgot-password form.
	ForgotPassword,
}

/// Layout hint for social buttons. Carries no business effect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SocialButtonStyle {
	/// Let the widget pick based on available space.
	#[default]
	Unspecified,
	/// Icon-only buttons.
	Small,
	/// Full-width buttons with provider names.
	Big,
}

/// Immutable snapshot of the developer's requested behavior.
///
/// All fields default to the permissive widget behavior; use
/// [`builder`](Self::builder) to assemble a snapshot with validated overrides.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionsSnapshot {
	/// Optional allow-list of connection names; `None` means every connection is allowed.
	pub connection_allow_list: Option<Vec<String>>,
	/// Whether the log-in screen is requested.
	pub allow_log_in: bool,
	/// Whether the sign-up screen is requested.
	pub allow_sign_up: bool,
	/// Whether the forgot-password screen is requested.
	pub allow_forgot_password: bool,
	/// Whether sign-up transitions directly into the authenticated state.
	pub login_after_sign_up: bool,
	/// Requested identifier style for the database flow.
	pub username_style: UsernameStyle,
	/// Requested landing screen.
	pub initial_screen: InitialScreen,
	/// Social button layout hint.
	pub social_button_style: SocialButtonStyle,
	/// Extra fields appended to the sign-up form.
	pub custom_sign_up_fields: Vec<SignUpField>,
	/// Whether completion is gated on accepting the legal terms.
	pub must_accept_terms: bool,
	/// Privacy policy link override; falls back to [`DEFAULT_PRIVACY_URL`].
	pub privacy_url: Option<Url>,
	/// Terms-of-service link override; falls back to [`DEFAULT_TERMS_URL`].
	pub terms_url: Option<Url>,
	/// Explicitly preferred database connection name.
	pub default_database_connection: Option<String>,
	/// Deliver passwordless codes (`true`) or magic links (`false`).
	pub use_code_passwordless: bool,
	/// Auth style overrides keyed by exact connection name or by strategy.
	pub auth_style_overrides: HashMap<String, AuthStyle>,
}
impl OptionsSnapshot {
	/// Creates a new builder seeded with the default behavior.
	pub fn builder() -> OptionsBuilder {
		OptionsBuilder::new()
	}
}
impl Default for OptionsSnapshot {
	fn default() -> Self {
		Self {
			connection_allow_list: None,
			allow_log_in: true,
			allow_sign_up: true,
			allow_forgot_password: true,
			login_after_sign_up: true,
			username_style: UsernameStyle::default(),
			initial_screen: InitialScreen::default(),
			social_button_style: SocialButtonStyle::default(),
			custom_sign_up_fields: Vec::new(),
			must_accept_terms: false,
			privacy_url: None,
			terms_url: None,
			default_database_connection: None,
			use_code_passwordless: true,
			auth_style_overrides: HashMap::new(),
		}
	}
}
