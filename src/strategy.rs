//! Strategy classification and the built-in per-strategy auth styles.
//!
//! Classification is an exact, case-sensitive mapping from the strategy identifier the tenant
//! reports to a closed category set. Unknown identifiers classify to `None` rather than
//! aborting resolution; the owning connection simply joins no category bucket.

// self
use crate::_prelude::*;

/// Strategy identifier reserved for tenant database connections.
pub const DATABASE_STRATEGY: &str = "auth0";

/// Delivery channel of a passwordless connection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PasswordlessKind {
	/// Codes or links delivered over email.
	Email,
	/// Codes or links delivered over SMS.
	Sms,
}
impl PasswordlessKind {
	/// Returns the strategy identifier associated with the kind.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Email => "email",
			Self::Sms => "sms",
		}
	}
}
impl Display for PasswordlessKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Category a connection strategy belongs to.
///
/// Every known strategy identifier maps to exactly one category. The classifier is total over
/// the known set; identifiers outside it yield `None` from [`classify`](Self::classify).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyCategory {
	/// Tenant database connection backing the classic username/password flow.
	Database,
	/// OAuth/social identity provider.
	Social,
	/// Enterprise federation (directory, SAML, and friends).
	Enterprise,
	/// Passwordless channel, further split by delivery kind.
	Passwordless(PasswordlessKind),
}
impl StrategyCategory {
	/// Classifies a strategy identifier exactly as reported by the server.
	///
	/// Matching is case-sensitive with no normalization; unrecognized identifiers return
	/// `None` so callers can keep the connection in the raw catalog without bucketing it.
	pub fn classify(strategy: &str) -> Option<Self> {
		match strategy {
			DATABASE_STRATEGY => Some(Self::Database),
			"email" => Some(Self::Passwordless(PasswordlessKind::Email)),
			"sms" => Some(Self::Passwordless(PasswordlessKind::Sms)),
			"ad" | "adfs" | "auth0-adldap" | "custom" | "google-apps" | "google-openid" | "ip"
			| "mscrm" | "office365" | "pingfederate" | "samlp" | "sharepoint" | "waad" =>
				Some(Self::Enterprise),
			"amazon" | "aol" | "baidu" | "bitbucket" | "box" | "dropbox" | "dwolla" | "ebay"
			| "evernote" | "evernote-sandbox" | "exact" | "facebook" | "fitbit" | "github"
			| "google-oauth2" | "instagram" | "linkedin" | "paypal" | "paypal-sandbox"
			| "salesforce" | "salesforce-community" | "salesforce-sandbox" | "shopify"
			| "soundcloud" | "thecity" | "thecity-sandbox" | "thirtysevensignals" | "twitter"
			| "vkontakte" | "weibo" | "windowslive" | "wordpress" | "yahoo" | "yammer"
			| "yandex" => Some(Self::Social),
			_ => None,
		}
	}

	/// Returns true for the categories served by the classic (non-passwordless) widget flows.
	pub fn is_classic(self) -> bool {
		matches!(self, Self::Database | Self::Social | Self::Enterprise)
	}
}

/// Opaque UI style token attached to an authentication button.
///
/// Each known strategy carries exactly one built-in token; unknown strategies fall back to
/// [`AuthStyle::GENERIC`]. Developer overrides carry arbitrary host-side identifiers through
/// [`AuthStyle::custom`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthStyle(Cow<'static, str>);
impl AuthStyle {
	/// Fallback style used when a strategy has no built-in token.
	pub const GENERIC: Self = Self(Cow::Borrowed("auth-style/generic"));

	/// Wraps a developer-supplied style token.
	pub fn custom(token: impl Into<String>) -> Self {
		Self(Cow::Owned(token.into()))
	}

	/// Returns the built-in style for a strategy, or the generic fallback for unknown ones.
	pub fn for_strategy(strategy: &str) -> Self {
		if StrategyCategory::classify(strategy).is_some() {
			Self(Cow::Owned(format!("auth-style/{strategy}")))
		} else {
			Self::GENERIC
		}
	}

	/// Returns the style token as a string slice.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}
impl Display for AuthStyle {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}
