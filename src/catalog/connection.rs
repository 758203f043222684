//! Single tenant connection record.

// crates.io
use serde_json::{Map, Value};
// self
use crate::{_prelude::*, catalog::PasswordStrength, strategy::StrategyCategory};

/// Tenant metadata key disabling sign-up on a database connection.
const SHOW_SIGN_UP_KEY: &str = "showSignup";
/// Tenant metadata key disabling password reset on a database connection.
const SHOW_FORGOT_KEY: &str = "showForgot";
/// Tenant metadata key carrying the database password policy.
const PASSWORD_POLICY_KEY: &str = "passwordPolicy";

/// Named, strategy-typed authentication source configured on the tenant.
///
/// Two connections sharing a strategy but carrying different names are distinct configured
/// instances. Strategy-specific attributes beyond `name`/`strategy` are kept opaque in
/// [`values`](Self::values) and read through the typed accessors; the resolver only interprets
/// the capability and policy keys documented on those accessors.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Connection {
	/// Connection name, unique within a catalog.
	pub name: String,
	/// Strategy identifier exactly as reported by the server.
	pub strategy: String,
	/// Remaining strategy-specific attributes (domain, fields, policies, ...).
	#[serde(flatten)]
	pub values: Map<String, Value>,
}
impl Connection {
	/// Creates a connection with no extra attributes.
	pub fn new(name: impl Into<String>, strategy: impl Into<String>) -> Self {
		Self { name: name.into(), strategy: strategy.into(), values: Map::new() }
	}

	/// Attaches a strategy-specific attribute.
	pub fn with_value(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.values.insert(key.into(), value.into());

		self
	}

	/// Category of this connection's strategy, or `None` for unknown strategies.
	pub fn category(&self) -> Option<StrategyCategory> {
		StrategyCategory::classify(&self.strategy)
	}

	/// Reads a boolean attribute, falling back to `default` when absent or mistyped.
	pub fn bool_value(&self, key: &str, default: bool) -> bool {
		self.values.get(key).and_then(Value::as_bool).unwrap_or(default)
	}

	/// Reads a string attribute, or `None` when absent or mistyped.
	pub fn str_value(&self, key: &str) -> Option<&str> {
		self.values.get(key).and_then(Value::as_str)
	}

	/// Whether the tenant permits sign-up on this connection (key `showSignup`, default true).
	pub fn can_sign_up(&self) -> bool {
		self.bool_value(SHOW_SIGN_UP_KEY, true)
	}

	/// Whether the tenant permits password reset on this connection (key `showForgot`,
	/// default true).
	pub fn can_reset_password(&self) -> bool {
		self.bool_value(SHOW_FORGOT_KEY, true)
	}

	/// Password policy reported by the tenant (key `passwordPolicy`), or
	/// [`PasswordStrength::None`] when unset.
	pub fn password_policy(&self) -> PasswordStrength {
		PasswordStrength::parse(self.str_value(PASSWORD_POLICY_KEY))
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::strategy::PasswordlessKind;

	#[test]
	fn flattened_attributes_survive_deserialization() {
		let payload = r#"{
			"name": "MyAD",
			"strategy": "ad",
			"domain": "myad.example.com",
			"showSignup": false
		}"#;
		let connection: Connection =
			serde_json::from_str(payload).expect("Connection fixture should decode.");

		assert_eq!(connection.name, "MyAD");
		assert_eq!(connection.category(), Some(StrategyCategory::Enterprise));
		assert_eq!(connection.str_value("domain"), Some("myad.example.com"));
		assert!(!connection.can_sign_up());
	}

	#[test]
	fn capability_reads_default_to_permissive() {
		let connection = Connection::new("Username-Password-Authentication", "auth0");

		assert!(connection.can_sign_up());
		assert!(connection.can_reset_password());
		assert_eq!(connection.password_policy(), PasswordStrength::None);
	}

	#[test]
	fn mistyped_metadata_falls_back_to_defaults() {
		let connection = Connection::new("db", "auth0")
			.with_value("showSignup", "nope")
			.with_value("passwordPolicy", 3);

		assert!(connection.can_sign_up());
		assert_eq!(connection.password_policy(), PasswordStrength::None);
	}

	#[test]
	fn policy_and_category_read_from_metadata() {
		let connection =
			Connection::new("db", "auth0").with_value("passwordPolicy", "excellent");

		assert_eq!(connection.password_policy(), PasswordStrength::Excellent);
		assert_eq!(connection.category(), Some(StrategyCategory::Database));

		let sms = Connection::new("my-sms-connection", "sms");

		assert_eq!(
			sms.category(),
			Some(StrategyCategory::Passwordless(PasswordlessKind::Sms))
		);
	}
}
