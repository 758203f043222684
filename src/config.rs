//! Resolution engine combining the tenant catalog with developer options.
//!
//! [`ResolvedConfiguration::resolve`] is a pure constructor: it filters the catalog through the
//! allow-list, selects the default database connection, derives the passwordless mode, and
//! merges developer flags with tenant-side restrictions. The result is immutable and safe to
//! share across concurrent readers; callers replace the whole object whenever the catalog or
//! options change.

// self
use crate::{
	_prelude::*,
	catalog::{Connection, ConnectionCatalog, PasswordStrength},
	obs::{self, ResolveSpan},
	options::{
		DEFAULT_PRIVACY_URL, DEFAULT_TERMS_URL, InitialScreen, OptionsSnapshot, SignUpField,
		SocialButtonStyle, UsernameStyle,
	},
	strategy::{AuthStyle, PasswordlessKind, StrategyCategory},
};

/// Passwordless flow derived from the surviving connections.
///
/// Email takes precedence over SMS when both kinds survive filtering; the code/link split
/// follows [`OptionsSnapshot::use_code_passwordless`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PasswordlessMode {
	/// No passwordless connection survived filtering.
	#[default]
	Disabled,
	/// One-time code delivered over email.
	EmailCode,
	/// Magic link delivered over email.
	EmailLink,
	/// One-time code delivered over SMS.
	SmsCode,
	/// Magic link delivered over SMS.
	SmsLink,
}
impl PasswordlessMode {
	/// Returns true when no passwordless flow is available.
	pub fn is_disabled(self) -> bool {
		self == Self::Disabled
	}

	/// Delivery kind backing the mode, or `None` when disabled.
	pub fn kind(self) -> Option<PasswordlessKind> {
		match self {
			Self::Disabled => None,
			Self::EmailCode | Self::EmailLink => Some(PasswordlessKind::Email),
			Self::SmsCode | Self::SmsLink => Some(PasswordlessKind::Sms),
		}
	}

	/// Returns a stable identifier for the mode.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Disabled => "disabled",
			Self::EmailCode => "email_code",
			Self::EmailLink => "email_link",
			Self::SmsCode => "sms_code",
			Self::SmsLink => "sms_link",
		}
	}

	fn for_kind(kind: PasswordlessKind, use_code: bool) -> Self {
		match (kind, use_code) {
			(PasswordlessKind::Email, true) => Self::EmailCode,
			(PasswordlessKind::Email, false) => Self::EmailLink,
			(PasswordlessKind::Sms, true) => Self::SmsCode,
			(PasswordlessKind::Sms, false) => Self::SmsLink,
		}
	}
}
impl Display for PasswordlessMode {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Immutable answer to "which flows does this widget session actually offer".
///
/// Built once per [`resolve`](Self::resolve) call and never mutated afterward. Every query is
/// read-only; repeated resolves over identical inputs compare equal.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResolvedConfiguration {
	connections: Vec<Connection>,
	database_connection: Option<Connection>,
	passwordless_mode: PasswordlessMode,
	allow_log_in: bool,
	allow_sign_up: bool,
	allow_forgot_password: bool,
	login_after_sign_up: bool,
	username_style: UsernameStyle,
	initial_screen: InitialScreen,
	social_button_style: SocialButtonStyle,
	custom_sign_up_fields: Vec<SignUpField>,
	must_accept_terms: bool,
	privacy_url: Option<Url>,
	terms_url: Option<Url>,
	auth_style_overrides: HashMap<String, AuthStyle>,
}
impl ResolvedConfiguration {
	/// Reconciles the tenant catalog with the developer options.
	///
	/// Never fails: unknown strategies, absent names, empty catalogs, and conflicting flags
	/// all resolve to conservative defaults.
	pub fn resolve(catalog: &ConnectionCatalog, options: &OptionsSnapshot) -> Self {
		let _guard = ResolveSpan::new("resolve").entered();
		let connections =
			filter_connections(catalog, options.connection_allow_list.as_deref());
		let database_connection = select_database_connection(
			&connections,
			options.default_database_connection.as_deref(),
		)
		.cloned();
		let passwordless_mode =
			resolve_passwordless_mode(&connections, options.use_code_passwordless);
		// SIGN_UP and FORGOT_PASSWORD both require a database-backed flow to render.
		let initial_screen = if database_connection.is_some() {
			options.initial_screen
		} else {
			InitialScreen::LogIn
		};
		// Restrictive tenant settings narrow developer intent, never widen it.
		let allow_sign_up = options.allow_sign_up
			&& database_connection.as_ref().is_none_or(Connection::can_sign_up);
		let allow_forgot_password = options.allow_forgot_password
			&& database_connection.as_ref().is_none_or(Connection::can_reset_password);

		obs::record_resolution(catalog.len(), connections.len(), passwordless_mode.as_str());

		Self {
			connections,
			database_connection,
			passwordless_mode,
			allow_log_in: options.allow_log_in,
			allow_sign_up,
			allow_forgot_password,
			login_after_sign_up: options.login_after_sign_up,
			username_style: options.username_style,
			initial_screen,
			social_button_style: options.social_button_style,
			custom_sign_up_fields: options.custom_sign_up_fields.clone(),
			must_accept_terms: options.must_accept_terms,
			privacy_url: options.privacy_url.clone(),
			terms_url: options.terms_url.clone(),
			auth_style_overrides: options.auth_style_overrides.clone(),
		}
	}

	/// All surviving connections, in server order.
	pub fn connections(&self) -> &[Connection] {
		&self.connections
	}

	/// Surviving social connections, in server order.
	pub fn social_connections(&self) -> Vec<&Connection> {
		self.connections_in(StrategyCategory::Social)
	}

	/// Surviving enterprise connections, in server order.
	pub fn enterprise_connections(&self) -> Vec<&Connection> {
		self.connections_in(StrategyCategory::Enterprise)
	}

	/// Surviving passwordless connections of either kind, in server order.
	pub fn passwordless_connections(&self) -> Vec<&Connection> {
		self.connections
			.iter()
			.filter(|connection| {
				matches!(connection.category(), Some(StrategyCategory::Passwordless(_)))
			})
			.collect()
	}

	/// True when at least one database, social, or enterprise connection survived filtering.
	///
	/// Independent of the classic-flow gating flags; suppressing screens never removes the
	/// connections backing them.
	pub fn has_classic_connections(&self) -> bool {
		self.connections
			.iter()
			.any(|connection| connection.category().is_some_and(StrategyCategory::is_classic))
	}

	/// True when at least one passwordless connection survived filtering.
	pub fn has_passwordless_connections(&self) -> bool {
		!self.passwordless_mode.is_disabled()
	}

	/// The selected database connection, or `None` when none survived filtering.
	pub fn database_connection(&self) -> Option<&Connection> {
		self.database_connection.as_ref()
	}

	/// The passwordless connection backing [`passwordless_mode`](Self::passwordless_mode),
	/// preferring email over SMS.
	pub fn passwordless_connection(&self) -> Option<&Connection> {
		first_of_kind(&self.connections, PasswordlessKind::Email)
			.or_else(|| first_of_kind(&self.connections, PasswordlessKind::Sms))
	}

	/// Name of the first surviving connection of the given passwordless kind.
	///
	/// Lets request layers target a specific connection without re-deriving the mode logic.
	pub fn first_connection_of_kind(&self, kind: PasswordlessKind) -> Option<&str> {
		first_of_kind(&self.connections, kind).map(|connection| connection.name.as_str())
	}

	/// The derived passwordless flow.
	pub fn passwordless_mode(&self) -> PasswordlessMode {
		self.passwordless_mode
	}

	/// Whether the log-in screen is offered.
	pub fn allow_log_in(&self) -> bool {
		self.allow_log_in
	}

	/// Whether the sign-up screen is offered, after tenant restrictions.
	pub fn allow_sign_up(&self) -> bool {
		self.allow_sign_up
	}

	/// Whether the forgot-password screen is offered, after tenant restrictions.
	pub fn allow_forgot_password(&self) -> bool {
		self.allow_forgot_password
	}

	/// Whether sign-up transitions directly into the authenticated state.
	pub fn login_after_sign_up(&self) -> bool {
		self.login_after_sign_up
	}

	/// True iff the identifier style mandates a dedicated username field.
	pub fn is_username_required(&self) -> bool {
		self.username_style == UsernameStyle::Username
	}

	/// The requested identifier style.
	pub fn username_style(&self) -> UsernameStyle {
		self.username_style
	}

	/// The landing screen, forced to log-in when no database connection survived.
	pub fn initial_screen(&self) -> InitialScreen {
		self.initial_screen
	}

	/// The social button layout hint.
	pub fn social_button_style(&self) -> SocialButtonStyle {
		self.social_button_style
	}

	/// True when extra sign-up fields were requested.
	pub fn has_extra_fields(&self) -> bool {
		!self.custom_sign_up_fields.is_empty()
	}

	/// Extra fields appended to the sign-up form.
	pub fn extra_sign_up_fields(&self) -> &[SignUpField] {
		&self.custom_sign_up_fields
	}

	/// Password policy of the selected database connection, or
	/// [`PasswordStrength::None`] without one.
	pub fn password_policy(&self) -> PasswordStrength {
		self.database_connection.as_ref().map_or(PasswordStrength::None, Connection::password_policy)
	}

	/// Whether completion is gated on accepting the legal terms.
	pub fn must_accept_terms(&self) -> bool {
		self.must_accept_terms
	}

	/// Privacy policy link, falling back to the tenant-wide default.
	pub fn privacy_url(&self) -> &str {
		self.privacy_url.as_ref().map_or(DEFAULT_PRIVACY_URL, Url::as_str)
	}

	/// Terms-of-service link, falling back to the tenant-wide default.
	pub fn terms_url(&self) -> &str {
		self.terms_url.as_ref().map_or(DEFAULT_TERMS_URL, Url::as_str)
	}

	/// Auth style for a connection: override by exact name, then by strategy, then the
	/// strategy's built-in style.
	pub fn auth_style_for_connection(&self, strategy: &str, name: &str) -> AuthStyle {
		if let Some(style) = self.auth_style_overrides.get(name) {
			return style.clone();
		}
		if let Some(style) = self.auth_style_overrides.get(strategy) {
			return style.clone();
		}

		AuthStyle::for_strategy(strategy)
	}

	fn connections_in(&self, category: StrategyCategory) -> Vec<&Connection> {
		self.connections
			.iter()
			.filter(|connection| connection.category() == Some(category))
			.collect()
	}
}

/// Applies the allow-list with set semantics: duplicates collapse, unknown names are ignored,
/// catalog order is preserved. An absent list keeps the catalog unchanged; an empty list keeps
/// nothing.
fn filter_connections(
	catalog: &ConnectionCatalog,
	allow_list: Option<&[String]>,
) -> Vec<Connection> {
	let Some(allow_list) = allow_list else {
		return catalog.connections().to_vec();
	};
	let allowed: HashSet<&str> = allow_list.iter().map(String::as_str).collect();

	catalog
		.iter()
		.filter(|connection| allowed.contains(connection.name.as_str()))
		.cloned()
		.collect()
}

/// Default database selection as an ordered rule list; first match wins.
fn select_database_connection<'a>(
	connections: &'a [Connection],
	requested: Option<&str>,
) -> Option<&'a Connection> {
	let databases: Vec<&Connection> = connections
		.iter()
		.filter(|connection| connection.category() == Some(StrategyCategory::Database))
		.collect();

	// Rule 1: nothing survived filtering.
	if databases.is_empty() {
		return None;
	}
	// Rule 2: the explicitly requested name, when it survived filtering. A name that exists in
	// the unfiltered catalog but was excluded by the allow-list is silently ignored.
	if let Some(name) = requested {
		if let Some(found) = databases.iter().copied().find(|connection| connection.name == name) {
			return Some(found);
		}
	}

	// Rules 3/4: a sole survivor and the multi-database fallback both take the first database
	// in catalog order.
	databases.first().copied()
}

/// Passwordless mode as an ordered rule list; email outranks SMS.
fn resolve_passwordless_mode(connections: &[Connection], use_code: bool) -> PasswordlessMode {
	if first_of_kind(connections, PasswordlessKind::Email).is_some() {
		return PasswordlessMode::for_kind(PasswordlessKind::Email, use_code);
	}
	if first_of_kind(connections, PasswordlessKind::Sms).is_some() {
		return PasswordlessMode::for_kind(PasswordlessKind::Sms, use_code);
	}

	PasswordlessMode::Disabled
}

fn first_of_kind(connections: &[Connection], kind: PasswordlessKind) -> Option<&Connection> {
	connections
		.iter()
		.find(|connection| connection.category() == Some(StrategyCategory::Passwordless(kind)))
}
