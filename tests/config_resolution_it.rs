// self
use auth_widget_config::{
	catalog::{ConnectionCatalog, PasswordStrength},
	config::ResolvedConfiguration,
	options::{FieldKind, InitialScreen, OptionsSnapshot, SignUpField, SocialButtonStyle, UsernameStyle},
	strategy::AuthStyle,
};

const USERNAME_PASSWORD: &str = "Username-Password-Authentication";
const CUSTOM_DATABASE: &str = "CustomDatabase";
const RESTRICTIVE_DATABASE: &str = "RestrictiveDatabase";
const MY_AD: &str = "MyAD";
const UNKNOWN_CONNECTION: &str = "UnknownConnection";

const APP_INFO: &str = r#"[
	{"name": "Username-Password-Authentication", "strategy": "auth0"},
	{"name": "CustomDatabase", "strategy": "auth0", "passwordPolicy": "fair"},
	{"name": "RestrictiveDatabase", "strategy": "auth0", "showSignup": false, "showForgot": false},
	{"name": "facebook", "strategy": "facebook"},
	{"name": "twitter", "strategy": "twitter"},
	{"name": "twitter-dev", "strategy": "twitter"},
	{"name": "instagram", "strategy": "instagram"},
	{"name": "google-oauth2", "strategy": "google-oauth2"},
	{"name": "MyAD", "strategy": "ad", "domain": "myad.example.com"},
	{"name": "mySecondAD", "strategy": "ad", "domain": "second.example.com"},
	{"name": "corp.example.com", "strategy": "google-apps"},
	{"name": "email", "strategy": "email"},
	{"name": "sms", "strategy": "sms"},
	{"name": "my-sms-connection", "strategy": "sms"},
	{"name": "legacy-gateway", "strategy": "some-future-strategy"}
]"#;

fn fixture_catalog() -> ConnectionCatalog {
	ConnectionCatalog::from_json(APP_INFO).expect("Fixture catalog should decode successfully.")
}

fn resolve_with(options: OptionsSnapshot) -> ResolvedConfiguration {
	ResolvedConfiguration::resolve(&fixture_catalog(), &options)
}

fn filtered_by(names: &[&str]) -> ResolvedConfiguration {
	let options = OptionsSnapshot::builder()
		.connections(names.iter().copied())
		.build()
		.expect("Filtered options fixture should build.");

	resolve_with(options)
}

#[test]
fn defaults_survive_when_options_are_untouched() {
	let resolved = resolve_with(OptionsSnapshot::default());

	assert!(!resolved.is_username_required());
	assert!(resolved.allow_log_in());
	assert!(resolved.allow_sign_up());
	assert!(resolved.allow_forgot_password());
	assert!(resolved.login_after_sign_up());
	assert_eq!(resolved.username_style(), UsernameStyle::Default);
	assert_eq!(resolved.initial_screen(), InitialScreen::LogIn);
	assert_eq!(resolved.social_button_style(), SocialButtonStyle::Unspecified);
	assert!(!resolved.has_extra_fields());
	assert_eq!(resolved.password_policy(), PasswordStrength::None);
	assert!(!resolved.must_accept_terms());
}

#[test]
fn developer_flags_merge_when_the_database_is_permissive() {
	let options = OptionsSnapshot::builder()
		.connections([USERNAME_PASSWORD])
		.allow_log_in(false)
		.allow_sign_up(false)
		.allow_forgot_password(false)
		.login_after_sign_up(false)
		.username_style(UsernameStyle::Username)
		.social_button_style(SocialButtonStyle::Big)
		.build()
		.expect("Merge options fixture should build.");
	let resolved = resolve_with(options);

	assert!(!resolved.allow_log_in());
	assert!(!resolved.allow_sign_up());
	assert!(!resolved.allow_forgot_password());
	assert!(!resolved.login_after_sign_up());
	assert!(resolved.is_username_required());
	assert_eq!(resolved.username_style(), UsernameStyle::Username);
	assert_eq!(resolved.social_button_style(), SocialButtonStyle::Big);
	assert!(!resolved.has_extra_fields());
}

#[test]
fn restrictive_database_narrows_developer_intent() {
	let options = OptionsSnapshot::builder()
		.connections([RESTRICTIVE_DATABASE])
		.allow_sign_up(true)
		.allow_forgot_password(true)
		.build()
		.expect("Restrictive options fixture should build.");
	let resolved = resolve_with(options);

	assert!(!resolved.allow_sign_up());
	assert!(!resolved.allow_forgot_password());
	// No tenant key restricts log-in; developer intent passes through.
	assert!(resolved.allow_log_in());
}

#[test]
fn classic_connections_require_a_surviving_classic_category() {
	assert!(!filtered_by(&[]).has_classic_connections());
	assert!(filtered_by(&[MY_AD]).has_classic_connections());
	assert!(filtered_by(&["twitter"]).has_classic_connections());
	assert!(filtered_by(&[RESTRICTIVE_DATABASE]).has_classic_connections());
}

#[test]
fn classic_availability_ignores_screen_gating_flags() {
	let options = OptionsSnapshot::builder()
		.connections([USERNAME_PASSWORD])
		.allow_log_in(false)
		.allow_sign_up(false)
		.allow_forgot_password(false)
		.build()
		.expect("Gated options fixture should build.");

	assert!(resolve_with(options).has_classic_connections());
}

#[test]
fn category_queries_filter_by_name_not_strategy() {
	let resolved = filtered_by(&["twitter", "twitter-dev"]);
	let names: Vec<_> =
		resolved.social_connections().iter().map(|connection| connection.name.clone()).collect();

	assert_eq!(names, ["twitter", "twitter-dev"]);
}

#[test]
fn category_queries_ignore_names_missing_from_the_catalog() {
	let resolved = filtered_by(&["facebook", "linkedin"]);
	let socials = resolved.social_connections();

	assert_eq!(socials.len(), 1);
	assert_eq!(socials[0].name, "facebook");
	assert!(filtered_by(&["yammer", "yahoo"]).social_connections().is_empty());
}

#[test]
fn unfiltered_category_queries_keep_server_order() {
	let resolved = resolve_with(OptionsSnapshot::default());
	let socials: Vec<_> =
		resolved.social_connections().iter().map(|c| c.name.as_str().to_owned()).collect();
	let enterprises: Vec<_> =
		resolved.enterprise_connections().iter().map(|c| c.name.as_str().to_owned()).collect();

	assert_eq!(socials, ["facebook", "twitter", "twitter-dev", "instagram", "google-oauth2"]);
	assert_eq!(enterprises, [MY_AD, "mySecondAD", "corp.example.com"]);
	assert!(filtered_by(&["yandex"]).enterprise_connections().is_empty());
}

#[test]
fn default_database_is_the_first_in_catalog_order() {
	let resolved = resolve_with(OptionsSnapshot::default());

	assert_eq!(
		resolved.database_connection().map(|connection| connection.name.as_str()),
		Some(USERNAME_PASSWORD)
	);
}

#[test]
fn empty_catalog_has_no_database_connection() {
	let resolved =
		ResolvedConfiguration::resolve(&ConnectionCatalog::default(), &OptionsSnapshot::default());

	assert!(resolved.database_connection().is_none());
	assert!(!resolved.has_classic_connections());
	assert!(!resolved.has_passwordless_connections());
}

#[test]
fn allow_list_narrows_the_database_choice() {
	let resolved = filtered_by(&[CUSTOM_DATABASE]);

	assert_eq!(resolved.database_connection().map(|c| c.name.as_str()), Some(CUSTOM_DATABASE));
	assert_eq!(resolved.password_policy(), PasswordStrength::Fair);
	assert!(filtered_by(&[UNKNOWN_CONNECTION]).database_connection().is_none());
}

#[test]
fn explicit_database_request_wins_among_survivors() {
	let options = OptionsSnapshot::builder()
		.connections([CUSTOM_DATABASE, USERNAME_PASSWORD, RESTRICTIVE_DATABASE, UNKNOWN_CONNECTION])
		.default_database_connection(RESTRICTIVE_DATABASE)
		.build()
		.expect("Explicit database options fixture should build.");
	let resolved = resolve_with(options);

	assert_eq!(
		resolved.database_connection().map(|c| c.name.as_str()),
		Some(RESTRICTIVE_DATABASE)
	);
}

#[test]
fn explicit_database_request_is_honored_without_an_allow_list() {
	let options = OptionsSnapshot::builder()
		.default_database_connection(CUSTOM_DATABASE)
		.build()
		.expect("Explicit database options fixture should build.");

	assert_eq!(
		resolve_with(options).database_connection().map(|c| c.name.as_str()),
		Some(CUSTOM_DATABASE)
	);
}

#[test]
fn missing_explicit_database_request_falls_back_silently() {
	let options = OptionsSnapshot::builder()
		.default_database_connection("non-existing-db-connection")
		.build()
		.expect("Explicit database options fixture should build.");

	assert_eq!(
		resolve_with(options).database_connection().map(|c| c.name.as_str()),
		Some(USERNAME_PASSWORD)
	);
}

#[test]
fn filtered_out_explicit_database_request_falls_back_silently() {
	let options = OptionsSnapshot::builder()
		.connections([USERNAME_PASSWORD])
		.default_database_connection(CUSTOM_DATABASE)
		.build()
		.expect("Explicit database options fixture should build.");

	assert_eq!(
		resolve_with(options).database_connection().map(|c| c.name.as_str()),
		Some(USERNAME_PASSWORD)
	);
}

#[test]
fn initial_screen_is_honored_with_a_database_connection() {
	for screen in
		[InitialScreen::SignUp, InitialScreen::LogIn, InitialScreen::ForgotPassword]
	{
		let options = OptionsSnapshot::builder()
			.connections([USERNAME_PASSWORD])
			.initial_screen(screen)
			.build()
			.expect("Initial screen options fixture should build.");

		assert_eq!(resolve_with(options).initial_screen(), screen);
	}
}

#[test]
fn initial_screen_falls_back_to_log_in_without_a_database_connection() {
	for screen in [InitialScreen::SignUp, InitialScreen::ForgotPassword] {
		let options = OptionsSnapshot::builder()
			.connections(["twitter"])
			.initial_screen(screen)
			.build()
			.expect("Initial screen options fixture should build.");

		assert_eq!(resolve_with(options).initial_screen(), InitialScreen::LogIn);
	}
}

#[test]
fn builtin_auth_style_applies_without_an_override() {
	let resolved = resolve_with(OptionsSnapshot::default());

	assert_eq!(
		resolved.auth_style_for_connection("facebook", "facebook-prod"),
		AuthStyle::for_strategy("facebook")
	);
	assert_eq!(
		resolved.auth_style_for_connection("some-future-strategy", "legacy-gateway"),
		AuthStyle::GENERIC
	);
}

#[test]
fn auth_style_overrides_resolve_by_name_then_strategy() {
	let options = OptionsSnapshot::builder()
		.auth_style_override("facebook-prod", AuthStyle::custom("brand/navy"))
		.auth_style_override("twitter", AuthStyle::custom("brand/sky"))
		.build()
		.expect("Auth style options fixture should build.");
	let resolved = resolve_with(options);

	assert_eq!(
		resolved.auth_style_for_connection("facebook", "facebook-prod"),
		AuthStyle::custom("brand/navy")
	);
	assert_eq!(
		resolved.auth_style_for_connection("twitter", "twitter-dev"),
		AuthStyle::custom("brand/sky")
	);
	assert_eq!(
		resolved.auth_style_for_connection("facebook", "facebook"),
		AuthStyle::for_strategy("facebook")
	);
}

#[test]
fn legal_links_fall_back_to_the_tenant_defaults() {
	let resolved = resolve_with(OptionsSnapshot::default());

	assert_eq!(resolved.privacy_url(), "https://auth0.com/privacy");
	assert_eq!(resolved.terms_url(), "https://auth0.com/terms");
}

#[test]
fn legal_links_honor_developer_overrides() {
	let options = OptionsSnapshot::builder()
		.privacy_url("https://example.com/privacy")
		.terms_url("https://example.com/terms")
		.must_accept_terms(true)
		.build()
		.expect("Legal link options fixture should build.");
	let resolved = resolve_with(options);

	assert_eq!(resolved.privacy_url(), "https://example.com/privacy");
	assert_eq!(resolved.terms_url(), "https://example.com/terms");
	assert!(resolved.must_accept_terms());
}

#[test]
fn custom_sign_up_fields_flow_through() {
	let number = SignUpField::new("number", FieldKind::PhoneNumber)
		.expect("Field fixture should be valid.")
		.hint("Phone number")
		.icon("ic_phone");
	let surname = SignUpField::new("surname", FieldKind::Text)
		.expect("Field fixture should be valid.")
		.hint("Surname");
	let options = OptionsSnapshot::builder()
		.custom_fields([number.clone(), surname.clone()])
		.build()
		.expect("Custom field options fixture should build.");
	let resolved = resolve_with(options);

	assert!(resolved.has_extra_fields());
	assert_eq!(resolved.extra_sign_up_fields(), [number, surname]);
}

#[test]
fn resolving_twice_yields_value_equal_configurations() {
	let catalog = fixture_catalog();
	let options = OptionsSnapshot::builder()
		.connections([USERNAME_PASSWORD, "facebook", "email"])
		.allow_sign_up(false)
		.username_style(UsernameStyle::Email)
		.build()
		.expect("Idempotence options fixture should build.");
	let first = ResolvedConfiguration::resolve(&catalog, &options);
	let second = ResolvedConfiguration::resolve(&catalog, &options);

	assert_eq!(first, second);
	assert_eq!(first.clone(), second);
}
