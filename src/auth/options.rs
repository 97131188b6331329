//! Immutable credential bundle consumed by the token request builder.
//!
//! Every field is optional: `None` means "not provided". Empty strings are treated the same as
//! `None` both during validation and on the wire, so callers never need to distinguish the two.

// self
use crate::{_prelude::*, auth::Secret, error::ConfigError};

/// Environment variable holding the identity endpoint.
pub const ENV_AUTH_URL: &str = "OS_AUTH_URL";
/// Environment variable holding the username.
pub const ENV_USERNAME: &str = "OS_USERNAME";
/// Environment variable holding the user ID.
pub const ENV_USER_ID: &str = "OS_USERID";
/// Environment variable holding the password.
pub const ENV_PASSWORD: &str = "OS_PASSWORD";
/// Environment variable holding the tenant ID.
pub const ENV_TENANT_ID: &str = "OS_TENANT_ID";
/// Environment variable holding the tenant name.
pub const ENV_TENANT_NAME: &str = "OS_TENANT_NAME";
/// Environment variable holding the domain ID.
pub const ENV_DOMAIN_ID: &str = "OS_DOMAIN_ID";
/// Environment variable holding the domain name.
pub const ENV_DOMAIN_NAME: &str = "OS_DOMAIN_NAME";

/// Credential options for a single authentication attempt.
///
/// Identity v2 only accepts username/password credentials, optionally scoped to a tenant by ID
/// or name. The remaining fields exist so callers sharing one options value across identity
/// versions get a precise error instead of a silently ignored field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthOptions {
	/// Base URL of the identity service (for example `https://keystone.example.com/v2.0/`).
	pub identity_endpoint: Option<Url>,
	/// Username used for password authentication.
	pub username: Option<String>,
	/// User ID; rejected by Identity v2.
	pub user_id: Option<String>,
	/// Password used for password authentication.
	pub password: Option<Secret>,
	/// API key; rejected by the password flow.
	pub api_key: Option<Secret>,
	/// Tenant ID to scope the token to.
	pub tenant_id: Option<String>,
	/// Tenant name to scope the token to.
	pub tenant_name: Option<String>,
	/// Domain ID; rejected by Identity v2.
	pub domain_id: Option<String>,
	/// Domain name; rejected by Identity v2.
	pub domain_name: Option<String>,
}
impl AuthOptions {
	/// Creates options carrying only a username and password.
	pub fn password(username: impl Into<String>, password: impl Into<Secret>) -> Self {
		Self::default().with_username(username).with_password(password)
	}

	/// Loads options from the conventional `OS_*` environment variables.
	pub fn from_env() -> Result<Self> {
		Self::from_env_with(|key| std::env::var(key).ok())
	}

	/// Loads options through a caller-supplied variable lookup.
	///
	/// Empty values are treated as unset.
	pub fn from_env_with<F>(lookup: F) -> Result<Self>
	where
		F: Fn(&str) -> Option<String>,
	{
		let read = |key: &str| lookup(key).filter(|value| !value.is_empty());
		let identity_endpoint = match read(ENV_AUTH_URL) {
			Some(raw) => Some(parse_endpoint(raw)?),
			None => None,
		};

		Ok(Self {
			identity_endpoint,
			username: read(ENV_USERNAME),
			user_id: read(ENV_USER_ID),
			password: read(ENV_PASSWORD).map(Secret::new),
			api_key: None,
			tenant_id: read(ENV_TENANT_ID),
			tenant_name: read(ENV_TENANT_NAME),
			domain_id: read(ENV_DOMAIN_ID),
			domain_name: read(ENV_DOMAIN_NAME),
		})
	}

	/// Sets the identity endpoint.
	pub fn with_identity_endpoint(mut self, endpoint: Url) -> Self {
		self.identity_endpoint = Some(endpoint);

		self
	}

	/// Sets the username.
	pub fn with_username(mut self, username: impl Into<String>) -> Self {
		self.username = Some(username.into());

		self
	}

	/// Sets the user ID.
	pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
		self.user_id = Some(user_id.into());

		self
	}

	/// Sets the password.
	pub fn with_password(mut self, password: impl Into<Secret>) -> Self {
		self.password = Some(password.into());

		self
	}

	/// Sets the API key.
	pub fn with_api_key(mut self, api_key: impl Into<Secret>) -> Self {
		self.api_key = Some(api_key.into());

		self
	}

	/// Scopes the token to a tenant ID.
	pub fn with_tenant_id(mut self, tenant_id: impl Into<String>) -> Self {
		self.tenant_id = Some(tenant_id.into());

		self
	}

	/// Scopes the token to a tenant name.
	pub fn with_tenant_name(mut self, tenant_name: impl Into<String>) -> Self {
		self.tenant_name = Some(tenant_name.into());

		self
	}

	/// Sets the domain ID.
	pub fn with_domain_id(mut self, domain_id: impl Into<String>) -> Self {
		self.domain_id = Some(domain_id.into());

		self
	}

	/// Sets the domain name.
	pub fn with_domain_name(mut self, domain_name: impl Into<String>) -> Self {
		self.domain_name = Some(domain_name.into());

		self
	}

	/// Returns the username when provided and non-empty.
	pub fn provided_username(&self) -> Option<&str> {
		provided(&self.username)
	}

	/// Returns the password when provided and non-empty.
	pub fn provided_password(&self) -> Option<&Secret> {
		self.password.as_ref().filter(|secret| !secret.is_empty())
	}

	/// Returns the tenant ID when provided and non-empty.
	pub fn provided_tenant_id(&self) -> Option<&str> {
		provided(&self.tenant_id)
	}

	/// Returns the tenant name when provided and non-empty.
	pub fn provided_tenant_name(&self) -> Option<&str> {
		provided(&self.tenant_name)
	}

	pub(crate) fn has_api_key(&self) -> bool {
		self.api_key.as_ref().is_some_and(|secret| !secret.is_empty())
	}

	pub(crate) fn has_user_id(&self) -> bool {
		provided(&self.user_id).is_some()
	}

	pub(crate) fn has_domain_id(&self) -> bool {
		provided(&self.domain_id).is_some()
	}

	pub(crate) fn has_domain_name(&self) -> bool {
		provided(&self.domain_name).is_some()
	}
}

pub(crate) fn parse_endpoint(raw: String) -> Result<Url, ConfigError> {
	match Url::parse(&raw) {
		Ok(url) => Ok(url),
		Err(source) => Err(ConfigError::InvalidEndpoint { endpoint: raw, source }),
	}
}

fn provided(value: &Option<String>) -> Option<&str> {
	value.as_deref().filter(|value| !value.is_empty())
}
