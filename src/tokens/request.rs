//! Token request construction guarded by an ordered precondition table.

// self
use crate::{
	_prelude::*,
	auth::{AuthOptions, Secret},
	error::{AuthOptionsError, ConfigError},
};

/// Token resource path, relative to the identity endpoint.
pub const TOKENS_PATH: &str = "tokens";

/// A single precondition: when `violated` holds, building fails with `error`.
struct Rule {
	violated: fn(&AuthOptions) -> bool,
	error: AuthOptionsError,
}

/// Preconditions in priority order; the first violated rule wins.
const RULES: [Rule; 6] = [
	Rule { violated: AuthOptions::has_api_key, error: AuthOptionsError::ApiKeyProvided },
	Rule { violated: AuthOptions::has_user_id, error: AuthOptionsError::UserIdProvided },
	Rule { violated: AuthOptions::has_domain_id, error: AuthOptionsError::DomainIdProvided },
	Rule { violated: AuthOptions::has_domain_name, error: AuthOptionsError::DomainNameProvided },
	Rule {
		violated: |options| options.provided_username().is_none(),
		error: AuthOptionsError::UsernameRequired,
	},
	Rule {
		violated: |options| options.provided_password().is_none(),
		error: AuthOptionsError::PasswordRequired,
	},
];

/// Serialized body of `POST /tokens`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TokenRequest {
	/// Authentication payload.
	pub auth: AuthPayload,
}
impl TokenRequest {
	/// Renders the request as JSON bytes.
	pub fn to_body(&self) -> Result<Vec<u8>, ConfigError> {
		serde_json::to_vec(self).map_err(|e| ConfigError::RequestEncode { message: e.to_string() })
	}
}

/// Tenant scope plus password credentials.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthPayload {
	/// Tenant ID scope, omitted when not provided.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tenant_id: Option<String>,
	/// Tenant name scope, omitted when not provided.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tenant_name: Option<String>,
	/// Username and password.
	pub password_credentials: PasswordCredentials,
}

/// Username/password pair sent to the identity service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PasswordCredentials {
	/// Username.
	pub username: String,
	/// Password; redacted in `Debug` output.
	pub password: Secret,
}

/// Checks `options` against the precondition table without building a request.
pub fn validate(options: &AuthOptions) -> Result<(), AuthOptionsError> {
	match RULES.iter().find(|rule| (rule.violated)(options)) {
		Some(rule) => Err(rule.error),
		None => Ok(()),
	}
}

/// Validates `options` and converts them into a [`TokenRequest`].
///
/// Tenant ID and tenant name are independently optional; both are sent when both are set.
pub fn build(options: &AuthOptions) -> Result<TokenRequest, AuthOptionsError> {
	validate(options)?;

	// `RULES` already rejected missing credentials; these lookups only unwrap them.
	let username = options.provided_username().ok_or(AuthOptionsError::UsernameRequired)?;
	let password = options.provided_password().ok_or(AuthOptionsError::PasswordRequired)?;

	Ok(TokenRequest {
		auth: AuthPayload {
			tenant_id: options.provided_tenant_id().map(ToOwned::to_owned),
			tenant_name: options.provided_tenant_name().map(ToOwned::to_owned),
			password_credentials: PasswordCredentials {
				username: username.to_owned(),
				password: password.clone(),
			},
		},
	})
}
