//! Identity v2 client that issues `POST /tokens` and hands back a deferred [`CreateResult`].

// crates.io
use serde_json::Value;
// self
use crate::{
	_prelude::*,
	auth::AuthOptions,
	error::ConfigError,
	http::{self, IdentityHttpClient},
	obs::{self, OpSpan, Operation, Outcome},
	tokens::{self, CreateResult, TOKENS_PATH},
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

/// HTTP statuses accepted from the token endpoint.
pub const ACCEPTED_STATUSES: [u16; 2] = [200, 203];

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type ReqwestIdentityClient = IdentityClient<ReqwestHttpClient>;

/// Issues authentication requests against a single identity endpoint.
///
/// The client holds no per-call state: every [`IdentityClient::create`] call validates its
/// options, sends at most one request, and returns the outcome by value.
#[derive(Clone)]
pub struct IdentityClient<C>
where
	C: ?Sized + IdentityHttpClient,
{
	/// HTTP client wrapper used for every outbound request.
	pub http_client: Arc<C>,
	/// Identity endpoint; always ends with `/`.
	pub endpoint: Url,
}
impl<C> IdentityClient<C>
where
	C: ?Sized + IdentityHttpClient,
{
	/// Creates a client that reuses the caller-provided transport.
	pub fn with_http_client(endpoint: Url, http_client: impl Into<Arc<C>>) -> Self {
		Self { http_client: http_client.into(), endpoint: http::with_trailing_slash(endpoint) }
	}

	/// Creates a client for the endpoint carried by `options`.
	pub fn for_options(options: &AuthOptions, http_client: impl Into<Arc<C>>) -> Result<Self> {
		let endpoint =
			options.identity_endpoint.clone().ok_or(ConfigError::MissingIdentityEndpoint)?;

		Ok(Self::with_http_client(endpoint, http_client))
	}

	/// Resolves the token resource URL.
	pub fn tokens_url(&self) -> Result<Url, ConfigError> {
		self.endpoint.join(TOKENS_PATH).map_err(|source| ConfigError::InvalidEndpoint {
			endpoint: self.endpoint.to_string(),
			source,
		})
	}

	/// Authenticates with `options` and returns the deferred result.
	///
	/// Precondition failures are stored without sending a request. Transport failures,
	/// unexpected statuses, and non-JSON bodies are stored as well; nothing is retried.
	pub async fn create(&self, options: &AuthOptions) -> CreateResult {
		const OP: Operation = Operation::CreateToken;

		let span = OpSpan::new(OP, "create");

		obs::record_outcome(OP, Outcome::Attempt);

		let result = span.instrument(self.exchange(options)).await;

		match &result {
			Ok(_) => obs::record_outcome(OP, Outcome::Success),
			Err(err) => {
				span.warn(&err.to_string());
				obs::record_outcome(OP, Outcome::Failure);
			},
		}

		match result {
			Ok(document) => CreateResult::from_document(document),
			Err(err) => CreateResult::from_error(err),
		}
	}

	async fn exchange(&self, options: &AuthOptions) -> Result<Value> {
		let body = tokens::build(options)?.to_body()?;
		let url = self.tokens_url()?;
		let response = self.http_client.post_json(url, body).await?;

		if !ACCEPTED_STATUSES.contains(&response.status) {
			return Err(Error::UnexpectedStatus {
				status: response.status,
				body: String::from_utf8_lossy(&response.body).into_owned(),
			});
		}

		Ok(tokens::result::decode_document(&response.body)?)
	}
}
#[cfg(feature = "reqwest")]
impl IdentityClient<ReqwestHttpClient> {
	/// Creates a client for `endpoint` backed by a default reqwest transport.
	pub fn new(endpoint: Url) -> Self {
		Self::with_http_client(endpoint, ReqwestHttpClient::default())
	}

	/// Creates a reqwest-backed client for the endpoint carried by `options`.
	pub fn from_auth_options(options: &AuthOptions) -> Result<Self> {
		Self::for_options(options, ReqwestHttpClient::default())
	}
}
impl<C> Debug for IdentityClient<C>
where
	C: ?Sized + IdentityHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("IdentityClient").field("endpoint", &self.endpoint.as_str()).finish()
	}
}
