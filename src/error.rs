//! Client-level error types shared by the request builder, transport, and extractors.

// self
use crate::_prelude::*;

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type SharedError = Arc<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
///
/// Errors are cheap to clone so a [`CreateResult`](crate::tokens::CreateResult) can hand the
/// same stored failure to every extraction call.
#[derive(Clone, Debug, ThisError)]
pub enum Error {
	/// Credential options violate a precondition; the request was never sent.
	#[error(transparent)]
	Options(#[from] AuthOptionsError),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS, IO).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Response body could not be decoded into the requested shape.
	#[error(transparent)]
	Decode(#[from] DecodeError),
	/// Service catalog lookup failed.
	#[error(transparent)]
	Catalog(#[from] CatalogError),

	/// Identity service answered with a status outside the accepted set.
	#[error("Identity service returned unexpected status {status}.")]
	UnexpectedStatus {
		/// HTTP status code returned by the identity service.
		status: u16,
		/// Response body, lossily decoded as UTF-8.
		body: String,
	},
}

/// Precondition violations detected while building a token request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ThisError)]
pub enum AuthOptionsError {
	/// API key authentication is not supported by the v2 password flow.
	#[error("An API key was provided, but only password authentication is supported.")]
	ApiKeyProvided,
	/// User IDs cannot be used to authenticate against Identity v2.
	#[error("A user ID was provided, but Identity v2 authenticates by username.")]
	UserIdProvided,
	/// Domains do not exist in Identity v2.
	#[error("A domain ID was provided, but Identity v2 does not support domains.")]
	DomainIdProvided,
	/// Domains do not exist in Identity v2.
	#[error("A domain name was provided, but Identity v2 does not support domains.")]
	DomainNameProvided,
	/// Username is mandatory for password authentication.
	#[error("A username is required.")]
	UsernameRequired,
	/// Password is mandatory for password authentication.
	#[error("A password is required.")]
	PasswordRequired,
}

/// Configuration and setup failures.
#[derive(Clone, Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: SharedError,
	},
	/// No identity endpoint was configured.
	#[error("An identity endpoint is required.")]
	MissingIdentityEndpoint,
	/// Identity endpoint cannot be parsed or joined.
	#[error("Identity endpoint `{endpoint}` is invalid.")]
	InvalidEndpoint {
		/// Endpoint string that failed validation.
		endpoint: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Token request could not be serialized.
	#[error("Token request could not be serialized: {message}.")]
	RequestEncode {
		/// Serializer failure message.
		message: String,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Arc::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, IO).
#[derive(Clone, Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the identity service.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: SharedError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the identity service.")]
	Io(#[source] Arc<std::io::Error>),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Arc::new(src) }
	}
}
impl From<std::io::Error> for TransportError {
	fn from(e: std::io::Error) -> Self {
		Self::Io(Arc::new(e))
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

/// Response document does not match the expected shape.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("Response is malformed at `{path}`: {message}.")]
pub struct DecodeError {
	/// JSON path where decoding stopped (`.` for the document root).
	pub path: String,
	/// Decoder message.
	pub message: String,
}
impl From<serde_path_to_error::Error<serde_json::Error>> for DecodeError {
	fn from(e: serde_path_to_error::Error<serde_json::Error>) -> Self {
		let path = e.path().to_string();

		Self { path, message: e.into_inner().to_string() }
	}
}

/// Failures raised while locating an endpoint in the service catalog.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum CatalogError {
	/// No endpoint matched the requested service type, name, and region.
	#[error("No `{service_type}` endpoint matched the requested options.")]
	NoEndpoint {
		/// Requested service type.
		service_type: String,
	},
	/// More than one endpoint matched; the options are ambiguous.
	#[error("Found {count} `{service_type}` endpoints matching the requested options.")]
	MultipleEndpoints {
		/// Requested service type.
		service_type: String,
		/// Number of matching endpoints.
		count: usize,
	},
	/// Matching endpoint has no URL for the requested availability.
	#[error("Endpoint has no {availability} URL.")]
	MissingUrl {
		/// Requested availability label.
		availability: &'static str,
	},
	/// Matching endpoint URL cannot be parsed.
	#[error("Endpoint URL `{url}` is invalid.")]
	InvalidUrl {
		/// Raw URL from the catalog.
		url: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	type Nested = BTreeMap<String, BTreeMap<String, BTreeMap<String, String>>>;

	#[test]
	fn decode_error_captures_path() {
		let doc = serde_json::json!({ "access": { "token": { "id": 7 } } });
		let err = serde_path_to_error::deserialize::<_, Nested>(&doc)
			.expect_err("Numeric token id should fail to decode as a string.");
		let decoded = DecodeError::from(err);

		assert_eq!(decoded.path, "access.token.id");
	}

	#[test]
	fn stored_errors_clone_without_losing_source() {
		let err = Error::from(TransportError::from(std::io::Error::other("connection reset")));
		let copy = err.clone();

		assert_eq!(err.to_string(), copy.to_string());
		assert!(StdError::source(&copy).is_some());
	}
}
