//! Deferred view over a `POST /tokens` response.
//!
//! [`CreateResult`] keeps the decoded JSON document (or the error that prevented obtaining one)
//! and derives typed values from it on request. Extraction never mutates the stored state, so
//! repeated calls yield equal values and concurrent readers need no coordination.

// crates.io
use serde_json::Value;
// self
use crate::{
	_prelude::*,
	auth::Secret,
	error::DecodeError,
	obs::{self, OpSpan, Operation, Outcome},
	tenants::Tenant,
	tokens::{
		catalog::{CatalogEntry, ServiceCatalog},
		token::{self, Token},
	},
};

/// Outcome of a token creation call, decoded lazily.
///
/// `Debug` output never includes the stored document, which carries the token ID.
#[derive(Clone)]
pub struct CreateResult(Result<Value>);
impl CreateResult {
	/// Wraps an already decoded response document.
	pub fn from_document(document: Value) -> Self {
		Self(Ok(document))
	}

	/// Wraps raw response bytes; invalid JSON is stored as a decoding error.
	pub fn from_body(body: &[u8]) -> Self {
		Self(decode_document(body).map_err(Error::from))
	}

	/// Wraps an error raised before a document was available.
	pub fn from_error(err: impl Into<Error>) -> Self {
		Self(Err(err.into()))
	}

	/// Returns the stored error, if any.
	pub fn err(&self) -> Option<&Error> {
		self.0.as_ref().err()
	}

	/// Returns `true` when a response document is stored.
	pub fn is_ok(&self) -> bool {
		self.0.is_ok()
	}

	/// Reads `access.token` into a [`Token`].
	///
	/// `id` and `expires` are required; a missing tenant yields an empty [`Tenant`].
	pub fn extract_token(&self) -> Result<Token> {
		observe(Operation::ExtractToken, || {
			let envelope = self.decode::<TokenEnvelope>()?;
			let TokenBody { id, expires, tenant } = envelope.access.token;

			Ok(Token { id: Secret::new(id), expires_at: expires, tenant })
		})
	}

	/// Reads `access.serviceCatalog` into a [`ServiceCatalog`], preserving server order.
	///
	/// A missing catalog yields an empty [`ServiceCatalog`]; a missing `access` object is an
	/// error.
	pub fn extract_service_catalog(&self) -> Result<ServiceCatalog> {
		observe(Operation::ExtractServiceCatalog, || {
			let envelope = self.decode::<CatalogEnvelope>()?;

			Ok(ServiceCatalog { entries: envelope.access.service_catalog.unwrap_or_default() })
		})
	}

	fn decode<'a, T>(&'a self) -> Result<T>
	where
		T: Deserialize<'a>,
	{
		let document = self.0.as_ref().map_err(Clone::clone)?;

		serde_path_to_error::deserialize(document).map_err(|e| DecodeError::from(e).into())
	}
}

impl Debug for CreateResult {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		match &self.0 {
			Ok(_) => f.debug_struct("CreateResult").field("document", &"<redacted>").finish(),
			Err(err) => f.debug_struct("CreateResult").field("error", err).finish(),
		}
	}
}

#[derive(Deserialize)]
struct TokenEnvelope {
	access: TokenAccess,
}

#[derive(Deserialize)]
struct TokenAccess {
	token: TokenBody,
}

#[derive(Deserialize)]
struct TokenBody {
	id: String,
	#[serde(deserialize_with = "token::deserialize_expiry")]
	expires: OffsetDateTime,
	#[serde(default, deserialize_with = "token::null_as_default")]
	tenant: Tenant,
}

#[derive(Deserialize)]
struct CatalogEnvelope {
	access: CatalogAccess,
}

#[derive(Deserialize)]
struct CatalogAccess {
	#[serde(default, rename = "serviceCatalog")]
	service_catalog: Option<Vec<CatalogEntry>>,
}

/// Parses a response body into a JSON document, reporting the failing path.
pub(crate) fn decode_document(body: &[u8]) -> Result<Value, DecodeError> {
	let mut deserializer = serde_json::Deserializer::from_slice(body);
	let document = serde_path_to_error::deserialize(&mut deserializer)?;

	deserializer
		.end()
		.map_err(|e| DecodeError { path: ".".into(), message: e.to_string() })?;

	Ok(document)
}

fn observe<T>(op: Operation, extract: impl FnOnce() -> Result<T>) -> Result<T> {
	let _guard = OpSpan::new(op, "extract").entered();

	obs::record_outcome(op, Outcome::Attempt);

	let result = extract();

	match &result {
		Ok(_) => obs::record_outcome(op, Outcome::Success),
		Err(_) => obs::record_outcome(op, Outcome::Failure),
	}

	result
}
