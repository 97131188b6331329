//! Transport primitives for Identity v2 requests.
//!
//! The module exposes [`IdentityHttpClient`] alongside [`HttpResponse`] so downstream crates can
//! plug in custom HTTP stacks. The client hands implementations a fully resolved URL and a JSON
//! body; implementations return the status and raw body, and never interpret either.

// std
#[cfg(feature = "reqwest")] use std::ops::Deref;
// crates.io
#[cfg(feature = "reqwest")] use reqwest::header::{ACCEPT, CONTENT_TYPE};
// self
use crate::{_prelude::*, error::TransportError};

/// MIME type used for both the request body and the accepted response.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Future returned by [`IdentityHttpClient::post_json`].
pub type HttpFuture<'a> =
	Pin<Box<dyn Future<Output = Result<HttpResponse, TransportError>> + 'a + Send>>;

/// Abstraction over HTTP transports capable of issuing Identity v2 requests.
///
/// This trait is the client's only dependency on an HTTP stack. Implementations must be
/// `Send + Sync + 'static` so they can be shared behind an `Arc` across client clones, and
/// the futures they return must be `Send`.
///
/// # Request Contract
///
/// - Issue `POST url` with `body` verbatim.
/// - Send `Content-Type: application/json` and `Accept: application/json`.
/// - Return any HTTP response as `Ok`, whatever its status; reserve `Err` for failures that
///   produced no response at all.
pub trait IdentityHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Posts a JSON body and collects the response.
	fn post_json<'a>(&'a self, url: Url, body: Vec<u8>) -> HttpFuture<'a>;
}

/// Status and body of an HTTP response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
	/// HTTP status code.
	pub status: u16,
	/// Raw response body.
	pub body: Vec<u8>,
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[cfg(feature = "reqwest")]
#[derive(Clone, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl IdentityHttpClient for ReqwestHttpClient {
	fn post_json<'a>(&'a self, url: Url, body: Vec<u8>) -> HttpFuture<'a> {
		Box::pin(async move {
			let response = self
				.0
				.post(url)
				.header(CONTENT_TYPE, JSON_CONTENT_TYPE)
				.header(ACCEPT, JSON_CONTENT_TYPE)
				.body(body)
				.send()
				.await?;
			let status = response.status().as_u16();
			let body = response.bytes().await?.to_vec();

			Ok(HttpResponse { status, body })
		})
	}
}

/// Appends a `/` to the URL path when missing so relative joins descend into it.
pub(crate) fn with_trailing_slash(mut url: Url) -> Url {
	if !url.path().ends_with('/') {
		let path = format!("{}/", url.path());

		url.set_path(&path);
	}

	url
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn trailing_slash_is_added_once() {
		let bare = Url::parse("http://keystone:5000/v2.0").expect("Fixture URL should parse.");
		let slashed = Url::parse("http://keystone:5000/v2.0/").expect("Fixture URL should parse.");

		assert_eq!(with_trailing_slash(bare).as_str(), "http://keystone:5000/v2.0/");
		assert_eq!(with_trailing_slash(slashed).as_str(), "http://keystone:5000/v2.0/");
	}
}
