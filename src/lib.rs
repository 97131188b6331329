//! OpenStack Identity v2 token client: validated password credentials, typed tokens, tenants,
//! and service catalogs over a pluggable HTTP transport.
//!
//! ```no_run
//! # async fn demo() -> openstack_identity_v2::error::Result<()> {
//! use openstack_identity_v2::{auth::AuthOptions, client::IdentityClient, url::Url};
//!
//! let endpoint = Url::parse("https://keystone.example.com:5000/v2.0/").expect("valid URL");
//! let client = IdentityClient::new(endpoint);
//! let result = client.create(&AuthOptions::password("me", "swordfish")).await;
//! let token = result.extract_token()?;
//! let catalog = result.extract_service_catalog()?;
//!
//! println!("{} expires at {}.", token.tenant.name, token.expires_at);
//! println!("{} services in the catalog.", catalog.entries.len());
//! # Ok(())
//! # }
//! ```

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod client;
pub mod error;
pub mod http;
pub mod obs;
pub mod tenants;
pub mod tokens;
#[cfg(any(test, feature = "test"))]
pub mod _preludet {
	//! Convenience re-exports, fixtures, and helpers for tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	#[cfg(feature = "reqwest")]
	use crate::{client::ReqwestIdentityClient, http::ReqwestHttpClient};

	/// Successful `POST /tokens` response used across the test suites.
	pub const TOKEN_RESPONSE_FIXTURE: &str = r#"
{
  "access": {
    "token": {
      "issued_at": "2014-01-30T15:30:58.000000Z",
      "expires": "2014-01-31T15:30:58Z",
      "id": "aaaabbbbccccdddd",
      "tenant": {
        "description": "There are many tenants. This one is yours.",
        "enabled": true,
        "id": "fc394f2ab2df4114bde39905f800dc57",
        "name": "test"
      }
    },
    "serviceCatalog": [
      {
        "endpoints": [
          {
            "publicURL": "http://something0:1234/v2/",
            "region": "region0"
          },
          {
            "publicURL": "http://something1:1234/v2/",
            "region": "region1"
          }
        ],
        "type": "something",
        "name": "inscrutablewalrus"
      },
      {
        "endpoints": [
          {
            "publicURL": "http://else0:4321/v3/",
            "region": "region0"
          }
        ],
        "type": "else",
        "name": "arbitrarypenguin"
      }
    ]
  }
}
"#;

	/// Builds a reqwest HTTP client that talks to local mock servers directly, ignoring any
	/// proxy configured in the environment.
	#[cfg(feature = "reqwest")]
	pub fn test_reqwest_http_client() -> ReqwestHttpClient {
		let client = ReqwestClient::builder()
			.no_proxy()
			.build()
			.expect("Failed to build Reqwest client for tests.");

		ReqwestHttpClient::with_client(client)
	}

	/// Constructs an identity client pointed at `endpoint` using the test transport.
	#[cfg(feature = "reqwest")]
	pub fn build_reqwest_test_client(endpoint: &str) -> ReqwestIdentityClient {
		let endpoint = Url::parse(endpoint).expect("Failed to parse test identity endpoint.");

		ReqwestIdentityClient::with_http_client(endpoint, test_reqwest_http_client())
	}
}

mod _prelude {
	pub use std::{
		collections::{BTreeMap, HashMap},
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::OffsetDateTime;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _};
