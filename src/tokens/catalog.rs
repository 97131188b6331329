//! Service catalog models and endpoint lookup.

// self
use crate::{_prelude::*, error::CatalogError, http, tokens::token};

/// Services and their regional endpoints, in server response order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceCatalog {
	/// Catalog entries.
	pub entries: Vec<CatalogEntry>,
}
impl ServiceCatalog {
	/// Returns `true` when the catalog has no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Finds the single endpoint URL matching `opts`.
	///
	/// Entries match on service type and, when set, service name; endpoints match on region
	/// when set. Exactly one endpoint must remain. The returned URL always ends with `/`.
	pub fn locate(&self, opts: &EndpointOpts) -> Result<Url, CatalogError> {
		let matches = self
			.entries
			.iter()
			.filter(|entry| entry.service_type == opts.service_type)
			.filter(|entry| opts.name.as_deref().is_none_or(|name| entry.name == name))
			.flat_map(|entry| entry.endpoints.iter())
			.filter(|endpoint| {
				opts.region.as_deref().is_none_or(|region| endpoint.region == region)
			})
			.collect::<Vec<_>>();
		let endpoint = match matches.as_slice() {
			[] => return Err(CatalogError::NoEndpoint { service_type: opts.service_type.clone() }),
			[only] => *only,
			many =>
				return Err(CatalogError::MultipleEndpoints {
					service_type: opts.service_type.clone(),
					count: many.len(),
				}),
		};
		let raw = endpoint.url(opts.availability);

		if raw.is_empty() {
			return Err(CatalogError::MissingUrl { availability: opts.availability.as_str() });
		}

		Url::parse(raw)
			.map(http::with_trailing_slash)
			.map_err(|source| CatalogError::InvalidUrl { url: raw.to_owned(), source })
	}
}

/// One service in the catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogEntry {
	/// Service name (for example `nova`).
	#[serde(deserialize_with = "token::null_as_default")]
	pub name: String,
	/// Service type (for example `compute`).
	#[serde(rename = "type", deserialize_with = "token::null_as_default")]
	pub service_type: String,
	/// Endpoints in server response order.
	#[serde(deserialize_with = "token::null_as_default")]
	pub endpoints: Vec<Endpoint>,
}

/// A regional endpoint of a service.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoint {
	/// Tenant the endpoint is bound to.
	#[serde(rename = "tenantId", deserialize_with = "token::null_as_default")]
	pub tenant_id: String,
	/// Publicly reachable URL.
	#[serde(rename = "publicURL", deserialize_with = "token::null_as_default")]
	pub public_url: String,
	/// URL on the internal network.
	#[serde(rename = "internalURL", deserialize_with = "token::null_as_default")]
	pub internal_url: String,
	/// Administrative URL.
	#[serde(rename = "adminURL", deserialize_with = "token::null_as_default")]
	pub admin_url: String,
	/// Region name.
	#[serde(deserialize_with = "token::null_as_default")]
	pub region: String,
	/// API version identifier.
	#[serde(rename = "versionId", deserialize_with = "token::null_as_default")]
	pub version_id: String,
	/// Version document URL.
	#[serde(rename = "versionInfo", deserialize_with = "token::null_as_default")]
	pub version_info: String,
	/// Version list URL.
	#[serde(rename = "versionList", deserialize_with = "token::null_as_default")]
	pub version_list: String,
}
impl Endpoint {
	/// Returns the URL for the requested availability; empty when the server omitted it.
	pub fn url(&self, availability: Availability) -> &str {
		match availability {
			Availability::Public => &self.public_url,
			Availability::Internal => &self.internal_url,
			Availability::Admin => &self.admin_url,
		}
	}
}

/// Which endpoint URL a caller wants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Availability {
	/// `publicURL`.
	#[default]
	Public,
	/// `internalURL`.
	Internal,
	/// `adminURL`.
	Admin,
}
impl Availability {
	/// Returns a stable label suitable for messages.
	pub const fn as_str(self) -> &'static str {
		match self {
			Availability::Public => "public",
			Availability::Internal => "internal",
			Availability::Admin => "admin",
		}
	}
}
impl Display for Availability {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Criteria for [`ServiceCatalog::locate`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EndpointOpts {
	/// Required service type.
	pub service_type: String,
	/// Optional service name filter.
	pub name: Option<String>,
	/// Optional region filter.
	pub region: Option<String>,
	/// Which URL to return.
	pub availability: Availability,
}
impl EndpointOpts {
	/// Creates options for the given service type with public availability.
	pub fn new(service_type: impl Into<String>) -> Self {
		Self { service_type: service_type.into(), ..Default::default() }
	}

	/// Restricts matches to the named service.
	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());

		self
	}

	/// Restricts matches to the given region.
	pub fn with_region(mut self, region: impl Into<String>) -> Self {
		self.region = Some(region.into());

		self
	}

	/// Selects which URL to return.
	pub fn with_availability(mut self, availability: Availability) -> Self {
		self.availability = availability;

		self
	}
}
