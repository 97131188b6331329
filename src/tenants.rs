//! Tenant model embedded in Identity v2 tokens.

// self
use crate::{_prelude::*, tokens::token};

/// Isolated namespace under which resources and credentials are scoped.
///
/// Missing or `null` fields decode to empty values so unscoped tokens still produce a
/// [`Tenant`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tenant {
	/// Tenant identifier.
	#[serde(deserialize_with = "token::null_as_default")]
	pub id: String,
	/// Human-readable tenant name.
	#[serde(deserialize_with = "token::null_as_default")]
	pub name: String,
	/// Free-form description.
	#[serde(deserialize_with = "token::null_as_default")]
	pub description: String,
	/// Whether the tenant is enabled.
	#[serde(deserialize_with = "token::null_as_default")]
	pub enabled: bool,
}
impl Tenant {
	/// Returns `true` when the token carried no tenant scope.
	pub fn is_unscoped(&self) -> bool {
		self.id.is_empty() && self.name.is_empty()
	}
}
