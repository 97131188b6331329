//! Issued token value and expiry parsing.

// crates.io
use serde::{Deserializer, de::Error as _};
use time::{
	PrimitiveDateTime, UtcOffset,
	format_description::{BorrowedFormatItem, well_known::Rfc3339},
	macros::format_description,
};
// self
use crate::{_prelude::*, auth::Secret, tenants::Tenant};

/// Offset-less layout emitted by some Identity v2 deployments; interpreted as UTC.
const NAIVE_EXPIRY: &[BorrowedFormatItem<'static>] =
	format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");

/// Credential issued by a successful authentication.
///
/// A plain value produced by [`CreateResult::extract_token`]; it carries no lifecycle of its own.
///
/// [`CreateResult::extract_token`]: crate::tokens::CreateResult::extract_token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
	/// Opaque token ID; redacted in `Debug` output.
	pub id: Secret,
	/// Expiry instant, normalized to UTC.
	pub expires_at: OffsetDateTime,
	/// Tenant the token is scoped to; empty for unscoped tokens.
	pub tenant: Tenant,
}
impl Token {
	/// Returns `true` if the token has expired at the provided instant.
	pub fn is_expired_at(&self, instant: OffsetDateTime) -> bool {
		instant >= self.expires_at
	}

	/// Returns `true` if the token is expired relative to the current clock.
	pub fn is_expired(&self) -> bool {
		self.is_expired_at(OffsetDateTime::now_utc())
	}
}

/// Parses an Identity v2 expiry timestamp into a UTC instant.
pub fn parse_expiry(raw: &str) -> Result<OffsetDateTime, time::error::Parse> {
	match OffsetDateTime::parse(raw, &Rfc3339) {
		Ok(instant) => Ok(instant.to_offset(UtcOffset::UTC)),
		Err(rfc3339) => PrimitiveDateTime::parse(raw, NAIVE_EXPIRY)
			.map(PrimitiveDateTime::assume_utc)
			.map_err(|_| rfc3339),
	}
}

pub(crate) fn deserialize_expiry<'de, D>(deserializer: D) -> Result<OffsetDateTime, D::Error>
where
	D: Deserializer<'de>,
{
	let raw = String::deserialize(deserializer)?;

	parse_expiry(&raw).map_err(|e| D::Error::custom(format!("invalid expiry `{raw}`: {e}")))
}

/// Decodes an explicit `null` as the field's default value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: Default + Deserialize<'de>,
{
	Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros;
	// self
	use super::*;

	#[test]
	fn parses_rfc3339_and_normalizes_to_utc() {
		assert_eq!(
			parse_expiry("2014-01-31T15:30:58Z").expect("Zulu timestamp should parse."),
			macros::datetime!(2014-01-31 15:30:58 UTC)
		);
		assert_eq!(
			parse_expiry("2014-01-31T17:30:58+02:00").expect("Offset timestamp should parse."),
			macros::datetime!(2014-01-31 15:30:58 UTC)
		);
		assert_eq!(
			parse_expiry("2014-01-30T15:30:58.000000Z")
				.expect("Fractional timestamp should parse."),
			macros::datetime!(2014-01-30 15:30:58 UTC)
		);
	}

	#[test]
	fn offset_less_timestamps_are_utc() {
		let parsed = parse_expiry("2014-01-31T15:30:58").expect("Naive timestamp should parse.");

		assert_eq!(parsed, macros::datetime!(2014-01-31 15:30:58 UTC));
		assert_eq!(parsed.offset(), UtcOffset::UTC);
	}

	#[test]
	fn rejects_garbage() {
		assert!(parse_expiry("tomorrow").is_err());
		assert!(parse_expiry("").is_err());
	}

	#[test]
	fn expiry_helpers_compare_against_instant() {
		let token = Token {
			id: Secret::new("aaaabbbbccccdddd"),
			expires_at: macros::datetime!(2014-01-31 15:30:58 UTC),
			tenant: Tenant::default(),
		};

		assert!(!token.is_expired_at(macros::datetime!(2014-01-31 15:30:57 UTC)));
		assert!(token.is_expired_at(macros::datetime!(2014-01-31 15:30:58 UTC)));
		assert!(token.is_expired());
	}
}
