//! Acting principal classification.

use std::fmt;

use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Role of the principal the navigation is being rendered for.
///
/// Only the literal claim `"owner"` is privileged. Any other value, including
/// an absent or unrecognized claim, resolves to [`Role::Employee`]. The same
/// holds when deserializing: `null`, a missing field, and non-string values
/// decode as [`Role::Employee`] instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
	/// Tenant owner; sees owner-only items.
	Owner,
	/// Everyone else.
	#[default]
	Employee,
}

impl Role {
	/// Resolves a role claim from the session layer.
	pub fn from_claim(claim: Option<&str>) -> Self {
		match claim {
			Some("owner") => Self::Owner,
			_ => Self::Employee,
		}
	}

	/// Returns `true` for [`Role::Owner`].
	#[inline]
	pub fn is_owner(self) -> bool {
		matches!(self, Self::Owner)
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Owner => "owner",
			Self::Employee => "employee",
		}
	}
}

impl From<&str> for Role {
	fn from(claim: &str) -> Self {
		Self::from_claim(Some(claim))
	}
}

impl From<String> for Role {
	fn from(claim: String) -> Self {
		Self::from_claim(Some(claim.as_str()))
	}
}

impl From<Option<&str>> for Role {
	fn from(claim: Option<&str>) -> Self {
		Self::from_claim(claim)
	}
}

struct ClaimVisitor;

impl<'de> Visitor<'de> for ClaimVisitor {
	type Value = Role;

	fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("a role claim")
	}

	fn visit_str<E: de::Error>(self, v: &str) -> Result<Role, E> {
		Ok(Role::from_claim(Some(v)))
	}

	fn visit_none<E: de::Error>(self) -> Result<Role, E> {
		Ok(Role::Employee)
	}

	fn visit_unit<E: de::Error>(self) -> Result<Role, E> {
		Ok(Role::Employee)
	}

	fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Role, D::Error> {
		deserializer.deserialize_any(self)
	}

	fn visit_bool<E: de::Error>(self, _: bool) -> Result<Role, E> {
		Ok(Role::Employee)
	}

	fn visit_i64<E: de::Error>(self, _: i64) -> Result<Role, E> {
		Ok(Role::Employee)
	}

	fn visit_u64<E: de::Error>(self, _: u64) -> Result<Role, E> {
		Ok(Role::Employee)
	}

	fn visit_f64<E: de::Error>(self, _: f64) -> Result<Role, E> {
		Ok(Role::Employee)
	}

	fn visit_bytes<E: de::Error>(self, _: &[u8]) -> Result<Role, E> {
		Ok(Role::Employee)
	}

	fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Role, A::Error> {
		while seq.next_element::<IgnoredAny>()?.is_some() {}
		Ok(Role::Employee)
	}

	fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Role, A::Error> {
		while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
		Ok(Role::Employee)
	}
}

impl<'de> Deserialize<'de> for Role {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		// Option entry point so a missing struct field resolves via `visit_none`.
		deserializer.deserialize_option(ClaimVisitor)
	}
}

impl fmt::Display for Role {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case(Some("owner"), Role::Owner)]
	#[case(Some("employee"), Role::Employee)]
	#[case(Some("Owner"), Role::Employee)]
	#[case(Some(" owner"), Role::Employee)]
	#[case(Some("admin"), Role::Employee)]
	#[case(Some(""), Role::Employee)]
	#[case(None, Role::Employee)]
	fn claim_resolution_fails_closed(#[case] claim: Option<&str>, #[case] expected: Role) {
		assert_eq!(Role::from_claim(claim), expected);
	}

	#[test]
	fn deserializes_unknown_claims_as_employee() {
		let role: Role = serde_json::from_str("\"manager\"").unwrap();
		assert_eq!(role, Role::Employee);
		let role: Role = serde_json::from_str("\"owner\"").unwrap();
		assert_eq!(role, Role::Owner);
	}

	#[derive(Debug, Deserialize)]
	struct Session {
		role: Role,
	}

	#[rstest]
	#[case::null(r#"{"role":null}"#)]
	#[case::missing("{}")]
	#[case::number(r#"{"role":42}"#)]
	#[case::boolean(r#"{"role":true}"#)]
	#[case::list(r#"{"role":["owner"]}"#)]
	#[case::object(r#"{"role":{"name":"owner"}}"#)]
	fn malformed_session_roles_decode_as_employee(#[case] payload: &str) {
		let session: Session = serde_json::from_str(payload).unwrap();
		assert_eq!(session.role, Role::Employee);
	}

	#[test]
	fn session_owner_claim_decodes() {
		let session: Session = serde_json::from_str(r#"{"role":"owner"}"#).unwrap();
		assert_eq!(session.role, Role::Owner);
	}

	#[test]
	fn default_is_least_privileged() {
		assert_eq!(Role::default(), Role::Employee);
		assert!(!Role::default().is_owner());
	}
}
