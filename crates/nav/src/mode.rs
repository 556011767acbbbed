//! Simple/advanced navigation mode.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::NavError;

/// User-facing toggle between the curated and the full navigation set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavMode {
	/// Reduced set: static defaults or the user's custom selection.
	#[default]
	Simple,
	/// Everything the role permits.
	Advanced,
}

impl NavMode {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Simple => "simple",
			Self::Advanced => "advanced",
		}
	}

	/// Parses a mode, falling back to [`NavMode::Simple`] for unknown values.
	///
	/// Use [`str::parse`] when an unknown mode should be reported instead.
	pub fn parse_or_simple(value: &str) -> Self {
		value.parse().unwrap_or_else(|err: NavError| {
			warn!(error = %err, "falling back to simple navigation mode");
			Self::Simple
		})
	}
}

impl FromStr for NavMode {
	type Err = NavError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"simple" => Ok(Self::Simple),
			"advanced" => Ok(Self::Advanced),
			other => Err(NavError::UnknownMode(other.to_string())),
		}
	}
}

impl std::fmt::Display for NavMode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_known_modes() {
		assert_eq!("simple".parse::<NavMode>().unwrap(), NavMode::Simple);
		assert_eq!("advanced".parse::<NavMode>().unwrap(), NavMode::Advanced);
	}

	#[test]
	fn unknown_mode_is_an_error() {
		let err = "expert".parse::<NavMode>().unwrap_err();
		assert!(matches!(err, NavError::UnknownMode(ref m) if m == "expert"));
	}

	#[test]
	fn lenient_parse_fails_closed_to_simple() {
		assert_eq!(NavMode::parse_or_simple("Advanced"), NavMode::Simple);
		assert_eq!(NavMode::parse_or_simple(""), NavMode::Simple);
		assert_eq!(NavMode::parse_or_simple("advanced"), NavMode::Advanced);
	}
}
