//! Persisted simple-mode customization.

use rustc_hash::FxHashSet as HashSet;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Result;

/// User-chosen override of which items appear in simple mode.
///
/// Wire shape is `{ "visibleNavItems"?: string[] }`. Any entry in
/// `visible_nav_items` activates custom mode, which replaces the static
/// complexity defaults but never the owner-only floor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleModeConfig {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub visible_nav_items: Option<Vec<String>>,
}

impl SimpleModeConfig {
	pub fn with_items<I, S>(ids: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			visible_nav_items: Some(ids.into_iter().map(Into::into).collect()),
		}
	}

	/// Decodes a config as returned by the settings endpoint.
	pub fn from_json(input: &str) -> Result<Self> {
		Ok(serde_json::from_str(input)?)
	}

	/// Decodes a config, treating malformed input as "no custom config".
	pub fn from_json_or_default(input: &str) -> Self {
		Self::from_json(input).unwrap_or_else(|err| {
			warn!(error = %err, "ignoring malformed navigation config");
			Self::default()
		})
	}

	pub fn to_json(&self) -> Result<String> {
		Ok(serde_json::to_string(self)?)
	}

	/// Explicitly chosen ids; empty when unset.
	pub fn custom_visible_ids(&self) -> HashSet<&str> {
		self.visible_nav_items
			.iter()
			.flatten()
			.map(String::as_str)
			.collect()
	}

	/// Whether custom mode is active.
	pub fn is_custom(&self) -> bool {
		self.visible_nav_items
			.as_ref()
			.is_some_and(|ids| !ids.is_empty())
	}
}
