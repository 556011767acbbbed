//! Per-user navigation preferences.
//!
//! Preferences are stored as TOML:
//!
//! ```toml
//! mode = "simple"
//! collapse_empty_sections = true
//!
//! [simple]
//! visibleNavItems = ["dashboard", "schedule"]
//! ```
//!
//! An unknown `mode` is a parse error rather than a silent fallback.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::SimpleModeConfig;
use crate::error::{NavError, Result};
use crate::filter::sanitize_nav_config;
use crate::mode::NavMode;
use crate::registry::NavRegistry;
use crate::role::Role;

/// Saved navigation preferences for one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavPreferences {
	pub mode: NavMode,
	/// Drop section headers left without items after filtering.
	pub collapse_empty_sections: bool,
	/// Custom simple-mode selection.
	pub simple: SimpleModeConfig,
}

impl Default for NavPreferences {
	fn default() -> Self {
		Self {
			mode: NavMode::Simple,
			collapse_empty_sections: true,
			simple: SimpleModeConfig::default(),
		}
	}
}

impl NavPreferences {
	/// Parse preferences from a TOML string.
	pub fn parse(input: &str) -> Result<Self> {
		Ok(toml::from_str(input)?)
	}

	/// Load preferences from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| NavError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;
		Self::parse(&content)
	}

	pub fn to_toml(&self) -> Result<String> {
		Ok(toml::to_string(self)?)
	}

	/// Copy with owner-only ids stripped from the simple-mode selection.
	///
	/// Call on every save path so a role downgrade cannot be undone by a
	/// config written while the user was an owner.
	pub fn sanitized(&self, registry: &NavRegistry, role: Role) -> Self {
		Self {
			simple: sanitize_nav_config(registry, &self.simple, role).into_owned(),
			..self.clone()
		}
	}
}
