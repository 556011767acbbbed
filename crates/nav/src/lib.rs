//! Navigation visibility for the crewdesk dashboard.
//!
//! The sidebar is a static [`NavRegistry`] of [`NavItemDef`]s. What a user
//! actually sees depends on three inputs:
//!
//! - **Role:** owner-only pages (billing, team, tenants, ...) are removed for
//!   every [`Role`] except [`Role::Owner`]. This floor holds in every mode and
//!   cannot be overridden by saved configuration.
//! - **Mode:** [`NavMode::Advanced`] shows everything the role permits;
//!   [`NavMode::Simple`] shows a curated subset.
//! - **Custom config:** a saved [`SimpleModeConfig`] replaces the static
//!   simple-mode defaults with an explicit list of ids.
//!
//! All filtering is pure and infallible. Unknown roles resolve to
//! [`Role::Employee`]; missing or malformed configs behave as "no custom
//! config"; ids that no longer exist contribute nothing.
//!
//! ```
//! use crewdesk_nav::{NavMode, NavRegistry, Role, SimpleModeConfig, sanitize_nav_config};
//!
//! let registry = NavRegistry::builtin();
//! let items = registry.filter_for_mode(NavMode::Advanced, None, Role::Employee);
//! assert!(items.iter().all(|item| item.id() != "billing"));
//!
//! let saved = SimpleModeConfig::with_items(["dashboard", "billing"]);
//! let cleaned = sanitize_nav_config(registry, &saved, Role::Employee);
//! assert_eq!(cleaned.visible_nav_items, Some(vec!["dashboard".to_string()]));
//! ```

pub mod builtins;
pub mod config;
pub mod error;
pub mod filter;
pub mod item;
pub mod mode;
pub mod prefs;
pub mod registry;
pub mod role;
pub mod sections;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use builtins::{BUILTIN_ITEMS, OWNER_ONLY_NAV_IDS};
pub use config::SimpleModeConfig;
pub use error::{NavError, Result};
pub use filter::{
	customizable_nav_items, default_simple_mode_items, filter_nav_for_mode, redact_for_role,
	sanitize_nav_config,
};
pub use item::{Complexity, NavEntry, NavItemDef, SimpleRule, Visibility};
pub use mode::NavMode;
pub use prefs::NavPreferences;
pub use registry::NavRegistry;
pub use role::Role;
pub use sections::collapse_empty_sections;

#[cfg(test)]
use proptest as _;
