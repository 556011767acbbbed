#![cfg_attr(doc, allow(rustdoc::private_intra_doc_links))]
//! Role redaction and simple/advanced mode filtering.
//!
//! # Mental Model
//!
//! 1. **Redaction:** [`redact_for_role`] removes owner-only entries for every
//!    role except [`Role::Owner`]. It runs before any mode logic.
//! 2. **Mode:** [`filter_nav_for_mode`] returns the redacted list as-is in
//!    advanced mode. In simple mode it applies the user's custom selection if
//!    one exists, otherwise each entry's resolved [`SimpleRule`].
//! 3. **Settings:** [`customizable_nav_items`] and [`default_simple_mode_items`]
//!    feed the customization screen; [`sanitize_nav_config`] runs on every save.
//!
//! Separators always survive filtering. Dropping empty sections is a separate
//! pass, see [`crate::sections`].
//!
//! # Invariants
//!
//! - Owner-only entries never reach a non-owner, in any mode, with any config.
//!   - Enforced in: [`redact_for_role`], re-checked in the custom branch of [`filter_nav_for_mode`].
//!   - Tested by: [`crate::filter::invariants::test_owner_only_never_leaks`]
//!   - Failure symptom: Employees see billing or tenant administration.
//!
//! - Advanced mode for an owner is the identity.
//!   - Enforced in: [`filter_nav_for_mode`].
//!   - Tested by: [`crate::filter::invariants::test_owner_advanced_is_identity`]
//!   - Failure symptom: Owners lose pages after switching to advanced mode.
//!
//! - Default simple filtering is idempotent.
//!   - Enforced in: [`filter_nav_for_mode`] (separators pass through, rules are per item).
//!   - Tested by: [`crate::filter::invariants::test_default_simple_is_idempotent`]
//!   - Failure symptom: Re-rendering a filtered list drops more items.
//!
//! - Sanitized configs hold no owner-only ids for non-owners.
//!   - Enforced in: [`sanitize_nav_config`].
//!   - Tested by: [`crate::filter::invariants::test_sanitize_strips_owner_only`]
//!   - Failure symptom: A downgraded owner regains access through a stale config.
//!
//! [`SimpleRule`]: crate::item::SimpleRule

use std::borrow::Cow;

use tracing::{Level, debug, warn};

use crate::config::SimpleModeConfig;
use crate::item::NavEntry;
use crate::mode::NavMode;
use crate::registry::NavRegistry;
use crate::role::Role;

/// Removes owner-only entries unless `role` is [`Role::Owner`].
pub fn redact_for_role<'a>(
	registry: &NavRegistry,
	items: impl IntoIterator<Item = &'a NavEntry>,
	role: Role,
) -> Vec<&'a NavEntry> {
	items
		.into_iter()
		.filter(|item| role.is_owner() || !registry.is_owner_only(item.id()))
		.collect()
}

/// Returns the entries to render for `mode`, preserving input order.
pub fn filter_nav_for_mode<'a>(
	registry: &NavRegistry,
	mode: NavMode,
	config: Option<&SimpleModeConfig>,
	items: impl IntoIterator<Item = &'a NavEntry>,
	role: Role,
) -> Vec<&'a NavEntry> {
	let permitted = redact_for_role(registry, items, role);

	match mode {
		NavMode::Advanced => permitted,
		NavMode::Simple => {
			let custom = config.map(SimpleModeConfig::custom_visible_ids).unwrap_or_default();
			if custom.is_empty() {
				return permitted
					.into_iter()
					.filter(|item| item.shown_in_simple_by_default())
					.collect();
			}

			if tracing::enabled!(Level::DEBUG)
				&& let Some(config) = config
			{
				let unknown = registry.unknown_ids(config);
				if !unknown.is_empty() {
					debug!(?unknown, "navigation config references unregistered ids");
				}
			}

			permitted
				.into_iter()
				.filter(|item| {
					if item.is_separator() {
						return true;
					}
					if !role.is_owner() && registry.is_owner_only(item.id()) {
						return false;
					}
					custom.contains(item.id())
				})
				.collect()
		}
	}
}

/// Every selectable entry the role may choose from in the settings screen.
pub fn customizable_nav_items(registry: &NavRegistry, role: Role) -> Vec<&NavEntry> {
	redact_for_role(registry, registry.entries(), role)
		.into_iter()
		.filter(|item| !item.is_separator())
		.collect()
}

/// Ids shown in simple mode when no custom config exists.
pub fn default_simple_mode_items(registry: &NavRegistry, role: Role) -> Vec<&'static str> {
	filter_nav_for_mode(registry, NavMode::Simple, None, registry.entries(), role)
		.into_iter()
		.filter(|item| !item.is_separator())
		.map(NavEntry::id)
		.collect()
}

/// Strips owner-only ids from `config` unless `role` is [`Role::Owner`].
///
/// Returns the input unchanged (borrowed) for owners and for configs without
/// `visible_nav_items`.
///
/// A config listing only owner-only ids sanitizes to an empty list, which is
/// not a custom config: simple mode then falls back to the static defaults.
pub fn sanitize_nav_config<'c>(
	registry: &NavRegistry,
	config: &'c SimpleModeConfig,
	role: Role,
) -> Cow<'c, SimpleModeConfig> {
	let Some(ids) = config.visible_nav_items.as_ref() else {
		return Cow::Borrowed(config);
	};
	if role.is_owner() {
		return Cow::Borrowed(config);
	}

	let kept: Vec<String> = ids
		.iter()
		.filter(|id| !registry.is_owner_only(id))
		.cloned()
		.collect();
	let stripped = ids.len() - kept.len();
	if stripped > 0 {
		warn!(stripped, role = %role, "removed owner-only ids from navigation config");
	}

	Cow::Owned(SimpleModeConfig {
		visible_nav_items: Some(kept),
	})
}

#[cfg(any(test, doc))]
pub(crate) mod invariants;
