#![allow(dead_code)]

use super::*;
use crate::builtins::OWNER_ONLY_NAV_IDS;
use crate::item::Complexity;

fn all_configs(registry: &NavRegistry) -> Vec<Option<SimpleModeConfig>> {
	let every_id: Vec<&str> = registry.entries().iter().map(NavEntry::id).collect();
	vec![
		None,
		Some(SimpleModeConfig::default()),
		Some(SimpleModeConfig::with_items(Vec::<String>::new())),
		Some(SimpleModeConfig::with_items(every_id)),
		Some(SimpleModeConfig::with_items(registry.owner_only_ids())),
		Some(SimpleModeConfig::with_items(["dashboard", "removed-page"])),
	]
}

/// Invariant: Owner-only entries never reach a non-owner.
///
/// Holds for both modes and for configs that explicitly list owner-only ids.
pub(crate) fn inv_owner_only_never_leaks() {
	let registry = NavRegistry::builtin();
	assert!(!OWNER_ONLY_NAV_IDS.is_empty());

	for role in [Role::Employee, Role::from_claim(Some("admin")), Role::from_claim(None)] {
		for mode in [NavMode::Simple, NavMode::Advanced] {
			for config in all_configs(registry) {
				let out = filter_nav_for_mode(registry, mode, config.as_ref(), registry.entries(), role);
				for item in out {
					assert!(
						!OWNER_ONLY_NAV_IDS.contains(&item.id()),
						"{} leaked to {role} in {mode} mode with {config:?}",
						item.id()
					);
				}
			}
		}
		for item in customizable_nav_items(registry, role) {
			assert!(!item.is_owner_only(), "{} offered to {role}", item.id());
		}
		for id in default_simple_mode_items(registry, role) {
			assert!(!registry.is_owner_only(id), "{id} defaulted for {role}");
		}
	}
}

#[cfg_attr(test, test)]
pub(crate) fn test_owner_only_never_leaks() {
	inv_owner_only_never_leaks()
}

/// Invariant: Advanced mode for an owner returns the input unchanged.
pub(crate) fn inv_owner_advanced_is_identity() {
	let registry = NavRegistry::builtin();
	for config in all_configs(registry) {
		let out = filter_nav_for_mode(
			registry,
			NavMode::Advanced,
			config.as_ref(),
			registry.entries(),
			Role::Owner,
		);
		let expected: Vec<&NavEntry> = registry.entries().iter().collect();
		assert_eq!(out, expected);
	}
}

#[cfg_attr(test, test)]
pub(crate) fn test_owner_advanced_is_identity() {
	inv_owner_advanced_is_identity()
}

/// Invariant: Filtering the default simple-mode output again changes nothing.
pub(crate) fn inv_default_simple_is_idempotent() {
	let registry = NavRegistry::builtin();
	for role in [Role::Owner, Role::Employee] {
		let once = filter_nav_for_mode(registry, NavMode::Simple, None, registry.entries(), role);
		let twice = filter_nav_for_mode(registry, NavMode::Simple, None, once.iter().copied(), role);
		assert_eq!(once, twice);

		for item in &once {
			let def = item.def();
			assert!(
				def.separator
					|| def.complexity != Some(Complexity::Expert)
					|| def.simple_default == Some(true),
				"expert item {} shown by default",
				def.id
			);
		}
	}
}

#[cfg_attr(test, test)]
pub(crate) fn test_default_simple_is_idempotent() {
	inv_default_simple_is_idempotent()
}

/// Invariant: Sanitized configs hold no owner-only ids for non-owners, and
/// owners get their config back untouched.
pub(crate) fn inv_sanitize_strips_owner_only() {
	let registry = NavRegistry::builtin();
	for config in all_configs(registry).into_iter().flatten() {
		let sanitized = sanitize_nav_config(registry, &config, Role::Employee);
		for id in sanitized.visible_nav_items.iter().flatten() {
			assert!(!registry.is_owner_only(id), "{id} survived sanitizing");
		}

		let owner = sanitize_nav_config(registry, &config, Role::Owner);
		assert!(matches!(owner, Cow::Borrowed(c) if std::ptr::eq(c, &config)));
	}
}

#[cfg_attr(test, test)]
pub(crate) fn test_sanitize_strips_owner_only() {
	inv_sanitize_strips_owner_only()
}
