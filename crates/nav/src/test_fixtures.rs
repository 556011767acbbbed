//! Small registries shared by unit tests.

use crate::item::{Complexity, NavItemDef};
use crate::registry::NavRegistry;

pub(crate) const TRIO: &[NavItemDef] = &[
	NavItemDef::entry("dashboard", "Dashboard", "/", "layout-dashboard")
		.complexity(Complexity::Simple)
		.simple_default(true),
	NavItemDef::entry("settings", "Settings", "/settings", "cog").complexity(Complexity::Advanced),
	NavItemDef::entry("tenants", "Tenants", "/tenants", "building").advanced_only(),
];

/// `dashboard` (simple, pinned), `settings` (advanced), `tenants`
/// (advanced-only, owner-only).
pub(crate) fn trio() -> NavRegistry {
	NavRegistry::new(TRIO, &["tenants"]).unwrap()
}

pub(crate) const SECTIONED: &[NavItemDef] = &[
	NavItemDef::entry("dashboard", "Dashboard", "/", "layout-dashboard").complexity(Complexity::Simple),
	NavItemDef::separator("sep-ops", Some("Operations")),
	NavItemDef::entry("schedule", "Schedule", "/schedule", "calendar").complexity(Complexity::Simple),
	NavItemDef::entry("shifts", "Shifts", "/shifts", "clock").complexity(Complexity::Advanced),
	NavItemDef::entry("automations", "Automations", "/automations", "zap").complexity(Complexity::Expert),
	NavItemDef::separator("sep-growth", Some("Growth")),
	NavItemDef::entry("loyalty", "Loyalty", "/loyalty", "gift").complexity(Complexity::Advanced),
	NavItemDef::entry("referrals", "Referrals", "/referrals", "share").complexity(Complexity::Expert),
	NavItemDef::separator("sep-admin", Some("Admin")),
	NavItemDef::entry("billing", "Billing", "/billing", "credit-card").complexity(Complexity::Simple),
	NavItemDef::entry("tenants", "Tenants", "/tenants", "building").advanced_only(),
	NavItemDef::entry("help", "Help", "/help", "life-buoy"),
];

/// Three sections with a mix of classifications; `billing` and `tenants`
/// are owner-only.
pub(crate) fn sectioned() -> NavRegistry {
	NavRegistry::new(SECTIONED, &["billing", "tenants"]).unwrap()
}

pub(crate) fn ids<'a>(items: impl IntoIterator<Item = &'a crate::item::NavEntry>) -> Vec<&'static str> {
	items.into_iter().map(|e| e.id()).collect()
}
