//! Builtin dashboard navigation.

use crate::item::Complexity::{Advanced, Expert, Simple};
use crate::item::NavItemDef;

/// Ids hidden from every role except owner, regardless of mode or saved config.
pub const OWNER_ONLY_NAV_IDS: &[&str] = &[
	"billing",
	"team",
	"industry-packs",
	"integrations",
	"tenants",
];

/// Sidebar entries in display order.
pub const BUILTIN_ITEMS: &[NavItemDef] = &[
	NavItemDef::entry("dashboard", "Dashboard", "/", "layout-dashboard")
		.complexity(Simple)
		.simple_default(true),
	NavItemDef::separator("sep-work", Some("Work")),
	NavItemDef::entry("schedule", "Schedule", "/schedule", "calendar")
		.complexity(Simple)
		.simple_default(true),
	NavItemDef::entry("jobs", "Jobs", "/jobs", "clipboard-list").complexity(Simple),
	NavItemDef::entry("shifts", "Shifts", "/shifts", "clock").complexity(Advanced),
	NavItemDef::entry("dispatch", "Dispatch Board", "/dispatch", "map").complexity(Expert),
	NavItemDef::separator("sep-customers", Some("Customers")),
	NavItemDef::entry("customers", "Customers", "/customers", "users")
		.complexity(Simple)
		.simple_default(true),
	NavItemDef::entry("loyalty", "Loyalty", "/loyalty", "gift").complexity(Advanced),
	NavItemDef::entry("referrals", "Referrals", "/referrals", "share-2").complexity(Advanced),
	NavItemDef::entry("reviews", "Reviews", "/reviews", "star"),
	NavItemDef::separator("sep-messaging", Some("Messaging")),
	NavItemDef::entry("messages", "Messages", "/messages", "message-square").complexity(Simple),
	NavItemDef::entry("sms-templates", "SMS Templates", "/templates/sms", "smartphone")
		.complexity(Advanced),
	NavItemDef::entry("email-templates", "Email Templates", "/templates/email", "mail")
		.complexity(Advanced),
	NavItemDef::entry("campaigns", "Campaigns", "/campaigns", "megaphone").advanced_only(),
	NavItemDef::separator("sep-business", Some("Business")),
	NavItemDef::entry("invoices", "Invoices", "/invoices", "receipt").complexity(Simple),
	NavItemDef::entry("reports", "Reports", "/reports", "bar-chart-3").complexity(Expert),
	NavItemDef::entry("homepage", "Homepage", "/homepage", "globe").complexity(Advanced),
	NavItemDef::entry("industry-packs", "Industry Packs", "/industry-packs", "package")
		.complexity(Expert),
	NavItemDef::separator("sep-admin", Some("Administration")),
	NavItemDef::entry("team", "Team", "/team", "user-cog").complexity(Advanced),
	NavItemDef::entry("billing", "Billing", "/billing", "credit-card")
		.complexity(Simple)
		.simple_default(true),
	NavItemDef::entry("integrations", "Integrations", "/integrations", "plug").complexity(Expert),
	NavItemDef::entry("tenants", "Tenants", "/tenants", "building-2").advanced_only(),
	NavItemDef::entry("settings", "Settings", "/settings", "settings").complexity(Advanced),
	NavItemDef::separator("sep-support", None),
	NavItemDef::entry("help", "Help", "/help", "life-buoy"),
];
