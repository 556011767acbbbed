use rstest::rstest;

use super::*;

#[rstest]
#[case::legacy_beats_pin(Visibility::AdvancedOnly, Some(Complexity::Simple), Some(true), SimpleRule::LegacyAdvancedOnly)]
#[case::legacy_without_complexity(Visibility::AdvancedOnly, None, None, SimpleRule::LegacyAdvancedOnly)]
#[case::pin_beats_expert(Visibility::Always, Some(Complexity::Expert), Some(true), SimpleRule::Pinned)]
#[case::pin_beats_advanced(Visibility::Always, Some(Complexity::Advanced), Some(true), SimpleRule::Pinned)]
#[case::simple(Visibility::Always, Some(Complexity::Simple), None, SimpleRule::SimpleTier)]
#[case::simple_unpinned(Visibility::Always, Some(Complexity::Simple), Some(false), SimpleRule::SimpleTier)]
#[case::expert(Visibility::Always, Some(Complexity::Expert), None, SimpleRule::ExpertTier)]
#[case::unclassified(Visibility::Always, None, None, SimpleRule::Unclassified)]
#[case::unclassified_unpinned(Visibility::Always, None, Some(false), SimpleRule::Unclassified)]
#[case::advanced(Visibility::Always, Some(Complexity::Advanced), None, SimpleRule::AdvancedTier)]
#[case::advanced_unpinned(Visibility::Always, Some(Complexity::Advanced), Some(false), SimpleRule::AdvancedTier)]
fn rule_precedence(
	#[case] visibility: Visibility,
	#[case] complexity: Option<Complexity>,
	#[case] simple_default: Option<bool>,
	#[case] expected: SimpleRule,
) {
	assert_eq!(
		SimpleRule::resolve(visibility, complexity, simple_default),
		expected
	);
}

#[test]
fn shown_rules() {
	assert!(SimpleRule::Pinned.shown_in_simple());
	assert!(SimpleRule::SimpleTier.shown_in_simple());
	assert!(SimpleRule::Unclassified.shown_in_simple());
	assert!(!SimpleRule::LegacyAdvancedOnly.shown_in_simple());
	assert!(!SimpleRule::ExpertTier.shown_in_simple());
	assert!(!SimpleRule::AdvancedTier.shown_in_simple());
}

#[test]
fn builder_sets_flags() {
	const DEF: NavItemDef = NavItemDef::entry("reports", "Reports", "/reports", "bar-chart")
		.complexity(Complexity::Expert)
		.simple_default(true);
	assert_eq!(DEF.complexity, Some(Complexity::Expert));
	assert_eq!(DEF.simple_default, Some(true));
	assert_eq!(DEF.visibility, Visibility::Always);
	assert!(!DEF.separator);
}

#[test]
fn separators_have_no_rule() {
	let entry = NavEntry::new(NavItemDef::separator("sep-team", Some("Team")), false);
	assert!(entry.is_separator());
	assert_eq!(entry.simple_rule(), None);
	assert!(entry.shown_in_simple_by_default());
}

#[test]
fn entries_resolve_rule_on_construction() {
	let entry = NavEntry::new(
		NavItemDef::entry("settings", "Settings", "/settings", "cog").complexity(Complexity::Advanced),
		false,
	);
	assert_eq!(entry.simple_rule(), Some(SimpleRule::AdvancedTier));
	assert!(!entry.shown_in_simple_by_default());
}
