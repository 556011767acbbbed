//! Empty-section cleanup for filtered navigation.
//!
//! [`filter_nav_for_mode`](crate::filter::filter_nav_for_mode) keeps every
//! separator. Rendering code that does not want dangling headers runs
//! [`collapse_empty_sections`] afterwards.

use crate::item::NavEntry;

/// Drops separators with no item between them and the next separator (or the
/// end of the list). Items are never dropped and order is preserved.
pub fn collapse_empty_sections<'a>(items: Vec<&'a NavEntry>) -> Vec<&'a NavEntry> {
	let mut out: Vec<&'a NavEntry> = Vec::with_capacity(items.len());
	for item in items {
		if item.is_separator()
			&& let Some(last) = out.last()
			&& last.is_separator()
		{
			out.pop();
		}
		out.push(item);
	}
	if out.last().is_some_and(|last| last.is_separator()) {
		out.pop();
	}
	out
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::mode::NavMode;
	use crate::role::Role;
	use crate::test_fixtures::{ids, sectioned};

	#[test]
	fn drops_sections_left_empty_by_filtering() {
		let reg = sectioned();
		let filtered = reg.filter_for_mode(NavMode::Simple, None, Role::Employee);
		assert_eq!(
			ids(collapse_empty_sections(filtered)),
			vec!["dashboard", "sep-ops", "schedule", "sep-admin", "help"]
		);
	}

	#[test]
	fn trailing_separator_is_dropped() {
		let reg = sectioned();
		let filtered: Vec<&NavEntry> = reg.entries().iter().take(9).collect();
		let collapsed = collapse_empty_sections(filtered);
		assert_eq!(ids(collapsed).last(), Some(&"referrals"));
	}

	#[test]
	fn keeps_everything_when_no_section_is_empty() {
		let reg = sectioned();
		let all: Vec<&NavEntry> = reg.entries().iter().collect();
		assert_eq!(collapse_empty_sections(all.clone()), all);
	}

	#[test]
	fn separator_only_lists_collapse_to_nothing() {
		let reg = sectioned();
		let seps: Vec<&NavEntry> = reg.entries().iter().filter(|e| e.is_separator()).collect();
		assert!(collapse_empty_sections(seps).is_empty());
		assert!(collapse_empty_sections(Vec::new()).is_empty());
	}
}
