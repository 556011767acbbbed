//! Immutable navigation registry.
//!
//! A [`NavRegistry`] is built once from static [`NavItemDef`] tables and never
//! mutated afterwards. Filtering functions take it as an explicit argument, so
//! tests can build their own registries instead of patching globals.

use std::sync::OnceLock;

use rustc_hash::{FxHashMap as HashMap, FxHashSet as HashSet};
use tracing::debug;

use crate::builtins::{BUILTIN_ITEMS, OWNER_ONLY_NAV_IDS};
use crate::config::SimpleModeConfig;
use crate::error::{NavError, Result};
use crate::filter::filter_nav_for_mode;
use crate::item::{NavEntry, NavItemDef};
use crate::mode::NavMode;
use crate::prefs::NavPreferences;
use crate::role::Role;
use crate::sections::collapse_empty_sections;

static BUILTIN: OnceLock<NavRegistry> = OnceLock::new();

/// Ordered, indexed set of navigation entries plus the owner-only floor.
#[derive(Debug, Clone)]
pub struct NavRegistry {
	entries: Vec<NavEntry>,
	by_id: HashMap<&'static str, usize>,
	by_path: HashMap<&'static str, usize>,
	owner_only: HashSet<&'static str>,
}

impl NavRegistry {
	/// Builds a registry, preserving definition order.
	///
	/// Fails if ids or route paths collide, an owner-only id is not registered,
	/// or a separator carries a complexity classification.
	pub fn new(defs: &[NavItemDef], owner_only: &[&'static str]) -> Result<Self> {
		let mut by_id = HashMap::default();
		let mut by_path = HashMap::default();

		for (idx, def) in defs.iter().enumerate() {
			if by_id.insert(def.id, idx).is_some() {
				return Err(NavError::DuplicateId(def.id));
			}
			if def.separator {
				if def.complexity.is_some() || def.simple_default.is_some() {
					return Err(NavError::ClassifiedSeparator(def.id));
				}
			} else if !def.path.is_empty() && by_path.insert(def.path, idx).is_some() {
				return Err(NavError::DuplicatePath(def.path));
			}
		}

		let mut owner_set = HashSet::default();
		for &id in owner_only {
			if !by_id.contains_key(id) {
				return Err(NavError::UnknownOwnerOnlyId(id.to_string()));
			}
			owner_set.insert(id);
		}

		let entries = defs
			.iter()
			.map(|def| NavEntry::new(*def, owner_set.contains(def.id)))
			.collect();

		Ok(Self {
			entries,
			by_id,
			by_path,
			owner_only: owner_set,
		})
	}

	/// The process-wide builtin registry.
	///
	/// # Panics
	///
	/// Panics on first use if the builtin table is inconsistent. This is
	/// covered by the crate's tests.
	pub fn builtin() -> &'static NavRegistry {
		BUILTIN.get_or_init(|| {
			NavRegistry::new(BUILTIN_ITEMS, OWNER_ONLY_NAV_IDS)
				.unwrap_or_else(|err| panic!("invalid builtin navigation registry: {err}"))
		})
	}

	/// All entries in definition order.
	#[inline]
	pub fn entries(&self) -> &[NavEntry] {
		&self.entries
	}

	pub fn get(&self, id: &str) -> Option<&NavEntry> {
		self.by_id.get(id).map(|&idx| &self.entries[idx])
	}

	/// Looks up the entry that owns a route path.
	pub fn entry_for_path(&self, path: &str) -> Option<&NavEntry> {
		self.by_path.get(path).map(|&idx| &self.entries[idx])
	}

	#[inline]
	pub fn is_owner_only(&self, id: &str) -> bool {
		self.owner_only.contains(id)
	}

	/// Owner-only ids in registry order.
	pub fn owner_only_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
		self.entries
			.iter()
			.filter(|e| e.is_owner_only())
			.map(NavEntry::id)
	}

	/// Whether `role` may open the page `id`, independent of mode.
	///
	/// Unknown ids and separators are never accessible.
	pub fn is_accessible(&self, id: &str, role: Role) -> bool {
		self.get(id)
			.is_some_and(|e| !e.is_separator() && (role.is_owner() || !e.is_owner_only()))
	}

	/// Ids referenced by `config` that are not registered.
	///
	/// Such ids contribute nothing when filtering; this only reports them.
	pub fn unknown_ids<'c>(&self, config: &'c SimpleModeConfig) -> Vec<&'c str> {
		config
			.visible_nav_items
			.iter()
			.flatten()
			.map(String::as_str)
			.filter(|id| !self.by_id.contains_key(*id))
			.collect()
	}

	/// Mode filter over every registered entry.
	pub fn filter_for_mode(
		&self,
		mode: NavMode,
		config: Option<&SimpleModeConfig>,
		role: Role,
	) -> Vec<&NavEntry> {
		filter_nav_for_mode(self, mode, config, &self.entries, role)
	}

	/// Items to render for a user's saved preferences.
	pub fn visible_items(&self, prefs: &NavPreferences, role: Role) -> Vec<&NavEntry> {
		let items = self.filter_for_mode(prefs.mode, Some(&prefs.simple), role);
		let total = items.len();
		if !prefs.collapse_empty_sections {
			return items;
		}
		let items = collapse_empty_sections(items);
		debug!(
			mode = %prefs.mode,
			role = %role,
			collapsed = total - items.len(),
			"resolved visible navigation"
		);
		items
	}
}
