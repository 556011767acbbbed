//! Navigation item definitions and their resolved simple-mode classification.

/// Legacy two-state visibility flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
	/// Shown in both modes unless other rules say otherwise.
	#[default]
	Always,
	/// Never part of the simple-mode defaults.
	AdvancedOnly,
}

/// Static complexity classification used for simple-mode defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Complexity {
	Simple,
	Advanced,
	Expert,
}

/// Definition of a navigation entry or section separator.
///
/// Definitions are plain `const` data; see [`NavItemDef::entry`] and
/// [`NavItemDef::separator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItemDef {
	/// Stable unique key.
	pub id: &'static str,
	/// Display label.
	pub label: &'static str,
	/// Icon name understood by the rendering layer.
	pub icon: &'static str,
	/// Route path. Empty for separators.
	pub path: &'static str,
	/// Non-selectable grouping divider.
	pub separator: bool,
	/// Label shown on a separator.
	pub section_header: Option<&'static str>,
	pub visibility: Visibility,
	pub complexity: Option<Complexity>,
	/// Explicit override of complexity-based default inclusion.
	pub simple_default: Option<bool>,
}

impl NavItemDef {
	/// A selectable page entry with no classification.
	pub const fn entry(
		id: &'static str,
		label: &'static str,
		path: &'static str,
		icon: &'static str,
	) -> Self {
		Self {
			id,
			label,
			icon,
			path,
			separator: false,
			section_header: None,
			visibility: Visibility::Always,
			complexity: None,
			simple_default: None,
		}
	}

	/// A grouping divider, optionally labeled.
	pub const fn separator(id: &'static str, section_header: Option<&'static str>) -> Self {
		Self {
			id,
			label: "",
			icon: "",
			path: "",
			separator: true,
			section_header,
			visibility: Visibility::Always,
			complexity: None,
			simple_default: None,
		}
	}

	pub const fn complexity(mut self, complexity: Complexity) -> Self {
		self.complexity = Some(complexity);
		self
	}

	pub const fn simple_default(mut self, simple_default: bool) -> Self {
		self.simple_default = Some(simple_default);
		self
	}

	pub const fn advanced_only(mut self) -> Self {
		self.visibility = Visibility::AdvancedOnly;
		self
	}
}

/// Which rule decides an item's default simple-mode visibility.
///
/// Resolved once per item when the registry is built, in precedence order:
///
/// 1. [`SimpleRule::LegacyAdvancedOnly`] - `visibility` is `AdvancedOnly`
/// 2. [`SimpleRule::Pinned`] - `simple_default` is `Some(true)`
/// 3. [`SimpleRule::SimpleTier`] - complexity `Simple`
/// 4. [`SimpleRule::ExpertTier`] - complexity `Expert`
/// 5. [`SimpleRule::Unclassified`] - no complexity at all
/// 6. [`SimpleRule::AdvancedTier`] - complexity `Advanced` without a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimpleRule {
	LegacyAdvancedOnly,
	Pinned,
	SimpleTier,
	ExpertTier,
	Unclassified,
	AdvancedTier,
}

impl SimpleRule {
	pub const fn resolve(
		visibility: Visibility,
		complexity: Option<Complexity>,
		simple_default: Option<bool>,
	) -> Self {
		if matches!(visibility, Visibility::AdvancedOnly) {
			return Self::LegacyAdvancedOnly;
		}
		if matches!(simple_default, Some(true)) {
			return Self::Pinned;
		}
		match complexity {
			Some(Complexity::Simple) => Self::SimpleTier,
			Some(Complexity::Expert) => Self::ExpertTier,
			None => Self::Unclassified,
			Some(Complexity::Advanced) => Self::AdvancedTier,
		}
	}

	/// Resolves the rule for a definition.
	pub const fn for_def(def: &NavItemDef) -> Self {
		Self::resolve(def.visibility, def.complexity, def.simple_default)
	}

	/// Whether items under this rule appear in simple mode by default.
	#[inline]
	pub const fn shown_in_simple(self) -> bool {
		matches!(self, Self::Pinned | Self::SimpleTier | Self::Unclassified)
	}
}

/// A registered navigation item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
	def: NavItemDef,
	rule: Option<SimpleRule>,
	owner_only: bool,
}

impl NavEntry {
	pub(crate) fn new(def: NavItemDef, owner_only: bool) -> Self {
		let rule = (!def.separator).then(|| SimpleRule::for_def(&def));
		Self {
			def,
			rule,
			owner_only,
		}
	}

	#[inline]
	pub fn id(&self) -> &'static str {
		self.def.id
	}

	#[inline]
	pub fn def(&self) -> &NavItemDef {
		&self.def
	}

	#[inline]
	pub fn is_separator(&self) -> bool {
		self.def.separator
	}

	/// Restricted to owners.
	#[inline]
	pub fn is_owner_only(&self) -> bool {
		self.owner_only
	}

	/// Resolved classification; `None` for separators.
	#[inline]
	pub fn simple_rule(&self) -> Option<SimpleRule> {
		self.rule
	}

	/// Default simple-mode inclusion. Separators are always shown.
	#[inline]
	pub fn shown_in_simple_by_default(&self) -> bool {
		self.rule.is_none_or(SimpleRule::shown_in_simple)
	}
}

#[cfg(test)]
mod tests;
