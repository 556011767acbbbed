//! Error types for registry construction and preference parsing.
//!
//! Filtering itself is total and never produces these; they surface only when
//! a registry is assembled or persisted preferences are decoded.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when building a registry or loading preferences.
#[derive(Debug, Error)]
pub enum NavError {
	/// Two definitions share the same `id`.
	#[error("duplicate navigation id: {0}")]
	DuplicateId(&'static str),

	/// Two entries route to the same path.
	#[error("duplicate navigation path: {0}")]
	DuplicatePath(&'static str),

	/// An owner-only id does not name any registered item.
	#[error("owner-only id {0:?} is not in the registry")]
	UnknownOwnerOnlyId(String),

	/// A separator carries complexity or simple-default flags.
	#[error("separator {0:?} must not carry complexity or simple_default")]
	ClassifiedSeparator(&'static str),

	/// A mode string is neither `simple` nor `advanced`.
	#[error("unknown navigation mode: {0:?} (expected 'simple' or 'advanced')")]
	UnknownMode(String),

	/// The persisted visibility config is not valid JSON of the expected shape.
	#[error("invalid navigation config JSON: {0}")]
	Json(#[from] serde_json::Error),

	/// The preferences file is not valid TOML of the expected shape.
	#[error("invalid navigation preferences: {0}")]
	Toml(#[from] toml::de::Error),

	/// Preferences could not be serialized.
	#[error("failed to serialize navigation preferences: {0}")]
	TomlSerialize(#[from] toml::ser::Error),

	/// Error reading a preferences file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},
}

/// Result type for navigation operations that can fail.
pub type Result<T> = std::result::Result<T, NavError>;
