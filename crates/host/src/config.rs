//! Plugin configuration, written in TOML.
//!
//! Every field is optional; an empty file yields [`Config::default`].
//!
//! ```toml
//! [log]
//! level = "debug"
//! file = "/tmp/moonwalk.log"
//!
//! [echo]
//! history = false
//!
//! [lines]
//! strict = true
//!
//! [notify]
//! level = "warn"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::types::LogLevel;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},
	/// The file is not valid TOML or does not match the schema.
	#[error("failed to parse config: {0}")]
	Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	pub log: LogConfig,
	pub echo: EchoConfig,
	pub lines: LinesConfig,
	pub notify: NotifyConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
	/// Most verbose level written to the log.
	pub level: LogLevel,
	/// Log destination. Nothing is logged without one, since the host owns
	/// the process's standard streams.
	pub file: Option<PathBuf>,
}

impl Default for LogConfig {
	fn default() -> Self {
		Self {
			level: LogLevel::Warn,
			file: None,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EchoConfig {
	/// Add echoed messages to the message history.
	pub history: bool,
	/// Forwarded as the `verbose` option when set.
	pub verbose: Option<bool>,
}

impl Default for EchoConfig {
	fn default() -> Self {
		Self {
			history: true,
			verbose: None,
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LinesConfig {
	/// Fail on out-of-range line indices instead of clamping.
	pub strict: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NotifyConfig {
	/// Level used by [`Session::notify_default`](crate::Session::notify_default).
	pub level: LogLevel,
}

impl Config {
	pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(s)?)
	}

	pub fn load(path: &Path) -> Result<Self, ConfigError> {
		let content = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::from_toml_str(&content)
	}

	/// Loads `path` when given, otherwise returns the defaults.
	pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
		match path {
			Some(path) => Self::load(path),
			None => Ok(Self::default()),
		}
	}
}

#[cfg(test)]
mod tests;
