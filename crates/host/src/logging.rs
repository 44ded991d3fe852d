//! Tracing subscriber setup for plugins running inside the host.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing::info;

use crate::config::LogConfig;
use crate::error::{Error, Result};

/// Installs a global subscriber writing to the configured log file.
///
/// Returns `false` without installing anything when no file is configured.
pub fn init(config: &LogConfig) -> Result<bool> {
	let Some(path) = &config.file else {
		return Ok(false);
	};

	if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
		std::fs::create_dir_all(parent).map_err(|error| Error::LogFile {
			path: path.clone(),
			error,
		})?;
	}
	let file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.map_err(|error| Error::LogFile {
			path: path.clone(),
			error,
		})?;

	let subscriber = tracing_subscriber::fmt()
		.with_max_level(config.level.to_level_filter())
		.with_ansi(false)
		.with_writer(Mutex::new(file))
		.finish();

	tracing::subscriber::set_global_default(subscriber)?;

	info!(path = %path.display(), "logging initialized");
	Ok(true)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::types::LogLevel;

	#[test]
	fn no_file_installs_nothing() {
		assert!(!init(&LogConfig::default()).unwrap());
	}

	#[test]
	fn writes_to_nested_log_file_once() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("logs").join("moonwalk.log");
		let config = LogConfig {
			level: LogLevel::Debug,
			file: Some(path.clone()),
		};

		assert!(init(&config).unwrap());
		tracing::debug!("after init");
		let written = std::fs::read_to_string(&path).unwrap();
		assert!(written.contains("logging initialized"), "{written}");
		assert!(written.contains("after init"), "{written}");

		assert!(matches!(init(&config), Err(Error::Subscriber(_))));
	}
}
