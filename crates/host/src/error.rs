//! Error taxonomy of the safe layer.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

/// Failure of a host call or of moving values across the boundary.
#[derive(Debug, Error)]
pub enum Error {
	/// Unexpected host-side failure.
	#[error("host exception: {0}")]
	Exception(String),
	/// The host rejected the arguments or options.
	#[error("validation failed: {0}")]
	Validation(String),
	/// The host reported an error category this crate does not know.
	#[error("host error of unknown type {ty}: {msg}")]
	UnknownErrorType {
		/// Raw `ErrorType` value.
		ty: i32,
		/// Message the host attached, possibly empty.
		msg: String,
	},
	/// A string passed to the host contained a NUL byte.
	#[error("string contains an interior NUL byte at {0}")]
	InteriorNul(usize),
	/// The host returned an object with an unknown type tag.
	#[error("unknown object type tag {0}")]
	UnknownObjectType(i32),
	/// A host result did not have the documented shape.
	#[error("unexpected result shape: expected {expected}, got {got}")]
	UnexpectedShape {
		/// Shape the operation documents.
		expected: &'static str,
		/// What was received instead.
		got: String,
	},
	/// The operation needs an interpreter state and the host has none.
	#[error("host has no interpreter state")]
	NoInterpreter,
	/// Host symbols could not be resolved.
	#[error(transparent)]
	Load(#[from] moonwalk_sys::LoadError),
	/// Configuration could not be loaded.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// The log file could not be opened.
	#[error("cannot open log file {path}: {error}")]
	LogFile {
		/// Configured log path.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},
	/// A global tracing subscriber was already installed.
	#[error(transparent)]
	Subscriber(#[from] tracing::subscriber::SetGlobalDefaultError),
}

impl Error {
	/// Whether the host rejected the caller's input.
	pub fn is_validation(&self) -> bool {
		matches!(self, Self::Validation(_))
	}

	/// Whether the error came from the host rather than from this crate.
	pub fn is_host(&self) -> bool {
		matches!(self, Self::Exception(_) | Self::Validation(_) | Self::UnknownErrorType { .. })
	}
}

impl From<std::ffi::NulError> for Error {
	fn from(err: std::ffi::NulError) -> Self {
		Self::InteriorNul(err.nul_position())
	}
}

/// Result type for host operations.
pub type Result<T> = std::result::Result<T, Error>;
