//! Resolves the host API from a loaded image at runtime.

use libloading::Library;
use thiserror::Error;
use tracing::{debug, trace};

use crate::api::HostApi;

/// Errors from resolving host symbols.
#[derive(Debug, Error)]
pub enum LoadError {
	#[error("host process image could not be opened: {0}")]
	ProcessImage(String),
	#[error("host does not export `{name}`: {reason}")]
	MissingSymbol { name: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, LoadError>;

/// A [`HostApi`] together with the library its symbols came from.
pub struct HostLibrary {
	api: HostApi,
	_lib: Library,
}

impl HostLibrary {
	/// Resolves the API from the running executable.
	///
	/// Plugins are loaded into the host process, so the host's exported
	/// symbols are visible through the process image.
	pub fn open_process() -> Result<Self> {
		Self::from_library(process_image()?)
	}

	/// Resolves the API from an already opened library.
	pub fn from_library(lib: Library) -> Result<Self> {
		let api = HostApi {
			name_to_color: required(&lib, "name_to_color")?,
			nvim_win_get_height: required(&lib, "nvim_win_get_height")?,
			nvim_win_get_cursor: required(&lib, "nvim_win_get_cursor")?,
			nvim_win_set_cursor: required(&lib, "nvim_win_set_cursor")?,
			nvim_buf_get_name: required(&lib, "nvim_buf_get_name")?,
			nvim_buf_get_extmark_by_id: required(&lib, "nvim_buf_get_extmark_by_id")?,
			nvim_err_writeln: required(&lib, "nvim_err_writeln")?,
			nvim_echo: required(&lib, "nvim_echo")?,
			nvim_notify: required(&lib, "nvim_notify")?,
			nvim_buf_get_lines: required(&lib, "nvim_buf_get_lines")?,
			get_global_lstate: required(&lib, "get_global_lstate")?,
			arena_alloc_block: required(&lib, "arena_alloc_block")?,
			arena_finish: optional(&lib, "arena_finish"),
			arena_mem_free: optional(&lib, "arena_mem_free"),
			xfree: optional(&lib, "xfree"),
		};
		debug!(
			arena_release = api.arena_finish.is_some() && api.arena_mem_free.is_some(),
			xfree = api.xfree.is_some(),
			"resolved host api"
		);
		Ok(Self { api, _lib: lib })
	}

	pub fn api(&self) -> &HostApi {
		&self.api
	}
}

#[cfg(unix)]
fn process_image() -> Result<Library> {
	Ok(libloading::os::unix::Library::this().into())
}

#[cfg(windows)]
fn process_image() -> Result<Library> {
	libloading::os::windows::Library::this()
		.map(Into::into)
		.map_err(|e| LoadError::ProcessImage(e.to_string()))
}

fn required<T: Copy>(lib: &Library, name: &'static str) -> Result<T> {
	// SAFETY: the caller's `T` is the declared signature of `name`.
	unsafe { lib.get::<T>(name.as_bytes()) }
		.map(|sym| *sym)
		.map_err(|e| LoadError::MissingSymbol {
			name,
			reason: e.to_string(),
		})
}

fn optional<T: Copy>(lib: &Library, name: &'static str) -> Option<T> {
	match required(lib, name) {
		Ok(sym) => Some(sym),
		Err(err) => {
			trace!(%err, "optional host symbol unavailable");
			None
		}
	}
}
