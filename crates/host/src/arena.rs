//! Scoped allocation region for calls whose results live in host memory.

use moonwalk_sys::{ARENA_EMPTY, Arena, HostApi};
use tracing::{trace, warn};

/// An arena released exactly once, when the scope ends.
///
/// Values drawn from the arena must be copied out before the scope is
/// dropped; they are never freed individually.
pub struct ArenaScope<'h> {
	raw: Arena,
	api: &'h HostApi,
}

impl<'h> ArenaScope<'h> {
	pub fn new(api: &'h HostApi) -> Self {
		Self { raw: ARENA_EMPTY, api }
	}

	pub fn as_mut_ptr(&mut self) -> *mut Arena {
		&mut self.raw
	}

	pub fn raw(&self) -> &Arena {
		&self.raw
	}

	/// Asks the host for a fresh block.
	pub fn alloc_block(&mut self) {
		// SAFETY: `raw` is a valid arena for the lifetime of the call.
		unsafe { (self.api.arena_alloc_block)(&mut self.raw) };
		trace!(size = self.raw.size, "arena block allocated");
	}
}

impl Drop for ArenaScope<'_> {
	fn drop(&mut self) {
		if !self.raw.has_block() {
			return;
		}
		match (self.api.arena_finish, self.api.arena_mem_free) {
			(Some(finish), Some(mem_free)) => {
				// SAFETY: the arena is live and released once; its values are no longer referenced.
				unsafe { mem_free(finish(&mut self.raw)) };
			}
			_ => warn!("host cannot release arenas; leaving block with the host"),
		}
		self.raw = ARENA_EMPTY;
	}
}
