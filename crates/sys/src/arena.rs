//! Bump allocator handle threaded through calls that return host memory.

use std::ffi::{c_char, c_void};
use std::ptr;

/// Current block of an arena plus the bump position within it.
///
/// Everything allocated through one arena is released together.
#[repr(C)]
#[derive(Debug)]
pub struct Arena {
	pub cur_blk: *mut c_char,
	pub pos: usize,
	pub size: usize,
}

/// An arena with no block; the host allocates one on first use.
pub const ARENA_EMPTY: Arena = Arena {
	cur_blk: ptr::null_mut(),
	pos: 0,
	size: 0,
};

impl Arena {
	/// Whether the host has handed this arena a block yet.
	pub fn has_block(&self) -> bool {
		!self.cur_blk.is_null()
	}

	/// Bytes still free in the current block.
	pub fn remaining(&self) -> usize {
		self.size.saturating_sub(self.pos)
	}
}

impl Default for Arena {
	fn default() -> Self {
		ARENA_EMPTY
	}
}

/// Opaque list of blocks detached from an arena by `arena_finish`.
pub type ArenaMem = *mut c_void;
