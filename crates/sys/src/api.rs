//! Function signatures of the host API and the table that holds them.

use std::ffi::{c_int, c_void};

use crate::arena::{Arena, ArenaMem};
use crate::error::Error;
use crate::keysets::{KeyDict_echo_opts, KeyDict_get_extmark};
use crate::types::{Array, Boolean, Buffer, Dictionary, Integer, LuaState, Object, RawStr, Window};

pub type NameToColorFn = unsafe extern "C" fn(name: *const u8, idx: *mut c_int) -> c_int;
pub type WinGetHeightFn = unsafe extern "C" fn(window: Window, err: *mut Error) -> Integer;
/// Result is `[row, col]`.
pub type WinGetCursorFn = unsafe extern "C" fn(window: Window, arena: *mut Arena, err: *mut Error) -> Array;
/// `pos` is `[row, col]`.
pub type WinSetCursorFn = unsafe extern "C" fn(window: Window, pos: Array, err: *mut Error);
pub type BufGetNameFn = unsafe extern "C" fn(buffer: Buffer, err: *mut Error) -> RawStr;
pub type BufGetExtmarkByIdFn = unsafe extern "C" fn(
	buffer: Buffer,
	ns_id: Integer,
	id: Integer,
	opts: *mut KeyDict_get_extmark,
	arena: *mut Arena,
	err: *mut Error,
) -> Array;
pub type ErrWritelnFn = unsafe extern "C" fn(str: RawStr);
pub type EchoFn = unsafe extern "C" fn(chunks: Array, history: Boolean, opts: *mut KeyDict_echo_opts, err: *mut Error);
pub type NotifyFn = unsafe extern "C" fn(msg: RawStr, log_level: Integer, opts: Dictionary, arena: *mut Arena, err: *mut Error) -> Object;
pub type BufGetLinesFn = unsafe extern "C" fn(
	channel_id: u64,
	buffer: Buffer,
	start: Integer,
	end: Integer,
	strict_indexing: Boolean,
	arena: *mut Arena,
	lstate: *mut LuaState,
	err: *mut Error,
) -> Array;
pub type GetGlobalLstateFn = unsafe extern "C" fn() -> *mut LuaState;
pub type ArenaAllocBlockFn = unsafe extern "C" fn(arena: *mut Arena);
pub type ArenaFinishFn = unsafe extern "C" fn(arena: *mut Arena) -> ArenaMem;
pub type ArenaMemFreeFn = unsafe extern "C" fn(mem: ArenaMem);
pub type XFreeFn = unsafe extern "C" fn(ptr: *mut c_void);

/// Symbols every host must export.
pub const REQUIRED_SYMBOLS: &[&str] = &[
	"name_to_color",
	"nvim_win_get_height",
	"nvim_win_get_cursor",
	"nvim_win_set_cursor",
	"nvim_buf_get_name",
	"nvim_buf_get_extmark_by_id",
	"nvim_err_writeln",
	"nvim_echo",
	"nvim_notify",
	"nvim_buf_get_lines",
	"get_global_lstate",
	"arena_alloc_block",
];

/// Symbols used when present.
pub const OPTIONAL_SYMBOLS: &[&str] = &["arena_finish", "arena_mem_free", "xfree"];

/// Resolved entry points of the host API.
#[derive(Debug, Clone, Copy)]
pub struct HostApi {
	pub name_to_color: NameToColorFn,
	pub nvim_win_get_height: WinGetHeightFn,
	pub nvim_win_get_cursor: WinGetCursorFn,
	pub nvim_win_set_cursor: WinSetCursorFn,
	pub nvim_buf_get_name: BufGetNameFn,
	pub nvim_buf_get_extmark_by_id: BufGetExtmarkByIdFn,
	pub nvim_err_writeln: ErrWritelnFn,
	pub nvim_echo: EchoFn,
	pub nvim_notify: NotifyFn,
	pub nvim_buf_get_lines: BufGetLinesFn,
	pub get_global_lstate: GetGlobalLstateFn,
	pub arena_alloc_block: ArenaAllocBlockFn,
	pub arena_finish: Option<ArenaFinishFn>,
	pub arena_mem_free: Option<ArenaMemFreeFn>,
	pub xfree: Option<XFreeFn>,
}

impl HostApi {
	/// Releases memory the host allocated with its general allocator, such as `Error::msg`.
	///
	/// Falls back to the C `free` when the host does not export `xfree`.
	///
	/// # Safety
	/// `ptr` must be null or a live allocation from the host allocator.
	pub unsafe fn free(&self, ptr: *mut c_void) {
		if ptr.is_null() {
			return;
		}
		match self.xfree {
			Some(xfree) => unsafe { xfree(ptr) },
			None => unsafe { libc::free(ptr) },
		}
	}
}
