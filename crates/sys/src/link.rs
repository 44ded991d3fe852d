//! Link-time declarations of the host API.

use std::ffi::{c_int, c_void};

use crate::api::HostApi;
use crate::arena::{Arena, ArenaMem};
use crate::error::Error;
use crate::keysets::{KeyDict_echo_opts, KeyDict_get_extmark};
use crate::types::{Array, Boolean, Buffer, Dictionary, Integer, LuaState, Object, RawStr, Window};

unsafe extern "C" {
	pub fn name_to_color(name: *const u8, idx: *mut c_int) -> c_int;

	pub fn nvim_win_get_height(window: Window, err: *mut Error) -> Integer;
	pub fn nvim_win_get_cursor(window: Window, arena: *mut Arena, err: *mut Error) -> Array;
	pub fn nvim_win_set_cursor(window: Window, pos: Array, err: *mut Error);

	pub fn nvim_buf_get_name(buffer: Buffer, err: *mut Error) -> RawStr;
	pub fn nvim_buf_get_extmark_by_id(
		buffer: Buffer,
		ns_id: Integer,
		id: Integer,
		opts: *mut KeyDict_get_extmark,
		arena: *mut Arena,
		err: *mut Error,
	) -> Array;

	pub fn nvim_err_writeln(str: RawStr);
	pub fn nvim_echo(chunks: Array, history: Boolean, opts: *mut KeyDict_echo_opts, err: *mut Error);
	pub fn nvim_notify(msg: RawStr, log_level: Integer, opts: Dictionary, arena: *mut Arena, err: *mut Error) -> Object;

	pub fn nvim_buf_get_lines(
		channel_id: u64,
		buffer: Buffer,
		start: Integer,
		end: Integer,
		strict_indexing: Boolean,
		arena: *mut Arena,
		lstate: *mut LuaState,
		err: *mut Error,
	) -> Array;

	pub fn get_global_lstate() -> *mut LuaState;

	pub fn arena_alloc_block(arena: *mut Arena);
	pub fn arena_finish(arena: *mut Arena) -> ArenaMem;
	pub fn arena_mem_free(mem: ArenaMem);
	pub fn xfree(ptr: *mut c_void);
}

impl HostApi {
	/// Table backed by the symbols the linker resolved.
	pub fn linked() -> Self {
		Self {
			name_to_color,
			nvim_win_get_height,
			nvim_win_get_cursor,
			nvim_win_set_cursor,
			nvim_buf_get_name,
			nvim_buf_get_extmark_by_id,
			nvim_err_writeln,
			nvim_echo,
			nvim_notify,
			nvim_buf_get_lines,
			get_global_lstate,
			arena_alloc_block,
			arena_finish: Some(arena_finish),
			arena_mem_free: Some(arena_mem_free),
			xfree: Some(xfree),
		}
	}
}
