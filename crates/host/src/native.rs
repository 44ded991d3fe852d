//! [`Host`] backed by the host's exported C functions.

use std::ffi::{CString, c_int};
use std::marker::PhantomData;
use std::ptr;

use moonwalk_sys::{self as sys, ERROR_INIT, ErrorType, HostApi, HostLibrary};
use tracing::trace;

use crate::arena::ArenaScope;
use crate::convert::{Lowering, lift, lift_array, lift_str};
use crate::error::{Error, Result};
use crate::handle::{Buffer, ChannelId, ExtmarkId, LuaHandle, NamespaceId, Window};
use crate::host::Host;
use crate::opts::{EchoOpts, ExtmarkOpts};
use crate::types::{Chunk, ColorMatch, Cursor, Extmark, LineRange, LogLevel};
use crate::value::Value;

/// Calls into the host through a [`HostApi`] table.
///
/// Host functions may only run on the host's main thread, so this type is
/// neither `Send` nor `Sync`.
pub struct NativeHost {
	api: HostApi,
	_library: Option<HostLibrary>,
	_not_send: PhantomData<*const ()>,
}

impl NativeHost {
	pub fn new(api: HostApi) -> Self {
		Self {
			api,
			_library: None,
			_not_send: PhantomData,
		}
	}

	/// Resolves the API from the process the plugin was loaded into.
	pub fn from_process() -> Result<Self> {
		let library = HostLibrary::open_process()?;
		Ok(Self {
			api: *library.api(),
			_library: Some(library),
			_not_send: PhantomData,
		})
	}

	/// Uses the symbols resolved by the linker.
	#[cfg(feature = "link")]
	pub fn linked() -> Self {
		Self::new(HostApi::linked())
	}

	pub fn api(&self) -> &HostApi {
		&self.api
	}

	fn lines_call(&self, channel: ChannelId, buffer: Buffer, range: LineRange, strict: bool, lstate: *mut sys::LuaState) -> Result<Vec<Value>> {
		let mut arena = ArenaScope::new(&self.api);
		let mut err = ErrorSlot::new(&self.api);
		// SAFETY: all pointers are valid for the duration of the call.
		let lines = unsafe {
			(self.api.nvim_buf_get_lines)(
				channel.0,
				buffer.as_raw(),
				range.start,
				range.end,
				strict,
				arena.as_mut_ptr(),
				lstate,
				err.as_mut_ptr(),
			)
		};
		err.check()?;
		// SAFETY: the array lives in `arena`, which outlives the copy.
		unsafe { lift_array(&lines) }
	}
}

/// `Error` out-parameter whose message is released exactly once.
struct ErrorSlot<'h> {
	raw: sys::Error,
	api: &'h HostApi,
}

impl<'h> ErrorSlot<'h> {
	fn new(api: &'h HostApi) -> Self {
		Self { raw: ERROR_INIT, api }
	}

	fn as_mut_ptr(&mut self) -> *mut sys::Error {
		&mut self.raw
	}

	fn check(self) -> Result<()> {
		if !self.raw.is_set() {
			return Ok(());
		}
		// SAFETY: the host sets `msg` to null or a NUL-terminated allocation.
		let msg = unsafe { lift_str(self.raw.msg) };
		trace!(ty = ?self.raw.ty, %msg, "host reported error");
		Err(match self.raw.ty {
			ErrorType::EXCEPTION => Error::Exception(msg),
			ErrorType::VALIDATION => Error::Validation(msg),
			ErrorType(ty) => Error::UnknownErrorType { ty, msg },
		})
	}
}

impl Drop for ErrorSlot<'_> {
	fn drop(&mut self) {
		// SAFETY: ownership of `msg` passed to us with the returned call.
		unsafe { self.api.free(self.raw.msg.cast()) };
		self.raw.msg = ptr::null_mut();
	}
}

impl Host for NativeHost {
	fn color_by_name(&self, name: &str) -> Result<Option<ColorMatch>> {
		let name = CString::new(name)?;
		let mut index: c_int = -1;
		// SAFETY: `name` is NUL-terminated and `index` is writable.
		let rgb = unsafe { (self.api.name_to_color)(name.as_ptr().cast(), &mut index) };
		Ok(u32::try_from(rgb).ok().map(|rgb| ColorMatch { rgb, index }))
	}

	fn win_get_height(&self, window: Window) -> Result<i64> {
		let mut err = ErrorSlot::new(&self.api);
		// SAFETY: `err` is valid for the duration of the call.
		let height = unsafe { (self.api.nvim_win_get_height)(window.as_raw(), err.as_mut_ptr()) };
		err.check()?;
		Ok(height)
	}

	fn win_get_cursor(&self, window: Window) -> Result<Cursor> {
		let mut arena = ArenaScope::new(&self.api);
		let mut err = ErrorSlot::new(&self.api);
		// SAFETY: `arena` and `err` are valid for the duration of the call.
		let pos = unsafe { (self.api.nvim_win_get_cursor)(window.as_raw(), arena.as_mut_ptr(), err.as_mut_ptr()) };
		err.check()?;
		// SAFETY: the array lives in `arena`, which outlives the copy.
		let values = unsafe { lift_array(&pos) }?;
		Cursor::from_values(&values)
	}

	fn win_set_cursor(&self, window: Window, cursor: Cursor) -> Result<()> {
		let mut lowering = Lowering::new();
		let pos = lowering.integers(&cursor.to_array());
		let mut err = ErrorSlot::new(&self.api);
		// SAFETY: `pos` stays owned by `lowering` until after the call.
		unsafe { (self.api.nvim_win_set_cursor)(window.as_raw(), pos, err.as_mut_ptr()) };
		err.check()
	}

	fn buf_get_name(&self, buffer: Buffer) -> Result<String> {
		let mut err = ErrorSlot::new(&self.api);
		// SAFETY: `err` is valid for the duration of the call.
		let name = unsafe { (self.api.nvim_buf_get_name)(buffer.as_raw(), err.as_mut_ptr()) };
		err.check()?;
		// SAFETY: the name is borrowed from the buffer and copied before returning.
		Ok(unsafe { lift_str(name) })
	}

	fn buf_get_extmark_by_id(&self, buffer: Buffer, ns: NamespaceId, id: ExtmarkId, opts: &ExtmarkOpts) -> Result<Option<Extmark>> {
		let mut raw_opts = opts.to_raw();
		let mut arena = ArenaScope::new(&self.api);
		let mut err = ErrorSlot::new(&self.api);
		// SAFETY: all pointers are valid for the duration of the call.
		let reply = unsafe {
			(self.api.nvim_buf_get_extmark_by_id)(buffer.as_raw(), ns.0, id.0, &mut raw_opts, arena.as_mut_ptr(), err.as_mut_ptr())
		};
		err.check()?;
		// SAFETY: the array lives in `arena`, which outlives the copy.
		Extmark::from_values(unsafe { lift_array(&reply) }?)
	}

	fn err_writeln(&self, msg: &str) -> Result<()> {
		let msg = CString::new(msg)?;
		// SAFETY: `msg` is NUL-terminated and outlives the call.
		unsafe { (self.api.nvim_err_writeln)(msg.as_ptr()) };
		Ok(())
	}

	fn echo(&self, chunks: &[Chunk], history: bool, opts: &EchoOpts) -> Result<()> {
		let values: Vec<Value> = chunks.iter().map(Chunk::to_value).collect();
		let mut lowering = Lowering::new();
		let chunks = lowering.array(&values)?;
		let mut raw_opts = opts.to_raw();
		let mut err = ErrorSlot::new(&self.api);
		// SAFETY: `chunks` stays owned by `lowering` until after the call.
		unsafe { (self.api.nvim_echo)(chunks, history, &mut raw_opts, err.as_mut_ptr()) };
		err.check()
	}

	fn notify(&self, msg: &str, level: LogLevel, opts: &[(String, Value)]) -> Result<Value> {
		let mut lowering = Lowering::new();
		let msg = lowering.str(msg)?;
		let opts = lowering.dictionary(opts)?;
		let mut arena = ArenaScope::new(&self.api);
		let mut err = ErrorSlot::new(&self.api);
		// SAFETY: arguments stay owned by `lowering` until after the call.
		let reply = unsafe { (self.api.nvim_notify)(msg, level.as_integer(), opts, arena.as_mut_ptr(), err.as_mut_ptr()) };
		err.check()?;
		// SAFETY: the reply lives in `arena`, which outlives the copy.
		unsafe { lift(&reply) }
	}

	fn buf_get_lines(&self, channel: ChannelId, buffer: Buffer, range: LineRange, strict: bool) -> Result<Vec<String>> {
		self.lines_call(channel, buffer, range, strict, ptr::null_mut())?
			.into_iter()
			.map(|line| match line {
				Value::String(line) => Ok(line),
				other => Err(Error::UnexpectedShape {
					expected: "string lines",
					got: other.type_name().to_string(),
				}),
			})
			.collect()
	}

	fn buf_push_lines(&self, channel: ChannelId, buffer: Buffer, range: LineRange, strict: bool, lua: LuaHandle) -> Result<()> {
		self.lines_call(channel, buffer, range, strict, lua.as_ptr()).map(drop)
	}

	fn global_lua_state(&self) -> Option<LuaHandle> {
		// SAFETY: takes no arguments.
		LuaHandle::from_raw(unsafe { (self.api.get_global_lstate)() })
	}
}
