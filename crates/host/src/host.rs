//! The host API as a trait.

use crate::error::Result;
use crate::handle::{Buffer, ChannelId, ExtmarkId, LuaHandle, NamespaceId, Window};
use crate::opts::{EchoOpts, ExtmarkOpts};
use crate::types::{Chunk, ColorMatch, Cursor, Extmark, LineRange, LogLevel};
use crate::value::Value;

/// Operations the host editor provides to plugins.
///
/// [`NativeHost`](crate::NativeHost) forwards each method to the matching
/// host symbol. Failures reported by the host surface as
/// [`Error::Exception`](crate::Error::Exception) or
/// [`Error::Validation`](crate::Error::Validation).
pub trait Host {
	/// Looks up a color by name (`"Red"`, `"#ff8800"`); `None` when unknown.
	fn color_by_name(&self, name: &str) -> Result<Option<ColorMatch>>;

	fn win_get_height(&self, window: Window) -> Result<i64>;

	fn win_get_cursor(&self, window: Window) -> Result<Cursor>;

	fn win_set_cursor(&self, window: Window, cursor: Cursor) -> Result<()>;

	/// Full name of the buffer, empty for unnamed buffers.
	fn buf_get_name(&self, buffer: Buffer) -> Result<String>;

	/// Position of an extmark; `None` when no mark has this id.
	fn buf_get_extmark_by_id(&self, buffer: Buffer, ns: NamespaceId, id: ExtmarkId, opts: &ExtmarkOpts) -> Result<Option<Extmark>>;

	/// Writes `msg` followed by a newline as an error message.
	fn err_writeln(&self, msg: &str) -> Result<()>;

	fn echo(&self, chunks: &[Chunk], history: bool, opts: &EchoOpts) -> Result<()>;

	fn notify(&self, msg: &str, level: LogLevel, opts: &[(String, Value)]) -> Result<Value>;

	fn buf_get_lines(&self, channel: ChannelId, buffer: Buffer, range: LineRange, strict: bool) -> Result<Vec<String>>;

	/// Like [`Host::buf_get_lines`], but the host pushes the lines onto the
	/// interpreter's stack instead of returning them.
	fn buf_push_lines(&self, channel: ChannelId, buffer: Buffer, range: LineRange, strict: bool, lua: LuaHandle) -> Result<()>;

	fn global_lua_state(&self) -> Option<LuaHandle>;
}
