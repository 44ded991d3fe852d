//! Explicit call context for plugin code.

use tracing::{debug, instrument, warn};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::handle::{Buffer, ChannelId, ExtmarkId, LuaHandle, NamespaceId, Window};
use crate::host::Host;
use crate::opts::{EchoOpts, ExtmarkOpts};
use crate::types::{Chunk, ColorMatch, Cursor, Extmark, LineRange, LogLevel};
use crate::value::Value;

/// A host together with the configuration and identity calls are made with.
///
/// The interpreter state is fetched once at construction and carried here
/// instead of being looked up through global state on every call.
pub struct Session<H> {
	host: H,
	config: Config,
	channel: ChannelId,
	lua: Option<LuaHandle>,
}

impl<H: Host> Session<H> {
	pub fn new(host: H, config: Config) -> Self {
		let lua = host.global_lua_state();
		if lua.is_none() {
			warn!("host returned no interpreter state");
		}
		Self {
			host,
			config,
			channel: ChannelId::default(),
			lua,
		}
	}

	/// Issues calls on behalf of `channel` instead of the Lua caller.
	pub fn with_channel(mut self, channel: ChannelId) -> Self {
		self.channel = channel;
		self
	}

	pub fn host(&self) -> &H {
		&self.host
	}

	pub fn config(&self) -> &Config {
		&self.config
	}

	pub fn channel(&self) -> ChannelId {
		self.channel
	}

	pub fn lua(&self) -> Option<LuaHandle> {
		self.lua
	}

	pub fn color(&self, name: &str) -> Result<Option<ColorMatch>> {
		self.host.color_by_name(name)
	}

	pub fn height(&self, window: Window) -> Result<i64> {
		self.host.win_get_height(window)
	}

	#[instrument(level = "debug", skip(self), err)]
	pub fn cursor(&self, window: Window) -> Result<Cursor> {
		self.host.win_get_cursor(window)
	}

	#[instrument(level = "debug", skip(self), err)]
	pub fn set_cursor(&self, window: Window, cursor: Cursor) -> Result<()> {
		self.host.win_set_cursor(window, cursor)
	}

	pub fn buffer_name(&self, buffer: Buffer) -> Result<String> {
		self.host.buf_get_name(buffer)
	}

	/// Lines of `buffer` in `range`, with the configured indexing strictness.
	#[instrument(level = "debug", skip(self), err)]
	pub fn lines(&self, buffer: Buffer, range: LineRange) -> Result<Vec<String>> {
		let lines = self.host.buf_get_lines(self.channel, buffer, range, self.config.lines.strict)?;
		debug!(count = lines.len(), "fetched lines");
		Ok(lines)
	}

	/// Pushes lines of `buffer` onto the interpreter's stack.
	pub fn push_lines(&self, buffer: Buffer, range: LineRange) -> Result<()> {
		let lua = self.lua.ok_or(Error::NoInterpreter)?;
		self.host.buf_push_lines(self.channel, buffer, range, self.config.lines.strict, lua)
	}

	pub fn extmark(&self, buffer: Buffer, ns: NamespaceId, id: ExtmarkId, opts: &ExtmarkOpts) -> Result<Option<Extmark>> {
		self.host.buf_get_extmark_by_id(buffer, ns, id, opts)
	}

	/// Echoes `chunks`, adding them to history as configured.
	#[instrument(level = "debug", skip_all, fields(chunks = chunks.len()), err)]
	pub fn echo(&self, chunks: &[Chunk]) -> Result<()> {
		let opts = EchoOpts {
			err: None,
			verbose: self.config.echo.verbose,
		};
		self.host.echo(chunks, self.config.echo.history, &opts)
	}

	/// Echoes `msg` as an error message.
	pub fn echo_error(&self, msg: &str) -> Result<()> {
		let opts = EchoOpts {
			err: Some(true),
			verbose: self.config.echo.verbose,
		};
		self.host.echo(&[Chunk::new(msg)], self.config.echo.history, &opts)
	}

	pub fn err_writeln(&self, msg: &str) -> Result<()> {
		self.host.err_writeln(msg)
	}

	#[instrument(level = "debug", skip(self, msg), err)]
	pub fn notify(&self, msg: &str, level: LogLevel) -> Result<Value> {
		self.host.notify(msg, level, &[])
	}

	/// Notifies at the configured level.
	pub fn notify_default(&self, msg: &str) -> Result<Value> {
		self.notify(msg, self.config.notify.level)
	}
}

#[cfg(test)]
mod tests;
