use std::cell::RefCell;
use std::ptr::NonNull;

use pretty_assertions::assert_eq;

use super::*;

#[derive(Debug, Clone, PartialEq)]
enum Call {
	Lines { channel: ChannelId, range: LineRange, strict: bool },
	PushLines { strict: bool },
	Echo { text: Vec<String>, history: bool, opts: EchoOpts },
	Notify { msg: String, level: LogLevel },
}

struct Recorder {
	calls: RefCell<Vec<Call>>,
	lua: Option<LuaHandle>,
}

impl Recorder {
	fn new() -> Self {
		Self {
			calls: RefCell::new(Vec::new()),
			lua: LuaHandle::from_raw(NonNull::dangling().as_ptr()),
		}
	}

	fn without_lua() -> Self {
		Self { lua: None, ..Self::new() }
	}

	fn record(&self, call: Call) {
		self.calls.borrow_mut().push(call);
	}
}

impl Host for Recorder {
	fn color_by_name(&self, _name: &str) -> Result<Option<ColorMatch>> {
		Ok(None)
	}

	fn win_get_height(&self, _window: Window) -> Result<i64> {
		Ok(24)
	}

	fn win_get_cursor(&self, window: Window) -> Result<Cursor> {
		if window.as_raw() < 0 {
			return Err(Error::Validation(format!("Invalid window id: {}", window.as_raw())));
		}
		Ok(Cursor::new(1, 0))
	}

	fn win_set_cursor(&self, _window: Window, _cursor: Cursor) -> Result<()> {
		Ok(())
	}

	fn buf_get_name(&self, _buffer: Buffer) -> Result<String> {
		Ok(String::new())
	}

	fn buf_get_extmark_by_id(&self, _buffer: Buffer, _ns: NamespaceId, _id: ExtmarkId, _opts: &ExtmarkOpts) -> Result<Option<Extmark>> {
		Ok(None)
	}

	fn err_writeln(&self, _msg: &str) -> Result<()> {
		Ok(())
	}

	fn echo(&self, chunks: &[Chunk], history: bool, opts: &EchoOpts) -> Result<()> {
		self.record(Call::Echo {
			text: chunks.iter().map(|c| c.text.clone()).collect(),
			history,
			opts: *opts,
		});
		Ok(())
	}

	fn notify(&self, msg: &str, level: LogLevel, _opts: &[(String, Value)]) -> Result<Value> {
		self.record(Call::Notify {
			msg: msg.to_string(),
			level,
		});
		Ok(Value::Nil)
	}

	fn buf_get_lines(&self, channel: ChannelId, _buffer: Buffer, range: LineRange, strict: bool) -> Result<Vec<String>> {
		self.record(Call::Lines { channel, range, strict });
		Ok(vec!["one".into(), "two".into()])
	}

	fn buf_push_lines(&self, _channel: ChannelId, _buffer: Buffer, _range: LineRange, strict: bool, _lua: LuaHandle) -> Result<()> {
		self.record(Call::PushLines { strict });
		Ok(())
	}

	fn global_lua_state(&self) -> Option<LuaHandle> {
		self.lua
	}
}

fn calls(session: &Session<Recorder>) -> Vec<Call> {
	session.host().calls.borrow().clone()
}

#[test]
fn lines_use_session_channel_and_configured_strictness() {
	let mut config = Config::default();
	config.lines.strict = true;
	let session = Session::new(Recorder::new(), config).with_channel(ChannelId(3));

	assert_eq!(session.lines(Buffer::CURRENT, LineRange::all()).unwrap(), vec!["one", "two"]);
	assert_eq!(
		calls(&session),
		vec![Call::Lines {
			channel: ChannelId(3),
			range: LineRange::all(),
			strict: true,
		}]
	);
}

#[test]
fn default_channel_is_lua_internal() {
	let session = Session::new(Recorder::new(), Config::default());
	assert_eq!(session.channel(), ChannelId::LUA_INTERNAL);
	assert!(session.channel().is_internal());
	assert!(!ChannelId(3).is_internal());
}

#[test]
fn echo_applies_history_and_verbose_defaults() {
	let mut config = Config::default();
	config.echo.history = false;
	config.echo.verbose = Some(true);
	let session = Session::new(Recorder::new(), config);

	session.echo(&[Chunk::new("hi")]).unwrap();
	session.echo_error("bad").unwrap();
	assert_eq!(
		calls(&session),
		vec![
			Call::Echo {
				text: vec!["hi".into()],
				history: false,
				opts: EchoOpts::default().verbose(true),
			},
			Call::Echo {
				text: vec!["bad".into()],
				history: false,
				opts: EchoOpts::default().err(true).verbose(true),
			},
		]
	);
}

#[test]
fn notify_default_uses_configured_level() {
	let mut config = Config::default();
	config.notify.level = LogLevel::Warn;
	let session = Session::new(Recorder::new(), config);
	session.notify_default("careful").unwrap();
	session.notify("done", LogLevel::Info).unwrap();
	assert_eq!(
		calls(&session),
		vec![
			Call::Notify {
				msg: "careful".into(),
				level: LogLevel::Warn,
			},
			Call::Notify {
				msg: "done".into(),
				level: LogLevel::Info,
			},
		]
	);
}

#[test]
fn push_lines_requires_interpreter_state() {
	let session = Session::new(Recorder::without_lua(), Config::default());
	assert!(session.lua().is_none());
	assert!(matches!(session.push_lines(Buffer::CURRENT, LineRange::all()), Err(Error::NoInterpreter)));

	let session = Session::new(Recorder::new(), Config::default());
	session.push_lines(Buffer::CURRENT, LineRange::all()).unwrap();
	assert_eq!(calls(&session), vec![Call::PushLines { strict: false }]);
}

#[test]
fn host_errors_pass_through() {
	let session = Session::new(Recorder::new(), Config::default());
	assert!(session.cursor(Window::from_raw(-1)).unwrap_err().is_validation());
	assert_eq!(session.height(Window::CURRENT).unwrap(), 24);
}
