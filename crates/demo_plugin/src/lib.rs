//! Minimal native plugin using the moonwalk host bindings.
//!
//! Loaded from Lua through `ffi.load`; see `lua/moonwalk_demo.lua`.

use std::cell::RefCell;
use std::ffi::{CStr, c_char, c_int};
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;

use moonwalk_host::{Buffer, Chunk, Config, Cursor, Error, LineRange, NativeHost, Session, Window, logging};
use tracing::{error, info, warn};

/// Outcome of an exported call.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoonwalkStatus {
	Ok = 0,
	Failed = 1,
	Panicked = 2,
	NotInitialized = 3,
}

thread_local! {
	static SESSION: RefCell<Option<Session<NativeHost>>> = const { RefCell::new(None) };
}

enum Failure {
	Host(Error),
	NotInitialized,
}

impl From<Error> for Failure {
	fn from(err: Error) -> Self {
		Self::Host(err)
	}
}

fn guarded(name: &'static str, f: impl FnOnce() -> Result<(), Failure>) -> MoonwalkStatus {
	match panic::catch_unwind(AssertUnwindSafe(f)) {
		Ok(Ok(())) => MoonwalkStatus::Ok,
		Ok(Err(Failure::NotInitialized)) => MoonwalkStatus::NotInitialized,
		Ok(Err(Failure::Host(err))) => {
			error!(call = name, %err, "call failed");
			MoonwalkStatus::Failed
		}
		Err(_) => {
			error!(call = name, "call panicked");
			MoonwalkStatus::Panicked
		}
	}
}

fn with_session<T>(f: impl FnOnce(&Session<NativeHost>) -> moonwalk_host::Result<T>) -> Result<T, Failure> {
	SESSION.with(|slot| match slot.borrow().as_ref() {
		Some(session) => f(session).map_err(Failure::Host),
		None => Err(Failure::NotInitialized),
	})
}

/// Number of lines in `buffer`.
fn line_count(session: &Session<NativeHost>, buffer: Buffer) -> moonwalk_host::Result<usize> {
	Ok(session.lines(buffer, LineRange::all())?.len())
}

#[unsafe(no_mangle)]
/// # Safety
/// `config_path` must be null or a NUL-terminated path.
pub unsafe extern "C" fn moonwalk_demo_init(config_path: *const c_char) -> MoonwalkStatus {
	let path = (!config_path.is_null()).then(|| PathBuf::from(unsafe { CStr::from_ptr(config_path) }.to_string_lossy().into_owned()));
	guarded("init", move || {
		let config = Config::load_or_default(path.as_deref()).map_err(Error::from)?;
		match logging::init(&config.log) {
			Ok(_) => {}
			Err(Error::Subscriber(_)) => warn!("tracing subscriber already installed"),
			Err(err) => return Err(err.into()),
		}
		let session = Session::new(NativeHost::from_process()?, config);
		SESSION.with(|slot| *slot.borrow_mut() = Some(session));
		info!("moonwalk demo initialized");
		Ok(())
	})
}

/// Echoes `<buffer name> <row>:<col>` for `window`.
#[unsafe(no_mangle)]
pub extern "C" fn moonwalk_demo_report_cursor(window: c_int) -> MoonwalkStatus {
	guarded("report_cursor", || {
		with_session(|session| {
			let cursor = session.cursor(Window::from_raw(window))?;
			let name = session.buffer_name(Buffer::CURRENT)?;
			let name = if name.is_empty() { "[No Name]".to_string() } else { name };
			session.echo(&[
				Chunk::highlighted(name, "Directory"),
				Chunk::new(" "),
				Chunk::highlighted(format!("{}:{}", cursor.row, cursor.col + 1), "Number"),
			])
		})
	})
}

/// Writes the number of lines in `buffer` to `out`.
///
/// # Safety
/// `out` must be valid for writes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn moonwalk_demo_line_count(buffer: c_int, out: *mut i64) -> MoonwalkStatus {
	if out.is_null() {
		return MoonwalkStatus::Failed;
	}
	guarded("line_count", || {
		let count = with_session(|session| line_count(session, Buffer::from_raw(buffer)))?;
		unsafe { *out = i64::try_from(count).unwrap_or(i64::MAX) };
		Ok(())
	})
}

/// Moves the cursor of `window` to the first column of the middle line of the current buffer.
#[unsafe(no_mangle)]
pub extern "C" fn moonwalk_demo_center_cursor(window: c_int) -> MoonwalkStatus {
	guarded("center_cursor", || {
		with_session(|session| {
			let count = line_count(session, Buffer::CURRENT)?;
			let row = i64::try_from(count / 2 + 1).unwrap_or(i64::MAX);
			session.set_cursor(Window::from_raw(window), Cursor::new(row, 0))
		})
	})
}

#[unsafe(no_mangle)]
pub extern "C" fn moonwalk_demo_shutdown() -> MoonwalkStatus {
	guarded("shutdown", || {
		SESSION.with(|slot| slot.borrow_mut().take()).ok_or(Failure::NotInitialized)?;
		info!("moonwalk demo shut down");
		Ok(())
	})
}
