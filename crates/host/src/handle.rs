//! Typed identifiers for host entities.

use std::ffi::c_int;
use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

use moonwalk_sys as sys;

macro_rules! handle {
	($(#[$meta:meta])* $name:ident) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
		pub struct $name(c_int);

		impl $name {
			/// Handle `0`, which the host resolves to the current entity.
			pub const CURRENT: Self = Self(0);

			pub const fn from_raw(raw: c_int) -> Self {
				Self(raw)
			}

			pub const fn as_raw(self) -> c_int {
				self.0
			}

			pub const fn is_current(self) -> bool {
				self.0 == 0
			}
		}

		impl From<c_int> for $name {
			fn from(raw: c_int) -> Self {
				Self(raw)
			}
		}

		impl fmt::Display for $name {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				write!(f, "{}({})", stringify!($name), self.0)
			}
		}
	};
}

handle!(
	/// Buffer handle.
	Buffer
);
handle!(
	/// Window handle.
	Window
);
handle!(
	/// Tabpage handle.
	Tabpage
);

/// Identifies the client a call is made on behalf of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChannelId(pub u64);

impl ChannelId {
	pub const VIML_INTERNAL: Self = Self(sys::VIML_INTERNAL_CALL);
	pub const LUA_INTERNAL: Self = Self(sys::LUA_INTERNAL_CALL);

	/// Whether the id denotes an in-process caller instead of an RPC channel.
	pub const fn is_internal(self) -> bool {
		self.0 & sys::VIML_INTERNAL_CALL != 0
	}
}

impl Default for ChannelId {
	fn default() -> Self {
		Self::LUA_INTERNAL
	}
}

/// Extmark namespace id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NamespaceId(pub i64);

/// Extmark id within a namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExtmarkId(pub i64);

/// The host's interpreter state.
///
/// Only meaningful on the host's main thread, hence neither `Send` nor `Sync`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LuaHandle {
	ptr: NonNull<sys::LuaState>,
	_not_send: PhantomData<*const ()>,
}

impl LuaHandle {
	/// Wraps a pointer returned by the host; `None` when it is null.
	pub fn from_raw(ptr: *mut sys::LuaState) -> Option<Self> {
		NonNull::new(ptr).map(|ptr| Self {
			ptr,
			_not_send: PhantomData,
		})
	}

	pub fn as_ptr(self) -> *mut sys::LuaState {
		self.ptr.as_ptr()
	}
}
