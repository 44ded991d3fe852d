//! Error out-parameter shared by every fallible host call.

use std::ffi::{CStr, c_char, c_int};
use std::fmt;
use std::ptr;

/// Error category reported by the host.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorType(pub c_int);

impl ErrorType {
	/// No error; the call succeeded.
	pub const NONE: Self = Self(-1);
	/// Unexpected host-side failure.
	pub const EXCEPTION: Self = Self(0);
	/// Invalid arguments or options.
	pub const VALIDATION: Self = Self(1);
}

impl fmt::Debug for ErrorType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match *self {
			Self::NONE => f.write_str("ErrorType::NONE"),
			Self::EXCEPTION => f.write_str("ErrorType::EXCEPTION"),
			Self::VALIDATION => f.write_str("ErrorType::VALIDATION"),
			Self(other) => write!(f, "ErrorType({other})"),
		}
	}
}

/// The callee may set `ty` and allocate `msg`; the caller owns `msg` afterwards
/// and must release it exactly once.
#[repr(C)]
pub struct Error {
	pub ty: ErrorType,
	pub msg: *mut c_char,
}

/// Success value every call starts from.
pub const ERROR_INIT: Error = Error {
	ty: ErrorType::NONE,
	msg: ptr::null_mut(),
};

impl Error {
	pub fn is_set(&self) -> bool {
		self.ty != ErrorType::NONE
	}

	/// Borrows the message, if one was allocated.
	///
	/// # Safety
	/// `msg` must be null or point to a NUL-terminated string.
	pub unsafe fn message(&self) -> Option<&CStr> {
		if self.msg.is_null() {
			None
		} else {
			Some(unsafe { CStr::from_ptr(self.msg) })
		}
	}
}

impl Default for Error {
	fn default() -> Self {
		ERROR_INIT
	}
}

impl fmt::Debug for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Error").field("ty", &self.ty).field("msg", &self.msg).finish()
	}
}

#[cfg(test)]
mod tests;
