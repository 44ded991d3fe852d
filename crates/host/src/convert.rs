//! Moving values across the boundary.
//!
//! Lowering builds raw objects whose strings and buffers stay owned by a
//! [`Lowering`] until it is dropped. Lifting copies raw objects into owned
//! [`Value`]s so nothing borrowed from the host, or from a host arena,
//! survives the call that produced it.

use std::ffi::{CStr, CString, c_int, c_void};

use moonwalk_sys::{self as sys, KVec, ObjectType, RawStr};

use crate::error::{Error, Result};
use crate::handle::{Buffer, Tabpage, Window};
use crate::value::{Dictionary, LuaRef, Value};

/// Storage backing raw objects handed to the host.
///
/// Raw values produced by a `Lowering` are valid until it is dropped; all of
/// their storage is released together at that point.
#[derive(Default)]
pub struct Lowering {
	strings: Vec<CString>,
	buffers: Vec<*mut c_void>,
}

impl Lowering {
	pub fn new() -> Self {
		Self::default()
	}

	/// NUL-terminated copy of `s`.
	pub fn str(&mut self, s: &str) -> Result<RawStr> {
		let owned = CString::new(s)?;
		let ptr = owned.as_ptr();
		// The heap buffer does not move when the CString itself is moved.
		self.strings.push(owned);
		Ok(ptr)
	}

	pub fn object(&mut self, value: &Value) -> Result<sys::Object> {
		Ok(match value {
			Value::Nil => sys::Object::nil(),
			Value::Boolean(b) => sys::Object::boolean(*b),
			Value::Integer(i) => sys::Object::integer(*i),
			Value::Float(x) => sys::Object::float(*x),
			Value::String(s) => sys::Object::string(self.str(s)?),
			Value::Array(items) => sys::Object::array(self.array(items)?),
			Value::Dictionary(entries) => sys::Object::dictionary(self.dictionary(entries)?),
			Value::LuaRef(r) => sys::Object::luaref(r.0),
			Value::Buffer(h) => sys::Object::handle(ObjectType::BUFFER, h.as_raw()),
			Value::Window(h) => sys::Object::handle(ObjectType::WINDOW, h.as_raw()),
			Value::Tabpage(h) => sys::Object::handle(ObjectType::TABPAGE, h.as_raw()),
		})
	}

	pub fn array<'v>(&mut self, items: impl IntoIterator<Item = &'v Value>) -> Result<sys::Array> {
		let lowered = items.into_iter().map(|item| self.object(item)).collect::<Result<Vec<_>>>()?;
		Ok(self.track(lowered.into_iter().collect()))
	}

	pub fn dictionary(&mut self, entries: &[(String, Value)]) -> Result<sys::Dictionary> {
		let mut pairs = Vec::with_capacity(entries.len());
		for (key, value) in entries {
			pairs.push(sys::KeyValuePair {
				key: self.str(key)?,
				value: self.object(value)?,
			});
		}
		Ok(self.track(pairs.into_iter().collect()))
	}

	/// Array of integers, as used for positions.
	pub fn integers(&mut self, values: &[i64]) -> sys::Array {
		self.track(values.iter().map(|&i| sys::Object::integer(i)).collect())
	}

	fn track<T>(&mut self, v: KVec<T>) -> KVec<T> {
		if !v.items.is_null() {
			self.buffers.push(v.items.cast());
		}
		v
	}
}

impl Drop for Lowering {
	fn drop(&mut self) {
		for buf in self.buffers.drain(..).rev() {
			// SAFETY: every tracked buffer came from `KVec`'s C allocation and is freed once.
			unsafe { libc::free(buf) };
		}
	}
}

/// Copies a raw host object into an owned value.
///
/// # Safety
/// `obj` and everything it points to must be valid for reads.
pub unsafe fn lift(obj: &sys::Object) -> Result<Value> {
	// SAFETY: each arm reads the union field selected by the tag.
	unsafe {
		Ok(match obj.ty {
			ObjectType::NIL => Value::Nil,
			ObjectType::BOOLEAN => Value::Boolean(obj.data.boolean),
			ObjectType::INTEGER => Value::Integer(obj.data.integer),
			ObjectType::FLOAT => Value::Float(obj.data.floating),
			ObjectType::STRING => Value::String(lift_str(obj.data.string)),
			ObjectType::ARRAY => Value::Array(lift_array(&obj.data.array)?),
			ObjectType::DICTIONARY => Value::Dictionary(lift_dictionary(&obj.data.dictionary)?),
			ObjectType::LUAREF => Value::LuaRef(LuaRef(obj.data.luaref)),
			ObjectType::BUFFER => Value::Buffer(Buffer::from_raw(handle(obj.data.integer)?)),
			ObjectType::WINDOW => Value::Window(Window::from_raw(handle(obj.data.integer)?)),
			ObjectType::TABPAGE => Value::Tabpage(Tabpage::from_raw(handle(obj.data.integer)?)),
			ObjectType(other) => return Err(Error::UnknownObjectType(other)),
		})
	}
}

/// # Safety
/// `arr` must describe `size` readable objects.
pub unsafe fn lift_array(arr: &sys::Array) -> Result<Vec<Value>> {
	arr.as_slice().iter().map(|obj| unsafe { lift(obj) }).collect()
}

/// # Safety
/// `dict` must describe `size` readable pairs.
pub unsafe fn lift_dictionary(dict: &sys::Dictionary) -> Result<Dictionary> {
	dict.as_slice()
		.iter()
		.map(|pair| Ok((unsafe { lift_str(pair.key) }, unsafe { lift(&pair.value) }?)))
		.collect()
}

/// Copies a borrowed host string; null becomes the empty string and
/// invalid UTF-8 is replaced.
///
/// # Safety
/// `s` must be null or point to a NUL-terminated string.
pub unsafe fn lift_str(s: RawStr) -> String {
	if s.is_null() {
		return String::new();
	}
	unsafe { CStr::from_ptr(s) }.to_string_lossy().into_owned()
}

fn handle(raw: i64) -> Result<c_int> {
	c_int::try_from(raw).map_err(|_| Error::UnexpectedShape {
		expected: "handle within c_int range",
		got: raw.to_string(),
	})
}

#[cfg(test)]
mod tests;
