//! Scalar aliases, handle types and the dynamic `Object` value.

use std::ffi::{c_char, c_int};
use std::fmt;
use std::mem::ManuallyDrop;

use crate::kvec::KVec;

pub type Boolean = bool;
pub type Integer = i64;
pub type Float = f64;
pub type LuaRef = c_int;
/// Borrowed pointer to NUL-terminated bytes (`String`).
pub type RawStr = *const c_char;

pub type Window = c_int;
pub type Buffer = c_int;
pub type Tabpage = c_int;

/// Marks a call as issued from Vimscript rather than an RPC client.
pub const VIML_INTERNAL_CALL: u64 = 1 << 63;
/// Marks a call as issued from Lua.
pub const LUA_INTERNAL_CALL: u64 = VIML_INTERNAL_CALL + 1;

/// Opaque interpreter state (`lua_State`).
#[repr(C)]
pub struct LuaState {
	_private: [u8; 0],
}

/// Type tag of an [`Object`].
///
/// Kept as a transparent integer because the host may hand back values this
/// crate does not know about.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectType(pub c_int);

impl ObjectType {
	pub const NIL: Self = Self(0);
	pub const BOOLEAN: Self = Self(1);
	pub const INTEGER: Self = Self(2);
	pub const FLOAT: Self = Self(3);
	pub const STRING: Self = Self(4);
	pub const ARRAY: Self = Self(5);
	pub const DICTIONARY: Self = Self(6);
	pub const LUAREF: Self = Self(7);
	// EXT types, cannot be split or reordered, see EXT_OBJECT_TYPE_SHIFT
	pub const BUFFER: Self = Self(8);
	pub const WINDOW: Self = Self(9);
	pub const TABPAGE: Self = Self(10);

	/// Returns the tag's name, or `None` for tags outside the known set.
	pub fn name(self) -> Option<&'static str> {
		Some(match self {
			Self::NIL => "nil",
			Self::BOOLEAN => "boolean",
			Self::INTEGER => "integer",
			Self::FLOAT => "float",
			Self::STRING => "string",
			Self::ARRAY => "array",
			Self::DICTIONARY => "dictionary",
			Self::LUAREF => "luaref",
			Self::BUFFER => "buffer",
			Self::WINDOW => "window",
			Self::TABPAGE => "tabpage",
			_ => return None,
		})
	}

	/// Whether this tag is one of the extension handle types.
	pub fn is_ext(self) -> bool {
		(Self::BUFFER..=Self::TABPAGE).contains(&self)
	}

	/// Extension code used by the host's value encoding.
	pub fn ext_code(self) -> Option<i8> {
		self.is_ext().then(|| (self.0 - EXT_OBJECT_TYPE_SHIFT.0) as i8)
	}

	/// Inverse of [`ObjectType::ext_code`].
	pub fn from_ext_code(code: i8) -> Option<Self> {
		let ty = Self(EXT_OBJECT_TYPE_SHIFT.0 + c_int::from(code));
		ty.is_ext().then_some(ty)
	}
}

/// First extension tag; handle tags are encoded relative to it.
pub const EXT_OBJECT_TYPE_SHIFT: ObjectType = ObjectType::BUFFER;

impl fmt::Debug for ObjectType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.name() {
			Some(name) => write!(f, "ObjectType::{}", name.to_ascii_uppercase()),
			None => write!(f, "ObjectType({})", self.0),
		}
	}
}

pub type Array = KVec<Object>;
pub type Dictionary = KVec<KeyValuePair>;

/// Entry of a [`Dictionary`]. Key uniqueness is not enforced.
#[repr(C)]
#[derive(Debug)]
pub struct KeyValuePair {
	pub key: RawStr,
	pub value: Object,
}

/// Payload of an [`Object`]; the active field is selected by [`Object::ty`].
///
/// Buffer, window and tabpage handles are stored in `integer`.
#[repr(C)]
pub union ObjectData {
	pub boolean: Boolean,
	pub integer: Integer,
	pub floating: Float,
	pub string: RawStr,
	pub array: ManuallyDrop<Array>,
	pub dictionary: ManuallyDrop<Dictionary>,
	pub luaref: LuaRef,
}

/// Dynamic value crossing the boundary (`struct object`).
#[repr(C)]
pub struct Object {
	pub ty: ObjectType,
	pub data: ObjectData,
}

impl Object {
	pub const fn nil() -> Self {
		Self {
			ty: ObjectType::NIL,
			data: ObjectData { integer: 0 },
		}
	}

	pub const fn boolean(b: Boolean) -> Self {
		Self {
			ty: ObjectType::BOOLEAN,
			data: ObjectData { boolean: b },
		}
	}

	pub const fn integer(i: Integer) -> Self {
		Self {
			ty: ObjectType::INTEGER,
			data: ObjectData { integer: i },
		}
	}

	pub const fn float(f: Float) -> Self {
		Self {
			ty: ObjectType::FLOAT,
			data: ObjectData { floating: f },
		}
	}

	/// Wraps a borrowed string pointer; the pointee must outlive the object.
	pub const fn string(s: RawStr) -> Self {
		Self {
			ty: ObjectType::STRING,
			data: ObjectData { string: s },
		}
	}

	pub const fn array(a: Array) -> Self {
		Self {
			ty: ObjectType::ARRAY,
			data: ObjectData { array: ManuallyDrop::new(a) },
		}
	}

	pub const fn dictionary(d: Dictionary) -> Self {
		Self {
			ty: ObjectType::DICTIONARY,
			data: ObjectData {
				dictionary: ManuallyDrop::new(d),
			},
		}
	}

	pub const fn luaref(r: LuaRef) -> Self {
		Self {
			ty: ObjectType::LUAREF,
			data: ObjectData { luaref: r },
		}
	}

	/// Handle object for one of the extension tags.
	///
	/// # Panics
	/// Panics when `ty` is not an extension tag.
	pub fn handle(ty: ObjectType, handle: c_int) -> Self {
		assert!(ty.is_ext(), "{ty:?} is not a handle type");
		Self {
			ty,
			data: ObjectData {
				integer: Integer::from(handle),
			},
		}
	}
}

impl fmt::Debug for Object {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		// SAFETY: each arm reads the field selected by the tag.
		unsafe {
			match self.ty {
				ObjectType::NIL => f.write_str("Nil"),
				ObjectType::BOOLEAN => write!(f, "Boolean({})", self.data.boolean),
				ObjectType::INTEGER => write!(f, "Integer({})", self.data.integer),
				ObjectType::FLOAT => write!(f, "Float({})", self.data.floating),
				ObjectType::STRING => write!(f, "String({:p})", self.data.string),
				ObjectType::ARRAY => f.debug_tuple("Array").field(&*self.data.array).finish(),
				ObjectType::DICTIONARY => f.debug_tuple("Dictionary").field(&*self.data.dictionary).finish(),
				ObjectType::LUAREF => write!(f, "LuaRef({})", self.data.luaref),
				ty if ty.is_ext() => write!(f, "{ty:?}({})", self.data.integer),
				ty => write!(f, "{ty:?}"),
			}
		}
	}
}

#[cfg(test)]
mod tests;
