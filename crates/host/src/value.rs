//! Owned dynamic value mirroring the host's `Object`.

use std::fmt;

use moonwalk_sys::ObjectType;

use crate::handle::{Buffer, Tabpage, Window};

/// Ordered key/value pairs; duplicate keys are preserved.
pub type Dictionary = Vec<(String, Value)>;

/// Opaque reference to a value owned by the host's Lua state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LuaRef(pub i32);

/// A host value. Each variant corresponds to one [`ObjectType`] tag.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
	#[default]
	Nil,
	Boolean(bool),
	Integer(i64),
	Float(f64),
	String(String),
	Array(Vec<Value>),
	Dictionary(Dictionary),
	LuaRef(LuaRef),
	Buffer(Buffer),
	Window(Window),
	Tabpage(Tabpage),
}

impl Value {
	/// Tag this value is encoded with.
	pub fn object_type(&self) -> ObjectType {
		match self {
			Self::Nil => ObjectType::NIL,
			Self::Boolean(_) => ObjectType::BOOLEAN,
			Self::Integer(_) => ObjectType::INTEGER,
			Self::Float(_) => ObjectType::FLOAT,
			Self::String(_) => ObjectType::STRING,
			Self::Array(_) => ObjectType::ARRAY,
			Self::Dictionary(_) => ObjectType::DICTIONARY,
			Self::LuaRef(_) => ObjectType::LUAREF,
			Self::Buffer(_) => ObjectType::BUFFER,
			Self::Window(_) => ObjectType::WINDOW,
			Self::Tabpage(_) => ObjectType::TABPAGE,
		}
	}

	pub fn type_name(&self) -> &'static str {
		self.object_type().name().unwrap_or("unknown")
	}

	pub fn is_nil(&self) -> bool {
		matches!(self, Self::Nil)
	}

	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Boolean(b) => Some(*b),
			_ => None,
		}
	}

	pub fn as_integer(&self) -> Option<i64> {
		match self {
			Self::Integer(i) => Some(*i),
			_ => None,
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(s) => Some(s),
			_ => None,
		}
	}

	pub fn as_array(&self) -> Option<&[Value]> {
		match self {
			Self::Array(items) => Some(items),
			_ => None,
		}
	}

	/// First entry stored under `key`, for dictionaries.
	pub fn get(&self, key: &str) -> Option<&Value> {
		match self {
			Self::Dictionary(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
			_ => None,
		}
	}
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Nil => f.write_str("nil"),
			Self::Boolean(b) => write!(f, "{b}"),
			Self::Integer(i) => write!(f, "{i}"),
			Self::Float(x) => write!(f, "{x}"),
			Self::String(s) => write!(f, "{s:?}"),
			Self::Array(items) => {
				f.write_str("[")?;
				for (i, item) in items.iter().enumerate() {
					if i > 0 {
						f.write_str(", ")?;
					}
					write!(f, "{item}")?;
				}
				f.write_str("]")
			}
			Self::Dictionary(entries) => {
				f.write_str("{")?;
				for (i, (k, v)) in entries.iter().enumerate() {
					if i > 0 {
						f.write_str(", ")?;
					}
					write!(f, "{k} = {v}")?;
				}
				f.write_str("}")
			}
			Self::LuaRef(r) => write!(f, "<luaref {}>", r.0),
			Self::Buffer(h) => write!(f, "{h}"),
			Self::Window(h) => write!(f, "{h}"),
			Self::Tabpage(h) => write!(f, "{h}"),
		}
	}
}

macro_rules! value_from {
	($($ty:ty => $variant:ident),* $(,)?) => {
		$(
			impl From<$ty> for Value {
				fn from(v: $ty) -> Self {
					Self::$variant(v.into())
				}
			}
		)*
	};
}

value_from! {
	bool => Boolean,
	i64 => Integer,
	i32 => Integer,
	f64 => Float,
	String => String,
	&str => String,
	Vec<Value> => Array,
	Dictionary => Dictionary,
	LuaRef => LuaRef,
	Buffer => Buffer,
	Window => Window,
	Tabpage => Tabpage,
}

impl From<()> for Value {
	fn from((): ()) -> Self {
		Self::Nil
	}
}
