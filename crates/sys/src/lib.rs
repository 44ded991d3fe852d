//! Raw C ABI of the host editor's native plugin API.
//!
//! Every type here mirrors the host's memory layout exactly and every
//! function is a declaration whose behavior lives in the host:
//! * [`KVec`]: the growable `{ size, capacity, items }` container
//! * [`Object`]: tagged union over the host's dynamic value type
//! * [`Error`]: out-parameter reporting failures to the caller
//! * [`Arena`]: bump region that call results are allocated from
//! * [`HostApi`]: table of resolved entry points

pub mod api;
pub mod arena;
pub mod error;
pub mod keysets;
pub mod kvec;
#[cfg(feature = "link")]
pub mod link;
pub mod loader;
pub mod types;

pub use api::{HostApi, OPTIONAL_SYMBOLS, REQUIRED_SYMBOLS};
pub use arena::{ARENA_EMPTY, Arena, ArenaMem};
pub use error::{ERROR_INIT, Error, ErrorType};
pub use keysets::{Dict_echo_opts, Dict_get_extmark, KeyDict_echo_opts, KeyDict_get_extmark, OptionalKeys, key_bit};
pub use kvec::KVec;
pub use loader::{HostLibrary, LoadError};
pub use types::{
	Array, Boolean, Buffer, Dictionary, EXT_OBJECT_TYPE_SHIFT, Float, Integer, KeyValuePair, LUA_INTERNAL_CALL, LuaRef, LuaState,
	Object, ObjectData, ObjectType, RawStr, Tabpage, VIML_INTERNAL_CALL, Window,
};
