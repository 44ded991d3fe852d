//! Safe, typed access to the host editor's native plugin API.
//!
//! This crate wraps the raw declarations of `moonwalk-sys`:
//! * [`Host`]: the host's operations as a trait
//! * [`NativeHost`]: implementation calling the host's exported symbols
//! * [`Value`]: owned form of the host's dynamic `Object`
//! * [`Session`]: explicit call context carrying config, channel and interpreter state
//! * [`Config`]: TOML configuration, and [`logging`] to act on it

pub mod arena;
pub mod config;
pub mod convert;
pub mod error;
pub mod handle;
pub mod host;
pub mod logging;
pub mod native;
pub mod opts;
pub mod session;
pub mod types;
pub mod value;

pub use arena::ArenaScope;
pub use config::{Config, ConfigError};
pub use error::{Error, Result};
pub use handle::{Buffer, ChannelId, ExtmarkId, LuaHandle, NamespaceId, Tabpage, Window};
pub use host::Host;
pub use native::NativeHost;
pub use opts::{EchoOpts, ExtmarkOpts};
pub use session::Session;
pub use types::{Chunk, ColorMatch, Cursor, Extmark, LineRange, LogLevel};
pub use value::{Dictionary, LuaRef, Value};
