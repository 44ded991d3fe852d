//! Typed shapes of host call arguments and results.

use std::ops::Range;

use serde::Deserialize;
use tracing::level_filters::LevelFilter;

use crate::error::{Error, Result};
use crate::value::{Dictionary, Value};

/// Cursor position: 1-based row, 0-based byte column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cursor {
	pub row: i64,
	pub col: i64,
}

impl Cursor {
	pub const fn new(row: i64, col: i64) -> Self {
		Self { row, col }
	}

	/// Parses the host's `[row, col]` pair.
	pub fn from_values(values: &[Value]) -> Result<Self> {
		match values {
			[Value::Integer(row), Value::Integer(col)] => Ok(Self::new(*row, *col)),
			other => Err(shape("[row, col] integers", other)),
		}
	}

	pub fn to_array(self) -> [i64; 2] {
		[self.row, self.col]
	}
}

/// Line span with the host's indexing: 0-based, end-exclusive, negative
/// indices count from the end so `-1` is one past the last line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineRange {
	pub start: i64,
	pub end: i64,
}

impl LineRange {
	pub const fn new(start: i64, end: i64) -> Self {
		Self { start, end }
	}

	/// Every line of the buffer.
	pub const fn all() -> Self {
		Self::new(0, -1)
	}

	/// The single line at 0-based `index`.
	pub const fn line(index: i64) -> Self {
		Self::new(index, index + 1)
	}
}

impl From<Range<i64>> for LineRange {
	fn from(range: Range<i64>) -> Self {
		Self::new(range.start, range.end)
	}
}

/// One `[text, hl_group]` segment of an echoed message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
	pub text: String,
	pub hl_group: Option<String>,
}

impl Chunk {
	pub fn new(text: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			hl_group: None,
		}
	}

	pub fn highlighted(text: impl Into<String>, hl_group: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			hl_group: Some(hl_group.into()),
		}
	}

	pub fn to_value(&self) -> Value {
		let mut parts = vec![Value::from(self.text.as_str())];
		if let Some(hl) = &self.hl_group {
			parts.push(Value::from(hl.as_str()));
		}
		Value::Array(parts)
	}
}

/// Extmark position, with details when they were requested.
#[derive(Debug, Clone, PartialEq)]
pub struct Extmark {
	pub row: i64,
	pub col: i64,
	pub details: Option<Dictionary>,
}

impl Extmark {
	/// Parses the host's reply: `[]` when the mark does not exist,
	/// `[row, col]` or `[row, col, details]` otherwise.
	pub fn from_values(values: Vec<Value>) -> Result<Option<Self>> {
		let mut iter = values.into_iter();
		let (row, col) = match (iter.next(), iter.next()) {
			(None, _) => return Ok(None),
			(Some(Value::Integer(row)), Some(Value::Integer(col))) => (row, col),
			(first, second) => {
				let got: Vec<Value> = first.into_iter().chain(second).collect();
				return Err(shape("[row, col, details?]", &got));
			}
		};
		let details = match iter.next() {
			None => None,
			Some(Value::Dictionary(details)) => Some(details),
			Some(other) => return Err(shape("details dictionary", std::slice::from_ref(&other))),
		};
		if let Some(extra) = iter.next() {
			return Err(shape("at most three elements", std::slice::from_ref(&extra)));
		}
		Ok(Some(Self { row, col, details }))
	}
}

/// Severity passed to `nvim_notify`, also used as a log filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
	Trace = 0,
	Debug = 1,
	#[default]
	Info = 2,
	Warn = 3,
	Error = 4,
	Off = 5,
}

impl LogLevel {
	pub const fn as_integer(self) -> i64 {
		self as i64
	}

	/// Filter admitting this level and everything more severe.
	pub fn to_level_filter(self) -> LevelFilter {
		match self {
			Self::Trace => LevelFilter::TRACE,
			Self::Debug => LevelFilter::DEBUG,
			Self::Info => LevelFilter::INFO,
			Self::Warn => LevelFilter::WARN,
			Self::Error => LevelFilter::ERROR,
			Self::Off => LevelFilter::OFF,
		}
	}
}

/// Result of a color name lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorMatch {
	/// `0xRRGGBB`.
	pub rgb: u32,
	/// Position in the host's color table, or `-1` for `#rrggbb` names.
	pub index: i32,
}

impl ColorMatch {
	pub const fn r(self) -> u8 {
		(self.rgb >> 16) as u8
	}

	pub const fn g(self) -> u8 {
		(self.rgb >> 8) as u8
	}

	pub const fn b(self) -> u8 {
		self.rgb as u8
	}
}

fn shape(expected: &'static str, got: &[Value]) -> Error {
	let got = got.iter().map(Value::type_name).collect::<Vec<_>>().join(", ");
	Error::UnexpectedShape {
		expected,
		got: format!("[{got}]"),
	}
}
