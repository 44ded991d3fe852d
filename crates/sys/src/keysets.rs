//! Fixed-shape option records (`Dict(name)` / `KeyDict_*`).
//!
//! `is_set` records which optional fields the caller supplied; a field whose
//! bit is clear holds its zero default and must not be interpreted.

#![allow(non_camel_case_types, non_snake_case)]

use crate::types::Boolean;

pub type OptionalKeys = u64;

/// Bit recording that the option at `idx` was supplied.
pub const fn key_bit(idx: u32) -> OptionalKeys {
	1 << idx
}

/// Options for `nvim_echo`.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct KeyDict_echo_opts {
	pub is_set__echo_opts_: OptionalKeys,
	pub err: Boolean,
	pub verbose: Boolean,
}

impl KeyDict_echo_opts {
	pub const ERR: u32 = 1;
	pub const VERBOSE: u32 = 2;

	pub fn has(&self, idx: u32) -> bool {
		self.is_set__echo_opts_ & key_bit(idx) != 0
	}

	pub fn set_err(&mut self, err: Boolean) {
		self.err = err;
		self.is_set__echo_opts_ |= key_bit(Self::ERR);
	}

	pub fn set_verbose(&mut self, verbose: Boolean) {
		self.verbose = verbose;
		self.is_set__echo_opts_ |= key_bit(Self::VERBOSE);
	}

	/// `err`, if it was supplied.
	pub fn err(&self) -> Option<Boolean> {
		self.has(Self::ERR).then_some(self.err)
	}

	/// `verbose`, if it was supplied.
	pub fn verbose(&self) -> Option<Boolean> {
		self.has(Self::VERBOSE).then_some(self.verbose)
	}
}

/// Options for `nvim_buf_get_extmark_by_id`.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct KeyDict_get_extmark {
	pub is_set__get_extmark_: OptionalKeys,
	pub details: Boolean,
	pub hl_name: Boolean,
}

impl KeyDict_get_extmark {
	pub const DETAILS: u32 = 1;
	pub const HL_NAME: u32 = 2;

	pub fn has(&self, idx: u32) -> bool {
		self.is_set__get_extmark_ & key_bit(idx) != 0
	}

	pub fn set_details(&mut self, details: Boolean) {
		self.details = details;
		self.is_set__get_extmark_ |= key_bit(Self::DETAILS);
	}

	pub fn set_hl_name(&mut self, hl_name: Boolean) {
		self.hl_name = hl_name;
		self.is_set__get_extmark_ |= key_bit(Self::HL_NAME);
	}

	pub fn details(&self) -> Option<Boolean> {
		self.has(Self::DETAILS).then_some(self.details)
	}

	pub fn hl_name(&self) -> Option<Boolean> {
		self.has(Self::HL_NAME).then_some(self.hl_name)
	}
}

pub type Dict_echo_opts = KeyDict_echo_opts;
pub type Dict_get_extmark = KeyDict_get_extmark;

#[cfg(test)]
mod tests;
