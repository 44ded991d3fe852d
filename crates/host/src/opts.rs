//! Optional call parameters. Unset fields are left to the host's defaults.

use moonwalk_sys::{KeyDict_echo_opts, KeyDict_get_extmark};

/// Options for `echo`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EchoOpts {
	/// Treat the message as an error message.
	pub err: Option<bool>,
	/// Only show the message when 'verbose' is set.
	pub verbose: Option<bool>,
}

impl EchoOpts {
	pub fn err(mut self, err: bool) -> Self {
		self.err = Some(err);
		self
	}

	pub fn verbose(mut self, verbose: bool) -> Self {
		self.verbose = Some(verbose);
		self
	}

	pub fn to_raw(self) -> KeyDict_echo_opts {
		let mut raw = KeyDict_echo_opts::default();
		if let Some(err) = self.err {
			raw.set_err(err);
		}
		if let Some(verbose) = self.verbose {
			raw.set_verbose(verbose);
		}
		raw
	}
}

/// Options for `buf_get_extmark_by_id`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtmarkOpts {
	/// Include the details dictionary in the reply.
	pub details: Option<bool>,
	/// Report highlight groups by name instead of id.
	pub hl_name: Option<bool>,
}

impl ExtmarkOpts {
	pub fn details(mut self, details: bool) -> Self {
		self.details = Some(details);
		self
	}

	pub fn hl_name(mut self, hl_name: bool) -> Self {
		self.hl_name = Some(hl_name);
		self
	}

	pub fn to_raw(self) -> KeyDict_get_extmark {
		let mut raw = KeyDict_get_extmark::default();
		if let Some(details) = self.details {
			raw.set_details(details);
		}
		if let Some(hl_name) = self.hl_name {
			raw.set_hl_name(hl_name);
		}
		raw
	}
}

#[cfg(test)]
mod tests {
	use moonwalk_sys::key_bit;

	use super::*;

	#[test]
	fn defaults_set_no_bits() {
		assert_eq!(EchoOpts::default().to_raw().is_set__echo_opts_, 0);
		assert_eq!(ExtmarkOpts::default().to_raw().is_set__get_extmark_, 0);
	}

	#[test]
	fn explicit_false_is_still_set() {
		let raw = EchoOpts::default().err(false).to_raw();
		assert_eq!(raw.is_set__echo_opts_, key_bit(KeyDict_echo_opts::ERR));
		assert_eq!(raw.err(), Some(false));
		assert_eq!(raw.verbose(), None);
	}

	#[test]
	fn extmark_flags_round_trip() {
		let raw = ExtmarkOpts::default().details(true).to_raw();
		assert_eq!(raw.details(), Some(true));
		assert_eq!(raw.hl_name(), None);
	}
}
