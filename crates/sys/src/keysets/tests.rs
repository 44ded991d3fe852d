use pretty_assertions::assert_eq;

use super::*;

#[test]
fn zeroed_records_report_no_keys() {
	let echo = KeyDict_echo_opts::default();
	assert_eq!(echo.is_set__echo_opts_, 0);
	assert_eq!(echo.err(), None);
	assert_eq!(echo.verbose(), None);

	let extmark = KeyDict_get_extmark::default();
	assert_eq!(extmark.details(), None);
	assert_eq!(extmark.hl_name(), None);
}

#[test]
fn setters_mark_only_their_bit() {
	let mut echo = KeyDict_echo_opts::default();
	echo.set_verbose(false);
	assert_eq!(echo.is_set__echo_opts_, key_bit(KeyDict_echo_opts::VERBOSE));
	assert_eq!(echo.verbose(), Some(false));
	assert_eq!(echo.err(), None);

	let mut extmark = KeyDict_get_extmark::default();
	extmark.set_details(true);
	extmark.set_hl_name(true);
	assert_eq!(extmark.is_set__get_extmark_, 0b110);
	assert_eq!(extmark.details(), Some(true));
}

#[test]
fn unset_field_is_ignored_even_if_nonzero() {
	let echo = KeyDict_echo_opts {
		is_set__echo_opts_: 0,
		err: true,
		verbose: true,
	};
	assert_eq!(echo.err(), None);
	assert_eq!(echo.verbose(), None);
}
