use std::ffi::CString;

use super::*;

#[test]
fn error_init_is_success_without_message() {
	let err = ERROR_INIT;
	assert_eq!(err.ty, ErrorType::NONE);
	assert_eq!(err.ty.0, -1);
	assert!(err.msg.is_null());
	assert!(!err.is_set());
	assert!(unsafe { err.message() }.is_none());
}

#[test]
fn populated_error_exposes_message() {
	let msg = CString::new("Invalid window id: 99").unwrap();
	let err = Error {
		ty: ErrorType::VALIDATION,
		msg: msg.as_ptr().cast_mut(),
	};
	assert!(err.is_set());
	assert_eq!(unsafe { err.message() }.unwrap().to_str().unwrap(), "Invalid window id: 99");
	assert_eq!(format!("{:?}", err.ty), "ErrorType::VALIDATION");
}

#[test]
fn unknown_error_type_debug() {
	assert_eq!(format!("{:?}", ErrorType(7)), "ErrorType(7)");
	assert_eq!(ErrorType::EXCEPTION.0, 0);
}
