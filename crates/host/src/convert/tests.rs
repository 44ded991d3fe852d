use pretty_assertions::assert_eq;

use super::*;

#[test]
fn nested_values_survive_the_boundary() {
	let value = Value::Array(vec![
		Value::from("hello"),
		Value::Dictionary(vec![
			("hl_group".into(), Value::from("Comment")),
			("hl_group".into(), Value::Nil),
			("pos".into(), Value::Array(vec![Value::from(3), Value::from(4)])),
		]),
		Value::Window(Window::from_raw(1000)),
		Value::Float(0.5),
		Value::LuaRef(LuaRef(12)),
	]);

	let mut lowering = Lowering::new();
	let raw = lowering.object(&value).unwrap();
	assert_eq!(raw.ty, ObjectType::ARRAY);
	let lifted = unsafe { lift(&raw) }.unwrap();
	assert_eq!(lifted, value);
}

#[test]
fn interior_nul_is_rejected() {
	let mut lowering = Lowering::new();
	let err = lowering.object(&Value::from("ab\0c")).unwrap_err();
	assert!(matches!(err, Error::InteriorNul(2)), "{err:?}");
}

#[test]
fn failed_element_leaves_no_partial_array() {
	let mut lowering = Lowering::new();
	let items = [Value::Array(vec![Value::from(1)]), Value::from("\0")];
	assert!(lowering.array(&items).is_err());
	// only the nested array that finished lowering is tracked
	assert_eq!(lowering.buffers.len(), 1);
}

#[test]
fn unknown_tag_is_rejected() {
	let obj = sys::Object {
		ty: ObjectType(11),
		data: sys::ObjectData { integer: 0 },
	};
	let err = unsafe { lift(&obj) }.unwrap_err();
	assert!(matches!(err, Error::UnknownObjectType(11)));
}

#[test]
fn null_string_lifts_to_empty() {
	let obj = sys::Object::string(std::ptr::null());
	assert_eq!(unsafe { lift(&obj) }.unwrap(), Value::String(String::new()));
}

#[test]
fn out_of_range_handle_is_rejected() {
	let obj = sys::Object {
		ty: ObjectType::BUFFER,
		data: sys::ObjectData { integer: i64::MAX },
	};
	let err = unsafe { lift(&obj) }.unwrap_err();
	assert!(matches!(err, Error::UnexpectedShape { .. }));
}

#[test]
fn empty_array_has_no_storage() {
	let mut lowering = Lowering::new();
	let arr = lowering.array(&[]).unwrap();
	assert!(arr.items.is_null());
	assert!(lowering.buffers.is_empty());
	let obj = sys::Object::array(arr);
	assert_eq!(unsafe { lift_array(&obj.data.array) }.unwrap(), Vec::<Value>::new());
}

#[test]
fn positions_lower_to_integers() {
	let mut lowering = Lowering::new();
	let arr = lowering.integers(&[5, 0]);
	let got: Vec<_> = arr.as_slice().iter().map(|o| unsafe { o.data.integer }).collect();
	assert_eq!(got, vec![5, 0]);
	assert!(arr.as_slice().iter().all(|o| o.ty == ObjectType::INTEGER));
}
