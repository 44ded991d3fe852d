use rstest::rstest;

use super::*;

#[test]
fn handle_tags_follow_luaref_contiguously() {
	assert_eq!(ObjectType::LUAREF.0, 7);
	assert_eq!(ObjectType::BUFFER.0, ObjectType::LUAREF.0 + 1);
	assert_eq!(ObjectType::WINDOW.0, ObjectType::BUFFER.0 + 1);
	assert_eq!(ObjectType::TABPAGE.0, ObjectType::WINDOW.0 + 1);
	assert_eq!(EXT_OBJECT_TYPE_SHIFT, ObjectType::BUFFER);
}

#[rstest]
#[case(ObjectType::NIL, 0)]
#[case(ObjectType::BOOLEAN, 1)]
#[case(ObjectType::INTEGER, 2)]
#[case(ObjectType::FLOAT, 3)]
#[case(ObjectType::STRING, 4)]
#[case(ObjectType::ARRAY, 5)]
#[case(ObjectType::DICTIONARY, 6)]
#[case(ObjectType::LUAREF, 7)]
fn base_tags_are_stable(#[case] ty: ObjectType, #[case] value: c_int) {
	assert_eq!(ty.0, value);
	assert!(!ty.is_ext());
	assert_eq!(ty.ext_code(), None);
}

#[rstest]
#[case(ObjectType::BUFFER, 0)]
#[case(ObjectType::WINDOW, 1)]
#[case(ObjectType::TABPAGE, 2)]
fn ext_codes_are_offsets_from_shift(#[case] ty: ObjectType, #[case] code: i8) {
	assert_eq!(ty.ext_code(), Some(code));
	assert_eq!(ObjectType::from_ext_code(code), Some(ty));
}

#[test]
fn unknown_ext_code_is_rejected() {
	assert_eq!(ObjectType::from_ext_code(3), None);
	assert_eq!(ObjectType::from_ext_code(-1), None);
}

#[test]
fn unknown_tag_has_no_name() {
	assert_eq!(ObjectType(42).name(), None);
	assert_eq!(format!("{:?}", ObjectType(42)), "ObjectType(42)");
	assert_eq!(format!("{:?}", ObjectType::WINDOW), "ObjectType::WINDOW");
}

#[test]
fn handle_objects_store_integer() {
	let obj = Object::handle(ObjectType::WINDOW, 1000);
	assert_eq!(obj.ty, ObjectType::WINDOW);
	assert_eq!(unsafe { obj.data.integer }, 1000);
	assert_eq!(format!("{obj:?}"), "ObjectType::WINDOW(1000)");
}

#[test]
#[should_panic(expected = "not a handle type")]
fn handle_rejects_base_tags() {
	let _ = Object::handle(ObjectType::INTEGER, 1);
}

#[test]
fn array_object_debug_lists_items() {
	let mut items: Array = [Object::integer(1), Object::boolean(true)].into_iter().collect();
	let obj = Object::array(KVec {
		size: items.size,
		capacity: items.capacity,
		items: items.items,
	});
	assert_eq!(format!("{obj:?}"), "Array(KVec { size: 2, capacity: 8, items: [Integer(1), Boolean(true)] })");
	items.destroy();
}
