use proptest::prelude::*;

use super::*;

#[test]
fn init_is_empty_with_null_storage() {
	let mut v = KVec::<i64>::new();
	assert_eq!(v.size(), 0);
	assert_eq!(v.capacity(), 0);
	assert!(v.items.is_null());

	v.push(1);
	let items = v.items;
	v.init();
	assert_eq!((v.size(), v.capacity()), (0, 0));
	assert!(v.items.is_null());
	// init only forgets the storage
	unsafe { libc::free(items.cast()) };
}

#[test]
fn growth_starts_at_eight_then_doubles() {
	let mut v = KVec::new();
	v.push(0u32);
	assert_eq!(v.capacity(), KV_INITIAL_CAPACITY);
	for i in 1..9 {
		v.push(i);
	}
	assert_eq!(v.size(), 9);
	assert_eq!(v.capacity(), 16);
	v.destroy();
}

#[test]
fn indexes_from_the_end() {
	let mut v: KVec<i32> = [10, 20, 30].into_iter().collect();
	assert_eq!(v.last(), Some(&30));
	assert_eq!(v.z(1), Some(&20));
	assert_eq!(v.z(2), Some(&10));
	assert_eq!(v.z(3), None);
	assert_eq!(unsafe { *v.get_unchecked(1) }, 20);
	assert_eq!(v.get(3), None);
	v.destroy();
}

#[test]
fn pop_on_empty_is_none() {
	let mut v = KVec::<u8>::new();
	assert_eq!(v.pop(), None);
	assert!(v.last().is_none());
	assert!(v.as_slice().is_empty());
}

#[test]
fn resize_truncates() {
	let mut v: KVec<i32> = (0..5).collect();
	v.resize(2);
	assert_eq!(v.as_slice(), &[0, 1]);
	assert_eq!(v.capacity(), 2);
	v.resize(0);
	assert!(v.items.is_null());
	assert_eq!(v.size(), 0);
}

proptest! {
	#[test]
	fn push_pop_matches_vec(values in proptest::collection::vec(any::<i64>(), 0..64), pops in 0usize..80) {
		let mut kv = KVec::new();
		let mut model = Vec::new();
		for &x in &values {
			kv.push(x);
			model.push(x);
		}
		for _ in 0..pops {
			prop_assert_eq!(kv.pop(), model.pop());
		}
		prop_assert_eq!(kv.as_slice(), model.as_slice());
		prop_assert!(kv.capacity() >= kv.size());

		kv.destroy();
		prop_assert_eq!(kv.size(), 0);
		prop_assert_eq!(kv.capacity(), 0);
		prop_assert!(kv.items.is_null());
	}
}
