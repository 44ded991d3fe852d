//! Growable sequence container shared with the host (`kvec_t`).

use std::alloc::{Layout, handle_alloc_error};
use std::fmt;
use std::mem;
use std::ptr;

/// Capacity chosen for the first allocation of an empty vector.
pub const KV_INITIAL_CAPACITY: usize = 8;

/// Generic dynamic array with the host's `{ size, capacity, items }` layout.
///
/// Storage is managed with the C allocator so buffers can be handed to, or
/// received from, the host. The type has no `Drop`: storage is released only
/// by [`KVec::destroy`], and only for buffers the C allocator owns. Vectors
/// that live inside a host arena must never be destroyed individually.
#[repr(C)]
pub struct KVec<T> {
	pub size: usize,
	pub capacity: usize,
	pub items: *mut T,
}

impl<T> KVec<T> {
	/// Empty vector (`KV_INITIAL_VALUE`).
	pub const fn new() -> Self {
		Self {
			size: 0,
			capacity: 0,
			items: ptr::null_mut(),
		}
	}

	/// Resets the counters and the backing pointer without releasing storage (`kv_init`).
	pub fn init(&mut self) {
		self.size = 0;
		self.capacity = 0;
		self.items = ptr::null_mut();
	}

	/// Number of live elements (`kv_size`).
	pub fn size(&self) -> usize {
		self.size
	}

	/// Number of allocated slots (`kv_max`).
	pub fn capacity(&self) -> usize {
		self.capacity
	}

	pub fn is_empty(&self) -> bool {
		self.size == 0
	}

	/// Views the live elements.
	pub fn as_slice(&self) -> &[T] {
		if self.items.is_null() || self.size == 0 {
			return &[];
		}
		// SAFETY: `items` points to at least `size` initialized elements.
		unsafe { std::slice::from_raw_parts(self.items, self.size) }
	}

	/// Element at `i`, valid only for `i < size`.
	pub fn get(&self, i: usize) -> Option<&T> {
		self.as_slice().get(i)
	}

	/// Element at `i` without a bounds check (`kv_A`).
	///
	/// # Safety
	/// `i` must be less than [`KVec::size`].
	pub unsafe fn get_unchecked(&self, i: usize) -> &T {
		unsafe { &*self.items.add(i) }
	}

	/// Element `i` positions from the end (`kv_Z`); `z(0)` is the last element.
	pub fn z(&self, i: usize) -> Option<&T> {
		let idx = self.size.checked_sub(i)?.checked_sub(1)?;
		self.get(idx)
	}

	/// Last element (`kv_last`).
	pub fn last(&self) -> Option<&T> {
		self.z(0)
	}

	/// Removes and returns the last element (`kv_pop`).
	pub fn pop(&mut self) -> Option<T> {
		if self.size == 0 {
			return None;
		}
		self.size -= 1;
		// SAFETY: the slot at the old `size - 1` is initialized and is no longer tracked.
		Some(unsafe { ptr::read(self.items.add(self.size)) })
	}

	/// Appends `value`, growing to 8 slots first and doubling afterwards (`kv_push`).
	pub fn push(&mut self, value: T) {
		if self.size == self.capacity {
			let next = if self.capacity == 0 { KV_INITIAL_CAPACITY } else { self.capacity << 1 };
			self.resize(next);
		}
		// SAFETY: `size < capacity` after the resize above.
		unsafe { ptr::write(self.items.add(self.size), value) };
		self.size += 1;
	}

	/// Reallocates the backing storage to exactly `capacity` slots (`kv_resize`).
	///
	/// Elements beyond the new capacity are dropped.
	pub fn resize(&mut self, capacity: usize) {
		assert!(mem::size_of::<T>() != 0, "KVec does not support zero-sized elements");
		while self.size > capacity {
			drop(self.pop());
		}
		if capacity == 0 {
			// SAFETY: `items` is null or was allocated by the C allocator.
			unsafe { libc::free(self.items.cast()) };
			self.items = ptr::null_mut();
			self.capacity = 0;
			return;
		}
		let layout = match Layout::array::<T>(capacity) {
			Ok(layout) => layout,
			Err(_) => panic!("KVec capacity overflow: {capacity}"),
		};
		// SAFETY: `items` is null or was allocated by the C allocator.
		let items = unsafe { libc::realloc(self.items.cast(), layout.size()) }.cast::<T>();
		if items.is_null() {
			handle_alloc_error(layout);
		}
		self.items = items;
		self.capacity = capacity;
	}

	/// Drops the elements, releases the storage and resets to empty (`kv_destroy`).
	///
	/// Only valid for storage owned by the C allocator.
	pub fn destroy(&mut self) {
		if !self.items.is_null() {
			// SAFETY: the first `size` slots are initialized; storage is C-allocated.
			unsafe {
				ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.items, self.size));
				libc::free(self.items.cast());
			}
		}
		self.init();
	}
}

impl<T> Default for KVec<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> Extend<T> for KVec<T> {
	fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
		for item in iter {
			self.push(item);
		}
	}
}

impl<T> FromIterator<T> for KVec<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		let mut v = Self::new();
		v.extend(iter);
		v
	}
}

impl<T: fmt::Debug> fmt::Debug for KVec<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("KVec")
			.field("size", &self.size)
			.field("capacity", &self.capacity)
			.field("items", &self.as_slice())
			.finish()
	}
}

#[cfg(test)]
mod tests;
