//! Single-owner handle to one contiguous heap allocation of element slots.
//!
//! `ArrayPtr<T>` owns exactly one allocation able to hold `capacity` values of `T`.
//! It does not track which slots are initialized: that bookkeeping belongs to the
//! owner (see `SimpleVector`). Consequently dropping an `ArrayPtr` frees the memory
//! but never runs element destructors.
//!
//! The handle is move-only. Duplicating the raw allocation is not offered; deep copies
//! are performed by the owning container, slot by slot.

use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

use simple_vector_common::{Error, Result};

/// An exclusively owned allocation of `capacity` uninitialized slots of `T`.
pub struct ArrayPtr<T> {
    /// Start of the allocation, or a dangling (well-aligned) pointer when nothing
    /// was allocated.
    ptr: NonNull<T>,
    /// Number of slots, not bytes.
    capacity: usize,
    _marker: PhantomData<T>,
}

// SAFETY: `ArrayPtr` is a unique owner of its allocation, like `Box<[T]>`.
unsafe impl<T: Send> Send for ArrayPtr<T> {}

// SAFETY: shared access only hands out `*const T`.
unsafe impl<T: Sync> Sync for ArrayPtr<T> {}

impl<T> ArrayPtr<T> {
    /// Creates an empty handle that owns no allocation.
    pub const fn empty() -> ArrayPtr<T> {
        ArrayPtr {
            ptr: NonNull::dangling(),
            capacity: 0,
            _marker: PhantomData,
        }
    }

    /// Allocates storage for `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow; aborts through [`alloc::handle_alloc_error`] if the
    /// allocator fails.
    pub fn new(capacity: usize) -> ArrayPtr<T> {
        let layout = match Self::layout_for(capacity) {
            Ok(layout) => layout,
            Err(_) => panic!("capacity overflow"),
        };
        match Self::allocate(capacity, layout) {
            Some(buf) => buf,
            None => alloc::handle_alloc_error(layout),
        }
    }

    /// Allocates storage for `capacity` elements, returning the allocation failure to
    /// the caller instead of aborting.
    pub fn try_new(capacity: usize) -> Result<ArrayPtr<T>> {
        let layout = Self::layout_for(capacity)?;
        Self::allocate(capacity, layout).ok_or_else(|| {
            log::debug!(
                "allocation of {capacity} slots ({} bytes) failed",
                layout.size()
            );
            Error::allocation_failed(layout)
        })
    }

    /// Returns the number of element slots in the allocation.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if the handle has no slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.capacity == 0
    }

    /// Returns the start of the allocation.
    ///
    /// For an empty handle, or when `T` is zero-sized, this is a dangling but
    /// well-aligned pointer. The returned pointer grants no ownership.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Returns the start of the allocation as a mutable pointer.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Exchanges the allocations owned by `self` and `other`.
    #[inline]
    pub fn swap(&mut self, other: &mut ArrayPtr<T>) {
        mem::swap(self, other);
    }

    /// Moves the allocation out of `self`, leaving an empty handle behind.
    #[inline]
    pub fn take(&mut self) -> ArrayPtr<T> {
        mem::replace(self, ArrayPtr::empty())
    }
}

impl<T> ArrayPtr<T> {
    fn layout_for(capacity: usize) -> Result<Layout> {
        Layout::array::<T>(capacity).map_err(|_| Error::capacity_overflow())
    }

    /// Returns `None` only when the global allocator reports failure.
    fn allocate(capacity: usize, layout: Layout) -> Option<ArrayPtr<T>> {
        if layout.size() == 0 {
            // Zero capacity or zero-sized `T`: nothing to allocate, but the slot
            // count is still meaningful to the owner.
            return Some(ArrayPtr {
                ptr: NonNull::dangling(),
                capacity,
                _marker: PhantomData,
            });
        }

        // SAFETY: `layout` has a non-zero size.
        let raw = unsafe { alloc::alloc(layout) };
        let ptr = NonNull::new(raw as *mut T)?;
        Some(ArrayPtr {
            ptr,
            capacity,
            _marker: PhantomData,
        })
    }

    /// Layout of the live allocation, or `None` when nothing was allocated.
    fn allocated_layout(&self) -> Option<Layout> {
        if self.capacity == 0 || mem::size_of::<T>() == 0 {
            return None;
        }
        // The same layout was successfully computed at allocation time.
        Layout::array::<T>(self.capacity).ok()
    }
}

impl<T> Drop for ArrayPtr<T> {
    fn drop(&mut self) {
        if let Some(layout) = self.allocated_layout() {
            // SAFETY: `ptr` was returned by `alloc::alloc` with exactly this layout and
            // ownership was never duplicated, so this is the only release.
            unsafe { alloc::dealloc(self.ptr.as_ptr() as *mut u8, layout) };
        }
    }
}

impl<T> Default for ArrayPtr<T> {
    fn default() -> Self {
        ArrayPtr::empty()
    }
}

impl<T> std::fmt::Debug for ArrayPtr<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArrayPtr")
            .field("ptr", &self.ptr)
            .field("capacity", &self.capacity)
            .finish()
    }
}
