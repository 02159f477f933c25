//! The resizable array container.

use std::borrow::{Borrow, BorrowMut};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem::{self, ManuallyDrop};
use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::ptr;
use std::slice::{self, SliceIndex};

use simple_vector_alloc::ArrayPtr;
use simple_vector_common::{Result, verify_index};

use crate::GROWTH_FACTOR;
use crate::into_iter::IntoIter;
use crate::reserve::ReserveProxy;

/// A contiguous, growable array that exclusively owns its storage.
///
/// Elements at positions `0..len()` are live. Slots `len()..capacity()` are allocated
/// but hold no value and are never exposed. Growth replaces the whole buffer: a new
/// [`ArrayPtr`] is allocated, live elements are relocated into it, and the old one is
/// released.
///
/// When `capacity()` is exhausted, the new capacity is
/// `max(required, capacity() * GROWTH_FACTOR)`, so a run of `push_back` calls costs
/// amortized O(1) each and an empty vector jumps straight to the required size.
pub struct SimpleVector<T> {
    items: ArrayPtr<T>,
    len: usize,
}

impl<T> SimpleVector<T> {
    /// Creates an empty vector. Does not allocate.
    pub const fn new() -> SimpleVector<T> {
        SimpleVector {
            items: ArrayPtr::empty(),
            len: 0,
        }
    }

    /// Creates an empty vector with exactly `request.capacity()` pre-allocated slots.
    pub fn with_reserve(request: ReserveProxy) -> SimpleVector<T> {
        SimpleVector {
            items: ArrayPtr::new(request.capacity()),
            len: 0,
        }
    }

    /// Like [`with_reserve`](Self::with_reserve), but returns allocation failure to the
    /// caller.
    pub fn try_with_reserve(request: ReserveProxy) -> Result<SimpleVector<T>> {
        Ok(SimpleVector {
            items: ArrayPtr::try_new(request.capacity())?,
            len: 0,
        })
    }

    /// Creates a vector of `count` default-valued elements; `len() == capacity() == count`.
    pub fn with_len(count: usize) -> SimpleVector<T>
    where
        T: Default,
    {
        let mut v = SimpleVector::with_reserve(ReserveProxy::new(count));
        v.resize_with(count, T::default);
        v
    }

    /// Creates a vector of `count` clones of `value`; `len() == capacity() == count`.
    pub fn from_elem(count: usize, value: T) -> SimpleVector<T>
    where
        T: Clone,
    {
        let mut v = SimpleVector::with_reserve(ReserveProxy::new(count));
        if count > 0 {
            for _ in 1..count {
                v.push_back(value.clone());
            }
            v.push_back(value);
        }
        v
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.items.as_ptr()
    }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.items.as_mut_ptr()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots `0..len` are initialized and owned by `items`.
        unsafe { slice::from_raw_parts(self.as_ptr(), self.len) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as above, and `&mut self` guarantees exclusive access.
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), self.len) }
    }

    /// Returns an iterator over the live elements in index order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns an iterator over mutable references to the live elements.
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Bounds-checked access.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::IndexOutOfRange`](crate::ErrorKind::IndexOutOfRange) if
    /// `index >= len()`. The vector is left untouched.
    pub fn at(&self, index: usize) -> Result<&T> {
        verify_index!(index, self.len);
        // SAFETY: bound checked above.
        Ok(unsafe { self.get_unchecked(index) })
    }

    /// Bounds-checked mutable access.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        verify_index!(index, self.len);
        // SAFETY: bound checked above.
        Ok(unsafe { self.get_unchecked_mut(index) })
    }

    /// Returns a reference to the element at `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than `len()`.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len);
        unsafe { &*self.as_ptr().add(index) }
    }

    /// Mutable counterpart of [`get_unchecked`](Self::get_unchecked).
    ///
    /// # Safety
    ///
    /// `index` must be less than `len()`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len);
        unsafe { &mut *self.as_mut_ptr().add(index) }
    }

    /// Drops all elements. Capacity is unchanged and nothing is deallocated.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Drops the elements past `new_len`. No-op if `new_len >= len()`.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }
        let tail_len = self.len - new_len;
        // Shorten first: a panicking destructor must not lead to a second drop.
        self.len = new_len;
        // SAFETY: slots `new_len..new_len + tail_len` were live and are now outside
        // the logical range.
        unsafe {
            let tail = ptr::slice_from_raw_parts_mut(self.as_mut_ptr().add(new_len), tail_len);
            ptr::drop_in_place(tail);
        }
    }

    /// Resizes to `new_len`, filling new slots with values produced by `f`.
    ///
    /// Shrinking truncates and keeps the capacity. Growing within the capacity fills
    /// in place. Growing past the capacity first reallocates to
    /// `max(new_len, capacity() * GROWTH_FACTOR)`.
    pub fn resize_with<F>(&mut self, new_len: usize, mut f: F)
    where
        F: FnMut() -> T,
    {
        if new_len <= self.len {
            self.truncate(new_len);
            return;
        }
        if new_len > self.capacity() {
            self.grow_to_fit(new_len);
        }
        let base = self.as_mut_ptr();
        while self.len < new_len {
            // SAFETY: `len < new_len <= capacity`, the slot is unused.
            unsafe { base.add(self.len).write(f()) };
            self.len += 1;
        }
    }

    /// Resizes to `new_len`, filling new slots with `T::default()`.
    pub fn resize(&mut self, new_len: usize)
    where
        T: Default,
    {
        self.resize_with(new_len, T::default);
    }

    /// Ensures `capacity() >= new_capacity`, allocating exactly `new_capacity` slots
    /// if it must grow. Never shrinks.
    pub fn reserve(&mut self, new_capacity: usize) {
        if new_capacity > self.capacity() {
            log::trace!(
                "reserve: capacity {} -> {}",
                self.capacity(),
                new_capacity
            );
            self.relocate(ArrayPtr::new(new_capacity));
        }
    }

    /// Like [`reserve`](Self::reserve), but returns allocation failure to the caller.
    /// On failure the vector is unchanged.
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<()> {
        if new_capacity > self.capacity() {
            let items = ArrayPtr::try_new(new_capacity)?;
            self.relocate(items);
        }
        Ok(())
    }

    /// Appends `value`, growing as `resize(len() + 1)` would.
    pub fn push_back(&mut self, value: T) {
        if self.len == self.capacity() {
            self.grow_to_fit(required_len(self.len, 1));
        }
        // SAFETY: `len < capacity` after the growth above.
        unsafe { self.as_mut_ptr().add(self.len).write(value) };
        self.len += 1;
    }

    /// Removes the last element and returns it, or `None` if the vector is empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: the slot was live and is now outside the logical range.
        Some(unsafe { self.as_ptr().add(self.len).read() })
    }

    /// Inserts `value` at `index`, shifting every element at or after it one slot
    /// toward the end. Returns the position of the inserted element (`index`).
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn insert(&mut self, index: usize, value: T) -> usize {
        let len = self.len;
        assert!(
            index <= len,
            "insertion index (is {index}) should be <= len (is {len})"
        );
        if len == self.capacity() {
            self.grow_to_fit(required_len(len, 1));
        }
        // SAFETY: `len < capacity`, so `index..=len` are valid slots.
        unsafe {
            let p = self.as_mut_ptr().add(index);
            if index < len {
                ptr::copy(p, p.add(1), len - index);
            }
            p.write(value);
        }
        self.len = len + 1;
        index
    }

    /// Removes and drops the element at `index`, shifting the elements after it one
    /// slot toward the start. Returns the position now occupied by the former
    /// successor (`index`, which equals `len()` if the last element was erased).
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn erase(&mut self, index: usize) -> usize {
        drop(self.remove(index));
        index
    }

    /// Removes the element at `index` and returns it, shifting the elements after it
    /// one slot toward the start.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn remove(&mut self, index: usize) -> T {
        let len = self.len;
        assert!(
            index < len,
            "removal index (is {index}) should be < len (is {len})"
        );
        // SAFETY: `index < len`; the value is read out before its slot is overwritten.
        unsafe {
            let p = self.as_mut_ptr().add(index);
            let value = p.read();
            ptr::copy(p.add(1), p, len - index - 1);
            self.len = len - 1;
            value
        }
    }

    /// Exchanges contents, length and capacity with `other` in constant time.
    ///
    /// This shadows `<[T]>::swap`; use `as_mut_slice().swap(a, b)` to swap two
    /// elements.
    #[inline]
    pub fn swap(&mut self, other: &mut SimpleVector<T>) {
        self.items.swap(&mut other.items);
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Moves the contents out, leaving `self` empty with zero capacity.
    #[inline]
    pub fn take(&mut self) -> SimpleVector<T> {
        mem::take(self)
    }

    /// Move-assignment: drops the current contents of `self` and adopts the buffer of
    /// `source`, which is left empty with zero capacity.
    pub fn move_from(&mut self, source: &mut SimpleVector<T>) {
        *self = source.take();
    }

    /// Grows the buffer to hold at least `required` elements per the doubling rule.
    #[cold]
    fn grow_to_fit(&mut self, required: usize) {
        let new_capacity = required.max(self.capacity().saturating_mul(GROWTH_FACTOR));
        log::trace!(
            "grow: len {}, capacity {} -> {}",
            self.len,
            self.capacity(),
            new_capacity
        );
        self.relocate(ArrayPtr::new(new_capacity));
    }

    /// Moves the live elements into `items` and adopts it, releasing the old buffer.
    fn relocate(&mut self, mut items: ArrayPtr<T>) {
        debug_assert!(items.capacity() >= self.len);
        // SAFETY: distinct allocations; `items` has room for `len` elements. The old
        // slots are treated as moved-from and are released without dropping.
        unsafe {
            ptr::copy_nonoverlapping(self.as_ptr(), items.as_mut_ptr(), self.len);
        }
        self.items.swap(&mut items);
    }

    /// Splits the vector into its buffer and length without dropping any element.
    pub(crate) fn into_raw_parts(self) -> (ArrayPtr<T>, usize) {
        let mut this = ManuallyDrop::new(self);
        let len = this.len;
        (this.items.take(), len)
    }
}

#[inline]
fn required_len(len: usize, additional: usize) -> usize {
    match len.checked_add(additional) {
        Some(n) => n,
        None => capacity_overflow(),
    }
}

#[cold]
fn capacity_overflow() -> ! {
    panic!("capacity overflow")
}

impl<T> Drop for SimpleVector<T> {
    fn drop(&mut self) {
        // SAFETY: drops exactly the live elements; `items` frees the memory afterwards.
        unsafe { ptr::drop_in_place(self.as_mut_slice()) }
    }
}

impl<T> Default for SimpleVector<T> {
    fn default() -> Self {
        SimpleVector::new()
    }
}

impl<T: Clone> Clone for SimpleVector<T> {
    fn clone(&self) -> Self {
        let mut copy = SimpleVector::with_reserve(ReserveProxy::new(self.len));
        for item in self.iter() {
            copy.push_back(item.clone());
        }
        copy
    }

    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

impl<T> Deref for SimpleVector<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for SimpleVector<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, I: SliceIndex<[T]>> Index<I> for SimpleVector<T> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        Index::index(self.as_slice(), index)
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for SimpleVector<T> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}

impl<T> AsRef<[T]> for SimpleVector<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for SimpleVector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Borrow<[T]> for SimpleVector<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> BorrowMut<[T]> for SimpleVector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for SimpleVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for SimpleVector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for SimpleVector<T> {}

impl<T: PartialEq> PartialEq<[T]> for SimpleVector<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for SimpleVector<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for SimpleVector<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialOrd> PartialOrd for SimpleVector<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for SimpleVector<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for SimpleVector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T> From<ReserveProxy> for SimpleVector<T> {
    fn from(request: ReserveProxy) -> Self {
        SimpleVector::with_reserve(request)
    }
}

impl<T, const N: usize> From<[T; N]> for SimpleVector<T> {
    fn from(items: [T; N]) -> Self {
        let mut v = SimpleVector::with_reserve(ReserveProxy::new(N));
        v.extend(items);
        v
    }
}

impl<T> From<Vec<T>> for SimpleVector<T> {
    fn from(items: Vec<T>) -> Self {
        let mut v = SimpleVector::with_reserve(ReserveProxy::new(items.len()));
        v.extend(items);
        v
    }
}

impl<T> From<SimpleVector<T>> for Vec<T> {
    fn from(v: SimpleVector<T>) -> Self {
        v.into_iter().collect()
    }
}

impl<T> FromIterator<T> for SimpleVector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut v = SimpleVector::new();
        v.extend(iter);
        v
    }
}

impl<T> Extend<T> for SimpleVector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let required = required_len(self.len, lower);
        if required > self.capacity() {
            self.grow_to_fit(required);
        }
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for SimpleVector<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<'a, T> IntoIterator for &'a SimpleVector<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SimpleVector<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for SimpleVector<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let (items, len) = self.into_raw_parts();
        IntoIter::new(items, len)
    }
}
