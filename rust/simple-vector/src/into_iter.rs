//! By-value iteration over a [`SimpleVector`](crate::SimpleVector).

use std::fmt;
use std::iter::FusedIterator;
use std::ptr;
use std::slice;

use simple_vector_alloc::ArrayPtr;

/// Owning iterator returned by `SimpleVector::into_iter`.
///
/// Takes over the vector's buffer. Elements not yielded by the time the iterator is
/// dropped are dropped with it, and the buffer is released once.
pub struct IntoIter<T> {
    items: ArrayPtr<T>,
    /// Live elements occupy `start..end`.
    start: usize,
    end: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(items: ArrayPtr<T>, len: usize) -> IntoIter<T> {
        debug_assert!(len <= items.capacity());
        IntoIter {
            items,
            start: 0,
            end: len,
        }
    }

    /// Returns the elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `start..end` are initialized slots owned by `items`.
        unsafe { slice::from_raw_parts(self.items.as_ptr().add(self.start), self.len()) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        let index = self.start;
        self.start += 1;
        // SAFETY: the slot was live and has been moved out of the live range.
        Some(unsafe { self.items.as_ptr().add(index).read() })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.start;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        self.end -= 1;
        // SAFETY: as in `next`.
        Some(unsafe { self.items.as_ptr().add(self.end).read() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let remaining = self.end - self.start;
        // Empty the range first so a panicking destructor cannot cause a double drop.
        let start = self.start;
        self.start = self.end;
        // SAFETY: `start..start + remaining` were live and are no longer reachable.
        unsafe {
            let tail =
                ptr::slice_from_raw_parts_mut(self.items.as_mut_ptr().add(start), remaining);
            ptr::drop_in_place(tail);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::simple_vector;

    #[test]
    fn test_into_iter_both_ends() {
        let v = simple_vector![1, 2, 3, 4];
        let mut it = v.into_iter();
        assert_eq!(it.len(), 4);
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next_back(), Some(4));
        assert_eq!(it.as_slice(), &[2, 3]);
        assert_eq!(it.next(), Some(2));
        assert_eq!(it.next(), Some(3));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn test_into_iter_drops_remaining() {
        use std::rc::Rc;

        let shared = Rc::new(());
        let v = simple_vector![shared.clone(), shared.clone(), shared.clone()];
        assert_eq!(Rc::strong_count(&shared), 4);
        let mut it = v.into_iter();
        let first = it.next();
        drop(it);
        assert_eq!(Rc::strong_count(&shared), 2);
        drop(first);
        assert_eq!(Rc::strong_count(&shared), 1);
    }

    #[test]
    fn test_into_iter_debug() {
        let it = simple_vector!["a", "b"].into_iter();
        assert_eq!(format!("{it:?}"), r#"IntoIter(["a", "b"])"#);
    }
}
