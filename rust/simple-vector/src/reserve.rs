//! Capacity request tag.

/// Selects the "reserve capacity, create no elements" constructor of
/// [`SimpleVector`](crate::SimpleVector).
///
/// A bare `usize` passed to a constructor means "create that many default elements";
/// wrapping it in `ReserveProxy` means "pre-allocate that many slots and stay empty".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReserveProxy {
    capacity: usize,
}

impl ReserveProxy {
    pub const fn new(capacity: usize) -> ReserveProxy {
        ReserveProxy { capacity }
    }

    /// Number of slots to pre-allocate.
    #[inline]
    pub const fn capacity(self) -> usize {
        self.capacity
    }
}

/// Shorthand for [`ReserveProxy::new`].
pub const fn reserve(capacity_to_reserve: usize) -> ReserveProxy {
    ReserveProxy::new(capacity_to_reserve)
}

impl From<usize> for ReserveProxy {
    fn from(capacity: usize) -> Self {
        ReserveProxy::new(capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserve_carries_capacity() {
        assert_eq!(reserve(7).capacity(), 7);
        assert_eq!(ReserveProxy::from(3), reserve(3));
        assert_eq!(reserve(0).capacity(), 0);
    }
}
