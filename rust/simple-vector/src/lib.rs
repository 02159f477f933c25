//! A minimal resizable array container.
//!
//! [`SimpleVector<T>`] stores its elements in one contiguous, exclusively owned
//! allocation ([`ArrayPtr<T>`](simple_vector_alloc::ArrayPtr)) and grows by doubling.
//! Positions are plain indices; references obtained through iteration or indexing are
//! tied to a borrow of the vector, so any operation that may reallocate or shift
//! elements (`push_back`, `insert`, `erase`, `resize`, `reserve`, `swap`) cannot run
//! while they are alive.
//!
//! ```
//! use simple_vector::{SimpleVector, reserve, simple_vector};
//!
//! let mut v = simple_vector![1, 2, 3];
//! let pos = v.insert(1, 9);
//! assert_eq!(v[pos], 9);
//! assert_eq!(v, [1, 9, 2, 3]);
//!
//! let pos = v.erase(1);
//! assert_eq!(v[pos], 2);
//!
//! let empty = SimpleVector::<u32>::with_reserve(reserve(10));
//! assert_eq!(empty.capacity(), 10);
//! assert!(empty.is_empty());
//! ```

pub mod into_iter;
pub mod reserve;
pub mod vector;

pub use into_iter::IntoIter;
pub use reserve::{ReserveProxy, reserve};
pub use simple_vector_common::{Error, ErrorKind, Result};
pub use vector::SimpleVector;

/// Multiplier applied to the current capacity when a vector runs out of slots.
pub const GROWTH_FACTOR: usize = 2;

/// Creates a [`SimpleVector`] from a list of elements, or from a value and a count.
///
/// `simple_vector![a, b, c]` moves the elements in order and sets both length and
/// capacity to the number of elements. `simple_vector![value; n]` clones `value`
/// into `n` slots.
#[macro_export]
macro_rules! simple_vector {
    () => {
        $crate::SimpleVector::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::SimpleVector::from_elem($n, $elem)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::SimpleVector::from([$($x),+])
    };
}
