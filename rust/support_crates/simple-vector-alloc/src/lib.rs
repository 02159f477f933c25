pub mod array_ptr;

pub use array_ptr::ArrayPtr;
