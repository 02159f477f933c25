use std::alloc::Layout;

use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn index_out_of_range() -> Error {
        Error(ErrorKind::IndexOutOfRange.into())
    }

    pub fn capacity_overflow() -> Error {
        Error(ErrorKind::CapacityOverflow.into())
    }

    pub fn allocation_failed(layout: Layout) -> Error {
        Error(
            ErrorKind::AllocationFailed {
                size: layout.size(),
                align: layout.align(),
            }
            .into(),
        )
    }

    /// Returns `true` if this is the error raised by bounds-checked access.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self.kind(), ErrorKind::IndexOutOfRange)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    #[error("index is out of range")]
    IndexOutOfRange,

    #[error("capacity overflow")]
    CapacityOverflow,

    #[error("memory allocation of {size} bytes (align {align}) failed")]
    AllocationFailed { size: usize, align: usize },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let e = Error::index_out_of_range();
        assert!(e.is_out_of_range());
        assert_eq!(e.to_string(), "index is out of range");
    }

    #[test]
    fn test_allocation_failed_carries_layout() {
        let layout = Layout::array::<u64>(4).unwrap();
        let e = Error::allocation_failed(layout);
        assert_eq!(
            e.into_kind(),
            ErrorKind::AllocationFailed { size: 32, align: 8 }
        );
    }

    #[test]
    fn test_kind_round_trips_through_from() {
        let e: Error = ErrorKind::CapacityOverflow.into();
        assert_eq!(e.kind(), &ErrorKind::CapacityOverflow);
        assert!(!e.is_out_of_range());
    }
}
