pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// Checks that `index` addresses a live element of a container holding `len`
/// elements, returning [`ErrorKind::IndexOutOfRange`](crate::ErrorKind) otherwise.
#[macro_export]
macro_rules! verify_index {
    ($index:expr, $len:expr) => {{
        $crate::result::verify_index($index, $len)?;
    }};
}

#[inline]
pub fn verify_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        index_out_of_range()
    }
}

#[cold]
pub fn index_out_of_range() -> Result<()> {
    Err(crate::error::Error::index_out_of_range())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checked(index: usize, len: usize) -> Result<usize> {
        verify_index!(index, len);
        Ok(index)
    }

    #[test]
    fn test_verify_index() {
        assert_eq!(checked(0, 1).unwrap(), 0);
        assert!(checked(1, 1).unwrap_err().is_out_of_range());
        assert!(checked(0, 0).is_err());
        assert!(verify_index(usize::MAX, usize::MAX).is_err());
    }
}
