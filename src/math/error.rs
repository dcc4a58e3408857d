use thiserror::Error;

/// Contract violations raised by the fixed-size math types.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    #[error("index {index} out of bounds for size {size}")]
    OutOfBounds { index: usize, size: usize },

    #[error("too many elements: got {given}, capacity is {capacity}")]
    TooManyElements { given: usize, capacity: usize },

    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),

    #[error("matrix is not invertible, determinant is zero")]
    DegenerateInverse,
}

pub(crate) fn check_index(index: usize, size: usize) -> Result<(), MathError> {
    if index >= size {
        Err(MathError::OutOfBounds { index, size })
    } else {
        Ok(())
    }
}

// the panicking accessors treat a bad index as a programming error, same as slice indexing.
#[track_caller]
pub(crate) fn or_panic<T>(result: Result<T, MathError>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => panic!("{}", e),
    }
}
