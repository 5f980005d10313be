use super::DataType;
use thiserror::Error;

/// Error type returned when constructing a strided matrix view.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StridedLayoutError {
    /// A row or column stride is zero
    #[error("Row and column strides must be nonzero")]
    ZeroStride,
    /// Some element of the view lies outside of the backing slice
    #[error("View element lies outside of the backing data")]
    OutOfBounds,
    /// Two distinct elements of the view refer to the same storage
    #[error("Row and column strides produce overlapping elements")]
    Overlap,
}

/// Error type returned by the factorization entry points.
///
/// These are configuration errors, i.e. the descriptor handed to the
/// factorization does not describe a problem that can be factored.   A
/// matrix that is not positive definite is *not* an error of this kind and
/// is reported through [`CholStatus`](crate::chol::CholStatus) instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CholError {
    /// No factorization kernel was compiled for this data type
    #[error("No factorization kernel is available for data type {0}")]
    UnsupportedDataType(DataType),
    /// Descriptor buffer does not hold elements of the requested type
    #[error("Expected a buffer of type {expected}, found {found}")]
    DataTypeMismatch { expected: DataType, found: DataType },
    /// Descriptor fill triangle is not supported by this variant
    #[error("Only lower triangular storage is supported by this variant")]
    UnsupportedFill,
    /// Matrix is not square
    #[error("Matrix must be square, found {0}x{1}")]
    NotSquare(usize, usize),
    /// Descriptor is not marked Hermitian or symmetric
    #[error("Matrix must be Hermitian or symmetric")]
    BadStructure,
    /// Matrix dimensions are incompatible with the operation
    #[error("Matrix dimension fields and/or array lengths are incompatible")]
    IncompatibleDimension,
    /// No successful factorization is available to solve with
    #[error("Solve requested without a successful factorization")]
    NotFactored,
    /// Strides / offset do not describe a valid view of the buffer
    #[error("Bad matrix layout: {0}")]
    Layout(#[from] StridedLayoutError),
}

/// Error type produced when a factorization stops at a non-positive pivot.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Matrix is not positive definite (failure at row {row})")]
pub struct NotPositiveDefinite {
    /// 1-indexed row of the first non-positive pivot
    pub row: usize,
}
