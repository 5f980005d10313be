#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Scalar data type tag carried by a matrix descriptor
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DataType {
    /// real single precision
    Float,
    /// real double precision
    Double,
    /// complex single precision
    Scomplex,
    /// complex double precision
    Dcomplex,
}

impl DataType {
    /// All data types, in tag order
    pub const ALL: [DataType; 4] = [
        DataType::Float,
        DataType::Double,
        DataType::Scomplex,
        DataType::Dcomplex,
    ];

    pub fn is_complex(&self) -> bool {
        matches!(self, DataType::Scomplex | DataType::Dcomplex)
    }

    // one character BLAS-style prefix
    pub(crate) fn as_char(&self) -> char {
        match self {
            DataType::Float => 's',
            DataType::Double => 'd',
            DataType::Scomplex => 'c',
            DataType::Dcomplex => 'z',
        }
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DataType::Float => "float",
            DataType::Double => "double",
            DataType::Scomplex => "scomplex",
            DataType::Dcomplex => "dcomplex",
        };
        write!(f, "{}", name)
    }
}

/// Matrix shape marker for triangular matrices
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum MatrixTriangle {
    /// Upper triangular matrix
    Triu,
    /// Lower triangular matrix
    Tril,
}

impl MatrixTriangle {
    /// The opposite triangle
    pub fn toggle(&self) -> Self {
        match self {
            MatrixTriangle::Triu => MatrixTriangle::Tril,
            MatrixTriangle::Tril => MatrixTriangle::Triu,
        }
    }
}

/// Orientation in which an operand matrix is applied
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum Trans {
    NoTranspose,
    Transpose,
    ConjNoTranspose,
    ConjTranspose,
}

impl Trans {
    pub fn is_conj(&self) -> bool {
        matches!(self, Trans::ConjNoTranspose | Trans::ConjTranspose)
    }
    pub fn is_trans(&self) -> bool {
        matches!(self, Trans::Transpose | Trans::ConjTranspose)
    }
}

/// Conjugation applied to a vector operand
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum Conj {
    NoConjugate,
    Conjugate,
}

/// Whether the diagonal of a triangular operand is read or taken as one
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum Diag {
    NonUnit,
    Unit,
}

/// Structure tag carried by a matrix descriptor
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum MatrixStructure {
    General,
    Hermitian,
    Symmetric,
    Triangular,
}

#[test]
fn test_datatype_props() {
    assert!(!DataType::Float.is_complex());
    assert!(DataType::Dcomplex.is_complex());
    assert_eq!(DataType::Double.to_string(), "double");
}

#[test]
fn test_trans_flags() {
    assert!(Trans::ConjNoTranspose.is_conj());
    assert!(!Trans::ConjNoTranspose.is_trans());
    assert!(Trans::ConjTranspose.is_trans());
    assert_eq!(MatrixTriangle::Tril.toggle(), MatrixTriangle::Triu);
}
