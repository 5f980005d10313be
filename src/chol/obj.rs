#![allow(non_snake_case)]

use crate::algebra::*;

#[cfg(feature = "complex")]
use num_complex::Complex;

/// Type-erased element storage of a matrix descriptor.
///
/// The variant records the data type of the elements, and the factorization
/// is routed to the instantiation matching it.
#[derive(Debug)]
pub enum ObjBuffer<'a> {
    Float(&'a mut [f32]),
    Double(&'a mut [f64]),
    #[cfg(feature = "complex")]
    Scomplex(&'a mut [Complex<f32>]),
    #[cfg(feature = "complex")]
    Dcomplex(&'a mut [Complex<f64>]),
}

impl ObjBuffer<'_> {
    pub fn dt(&self) -> DataType {
        match self {
            ObjBuffer::Float(_) => DataType::Float,
            ObjBuffer::Double(_) => DataType::Double,
            #[cfg(feature = "complex")]
            ObjBuffer::Scomplex(_) => DataType::Scomplex,
            #[cfg(feature = "complex")]
            ObjBuffer::Dcomplex(_) => DataType::Dcomplex,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ObjBuffer::Float(v) => v.len(),
            ObjBuffer::Double(v) => v.len(),
            #[cfg(feature = "complex")]
            ObjBuffer::Scomplex(v) => v.len(),
            #[cfg(feature = "complex")]
            ObjBuffer::Dcomplex(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Scalar types that can be held by an [`ObjBuffer`].
pub trait ObjElement: ScalarT {
    /// Wrap a typed slice
    fn wrap(data: &mut [Self]) -> ObjBuffer<'_>;

    /// Recover the typed slice, or `None` if the buffer
    /// holds elements of some other type
    fn buffer_of<'b>(buffer: &'b mut ObjBuffer<'_>) -> Option<&'b mut [Self]>;
}

macro_rules! impl_obj_element {
    ($T:ty, $variant:ident) => {
        impl ObjElement for $T {
            fn wrap(data: &mut [Self]) -> ObjBuffer<'_> {
                ObjBuffer::$variant(data)
            }

            fn buffer_of<'b>(buffer: &'b mut ObjBuffer<'_>) -> Option<&'b mut [Self]> {
                match buffer {
                    ObjBuffer::$variant(data) => Some(&mut **data),
                    #[allow(unreachable_patterns)]
                    _ => None,
                }
            }
        }
    };
}

impl_obj_element!(f32, Float);
impl_obj_element!(f64, Double);
#[cfg(feature = "complex")]
impl_obj_element!(Complex<f32>, Scomplex);
#[cfg(feature = "complex")]
impl_obj_element!(Complex<f64>, Dcomplex);

/// Matrix descriptor.
///
/// Describes an `m×n` strided view into a typed buffer, together with the
/// triangle that holds the stored data and the mathematical structure of
/// the matrix.  The layout is checked once, on construction, and cannot be
/// changed afterwards except through [`induce_trans`](Obj::induce_trans),
/// which preserves validity.
///
/// New descriptors are marked [`MatrixStructure::Hermitian`] with the data
/// held in the lower triangle [`MatrixTriangle::Tril`].
#[derive(Debug)]
pub struct Obj<'a> {
    buffer: ObjBuffer<'a>,
    m: usize,
    n: usize,
    offset: usize,
    rs: isize,
    cs: isize,
    uplo: MatrixTriangle,
    structure: MatrixStructure,
}

impl<'a> Obj<'a> {
    /// Descriptor for the `m×n` view of `data` with element (i,j) at
    /// `offset + i*rs + j*cs`
    pub fn new<T: ObjElement>(
        data: &'a mut [T],
        m: usize,
        n: usize,
        offset: usize,
        rs: isize,
        cs: isize,
    ) -> Result<Self, StridedLayoutError> {
        check_layout(data.len(), m, n, offset, rs, cs)?;
        Ok(Self {
            buffer: T::wrap(data),
            m,
            n,
            offset,
            rs,
            cs,
            uplo: MatrixTriangle::Tril,
            structure: MatrixStructure::Hermitian,
        })
    }

    /// Descriptor for the whole of a column major matrix
    pub fn from_matrix<T: ObjElement>(A: &'a mut Matrix<T>) -> Result<Self, StridedLayoutError> {
        let (m, n) = A.size();
        Self::new(A.data_mut(), m, n, 0, 1, m.max(1) as isize)
    }

    pub fn with_uplo(mut self, uplo: MatrixTriangle) -> Self {
        self.uplo = uplo;
        self
    }

    pub fn with_structure(mut self, structure: MatrixStructure) -> Self {
        self.structure = structure;
        self
    }

    pub fn set_uplo(&mut self, uplo: MatrixTriangle) {
        self.uplo = uplo;
    }

    pub fn set_structure(&mut self, structure: MatrixStructure) {
        self.structure = structure;
    }

    pub fn dt(&self) -> DataType {
        self.buffer.dt()
    }
    pub fn length(&self) -> usize {
        self.m
    }
    pub fn width(&self) -> usize {
        self.n
    }
    pub fn uplo(&self) -> MatrixTriangle {
        self.uplo
    }
    pub fn structure(&self) -> MatrixStructure {
        self.structure
    }
    pub fn offset(&self) -> usize {
        self.offset
    }
    pub fn row_stride(&self) -> isize {
        self.rs
    }
    pub fn col_stride(&self) -> isize {
        self.cs
    }

    /// Location of element (0,0) and the strides
    pub fn loc(&self) -> MatLoc {
        MatLoc::new(self.offset, self.rs, self.cs)
    }

    pub fn buffer(&self) -> &ObjBuffer<'a> {
        &self.buffer
    }

    pub(crate) fn buffer_mut(&mut self) -> &mut ObjBuffer<'a> {
        &mut self.buffer
    }

    /// Reinterpret the descriptor as its transpose, without moving data.
    ///
    /// Dimensions and strides are exchanged and the stored triangle
    /// toggles, since the upper triangle of a matrix is the lower
    /// triangle of its transpose.
    pub fn induce_trans(&mut self) {
        std::mem::swap(&mut self.m, &mut self.n);
        std::mem::swap(&mut self.rs, &mut self.cs);
        self.uplo = self.uplo.toggle();
    }
}

impl ShapedMatrix for Obj<'_> {
    fn nrows(&self) -> usize {
        self.m
    }
    fn ncols(&self) -> usize {
        self.n
    }
}
