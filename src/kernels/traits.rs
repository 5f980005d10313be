#![allow(clippy::too_many_arguments)]

use crate::algebra::*;
use crate::runtime::Rntm;

// Vector primitives required by the factorization.  Operands are
// given as locations within a single backing slice, since the
// triangular operand and the right hand side of a solve are both
// parts of the matrix being factored.

/// Triangular solve with a single right hand side.
pub trait Trsv<T: ScalarT> {
    /// Solves `op(A) x = alpha x` in place, where `A` is the `n×n`
    /// triangle `uplo` of the matrix at `a` and `op` is given by `trans`.
    /// Only the referenced triangle of `A` is read.  When `diag` is
    /// [`Diag::Unit`] the diagonal of `A` is not read and taken as one.
    fn trsv(
        &self,
        uplo: MatrixTriangle,
        trans: Trans,
        diag: Diag,
        n: usize,
        alpha: T,
        buf: &mut [T],
        a: MatLoc,
        x: VecLoc,
        rntm: &Rntm,
    );
}

/// Scaled dot product with optional conjugation of either operand.
pub trait Dotxv<T: ScalarT> {
    /// Computes `rho = beta rho + alpha conjx(x)ᵀ conjy(y)` for vectors
    /// of length `n`.  When `beta` is zero `rho` is overwritten without
    /// being read.
    fn dotxv(
        &self,
        conjx: Conj,
        conjy: Conj,
        n: usize,
        alpha: T,
        buf: &[T],
        x: VecLoc,
        y: VecLoc,
        beta: T,
        rho: &mut T,
        rntm: &Rntm,
    );
}

/// The collection of vector primitives used by the factorization
/// for a single scalar type.
pub trait VectorKernels<T: ScalarT>: Trsv<T> + Dotxv<T> {}
impl<T: ScalarT, C> VectorKernels<T> for C where C: Trsv<T> + Dotxv<T> {}

cfg_if::cfg_if! {
    if #[cfg(feature = "complex")] {
        use num_complex::Complex;

        /// A computation context providing vector primitives for every
        /// compiled scalar type.
        pub trait VectorKernelsAll:
            VectorKernels<f32>
            + VectorKernels<f64>
            + VectorKernels<Complex<f32>>
            + VectorKernels<Complex<f64>>
        {
        }
        impl<C> VectorKernelsAll for C where
            C: VectorKernels<f32>
                + VectorKernels<f64>
                + VectorKernels<Complex<f32>>
                + VectorKernels<Complex<f64>>
        {
        }
    } else {
        /// A computation context providing vector primitives for every
        /// compiled scalar type.
        pub trait VectorKernelsAll: VectorKernels<f32> + VectorKernels<f64> {}
        impl<C> VectorKernelsAll for C where C: VectorKernels<f32> + VectorKernels<f64> {}
    }
}
