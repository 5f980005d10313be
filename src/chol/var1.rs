#![allow(non_snake_case)]

use super::CholStatus;
use crate::algebra::*;
use crate::kernels::VectorKernels;
use crate::runtime::Rntm;
use num_traits::{Float, Zero};

/// Unblocked left-looking Cholesky factorization, variant 1.
///
/// Factors the `m×m` matrix held in the lower triangle of the view `a`,
/// overwriting it with `L` such that `A = L Lᴴ`.  Elements above
/// the diagonal are neither read nor written.  At step `i` the matrix is
/// partitioned as
///
/// ```text
/// [ A00     .      . ]
/// [ a10  alpha11   . ]
/// [ A20    a21   A22 ]
/// ```
///
/// where `A00` is the `i×i` block that already holds `L`.  The step then
/// computes
///
/// ```text
/// a10     = a10 / tril(A00)^H
/// alpha11 = alpha11 - a10 * a10^H
/// alpha11 = sqrt(real(alpha11))
/// ```
///
/// The imaginary part of each pivot is discarded before its sign test, so
/// the diagonal of `L` is real.  If a pivot is not strictly positive its
/// value before the square root is written back to the diagonal and the
/// factorization stops, returning the 1-indexed row of that pivot.
///
/// The triangle `uplo`, context `cntx` and runtime `rntm` are forwarded
/// unchanged to the vector primitives.  A view that is not square is
/// rejected with [`CholError::NotSquare`].
pub fn chol_l_unb_var1_t<T, C>(
    uplo: MatrixTriangle,
    mut a: StridedMatMut<'_, T>,
    cntx: &C,
    rntm: &Rntm,
) -> Result<CholStatus, CholError>
where
    T: ScalarT,
    C: VectorKernels<T> + ?Sized,
{
    if !a.is_square() {
        return Err(CholError::NotSquare(a.nrows(), a.ncols()));
    }
    let m = a.nrows();
    let (buf, a) = a.parts_mut();

    let one = T::one();
    let minus_one = T::minus_one();

    for i in 0..m {
        let mn_behind = i;

        let A00 = a;
        let a10 = a.row(i, 0);
        let alpha11 = a.at(i, i);

        // a10ᵀ = conj(tril(A00)) \ a10ᵀ
        cntx.trsv(
            uplo,
            Trans::ConjNoTranspose,
            Diag::NonUnit,
            mn_behind,
            one,
            buf,
            A00,
            a10,
            rntm,
        );

        // alpha11 = alpha11 - a10 a10ᴴ
        let mut rho = buf[alpha11];
        cntx.dotxv(
            Conj::NoConjugate,
            Conj::Conjugate,
            mn_behind,
            minus_one,
            buf,
            a10,
            a10,
            one,
            &mut rho,
            rntm,
        );
        rho.set_imag_zero();

        let pivot = rho.real();
        if pivot <= T::Real::zero() {
            buf[alpha11] = rho;
            return Ok(CholStatus::failed_at(mn_behind));
        }

        *rho.real_mut() = pivot.sqrt();
        buf[alpha11] = rho;
    }

    Ok(CholStatus::Success)
}
