use super::*;
use crate::algebra::*;
use crate::kernels::{VectorKernels, VectorKernelsAll};
use crate::runtime::{error_checking_is_enabled, Rntm};
use log::debug;

#[cfg(feature = "complex")]
use num_complex::Complex;

/// Type-erased entry point of a typed factorization kernel.
///
/// Arguments are the stored triangle, the order `m`, the descriptor buffer,
/// the location of element (0,0) with its strides, the computation context
/// and the runtime configuration.  The location is checked against the
/// buffer before any element is touched.
pub type CholVft<C> = fn(
    MatrixTriangle,
    usize,
    &mut ObjBuffer<'_>,
    MatLoc,
    &C,
    &Rntm,
) -> Result<CholStatus, CholError>;

// recovers the typed slice and runs the kernel instantiated for `T`
fn chol_l_unb_var1_erased<T, C>(
    uplo: MatrixTriangle,
    m: usize,
    buffer: &mut ObjBuffer<'_>,
    a: MatLoc,
    cntx: &C,
    rntm: &Rntm,
) -> Result<CholStatus, CholError>
where
    T: ObjElement,
    C: VectorKernels<T>,
{
    let found = buffer.dt();
    let buf = T::buffer_of(buffer).ok_or(CholError::DataTypeMismatch {
        expected: T::DATATYPE,
        found,
    })?;
    let a = StridedMatMut::new(buf, m, m, a.offset, a.rs, a.cs)?;
    chol_l_unb_var1_t(uplo, a, cntx, rntm)
}

/// Looks up the kernel instantiated for the data type `dt`.
///
/// Returns `None` if no kernel was compiled for `dt`.
pub fn chol_l_unb_var1_qfp<C>(dt: DataType) -> Option<CholVft<C>>
where
    C: VectorKernelsAll,
{
    match dt {
        DataType::Float => Some(chol_l_unb_var1_erased::<f32, C> as CholVft<C>),
        DataType::Double => Some(chol_l_unb_var1_erased::<f64, C> as CholVft<C>),
        #[cfg(feature = "complex")]
        DataType::Scomplex => Some(chol_l_unb_var1_erased::<Complex<f32>, C> as CholVft<C>),
        #[cfg(feature = "complex")]
        DataType::Dcomplex => Some(chol_l_unb_var1_erased::<Complex<f64>, C> as CholVft<C>),
        #[allow(unreachable_patterns)]
        _ => None,
    }
}

/// Factors the matrix described by `a` in place, `A = L Lᴴ`.
///
/// The descriptor must be square with its data held in the lower
/// triangle.  When error checking is enabled (see
/// [`set_error_checking`](crate::runtime::set_error_checking)) the
/// descriptor is also validated with [`chol_check`].  The factorization
/// is then carried out by the kernel instantiated for the data type of
/// `a`.
///
/// A configuration problem is returned as an `Err`.  A matrix that turns
/// out not to be positive definite is reported as
/// `Ok(CholStatus::FailedAtRow(k))`.
pub fn chol_l_unb_var1<C>(
    a: &mut Obj<'_>,
    cntx: &C,
    rntm: &Rntm,
) -> Result<CholStatus, CholError>
where
    C: VectorKernelsAll,
{
    if error_checking_is_enabled() {
        chol_check(a)?;
    }

    // these are needed for the kernel to stay
    // within the view, so are always enforced
    if !a.is_square() {
        return Err(CholError::NotSquare(a.length(), a.width()));
    }
    if a.uplo() != MatrixTriangle::Tril {
        return Err(CholError::UnsupportedFill);
    }

    let dt = a.dt();
    let uplo = a.uplo();
    let m = a.length();
    let loc = a.loc();

    let kernel = chol_l_unb_var1_qfp::<C>(dt).ok_or(CholError::UnsupportedDataType(dt))?;

    debug!(
        "{}chol_l_unb_var1: m = {}, rs = {}, cs = {}",
        dt.as_char(),
        m,
        loc.rs,
        loc.cs
    );

    let status = kernel(uplo, m, a.buffer_mut(), loc, cntx, rntm)?;

    if let CholStatus::FailedAtRow(k) = status {
        debug!(
            "{}chol_l_unb_var1: matrix not positive definite at row {}",
            dt.as_char(),
            k
        );
    }

    Ok(status)
}
