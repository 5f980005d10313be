use super::*;
use crate::algebra::*;
use crate::kernels::VectorKernelsAll;
use crate::runtime::Rntm;

/// Factors the matrix described by `a` in place, accepting data held in
/// either triangle.
///
/// Lower storage is factored as `A = L Lᴴ` by [`chol_l_unb_var1`].  For
/// upper storage the descriptor is transposed, which exposes the stored
/// triangle as the lower triangle of `conj(A)`, and the upper triangle is
/// overwritten with `U` such that `A = Uᴴ U`.  The descriptor is restored
/// before returning in either case.
pub fn chol<C>(a: &mut Obj<'_>, cntx: &C, rntm: &Rntm) -> Result<CholStatus, CholError>
where
    C: VectorKernelsAll,
{
    match a.uplo() {
        MatrixTriangle::Tril => chol_l_unb_var1(a, cntx, rntm),
        MatrixTriangle::Triu => {
            if !a.is_square() {
                return Err(CholError::NotSquare(a.length(), a.width()));
            }
            a.induce_trans();
            let result = chol_l_unb_var1(a, cntx, rntm);
            a.induce_trans();
            result
        }
    }
}
