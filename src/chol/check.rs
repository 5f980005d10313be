use super::Obj;
use crate::algebra::*;

/// Validates a descriptor before factorization.
///
/// The matrix must be square and marked Hermitian, or symmetric when its
/// elements are real.  A complex symmetric matrix has no `L Lᴴ`
/// factorization and is rejected.  The view layout is checked again
/// against the buffer it refers to.
pub fn chol_check(a: &Obj<'_>) -> Result<(), CholError> {
    if !a.is_square() {
        return Err(CholError::NotSquare(a.length(), a.width()));
    }

    match (a.structure(), a.dt().is_complex()) {
        (MatrixStructure::Hermitian, _) => {}
        (MatrixStructure::Symmetric, false) => {}
        _ => return Err(CholError::BadStructure),
    }

    check_layout(
        a.buffer().len(),
        a.length(),
        a.width(),
        a.offset(),
        a.row_stride(),
        a.col_stride(),
    )?;

    Ok(())
}
