#![allow(non_snake_case)]

use super::*;
use crate::algebra::*;
use crate::kernels::{VectorKernels, VectorKernelsAll};
use crate::runtime::Rntm;
use log::trace;
use num_traits::{Float, Zero};

/// Owned dense Cholesky factorization with solves.
///
/// The factor is computed by [`chol_l_unb_var1`] on an internal copy of the
/// lower triangle of the input, which is left untouched.
pub struct CholeskyEngine<T> {
    // n×(n+1), column major.  The first n columns hold the
    // lower triangular factor and the last one is solve workspace
    work: Matrix<T>,
    factored: bool,
}

impl<T> CholeskyEngine<T>
where
    T: ObjElement,
{
    pub fn new(n: usize) -> Self {
        let work = Matrix::<T>::zeros((n, n + 1));
        Self {
            work,
            factored: false,
        }
    }

    pub fn resize(&mut self, n: usize) {
        self.work.resize((n, n + 1));
        self.factored = false;
    }

    /// Order of the matrices this engine factors
    pub fn order(&self) -> usize {
        self.work.nrows()
    }

    /// True if the last call to `factor` succeeded
    pub fn is_factored(&self) -> bool {
        self.factored
    }

    /// Lower triangular factor, with zeros above the diagonal
    pub fn L(&self) -> Matrix<T> {
        let n = self.order();
        let mut L = Matrix::<T>::zeros((n, n));
        for j in 0..n {
            for i in j..n {
                L[(i, j)] = self.work[(i, j)];
            }
        }
        L
    }

    // location of the factor within the workspace
    fn factor_loc(&self) -> MatLoc {
        MatLoc::new(0, 1, self.order().max(1) as isize)
    }

    /// Factors `A = L Lᴴ`, reading only the lower triangle of `A`.
    pub fn factor<C>(&mut self, A: &Matrix<T>, cntx: &C, rntm: &Rntm) -> Result<CholStatus, CholError>
    where
        C: VectorKernelsAll,
    {
        let n = self.order();
        if A.size() != (n, n) {
            return Err(CholError::IncompatibleDimension);
        }
        self.factored = false;

        for j in 0..n {
            for i in 0..n {
                self.work[(i, j)] = if i >= j { A[(i, j)] } else { T::zero() };
            }
        }

        let loc = self.factor_loc();
        let mut obj = Obj::new(self.work.data_mut(), n, n, loc.offset, loc.rs, loc.cs)?;
        let status = chol_l_unb_var1(&mut obj, cntx, rntm)?;

        trace!("CholeskyEngine: factor of order {} finished with {}", n, status);

        self.factored = status.is_success();
        Ok(status)
    }

    /// Solves `A X = B` in place for every column of `B`, using the
    /// factor from the last successful call to `factor`.
    pub fn solve<C>(&mut self, B: &mut Matrix<T>, cntx: &C, rntm: &Rntm) -> Result<(), CholError>
    where
        C: VectorKernels<T>,
    {
        if !self.factored {
            return Err(CholError::NotFactored);
        }
        let n = self.order();
        if B.nrows() != n {
            return Err(CholError::IncompatibleDimension);
        }

        let a = self.factor_loc();
        let x = a.col(0, n);

        for k in 0..B.ncols() {
            for i in 0..n {
                self.work.data[x.at(i)] = B[(i, k)];
            }

            let buf = self.work.data_mut();

            // L y = b
            cntx.trsv(
                MatrixTriangle::Tril,
                Trans::NoTranspose,
                Diag::NonUnit,
                n,
                T::one(),
                buf,
                a,
                x,
                rntm,
            );
            // Lᴴ x = y
            cntx.trsv(
                MatrixTriangle::Tril,
                Trans::ConjTranspose,
                Diag::NonUnit,
                n,
                T::one(),
                buf,
                a,
                x,
                rntm,
            );

            for i in 0..n {
                B[(i, k)] = buf[x.at(i)];
            }
        }

        trace!("CholeskyEngine: solved {} right hand sides", B.ncols());
        Ok(())
    }

    /// Log determinant of the factored matrix, `2 Σ ln L[i,i]`
    pub fn logdet(&self) -> Result<T::Real, CholError> {
        if !self.factored {
            return Err(CholError::NotFactored);
        }
        let mut ld = T::Real::zero();
        for i in 0..self.order() {
            ld += self.work[(i, i)].real().ln();
        }
        Ok(ld + ld)
    }
}
