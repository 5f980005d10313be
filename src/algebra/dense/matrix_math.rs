#![allow(non_snake_case)]

use crate::algebra::*;
use itertools::iproduct;

impl<T> Matrix<T>
where
    T: ScalarT,
{
    /// Conjugate transpose as a new matrix
    pub fn adjoint(&self) -> Matrix<T> {
        let mut At = Matrix::zeros((self.n, self.m));
        for (i, j) in iproduct!(0..self.m, 0..self.n) {
            At[(j, i)] = self[(i, j)].conj();
        }
        At
    }

    /// Copy of the lower triangle (diagonal included), with
    /// zeros above the diagonal
    pub fn lower_triangle(&self) -> Matrix<T> {
        let mut L = Matrix::zeros(self.size());
        for j in 0..self.n {
            for i in j..self.m {
                L[(i, j)] = self[(i, j)];
            }
        }
        L
    }

    /// Fill the strictly upper triangle with the conjugate of the
    /// lower triangle
    pub fn hermitian_from_lower(&mut self) -> &mut Self {
        assert!(self.is_square());
        for j in 0..self.n {
            for i in (j + 1)..self.m {
                self[(j, i)] = self[(i, j)].conj();
            }
        }
        self
    }

    /// Computes `self * Bᴴ`
    pub fn mul_adjoint(&self, B: &Matrix<T>) -> Matrix<T> {
        assert_eq!(self.n, B.n);
        let mut C = Matrix::zeros((self.m, B.m));
        for (j, k, i) in iproduct!(0..B.m, 0..self.n, 0..self.m) {
            let bjk = B[(j, k)].conj();
            C[(i, j)] += self[(i, k)] * bjk;
        }
        C
    }

    /// Largest absolute element-wise difference against `B`
    pub fn norm_inf_diff(&self, B: &Matrix<T>) -> T::Real {
        assert_eq!(self.size(), B.size());
        self.data().norm_inf_diff(B.data())
    }
}
