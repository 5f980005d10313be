#![allow(non_snake_case)]

use super::{RefCntx, Trsv};
use crate::algebra::*;
use crate::runtime::Rntm;

impl<T> Trsv<T> for RefCntx
where
    T: ScalarT,
{
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
        _rntm: &Rntm,
    ) {
        if n == 0 {
            return;
        }

        if alpha != T::one() {
            for k in 0..n {
                buf[x.at(k)] *= alpha;
            }
        }

        // element (i,j) of op(A), only ever requested
        // from the triangle that op(A) references
        let conj = trans.is_conj();
        let opA = |buf: &[T], i: usize, j: usize| -> T {
            let aij = if trans.is_trans() {
                buf[a.at(j, i)]
            } else {
                buf[a.at(i, j)]
            };
            aij.conj_if(conj)
        };

        // a transposed upper triangle is lower, and vice versa
        let lower = (uplo == MatrixTriangle::Tril) != trans.is_trans();

        if lower {
            // forward substitution
            for i in 0..n {
                let mut s = buf[x.at(i)];
                for j in 0..i {
                    s -= opA(buf, i, j) * buf[x.at(j)];
                }
                if diag == Diag::NonUnit {
                    s /= opA(buf, i, i);
                }
                buf[x.at(i)] = s;
            }
        } else {
            // backward substitution
            for i in (0..n).rev() {
                let mut s = buf[x.at(i)];
                for j in (i + 1)..n {
                    s -= opA(buf, i, j) * buf[x.at(j)];
                }
                if diag == Diag::NonUnit {
                    s /= opA(buf, i, i);
                }
                buf[x.at(i)] = s;
            }
        }
    }
}
