use super::{Dotxv, RefCntx};
use crate::algebra::*;
use crate::runtime::Rntm;

impl<T> Dotxv<T> for RefCntx
where
    T: ScalarT,
{
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
        _rntm: &Rntm,
    ) {
        let (cx, cy) = (conjx == Conj::Conjugate, conjy == Conj::Conjugate);

        let mut dot = T::zero();
        for k in 0..n {
            dot += buf[x.at(k)].conj_if(cx) * buf[y.at(k)].conj_if(cy);
        }

        if beta == T::zero() {
            *rho = alpha * dot;
        } else {
            *rho = beta * *rho + alpha * dot;
        }
    }
}
