use super::ScalarT;
use num_traits::Float;
use std::iter::zip;

/// Vector operations on slices of [`ScalarT`](crate::algebra::ScalarT)
pub trait VectorMath {
    type T: ScalarT;

    /// Infinity norm (largest modulus), NaN if any element is NaN
    fn norm_inf(&self) -> <Self::T as ScalarT>::Real;

    /// Infinity norm of `self - b`
    fn norm_inf_diff(&self, b: &Self) -> <Self::T as ScalarT>::Real;
}

// largest value in `v`, or NaN as soon as one is found
fn max_or_nan<R: Float>(v: impl Iterator<Item = R>) -> R {
    let mut out = R::zero();
    for v in v {
        if v.is_nan() {
            return R::nan();
        }
        out = if v > out { v } else { out };
    }
    out
}

impl<T: ScalarT> VectorMath for [T] {
    type T = T;

    fn norm_inf(&self) -> T::Real {
        max_or_nan(self.iter().map(|x| x.modulus()))
    }

    fn norm_inf_diff(&self, b: &[T]) -> T::Real {
        assert_eq!(self.len(), b.len());
        max_or_nan(zip(self, b).map(|(&x, &y)| (x - y).modulus()))
    }
}

#[test]
fn test_vector_norms() {
    let x = [1.0, -4.0, 2.0];
    let y = [1.5, -4.0, 0.0];
    assert_eq!(x.norm_inf(), 4.0);
    assert_eq!(x.norm_inf_diff(&y), 2.0);
    let empty: [f32; 0] = [];
    assert_eq!(empty.norm_inf(), 0.0);
}

#[test]
fn test_vector_norms_nan() {
    let x = [1.0, f64::NAN, 2.0];
    let y = [1.0, 0.0, 2.0];
    assert!(x.norm_inf().is_nan());
    assert!(x.norm_inf_diff(&y).is_nan());
    assert!(y.norm_inf_diff(&x).is_nan());
    assert!([f32::NAN].norm_inf().is_nan());
}
