use super::{DataType, FloatT};
use num_traits::NumAssign;
use std::fmt::Debug;
use std::ops::Neg;

#[cfg(feature = "complex")]
use num_complex::Complex;

/// Element type of the matrices factored by this crate.
///
/// `ScalarT` is implemented for the real types `f32` / `f64` and, with the
/// `complex` feature, for `Complex<f32>` / `Complex<f64>`.   Each type has
/// an associated real component type, and a real projection that can be
/// read and overwritten independently of the imaginary part.  For real types
/// the projection is the value itself and the imaginary part is always zero.
pub trait ScalarT:
    'static + Copy + Send + Sync + Debug + Default + PartialEq + NumAssign + Neg<Output = Self>
{
    /// Real component type
    type Real: FloatT;

    /// Data type tag for descriptors holding this type
    const DATATYPE: DataType;

    /// Complex conjugate
    fn conj(self) -> Self;

    /// Real projection
    fn real(self) -> Self::Real;

    /// Imaginary part.  Zero for real types.
    fn imag(self) -> Self::Real;

    /// Mutable access to the real projection
    fn real_mut(&mut self) -> &mut Self::Real;

    /// Set the imaginary part to exactly zero.  No-op for real types.
    fn set_imag_zero(&mut self);

    /// Embed a real value
    fn from_real(re: Self::Real) -> Self;

    /// Assemble from real and imaginary parts.  The imaginary part
    /// is discarded for real types.
    fn from_parts(re: Self::Real, im: Self::Real) -> Self;

    /// Absolute value (complex modulus)
    fn modulus(self) -> Self::Real;

    /// The negative unit `-1`
    #[inline]
    fn minus_one() -> Self {
        -Self::one()
    }

    #[inline]
    fn conj_if(self, conj: bool) -> Self {
        if conj {
            self.conj()
        } else {
            self
        }
    }
}

macro_rules! impl_scalar_real {
    ($T:ty, $DT:expr) => {
        impl ScalarT for $T {
            type Real = $T;
            const DATATYPE: DataType = $DT;

            #[inline]
            fn conj(self) -> Self {
                self
            }
            #[inline]
            fn real(self) -> $T {
                self
            }
            #[inline]
            fn imag(self) -> $T {
                0.
            }
            #[inline]
            fn real_mut(&mut self) -> &mut $T {
                self
            }
            #[inline]
            fn set_imag_zero(&mut self) {}
            #[inline]
            fn from_real(re: $T) -> Self {
                re
            }
            #[inline]
            fn from_parts(re: $T, _im: $T) -> Self {
                re
            }
            #[inline]
            fn modulus(self) -> $T {
                self.abs()
            }
        }
    };
}

impl_scalar_real!(f32, DataType::Float);
impl_scalar_real!(f64, DataType::Double);

#[cfg(feature = "complex")]
macro_rules! impl_scalar_complex {
    ($T:ty, $DT:expr) => {
        impl ScalarT for Complex<$T> {
            type Real = $T;
            const DATATYPE: DataType = $DT;

            #[inline]
            fn conj(self) -> Self {
                Complex::conj(&self)
            }
            #[inline]
            fn real(self) -> $T {
                self.re
            }
            #[inline]
            fn imag(self) -> $T {
                self.im
            }
            #[inline]
            fn real_mut(&mut self) -> &mut $T {
                &mut self.re
            }
            #[inline]
            fn set_imag_zero(&mut self) {
                self.im = 0.;
            }
            #[inline]
            fn from_real(re: $T) -> Self {
                Complex::new(re, 0.)
            }
            #[inline]
            fn from_parts(re: $T, im: $T) -> Self {
                Complex::new(re, im)
            }
            #[inline]
            fn modulus(self) -> $T {
                self.norm()
            }
        }
    };
}

#[cfg(feature = "complex")]
impl_scalar_complex!(f32, DataType::Scomplex);
#[cfg(feature = "complex")]
impl_scalar_complex!(f64, DataType::Dcomplex);
