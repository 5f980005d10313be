#![allow(non_snake_case)]
use num_traits::{Float, FloatConst, FromPrimitive, NumAssign};
use std::fmt::{Debug, Display, LowerExp};

/// Main trait for real floating point values.
///
/// Every scalar type supported by the factorization has an associated real
/// component type implementing `FloatT`.   Positivity checks and square roots
/// in the factorization act on values of this type only.
///
/// `FloatT` relies on [`num_traits`](num_traits) for most of its constituent trait bounds.
pub trait FloatT:
    'static
    + Send
    + Sync
    + Float
    + FloatConst
    + NumAssign
    + Default
    + FromPrimitive
    + Display
    + LowerExp
    + Debug
    + Sized
{
}

impl<T> FloatT for T where
    T: 'static
        + Send
        + Sync
        + Float
        + FloatConst
        + NumAssign
        + Default
        + FromPrimitive
        + Display
        + LowerExp
        + Debug
        + Sized
{
}

/// Trait for convering Rust primitives to [`FloatT`](crate::algebra::FloatT)
///
/// This convenience trait is implemented on f32/64 and u32/64/usize, and is
/// used internally for converting constant primitives to [`FloatT`](crate::algebra::FloatT).

// NB: `AsFloatT` is a convenience trait so that we can do things
// like (2.0).as_T() on constants, rather than the awful
// T::from_f32(2.0).unwrap()
pub trait AsFloatT<T>: 'static {
    fn as_T(&self) -> T;
}

macro_rules! impl_as_FloatT {
    ($ty:ty, $ident:ident) => {
        impl<T> AsFloatT<T> for $ty
        where
            T: FloatT,
        {
            #[inline]
            fn as_T(&self) -> T {
                // conversion from a primitive into f32/f64 never fails
                T::$ident(*self).unwrap_or_else(T::nan)
            }
        }
    };
}
impl_as_FloatT!(u32, from_u32);
impl_as_FloatT!(u64, from_u64);
impl_as_FloatT!(usize, from_usize);
impl_as_FloatT!(f32, from_f32);
impl_as_FloatT!(f64, from_f64);

#[test]
fn test_as_float() {
    let x: f32 = (2.5).as_T();
    assert_eq!(x, 2.5f32);
    let y: f64 = 7usize.as_T();
    assert_eq!(y, 7.0);
}
