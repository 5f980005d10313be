//! Vector primitives used by the factorization.
//!
//! The factorization only depends on the [`Trsv`] and [`Dotxv`] contracts.
//! A computation context is any type implementing both for every scalar
//! type that is compiled in ([`VectorKernelsAll`]).  [`RefCntx`] provides
//! portable sequential reference implementations.

mod traits;
pub use traits::*;
mod dotxv;
mod trsv;

/// Reference computation context.
///
/// Implements the vector primitives with plain strided loops.  The
/// runtime configuration passed to it is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct RefCntx;
