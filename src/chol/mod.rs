//! Cholesky factorization of Hermitian positive definite matrices.
//!
//! [`chol_l_unb_var1`] factors a type-erased matrix descriptor [`Obj`] in
//! place, routing it to the typed kernel [`chol_l_unb_var1_t`] instantiated
//! for the descriptor's data type.  [`chol`] additionally accepts data held in
//! the upper triangle.  [`CholeskyEngine`] wraps the factorization of an owned
//! dense matrix, with solves and log determinant.

mod check;
mod dispatch;
mod engine;
mod front;
mod obj;
mod status;
mod var1;

pub use check::*;
pub use dispatch::*;
pub use engine::*;
pub use front::*;
pub use obj::*;
pub use status::*;
pub use var1::*;

#[cfg(test)]
mod tests;
