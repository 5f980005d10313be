//! __hermchol__ computes the Cholesky factorization of a Hermitian (or real
//! symmetric) positive definite matrix
//!
//! $$
//! A = L L^H
//! $$
//!
//! overwriting the lower triangle of $A$ in place with the lower triangular
//! factor $L$.   The factorization is the unblocked, left-looking variant
//! that processes the matrix one row at a time:
//!
//! ```text
//! for i in 0..m
//!     a10     = a10 / tril(A00)^H
//!     alpha11 = alpha11 - a10 * a10^H
//!     alpha11 = sqrt(real(alpha11))
//! ```
//!
//! A single algorithm body is written generically over [`ScalarT`](crate::algebra::ScalarT)
//! and instantiated for `f32`, `f64` and (with the `complex` feature)
//! `Complex<f32>` and `Complex<f64>`.   A type-erased matrix descriptor
//! [`Obj`](crate::chol::Obj) is routed to the matching instantiation by
//! [`chol_l_unb_var1`](crate::chol::chol_l_unb_var1).
//!
//! Matrices may be stored in any strided layout: column major, row major,
//! submatrix views and views with negative strides are all supported without
//! copying.
//!
//! # Example
//!
//! ```
//! use hermchol::algebra::*;
//! use hermchol::chol::*;
//! use hermchol::kernels::RefCntx;
//! use hermchol::runtime::Rntm;
//!
//! let mut A = Matrix::<f64>::from(&[
//!     [4., 2.], //
//!     [2., 3.], //
//! ]);
//! let mut obj = Obj::from_matrix(&mut A).unwrap();
//! let status = chol_l_unb_var1(&mut obj, &RefCntx, &Rntm::default()).unwrap();
//!
//! assert!(status.is_success());
//! assert_eq!(A[(0, 0)], 2.);
//! assert_eq!(A[(1, 0)], 1.);
//! ```
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

//Rust hates greek characters
#![allow(confusable_idents)]

pub mod algebra;
pub mod chol;
pub mod kernels;
pub mod runtime;
