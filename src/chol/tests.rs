#![allow(clippy::too_many_arguments)]
#![allow(non_snake_case)]

use super::*;
use crate::algebra::*;
use crate::kernels::*;
use crate::runtime::Rntm;
use std::cell::Cell;

#[cfg(feature = "complex")]
use num_complex::Complex;

// delegates to the reference context, counting calls
#[derive(Default)]
struct CountingCntx {
    trsv_calls: Cell<usize>,
    dotxv_calls: Cell<usize>,
}

impl<T: ScalarT> Trsv<T> for CountingCntx {
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
        rntm: &Rntm,
    ) {
        self.trsv_calls.set(self.trsv_calls.get() + 1);
        RefCntx.trsv(uplo, trans, diag, n, alpha, buf, a, x, rntm);
    }
}

impl<T: ScalarT> Dotxv<T> for CountingCntx {
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
        rntm: &Rntm,
    ) {
        self.dotxv_calls.set(self.dotxv_calls.get() + 1);
        RefCntx.dotxv(conjx, conjy, n, alpha, buf, x, y, beta, rho, rntm);
    }
}

fn factor_matrix<T: ObjElement>(A: &mut Matrix<T>) -> Result<CholStatus, CholError> {
    let mut obj = Obj::from_matrix(A)?;
    chol_l_unb_var1(&mut obj, &RefCntx, &Rntm::default())
}

macro_rules! generate_test_chol_2x2 {
    ($T:ty, $test_name:ident) => {
        #[test]
        fn $test_name() {
            type R = <$T as ScalarT>::Real;
            let r = |x: f64| <$T as ScalarT>::from_real(x.as_T());
            let tol: R = 1e-6f64.as_T();

            let mut A = Matrix::<$T>::from(&[
                [r(4.), r(2.)], //
                [r(2.), r(3.)], //
            ]);
            let status = factor_matrix(&mut A).unwrap();
            assert_eq!(status, CholStatus::Success);

            let L = Matrix::<$T>::from(&[
                [r(2.), r(2.)], //
                [r(1.), r(2f64.sqrt())],
            ]);
            // strictly upper part is not referenced
            assert!(A.norm_inf_diff(&L) < tol);
        }
    };
}

generate_test_chol_2x2!(f32, test_chol_2x2_f32);
generate_test_chol_2x2!(f64, test_chol_2x2_f64);
#[cfg(feature = "complex")]
generate_test_chol_2x2!(Complex<f32>, test_chol_2x2_c32);
#[cfg(feature = "complex")]
generate_test_chol_2x2!(Complex<f64>, test_chol_2x2_c64);

macro_rules! generate_test_chol_indefinite {
    ($T:ty, $test_name:ident) => {
        #[test]
        fn $test_name() {
            let r = |x: f64| <$T as ScalarT>::from_real(x.as_T());

            let mut A = Matrix::<$T>::from(&[
                [r(4.), r(6.)], //
                [r(6.), r(5.)], //
            ]);
            let status = factor_matrix(&mut A).unwrap();
            assert_eq!(status.failed_row(), Some(2));

            // first row complete, failed pivot 5 - 3² written back
            assert_eq!(A[(0, 0)], r(2.));
            assert_eq!(A[(1, 0)], r(3.));
            assert_eq!(A[(1, 1)], r(-4.));
        }
    };
}

generate_test_chol_indefinite!(f32, test_chol_indefinite_f32);
generate_test_chol_indefinite!(f64, test_chol_indefinite_f64);
#[cfg(feature = "complex")]
generate_test_chol_indefinite!(Complex<f32>, test_chol_indefinite_c32);
#[cfg(feature = "complex")]
generate_test_chol_indefinite!(Complex<f64>, test_chol_indefinite_c64);

#[test]
fn test_chol_identity() {
    let mut A = Matrix::<f64>::identity(5);
    assert!(factor_matrix(&mut A).unwrap().is_success());
    assert_eq!(A, Matrix::<f64>::identity(5));
}

#[test]
fn test_chol_empty() {
    let cntx = CountingCntx::default();
    let mut data: Vec<f64> = vec![];
    let mut obj = Obj::new(&mut data, 0, 0, 0, 1, 1).unwrap();
    let status = chol_l_unb_var1(&mut obj, &cntx, &Rntm::default()).unwrap();
    assert!(status.is_success());
    assert_eq!(cntx.trsv_calls.get(), 0);
    assert_eq!(cntx.dotxv_calls.get(), 0);
}

#[test]
fn test_chol_primitive_calls() {
    let cntx = CountingCntx::default();
    let mut A = Matrix::<f32>::identity(3);
    let mut obj = Obj::from_matrix(&mut A).unwrap();
    chol_l_unb_var1(&mut obj, &cntx, &Rntm::default()).unwrap();
    assert_eq!(cntx.trsv_calls.get(), 3);
    assert_eq!(cntx.dotxv_calls.get(), 3);
}

#[test]
fn test_chol_1x1() {
    let mut A = Matrix::<f64>::from(&[[9.]]);
    assert!(factor_matrix(&mut A).unwrap().is_success());
    assert_eq!(A[(0, 0)], 3.);

    for bad in [0., -1.] {
        let mut A = Matrix::<f64>::from(&[[bad]]);
        let status = factor_matrix(&mut A).unwrap();
        assert_eq!(status.failed_row(), Some(1));
    }
}

#[test]
fn test_chol_upper_untouched() {
    #[rustfmt::skip]
    let mut A = Matrix::<f64>::from(&[
        [ 8., 99., 99.],
        [-2., 12., 99.],
        [ 4.,  2.,  6.]]);
    assert!(factor_matrix(&mut A).unwrap().is_success());
    assert_eq!(A[(0, 1)], 99.);
    assert_eq!(A[(0, 2)], 99.);
    assert_eq!(A[(1, 2)], 99.);

    let L = A.lower_triangle();
    let mut S = Matrix::<f64>::from(&[
        [8., 0., 0.], //
        [-2., 12., 0.],
        [4., 2., 6.],
    ]);
    S.hermitian_from_lower();
    assert!(L.mul_adjoint(&L).norm_inf_diff(&S) < 1e-12);
}

// lower triangle of a 3×3 SPD matrix and its factor
#[rustfmt::skip]
fn spd3() -> (Matrix<f64>, Matrix<f64>) {
    let A = Matrix::from(&[
        [ 8., -2., 4.],
        [-2., 12., 2.],
        [ 4.,  2., 6.]]);
    let mut L = A.clone();
    assert!(factor_matrix(&mut L).unwrap().is_success());
    (A, L.lower_triangle())
}

#[test]
fn test_chol_typed_kernel() {
    let (A, L) = spd3();
    let rntm = Rntm::default();

    let mut F = A.clone();
    let status = chol_l_unb_var1_t(MatrixTriangle::Tril, F.as_strided_mut(), &RefCntx, &rntm);
    assert_eq!(status, Ok(CholStatus::Success));
    assert_eq!(F.lower_triangle(), L);

    // the leading 2×2 block of a 3×3 buffer
    let mut F = A.clone();
    let view = StridedMatMut::new(&mut F.data, 2, 2, 0, 1, 3).unwrap();
    let status = chol_l_unb_var1_t(MatrixTriangle::Tril, view, &RefCntx, &rntm);
    assert_eq!(status, Ok(CholStatus::Success));
    assert_eq!(F[(1, 1)], L[(1, 1)]);
    assert_eq!(F[(2, 2)], A[(2, 2)]);

    let mut F = A.clone();
    let view = StridedMatMut::new(&mut F.data, 3, 2, 0, 1, 3).unwrap();
    assert_eq!(
        chol_l_unb_var1_t(MatrixTriangle::Tril, view, &RefCntx, &rntm),
        Err(CholError::NotSquare(3, 2))
    );
    assert_eq!(F, A);
}

#[test]
fn test_chol_row_major() {
    let (A, L) = spd3();

    // row major storage is the transpose of the column major data
    let mut data = A.adjoint().data;
    let mut obj = Obj::new(&mut data, 3, 3, 0, 3, 1).unwrap();
    assert!(chol_l_unb_var1(&mut obj, &RefCntx, &Rntm::default())
        .unwrap()
        .is_success());

    for j in 0..3 {
        for i in j..3 {
            assert!((data[3 * i + j] - L[(i, j)]).abs() < 1e-14);
        }
    }
}

#[test]
fn test_chol_negative_strides() {
    let (A, L) = spd3();

    // element (i,j) held at 8 - i - 3j
    let mut data = A.data.clone();
    data.reverse();
    let mut obj = Obj::new(&mut data, 3, 3, 8, -1, -3).unwrap();
    assert!(chol_l_unb_var1(&mut obj, &RefCntx, &Rntm::default())
        .unwrap()
        .is_success());

    for j in 0..3 {
        for i in j..3 {
            assert!((data[8 - i - 3 * j] - L[(i, j)]).abs() < 1e-14);
        }
    }
}

#[test]
fn test_chol_submatrix_view() {
    let (A, L) = spd3();

    // 3×3 block at (1,1) of a 5×5 column major matrix
    let mut big = Matrix::<f64>::zeros((5, 5));
    big.data.iter_mut().for_each(|x| *x = -7.);
    for j in 0..3 {
        for i in 0..3 {
            big[(i + 1, j + 1)] = A[(i, j)];
        }
    }

    let mut obj = Obj::new(&mut big.data, 3, 3, 6, 1, 5).unwrap();
    assert!(chol_l_unb_var1(&mut obj, &RefCntx, &Rntm::default())
        .unwrap()
        .is_success());

    for j in 0..5 {
        for i in 0..5 {
            let inside = (1..4).contains(&i) && (1..4).contains(&j);
            if inside && i >= j {
                assert!((big[(i, j)] - L[(i - 1, j - 1)]).abs() < 1e-14);
            } else if !inside {
                assert_eq!(big[(i, j)], -7.);
            }
        }
    }
}

#[cfg(feature = "complex")]
#[test]
fn test_chol_complex_diagonal_imag_discarded() {
    type C = Complex<f64>;

    // A = L Lᴴ with L = [2 0; 1+i 3], with junk in the imaginary
    // part of the diagonal
    let mut A = Matrix::<C>::from(&[
        [C::new(4., 0.5), C::new(2., -2.)],
        [C::new(2., 2.), C::new(11., -3.)],
    ]);
    assert!(factor_matrix(&mut A).unwrap().is_success());
    assert_eq!(A[(0, 0)], C::new(2., 0.));
    assert_eq!(A[(1, 0)], C::new(1., 1.));
    assert_eq!(A[(1, 1)], C::new(3., 0.));
    assert_eq!(A[(1, 1)].im, 0.);
}

#[cfg(feature = "complex")]
#[test]
fn test_chol_complex_random_hpd() {
    type C = Complex<f64>;
    let n = 6;

    let mut B = Matrix::<C>::zeros((n, n));
    for j in 0..n {
        for i in 0..n {
            let (x, y) = ((i * 7 + j * 3) % 5, (i + 2 * j) % 3);
            B[(i, j)] = C::new(x as f64 - 2., y as f64 - 1.);
        }
    }
    let mut A = B.mul_adjoint(&B);
    for i in 0..n {
        A[(i, i)] += C::new(n as f64, 0.);
    }
    let S = A.clone();

    assert!(factor_matrix(&mut A).unwrap().is_success());
    let L = A.lower_triangle();
    assert!(L.mul_adjoint(&L).norm_inf_diff(&S) < 1e-12);
    for i in 0..n {
        assert_eq!(L[(i, i)].im, 0.);
        assert!(L[(i, i)].re > 0.);
    }
}

#[test]
fn test_chol_dispatch_errors() {
    let rntm = Rntm::default();

    let mut A = Matrix::<f64>::identity(2);
    let mut obj = Obj::from_matrix(&mut A)
        .unwrap()
        .with_uplo(MatrixTriangle::Triu);
    assert_eq!(
        chol_l_unb_var1(&mut obj, &RefCntx, &rntm),
        Err(CholError::UnsupportedFill)
    );

    let mut obj = Obj::from_matrix(&mut A)
        .unwrap()
        .with_structure(MatrixStructure::Triangular);
    assert_eq!(
        chol_l_unb_var1(&mut obj, &RefCntx, &rntm),
        Err(CholError::BadStructure)
    );

    let mut A = Matrix::<f32>::zeros((2, 3));
    let mut obj = Obj::from_matrix(&mut A).unwrap();
    assert_eq!(
        chol_l_unb_var1(&mut obj, &RefCntx, &rntm),
        Err(CholError::NotSquare(2, 3))
    );
}

#[test]
fn test_chol_qfp() {
    for dt in DataType::ALL {
        let found = chol_l_unb_var1_qfp::<RefCntx>(dt).is_some();
        assert_eq!(found, cfg!(feature = "complex") || !dt.is_complex());
    }

    // kernel handed a buffer of the wrong type
    let kernel = chol_l_unb_var1_qfp::<RefCntx>(DataType::Double).unwrap();
    let mut data = vec![1f32];
    let mut buffer = f32::wrap(&mut data);
    let result = kernel(
        MatrixTriangle::Tril,
        1,
        &mut buffer,
        MatLoc::new(0, 1, 1),
        &RefCntx,
        &Rntm::default(),
    );
    assert_eq!(
        result,
        Err(CholError::DataTypeMismatch {
            expected: DataType::Double,
            found: DataType::Float
        })
    );

    // order and location that do not fit the buffer
    let mut data = vec![4f64];
    let mut buffer = f64::wrap(&mut data);
    let result = kernel(
        MatrixTriangle::Tril,
        3,
        &mut buffer,
        MatLoc::new(0, 1, 3),
        &RefCntx,
        &Rntm::default(),
    );
    assert_eq!(
        result,
        Err(CholError::Layout(StridedLayoutError::OutOfBounds))
    );
    assert_eq!(data, [4.]);
}

#[test]
fn test_chol_buffer_replaced() {
    let mut A = Matrix::<f64>::identity(3);
    let mut obj = Obj::from_matrix(&mut A).unwrap();

    // a shorter buffer no longer holds the described layout
    let mut short = vec![1f64];
    *obj.buffer_mut() = f64::wrap(&mut short);
    assert_eq!(
        chol_l_unb_var1(&mut obj, &RefCntx, &Rntm::default()),
        Err(CholError::Layout(StridedLayoutError::OutOfBounds))
    );
    assert_eq!(short, [1.]);
}

#[test]
fn test_chol_front_upper() {
    let rntm = Rntm::default();

    #[rustfmt::skip]
    let mut A = Matrix::<f64>::from(&[
        [ 4.,  2.],
        [-5.,  3.]]);
    let mut obj = Obj::from_matrix(&mut A)
        .unwrap()
        .with_uplo(MatrixTriangle::Triu);
    assert!(chol(&mut obj, &RefCntx, &rntm).unwrap().is_success());

    // descriptor restored
    assert_eq!(obj.uplo(), MatrixTriangle::Triu);
    assert_eq!((obj.row_stride(), obj.col_stride()), (1, 2));

    // A = Uᴴ U, lower part untouched
    assert_eq!(A[(0, 0)], 2.);
    assert_eq!(A[(0, 1)], 1.);
    assert!((A[(1, 1)] - 2f64.sqrt()).abs() < 1e-15);
    assert_eq!(A[(1, 0)], -5.);

    // shape is reported as stored, not as transposed
    let mut A = Matrix::<f64>::zeros((2, 3));
    let mut obj = Obj::from_matrix(&mut A)
        .unwrap()
        .with_uplo(MatrixTriangle::Triu);
    assert_eq!(
        chol(&mut obj, &RefCntx, &rntm),
        Err(CholError::NotSquare(2, 3))
    );
    assert_eq!((obj.length(), obj.width()), (2, 3));
    assert_eq!(obj.uplo(), MatrixTriangle::Triu);

    // lower storage goes straight through
    let mut A = Matrix::<f64>::from(&[[4., 0.], [2., 3.]]);
    let mut obj = Obj::from_matrix(&mut A).unwrap();
    assert!(chol(&mut obj, &RefCntx, &rntm).unwrap().is_success());
    assert_eq!(A[(1, 0)], 1.);
}

#[cfg(feature = "complex")]
#[test]
fn test_chol_front_upper_complex() {
    type C = Complex<f64>;

    // upper triangle of A = L Lᴴ with L = [2 0; 1+i 3]
    let mut A = Matrix::<C>::from(&[
        [C::new(4., 0.), C::new(2., -2.)],
        [C::new(0., 0.), C::new(11., 0.)],
    ]);
    let mut obj = Obj::from_matrix(&mut A)
        .unwrap()
        .with_uplo(MatrixTriangle::Triu);
    assert!(chol(&mut obj, &RefCntx, &Rntm::default())
        .unwrap()
        .is_success());

    // U = Lᴴ
    assert_eq!(A[(0, 0)], C::new(2., 0.));
    assert_eq!(A[(0, 1)], C::new(1., -1.));
    assert_eq!(A[(1, 1)], C::new(3., 0.));
    assert_eq!(A[(1, 0)], C::new(0., 0.));
}

#[test]
fn test_chol_front_upper_failure() {
    let mut A = Matrix::<f32>::from(&[
        [1., 2., 0.], //
        [0., 1., 0.], //
        [0., 0., 1.], //
    ]);
    let mut obj = Obj::from_matrix(&mut A)
        .unwrap()
        .with_uplo(MatrixTriangle::Triu);
    let status = chol(&mut obj, &RefCntx, &Rntm::default()).unwrap();
    assert_eq!(status.failed_row(), Some(2));
}
