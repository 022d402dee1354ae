//! Linear algebra operations
//!
//! Dense solves go through nalgebra; callers work with ndarray containers.
//! All ndarray<->nalgebra conversions are contained here.

use nalgebra::{DMatrix, DVector};
use ndarray::{Array1, Array2};

use super::Sample;

// ============================================================================
// Conversion helpers (internal)
// ============================================================================

#[inline]
fn to_na_matrix<T: Sample>(a: &Array2<T>) -> DMatrix<T> {
    let (m, n) = a.dim();
    DMatrix::from_fn(m, n, |i, j| a[[i, j]])
}

#[inline]
fn to_na_vector<T: Sample>(b: &Array1<T>) -> DVector<T> {
    DVector::from_fn(b.len(), |i, _| b[i])
}

#[inline]
fn from_na_vector<T: Sample>(v: &DVector<T>) -> Array1<T> {
    v.iter().copied().collect()
}

// ============================================================================
// Dense solve
// ============================================================================

/// Solve the square system `A x = b` by LU decomposition with partial pivoting
///
/// Returns an error if the matrix is non-square, the dimensions disagree,
/// a pivot vanishes, or the solution is not finite.
pub fn solve<T: Sample>(a: &Array2<T>, b: &Array1<T>) -> Result<Array1<T>, &'static str> {
    let (m, n) = a.dim();
    if m != n {
        return Err("Matrix must be square");
    }
    if b.len() != m {
        return Err("Dimension mismatch");
    }
    if m == 0 {
        return Ok(Array1::zeros(0));
    }

    let lu = to_na_matrix(a).lu();
    let x = lu.solve(&to_na_vector(b)).ok_or("Matrix is singular")?;
    if x.iter().any(|v| !v.is_finite()) {
        return Err("Solution is not finite");
    }

    Ok(from_na_vector(&x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;
    use num_complex::Complex64;

    fn matvec(a: &Array2<f64>, x: &Array1<f64>) -> Array1<f64> {
        a.dot(x)
    }

    #[test]
    fn test_solve_identity() {
        let eye = Array2::<f64>::eye(3);
        let b = array![1.0, -2.0, 3.5];
        let x = solve(&eye, &b).unwrap();
        for i in 0..3 {
            assert_relative_eq!(x[i], b[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_solve_requires_pivoting() {
        // Zero in the leading position forces a row swap
        let a = array![[0.0, 2.0], [3.0, 4.0]];
        let b = array![4.0, 11.0];
        let x = solve(&a, &b).unwrap();
        assert_relative_eq!(x[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(x[1], 2.0, epsilon = 1e-12);

        let residual = &matvec(&a, &x) - &b;
        assert!(residual.iter().all(|r| r.abs() < 1e-12));
    }

    #[test]
    fn test_solve_complex() {
        let a = array![
            [Complex64::new(1.0, 1.0), Complex64::new(0.0, 0.0)],
            [Complex64::new(0.0, 0.0), Complex64::new(0.0, 2.0)],
        ];
        let b = array![Complex64::new(2.0, 0.0), Complex64::new(2.0, 0.0)];
        let x = solve(&a, &b).unwrap();

        // 2 / (1 + i) = 1 - i, 2 / 2i = -i
        assert_relative_eq!(x[0].re, 1.0, epsilon = 1e-12);
        assert_relative_eq!(x[0].im, -1.0, epsilon = 1e-12);
        assert_relative_eq!(x[1].re, 0.0, epsilon = 1e-12);
        assert_relative_eq!(x[1].im, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_solve_singular() {
        let a = Array2::<f64>::zeros((2, 2));
        let b = array![1.0, 1.0];
        assert_eq!(solve(&a, &b), Err("Matrix is singular"));
    }

    #[test]
    fn test_solve_dimension_checks() {
        let a = Array2::<f64>::zeros((2, 3));
        assert_eq!(solve(&a, &array![1.0, 1.0]), Err("Matrix must be square"));

        let a = Array2::<f64>::eye(2);
        assert_eq!(solve(&a, &array![1.0]), Err("Dimension mismatch"));
    }
}
