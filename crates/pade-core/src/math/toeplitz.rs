//! Toeplitz matrices
//!
//! A Toeplitz matrix is constant along each diagonal, so it is fully described
//! by its first column and first row. Solving with it takes `O(n^2)` through
//! the Levinson recursion instead of the `O(n^3)` of a dense factorization,
//! as long as the recursion does not break down.

use log::debug;
use ndarray::{Array1, Array2, ArrayView1};

use super::{linalg, Sample};
use crate::constants::NEAR_ZERO;

/// Square Toeplitz matrix `T[i][j] = column[i - j]` for `i >= j`, `row[j - i]` otherwise
///
/// `row[0]` is never read: the diagonal comes from `column[0]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Toeplitz<T> {
    column: Array1<T>,
    row: Array1<T>,
}

impl<T: Sample> Toeplitz<T> {
    /// Create from the first column and first row
    pub fn new(column: Array1<T>, row: Array1<T>) -> Result<Self, &'static str> {
        if column.is_empty() {
            return Err("Empty matrix");
        }
        if column.len() != row.len() {
            return Err("Column and row lengths differ");
        }
        Ok(Self { column, row })
    }

    /// Matrix dimension
    #[inline]
    pub fn dim(&self) -> usize {
        self.column.len()
    }

    /// Element at `(i, j)`
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        if i >= j {
            self.column[i - j]
        } else {
            self.row[j - i]
        }
    }

    /// Assemble the dense matrix
    pub fn to_dense(&self) -> Array2<T> {
        let n = self.dim();
        Array2::from_shape_fn((n, n), |(i, j)| self.get(i, j))
    }

    /// Matrix-vector product `T x`
    pub fn matvec(&self, x: &Array1<T>) -> Array1<T> {
        let n = self.dim();
        Array1::from_shape_fn(n, |i| {
            (0..n).fold(T::zero(), |acc, j| acc + self.get(i, j) * x[j])
        })
    }

    /// Largest generator modulus, `max |T[i][j]|`
    pub fn max_modulus(&self) -> f64 {
        self.column
            .iter()
            .chain(self.row.iter().skip(1))
            .fold(0.0, |m, v| m.max(v.modulus()))
    }

    /// Normwise backward error `|T x - y| / (|T| |x| + |y|)` in the infinity norm
    pub fn backward_error(&self, x: &Array1<T>, y: &Array1<T>) -> f64 {
        let n = self.dim();
        let residual = (&self.matvec(x) - y)
            .iter()
            .fold(0.0_f64, |m, v| m.max(v.modulus()));
        let norm_t = (0..n)
            .map(|i| (0..n).map(|j| self.get(i, j).modulus()).sum::<f64>())
            .fold(0.0_f64, f64::max);
        let norm_x = x.iter().fold(0.0_f64, |m, v| m.max(v.modulus()));
        let norm_y = y.iter().fold(0.0_f64, |m, v| m.max(v.modulus()));
        residual / (norm_t * norm_x + norm_y)
    }

    /// Solve `T x = y` for any nonsingular `T`
    ///
    /// Runs the `O(n^2)` Levinson recursion and keeps its answer when the
    /// backward error is at rounding level. A vanishing leading minor, or a
    /// recursion that lost accuracy on an ill-conditioned minor, falls back to
    /// a partially pivoted LU of the assembled matrix. Only a singular `T` is
    /// an error.
    pub fn solve(&self, y: &Array1<T>) -> Result<Array1<T>, &'static str> {
        let n = self.dim();
        if y.len() != n {
            return Err("Dimension mismatch");
        }

        match self.solve_levinson(y) {
            Ok(x) => {
                let eta = self.backward_error(&x, y);
                // Rounding level for an n-term inner product
                if eta <= n as f64 * f64::EPSILON {
                    return Ok(x);
                }
                debug!("Levinson backward error {:.3e}, refactoring with pivoting", eta);
            }
            Err(reason) => debug!("Levinson recursion stopped: {}, refactoring with pivoting", reason),
        }

        linalg::solve(&self.to_dense(), y)
    }

    /// Solve `T x = y` with the generalized (nonsymmetric) Levinson recursion
    ///
    /// Every leading principal minor must be nonsingular. A vanishing minor is
    /// reported as an error even when the full matrix is invertible; use
    /// [`Toeplitz::solve`] for a solve that cannot break down this way.
    pub fn solve_levinson(&self, y: &Array1<T>) -> Result<Array1<T>, &'static str> {
        let n = self.dim();
        if y.len() != n {
            return Err("Dimension mismatch");
        }

        // Relative to the entries, so the outcome does not depend on units
        let t0 = self.column[0];
        if t0.modulus() <= NEAR_ZERO * self.max_modulus() {
            return Err("Leading minor is singular");
        }

        let inv_t0 = T::one() / t0;
        let mut forward = vec![inv_t0];
        let mut backward = vec![inv_t0];
        let mut x = vec![y[0] * inv_t0];

        for k in 1..n {
            let mut eps_f = T::zero();
            let mut eps_b = T::zero();
            let mut eps_x = T::zero();
            for j in 0..k {
                eps_f += self.get(k, j) * forward[j];
                eps_b += self.get(0, j + 1) * backward[j];
                eps_x += self.get(k, j) * x[j];
            }

            // eps_f and eps_b are dimensionless
            let denom = T::one() - eps_f * eps_b;
            if denom.modulus() < NEAR_ZERO {
                return Err("Leading minor is singular");
            }
            let scale = T::one() / denom;

            let mut next_forward = Vec::with_capacity(k + 1);
            let mut next_backward = Vec::with_capacity(k + 1);
            for i in 0..=k {
                let f = if i < k { forward[i] } else { T::zero() };
                let b = if i > 0 { backward[i - 1] } else { T::zero() };
                next_forward.push((f - eps_f * b) * scale);
                next_backward.push((b - eps_b * f) * scale);
            }
            forward = next_forward;
            backward = next_backward;

            let correction = y[k] - eps_x;
            x.push(T::zero());
            for (xi, &bi) in x.iter_mut().zip(backward.iter()) {
                *xi += correction * bi;
            }
        }

        if x.iter().any(|v| !v.is_finite()) {
            return Err("Solution is not finite");
        }
        Ok(Array1::from_vec(x))
    }
}

/// Product of the lower-triangular Toeplitz matrix built from `column` with `x`
///
/// `out[k] = sum_{m=0..=k} column[k - m] * x[m]`, a truncated convolution.
pub fn lower_triangular_matvec<T: Sample>(
    column: ArrayView1<'_, T>,
    x: ArrayView1<'_, T>,
) -> Array1<T> {
    let n = column.len().min(x.len());
    Array1::from_shape_fn(n, |k| {
        (0..=k).fold(T::zero(), |acc, m| acc + column[k - m] * x[m])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;
    use num_complex::Complex64;

    #[test]
    fn test_to_dense_layout() {
        let t = Toeplitz::new(array![1.0, 2.0, 3.0], array![9.0, 4.0, 5.0]).unwrap();
        let dense = t.to_dense();
        let expected = array![[1.0, 4.0, 5.0], [2.0, 1.0, 4.0], [3.0, 2.0, 1.0]];
        assert_eq!(dense, expected);
    }

    #[test]
    fn test_levinson_matches_dense_solve() {
        let t = Toeplitz::new(array![4.0, 1.5, -0.5, 0.25], array![4.0, 2.0, 0.5, -1.0]).unwrap();
        let y = array![1.0, -2.0, 0.5, 3.0];

        let fast = t.solve(&y).unwrap();
        let dense = linalg::solve(&t.to_dense(), &y).unwrap();

        for (a, b) in fast.iter().zip(dense.iter()) {
            assert_relative_eq!(*a, *b, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_levinson_complex() {
        let t = Toeplitz::new(
            array![Complex64::new(3.0, 1.0), Complex64::new(0.5, -0.5)],
            array![Complex64::new(3.0, 1.0), Complex64::new(-1.0, 0.25)],
        )
        .unwrap();
        let y = array![Complex64::new(1.0, 0.0), Complex64::new(0.0, 1.0)];

        let fast = t.solve(&y).unwrap();
        let dense = linalg::solve(&t.to_dense(), &y).unwrap();

        for (a, b) in fast.iter().zip(dense.iter()) {
            assert_relative_eq!((a - b).norm(), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_levinson_singular_leading_minor() {
        // Invertible overall, but the 1x1 leading minor is zero
        let t = Toeplitz::new(array![0.0, 1.0], array![0.0, 1.0]).unwrap();
        let y = array![1.0, 1.0];
        assert_eq!(t.solve_levinson(&y), Err("Leading minor is singular"));

        let x = t.solve(&y).unwrap();
        assert_relative_eq!(x[0], 1.0, epsilon = 1e-15);
        assert_relative_eq!(x[1], 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_zero_diagonal_with_pivoting() {
        // [[0, 1], [2, 0]] x = [-2, -4]
        let t = Toeplitz::new(array![0.0, 2.0], array![0.0, 1.0]).unwrap();
        let x = t.solve(&array![-2.0, -4.0]).unwrap();
        assert_eq!(x, array![-2.0, -2.0]);
    }

    #[test]
    fn test_singular_matrix_is_rejected() {
        let t = Toeplitz::new(array![0.0, 0.0], array![0.0, 0.0]).unwrap();
        assert!(t.solve(&array![1.0, 1.0]).is_err());
    }

    #[test]
    fn test_levinson_is_scale_invariant() {
        let column = array![4.0, 1.5, -0.5, 0.25];
        let row = array![4.0, 2.0, 0.5, -1.0];
        let y = array![1.0, -2.0, 0.5, 3.0];
        let unit = Toeplitz::new(column.clone(), row.clone()).unwrap();
        let reference = unit.solve_levinson(&y).unwrap();

        for scale in [1e-20, 1e-17, 1e12] {
            let t = Toeplitz::new(column.mapv(|v| v * scale), row.mapv(|v| v * scale)).unwrap();
            let x = t.solve_levinson(&y.mapv(|v| v * scale)).unwrap();
            for (a, b) in x.iter().zip(reference.iter()) {
                assert_relative_eq!(*a, *b, max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn test_backward_error_of_exact_solution() {
        let t = Toeplitz::new(array![2.0, 1.0], array![2.0, 1.0]).unwrap();
        let y = t.matvec(&array![1.0, -1.0]);
        assert_eq!(y, array![1.0, -1.0]);
        assert_eq!(t.backward_error(&array![1.0, -1.0], &y), 0.0);
        assert!(t.backward_error(&array![1.0, 0.0], &y) > 0.1);
    }

    #[test]
    fn test_new_rejects_bad_generators() {
        assert!(Toeplitz::<f64>::new(array![], array![]).is_err());
        assert!(Toeplitz::new(array![1.0, 2.0], array![1.0]).is_err());
    }

    #[test]
    fn test_lower_triangular_matvec() {
        let column = array![1.0, 2.0, 3.0];
        let x = array![1.0, 0.5, -1.0];
        let out = lower_triangular_matvec(column.view(), x.view());

        // [[1,0,0],[2,1,0],[3,2,1]] * x
        assert_eq!(out, array![1.0, 2.5, 3.0]);
    }
}
