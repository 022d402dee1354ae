//! Coefficient solver
//!
//! The denominator coefficients `b` (with `b[0] = 1`) solve
//!
//! ```text
//! sum_{m=1..N} b[m] * c[N - m + k] = -c[N + k],   k = 1..N
//! ```
//!
//! whose matrix `G[k][m] = c[N - m + k]` is Toeplitz. The numerator follows
//! from the truncated convolution `a[k] = sum_{m=0..=k} b[m] * c[k - m]`.

use log::debug;
use ndarray::{s, Array1, Array2, ArrayView1};

use super::model::PadeApproximant;
use super::series::PadeSeries;
use crate::error::{PadeError, Result};
use crate::math::{linalg, lower_triangular_matvec, Sample, Toeplitz};

/// How the denominator system is solved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SolveStrategy {
    /// Levinson recursion on the Toeplitz generators, `O(N^2)`
    ///
    /// Refactors with partial pivoting when the recursion breaks down, so it
    /// succeeds for every nonsingular system the direct path can solve.
    #[default]
    Structured,
    /// Dense `N x N` assembly and LU solve, `O(N^3)`
    Direct,
}

impl SolveStrategy {
    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "structured" | "toeplitz" => Some(SolveStrategy::Structured),
            "direct" | "dense" => Some(SolveStrategy::Direct),
            _ => None,
        }
    }
}

/// Numerator and denominator coefficients, ascending powers of `z`
#[derive(Debug, Clone, PartialEq)]
pub struct PadeCoefficients<T = f64> {
    /// Numerator coefficients, length `N + 1`
    pub a: Array1<T>,
    /// Denominator coefficients, length `N + 1`, `b[0] == 1`
    pub b: Array1<T>,
}

impl<T: Sample> PadeSeries<T> {
    /// Solve for the Padé coefficients
    ///
    /// The series itself is left untouched, so a failed build can be retried
    /// with the other strategy.
    pub fn build(&self, strategy: SolveStrategy) -> Result<PadeApproximant<T>> {
        let coefficients = solve_coefficients(self, strategy)?;
        Ok(PadeApproximant::new(self.clone(), coefficients, strategy))
    }
}

/// Solve the denominator system and form the numerator
pub(crate) fn solve_coefficients<T: Sample>(
    series: &PadeSeries<T>,
    strategy: SolveStrategy,
) -> Result<PadeCoefficients<T>> {
    let n = series.n();
    let c = series.c();

    let d = series.tail();
    if d.len() != n {
        return Err(PadeError::DimensionMismatch {
            expected: n,
            got: d.len(),
        });
    }

    debug!("Solving Padé system: N = {}, strategy = {:?}", n, strategy);

    let b_tail = match strategy {
        SolveStrategy::Structured => solve_structured(c, n, &d),
        SolveStrategy::Direct => solve_direct(c, n, &d),
    }
    .map_err(|reason| PadeError::SingularSystem { strategy, reason })?;

    let mut b = Array1::from_elem(n + 1, T::one());
    b.slice_mut(s![1..]).assign(&b_tail);

    let a = match strategy {
        SolveStrategy::Structured => numerator_triangular(c.slice(s![..=n]), b.view()),
        SolveStrategy::Direct => numerator_direct(c.slice(s![..=n]), b.view()),
    };

    debug!("Padé system solved: {} numerator, {} denominator coefficients", a.len(), b.len());

    Ok(PadeCoefficients { a, b })
}

/// Toeplitz generators of `G`: first column `c[N..2N]`, first row `c[N], c[N-1], ..., c[1]`
fn denominator_toeplitz<T: Sample>(c: &Array1<T>, n: usize) -> Result<Toeplitz<T>, &'static str> {
    let column = c.slice(s![n..2 * n]).to_owned();
    let row = c.slice(s![1..=n; -1]).to_owned();
    Toeplitz::new(column, row)
}

fn solve_structured<T: Sample>(
    c: &Array1<T>,
    n: usize,
    d: &Array1<T>,
) -> Result<Array1<T>, &'static str> {
    denominator_toeplitz(c, n)?.solve(d)
}

fn solve_direct<T: Sample>(
    c: &Array1<T>,
    n: usize,
    d: &Array1<T>,
) -> Result<Array1<T>, &'static str> {
    let g = Array2::from_shape_fn((n, n), |(k, m)| c[n - m + k]);
    linalg::solve(&g, d)
}

/// Numerator as a lower-triangular Toeplitz product `tril(toeplitz(c[0..=N])) * b`
pub fn numerator_triangular<T: Sample>(c: ArrayView1<'_, T>, b: ArrayView1<'_, T>) -> Array1<T> {
    lower_triangular_matvec(c, b)
}

/// Numerator by the explicit double sum `a[k] = sum_{m=0..=k} b[m] * c[k - m]`
pub fn numerator_direct<T: Sample>(c: ArrayView1<'_, T>, b: ArrayView1<'_, T>) -> Array1<T> {
    let len = c.len().min(b.len());
    let mut a = Array1::from_elem(len, T::zero());
    for k in 0..len {
        for m in 0..=k {
            a[k] += b[m] * c[k - m];
        }
    }
    a
}
