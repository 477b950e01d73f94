use nalgebra::DMatrix;
use nalgebra::linalg::Schur;
use tracing::{debug, trace};

use super::{Decomposition, EigenError, EigenPair, EigenSolver};

/// Relative gap under which two eigenvalues are treated as the same root.
const REPEATED_ROOT_GAP: f64 = 1e-6;
/// Singular values below `NULL_SPACE_SCALE * max(1, ||A||)` count as zero.
const NULL_SPACE_SCALE: f64 = 1e-8;
/// For a singular matrix, eigenvalues within `ZERO_ROOT_SCALE * max(1, ||A||)`
/// of zero are the zero root smeared out by a defective (Jordan) block.
const ZERO_ROOT_SCALE: f64 = 1e-4;

/// Finds eigenvalues with a real Schur decomposition and eigenvectors as the
/// null space of `A - λI`.
///
/// Only real eigenpairs are returned. Complex conjugate pairs can't encode a
/// real valued ranking and are counted in
/// [`Decomposition::dropped_complex`] instead. The order of the pairs follows
/// the diagonal of the Schur form. Each vector has unit length and any
/// component smaller than the tolerance is set to exactly zero.
///
/// Acyclic tournaments give nilpotent matrices whose zero root the Schur
/// iteration only finds to about `sqrt(eps)`. When the matrix is singular,
/// eigenvalues that close to zero are reported as exactly `0.0` so the
/// vectors don't depend on the order the matches were listed in.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchurEigenSolver;

impl SchurEigenSolver {
    pub fn new() -> Self {
        Self
    }

    /// The right singular vector of `A - λI` for the `occurrence`-th
    /// smallest singular value. Repeated roots with a bigger null space get
    /// distinct vectors, defective ones fall back to the smallest.
    fn null_vector(
        matrix: &DMatrix<f64>,
        value: f64,
        occurrence: usize,
        null_tol: f64,
    ) -> Result<Vec<f64>, EigenError> {
        let n = matrix.nrows();
        let shifted = matrix - DMatrix::<f64>::identity(n, n) * value;
        let svd = shifted
            .try_svd(false, true, f64::EPSILON, 0)
            .ok_or(EigenError::DidNotConverge)?;
        let v_t = svd.v_t.ok_or(EigenError::DidNotConverge)?;

        let mut order: Vec<usize> = (0..svd.singular_values.len()).collect();
        order.sort_by(|&a, &b| svd.singular_values[a].total_cmp(&svd.singular_values[b]));

        let idx = match order.get(occurrence) {
            Some(&i) if svd.singular_values[i] <= null_tol => i,
            _ => order[0],
        };
        trace!(
            value,
            occurrence,
            singular_value = svd.singular_values[idx],
            "Picked null space vector"
        );
        Ok(v_t.row(idx).iter().copied().collect())
    }

    /// Whether `matrix` has a singular value at or below `null_tol`.
    fn is_singular(matrix: &DMatrix<f64>, null_tol: f64) -> Result<bool, EigenError> {
        let svd = matrix
            .clone()
            .try_svd(false, false, f64::EPSILON, 0)
            .ok_or(EigenError::DidNotConverge)?;
        Ok(svd.singular_values.iter().any(|&s| s <= null_tol))
    }
}

impl EigenSolver for SchurEigenSolver {
    fn decompose(&self, matrix: &DMatrix<f64>, tolerance: f64) -> Result<Decomposition, EigenError> {
        let (rows, cols) = matrix.shape();
        if rows != cols {
            return Err(EigenError::NotSquare { rows, cols });
        }
        if rows == 0 {
            return Ok(Decomposition::default());
        }

        let schur = Schur::try_new(matrix.clone(), tolerance, 0).ok_or(EigenError::DidNotConverge)?;
        let eigenvalues = schur.complex_eigenvalues();
        let scale = matrix.norm().max(1.0);
        let null_tol = NULL_SPACE_SCALE * scale;
        let zero_gap = if Self::is_singular(matrix, null_tol)? {
            ZERO_ROOT_SCALE * scale
        } else {
            0.0
        };

        let mut pairs: Vec<EigenPair> = Vec::with_capacity(rows);
        let mut dropped = 0;
        for ev in eigenvalues.iter() {
            let value = if ev.norm() <= zero_gap {
                0.0
            } else if ev.im.abs() > tolerance {
                dropped += 1;
                continue;
            } else {
                ev.re
            };
            let gap = REPEATED_ROOT_GAP * value.abs().max(1.0);
            let occurrence = pairs
                .iter()
                .filter(|p| (p.value - value).abs() <= gap)
                .count();

            let mut vector = Self::null_vector(matrix, value, occurrence, null_tol)?;
            for c in vector.iter_mut() {
                if c.abs() < tolerance {
                    *c = 0.0;
                }
            }
            pairs.push(EigenPair::new(value, vector));
        }

        if dropped > 0 {
            debug!(dropped, "Dropped complex eigenvalues");
        }
        debug!(size = rows, real_pairs = pairs.len(), "Eigen decomposition done");
        Ok(Decomposition::new(pairs).with_dropped_complex(dropped))
    }
}
