//! Eigen decomposition of a match matrix.
//!
//! Ranking only needs "give me the eigenpairs of this square matrix" so it is
//! written against the [`EigenSolver`] trait. [`SchurEigenSolver`] is the
//! default implementation, built on nalgebra.

use nalgebra::DMatrix;
use thiserror::Error;

mod schur;
pub use self::schur::SchurEigenSolver;

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum EigenError {
    #[error("Eigen decomposition needs a square matrix, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("Eigen decomposition failed to converge")]
    DidNotConverge,
}

/// An eigenvalue and its eigenvector. Vector components line up with
/// player ids.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EigenPair {
    pub value: f64,
    pub vector: Vec<f64>,
}

impl EigenPair {
    pub fn new(value: f64, vector: Vec<f64>) -> Self {
        Self { value, vector }
    }
}

/// The eigenpairs of a matrix in the order the solver produced them.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Decomposition {
    pairs: Vec<EigenPair>,
    /// How many eigenvalues had a non zero imaginary part and were left out.
    dropped_complex: usize,
}

impl Decomposition {
    pub fn new(pairs: Vec<EigenPair>) -> Self {
        Self {
            pairs,
            dropped_complex: 0,
        }
    }

    pub fn with_dropped_complex(mut self, dropped_complex: usize) -> Self {
        self.dropped_complex = dropped_complex;
        self
    }

    pub fn pairs(&self) -> &[EigenPair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn dropped_complex(&self) -> usize {
        self.dropped_complex
    }

    pub fn values(&self) -> Vec<f64> {
        self.pairs.iter().map(|p| p.value).collect()
    }

    /// Eigenvectors as the columns of an `n x k` matrix. A vector shorter
    /// than the longest one is padded with NaN.
    pub fn vector_matrix(&self) -> DMatrix<f64> {
        let rows = self.pairs.iter().map(|p| p.vector.len()).max().unwrap_or(0);
        DMatrix::from_fn(rows, self.pairs.len(), |i, j| {
            self.pairs[j].vector.get(i).copied().unwrap_or(f64::NAN)
        })
    }

    /// Eigenvalues on the diagonal of a `k x k` matrix.
    pub fn value_matrix(&self) -> DMatrix<f64> {
        let k = self.pairs.len();
        DMatrix::from_fn(k, k, |i, j| if i == j { self.pairs[i].value } else { 0.0 })
    }
}

/// Something that can find the real eigenpairs of a square matrix.
pub trait EigenSolver {
    /// Decompose `matrix`. `tolerance` is the numerical tolerance the solver
    /// should work to.
    fn decompose(&self, matrix: &DMatrix<f64>, tolerance: f64) -> Result<Decomposition, EigenError>;
}

impl<S: EigenSolver + ?Sized> EigenSolver for &S {
    fn decompose(&self, matrix: &DMatrix<f64>, tolerance: f64) -> Result<Decomposition, EigenError> {
        (**self).decompose(matrix, tolerance)
    }
}

impl<S: EigenSolver + ?Sized> EigenSolver for Box<S> {
    fn decompose(&self, matrix: &DMatrix<f64>, tolerance: f64) -> Result<Decomposition, EigenError> {
        (**self).decompose(matrix, tolerance)
    }
}
