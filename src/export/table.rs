use std::io::{self, Write};

use crate::eigen::Decomposition;
use crate::matrix::{MatchMatrix, WinRateMatrix};
use crate::rank::RankVector;

use super::format::{format_matrix, format_significant};

/// Significant digits for ranks in the ranked table and graph labels.
pub const RANK_DIGITS: usize = 2;
/// Significant digits for eigenvector, eigenvalue and win rate dumps.
pub const EIGEN_DIGITS: usize = 4;

/// One `name<TAB>rank` line per player, in player id order.
pub fn write_ranks<W: Write>(w: &mut W, players: &[String], ranks: &RankVector) -> io::Result<()> {
    for (name, rank) in players.iter().zip(ranks.iter()) {
        writeln!(w, "{}\t{}", name, format_significant(rank, RANK_DIGITS))?;
    }
    Ok(())
}

/// The raw win count matrix.
pub fn write_matrix<W: Write>(w: &mut W, matrix: &MatchMatrix) -> io::Result<()> {
    writeln!(
        w,
        "{}",
        format_matrix("tournmat = ", matrix.as_dmatrix(), |v| v.to_string())
    )
}

/// The pairwise win rate matrix.
pub fn write_win_rates<W: Write>(w: &mut W, rates: &WinRateMatrix) -> io::Result<()> {
    writeln!(
        w,
        "{}",
        format_matrix("winrates = ", rates.as_dmatrix(), |v| {
            format_significant(v, EIGEN_DIGITS)
        })
    )
}

/// Eigenvectors as columns, in solver order.
pub fn write_eigenvectors<W: Write>(w: &mut W, decomposition: &Decomposition) -> io::Result<()> {
    writeln!(
        w,
        "{}",
        format_matrix("eigvects = ", &decomposition.vector_matrix(), |v| {
            format_significant(v, EIGEN_DIGITS)
        })
    )
}

/// Eigenvalues on a diagonal, lined up with the eigenvector columns.
pub fn write_eigenvalues<W: Write>(w: &mut W, decomposition: &Decomposition) -> io::Result<()> {
    writeln!(
        w,
        "{}",
        format_matrix("eigvals = ", &decomposition.value_matrix(), |v| {
            format_significant(v, EIGEN_DIGITS)
        })
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Match, Tournament};
    use crate::eigen::EigenPair;

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_write_ranks() {
        let players = vec!["alice".to_string(), "bob".to_string(), "carol".to_string()];
        let ranks = RankVector::new(vec![0.5, 0.123, f64::NAN], 1.0, 0, 1.0);
        let out = render(|w| write_ranks(w, &players, &ranks));
        assert_eq!("alice\t0.5\nbob\t0.12\ncarol\tNaN\n", out);
    }

    #[test]
    fn test_write_matrix() {
        let tourn: Tournament = vec![Match::new("a", "b"), Match::new("a", "b")].into();
        let out = render(|w| write_matrix(w, &tourn.matrix()));
        assert_eq!("tournmat = ⎡0  2⎤\n           ⎣0  0⎦\n", out);
    }

    #[test]
    fn test_write_win_rates() {
        let tourn: Tournament = vec![
            Match::new("a", "b"),
            Match::new("a", "b"),
            Match::new("b", "a"),
        ]
        .into();
        let out = render(|w| write_win_rates(w, &tourn.matrix().win_rates()));
        assert_eq!("winrates = ⎡     0  0.6667⎤\n           ⎣0.3333       0⎦\n", out);
    }

    #[test]
    fn test_write_eigen() {
        let decomp = Decomposition::new(vec![
            EigenPair::new(2.0, vec![0.6, 0.8]),
            EigenPair::new(-0.5, vec![1.0, 0.0]),
        ]);
        let vects = render(|w| write_eigenvectors(w, &decomp));
        assert_eq!("eigvects = ⎡0.6  1⎤\n           ⎣0.8  0⎦\n", vects);
        let vals = render(|w| write_eigenvalues(w, &decomp));
        assert_eq!("eigvals = ⎡2     0⎤\n          ⎣0  -0.5⎦\n", vals);
    }
}
