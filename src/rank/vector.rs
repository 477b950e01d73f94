/// Normalized per player scores, indexed by player id.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct RankVector {
    ranks: Vec<f64>,
    /// Eigenvalue of the accepted eigenvector
    eigenvalue: f64,
    /// Position of the accepted eigenvector in the decomposition
    eigenvector_index: usize,
    /// +1.0 or -1.0, the orientation applied to the eigenvector
    sense: f64,
}

impl RankVector {
    pub fn new(ranks: Vec<f64>, eigenvalue: f64, eigenvector_index: usize, sense: f64) -> Self {
        Self {
            ranks,
            eigenvalue,
            eigenvector_index,
            sense,
        }
    }

    pub fn ranks(&self) -> &[f64] {
        &self.ranks
    }

    pub fn get(&self, player: usize) -> f64 {
        self.ranks[player]
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.ranks.iter().copied()
    }

    pub fn eigenvalue(&self) -> f64 {
        self.eigenvalue
    }

    pub fn eigenvector_index(&self) -> usize {
        self.eigenvector_index
    }

    pub fn sense(&self) -> f64 {
        self.sense
    }

    /// Smallest and largest finite rank. `None` if no rank is finite.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        self.iter()
            .filter(|r| r.is_finite())
            .fold(None, |acc, r| match acc {
                None => Some((r, r)),
                Some((min, max)) => Some((min.min(r), max.max(r))),
            })
    }

    /// Where `player` sits between the lowest (0.0) and highest (1.0) rank.
    ///
    /// When every rank is equal there is no spread and everyone sits at 0.0.
    /// Players with an undefined rank also get 0.0.
    pub fn position(&self, player: usize) -> f64 {
        let rank = self.ranks[player];
        match self.bounds() {
            Some((min, max)) if rank.is_finite() && max > min => (rank - min) / (max - min),
            _ => 0.0,
        }
    }

    /// Player ids sorted from highest to lowest rank. Undefined ranks go last.
    pub fn order(&self) -> Vec<usize> {
        let mut ids: Vec<usize> = (0..self.ranks.len()).collect();
        ids.sort_by(|&a, &b| {
            let (ra, rb) = (self.ranks[a], self.ranks[b]);
            match (ra.is_nan(), rb.is_nan()) {
                (true, true) => std::cmp::Ordering::Equal,
                (true, false) => std::cmp::Ordering::Greater,
                (false, true) => std::cmp::Ordering::Less,
                (false, false) => rb.total_cmp(&ra),
            }
        });
        ids
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_bounds() {
        let ranks = RankVector::new(vec![0.5, 0.1, 0.9], 1.0, 0, 1.0);
        assert_eq!(Some((0.1, 0.9)), ranks.bounds());
    }

    #[test]
    fn test_bounds_skip_nan() {
        let ranks = RankVector::new(vec![0.5, f64::NAN, 0.2], 1.0, 0, 1.0);
        assert_eq!(Some((0.2, 0.5)), ranks.bounds());
        let ranks = RankVector::new(vec![f64::NAN], 1.0, 0, 1.0);
        assert_eq!(None, ranks.bounds());
    }

    #[test]
    fn test_position() {
        let ranks = RankVector::new(vec![0.5, 0.0, 1.0], 1.0, 0, 1.0);
        assert_relative_eq!(0.5, ranks.position(0));
        assert_relative_eq!(0.0, ranks.position(1));
        assert_relative_eq!(1.0, ranks.position(2));
    }

    #[test]
    fn test_position_no_spread() {
        let ranks = RankVector::new(vec![0.3, 0.3], 1.0, 0, 1.0);
        assert_eq!(0.0, ranks.position(0));
        assert_eq!(0.0, ranks.position(1));
    }

    #[test]
    fn test_order() {
        let ranks = RankVector::new(vec![0.2, f64::NAN, 0.9, 0.5], 1.0, 0, 1.0);
        assert_eq!(vec![2, 3, 0, 1], ranks.order());
    }
}
