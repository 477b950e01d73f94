#![no_main]

extern crate arbitrary;
extern crate eigenrank;
extern crate libfuzzer_sys;

use eigenrank::analysis::AnalysisBuilder;
use eigenrank::core::Match;
use eigenrank::export::OutputMode;
use eigenrank::rank::{SelectionStrategy, ZeroGamePolicy, is_sign_consistent};

use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, arbitrary::Arbitrary)]
struct Input {
    pub matches: Vec<Match>,
    pub dominant: bool,
    pub rescale: bool,
}

fuzz_target!(|input: Input| {
    // Keep the eigen solve small enough to stay fast.
    if input.matches.len() > 64 {
        return;
    }
    let strategy = if input.dominant {
        SelectionStrategy::DominantEigenvalue
    } else {
        SelectionStrategy::FirstConsistent
    };
    let analysis = AnalysisBuilder::new()
        .matches(input.matches)
        .strategy(strategy)
        .zero_game_policy(ZeroGamePolicy::Undefined)
        .rescale(input.rescale)
        .build()
        .unwrap();

    let Ok(result) = analysis.run() else {
        return;
    };

    let matrix = result.matrix();
    assert_eq!(result.players().len(), matrix.size());
    for i in 0..matrix.size() {
        assert_eq!(0.0, matrix.get(i, i));
    }

    if let Ok(ranks) = result.ranks() {
        assert_eq!(matrix.size(), ranks.len());
        if !input.rescale {
            let raw: Vec<f64> = ranks
                .iter()
                .enumerate()
                .filter(|(_, r)| !r.is_nan())
                .map(|(i, r)| r * matrix.total_games(i))
                .collect();
            assert!(is_sign_consistent(&raw, 1.0));
        }
        if let Some((min, max)) = ranks.bounds() {
            assert!(min <= max);
        }

        for i in 0..ranks.len() {
            let p = ranks.position(i);
            assert!((0.0..=1.0).contains(&p));
        }

        let mut out = Vec::new();
        result.render(OutputMode::Graph, &mut out).unwrap();
    }
});
