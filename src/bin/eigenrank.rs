use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgGroup, Parser};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use eigenrank::analysis::{AnalysisBuilder, Result};
use eigenrank::core::{Tournament, demo_tournament, read_matches};
use eigenrank::export::{EdgeDirection, ImageFormat, OutputMode, write_matrix, write_win_rates};
use eigenrank::rank::{SelectionStrategy, ZeroGamePolicy};

#[derive(Parser, Debug)]
#[command(
    name = "eigenrank",
    about = "Rank tournament players by eigenvector centrality",
    long_about = "Reads whitespace separated `winner loser` pairs from a file or stdin,\n\
                  builds the win count matrix and prints the sign-consistent eigenvector\n\
                  ranking, normalized by the number of games each player played."
)]
#[command(group(
    ArgGroup::new("mode")
        .args(["graph", "matrix", "winrates", "eigvect", "eigval", "json"])
        .multiple(false)
))]
struct Args {
    /// Print a Graphviz DOT script of the ranked tournament
    #[arg(long)]
    graph: bool,

    /// Print the win count matrix
    #[arg(long)]
    matrix: bool,

    /// Print the pairwise win rate matrix
    #[arg(long)]
    winrates: bool,

    /// Print the eigenvectors of the win count matrix
    #[arg(long)]
    eigvect: bool,

    /// Print the eigenvalues of the win count matrix
    #[arg(long)]
    eigval: bool,

    /// Print a JSON report of the ranking
    #[arg(long)]
    json: bool,

    /// Use the built in demo tournament instead of reading input
    #[arg(long)]
    demo: bool,

    /// Match log to read (defaults to stdin)
    #[arg(short = 'i', long = "input", conflicts_with = "demo")]
    input: Option<PathBuf>,

    /// Which sign-consistent eigenvector to use: first or dominant
    #[arg(long, default_value_t = SelectionStrategy::FirstConsistent)]
    strategy: SelectionStrategy,

    /// Numerical tolerance for the eigen solver
    #[arg(long, default_value_t = 1e-10)]
    tolerance: f64,

    /// Rescale ranks onto [0, 1]
    #[arg(long)]
    rescale: bool,

    /// Give players without games a NaN rank instead of failing
    #[arg(long)]
    allow_zero_games: bool,

    /// Graph edge direction: loser-to-winner or winner-to-loser
    #[arg(long)]
    edges: Option<EdgeDirection>,

    /// Render the graph with Graphviz into this image format
    #[arg(
        long,
        requires = "output",
        conflicts_with_all = ["matrix", "winrates", "eigvect", "eigval", "json"]
    )]
    render: Option<ImageFormat>,

    /// Where to write the rendered graph
    #[arg(short = 'o', long = "output", requires = "render")]
    output: Option<PathBuf>,
}

impl Args {
    fn mode(&self) -> OutputMode {
        if self.graph || self.render.is_some() {
            OutputMode::Graph
        } else if self.matrix {
            OutputMode::Matrix
        } else if self.winrates {
            OutputMode::WinRates
        } else if self.eigvect {
            OutputMode::Eigenvectors
        } else if self.eigval {
            OutputMode::Eigenvalues
        } else if self.json {
            OutputMode::Json
        } else {
            OutputMode::Ranks
        }
    }

    fn zero_game_policy(&self) -> ZeroGamePolicy {
        if self.allow_zero_games {
            ZeroGamePolicy::Undefined
        } else {
            ZeroGamePolicy::Reject
        }
    }
}

/// Logs go to stderr so they never mix with the ranking on stdout. Without
/// `RUST_LOG` only errors are shown, so a failed run prints just its one
/// diagnostic line.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(io::stderr))
        .init();
}

fn load_tournament(args: &Args) -> Result<Tournament> {
    if args.demo {
        return Ok(demo_tournament());
    }
    let tournament = match &args.input {
        Some(path) => read_matches(BufReader::new(File::open(path)?))?,
        None => read_matches(io::stdin().lock())?,
    };
    Ok(tournament)
}

fn run(args: Args) -> Result<()> {
    let mode = args.mode();
    let tournament = load_tournament(&args)?;
    info!(matches = tournament.len(), %mode, "Loaded tournament");

    let mut builder = AnalysisBuilder::new()
        .tournament(tournament)
        .tolerance(args.tolerance)
        .strategy(args.strategy)
        .zero_game_policy(args.zero_game_policy())
        .rescale(args.rescale);
    if let Some(direction) = args.edges {
        builder = builder.edge_direction(direction);
    }
    let analysis = builder.build()?;

    let mut out = BufWriter::new(io::stdout().lock());
    if !mode.needs_decomposition() {
        // Matrix dumps don't need the solver.
        let matrix = analysis.tournament().matrix();
        match mode {
            OutputMode::WinRates => write_win_rates(&mut out, &matrix.win_rates())?,
            _ => write_matrix(&mut out, &matrix)?,
        }
    } else {
        let result = analysis.run()?;
        if let (Some(format), Some(path)) = (args.render, args.output.as_ref()) {
            result.graph()?.export_to_image(path, format, true)?;
            info!(path = %path.display(), %format, "Rendered graph");
        } else {
            result.render(mode, &mut out)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("eigenrank: {e}");
            ExitCode::FAILURE
        }
    }
}
