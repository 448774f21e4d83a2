use std::{fs, io::Read, path::PathBuf, process::ExitCode};

use anyhow::{bail, Context};
use clap::Parser;
use log::info;
use tile_astar::{parse_grid, parse_pair, solve, Grid, Heuristic, SearchConfig, SearchError};

/// Solve a sliding-tile puzzle with A* search.
///
/// Grids are lists of numbers with 0 as the blank, separated by spaces,
/// commas, brackets or newlines. Without --start/--goal, the start grid
/// followed by the goal grid is read from INPUT (or stdin).
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Heuristic: `misplaced` or `manhattan`
    #[clap(short = 'H', long, default_value_t = Heuristic::MisplacedTiles)]
    heuristic: Heuristic,

    /// Give up after this many expansions
    #[clap(short, long)]
    max_expansions: Option<u64>,

    /// Reject unsolvable pairs by parity before searching
    #[clap(long)]
    check_solvable: bool,

    /// Start grid, e.g. "1 2 3 4 0 6 7 5 8"
    #[clap(short, long, requires = "goal")]
    start: Option<String>,

    /// Goal grid, e.g. "1 2 3 4 5 6 7 8 0"
    #[clap(short, long, requires = "start")]
    goal: Option<String>,

    /// File holding the start grid then the goal grid
    input: Option<PathBuf>,
}

fn read_grids(args: &Args) -> anyhow::Result<(Grid, Grid)> {
    if let (Some(start), Some(goal)) = (&args.start, &args.goal) {
        let start = parse_grid(start).context("invalid start grid")?;
        let goal = parse_grid(goal).context("invalid goal grid")?;
        return Ok((start, goal));
    }

    let content = match &args.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            eprintln!("Enter the initial state, then the goal state");
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    Ok(parse_pair(&content)?)
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let (start, goal) = read_grids(&args)?;

    let mut config = SearchConfig::new(args.heuristic).with_solvability_check(args.check_solvable);
    if let Some(limit) = args.max_expansions {
        config = config.with_max_expansions(limit);
    }
    info!("solving {}x{} puzzle with {} heuristic", start.dim(), start.dim(), config.heuristic);

    match solve(&start, &goal, config) {
        Ok(solution) => {
            println!("*****************Best Path*****************");
            for grid in &solution.path {
                println!("{}", grid);
                println!();
            }
            println!("Found a solution in {} moves:", solution.cost);
            for (i, m) in solution.moves.iter().enumerate() {
                println!("  {:>3}. {}", i + 1, m);
            }
            println!("Number of nodes generated: {}", solution.stats.nodes_generated);
            println!("Number of nodes expanded: {}", solution.stats.nodes_expanded);
            Ok(ExitCode::SUCCESS)
        }
        Err(SearchError::InvalidInput(err)) => bail!(err),
        Err(err) => {
            println!("No solution found: {}", err);
            if let Some(stats) = err.stats() {
                println!("Number of nodes generated: {}", stats.nodes_generated);
                println!("Number of nodes expanded: {}", stats.nodes_expanded);
            }
            Ok(ExitCode::FAILURE)
        }
    }
}
