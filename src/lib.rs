//! A* search for the N×N sliding-tile puzzle.
//!
//! ```
//! use tile_astar::{parse_grid, solve, Heuristic, SearchConfig};
//!
//! let start = parse_grid("1 2 3 4 0 6 7 5 8").unwrap();
//! let goal = parse_grid("1 2 3 4 5 6 7 8 0").unwrap();
//! let solution = solve(&start, &goal, SearchConfig::new(Heuristic::Manhattan)).unwrap();
//! assert_eq!(solution.cost, 2);
//! ```

pub mod config;
pub mod error;
pub mod explored;
pub mod frontier;
pub mod grid;
pub mod heuristic;
pub mod node;
pub mod search;
pub mod state;

pub use config::SearchConfig;
pub use error::{GridError, SearchError};
pub use grid::{parse_grid, parse_pair, Grid};
pub use heuristic::{heuristic, Goal, Heuristic};
pub use node::{Node, NodeId};
pub use search::{solve, Phase, Progress, Search, Solution, Stats};
pub use state::{Move, State};
