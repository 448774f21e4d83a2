//! Error types for grid validation and search.
//!
//! Grid problems are reported before a search starts. A search that runs to
//! completion without reaching the goal is reported as [`SearchError::Unsolvable`]
//! (or [`SearchError::BudgetExceeded`] when an expansion limit was configured),
//! carrying the counters collected up to that point.

use std::fmt;

use crate::search::Stats;

/// Reasons a grid, or a start/goal pair, is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// No rows or no numbers were supplied.
    Empty,
    /// The dimension does not fit the `u8` tile encoding.
    TooLarge { dim: usize },
    /// A row's length differs from the number of rows.
    NotSquare { rows: usize, row: usize, len: usize },
    /// A flat cell list does not hold `dim * dim` values.
    CellCount { dim: usize, found: usize },
    /// A tile value outside `0..dim * dim`.
    ValueOutOfRange { value: u8, max: usize },
    /// The same tile value appears more than once.
    DuplicateValue { value: u8 },
    /// A token that is not a tile number.
    Parse { token: String },
    /// Start and goal grids have different dimensions.
    DimensionMismatch { start: usize, goal: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid is empty"),
            Self::TooLarge { dim } => write!(f, "grid dimension {dim} is too large"),
            Self::NotSquare { rows, row, len } => {
                write!(f, "row {row} has {len} cells but the grid has {rows} rows")
            }
            Self::CellCount { dim, found } => {
                write!(f, "expected {} cells for a {dim}x{dim} grid, found {found}", dim * dim)
            }
            Self::ValueOutOfRange { value, max } => {
                write!(f, "tile value {value} is out of range (0..={max})")
            }
            Self::DuplicateValue { value } => write!(f, "tile value {value} appears more than once"),
            Self::Parse { token } => write!(f, "`{token}` is not a tile number"),
            Self::DimensionMismatch { start, goal } => write!(
                f,
                "start grid is {start}x{start} but goal grid is {goal}x{goal}"
            ),
        }
    }
}

impl std::error::Error for GridError {}

/// Failure outcome of a search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The start or goal grid was rejected before searching.
    InvalidInput(GridError),
    /// The frontier ran dry without reaching the goal.
    Unsolvable(Stats),
    /// The configured expansion limit was hit before reaching the goal.
    BudgetExceeded(Stats),
}

impl SearchError {
    /// Counters gathered before the search gave up, if it started at all.
    #[must_use]
    pub fn stats(&self) -> Option<&Stats> {
        match self {
            Self::InvalidInput(_) => None,
            Self::Unsolvable(stats) | Self::BudgetExceeded(stats) => Some(stats),
        }
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(err) => write!(f, "invalid input: {err}"),
            Self::Unsolvable(stats) => write!(
                f,
                "no solution exists (expanded {} states)",
                stats.nodes_expanded
            ),
            Self::BudgetExceeded(stats) => write!(
                f,
                "gave up after expanding {} states",
                stats.nodes_expanded
            ),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidInput(err) => Some(err),
            _ => None,
        }
    }
}

impl From<GridError> for SearchError {
    fn from(err: GridError) -> Self {
        Self::InvalidInput(err)
    }
}
