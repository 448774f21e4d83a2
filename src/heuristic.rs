//! Remaining-cost estimates for A*.
//!
//! Both strategies ignore the blank: it is not a tile, and counting it would
//! let the estimate exceed the true number of moves (a grid one slide from the
//! goal would score 2 under misplaced tiles). With the blank excluded both are
//! admissible and consistent, so the first expansion of any state is optimal.

use std::{fmt, str::FromStr};

use auto_enums::auto_enum;
use itertools::Itertools;

use crate::{grid::BLANK, state::State};

/// Strategy used to estimate the distance to the goal. Chosen once per run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Heuristic {
    /// Number of tiles not on their goal cell.
    #[default]
    MisplacedTiles,
    /// Sum of each tile's row and column offset from its goal cell.
    Manhattan,
}

/// A goal state with the goal cell of every tile precomputed.
#[derive(Debug, Clone)]
pub struct Goal {
    state: State,
    positions: Vec<(usize, usize)>,
}

impl Goal {
    pub fn new(state: State) -> Goal {
        let grid = state.grid();
        let mut positions = vec![(0, 0); grid.cells().len()];
        for (ix, &value) in grid.cells().iter().enumerate() {
            positions[value as usize] = grid.coords(ix);
        }
        Goal { state, positions }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn is_reached_by(&self, state: &State) -> bool {
        &self.state == state
    }
}

impl Heuristic {
    pub fn evaluate(self, state: &State, goal: &Goal) -> u32 {
        self.tile_costs(state, goal).sum()
    }

    #[auto_enum(Iterator)]
    fn tile_costs<'a>(self, state: &'a State, goal: &'a Goal) -> impl Iterator<Item = u32> + 'a {
        let cells = state.grid().cells();
        match self {
            Heuristic::MisplacedTiles => cells
                .iter()
                .zip_eq(goal.state.grid().cells())
                .filter(|&(&s, &g)| s != BLANK && s != g)
                .map(|_| 1u32),
            Heuristic::Manhattan => {
                let dim = state.grid().dim();
                cells
                    .iter()
                    .enumerate()
                    .filter(|&(_, &v)| v != BLANK)
                    .map(move |(ix, &v)| {
                        let (row, col) = goal.positions[v as usize];
                        ((ix / dim).abs_diff(row) + (ix % dim).abs_diff(col)) as u32
                    })
            }
        }
    }
}

/// One-off estimate of `state` against a goal state. Searches should build a
/// [`Goal`] once and call [`Heuristic::evaluate`] instead.
pub fn heuristic(state: &State, goal: &State, strategy: Heuristic) -> u32 {
    strategy.evaluate(state, &Goal::new(goal.clone()))
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Heuristic::MisplacedTiles => f.write_str("misplaced"),
            Heuristic::Manhattan => f.write_str("manhattan"),
        }
    }
}

impl FromStr for Heuristic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "misplaced" | "misplaced-tiles" | "hamming" => Ok(Heuristic::MisplacedTiles),
            "manhattan" => Ok(Heuristic::Manhattan),
            other => Err(format!(
                "unknown heuristic `{other}` (expected `misplaced` or `manhattan`)"
            )),
        }
    }
}
