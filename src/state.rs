use std::fmt::{self, Display};

use smallvec::SmallVec;

use crate::grid::Grid;

/// Direction the blank travels in a single move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// Every move, in the order successors are generated.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    pub fn delta(self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }

    pub fn opposite(self) -> Move {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }

    /// The move that turns `from` into `to`, if they are one slide apart.
    pub fn between(from: &Grid, to: &Grid) -> Option<Move> {
        if from.dim() != to.dim() {
            return None;
        }
        let (r0, c0) = from.blank();
        let (r1, c1) = to.blank();
        let delta = (r1 as isize - r0 as isize, c1 as isize - c0 as isize);
        let m = Move::ALL.into_iter().find(|m| m.delta() == delta)?;
        (from.with_blank_at(to.blank_index()) == *to).then_some(m)
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Move::Up => "Up",
            Move::Down => "Down",
            Move::Left => "Left",
            Move::Right => "Right",
        };
        f.write_str(s)
    }
}

/// An immutable puzzle configuration. Two states are equal when their tiles
/// are; path cost is tracked by the search node that owns the state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct State {
    grid: Grid,
}

impl State {
    pub fn new(grid: Grid) -> State {
        State { grid }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// The state reached by sliding the blank one step, or `None` if that
    /// would leave the grid.
    pub fn apply(&self, m: Move) -> Option<State> {
        let dim = self.grid.dim() as isize;
        let (row, col) = self.grid.blank();
        let (dr, dc) = m.delta();
        let (r, c) = (row as isize + dr, col as isize + dc);
        if r < 0 || r >= dim || c < 0 || c >= dim {
            return None;
        }

        let target = (r * dim + c) as usize;
        Some(State {
            grid: self.grid.with_blank_at(target),
        })
    }

    /// Neighbouring states with their unit move cost, in [`Move::ALL`] order.
    pub fn successors(&self) -> impl Iterator<Item = (Move, State, u32)> + '_ {
        let legal: SmallVec<[Move; 4]> = Move::ALL
            .into_iter()
            .filter(|&m| self.legal(m))
            .collect();

        legal.into_iter().filter_map(move |m| self.apply(m).map(|s| (m, s, 1)))
    }

    fn legal(&self, m: Move) -> bool {
        let last = self.grid.dim() - 1;
        let (row, col) = self.grid.blank();
        match m {
            Move::Up => row > 0,
            Move::Down => row < last,
            Move::Left => col > 0,
            Move::Right => col < last,
        }
    }
}

impl From<Grid> for State {
    fn from(grid: Grid) -> Self {
        State::new(grid)
    }
}

impl Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.grid, f)
    }
}
