use std::{
    fmt::{self, Display},
    hash::{Hash, Hasher},
    ops::Index,
};

use itertools::Itertools;

use crate::error::GridError;

/// The tile value that marks the blank cell.
pub const BLANK: u8 = 0;

/// Largest supported side length; `MAX_DIM * MAX_DIM` values must fit in a `u8`.
pub const MAX_DIM: usize = 16;

/// A square grid of tiles stored row-major, with exactly one [`BLANK`].
///
/// Construction validates that the cells are a permutation of `0..dim * dim`,
/// so everything downstream can treat the grid as well-formed.
#[derive(Clone, Debug)]
pub struct Grid {
    dim: usize,
    cells: Vec<u8>,
    blank: usize,
}

impl Grid {
    pub fn new(rows: Vec<Vec<u8>>) -> Result<Grid, GridError> {
        let dim = rows.len();
        if let Some((row, cells)) = rows.iter().enumerate().find(|(_, r)| r.len() != dim) {
            return Err(GridError::NotSquare {
                rows: dim,
                row,
                len: cells.len(),
            });
        }

        Grid::from_cells(dim, rows.into_iter().flatten().collect())
    }

    pub fn from_cells(dim: usize, cells: Vec<u8>) -> Result<Grid, GridError> {
        if dim == 0 {
            return Err(GridError::Empty);
        }
        if dim > MAX_DIM {
            return Err(GridError::TooLarge { dim });
        }
        if cells.len() != dim * dim {
            return Err(GridError::CellCount {
                dim,
                found: cells.len(),
            });
        }

        // with the length fixed, in-range and no duplicates means every value is present
        let mut seen = [false; MAX_DIM * MAX_DIM];
        for &value in &cells {
            let slot = seen
                .get_mut(value as usize)
                .filter(|_| (value as usize) < dim * dim)
                .ok_or(GridError::ValueOutOfRange {
                    value,
                    max: dim * dim - 1,
                })?;
            if *slot {
                return Err(GridError::DuplicateValue { value });
            }
            *slot = true;
        }

        let blank = cells
            .iter()
            .position(|&c| c == BLANK)
            .ok_or(GridError::Empty)?;

        Ok(Grid { dim, cells, blank })
    }

    /// The canonical goal: tiles `1..dim * dim` in reading order, blank last.
    pub fn ordered(dim: usize) -> Result<Grid, GridError> {
        let count = dim * dim;
        let cells = (1..count).chain(std::iter::once(0)).map(|v| v as u8).collect();
        Grid::from_cells(dim, cells)
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Row and column of the blank.
    pub fn blank(&self) -> (usize, usize) {
        self.coords(self.blank)
    }

    pub(crate) fn blank_index(&self) -> usize {
        self.blank
    }

    /// Row and column of `value`, if it is a tile of this grid.
    pub fn position_of(&self, value: u8) -> Option<(usize, usize)> {
        self.cells
            .iter()
            .position(|&c| c == value)
            .map(|ix| self.coords(ix))
    }

    pub fn rows(&self) -> Vec<Vec<u8>> {
        self.cells.chunks(self.dim).map(<[u8]>::to_vec).collect()
    }

    pub(crate) fn coords(&self, ix: usize) -> (usize, usize) {
        (ix / self.dim, ix % self.dim)
    }

    /// A copy of this grid with the blank moved to `target`.
    pub(crate) fn with_blank_at(&self, target: usize) -> Grid {
        let mut cells = self.cells.clone();
        cells.swap(self.blank, target);
        Grid {
            dim: self.dim,
            cells,
            blank: target,
        }
    }

    /// Whether the blank can be slid from this grid to `goal`.
    ///
    /// Every move swaps the blank with a neighbour, flipping the permutation
    /// parity and the parity of the blank's taxicab offset together. A pair is
    /// reachable exactly when both parities agree.
    pub fn is_solvable_to(&self, goal: &Grid) -> Result<bool, GridError> {
        check_pair(self, goal)?;

        let mut goal_index = vec![0usize; self.cells.len()];
        for (ix, &value) in goal.cells.iter().enumerate() {
            goal_index[value as usize] = ix;
        }

        // permutation parity via cycle count
        let mut visited = vec![false; self.cells.len()];
        let mut cycles = 0;
        for start in 0..self.cells.len() {
            if visited[start] {
                continue;
            }
            cycles += 1;
            let mut ix = start;
            while !visited[ix] {
                visited[ix] = true;
                ix = goal_index[self.cells[ix] as usize];
            }
        }
        let permutation_odd = (self.cells.len() - cycles) % 2 == 1;

        let (r0, c0) = self.blank();
        let (r1, c1) = goal.blank();
        let blank_odd = (r0.abs_diff(r1) + c0.abs_diff(c1)) % 2 == 1;

        Ok(permutation_odd == blank_odd)
    }
}

/// Rejects start/goal pairs of different sizes.
pub fn check_pair(start: &Grid, goal: &Grid) -> Result<(), GridError> {
    if start.dim != goal.dim {
        return Err(GridError::DimensionMismatch {
            start: start.dim,
            goal: goal.dim,
        });
    }
    Ok(())
}

// equality is over the tiles only; dim and blank follow from them
impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}

impl Eq for Grid {}

impl Hash for Grid {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.cells.hash(state);
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.cells.len() - 1).to_string().len();
        let lines = self.cells.chunks(self.dim).map(|line| {
            line.iter()
                .map(|c| format!("{c:>width$}"))
                .join(" ")
        });
        write!(f, "{}", lines.format("\n"))
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = u8;
    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.cells[index.0 * self.dim + index.1]
    }
}

fn tokens(s: &str) -> Result<Vec<u8>, GridError> {
    s.split(|c: char| c.is_whitespace() || matches!(c, ',' | '[' | ']'))
        .filter(|t| !t.is_empty())
        .map(|t| {
            t.parse::<u8>().map_err(|_| GridError::Parse {
                token: t.to_string(),
            })
        })
        .collect()
}

fn side_for(count: usize) -> Result<usize, GridError> {
    if count == 0 {
        return Err(GridError::Empty);
    }
    (1..=MAX_DIM).find(|d| d * d == count).ok_or_else(|| {
        let dim = (1..=MAX_DIM).take_while(|d| d * d < count).last().unwrap_or(1);
        GridError::CellCount { dim, found: count }
    })
}

/// Parses a single grid from numbers separated by whitespace, commas, or
/// brackets. The number count decides the side length, so `1 2 3 4 0 5 6 7 8`
/// and `[[1,2,3],[4,0,5],[6,7,8]]` are the same 3x3 grid.
pub fn parse_grid(s: &str) -> Result<Grid, GridError> {
    let values = tokens(s)?;
    let dim = side_for(values.len())?;
    Grid::from_cells(dim, values)
}

/// Parses a start grid followed by a goal grid of the same size, in the format
/// accepted by [`parse_grid`].
pub fn parse_pair(s: &str) -> Result<(Grid, Grid), GridError> {
    let mut values = tokens(s)?;
    if values.len() % 2 != 0 {
        return Err(GridError::CellCount {
            dim: side_for(values.len() / 2).unwrap_or(0),
            found: values.len(),
        });
    }
    let goal = values.split_off(values.len() / 2);
    let dim = side_for(goal.len())?;
    let start = Grid::from_cells(dim, values)?;
    let goal = Grid::from_cells(dim, goal)?;
    Ok((start, goal))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rejects_malformed_grids() {
        assert_eq!(Grid::new(vec![]), Err(GridError::Empty));
        assert_eq!(
            Grid::new(vec![vec![1, 2], vec![0]]),
            Err(GridError::NotSquare {
                rows: 2,
                row: 1,
                len: 1
            })
        );
        assert_eq!(
            Grid::new(vec![vec![1, 2], vec![3, 4]]),
            Err(GridError::ValueOutOfRange { value: 4, max: 3 })
        );
        assert_eq!(
            Grid::new(vec![vec![1, 1], vec![0, 2]]),
            Err(GridError::DuplicateValue { value: 1 })
        );
        assert_eq!(
            Grid::from_cells(17, vec![0; 289]),
            Err(GridError::TooLarge { dim: 17 })
        );
    }

    #[test]
    fn parses_flat_and_nested() {
        let flat = parse_grid("1 2 3\n4 0 6\n7 5 8").unwrap();
        let nested = parse_grid("[[1,2,3],[4,0,6],[7,5,8]]").unwrap();
        assert_eq!(flat, nested);
        assert_eq!(flat.dim(), 3);
        assert_eq!(flat.blank(), (1, 1));
        assert_eq!(flat[(2, 1)], 5);
        assert_eq!(flat.position_of(8), Some((2, 2)));
        assert_eq!(flat.rows()[1], vec![4, 0, 6]);
    }

    #[test]
    fn parse_reports_bad_tokens_and_counts() {
        assert_eq!(
            parse_grid("1 2 x 0"),
            Err(GridError::Parse {
                token: "x".to_string()
            })
        );
        assert!(matches!(
            parse_grid("1 2 3 0 4"),
            Err(GridError::CellCount { found: 5, .. })
        ));
        assert_eq!(parse_grid("  \n"), Err(GridError::Empty));
    }

    #[test]
    fn parses_start_and_goal_together() {
        let (start, goal) = parse_pair("1 2 3 4 0 6 7 5 8\n1 2 3 4 5 6 7 8 0").unwrap();
        assert_eq!(start.blank(), (1, 1));
        assert_eq!(goal, Grid::ordered(3).unwrap());
    }

    #[test]
    fn mismatched_pair_is_rejected() {
        let small = Grid::ordered(2).unwrap();
        let big = Grid::ordered(3).unwrap();
        assert_eq!(
            small.is_solvable_to(&big),
            Err(GridError::DimensionMismatch { start: 2, goal: 3 })
        );
    }

    #[test]
    fn solvability_parity() {
        let goal = Grid::ordered(3).unwrap();
        let near = parse_grid("1 2 3 4 0 6 7 5 8").unwrap();
        let swapped = parse_grid("1 2 3 4 5 6 8 7 0").unwrap();
        assert_eq!(near.is_solvable_to(&goal), Ok(true));
        assert_eq!(swapped.is_solvable_to(&goal), Ok(false));

        let goal4 = Grid::ordered(4).unwrap();
        let slid = goal4.with_blank_at(14);
        assert_eq!(slid.is_solvable_to(&goal4), Ok(true));
        let mut cells = goal4.cells().to_vec();
        cells.swap(0, 1);
        let flipped = Grid::from_cells(4, cells).unwrap();
        assert_eq!(flipped.is_solvable_to(&goal4), Ok(false));
    }

    #[test]
    fn display_aligns_columns() {
        let grid = Grid::ordered(4).unwrap();
        let text = grid.to_string();
        assert_eq!(text.lines().next(), Some(" 1  2  3  4"));
        assert_eq!(text.lines().last(), Some("13 14 15  0"));
    }
}
