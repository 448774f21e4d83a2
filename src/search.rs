//! The A* driver.
//!
//! A [`Search`] owns all mutable state for one run: the frontier, the explored
//! arena and the counters. Runs are independent of each other.
//!
//! ```text
//! Ready -> Expanding -> GoalFound
//!                    -> Exhausted       (frontier empty)
//!                    -> BudgetExceeded  (expansion limit hit)
//! ```

use log::{debug, trace};

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::explored::Explored;
use crate::frontier::Frontier;
use crate::grid::{check_pair, Grid};
use crate::heuristic::Goal;
use crate::node::Node;
use crate::state::{Move, State};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Ready,
    Expanding,
    GoalFound,
    Exhausted,
    BudgetExceeded,
}

impl Phase {
    pub fn is_finished(self) -> bool {
        matches!(
            self,
            Phase::GoalFound | Phase::Exhausted | Phase::BudgetExceeded
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    /// The start node plus every successor considered, duplicates included.
    pub nodes_generated: u64,
    /// Nodes taken off the frontier and closed; equals the explored set size.
    pub nodes_expanded: u64,
    /// Peak number of open entries.
    pub frontier_high_water: usize,
}

/// A shortest path from start to goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Grids from start to goal, both included.
    pub path: Vec<Grid>,
    /// Blank moves joining consecutive grids of `path`.
    pub moves: Vec<Move>,
    /// `g` of the goal node, i.e. `path.len() - 1`.
    pub cost: u32,
    pub stats: Stats,
}

/// Result of a single [`Search::step`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    /// One node was expanded; the search continues.
    Expanded,
    Finished(Result<Solution, SearchError>),
}

enum Termination {
    GoalFound(Node),
    Exhausted,
    BudgetExceeded,
}

pub struct Search {
    goal: Goal,
    config: SearchConfig,
    frontier: Frontier,
    explored: Explored,
    stats: Stats,
    phase: Phase,
    outcome: Option<Result<Solution, SearchError>>,
}

impl Search {
    /// Validates the pair and seeds the frontier with the start node.
    pub fn new(start: Grid, goal: Grid, config: SearchConfig) -> Result<Search, SearchError> {
        check_pair(&start, &goal)?;
        if config.precheck_solvability && !start.is_solvable_to(&goal)? {
            debug!("parity check rejected {}x{} pair", start.dim(), start.dim());
            return Err(SearchError::Unsolvable(Stats::default()));
        }

        let goal = Goal::new(State::new(goal));
        let start = State::new(start);
        let h = config.heuristic.evaluate(&start, &goal);
        debug!(
            "starting {} search on {}x{} grid, h(start) = {}",
            config.heuristic,
            start.grid().dim(),
            start.grid().dim(),
            h
        );

        let mut frontier = Frontier::new();
        frontier.insert(Node::root(start, h));

        Ok(Search {
            goal,
            config,
            frontier,
            explored: Explored::new(),
            stats: Stats {
                nodes_generated: 1,
                ..Stats::default()
            },
            phase: Phase::Ready,
            outcome: None,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn goal(&self) -> &Goal {
        &self.goal
    }

    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    pub fn explored(&self) -> &Explored {
        &self.explored
    }

    /// Counters as of now.
    pub fn stats(&self) -> Stats {
        Stats {
            nodes_expanded: self.explored.len() as u64,
            frontier_high_water: self.frontier.high_water(),
            ..self.stats
        }
    }

    /// Takes the best open node and either finishes on it or expands it.
    /// Once finished, every further call returns the same outcome.
    pub fn step(&mut self) -> Progress {
        if let Some(outcome) = &self.outcome {
            return Progress::Finished(outcome.clone());
        }
        self.phase = Phase::Expanding;

        let Some(current) = self.frontier.extract_min() else {
            return self.finish(Termination::Exhausted);
        };
        if self.goal.is_reached_by(&current.state) {
            return self.finish(Termination::GoalFound(current));
        }
        if let Some(limit) = self.config.max_expansions {
            if self.explored.len() as u64 >= limit {
                return self.finish(Termination::BudgetExceeded);
            }
        }

        let id = self.explored.insert(current);
        let current = self.explored.get(id);
        self.frontier.remove(&current.state);
        trace!(
            "expanding #{} g={} h={} f={}",
            id.index(),
            current.g,
            current.h,
            current.f()
        );

        for (_, child, cost) in current.state.successors() {
            self.stats.nodes_generated += 1;
            if self.explored.contains(&child) {
                continue;
            }
            let h = self.config.heuristic.evaluate(&child, &self.goal);
            self.frontier
                .insert(Node::child(child, id, current.g + cost, h));
        }

        Progress::Expanded
    }

    /// Steps until the search finishes.
    pub fn run(mut self) -> Result<Solution, SearchError> {
        loop {
            if let Progress::Finished(outcome) = self.step() {
                return outcome;
            }
        }
    }

    fn finish(&mut self, how: Termination) -> Progress {
        let (phase, outcome) = match how {
            Termination::GoalFound(node) => {
                // the goal node is closed like any other extracted node
                let path = self.explored.path_to(&node);
                let cost = node.g;
                self.explored.insert(node);
                let moves = path
                    .windows(2)
                    .filter_map(|w| Move::between(&w[0], &w[1]))
                    .collect();
                let solution = Solution {
                    path,
                    moves,
                    cost,
                    stats: self.stats(),
                };
                (Phase::GoalFound, Ok(solution))
            }
            Termination::Exhausted => (Phase::Exhausted, Err(SearchError::Unsolvable(self.stats()))),
            Termination::BudgetExceeded => (
                Phase::BudgetExceeded,
                Err(SearchError::BudgetExceeded(self.stats())),
            ),
        };

        let stats = self.stats();
        debug!(
            "search finished: {:?} (generated {}, expanded {}, peak frontier {})",
            phase, stats.nodes_generated, stats.nodes_expanded, stats.frontier_high_water
        );

        self.phase = phase;
        self.outcome = Some(outcome.clone());
        Progress::Finished(outcome)
    }
}

/// Runs a complete search from `start` to `goal`.
pub fn solve(start: &Grid, goal: &Grid, config: SearchConfig) -> Result<Solution, SearchError> {
    Search::new(start.clone(), goal.clone(), config)?.run()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::GridError;
    use crate::grid::parse_grid;
    use crate::heuristic::Heuristic;

    fn grid(s: &str) -> Grid {
        parse_grid(s).unwrap()
    }

    const GOAL: &str = "1 2 3 4 5 6 7 8 0";

    #[test_log::test]
    fn two_move_scenario() {
        for heuristic in [Heuristic::MisplacedTiles, Heuristic::Manhattan] {
            let solution = solve(
                &grid("1 2 3 4 0 6 7 5 8"),
                &grid(GOAL),
                SearchConfig::new(heuristic),
            )
            .unwrap();

            assert_eq!(solution.cost, 2);
            assert_eq!(solution.path.len(), 3);
            assert_eq!(solution.path[0], grid("1 2 3 4 0 6 7 5 8"));
            assert_eq!(solution.path[2], grid(GOAL));
            assert_eq!(solution.moves, vec![Move::Down, Move::Right]);
            assert!(solution.stats.nodes_expanded <= solution.stats.nodes_generated);
        }
    }

    #[test]
    fn start_equal_to_goal() {
        let solution = solve(&grid(GOAL), &grid(GOAL), SearchConfig::default()).unwrap();
        assert_eq!(solution.path, vec![grid(GOAL)]);
        assert!(solution.moves.is_empty());
        assert_eq!(solution.cost, 0);
        assert_eq!(solution.stats.nodes_expanded, 1);
        assert_eq!(solution.stats.nodes_generated, 1);
    }

    #[test]
    fn unsolvable_small_grid_exhausts_the_frontier() {
        // 2x2 has 12 reachable states from either parity class
        let mut search = Search::new(
            grid("2 1 3 0"),
            grid("1 2 3 0"),
            SearchConfig::default(),
        )
        .unwrap();
        let mut steps = 0;
        let outcome = loop {
            match search.step() {
                Progress::Expanded => steps += 1,
                Progress::Finished(outcome) => break outcome,
            }
        };

        let stats = match outcome {
            Err(SearchError::Unsolvable(stats)) => stats,
            other => panic!("expected Unsolvable, got {other:?}"),
        };
        assert_eq!(stats.nodes_expanded, 12);
        assert_eq!(steps, 12);
        assert_eq!(search.phase(), Phase::Exhausted);
        assert!(search.frontier().is_empty());
        assert_eq!(
            search.step(),
            Progress::Finished(Err(SearchError::Unsolvable(stats)))
        );
    }

    #[test]
    fn canonical_unsolvable_eight_puzzle() {
        let outcome = solve(
            &grid("1 2 3 4 5 6 8 7 0"),
            &grid(GOAL),
            SearchConfig::new(Heuristic::Manhattan),
        );
        match outcome {
            Err(SearchError::Unsolvable(stats)) => {
                assert_eq!(stats.nodes_expanded, 181_440);
                assert!(stats.nodes_expanded <= stats.nodes_generated);
            }
            other => panic!("expected Unsolvable, got {other:?}"),
        }
    }

    #[test]
    fn parity_precheck_skips_the_search() {
        let config = SearchConfig::default().with_solvability_check(true);
        let outcome = Search::new(grid("1 2 3 4 5 6 8 7 0"), grid(GOAL), config);
        assert!(matches!(
            outcome,
            Err(SearchError::Unsolvable(Stats {
                nodes_expanded: 0,
                ..
            }))
        ));
    }

    #[test]
    fn budget_stops_the_search() {
        let config = SearchConfig::default().with_max_expansions(5);
        let outcome = solve(&grid("8 6 7 2 5 4 3 0 1"), &grid(GOAL), config);
        match outcome {
            Err(SearchError::BudgetExceeded(stats)) => assert_eq!(stats.nodes_expanded, 5),
            other => panic!("expected BudgetExceeded, got {other:?}"),
        }
    }

    #[test]
    fn mismatched_dimensions_are_invalid_input() {
        let outcome = solve(&grid("1 2 3 0"), &grid(GOAL), SearchConfig::default());
        assert_eq!(
            outcome,
            Err(SearchError::InvalidInput(GridError::DimensionMismatch {
                start: 2,
                goal: 3
            }))
        );
    }

    #[test]
    fn phases_advance() {
        let mut search =
            Search::new(grid("1 2 3 4 0 6 7 5 8"), grid(GOAL), SearchConfig::default()).unwrap();
        assert_eq!(search.phase(), Phase::Ready);
        assert_eq!(search.step(), Progress::Expanded);
        assert_eq!(search.phase(), Phase::Expanding);
        assert_eq!(search.explored().len(), 1);
        // four successors of a centre blank, none explored yet
        assert_eq!(search.stats().nodes_generated, 5);
        assert_eq!(search.frontier().len(), 4);

        let solution = search.run().unwrap();
        assert_eq!(solution.cost, 2);
    }
}
