use std::cmp::Reverse;
use std::collections::BinaryHeap;

use indexmap::map::Entry;
use tracing::{debug, info};

use crate::{is_solvable, manhattan, Board, Direction, Error, Result};

type IndexMap<K, V> = indexmap::IndexMap<K, V, fxhash::FxBuildHasher>;

pub const DEFAULT_MAX_DEPTH: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Popping a node deeper than this aborts the whole search.
    pub max_depth: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// One board on the path from the initial board to the goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub board: Board,
    pub moves: usize,
    /// The blank movement that produced this board. `None` for the initial one.
    pub direction: Option<Direction>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    steps: Vec<Step>,
    expanded: usize,
}

impl Solution {
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }

    /// Number of moves, one less than the number of steps.
    pub fn len(&self) -> usize {
        self.steps.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn directions(&self) -> impl Iterator<Item = Direction> + '_ {
        self.steps.iter().filter_map(|step| step.direction)
    }

    /// Nodes popped from the frontier before the goal was reached.
    pub fn expanded(&self) -> usize {
        self.expanded
    }
}

/// Check solvability, then run [`astar`] on `board`.
///
/// `on_step` is called once per node popped from the frontier and never for
/// an unsolvable board.
pub fn solve(board: &Board, config: &SolverConfig, on_step: impl FnMut()) -> Result<Solution> {
    if !is_solvable(board) {
        debug!(side = board.side(), "board is in the unsolvable parity class");
        return Err(Error::Unsolvable);
    }
    astar(board.clone(), config.max_depth, on_step)
}

struct Node {
    moves: usize,
    parent: Option<usize>,
    direction: Option<Direction>,
}

/// A* over blank moves, scored by `moves + manhattan`.
///
/// The arena maps each board to its node and doubles as the visited set: a
/// board is inserted when first enqueued and never reopened, even if a cheaper
/// path to it shows up later. Equal scores pop in insertion order. The first
/// popped node deeper than `max_depth` ends the search.
pub fn astar(root: Board, max_depth: usize, mut on_step: impl FnMut()) -> Result<Solution> {
    let heuristic = manhattan(&root);
    info!(
        event = "solve_start",
        side = root.side(),
        heuristic,
        max_depth,
    );

    let mut arena = IndexMap::default();
    arena.insert(
        root,
        Node {
            moves: 0,
            parent: None,
            direction: None,
        },
    );
    let mut frontier = BinaryHeap::new();
    frontier.push(Reverse((heuristic as usize, 0usize)));

    let mut expanded = 0;
    while let Some(Reverse((_, cursor))) = frontier.pop() {
        #[cfg(feature = "coz")]
        coz::progress!("Expand");

        on_step();
        expanded += 1;

        let Some((board, node)) = arena.get_index(cursor) else {
            unreachable!("frontier only holds arena indices");
        };

        if node.moves > max_depth {
            debug!(
                moves = node.moves,
                max_depth,
                expanded,
                "depth limit exceeded, abandoning search"
            );
            return Err(Error::DepthExceeded { max_depth });
        }

        if board.is_goal() {
            let steps = reconstruct(&arena, cursor);
            info!(
                event = "solve_end",
                moves = steps.len() - 1,
                expanded,
                visited = arena.len(),
            );
            return Ok(Solution { steps, expanded });
        }

        let board = board.clone();
        let moves = node.moves + 1;
        let blank = board.locate_blank()?;
        for dir in Direction::ALL {
            let Some(next) = board.move_blank(blank, dir) else { continue };
            let index = arena.len();
            if let Entry::Vacant(entry) = arena.entry(next) {
                let score = moves + manhattan(entry.key()) as usize;
                entry.insert(Node {
                    moves,
                    parent: Some(cursor),
                    direction: Some(dir),
                });
                frontier.push(Reverse((score, index)));
            }
        }
    }

    info!(
        event = "solve_end",
        expanded,
        visited = arena.len(),
        "frontier exhausted"
    );
    Err(Error::NoSolutionFound)
}

/// Walk parent links from `terminal` back to the root.
///
/// Step `i` of the result has `moves == i`; the root comes first.
fn reconstruct(arena: &IndexMap<Board, Node>, terminal: usize) -> Vec<Step> {
    let mut steps = std::iter::successors(Some(terminal), |&i| arena[i].parent)
        .map(|i| {
            let (board, node) = arena
                .get_index(i)
                .unwrap_or_else(|| unreachable!("parent links stay inside the arena"));
            Step {
                board: board.clone(),
                moves: node.moves,
                direction: node.direction,
            }
        })
        .collect::<Vec<_>>();
    steps.reverse();
    debug_assert!(steps.iter().zip(0..).all(|(step, i)| step.moves == i));
    steps
}
