use thiserror::Error;

/// Every way solving a board can fail.
///
/// None of these are fatal to the caller: each one describes the outcome for
/// a single board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The board is in the unreachable permutation class, so no search was run.
    #[error("puzzle has no solution")]
    Unsolvable,

    /// A node deeper than the configured bound was popped from the frontier.
    #[error("search exceeded the move-depth limit of {max_depth}")]
    DepthExceeded { max_depth: usize },

    /// The frontier ran dry without reaching the solved board.
    #[error("search exhausted every reachable board without finding the goal")]
    NoSolutionFound,

    /// The grid is not a permutation of `0..n²` on a supported square.
    #[error("malformed board: {0}")]
    InvariantViolation(String),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
