use crate::{Board, BLANK};

/// Sum of Manhattan distances of every tile from its goal cell.
///
/// Tile `v` belongs at `((v - 1) / side, (v - 1) % side)`; the blank is not
/// counted. Admissible and consistent, so A* driven by it stays optimal for
/// every path it keeps.
pub fn manhattan(board: &Board) -> u32 {
    let side = board.side();
    board
        .cells()
        .filter(|&(_, tile)| tile != BLANK)
        .map(|((row, col), tile)| {
            let goal = tile as usize - 1;
            (row.abs_diff(goal / side) + col.abs_diff(goal % side)) as u32
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Direction;

    fn grid<const N: usize>(rows: [[u8; N]; N]) -> Board {
        Board::new(&rows).unwrap()
    }

    #[test]
    fn goal_scores_zero() {
        for side in 2..=6 {
            assert_eq!(manhattan(&Board::solved(side)), 0);
        }
    }

    #[test]
    fn counts_each_tile() {
        // 3 and 6 each sit one row below their goal cell.
        let board = grid([[1, 2, 0], [4, 5, 3], [7, 8, 6]]);
        assert_eq!(manhattan(&board), 2);
        let board = grid([[8, 2, 3], [4, 5, 6], [7, 1, 0]]);
        // 8: (0,0) -> (2,1) = 3, 1: (2,1) -> (0,0) = 3.
        assert_eq!(manhattan(&board), 6);
    }

    #[test]
    fn one_move_changes_estimate_by_one() {
        let mut board = Board::solved(4);
        // Walk a fixed scramble and check consistency at every step.
        for ch in "ULLURDDLUURRDLLURDRU".chars() {
            let dir = Direction::try_from(ch).unwrap();
            for next in board.legal_moves().into_iter().map(|d| board.apply_move(d)) {
                assert_eq!(manhattan(&board).abs_diff(manhattan(&next)), 1);
            }
            board = board.apply_move(dir);
        }
        assert!(manhattan(&board) > 0);
    }
}
