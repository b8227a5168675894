use crate::{Board, BLANK};

/// Pairs of non-blank tiles appearing out of goal order in `tiles`.
pub fn count_inversions(tiles: &[u8]) -> usize {
    tiles
        .iter()
        .enumerate()
        .filter(|&(_, &tile)| tile != BLANK)
        .map(|(i, &tile)| {
            tiles[i + 1..]
                .iter()
                .filter(|&&next| next != BLANK && next < tile)
                .count()
        })
        .sum()
}

/// Whether the solved board is reachable from `board` at all.
///
/// Odd sides need an even inversion count. Even sides need the blank's row,
/// counted from the bottom starting at 1, to have the opposite parity of the
/// inversion count.
pub fn is_solvable(board: &Board) -> bool {
    let inversions = count_inversions(board.tiles());
    let side = board.side();
    if side % 2 == 1 {
        return inversions % 2 == 0;
    }
    let Ok((blank_row, _)) = board.locate_blank() else {
        return false;
    };
    (side - blank_row) % 2 != inversions % 2
}
