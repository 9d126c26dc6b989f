//! "Perft" correctness test: count the number of leaves at a given depth.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::{Board, Color};

/// Count leaves below the standard opening with black to move.
pub fn run_perft(depth: u64) -> u64 {
    leaves_below(Board::default(), Color::Black, depth, false)
}

fn leaves_below(board: Board, to_move: Color, depth: u64, passed: bool) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let all_moves = board.available_positions(to_move);
    if all_moves.is_empty() {
        // Both players passed: game is over
        if passed {
            return 1;
        }

        return leaves_below(board, !to_move, depth - 1, true);
    }

    all_moves
        .into_iter()
        .map(|pos| {
            let mut child = board;
            child.apply_move(to_move, pos);
            leaves_below(child, !to_move, depth - 1, false)
        })
        .sum()
}

#[test]
fn perft_01() {
    assert_eq!(run_perft(1), 4);
}

#[test]
fn perft_02() {
    assert_eq!(run_perft(2), 12);
}

#[test]
fn perft_03() {
    assert_eq!(run_perft(3), 56);
}

#[test]
fn perft_04() {
    assert_eq!(run_perft(4), 244);
}
