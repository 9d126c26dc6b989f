//! Plays a game to completion under a caller-supplied move policy.

use crate::{Board, Color, Position, PositionList};

/// A finished game and how it got there.
#[derive(Clone, Debug)]
pub struct Playout {
    pub board: Board,
    pub moves: Vec<(Color, Position)>,
    /// Passes forced mid-game; the closing pair of passes is not counted.
    pub passes: usize,
}

/// Alternate colors from `first` until neither can move, passing a color with no
/// legal move. `choose` picks from the non-empty legal list.
pub fn play_out<F>(mut board: Board, first: Color, mut choose: F) -> Playout
where
    F: FnMut(&Board, Color, &PositionList) -> Position,
{
    let mut to_move = first;
    let mut passed = false;
    let mut moves = Vec::new();
    let mut passes = 0;

    loop {
        let legal = board.available_positions(to_move);
        if legal.is_empty() {
            if passed {
                break;
            }
            passed = true;
            to_move = !to_move;
            continue;
        }

        let pos = choose(&board, to_move, &legal);
        assert!(legal.contains(pos), "{} is not legal for {}", pos, to_move);
        board.apply_move(to_move, pos);
        moves.push((to_move, pos));
        if passed {
            passes += 1;
            passed = false;
        }
        to_move = !to_move;
    }

    Playout {
        board,
        moves,
        passes,
    }
}
