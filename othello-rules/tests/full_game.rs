use othello_rules::test_utils::play_out;
use othello_rules::{
    Board, Cell, Color, Game, MoveOutcome, Opening, Position, PositionList, Verdict, Winner,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

fn first_legal(_: &Board, _: Color, legal: &PositionList) -> Position {
    legal.as_slice()[0]
}

fn count_by_hand(board: &Board, color: Color) -> usize {
    Position::all()
        .filter(|&pos| board.cell(pos) == Cell::from(color))
        .count()
}

/// Plays a whole game through `Game::play_turn`, alternating and passing by hand.
fn drive(game: &mut Game, mut pick: impl FnMut(&PositionList) -> Position) -> Vec<MoveOutcome> {
    let mut outcomes = Vec::new();
    let mut to_move = Color::Black;
    while !game.is_finished() {
        let legal = game.available_positions(to_move);
        if !legal.is_empty() {
            outcomes.push(game.play_turn(to_move, pick(&legal)));
        }
        to_move = !to_move;
    }
    outcomes
}

#[test]
fn first_legal_game_to_the_end() {
    let mut game = Game::new();
    game.create_player("Alice", Color::Black).unwrap();
    game.create_player("Bob", Color::White).unwrap();

    let outcomes = drive(&mut game, |legal| legal.as_slice()[0]);
    assert!(outcomes.iter().all(MoveOutcome::is_accepted));

    // Only the final move reports the end of the game.
    let (last, rest) = outcomes.split_last().unwrap();
    assert!(rest.iter().all(|outcome| outcome.game_over().is_none()));
    let game_over = last.game_over().expect("final move ends the game");

    let black = count_by_hand(game.board(), Color::Black);
    let white = count_by_hand(game.board(), Color::White);
    assert_eq!(game_over.score.black as usize, black);
    assert_eq!(game_over.score.white as usize, white);
    assert_eq!(game_over.score, game.score());

    let expected = if black > white {
        Winner::BlackWins("Alice".to_string())
    } else if white > black {
        Winner::WhiteWins("Bob".to_string())
    } else {
        Winner::Tie
    };
    assert_eq!(game.winner(), Ok(expected.clone()));
    assert_eq!(game.winner(), Ok(expected));

    assert!(game.available_positions(Color::Black).is_empty());
    assert!(game.available_positions(Color::White).is_empty());
}

#[test]
fn playout_matches_game_driver() {
    let playout = play_out(Board::default(), Color::Black, first_legal);
    let mut game = Game::new();
    drive(&mut game, |legal| legal.as_slice()[0]);
    assert_eq!(&playout.board, game.board());
    assert_eq!(
        playout.moves.len() + 4,
        (playout.board.score().black + playout.board.score().white) as usize
    );
}

#[test]
fn random_games_end_with_consistent_scores() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let opening = if seed % 2 == 0 {
            Opening::Standard
        } else {
            Opening::Swapped
        };
        let playout = play_out(Board::new(opening), Color::Black, |_, _, legal| {
            *legal.as_slice().choose(&mut rng).unwrap()
        });

        let board = playout.board;
        assert!(board.is_terminal());
        let score = board.score();
        assert_eq!(score.black as usize, count_by_hand(&board, Color::Black));
        assert_eq!(score.white as usize, count_by_hand(&board, Color::White));
        // Every move adds exactly one piece.
        assert_eq!(
            score.black as usize + score.white as usize,
            4 + playout.moves.len()
        );
        assert_eq!(score.verdict(), board.score().verdict());
        match score.verdict() {
            Verdict::BlackWins => assert!(score.black > score.white),
            Verdict::WhiteWins => assert!(score.white > score.black),
            Verdict::Tie => assert_eq!(score.black, score.white),
        }
    }
}
