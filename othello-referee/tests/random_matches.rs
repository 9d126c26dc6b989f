use othello_referee::{FnSeat, MatchConfig, Referee, ScriptedSeat, Seat, Turn};
use othello_rules::test_utils::play_out;
use othello_rules::{
    Board, Cell, Color, Opening, Position, PositionList, Winner, NUM_SPACES,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

fn random_seat(name: &str, seed: u64) -> impl Seat {
    let mut rng = StdRng::seed_from_u64(seed);
    FnSeat::new(name, move |_: &Board, _: Color, legal: &PositionList| {
        legal.as_slice().choose(&mut rng).copied()
    })
}

#[test]
fn random_matches_are_well_formed() {
    for seed in 0..10 {
        let config = MatchConfig {
            opening: if seed % 2 == 0 {
                Opening::Standard
            } else {
                Opening::Swapped
            },
            ..MatchConfig::default()
        };
        let black = random_seat("Alice", seed);
        let white = random_seat("Bob", seed + 100);
        let mut referee = Referee::new(config, black, white).unwrap();
        let report = referee.run().unwrap();
        let board = referee.game().board();

        assert!(board.is_terminal());
        assert_eq!(report.game_over.score, board.score());

        // Colors alternate, with a pass standing in for a stuck color.
        let mut expected = Color::Black;
        for turn in report.transcript.iter() {
            match *turn {
                Turn::Moved { color, .. } | Turn::Passed(color) => assert_eq!(color, expected),
                Turn::Finished(_) => panic!("transcript holds only moves and passes"),
            }
            expected = !expected;
        }

        let black = Position::all()
            .filter(|&pos| board.cell(pos) == Cell::Black)
            .count();
        let white = Position::all()
            .filter(|&pos| board.cell(pos) == Cell::White)
            .count();
        assert_eq!(black + white, 4 + report.moves().count());
        assert_eq!(black + white + board.count_empty() as usize, NUM_SPACES);
        assert_eq!(report.game_over.score.of(Color::Black) as usize, black);
        assert_eq!(report.game_over.score.of(Color::White) as usize, white);

        let expected_winner = if black > white {
            Winner::BlackWins("Alice".to_string())
        } else if white > black {
            Winner::WhiteWins("Bob".to_string())
        } else {
            Winner::Tie
        };
        assert_eq!(report.winner, expected_winner);
    }
}

#[test]
fn referee_agrees_with_playout() {
    let first = |_: &Board, _: Color, legal: &PositionList| legal.iter().next().copied();
    let mut referee = Referee::new(
        MatchConfig::default(),
        FnSeat::new("Alice", first),
        FnSeat::new("Bob", first),
    )
    .unwrap();
    let report = referee.run().unwrap();

    let playout = play_out(Board::default(), Color::Black, |_, _, legal| legal.as_slice()[0]);
    assert_eq!(referee.game().board(), &playout.board);
    assert_eq!(report.moves().collect::<Vec<_>>(), playout.moves);
    assert_eq!(report.passes().count(), playout.passes);
}

#[test]
fn scripted_game_replays() {
    // Record a game, then replay each side's moves from notation.
    let playout = play_out(Board::default(), Color::Black, |_, _, legal| {
        legal.as_slice()[legal.len() / 2]
    });
    let script = |color: Color| {
        playout
            .moves
            .iter()
            .filter(|(mover, _)| *mover == color)
            .map(|(_, pos)| pos.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    };

    let black = ScriptedSeat::from_notation("Alice", &script(Color::Black)).unwrap();
    let white = ScriptedSeat::from_notation("Bob", &script(Color::White)).unwrap();
    let mut referee = Referee::new(MatchConfig::default(), black, white).unwrap();
    let report = referee.run().unwrap();

    assert_eq!(referee.game().board(), &playout.board);
    assert_eq!(report.game_over.score, playout.board.score());
}
