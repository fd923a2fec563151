//! Driver-facing tests: the public move functions, the players and full matches.

use anyhow::Result;
use rand::{rngs::SmallRng, SeedableRng};

use std::collections::HashSet;
use std::io::Cursor;

use connect4_engine::{
    game::{play_match, Game, GameState},
    get_alpha_beta_move, get_expectimax_move, get_random_move,
    player::{AiPlayer, HumanPlayer, Player, PlayerKind, RandomPlayer, Strategy},
    Board, EngineError, PlayerId, SearchConfig, HEIGHT, WIDTH,
};

// every column but the last filled to the top
fn last_column_open() -> Board {
    let mut rows = [[0; WIDTH]; HEIGHT];
    for (row, values) in rows.iter_mut().enumerate() {
        for (column, value) in values.iter_mut().enumerate().take(WIDTH - 1) {
            *value = if (row / 2 + column) % 2 == 0 { 1 } else { 2 };
        }
    }
    Board::from_rows(rows).expect("valid grid")
}

#[test]
fn move_functions_validate_player() -> Result<()> {
    let board = Board::new();
    assert_eq!(
        get_alpha_beta_move(&board, 0),
        Err(EngineError::InvalidPlayerIdentity(0))
    );
    assert_eq!(
        get_expectimax_move(&board, 3),
        Err(EngineError::InvalidPlayerIdentity(3))
    );
    Ok(())
}

#[test]
fn move_functions_return_legal_columns() -> Result<()> {
    let board = Board::from_moves("4455")?;
    let before = board;

    let column = get_alpha_beta_move(&board, 1)?;
    assert!(board.column_has_space(column));
    let column = get_expectimax_move(&board, 2)?;
    assert!(board.column_has_space(column));
    assert_eq!(board, before);

    let board = last_column_open();
    assert_eq!(get_alpha_beta_move(&board, 1)?, WIDTH - 1);
    assert_eq!(get_expectimax_move(&board, 2)?, WIDTH - 1);
    Ok(())
}

#[test]
fn random_moves_cover_open_columns() -> Result<()> {
    let mut rng = SmallRng::seed_from_u64(11);

    let board = Board::from_moves("333333")?;
    let mut seen = HashSet::new();
    for _ in 0..500 {
        seen.insert(get_random_move(&board, &mut rng)?);
    }
    let expected: HashSet<usize> = [0, 1, 3, 4, 5, 6].iter().cloned().collect();
    assert_eq!(seen, expected);

    let board = last_column_open();
    for _ in 0..50 {
        assert_eq!(get_random_move(&board, &mut rng)?, WIDTH - 1);
    }

    let full = board.drop_piece(WIDTH - 1, PlayerId::One)?;
    let full = (0..HEIGHT - 1).try_fold(full, |b, _| b.drop_piece(WIDTH - 1, PlayerId::Two))?;
    assert!(full.is_full());
    assert_eq!(
        get_random_move(&full, &mut rng),
        Err(EngineError::NoLegalMoves)
    );
    Ok(())
}

#[test]
fn player_descriptions() {
    let ai = AiPlayer::new(PlayerId::One, Strategy::Expectimax);
    assert_eq!(ai.describe(), "Player 1:ai");
    assert_eq!(ai.strategy(), Strategy::Expectimax);
    assert_eq!(RandomPlayer::seeded(PlayerId::Two, 0).describe(), "Player 2:random");
    let human = HumanPlayer::new(PlayerId::Two, Cursor::new(""), Vec::new());
    assert_eq!(human.describe(), "Player 2:human");
}

#[test]
fn human_player_reprompts_until_column_has_space() -> Result<()> {
    let board = Board::from_moves("111111")?;
    let input = Cursor::new("0\nnine\n9\n3\n");
    let mut human = HumanPlayer::new(PlayerId::One, input, Vec::new());

    assert_eq!(human.get_move(&board)?, 3);

    let output = String::from_utf8(human.into_output())?;
    assert_eq!(output.matches("Enter your move: ").count(), 4);
    assert_eq!(
        output.matches("Column full, choose from: [1, 2, 3, 4, 5, 6]").count(),
        2
    );
    assert!(output.contains("Invalid number"));
    Ok(())
}

#[test]
fn human_player_fails_when_input_ends() {
    let mut human = HumanPlayer::new(PlayerId::One, Cursor::new("12\n"), Vec::new());
    assert!(human.get_move(&Board::new()).is_err());
}

#[test]
fn player_kinds_parse() -> Result<()> {
    assert_eq!("human".parse::<PlayerKind>()?, PlayerKind::Human);
    assert_eq!(" R\n".parse::<PlayerKind>()?, PlayerKind::Random);
    assert_eq!("alpha-beta".parse::<PlayerKind>()?, PlayerKind::AlphaBeta);
    assert_eq!("e".parse::<PlayerKind>()?, PlayerKind::Expectimax);
    assert!("minimax".parse::<PlayerKind>().is_err());
    for kind in PlayerKind::ALL.iter() {
        assert_eq!(kind.to_string().parse::<PlayerKind>()?, *kind);
    }
    Ok(())
}

#[test]
fn game_detects_wins_and_rejects_moves() -> Result<()> {
    let mut game = Game::new();
    for &column in [0, 1, 0, 1, 0, 1].iter() {
        assert_eq!(game.play_checked(column)?, GameState::Playing);
    }
    assert_eq!(game.to_move(), PlayerId::One);
    assert_eq!(game.play_checked(0)?, GameState::PlayerOneWin);
    assert_eq!(game.moves(), "1212121");
    assert_eq!(game.play_checked(2), Err(EngineError::GameOver));

    let mut game = Game::new();
    for _ in 0..HEIGHT {
        game.play_checked(4)?;
    }
    assert_eq!(
        game.play_checked(4),
        Err(EngineError::InvalidColumn { column: 4 })
    );
    assert_eq!(
        game.play_checked(WIDTH),
        Err(EngineError::ColumnOutOfRange { column: WIDTH })
    );
    assert_eq!(game.state(), GameState::Playing);
    Ok(())
}

#[test]
fn filling_the_board_without_a_line_is_a_draw() -> Result<()> {
    let moves = "656173566152215676422337377473141445425321";
    let mut game = Game::new();
    for (index, digit) in moves.chars().enumerate() {
        let column = digit.to_digit(10).expect("digit") as usize - 1;
        let state = game.play_checked(column)?;
        if index + 1 < moves.len() {
            assert_eq!(state, GameState::Playing);
        } else {
            assert_eq!(state, GameState::Draw);
        }
    }
    assert_eq!(game.moves(), moves);
    assert!(game.board().is_full());
    assert_eq!(game.play_checked(0), Err(EngineError::GameOver));
    assert_eq!(game.state(), GameState::Draw);
    Ok(())
}

#[test]
fn random_match_runs_to_completion() -> Result<()> {
    let mut player_one = RandomPlayer::seeded(PlayerId::One, 1);
    let mut player_two = RandomPlayer::seeded(PlayerId::Two, 2);

    let mut observed = 0;
    let game = play_match(&mut player_one, &mut player_two, |_| observed += 1)?;

    assert!(game.state().is_over());
    assert_eq!(observed, game.moves().len() + 1);
    assert_eq!(game.board().num_tiles(), game.moves().len());
    assert_eq!(Board::from_moves(game.moves())?, *game.board());
    Ok(())
}

#[test]
fn engines_play_full_matches() -> Result<()> {
    let config = SearchConfig::default();
    let mut alpha_beta = PlayerKind::AlphaBeta.build(PlayerId::One, config, None);
    let mut random = PlayerKind::Random.build(PlayerId::Two, config, Some(5));
    let game = play_match(&mut *alpha_beta, &mut *random, |_| {})?;
    assert!(game.state().is_over());

    let mut random = PlayerKind::Random.build(PlayerId::One, config, Some(6));
    let mut expectimax = PlayerKind::Expectimax.build(PlayerId::Two, config, None);
    let game = play_match(&mut *random, &mut *expectimax, |_| {})?;
    assert!(game.state().is_over());
    Ok(())
}

#[test]
fn match_requires_seating_order() {
    let mut player_one = RandomPlayer::seeded(PlayerId::Two, 1);
    let mut player_two = RandomPlayer::seeded(PlayerId::One, 2);
    assert!(play_match(&mut player_one, &mut player_two, |_| {}).is_err());
}
