//! A match between two players

use anyhow::{anyhow, Result};

use crate::{
    board::{Board, PlayerId},
    error::EngineError,
    player::Player,
    runs::has_run,
    CONNECT, WIDTH,
};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    Playing,
    PlayerOneWin,
    PlayerTwoWin,
    Draw,
}

impl GameState {
    pub fn is_over(self) -> bool {
        !matches!(self, GameState::Playing)
    }

    fn win_for(player: PlayerId) -> Self {
        match player {
            PlayerId::One => GameState::PlayerOneWin,
            PlayerId::Two => GameState::PlayerTwoWin,
        }
    }
}

/// A game in progress, player 1 moving first
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    to_move: PlayerId,
    // 1-indexed column digits of every move played
    moves: String,
    state: GameState,
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: PlayerId::One,
            moves: String::new(),
            state: GameState::Playing,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> PlayerId {
        self.to_move
    }

    pub fn moves(&self) -> &str {
        &self.moves
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Plays a 0-indexed column for the player to move, checking it first
    pub fn play_checked(&mut self, column: usize) -> Result<GameState, EngineError> {
        if self.state.is_over() {
            return Err(EngineError::GameOver);
        }
        if column >= WIDTH {
            return Err(EngineError::ColumnOutOfRange { column });
        }

        let player = self.to_move;
        self.board = self.board.drop_piece(column, player)?;
        self.moves.push_str(&(column + 1).to_string());
        self.to_move = player.opponent();

        self.state = if has_run(&self.board, CONNECT, player) {
            GameState::win_for(player)
        } else if self.board.is_full() {
            GameState::Draw
        } else {
            GameState::Playing
        };
        Ok(self.state)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Plays a full game between `player_one` and `player_two`
///
/// `observer` sees the game before every move and once more at the end.
/// A player picking an unplayable column aborts the match.
pub fn play_match<'a, F>(
    player_one: &mut (dyn Player + 'a),
    player_two: &mut (dyn Player + 'a),
    mut observer: F,
) -> Result<Game>
where
    F: FnMut(&Game),
{
    if player_one.id() != PlayerId::One || player_two.id() != PlayerId::Two {
        return Err(anyhow!(
            "players are seated in the wrong order: {} then {}",
            player_one.describe(),
            player_two.describe()
        ));
    }

    let mut game = Game::new();
    while !game.state().is_over() {
        observer(&game);
        let player: &mut (dyn Player + 'a) = match game.to_move() {
            PlayerId::One => &mut *player_one,
            PlayerId::Two => &mut *player_two,
        };
        let column = player.get_move(game.board())?;
        game.play_checked(column)
            .map_err(|err| anyhow!("{} chose column {}: {}", player.describe(), column, err))?;
    }
    observer(&game);
    Ok(game)
}
