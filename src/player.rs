//! Move sources that can take a seat in a game

use anyhow::{anyhow, Result};
use rand::{rngs::SmallRng, SeedableRng};

use std::fmt;
use std::io::{stdin, stdout, BufRead, BufReader, Stdin, Stdout, Write};
use std::str::FromStr;

use crate::{
    alphabeta::AlphaBeta,
    board::{Board, PlayerId},
    config::SearchConfig,
    expectimax::Expectimax,
    get_random_move,
    moves::valid_moves,
};

/// Anything that picks a column for one side of a game
pub trait Player {
    /// The side this player plays
    fn id(&self) -> PlayerId;

    /// Short label of the player type, like `ai` or `human`
    fn kind(&self) -> &'static str;

    /// Picks a column with space on `board`
    fn get_move(&mut self, board: &Board) -> Result<usize>;

    fn describe(&self) -> String {
        format!("Player {}:{}", self.id(), self.kind())
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Strategy {
    AlphaBeta,
    Expectimax,
}

/// A player backed by one of the tree searches
pub struct AiPlayer {
    id: PlayerId,
    strategy: Strategy,
    config: SearchConfig,
}

impl AiPlayer {
    pub fn new(id: PlayerId, strategy: Strategy) -> Self {
        Self {
            id,
            strategy,
            config: SearchConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
}

impl Player for AiPlayer {
    fn id(&self) -> PlayerId {
        self.id
    }

    fn kind(&self) -> &'static str {
        "ai"
    }

    fn get_move(&mut self, board: &Board) -> Result<usize> {
        let column = match self.strategy {
            Strategy::AlphaBeta => AlphaBeta::new(*board, self.id)
                .with_depth(self.config.alpha_beta_depth)?
                .search()?,
            Strategy::Expectimax => Expectimax::new(*board, self.id)
                .with_depth(self.config.expectimax_depth)?
                .with_root_selection(self.config.expectimax_root)
                .search()?,
        };
        Ok(column)
    }
}

/// A player choosing uniformly among the columns with space
pub struct RandomPlayer {
    id: PlayerId,
    rng: SmallRng,
}

impl RandomPlayer {
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            rng: SmallRng::from_entropy(),
        }
    }

    /// Creates a player with a reproducible sequence of choices
    pub fn seeded(id: PlayerId, seed: u64) -> Self {
        Self {
            id,
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Player for RandomPlayer {
    fn id(&self) -> PlayerId {
        self.id
    }

    fn kind(&self) -> &'static str {
        "random"
    }

    fn get_move(&mut self, board: &Board) -> Result<usize> {
        Ok(get_random_move(board, &mut self.rng)?)
    }
}

/// A player reading columns from a text input, prompting on an output
///
/// Columns are entered 0-indexed. Input is re-requested until it names a
/// column with space; running out of input is an error.
pub struct HumanPlayer<R: BufRead, W: Write> {
    id: PlayerId,
    input: R,
    output: W,
}

impl HumanPlayer<BufReader<Stdin>, Stdout> {
    /// A human at the terminal
    pub fn stdio(id: PlayerId) -> Self {
        Self::new(id, BufReader::new(stdin()), stdout())
    }
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(id: PlayerId, input: R, output: W) -> Self {
        Self { id, input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_move(&mut self) -> Result<Option<usize>> {
        write!(self.output, "Enter your move: ")?;
        self.output.flush()?;

        let mut buffer = String::new();
        if self.input.read_line(&mut buffer)? == 0 {
            return Err(anyhow!("input closed before a move was entered"));
        }
        Ok(buffer.trim().parse::<usize>().ok())
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn id(&self) -> PlayerId {
        self.id
    }

    fn kind(&self) -> &'static str {
        "human"
    }

    fn get_move(&mut self, board: &Board) -> Result<usize> {
        let valid_columns: Vec<usize> = valid_moves(board).columns().collect();
        if valid_columns.is_empty() {
            return Err(crate::EngineError::NoLegalMoves.into());
        }

        loop {
            match self.read_move()? {
                Some(column) if valid_columns.contains(&column) => return Ok(column),
                Some(_) => writeln!(self.output, "Column full, choose from: {:?}", valid_columns)?,
                None => writeln!(self.output, "Invalid number, choose from: {:?}", valid_columns)?,
            }
        }
    }
}

/// The kinds of player the binaries can seat
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum PlayerKind {
    Human,
    Random,
    AlphaBeta,
    Expectimax,
}

impl PlayerKind {
    pub const ALL: [PlayerKind; 4] = [
        PlayerKind::Human,
        PlayerKind::Random,
        PlayerKind::AlphaBeta,
        PlayerKind::Expectimax,
    ];

    /// Seats a player of this kind; `seed` only affects random players
    pub fn build(
        self,
        id: PlayerId,
        config: SearchConfig,
        seed: Option<u64>,
    ) -> Box<dyn Player + Send> {
        match self {
            PlayerKind::Human => Box::new(HumanPlayer::stdio(id)),
            PlayerKind::Random => match seed {
                Some(seed) => Box::new(RandomPlayer::seeded(id, seed)),
                None => Box::new(RandomPlayer::new(id)),
            },
            PlayerKind::AlphaBeta => {
                Box::new(AiPlayer::new(id, Strategy::AlphaBeta).with_config(config))
            }
            PlayerKind::Expectimax => {
                Box::new(AiPlayer::new(id, Strategy::Expectimax).with_config(config))
            }
        }
    }
}

impl FromStr for PlayerKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "h" | "human" => Ok(PlayerKind::Human),
            "r" | "random" => Ok(PlayerKind::Random),
            "a" | "ab" | "alphabeta" | "alpha-beta" => Ok(PlayerKind::AlphaBeta),
            "e" | "ex" | "expectimax" => Ok(PlayerKind::Expectimax),
            other => Err(anyhow!(
                "unknown player kind '{}', expected one of human, random, alphabeta, expectimax",
                other
            )),
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlayerKind::Human => "human",
            PlayerKind::Random => "random",
            PlayerKind::AlphaBeta => "alphabeta",
            PlayerKind::Expectimax => "expectimax",
        };
        write!(f, "{}", name)
    }
}
