//! Grid representation of a Connect 4 position

use std::convert::TryFrom;
use std::fmt;

use crate::{error::EngineError, HEIGHT, WIDTH};

/// The identity of one of the two players
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// The other player
    pub fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// The integer tag of this player, 1 or 2
    pub fn number(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = EngineError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        match number {
            1 => Ok(PlayerId::One),
            2 => Ok(PlayerId::Two),
            other => Err(EngineError::InvalidPlayerIdentity(other)),
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Cell {
    Empty,
    Player(PlayerId),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The grid encoding of this cell: 0 for empty, otherwise the player tag
    pub fn to_u8(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Player(player) => player.number(),
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty
    }
}

/// Where a dropped piece lands
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Move {
    pub row: usize,
    pub column: usize,
}

impl Move {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// A 6x7 Connect 4 grid
///
/// Row 0 is the top of the board and the last row to fill, row `HEIGHT - 1`
/// is the bottom. The board is a small `Copy` value: placing a piece with
/// [`with_piece`](Board::with_piece) hands back a new board and leaves the
/// original untouched, which is how the searches branch.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Board {
    cells: [[Cell; WIDTH]; HEIGHT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; WIDTH]; HEIGHT],
        }
    }

    /// Builds a board from its grid encoding (0 empty, 1 or 2 a player's tile),
    /// row 0 first
    ///
    /// Gravity is not checked, any arrangement of tiles is accepted.
    pub fn from_rows(rows: [[u8; WIDTH]; HEIGHT]) -> Result<Self, EngineError> {
        let mut board = Self::new();
        for (row, values) in rows.iter().enumerate() {
            for (column, &value) in values.iter().enumerate() {
                board.cells[row][column] = match value {
                    0 => Cell::Empty,
                    _ => match PlayerId::try_from(value) {
                        Ok(player) => Cell::Player(player),
                        Err(_) => return Err(EngineError::InvalidCell { row, column, value }),
                    },
                };
            }
        }
        Ok(board)
    }

    /// Plays a sequence of 1-indexed column digits, alternating players from
    /// player 1
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self, EngineError> {
        let mut board = Self::new();
        let mut player = PlayerId::One;

        for (position, column_char) in moves.as_ref().chars().enumerate() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=WIDTH) => {
                    board = board
                        .drop_piece(column - 1, player)
                        .map_err(|err| EngineError::ParseMove {
                            position,
                            reason: err.to_string(),
                        })?;
                    player = player.opponent();
                }
                _ => {
                    return Err(EngineError::ParseMove {
                        position,
                        reason: format!(
                            "'{}' is not a column between 1 and {}",
                            column_char, WIDTH
                        ),
                    })
                }
            }
        }
        Ok(board)
    }

    /// The grid encoding of the board, row 0 first
    pub fn to_rows(&self) -> [[u8; WIDTH]; HEIGHT] {
        let mut rows = [[0; WIDTH]; HEIGHT];
        for (row, cells) in self.cells.iter().enumerate() {
            for (column, cell) in cells.iter().enumerate() {
                rows[row][column] = cell.to_u8();
            }
        }
        rows
    }

    /// # Panics
    /// Panics if `row >= HEIGHT` or `column >= WIDTH`
    pub fn is_empty(&self, row: usize, column: usize) -> bool {
        self.cells[row][column].is_empty()
    }

    /// The contents of a cell
    ///
    /// # Panics
    /// Panics if `row >= HEIGHT` or `column >= WIDTH`, unlike
    /// [`landing_row`](Board::landing_row) which reports a bad column as an
    /// error
    pub fn occupant(&self, row: usize, column: usize) -> Cell {
        self.cells[row][column]
    }

    /// Returns true if any cell in the column is empty
    pub fn column_has_space(&self, column: usize) -> bool {
        column < WIDTH && (0..HEIGHT).any(|row| self.is_empty(row, column))
    }

    /// The row a piece dropped in `column` lands on: the lowest empty cell
    pub fn landing_row(&self, column: usize) -> Result<usize, EngineError> {
        if column >= WIDTH {
            return Err(EngineError::ColumnOutOfRange { column });
        }
        (0..HEIGHT)
            .rev()
            .find(|&row| self.is_empty(row, column))
            .ok_or(EngineError::InvalidColumn { column })
    }

    pub fn is_full(&self) -> bool {
        (0..WIDTH).all(|column| !self.column_has_space(column))
    }

    /// Returns a copy of the board with `player`'s tile at the move's cell
    pub fn with_piece(&self, position: Move, player: PlayerId) -> Self {
        let mut next = *self;
        next.cells[position.row][position.column] = Cell::Player(player);
        next
    }

    /// Returns a copy of the board with `player`'s tile dropped into `column`
    pub fn drop_piece(&self, column: usize, player: PlayerId) -> Result<Self, EngineError> {
        let row = self.landing_row(column)?;
        Ok(self.with_piece(Move::new(row, column), player))
    }

    /// Returns a copy with the tiles of player 1 and player 2 exchanged
    pub fn swap_players(&self) -> Self {
        let mut swapped = *self;
        for cell in swapped.cells.iter_mut().flat_map(|row| row.iter_mut()) {
            if let Cell::Player(player) = *cell {
                *cell = Cell::Player(player.opponent());
            }
        }
        swapped
    }

    /// Returns a copy reflected left to right
    pub fn mirrored(&self) -> Self {
        let mut mirrored = *self;
        for row in mirrored.cells.iter_mut() {
            row.reverse();
        }
        mirrored
    }

    /// Number of tiles on the board
    pub fn num_tiles(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| !cell.is_empty())
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.iter() {
            for cell in row.iter() {
                write!(f, "{}", cell.to_u8())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
