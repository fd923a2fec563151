//! Detection of runs of consecutive tiles
//!
//! A run is looked for as a contiguous stretch inside each line of the board:
//! every row read left to right, every column read top to bottom and every
//! diagonal in both orientations. Longer runs contain shorter ones, so a
//! board with four in a row also answers true for runs of three and two.

use crate::{
    board::{Board, Cell, PlayerId},
    HEIGHT, WIDTH,
};

/// The two ways of reading diagonals: as stored, and reflected left to right
#[derive(Copy, Clone, Debug)]
enum Orientation {
    Identity,
    Mirrored,
}

impl Orientation {
    const ALL: [Orientation; 2] = [Orientation::Identity, Orientation::Mirrored];

    fn column(self, column: usize) -> usize {
        match self {
            Orientation::Identity => column,
            Orientation::Mirrored => WIDTH - 1 - column,
        }
    }
}

/// Returns true if `player` owns `run_length` consecutive cells in some row,
/// column or diagonal
pub fn has_run(board: &Board, run_length: usize, player: PlayerId) -> bool {
    let target = Cell::Player(player);
    if run_length == 0 {
        return true;
    }

    check_horizontal(board, run_length, target)
        || check_vertical(board, run_length, target)
        || check_diagonal(board, run_length, target)
}

fn check_horizontal(board: &Board, run_length: usize, target: Cell) -> bool {
    run_length <= WIDTH
        && (0..HEIGHT).any(|row| {
            contains_run(
                (0..WIDTH).map(|column| board.occupant(row, column)),
                run_length,
                target,
            )
        })
}

fn check_vertical(board: &Board, run_length: usize, target: Cell) -> bool {
    run_length <= HEIGHT
        && (0..WIDTH).any(|column| {
            contains_run(
                (0..HEIGHT).map(|row| board.occupant(row, column)),
                run_length,
                target,
            )
        })
}

fn check_diagonal(board: &Board, run_length: usize, target: Cell) -> bool {
    for &orientation in Orientation::ALL.iter() {
        // offset 0 is the main diagonal, positive offsets start further right
        for offset in -(HEIGHT as isize - 1)..=(WIDTH as isize - 1) {
            if diagonal_length(offset) < run_length {
                continue;
            }
            let cells = diagonal(offset)
                .map(|(row, column)| board.occupant(row, orientation.column(column)));
            if contains_run(cells, run_length, target) {
                return true;
            }
        }
    }
    false
}

/// The (row, column) cells of the diagonal at `offset`, top to bottom
fn diagonal(offset: isize) -> impl Iterator<Item = (usize, usize)> {
    (0..HEIGHT).filter_map(move |row| {
        let column = row as isize + offset;
        if column >= 0 && column < WIDTH as isize {
            Some((row, column as usize))
        } else {
            None
        }
    })
}

fn diagonal_length(offset: isize) -> usize {
    diagonal(offset).count()
}

fn contains_run<I: Iterator<Item = Cell>>(cells: I, run_length: usize, target: Cell) -> bool {
    let mut run = 0;
    for cell in cells {
        if cell == target {
            run += 1;
            if run >= run_length {
                return true;
            }
        } else {
            run = 0;
        }
    }
    false
}
