//! The board value and the lines derived from it

use std::fmt;

use crate::error::{GameError, Result};

/// The occupant of a single cell
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Mark {
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Mark {
    pub fn is_empty(&self) -> bool {
        match self {
            Mark::Empty => true,
            _ => false,
        }
    }

    /// Parses the digit encoding used by board fixtures: 0, 1 or 2
    pub fn from_digit(digit: u8) -> Result<Self> {
        match digit {
            0 => Ok(Mark::Empty),
            1 => Ok(Mark::PlayerOne),
            2 => Ok(Mark::PlayerTwo),
            other => Err(GameError::InvalidMark(other)),
        }
    }

    pub fn to_digit(self) -> u8 {
        match self {
            Mark::Empty => 0,
            Mark::PlayerOne => 1,
            Mark::PlayerTwo => 2,
        }
    }
}

/// One of the two sides of the game
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// The 1-based player number shown to users
    pub fn id(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

impl From<Player> for Mark {
    fn from(player: Player) -> Self {
        match player {
            Player::One => Mark::PlayerOne,
            Player::Two => Mark::PlayerTwo,
        }
    }
}

impl TryFrom<Mark> for Player {
    type Error = GameError;

    fn try_from(mark: Mark) -> Result<Self> {
        match mark {
            Mark::PlayerOne => Ok(Player::One),
            Mark::PlayerTwo => Ok(Player::Two),
            Mark::Empty => Err(GameError::InvalidPlayer),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {}", self.id())
    }
}

/// A `(row, col)` coordinate, zero-indexed from the top left corner
pub type Move = (usize, usize);

/// The orientation of a [`Line`]
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Direction {
    Horizontal,
    Vertical,
    /// top left to bottom right
    DiagonalDown,
    /// top right to bottom left
    DiagonalUp,
}

/// A maximal straight run of cells across the board
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Line {
    pub direction: Direction,
    pub marks: Vec<Mark>,
}

/// An immutable snapshot of the board
///
/// # Notes
/// Cells are stored row-major, top row first. Applying a move copies the
/// grid, so every `BoardState` handed out stays valid for as long as the
/// caller keeps it around.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct BoardState {
    rows: usize,
    cols: usize,
    cells: Vec<Mark>,
}

impl BoardState {
    /// Creates a board of `rows x cols` empty cells
    pub fn create_empty(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(GameError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![Mark::Empty; rows * cols],
        })
    }

    /// Creates a board from rows of digits (0 empty, 1 player one, 2 player two)
    pub fn from_rows<R: AsRef<[u8]>>(grid: &[R]) -> Result<Self> {
        let rows = grid.len();
        let cols = grid.first().map_or(0, |row| row.as_ref().len());
        if rows == 0 || cols == 0 {
            return Err(GameError::InvalidDimensions { rows, cols });
        }

        let mut cells = Vec::with_capacity(rows * cols);
        for row in grid {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(GameError::InvalidDimensions {
                    rows,
                    cols: row.len(),
                });
            }
            for &digit in row {
                cells.push(Mark::from_digit(digit)?);
            }
        }
        Ok(Self { rows, cols, cells })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Mark> {
        self.check_bounds(row, col)?;
        Ok(self.cells[self.index(row, col)])
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Mark::is_empty)
    }

    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(Mark::is_empty)
    }

    /// Iterates over the empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Move> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, mark)| mark.is_empty())
            .map(move |(idx, _)| (idx / cols, idx % cols))
    }

    /// Returns a new board with `mark` placed at `(row, col)`
    ///
    /// The receiver is left untouched.
    pub fn apply(&self, mark: Mark, row: usize, col: usize) -> Result<Self> {
        if mark.is_empty() {
            return Err(GameError::InvalidPlayer);
        }
        if !self.get(row, col)?.is_empty() {
            return Err(GameError::CellOccupied { row, col });
        }
        Ok(self.with_mark(mark, row, col))
    }

    /// Places a mark without validation, for callers iterating `empty_cells`
    pub(crate) fn with_mark(&self, mark: Mark, row: usize, col: usize) -> Self {
        let mut next = self.clone();
        let idx = next.index(row, col);
        next.cells[idx] = mark;
        next
    }

    /// Produces every line of the board
    ///
    /// Rows come first (top to bottom), then columns (left to right), then the
    /// top-left to bottom-right diagonals and finally the top-right to
    /// bottom-left diagonals, for `3 * rows + 3 * cols - 2` lines in total.
    pub fn extract_lines(&self) -> Vec<Line> {
        let (rows, cols) = (self.rows, self.cols);
        let mut lines = Vec::with_capacity(3 * rows + 3 * cols - 2);

        for row in 0..rows {
            lines.push(Line {
                direction: Direction::Horizontal,
                marks: self.cells[row * cols..(row + 1) * cols].to_vec(),
            });
        }

        for col in 0..cols {
            lines.push(Line {
                direction: Direction::Vertical,
                marks: (0..rows).map(|row| self.at(row, col)).collect(),
            });
        }

        // diagonal d starts on the top row at column cols - 1 - d, or on the
        // left column at row d - (cols - 1) once it runs off the top row
        for d in 0..rows + cols - 1 {
            let (mut row, mut col) = if d < cols {
                (0, cols - 1 - d)
            } else {
                (d - (cols - 1), 0)
            };
            let mut marks = Vec::new();
            while row < rows && col < cols {
                marks.push(self.at(row, col));
                row += 1;
                col += 1;
            }
            lines.push(Line {
                direction: Direction::DiagonalDown,
                marks,
            });
        }

        // anti-diagonal s holds the cells where row + col == s
        for s in 0..rows + cols - 1 {
            let marks = (s.saturating_sub(cols - 1)..rows.min(s + 1))
                .map(|row| self.at(row, s - row))
                .collect();
            lines.push(Line {
                direction: Direction::DiagonalUp,
                marks,
            });
        }

        lines
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(GameError::OutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn at(&self, row: usize, col: usize) -> Mark {
        self.cells[self.index(row, col)]
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            let digits: Vec<String> = row.iter().map(|m| m.to_digit().to_string()).collect();
            writeln!(f, "{}", digits.join(" "))?;
        }
        Ok(())
    }
}
