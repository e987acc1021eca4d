use std::fmt;

/// A cell on the board, addressed by row (top to bottom) and column (left to
/// right).
///
/// Coordinates are signed: after the snake runs off an edge, its head holds
/// the out-of-bounds position it moved to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Position {
    pub(crate) row: i32,
    pub(crate) col: i32,
}

impl Position {
    pub(crate) const fn new(row: i32, col: i32) -> Position {
        Position { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Dimensions of the playing field.  Fixed for the lifetime of an engine.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Board {
    rows: u16,
    cols: u16,
}

impl Board {
    /// The standard 21×21 board
    pub(crate) const DEFAULT: Board = Board { rows: 21, cols: 21 };

    /// Create a board with the given dimensions.  Returns `None` if either
    /// dimension is less than 2, as food placement needs at least one cell
    /// that shares neither a row nor a column with the snake's head.
    ///
    /// The game itself always plays on [`Board::DEFAULT`].
    #[cfg(test)]
    pub(crate) fn new(rows: u16, cols: u16) -> Option<Board> {
        (rows >= 2 && cols >= 2).then_some(Board { rows, cols })
    }

    pub(crate) fn rows(self) -> u16 {
        self.rows
    }

    pub(crate) fn cols(self) -> u16 {
        self.cols
    }

    /// The cell the snake's head starts on
    pub(crate) fn center(self) -> Position {
        Position::new(i32::from(self.rows / 2), i32::from(self.cols / 2))
    }

    pub(crate) fn contains(self, pos: Position) -> bool {
        (0..i32::from(self.rows)).contains(&pos.row) && (0..i32::from(self.cols)).contains(&pos.col)
    }

    /// Iterate over every cell on the board in row-major order
    pub(crate) fn positions(self) -> impl Iterator<Item = Position> {
        let cols = i32::from(self.cols);
        (0..i32::from(self.rows))
            .flat_map(move |row| (0..cols).map(move |col| Position::new(row, col)))
    }
}
