//! Board state representation and basic operations

use std::fmt;

/// Number of rows and columns on the board
pub const SIZE: usize = 3;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    /// Character used when rendering the board (a space for empty cells)
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    /// Convert an occupied cell back to its player
    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }
}

/// A player in the game, identified by its marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// A (row, col) coordinate on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major index into the cell array, or `OutOfBounds`
    fn index(self) -> Result<usize, crate::Error> {
        if self.row >= SIZE || self.col >= SIZE {
            return Err(crate::Error::OutOfBounds {
                row: self.row,
                col: self.col,
            });
        }
        Ok(self.row * SIZE + self.col)
    }

    fn from_index(idx: usize) -> Self {
        Self {
            row: idx / SIZE,
            col: idx % SIZE,
        }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A 3x3 grid of write-once cells, stored row-major.
///
/// Cells move from [`Cell::Empty`] to a marker exactly once; [`Board::place`]
/// refuses to overwrite an occupied cell, so there is no way to clear or
/// change a marker after it lands.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Cell; SIZE * SIZE],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the cell at (row, col)
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if either coordinate is outside 0-2.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, crate::Error> {
        let idx = Position::new(row, col).index()?;
        Ok(self.cells[idx])
    }

    /// Place `player`'s marker at (row, col).
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` for coordinates outside the grid and
    /// `InvalidMove` if the cell is already occupied. The board is left
    /// untouched in both cases.
    pub fn place(&mut self, row: usize, col: usize, player: Player) -> Result<(), crate::Error> {
        let idx = Position::new(row, col).index()?;
        if self.cells[idx] != Cell::Empty {
            return Err(crate::Error::InvalidMove { row, col });
        }
        self.cells[idx] = player.to_cell();
        Ok(())
    }

    /// Place a marker at a [`Position`]
    pub fn place_at(&mut self, position: Position, player: Player) -> Result<(), crate::Error> {
        self.place(position.row, position.col, player)
    }

    /// Check if no empty cell remains
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// All empty coordinates in row-major order
    pub fn available_moves(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| Position::from_index(i))
            .collect()
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Row-major view of the cells
    pub fn cells(&self) -> &[Cell; SIZE * SIZE] {
        &self.cells
    }

    /// Render the board as text: cells joined by `|`, rows separated by `-+-+-`
    pub fn render(&self) -> String {
        self.cells
            .chunks(SIZE)
            .map(|row| {
                row.iter()
                    .map(|c| c.to_char().to_string())
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect::<Vec<_>>()
            .join("\n-+-+-\n")
    }

    /// Check if a player has won
    pub fn has_won(&self, player: Player) -> bool {
        super::lines::LineAnalyzer::has_won(self, player)
    }

    /// Check if the position is a draw (all cells filled, no winner)
    pub fn is_draw(&self) -> bool {
        super::lines::LineAnalyzer::is_draw(self)
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        super::lines::LineAnalyzer::winner(self)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..SIZE {
            for col in 0..SIZE {
                assert_eq!(board.get(row, col).unwrap(), Cell::Empty);
            }
        }
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_place_then_get() {
        let mut board = Board::new();
        board.place(2, 1, Player::O).unwrap();
        assert_eq!(board.get(2, 1).unwrap(), Cell::O);
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn test_place_on_occupied_cell_fails_and_keeps_marker() {
        let mut board = Board::new();
        board.place(0, 0, Player::X).unwrap();

        let err = board.place(0, 0, Player::O).unwrap_err();
        assert!(matches!(err, crate::Error::InvalidMove { row: 0, col: 0 }));
        assert_eq!(board.get(0, 0).unwrap(), Cell::X);

        // Same marker again is still a second write
        assert!(board.place(0, 0, Player::X).is_err());
    }

    #[test]
    fn test_out_of_bounds() {
        let mut board = Board::new();
        assert!(matches!(
            board.get(3, 0),
            Err(crate::Error::OutOfBounds { row: 3, col: 0 })
        ));
        assert!(matches!(
            board.get(0, 7),
            Err(crate::Error::OutOfBounds { row: 0, col: 7 })
        ));
        assert!(matches!(
            board.place(1, 3, Player::X),
            Err(crate::Error::OutOfBounds { .. })
        ));
        assert_eq!(board, Board::new(), "failed placement must not mutate");
    }

    #[test]
    fn test_available_moves_shrink_by_one() {
        let mut board = Board::new();
        assert_eq!(board.available_moves().len(), 9);

        let mut player = Player::X;
        for (i, pos) in Board::new().available_moves().into_iter().enumerate() {
            assert!(!board.is_full());
            board.place_at(pos, player).unwrap();
            assert_eq!(board.available_moves().len(), 8 - i);
            assert!(!board.available_moves().contains(&pos));
            player = player.opponent();
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_available_moves_row_major() {
        let mut board = Board::new();
        board.place(0, 1, Player::X).unwrap();
        board.place(1, 1, Player::O).unwrap();

        let moves = board.available_moves();
        let expected: Vec<Position> = [(0, 0), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1), (2, 2)]
            .into_iter()
            .map(Position::from)
            .collect();
        assert_eq!(moves, expected);
    }

    #[test]
    fn test_render() {
        let mut board = Board::new();
        board.place(0, 0, Player::X).unwrap();
        board.place(1, 1, Player::O).unwrap();

        assert_eq!(board.render(), "X| | \n-+-+-\n |O| \n-+-+-\n | | ");
        assert_eq!(board.to_string(), board.render());
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(Board::new().render(), " | | \n-+-+-\n | | \n-+-+-\n | | ");
    }

    #[test]
    fn test_player_display_and_opponent() {
        assert_eq!(Player::X.to_string(), "X");
        assert_eq!(Player::O.to_string(), "O");
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Cell::O.to_player(), Some(Player::O));
        assert_eq!(Cell::Empty.to_player(), None);
    }
}
